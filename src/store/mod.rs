//! In-memory stores: fleet registry and rental ledger

pub mod fleet;
pub mod ledger;

pub use fleet::Fleet;
pub use ledger::Ledger;
