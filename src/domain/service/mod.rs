//! Domain services
//!
//! Pure business rules that sit outside any single model type.

pub mod damage;
pub mod penalty;

pub use damage::{assess, DamageSeverity};
pub use penalty::{late_days, late_penalty};
