//! Infrastructure adapters: clock source and activity log sink

pub mod activity_log;
pub mod clock;

pub use activity_log::ActivityLog;
pub use clock::{Clock, ManualClock, SystemClock};
