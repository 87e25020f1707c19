//! Active-rental metadata

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Metadata for one active rental, keyed by vehicle id in the ledger.
///
/// Created when a rental succeeds; destroyed when the corresponding return
/// succeeds or terminates through the severe-damage path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RentalRecord {
    /// Renter identifier
    pub renter_id: String,
    /// Due time: rental creation time + requested days
    pub due_at: DateTime<Utc>,
    /// Load committed at rental time, trucks only. Needed to recompute
    /// cost symmetrically at return.
    #[serde(default)]
    pub load_kg: Option<f64>,
}

impl RentalRecord {
    pub fn new(renter_id: &str, due_at: DateTime<Utc>, load_kg: Option<f64>) -> Self {
        Self {
            renter_id: renter_id.to_string(),
            due_at,
            load_kg,
        }
    }

    /// Whether `now` is past the due time
    pub fn is_overdue(&self, now: DateTime<Utc>) -> bool {
        now > self.due_at
    }

    /// Whole hours elapsed past the due time, zero if not overdue
    pub fn hours_overdue(&self, now: DateTime<Utc>) -> i64 {
        (now - self.due_at).num_hours().max(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_overdue_detection() {
        let due = Utc::now();
        let record = RentalRecord::new("memberA", due, None);

        assert!(!record.is_overdue(due));
        assert!(record.is_overdue(due + Duration::hours(1)));
        assert_eq!(record.hours_overdue(due - Duration::hours(5)), 0);
        assert_eq!(record.hours_overdue(due + Duration::hours(49)), 49);
    }
}
