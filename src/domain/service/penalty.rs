//! Late-return penalty computation

use chrono::{DateTime, Utc};

use crate::constants::LATE_FEE_PER_DAY;
use crate::domain::model::RentalRecord;

/// Charged late days for a return at `now`.
///
/// Zero when the return is on time. Once the due time has passed, every
/// started 24-hour block counts as a full day, so a single overdue hour
/// already charges one day.
pub fn late_days(record: &RentalRecord, now: DateTime<Utc>) -> i64 {
    if !record.is_overdue(now) {
        return 0;
    }
    record.hours_overdue(now) / 24 + 1
}

/// Late penalty for a return at `now`: charged late days × late fee
pub fn late_penalty(record: &RentalRecord, now: DateTime<Utc>) -> f64 {
    late_days(record, now) as f64 * LATE_FEE_PER_DAY
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn record_due(due_at: DateTime<Utc>) -> RentalRecord {
        RentalRecord::new("memberC", due_at, None)
    }

    #[test]
    fn test_on_time_no_penalty() {
        let due = Utc::now();
        let record = record_due(due);
        assert_eq!(late_days(&record, due), 0);
        assert_eq!(late_penalty(&record, due - Duration::hours(3)), 0.0);
    }

    #[test]
    fn test_single_overdue_hour_charges_one_day() {
        let due = Utc::now();
        let record = record_due(due);
        assert_eq!(late_days(&record, due + Duration::hours(1)), 1);
        assert_eq!(late_penalty(&record, due + Duration::hours(1)), 20.0);
    }

    #[test]
    fn test_late_days_per_24h_block() {
        let due = Utc::now();
        let record = record_due(due);
        // 23h -> 1 day, 24h -> 2 days, 49h -> 3 days
        assert_eq!(late_days(&record, due + Duration::hours(23)), 1);
        assert_eq!(late_days(&record, due + Duration::hours(24)), 2);
        assert_eq!(late_days(&record, due + Duration::hours(49)), 3);
        assert_eq!(late_penalty(&record, due + Duration::hours(49)), 60.0);
    }
}
