//! Damage severity assessment on return

use crate::domain::model::VehicleId;

/// Outcome of a damage report
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DamageSeverity {
    /// Flat fee is added to the return penalty; the return completes
    Minor,
    /// The vehicle is released but the return is reported as failed
    Severe,
}

/// Assess damage severity for a vehicle.
///
/// Deterministic stand-in keyed on id parity (even → severe, odd → minor)
/// until a real damage-assessment input replaces it.
pub fn assess(id: VehicleId) -> DamageSeverity {
    if id % 2 == 0 {
        DamageSeverity::Severe
    } else {
        DamageSeverity::Minor
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_even_id_is_severe() {
        assert_eq!(assess(2), DamageSeverity::Severe);
        assert_eq!(assess(0), DamageSeverity::Severe);
    }

    #[test]
    fn test_odd_id_is_minor() {
        assert_eq!(assess(1), DamageSeverity::Minor);
        assert_eq!(assess(7), DamageSeverity::Minor);
    }
}
