//! Constants for rental pricing

pub mod fees;

pub use fees::{
    LATE_FEE_PER_DAY, LOAD_FEE_PER_KG_DAY, LOW_BATTERY_SURCHARGE, MINOR_DAMAGE_FEE,
    START_CHARGE_RATIO, SURCHARGE_CHARGE_RATIO,
};
