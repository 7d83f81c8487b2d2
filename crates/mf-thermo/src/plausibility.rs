//! Flagging of physically implausible results.
//!
//! The formulas never reject a finite result for being unphysical: a
//! negative mixing ratio or a supersaturated humidity is returned as-is.
//! Callers that want to flag such values classify them here.

use mf_core::units::{MixingRatio, RelativeHumidity, Temperature, to_k};
use std::fmt;
use tracing::debug;

/// Why a value is physically implausible.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Implausibility {
    /// NaN or infinite value produced by IEEE arithmetic.
    NonFinite,
    /// Negative mixing ratio or humidity.
    Negative,
    /// Relative humidity above 100 %.
    Supersaturated,
    /// Absolute temperature at or below 0 K.
    BelowAbsoluteZero,
}

impl fmt::Display for Implausibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonFinite => write!(f, "non-finite"),
            Self::Negative => write!(f, "negative"),
            Self::Supersaturated => write!(f, "supersaturated"),
            Self::BelowAbsoluteZero => write!(f, "at or below absolute zero"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Plausibility {
    Plausible,
    Implausible(Implausibility),
}

impl Plausibility {
    pub fn is_plausible(self) -> bool {
        matches!(self, Plausibility::Plausible)
    }
}

fn flag(what: &'static str, value: f64, reason: Implausibility) -> Plausibility {
    debug!(what, value, %reason, "implausible value");
    Plausibility::Implausible(reason)
}

pub fn assess_mixing_ratio(w: MixingRatio) -> Plausibility {
    let v = w.kg_per_kg();
    if !v.is_finite() {
        flag("mixing ratio", v, Implausibility::NonFinite)
    } else if v < 0.0 {
        flag("mixing ratio", v, Implausibility::Negative)
    } else {
        Plausibility::Plausible
    }
}

pub fn assess_relative_humidity(rh: RelativeHumidity) -> Plausibility {
    let v = rh.percent();
    if !v.is_finite() {
        flag("relative humidity", v, Implausibility::NonFinite)
    } else if v < 0.0 {
        flag("relative humidity", v, Implausibility::Negative)
    } else if v > 100.0 {
        flag("relative humidity", v, Implausibility::Supersaturated)
    } else {
        Plausibility::Plausible
    }
}

pub fn assess_temperature(t: Temperature) -> Plausibility {
    let v = to_k(t);
    if !v.is_finite() {
        flag("temperature", v, Implausibility::NonFinite)
    } else if v <= 0.0 {
        flag("temperature", v, Implausibility::BelowAbsoluteZero)
    } else {
        Plausibility::Plausible
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mixing::saturation_mixing_ratio;
    use mf_core::units::{degc, k, mb};

    #[test]
    fn negative_mixing_ratio_from_low_pressure_is_flagged() {
        let w = saturation_mixing_ratio(mb(100.0), degc(60.0)).unwrap();
        assert_eq!(
            assess_mixing_ratio(w),
            Plausibility::Implausible(Implausibility::Negative)
        );
    }

    #[test]
    fn ordinary_values_are_plausible() {
        assert!(assess_mixing_ratio(MixingRatio::from_g_per_kg(8.0)).is_plausible());
        assert!(assess_relative_humidity(RelativeHumidity::from_percent(99.5)).is_plausible());
        assert!(assess_temperature(degc(-60.0)).is_plausible());
    }

    #[test]
    fn humidity_classes() {
        assert_eq!(
            assess_relative_humidity(RelativeHumidity::from_percent(130.0)),
            Plausibility::Implausible(Implausibility::Supersaturated)
        );
        assert_eq!(
            assess_relative_humidity(RelativeHumidity::from_percent(-1.0)),
            Plausibility::Implausible(Implausibility::Negative)
        );
        assert_eq!(
            assess_relative_humidity(RelativeHumidity::from_percent(f64::NAN)),
            Plausibility::Implausible(Implausibility::NonFinite)
        );
    }

    #[test]
    fn absolute_zero_is_flagged() {
        assert_eq!(
            assess_temperature(k(0.0)),
            Plausibility::Implausible(Implausibility::BelowAbsoluteZero)
        );
    }
}
