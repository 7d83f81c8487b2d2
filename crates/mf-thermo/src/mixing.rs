//! Saturation mixing ratio and lines of constant mixing ratio.

use crate::error::ThermoResult;
use crate::vapor::{svp_hpa, svt_degc};
use mf_core::constants::EPS;
use mf_core::numeric::{ensure_finite, ensure_nonzero};
use mf_core::units::{MixingRatio, Pressure, Temperature, degc, to_degc, to_hpa};

/// Saturation mixing ratio, `w_s = eps·e_s/(p − e_s)`, in kg/kg.
///
/// When `p < e_s(T)` the result is negative; it is returned as-is. An exact
/// `p == e_s(T)` is a zero denominator and fails.
pub fn saturation_mixing_ratio(p: Pressure, t: Temperature) -> ThermoResult<MixingRatio> {
    let p_hpa = ensure_finite(to_hpa(p), "pressure")?;
    let t_c = ensure_finite(to_degc(t), "temperature")?;
    Ok(MixingRatio::from_kg_per_kg(smr_kg_per_kg(p_hpa, t_c)?))
}

pub(crate) fn smr_kg_per_kg(p_hpa: f64, t_c: f64) -> ThermoResult<f64> {
    let e_s = svp_hpa(t_c)?;
    let denom = ensure_nonzero(p_hpa - e_s, "pressure minus saturation vapor pressure")?;
    Ok(EPS * e_s / denom)
}

/// Temperature at which air at pressure `p` is saturated with mixing ratio `w_s`.
///
/// `e_s = p·w_s/(eps + w_s)`, then [`crate::vapor::saturation_vapor_temperature`].
pub fn mixing_ratio_line(p: Pressure, w_s: MixingRatio) -> ThermoResult<Temperature> {
    let p_hpa = ensure_finite(to_hpa(p), "pressure")?;
    let w = ensure_finite(w_s.kg_per_kg(), "mixing ratio")?;
    Ok(degc(mixing_ratio_line_degc(p_hpa, w)?))
}

pub(crate) fn mixing_ratio_line_degc(p_hpa: f64, w_kg_per_kg: f64) -> ThermoResult<f64> {
    svt_degc(vapor_pressure_hpa(p_hpa, w_kg_per_kg)?)
}

/// Partial pressure of water vapor for mixing ratio `w` (kg/kg) at `p`.
pub(crate) fn vapor_pressure_hpa(p_hpa: f64, w_kg_per_kg: f64) -> ThermoResult<f64> {
    let denom = ensure_nonzero(EPS + w_kg_per_kg, "eps plus mixing ratio")?;
    Ok(p_hpa * w_kg_per_kg / denom)
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn increases_with_temperature_below_boiling(
            p in 200.0_f64..1100.0_f64,
            t in -60.0_f64..40.0_f64,
            dt in 0.01_f64..2.0_f64,
        ) {
            // e_s(42 °C) ≈ 82 mb stays well below 200 mb
            let lo = smr_kg_per_kg(p, t).unwrap();
            let hi = smr_kg_per_kg(p, t + dt).unwrap();
            prop_assert!(hi > lo);
        }

        #[test]
        fn decreases_with_pressure(t in -40.0_f64..30.0_f64, p in 300.0_f64..1000.0_f64) {
            let low_p = smr_kg_per_kg(p, t).unwrap();
            let high_p = smr_kg_per_kg(p + 50.0, t).unwrap();
            prop_assert!(high_p < low_p);
        }
    }
}
