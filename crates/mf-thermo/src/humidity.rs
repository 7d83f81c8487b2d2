//! Relative humidity and the temperature at the lifting condensation level.

use crate::error::ThermoResult;
use crate::mixing::vapor_pressure_hpa;
use crate::vapor::svp_hpa;
use mf_core::constants::{LCL_OFFSET_K, LCL_RH_SCALE};
use mf_core::numeric::{ensure_finite, ensure_nonzero, ensure_positive};
use mf_core::units::{
    MixingRatio, Pressure, RelativeHumidity, Temperature, k, to_degc, to_hpa, to_k,
};

/// Relative humidity in percent of air with mixing ratio `w` at (T, p).
///
/// Supersaturated input yields values above 100 %.
pub fn relative_humidity(
    t: Temperature,
    p: Pressure,
    w: MixingRatio,
) -> ThermoResult<RelativeHumidity> {
    let t_c = ensure_finite(to_degc(t), "temperature")?;
    let p_hpa = ensure_finite(to_hpa(p), "pressure")?;
    let w = ensure_finite(w.kg_per_kg(), "mixing ratio")?;
    Ok(RelativeHumidity::from_percent(rh_percent(t_c, p_hpa, w)?))
}

pub(crate) fn rh_percent(t_c: f64, p_hpa: f64, w_kg_per_kg: f64) -> ThermoResult<f64> {
    let e = vapor_pressure_hpa(p_hpa, w_kg_per_kg)?;
    let e_s = svp_hpa(t_c)?;
    Ok(100.0 * e / e_s)
}

/// Temperature at the lifting condensation level (Bolton eq. 22).
///
/// `T_LCL = 55 + 1/(1/(T − 55) − ln(RH/100)/2840)`, fit calibrated for T in
/// kelvin. RH must be positive; values above 100 % are accepted.
pub fn lcl_temperature(t: Temperature, rh: RelativeHumidity) -> ThermoResult<Temperature> {
    let t_k = ensure_finite(to_k(t), "temperature")?;
    Ok(k(lcl_kelvin(t_k, rh.percent())?))
}

pub(crate) fn lcl_kelvin(t_k: f64, rh_pct: f64) -> ThermoResult<f64> {
    let rh_pct = ensure_positive(rh_pct, "relative humidity")?;
    let dt = ensure_nonzero(t_k - LCL_OFFSET_K, "temperature minus 55 K")?;
    let inner = ensure_nonzero(
        1.0 / dt - (rh_pct / 100.0).ln() / LCL_RH_SCALE,
        "LCL denominator",
    )?;
    Ok(LCL_OFFSET_K + 1.0 / inner)
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::mixing::smr_kg_per_kg;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn saturation_mixing_ratio_gives_full_humidity(
            t in -40.0_f64..40.0_f64,
            p in 300.0_f64..1050.0_f64,
        ) {
            let w_s = smr_kg_per_kg(p, t).unwrap();
            let rh = rh_percent(t, p, w_s).unwrap();
            prop_assert!((rh - 100.0).abs() < 1e-6);
        }

        #[test]
        fn lcl_never_warmer_than_subsaturated_parcel(
            t_k in 230.0_f64..320.0_f64,
            rh in 1.0_f64..100.0_f64,
        ) {
            let t_lcl = lcl_kelvin(t_k, rh).unwrap();
            prop_assert!(t_lcl <= t_k + 1e-9);
        }
    }
}
