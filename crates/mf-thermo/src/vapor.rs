//! Saturation vapor pressure over water and its empirical inverse.

use crate::error::ThermoResult;
use mf_core::constants::{SVP_A, SVP_B_DEGC, SVP_SCALE_HPA, SVT_LN_LIMIT, SVT_OFFSET};
use mf_core::numeric::{ensure_finite, ensure_nonzero, ensure_positive};
use mf_core::units::{Pressure, Temperature, degc, hpa, to_degc, to_hpa};

/// Saturation vapor pressure, `e_s = 6.112·exp(17.67·T/(T + 243.5))`.
///
/// Fit calibrated for T in °C and e_s in mb. Fails at T = -243.5 °C.
pub fn saturation_vapor_pressure(t: Temperature) -> ThermoResult<Pressure> {
    let t_c = ensure_finite(to_degc(t), "temperature")?;
    Ok(hpa(svp_hpa(t_c)?))
}

pub(crate) fn svp_hpa(t_c: f64) -> ThermoResult<f64> {
    let denom = ensure_nonzero(t_c + SVP_B_DEGC, "saturation vapor pressure denominator")?;
    Ok(SVP_SCALE_HPA * (SVP_A * t_c / denom).exp())
}

/// Temperature at which the saturation vapor pressure equals `e_s`.
///
/// Separate fit, `T = (243.5·ln e_s − 440.8)/(19.48 − ln e_s)`; it is only
/// approximately the inverse of [`saturation_vapor_pressure`].
pub fn saturation_vapor_temperature(e_s: Pressure) -> ThermoResult<Temperature> {
    Ok(degc(svt_degc(to_hpa(e_s))?))
}

pub(crate) fn svt_degc(e_s_hpa: f64) -> ThermoResult<f64> {
    let ln_e = ensure_positive(e_s_hpa, "saturation vapor pressure")?.ln();
    let denom = ensure_nonzero(SVT_LN_LIMIT - ln_e, "saturation vapor temperature denominator")?;
    Ok((SVP_B_DEGC * ln_e - SVT_OFFSET) / denom)
}
