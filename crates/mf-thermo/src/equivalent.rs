//! Pseudo-equivalent potential temperature (Bolton 1980, eq. 43).
//!
//! The empirical constants of eq. 43 are calibrated for the mixing ratio in
//! g/kg, while the relative humidity feeding the LCL fit needs kg/kg. Both
//! read-outs come from the same [`MixingRatio`], never from a hand-scaled
//! number.

use crate::error::ThermoResult;
use crate::humidity::{lcl_kelvin, rh_percent};
use crate::mixing::smr_kg_per_kg;
use mf_core::constants::{C_TO_K, K_DRY, KAPPA_MOIST_COEFF, THETA_EP_A, THETA_EP_B, THETA_EP_C};
use mf_core::numeric::{ensure_finite, ensure_nonzero, ensure_positive};
use mf_core::units::{MixingRatio, Pressure, Temperature, k, reference_pressure, to_degc, to_hpa};
use tracing::trace;

/// θ_ep of air with mixing ratio `w` at (T, p), referenced to 1000 mb.
pub fn pseudo_equivalent_potential_temperature(
    t: Temperature,
    p: Pressure,
    w: MixingRatio,
) -> ThermoResult<Temperature> {
    pseudo_equivalent_potential_temperature_with_reference(t, p, w, reference_pressure())
}

/// θ_ep of air with mixing ratio `w` at (T, p), referenced to `p0`.
///
/// Fails for zero humidity (the LCL fit takes `ln RH`), non-positive
/// pressures and a zero LCL temperature.
pub fn pseudo_equivalent_potential_temperature_with_reference(
    t: Temperature,
    p: Pressure,
    w: MixingRatio,
    p0: Pressure,
) -> ThermoResult<Temperature> {
    let t_c = ensure_finite(to_degc(t), "temperature")?;
    let p_hpa = ensure_positive(to_hpa(p), "pressure")?;
    let p0_hpa = ensure_positive(to_hpa(p0), "reference pressure")?;
    let w_kg = ensure_finite(w.kg_per_kg(), "mixing ratio")?;
    Ok(k(theta_ep_kelvin(t_c, p_hpa, w_kg, w.g_per_kg(), p0_hpa)?))
}

pub(crate) fn theta_ep_kelvin(
    t_c: f64,
    p_hpa: f64,
    w_kg_per_kg: f64,
    w_g_per_kg: f64,
    p0_hpa: f64,
) -> ThermoResult<f64> {
    let t_k = t_c + C_TO_K;
    let rh = rh_percent(t_c, p_hpa, w_kg_per_kg)?;
    let t_lcl = ensure_nonzero(lcl_kelvin(t_k, rh)?, "LCL temperature")?;

    let a = t_k * (p0_hpa / p_hpa).powf(K_DRY * (1.0 - KAPPA_MOIST_COEFF * w_g_per_kg));
    let b = ((THETA_EP_A / t_lcl - THETA_EP_B) * w_g_per_kg * (1.0 + THETA_EP_C * w_g_per_kg))
        .exp();
    Ok(a * b)
}

/// θ_ep of saturated air at (T, p), referenced to 1000 mb.
pub fn saturated_pseudo_equivalent_potential_temperature(
    t: Temperature,
    p: Pressure,
) -> ThermoResult<Temperature> {
    saturated_pseudo_equivalent_potential_temperature_with_reference(t, p, reference_pressure())
}

/// θ_ep of saturated air at (T, p), referenced to `p0`.
///
/// Uses the saturation mixing ratio at (p, T) as the humidity; no separate
/// measurement is needed.
pub fn saturated_pseudo_equivalent_potential_temperature_with_reference(
    t: Temperature,
    p: Pressure,
    p0: Pressure,
) -> ThermoResult<Temperature> {
    let t_c = ensure_finite(to_degc(t), "temperature")?;
    let p_hpa = ensure_positive(to_hpa(p), "pressure")?;
    let p0_hpa = ensure_positive(to_hpa(p0), "reference pressure")?;
    Ok(k(saturated_theta_ep_kelvin(t_c, p_hpa, p0_hpa)?))
}

pub(crate) fn saturated_theta_ep_kelvin(t_c: f64, p_hpa: f64, p0_hpa: f64) -> ThermoResult<f64> {
    let w_s = MixingRatio::from_kg_per_kg(smr_kg_per_kg(p_hpa, t_c)?);
    let theta_ep = theta_ep_kelvin(t_c, p_hpa, w_s.kg_per_kg(), w_s.g_per_kg(), p0_hpa)?;
    trace!(
        t_c,
        p_hpa,
        w_s_g_per_kg = w_s.g_per_kg(),
        theta_ep,
        "saturated theta_ep"
    );
    Ok(theta_ep)
}
