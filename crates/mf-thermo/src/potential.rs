//! Potential temperature.

use crate::error::ThermoResult;
use crate::mixing::smr_kg_per_kg;
use mf_core::constants::{C_TO_K, K_DRY, KAPPA_MOIST_COEFF, REFERENCE_PRESSURE_HPA};
use mf_core::numeric::{ensure_finite, ensure_positive};
use mf_core::units::{Pressure, Temperature, k, reference_pressure, to_degc, to_hpa, to_k};

/// Potential temperature in kelvin, referenced to 1000 mb.
///
/// The Poisson exponent carries the moisture correction
/// `0.2854·(1 − 0.00028·w_s)` with `w_s` the saturation mixing ratio at
/// (p, T) taken in kg/kg, so the correction is tiny.
pub fn potential_temperature(t: Temperature, p: Pressure) -> ThermoResult<Temperature> {
    let t_c = ensure_finite(to_degc(t), "temperature")?;
    let p_hpa = ensure_positive(to_hpa(p), "pressure")?;
    Ok(k(theta_kelvin(t_c, p_hpa)?))
}

pub(crate) fn theta_kelvin(t_c: f64, p_hpa: f64) -> ThermoResult<f64> {
    let w_s = smr_kg_per_kg(p_hpa, t_c)?;
    let exponent = K_DRY * (1.0 - KAPPA_MOIST_COEFF * w_s);
    Ok((t_c + C_TO_K) * (REFERENCE_PRESSURE_HPA / p_hpa).powf(exponent))
}

/// `θ_dry = θ·(p₀/p)^(−k_dry)` with the standard 1000 mb reference.
pub fn dry_potential_temperature(theta: Temperature, p: Pressure) -> ThermoResult<Temperature> {
    dry_potential_temperature_with_reference(theta, p, reference_pressure())
}

/// `θ_dry = θ·(p₀/p)^(−k_dry)`.
///
/// Brings a potential temperature back to the temperature at `p`; returns
/// `theta` unchanged when `p == p0`.
pub fn dry_potential_temperature_with_reference(
    theta: Temperature,
    p: Pressure,
    p0: Pressure,
) -> ThermoResult<Temperature> {
    let theta_k = ensure_finite(to_k(theta), "potential temperature")?;
    let p_hpa = ensure_positive(to_hpa(p), "pressure")?;
    let p0_hpa = ensure_positive(to_hpa(p0), "reference pressure")?;
    Ok(k(theta_dry_kelvin(theta_k, p_hpa, p0_hpa)))
}

pub(crate) fn theta_dry_kelvin(theta_k: f64, p_hpa: f64, p0_hpa: f64) -> f64 {
    theta_k * (p0_hpa / p_hpa).powf(-K_DRY)
}
