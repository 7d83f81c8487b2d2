//! Background lines of a thermodynamic diagram.
//!
//! Each line is a temperature per pressure level: mixing ratio isopleths,
//! dry adiabats (constant θ) and pseudo-adiabats (constant saturated θ_ep).
//! Only the numbers are produced; drawing is up to the caller.

use crate::config::{SolveConfig, ThermoConfig};
use crate::equivalent::saturated_theta_ep_kelvin;
use crate::error::{ThermoError, ThermoResult};
use crate::field::{FieldEvaluator, Operand};
use crate::levels::PressureLevels;
use crate::vapor::svt_degc;
use mf_core::numeric::{ensure_finite, ensure_positive};
use mf_core::units::{MixingRatio, Pressure, Temperature, degc, to_hpa, to_k};
use tracing::warn;

/// Coldest temperature searched for a pseudo-adiabat, °C.
const PSEUDO_ADIABAT_MIN_DEGC: f64 = -90.0;

/// One diagram line, bottom level first.
#[derive(Debug, Clone, PartialEq)]
pub struct DiagramLine {
    pub pressure: Vec<Pressure>,
    pub temperature: Vec<Temperature>,
}

impl DiagramLine {
    pub fn len(&self) -> usize {
        self.pressure.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pressure.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Pressure, Temperature)> + '_ {
        self.pressure.iter().copied().zip(self.temperature.iter().copied())
    }
}

/// Temperatures along a line of constant saturation mixing ratio.
pub fn mixing_ratio_isopleth(
    w_s: MixingRatio,
    levels: &PressureLevels,
    config: &ThermoConfig,
) -> ThermoResult<DiagramLine> {
    let pressure = levels.generate();
    let temperature =
        FieldEvaluator::new(*config).mixing_ratio_line(&pressure, Operand::Uniform(w_s))?;
    Ok(DiagramLine {
        pressure,
        temperature,
    })
}

/// Temperatures along a line of constant potential temperature.
pub fn dry_adiabat(
    theta: Temperature,
    levels: &PressureLevels,
    config: &ThermoConfig,
) -> ThermoResult<DiagramLine> {
    let pressure = levels.generate();
    let temperature =
        FieldEvaluator::new(*config).dry_potential_temperature(Operand::Uniform(theta), &pressure)?;
    Ok(DiagramLine {
        pressure,
        temperature,
    })
}

/// Temperatures along a line of constant saturated θ_ep.
pub fn pseudo_adiabat(
    theta_ep: Temperature,
    levels: &PressureLevels,
    config: &ThermoConfig,
) -> ThermoResult<DiagramLine> {
    let pressure = levels.generate();
    let p0 = config.reference_pressure();
    let temperature = FieldEvaluator::new(*config).map(Operand::Values(&pressure), |p| {
        saturated_temperature_for_theta_ep(theta_ep, p, p0, &config.solve).inspect_err(|e| {
            warn!(p_hpa = to_hpa(p), error = %e, "pseudo-adiabat level failed");
        })
    })?;
    Ok(DiagramLine {
        pressure,
        temperature,
    })
}

/// Temperature of saturated air at `p` whose θ_ep (referenced to `p0`) is `theta_ep`.
///
/// Bisection between -90 °C and the temperature at which the saturation
/// vapor pressure reaches a quarter of `p`.
pub fn saturated_temperature_for_theta_ep(
    theta_ep: Temperature,
    p: Pressure,
    p0: Pressure,
    solve: &SolveConfig,
) -> ThermoResult<Temperature> {
    let target = ensure_positive(to_k(theta_ep), "pseudo-equivalent potential temperature")?;
    let p_hpa = ensure_positive(to_hpa(p), "pressure")?;
    let p0_hpa = ensure_positive(to_hpa(p0), "reference pressure")?;

    let residual = |t_c: f64| -> ThermoResult<f64> {
        Ok(saturated_theta_ep_kelvin(t_c, p_hpa, p0_hpa)? - target)
    };

    let mut lo = PSEUDO_ADIABAT_MIN_DEGC;
    let mut hi = ensure_finite(svt_degc(p_hpa / 4.0)?, "pseudo-adiabat bracket")?;
    if hi <= lo {
        return Err(ThermoError::NotBracketed {
            what: "pseudo-adiabat",
            target,
        });
    }

    let r_lo = residual(lo)?;
    let r_hi = residual(hi)?;
    if r_lo > 0.0 || r_hi < 0.0 {
        return Err(ThermoError::NotBracketed {
            what: "pseudo-adiabat",
            target,
        });
    }

    for _ in 0..solve.max_iterations {
        let mid = 0.5 * (lo + hi);
        if hi - lo < solve.tolerance_k {
            return Ok(degc(mid));
        }
        if residual(mid)? < 0.0 {
            lo = mid;
        } else {
            hi = mid;
        }
    }

    Err(ThermoError::ConvergenceFailed {
        what: "pseudo-adiabat bisection",
    })
}
