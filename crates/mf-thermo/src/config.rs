//! Evaluation settings.
//!
//! Settings can be built in code or loaded from a YAML document:
//!
//! ```yaml
//! reference_pressure_hpa: 1000.0
//! parallel_threshold: 4096
//! solve:
//!   max_iterations: 200
//!   tolerance_k: 1.0e-6
//! ```

use crate::error::{ThermoError, ThermoResult};
use mf_core::units::{Pressure, hpa};
use serde::{Deserialize, Serialize};

/// Root finding settings for pseudo-adiabats.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolveConfig {
    /// Maximum bisection steps per pressure level
    pub max_iterations: usize,
    /// Bracket width at which a level counts as converged (K)
    pub tolerance_k: f64,
}

impl Default for SolveConfig {
    fn default() -> Self {
        Self {
            max_iterations: 200,
            tolerance_k: 1e-6,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThermoConfig {
    /// Reference pressure p₀ for potential temperatures (mb)
    pub reference_pressure_hpa: f64,
    /// Fields with at least this many elements are evaluated with rayon
    pub parallel_threshold: usize,
    pub solve: SolveConfig,
}

impl Default for ThermoConfig {
    fn default() -> Self {
        Self {
            reference_pressure_hpa: mf_core::constants::REFERENCE_PRESSURE_HPA,
            parallel_threshold: 4096,
            solve: SolveConfig::default(),
        }
    }
}

impl ThermoConfig {
    pub fn from_yaml_str(text: &str) -> ThermoResult<Self> {
        let config: ThermoConfig = serde_yaml::from_str(text).map_err(|e| ThermoError::Config {
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_yaml_string(&self) -> ThermoResult<String> {
        serde_yaml::to_string(self).map_err(|e| ThermoError::Config {
            message: e.to_string(),
        })
    }

    pub fn validate(&self) -> ThermoResult<()> {
        if !(self.reference_pressure_hpa.is_finite() && self.reference_pressure_hpa > 0.0) {
            return Err(ThermoError::Config {
                message: format!(
                    "reference_pressure_hpa must be positive, got {}",
                    self.reference_pressure_hpa
                ),
            });
        }
        if self.solve.max_iterations == 0 {
            return Err(ThermoError::Config {
                message: "solve.max_iterations must be at least 1".to_string(),
            });
        }
        if !(self.solve.tolerance_k.is_finite() && self.solve.tolerance_k > 0.0) {
            return Err(ThermoError::Config {
                message: format!(
                    "solve.tolerance_k must be positive, got {}",
                    self.solve.tolerance_k
                ),
            });
        }
        Ok(())
    }

    pub fn reference_pressure(&self) -> Pressure {
        hpa(self.reference_pressure_hpa)
    }
}
