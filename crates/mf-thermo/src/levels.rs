//! Pressure level generation for diagram lines.
//!
//! Levels run from the bottom (highest pressure) to the top of the column.

use crate::error::{ThermoError, ThermoResult};
use mf_core::units::{Pressure, hpa, to_hpa};
use std::fmt;

/// Spacing of generated levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Spacing {
    /// Uniformly spaced in pressure
    Linear,
    /// Uniformly spaced in ln(p), roughly uniform in height
    Logarithmic,
}

/// Definition of a set of pressure levels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PressureLevels {
    /// Lowest level (highest pressure), mb
    bottom_hpa: f64,
    /// Highest level (lowest pressure), mb
    top_hpa: f64,
    count: usize,
    spacing: Spacing,
}

impl PressureLevels {
    pub fn new(
        bottom: Pressure,
        top: Pressure,
        count: usize,
        spacing: Spacing,
    ) -> ThermoResult<Self> {
        let bottom_hpa = to_hpa(bottom);
        let top_hpa = to_hpa(top);

        if count < 2 {
            return Err(ThermoError::InvalidArg {
                what: "pressure levels need at least 2 points",
            });
        }
        if !(bottom_hpa.is_finite() && top_hpa.is_finite())
            || bottom_hpa <= 0.0
            || top_hpa <= 0.0
        {
            return Err(ThermoError::InvalidArg {
                what: "pressure level bounds must be positive and finite",
            });
        }
        if (bottom_hpa - top_hpa).abs() < 1e-12 {
            return Err(ThermoError::InvalidArg {
                what: "pressure level bounds must differ",
            });
        }
        if bottom_hpa < top_hpa {
            return Err(ThermoError::InvalidArg {
                what: "bottom pressure level must exceed top",
            });
        }

        Ok(Self {
            bottom_hpa,
            top_hpa,
            count,
            spacing,
        })
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn spacing(&self) -> Spacing {
        self.spacing
    }

    /// Generate all levels, bottom first, with exact endpoints.
    pub fn generate(&self) -> Vec<Pressure> {
        let values = match self.spacing {
            Spacing::Linear => self.generate_linear(),
            Spacing::Logarithmic => self.generate_logarithmic(),
        };
        values.into_iter().map(hpa).collect()
    }

    fn generate_linear(&self) -> Vec<f64> {
        let delta = (self.top_hpa - self.bottom_hpa) / (self.count - 1) as f64;
        let mut points: Vec<f64> = (0..self.count)
            .map(|i| self.bottom_hpa + i as f64 * delta)
            .collect();
        points[self.count - 1] = self.top_hpa;
        points
    }

    fn generate_logarithmic(&self) -> Vec<f64> {
        let log_bottom = self.bottom_hpa.ln();
        let log_delta = (self.top_hpa.ln() - log_bottom) / (self.count - 1) as f64;
        let mut points: Vec<f64> = (0..self.count)
            .map(|i| (log_bottom + i as f64 * log_delta).exp())
            .collect();
        points[0] = self.bottom_hpa;
        points[self.count - 1] = self.top_hpa;
        points
    }
}

impl fmt::Display for Spacing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Linear => write!(f, "Linear"),
            Self::Logarithmic => write!(f, "Logarithmic"),
        }
    }
}

impl fmt::Display for PressureLevels {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Levels from {} mb to {} mb ({} points, {})",
            self.bottom_hpa, self.top_hpa, self.count, self.spacing
        )
    }
}
