//! mf-thermo: moist-air thermodynamics after Bolton (1980).
//!
//! Provides, in dependency order:
//! - Saturation vapor pressure and its empirical inverse
//! - Saturation mixing ratio and mixing ratio lines
//! - Relative humidity and LCL temperature
//! - Potential and dry potential temperature
//! - Pseudo-equivalent potential temperature (Bolton eq. 43), plain and saturated
//!
//! plus element-wise field evaluation, plausibility flagging and the
//! background lines of a thermodynamic diagram.
//!
//! # Units
//!
//! Inputs and outputs are `uom` quantities and the [`MixingRatio`] /
//! [`RelativeHumidity`] newtypes from `mf-core`. Each fit reads its inputs in
//! the unit it was calibrated for (°C, K, mb, kg/kg or g/kg), so callers
//! never scale values by hand.
//!
//! # Example
//!
//! ```
//! use mf_core::units::{MixingRatio, degc, mb, to_k};
//! use mf_thermo::{pseudo_equivalent_potential_temperature, relative_humidity};
//!
//! let t = degc(25.0);
//! let p = mb(1000.0);
//! let w = MixingRatio::from_g_per_kg(12.0);
//!
//! let rh = relative_humidity(t, p, w).unwrap();
//! assert!((rh.percent() - 59.8).abs() < 0.1);
//!
//! let theta_ep = pseudo_equivalent_potential_temperature(t, p, w).unwrap();
//! assert!(to_k(theta_ep) > 330.0);
//! ```

pub mod adiabats;
pub mod config;
pub mod equivalent;
pub mod error;
pub mod field;
pub mod humidity;
pub mod levels;
pub mod mixing;
pub mod plausibility;
pub mod potential;
pub mod vapor;

// Re-exports for ergonomics
pub use adiabats::{
    DiagramLine, dry_adiabat, mixing_ratio_isopleth, pseudo_adiabat,
    saturated_temperature_for_theta_ep,
};
pub use config::{SolveConfig, ThermoConfig};
pub use equivalent::{
    pseudo_equivalent_potential_temperature,
    pseudo_equivalent_potential_temperature_with_reference,
    saturated_pseudo_equivalent_potential_temperature,
    saturated_pseudo_equivalent_potential_temperature_with_reference,
};
pub use error::{ThermoError, ThermoResult};
pub use field::{FieldEvaluator, Operand, broadcast_len, saturated_theta_ep_field};
pub use humidity::{lcl_temperature, relative_humidity};
pub use levels::{PressureLevels, Spacing};
pub use mf_core::units::{MixingRatio, RelativeHumidity};
pub use mixing::{mixing_ratio_line, saturation_mixing_ratio};
pub use plausibility::{
    Implausibility, Plausibility, assess_mixing_ratio, assess_relative_humidity,
    assess_temperature,
};
pub use potential::{
    dry_potential_temperature, dry_potential_temperature_with_reference, potential_temperature,
};
pub use vapor::{saturation_vapor_pressure, saturation_vapor_temperature};
