//! mf-core: stable foundation for moistflow.
//!
//! Contains:
//! - units (uom SI types, constructors, humidity newtypes)
//! - numeric (Real + tolerances + float/domain guards)
//! - constants (physical constants and Bolton fit coefficients)
//! - error (shared error types)

pub mod constants;
pub mod error;
pub mod numeric;
pub mod units;

// Re-exports: nice ergonomics for downstream crates
pub use error::{MfError, MfResult};
pub use numeric::*;
pub use units::*;
