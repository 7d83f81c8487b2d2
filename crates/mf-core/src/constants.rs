//! Physical constants and the empirical coefficients of Bolton (1980).
//!
//! Every fit coefficient is calibrated to a specific unit (°C, K, mb, kg/kg
//! or g/kg); the unit is noted next to each group.

/// Celsius to kelvin offset.
pub const C_TO_K: f64 = 273.15;

/// Specific heat of dry air at constant pressure, J/(kg·K).
pub const CP_DRY: f64 = 1005.7;

/// Specific heat of dry air at constant volume, J/(kg·K).
pub const CV_DRY: f64 = 718.66;

/// Specific gas constant of dry air, J/(kg·K).
pub const R_DRY: f64 = CP_DRY - CV_DRY;

/// Ratio of the gas constants of dry air and water vapor.
pub const EPS: f64 = 0.6220;

/// Poisson constant for dry air.
pub const K_DRY: f64 = 0.2854;

/// Default reference pressure for potential temperatures, mb.
pub const REFERENCE_PRESSURE_HPA: f64 = 1000.0;

/// Poisson constant as implied by the heat capacities, `R_d / c_p`.
///
/// Evaluates to ~0.2854, the rounded value used by the fits.
pub fn kappa_from_heat_capacities() -> f64 {
    R_DRY / CP_DRY
}

// Saturation vapor pressure over water (T in °C, e_s in mb).
pub const SVP_SCALE_HPA: f64 = 6.112;
pub const SVP_A: f64 = 17.67;
pub const SVP_B_DEGC: f64 = 243.5;

// Inverse fit (e_s in mb, T in °C).
pub const SVT_OFFSET: f64 = 440.8;
pub const SVT_LN_LIMIT: f64 = 19.48;

// LCL temperature (T in K, RH in %).
pub const LCL_OFFSET_K: f64 = 55.0;
pub const LCL_RH_SCALE: f64 = 2840.0;

// Moisture correction of the Poisson exponent. Applied to w_s in kg/kg for
// potential temperature and to w in g/kg in Bolton eq. 43.
pub const KAPPA_MOIST_COEFF: f64 = 0.00028;

// Bolton eq. 43 moisture term (T_LCL in K, w in g/kg).
pub const THETA_EP_A: f64 = 3.376;
pub const THETA_EP_B: f64 = 0.00254;
pub const THETA_EP_C: f64 = 0.00081;
