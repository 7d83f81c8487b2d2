use crate::MfError;

/// Floating point type used throughout system
pub type Real = f64;

/// One tolerance for everything
#[derive(Clone, Copy, Debug)]
pub struct Tolerances {
    pub abs: Real,
    pub rel: Real,
}

impl Default for Tolerances {
    fn default() -> Self {
        Self {
            abs: 1e-12,
            rel: 1e-9,
        }
    }
}

pub fn nearly_equal(a: Real, b: Real, tol: Tolerances) -> bool {
    let diff = (a - b).abs();
    if diff <= tol.abs {
        return true;
    }
    diff <= tol.rel * a.abs().max(b.abs())
}

pub fn ensure_finite(v: Real, what: &'static str) -> Result<Real, MfError> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(MfError::NonFinite { what, value: v })
    }
}

/// Strictly positive: logarithm arguments and bases of fractional powers.
pub fn ensure_positive(v: Real, what: &'static str) -> Result<Real, MfError> {
    let v = ensure_finite(v, what)?;
    if v > 0.0 {
        Ok(v)
    } else {
        Err(MfError::Domain { what, value: v })
    }
}

/// Denominators. Only an exact zero is rejected; tiny values divide through.
pub fn ensure_nonzero(v: Real, what: &'static str) -> Result<Real, MfError> {
    if v == 0.0 {
        Err(MfError::Domain { what, value: v })
    } else {
        Ok(v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nearly_equal_basic() {
        let tol = Tolerances {
            abs: 1e-12,
            rel: 1e-9,
        };
        assert!(nearly_equal(1.0, 1.0 + 1e-12, tol));
        assert!(nearly_equal(0.0, 1e-13, tol));
        assert!(!nearly_equal(1.0, 1.0 + 1e-6, tol));
    }

    #[test]
    fn ensure_finite_detects_nan() {
        let err = ensure_finite(Real::NAN, "test").unwrap_err();
        let msg = format!("{err}");
        assert!(msg.contains("Non-finite"));
    }

    #[test]
    fn ensure_positive_rejects_zero_and_negative() {
        assert!(matches!(
            ensure_positive(0.0, "p"),
            Err(MfError::Domain { what: "p", .. })
        ));
        assert!(ensure_positive(-3.0, "p").is_err());
        assert!(matches!(
            ensure_positive(Real::INFINITY, "p"),
            Err(MfError::NonFinite { .. })
        ));
        assert_eq!(ensure_positive(2.5, "p").unwrap(), 2.5);
    }

    #[test]
    fn ensure_nonzero_only_rejects_exact_zero() {
        assert!(ensure_nonzero(0.0, "denominator").is_err());
        assert!(ensure_nonzero(-0.0, "denominator").is_err());
        assert_eq!(ensure_nonzero(1e-300, "denominator").unwrap(), 1e-300);
    }
}
