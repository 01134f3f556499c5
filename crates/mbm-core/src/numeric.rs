use crate::CoreError;

/// Reject NaN and the infinities; `what` names the offending input.
pub fn ensure_finite(v: f64, what: &'static str) -> Result<f64, CoreError> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(CoreError::NonFinite { what, value: v })
    }
}

/// True when `v` is finite and has no fractional part.
#[inline]
pub fn is_integral(v: f64) -> bool {
    v.is_finite() && v.fract() == 0.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ensure_finite_names_the_input() {
        assert_eq!(ensure_finite(-2.5, "real literal"), Ok(-2.5));
        assert_eq!(
            ensure_finite(f64::NEG_INFINITY, "real literal"),
            Err(CoreError::NonFinite {
                what: "real literal",
                value: f64::NEG_INFINITY,
            })
        );
        assert!(ensure_finite(f64::NAN, "real literal").is_err());
    }

    #[test]
    fn integral_check() {
        assert!(is_integral(12.0));
        assert!(is_integral(-5.0));
        assert!(is_integral(-0.0));
        assert!(!is_integral(2.5));
        assert!(!is_integral(f64::INFINITY));
        assert!(!is_integral(f64::NAN));
    }
}
