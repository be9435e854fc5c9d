//! Small numeric helpers shared by the noise evaluators.

/// Floors `value` to an `i32`.
///
/// Values outside the `i32` range saturate instead of panicking; such
/// coordinates are outside the supported sampling domain anyway.
#[inline]
#[must_use]
pub fn floor(value: f64) -> i32 {
    let truncated = value as i32;
    if value < f64::from(truncated) {
        truncated.saturating_sub(1)
    } else {
        truncated
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn floor_rounds_toward_negative_infinity() {
        assert_eq!(floor(0.0), 0);
        assert_eq!(floor(0.999), 0);
        assert_eq!(floor(1.0), 1);
        assert_eq!(floor(-0.001), -1);
        assert_eq!(floor(-1.0), -1);
        assert_eq!(floor(-1.5), -2);
        assert_eq!(floor(123.456), 123);
    }

    #[test]
    fn floor_saturates_outside_i32() {
        assert_eq!(floor(3e9), i32::MAX);
        assert_eq!(floor(-3e9), i32::MIN);
        assert_eq!(floor(-2_147_483_648.5), i32::MIN);
        assert_eq!(floor(f64::NEG_INFINITY), i32::MIN);
        assert_eq!(floor(-2_147_483_647.5), i32::MIN);
    }

    #[test]
    fn floor_of_nan_is_zero() {
        assert_eq!(floor(f64::NAN), 0);
    }
}
