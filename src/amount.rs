//! Fixed-point amount helpers shared by the offer and pool pricing math.
//!
//! All amounts are signed 64-bit fixed-point quantities. Intermediate
//! products go through 128 bits and any overflow or degenerate input maps
//! to `None`, which the search layer treats as "skip this edge".

/// Smallest positive constraint of two amounts.
///
/// A non-positive value signals "unconstrained", not "smallest": if `b` is
/// non-positive the constraint from `b` is absent and `a` wins; otherwise
/// the smaller positive value wins.
pub fn positive_min(a: i64, b: i64) -> i64 {
    if b <= 0 {
        return a;
    }
    if b < a || a <= 0 {
        return b;
    }
    a
}

/// `floor(a * n / d)`, or `None` if any input is non-positive except `a == 0`,
/// or if the result does not fit in an `i64`.
pub(crate) fn mul_div_floor(a: i64, n: i64, d: i64) -> Option<i64> {
    if a < 0 || n <= 0 || d <= 0 {
        return None;
    }
    // i64 * i64 cannot overflow i128
    let wide = a as i128 * n as i128;
    i64::try_from(wide / d as i128).ok()
}

/// `ceil(a * n / d)` with the same domain as [mul_div_floor].
pub(crate) fn mul_div_ceil(a: i64, n: i64, d: i64) -> Option<i64> {
    if a < 0 || n <= 0 || d <= 0 {
        return None;
    }
    let wide = a as i128 * n as i128;
    let d = d as i128;
    i64::try_from((wide + d - 1) / d).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positive_min_contract() {
        assert_eq!(positive_min(10, -1), 10);
        assert_eq!(positive_min(10, 3), 3);
        assert_eq!(positive_min(-5, 3), 3);
        assert_eq!(positive_min(-5, -1), -5);
        assert_eq!(positive_min(3, 10), 3);
        assert_eq!(positive_min(0, 7), 7);
        assert_eq!(positive_min(7, 0), 7);
    }

    #[test]
    fn test_mul_div_rounding() {
        assert_eq!(mul_div_floor(10, 1, 3), Some(3));
        assert_eq!(mul_div_ceil(10, 1, 3), Some(4));
        assert_eq!(mul_div_floor(9, 1, 3), Some(3));
        assert_eq!(mul_div_ceil(9, 1, 3), Some(3));
        assert_eq!(mul_div_floor(0, 5, 7), Some(0));
    }

    #[test]
    fn test_mul_div_rejects_degenerate_inputs() {
        assert_eq!(mul_div_floor(-1, 1, 1), None);
        assert_eq!(mul_div_floor(1, 0, 1), None);
        assert_eq!(mul_div_floor(1, 1, 0), None);
        assert_eq!(mul_div_ceil(1, -1, 1), None);
    }

    #[test]
    fn test_mul_div_overflow_is_detected() {
        // i64::MAX * 2 / 1 does not fit
        assert_eq!(mul_div_floor(i64::MAX, 2, 1), None);
        assert_eq!(mul_div_ceil(i64::MAX, 2, 1), None);
        // but the same product divided back down does
        assert_eq!(mul_div_floor(i64::MAX, 2, 2), Some(i64::MAX));
    }
}
