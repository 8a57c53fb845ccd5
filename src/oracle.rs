//! Printable-ASCII oracle used to recognize a decrypted character

/// Lowest printable ASCII code (space)
pub const PRINTABLE_MIN: i64 = 32;
/// Highest printable ASCII code (tilde)
pub const PRINTABLE_MAX: i64 = 126;

/// True iff `value` is in the printable ASCII range `32..=126`
#[inline]
pub fn is_printable(value: i64) -> bool {
    (PRINTABLE_MIN..=PRINTABLE_MAX).contains(&value)
}

/// Integer part of a coordinate, truncated toward zero
///
/// Non-finite values map to 0 and values outside `i64` saturate.
#[inline]
pub fn truncate(coordinate: f64) -> i64 {
    coordinate as i64
}

/// Character for a truncated coordinate, if it is printable
#[inline]
pub fn printable_char(coordinate: f64) -> Option<char> {
    let value = truncate(coordinate);
    if is_printable(value) {
        // 32..=126 always fits in a u8
        Some(value as u8 as char)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_printable_bounds_inclusive() {
        assert!(!is_printable(31));
        assert!(is_printable(32));
        assert!(is_printable(126));
        assert!(!is_printable(127));
        assert!(!is_printable(-72));
    }

    #[test]
    fn test_truncation_not_rounding() {
        assert_eq!(truncate(72.99), 72);
        assert_eq!(truncate(-0.9), 0);
        assert_eq!(truncate(-31.5), -31);
        assert_eq!(printable_char(72.999), Some('H'));
        assert_eq!(printable_char(31.999), None);
        assert_eq!(printable_char(126.5), Some('~'));
    }

    #[test]
    fn test_non_finite_is_not_printable() {
        assert_eq!(printable_char(f64::NAN), None);
        assert_eq!(printable_char(f64::INFINITY), None);
    }
}
