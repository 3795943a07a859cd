//! Quota percentage helpers.

/// Percentage of `capacity_bytes` used, rounded half-up and clamped to `0..=100`.
///
/// # Panics
///
/// Panics if `capacity_bytes` is zero. The capacity comes from validated
/// configuration, so a zero here is a programming error.
pub fn usage_percentage(total_bytes: u64, capacity_bytes: u64) -> u8 {
    assert!(capacity_bytes > 0, "storage capacity must be greater than zero");

    let scaled = u128::from(total_bytes) * 100;
    let capacity = u128::from(capacity_bytes);
    let rounded = (scaled + capacity / 2) / capacity;

    rounded.min(100) as u8
}

/// Unrounded percentage used, clamped to `0.0..=100.0`.
///
/// # Panics
///
/// Panics if `capacity_bytes` is zero.
pub fn usage_percentage_exact(total_bytes: u64, capacity_bytes: u64) -> f64 {
    assert!(capacity_bytes > 0, "storage capacity must be greater than zero");

    (total_bytes as f64 / capacity_bytes as f64 * 100.0).clamp(0.0, 100.0)
}

/// Bytes left before the quota is reached.
pub fn remaining_bytes(total_bytes: u64, capacity_bytes: u64) -> u64 {
    capacity_bytes.saturating_sub(total_bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    const CAPACITY: u64 = 128 * 1024 * 1024 * 1024;

    #[test]
    fn test_bounds() {
        assert_eq!(usage_percentage(0, CAPACITY), 0);
        assert_eq!(usage_percentage(CAPACITY, CAPACITY), 100);
        assert_eq!(usage_percentage(2 * CAPACITY, CAPACITY), 100);
        assert_eq!(usage_percentage(u64::MAX, 1), 100);
    }

    #[test]
    fn test_rounding_half_up() {
        assert_eq!(usage_percentage(5, 1000), 1);
        assert_eq!(usage_percentage(4, 1000), 0);
        assert_eq!(usage_percentage(645, 1000), 65);
        assert_eq!(usage_percentage(1, 3), 33);
        assert_eq!(usage_percentage(2, 3), 67);
    }

    #[test]
    #[should_panic(expected = "capacity must be greater than zero")]
    fn test_zero_capacity_panics() {
        usage_percentage(10, 0);
    }

    #[test]
    fn test_exact_and_remaining() {
        assert!((usage_percentage_exact(1, 8) - 12.5).abs() < f64::EPSILON);
        assert_eq!(usage_percentage_exact(3 * CAPACITY, CAPACITY), 100.0);
        assert_eq!(remaining_bytes(10, 100), 90);
        assert_eq!(remaining_bytes(200, 100), 0);
    }
}
