//! Integer helpers for sizing grids and allocations

/// Returns the smallest power of two strictly greater than `a`.
///
/// Returns zero when the result does not fit in 64 bits (any `a >= 2^63`).
#[inline]
pub const fn next_power_of_2(mut a: u64) -> u64 {
    a |= a >> 1;
    a |= a >> 2;
    a |= a >> 4;
    a |= a >> 8;
    a |= a >> 16;
    a |= a >> 32;
    a.wrapping_add(1)
}

/// Returns the smallest power of two greater than or equal to `a`.
///
/// Zero maps to zero, not one. Callers use a zero result to mean "nothing to allocate".
#[inline]
pub const fn power_of_2_ceil(a: u64) -> u64 {
    if a == 0 {
        return 0;
    }
    next_power_of_2(a - 1)
}

/// Integer division rounding towards positive infinity.
///
/// # Panics
/// Panics if `b` is zero.
#[inline]
pub const fn ceil_division(a: u64, b: u64) -> u64 {
    a.wrapping_add(b).wrapping_sub(1) / b
}

/// The smallest multiple of `b` that is greater than or equal to `a`.
///
/// # Panics
/// Panics if `b` is zero.
#[inline]
pub const fn next_multiple_of(a: u64, b: u64) -> u64 {
    ceil_division(a, b).wrapping_mul(b)
}

/// [`ceil_division`] that returns `None` for a zero divisor or if `a + b - 1` overflows.
#[inline]
pub const fn checked_ceil_division(a: u64, b: u64) -> Option<u64> {
    if b == 0 {
        return None;
    }
    match a.checked_add(b - 1) {
        Some(sum) => Some(sum / b),
        None => None,
    }
}

/// [`next_multiple_of`] that returns `None` for a zero divisor or on overflow.
#[inline]
pub const fn checked_next_multiple_of(a: u64, b: u64) -> Option<u64> {
    match checked_ceil_division(a, b) {
        Some(quotient) => quotient.checked_mul(b),
        None => None,
    }
}

#[test]
fn test_next_power_of_2() {
    assert_eq!(next_power_of_2(0), 1);
    assert_eq!(next_power_of_2(1), 2);
    assert_eq!(next_power_of_2(5), 8);
    assert_eq!(next_power_of_2(8), 16);
    assert_eq!(next_power_of_2((1 << 62) + 1), 1 << 63);
}

#[test]
fn test_next_power_of_2_overflow_wraps_to_zero() {
    assert_eq!(next_power_of_2(u64::MAX), 0);
    assert_eq!(next_power_of_2(1 << 63), 0);
}

#[test]
fn test_power_of_2_ceil() {
    assert_eq!(power_of_2_ceil(0), 0);
    assert_eq!(power_of_2_ceil(1), 1);
    assert_eq!(power_of_2_ceil(2), 2);
    assert_eq!(power_of_2_ceil(5), 8);
    assert_eq!(power_of_2_ceil(8), 8);
    assert_eq!(power_of_2_ceil(1 << 63), 1 << 63);
    assert_eq!(power_of_2_ceil((1 << 63) + 1), 0);
}

#[test]
fn test_ceil_division() {
    assert_eq!(ceil_division(7, 2), 4);
    assert_eq!(ceil_division(8, 2), 4);
    assert_eq!(ceil_division(0, 3), 0);
    assert_eq!(ceil_division(1, 256), 1);
}

#[test]
fn test_next_multiple_of() {
    assert_eq!(next_multiple_of(7, 4), 8);
    assert_eq!(next_multiple_of(8, 4), 8);
    assert_eq!(next_multiple_of(0, 4), 0);
    assert_eq!(next_multiple_of(1000, 256), 1024);
}

#[test]
fn test_checked_helpers() {
    assert_eq!(checked_ceil_division(7, 0), None);
    assert_eq!(checked_ceil_division(u64::MAX, 2), None);
    assert_eq!(checked_ceil_division(7, 2), Some(4));
    assert_eq!(checked_next_multiple_of(7, 0), None);
    assert_eq!(checked_next_multiple_of(u64::MAX - 1, 1 << 32), None);
    assert_eq!(checked_next_multiple_of(7, 4), Some(8));
}

#[test]
fn test_helpers_are_const() {
    const GROUPS: u64 = ceil_division(1000, 64);
    const BUCKET: u64 = power_of_2_ceil(GROUPS);
    assert_eq!(GROUPS, 16);
    assert_eq!(BUCKET, 16);
}
