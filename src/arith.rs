//! Integer helpers: addition, slice summation, in-place scaling and
//! sequence generation.
//!
//! All arithmetic is **wrapping**, so none of these functions can panic
//! on overflow in debug builds.

use tracing::trace;

/// Returns `a + b`, wrapping on overflow.
///
/// ```rust
/// use flatkit::arith::add;
///
/// assert_eq!(add(2, 3), 5);
/// assert_eq!(add(-5, -3), -8);
/// ```
pub fn add(a: i32, b: i32) -> i32 {
    a.wrapping_add(b)
}

/// Sums every element of `values`. An empty slice sums to `0`.
pub fn sum_slice(values: &[i32]) -> i32 {
    values.iter().fold(0i32, |acc, &v| acc.wrapping_add(v))
}

/// Multiplies every element of `values` by `factor` in place.
pub fn scale_slice(values: &mut [i32], factor: i32) {
    for v in values.iter_mut() {
        *v = v.wrapping_mul(factor);
    }
}

/// Returns an owned vector `[0, 1, …, len - 1]`.
///
/// Lengths beyond `i32::MAX + 1` are clamped so every element fits.
pub fn sequence(len: usize) -> Vec<i32> {
    let upper = i32::try_from(len).unwrap_or(i32::MAX);
    trace!(len, "allocating sequence");
    (0..upper).collect()
}
