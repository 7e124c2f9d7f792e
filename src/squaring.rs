//! Safe squaring core.

/// Square a double-precision value.
///
/// NaN propagates, both infinities map to `+inf` and `-0.0` maps to `+0.0`,
/// all by plain IEEE-754 multiplication.
///
/// # Example
///
/// ```
/// assert_eq!(squared::squared(5.0), 25.0);
/// ```
#[inline]
pub fn squared(x: f64) -> f64 {
    x * x
}

/// Square `x`, returning `None` unless both the input and the result are finite.
pub fn squared_checked(x: f64) -> Option<f64> {
    if !x.is_finite() {
        return None;
    }
    let out = squared(x);
    out.is_finite().then_some(out)
}
