//! # Numeric Guards
//!
//! Small helpers that keep every figure the engine produces finite. Divisions
//! by zero resolve to a caller-chosen fallback, and inputs that slipped past
//! validation are clamped instead of propagating `NaN`.

/// Divide `numerator` by `denominator`, returning `fallback` when the
/// denominator is zero or the quotient is not finite.
///
/// ```rust
/// use roi_core::numeric::safe_div;
///
/// assert_eq!(safe_div(10.0, 4.0, 0.0), 2.5);
/// assert_eq!(safe_div(10.0, 0.0, 0.0), 0.0);
/// ```
pub fn safe_div(numerator: f64, denominator: f64, fallback: f64) -> f64 {
    if denominator == 0.0 || !denominator.is_finite() {
        return fallback;
    }
    let quotient = numerator / denominator;
    if quotient.is_finite() {
        quotient
    } else {
        fallback
    }
}

/// Replace `NaN` and infinities with zero.
pub fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}

/// Saturate infinities at `±f64::MAX`; `NaN` becomes zero.
///
/// For growth quantities that must stay ordered when they overflow.
pub fn saturate(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(f64::MIN, f64::MAX)
    }
}

/// Clamp to `[0, ∞)`; non-finite values become zero.
pub fn clamp_non_negative(value: f64) -> f64 {
    finite_or_zero(value).max(0.0)
}

/// Clamp to `[0, 1]`; non-finite values become zero.
pub fn clamp_share(value: f64) -> f64 {
    finite_or_zero(value).clamp(0.0, 1.0)
}
