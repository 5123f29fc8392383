//! High-precision decimal arithmetic support.
//!
//! Chained polynomial and curvature computations run on
//! [`bigdecimal::BigDecimal`] so no binary floating drift accumulates
//! across them. Division and square roots are generally non-terminating
//! in decimal, so every rounding operation goes through an explicit
//! [`DecimalContext`]; there is no global or ambient precision state.
//! Transcendentals (sin, cos, tan, atan) have no decimal closed form
//! and round-trip through `f64`.

use bigdecimal::{BigDecimal, FromPrimitive, ToPrimitive, Zero};

/// Significant decimal digits carried through chained computations
/// (IEEE 754 decimal128 width).
pub const PRECISION_DIGITS: u64 = 34;

/// Fixed precision context. Functions that round decimals take one
/// explicitly rather than reaching for a process-wide default.
#[derive(Copy, Clone, Debug)]
pub struct DecimalContext {
    digits: u64,
}

impl DecimalContext {
    pub const fn new(digits: u64) -> Self {
        Self { digits }
    }

    pub fn digits(&self) -> u64 {
        self.digits
    }

    /// Rounds to the context's significant-digit count.
    pub fn round(&self, value: BigDecimal) -> BigDecimal {
        value.with_prec(self.digits)
    }

    /// Quotient rounded to the context width.
    pub fn div(&self, num: &BigDecimal, den: &BigDecimal) -> BigDecimal {
        self.round(num / den)
    }

    /// Square root of the absolute value, rounded to the context width.
    pub fn sqrt_abs(&self, value: &BigDecimal) -> BigDecimal {
        value
            .abs()
            .sqrt()
            .map(|r| self.round(r))
            .unwrap_or_else(BigDecimal::zero)
    }
}

impl Default for DecimalContext {
    fn default() -> Self {
        Self::new(PRECISION_DIGITS)
    }
}

/// Parses a decimal literal known to be valid at compile time.
pub(crate) fn dec(literal: &str) -> BigDecimal {
    literal.parse().expect("valid decimal literal")
}

/// Lifts a finite `f64` (e.g. a transcendental result or a geodesic
/// distance) into the decimal domain.
pub(crate) fn dec_from_f64(value: f64) -> BigDecimal {
    BigDecimal::from_f64(value).unwrap_or_else(BigDecimal::zero)
}

/// Narrows a decimal back to `f64` for transcendental evaluation.
pub(crate) fn to_f64(value: &BigDecimal) -> f64 {
    value.to_f64().unwrap_or(f64::NAN)
}
