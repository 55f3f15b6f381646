// Copyright 2026 the pathsect Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Arc length estimation by chord subdivision.

use core::fmt;
use core::num::NonZeroU32;

use crate::ParamCurve;

/// The number of equal parameter steps used to approximate a curve's length.
///
/// Higher values trade compute for accuracy; the estimate converges to the
/// true arc length from below as the resolution grows. A resolution of zero
/// is unrepresentable, so any `Resolution` in hand is safe to divide by.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Resolution(NonZeroU32);

/// An error returned when constructing a [`Resolution`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResolutionError {
    /// The requested resolution was zero.
    Zero,
}

impl fmt::Display for ResolutionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResolutionError::Zero => write!(f, "Curve resolution must be at least 1"),
        }
    }
}

impl core::error::Error for ResolutionError {}

impl Resolution {
    /// The default resolution, 100 subdivisions per curve.
    pub const DEFAULT: Resolution = match NonZeroU32::new(100) {
        Some(n) => Resolution(n),
        None => panic!("100 is non-zero"),
    };

    /// Create a resolution of `n` subdivisions.
    ///
    /// # Errors
    ///
    /// Returns [`ResolutionError::Zero`] if `n` is zero.
    #[inline]
    pub const fn new(n: u32) -> Result<Resolution, ResolutionError> {
        match NonZeroU32::new(n) {
            Some(n) => Ok(Resolution(n)),
            None => Err(ResolutionError::Zero),
        }
    }

    /// The number of subdivisions.
    #[inline]
    pub const fn get(self) -> u32 {
        self.0.get()
    }
}

impl Default for Resolution {
    #[inline]
    fn default() -> Self {
        Resolution::DEFAULT
    }
}

impl From<NonZeroU32> for Resolution {
    #[inline]
    fn from(n: NonZeroU32) -> Self {
        Resolution(n)
    }
}

impl TryFrom<u32> for Resolution {
    type Error = ResolutionError;

    #[inline]
    fn try_from(n: u32) -> Result<Self, Self::Error> {
        Resolution::new(n)
    }
}

/// A parametrized curve whose length can be approximated by chords.
pub trait ChordLength: ParamCurve {
    /// Approximate the length of the curve.
    ///
    /// The default implementation evaluates the curve at `t = i / R` for
    /// `i` in `0..=R` and sums the distances between consecutive samples.
    /// The result never exceeds the true arc length (up to roundoff), and
    /// doubling `R` never decreases it.
    fn chord_length(&self, resolution: Resolution) -> f64 {
        let n = f64::from(resolution.get());
        let mut last = self.eval(0.0);
        let mut sum = 0.0;
        for i in 1..=resolution.get() {
            let p = self.eval(f64::from(i) / n);
            sum += last.distance(p);
            last = p;
        }
        sum
    }
}
