// Copyright 2026 the pathsect Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Cubic Bézier segments.

use crate::{ChordLength, ParamCurve, Point, QuadBez};

/// A single cubic Bézier segment.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[allow(missing_docs)]
pub struct CubicBez {
    pub p0: Point,
    pub p1: Point,
    pub p2: Point,
    pub p3: Point,
}

impl CubicBez {
    /// Create a new cubic Bézier segment.
    #[inline]
    pub fn new<P: Into<Point>>(p0: P, p1: P, p2: P, p3: P) -> CubicBez {
        CubicBez {
            p0: p0.into(),
            p1: p1.into(),
            p2: p2.into(),
            p3: p3.into(),
        }
    }
}

impl From<QuadBez> for CubicBez {
    /// Degree elevation; the cubic traces exactly the same curve.
    fn from(q: QuadBez) -> CubicBez {
        CubicBez::new(
            q.p0,
            q.p0 + (2.0 / 3.0) * (q.p1 - q.p0),
            q.p2 + (2.0 / 3.0) * (q.p1 - q.p2),
            q.p2,
        )
    }
}

impl ParamCurve for CubicBez {
    /// Evaluate the Bernstein form per axis. `t` is not clamped.
    #[inline]
    fn eval(&self, t: f64) -> Point {
        let mt = 1.0 - t;
        let a = mt * mt * mt;
        let b = 3.0 * mt * mt * t;
        let c = 3.0 * mt * t * t;
        let d = t * t * t;
        Point::new(
            self.p0.x * a + self.p1.x * b + self.p2.x * c + self.p3.x * d,
            self.p0.y * a + self.p1.y * b + self.p2.y * c + self.p3.y * d,
        )
    }

    #[inline]
    fn start(&self) -> Point {
        self.p0
    }

    #[inline]
    fn end(&self) -> Point {
        self.p3
    }
}

impl ChordLength for CubicBez {}
