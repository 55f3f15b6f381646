// Copyright 2026 the pathsect Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Lines.

use crate::{ChordLength, ParamCurve, Point, Resolution};

/// A single line.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Line {
    /// The line's start point.
    pub p0: Point,
    /// The line's end point.
    pub p1: Point,
}

impl Line {
    /// Create a new line.
    #[inline]
    pub fn new(p0: impl Into<Point>, p1: impl Into<Point>) -> Line {
        Line {
            p0: p0.into(),
            p1: p1.into(),
        }
    }

    /// The length of the line.
    #[inline]
    pub fn length(self) -> f64 {
        self.p0.distance(self.p1)
    }
}

impl ParamCurve for Line {
    /// Evaluate the line at `t`, clamped to `[0, 1]`.
    ///
    /// Unlike the Bézier curves, a line never extrapolates past its end
    /// points. Callers that pass out-of-range parameters to a mix of
    /// segment kinds see this difference.
    #[inline]
    fn eval(&self, t: f64) -> Point {
        self.p0.lerp_clamped(self.p1, t)
    }

    #[inline]
    fn start(&self) -> Point {
        self.p0
    }

    #[inline]
    fn end(&self) -> Point {
        self.p1
    }
}

impl ChordLength for Line {
    /// The exact Euclidean length; `resolution` is ignored.
    #[inline]
    fn chord_length(&self, _resolution: Resolution) -> f64 {
        self.length()
    }
}

#[cfg(test)]
mod tests {
    use crate::{ChordLength, Line, ParamCurve, Point, Resolution};

    #[test]
    fn line_eval_clamps() {
        let l = Line::new((0.0, 0.0), (10.0, 0.0));
        assert_eq!(l.eval(0.25), Point::new(2.5, 0.0));
        assert_eq!(l.eval(-1.0), l.start());
        assert_eq!(l.eval(3.0), l.end());
        assert_eq!(l.eval(0.0), Point::new(0.0, 0.0));
        assert_eq!(l.eval(1.0), Point::new(10.0, 0.0));
    }

    #[test]
    #[allow(clippy::float_cmp)]
    fn line_length_is_exact() {
        let l = Line::new((1.0, 1.0), (4.0, 5.0));
        assert_eq!(l.length(), 5.0);
        for r in [1, 2, 7, 100] {
            let r = Resolution::new(r).unwrap();
            assert_eq!(l.chord_length(r), 5.0);
        }
    }
}
