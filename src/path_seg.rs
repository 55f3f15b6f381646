// Copyright 2026 the pathsect Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A drawable segment of a path: a line or Bézier with a known start.

use crate::{ChordLength, CubicBez, Line, ParamCurve, Point, QuadBez, Resolution, Segment};

/// A segment of a Bézier path, resolved against its start point.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PathSeg {
    /// A line segment.
    Line(Line),
    /// A quadratic Bézier segment.
    Quad(QuadBez),
    /// A cubic Bézier segment.
    Cubic(CubicBez),
}

impl PathSeg {
    /// Build the drawable curve for `seg`, starting at `start`.
    ///
    /// Returns `None` for `MoveTo` and `ClosePath`, which draw nothing.
    pub fn from_segment(start: Point, seg: Segment) -> Option<PathSeg> {
        match seg {
            Segment::LineTo(p) => Some(PathSeg::Line(Line::new(start, p))),
            Segment::QuadTo(p, c) => Some(PathSeg::Quad(QuadBez::new(start, c, p))),
            Segment::CurveTo(p, c1, c2) => {
                Some(PathSeg::Cubic(CubicBez::new(start, c1, c2, p)))
            }
            Segment::MoveTo(_) | Segment::ClosePath => None,
        }
    }

    /// Convert this segment to a cubic Bézier.
    pub fn to_cubic(&self) -> CubicBez {
        match *self {
            PathSeg::Line(Line { p0, p1 }) => CubicBez::new(p0, p0, p1, p1),
            PathSeg::Quad(q) => q.into(),
            PathSeg::Cubic(c) => c,
        }
    }
}

impl ParamCurve for PathSeg {
    fn eval(&self, t: f64) -> Point {
        match *self {
            PathSeg::Line(line) => line.eval(t),
            PathSeg::Quad(quad) => quad.eval(t),
            PathSeg::Cubic(cubic) => cubic.eval(t),
        }
    }

    fn start(&self) -> Point {
        match *self {
            PathSeg::Line(line) => line.start(),
            PathSeg::Quad(quad) => quad.start(),
            PathSeg::Cubic(cubic) => cubic.start(),
        }
    }

    fn end(&self) -> Point {
        match *self {
            PathSeg::Line(line) => line.end(),
            PathSeg::Quad(quad) => quad.end(),
            PathSeg::Cubic(cubic) => cubic.end(),
        }
    }
}

impl ChordLength for PathSeg {
    fn chord_length(&self, resolution: Resolution) -> f64 {
        match *self {
            PathSeg::Line(line) => line.chord_length(resolution),
            PathSeg::Quad(quad) => quad.chord_length(resolution),
            PathSeg::Cubic(cubic) => cubic.chord_length(resolution),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{ParamCurve, PathSeg, Point, Segment};

    #[test]
    fn from_segment_orders_points() {
        let start = Point::new(0.0, 0.0);
        let end = Point::new(10.0, 0.0);
        let c1 = Point::new(0.0, 10.0);
        let c2 = Point::new(10.0, 10.0);
        let seg = PathSeg::from_segment(start, Segment::CurveTo(end, c1, c2)).unwrap();
        match seg {
            PathSeg::Cubic(c) => {
                assert_eq!((c.p0, c.p1, c.p2, c.p3), (start, c1, c2, end));
            }
            _ => panic!("expected a cubic, got {seg:?}"),
        }
        assert_eq!(PathSeg::from_segment(start, Segment::MoveTo(end)), None);
        assert_eq!(PathSeg::from_segment(start, Segment::ClosePath), None);
    }

    #[test]
    fn to_cubic_preserves_shape() {
        let start = Point::new(1.0, 1.0);
        let quad = PathSeg::from_segment(
            start,
            Segment::QuadTo(Point::new(5.0, 1.0), Point::new(3.0, 4.0)),
        )
        .unwrap();
        let cubic = quad.to_cubic();
        for i in 0..=8 {
            let t = f64::from(i) / 8.0;
            assert!((quad.eval(t) - cubic.eval(t)).hypot() < 1e-12);
        }
        let line = PathSeg::from_segment(start, Segment::LineTo(Point::new(3.0, 1.0))).unwrap();
        assert_eq!(line.to_cubic().eval(0.5), Point::new(2.0, 1.0));
    }
}
