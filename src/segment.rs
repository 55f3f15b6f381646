// Copyright 2026 the pathsect Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Decoded path segments.

use crate::Point;

/// One decoded drawing command.
///
/// Every variant except [`ClosePath`](Segment::ClosePath) carries its
/// terminal point first, followed by any control points. A valid path has
/// a `MoveTo` at the beginning of each subpath, but nothing here enforces
/// that.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Segment {
    /// Move directly to the point without drawing anything, starting a new
    /// subpath.
    MoveTo(Point),
    /// Draw a line from the current location to the point.
    LineTo(Point),
    /// Draw a quadratic Bézier ending at the first point, using the second
    /// as its control point.
    QuadTo(Point, Point),
    /// Draw a cubic Bézier ending at the first point, using the second and
    /// third as its control points (nearest the start and the end,
    /// respectively).
    CurveTo(Point, Point, Point),
    /// Close off the path.
    ///
    /// The subpath start is not tracked, so a `ClosePath` has no terminal
    /// point and contributes no length.
    ClosePath,
}

impl Segment {
    /// The terminal point of this segment, or `None` for `ClosePath`.
    #[inline]
    pub fn end_point(&self) -> Option<Point> {
        match *self {
            Segment::MoveTo(p)
            | Segment::LineTo(p)
            | Segment::QuadTo(p, _)
            | Segment::CurveTo(p, _, _) => Some(p),
            Segment::ClosePath => None,
        }
    }

    /// Returns `true` if this segment draws a curve (or line) from the
    /// current point.
    #[inline]
    pub fn is_drawing(&self) -> bool {
        matches!(
            self,
            Segment::LineTo(..) | Segment::QuadTo(..) | Segment::CurveTo(..)
        )
    }

    /// Returns `true` if all points in this segment are finite.
    pub fn is_finite(&self) -> bool {
        match *self {
            Segment::MoveTo(p) | Segment::LineTo(p) => p.is_finite(),
            Segment::QuadTo(p, c) => p.is_finite() && c.is_finite(),
            Segment::CurveTo(p, c1, c2) => p.is_finite() && c1.is_finite() && c2.is_finite(),
            Segment::ClosePath => true,
        }
    }
}
