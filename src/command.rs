// Copyright 2026 the pathsect Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The raw drawing-command stream consumed by the decoder.

use core::fmt;

use arrayvec::ArrayVec;

use crate::Point;

/// The kind of a raw drawing command.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CommandKind {
    /// Start a new subpath. Consumes one point.
    Move,
    /// Straight line. Consumes one point.
    Line,
    /// Quadratic curve. Consumes a control point, then the destination.
    QuadCurve,
    /// Cubic curve. Consumes two control points, then the destination.
    CubicCurve,
    /// Close the current subpath. Consumes no points.
    Close,
    /// A command the host produced that has no segment equivalent.
    ///
    /// The value is the host's own code for it, kept for diagnostics.
    Other(u32),
}

impl CommandKind {
    /// The number of points a command of this kind consumes.
    ///
    /// Returns `None` for [`Other`](CommandKind::Other).
    #[inline]
    pub fn point_count(self) -> Option<usize> {
        match self {
            CommandKind::Move | CommandKind::Line => Some(1),
            CommandKind::QuadCurve => Some(2),
            CommandKind::CubicCurve => Some(3),
            CommandKind::Close => Some(0),
            CommandKind::Other(_) => None,
        }
    }
}

impl fmt::Display for CommandKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommandKind::Move => write!(f, "move"),
            CommandKind::Line => write!(f, "line"),
            CommandKind::QuadCurve => write!(f, "quadratic curve"),
            CommandKind::CubicCurve => write!(f, "cubic curve"),
            CommandKind::Close => write!(f, "close"),
            CommandKind::Other(code) => write!(f, "unknown command {code}"),
        }
    }
}

/// A single drawing command: its kind plus up to three points, in the
/// order the host emitted them (control points before the destination).
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PathCommand {
    /// What this command draws.
    pub kind: CommandKind,
    /// The points associated with the command.
    pub points: ArrayVec<Point, 3>,
}

impl PathCommand {
    /// Create a command from a kind and its points.
    ///
    /// Points beyond the third are dropped.
    pub fn new(kind: CommandKind, points: impl IntoIterator<Item = Point>) -> PathCommand {
        PathCommand {
            kind,
            points: points.into_iter().take(3).collect(),
        }
    }

    /// A "move to" command.
    pub fn move_to(p: impl Into<Point>) -> PathCommand {
        PathCommand::new(CommandKind::Move, [p.into()])
    }

    /// A "line to" command.
    pub fn line_to(p: impl Into<Point>) -> PathCommand {
        PathCommand::new(CommandKind::Line, [p.into()])
    }

    /// A quadratic curve command, control point first.
    pub fn quad_to(ctrl: impl Into<Point>, p: impl Into<Point>) -> PathCommand {
        PathCommand::new(CommandKind::QuadCurve, [ctrl.into(), p.into()])
    }

    /// A cubic curve command, control points first.
    pub fn curve_to(
        ctrl1: impl Into<Point>,
        ctrl2: impl Into<Point>,
        p: impl Into<Point>,
    ) -> PathCommand {
        PathCommand::new(
            CommandKind::CubicCurve,
            [ctrl1.into(), ctrl2.into(), p.into()],
        )
    }

    /// A "close path" command.
    pub fn close() -> PathCommand {
        PathCommand::new(CommandKind::Close, core::iter::empty::<Point>())
    }

    /// A command of a kind this crate does not understand.
    pub fn other(code: u32, points: impl IntoIterator<Item = Point>) -> PathCommand {
        PathCommand::new(CommandKind::Other(code), points)
    }
}
