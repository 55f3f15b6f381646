// Copyright 2026 the pathsect Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Decoding a drawing-command stream into [`Segment`]s.

use alloc::vec::Vec;
use core::fmt;

use crate::{CommandKind, PathCommand, Segment};

/// An error produced by [`try_decode`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DecodeError {
    /// The command kind has no segment equivalent.
    UnknownCommand {
        /// Position of the command in the input stream.
        index: usize,
        /// The host's code for the command.
        code: u32,
    },
    /// The command carried fewer points than its kind consumes.
    MissingPoints {
        /// Position of the command in the input stream.
        index: usize,
        /// The kind of the offending command.
        kind: CommandKind,
        /// How many points the kind consumes.
        expected: usize,
        /// How many points were supplied.
        found: usize,
    },
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecodeError::UnknownCommand { index, code } => {
                write!(f, "Unknown path command {code} at index {index}")
            }
            DecodeError::MissingPoints {
                index,
                kind,
                expected,
                found,
            } => write!(
                f,
                "The {kind} command at index {index} needs {expected} points, found {found}"
            ),
        }
    }
}

impl core::error::Error for DecodeError {}

/// Convert a single command into a segment.
///
/// Points are consumed in stream order: controls first, destination last.
fn decode_one(index: usize, cmd: &PathCommand) -> Result<Segment, DecodeError> {
    match (cmd.kind, cmd.points.as_slice()) {
        (CommandKind::Move, [p, ..]) => Ok(Segment::MoveTo(*p)),
        (CommandKind::Line, [p, ..]) => Ok(Segment::LineTo(*p)),
        (CommandKind::QuadCurve, [c, p, ..]) => Ok(Segment::QuadTo(*p, *c)),
        (CommandKind::CubicCurve, [c1, c2, p, ..]) => Ok(Segment::CurveTo(*p, *c1, *c2)),
        (CommandKind::Close, _) => Ok(Segment::ClosePath),
        (CommandKind::Other(code), _) => Err(DecodeError::UnknownCommand { index, code }),
        (kind, pts) => Err(DecodeError::MissingPoints {
            index,
            kind,
            expected: kind.point_count().unwrap_or_default(),
            found: pts.len(),
        }),
    }
}

/// Decode a command stream into segments, one per recognized command.
///
/// Input order is preserved. A command that cannot be decoded (an unknown
/// kind, or too few points for its kind) is skipped with a warning through
/// the [`log`] facade, and decoding carries on with the rest of the stream.
///
/// # Examples
///
/// ```
/// use pathsect::{decode, PathCommand, Point, Segment};
///
/// let segments = decode([
///     PathCommand::move_to((0.0, 0.0)),
///     PathCommand::quad_to((5.0, 10.0), (10.0, 0.0)),
/// ]);
/// assert_eq!(
///     segments[1],
///     Segment::QuadTo(Point::new(10.0, 0.0), Point::new(5.0, 10.0))
/// );
/// ```
pub fn decode<I>(commands: I) -> Vec<Segment>
where
    I: IntoIterator,
    I::Item: core::borrow::Borrow<PathCommand>,
{
    use core::borrow::Borrow;

    let mut segments = Vec::new();
    let mut skipped = 0_usize;
    for (index, cmd) in commands.into_iter().enumerate() {
        match decode_one(index, cmd.borrow()) {
            Ok(seg) => segments.push(seg),
            Err(err) => {
                log::warn!("skipping path command: {err}");
                skipped += 1;
            }
        }
    }
    log::trace!(
        "decoded {} segments ({} commands skipped)",
        segments.len(),
        skipped
    );
    segments
}

/// Decode a command stream into segments, failing on the first command that
/// cannot be decoded.
///
/// This is the strict counterpart of [`decode()`].
pub fn try_decode<I>(commands: I) -> Result<Vec<Segment>, DecodeError>
where
    I: IntoIterator,
    I::Item: core::borrow::Borrow<PathCommand>,
{
    use core::borrow::Borrow;

    commands
        .into_iter()
        .enumerate()
        .map(|(index, cmd)| decode_one(index, cmd.borrow()))
        .collect()
}

#[cfg(test)]
mod tests {
    use std::sync::{Mutex, OnceLock};

    use log::{Level, LevelFilter, Log, Metadata, Record};

    use crate::{decode, try_decode, CommandKind, DecodeError, PathCommand, Point, Segment};

    /// Forwards to `env_logger` and keeps every record for inspection.
    struct CaptureLogger {
        inner: env_logger::Logger,
        records: Mutex<Vec<(Level, String)>>,
    }

    impl Log for CaptureLogger {
        fn enabled(&self, _: &Metadata<'_>) -> bool {
            true
        }

        fn log(&self, record: &Record<'_>) {
            if let Ok(mut records) = self.records.lock() {
                records.push((record.level(), record.args().to_string()));
            }
            if self.inner.enabled(record.metadata()) {
                self.inner.log(record);
            }
        }

        fn flush(&self) {
            self.inner.flush();
        }
    }

    fn init_logger() -> &'static CaptureLogger {
        static LOGGER: OnceLock<CaptureLogger> = OnceLock::new();
        let logger = LOGGER.get_or_init(|| CaptureLogger {
            inner: env_logger::Builder::from_default_env()
                .is_test(true)
                .build(),
            records: Mutex::new(Vec::new()),
        });
        if log::set_logger(logger).is_ok() {
            log::set_max_level(LevelFilter::Trace);
        }
        logger
    }

    impl CaptureLogger {
        /// Count the warnings whose message contains `needle`.
        fn warnings_containing(&self, needle: &str) -> usize {
            self.records
                .lock()
                .map(|records| {
                    records
                        .iter()
                        .filter(|(level, msg)| *level == Level::Warn && msg.contains(needle))
                        .count()
                })
                .unwrap_or(0)
        }
    }

    #[test]
    fn decode_all_kinds() {
        let cmds = [
            PathCommand::move_to((0.0, 0.0)),
            PathCommand::line_to((1.0, 0.0)),
            PathCommand::quad_to((2.0, 1.0), (3.0, 0.0)),
            PathCommand::curve_to((4.0, 1.0), (5.0, 1.0), (6.0, 0.0)),
            PathCommand::close(),
        ];
        let segs = decode(&cmds);
        assert_eq!(
            segs,
            vec![
                Segment::MoveTo(Point::new(0.0, 0.0)),
                Segment::LineTo(Point::new(1.0, 0.0)),
                Segment::QuadTo(Point::new(3.0, 0.0), Point::new(2.0, 1.0)),
                Segment::CurveTo(
                    Point::new(6.0, 0.0),
                    Point::new(4.0, 1.0),
                    Point::new(5.0, 1.0)
                ),
                Segment::ClosePath,
            ]
        );
        assert_eq!(try_decode(&cmds), Ok(segs));
    }

    #[test]
    fn unknown_commands_are_skipped() {
        let logger = init_logger();
        let cmds = vec![
            PathCommand::move_to((0.0, 0.0)),
            PathCommand::other(7919, [Point::new(9.0, 9.0)]),
            PathCommand::line_to((1.0, 0.0)),
        ];
        let segs = decode(cmds.iter());
        assert_eq!(
            segs,
            vec![
                Segment::MoveTo(Point::new(0.0, 0.0)),
                Segment::LineTo(Point::new(1.0, 0.0)),
            ]
        );
        assert_eq!(
            logger.warnings_containing("Unknown path command 7919 at index 1"),
            1
        );
        assert_eq!(
            try_decode(cmds),
            Err(DecodeError::UnknownCommand { index: 1, code: 7919 })
        );
        // The strict decoder reports instead of logging.
        assert_eq!(
            logger.warnings_containing("Unknown path command 7919 at index 1"),
            1
        );
    }

    #[test]
    fn short_commands_are_skipped() {
        init_logger();
        let cmds = [
            PathCommand::move_to((0.0, 0.0)),
            PathCommand::new(CommandKind::CubicCurve, [Point::new(1.0, 1.0)]),
            PathCommand::close(),
        ];
        assert_eq!(
            decode(&cmds),
            vec![Segment::MoveTo(Point::new(0.0, 0.0)), Segment::ClosePath]
        );
        let err = try_decode(&cmds).unwrap_err();
        assert_eq!(
            err,
            DecodeError::MissingPoints {
                index: 1,
                kind: CommandKind::CubicCurve,
                expected: 3,
                found: 1,
            }
        );
        assert_eq!(
            err.to_string(),
            "The cubic curve command at index 1 needs 3 points, found 1"
        );
    }

    #[test]
    fn empty_stream() {
        assert!(decode(Vec::<PathCommand>::new()).is_empty());
        assert_eq!(try_decode(Vec::<PathCommand>::new()), Ok(vec![]));
    }
}
