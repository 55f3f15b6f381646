// Copyright 2026 the pathsect Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! SVG-style path markup.
//!
//! The writer emits absolute `M`, `L`, `Q`, `C` and `z` tokens, each followed
//! by a single space, with comma-separated coordinate pairs. The parser
//! reads that token set back (plus the relative lower-case forms) as a
//! command stream for [`decode()`](crate::decode()).

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt::{self, Write};

use crate::{PathCommand, Point, Segment};

/// Write one coordinate pair.
///
/// The `Debug` form of `f64` is the shortest string that round-trips, and
/// keeps a trailing `.0` on integral values.
fn write_pair(w: &mut impl Write, p: Point) -> fmt::Result {
    write!(w, "{:?},{:?}", p.x, p.y)
}

/// Write the markup for a segment sequence.
///
/// Every token, including the last, is followed by a space. Coordinates are
/// written in the shortest form that reads back to the same `f64`. That is
/// plain decimal for ordinary magnitudes, and exponent form (`1e300`,
/// `1e-320`) for very large or very small ones, which SVG number syntax
/// and [`parse_markup`] both accept.
pub fn write_markup<W, I>(segments: I, w: &mut W) -> fmt::Result
where
    W: Write,
    I: IntoIterator,
    I::Item: core::borrow::Borrow<Segment>,
{
    use core::borrow::Borrow;

    for seg in segments {
        match *seg.borrow() {
            Segment::MoveTo(p) => {
                w.write_char('M')?;
                write_pair(w, p)?;
            }
            Segment::LineTo(p) => {
                w.write_char('L')?;
                write_pair(w, p)?;
            }
            Segment::QuadTo(p, c) => {
                w.write_char('Q')?;
                write_pair(w, c)?;
                w.write_char(' ')?;
                write_pair(w, p)?;
            }
            Segment::CurveTo(p, c1, c2) => {
                w.write_char('C')?;
                write_pair(w, c1)?;
                w.write_char(' ')?;
                write_pair(w, c2)?;
                w.write_char(' ')?;
                write_pair(w, p)?;
            }
            Segment::ClosePath => w.write_char('z')?,
        }
        w.write_char(' ')?;
    }
    Ok(())
}

/// Convert a segment sequence to a markup string.
///
/// # Examples
///
/// ```
/// use pathsect::{decode, to_markup, PathCommand};
///
/// let segments = decode([
///     PathCommand::move_to((0.0, 0.0)),
///     PathCommand::line_to((5.0, 0.0)),
///     PathCommand::close(),
/// ]);
/// assert_eq!(to_markup(&segments), "M0.0,0.0 L5.0,0.0 z ");
/// ```
pub fn to_markup<I>(segments: I) -> String
where
    I: IntoIterator,
    I::Item: core::borrow::Borrow<Segment>,
{
    let mut result = String::new();
    // Writing into a `String` cannot fail.
    let _ = write_markup(segments, &mut result);
    result
}

/// An error which can be returned when parsing markup.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SvgParseError {
    /// A number was expected.
    Wrong,
    /// The input string ended while still expecting input.
    UnexpectedEof,
    /// Encountered an unknown command letter.
    UnknownCommand(char),
}

impl fmt::Display for SvgParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SvgParseError::Wrong => write!(f, "Unable to parse a number"),
            SvgParseError::UnexpectedEof => write!(f, "Unexpected EOF"),
            SvgParseError::UnknownCommand(letter) => write!(f, "Unknown command, \"{letter}\""),
        }
    }
}

impl core::error::Error for SvgParseError {}

/// Parse markup into a drawing-command stream.
///
/// Accepts `M L Q C Z` and their relative lower-case forms, with optional
/// commas and implicit command repetition. Coordinates after an `M` are
/// treated as implicit line-tos, and `z` returns the current point to the
/// subpath start, as in SVG.
///
/// # Examples
///
/// ```
/// use pathsect::{parse_markup, SectionPath};
///
/// let commands = parse_markup("M10,10 l100,0 0,100 -100,0 z").unwrap();
/// let path = SectionPath::from_commands(&commands);
/// assert_eq!(path.to_markup(), "M10.0,10.0 L110.0,10.0 L110.0,110.0 L10.0,110.0 z ");
/// ```
pub fn parse_markup(data: &str) -> Result<Vec<PathCommand>, SvgParseError> {
    let mut lexer = SvgLexer::new(data);
    let mut commands = Vec::new();
    let mut last_cmd = 0;
    while let Some(c) = lexer.get_cmd(last_cmd)? {
        match c {
            b'm' | b'M' => {
                let pt = lexer.get_maybe_relative(c)?;
                commands.push(PathCommand::move_to(pt));
                lexer.last_pt = pt;
                lexer.start_pt = pt;
                // Subsequent pairs are line-tos.
                last_cmd = c - (b'M' - b'L');
            }
            b'l' | b'L' => {
                let pt = lexer.get_maybe_relative(c)?;
                commands.push(PathCommand::line_to(pt));
                lexer.last_pt = pt;
                last_cmd = c;
            }
            b'q' | b'Q' => {
                let p1 = lexer.get_maybe_relative(c)?;
                let p2 = lexer.get_maybe_relative(c)?;
                commands.push(PathCommand::quad_to(p1, p2));
                lexer.last_pt = p2;
                last_cmd = c;
            }
            b'c' | b'C' => {
                let p1 = lexer.get_maybe_relative(c)?;
                let p2 = lexer.get_maybe_relative(c)?;
                let p3 = lexer.get_maybe_relative(c)?;
                commands.push(PathCommand::curve_to(p1, p2, p3));
                lexer.last_pt = p3;
                last_cmd = c;
            }
            b'z' | b'Z' => {
                commands.push(PathCommand::close());
                lexer.last_pt = lexer.start_pt;
                last_cmd = 0;
            }
            _ => return Err(SvgParseError::UnknownCommand(char::from(c))),
        }
    }
    Ok(commands)
}

struct SvgLexer<'a> {
    data: &'a str,
    ix: usize,
    last_pt: Point,
    start_pt: Point,
}

impl SvgLexer<'_> {
    fn new(data: &str) -> SvgLexer<'_> {
        SvgLexer {
            data,
            ix: 0,
            last_pt: Point::ZERO,
            start_pt: Point::ZERO,
        }
    }

    fn skip_ws(&mut self) {
        while let Some(&c) = self.data.as_bytes().get(self.ix) {
            if !(c == b' ' || c == 9 || c == 10 || c == 12 || c == 13) {
                break;
            }
            self.ix += 1;
        }
    }

    /// The next command letter, or the previous one repeated if a number
    /// follows. `Ok(None)` at the end of input.
    fn get_cmd(&mut self, last_cmd: u8) -> Result<Option<u8>, SvgParseError> {
        self.skip_ws();
        let Some(c) = self.get_byte() else {
            return Ok(None);
        };
        if c.is_ascii_alphabetic() {
            Ok(Some(c))
        } else if last_cmd != 0 && (c == b'-' || c == b'+' || c == b'.' || c.is_ascii_digit()) {
            // Plausible number start
            self.unget();
            Ok(Some(last_cmd))
        } else {
            Err(SvgParseError::UnknownCommand(char::from(c)))
        }
    }

    fn get_byte(&mut self) -> Option<u8> {
        self.data.as_bytes().get(self.ix).map(|&c| {
            self.ix += 1;
            c
        })
    }

    fn peek(&self) -> Option<u8> {
        self.data.as_bytes().get(self.ix).copied()
    }

    fn unget(&mut self) {
        self.ix -= 1;
    }

    fn skip_digits(&mut self) -> usize {
        let start = self.ix;
        while self.peek().is_some_and(|c| c.is_ascii_digit()) {
            self.ix += 1;
        }
        self.ix - start
    }

    fn get_number(&mut self) -> Result<f64, SvgParseError> {
        self.skip_ws();
        let start = self.ix;
        let c = self.get_byte().ok_or(SvgParseError::UnexpectedEof)?;
        if !(c == b'-' || c == b'+') {
            self.unget();
        }
        let mut digit_count = self.skip_digits();
        if self.peek() == Some(b'.') {
            self.ix += 1;
            digit_count += self.skip_digits();
        }
        if digit_count == 0 {
            return Err(SvgParseError::Wrong);
        }
        if matches!(self.peek(), Some(b'e' | b'E')) {
            self.ix += 1;
            if matches!(self.peek(), Some(b'-' | b'+')) {
                self.ix += 1;
            }
            if self.skip_digits() == 0 {
                return Err(SvgParseError::Wrong);
            }
        }
        self.data[start..self.ix]
            .parse()
            .map_err(|_| SvgParseError::Wrong)
    }

    fn get_number_pair(&mut self) -> Result<Point, SvgParseError> {
        let x = self.get_number()?;
        self.opt_comma();
        let y = self.get_number()?;
        self.opt_comma();
        Ok(Point::new(x, y))
    }

    fn get_maybe_relative(&mut self, cmd: u8) -> Result<Point, SvgParseError> {
        let pt = self.get_number_pair()?;
        if cmd.is_ascii_lowercase() {
            Ok(pt + self.last_pt.to_vec2())
        } else {
            Ok(pt)
        }
    }

    fn opt_comma(&mut self) {
        self.skip_ws();
        if let Some(c) = self.get_byte() {
            if c != b',' {
                self.unget();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        decode, parse_markup, to_markup, PathCommand, Point, Resolution, SectionPath, Segment,
        SvgParseError,
    };

    #[test]
    fn markup_tokens() {
        let segments = [
            Segment::MoveTo(Point::new(0.0, 0.0)),
            Segment::LineTo(Point::new(5.0, 0.0)),
            Segment::QuadTo(Point::new(10.0, 0.0), Point::new(7.5, -2.5)),
            Segment::CurveTo(
                Point::new(20.0, 0.0),
                Point::new(12.0, 3.0),
                Point::new(18.0, 3.0),
            ),
            Segment::ClosePath,
        ];
        assert_eq!(
            to_markup(&segments),
            "M0.0,0.0 L5.0,0.0 Q7.5,-2.5 10.0,0.0 C12.0,3.0 18.0,3.0 20.0,0.0 z "
        );
    }

    #[test]
    fn extreme_magnitudes_use_exponent_form() {
        let segments = [
            Segment::MoveTo(Point::new(1e300, -0.0)),
            Segment::LineTo(Point::new(1e-320, 5.0)),
        ];
        let markup = to_markup(&segments);
        assert_eq!(markup, "M1e300,-0.0 L1e-320,5.0 ");
        let reparsed = decode(parse_markup(&markup).unwrap());
        assert_eq!(reparsed, segments);
    }

    #[test]
    fn markup_from_commands() {
        let segments = decode([
            PathCommand::move_to((0.0, 0.0)),
            PathCommand::line_to((5.0, 0.0)),
            PathCommand::close(),
        ]);
        assert_eq!(to_markup(&segments), "M0.0,0.0 L5.0,0.0 z ");
        assert_eq!(to_markup(&segments), to_markup(segments.iter()));
        assert_eq!(to_markup(Vec::<Segment>::new()), "");
    }

    #[test]
    fn test_parse_svg() {
        let cmds = parse_markup("m10 10 100 0 0 100 -100 0z").unwrap();
        let path = SectionPath::from_commands(&cmds);
        assert_eq!(path.len(), 5);
        assert_eq!(path.try_length(1), Ok(300.0));
        assert_eq!(
            path.last().unwrap().previous().unwrap().end_point(),
            Some(Point::new(10.0, 110.0))
        );
    }

    #[test]
    fn parse_roundtrips_markup() {
        let markup = "M0.0,0.0 Q7.5,-2.5 10.0,0.0 C12.0,3.0 18.0,3.0 20.0,0.0 L1e-7,2500.0 z ";
        let path = SectionPath::from_commands(parse_markup(markup).unwrap());
        assert_eq!(path.to_markup(), markup);
        let again = SectionPath::from_commands(parse_markup(&path.to_markup()).unwrap());
        assert_eq!(again, path);
        assert!(again.length(Resolution::DEFAULT) > 0.0);
    }

    #[test]
    fn relative_after_close() {
        let cmds = parse_markup("M1,1 L3,1 z l0,2").unwrap();
        assert_eq!(cmds[3], PathCommand::line_to((1.0, 3.0)));
    }

    #[test]
    fn parse_errors() {
        assert_eq!(parse_markup("M1"), Err(SvgParseError::UnexpectedEof));
        assert_eq!(parse_markup("M1,x"), Err(SvgParseError::Wrong));
        assert_eq!(parse_markup("M1,1 H5"), Err(SvgParseError::UnknownCommand('H')));
        assert_eq!(parse_markup("12"), Err(SvgParseError::UnknownCommand('1')));
        assert!(parse_markup("").unwrap().is_empty());
        assert_eq!(
            SvgParseError::UnknownCommand('H').to_string(),
            "Unknown command, \"H\""
        );
    }
}
