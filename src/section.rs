// Copyright 2026 the pathsect Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A doubly-linked view of a decoded path.
//!
//! All sections live in one arena owned by [`SectionPath`]; the links
//! between them are indices into that arena, so there is exactly one owner
//! and no reference cycles to break.

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use crate::{
    decode, ChordLength, ParamCurve, PathCommand, PathSeg, Point, Resolution, ResolutionError,
    Segment,
};

/// A [`Segment`] together with the indices of its neighbors.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Section {
    segment: Segment,
    prev: Option<usize>,
    next: Option<usize>,
}

impl Section {
    /// The decoded segment.
    #[inline]
    pub fn segment(&self) -> Segment {
        self.segment
    }

    /// Index of the preceding section, if any.
    #[inline]
    pub fn prev(&self) -> Option<usize> {
        self.prev
    }

    /// Index of the following section, if any.
    #[inline]
    pub fn next(&self) -> Option<usize> {
        self.next
    }
}

/// An ordered, doubly-linked sequence of path sections.
///
/// Built once from a decoded segment list and read-only afterwards. If the
/// source path changes, build a new `SectionPath`.
///
/// # Examples
///
/// ```
/// use pathsect::{PathCommand, Resolution, SectionPath};
///
/// let path = SectionPath::from_commands([
///     PathCommand::move_to((0.0, 0.0)),
///     PathCommand::line_to((10.0, 0.0)),
/// ]);
/// assert_eq!(path.length(Resolution::DEFAULT), 10.0);
/// assert_eq!(path.to_markup(), "M0.0,0.0 L10.0,0.0 ");
/// ```
#[derive(Clone, Default, PartialEq)]
pub struct SectionPath {
    sections: Vec<Section>,
}

impl SectionPath {
    /// Create an empty path.
    pub fn new() -> SectionPath {
        SectionPath::default()
    }

    /// Link up the segments in a single forward pass.
    pub fn from_segments(segments: impl IntoIterator<Item = Segment>) -> SectionPath {
        let mut sections: Vec<Section> = Vec::new();
        for segment in segments {
            let ix = sections.len();
            let prev = ix.checked_sub(1);
            if let Some(last) = sections.last_mut() {
                last.next = Some(ix);
            }
            sections.push(Section {
                segment,
                prev,
                next: None,
            });
        }
        SectionPath { sections }
    }

    /// Decode a command stream and link the result.
    ///
    /// Undecodable commands are skipped, as in [`decode()`].
    pub fn from_commands<I>(commands: I) -> SectionPath
    where
        I: IntoIterator,
        I::Item: core::borrow::Borrow<PathCommand>,
    {
        SectionPath::from_segments(decode(commands))
    }

    /// The number of sections.
    #[inline]
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    /// Returns `true` if there are no sections.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// The raw sections, in path order.
    #[inline]
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// A cursor at the section with the given index.
    #[inline]
    pub fn get(&self, ix: usize) -> Option<SectionRef<'_>> {
        (ix < self.sections.len()).then_some(SectionRef { path: self, ix })
    }

    /// A cursor at the first section.
    #[inline]
    pub fn first(&self) -> Option<SectionRef<'_>> {
        self.get(0)
    }

    /// A cursor at the last section.
    #[inline]
    pub fn last(&self) -> Option<SectionRef<'_>> {
        self.sections.len().checked_sub(1).and_then(|ix| self.get(ix))
    }

    /// Iterate over the sections in path order.
    pub fn iter(&self) -> impl Iterator<Item = SectionRef<'_>> + '_ {
        (0..self.sections.len()).map(move |ix| SectionRef { path: self, ix })
    }

    /// Iterate over the decoded segments in path order.
    pub fn segments(&self) -> impl Iterator<Item = Segment> + '_ {
        self.sections.iter().map(|s| s.segment)
    }

    /// Approximate the length of the whole path.
    ///
    /// This is the sum of [`SectionRef::length`] over every section.
    pub fn length(&self, resolution: Resolution) -> f64 {
        self.iter().map(|s| s.length(resolution)).sum()
    }

    /// Approximate the length of the whole path with a raw resolution.
    ///
    /// # Errors
    ///
    /// Returns [`ResolutionError::Zero`] before doing any work if
    /// `resolution` is zero.
    pub fn try_length(&self, resolution: u32) -> Result<f64, ResolutionError> {
        Ok(self.length(Resolution::new(resolution)?))
    }

    /// Serialize the path as SVG-style markup.
    pub fn to_markup(&self) -> String {
        crate::to_markup(self.segments())
    }
}

impl fmt::Debug for SectionPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.segments()).finish()
    }
}

impl FromIterator<Segment> for SectionPath {
    fn from_iter<T: IntoIterator<Item = Segment>>(iter: T) -> Self {
        SectionPath::from_segments(iter)
    }
}

/// A cursor pointing at one section of a [`SectionPath`].
#[derive(Clone, Copy)]
pub struct SectionRef<'a> {
    path: &'a SectionPath,
    ix: usize,
}

impl<'a> SectionRef<'a> {
    #[inline]
    fn section(&self) -> &'a Section {
        &self.path.sections[self.ix]
    }

    /// Index of this section in its path.
    #[inline]
    pub fn index(&self) -> usize {
        self.ix
    }

    /// The decoded segment.
    #[inline]
    pub fn segment(&self) -> Segment {
        self.section().segment
    }

    /// The preceding section.
    #[inline]
    pub fn previous(&self) -> Option<SectionRef<'a>> {
        self.section().prev.and_then(|ix| self.path.get(ix))
    }

    /// The following section.
    #[inline]
    pub fn next(&self) -> Option<SectionRef<'a>> {
        self.section().next.and_then(|ix| self.path.get(ix))
    }

    /// Where this section starts: the end point of the previous segment.
    ///
    /// `None` for the first section, or when the previous segment is a
    /// `ClosePath`.
    #[inline]
    pub fn start_point(&self) -> Option<Point> {
        self.previous()?.end_point()
    }

    /// The end point of this section's own segment; `None` for `ClosePath`.
    #[inline]
    pub fn end_point(&self) -> Option<Point> {
        self.segment().end_point()
    }

    /// The drawable curve for this section.
    ///
    /// `None` if the section has no start point or draws nothing.
    pub fn to_curve(&self) -> Option<PathSeg> {
        PathSeg::from_segment(self.start_point()?, self.segment())
    }

    /// Evaluate the point at parameter `t` along this section.
    ///
    /// `t` is only clamped for `LineTo` sections; quadratic and cubic
    /// sections extrapolate outside `[0, 1]`. Returns `None` when there is
    /// no start point, and for `MoveTo` and `ClosePath`.
    pub fn point_along(&self, t: f64) -> Option<Point> {
        self.to_curve().map(|c| c.eval(t))
    }

    /// Approximate the length of this section.
    ///
    /// Lines are measured exactly. Curves are split into `resolution` equal
    /// parameter steps and the chord lengths summed. A section with no start
    /// point, a `MoveTo`, or a `ClosePath` has length zero.
    pub fn length(&self, resolution: Resolution) -> f64 {
        self.to_curve()
            .map_or(0.0, |c| c.chord_length(resolution))
    }

    /// Approximate the length of this section with a raw resolution.
    ///
    /// # Errors
    ///
    /// Returns [`ResolutionError::Zero`] if `resolution` is zero.
    pub fn try_length(&self, resolution: u32) -> Result<f64, ResolutionError> {
        Ok(self.length(Resolution::new(resolution)?))
    }
}

impl PartialEq for SectionRef<'_> {
    /// Two cursors are equal if they point at the same slot of the same path.
    fn eq(&self, other: &Self) -> bool {
        core::ptr::eq(self.path, other.path) && self.ix == other.ix
    }
}

impl fmt::Debug for SectionRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SectionRef")
            .field("index", &self.ix)
            .field("segment", &self.segment())
            .finish()
    }
}
