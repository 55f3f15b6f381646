// Copyright 2026 the pathsect Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Structural analysis of 2D vector paths.
//!
//! A path arrives as a flat stream of drawing commands (move, line,
//! quadratic curve, cubic curve, close). This crate decodes that stream
//! into [`Segment`]s, links them into a [`SectionPath`] so that each
//! section can find its own start point, evaluates exact points along any
//! section, approximates arc length by chord subdivision, and writes the
//! path back out as compact SVG-style markup.
//!
//! # Examples
//!
//! ```
//! use pathsect::{PathCommand, Point, Resolution, SectionPath};
//!
//! let path = SectionPath::from_commands([
//!     PathCommand::move_to((0.0, 0.0)),
//!     PathCommand::curve_to((0.0, 10.0), (10.0, 10.0), (10.0, 0.0)),
//! ]);
//!
//! let arch = path.get(1).unwrap();
//! assert_eq!(arch.start_point(), Some(Point::new(0.0, 0.0)));
//! assert_eq!(arch.point_along(0.5), Some(Point::new(5.0, 7.5)));
//!
//! // Chord sums approach the true length (20.0) from below.
//! let coarse = path.length(Resolution::new(8).unwrap());
//! let fine = path.length(Resolution::DEFAULT);
//! assert!(coarse < fine && fine < 20.0);
//!
//! assert_eq!(
//!     path.to_markup(),
//!     "M0.0,0.0 C0.0,10.0 10.0,10.0 10.0,0.0 "
//! );
//! ```
//!
//! # Diagnostics
//!
//! Commands that cannot be decoded are skipped and reported through the
//! [`log`] facade at the `warn` level. The crate never installs a logger.
//!
//! # Feature Flags
//!
//! The following crate [feature flags](https://doc.rust-lang.org/cargo/reference/features.html#dependency-features) are available:
//!
//! - `std` (enabled by default): Get floating point functions from the standard library
//!   (likely using your target's libc).
//! - `libm`: Use floating point implementations from [libm][].
//!   This is useful for `no_std` environments.
//!   However, note that the `libm` crate is not as efficient as the standard library.
//! - `mint`: Enable `From`/`Into` conversion of pathsect and [mint][] types, enabling interoperability
//!   with other graphics libraries.
//! - `serde`: Implement `serde::Deserialize` and `serde::Serialize` on various types.
//! - `schemars`: Add best-effort support for using pathsect types in JSON schemas using [schemars][].
//!
//! At least one of `std` and `libm` is required; `std` overrides `libm`.
//! Note that pathsect does require that an allocator is available (i.e. it uses [alloc]).
//!
//! [libm]: https://docs.rs/libm
//! [mint]: https://docs.rs/mint
//! [schemars]: https://docs.rs/schemars

// LINEBENDER LINT SET - lib.rs - v1
// See https://linebender.org/wiki/canonical-lints/
// These lints aren't included in Cargo.toml because they
// shouldn't apply to examples and tests
#![warn(unused_crate_dependencies)]
#![warn(clippy::print_stdout, clippy::print_stderr)]
// END LINEBENDER LINT SET
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![cfg_attr(all(not(feature = "std"), not(test)), no_std)]
#![allow(
    clippy::unreadable_literal,
    clippy::many_single_char_names,
    clippy::excessive_precision
)]
#![allow(
    missing_debug_implementations,
    single_use_lifetimes,
    clippy::use_self,
    clippy::return_self_not_must_use,
    clippy::exhaustive_enums,
    clippy::missing_assert_message,
    clippy::allow_attributes,
    clippy::allow_attributes_without_reason
)]

#[cfg(not(any(feature = "std", feature = "libm")))]
compile_error!("pathsect requires either the `std` or `libm` feature");

// Suppress the unused_crate_dependencies lint when both std and libm are specified.
#[cfg(all(feature = "std", feature = "libm"))]
use libm as _;

extern crate alloc;

mod arclen;
mod command;
mod common;
mod cubicbez;
mod decode;
mod line;
mod param_curve;
mod path_seg;
mod point;
mod quadbez;
mod section;
mod segment;
mod svg;
mod vec2;

pub use crate::arclen::*;
pub use crate::command::*;
pub use crate::cubicbez::*;
pub use crate::decode::*;
pub use crate::line::*;
pub use crate::param_curve::*;
pub use crate::path_seg::*;
pub use crate::point::*;
pub use crate::quadbez::*;
pub use crate::section::*;
pub use crate::segment::*;
pub use crate::svg::*;
pub use crate::vec2::*;
