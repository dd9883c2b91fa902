// Copyright 2025 the notation_glyph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Notation Glyph renders single named glyphs from a vector glyph set (noteheads, clefs,
//! accidentals, rests and the like) onto an abstract 2D drawing surface.
//!
//! A [`Glyph`] is built from a glyph code, an optional scale factor and a set of
//! [`GlyphOptions`] naming the [`MetricsProvider`] to read font data from. Construction
//! resolves the glyph's metrics eagerly: the raw font units are converted into a single
//! render scale, a pixel width and height and, for fonts that supply one, a bounding box.
//!
//! Rendering interprets the glyph's [`Outline`] (a compact move/line/quadratic/cubic
//! instruction stream) into calls on a [`DrawSurface`], flipping the font's upward-growing
//! y axis into the surface's downward-growing one.
//!
//! ```
//! use std::rc::Rc;
//! use notation_glyph::{
//!     Glyph, GlyphOptions, GlyphTable, LegacyMetrics, Outline, PathSurface, RawMetrics,
//! };
//!
//! let mut table = GlyphTable::new(1000.0);
//! table.insert(
//!     "v1d",
//!     RawMetrics::Legacy(LegacyMetrics {
//!         x_min: 0.0,
//!         x_max: 500.0,
//!         height_factor: 500.0,
//!         outline: Outline::parse("m 0 0 l 500 0 l 500 500 l 0 500").unwrap(),
//!     }),
//! );
//!
//! let glyph = Glyph::new("v1d", None, GlyphOptions::new(Rc::new(table))).unwrap();
//! let mut surface = PathSurface::new();
//! glyph.render(&mut surface, 10.0, 40.0).unwrap();
//! assert_eq!(surface.fills().len(), 1);
//! ```
//!
//! # Contents
//!
//! - [`metrics`]: raw metric formats, the provider trait, and scale resolution.
//! - [`origin`]: horizontal and vertical anchor modes.
//! - [`outline`]: the outline instruction stream and its interpreter.
//! - [`surface`] and [`recording`]: the drawing capability and two implementations of it.
//! - [`table`]: an in-memory glyph set implementing [`MetricsProvider`].

// LINEBENDER LINT SET - lib.rs - v3
// See https://linebender.org/wiki/canonical-lints/
// These lints shouldn't apply to examples or tests.
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
// These lints shouldn't apply to examples.
#![warn(clippy::print_stdout, clippy::print_stderr)]
// Targeting e.g. 32-bit means structs containing usize can give false positives for 64-bit.
#![cfg_attr(target_pointer_width = "64", warn(clippy::trivially_copy_pass_by_ref))]
// END LINEBENDER LINT SET
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![forbid(unsafe_code)]

mod glyph;

pub mod metrics;
pub mod origin;
pub mod outline;
pub mod recording;
pub mod surface;
pub mod table;

/// Styling and composition primitives.
pub use peniko;
/// 2D geometry, with a focus on curves.
pub use peniko::kurbo;

pub use glyph::{
    render_glyph, render_glyph_scaled, Glyph, GlyphMetrics, GlyphOptions, VerticalAnchor,
};
pub use metrics::{
    BoundingBox, LegacyMetrics, MetricsProvider, ModernMetrics, RawBoundingBox, RawMetrics,
};
pub use origin::{Axis, HorizontalOrigin, VerticalOrigin};
pub use outline::{Outline, OutlineToken};
pub use recording::{RecordingSurface, SurfaceCommand};
pub use surface::{fill_cross, DrawSurface, FilledPath, PathSurface};
pub use table::{GlyphTable, InherentOrigin};

use thiserror::Error;

/// Errors that can occur when resolving, configuring or rendering a glyph.
#[derive(Error, Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum Error {
    /// The metrics provider has no metrics for the glyph code.
    #[error("BadGlyph: glyph `{code}` is not initialized")]
    BadGlyph { code: String },
    /// An origin keyword is not one of the recognised modes.
    #[error("invalid {axis} origin `{name}`")]
    InvalidOrigin { axis: Axis, name: String },
    /// An origin mode needs a bounding box, but the glyph's metrics don't provide one.
    #[error("invalid {axis} origin: glyph `{code}` has no bounding box")]
    MissingBoundingBox { code: String, axis: Axis },
    /// A render position is NaN or infinite.
    #[error("X or Y position is undefined or NaN ({x}, {y})")]
    InvalidPosition { x: f64, y: f64 },
    /// The glyph's rotation is NaN or infinite.
    #[error("rotation of {degrees} degrees is not finite")]
    InvalidRotation { degrees: f64 },
    /// Relative rendering was requested without a live drawing surface.
    #[error("GlyphError: no valid surface")]
    NoSurface,
    /// Relative rendering was requested without a live vertical anchor.
    #[error("GlyphError: no valid anchor")]
    NoAnchor,
    /// The configured drawing surface is already mutably borrowed elsewhere.
    #[error("GlyphError: surface is already in use")]
    SurfaceInUse,
    /// The resolved render scale is not strictly positive and finite.
    #[error("glyph `{code}` resolved to an unusable render scale {scale}")]
    InvalidScale { code: String, scale: f64 },
    /// A textual outline contains a token that is neither an opcode nor a number.
    #[error("malformed outline token `{token}`")]
    MalformedOutline { token: String },
}

impl Error {
    /// Whether this error rejects an origin mode, either because the keyword is
    /// unknown or because the glyph has no bounding box to resolve it against.
    pub fn is_invalid_origin(&self) -> bool {
        matches!(
            self,
            Self::InvalidOrigin { .. } | Self::MissingBoundingBox { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_origin_grouping() {
        let unknown = Error::InvalidOrigin {
            axis: Axis::Horizontal,
            name: "middle".into(),
        };
        let missing = Error::MissingBoundingBox {
            code: "v1d".into(),
            axis: Axis::Vertical,
        };
        assert!(unknown.is_invalid_origin());
        assert!(missing.is_invalid_origin());
        assert!(!Error::NoSurface.is_invalid_origin());
    }

    #[test]
    fn messages_name_the_axis() {
        let err = Error::InvalidOrigin {
            axis: Axis::Vertical,
            name: "middle".into(),
        };
        assert_eq!(err.to_string(), "invalid vertical origin `middle`");
    }
}
