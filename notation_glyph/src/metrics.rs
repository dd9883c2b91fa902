// Copyright 2025 the notation_glyph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Raw glyph metrics and their resolution into pixel geometry.
//!
//! Glyph sets come in two shapes. Modern sets carry an advance width and a bounding
//! box expressed in a 250-unit staff-space grid; legacy sets only carry the horizontal
//! extents and a height factor, already in font units. [`RawMetrics`] keeps the two
//! apart so that the scale logic is a single exhaustive match.

use std::rc::Rc;

use log::debug;

use crate::kurbo::Point;
use crate::outline::Outline;
use crate::Error;

/// Grid factor by which modern glyph sets pre-divide heights and bounding boxes.
pub const GRID_UNITS: f64 = 250.0;

/// The four corners of a glyph's bounding box, in raw grid units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RawBoundingBox {
    pub north_west: Point,
    pub south_west: Point,
    pub north_east: Point,
    pub south_east: Point,
}

/// The four corners of a glyph's bounding box, in pixels.
///
/// Coordinates are in the glyph set's orientation: they are scaled, not flipped.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub north_west: Point,
    pub south_west: Point,
    pub north_east: Point,
    pub south_east: Point,
}

impl RawBoundingBox {
    /// Scale every corner by `factor`.
    pub fn scale(&self, factor: f64) -> BoundingBox {
        let scale = |p: Point| Point::new(p.x * factor, p.y * factor);
        BoundingBox {
            north_west: scale(self.north_west),
            south_west: scale(self.south_west),
            north_east: scale(self.north_east),
            south_east: scale(self.south_east),
        }
    }
}

/// Metrics from a glyph set that reports advance widths and bounding boxes.
#[derive(Debug, Clone, PartialEq)]
pub struct ModernMetrics {
    pub advance_width: f64,
    pub x_min: f64,
    pub x_max: f64,
    /// Glyph height in grid units.
    pub height_factor: f64,
    pub bounding_box: RawBoundingBox,
    pub outline: Outline,
}

/// Metrics from a glyph set that only reports horizontal extents and a height.
#[derive(Debug, Clone, PartialEq)]
pub struct LegacyMetrics {
    pub x_min: f64,
    pub x_max: f64,
    /// Glyph height in font units.
    pub height_factor: f64,
    pub outline: Outline,
}

/// Raw, unscaled metrics for one glyph as supplied by a [`MetricsProvider`].
#[derive(Debug, Clone, PartialEq)]
pub enum RawMetrics {
    Modern(ModernMetrics),
    Legacy(LegacyMetrics),
}

impl RawMetrics {
    pub fn outline(&self) -> &Outline {
        match self {
            Self::Modern(m) => &m.outline,
            Self::Legacy(m) => &m.outline,
        }
    }

    pub fn x_min(&self) -> f64 {
        match self {
            Self::Modern(m) => m.x_min,
            Self::Legacy(m) => m.x_min,
        }
    }

    pub fn x_max(&self) -> f64 {
        match self {
            Self::Modern(m) => m.x_max,
            Self::Legacy(m) => m.x_max,
        }
    }

    pub fn height_factor(&self) -> f64 {
        match self {
            Self::Modern(m) => m.height_factor,
            Self::Legacy(m) => m.height_factor,
        }
    }

    /// Short name of the metric format, for diagnostics.
    pub fn format_name(&self) -> &'static str {
        match self {
            Self::Modern(_) => "modern",
            Self::Legacy(_) => "legacy",
        }
    }
}

/// A source of glyph metrics and outlines.
///
/// A provider stands for one glyph set: it owns the set's internal resolution and
/// whatever caching it sees fit. Glyphs never cache provider data themselves.
pub trait MetricsProvider {
    /// Font units per em of the glyph set.
    fn resolution(&self) -> f64;

    /// Look up the raw metrics for `code`, or `None` if the set has no such glyph.
    ///
    /// `cache` is a hint; a provider may ignore it.
    fn resolve_metrics(&self, code: &str, cache: bool) -> Option<Rc<RawMetrics>>;

    /// The point size `code` is drawn at before any caller-supplied scale.
    fn base_point_size(&self, code: &str) -> f64;

    /// Whether `code` is drawn centered on its x position.
    fn has_center_origin(&self, _code: &str) -> bool {
        false
    }

    /// Whether `code` is drawn right-aligned on its x position.
    fn has_right_origin(&self, _code: &str) -> bool {
        false
    }
}

/// Metrics resolved for a glyph at a particular point size.
#[derive(Debug, Clone)]
pub(crate) struct ResolvedMetrics {
    pub(crate) raw: Rc<RawMetrics>,
    pub(crate) point_size: f64,
    pub(crate) render_scale: f64,
    pub(crate) width: f64,
    pub(crate) height: f64,
    pub(crate) bounding_box: Option<BoundingBox>,
}

/// Fetch the metrics for `code` and derive its render scale and pixel geometry.
pub(crate) fn resolve(
    provider: &dyn MetricsProvider,
    code: &str,
    scale: f64,
    cache: bool,
) -> Result<ResolvedMetrics, Error> {
    let raw = provider
        .resolve_metrics(code, cache)
        .ok_or_else(|| Error::BadGlyph {
            code: code.to_owned(),
        })?;
    let point_size = provider.base_point_size(code) * scale;
    let resolution = provider.resolution();

    let (render_scale, width, height, bounding_box) = match &*raw {
        RawMetrics::Modern(m) => {
            let render_scale = point_size / resolution;
            (
                render_scale,
                m.advance_width * render_scale,
                m.height_factor * GRID_UNITS * render_scale,
                Some(m.bounding_box.scale(GRID_UNITS * render_scale)),
            )
        }
        RawMetrics::Legacy(m) => {
            // Legacy sets are measured in hundredths of an inch at 72 dpi.
            let render_scale = point_size * 72.0 / (resolution * 100.0);
            (
                render_scale,
                (m.x_max - m.x_min) * render_scale,
                m.height_factor * render_scale,
                None,
            )
        }
    };

    if !(render_scale.is_finite() && render_scale > 0.0) {
        return Err(Error::InvalidScale {
            code: code.to_owned(),
            scale: render_scale,
        });
    }
    debug!(
        "resolved glyph `{code}` ({} metrics): point size {point_size}, render scale {render_scale}",
        raw.format_name()
    );

    Ok(ResolvedMetrics {
        raw,
        point_size,
        render_scale,
        width: width.max(0.0),
        height: height.max(0.0),
        bounding_box,
    })
}
