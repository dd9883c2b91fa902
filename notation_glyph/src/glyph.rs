// Copyright 2025 the notation_glyph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Glyph placement and rendering.

use core::cell::RefCell;
use core::fmt;
use std::rc::{Rc, Weak};

use log::{debug, trace};

use crate::kurbo::{Point, Vec2};
use crate::metrics::{self, BoundingBox, MetricsProvider, RawMetrics, ResolvedMetrics};
use crate::origin::{Axis, HorizontalOrigin, VerticalOrigin};
use crate::outline::fill_outline;
use crate::surface::{fill_cross, DrawSurface};
use crate::Error;

/// Something that knows where on the surface glyphs should sit vertically,
/// such as a staff.
pub trait VerticalAnchor {
    /// The y coordinate glyphs rendered relative to this anchor are placed at.
    fn vertical_placement(&self) -> f64;
}

/// Which glyph set a [`Glyph`] reads from, and whether lookups may be cached.
#[derive(Clone)]
pub struct GlyphOptions {
    font: Rc<dyn MetricsProvider>,
    cache: bool,
}

impl GlyphOptions {
    /// Options reading from `font`, with caching enabled.
    pub fn new(font: Rc<dyn MetricsProvider>) -> Self {
        Self { font, cache: true }
    }

    /// Enable or disable provider-side caching of metrics.
    pub fn with_cache(mut self, cache: bool) -> Self {
        self.cache = cache;
        self
    }

    pub fn font(&self) -> &Rc<dyn MetricsProvider> {
        &self.font
    }

    pub fn cache(&self) -> bool {
        self.cache
    }
}

impl fmt::Debug for GlyphOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GlyphOptions")
            .field("resolution", &self.font.resolution())
            .field("cache", &self.cache)
            .finish_non_exhaustive()
    }
}

/// Scaled horizontal extents and size of a glyph, in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlyphMetrics {
    pub x_min: f64,
    pub x_max: f64,
    pub width: f64,
    /// The raw height factor times the render scale.
    pub height: f64,
}

/// A single named glyph, sized and ready to render.
///
/// Metrics are resolved when the glyph is created and again whenever its options
/// change, so a `Glyph` always has a usable render scale. Placement state (shifts,
/// rotation, origin modes) can be changed freely afterwards.
///
/// The surface and anchor used by [`Glyph::render_relative`] are held weakly: the
/// glyph never keeps them alive.
pub struct Glyph {
    code: String,
    scale: f64,
    options: GlyphOptions,
    metrics: ResolvedMetrics,
    x_shift: f64,
    y_shift: f64,
    rotation: f64,
    horizontal_origin: HorizontalOrigin,
    vertical_origin: VerticalOrigin,
    origin_shift: Vec2,
    surface: Option<Weak<RefCell<dyn DrawSurface>>>,
    anchor: Option<Weak<dyn VerticalAnchor>>,
    debug: bool,
}

impl Glyph {
    /// Create the glyph `code` from the glyph set in `options`.
    ///
    /// `scale` multiplies the glyph's base point size and defaults to 1.
    ///
    /// Fails with [`Error::BadGlyph`] if the glyph set has no such glyph, and with
    /// [`Error::InvalidScale`] if the resulting render scale is unusable.
    pub fn new(
        code: impl Into<String>,
        scale: Option<f64>,
        options: GlyphOptions,
    ) -> Result<Self, Error> {
        let code = code.into();
        let scale = scale.unwrap_or(1.0);
        let metrics = metrics::resolve(options.font.as_ref(), &code, scale, options.cache)?;
        Ok(Self {
            code,
            scale,
            options,
            metrics,
            x_shift: 0.0,
            y_shift: 0.0,
            rotation: 0.0,
            horizontal_origin: HorizontalOrigin::Default,
            vertical_origin: VerticalOrigin::Default,
            origin_shift: Vec2::ZERO,
            surface: None,
            anchor: None,
            debug: false,
        })
    }

    /// Replace the glyph's options and resolve its metrics again.
    ///
    /// The current origin modes are re-applied to the new metrics. On error the
    /// glyph is left exactly as it was.
    pub fn set_options(&mut self, options: GlyphOptions) -> Result<&mut Self, Error> {
        let metrics = metrics::resolve(
            options.font.as_ref(),
            &self.code,
            self.scale,
            options.cache,
        )?;
        let origin_shift = origin_shift(
            &self.code,
            &metrics,
            self.horizontal_origin,
            self.vertical_origin,
        )?;
        debug!("replaced options of glyph `{}`", self.code);
        self.options = options;
        self.metrics = metrics;
        self.origin_shift = origin_shift;
        Ok(self)
    }

    /// Anchor the glyph horizontally.
    ///
    /// Any mode other than [`HorizontalOrigin::Default`] fails with
    /// [`Error::MissingBoundingBox`] for glyphs whose metrics have no bounding box.
    pub fn set_horizontal_origin(
        &mut self,
        origin: HorizontalOrigin,
    ) -> Result<&mut Self, Error> {
        self.origin_shift =
            origin_shift(&self.code, &self.metrics, origin, self.vertical_origin)?;
        self.horizontal_origin = origin;
        Ok(self)
    }

    /// Anchor the glyph vertically.
    ///
    /// Any mode other than [`VerticalOrigin::Default`] fails with
    /// [`Error::MissingBoundingBox`] for glyphs whose metrics have no bounding box.
    pub fn set_vertical_origin(&mut self, origin: VerticalOrigin) -> Result<&mut Self, Error> {
        self.origin_shift =
            origin_shift(&self.code, &self.metrics, self.horizontal_origin, origin)?;
        self.vertical_origin = origin;
        Ok(self)
    }

    pub fn set_x_shift(&mut self, x_shift: f64) -> &mut Self {
        self.x_shift = x_shift;
        self
    }

    pub fn set_y_shift(&mut self, y_shift: f64) -> &mut Self {
        self.y_shift = y_shift;
        self
    }

    /// Set the rotation, in degrees, applied about the render position.
    pub fn set_rotation(&mut self, degrees: f64) -> &mut Self {
        self.rotation = degrees;
        self
    }

    /// Mark the render position with a small cross on every render.
    pub fn set_debug(&mut self, debug: bool) -> &mut Self {
        self.debug = debug;
        self
    }

    /// Set the surface used by [`Glyph::render_relative`]. Only a weak reference is kept.
    pub fn set_surface<S: DrawSurface + 'static>(
        &mut self,
        surface: &Rc<RefCell<S>>,
    ) -> &mut Self {
        let surface: Weak<RefCell<S>> = Rc::downgrade(surface);
        self.surface = Some(surface);
        self
    }

    /// Set the anchor used by [`Glyph::render_relative`]. Only a weak reference is kept.
    pub fn set_anchor<A: VerticalAnchor + 'static>(&mut self, anchor: &Rc<A>) -> &mut Self {
        let anchor: Weak<A> = Rc::downgrade(anchor);
        self.anchor = Some(anchor);
        self
    }

    /// The surface set with [`Glyph::set_surface`], if it is still alive.
    pub fn surface(&self) -> Option<Rc<RefCell<dyn DrawSurface>>> {
        self.surface.as_ref().and_then(Weak::upgrade)
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn options(&self) -> &GlyphOptions {
        &self.options
    }

    /// The point size: the glyph set's base size times the scale factor.
    pub fn point_size(&self) -> f64 {
        self.metrics.point_size
    }

    /// Pixels per font unit.
    pub fn render_scale(&self) -> f64 {
        self.metrics.render_scale
    }

    pub fn width(&self) -> f64 {
        self.metrics.width
    }

    pub fn height(&self) -> f64 {
        self.metrics.height
    }

    /// Half the width.
    pub fn center_width(&self) -> f64 {
        self.metrics.width / 2.0
    }

    /// The scaled bounding box, for glyph sets that provide one.
    pub fn bounding_box(&self) -> Option<&BoundingBox> {
        self.metrics.bounding_box.as_ref()
    }

    pub fn raw_metrics(&self) -> &RawMetrics {
        &self.metrics.raw
    }

    pub fn metrics(&self) -> GlyphMetrics {
        let raw = &self.metrics.raw;
        let scale = self.metrics.render_scale;
        GlyphMetrics {
            x_min: raw.x_min() * scale,
            x_max: raw.x_max() * scale,
            width: self.metrics.width,
            height: raw.height_factor() * scale,
        }
    }

    pub fn horizontal_origin(&self) -> HorizontalOrigin {
        self.horizontal_origin
    }

    pub fn vertical_origin(&self) -> VerticalOrigin {
        self.vertical_origin
    }

    /// The pixel offset the origin modes add to the render position.
    pub fn origin_shift(&self) -> Vec2 {
        self.origin_shift
    }

    pub fn x_shift(&self) -> f64 {
        self.x_shift
    }

    pub fn y_shift(&self) -> f64 {
        self.y_shift
    }

    /// Rotation in degrees.
    pub fn rotation(&self) -> f64 {
        self.rotation
    }

    pub fn debug(&self) -> bool {
        self.debug
    }

    pub fn has_center_origin(&self) -> bool {
        self.options.font.has_center_origin(&self.code)
    }

    pub fn has_right_origin(&self) -> bool {
        self.options.font.has_right_origin(&self.code)
    }

    /// Render the glyph at `(x, y)` on `surface`.
    ///
    /// Glyphs drawn centered or right-aligned by their glyph set are first moved so
    /// that `x` is their left edge. The glyph is then rotated about that point and
    /// drawn with the origin shift applied. The surface's transform is saved before
    /// and restored after drawing.
    ///
    /// Fails before touching the surface with [`Error::InvalidPosition`] if either
    /// coordinate is not finite, and with [`Error::InvalidRotation`] if the rotation
    /// is not finite.
    pub fn render<S: DrawSurface + ?Sized>(
        &self,
        surface: &mut S,
        x: f64,
        y: f64,
    ) -> Result<(), Error> {
        if !(x.is_finite() && y.is_finite()) {
            return Err(Error::InvalidPosition { x, y });
        }
        if !self.rotation.is_finite() {
            return Err(Error::InvalidRotation {
                degrees: self.rotation,
            });
        }

        let mut x = x;
        if self.has_center_origin() {
            x += self.center_width();
        } else if self.has_right_origin() {
            x += self.width();
        }
        trace!("rendering glyph `{}` at ({x}, {y})", self.code);

        surface.save();
        let radians = self.rotation.to_radians();
        if radians != 0.0 {
            let pivot = Vec2::new(x, y);
            surface.translate(pivot);
            surface.rotate(radians);
            surface.translate(-pivot);
        }
        fill_outline(
            surface,
            self.metrics.raw.outline(),
            self.metrics.render_scale,
            Point::new(x, y) + self.origin_shift,
        );
        if self.debug {
            fill_cross(surface, Point::new(x, y));
        }
        surface.restore();
        Ok(())
    }

    /// Render the glyph on its configured surface, at `x` plus the x shift and at the
    /// configured anchor's vertical placement plus the y shift.
    ///
    /// No rotation or origin shift is applied. Fails with [`Error::NoAnchor`] or
    /// [`Error::NoSurface`] if either has not been set or has been dropped, and with
    /// [`Error::InvalidPosition`] if the resulting position is not finite.
    pub fn render_relative(&self, x: f64) -> Result<(), Error> {
        let anchor = self
            .anchor
            .as_ref()
            .and_then(Weak::upgrade)
            .ok_or(Error::NoAnchor)?;
        let surface = self.surface().ok_or(Error::NoSurface)?;

        let x = x + self.x_shift;
        let y = anchor.vertical_placement() + self.y_shift;
        if !(x.is_finite() && y.is_finite()) {
            return Err(Error::InvalidPosition { x, y });
        }

        let mut surface = surface.try_borrow_mut().map_err(|_| Error::SurfaceInUse)?;
        trace!(
            "rendering glyph `{}` relative to anchor at ({x}, {y})",
            self.code
        );
        fill_outline(
            &mut *surface,
            self.metrics.raw.outline(),
            self.metrics.render_scale,
            Point::new(x, y),
        );
        if self.debug {
            fill_cross(&mut *surface, Point::new(x, y));
        }
        Ok(())
    }
}

impl fmt::Debug for Glyph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Glyph")
            .field("code", &self.code)
            .field("point_size", &self.metrics.point_size)
            .field("render_scale", &self.metrics.render_scale)
            .field("width", &self.metrics.width)
            .field("height", &self.metrics.height)
            .field("horizontal_origin", &self.horizontal_origin)
            .field("vertical_origin", &self.vertical_origin)
            .field("rotation", &self.rotation)
            .field("debug", &self.debug)
            .finish_non_exhaustive()
    }
}

fn origin_shift(
    code: &str,
    metrics: &ResolvedMetrics,
    horizontal: HorizontalOrigin,
    vertical: VerticalOrigin,
) -> Result<Vec2, Error> {
    let bounds = metrics.bounding_box.as_ref();
    let missing = |axis| Error::MissingBoundingBox {
        code: code.to_owned(),
        axis,
    };
    let x = horizontal
        .shift(bounds, metrics.width)
        .ok_or_else(|| missing(Axis::Horizontal))?;
    let y = vertical
        .shift(bounds, metrics.height)
        .ok_or_else(|| missing(Axis::Vertical))?;
    Ok(Vec2::new(x, y))
}

/// Create the glyph `code` and render it once at `(x, y)`.
pub fn render_glyph<S: DrawSurface + ?Sized>(
    surface: &mut S,
    x: f64,
    y: f64,
    code: &str,
    options: GlyphOptions,
) -> Result<(), Error> {
    Glyph::new(code, None, options)?.render(surface, x, y)
}

/// Create the glyph `code` at `scale` times its base size and render it once at `(x, y)`.
pub fn render_glyph_scaled<S: DrawSurface + ?Sized>(
    surface: &mut S,
    x: f64,
    y: f64,
    scale: f64,
    code: &str,
    options: GlyphOptions,
) -> Result<(), Error> {
    Glyph::new(code, Some(scale), options)?.render(surface, x, y)
}
