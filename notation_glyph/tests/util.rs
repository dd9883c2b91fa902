// Copyright 2025 the notation_glyph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Utility functions shared across different tests.

use std::rc::Rc;

use notation_glyph::kurbo::{Point, Vec2};
use notation_glyph::{
    GlyphOptions, GlyphTable, InherentOrigin, LegacyMetrics, ModernMetrics, Outline,
    RawBoundingBox, RawMetrics, VerticalAnchor,
};

pub(crate) const RESOLUTION: f64 = 1000.0;
pub(crate) const POINT_SIZE: f64 = 38.0;

/// Advance width of the modern notehead, in font units.
pub(crate) const HEAD_ADVANCE: f64 = 295.0;
/// Height factor of the modern notehead, in grid units.
pub(crate) const HEAD_HEIGHT: f64 = 1.0;

pub(crate) fn head_bounds() -> RawBoundingBox {
    RawBoundingBox {
        north_west: Point::new(0.0, 0.5),
        south_west: Point::new(0.0, -0.5),
        north_east: Point::new(1.18, 0.5),
        south_east: Point::new(1.18, -0.5),
    }
}

fn modern(outline: &str) -> RawMetrics {
    RawMetrics::Modern(ModernMetrics {
        advance_width: HEAD_ADVANCE,
        x_min: 0.0,
        x_max: HEAD_ADVANCE,
        height_factor: HEAD_HEIGHT,
        bounding_box: head_bounds(),
        outline: Outline::parse(outline).unwrap(),
    })
}

/// A small glyph set:
///
/// - `noteheadBlack`: modern metrics, left aligned.
/// - `restWhole`: modern metrics, centered on its x position.
/// - `flagUp`: modern metrics, right aligned.
/// - `gClef`: legacy metrics.
/// - `unit`: modern metrics at a render scale of exactly 1.
pub(crate) fn sample_table() -> GlyphTable {
    let mut table = GlyphTable::new(RESOLUTION).with_default_point_size(POINT_SIZE);
    table
        .insert(
            "noteheadBlack",
            modern("m 0 -31 b 295 0 72 -130 295 -84 b 0 31 223 130 0 84"),
        )
        .insert("restWhole", modern("m 0 0 l 295 0 l 295 -62 l 0 -62"))
        .set_inherent_origin("restWhole", InherentOrigin::Center)
        .insert("flagUp", modern("m 0 0 q 120 -300 200 -600 l 0 -600"))
        .set_inherent_origin("flagUp", InherentOrigin::Right)
        .insert(
            "gClef",
            RawMetrics::Legacy(LegacyMetrics {
                x_min: -20.0,
                x_max: 620.0,
                height_factor: 1800.0,
                outline: Outline::parse("m 0 0 l 600 0 l 600 1800 l 0 1800").unwrap(),
            }),
        )
        .insert("unit", modern("m 0 0 l 10 0 l 10 -10"))
        .set_point_size("unit", RESOLUTION);
    table
}

pub(crate) fn options() -> GlyphOptions {
    GlyphOptions::new(Rc::new(sample_table()))
}

#[track_caller]
pub(crate) fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}

#[track_caller]
pub(crate) fn assert_point_close(actual: Point, expected: Point) {
    assert!(
        (actual - expected).hypot() < 1e-9,
        "expected {expected:?}, got {actual:?}"
    );
}

#[track_caller]
pub(crate) fn assert_vec_close(actual: Vec2, expected: Vec2) {
    assert!(
        (actual - expected).hypot() < 1e-9,
        "expected {expected:?}, got {actual:?}"
    );
}

/// A staff that places glyphs on a fixed line.
pub(crate) struct Staff {
    pub(crate) y: f64,
}

impl VerticalAnchor for Staff {
    fn vertical_placement(&self) -> f64 {
        self.y
    }
}
