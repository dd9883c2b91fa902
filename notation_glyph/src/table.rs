// Copyright 2025 the notation_glyph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! An in-memory glyph set.

use std::collections::HashMap;
use std::rc::Rc;

use crate::metrics::{MetricsProvider, RawMetrics};

/// Point size used for glyphs without an explicit size.
pub const DEFAULT_POINT_SIZE: f64 = 38.0;

/// Where a glyph's outline places its own origin horizontally.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum InherentOrigin {
    #[default]
    Left,
    Center,
    Right,
}

/// A [`MetricsProvider`] backed by hash maps.
///
/// With caching requested, every lookup of a glyph shares one allocation of its
/// metrics; without it, each lookup gets its own copy.
#[derive(Debug, Clone)]
pub struct GlyphTable {
    resolution: f64,
    default_point_size: f64,
    metrics: HashMap<String, Rc<RawMetrics>>,
    point_sizes: HashMap<String, f64>,
    origins: HashMap<String, InherentOrigin>,
}

impl GlyphTable {
    /// Create an empty glyph set with the given units per em.
    pub fn new(resolution: f64) -> Self {
        Self {
            resolution,
            default_point_size: DEFAULT_POINT_SIZE,
            metrics: HashMap::new(),
            point_sizes: HashMap::new(),
            origins: HashMap::new(),
        }
    }

    /// Set the point size of glyphs that have no size of their own.
    pub fn with_default_point_size(mut self, size: f64) -> Self {
        self.default_point_size = size;
        self
    }

    /// Add or replace a glyph's metrics.
    pub fn insert(&mut self, code: impl Into<String>, metrics: RawMetrics) -> &mut Self {
        self.metrics.insert(code.into(), Rc::new(metrics));
        self
    }

    /// Override the point size of one glyph.
    pub fn set_point_size(&mut self, code: impl Into<String>, size: f64) -> &mut Self {
        self.point_sizes.insert(code.into(), size);
        self
    }

    /// Register where a glyph's outline puts its horizontal origin.
    pub fn set_inherent_origin(
        &mut self,
        code: impl Into<String>,
        origin: InherentOrigin,
    ) -> &mut Self {
        self.origins.insert(code.into(), origin);
        self
    }

    pub fn inherent_origin(&self, code: &str) -> InherentOrigin {
        self.origins.get(code).copied().unwrap_or_default()
    }

    /// Codes of all glyphs with metrics, in no particular order.
    pub fn codes(&self) -> impl Iterator<Item = &str> {
        self.metrics.keys().map(String::as_str)
    }

    pub fn contains(&self, code: &str) -> bool {
        self.metrics.contains_key(code)
    }

    /// Number of glyphs with metrics.
    pub fn len(&self) -> usize {
        self.metrics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.metrics.is_empty()
    }
}

impl MetricsProvider for GlyphTable {
    fn resolution(&self) -> f64 {
        self.resolution
    }

    fn resolve_metrics(&self, code: &str, cache: bool) -> Option<Rc<RawMetrics>> {
        let metrics = self.metrics.get(code)?;
        if cache {
            Some(Rc::clone(metrics))
        } else {
            Some(Rc::new(RawMetrics::clone(metrics)))
        }
    }

    fn base_point_size(&self, code: &str) -> f64 {
        self.point_sizes
            .get(code)
            .copied()
            .unwrap_or(self.default_point_size)
    }

    fn has_center_origin(&self, code: &str) -> bool {
        self.inherent_origin(code) == InherentOrigin::Center
    }

    fn has_right_origin(&self, code: &str) -> bool {
        self.inherent_origin(code) == InherentOrigin::Right
    }
}
