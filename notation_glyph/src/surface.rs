// Copyright 2025 the notation_glyph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The drawing capability glyphs render onto.

use crate::kurbo::{Affine, BezPath, Point, Vec2};

/// A canvas-like 2D drawing surface.
///
/// Points are given in the surface's user space; the surface applies its current
/// transform itself. Glyphs only ever fill, so there is no stroke operation.
pub trait DrawSurface {
    /// Discard the current path and start a new one.
    fn begin_path(&mut self);
    fn move_to(&mut self, p: Point);
    fn line_to(&mut self, p: Point);
    /// Quadratic Bézier segment with control point `p1` ending at `p2`.
    fn quad_to(&mut self, p1: Point, p2: Point);
    /// Cubic Bézier segment with control points `p1`, `p2` ending at `p3`.
    fn curve_to(&mut self, p1: Point, p2: Point, p3: Point);
    /// Fill the current path.
    fn fill(&mut self);
    /// Push the current transform onto the state stack.
    fn save(&mut self);
    /// Pop the state stack, restoring the transform saved last.
    fn restore(&mut self);
    fn translate(&mut self, offset: Vec2);
    /// Rotate the user space clockwise (on a y-down surface) by `radians`.
    fn rotate(&mut self, radians: f64);
}

/// Half the length of each arm of [`fill_cross`].
pub const CROSS_ARM: f64 = 3.0;

/// Fill a small plus-shaped marker centred on `center`, one pixel thick.
pub fn fill_cross<S: DrawSurface + ?Sized>(surface: &mut S, center: Point) {
    const HALF: f64 = 0.5;
    let outline = [
        (-CROSS_ARM, -HALF),
        (-HALF, -HALF),
        (-HALF, -CROSS_ARM),
        (HALF, -CROSS_ARM),
        (HALF, -HALF),
        (CROSS_ARM, -HALF),
        (CROSS_ARM, HALF),
        (HALF, HALF),
        (HALF, CROSS_ARM),
        (-HALF, CROSS_ARM),
        (-HALF, HALF),
        (-CROSS_ARM, HALF),
    ];
    surface.begin_path();
    let mut points = outline.iter().map(|&(dx, dy)| center + Vec2::new(dx, dy));
    if let Some(start) = points.next() {
        surface.move_to(start);
    }
    for p in points {
        surface.line_to(p);
    }
    surface.fill();
}

/// A path that was filled on a [`PathSurface`].
#[derive(Debug, Clone, PartialEq)]
pub struct FilledPath {
    /// The path, in user space.
    pub path: BezPath,
    /// The transform that was current when the path was filled.
    pub transform: Affine,
}

impl FilledPath {
    /// The path with its transform applied.
    pub fn to_device(&self) -> BezPath {
        self.transform * self.path.clone()
    }
}

/// A [`DrawSurface`] that collects filled paths as [`kurbo`](crate::kurbo) geometry.
#[derive(Debug, Default)]
pub struct PathSurface {
    path: BezPath,
    transform: Affine,
    state_stack: Vec<Affine>,
    fills: Vec<FilledPath>,
}

impl PathSurface {
    /// Create an empty surface with the identity transform.
    pub fn new() -> Self {
        Self::default()
    }

    /// Every path filled so far, oldest first.
    pub fn fills(&self) -> &[FilledPath] {
        &self.fills
    }

    /// Take the filled paths, leaving the surface's transform state untouched.
    pub fn take_fills(&mut self) -> Vec<FilledPath> {
        core::mem::take(&mut self.fills)
    }

    /// The path currently being built.
    pub fn current_path(&self) -> &BezPath {
        &self.path
    }

    pub fn transform(&self) -> Affine {
        self.transform
    }

    /// Number of saved states that have not been restored.
    pub fn save_depth(&self) -> usize {
        self.state_stack.len()
    }
}

impl DrawSurface for PathSurface {
    fn begin_path(&mut self) {
        self.path.truncate(0);
    }

    fn move_to(&mut self, p: Point) {
        self.path.move_to(p);
    }

    fn line_to(&mut self, p: Point) {
        self.path.line_to(p);
    }

    fn quad_to(&mut self, p1: Point, p2: Point) {
        self.path.quad_to(p1, p2);
    }

    fn curve_to(&mut self, p1: Point, p2: Point, p3: Point) {
        self.path.curve_to(p1, p2, p3);
    }

    fn fill(&mut self) {
        self.fills.push(FilledPath {
            path: self.path.clone(),
            transform: self.transform,
        });
    }

    fn save(&mut self) {
        self.state_stack.push(self.transform);
    }

    fn restore(&mut self) {
        // Unbalanced restores are ignored, as on a canvas.
        if let Some(transform) = self.state_stack.pop() {
            self.transform = transform;
        }
    }

    fn translate(&mut self, offset: Vec2) {
        self.transform *= Affine::translate(offset);
    }

    fn rotate(&mut self, radians: f64) {
        self.transform *= Affine::rotate(radians);
    }
}
