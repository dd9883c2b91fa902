// Copyright 2025 the notation_glyph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A drawing surface that records the calls made on it.

use crate::kurbo::{Point, Vec2};
use crate::surface::DrawSurface;

/// A single call made on a [`RecordingSurface`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SurfaceCommand {
    BeginPath,
    MoveTo(Point),
    LineTo(Point),
    QuadTo(Point, Point),
    CurveTo(Point, Point, Point),
    Fill,
    Save,
    Restore,
    Translate(Vec2),
    Rotate(f64),
}

/// A [`DrawSurface`] that keeps a log of every call, in order.
#[derive(Debug, Default, Clone)]
pub struct RecordingSurface {
    commands: Vec<SurfaceCommand>,
}

impl RecordingSurface {
    /// Create an empty recording.
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorded commands
    pub fn commands(&self) -> &[SurfaceCommand] {
        &self.commands
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }

    /// Net number of `save` calls not matched by a `restore`.
    pub fn open_saves(&self) -> isize {
        self.commands.iter().fold(0, |depth, command| match command {
            SurfaceCommand::Save => depth + 1,
            SurfaceCommand::Restore => depth - 1,
            _ => depth,
        })
    }

    /// The points the path passes through, in drawing order.
    ///
    /// Only move and line targets and curve end points are included.
    pub fn path_points(&self) -> Vec<Point> {
        self.commands
            .iter()
            .filter_map(|command| match *command {
                SurfaceCommand::MoveTo(p) | SurfaceCommand::LineTo(p) => Some(p),
                SurfaceCommand::QuadTo(_, p) | SurfaceCommand::CurveTo(_, _, p) => Some(p),
                _ => None,
            })
            .collect()
    }
}

impl DrawSurface for RecordingSurface {
    fn begin_path(&mut self) {
        self.commands.push(SurfaceCommand::BeginPath);
    }

    fn move_to(&mut self, p: Point) {
        self.commands.push(SurfaceCommand::MoveTo(p));
    }

    fn line_to(&mut self, p: Point) {
        self.commands.push(SurfaceCommand::LineTo(p));
    }

    fn quad_to(&mut self, p1: Point, p2: Point) {
        self.commands.push(SurfaceCommand::QuadTo(p1, p2));
    }

    fn curve_to(&mut self, p1: Point, p2: Point, p3: Point) {
        self.commands.push(SurfaceCommand::CurveTo(p1, p2, p3));
    }

    fn fill(&mut self) {
        self.commands.push(SurfaceCommand::Fill);
    }

    fn save(&mut self) {
        self.commands.push(SurfaceCommand::Save);
    }

    fn restore(&mut self) {
        self.commands.push(SurfaceCommand::Restore);
    }

    fn translate(&mut self, offset: Vec2) {
        self.commands.push(SurfaceCommand::Translate(offset));
    }

    fn rotate(&mut self, radians: f64) {
        self.commands.push(SurfaceCommand::Rotate(radians));
    }
}
