// Copyright 2025 the notation_glyph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for rendering relative to a vertical anchor.

use std::cell::RefCell;
use std::rc::Rc;

use crate::util::{options, Staff};
use notation_glyph::kurbo::{Point, Shape};
use notation_glyph::{
    Error, Glyph, HorizontalOrigin, PathSurface, RecordingSurface, SurfaceCommand,
    VerticalAnchor,
};

#[test]
fn needs_an_anchor() {
    let surface = Rc::new(RefCell::new(RecordingSurface::new()));
    let mut glyph = Glyph::new("unit", None, options()).unwrap();
    glyph.set_surface(&surface);
    assert_eq!(glyph.render_relative(0.0), Err(Error::NoAnchor));
    assert!(surface.borrow().commands().is_empty());
}

#[test]
fn needs_a_surface() {
    let staff = Rc::new(Staff { y: 40.0 });
    let mut glyph = Glyph::new("unit", None, options()).unwrap();
    glyph.set_anchor(&staff);
    assert_eq!(glyph.render_relative(0.0), Err(Error::NoSurface));
    assert!(glyph.surface().is_none());
}

#[test]
fn references_are_weak() {
    let staff = Rc::new(Staff { y: 40.0 });
    let surface = Rc::new(RefCell::new(RecordingSurface::new()));
    let mut glyph = Glyph::new("unit", None, options()).unwrap();
    glyph.set_anchor(&staff).set_surface(&surface);
    assert_eq!(Rc::strong_count(&surface), 1);
    assert_eq!(Rc::strong_count(&staff), 1);

    drop(surface);
    assert_eq!(glyph.render_relative(0.0), Err(Error::NoSurface));
    let surface = Rc::new(RefCell::new(RecordingSurface::new()));
    glyph.set_surface(&surface);
    drop(staff);
    assert_eq!(glyph.render_relative(0.0), Err(Error::NoAnchor));
}

#[test]
fn places_on_the_anchor_with_shifts() {
    let staff = Rc::new(Staff { y: 40.0 });
    let surface = Rc::new(RefCell::new(RecordingSurface::new()));
    let mut glyph = Glyph::new("unit", None, options()).unwrap();
    glyph
        .set_anchor(&staff)
        .set_surface(&surface)
        .set_x_shift(2.0)
        .set_y_shift(-3.0);
    glyph.render_relative(10.0).unwrap();

    assert_eq!(
        surface.borrow().commands(),
        &[
            SurfaceCommand::BeginPath,
            SurfaceCommand::MoveTo(Point::new(12.0, 37.0)),
            SurfaceCommand::MoveTo(Point::new(12.0, 37.0)),
            SurfaceCommand::LineTo(Point::new(22.0, 37.0)),
            SurfaceCommand::LineTo(Point::new(22.0, 47.0)),
            SurfaceCommand::Fill,
        ]
    );
}

#[test]
fn ignores_rotation_and_origins() {
    let staff = Rc::new(Staff { y: 0.0 });
    let surface = Rc::new(RefCell::new(RecordingSurface::new()));
    let mut glyph = Glyph::new("restWhole", None, options()).unwrap();
    glyph.set_anchor(&staff).set_surface(&surface).set_rotation(45.0);
    glyph.set_horizontal_origin(HorizontalOrigin::Center).unwrap();
    glyph.render_relative(10.0).unwrap();

    let surface = surface.borrow();
    assert!(!surface.commands().iter().any(|command| matches!(
        command,
        SurfaceCommand::Save | SurfaceCommand::Rotate(_)
    )));
    assert_eq!(surface.path_points()[0], Point::new(10.0, 0.0));
}

#[test]
fn busy_surface() {
    let staff = Rc::new(Staff { y: 0.0 });
    let surface = Rc::new(RefCell::new(PathSurface::new()));
    let mut glyph = Glyph::new("unit", None, options()).unwrap();
    glyph.set_anchor(&staff).set_surface(&surface);

    let held = surface.borrow();
    assert_eq!(glyph.render_relative(0.0), Err(Error::SurfaceInUse));
    drop(held);
    glyph.render_relative(0.0).unwrap();
    assert_eq!(surface.borrow().fills().len(), 1);
}

#[test]
fn non_finite_anchor() {
    let staff = Rc::new(Staff { y: f64::NAN });
    let surface = Rc::new(RefCell::new(RecordingSurface::new()));
    let mut glyph = Glyph::new("unit", None, options()).unwrap();
    glyph.set_anchor(&staff).set_surface(&surface);
    let err = glyph.render_relative(0.0).unwrap_err();
    assert!(matches!(err, Error::InvalidPosition { .. }));
    assert!(surface.borrow().commands().is_empty());
}

#[test]
fn accepts_any_surface_and_anchor_type() {
    struct Fixed;
    impl VerticalAnchor for Fixed {
        fn vertical_placement(&self) -> f64 {
            12.0
        }
    }

    let anchor = Rc::new(Fixed);
    let path_surface = Rc::new(RefCell::new(PathSurface::new()));
    let recording = Rc::new(RefCell::new(RecordingSurface::new()));
    let mut glyph = Glyph::new("unit", None, options()).unwrap();

    glyph.set_anchor(&anchor).set_surface(&path_surface);
    glyph.render_relative(0.0).unwrap();
    assert_eq!(path_surface.borrow().fills().len(), 1);

    glyph.set_surface(&recording);
    glyph.render_relative(0.0).unwrap();
    assert_eq!(recording.borrow().path_points()[0], Point::new(0.0, 12.0));
    assert_eq!(path_surface.borrow().fills().len(), 1);
}

#[test]
fn debug_marks_the_anchor_position() {
    let staff = Rc::new(Staff { y: 40.0 });
    let surface = Rc::new(RefCell::new(PathSurface::new()));
    let mut glyph = Glyph::new("unit", None, options()).unwrap();
    glyph
        .set_anchor(&staff)
        .set_surface(&surface)
        .set_x_shift(2.0)
        .set_debug(true);
    glyph.render_relative(10.0).unwrap();

    let surface = surface.borrow();
    let fills = surface.fills();
    assert_eq!(fills.len(), 2);
    assert_eq!(fills[1].path.bounding_box().center(), Point::new(12.0, 40.0));
}
