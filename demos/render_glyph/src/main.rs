// Copyright 2025 the notation_glyph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Render a single glyph from a small built-in glyph set and print it as an SVG document.

use std::rc::Rc;

use anyhow::{bail, Context, Result};
use clap::Parser;
use notation_glyph::kurbo::{Point, Rect, Shape};
use notation_glyph::{
    FilledPath, Glyph, GlyphOptions, GlyphTable, HorizontalOrigin, InherentOrigin, LegacyMetrics,
    ModernMetrics, Outline, PathSurface, RawBoundingBox, RawMetrics, VerticalOrigin,
};

#[derive(Parser, Debug)]
#[command(about, long_about = None)]
struct Args {
    /// Code of the glyph to render
    #[arg(default_value = "noteheadBlack")]
    code: String,
    /// Horizontal render position
    #[arg(long, default_value_t = 20.0)]
    x: f64,
    /// Vertical render position
    #[arg(long, default_value_t = 40.0)]
    y: f64,
    /// Scale factor applied on top of the glyph's point size
    #[arg(long)]
    scale: Option<f64>,
    /// Clockwise rotation, in degrees
    #[arg(long, default_value_t = 0.0)]
    rotation: f64,
    /// One of `default`, `left`, `right` or `center`
    #[arg(long, default_value = "default")]
    horizontal_origin: HorizontalOrigin,
    /// One of `default`, `top`, `bottom` or `center`
    #[arg(long, default_value = "default")]
    vertical_origin: VerticalOrigin,
    /// Resolve metrics without sharing them between glyphs
    #[arg(long)]
    no_cache: bool,
    /// Print the available glyph codes and exit
    #[arg(long)]
    list: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    let table = glyph_set()?;

    if args.list {
        let mut codes: Vec<_> = table.codes().collect();
        codes.sort_unstable();
        println!("Available glyphs:");
        for code in codes {
            println!("{code}");
        }
        return Ok(());
    }

    let options = GlyphOptions::new(Rc::new(table)).with_cache(!args.no_cache);
    let mut glyph = Glyph::new(args.code.as_str(), args.scale, options)
        .with_context(|| format!("while loading glyph `{}`", args.code))?;
    glyph
        .set_horizontal_origin(args.horizontal_origin)?
        .set_vertical_origin(args.vertical_origin)?
        .set_rotation(args.rotation);

    let mut surface = PathSurface::new();
    glyph
        .render(&mut surface, args.x, args.y)
        .context("while rendering")?;

    let paths: Vec<_> = surface.fills().iter().map(FilledPath::to_device).collect();
    let Some(bounds) = paths
        .iter()
        .map(Shape::bounding_box)
        .reduce(|a, b| a.union(b))
    else {
        bail!("glyph `{}` produced no geometry", args.code);
    };
    // Keep the render position in view, with a little margin.
    let view = bounds
        .union_pt(Point::new(args.x, args.y))
        .inflate(4.0, 4.0);

    print_svg(view, paths.iter().map(|path| path.to_svg()));
    Ok(())
}

fn print_svg(view: Rect, paths: impl Iterator<Item = String>) {
    println!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="{} {} {} {}">"#,
        view.x0,
        view.y0,
        view.width(),
        view.height()
    );
    for d in paths {
        println!(r#"  <path d="{d}"/>"#);
    }
    println!("</svg>");
}

/// A handful of glyphs in both metric formats.
fn glyph_set() -> Result<GlyphTable> {
    let head_bounds = RawBoundingBox {
        north_west: Point::new(0.0, 0.5),
        south_west: Point::new(0.0, -0.5),
        north_east: Point::new(1.18, 0.5),
        south_east: Point::new(1.18, -0.5),
    };
    let rest_bounds = RawBoundingBox {
        north_west: Point::new(-0.6, 0.0),
        south_west: Point::new(-0.6, -0.5),
        north_east: Point::new(0.6, 0.0),
        south_east: Point::new(0.6, -0.5),
    };

    let mut table = GlyphTable::new(1000.0);
    table
        .insert(
            "noteheadBlack",
            RawMetrics::Modern(ModernMetrics {
                advance_width: 295.0,
                x_min: 0.0,
                x_max: 295.0,
                height_factor: 1.0,
                bounding_box: head_bounds,
                outline: Outline::parse(
                    "m 0 -31 b 295 0 72 -130 295 -84 b 0 31 223 130 0 84",
                )?,
            }),
        )
        .insert(
            "noteheadWhole",
            RawMetrics::Modern(ModernMetrics {
                advance_width: 422.0,
                x_min: 0.0,
                x_max: 422.0,
                height_factor: 1.0,
                bounding_box: RawBoundingBox {
                    north_east: Point::new(1.69, 0.5),
                    south_east: Point::new(1.69, -0.5),
                    ..head_bounds
                },
                outline: Outline::parse(
                    "m 211 -125 b 422 0 328 -125 422 -68 b 211 125 422 68 328 125 \
                     b 0 0 94 125 0 68 b 211 -125 0 -68 94 -125",
                )?,
            }),
        )
        .insert(
            "restWhole",
            RawMetrics::Modern(ModernMetrics {
                advance_width: 300.0,
                x_min: -150.0,
                x_max: 150.0,
                height_factor: 0.5,
                bounding_box: rest_bounds,
                outline: Outline::parse("m -150 0 l 150 0 l 150 -125 l -150 -125")?,
            }),
        )
        .set_inherent_origin("restWhole", InherentOrigin::Center)
        .insert(
            "flag8thUp",
            RawMetrics::Modern(ModernMetrics {
                advance_width: 264.0,
                x_min: 0.0,
                x_max: 264.0,
                height_factor: 3.25,
                bounding_box: RawBoundingBox {
                    north_west: Point::new(0.0, 0.0),
                    south_west: Point::new(0.0, -3.25),
                    north_east: Point::new(1.06, 0.0),
                    south_east: Point::new(1.06, -3.25),
                },
                outline: Outline::parse(
                    "m 0 0 q 120 -220 264 -480 q 180 -700 230 -812 l 0 -812",
                )?,
            }),
        )
        .insert(
            "v18",
            RawMetrics::Legacy(LegacyMetrics {
                x_min: 0.0,
                x_max: 323.0,
                height_factor: 1020.0,
                outline: Outline::parse(
                    "m 0 0 l 90 0 l 90 320 l 233 372 l 233 52 l 323 52 \
                     l 323 1020 l 233 1020 l 233 700 l 90 648 l 90 968 l 0 968",
                )?,
            }),
        );
    Ok(table)
}
