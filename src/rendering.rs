// Paints a presented chart onto a GPUI window.

use gpui::*;

use crate::data_types::Canvas;
use crate::presentation::{DisplayModel, PlotFrame};
use crate::theme::ChartTheme;
use crate::transform::Coord;
use crate::utils::PixelsExt;

/// Dash pattern of the zero line, in logical units.
const ZERO_DASH: (f64, f64) = (4.0, 6.0);
/// Length of a value tick mark left of the plot, in logical units.
const TICK_LENGTH: f64 = 4.0;
const MARKER_SEGMENTS: usize = 16;

/// Scales a logical canvas coordinate into `bounds`. Each axis is stretched
/// independently, so the aspect ratio is not preserved.
pub fn to_physical(canvas: &Canvas, bounds: Bounds<Pixels>, coord: Coord) -> Point<Pixels> {
    let sx = bounds.size.width.as_f32() / canvas.width as f32;
    let sy = bounds.size.height.as_f32() / canvas.height as f32;
    Point::new(
        bounds.origin.x + px(coord.x as f32 * sx),
        bounds.origin.y + px(coord.y as f32 * sy),
    )
}

/// Logical segments of a dashed horizontal line from `x0` to `x1`.
pub fn dash_segments(x0: f64, x1: f64, y: f64) -> Vec<(Coord, Coord)> {
    let (on, off) = ZERO_DASH;
    let mut segments = Vec::new();
    let mut x = x0;
    while x < x1 {
        let end = (x + on).min(x1);
        segments.push((Coord { x, y }, Coord { x: end, y }));
        x += on + off;
    }
    segments
}

pub fn paint_chart(
    window: &mut Window,
    bounds: Bounds<Pixels>,
    canvas: &Canvas,
    model: &DisplayModel,
    theme: &ChartTheme,
) {
    let Some(frame) = model.frame() else {
        return;
    };
    let stroke = theme.trend_color(model.trend);
    let map = |c: Coord| to_physical(canvas, bounds, c);

    if let Some(zero_y) = frame.geometry.zero_y {
        let mut builder = PathBuilder::stroke(px(1.0));
        for (start, end) in dash_segments(canvas.plot_left(), canvas.plot_right(), zero_y) {
            builder.move_to(map(start));
            builder.line_to(map(end));
        }
        if let Ok(path) = builder.build() {
            window.paint_path(path, theme.zero_line);
        }
    }

    paint_area(window, canvas, frame, theme.fill_background(model.trend), &map);

    let coords = &frame.geometry.coords;
    if coords.len() >= 2 {
        let mut builder = PathBuilder::stroke(px(theme.line_width));
        builder.move_to(map(coords[0]));
        for c in &coords[1..] {
            builder.line_to(map(*c));
        }
        if let Ok(path) = builder.build() {
            window.paint_path(path, stroke);
        }
    }

    if !frame.value_ticks.is_empty() {
        let mut builder = PathBuilder::stroke(px(1.0));
        let left = canvas.plot_left();
        for tick in &frame.value_ticks {
            builder.move_to(map(Coord { x: left - TICK_LENGTH, y: tick.y }));
            builder.line_to(map(Coord { x: left, y: tick.y }));
        }
        if let Ok(path) = builder.build() {
            window.paint_path(path, theme.axis_tick);
        }
    }

    if let Some(marker) = frame.marker {
        paint_marker(window, map(marker), stroke, theme);
    }
}

fn paint_area(
    window: &mut Window,
    canvas: &Canvas,
    frame: &PlotFrame,
    fill: Background,
    map: &impl Fn(Coord) -> Point<Pixels>,
) {
    let coords = &frame.geometry.coords;
    let (Some(first), Some(last)) = (coords.first(), coords.last()) else {
        return;
    };
    if coords.len() < 2 {
        return;
    }
    let floor = canvas.plot_bottom();

    let mut builder = PathBuilder::fill();
    builder.move_to(map(*first));
    for c in &coords[1..] {
        builder.line_to(map(*c));
    }
    builder.line_to(map(Coord { x: last.x, y: floor }));
    builder.line_to(map(Coord { x: first.x, y: floor }));
    builder.line_to(map(*first));

    if let Ok(path) = builder.build() {
        window.paint_path(path, fill);
    }
}

fn paint_marker(window: &mut Window, center: Point<Pixels>, color: Hsla, theme: &ChartTheme) {
    let r = theme.marker_radius;
    let ring: Vec<Point<Pixels>> = (0..=MARKER_SEGMENTS)
        .map(|i| {
            let angle = i as f32 / MARKER_SEGMENTS as f32 * std::f32::consts::TAU;
            Point::new(center.x + px(r * angle.cos()), center.y + px(r * angle.sin()))
        })
        .collect();

    let mut fill = PathBuilder::fill();
    let mut outline = PathBuilder::stroke(px(2.0));
    fill.move_to(ring[0]);
    outline.move_to(ring[0]);
    for p in &ring[1..] {
        fill.line_to(*p);
        outline.line_to(*p);
    }

    if let Ok(path) = outline.build() {
        window.paint_path(path, theme.marker_outline);
    }
    if let Ok(path) = fill.build() {
        window.paint_path(path, color);
    }
}
