//! Raster drawing primitives for the 81x81 icon canvases.
//!
//! Everything here draws hard-edged (no anti-aliasing) so that output files
//! are byte-for-byte deterministic and individual pixels can be asserted on
//! in tests.

use image::{Rgba, RgbaImage};

/// Fills an ellipse inscribed in the bounding box `[x0, y0, x1, y1]`.
pub fn fill_ellipse(canvas: &mut RgbaImage, x0: f32, y0: f32, x1: f32, y1: f32, color: Rgba<u8>) {
    let center_x = (x0 + x1) / 2.0;
    let center_y = (y0 + y1) / 2.0;
    let a = (x1 - x0) / 2.0;
    let b = (y1 - y0) / 2.0;
    if a <= 0.0 || b <= 0.0 {
        return;
    }

    for_each_pixel_in(canvas, x0, y0, x1, y1, |x, y| {
        let dx = (x as f32 - center_x) / a;
        let dy = (y as f32 - center_y) / b;
        dx * dx + dy * dy <= 1.0
    }, color);
}

/// Strokes the outline of an ellipse inscribed in `[x0, y0, x1, y1]`.
/// The stroke extends `width` pixels inward from the outline.
pub fn stroke_ellipse(
    canvas: &mut RgbaImage,
    x0: f32,
    y0: f32,
    x1: f32,
    y1: f32,
    color: Rgba<u8>,
    width: f32,
) {
    let center_x = (x0 + x1) / 2.0;
    let center_y = (y0 + y1) / 2.0;
    let a = (x1 - x0) / 2.0;
    let b = (y1 - y0) / 2.0;
    if a <= 0.0 || b <= 0.0 {
        return;
    }
    let inner_a = a - width;
    let inner_b = b - width;

    for_each_pixel_in(canvas, x0, y0, x1, y1, |x, y| {
        let dx = x as f32 - center_x;
        let dy = y as f32 - center_y;
        let outer = (dx / a).powi(2) + (dy / b).powi(2);
        if outer > 1.0 {
            return false;
        }
        // Inside the outer boundary; exclude the hole when there is one.
        if inner_a > 0.0 && inner_b > 0.0 {
            let inner = (dx / inner_a).powi(2) + (dy / inner_b).powi(2);
            inner > 1.0
        } else {
            true
        }
    }, color);
}

/// Draws a line segment from `from` to `to` with the given stroke width.
pub fn draw_line(
    canvas: &mut RgbaImage,
    from: (f32, f32),
    to: (f32, f32),
    color: Rgba<u8>,
    width: f32,
) {
    let half = (width / 2.0).max(0.5);
    let x0 = from.0.min(to.0) - half;
    let y0 = from.1.min(to.1) - half;
    let x1 = from.0.max(to.0) + half;
    let y1 = from.1.max(to.1) + half;

    for_each_pixel_in(canvas, x0, y0, x1, y1, |x, y| {
        segment_distance(x as f32, y as f32, from, to) <= half
    }, color);
}

/// Draws an open polyline through `points`.
pub fn draw_polyline(canvas: &mut RgbaImage, points: &[(f32, f32)], color: Rgba<u8>, width: f32) {
    for pair in points.windows(2) {
        draw_line(canvas, pair[0], pair[1], color, width);
    }
}

/// Fills the axis-aligned rectangle `[x0, y0, x1, y1]`.
pub fn fill_rect(canvas: &mut RgbaImage, x0: f32, y0: f32, x1: f32, y1: f32, color: Rgba<u8>) {
    for_each_pixel_in(canvas, x0, y0, x1, y1, |_, _| true, color);
}

/// Fills a rectangle with circular corners of the given radius.
pub fn fill_rounded_rect(
    canvas: &mut RgbaImage,
    x0: f32,
    y0: f32,
    x1: f32,
    y1: f32,
    radius: f32,
    color: Rgba<u8>,
) {
    let radius = radius.min((x1 - x0) / 2.0).min((y1 - y0) / 2.0);

    for_each_pixel_in(canvas, x0, y0, x1, y1, |x, y| {
        let px = x as f32;
        let py = y as f32;
        // Distance to the nearest corner circle center, but only when the
        // pixel sits in a corner quadrant.
        let cx = px.clamp(x0 + radius, x1 - radius);
        let cy = py.clamp(y0 + radius, y1 - radius);
        let dx = px - cx;
        let dy = py - cy;
        dx * dx + dy * dy <= radius * radius
    }, color);
}

/// Visits every canvas pixel inside the clamped bounding box and paints the
/// ones the predicate accepts.
fn for_each_pixel_in<F>(
    canvas: &mut RgbaImage,
    x0: f32,
    y0: f32,
    x1: f32,
    y1: f32,
    inside: F,
    color: Rgba<u8>,
) where
    F: Fn(u32, u32) -> bool,
{
    if x1 < 0.0 || y1 < 0.0 || x0 >= canvas.width() as f32 || y0 >= canvas.height() as f32 {
        return;
    }
    let min_x = x0.floor().max(0.0) as u32;
    let min_y = y0.floor().max(0.0) as u32;
    let max_x = (x1.ceil() as i64).clamp(0, canvas.width() as i64 - 1) as u32;
    let max_y = (y1.ceil() as i64).clamp(0, canvas.height() as i64 - 1) as u32;

    for y in min_y..=max_y {
        for x in min_x..=max_x {
            if inside(x, y) {
                canvas.put_pixel(x, y, color);
            }
        }
    }
}

/// Distance from point `(px, py)` to the segment `from`..`to`.
fn segment_distance(px: f32, py: f32, from: (f32, f32), to: (f32, f32)) -> f32 {
    let (ax, ay) = from;
    let (bx, by) = to;
    let abx = bx - ax;
    let aby = by - ay;
    let len_sq = abx * abx + aby * aby;
    if len_sq == 0.0 {
        return ((px - ax).powi(2) + (py - ay).powi(2)).sqrt();
    }
    let t = (((px - ax) * abx + (py - ay) * aby) / len_sq).clamp(0.0, 1.0);
    let cx = ax + t * abx;
    let cy = ay + t * aby;
    ((px - cx).powi(2) + (py - cy).powi(2)).sqrt()
}
