//! Text-badge icon style: a filled colored circle with one centered
//! character drawn in white.
//!
//! This is the simpler, alternate style; it predates the pictogram glyphs
//! and does not cover the history tab.

use crate::{draw, new_canvas, palette, save_png, ICON_SIZE};
use anyhow::Result;
use image::RgbaImage;
use rusttype::{point, Font, Scale};
use std::path::Path;

/// Circle inset from the canvas edge.
const MARGIN: f32 = 5.0;

/// Label point size.
const FONT_SIZE: f32 = 20.0;

/// Well-known system font files tried in order. CJK-capable fonts come
/// first since the labels are Chinese characters.
const FONT_CANDIDATES: &[&str] = &[
    "C:/Windows/Fonts/msyh.ttc",
    "C:/Windows/Fonts/arial.ttf",
    "/System/Library/Fonts/PingFang.ttc",
    "/usr/share/fonts/opentype/noto/NotoSansCJK-Regular.ttc",
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
];

/// One badge icon; produces a normal and an active PNG.
pub struct BadgeSpec {
    /// Filename stem; files are `<stem>.png` and `<stem>-active.png`.
    pub stem: &'static str,
    /// Single character drawn in the circle.
    pub label: &'static str,
}

/// The fixed badge list, in display order.
pub const BADGE_ICONS: &[BadgeSpec] = &[
    BadgeSpec { stem: "calc", label: "计" },
    BadgeSpec { stem: "savings", label: "存" },
    BadgeSpec { stem: "annual", label: "年" },
];

/// Loads the first available font from the fallback chain.
pub fn load_label_font() -> Option<Font<'static>> {
    for path in FONT_CANDIDATES {
        if let Ok(data) = std::fs::read(path) {
            // .ttc collections are read at index 0.
            if let Some(font) = Font::try_from_vec_and_index(data, 0) {
                return Some(font);
            }
        }
    }
    None
}

/// Renders one badge: a filled circle of `color` with the label centered
/// in white. With no font available the label degrades to a hollow box
/// mark per character rather than failing.
pub fn render(canvas: &mut RgbaImage, color: image::Rgba<u8>, label: &str, font: Option<&Font>) {
    let edge = ICON_SIZE as f32;
    draw::fill_ellipse(canvas, MARGIN, MARGIN, edge - MARGIN, edge - MARGIN, color);

    if label.is_empty() {
        return;
    }
    match font {
        Some(font) => draw_label(canvas, label, font),
        None => draw_missing_glyph_boxes(canvas, label.chars().count(), color),
    }
}

/// Rasterizes the label centered on the canvas, compositing glyph coverage
/// in white over the circle.
fn draw_label(canvas: &mut RgbaImage, label: &str, font: &Font) {
    let scale = Scale::uniform(FONT_SIZE);
    let v_metrics = font.v_metrics(scale);
    let glyphs: Vec<_> = font.layout(label, scale, point(0.0, v_metrics.ascent)).collect();

    let text_width = glyphs
        .iter()
        .rev()
        .filter_map(|g| g.pixel_bounding_box().map(|bb| bb.max.x))
        .next()
        .unwrap_or(0) as f32;
    let text_height = v_metrics.ascent - v_metrics.descent;
    let x_offset = ((ICON_SIZE as f32 - text_width) / 2.0) as i32;
    let y_offset = ((ICON_SIZE as f32 - text_height) / 2.0) as i32;

    for glyph in &glyphs {
        let Some(bb) = glyph.pixel_bounding_box() else {
            continue;
        };
        glyph.draw(|gx, gy, coverage| {
            let x = gx as i32 + bb.min.x + x_offset;
            let y = gy as i32 + bb.min.y + y_offset;
            if x < 0 || y < 0 || x >= ICON_SIZE as i32 || y >= ICON_SIZE as i32 {
                return;
            }
            let pixel = canvas.get_pixel_mut(x as u32, y as u32);
            for channel in 0..3 {
                let base = pixel[channel] as f32;
                pixel[channel] = (255.0 * coverage + base * (1.0 - coverage)) as u8;
            }
        });
    }
}

/// Fallback mark when no font could be loaded: one hollow white box per
/// character, the usual missing-glyph rendering.
fn draw_missing_glyph_boxes(canvas: &mut RgbaImage, count: usize, fill: image::Rgba<u8>) {
    let box_width = 16.0;
    let box_height = 20.0;
    let spacing = 4.0;
    let total = count as f32 * box_width + (count as f32 - 1.0) * spacing;
    let top = (ICON_SIZE as f32 - box_height) / 2.0;
    let mut left = (ICON_SIZE as f32 - total) / 2.0;

    for _ in 0..count {
        draw::fill_rect(canvas, left, top, left + box_width, top + box_height, palette::WHITE);
        draw::fill_rect(
            canvas,
            left + 2.0,
            top + 2.0,
            left + box_width - 2.0,
            top + box_height - 2.0,
            fill,
        );
        left += box_width + spacing;
    }
}

/// Renders every badge icon in both the normal and active color into
/// `out_dir`.
pub fn generate(out_dir: &Path) -> Result<()> {
    crate::ensure_icon_dir(out_dir)?;

    let font = load_label_font();
    if font.is_none() {
        println!("No system font found, labels will use placeholder boxes");
    }

    for spec in BADGE_ICONS {
        for (suffix, color) in [("", palette::normal()), ("-active", palette::active())] {
            let filename = format!("{}{}.png", spec.stem, suffix);
            let mut canvas = new_canvas();
            render(&mut canvas, color, spec.label, font.as_ref());
            save_png(&canvas, &out_dir.join(&filename))?;
            println!("  ✓ Generated {filename}");
        }
    }

    println!("\nAll badge icons generated");
    println!("Icons written to: {}", out_dir.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn badge_circle_fills_center() {
        let mut canvas = new_canvas();
        render(&mut canvas, palette::active(), "", None);
        assert_eq!(*canvas.get_pixel(40, 40), palette::active());
        // Corners stay transparent.
        assert_eq!(canvas.get_pixel(0, 0)[3], 0);
        assert_eq!(canvas.get_pixel(80, 80)[3], 0);
    }

    #[test]
    fn missing_font_draws_placeholder_box() {
        let mut canvas = new_canvas();
        let color = palette::normal();
        render(&mut canvas, color, "计", None);
        // Box outline is white, its interior is refilled with the badge color.
        assert_eq!(*canvas.get_pixel(33, 31), palette::WHITE);
        assert_eq!(*canvas.get_pixel(40, 40), color);
    }

    #[test]
    fn labeled_badge_keeps_circle_edge_color() {
        let mut canvas = new_canvas();
        let color = palette::normal();
        render(&mut canvas, color, "计", load_label_font().as_ref());
        // Well inside the circle but far from the centered label.
        assert_eq!(*canvas.get_pixel(12, 40), color);
    }
}
