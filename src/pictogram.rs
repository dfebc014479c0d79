//! Hand-tuned pictogram glyphs for the tab bar.
//!
//! Each glyph is a fixed sequence of stroked/filled primitives at literal
//! pixel coordinates relative to the canvas center. This is the
//! authoritative icon style: it covers all four tabs, including history.

use crate::{
    draw::{draw_line, draw_polyline, fill_ellipse, fill_rect, fill_rounded_rect, stroke_ellipse},
    manifest::{self, TabBarItem},
    new_canvas, palette, save_png, ICON_SIZE,
};
use anyhow::Result;
use image::{Rgba, RgbaImage};
use std::path::Path;

const CENTER: f32 = (ICON_SIZE / 2) as f32;

/// The glyph drawn for one logical tab.
#[derive(Debug, Clone, Copy)]
pub enum Glyph {
    Coin,
    PiggyBank,
    TrendChart,
    Clock,
}

/// One logical tab bar icon; each produces a normal and an active PNG.
pub struct IconSpec {
    /// Filename stem; files are `<stem>.png` and `<stem>-active.png`.
    pub stem: &'static str,
    pub glyph: Glyph,
    /// Tab label used in the generated manifest.
    pub label: &'static str,
}

/// The fixed tab bar, in display order.
pub const TABBAR_ICONS: &[IconSpec] = &[
    IconSpec { stem: "calc", glyph: Glyph::Coin, label: "计算工具" },
    IconSpec { stem: "savings", glyph: Glyph::PiggyBank, label: "存钱计划" },
    IconSpec { stem: "annual", glyph: Glyph::TrendChart, label: "年化收益" },
    IconSpec { stem: "history", glyph: Glyph::Clock, label: "历史记录" },
];

pub fn draw_glyph(canvas: &mut RgbaImage, glyph: Glyph, color: Rgba<u8>) {
    match glyph {
        Glyph::Coin => draw_coin(canvas, color),
        Glyph::PiggyBank => draw_piggy_bank(canvas, color),
        Glyph::TrendChart => draw_trend_chart(canvas, color),
        Glyph::Clock => draw_clock(canvas, color),
    }
}

/// Coin with a currency mark, for the earnings calculator tab.
fn draw_coin(canvas: &mut RgbaImage, color: Rgba<u8>) {
    let coin_radius = 28.0;

    // Thick outer rim and a thin inner ring for depth.
    stroke_ellipse(
        canvas,
        CENTER - coin_radius,
        CENTER - coin_radius,
        CENTER + coin_radius,
        CENTER + coin_radius,
        color,
        3.0,
    );
    let inner_radius = coin_radius - 4.0;
    stroke_ellipse(
        canvas,
        CENTER - inner_radius,
        CENTER - inner_radius,
        CENTER + inner_radius,
        CENTER + inner_radius,
        color,
        1.0,
    );

    // Simplified currency mark: one vertical stroke, three horizontal bars.
    draw_line(canvas, (CENTER, CENTER - 12.0), (CENTER, CENTER + 12.0), color, 2.0);
    draw_line(canvas, (CENTER - 8.0, CENTER - 8.0), (CENTER + 8.0, CENTER - 8.0), color, 2.0);
    draw_line(canvas, (CENTER - 6.0, CENTER), (CENTER + 6.0, CENTER), color, 2.0);
    draw_line(canvas, (CENTER - 8.0, CENTER + 8.0), (CENTER + 8.0, CENTER + 8.0), color, 2.0);
}

/// Piggy bank silhouette with eyes and nose, for the savings tab.
fn draw_piggy_bank(canvas: &mut RgbaImage, color: Rgba<u8>) {
    let body_width = 50.0;
    let body_height = 60.0;
    let body_left = CENTER - body_width / 2.0;
    let body_top = CENTER - body_height / 2.0 + 5.0;

    // Body outline.
    stroke_ellipse(
        canvas,
        body_left,
        body_top,
        body_left + body_width,
        body_top + body_height,
        color,
        3.0,
    );

    // Coin slot above the body.
    let slot_width = 20.0;
    let slot_height = 8.0;
    let slot_x = CENTER - slot_width / 2.0;
    let slot_y = body_top - 2.0;
    fill_rounded_rect(
        canvas,
        slot_x,
        slot_y,
        slot_x + slot_width,
        slot_y + slot_height,
        2.0,
        color,
    );

    // Slightly wider base ellipse.
    let bottom_y = body_top + body_height - 10.0;
    stroke_ellipse(
        canvas,
        body_left - 3.0,
        bottom_y,
        body_left + body_width + 3.0,
        bottom_y + 15.0,
        color,
        2.0,
    );

    // Eyes.
    let eye_y = body_top + 15.0;
    let eye_size = 4.0;
    fill_ellipse(canvas, CENTER - 12.0, eye_y, CENTER - 12.0 + eye_size, eye_y + eye_size, color);
    fill_ellipse(canvas, CENTER + 8.0, eye_y, CENTER + 8.0 + eye_size, eye_y + eye_size, color);

    // Nose.
    let nose_y = eye_y + 8.0;
    fill_ellipse(canvas, CENTER - 3.0, nose_y, CENTER + 3.0, nose_y + 5.0, color);
}

/// Bar chart with a rising trend line, for the annualized-yield tab.
fn draw_trend_chart(canvas: &mut RgbaImage, color: Rgba<u8>) {
    let margin = 15.0;
    let axis_x = margin;
    let axis_y = ICON_SIZE as f32 - margin;
    let axis_end_x = ICON_SIZE as f32 - margin;
    let axis_end_y = margin;

    // Axes.
    draw_line(canvas, (axis_x, axis_y), (axis_end_x, axis_y), color, 2.0);
    draw_line(canvas, (axis_x, axis_y), (axis_x, axis_end_y), color, 2.0);

    // Three bars of increasing height.
    let bar_width = 12.0;
    let bar_spacing = 8.0;
    let bar_start_x = axis_x + 10.0;
    for (i, height) in [25.0, 35.0, 45.0].into_iter().enumerate() {
        let bar_x = bar_start_x + i as f32 * (bar_width + bar_spacing);
        fill_rect(canvas, bar_x, axis_y - height, bar_x + bar_width, axis_y, color);
    }

    // Rising trend line with data dots.
    let line_points = [
        (axis_x + 5.0, axis_y - 10.0),
        (axis_x + 20.0, axis_y - 25.0),
        (axis_x + 35.0, axis_y - 40.0),
        (axis_x + 50.0, axis_y - 55.0),
    ];
    draw_polyline(canvas, &line_points, color, 3.0);
    for (px, py) in line_points {
        fill_ellipse(canvas, px - 3.0, py - 3.0, px + 3.0, py + 3.0, color);
    }
}

/// Clock face reading roughly ten past ten, for the history tab.
fn draw_clock(canvas: &mut RgbaImage, color: Rgba<u8>) {
    let radius = 28.0;
    stroke_ellipse(
        canvas,
        CENTER - radius,
        CENTER - radius,
        CENTER + radius,
        CENTER + radius,
        color,
        3.0,
    );
    let inner_radius = 22.0;
    stroke_ellipse(
        canvas,
        CENTER - inner_radius,
        CENTER - inner_radius,
        CENTER + inner_radius,
        CENTER + inner_radius,
        color,
        1.0,
    );

    // Tick marks at 12, 3, 6 and 9 o'clock.
    for hour in [12.0f32, 3.0, 6.0, 9.0] {
        let angle = ((hour - 3.0) * 30.0).to_radians();
        let from = (
            CENTER + (radius - 5.0) * angle.cos(),
            CENTER + (radius - 5.0) * angle.sin(),
        );
        let to = (CENTER + radius * angle.cos(), CENTER + radius * angle.sin());
        draw_line(canvas, from, to, color, 2.0);
    }

    // Hour hand toward 10 o'clock.
    let hour_angle = ((10.0f32 - 3.0) * 30.0).to_radians();
    let hour_length = 12.0;
    draw_line(
        canvas,
        (CENTER, CENTER),
        (CENTER + hour_length * hour_angle.cos(), CENTER + hour_length * hour_angle.sin()),
        color,
        3.0,
    );

    // Minute hand toward 2 o'clock.
    let minute_angle = ((2.0f32 - 3.0) * 30.0).to_radians();
    let minute_length = 18.0;
    draw_line(
        canvas,
        (CENTER, CENTER),
        (CENTER + minute_length * minute_angle.cos(), CENTER + minute_length * minute_angle.sin()),
        color,
        2.0,
    );

    // Hub.
    fill_ellipse(canvas, CENTER - 3.0, CENTER - 3.0, CENTER + 3.0, CENTER + 3.0, color);
}

/// Renders every tab icon in both the normal and active color into
/// `out_dir`, then writes the tab bar manifest next to them.
pub fn generate(out_dir: &Path) -> Result<()> {
    crate::ensure_icon_dir(out_dir)?;

    for spec in TABBAR_ICONS {
        println!("Generating {} icon...", spec.stem);
        for (suffix, color) in [("", palette::normal()), ("-active", palette::active())] {
            let filename = format!("{}{}.png", spec.stem, suffix);
            let mut canvas = new_canvas();
            draw_glyph(&mut canvas, spec.glyph, color);
            save_png(&canvas, &out_dir.join(&filename))?;
            println!("  ✓ Generated {filename}");
        }
    }

    let items: Vec<TabBarItem> = TABBAR_ICONS.iter().map(TabBarItem::for_icon).collect();
    manifest::write_tabbar_json(out_dir, items)?;

    println!("\nAll tab bar icons generated");
    println!("Icons written to: {}", out_dir.display());
    Ok(())
}
