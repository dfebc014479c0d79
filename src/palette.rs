//! Fixed tab bar colors, matching the mini program's custom tab bar config.

use image::Rgba;
use std::str::FromStr;

/// Unselected tab color.
pub const NORMAL: &str = "#999999";

/// Selected tab color.
pub const ACTIVE: &str = "#007AFF";

/// Badge label color.
pub const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);

/// Parses a CSS color string into an opaque RGBA pixel, falling back to the
/// normal gray on invalid input.
pub fn parse(color: &str) -> Rgba<u8> {
    css_color::Srgb::from_str(color)
        .map(|color| {
            Rgba([
                (color.red * 255.).round() as u8,
                (color.green * 255.).round() as u8,
                (color.blue * 255.).round() as u8,
                255,
            ])
        })
        .unwrap_or(Rgba([153, 153, 153, 255]))
}

pub fn normal() -> Rgba<u8> {
    parse(NORMAL)
}

pub fn active() -> Rgba<u8> {
    parse(ACTIVE)
}
