/// Color helpers for building gpui `Rgba` values from hex notation.

use gpui::Rgba;

/// Converts a 24-bit hex value (e.g. `0xFF0000`) to an opaque `Rgba`.
pub fn rgba_from_hex(hex: u32) -> Rgba { rgba_from_hex_alpha(hex, 1.0) }

/// Converts a 24-bit hex value to an `Rgba` with the given alpha.
pub fn rgba_from_hex_alpha(hex: u32, alpha: f32) -> Rgba {
    let r = ((hex >> 16) & 0xFF) as f32 / 255.0;
    let g = ((hex >> 8) & 0xFF) as f32 / 255.0;
    let b = (hex & 0xFF) as f32 / 255.0;
    Rgba {
        r,
        g,
        b,
        a: alpha.clamp(0.0, 1.0),
    }
}

/// Parses a CSS-style `#rrggbb` or `#rgb` color. The `#` is optional.
///
/// Returns `None` for anything else, so a bad override falls back to the
/// theme color.
pub fn parse_hex_color(value: &str) -> Option<Rgba> {
    let digits = value.trim().trim_start_matches('#');
    if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    match digits.len() {
        6 => u32::from_str_radix(digits, 16).ok().map(rgba_from_hex),
        3 => {
            let short = u32::from_str_radix(digits, 16).ok()?;
            let (r, g, b) = ((short >> 8) & 0xF, (short >> 4) & 0xF, short & 0xF);
            Some(rgba_from_hex(((r * 0x11) << 16) | ((g * 0x11) << 8) | (b * 0x11)))
        }
        _ => None,
    }
}
