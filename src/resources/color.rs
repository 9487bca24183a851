use glam::Vec3;

use crate::config::ColorValue;
use crate::errors::{Result, TableauError};

/// Unpacks `0xRRGGBB` into normalised sRGB components.
#[must_use]
pub fn color_from_hex(hex: u32) -> Vec3 {
    let r = ((hex >> 16) & 0xff) as f32 / 255.0;
    let g = ((hex >> 8) & 0xff) as f32 / 255.0;
    let b = (hex & 0xff) as f32 / 255.0;
    Vec3::new(r, g, b)
}

/// Resolves a config colour (`0xRRGGBB`, `"#rrggbb"` or `"#rgb"`).
pub fn parse_color(value: &ColorValue) -> Result<Vec3> {
    match value {
        ColorValue::Hex(hex) if *hex <= 0x00ff_ffff => Ok(color_from_hex(*hex)),
        ColorValue::Hex(hex) => Err(TableauError::InvalidColor(format!("{hex:#x}"))),
        ColorValue::Css(text) => parse_css_hex(text),
    }
}

fn parse_css_hex(text: &str) -> Result<Vec3> {
    let invalid = || TableauError::InvalidColor(text.to_string());
    let digits = text.trim().strip_prefix('#').ok_or_else(invalid)?;
    if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(invalid());
    }

    let hex = match digits.len() {
        6 => u32::from_str_radix(digits, 16).map_err(|_| invalid())?,
        3 => {
            let short = u32::from_str_radix(digits, 16).map_err(|_| invalid())?;
            let (r, g, b) = ((short >> 8) & 0xf, (short >> 4) & 0xf, short & 0xf);
            (r * 0x11) << 16 | (g * 0x11) << 8 | (b * 0x11)
        }
        _ => return Err(invalid()),
    };
    Ok(color_from_hex(hex))
}
