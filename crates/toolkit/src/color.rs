//! Color converter

use serde::Serialize;

use crate::error::ToolError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hsl {
    /// Degrees, 0-360
    pub h: u32,
    /// Percent
    pub s: u32,
    /// Percent
    pub l: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColorFormats {
    pub hex: String,
    pub rgb: String,
    pub rgba: String,
    pub hsl: String,
    pub hsla: String,
}

/// Parse `#rrggbb` (the `#` is optional)
pub fn parse_hex(raw: &str) -> Result<Rgb, ToolError> {
    let invalid = || ToolError::InvalidColor(raw.to_string());

    let digits = raw.trim();
    let digits = digits.strip_prefix('#').unwrap_or(digits);
    if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(invalid());
    }

    let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).map_err(|_| invalid());
    Ok(Rgb {
        r: channel(0)?,
        g: channel(2)?,
        b: channel(4)?,
    })
}

pub fn rgb_to_hsl(rgb: Rgb) -> Hsl {
    let r = rgb.r as f64 / 255.0;
    let g = rgb.g as f64 / 255.0;
    let b = rgb.b as f64 / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;

    let (h, s) = if max == min {
        (0.0, 0.0)
    } else {
        let d = max - min;
        let s = if l > 0.5 {
            d / (2.0 - max - min)
        } else {
            d / (max + min)
        };
        let h = if max == r {
            (g - b) / d + if g < b { 6.0 } else { 0.0 }
        } else if max == g {
            (b - r) / d + 2.0
        } else {
            (r - g) / d + 4.0
        };
        (h / 6.0, s)
    };

    Hsl {
        h: (h * 360.0).round() as u32,
        s: (s * 100.0).round() as u32,
        l: (l * 100.0).round() as u32,
    }
}

pub fn formats(raw: &str) -> Result<ColorFormats, ToolError> {
    let rgb = parse_hex(raw)?;
    let hsl = rgb_to_hsl(rgb);

    Ok(ColorFormats {
        hex: format!("#{:02X}{:02X}{:02X}", rgb.r, rgb.g, rgb.b),
        rgb: format!("rgb({}, {}, {})", rgb.r, rgb.g, rgb.b),
        rgba: format!("rgba({}, {}, {}, 1)", rgb.r, rgb.g, rgb.b),
        hsl: format!("hsl({}, {}%, {}%)", hsl.h, hsl.s, hsl.l),
        hsla: format!("hsla({}, {}%, {}%, 1)", hsl.h, hsl.s, hsl.l),
    })
}
