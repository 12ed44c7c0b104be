//! Hex color helpers.

use palette::{Hsl, IntoColor, Srgb};

/// Parses `#RRGGBB` (or `RRGGBB`). Returns `None` for anything else.
pub fn parse_hex(hex: &str) -> Option<(u8, u8, u8)> {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    if digits.len() != 6 || !digits.is_ascii() {
        return None;
    }
    let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&digits[range], 16).ok();
    Some((channel(0..2)?, channel(2..4)?, channel(4..6)?))
}

pub fn to_hex((r, g, b): (u8, u8, u8)) -> String {
    format!("#{r:02X}{g:02X}{b:02X}")
}

/// Scales the HSL lightness of `hex` by `factor`.
///
/// Unparseable input is returned unchanged.
pub fn shade(hex: &str, factor: f32) -> String {
    let Some((r, g, b)) = parse_hex(hex) else {
        return hex.to_string();
    };
    let rgb = Srgb::new(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0);
    let mut hsl: Hsl = rgb.into_color();
    hsl.lightness = (hsl.lightness * factor).clamp(0.0, 1.0);
    let shaded: Srgb = hsl.into_color();

    to_hex((
        (shaded.red * 255.0).round() as u8,
        (shaded.green * 255.0).round() as u8,
        (shaded.blue * 255.0).round() as u8,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_with_or_without_hash() {
        assert_eq!(parse_hex("#E22229"), Some((0xE2, 0x22, 0x29)));
        assert_eq!(parse_hex("3caaff"), Some((0x3C, 0xAA, 0xFF)));
        assert_eq!(parse_hex("#FFF"), None);
        assert_eq!(parse_hex("white"), None);
    }

    #[test]
    fn shade_darkens_and_keeps_hue() {
        let dark = parse_hex(&shade("#E22229", 0.3)).unwrap();
        assert!(dark.0 < 0xE2);
        assert!(dark.0 > dark.1 && dark.0 > dark.2);
    }

    #[test]
    fn shade_of_invalid_input_is_identity() {
        assert_eq!(shade("transparent", 0.5), "transparent");
    }

    #[test]
    fn unit_factor_roundtrips() {
        assert_eq!(shade("#157BCA", 1.0), "#157BCA");
    }
}
