//! CSS-style color string parsing.

use peniko::Color;

/// Parse a CSS-style color string.
///
/// Returns `None` for `"transparent"` and for strings that don't parse,
/// so callers can fall back to their default.
pub fn parse_color(color: &str) -> Option<Color> {
    let color = color.trim();
    if color.eq_ignore_ascii_case("transparent") || color.eq_ignore_ascii_case("none") {
        return None;
    }

    // Hex colors (#rgb, #rrggbb, #rrggbbaa)
    if let Some(hex) = color.strip_prefix('#') {
        match hex.len() {
            3 => {
                let r = u8::from_str_radix(&hex[0..1], 16).ok()? * 17;
                let g = u8::from_str_radix(&hex[1..2], 16).ok()? * 17;
                let b = u8::from_str_radix(&hex[2..3], 16).ok()? * 17;
                return Some(Color::from_rgba8(r, g, b, 255));
            }
            6 => {
                let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
                let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
                let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
                return Some(Color::from_rgba8(r, g, b, 255));
            }
            8 => {
                let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
                let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
                let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
                let a = u8::from_str_radix(&hex[6..8], 16).ok()?;
                return Some(Color::from_rgba8(r, g, b, a));
            }
            _ => return None,
        }
    }

    // rgb(r, g, b) / rgba(r, g, b, a) with a in [0, 1]
    if let Some(args) = color
        .strip_prefix("rgba(")
        .or_else(|| color.strip_prefix("rgb("))
    {
        let args = args.strip_suffix(')')?;
        let parts: Vec<&str> = args.split(',').map(str::trim).collect();
        let (r, g, b) = match parts.as_slice() {
            [r, g, b] | [r, g, b, _] => (
                r.parse::<f64>().ok()?,
                g.parse::<f64>().ok()?,
                b.parse::<f64>().ok()?,
            ),
            _ => return None,
        };
        let alpha = match parts.as_slice() {
            [_, _, _, a] => a.parse::<f64>().ok()?,
            _ => 1.0,
        };
        return Some(Color::from_rgba8(
            r.clamp(0.0, 255.0) as u8,
            g.clamp(0.0, 255.0) as u8,
            b.clamp(0.0, 255.0) as u8,
            (alpha.clamp(0.0, 1.0) * 255.0).round() as u8,
        ));
    }

    // The handful of names the generation prompt allows.
    match color.to_ascii_lowercase().as_str() {
        "white" => Some(Color::from_rgba8(255, 255, 255, 255)),
        "black" => Some(Color::from_rgba8(0, 0, 0, 255)),
        "gray" | "grey" => Some(Color::from_rgba8(128, 128, 128, 255)),
        "red" => Some(Color::from_rgba8(255, 0, 0, 255)),
        "green" => Some(Color::from_rgba8(0, 128, 0, 255)),
        "blue" => Some(Color::from_rgba8(0, 0, 255, 255)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transparent_is_none() {
        assert!(parse_color("transparent").is_none());
        assert!(parse_color("none").is_none());
    }

    #[test]
    fn test_hex_forms() {
        assert_eq!(
            parse_color("#fff"),
            Some(Color::from_rgba8(255, 255, 255, 255))
        );
        assert_eq!(
            parse_color("#8A2BE2"),
            Some(Color::from_rgba8(138, 43, 226, 255))
        );
        assert_eq!(
            parse_color("#11223344"),
            Some(Color::from_rgba8(0x11, 0x22, 0x33, 0x44))
        );
        assert!(parse_color("#12345").is_none());
        assert!(parse_color("#gggggg").is_none());
    }

    #[test]
    fn test_rgba_with_fractional_alpha() {
        assert_eq!(
            parse_color("rgba(138, 43, 226, 0.05)"),
            Some(Color::from_rgba8(138, 43, 226, 13))
        );
        assert_eq!(
            parse_color("rgb(10, 20, 30)"),
            Some(Color::from_rgba8(10, 20, 30, 255))
        );
        assert!(parse_color("rgba(1, 2)").is_none());
    }

    #[test]
    fn test_named_colors() {
        assert_eq!(
            parse_color("white"),
            Some(Color::from_rgba8(255, 255, 255, 255))
        );
        assert_eq!(
            parse_color("Gray"),
            Some(Color::from_rgba8(128, 128, 128, 255))
        );
        assert!(parse_color("chartreuse-ish").is_none());
    }
}
