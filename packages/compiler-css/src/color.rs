use crate::number::format_number;
use tracing::trace;

/// Convert `#rgb` or `#rrggbb` plus an alpha to an `rgba()` string.
///
/// Any other input degrades to black at the requested alpha.
pub fn hex_to_rgba(hex: &str, alpha: f64) -> String {
    let (r, g, b) = parse_hex(hex).unwrap_or_else(|| {
        trace!(hex, "Unrecognized hex color, falling back to black");
        (0, 0, 0)
    });
    format!("rgba({}, {}, {}, {})", r, g, b, format_number(alpha))
}

fn parse_hex(hex: &str) -> Option<(u8, u8, u8)> {
    let digits = hex.strip_prefix('#')?;
    if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }

    match digits.len() {
        3 => {
            let channel = |i: usize| u8::from_str_radix(&digits[i..i + 1].repeat(2), 16).ok();
            Some((channel(0)?, channel(1)?, channel(2)?))
        }
        6 => {
            let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).ok();
            Some((channel(0)?, channel(2)?, channel(4)?))
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_long_hex() {
        assert_eq!(hex_to_rgba("#2563eb", 0.3), "rgba(37, 99, 235, 0.3)");
    }

    #[test]
    fn test_short_hex() {
        assert_eq!(hex_to_rgba("#fff", 1.0), "rgba(255, 255, 255, 1)");
        assert_eq!(hex_to_rgba("#a1c", 0.5), "rgba(170, 17, 204, 0.5)");
    }

    #[test]
    fn test_fallback_for_other_lengths() {
        assert_eq!(hex_to_rgba("bad", 0.5), "rgba(0, 0, 0, 0.5)");
        assert_eq!(hex_to_rgba("", 1.0), "rgba(0, 0, 0, 1)");
        assert_eq!(hex_to_rgba("#12345", 0.2), "rgba(0, 0, 0, 0.2)");
    }

    #[test]
    fn test_fallback_for_non_hex_digits() {
        assert_eq!(hex_to_rgba("#zzzzzz", 1.0), "rgba(0, 0, 0, 1)");
        assert_eq!(hex_to_rgba("#آب", 1.0), "rgba(0, 0, 0, 1)");
    }

    #[test]
    fn test_fallback_without_hash_or_with_signs() {
        assert_eq!(hex_to_rgba("x123", 1.0), "rgba(0, 0, 0, 1)");
        assert_eq!(hex_to_rgba("a1b2c3d", 1.0), "rgba(0, 0, 0, 1)");
        assert_eq!(hex_to_rgba("#+f+f+f", 1.0), "rgba(0, 0, 0, 1)");
        assert_eq!(hex_to_rgba("#+ff", 1.0), "rgba(0, 0, 0, 1)");
    }
}
