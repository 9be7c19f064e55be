// SPDX-License-Identifier: MIT
//
// HSL ↔ sRGB and the hex helpers used by color pickers.

use std::sync::LazyLock;

use regex::Regex;

use crate::color::{Hsl, Rgb8, Srgb};
use crate::error::ParseColorError;
use crate::num::round_to;
use crate::pipeline::NUMBER_PATTERN;

static HEX_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^#?([0-9a-f]{2})([0-9a-f]{2})([0-9a-f]{2})$").expect("valid hex regex")
});

static LEADING_NUMBER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!("^{NUMBER_PATTERN}")).expect("valid number regex")
});

/// Read the leading decimal number of `s`, ignoring whatever follows
/// (`"50%"` → 50). NaN when `s` does not start with a number.
#[must_use]
pub fn leading_number(s: &str) -> f64 {
    LEADING_NUMBER_RE
        .find(s)
        .and_then(|m| m.as_str().parse().ok())
        .unwrap_or(f64::NAN)
}

/// Standard hexagonal HSL → sRGB decomposition.
///
/// The hue is normalized with `rem_euclid(360)` first, so 360° and negative
/// hues land in the right sector instead of falling through to black.
#[must_use]
pub fn hsl_to_srgb(hsl: Hsl) -> Srgb {
    let h = hsl.h.rem_euclid(360.0);
    let s = hsl.s / 100.0;
    let l = hsl.l / 100.0;

    let c = (1.0 - 2.0f64.mul_add(l, -1.0).abs()) * s;
    let x = c * (1.0 - ((h / 60.0) % 2.0 - 1.0).abs());
    let m = l - c / 2.0;

    let (r, g, b) = if h < 60.0 {
        (c, x, 0.0)
    } else if h < 120.0 {
        (x, c, 0.0)
    } else if h < 180.0 {
        (0.0, c, x)
    } else if h < 240.0 {
        (0.0, x, c)
    } else if h < 300.0 {
        (x, 0.0, c)
    } else {
        (c, 0.0, x)
    };

    Srgb::new(r + m, g + m, b + m)
}

/// sRGB → HSL, rounded to whole degrees and whole percents.
///
/// Branch selection compares channels exactly: the max channel is one of
/// r, g, b bit for bit, and red wins ties, then green.
#[must_use]
#[allow(clippy::float_cmp)]
pub fn srgb_to_hsl(rgb: Srgb) -> Hsl {
    let Srgb { r, g, b } = rgb;
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;

    let (h, s) = if max == min {
        (0.0, 0.0)
    } else {
        let d = max - min;
        let s = if l > 0.5 { d / (2.0 - max - min) } else { d / (max + min) };
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
        h: round_to(h * 360.0, 0) % 360.0,
        s: round_to(s * 100.0, 0),
        l: round_to(l * 100.0, 0),
    }
}

/// Strict `#RRGGBB` / `RRGGBB` parse (case-insensitive).
///
/// # Errors
///
/// Returns [`ParseColorError::Hex`] unless `hex` is exactly six hex digits
/// with an optional leading `#`.
pub fn parse_hex(hex: &str) -> Result<Rgb8, ParseColorError> {
    let invalid = || ParseColorError::Hex(hex.to_owned());
    let caps = HEX_RE.captures(hex).ok_or_else(invalid)?;
    let byte = |i: usize| u8::from_str_radix(&caps[i], 16).map_err(|_| invalid());
    Ok(Rgb8::new(byte(1)?, byte(2)?, byte(3)?))
}

/// Strict hex → HSL.
///
/// # Errors
///
/// Same as [`parse_hex`].
pub fn parse_hex_hsl(hex: &str) -> Result<Hsl, ParseColorError> {
    parse_hex(hex).map(|rgb| srgb_to_hsl(rgb.into()))
}

/// Lenient hex → HSL for live picker input.
///
/// Anything that is not a complete `#RRGGBB` yields the zero sentinel
/// `Hsl { h: 0, s: 0, l: 0 }` rather than an error.
#[must_use]
pub fn hex_to_hsl(hex: &str) -> Hsl {
    parse_hex_hsl(hex).unwrap_or_default()
}

/// HSL → lowercase `#rrggbb`.
#[must_use]
pub fn hsl_to_hex(h: f64, s: f64, l: f64) -> String {
    hsl_to_srgb(Hsl::new(h, s, l)).to_rgb8().to_hex()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn assert_hex_close(actual: &str, expected: &str) {
        let a = parse_hex(actual).unwrap();
        let e = parse_hex(expected).unwrap();
        assert!(
            a.r.abs_diff(e.r) <= 1 && a.g.abs_diff(e.g) <= 1 && a.b.abs_diff(e.b) <= 1,
            "hex mismatch: got {actual}, expected {expected}"
        );
    }

    #[test]
    fn primaries_to_hex() {
        assert_eq!(hsl_to_hex(0.0, 100.0, 50.0), "#ff0000");
        assert_eq!(hsl_to_hex(120.0, 100.0, 50.0), "#00ff00");
        assert_eq!(hsl_to_hex(240.0, 100.0, 50.0), "#0000ff");
    }

    #[test]
    fn hue_360_is_red_not_black() {
        assert_eq!(hsl_to_hex(360.0, 100.0, 50.0), "#ff0000");
        assert_eq!(hsl_to_hex(-120.0, 100.0, 50.0), "#0000ff");
    }

    #[test]
    fn every_sector() {
        assert_eq!(hsl_to_hex(30.0, 100.0, 50.0), "#ff8000");
        assert_eq!(hsl_to_hex(90.0, 100.0, 50.0), "#80ff00");
        assert_eq!(hsl_to_hex(150.0, 100.0, 50.0), "#00ff80");
        assert_eq!(hsl_to_hex(210.0, 100.0, 50.0), "#0080ff");
        assert_eq!(hsl_to_hex(270.0, 100.0, 50.0), "#8000ff");
        assert_eq!(hsl_to_hex(330.0, 100.0, 50.0), "#ff0080");
    }

    #[test]
    fn exact_sector_boundaries() {
        // Adjacent sectors agree at their shared edge, so each boundary hue
        // lands on the pure secondary or primary either way.
        assert_eq!(hsl_to_srgb(Hsl::new(60.0, 100.0, 50.0)), Srgb::new(1.0, 1.0, 0.0));
        assert_eq!(hsl_to_srgb(Hsl::new(120.0, 100.0, 50.0)), Srgb::new(0.0, 1.0, 0.0));
        assert_eq!(hsl_to_srgb(Hsl::new(180.0, 100.0, 50.0)), Srgb::new(0.0, 1.0, 1.0));
        assert_eq!(hsl_to_srgb(Hsl::new(240.0, 100.0, 50.0)), Srgb::new(0.0, 0.0, 1.0));
        assert_eq!(hsl_to_srgb(Hsl::new(300.0, 100.0, 50.0)), Srgb::new(1.0, 0.0, 1.0));
        assert_eq!(hsl_to_hex(60.0, 100.0, 50.0), "#ffff00");
        assert_eq!(hsl_to_hex(180.0, 100.0, 50.0), "#00ffff");
        assert_eq!(hsl_to_hex(300.0, 100.0, 50.0), "#ff00ff");
        // Just below each boundary the lower sector still applies.
        assert_eq!(hsl_to_hex(59.9, 100.0, 50.0), "#ffff00");
        assert_eq!(hsl_to_hex(119.0, 100.0, 50.0), "#04ff00");
    }

    #[test]
    fn black_and_white_fixed_points() {
        assert_eq!(hex_to_hsl("#000000"), Hsl::new(0.0, 0.0, 0.0));
        assert_eq!(hex_to_hsl("#ffffff"), Hsl::new(0.0, 0.0, 100.0));
    }

    #[test]
    fn hex_without_hash_and_uppercase() {
        assert_eq!(hex_to_hsl("FF8000"), Hsl::new(30.0, 100.0, 50.0));
        assert_eq!(hex_to_hsl("#C86432"), Hsl::new(20.0, 60.0, 49.0));
    }

    #[test]
    fn each_max_channel_branch() {
        assert_eq!(hex_to_hsl("#3b82f6"), Hsl::new(217.0, 91.0, 60.0));
        assert_eq!(hex_to_hsl("#10b981"), Hsl::new(160.0, 84.0, 39.0));
        assert_eq!(hex_to_hsl("#f43f5e"), Hsl::new(350.0, 89.0, 60.0));
    }

    #[test]
    fn invalid_hex_is_zero_sentinel() {
        assert_eq!(hex_to_hsl("not-a-hex"), Hsl::default());
        assert_eq!(hex_to_hsl("#12345"), Hsl::default());
        assert_eq!(hex_to_hsl("#1234567"), Hsl::default());
        assert_eq!(hex_to_hsl(""), Hsl::default());
    }

    #[test]
    fn strict_hex_reports_input() {
        assert_eq!(
            parse_hex_hsl("#ggg000"),
            Err(ParseColorError::Hex("#ggg000".to_owned()))
        );
    }

    #[test]
    fn hex_roundtrip_within_one_step() {
        for hex in [
            "#000000", "#ffffff", "#ff0000", "#00ff00", "#0000ff", "#ff8000", "#c86432",
            "#808080", "#3b82f6", "#1e293b",
        ] {
            let Hsl { h, s, l } = hex_to_hsl(hex);
            assert_hex_close(&hsl_to_hex(h, s, l), hex);
        }
    }

    #[test]
    fn leading_number_reads_prefix() {
        assert_eq!(leading_number("50%"), 50.0);
        assert_eq!(leading_number("-12.5deg"), -12.5);
        assert_eq!(leading_number(".5"), 0.5);
        assert!(leading_number("oklch(0.5").is_nan());
        assert!(leading_number("").is_nan());
    }
}
