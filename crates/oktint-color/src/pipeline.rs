// SPDX-License-Identifier: MIT
//
// Composed pipelines at the string boundary.
//
//   forward (migration):  "H S% L%"      → Hsl → Srgb → LinearRgb → Oklab → Oklch → "oklch(L C H)"
//   reverse (render):     "oklch(L C H)" → Oklch → Oklab → LinearRgb → Srgb → Rgb8 → "rgba(r, g, b, a)"
//
// The forward path is lenient (bad triplets turn into NaN output), the
// reverse path is strict (bad strings are a `ParseColorError`).

use std::sync::LazyLock;

use regex::Regex;

use crate::color::{Color, Hsl, Oklch, Rgb8};
use crate::error::ParseColorError;
use crate::gamma::srgb_to_linear;
use crate::num::{canonical, round_to};

/// Decimal number grammar of an OKLCH component (`parseFloat`-style, with
/// optional sign and exponent). Shared with the generated runtime helpers.
pub const NUMBER_PATTERN: &str = r"[+-]?(?:\d+\.?\d*|\.\d+)(?:[eE][+-]?\d+)?";

static OKLCH_RE: LazyLock<Regex> = LazyLock::new(|| {
    const NUM: &str = NUMBER_PATTERN;
    Regex::new(&format!(
        r"^\s*oklch\(\s*({NUM})\s+({NUM})\s+({NUM})\s*(?:/\s*({NUM})\s*)?\)\s*$"
    ))
    .expect("valid oklch regex")
});

/// Strict parse of `oklch(L C H)` or `oklch(L C H / A)`.
///
/// # Errors
///
/// Returns [`ParseColorError::Oklch`] when `s` is not of that form.
pub fn parse_oklch(s: &str) -> Result<(Oklch, Option<f64>), ParseColorError> {
    let invalid = || ParseColorError::Oklch(s.to_owned());
    let caps = OKLCH_RE.captures(s).ok_or_else(invalid)?;
    let num = |i: usize| caps[i].parse::<f64>().map_err(|_| invalid());
    let lch = Oklch::new(num(1)?, num(2)?, num(3)?);
    let alpha = caps.get(4).map(|_| num(4)).transpose()?;
    Ok((lch, alpha))
}

/// HSL → OKLCH, quantized for storage.
///
/// Zero saturation short-circuits the matrices: lightness is gamma-decoded
/// and cube-rooted directly, and chroma and hue are exactly 0. Running a
/// neutral through the matrices would leave a small spurious chroma.
#[must_use]
#[allow(clippy::float_cmp)]
pub fn hsl_to_oklch(hsl: Hsl) -> Oklch {
    if hsl.s == 0.0 {
        let l = srgb_to_linear(hsl.l / 100.0).cbrt().clamp(0.0, 1.0);
        return Oklch::new(round_to(l, 4), 0.0, 0.0);
    }
    Color::Hsl(hsl).to_oklch().rounded()
}

/// `"H S% L%"` → `"oklch(L C H)"`.
///
/// Never fails. A malformed triplet produces NaN components in the output.
#[must_use]
pub fn hsl_string_to_oklch(hsl: &str) -> String {
    hsl_to_oklch(Hsl::parse_triplet(hsl)).to_string()
}

/// `"oklch(L C H)"` → clamped sRGB bytes.
///
/// # Errors
///
/// Returns [`ParseColorError::Oklch`] for a malformed string.
pub fn oklch_to_rgb(oklch: &str) -> Result<Rgb8, ParseColorError> {
    let (lch, _) = parse_oklch(oklch)?;
    Ok(lch.to_rgb8())
}

/// `"oklch(L C H)"` → `"rgba(r, g, b, alpha)"`.
///
/// # Errors
///
/// Returns [`ParseColorError::Oklch`] for a malformed string.
pub fn oklch_to_rgba(oklch: &str, alpha: f64) -> Result<String, ParseColorError> {
    oklch_to_rgb(oklch).map(|rgb| rgb.to_rgba_string(alpha))
}

/// `"oklch(L C H)"` → `"#rrggbb"`, for picker previews.
///
/// # Errors
///
/// Returns [`ParseColorError::Oklch`] for a malformed string.
pub fn oklch_to_hex(oklch: &str) -> Result<String, ParseColorError> {
    oklch_to_rgb(oklch).map(Rgb8::to_hex)
}

/// Insert `/ alpha` before the closing parenthesis.
///
/// Purely textual: the components are not parsed or validated. A string
/// without a `)` is returned unchanged.
#[must_use]
pub fn oklch_with_alpha(oklch: &str, alpha: f64) -> String {
    match oklch.rfind(')') {
        Some(close) => format!("{} / {}{}", &oklch[..close], canonical(alpha), &oklch[close..]),
        None => oklch.to_owned(),
    }
}
