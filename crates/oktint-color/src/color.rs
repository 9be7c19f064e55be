// SPDX-License-Identifier: MIT
//
// Typed color values.
//
// Every conversion step takes one of these and returns another. Nothing
// here is stringly typed except the `Display` / `FromStr` impls, which are
// the interchange boundary with theme files and renderers.
//
// Field names (r, g, b, h, s, l, c, a) follow color-science notation.
#![allow(clippy::many_single_char_names)]

use std::fmt;
use std::str::FromStr;

use crate::error::ParseColorError;
use crate::num::{canonical, round_to, to_u8};
use crate::{gamma, hsl, oklab, pipeline};

// ─── sRGB ────────────────────────────────────────────────────────────────────

/// Gamma-encoded sRGB with channels on [0, 1].
///
/// Values produced by the reverse pipeline may sit outside [0, 1] until
/// [`clamped`](Self::clamped) is applied; [`to_rgb8`](Self::to_rgb8) always
/// clamps.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Srgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl Srgb {
    #[inline]
    #[must_use]
    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// Clamp every channel to [0, 1].
    #[must_use]
    pub const fn clamped(self) -> Self {
        Self {
            r: self.r.clamp(0.0, 1.0),
            g: self.g.clamp(0.0, 1.0),
            b: self.b.clamp(0.0, 1.0),
        }
    }

    /// Remove gamma from each channel.
    #[must_use]
    pub fn to_linear(self) -> LinearRgb {
        LinearRgb {
            r: gamma::srgb_to_linear(self.r),
            g: gamma::srgb_to_linear(self.g),
            b: gamma::srgb_to_linear(self.b),
        }
    }

    /// Quantize to bytes, clamping first.
    #[must_use]
    pub fn to_rgb8(self) -> Rgb8 {
        Rgb8 {
            r: to_u8(self.r),
            g: to_u8(self.g),
            b: to_u8(self.b),
        }
    }
}

impl From<Rgb8> for Srgb {
    fn from(rgb: Rgb8) -> Self {
        Self {
            r: f64::from(rgb.r) / 255.0,
            g: f64::from(rgb.g) / 255.0,
            b: f64::from(rgb.b) / 255.0,
        }
    }
}

// ─── Linear sRGB ─────────────────────────────────────────────────────────────

/// Linear-light sRGB. Not clamped: matrix output can briefly exceed [0, 1].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearRgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl LinearRgb {
    /// Apply gamma to each channel. No clamping.
    #[must_use]
    pub fn to_srgb(self) -> Srgb {
        Srgb {
            r: gamma::linear_to_srgb(self.r),
            g: gamma::linear_to_srgb(self.g),
            b: gamma::linear_to_srgb(self.b),
        }
    }

    #[must_use]
    pub fn to_oklab(self) -> Oklab {
        oklab::linear_to_oklab(self)
    }
}

// ─── 8-bit RGB ───────────────────────────────────────────────────────────────

/// Byte-quantized sRGB, the form renderers consume.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb8 {
    #[inline]
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Lowercase `#rrggbb`.
    #[must_use]
    pub fn to_hex(self) -> String {
        let Self { r, g, b } = self;
        format!("#{r:02x}{g:02x}{b:02x}")
    }

    /// `rgba(r, g, b, alpha)` with alpha printed as given.
    #[must_use]
    pub fn to_rgba_string(self, alpha: f64) -> String {
        let Self { r, g, b } = self;
        format!("rgba({r}, {g}, {b}, {})", canonical(alpha))
    }
}

impl fmt::Display for Rgb8 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

// ─── HSL ─────────────────────────────────────────────────────────────────────

/// Hue in degrees, saturation and lightness in percent (0–100).
///
/// `Default` is the all-zero sentinel the lenient parsers fall back to.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Hsl {
    pub h: f64,
    pub s: f64,
    pub l: f64,
}

impl Hsl {
    #[inline]
    #[must_use]
    pub const fn new(h: f64, s: f64, l: f64) -> Self {
        Self { h, s, l }
    }

    /// Parse a bare `"H S% L%"` triplet.
    ///
    /// Lenient: each whitespace-separated component is read as its leading
    /// number (`"50%"` → 50). A missing or non-numeric component becomes
    /// NaN, which then flows through the conversions as visibly broken
    /// output instead of an error.
    #[must_use]
    pub fn parse_triplet(triplet: &str) -> Self {
        let mut parts = triplet.split_whitespace().map(hsl::leading_number);
        let mut next = || parts.next().unwrap_or(f64::NAN);
        let h = next();
        let s = next();
        let l = next();
        Self { h, s, l }
    }

    #[must_use]
    pub fn to_srgb(self) -> Srgb {
        hsl::hsl_to_srgb(self)
    }
}

impl fmt::Display for Hsl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}% {}%", canonical(self.h), canonical(self.s), canonical(self.l))
    }
}

// ─── Oklab ───────────────────────────────────────────────────────────────────

/// Oklab: L on [0, 1], a and b unbounded signed axes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Oklab {
    pub l: f64,
    pub a: f64,
    pub b: f64,
}

impl Oklab {
    #[must_use]
    pub fn to_oklch(self) -> Oklch {
        oklab::oklab_to_oklch(self)
    }

    #[must_use]
    pub fn to_linear(self) -> LinearRgb {
        oklab::oklab_to_linear(self)
    }
}

// ─── OKLCH ───────────────────────────────────────────────────────────────────

/// OKLCH, the storage format for theme tokens.
///
/// - `l`: lightness, 0.0 to 1.0
/// - `c`: chroma, >= 0.0
/// - `h`: hue angle in degrees, 0.0 to 360.0
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Oklch {
    pub l: f64,
    pub c: f64,
    pub h: f64,
}

impl Oklch {
    #[inline]
    #[must_use]
    pub const fn new(l: f64, c: f64, h: f64) -> Self {
        Self { l, c, h }
    }

    /// Quantize for storage: L clamped to [0, 1] and rounded to 4 places,
    /// C to 4 places, H to 2 places. A hue that rounds up to 360 wraps to 0.
    #[must_use]
    pub fn rounded(self) -> Self {
        let h = round_to(self.h, 2);
        Self {
            l: round_to(self.l.clamp(0.0, 1.0), 4),
            c: round_to(self.c, 4),
            h: if h >= 360.0 { h - 360.0 } else { h },
        }
    }

    #[must_use]
    pub fn to_oklab(self) -> Oklab {
        oklab::oklch_to_oklab(self)
    }

    /// Convert to sRGB. Not clamped; may be out of gamut.
    #[must_use]
    pub fn to_srgb(self) -> Srgb {
        self.to_oklab().to_linear().to_srgb()
    }

    /// Convert to bytes, clamping out-of-gamut channels.
    #[must_use]
    pub fn to_rgb8(self) -> Rgb8 {
        self.to_srgb().clamped().to_rgb8()
    }
}

impl fmt::Display for Oklch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "oklch({} {} {})",
            canonical(self.l),
            canonical(self.c),
            canonical(self.h)
        )
    }
}

impl FromStr for Oklch {
    type Err = ParseColorError;

    /// Strict parse of `oklch(L C H)`.
    ///
    /// A trailing `/ alpha` is accepted and dropped; callers that render
    /// pass their own alpha.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        pipeline::parse_oklch(s).map(|(lch, _alpha)| lch)
    }
}

// ─── Color ───────────────────────────────────────────────────────────────────

/// Any color the engine understands, tagged by space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Color {
    Srgb(Srgb),
    Hsl(Hsl),
    Oklab(Oklab),
    Oklch(Oklch),
}

impl Color {
    /// Convert to sRGB. Not clamped.
    #[must_use]
    pub fn to_srgb(self) -> Srgb {
        match self {
            Self::Srgb(rgb) => rgb,
            Self::Hsl(hsl) => hsl.to_srgb(),
            Self::Oklab(lab) => lab.to_linear().to_srgb(),
            Self::Oklch(lch) => lch.to_srgb(),
        }
    }

    #[must_use]
    pub fn to_oklab(self) -> Oklab {
        match self {
            Self::Oklab(lab) => lab,
            Self::Oklch(lch) => lch.to_oklab(),
            other => other.to_srgb().to_linear().to_oklab(),
        }
    }

    /// Convert to OKLCH. Unrounded; see [`Oklch::rounded`].
    #[must_use]
    pub fn to_oklch(self) -> Oklch {
        match self {
            Self::Oklch(lch) => lch,
            other => other.to_oklab().to_oklch(),
        }
    }
}

impl From<Srgb> for Color {
    fn from(c: Srgb) -> Self {
        Self::Srgb(c)
    }
}

impl From<Hsl> for Color {
    fn from(c: Hsl) -> Self {
        Self::Hsl(c)
    }
}

impl From<Oklab> for Color {
    fn from(c: Oklab) -> Self {
        Self::Oklab(c)
    }
}

impl From<Oklch> for Color {
    fn from(c: Oklch) -> Self {
        Self::Oklch(c)
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
