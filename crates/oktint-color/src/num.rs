// SPDX-License-Identifier: MIT
//
// Number helpers shared by the formatters.

/// Round to `places` decimal digits.
#[inline]
pub fn round_to(v: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (v * factor).round() / factor
}

/// Fold `-0.0` into `0.0` so it never prints as `-0`.
#[inline]
pub fn canonical(v: f64) -> f64 {
    if v == 0.0 { 0.0 } else { v }
}

/// Convert a float (0.0–1.0) to a u8 (0–255) with correct rounding.
///
/// NaN maps to 0.
#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn to_u8(v: f64) -> u8 {
    // Safe: clamp guarantees 0.0 <= value <= 255.0 before truncation.
    v.mul_add(255.0, 0.5).clamp(0.0, 255.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_to_places() {
        assert_eq!(round_to(0.598_180_7, 4), 0.5982);
        assert_eq!(round_to(29.233_885, 2), 29.23);
        assert_eq!(round_to(0.000_04, 4), 0.0);
    }

    #[test]
    fn canonical_drops_negative_zero() {
        assert_eq!(canonical(-0.0).to_string(), "0");
        assert_eq!(canonical(0.25).to_string(), "0.25");
    }

    #[test]
    fn to_u8_rounds_and_clamps() {
        assert_eq!(to_u8(0.0), 0);
        assert_eq!(to_u8(1.0), 255);
        assert_eq!(to_u8(0.5), 128);
        assert_eq!(to_u8(-3.0), 0);
        assert_eq!(to_u8(7.0), 255);
        assert_eq!(to_u8(f64::NAN), 0);
    }
}
