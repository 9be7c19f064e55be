// SPDX-License-Identifier: MIT
//
// sRGB transfer function.
//
// sRGB uses a piecewise curve to encode linear light into the perceptual
// domain: a short linear segment near black (avoids the infinite slope of
// the power curve at zero) and a 2.4 power law above it. Both functions
// are total over ℝ but only meaningful on [0, 1]; callers clamp.

/// Convert a single sRGB component to linear sRGB (remove gamma).
#[inline]
#[must_use]
pub fn srgb_to_linear(c: f64) -> f64 {
    if c <= 0.040_45 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// Convert a single linear sRGB component to sRGB (apply gamma).
#[inline]
#[must_use]
pub fn linear_to_srgb(c: f64) -> f64 {
    if c <= 0.003_130_8 {
        c * 12.92
    } else {
        1.055f64.mul_add(c.powf(1.0 / 2.4), -0.055)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64, epsilon: f64) -> bool {
        (a - b).abs() < epsilon
    }

    #[test]
    fn endpoints_are_fixed() {
        assert_eq!(srgb_to_linear(0.0), 0.0);
        assert!(approx_eq(srgb_to_linear(1.0), 1.0, 1e-12));
        assert_eq!(linear_to_srgb(0.0), 0.0);
        assert!(approx_eq(linear_to_srgb(1.0), 1.0, 1e-12));
    }

    #[test]
    fn linear_segment_near_black() {
        assert!(approx_eq(srgb_to_linear(0.04), 0.04 / 12.92, 1e-15));
        assert!(approx_eq(linear_to_srgb(0.003), 0.003 * 12.92, 1e-15));
    }

    #[test]
    fn mid_gray_decodes_to_about_a_fifth() {
        // 50% sRGB is ~21% linear light.
        assert!(approx_eq(srgb_to_linear(0.5), 0.214_041, 1e-6));
    }

    #[test]
    fn inverse_of_each_other() {
        for i in 0..=100 {
            let c = f64::from(i) / 100.0;
            let back = linear_to_srgb(srgb_to_linear(c));
            assert!(approx_eq(back, c, 1e-9), "{c} came back as {back}");
        }
    }

    #[test]
    fn segments_meet_at_the_threshold() {
        // The two pieces are continuous (to within the standard's rounding).
        let below = srgb_to_linear(0.040_45);
        let above = ((0.040_45f64 + 0.055) / 1.055).powf(2.4);
        assert!(approx_eq(below, above, 1e-6));
    }
}
