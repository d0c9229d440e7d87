use super::modulo;
use crate::Float;

/// Reduce the hue to its coterminal angle in `0..360`.
///
/// This function uses floor-style modulo and hence produces non-negative
/// angles for negative hues, too.
#[inline]
pub fn coterminal(hue: Float) -> Float {
    modulo(hue, 360.0)
}

/// Compute the hue of the RGB color whose largest channel is `max` and whose
/// channel range is `range`. Achromatic colors have hue 0.
///
/// Like the formulas in CSS Color 4, this function does not normalize the
/// result, so colors with red as largest channel may have a negative hue.
#[inline]
fn hue_from_rgb(red: Float, green: Float, blue: Float, max: Float, range: Float) -> Float {
    if range == 0.0 {
        0.0
    } else if max == red {
        60.0 * (green - blue) / range
    } else if max == green {
        60.0 * (2.0 + (blue - red) / range)
    } else {
        60.0 * (4.0 + (red - green) / range)
    }
}

// --------------------------------------------------------------------------------------------------------------------

/// Convert HSL to RGB coordinates.
///
/// This function implements the CSS Color 4 formula, which computes each
/// channel from the hue's position on a twelve-step color circle.
pub fn rgb_from_hsl(hue: Float, saturation: Float, lightness: Float) -> [Float; 3] {
    let chroma = lightness.min(1.0 - lightness) * saturation;

    #[inline]
    fn channel(offset: Float, hue: Float, lightness: Float, chroma: Float) -> Float {
        let k = modulo(offset + hue / 30.0, 12.0);
        (-chroma).mul_add((k - 3.0).min(9.0 - k).clamp(-1.0, 1.0), lightness)
    }

    [
        channel(0.0, hue, lightness, chroma),
        channel(8.0, hue, lightness, chroma),
        channel(4.0, hue, lightness, chroma),
    ]
}

/// Convert RGB to HSL coordinates.
///
/// Achromatic colors have hue 0. Black and white also have saturation 0.
pub fn hsl_from_rgb(red: Float, green: Float, blue: Float) -> [Float; 3] {
    let max = red.max(green).max(blue);
    let range = max - red.min(green).min(blue);

    let lightness = max - range / 2.0;
    let saturation = if lightness == 0.0 || lightness == 1.0 {
        0.0
    } else {
        (max - lightness) / lightness.min(1.0 - lightness)
    };

    [
        hue_from_rgb(red, green, blue, max, range),
        saturation,
        lightness,
    ]
}

/// Convert HSV to RGB coordinates.
///
/// This function computes each channel from the hue's position on a six-step
/// color circle.
pub fn rgb_from_hsv(hue: Float, saturation: Float, value: Float) -> [Float; 3] {
    let chroma = value * saturation;

    #[inline]
    fn channel(offset: Float, hue: Float, value: Float, chroma: Float) -> Float {
        let k = modulo(offset + hue / 60.0, 6.0);
        (-chroma).mul_add(k.min(4.0 - k).clamp(0.0, 1.0), value)
    }

    [
        channel(5.0, hue, value, chroma),
        channel(3.0, hue, value, chroma),
        channel(1.0, hue, value, chroma),
    ]
}

/// Convert RGB to HSV coordinates.
///
/// Achromatic colors have hue 0. Black also has saturation 0.
pub fn hsv_from_rgb(red: Float, green: Float, blue: Float) -> [Float; 3] {
    let value = red.max(green).max(blue);
    let range = value - red.min(green).min(blue);
    let saturation = if value == 0.0 { 0.0 } else { range / value };

    [
        hue_from_rgb(red, green, blue, value, range),
        saturation,
        value,
    ]
}

/// Convert HSL to HSV coordinates. This is a direct conversion.
///
/// Black has saturation 0.
pub fn hsv_from_hsl(hue: Float, saturation: Float, lightness: Float) -> [Float; 3] {
    let value = saturation.mul_add(lightness.min(1.0 - lightness), lightness);
    let saturation = if value == 0.0 {
        0.0
    } else {
        2.0 * (1.0 - lightness / value)
    };

    [hue, saturation, value]
}

/// Convert HSV to HSL coordinates. This is a direct conversion.
///
/// Black and white have saturation 0.
pub fn hsl_from_hsv(hue: Float, saturation: Float, value: Float) -> [Float; 3] {
    let lightness = value * (1.0 - saturation / 2.0);
    let saturation = if lightness == 0.0 || lightness == 1.0 {
        0.0
    } else {
        (value - lightness) / lightness.min(1.0 - lightness)
    };

    [hue, saturation, lightness]
}

// ====================================================================================================================

#[cfg(test)]
mod test {
    use super::*;
    use crate::{assert_close_coordinates, assert_close_enough};
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    struct Representations {
        rgb: [Float; 3],
        hsl: [Float; 3],
        hsv: [Float; 3],
    }

    const BLACK: Representations = Representations {
        rgb: [0.0, 0.0, 0.0],
        hsl: [0.0, 0.0, 0.0],
        hsv: [0.0, 0.0, 0.0],
    };

    const WHITE: Representations = Representations {
        rgb: [1.0, 1.0, 1.0],
        hsl: [0.0, 0.0, 1.0],
        hsv: [0.0, 0.0, 1.0],
    };

    const RED: Representations = Representations {
        rgb: [1.0, 0.0, 0.0],
        hsl: [0.0, 1.0, 0.5],
        hsv: [0.0, 1.0, 1.0],
    };

    const TEAL: Representations = Representations {
        rgb: [0.0, 0.5, 0.5],
        hsl: [180.0, 1.0, 0.25],
        hsv: [180.0, 1.0, 0.5],
    };

    const PURPLE: Representations = Representations {
        rgb: [0.6, 0.2, 0.8],
        hsl: [280.0, 0.6, 0.5],
        hsv: [280.0, 0.75, 0.8],
    };

    #[test]
    fn test_conversions() {
        for color in [&BLACK, &WHITE, &RED, &TEAL, &PURPLE] {
            let [r, g, b] = color.rgb;
            assert_close_coordinates!(hsl_from_rgb(r, g, b), color.hsl);
            assert_close_coordinates!(hsv_from_rgb(r, g, b), color.hsv);

            let [h, s, l] = color.hsl;
            assert_close_coordinates!(rgb_from_hsl(h, s, l), color.rgb);
            assert_close_coordinates!(hsv_from_hsl(h, s, l), color.hsv);

            let [h, s, v] = color.hsv;
            assert_close_coordinates!(rgb_from_hsv(h, s, v), color.rgb);
            assert_close_coordinates!(hsl_from_hsv(h, s, v), color.hsl);
        }
    }

    #[test]
    fn test_degenerate_hue() {
        let [h, s, v] = hsv_from_rgb(0.5, 0.5, 0.5);
        assert_eq!(h, 0.0);
        assert_eq!(s, 0.0);
        assert_eq!(v, 0.5);

        let [_, s, l] = hsl_from_rgb(1.0, 1.0, 1.0);
        assert_eq!(s, 0.0);
        assert_eq!(l, 1.0);

        assert_eq!(hsv_from_hsl(120.0, 0.7, 0.0), [120.0, 0.0, 0.0]);
        assert_eq!(hsl_from_hsv(120.0, 0.0, 1.0), [120.0, 0.0, 1.0]);
        assert_eq!(hsl_from_hsv(120.0, 0.7, 0.0), [120.0, 0.0, 0.0]);
    }

    #[test]
    fn test_unnormalized_hue() {
        // Red is largest and blue exceeds green, so hue comes out negative.
        let [h, _, _] = hsv_from_rgb(1.0, 0.0, 0.5);
        assert_close_enough!(h, -30.0);
        assert_close_enough!(coterminal(h), 330.0);

        // Hue may be any angle whatsoever.
        assert_close_coordinates!(rgb_from_hsv(-30.0, 1.0, 1.0), [1.0, 0.0, 0.5]);
        assert_close_coordinates!(rgb_from_hsv(690.0, 1.0, 1.0), [1.0, 0.0, 0.5]);
        assert_close_coordinates!(rgb_from_hsl(-240.0, 1.0, 0.5), [0.0, 1.0, 0.0]);
    }

    #[test]
    fn test_boundary_angles() {
        for (hue, rgb) in [
            (0.0, [1.0, 0.0, 0.0]),
            (60.0, [1.0, 1.0, 0.0]),
            (120.0, [0.0, 1.0, 0.0]),
            (180.0, [0.0, 1.0, 1.0]),
            (240.0, [0.0, 0.0, 1.0]),
            (300.0, [1.0, 0.0, 1.0]),
            (360.0, [1.0, 0.0, 0.0]),
            (-360.0, [1.0, 0.0, 0.0]),
        ] {
            assert_close_coordinates!(rgb_from_hsv(hue, 1.0, 1.0), rgb);
            assert_close_coordinates!(rgb_from_hsl(hue, 1.0, 0.5), rgb);
        }
    }

    #[test]
    fn test_coterminal() {
        assert_eq!(coterminal(0.0), 0.0);
        assert_eq!(coterminal(360.0), 0.0);
        assert_eq!(coterminal(370.0), 10.0);
        assert_eq!(coterminal(-90.0), 270.0);
        assert_eq!(coterminal(-720.0), 0.0);

        // A hair below zero must not wrap around to 360.
        assert_eq!(coterminal(-6e-17), 0.0);
        let [hue, _, _] = hsv_from_rgb(1.0, 0.0, 1e-18);
        assert!(hue < 0.0);
        let hue = coterminal(hue);
        assert!((0.0..360.0).contains(&hue));
    }

    #[test]
    fn test_round_trips() {
        let mut rng = StdRng::seed_from_u64(0x7269_6875);

        for _ in 0..10_000 {
            let rgb: [Float; 3] = [rng.random(), rng.random(), rng.random()];
            let [r, g, b] = rgb;

            let [h, s, v] = hsv_from_rgb(r, g, b);
            assert_close_coordinates!(rgb_from_hsv(h, s, v), rgb);

            let [hh, hs, hl] = hsl_from_rgb(r, g, b);
            assert_close_coordinates!(rgb_from_hsl(hh, hs, hl), rgb);

            let [h, s, l] = hsl_from_hsv(h, s, v);
            let [_, s, v] = hsv_from_hsl(h, s, l);
            assert_close_coordinates!(rgb_from_hsv(h, s, v), rgb);
        }
    }
}
