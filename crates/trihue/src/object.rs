use crate::core::{format_css_rgb, hsl_from_hsv, hsv_from_rgb, rgb_from_hsv};
use crate::{Channels, Float};

/// A color in HSV with alpha.
///
/// This is the value a [`Picker`](crate::Picker) is seeded with and reports
/// back. Equality is exact, since it serves to detect whether the user changed
/// anything at all.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HsvColor {
    /// The hue in degrees.
    pub hue: Float,
    /// The saturation in `0..=1`.
    pub saturation: Float,
    /// The value or brightness in `0..=1`.
    pub value: Float,
    /// The alpha in `0..=1`.
    pub alpha: Float,
}

impl HsvColor {
    /// Create a new, fully opaque color.
    pub const fn new(hue: Float, saturation: Float, value: Float) -> Self {
        Self::with_alpha(hue, saturation, value, 1.0)
    }

    /// Create a new color with the given alpha.
    pub const fn with_alpha(hue: Float, saturation: Float, value: Float, alpha: Float) -> Self {
        Self {
            hue,
            saturation,
            value,
            alpha,
        }
    }

    /// Create a new color from RGB coordinates.
    pub fn from_rgb(red: Float, green: Float, blue: Float, alpha: Float) -> Self {
        let [hue, saturation, value] = hsv_from_rgb(red, green, blue);
        Self::with_alpha(hue, saturation, value, alpha)
    }

    /// Get the HSV coordinates and alpha.
    pub const fn to_hsva(&self) -> [Float; 4] {
        [self.hue, self.saturation, self.value, self.alpha]
    }

    /// Convert to RGB coordinates and alpha.
    pub fn to_rgba(&self) -> [Float; 4] {
        let [r, g, b] = rgb_from_hsv(self.hue, self.saturation, self.value);
        [r, g, b, self.alpha]
    }

    /// Convert to HSL coordinates and alpha.
    pub fn to_hsla(&self) -> [Float; 4] {
        let [h, s, l] = hsl_from_hsv(self.hue, self.saturation, self.value);
        [h, s, l, self.alpha]
    }

    /// Format as a CSS `rgb()` function or, if alpha isn't 1, `rgba()`
    /// function.
    pub fn css_rgba(&self) -> String {
        let [r, g, b, a] = self.to_rgba();
        format_css_rgb(r, g, b, a)
    }
}

impl From<[Float; 4]> for HsvColor {
    fn from(value: [Float; 4]) -> Self {
        let [h, s, v, a] = value;
        Self::with_alpha(h, s, v, a)
    }
}

impl From<Channels> for HsvColor {
    /// Create a new color from HSV channels, with alpha defaulting to 1.
    fn from(value: Channels) -> Self {
        Self::from(value.to_array())
    }
}

impl core::fmt::Display for HsvColor {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.css_rgba())
    }
}

// ====================================================================================================================

#[cfg(test)]
mod test {
    use super::HsvColor;
    use crate::{assert_close_coordinates, Channels};

    #[test]
    fn test_conversions() {
        let orange = HsvColor::from_rgb(1.0, 0.5, 0.0, 1.0);
        assert_close_coordinates!(orange.to_hsva(), [30.0, 1.0, 1.0, 1.0]);
        assert_close_coordinates!(orange.to_rgba(), [1.0, 0.5, 0.0, 1.0]);
        assert_close_coordinates!(orange.to_hsla(), [30.0, 1.0, 0.5, 1.0]);

        let gray = HsvColor::from(Channels::opaque([0.0, 0.0, 0.5]));
        assert_eq!(gray, HsvColor::new(0.0, 0.0, 0.5));
    }

    #[test]
    fn test_css() {
        assert_eq!(HsvColor::new(0.0, 1.0, 1.0).css_rgba(), "rgb(255,0,0)");
        assert_eq!(
            HsvColor::with_alpha(240.0, 1.0, 1.0, 0.5).to_string(),
            "rgba(0,0,255,0.5)"
        );
        assert_eq!(HsvColor::new(0.0, 0.0, 0.5).css_rgba(), "rgb(128,128,128)");
    }
}
