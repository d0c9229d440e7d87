use crate::error::ConversionError;

/// The enumeration of supported color spaces.
///
/// Trihue supports three cylindrical-or-not views of the very same sRGB gamut,
/// each with and without an alpha channel:
///
///   * **RGB** has red, green, and blue channels.
///   * **HSL** has hue, saturation, and lightness channels.
///   * **HSV**, also called HSB, has hue, saturation, and value (brightness)
///     channels.
///
/// All channels other than hue range `0..=1`. Hue is measured in degrees and
/// unbounded; use [`coterminal`](crate::coterminal) to reduce it to `0..360`.
/// When present, alpha is the fourth channel.
///
/// Color spaces are identified by lowercase tags, which are the names of the
/// corresponding CSS functions. Tags are case-sensitive. `hsb` and `hsba` are
/// accepted as aliases for `hsv` and `hsva`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ColorSpace {
    Rgb,
    Rgba,
    Hsl,
    Hsla,
    Hsv,
    Hsva,
}

impl ColorSpace {
    /// Look up the color space for the given tag.
    pub fn from_tag(tag: &str) -> Option<Self> {
        use ColorSpace::*;

        Some(match tag {
            "rgb" => Rgb,
            "rgba" => Rgba,
            "hsl" => Hsl,
            "hsla" => Hsla,
            "hsv" | "hsb" => Hsv,
            "hsva" | "hsba" => Hsva,
            _ => return None,
        })
    }

    /// Get this color space's canonical tag.
    pub const fn tag(&self) -> &'static str {
        use ColorSpace::*;

        match *self {
            Rgb => "rgb",
            Rgba => "rgba",
            Hsl => "hsl",
            Hsla => "hsla",
            Hsv => "hsv",
            Hsva => "hsva",
        }
    }

    /// Determine whether this color space has an alpha channel.
    pub const fn has_alpha(&self) -> bool {
        matches!(*self, Self::Rgba | Self::Hsla | Self::Hsva)
    }

    /// Determine the number of channels, including alpha.
    pub const fn channel_count(&self) -> usize {
        if self.has_alpha() {
            4
        } else {
            3
        }
    }

    /// Determine whether this color space is polar, i.e., has a hue.
    pub const fn is_polar(&self) -> bool {
        !matches!(*self, Self::Rgb | Self::Rgba)
    }

    /// Get the version of this color space without alpha.
    #[must_use]
    pub const fn opaque(&self) -> Self {
        use ColorSpace::*;

        match *self {
            Rgb | Rgba => Rgb,
            Hsl | Hsla => Hsl,
            Hsv | Hsva => Hsv,
        }
    }

    /// Get the version of this color space with alpha.
    #[must_use]
    pub const fn with_alpha(&self) -> Self {
        use ColorSpace::*;

        match *self {
            Rgb | Rgba => Rgba,
            Hsl | Hsla => Hsla,
            Hsv | Hsva => Hsva,
        }
    }
}

impl core::str::FromStr for ColorSpace {
    type Err = ConversionError;

    /// Parse the tag. Since a lone tag has no counterpart, the error names the
    /// tag as source and leaves the target empty.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_tag(s).ok_or_else(|| ConversionError::unsupported(s, ""))
    }
}

impl core::fmt::Display for ColorSpace {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.tag())
    }
}

// ====================================================================================================================
