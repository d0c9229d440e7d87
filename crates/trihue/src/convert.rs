use crate::core::{
    hsl_from_hsv, hsl_from_rgb, hsv_from_hsl, hsv_from_rgb, rgb_from_hsl, rgb_from_hsv,
};
use crate::error::ConversionError;
use crate::{ColorSpace, Float};

/// The channels of a color, i.e., three coordinates optionally followed by
/// alpha.
///
/// Channels live on the stack and dereference to a slice of length 3 or 4.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Channels {
    values: [Float; 4],
    len: usize,
}

impl Channels {
    /// Create new channels without alpha.
    pub const fn opaque(coordinates: [Float; 3]) -> Self {
        let [c1, c2, c3] = coordinates;
        Self {
            values: [c1, c2, c3, 1.0],
            len: 3,
        }
    }

    /// Create new channels with alpha.
    pub const fn with_alpha(coordinates: [Float; 3], alpha: Float) -> Self {
        let [c1, c2, c3] = coordinates;
        Self {
            values: [c1, c2, c3, alpha],
            len: 4,
        }
    }

    /// Create new channels from a slice with three or four elements.
    pub fn from_slice(values: &[Float]) -> Option<Self> {
        match *values {
            [c1, c2, c3] => Some(Self::opaque([c1, c2, c3])),
            [c1, c2, c3, alpha] => Some(Self::with_alpha([c1, c2, c3], alpha)),
            _ => None,
        }
    }

    /// Access the three coordinates, without alpha.
    pub const fn coordinates(&self) -> [Float; 3] {
        let [c1, c2, c3, _] = self.values;
        [c1, c2, c3]
    }

    /// Determine whether these channels include alpha.
    pub const fn has_alpha(&self) -> bool {
        self.len == 4
    }

    /// Access alpha, if present.
    pub const fn alpha(&self) -> Option<Float> {
        if self.has_alpha() {
            Some(self.values[3])
        } else {
            None
        }
    }

    /// Convert to an array with four elements. If these channels have no
    /// alpha, the fourth element is 1.
    pub const fn to_array(&self) -> [Float; 4] {
        self.values
    }
}

impl core::ops::Deref for Channels {
    type Target = [Float];

    fn deref(&self) -> &Self::Target {
        &self.values[..self.len]
    }
}

impl From<[Float; 3]> for Channels {
    fn from(value: [Float; 3]) -> Self {
        Self::opaque(value)
    }
}

impl From<[Float; 4]> for Channels {
    fn from(value: [Float; 4]) -> Self {
        let [c1, c2, c3, alpha] = value;
        Self::with_alpha([c1, c2, c3], alpha)
    }
}

// ====================================================================================================================

type Formula = fn(Float, Float, Float) -> [Float; 3];

#[inline]
fn identity(c1: Float, c2: Float, c3: Float) -> [Float; 3] {
    [c1, c2, c3]
}

/// What to do about alpha.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum AlphaPolicy {
    /// Neither source nor target have alpha.
    Neither,
    /// Only the source has alpha, which is dropped.
    Drop,
    /// Only the target has alpha, which is 1.
    Append,
    /// Both have alpha, which is carried through.
    Carry,
}

/// A converter between two color spaces.
///
/// A converter combines the direct formula between the two color spaces with
/// the handling of alpha. If only the source color space has alpha, the
/// converter drops it. If only the target color space has alpha, the converter
/// appends 1. If both color spaces have alpha, the converter carries it
/// through. If source and target are the same, the converter passes
/// coordinates through unchanged.
///
/// ```
/// # use trihue::{ColorSpace, Converter};
/// # use trihue::error::ConversionError;
/// # fn main() -> Result<(), ConversionError> {
/// let to_hsva = Converter::from_tags("rgb", "hsva")?;
/// let hsva = to_hsva.apply(&[0.5, 0.2, 0.8])?;
/// assert_eq!(hsva.len(), 4);
/// assert_eq!(hsva[3], 1.0);
///
/// let to_hsv = Converter::new(ColorSpace::Rgba, ColorSpace::Hsv);
/// assert_eq!(to_hsv.apply(&[0.5, 0.2, 0.8, 0.3])?.len(), 3);
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Converter {
    source: ColorSpace,
    target: ColorSpace,
    formula: Formula,
    alpha: AlphaPolicy,
}

impl Converter {
    /// Create a new converter between the two color spaces.
    pub fn new(source: ColorSpace, target: ColorSpace) -> Self {
        use ColorSpace::*;

        let formula: Formula = match (source.opaque(), target.opaque()) {
            (Rgb, Hsl) => hsl_from_rgb,
            (Rgb, Hsv) => hsv_from_rgb,
            (Hsl, Rgb) => rgb_from_hsl,
            (Hsl, Hsv) => hsv_from_hsl,
            (Hsv, Rgb) => rgb_from_hsv,
            (Hsv, Hsl) => hsl_from_hsv,
            _ => identity,
        };

        let alpha = match (source.has_alpha(), target.has_alpha()) {
            (false, false) => AlphaPolicy::Neither,
            (true, false) => AlphaPolicy::Drop,
            (false, true) => AlphaPolicy::Append,
            (true, true) => AlphaPolicy::Carry,
        };

        Self {
            source,
            target,
            formula,
            alpha,
        }
    }

    /// Create a new converter between the color spaces with the given tags.
    ///
    /// Tags are case-sensitive and must be one of `rgb`, `rgba`, `hsl`,
    /// `hsla`, `hsv`, `hsva`, `hsb`, or `hsba`. This method fails with an error
    /// naming both tags if either is not supported.
    pub fn from_tags(source: &str, target: &str) -> Result<Self, ConversionError> {
        match (ColorSpace::from_tag(source), ColorSpace::from_tag(target)) {
            (Some(s), Some(t)) => Ok(Self::new(s, t)),
            _ => Err(ConversionError::unsupported(source, target)),
        }
    }

    /// Get the source color space.
    pub const fn source(&self) -> ColorSpace {
        self.source
    }

    /// Get the target color space.
    pub const fn target(&self) -> ColorSpace {
        self.target
    }

    /// Convert the channels.
    ///
    /// This method fails if the number of channels does not match the source
    /// color space.
    pub fn apply(&self, channels: &[Float]) -> Result<Channels, ConversionError> {
        let input = Channels::from_slice(channels)
            .filter(|input| input.has_alpha() == self.source.has_alpha())
            .ok_or(ConversionError::ChannelCount {
                space: self.source,
                actual: channels.len(),
            })?;

        if self.source == self.target {
            return Ok(input);
        }

        let [c1, c2, c3] = input.coordinates();
        let output = (self.formula)(c1, c2, c3);

        Ok(match self.alpha {
            AlphaPolicy::Neither | AlphaPolicy::Drop => Channels::opaque(output),
            AlphaPolicy::Append => Channels::with_alpha(output, 1.0),
            AlphaPolicy::Carry => Channels::with_alpha(output, input.to_array()[3]),
        })
    }
}

// ====================================================================================================================
