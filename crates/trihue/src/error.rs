//! Utility module with trihue's errors.
//!
//! Strict parsers and the [`Converter`](crate::Converter) fail fast with one of
//! the errors below. Both error types classify themselves with an
//! [`ErrorKind`], which distinguishes text that isn't even shaped like the
//! expected color format from text that is shaped right but carries the wrong
//! arguments.

use crate::ColorSpace;

/// The two broad classes of errors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The input does not have the syntax of the expected color format.
    Type,
    /// The input has the right syntax but unsuitable arguments, or the
    /// requested operation does not apply to the given arguments.
    Argument,
}

// ====================================================================================================================

/// An erroneous color format.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ColorFormatError {
    /// A color format that does not look like a CSS function call. For
    /// example, `rgb 1 2 3` has no parentheses and `(1, 2, 3)` has no name.
    NotAFunction,

    /// A CSS function other than `rgb()`, `rgba()`, `hsl()`, and `hsla()`.
    UnknownFunction,

    /// A CSS function whose arguments are not numbers or percentages as
    /// expected. For example, `rgb(10%, 0, 0)` uses a percentage for red and
    /// `hsl(0, 1, 1)` uses plain numbers for saturation and lightness.
    MalformedArguments,

    /// A CSS function without alpha in its name but with four arguments, e.g.,
    /// `rgb(0, 0, 0, 1)`.
    TooManyArguments,

    /// A color format that does not start with `#`.
    NotAHexColor,

    /// A hashed color format with characters other than hexadecimal digits,
    /// e.g., `#00g`.
    MalformedHex,

    /// A hashed color format with a number of digits other than 3, 4, 6, or 8.
    UnexpectedLength,

    /// A name that is not one of the CSS color keywords.
    UnknownName,
}

impl ColorFormatError {
    /// Classify this error.
    pub const fn kind(&self) -> ErrorKind {
        use ColorFormatError::*;

        match *self {
            NotAFunction | NotAHexColor | MalformedHex | UnknownName => ErrorKind::Type,
            UnknownFunction | MalformedArguments | TooManyArguments | UnexpectedLength => {
                ErrorKind::Argument
            }
        }
    }
}

impl core::fmt::Display for ColorFormatError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        use ColorFormatError::*;

        match *self {
            NotAFunction => f.write_str("color format should be a CSS function call but is not"),
            UnknownFunction => f.write_str(
                "color format should use the `rgb()`, `rgba()`, `hsl()`, or `hsla()` function",
            ),
            MalformedArguments => f.write_str(
                "color format arguments should be numbers for RGB and percentages for HSL \
                saturation and lightness",
            ),
            TooManyArguments => {
                f.write_str("color format without alpha in its name should have 3 arguments")
            }
            NotAHexColor => f.write_str("color format should start with `#`"),
            MalformedHex => f.write_str("color format should contain only hexadecimal digits"),
            UnexpectedLength => {
                f.write_str("color format should have 3, 4, 6, or 8 hexadecimal digits")
            }
            UnknownName => f.write_str("color name should be a CSS color keyword but is not"),
        }
    }
}

impl std::error::Error for ColorFormatError {}

// ====================================================================================================================

/// An error converting between color spaces.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConversionError {
    /// There is no conversion between the two color space tags.
    Unsupported { from: String, to: String },

    /// The coordinates have the wrong number of channels for the source color
    /// space.
    ChannelCount { space: ColorSpace, actual: usize },
}

impl ConversionError {
    /// Create a new error for an unsupported pair of color space tags.
    pub fn unsupported<F, T>(from: F, to: T) -> Self
    where
        F: Into<String>,
        T: Into<String>,
    {
        Self::Unsupported {
            from: from.into(),
            to: to.into(),
        }
    }

    /// Classify this error.
    pub const fn kind(&self) -> ErrorKind {
        ErrorKind::Argument
    }
}

impl core::fmt::Display for ConversionError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match *self {
            Self::Unsupported { ref from, ref to } => f.write_fmt(format_args!(
                "there is no conversion between {} and {}",
                from, to
            )),
            Self::ChannelCount { space, actual } => f.write_fmt(format_args!(
                "{} coordinates should have {} channels but have {}",
                space,
                space.channel_count(),
                actual
            )),
        }
    }
}

impl std::error::Error for ConversionError {}

// ====================================================================================================================
