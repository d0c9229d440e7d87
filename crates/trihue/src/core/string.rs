use crate::error::ColorFormatError;
use crate::{Channels, ColorSpace, Float};

/// A single argument of a CSS color function.
#[derive(Clone, Copy, Debug, PartialEq)]
enum Argument {
    Number(Float),
    Percentage(Float),
}

impl Argument {
    /// Get the numeric value, scaling percentages to unit range.
    fn unit_value(self) -> Float {
        match self {
            Self::Number(n) => n,
            Self::Percentage(p) => p / 100.0,
        }
    }

    fn is_percentage(self) -> bool {
        matches!(self, Self::Percentage(_))
    }
}

/// Parse an argument, which is an optionally signed decimal number without
/// exponent, e.g., `-1`, `.5`, or `12.75`, optionally followed by `%`.
fn parse_argument(s: &str) -> Option<Argument> {
    let (body, is_percentage) = s
        .strip_suffix('%')
        .map_or((s, false), |body| (body, true));

    let unsigned = body.strip_prefix(|c| c == '+' || c == '-').unwrap_or(body);
    let (integral, fractional) = unsigned.split_once('.').unwrap_or(("", unsigned));
    if fractional.is_empty()
        || !integral.bytes().all(|b| b.is_ascii_digit())
        || !fractional.bytes().all(|b| b.is_ascii_digit())
    {
        return None;
    }

    let value: Float = body.parse().ok()?;
    Some(if is_percentage {
        Argument::Percentage(value)
    } else {
        Argument::Number(value)
    })
}

/// Parse a CSS color function with comma-separated arguments.
///
/// This function recognizes `rgb()`, `rgba()`, `hsl()`, and `hsla()`. It trims
/// leading and trailing white space, but the function name must be lowercase.
/// RGB arguments must be plain numbers in `0..=255` and are scaled to
/// unit range. HSL hue must be a plain number in degrees and is passed through
/// as is, whereas saturation and lightness must be percentages and are scaled
/// to unit range. An optional fourth argument is alpha, either as number or
/// percentage, and only allowed if the function name ends in `a`. If such a
/// function has three arguments only, alpha defaults to 1.
///
/// The result has three channels for `rgb()` and `hsl()` and four channels
/// otherwise.
pub fn parse_function(s: &str) -> Result<(ColorSpace, Channels), ColorFormatError> {
    use ColorFormatError::*;

    // Munge function name and parentheses
    let s = s.trim();
    let (name, rest) = s.split_once('(').ok_or(NotAFunction)?;
    if name.is_empty() || !name.bytes().all(|b| b.is_ascii_alphabetic()) {
        return Err(NotAFunction);
    }
    let body = rest.strip_suffix(')').ok_or(NotAFunction)?;

    // Munge arguments
    let mut arguments = [Argument::Number(0.0); 4];
    let mut count = 0;
    for token in body.split(',') {
        let slot = arguments.get_mut(count).ok_or(NotAFunction)?;
        *slot = parse_argument(token.trim()).ok_or(NotAFunction)?;
        count += 1;
    }
    if count < 3 {
        return Err(NotAFunction);
    }

    // Munge color space and check argument shapes
    let space = ColorSpace::from_tag(name)
        .filter(|space| !matches!(space.opaque(), ColorSpace::Hsv))
        .ok_or(UnknownFunction)?;

    let [a1, a2, a3, a4] = arguments;
    let coordinates = if space.is_polar() {
        if a1.is_percentage() || !a2.is_percentage() || !a3.is_percentage() {
            return Err(MalformedArguments);
        }
        [a1.unit_value(), a2.unit_value(), a3.unit_value()]
    } else {
        if a1.is_percentage() || a2.is_percentage() || a3.is_percentage() {
            return Err(MalformedArguments);
        }
        [
            a1.unit_value() / 255.0,
            a2.unit_value() / 255.0,
            a3.unit_value() / 255.0,
        ]
    };

    // Munge alpha
    if !space.has_alpha() {
        if count == 4 {
            return Err(TooManyArguments);
        }
        return Ok((space, Channels::opaque(coordinates)));
    }

    let alpha = if count == 4 { a4.unit_value() } else { 1.0 };
    Ok((space, Channels::with_alpha(coordinates, alpha)))
}

// --------------------------------------------------------------------------------------------------------------------

/// The two-digit hexadecimal components of a hashed color.
///
/// Single-digit components have been expanded by doubling the digit. The
/// digits retain their original case.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HexDigits {
    digits: String,
}

impl HexDigits {
    /// Get the number of components, which is 3 or 4.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.digits.len() / 2
    }

    /// Determine whether there is an alpha component.
    pub fn has_alpha(&self) -> bool {
        self.len() == 4
    }

    /// Get the component with the given index.
    pub fn get(&self, index: usize) -> Option<&str> {
        self.digits.get(2 * index..2 * index + 2)
    }

    /// Create an iterator over the components.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        (0..self.len()).filter_map(|index| self.get(index))
    }

    /// Format as six-digit hashed hexadecimal, dropping any alpha.
    pub fn to_hex6(&self) -> String {
        let mut s = String::with_capacity(7);
        s.push('#');
        s.push_str(self.digits.get(..6).unwrap_or_default());
        s
    }

    /// Convert to numeric channels in unit range.
    pub fn to_channels(&self) -> Channels {
        let mut coordinates = [0.0; 4];
        for (coordinate, component) in coordinates.iter_mut().zip(self.iter()) {
            // Digits have been validated already.
            *coordinate = u8::from_str_radix(component, 16).map_or(0.0, Float::from) / 255.0;
        }

        let [c1, c2, c3, c4] = coordinates;
        if self.has_alpha() {
            Channels::with_alpha([c1, c2, c3], c4)
        } else {
            Channels::opaque([c1, c2, c3])
        }
    }
}

/// Parse a color in hashed hexadecimal format into its components.
///
/// This function recognizes 3, 4, 6, and 8 digit formats, i.e., `#RGB`,
/// `#RGBA`, `#RRGGBB`, and `#RRGGBBAA`, without surrounding white space. It
/// expands single-digit components by doubling the digit.
pub fn parse_hex_digits(s: &str) -> Result<HexDigits, ColorFormatError> {
    use ColorFormatError::*;

    let body = s.strip_prefix('#').ok_or(NotAHexColor)?;
    if !(3..=8).contains(&body.len()) || !body.bytes().all(|b| b.is_ascii_alphanumeric()) {
        return Err(NotAHexColor);
    } else if !body.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(MalformedHex);
    }

    let digits = match body.len() {
        3 | 4 => body.chars().flat_map(|c| [c, c]).collect(),
        6 | 8 => body.to_string(),
        _ => return Err(UnexpectedLength),
    };

    Ok(HexDigits { digits })
}

/// Parse a color in hashed hexadecimal format into numeric channels.
///
/// This function accepts the same formats as [`parse_hex_digits`] and scales
/// each component to unit range. The result has four channels if the format
/// includes alpha and three channels otherwise.
pub fn parse_hex(s: &str) -> Result<Channels, ColorFormatError> {
    parse_hex_digits(s).map(|digits| digits.to_channels())
}

// --------------------------------------------------------------------------------------------------------------------

/// Format the HSL coordinates as a CSS `hsl()` or, if alpha isn't 1, `hsla()`
/// function.
pub fn format_css_hsl(hue: Float, saturation: Float, lightness: Float, alpha: Float) -> String {
    if alpha == 1.0 {
        format!("hsl({},{}%,{}%)", hue, saturation * 100.0, lightness * 100.0)
    } else {
        format!(
            "hsla({},{}%,{}%, {})",
            hue,
            saturation * 100.0,
            lightness * 100.0,
            alpha
        )
    }
}

/// Format the RGB coordinates as a CSS `rgb()` or, if alpha isn't 1, `rgba()`
/// function. Channels are rounded to 8-bit integers.
pub fn format_css_rgb(red: Float, green: Float, blue: Float, alpha: Float) -> String {
    #[inline]
    fn to_8bit(value: Float) -> u8 {
        (value * 255.0).round().clamp(0.0, 255.0) as u8
    }

    let (r, g, b) = (to_8bit(red), to_8bit(green), to_8bit(blue));
    if alpha == 1.0 {
        format!("rgb({},{},{})", r, g, b)
    } else {
        format!("rgba({},{},{},{})", r, g, b, alpha)
    }
}

// ====================================================================================================================

#[cfg(test)]
mod test {
    use super::{
        format_css_hsl, format_css_rgb, parse_argument, parse_function, parse_hex,
        parse_hex_digits, Argument,
    };
    use crate::error::{ColorFormatError, ErrorKind};
    use crate::ColorSpace::*;
    use crate::{assert_close_coordinates, Float};

    #[test]
    fn test_parse_argument() {
        assert_eq!(parse_argument("1"), Some(Argument::Number(1.0)));
        assert_eq!(parse_argument("-2.5"), Some(Argument::Number(-2.5)));
        assert_eq!(parse_argument("+.5"), Some(Argument::Number(0.5)));
        assert_eq!(parse_argument("50%"), Some(Argument::Percentage(50.0)));
        assert_eq!(parse_argument("1."), None);
        assert_eq!(parse_argument("1e3"), None);
        assert_eq!(parse_argument("%"), None);
        assert_eq!(parse_argument(""), None);
        assert_eq!(parse_argument("--1"), None);
    }

    #[test]
    fn test_parse_function() -> Result<(), ColorFormatError> {
        let (space, channels) = parse_function("rgb(255, 0, 51)")?;
        assert_eq!(space, Rgb);
        assert_close_coordinates!(channels, [1.0, 0.0, 0.2]);

        let (space, channels) = parse_function("  rgba(255,0,0,0.5)  ")?;
        assert_eq!(space, Rgba);
        assert_close_coordinates!(channels, [1.0, 0.0, 0.0, 0.5]);

        let (space, channels) = parse_function("hsl(-120, 100%, 50%)")?;
        assert_eq!(space, Hsl);
        assert_close_coordinates!(channels, [-120.0, 1.0, 0.5]);

        let (space, channels) = parse_function("hsla( 400 , 25% , 75% , 40% )")?;
        assert_eq!(space, Hsla);
        assert_close_coordinates!(channels, [400.0, 0.25, 0.75, 0.4]);

        let (space, channels) = parse_function("rgba(0, 0, 255)")?;
        assert_eq!(space, Rgba);
        assert_close_coordinates!(channels, [0.0, 0.0, 1.0, 1.0]);

        Ok(())
    }

    #[test]
    fn test_parse_function_errors() {
        use ColorFormatError::*;

        for (input, error) in [
            ("red", NotAFunction),
            ("rgb 1, 2, 3", NotAFunction),
            ("(1, 2, 3)", NotAFunction),
            ("rgb(1, 2, 3", NotAFunction),
            ("rgb()", NotAFunction),
            ("rgb(1, 2)", NotAFunction),
            ("rgb(1, 2, 3, 4, 5)", NotAFunction),
            ("rgb(1 2 3)", NotAFunction),
            ("rgb(a, b, c)", NotAFunction),
            ("rgb2(1, 2, 3)", NotAFunction),
            ("cmyk(1, 2, 3)", UnknownFunction),
            ("RGB(1, 2, 3)", UnknownFunction),
            ("Hsla(0, 0%, 0%, 1)", UnknownFunction),
            ("hsv(1, 2%, 3%)", UnknownFunction),
            ("rgb(10%, 0, 0)", MalformedArguments),
            ("hsl(0, 1, 1)", MalformedArguments),
            ("hsl(0%, 100%, 50%)", MalformedArguments),
            ("rgb(0, 0, 0, 1)", TooManyArguments),
            ("hsl(0, 0%, 0%, 1)", TooManyArguments),
        ] {
            assert_eq!(parse_function(input), Err(error), "input {:?}", input);
        }

        assert_eq!(
            parse_function("nope").map_err(|e| e.kind()),
            Err(ErrorKind::Type)
        );
        assert_eq!(
            parse_function("rgb(1%, 2, 3)").map_err(|e| e.kind()),
            Err(ErrorKind::Argument)
        );
    }

    #[test]
    fn test_parse_hex_digits() -> Result<(), ColorFormatError> {
        let digits = parse_hex_digits("#aBc")?;
        assert_eq!(digits.len(), 3);
        assert_eq!(digits.iter().collect::<Vec<_>>(), ["aa", "BB", "cc"]);
        assert_eq!(digits.to_hex6(), "#aaBBcc");

        let digits = parse_hex_digits("#12345678")?;
        assert!(digits.has_alpha());
        assert_eq!(digits.get(3), Some("78"));
        assert_eq!(digits.get(4), None);
        assert_eq!(digits.to_hex6(), "#123456");

        assert_eq!(parse_hex_digits("#f0a8")?.to_hex6(), "#ff00aa");

        assert_eq!(
            parse_hex_digits("abc"),
            Err(ColorFormatError::NotAHexColor)
        );
        assert_eq!(parse_hex_digits("#ab"), Err(ColorFormatError::NotAHexColor));
        assert_eq!(parse_hex_digits(" #abc"), Err(ColorFormatError::NotAHexColor));
        assert_eq!(parse_hex_digits("#abc "), Err(ColorFormatError::NotAHexColor));
        assert_eq!(
            parse_hex_digits("#123456789"),
            Err(ColorFormatError::NotAHexColor)
        );
        assert_eq!(
            parse_hex_digits("#a-b"),
            Err(ColorFormatError::NotAHexColor)
        );
        assert_eq!(parse_hex_digits("#00g"), Err(ColorFormatError::MalformedHex));
        assert_eq!(
            parse_hex_digits("#12345"),
            Err(ColorFormatError::UnexpectedLength)
        );
        assert_eq!(
            parse_hex_digits("#1234567"),
            Err(ColorFormatError::UnexpectedLength)
        );

        Ok(())
    }

    #[test]
    fn test_parse_hex() -> Result<(), ColorFormatError> {
        let short = parse_hex("#abc")?;
        let long = parse_hex("#aabbcc")?;
        assert_eq!(short, long);
        assert_close_coordinates!(
            short,
            [
                0xaa as Float / 255.0,
                0xbb as Float / 255.0,
                0xcc as Float / 255.0
            ]
        );

        let channels = parse_hex("#FF000080")?;
        assert_eq!(channels.len(), 4);
        assert_close_coordinates!(channels, [1.0, 0.0, 0.0, 128.0 / 255.0]);

        Ok(())
    }

    #[test]
    fn test_format() {
        assert_eq!(format_css_hsl(120.0, 1.0, 0.5, 1.0), "hsl(120,100%,50%)");
        assert_eq!(
            format_css_hsl(-30.0, 0.25, 0.75, 0.5),
            "hsla(-30,25%,75%, 0.5)"
        );
        assert_eq!(format_css_rgb(1.0, 0.0, 0.5, 1.0), "rgb(255,0,128)");
        assert_eq!(format_css_rgb(0.0, 1.0, 0.0, 0.25), "rgba(0,255,0,0.25)");
        assert_eq!(format_css_rgb(1.5, -0.5, 0.0, 1.0), "rgb(255,0,0)");
    }
}
