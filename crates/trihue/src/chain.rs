use crate::core::{parse_function, parse_hex, parse_hex_digits, resolve_named};
use crate::opt::{Options, Volume};
use crate::{Channels, ColorSpace, Converter, Float};

type StageError = Box<dyn std::error::Error>;
type Stage<T> = (&'static str, fn(&str) -> Result<T, StageError>);

/// The hashed hexadecimal color for unresolvable inputs.
const GRAY_HEX: &str = "#7F7F7F";

/// The HSVA coordinates for unresolvable inputs.
const GRAY_HSVA: [Float; 4] = [0.0, 0.5, 0.0, 1.0];

/// The RGBA coordinates for unresolvable inputs.
const GRAY_RGBA: [Float; 4] = [0.5, 0.5, 0.5, 1.0];

/// Convert the channels in the given color space to the alpha-carrying
/// version of the target color space.
fn convert_to(
    source: ColorSpace,
    channels: &Channels,
    target: ColorSpace,
) -> Result<[Float; 4], StageError> {
    Ok(Converter::new(source, target.with_alpha()).apply(channels)?.to_array())
}

/// Determine the color space of the channels parsed from a hashed color.
fn hex_space(channels: &Channels) -> ColorSpace {
    if channels.has_alpha() {
        ColorSpace::Rgba
    } else {
        ColorSpace::Rgb
    }
}

/// Encode the unit-range RGB coordinates as six-digit hashed hexadecimal.
///
/// Each channel is scaled to `0..=255` and then truncated.
fn encode_hex6(coordinates: [Float; 3]) -> String {
    #[inline]
    fn to_8bit(value: Float) -> u8 {
        (value * 255.0).clamp(0.0, 255.0).trunc() as u8
    }

    let [r, g, b] = coordinates;
    format!("#{:02x}{:02x}{:02x}", to_8bit(r), to_8bit(g), to_8bit(b))
}

// --------------------------------------------------------------------------------------------------------------------

fn hex6_from_named(s: &str) -> Result<String, StageError> {
    Ok(resolve_named(s)?.to_string())
}

fn hex6_from_hex(s: &str) -> Result<String, StageError> {
    Ok(parse_hex_digits(s)?.to_hex6())
}

fn hex6_from_function(s: &str) -> Result<String, StageError> {
    let (space, channels) = parse_function(s)?;
    let [r, g, b, _] = convert_to(space, &channels, ColorSpace::Rgb)?;
    Ok(encode_hex6([r, g, b]))
}

fn hsva_from_named(s: &str) -> Result<[Float; 4], StageError> {
    let channels = parse_hex(resolve_named(s)?)?;
    convert_to(ColorSpace::Rgb, &channels, ColorSpace::Hsv)
}

fn hsva_from_hex(s: &str) -> Result<[Float; 4], StageError> {
    let channels = parse_hex(s)?;
    convert_to(hex_space(&channels), &channels, ColorSpace::Hsv)
}

fn hsva_from_function(s: &str) -> Result<[Float; 4], StageError> {
    let (space, channels) = parse_function(s)?;
    convert_to(space, &channels, ColorSpace::Hsv)
}

fn rgba_from_named(s: &str) -> Result<[Float; 4], StageError> {
    Ok(parse_hex(resolve_named(s)?)?.to_array())
}

fn rgba_from_hex(s: &str) -> Result<[Float; 4], StageError> {
    Ok(parse_hex(s)?.to_array())
}

fn rgba_from_function(s: &str) -> Result<[Float; 4], StageError> {
    let (space, channels) = parse_function(s)?;
    convert_to(space, &channels, ColorSpace::Rgb)
}

const HEX6_STAGES: [Stage<String>; 3] = [
    ("named", hex6_from_named),
    ("hex", hex6_from_hex),
    ("function", hex6_from_function),
];

const HSVA_STAGES: [Stage<[Float; 4]>; 3] = [
    ("named", hsva_from_named),
    ("hex", hsva_from_hex),
    ("function", hsva_from_function),
];

const RGBA_STAGES: [Stage<[Float; 4]>; 3] = [
    ("named", rgba_from_named),
    ("hex", rgba_from_hex),
    ("function", rgba_from_function),
];

// --------------------------------------------------------------------------------------------------------------------

/// A best-effort resolver of CSS colors.
///
/// Unlike the strict parsers, a resolver never fails. It tries a CSS color
/// keyword first, then a hashed hexadecimal color, and finally a CSS color
/// function. If all three fail, it falls back on a neutral gray. With
/// [`Volume::Regular`], the resolver reports such fallbacks on standard error.
/// With [`Volume::Detailed`], it also reports every rejected attempt.
///
/// ```
/// # use trihue::Resolver;
/// # use trihue::opt::Options;
/// let resolver = Resolver::new(Options::default());
/// assert_eq!(resolver.to_hex6("hsl(120, 100%, 50%)"), "#00ff00");
/// assert_eq!(resolver.to_hex6("#ABC"), "#AABBCC");
/// assert_eq!(resolver.to_hex6("no color"), "#7F7F7F");
/// ```
#[derive(Clone, Debug, Default)]
pub struct Resolver {
    options: Options,
}

impl Resolver {
    /// Create a new resolver with the given options.
    pub fn new(options: Options) -> Self {
        Self { options }
    }

    /// Get this resolver's options.
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Resolve the color to six-digit hashed hexadecimal.
    ///
    /// Keywords resolve to lowercase digits. Hashed colors retain the case of
    /// their digits but lose alpha. Functions are converted to RGB, with each
    /// channel truncated to 8 bits and formatted as lowercase digits.
    pub fn to_hex6(&self, color: &str) -> String {
        self.resolve(color, &HEX6_STAGES)
            .unwrap_or_else(|| GRAY_HEX.to_string())
    }

    /// Resolve the color to HSV coordinates with alpha.
    pub fn to_hsv_pack(&self, color: &str) -> [Float; 4] {
        self.resolve(color, &HSVA_STAGES).unwrap_or(GRAY_HSVA)
    }

    /// Resolve the color to RGB coordinates with alpha. The result always has
    /// four channels, with alpha defaulting to 1.
    pub fn to_rgb_pack(&self, color: &str) -> [Float; 4] {
        self.resolve(color, &RGBA_STAGES).unwrap_or(GRAY_RGBA)
    }

    /// Run the stages in order, returning the first successful result.
    fn resolve<T>(&self, color: &str, stages: &[Stage<T>]) -> Option<T> {
        let mut last_error = None;
        for &(name, stage) in stages {
            match stage(color) {
                Ok(value) => return Some(value),
                Err(error) => {
                    self.options.log(
                        Volume::Detailed,
                        format_args!(
                            "trihue::chain rejected input={:?} stage={} reason=\"{}\"",
                            color, name, error
                        ),
                    );
                    last_error = Some(error);
                }
            }
        }

        if self.options.logs(Volume::Regular) {
            let reason = last_error.map_or_else(String::new, |error| error.to_string());
            self.options.log(
                Volume::Regular,
                format_args!("trihue::chain fallback input={:?} reason=\"{}\"", color, reason),
            );
        }
        None
    }
}

/// Resolve the color to six-digit hashed hexadecimal, falling back on
/// `#7F7F7F`.
///
/// This function uses a silent [`Resolver`].
pub fn to_hex6(color: &str) -> String {
    Resolver::default().to_hex6(color)
}

/// Resolve the color to HSV coordinates with alpha, falling back on `[0, 0.5,
/// 0, 1]`.
///
/// This function uses a silent [`Resolver`].
pub fn to_hsv_pack(color: &str) -> [Float; 4] {
    Resolver::default().to_hsv_pack(color)
}

/// Resolve the color to RGB coordinates with alpha, falling back on `[0.5,
/// 0.5, 0.5, 1]`.
///
/// This function uses a silent [`Resolver`].
pub fn to_rgb_pack(color: &str) -> [Float; 4] {
    Resolver::default().to_rgb_pack(color)
}

// ====================================================================================================================
