mod conversion;
mod equality;
mod math;
mod named;
mod string;

// conversion
pub use conversion::{
    coterminal, hsl_from_hsv, hsl_from_rgb, hsv_from_hsl, hsv_from_rgb, rgb_from_hsl,
    rgb_from_hsv,
};

// equality
pub use equality::close_enough;

// math
pub(crate) use math::{modulo, FloatExt};

// named
pub use named::{resolve_named, NAMED_COLORS};

// string
pub use string::{
    format_css_hsl, format_css_rgb, parse_function, parse_hex, parse_hex_digits, HexDigits,
};
