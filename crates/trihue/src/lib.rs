//! # Trihue
//!
//! Trihue is the math behind a hue-ring-and-triangle color picker for CSS
//! colors. It has no opinion about rendering or event handling; a user
//! interface feeds it CSS color strings and pointer coordinates already
//! translated into the picker canvas, and gets back marker positions and
//! colors.
//!
//!
//! ## 1. Overview
//!
//! Trihue's main abstractions are:
//!
//!   * [`Converter`] maps **color coordinates between tagged color spaces**,
//!     i.e., [`ColorSpace::Rgb`], [`ColorSpace::Hsl`], and
//!     [`ColorSpace::Hsv`] with or without alpha. The direct formulas are
//!     available as free functions, e.g., [`hsv_from_rgb`].
//!   * [`parse_function`], [`parse_hex`], and [`resolve_named`] strictly
//!     **parse CSS colors**, whereas [`to_hex6`], [`to_hsv_pack`], and
//!     [`to_rgb_pack`] try all three in order and **never fail**, falling back
//!     on a neutral value instead.
//!   * The [`geometry`] module models the **picker canvas** with its
//!     [`Layout`](geometry::Layout), the rotating saturation/value
//!     [`Triangle`](geometry::Triangle), and the markers.
//!   * [`Picker`] ties the geometry together into a **picker session**, which
//!     is seeded from an [`HsvColor`] and reports one back when closed.
//!
//!
//! ## 2. One-Two-Three: Colors!
//!
//! ```
//! # use trihue::{to_hsv_pack, HsvColor, Picker, DialogResult};
//! # use trihue::geometry::Point;
//! # use trihue::opt::Options;
//! // 1. Parse whatever the host application considers a color
//! let hsv = HsvColor::from(to_hsv_pack("rgba(255, 0, 0, 0.5)"));
//!
//! // 2. Open a picker session and let the user drag the markers
//! let mut picker = Picker::open(hsv, Options::default());
//! picker.pointer_down(Point::new(128.0, 128.0));
//! picker.pointer_move(Point::new(120.0, 140.0), true);
//!
//! // 3. Close the session and write the color back
//! let result = picker.close(DialogResult::Ok);
//! assert!(result.changed());
//! let css = result.value.css_rgba();
//! # assert!(css.starts_with("rgba("));
//! ```
//!
//!
//! ## 3. Optional Features
//!
//! Trihue supports one feature flag:
//!
//!   - **`f64`** selects the eponymous type as floating point type [`Float`]
//!     instead of `f32`. This feature is enabled by default.

/// The floating point type in use.
#[cfg(feature = "f64")]
pub type Float = f64;
/// The floating point type in use.
#[cfg(not(feature = "f64"))]
pub type Float = f32;

mod chain;
mod convert;
mod core;
pub mod error;
pub mod geometry;
mod object;
pub mod opt;
mod picker;
mod space;

pub use chain::{to_hex6, to_hsv_pack, to_rgb_pack, Resolver};
pub use convert::{Channels, Converter};
pub use crate::core::{
    close_enough, coterminal, format_css_hsl, format_css_rgb, hsl_from_hsv, hsl_from_rgb,
    hsv_from_hsl, hsv_from_rgb, parse_function, parse_hex, parse_hex_digits, resolve_named,
    rgb_from_hsl, rgb_from_hsv, HexDigits, NAMED_COLORS,
};
pub use object::HsvColor;
pub use picker::{DialogResult, Picker, PickerResult};
pub use space::ColorSpace;
