//! The geometry of a hue ring with a saturation/value triangle.
//!
//! The picker canvas is a square. Its border holds the hue ring. Inside the
//! ring, an equilateral [`Triangle`] rotates with the hue so that one vertex
//! always points at the current hue. A [`Layout`] captures the canvas
//! dimensions and maps between hue angles and ring positions. Angles are in
//! degrees and, as in mathematics, grow counter-clockwise, even though screen
//! coordinates grow downward.
//!
//! ```
//! # use trihue::geometry::{Layout, Point};
//! let layout = Layout::new(256.0);
//! let triangle = layout.triangle(0.0);
//!
//! // The center of the triangle has half saturation and two thirds value.
//! let (saturation, value) = triangle.sv_values(layout.center());
//! assert!((saturation - 0.5).abs() < 1e-9);
//! assert!((value - 2.0 / 3.0).abs() < 1e-9);
//!
//! // Points outside the triangle are confined to it first.
//! let (saturation, value) = triangle.sv_values(Point::new(-100.0, 500.0));
//! assert!((0.0..=1.0).contains(&saturation));
//! assert!((0.0..=1.0 + 1e-9).contains(&value));
//! ```

mod layout;
mod marker;
mod point;
mod triangle;

pub use layout::Layout;
pub use marker::{nearest_marker, HueMarker, MarkerKind, MarkerRef, SvMarker};
pub use point::{intersect, Point};
pub use triangle::{Region, Triangle};
