//! Helper module with the options for resolving colors and picking them.
//!
//! This module provides the options shared by [`Resolver`](crate::Resolver)
//! and [`Picker`](crate::Picker) as well as the corresponding builder.
//!
//!
//! # Example
//!
//! ```
//! # use trihue::opt::{Options, Volume};
//! let options = Options::builder()
//!     .canvas_size(512.0)
//!     .volume(Volume::Regular)
//!     .build();
//!
//! assert_eq!(options.canvas_size(), 512.0);
//! assert_eq!(options.marker_radius(), 6.0);
//! ```

use std::io::Write;

use crate::Float;

/// The diagnostic logging volume.
///
/// Diagnostics are written to standard error. With regular volume, they cover
/// colors that could not be resolved at all and hence fell back on a neutral
/// default. With detailed volume, they also cover every rejected attempt at
/// resolving a color and the life cycle of picker sessions.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
pub enum Volume {
    #[default]
    Silent,
    Regular,
    Detailed,
}

#[derive(Clone, Debug)]
struct OptionData {
    volume: Volume,
    canvas_size: Float,
    marker_radius: Float,
}

impl OptionData {
    pub const fn new() -> Self {
        Self {
            volume: Volume::Silent,
            canvas_size: 256.0,
            marker_radius: 6.0,
        }
    }
}

/// A builder of options objects.
#[derive(Debug)]
pub struct OptionBuilder(OptionData);

impl OptionBuilder {
    /// Set the volume.
    pub fn volume(&mut self, volume: Volume) -> &mut Self {
        self.0.volume = volume;
        self
    }

    /// Set the side length of the square picker canvas in pixels.
    ///
    /// All other picker dimensions scale with the canvas. Sizes that are not
    /// positive and finite are ignored.
    pub fn canvas_size(&mut self, size: Float) -> &mut Self {
        if size.is_finite() && 0.0 < size {
            self.0.canvas_size = size;
        }
        self
    }

    /// Set the radius of markers in pixels, which also is the distance within
    /// which a pointer hits a marker. Radii that are negative or not finite are
    /// ignored.
    pub fn marker_radius(&mut self, radius: Float) -> &mut Self {
        if radius.is_finite() && 0.0 <= radius {
            self.0.marker_radius = radius;
        }
        self
    }

    /// Instantiate the options.
    pub fn build(&self) -> Options {
        Options(self.0.clone())
    }
}

/// An options object.
#[derive(Clone, Debug)]
pub struct Options(OptionData);

impl Default for Options {
    fn default() -> Self {
        Options(OptionData::new())
    }
}

impl Options {
    /// Create a new builder with the default option values.
    pub fn builder() -> OptionBuilder {
        OptionBuilder(OptionData::new())
    }

    /// Instantiate the default options but with regular diagnostic output
    /// enabled.
    pub fn with_log() -> Options {
        Self::builder().volume(Volume::Regular).build()
    }

    /// Instantiate the default options but with detailed diagnostic output
    /// enabled.
    pub fn with_detailed_log() -> Options {
        Self::builder().volume(Volume::Detailed).build()
    }

    /// Get the volume.
    pub fn volume(&self) -> Volume {
        self.0.volume
    }

    /// Determine whether diagnostics at the given volume should be written.
    pub fn logs(&self, volume: Volume) -> bool {
        volume != Volume::Silent && volume <= self.0.volume
    }

    /// Write the diagnostic message to standard error if this options object's
    /// volume is at least the given volume.
    pub(crate) fn log(&self, volume: Volume, message: core::fmt::Arguments<'_>) {
        if self.logs(volume) {
            // Diagnostics are best effort.
            let _ = writeln!(std::io::stderr().lock(), "{}", message);
        }
    }

    /// Get the side length of the picker canvas.
    pub fn canvas_size(&self) -> Float {
        self.0.canvas_size
    }

    /// Get the marker radius.
    pub fn marker_radius(&self) -> Float {
        self.0.marker_radius
    }
}

// ====================================================================================================================

#[cfg(test)]
mod test {
    use super::{Options, Volume};
    use crate::Float;

    #[test]
    fn test_builder() {
        let options = Options::default();
        assert_eq!(options.volume(), Volume::Silent);
        assert_eq!(options.canvas_size(), 256.0);
        assert_eq!(options.marker_radius(), 6.0);

        let options = Options::builder()
            .canvas_size(-1.0)
            .marker_radius(Float::NAN)
            .build();
        assert_eq!(options.canvas_size(), 256.0);
        assert_eq!(options.marker_radius(), 6.0);

        let options = Options::builder().canvas_size(128.0).marker_radius(4.0).build();
        assert_eq!(options.canvas_size(), 128.0);
        assert_eq!(options.marker_radius(), 4.0);
    }

    #[test]
    fn test_volume() {
        let silent = Options::default();
        assert!(!silent.logs(Volume::Regular));
        assert!(!silent.logs(Volume::Silent));

        let regular = Options::with_log();
        assert!(regular.logs(Volume::Regular));
        assert!(!regular.logs(Volume::Detailed));

        let detailed = Options::with_detailed_log();
        assert!(detailed.logs(Volume::Regular));
        assert!(detailed.logs(Volume::Detailed));
    }
}
