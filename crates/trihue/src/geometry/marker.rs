use super::Point;
use crate::Float;

/// A marker on the hue ring.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct HueMarker {
    /// The hue angle in degrees.
    pub angle: Float,
    pub position: Point,
}

/// A marker inside the saturation/value triangle.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SvMarker {
    pub saturation: Float,
    pub value: Float,
    pub position: Point,
}

/// The kind of marker.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MarkerKind {
    Hue,
    Sv,
}

/// A reference to a marker, by kind and index into the collection of markers
/// of that kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MarkerRef {
    pub kind: MarkerKind,
    pub index: usize,
}

impl MarkerRef {
    /// Create a reference to the hue marker with the given index.
    pub const fn hue(index: usize) -> Self {
        Self {
            kind: MarkerKind::Hue,
            index,
        }
    }

    /// Create a reference to the saturation/value marker with the given index.
    pub const fn sv(index: usize) -> Self {
        Self {
            kind: MarkerKind::Sv,
            index,
        }
    }
}

/// Find the first marker within the threshold distance of the point.
///
/// Hue markers take priority over saturation/value markers, and markers within
/// each collection are tested in order. A marker is hit only if its distance
/// from the point is strictly less than the threshold.
pub fn nearest_marker(
    point: Point,
    hue_markers: &[HueMarker],
    sv_markers: &[SvMarker],
    threshold: Float,
) -> Option<MarkerRef> {
    let hit = |position: Point| point.distance(position) < threshold;

    hue_markers
        .iter()
        .position(|marker| hit(marker.position))
        .map(MarkerRef::hue)
        .or_else(|| {
            sv_markers
                .iter()
                .position(|marker| hit(marker.position))
                .map(MarkerRef::sv)
        })
}

// ====================================================================================================================

#[cfg(test)]
mod test {
    use super::{nearest_marker, HueMarker, MarkerRef, SvMarker};
    use crate::geometry::Point;
    use crate::Float;

    fn hue_at(x: Float, y: Float) -> HueMarker {
        HueMarker {
            angle: 0.0,
            position: Point::new(x, y),
        }
    }

    fn sv_at(x: Float, y: Float) -> SvMarker {
        SvMarker {
            saturation: 0.0,
            value: 0.0,
            position: Point::new(x, y),
        }
    }

    #[test]
    fn test_nearest_marker() {
        let hues = [hue_at(10.0, 10.0)];
        let svs = [sv_at(50.0, 50.0), sv_at(53.0, 50.0)];

        assert_eq!(
            nearest_marker(Point::new(12.0, 11.0), &hues, &svs, 6.0),
            Some(MarkerRef::hue(0))
        );
        assert_eq!(
            nearest_marker(Point::new(52.0, 50.0), &hues, &svs, 6.0),
            Some(MarkerRef::sv(0))
        );
        assert_eq!(
            nearest_marker(Point::new(57.0, 50.0), &hues, &svs, 6.0),
            Some(MarkerRef::sv(1))
        );
        assert_eq!(nearest_marker(Point::new(30.0, 30.0), &hues, &svs, 6.0), None);
        assert_eq!(nearest_marker(Point::new(30.0, 30.0), &[], &[], 6.0), None);

        // The threshold is exclusive.
        assert_eq!(nearest_marker(Point::new(16.0, 10.0), &hues, &svs, 6.0), None);
    }

    #[test]
    fn test_hue_priority() {
        let hues = [hue_at(20.0, 20.0)];
        let svs = [sv_at(20.0, 20.0)];

        assert_eq!(
            nearest_marker(Point::new(21.0, 20.0), &hues, &svs, 6.0),
            Some(MarkerRef::hue(0))
        );
        assert_eq!(
            nearest_marker(Point::new(21.0, 20.0), &[], &svs, 6.0),
            Some(MarkerRef::sv(0))
        );
    }
}
