use crate::core::{format_css_hsl, hsl_from_hsv};
use crate::geometry::{
    nearest_marker, HueMarker, Layout, MarkerKind, MarkerRef, Point, SvMarker, Triangle,
};
use crate::opt::{Options, Volume};
use crate::HsvColor;

/// The action that closed a picker session.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DialogResult {
    #[default]
    None,
    Ok,
    Cancel,
}

/// The outcome of a picker session.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PickerResult {
    /// The color selected when the session closed.
    pub value: HsvColor,
    /// The color the session was opened with.
    pub initial: HsvColor,
    /// The action that closed the session.
    pub action: DialogResult,
}

impl PickerResult {
    /// Determine whether the selected color differs from the initial color.
    /// The comparison is exact.
    pub fn changed(&self) -> bool {
        self.value != self.initial
    }

    /// Determine whether the session was confirmed and changed the color.
    pub fn accepted(&self) -> bool {
        self.action == DialogResult::Ok && self.changed()
    }
}

/// A picker session.
///
/// A session tracks one hue marker on the ring and one saturation/value
/// marker in the triangle, plus the marker currently under the pointer or
/// being dragged, if any. Pointer coordinates must already be translated into
/// canvas coordinates.
///
/// ```
/// # use trihue::{DialogResult, HsvColor, Picker};
/// # use trihue::geometry::Point;
/// # use trihue::opt::Options;
/// let mut picker = Picker::open(HsvColor::new(0.0, 1.0, 1.0), Options::default());
///
/// // Drag the hue marker to the top of the ring.
/// picker.pointer_down(Point::new(245.0, 128.0));
/// picker.pointer_move(Point::new(128.0, 10.0), true);
///
/// let result = picker.close(DialogResult::Ok);
/// assert!((result.value.hue - 90.0).abs() < 1e-9);
/// assert!((result.value.saturation - 1.0).abs() < 1e-9);
/// assert!((result.value.value - 1.0).abs() < 1e-9);
/// assert!(result.accepted());
/// ```
#[derive(Clone, Debug)]
pub struct Picker {
    options: Options,
    layout: Layout,
    initial: HsvColor,
    hue: HueMarker,
    sv: SvMarker,
    triangle: Triangle,
    active: Option<MarkerRef>,
}

impl Picker {
    /// Open a new session for the given color.
    ///
    /// The hue marker is placed at the color's hue, the triangle is rotated
    /// accordingly, and the saturation/value marker is placed at the color's
    /// saturation and value. Initially, no marker is active.
    pub fn open(color: HsvColor, options: Options) -> Self {
        let layout = Layout::from(&options);
        let hue = HueMarker {
            angle: color.hue,
            position: layout.marker_from_angle(color.hue),
        };
        let triangle = layout.triangle(color.hue);
        let sv = SvMarker {
            saturation: color.saturation,
            value: color.value,
            position: triangle.sv_point(color.saturation, color.value),
        };

        options.log(
            Volume::Detailed,
            format_args!("trihue::picker open color={:?}", color.to_hsva()),
        );

        Self {
            options,
            layout,
            initial: color,
            hue,
            sv,
            triangle,
            active: None,
        }
    }

    /// Get the layout.
    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    /// Get the hue marker.
    pub fn hue_marker(&self) -> &HueMarker {
        &self.hue
    }

    /// Get the saturation/value marker.
    pub fn sv_marker(&self) -> &SvMarker {
        &self.sv
    }

    /// Get the current saturation/value triangle.
    pub fn triangle(&self) -> &Triangle {
        &self.triangle
    }

    /// Get the active marker.
    pub fn active(&self) -> Option<MarkerRef> {
        self.active
    }

    /// Get the currently selected color. Alpha is the initial color's.
    pub fn value(&self) -> HsvColor {
        HsvColor::with_alpha(
            self.hue.angle,
            self.sv.saturation,
            self.sv.value,
            self.initial.alpha,
        )
    }

    /// Get the CSS color for filling the hue marker, which is the pure hue.
    pub fn hue_marker_fill(&self) -> String {
        format_css_hsl(self.hue.angle, 1.0, 0.5, 1.0)
    }

    /// Get the CSS color for filling the saturation/value marker, which is the
    /// currently selected color without alpha.
    pub fn sv_marker_fill(&self) -> String {
        let [h, s, l] = hsl_from_hsv(self.hue.angle, self.sv.saturation, self.sv.value);
        format_css_hsl(h, s, l, 1.0)
    }

    /// Handle the pointer going down at the given point.
    ///
    /// If a marker is active, it moves to the point. Otherwise, a point on the
    /// hue ring activates the hue marker and a point inside the triangle
    /// activates the saturation/value marker, which then moves to the point.
    /// This method returns whether a marker moved.
    pub fn pointer_down(&mut self, point: Point) -> bool {
        if self.drag(point) {
            return true;
        }

        self.active = if self.layout.is_on_ring(point) {
            Some(MarkerRef::hue(0))
        } else if self.triangle.contains(point) {
            Some(MarkerRef::sv(0))
        } else {
            None
        };
        self.log_active(point);

        self.drag(point)
    }

    /// Handle the pointer moving to the given point.
    ///
    /// If the primary button is pressed, the active marker, if any, moves to
    /// the point. Otherwise, the marker under the point, if any, becomes
    /// active. This method returns whether a marker moved or became active.
    pub fn pointer_move(&mut self, point: Point, pressed: bool) -> bool {
        if pressed {
            return self.drag(point);
        }

        let active = nearest_marker(
            point,
            core::slice::from_ref(&self.hue),
            core::slice::from_ref(&self.sv),
            self.options.marker_radius(),
        );
        if active != self.active {
            self.active = active;
            self.log_active(point);
        }
        self.active.is_some()
    }

    /// Close the session with the given action.
    pub fn close(self, action: DialogResult) -> PickerResult {
        let result = PickerResult {
            value: self.value(),
            initial: self.initial,
            action,
        };

        self.options.log(
            Volume::Detailed,
            format_args!(
                "trihue::picker close action={:?} changed={} color={:?}",
                action,
                result.changed(),
                result.value.to_hsva()
            ),
        );

        result
    }

    /// Move the active marker to the point. This method returns whether a
    /// marker moved.
    fn drag(&mut self, point: Point) -> bool {
        let Some(active) = self.active else {
            return false;
        };

        match active.kind {
            MarkerKind::Hue => {
                self.hue = self.layout.hue_marker(point);
                self.triangle = self.layout.triangle(self.hue.angle);
                self.sv.position = self.triangle.sv_point(self.sv.saturation, self.sv.value);
            }
            MarkerKind::Sv => {
                let (saturation, value) = self.triangle.sv_values(point);
                self.sv = SvMarker {
                    saturation,
                    value,
                    position: self.triangle.confine(point),
                };
            }
        }

        true
    }

    fn log_active(&self, point: Point) {
        self.options.log(
            Volume::Detailed,
            format_args!(
                "trihue::picker select marker={:?} x={} y={}",
                self.active, point.x, point.y
            ),
        );
    }
}

// ====================================================================================================================

#[cfg(test)]
mod test {
    use super::{DialogResult, Picker};
    use crate::geometry::{MarkerRef, Point};
    use crate::opt::Options;
    use crate::{assert_close_enough, HsvColor};

    fn teal() -> HsvColor {
        HsvColor::with_alpha(180.0, 0.8, 0.6, 0.75)
    }

    #[test]
    fn test_open() {
        let picker = Picker::open(teal(), Options::default());

        assert_eq!(picker.active(), None);
        assert_eq!(picker.hue_marker().angle, 180.0);
        assert_close_enough!(picker.hue_marker().position.x, 11.0);
        assert_close_enough!(picker.hue_marker().position.y, 128.0);

        let [hue_vertex, _, _] = picker.triangle().vertices();
        assert_close_enough!(hue_vertex.x, 38.0);

        assert_eq!(picker.sv_marker().saturation, 0.8);
        assert_eq!(picker.sv_marker().value, 0.6);
        assert_eq!(picker.value(), teal());

        let result = picker.close(DialogResult::Ok);
        assert!(!result.changed());
        assert!(!result.accepted());
        assert_eq!(result.value, result.initial);
    }

    #[test]
    fn test_pointer_down_selection() {
        let mut picker = Picker::open(teal(), Options::default());

        // Between ring and triangle, nothing gets selected.
        assert!(!picker.pointer_down(Point::new(128.0, 30.0)));
        assert_eq!(picker.active(), None);

        // Inside the triangle, the saturation/value marker gets selected.
        assert!(picker.pointer_down(Point::new(128.0, 128.0)));
        assert_eq!(picker.active(), Some(MarkerRef::sv(0)));
        assert_close_enough!(picker.sv_marker().saturation, 0.5);
        assert_close_enough!(picker.sv_marker().value, 2.0 / 3.0);

        // The active marker keeps getting dragged, even onto the ring.
        assert!(picker.pointer_down(Point::new(250.0, 128.0)));
        assert_eq!(picker.active(), Some(MarkerRef::sv(0)));
        assert_eq!(picker.hue_marker().angle, 180.0);

        let mut picker = Picker::open(teal(), Options::default());
        assert!(picker.pointer_down(Point::new(128.0, 8.0)));
        assert_eq!(picker.active(), Some(MarkerRef::hue(0)));
        assert_close_enough!(picker.hue_marker().angle, 90.0);
    }

    #[test]
    fn test_hover() {
        let mut picker = Picker::open(teal(), Options::default());
        let hue = picker.hue_marker().position;
        let sv = picker.sv_marker().position;

        assert!(picker.pointer_move(Point::new(hue.x + 3.0, hue.y), false));
        assert_eq!(picker.active(), Some(MarkerRef::hue(0)));

        assert!(picker.pointer_move(Point::new(sv.x, sv.y - 5.0), false));
        assert_eq!(picker.active(), Some(MarkerRef::sv(0)));

        assert!(!picker.pointer_move(Point::new(sv.x, sv.y - 7.0), false));
        assert_eq!(picker.active(), None);

        // Without an active marker, dragging does nothing.
        assert!(!picker.pointer_move(Point::new(128.0, 128.0), true));
        assert_eq!(picker.value(), teal());
    }

    #[test]
    fn test_drag_hue_keeps_sv() {
        let mut picker = Picker::open(teal(), Options::default());
        let hue = picker.hue_marker().position;

        picker.pointer_move(hue, false);
        assert!(picker.pointer_move(Point::new(128.0, 240.0), true));
        assert_close_enough!(picker.hue_marker().angle, -90.0);
        assert_close_enough!(picker.hue_marker().position.x, 128.0);
        assert_close_enough!(picker.hue_marker().position.y, 245.0);

        // Saturation and value are unchanged, but the marker moved with the
        // triangle.
        assert_eq!(picker.sv_marker().saturation, 0.8);
        assert_eq!(picker.sv_marker().value, 0.6);
        let expected = picker.triangle().sv_point(0.8, 0.6);
        assert_eq!(picker.sv_marker().position, expected);

        let result = picker.close(DialogResult::Cancel);
        assert!(result.changed());
        assert!(!result.accepted());
        assert_close_enough!(result.value.hue, -90.0);
        assert_eq!(result.value.alpha, 0.75);
    }

    #[test]
    fn test_drag_sv_confines() {
        let mut picker = Picker::open(teal(), Options::default());
        picker.pointer_down(Point::new(128.0, 128.0));

        // Far outside the triangle, beyond the white vertex.
        assert!(picker.pointer_move(Point::new(200.0, 0.0), true));
        let [_, _, white] = picker.triangle().vertices();
        assert_eq!(picker.sv_marker().position, white);
        assert!(picker.sv_marker().saturation.abs() < 1e-9);
        assert_close_enough!(picker.sv_marker().value, 1.0);
    }

    #[test]
    fn test_fills() {
        let picker = Picker::open(HsvColor::new(120.0, 1.0, 0.5), Options::default());
        assert_eq!(picker.hue_marker_fill(), "hsl(120,100%,50%)");
        assert_eq!(picker.sv_marker_fill(), "hsl(120,100%,25%)");
    }
}
