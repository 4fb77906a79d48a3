//! Circular range input
//!
//! Maps a drag over an annulus to an angle in `[0, 360]` and the angle
//! linearly to a value inside the amount bounds. The state is a small `Copy`
//! struct advanced by [`DialState::reduce`].
//!
//! Only the gesture *start* is hit-tested against the ring. Once a drag is
//! accepted, every move is tracked by angle alone, however far the pointer
//! strays from the ring.

use log::debug;

use crate::config::DialSettings;
use crate::models::AmountRange;

/// Full sweep of the dial in degrees
pub const SWEEP_DEGREES: f64 = 360.0;

/// Raw pointer angles are shifted by this much so zero sits at the dial's visual start
pub const ZERO_OFFSET_DEGREES: f64 = 180.0;

/// A point in dial space
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance_to(&self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// Angle of `point` around `center` in degrees, always in `[0, 360)`
pub fn angle_of(center: Point, point: Point) -> f64 {
    let degrees = (center.y - point.y).atan2(center.x - point.x).to_degrees();
    let degrees = if degrees < 0.0 {
        degrees + SWEEP_DEGREES
    } else {
        degrees
    };
    // -tiny + 360 rounds up to exactly 360
    if degrees >= SWEEP_DEGREES {
        0.0
    } else {
        degrees
    }
}

/// Pointer and layout events consumed by the dial
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DialEvent {
    /// The widget was laid out with this size
    Measured { width: f64, height: f64 },
    PointerDown(Point),
    PointerMove(Point),
    PointerUp,
    PointerCancel,
    /// Keyboard adjustment of the angle by a signed number of degrees
    Nudge(f64),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DialState {
    pub center: Point,
    pub radius: f64,
    pub stroke_width: f64,
    pub touch_tolerance: f64,
    padding: f64,
    /// Swept angle in degrees, `[0, 360]`
    pub angle: f64,
    pub dragging: bool,
    pub range: AmountRange,
    /// Continuous value; only rounded for display
    pub value: f64,
    measured: Option<(f64, f64)>,
}

impl DialState {
    /// Create a dial showing `initial_value` clamped into `range`; it accepts
    /// no drags until measured
    pub fn new(range: AmountRange, initial_value: f64, settings: &DialSettings) -> Self {
        let angle = range.fraction_of(initial_value) * SWEEP_DEGREES;
        Self {
            center: Point::default(),
            radius: 0.0,
            stroke_width: settings.stroke,
            touch_tolerance: settings.touch_tolerance,
            padding: settings.padding,
            angle,
            dragging: false,
            range,
            value: range.value_at(angle / SWEEP_DEGREES),
            measured: None,
        }
    }

    /// The last measured widget size, if any
    pub fn measured_size(&self) -> Option<(f64, f64)> {
        self.measured
    }

    /// Linear map of an angle onto the value range
    pub fn value_for_angle(&self, angle: f64) -> f64 {
        self.range.value_at(angle / SWEEP_DEGREES)
    }

    /// Whether a gesture starting at `point` lands on the ring
    pub fn accepts(&self, point: Point) -> bool {
        if self.measured.is_none() {
            return false;
        }
        let distance = point.distance_to(self.center);
        let half_band = self.touch_tolerance / 2.0;
        distance >= self.radius - half_band && distance <= self.radius + half_band
    }

    /// Point on the ring that a drag would need to reach `angle`
    ///
    /// Dial space has y growing downwards, so zero is at the right of the
    /// center and angles advance clockwise on screen.
    pub fn point_at(&self, angle: f64) -> Point {
        let radians = angle.to_radians();
        Point::new(
            self.center.x + self.radius * radians.cos(),
            self.center.y + self.radius * radians.sin(),
        )
    }

    /// Fraction of the sweep covered, `[0, 1]`
    pub fn progress(&self) -> f64 {
        self.angle / SWEEP_DEGREES
    }

    /// Advance the dial by one event
    pub fn reduce(self, event: DialEvent) -> Self {
        match event {
            DialEvent::Measured { width, height } => self.measure(width, height),
            DialEvent::PointerDown(point) => {
                if !self.accepts(point) {
                    return self;
                }
                debug!("Dial drag started at ({:.1}, {:.1})", point.x, point.y);
                let mut next = self.track(point);
                next.dragging = true;
                next
            }
            DialEvent::PointerMove(point) if self.dragging => self.track(point),
            DialEvent::PointerMove(_) => self,
            DialEvent::PointerUp | DialEvent::PointerCancel => {
                if self.dragging {
                    debug!("Dial drag ended at {:.1} degrees", self.angle);
                }
                Self {
                    dragging: false,
                    ..self
                }
            }
            DialEvent::Nudge(delta) => self.with_angle(self.angle + delta),
        }
    }

    fn measure(self, width: f64, height: f64) -> Self {
        let radius = width.min(height) / 2.0 - self.padding - self.stroke_width / 2.0;
        Self {
            center: Point::new(width / 2.0, height / 2.0),
            radius: radius.max(0.0),
            measured: Some((width, height)),
            ..self
        }
    }

    fn track(self, point: Point) -> Self {
        self.with_angle(angle_of(self.center, point) - ZERO_OFFSET_DEGREES)
    }

    fn with_angle(self, angle: f64) -> Self {
        let angle = angle.clamp(0.0, SWEEP_DEGREES);
        Self {
            angle,
            value: self.value_for_angle(angle),
            ..self
        }
    }
}
