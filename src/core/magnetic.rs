//! Magnetic pointer effect
//!
//! Interactive elements drift towards the pointer while it is within a
//! radius of their center. The pull is strongest close to the center and
//! fades to nothing at the radius.

/// Pointer position in viewport pixels
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Element bounding box in viewport pixels
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    pub fn center(&self) -> Point {
        Point::new(self.left + self.width / 2.0, self.top + self.height / 2.0)
    }
}

/// Translation applied to the element
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Offset {
    pub x: f64,
    pub y: f64,
}

impl Offset {
    pub const ZERO: Offset = Offset { x: 0.0, y: 0.0 };

    pub fn is_zero(&self) -> bool {
        self.x == 0.0 && self.y == 0.0
    }

    pub fn magnitude(&self) -> f64 {
        self.x.hypot(self.y)
    }
}

/// Radius and strength of the pull
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MagneticField {
    radius: f64,
    strength: f64,
}

impl Default for MagneticField {
    fn default() -> Self {
        Self {
            radius: Self::DEFAULT_RADIUS,
            strength: Self::DEFAULT_STRENGTH,
        }
    }
}

impl MagneticField {
    pub const DEFAULT_RADIUS: f64 = 150.0;
    pub const DEFAULT_STRENGTH: f64 = 0.4;

    /// `strength` is clamped into `(0, 1]`; a non-positive radius disables the pull
    pub fn new(radius: f64, strength: f64) -> Self {
        let strength = if strength.is_finite() && strength > 0.0 {
            strength.min(1.0)
        } else {
            f64::MIN_POSITIVE
        };
        Self {
            radius: radius.max(0.0),
            strength,
        }
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn strength(&self) -> f64 {
        self.strength
    }

    /// Offset for a pointer at `pointer` over an element occupying `rect`
    pub fn offset(&self, pointer: Point, rect: Rect) -> Offset {
        self.pull(pointer, rect).unwrap_or(Offset::ZERO)
    }

    /// Offset when the pointer is inside the radius, `None` otherwise
    fn pull(&self, pointer: Point, rect: Rect) -> Option<Offset> {
        let center = rect.center();
        let dx = pointer.x - center.x;
        let dy = pointer.y - center.y;
        let distance = dx.hypot(dy);

        if distance >= self.radius {
            return None;
        }

        let factor = (1.0 - distance / self.radius) * self.strength;
        Some(Offset {
            x: dx * factor,
            y: dy * factor,
        })
    }
}

/// Offset tracking for one element over a hover interaction
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MagneticState {
    field: MagneticField,
    offset: Offset,
}

impl MagneticState {
    pub fn new(field: MagneticField) -> Self {
        Self {
            field,
            offset: Offset::ZERO,
        }
    }

    pub fn offset(&self) -> Offset {
        self.offset
    }

    /// Follow the pointer. Moves outside the radius keep the last offset.
    pub fn pointer_move(&mut self, pointer: Point, rect: Rect) {
        if let Some(offset) = self.field.pull(pointer, rect) {
            self.offset = offset;
        }
    }

    pub fn pointer_leave(&mut self) {
        self.offset = Offset::ZERO;
    }

    /// CSS `transform` for the current offset
    pub fn transform(&self) -> String {
        format!(
            "translate({:.2}px, {:.2}px)",
            self.offset.x, self.offset.y
        )
    }

    /// CSS `transition`: a slow ease back home, near-instant while tracking
    pub fn transition(&self) -> &'static str {
        if self.offset.is_zero() {
            "transform 0.3s cubic-bezier(0.25, 0.46, 0.45, 0.94)"
        } else {
            "transform 0.05s linear"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BUTTON: Rect = Rect {
        left: 100.0,
        top: 100.0,
        width: 100.0,
        height: 40.0,
    };

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_center() {
        assert_eq!(BUTTON.center(), Point::new(150.0, 120.0));
    }

    #[test]
    fn test_pointer_at_center_has_no_offset() {
        let field = MagneticField::new(100.0, 0.3);
        assert!(field.offset(BUTTON.center(), BUTTON).is_zero());
    }

    #[test]
    fn test_pointer_at_radius_has_no_offset() {
        let field = MagneticField::new(100.0, 0.3);
        let pointer = Point::new(250.0, 120.0);
        assert!(field.offset(pointer, BUTTON).is_zero());
    }

    #[test]
    fn test_pointer_beyond_radius_has_no_offset() {
        let field = MagneticField::new(100.0, 0.3);
        let pointer = Point::new(400.0, 400.0);
        assert!(field.offset(pointer, BUTTON).is_zero());
    }

    #[test]
    fn test_offset_scales_with_distance_and_strength() {
        let field = MagneticField::new(100.0, 0.5);
        // 30px right, 40px down: distance 50, factor (1 - 0.5) * 0.5
        let pointer = Point::new(180.0, 160.0);

        let offset = field.offset(pointer, BUTTON);
        assert!(approx(offset.x, 7.5));
        assert!(approx(offset.y, 10.0));
        assert!(approx(offset.magnitude(), 50.0 * 0.25));
    }

    #[test]
    fn test_offset_points_towards_pointer() {
        let field = MagneticField::default();
        let offset = field.offset(Point::new(130.0, 100.0), BUTTON);
        assert!(offset.x < 0.0);
        assert!(offset.y < 0.0);
    }

    #[test]
    fn test_strength_is_clamped() {
        assert_eq!(MagneticField::new(100.0, 3.0).strength(), 1.0);
        assert!(MagneticField::new(100.0, -1.0).strength() > 0.0);
    }

    #[test]
    fn test_zero_radius_never_pulls() {
        let field = MagneticField::new(0.0, 1.0);
        assert!(field.offset(BUTTON.center(), BUTTON).is_zero());
    }

    #[test]
    fn test_state_resets_on_leave() {
        let mut state = MagneticState::new(MagneticField::new(100.0, 0.3));
        state.pointer_move(Point::new(170.0, 120.0), BUTTON);
        assert!(!state.offset().is_zero());

        state.pointer_leave();
        assert_eq!(state.offset(), Offset::ZERO);
        assert_eq!(state.transform(), "translate(0.00px, 0.00px)");
    }

    #[test]
    fn test_state_keeps_offset_outside_radius() {
        let mut state = MagneticState::new(MagneticField::new(100.0, 0.3));
        state.pointer_move(Point::new(170.0, 120.0), BUTTON);
        let inside = state.offset();

        state.pointer_move(Point::new(900.0, 900.0), BUTTON);
        assert_eq!(state.offset(), inside);
    }

    #[test]
    fn test_transition_depends_on_offset() {
        let mut state = MagneticState::default();
        assert!(state.transition().starts_with("transform 0.3s"));

        state.pointer_move(Point::new(160.0, 120.0), BUTTON);
        assert_eq!(state.transition(), "transform 0.05s linear");
    }
}
