//! Pointer input delivered by the host UI.

use kurbo::Point;
use serde::{Deserialize, Serialize};

/// Where a pointer release landed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ReleaseTarget {
    /// Over the drawing surface (or anywhere that isn't the palette).
    #[default]
    Surface,
    /// Over the tool palette. Treated as a UI click, not a drawing commit.
    Palette,
}

/// Pointer event in device coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PointerEvent {
    Down {
        position: Point,
    },
    Move {
        position: Point,
    },
    Up {
        position: Point,
        target: ReleaseTarget,
    },
}

impl PointerEvent {
    /// Device-space position carried by the event.
    pub fn position(&self) -> Point {
        match *self {
            PointerEvent::Down { position }
            | PointerEvent::Move { position }
            | PointerEvent::Up { position, .. } => position,
        }
    }
}

/// Map a device-space point into surface-local space (origin top-left, y down).
pub fn to_surface_local(device: Point, surface_origin: Point) -> Point {
    device - surface_origin.to_vec2()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_surface_local_subtracts_origin() {
        let local = to_surface_local(Point::new(150.0, 120.0), Point::new(100.0, 100.0));
        assert!((local.x - 50.0).abs() < f64::EPSILON);
        assert!((local.y - 20.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_to_surface_local_identity_at_zero_origin() {
        let device = Point::new(12.5, 7.25);
        assert_eq!(to_surface_local(device, Point::ZERO), device);
    }

    #[test]
    fn test_event_position() {
        let up = PointerEvent::Up {
            position: Point::new(3.0, 4.0),
            target: ReleaseTarget::Palette,
        };
        assert_eq!(up.position(), Point::new(3.0, 4.0));
    }
}
