use serde::{Deserialize, Serialize};

/// Padding margin applied to every collision test, in percentage units.
pub const DEFAULT_PADDING: f64 = 2.0;

/// Lower edge of the room footprint in percentage coordinates.
pub const ROOM_MIN: f64 = 0.0;

/// Upper edge of the room footprint in percentage coordinates.
pub const ROOM_MAX: f64 = 100.0;

/// Point in the shared percentage coordinate space (0-100 over the room).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

/// Room center that auto-placed furniture is rotated to face.
pub const ROOM_CENTER: Position = Position { x: 50.0, y: 50.0 };

/// Axis-aligned box in percentage coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoundingBox {
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
}

impl BoundingBox {
    /// Builds the box spanning `center` plus/minus half of `width`/`height`.
    pub fn from_center(center: Position, width: f64, height: f64) -> Self {
        Self {
            min_x: center.x - width / 2.0,
            max_x: center.x + width / 2.0,
            min_y: center.y - height / 2.0,
            max_y: center.y + height / 2.0,
        }
    }

    /// True when the box lies entirely inside the room footprint.
    #[inline]
    pub fn in_bounds(&self) -> bool {
        self.min_x >= ROOM_MIN
            && self.max_x <= ROOM_MAX
            && self.min_y >= ROOM_MIN
            && self.max_y <= ROOM_MAX
    }
}

/// Overlap test for two boxes, widened by `padding` on every side.
///
/// Boxes are separated only when one lies entirely beside the other with a
/// gap larger than the padding; touching or padded boxes count as colliding.
#[inline]
pub fn check_collision(a: &BoundingBox, b: &BoundingBox, padding: f64) -> bool {
    !(a.max_x + padding < b.min_x
        || a.min_x - padding > b.max_x
        || a.max_y + padding < b.min_y
        || a.min_y - padding > b.max_y)
}

/// Rotation in degrees that points `position` toward the room center,
/// rounded to the nearest 45 degrees.
#[inline]
pub fn facing_rotation(position: Position) -> f64 {
    let degrees = (ROOM_CENTER.y - position.y)
        .atan2(ROOM_CENTER.x - position.x)
        .to_degrees();
    (degrees / 45.0).round() * 45.0
}
