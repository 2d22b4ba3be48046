//! Spatial primitives: position, normalized direction, and the current
//! coordinate set of an object.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{Result, TypeError};

/// Tolerance used when checking a direction vector for unit length.
pub const UNIT_TOLERANCE: f64 = 1e-6;

/// A point in 3D space. Components are unrestricted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Position {
    pub const ORIGIN: Self = Self {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };

    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Euclidean distance to another position.
    pub fn distance_to(&self, other: &Self) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        let dz = self.z - other.z;
        (dx * dx + dy * dy + dz * dz).sqrt()
    }
}

/// Facing direction of an object as a unit vector.
///
/// [`Direction::new`] re-normalizes its input to unit length. A
/// zero-magnitude input is stored as given rather than dividing by zero.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Direction {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Direction {
    /// Unit vector along the positive x axis, the default facing.
    pub const UNIT_X: Self = Self {
        x: 1.0,
        y: 0.0,
        z: 0.0,
    };

    pub fn new(x: f64, y: f64, z: f64) -> Self {
        let mut direction = Self { x, y, z };
        direction.normalize();
        direction
    }

    fn normalize(&mut self) {
        let magnitude = self.magnitude();
        if magnitude > 0.0 {
            self.x /= magnitude;
            self.y /= magnitude;
            self.z /= magnitude;
        }
    }

    pub fn magnitude(&self) -> f64 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }

    /// Returns `true` if the vector is unit length within [`UNIT_TOLERANCE`].
    pub fn is_unit(&self) -> bool {
        (self.magnitude() - 1.0).abs() < UNIT_TOLERANCE
    }
}

impl Default for Direction {
    fn default() -> Self {
        Self::UNIT_X
    }
}

/// Current spatial state of an object. At most one set per object.
///
/// Invariants enforced at construction and mutation:
/// - `height >= 0`
/// - `rotation` within `[0, 360]` degrees (both ends inclusive)
/// - `direction` is unit length whenever the supplied vector was non-zero
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub position: Position,
    pub height: f64,
    pub direction: Direction,
    pub rotation: f64,
    pub updated_at: DateTime<Utc>,
}

impl Coordinates {
    pub fn new(position: Position, height: f64, direction: Direction, rotation: f64) -> Result<Self> {
        validate_height(height)?;
        validate_rotation(rotation)?;
        Ok(Self {
            position,
            height,
            direction,
            rotation,
            updated_at: Utc::now(),
        })
    }

    /// The default spatial state used when an object has no ingested
    /// coordinates yet: origin position, zero height, unit-x facing,
    /// zero rotation.
    pub fn default_set() -> Self {
        Self {
            position: Position::ORIGIN,
            height: 0.0,
            direction: Direction::UNIT_X,
            rotation: 0.0,
            updated_at: Utc::now(),
        }
    }

    pub fn set_position(&mut self, x: f64, y: f64, z: f64) {
        self.position = Position::new(x, y, z);
        self.touch();
    }

    /// Replace the direction vector, re-normalizing to unit length.
    pub fn set_direction(&mut self, x: f64, y: f64, z: f64) {
        self.direction = Direction::new(x, y, z);
        self.touch();
    }

    pub fn set_rotation(&mut self, rotation: f64) -> Result<()> {
        validate_rotation(rotation)?;
        self.rotation = rotation;
        self.touch();
        Ok(())
    }

    /// Distance between the positions of two coordinate sets.
    pub fn distance_to(&self, other: &Self) -> f64 {
        self.position.distance_to(&other.position)
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

fn validate_height(height: f64) -> Result<()> {
    if height < 0.0 {
        return Err(TypeError::NegativeHeight(height));
    }
    Ok(())
}

fn validate_rotation(rotation: f64) -> Result<()> {
    if !(0.0..=360.0).contains(&rotation) {
        return Err(TypeError::RotationOutOfRange(rotation));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn direction_is_normalized() {
        let d = Direction::new(3.0, 4.0, 0.0);
        assert!(d.is_unit());
        assert!((d.x - 0.6).abs() < UNIT_TOLERANCE);
        assert!((d.y - 0.8).abs() < UNIT_TOLERANCE);
        assert_eq!(d.z, 0.0);
    }

    #[test]
    fn zero_direction_left_unchanged() {
        let d = Direction::new(0.0, 0.0, 0.0);
        assert_eq!(d.x, 0.0);
        assert_eq!(d.y, 0.0);
        assert_eq!(d.z, 0.0);
        assert!(!d.is_unit());
    }

    #[test]
    fn unit_input_stays_put() {
        let d = Direction::new(0.0, 1.0, 0.0);
        assert_eq!(d.y, 1.0);
        assert!(d.is_unit());
    }

    #[test]
    fn position_distance() {
        let a = Position::new(0.0, 0.0, 0.0);
        let b = Position::new(3.0, 4.0, 0.0);
        assert!((a.distance_to(&b) - 5.0).abs() < UNIT_TOLERANCE);
    }

    #[test]
    fn coordinates_reject_negative_height() {
        let result = Coordinates::new(Position::ORIGIN, -0.1, Direction::UNIT_X, 0.0);
        assert!(matches!(result, Err(TypeError::NegativeHeight(_))));
    }

    #[test]
    fn rotation_bounds_are_inclusive() {
        assert!(Coordinates::new(Position::ORIGIN, 0.0, Direction::UNIT_X, 0.0).is_ok());
        assert!(Coordinates::new(Position::ORIGIN, 0.0, Direction::UNIT_X, 360.0).is_ok());
        assert!(Coordinates::new(Position::ORIGIN, 0.0, Direction::UNIT_X, -0.001).is_err());
        assert!(Coordinates::new(Position::ORIGIN, 0.0, Direction::UNIT_X, 360.001).is_err());
    }

    #[test]
    fn set_rotation_validates() {
        let mut coords = Coordinates::default_set();
        assert!(coords.set_rotation(180.0).is_ok());
        assert_eq!(coords.rotation, 180.0);
        assert!(coords.set_rotation(361.0).is_err());
        assert_eq!(coords.rotation, 180.0);
    }

    #[test]
    fn set_direction_normalizes() {
        let mut coords = Coordinates::default_set();
        coords.set_direction(0.0, 0.0, 10.0);
        assert!(coords.direction.is_unit());
        assert!((coords.direction.z - 1.0).abs() < UNIT_TOLERANCE);
    }

    #[test]
    fn default_set_shape() {
        let coords = Coordinates::default_set();
        assert_eq!(coords.position, Position::ORIGIN);
        assert_eq!(coords.height, 0.0);
        assert_eq!(coords.direction, Direction::UNIT_X);
        assert_eq!(coords.rotation, 0.0);
    }

    #[test]
    fn coordinates_distance() {
        let mut a = Coordinates::default_set();
        let mut b = Coordinates::default_set();
        a.set_position(1.0, 0.0, 0.0);
        b.set_position(1.0, 2.0, 0.0);
        assert!((a.distance_to(&b) - 2.0).abs() < UNIT_TOLERANCE);
    }

    proptest! {
        #[test]
        fn nonzero_inputs_normalize_to_unit(
            x in -1e6f64..1e6,
            y in -1e6f64..1e6,
            z in -1e6f64..1e6,
        ) {
            prop_assume!((x * x + y * y + z * z).sqrt() > 1e-9);
            let d = Direction::new(x, y, z);
            prop_assert!(d.is_unit());
        }

        #[test]
        fn normalization_preserves_orientation(
            x in -1e3f64..1e3,
            y in -1e3f64..1e3,
            z in -1e3f64..1e3,
        ) {
            let magnitude = (x * x + y * y + z * z).sqrt();
            prop_assume!(magnitude > 1e-6);
            let d = Direction::new(x, y, z);
            // Dot product with the input equals the input magnitude for a
            // parallel unit vector.
            let dot = d.x * x + d.y * y + d.z * z;
            prop_assert!((dot - magnitude).abs() < 1e-3);
        }
    }
}
