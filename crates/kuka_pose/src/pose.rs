//! KUKA pose value types.

use serde::{Deserialize, Serialize};

/// A KUKA XYZ-ABC pose.
///
/// Position is in the controller's linear unit (usually mm). Orientation is
/// in degrees, applied intrinsically as A about Z, then B about Y', then C
/// about X''. Angles are not normalized; any real value is accepted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Pose6 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    /// Rotation about Z (degrees)
    pub a: f64,
    /// Rotation about Y' (degrees)
    pub b: f64,
    /// Rotation about X'' (degrees)
    pub c: f64,
}

impl Pose6 {
    pub const fn new(x: f64, y: f64, z: f64, a: f64, b: f64, c: f64) -> Self {
        Self { x, y, z, a, b, c }
    }

    /// Pure translation, zero rotation.
    pub const fn from_translation(x: f64, y: f64, z: f64) -> Self {
        Self::new(x, y, z, 0.0, 0.0, 0.0)
    }

    /// Get translation components.
    pub fn translation(&self) -> (f64, f64, f64) {
        (self.x, self.y, self.z)
    }

    /// Get rotation components (A, B, C) in degrees.
    pub fn abc_degrees(&self) -> (f64, f64, f64) {
        (self.a, self.b, self.c)
    }

    /// All six values in notation order.
    pub fn to_array(&self) -> [f64; 6] {
        [self.x, self.y, self.z, self.a, self.b, self.c]
    }
}

impl From<[f64; 6]> for Pose6 {
    fn from(v: [f64; 6]) -> Self {
        Self::new(v[0], v[1], v[2], v[3], v[4], v[5])
    }
}

impl From<(f64, f64, f64, f64, f64, f64)> for Pose6 {
    fn from((x, y, z, a, b, c): (f64, f64, f64, f64, f64, f64)) -> Self {
        Self::new(x, y, z, a, b, c)
    }
}

/// A pose in a chain, with a flag telling whether its transform is
/// inverted before it is composed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PoseEntry {
    pub pose: Pose6,
    pub invert: bool,
}

impl PoseEntry {
    pub fn new(pose: Pose6, invert: bool) -> Self {
        Self { pose, invert }
    }

    /// Entry composed as-is.
    pub fn forward(pose: Pose6) -> Self {
        Self::new(pose, false)
    }

    /// Entry composed through its inverse ("move from" semantics).
    pub fn inverted(pose: Pose6) -> Self {
        Self::new(pose, true)
    }

    /// Same pose with the invert flag flipped.
    pub fn toggled(self) -> Self {
        Self::new(self.pose, !self.invert)
    }
}

impl From<Pose6> for PoseEntry {
    fn from(pose: Pose6) -> Self {
        Self::forward(pose)
    }
}
