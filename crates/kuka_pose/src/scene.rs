//! Scene geometry derived from a chain: bounds, scale and camera framing.
//!
//! Nothing here is physically derived. The constants in
//! [`SceneSettings`](crate::settings::SceneSettings) only need to keep every
//! frame in view at a readable size.

use nalgebra::{Point3, Vector3};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::chain::Chain;
use crate::error::PoseError;
use crate::settings::SceneSettings;
use crate::transform::{self, Transform};

/// Axis-aligned box around every frame origin of a chain.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SceneBounds {
    pub min_point: Point3<f64>,
    pub max_point: Point3<f64>,
}

impl SceneBounds {
    /// Componentwise `max_point - min_point`.
    pub fn span(&self) -> Vector3<f64> {
        self.max_point - self.min_point
    }

    pub fn center(&self) -> Point3<f64> {
        nalgebra::center(&self.min_point, &self.max_point)
    }

    /// Largest of the three spans.
    pub fn max_range(&self) -> f64 {
        self.span().max()
    }

    /// Length of the box diagonal.
    pub fn diagonal(&self) -> f64 {
        self.span().norm()
    }

    /// Box grown by `margin` on every side.
    pub fn padded(&self, margin: f64) -> Self {
        let m = Vector3::repeat(margin);
        Self {
            min_point: self.min_point - m,
            max_point: self.max_point + m,
        }
    }

    /// The eight corners, min corner first.
    pub fn corners(&self) -> [Point3<f64>; 8] {
        let (lo, hi) = (&self.min_point, &self.max_point);
        [
            Point3::new(lo.x, lo.y, lo.z),
            Point3::new(hi.x, lo.y, lo.z),
            Point3::new(lo.x, hi.y, lo.z),
            Point3::new(hi.x, hi.y, lo.z),
            Point3::new(lo.x, lo.y, hi.z),
            Point3::new(hi.x, lo.y, hi.z),
            Point3::new(lo.x, hi.y, hi.z),
            Point3::new(hi.x, hi.y, hi.z),
        ]
    }
}

/// Where to put the viewer camera and what to look at.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct CameraPlacement {
    pub position: Point3<f64>,
    pub focal_point: Point3<f64>,
}

/// The three axis segments of a frame, drawn red/green/blue for X/Y/Z.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct FrameAxes {
    pub origin: Point3<f64>,
    pub x_end: Point3<f64>,
    pub y_end: Point3<f64>,
    pub z_end: Point3<f64>,
}

/// Componentwise min/max over every cumulative translation.
pub fn extents(chain: &Chain) -> Result<SceneBounds, PoseError> {
    let mut origins = chain.origins();
    let first = origins.next().ok_or(PoseError::EmptyChain)?;

    let bounds = origins.fold(
        SceneBounds {
            min_point: first,
            max_point: first,
        },
        |b, p| SceneBounds {
            min_point: b.min_point.inf(&p),
            max_point: b.max_point.sup(&p),
        },
    );
    Ok(bounds)
}

/// Diagonal of the chain's [`extents`].
pub fn scene_size(chain: &Chain) -> Result<f64, PoseError> {
    extents(chain).map(|b| b.diagonal())
}

/// Camera framing with the reference 2x distance.
pub fn camera_placement(min_point: &Point3<f64>, max_point: &Point3<f64>) -> CameraPlacement {
    camera_placement_with(
        min_point,
        max_point,
        SceneSettings::default().camera_distance_factor,
    )
}

/// Look at the box center from `center + (1, 1, 1) * max_range * factor`.
pub fn camera_placement_with(
    min_point: &Point3<f64>,
    max_point: &Point3<f64>,
    factor: f64,
) -> CameraPlacement {
    let focal_point = nalgebra::center(min_point, max_point);
    let max_range = (max_point - min_point).max();
    let position = focal_point + Vector3::repeat(max_range * factor);
    CameraPlacement {
        position,
        focal_point,
    }
}

/// Axis length used to draw each frame.
pub fn frame_scale(scene_size: f64, factor: f64) -> f64 {
    scene_size * factor
}

/// Axis segments of a frame: origin to origin + column_k * scale.
pub fn frame_axes(cumulative: &Transform, scale: f64) -> FrameAxes {
    let origin = transform::translation(cumulative);
    FrameAxes {
        origin,
        x_end: origin + transform::axis(cumulative, 0) * scale,
        y_end: origin + transform::axis(cumulative, 1) * scale,
        z_end: origin + transform::axis(cumulative, 2) * scale,
    }
}

/// Everything a renderer needs to frame a chain.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    pub bounds: SceneBounds,
    /// `bounds` grown by the configured margin
    pub padded_bounds: SceneBounds,
    pub scene_size: f64,
    pub frame_scale: f64,
    pub camera: CameraPlacement,
}

impl Scene {
    pub fn compute(chain: &Chain, settings: &SceneSettings) -> Result<Self, PoseError> {
        let bounds = extents(chain)?;
        let scene_size = bounds.diagonal();
        let scene = Self {
            bounds,
            padded_bounds: bounds.padded(settings.bounds_margin),
            scene_size,
            frame_scale: frame_scale(scene_size, settings.frame_scale_factor),
            camera: camera_placement_with(
                &bounds.min_point,
                &bounds.max_point,
                settings.camera_distance_factor,
            ),
        };
        debug!(
            "[Scene::compute] {} poses, size {:.2}, frame scale {:.2}",
            chain.len(),
            scene.scene_size,
            scene.frame_scale
        );
        Ok(scene)
    }

    /// Keep the frame scale of an earlier scene size, so editing one entry
    /// does not resize every frame.
    pub fn with_frame_scale_from(mut self, scene_size: f64, settings: &SceneSettings) -> Self {
        self.frame_scale = frame_scale(scene_size, settings.frame_scale_factor);
        self
    }

    /// Axis segments of every frame in the chain at this scene's scale.
    pub fn frame_axes(&self, chain: &Chain) -> Vec<FrameAxes> {
        chain
            .iter()
            .map(|p| frame_axes(&p.cumulative, self.frame_scale))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chain::chain;
    use crate::pose::{Pose6, PoseEntry};

    const TOLERANCE: f64 = 1e-9;

    fn translations(points: &[(f64, f64, f64)]) -> Chain {
        // Absolute positions expressed as relative steps from the previous one.
        let mut prev = (0.0, 0.0, 0.0);
        let entries: Vec<PoseEntry> = points
            .iter()
            .map(|&(x, y, z)| {
                let step = Pose6::from_translation(x - prev.0, y - prev.1, z - prev.2);
                prev = (x, y, z);
                PoseEntry::forward(step)
            })
            .collect();
        chain(&entries).unwrap()
    }

    #[test]
    fn test_extents_empty_chain() {
        let empty = chain(&[]).unwrap();
        assert_eq!(extents(&empty), Err(PoseError::EmptyChain));
        assert_eq!(scene_size(&empty), Err(PoseError::EmptyChain));
        assert_eq!(
            Scene::compute(&empty, &SceneSettings::default()),
            Err(PoseError::EmptyChain)
        );
    }

    #[test]
    fn test_extents_min_max() {
        let chain = translations(&[(1.0, -2.0, 3.0), (-4.0, 5.0, 0.0), (2.0, 1.0, -6.0)]);
        let bounds = extents(&chain).unwrap();
        assert_eq!(bounds.min_point, Point3::new(-4.0, -2.0, -6.0));
        assert_eq!(bounds.max_point, Point3::new(2.0, 5.0, 3.0));
    }

    #[test]
    fn test_single_pose_extents_are_a_point() {
        let chain = translations(&[(7.0, 8.0, 9.0)]);
        let bounds = extents(&chain).unwrap();
        assert_eq!(bounds.min_point, bounds.max_point);
        assert_eq!(scene_size(&chain).unwrap(), 0.0);
    }

    #[test]
    fn test_scene_size_is_diagonal() {
        let chain = translations(&[(0.0, 0.0, 0.0), (3.0, 4.0, 12.0)]);
        assert!((scene_size(&chain).unwrap() - 13.0).abs() < TOLERANCE);
    }

    #[test]
    fn test_camera_placement_reference() {
        let min = Point3::new(0.0, 0.0, 0.0);
        let max = Point3::new(10.0, 4.0, 2.0);
        let camera = camera_placement(&min, &max);
        assert_eq!(camera.focal_point, Point3::new(5.0, 2.0, 1.0));
        assert_eq!(camera.position, Point3::new(25.0, 22.0, 21.0));
    }

    #[test]
    fn test_camera_is_outside_the_box() {
        let bounds = SceneBounds {
            min_point: Point3::new(-350.5, -20.0, 100.0),
            max_point: Point3::new(3000.0, 2954.42, 2720.94),
        };
        let camera = camera_placement(&bounds.min_point, &bounds.max_point);
        let offset = camera.position - camera.focal_point;

        for corner in bounds.corners() {
            let corner_offset = corner - camera.focal_point;
            let farther = (0..3).any(|k| offset[k].abs() > corner_offset[k].abs());
            assert!(farther, "camera {:?} not outside corner {:?}", camera.position, corner);
        }
    }

    #[test]
    fn test_padded_bounds() {
        let bounds = SceneBounds {
            min_point: Point3::new(0.0, 0.0, 0.0),
            max_point: Point3::new(1.0, 2.0, 3.0),
        };
        let padded = bounds.padded(500.0);
        assert_eq!(padded.min_point, Point3::new(-500.0, -500.0, -500.0));
        assert_eq!(padded.max_point, Point3::new(501.0, 502.0, 503.0));
    }

    #[test]
    fn test_frame_axes_follow_rotation() {
        let t = transform::to_transform(&Pose6::new(10.0, 0.0, 0.0, 90.0, 0.0, 0.0));
        let axes = frame_axes(&t, 2.0);
        assert_eq!(axes.origin, Point3::new(10.0, 0.0, 0.0));
        assert!((axes.x_end - Point3::new(10.0, 2.0, 0.0)).norm() < TOLERANCE);
        assert!((axes.y_end - Point3::new(8.0, 0.0, 0.0)).norm() < TOLERANCE);
        assert!((axes.z_end - Point3::new(10.0, 0.0, 2.0)).norm() < TOLERANCE);
    }

    #[test]
    fn test_scene_compute_and_locked_scale() {
        let settings = SceneSettings::default();
        let chain = translations(&[(0.0, 0.0, 0.0), (3.0, 4.0, 12.0)]);
        let scene = Scene::compute(&chain, &settings).unwrap();

        assert!((scene.scene_size - 13.0).abs() < TOLERANCE);
        assert!((scene.frame_scale - 1.3).abs() < TOLERANCE);
        assert_eq!(scene.padded_bounds, scene.bounds.padded(500.0));
        assert_eq!(scene.frame_axes(&chain).len(), 2);

        let locked = scene.with_frame_scale_from(100.0, &settings);
        assert!((locked.frame_scale - 10.0).abs() < TOLERANCE);
        assert_eq!(locked.bounds, scene.bounds);
    }
}
