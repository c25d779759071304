use std::fmt::Write as _;

use kuka_pose::{Chain, ChainedPose, Pose6, PoseError, PoseSequence, Scene, SceneSettings};
use serde::Serialize;

/// Everything the viewer shows for one pass over the pose list.
#[derive(Debug, Serialize)]
pub struct Report {
    /// List-item text of each input entry
    pub entries: Vec<String>,
    pub chain: Vec<ChainedPose>,
    pub labels: Vec<String>,
    /// Cumulative pose of every frame, in notation
    pub poses: Vec<String>,
    pub resulting_pose: Option<Pose6>,
    pub scene: Option<Scene>,
}

impl Report {
    pub fn build(sequence: &PoseSequence, settings: &SceneSettings) -> Result<Self, PoseError> {
        let chain = sequence.chain()?;
        let scene = match Scene::compute(&chain, settings) {
            Ok(scene) => Some(scene),
            Err(PoseError::EmptyChain) => None,
            Err(e) => return Err(e),
        };

        Ok(Self {
            entries: sequence.to_lines(),
            labels: chain.labels(),
            poses: chain.report_lines(),
            resulting_pose: chain.resulting_pose(),
            chain: chain_to_vec(&chain),
            scene,
        })
    }

    /// Plain text rendering, one fact per line.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for line in &self.poses {
            let _ = writeln!(out, "{}", line);
        }

        match &self.resulting_pose {
            Some(pose) => {
                let _ = writeln!(out, "Resulting Pose: {}", pose);
            }
            None => {
                let _ = writeln!(out, "Resulting Pose: no poses");
            }
        }

        if let Some(scene) = &self.scene {
            let b = &scene.bounds;
            let c = &scene.camera;
            let _ = writeln!(
                out,
                "Extents: min ({:.2}, {:.2}, {:.2}) max ({:.2}, {:.2}, {:.2})",
                b.min_point.x, b.min_point.y, b.min_point.z, b.max_point.x, b.max_point.y, b.max_point.z
            );
            let _ = writeln!(out, "Scene size: {:.2}", scene.scene_size);
            let _ = writeln!(out, "Frame scale: {:.2}", scene.frame_scale);
            let _ = writeln!(
                out,
                "Camera: ({:.2}, {:.2}, {:.2}) looking at ({:.2}, {:.2}, {:.2})",
                c.position.x, c.position.y, c.position.z, c.focal_point.x, c.focal_point.y, c.focal_point.z
            );
        }
        out
    }
}

fn chain_to_vec(chain: &Chain) -> Vec<ChainedPose> {
    chain.as_slice().to_vec()
}
