//! Folding an ordered pose list into cumulative transforms.

use nalgebra::Point3;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::codec;
use crate::error::PoseError;
use crate::pose::{Pose6, PoseEntry};
use crate::transform::{self, Transform};

/// Cumulative transform after composing an entry and all entries before it.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChainedPose {
    /// Product of every entry transform up to and including this one
    pub cumulative: Transform,
    /// Invert flag of the source entry, kept for display
    pub invert: bool,
}

impl ChainedPose {
    /// Position of this frame in the world.
    pub fn origin(&self) -> Point3<f64> {
        transform::translation(&self.cumulative)
    }

    /// The cumulative transform expressed as a KUKA pose.
    pub fn pose(&self) -> Pose6 {
        transform::from_transform(&self.cumulative)
    }
}

/// Ordered result of [`chain`]. One [`ChainedPose`] per input entry.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Chain {
    poses: Vec<ChainedPose>,
}

/// Chain entries left to right, starting at the identity.
///
/// Entry `i` contributes `T_i = to_transform(pose)` (or its inverse when
/// the entry is flagged), and `cumulative_i = T_0 · T_1 · … · T_i`.
pub fn chain(entries: &[PoseEntry]) -> Result<Chain, PoseError> {
    let mut poses = Vec::with_capacity(entries.len());
    let mut current = Transform::identity();

    for (i, entry) in entries.iter().enumerate() {
        let mut t = transform::to_transform(&entry.pose);
        if entry.invert {
            t = transform::invert(&t)?;
        }
        current *= t;

        let chained = ChainedPose {
            cumulative: current,
            invert: entry.invert,
        };
        debug!("{}", codec::report_line(i, entry.invert, &chained.pose()));
        poses.push(chained);
    }

    Ok(Chain { poses })
}

impl Chain {
    pub fn len(&self) -> usize {
        self.poses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.poses.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&ChainedPose> {
        self.poses.get(index)
    }

    pub fn last(&self) -> Option<&ChainedPose> {
        self.poses.last()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ChainedPose> {
        self.poses.iter()
    }

    pub fn as_slice(&self) -> &[ChainedPose] {
        &self.poses
    }

    /// Pose of the final frame, or `None` when there are no poses.
    pub fn resulting_pose(&self) -> Option<Pose6> {
        self.last().map(ChainedPose::pose)
    }

    /// Origins of every frame in chain order.
    pub fn origins(&self) -> impl Iterator<Item = Point3<f64>> + '_ {
        self.poses.iter().map(ChainedPose::origin)
    }

    /// Straight connectors between consecutive frame origins.
    pub fn segments(&self) -> Vec<(Point3<f64>, Point3<f64>)> {
        self.poses
            .windows(2)
            .map(|pair| (pair[0].origin(), pair[1].origin()))
            .collect()
    }

    /// Labels drawn next to each frame (`Pose 1`, `Pose 2*`, ...).
    pub fn labels(&self) -> Vec<String> {
        self.poses
            .iter()
            .enumerate()
            .map(|(i, p)| codec::pose_label(i, p.invert))
            .collect()
    }

    /// One `Pose i: {...}` line per frame with its cumulative pose.
    pub fn report_lines(&self) -> Vec<String> {
        self.poses
            .iter()
            .enumerate()
            .map(|(i, p)| codec::report_line(i, p.invert, &p.pose()))
            .collect()
    }
}

impl<'a> IntoIterator for &'a Chain {
    type Item = &'a ChainedPose;
    type IntoIter = std::slice::Iter<'a, ChainedPose>;

    fn into_iter(self) -> Self::IntoIter {
        self.poses.iter()
    }
}
