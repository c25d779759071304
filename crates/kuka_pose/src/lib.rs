//! KUKA XYZ-ABC pose algebra.
//!
//! This crate turns an ordered list of KUKA poses into a chain of cumulative
//! homogeneous transforms (`nalgebra::Matrix4<f64>`) and derives the scene
//! geometry a viewer needs to draw it.
//!
//! # Architecture
//!
//! - **Notation** ([`codec`]): `{X .., Y .., Z .., A .., B .., C ..}` text ↔ [`Pose6`]
//! - **Transforms** ([`transform`]): [`Pose6`] ↔ 4x4 matrix, exact inverse
//! - **Chaining** ([`chain`]): fold `(pose, invert)` entries left to right
//! - **Scene** ([`scene`]): bounds, scale, camera framing, frame axes
//!
//! The list of entries belongs to the caller ([`PoseSequence`] is a ready
//! made one). Every computation takes a slice and returns owned data.
//!
//! # Example
//!
//! ```rust
//! use kuka_pose::{chain, PoseEntry, Pose6, Scene, SceneSettings};
//!
//! let base: Pose6 = "{X 101.00, Y 0.00, Z 2200.00, A 90.00, B -10.00, C -90.00}"
//!     .parse()
//!     .unwrap();
//! let tool = Pose6::from_translation(0.0, 0.0, 250.0);
//!
//! let chain = chain(&[PoseEntry::forward(base), PoseEntry::forward(tool)]).unwrap();
//! let result = chain.resulting_pose().unwrap();
//! println!("Resulting Pose: {}", result);
//!
//! let scene = Scene::compute(&chain, &SceneSettings::default()).unwrap();
//! assert!(scene.scene_size > 0.0);
//! ```

pub mod chain;
pub mod codec;
pub mod error;
pub mod pose;
pub mod scene;
pub mod sequence;
pub mod settings;
pub mod transform;

pub use chain::{chain, Chain, ChainedPose};
pub use codec::{format, format_entry, parse, parse_entry};
pub use error::PoseError;
pub use pose::{Pose6, PoseEntry};
pub use scene::{
    camera_placement, extents, frame_axes, scene_size, CameraPlacement, FrameAxes, Scene,
    SceneBounds,
};
pub use sequence::PoseSequence;
pub use settings::SceneSettings;
pub use transform::{from_transform, invert, to_transform, Transform};
