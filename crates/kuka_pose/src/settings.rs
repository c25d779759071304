use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
/// Settings to configure scene framing
pub struct SceneSettings {
    /// Camera distance along (1, 1, 1) as a multiple of the largest span
    ///
    /// ## Default
    /// 2.0, which keeps the whole bounding box in view
    pub camera_distance_factor: f64,
    /// Frame axis length as a fraction of the scene diagonal (default: 0.1)
    pub frame_scale_factor: f64,
    /// Margin added on every side of the drawn bounding box (default: 500.0)
    pub bounds_margin: f64,
}

impl Default for SceneSettings {
    fn default() -> Self {
        Self {
            camera_distance_factor: 2.0,
            frame_scale_factor: 0.1,
            bounds_margin: 500.0,
        }
    }
}
