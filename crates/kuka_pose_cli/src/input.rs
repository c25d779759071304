use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use kuka_pose::{PoseEntry, PoseSequence, SceneSettings};
use tracing::{debug, info};

/// Read one entry per line. Blank lines and `#` comments are skipped.
pub fn parse_pose_list(text: &str) -> Result<PoseSequence> {
    let mut sequence = PoseSequence::new();
    for (lineno, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let entry: PoseEntry = line
            .parse()
            .with_context(|| format!("line {}", lineno + 1))?;
        sequence.push(entry);
    }
    Ok(sequence)
}

pub fn load_poses(path: Option<&Path>) -> Result<PoseSequence> {
    let Some(path) = path else {
        info!("No pose file given, using the default scene");
        return Ok(PoseSequence::default_scene());
    };

    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read pose file {}", path.display()))?;
    let sequence = parse_pose_list(&text)
        .with_context(|| format!("Invalid pose in {}", path.display()))?;
    info!("Loaded {} poses from {}", sequence.len(), path.display());
    Ok(sequence)
}

pub fn load_settings(path: Option<&Path>) -> Result<SceneSettings> {
    let Some(path) = path else {
        return Ok(SceneSettings::default());
    };

    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read settings file {}", path.display()))?;
    let settings: SceneSettings = serde_json::from_str(&text)
        .with_context(|| format!("Invalid settings in {}", path.display()))?;
    debug!("Scene settings: {:?}", settings);
    Ok(settings)
}
