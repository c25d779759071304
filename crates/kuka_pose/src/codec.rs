//! KUKA pose notation.
//!
//! The controller (and the `$POS_ACT` style displays) write a pose as
//!
//! ```text
//! {X -350.50, Y 2954.42, Z 2720.94, A 0.00, B -0.00, C -80.00}
//! ```
//!
//! This is the only exchange format of the crate. A list entry may carry a
//! trailing `(Inverted)` marker after the closing brace.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::PoseError;
use crate::pose::{Pose6, PoseEntry};

/// Marker appended to the text of an inverted entry.
pub const INVERTED_MARKER: &str = "(Inverted)";

static POSE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    const NUM: &str = r"([-+]?(?:\d+(?:\.\d*)?|\.\d+))";
    let pattern = format!(
        r"^\{{X {NUM}, Y {NUM}, Z {NUM}, A {NUM}, B {NUM}, C {NUM}\}}"
    );
    Regex::new(&pattern).expect("pose pattern is a valid regex")
});

/// Parse `{X <n>, Y <n>, Z <n>, A <n>, B <n>, C <n>}`.
///
/// The match is anchored at the first character. Anything after the
/// closing brace is ignored.
pub fn parse(text: &str) -> Result<Pose6, PoseError> {
    let caps = POSE_PATTERN
        .captures(text)
        .ok_or_else(|| PoseError::format(text))?;

    let mut values = [0.0_f64; 6];
    for (slot, value) in values.iter_mut().enumerate() {
        let token = caps
            .get(slot + 1)
            .map(|m| m.as_str())
            .ok_or_else(|| PoseError::format(text))?;
        *value = token.parse().map_err(|_| PoseError::format(text))?;
    }

    Ok(Pose6::from(values))
}

/// Render a pose with two decimals per field.
///
/// Negative zero keeps its sign (`-0.00`), as on the controller.
pub fn format(pose: &Pose6) -> String {
    format!(
        "{{X {:.2}, Y {:.2}, Z {:.2}, A {:.2}, B {:.2}, C {:.2}}}",
        pose.x, pose.y, pose.z, pose.a, pose.b, pose.c
    )
}

/// List-item text for an entry: the pose, plus ` (Inverted)` if set.
pub fn format_entry(entry: &PoseEntry) -> String {
    if entry.invert {
        format!("{} {}", format(&entry.pose), INVERTED_MARKER)
    } else {
        format(&entry.pose)
    }
}

/// Parse list-item text produced by [`format_entry`] or typed by a user.
///
/// The text is split at the first `}`; the head must be a pose and the
/// entry is inverted when the tail contains `(Inverted)`.
pub fn parse_entry(text: &str) -> Result<PoseEntry, PoseError> {
    let split = text.find('}').map(|i| i + 1).unwrap_or(text.len());
    let (head, tail) = text.split_at(split);
    let pose = parse(head)?;
    Ok(PoseEntry::new(pose, tail.contains(INVERTED_MARKER)))
}

/// Short label drawn next to a frame: `Pose 3`, or `Pose 3*` when inverted.
pub fn pose_label(index: usize, invert: bool) -> String {
    if invert {
        format!("Pose {}*", index + 1)
    } else {
        format!("Pose {}", index + 1)
    }
}

/// One line of the chain report: `Pose 2 (Inverted): {X ...}`.
pub fn report_line(index: usize, invert: bool, pose: &Pose6) -> String {
    let marker = if invert { " (Inverted)" } else { "" };
    format!("Pose {}{}: {}", index + 1, marker, format(pose))
}

impl fmt::Display for Pose6 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format(self))
    }
}

impl FromStr for Pose6 {
    type Err = PoseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s)
    }
}

impl fmt::Display for PoseEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_entry(self))
    }
}

impl FromStr for PoseEntry {
    type Err = PoseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_entry(s)
    }
}
