//! Caller-owned, order-significant list of pose entries.
//!
//! A front end edits this list (add, remove, drag to reorder, edit in place,
//! toggle inversion) and re-chains it after every edit. Chaining only reads
//! a slice; no reference into the list outlives the call.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::chain::{self, Chain};
use crate::codec;
use crate::error::PoseError;
use crate::pose::{Pose6, PoseEntry};

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PoseSequence {
    entries: Vec<PoseEntry>,
}

impl PoseSequence {
    pub fn new() -> Self {
        Self::default()
    }

    /// The viewer's start-up poses.
    pub fn default_scene() -> Self {
        Self::from(vec![
            PoseEntry::forward(Pose6::new(-350.50, 2954.42, 2720.94, 0.00, -0.00, -80.00)),
            PoseEntry::forward(Pose6::new(101.00, -0.00, 2200.00, 90.00, -10.00, -90.00)),
            PoseEntry::forward(Pose6::new(3000.00, -0.00, 451.5, 0.00, 90.00, 0.00)),
        ])
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[PoseEntry] {
        &self.entries
    }

    pub fn get(&self, index: usize) -> Option<&PoseEntry> {
        self.entries.get(index)
    }

    pub fn push(&mut self, entry: PoseEntry) {
        self.entries.push(entry);
    }

    /// Parse pose text and append it; the list is untouched on error.
    pub fn push_text(&mut self, text: &str, invert: bool) -> Result<(), PoseError> {
        let pose = codec::parse(text)?;
        self.push(PoseEntry::new(pose, invert));
        Ok(())
    }

    /// Insert before `index`; `index == len` appends.
    pub fn insert(&mut self, index: usize, entry: PoseEntry) -> Result<(), PoseError> {
        if index > self.entries.len() {
            return Err(self.out_of_range(index));
        }
        self.entries.insert(index, entry);
        Ok(())
    }

    pub fn remove(&mut self, index: usize) -> Result<PoseEntry, PoseError> {
        self.check(index)?;
        Ok(self.entries.remove(index))
    }

    /// Replace the entry at `index`, returning the old one.
    pub fn update(&mut self, index: usize, entry: PoseEntry) -> Result<PoseEntry, PoseError> {
        self.check(index)?;
        Ok(std::mem::replace(&mut self.entries[index], entry))
    }

    /// Replace the entry at `index` from edited list-item text.
    pub fn update_text(&mut self, index: usize, text: &str) -> Result<PoseEntry, PoseError> {
        self.check(index)?;
        let entry = codec::parse_entry(text)?;
        self.update(index, entry)
    }

    /// Move the entry at `from` so that it ends up at `to`.
    pub fn move_entry(&mut self, from: usize, to: usize) -> Result<(), PoseError> {
        self.check(from)?;
        self.check(to)?;
        let entry = self.entries.remove(from);
        self.entries.insert(to, entry);
        debug!("[PoseSequence::move_entry] {} -> {}", from, to);
        Ok(())
    }

    /// Flip the invert flag at `index`, returning the new value.
    pub fn toggle_invert(&mut self, index: usize) -> Result<bool, PoseError> {
        self.check(index)?;
        let entry = &mut self.entries[index];
        *entry = entry.toggled();
        Ok(entry.invert)
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn chain(&self) -> Result<Chain, PoseError> {
        chain::chain(&self.entries)
    }

    /// List-item text for every entry.
    pub fn to_lines(&self) -> Vec<String> {
        self.entries.iter().map(codec::format_entry).collect()
    }

    fn check(&self, index: usize) -> Result<(), PoseError> {
        if index < self.entries.len() {
            Ok(())
        } else {
            Err(self.out_of_range(index))
        }
    }

    fn out_of_range(&self, index: usize) -> PoseError {
        PoseError::IndexOutOfRange {
            index,
            len: self.entries.len(),
        }
    }
}

impl From<Vec<PoseEntry>> for PoseSequence {
    fn from(entries: Vec<PoseEntry>) -> Self {
        Self { entries }
    }
}

impl FromIterator<PoseEntry> for PoseSequence {
    fn from_iter<I: IntoIterator<Item = PoseEntry>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl Extend<PoseEntry> for PoseSequence {
    fn extend<I: IntoIterator<Item = PoseEntry>>(&mut self, iter: I) {
        self.entries.extend(iter);
    }
}
