//! Error type shared by every pose operation.

use thiserror::Error;

/// Error type for pose parsing, chaining and scene queries.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PoseError {
    /// Text does not match `{X <n>, Y <n>, Z <n>, A <n>, B <n>, C <n>}`
    #[error("Invalid pose format: {input:?}")]
    Format {
        /// The rejected text
        input: String,
    },

    /// Extents or camera framing were requested for a chain with no poses
    #[error("No poses in chain")]
    EmptyChain,

    /// General 4x4 inverse does not exist
    #[error("Transform is not invertible")]
    NotInvertible,

    /// Sequence edit addressed an index past the end
    #[error("Index {index} out of range for sequence of length {len}")]
    IndexOutOfRange {
        /// Requested index
        index: usize,
        /// Sequence length at the time of the call
        len: usize,
    },
}

impl PoseError {
    pub(crate) fn format(input: &str) -> Self {
        PoseError::Format {
            input: input.to_string(),
        }
    }
}
