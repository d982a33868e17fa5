use thiserror::Error;

use crate::bitfield::BitFieldError;

/// Failure while building or compiling a command.
#[derive(Debug, Error)]
pub enum BuilderError {
    /// A choice list is longer than Discord allows.
    #[error("option `{option}` has {count} choices, at most {max} are allowed")]
    TooManyChoices {
        option: String,
        count: usize,
        max: usize,
    },
    /// A non-empty choice list is shorter than the builder requires.
    #[error("option `{option}` has {count} choices, at least {min} are required")]
    TooFewChoices {
        option: String,
        count: usize,
        min: usize,
    },
    /// A permission value couldn't be resolved.
    #[error(transparent)]
    Bits(#[from] BitFieldError),
    /// The compiled document couldn't be turned into JSON.
    #[error("failed to serialize command: {0}")]
    Serialize(#[from] serde_json::Error),
}
