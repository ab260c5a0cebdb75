//! Command implementations for model-defaults-cli

pub mod check;
pub mod list;

pub use check::{run_is_default, run_match};
pub use list::{run_folders, run_lookup};

/// How a command finished when it did not fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Success,
    /// The checked values were not equivalent, or not a default.
    Mismatch,
}

impl From<bool> for Outcome {
    fn from(matched: bool) -> Self {
        if matched {
            Outcome::Success
        } else {
            Outcome::Mismatch
        }
    }
}
