//! Error types for the boss bar crate.

use crate::registry::BarKey;
use thiserror::Error;

/// Errors produced by boss bar construction and mutation.
///
/// Progress validation is the only failure surfaced from display mutation;
/// everything else on the mutation surface accepts its input as given.
/// Key errors belong to the registry surface.
#[derive(Error, Debug)]
pub enum BossBarError {
    /// Progress must lie in the open-closed interval `(0.0, 1.0]`.
    #[error("progress must be within (0.0, 1.0], got {0}")]
    ProgressOutOfRange(f32),

    /// The key string violates the allowed character set.
    #[error("invalid bar key: {0}")]
    InvalidKey(String),

    /// A bar is already registered under this key.
    #[error("bar key '{0}' is already registered")]
    KeyTaken(BarKey),
}
