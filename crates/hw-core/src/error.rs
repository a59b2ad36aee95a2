//! Framework error type.
//!
//! Sub-crates may define their own error enums and convert them into `HwError`
//! via `From` impls, or keep them separate and wrap `HwError` as one variant.
//! Both patterns are acceptable; prefer whichever keeps error sites clean.

use thiserror::Error;

use crate::Lane;

/// The top-level error type for `hw-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum HwError {
    #[error("no legal velocities configured for lane {0}")]
    LaneNotConfigured(Lane),

    #[error("empty legal-velocity set for lane {0}")]
    EmptyVelocitySet(Lane),

    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for all `hw-*` crates.
pub type HwResult<T> = Result<T, HwError>;
