//! Error types for the core crate.
//!
//! None of these are fatal: callers log them and fall back to defaults or to
//! drawing nothing.

use crate::world::World;
use thiserror::Error;

/// A world identifier that is not part of the closed enumeration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown world id {0:?}")]
pub struct ParseWorldError(pub String);

#[derive(Debug, Error)]
pub enum PrefsError {
    #[error("preference storage is unavailable")]
    Unavailable,
    #[error("failed to write preference {key}: {reason}")]
    Write { key: String, reason: String },
    #[error("malformed preference record: {0}")]
    Malformed(#[from] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum CueError {
    #[error("audio cue could not be created: {0}")]
    Create(String),
    #[error("audio playback was rejected: {0}")]
    Rejected(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TravelError {
    #[error("a travel to {0} is already in flight")]
    InFlight(World),
}
