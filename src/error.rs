//! Error types returned by this crate

use thiserror::Error;

/// Error indicating that an input failed a structural precondition.
///
/// Validation runs before any other work, so a failed operation has no
/// observable effect. These errors signal bad input from the caller, not
/// transient conditions worth retrying.
#[derive(Clone, Eq, PartialEq, Hash, Debug, Error)]
pub enum ValidationError {
    /// The value passed to [`encode`](crate::FacadeCodec::encode) does not
    /// carry version 7.
    #[error("input must be a UUIDv7")]
    NotV7,

    /// The configured seed was the all-zero sentinel.
    #[error("seed must not be all zero")]
    ZeroSeed,
}

/// Error indicating an operation on a [`SeedHolder`](crate::SeedHolder) whose
/// key material has already been scrubbed.
#[derive(Clone, Eq, PartialEq, Hash, Debug, Error)]
#[error("holder already released")]
pub struct StateError;

/// Error parsing an invalid string representation of UUID.
#[derive(Clone, Eq, PartialEq, Hash, Debug, Error)]
#[error("invalid string representation")]
pub struct ParseError {}
