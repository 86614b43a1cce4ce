//! Errors raised while parsing derivation paths and deriving nodes.

use thiserror::Error;

/// Reasons a derivation path string is rejected.
///
/// Segment positions are 1-based and count the segments after the leading `m`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PathError {
    /// The path string is empty.
    #[error("derivation path is empty")]
    Empty,

    /// The path does not start with the `m` root marker.
    #[error("derivation path must start with 'm'")]
    MissingRoot,

    /// A segment between two separators (or after a trailing separator) is empty.
    #[error("empty segment at position {position}")]
    EmptySegment {
        /// Position of the empty segment.
        position: usize,
    },

    /// A numeric segment lacks the `'` hardened marker.
    #[error("segment {segment:?} at position {position} is not hardened")]
    NotHardened {
        /// Position of the offending segment.
        position: usize,
        /// The offending segment text.
        segment: String,
    },

    /// A segment is not a decimal index followed by a single `'`.
    #[error("segment {segment:?} at position {position} is not a hardened decimal index")]
    InvalidSegment {
        /// Position of the offending segment.
        position: usize,
        /// The offending segment text.
        segment: String,
    },

    /// A segment's index does not fit below the hardened offset.
    #[error("index {segment:?} at position {position} must be below 2^31")]
    IndexOutOfRange {
        /// Position of the offending segment.
        position: usize,
        /// The offending segment text.
        segment: String,
    },
}

/// Errors that can occur while deriving nodes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DerivationError {
    /// The derivation path failed validation.
    #[error("invalid derivation path: {0}")]
    InvalidPath(#[from] PathError),

    /// A non-hardened index was requested; ed25519 has no public derivation.
    #[error("no public derivation for ed25519 (index {index:#010x} is not hardened)")]
    NoPublicDerivation {
        /// The rejected index.
        index: u32,
    },

    /// The underlying MAC primitive refused its input.
    ///
    /// This is not expected for in-memory inputs.
    #[error("hmac-sha512 failure: {0}")]
    PrimitiveFailure(String),
}
