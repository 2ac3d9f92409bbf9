//! Error taxonomy of the encoder.
//!
//! Every failure is a deterministic validation or capacity problem. Bugs in the
//! matrix construction are not represented here; they panic.

use thiserror::Error;

use crate::version::Version;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, QrError>;

/// Error type for all user-facing encoder failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QrError {
    /// The requested mode does not fit the content or the version.
    #[error("mode error: {0}")]
    Mode(String),
    /// Malformed version, or a version contradicting the micro preference.
    #[error("version error: {0}")]
    Version(String),
    /// Malformed error level, or a level the version does not support.
    #[error("error level error: {0}")]
    ErrorLevel(String),
    /// Mask index out of range or not an integer.
    #[error("mask error: {0}")]
    Mask(String),
    /// The content exceeds the capacity of the allowed symbols.
    #[error(transparent)]
    DataOverflow(#[from] DataOverflow),
    /// The content cannot be represented in the requested character set.
    #[error("encoding error: {0}")]
    Encoding(String),
    /// An argument is outside its valid range.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

impl QrError {
    /// Returns `true` for any kind of data overflow.
    pub fn is_data_overflow(&self) -> bool {
        matches!(self, QrError::DataOverflow(_))
    }
}

/// Error type for when data exceeds the symbol capacity.
///
/// Ways to handle this error include:
///
/// - Lower the error correction level, or disable the micro restriction.
/// - Request a larger version, or no version at all.
/// - Split the content over a Structured Append sequence.
/// - Propagate the error upward to the caller/user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DataOverflow {
    /// No version in the allowed range can hold the data.
    #[error("data too large. No {kind} can handle the provided data")]
    NoVersion {
        /// Human readable symbol family, e.g. "Micro QR Code".
        kind: &'static str,
    },
    /// The data needs a larger version than the requested one.
    #[error("the provided data does not fit into version {requested}. Proposal: version {proposal}")]
    VersionTooSmall {
        requested: Version,
        proposal: Version,
    },
    /// More than 16 symbols would be necessary.
    #[error("the data does not fit into a Structured Append sequence of version {version}")]
    StructuredAppend { version: Version },
}
