/*!
Error handling for the keyset layer.

Registry and wrapper failures are surfaced synchronously to the caller;
nothing is retried internally. The only errors that are ever absorbed are
per-candidate failures inside the decrypt dispatch loop, which collapse
into a single [`Error::Decryption`] carrying no detail.
*/

use thiserror::Error;

use crate::core::primitive::PrimitiveCategory;

/// Result type for the keyset layer
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for the keyset layer
#[derive(Error, Debug)]
pub enum Error {
    /// Lookup of an unregistered key type or primitive category
    #[error("not found: {0}")]
    NotFound(String),

    /// Conflicting or self-inconsistent registration
    #[error("registration error: {0}")]
    Configuration(String),

    /// New-key generation is disallowed for the resolved manager
    #[error("permission denied: {0}")]
    Permission(String),

    /// Primitive category mismatch
    #[error("wrong primitive category: expected {expected}, got {actual}")]
    TypeMismatch {
        expected: PrimitiveCategory,
        actual: PrimitiveCategory,
    },

    /// Malformed input
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Manager lacks a required optional capability
    #[error("missing capability: {0}")]
    Capability(String),

    /// Malformed key material
    #[error("key parsing failed: {0}")]
    KeyParsing(String),

    /// Key template is invalid for the resolved manager
    #[error("unsupported parameters: {0}")]
    UnsupportedParameters(String),

    /// Encryption failed (no details for security)
    #[error("encryption failed")]
    Encryption,

    /// Every dispatch candidate was exhausted (no details for security)
    #[error("decryption failed")]
    Decryption,
}
