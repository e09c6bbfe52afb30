//! Core components of the keyset layer.
//!
//! This module contains the fundamental building blocks: the key manager and
//! wrapper capability traits, key data envelopes, the primitive set that
//! backs a wrapped primitive, the global registry, and error handling.

// Capability traits
pub mod traits;

// Key data envelopes and templates
pub mod key_data;

// Primitive categories and instances
pub mod primitive;

// Keyset materialized for one primitive category
pub mod primitive_set;

// Global registry of key managers and wrappers
pub mod registry;

// Protocol constants
pub mod constants;

// Error handling
pub mod error;

// Re-exports for convenience
pub use self::error::{Error, Result};
pub use self::key_data::{KeyData, KeyMaterialType, KeyTemplate, OutputPrefixType};
pub use self::primitive::{Primitive, PrimitiveCategory};
pub use self::primitive_set::{Entry, KeyStatus, PrimitiveSet};
