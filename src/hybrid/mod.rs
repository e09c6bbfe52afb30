/*!
Hybrid encryption over keysets.

This module provides the wrappers that turn a primitive set into a single
hybrid encryptor or decryptor, together with a concrete post-quantum
hybrid scheme (Kyber768 encapsulation + HKDF-SHA256 + ChaCha20-Poly1305)
and the key managers that expose it through the registry.
*/

// Multi-key dispatch wrappers
pub mod decrypt_wrapper;
pub mod encrypt_wrapper;

// Concrete Kyber768 hybrid scheme
pub mod kyber;

// Key managers for the Kyber768 hybrid key types
pub mod key_managers;

pub use decrypt_wrapper::HybridDecryptWrapper;
pub use encrypt_wrapper::HybridEncryptWrapper;
pub use key_managers::{
    KYBER768_HYBRID_PRIVATE_KEY_TYPE_URL, KYBER768_HYBRID_PUBLIC_KEY_TYPE_URL,
    Kyber768HybridPrivateKeyManager, Kyber768HybridPublicKeyManager,
};
pub use kyber::{Kyber768HybridDecrypt, Kyber768HybridEncrypt};

use std::sync::Arc;

use crate::core::error::Result;
use crate::core::registry;

/// Register the hybrid key managers and wrappers in the global registry.
///
/// Idempotent; call once at process start before using hybrid primitives.
pub fn register() -> Result<()> {
    registry::register_key_manager(Arc::new(Kyber768HybridPrivateKeyManager), true)?;
    registry::register_key_manager(Arc::new(Kyber768HybridPublicKeyManager), true)?;
    registry::register_primitive_wrapper(Arc::new(HybridDecryptWrapper))?;
    registry::register_primitive_wrapper(Arc::new(HybridEncryptWrapper))?;
    Ok(())
}
