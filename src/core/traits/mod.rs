/*!
Capability traits of the keyset layer.

This module defines the interfaces the registry consumes: key managers,
primitive wrappers, and the operation traits of the hybrid primitives.
*/

pub mod hybrid;
pub mod key_manager;
pub mod wrapper;

// Re-export core traits for easier access
pub use hybrid::{HybridDecrypt, HybridEncrypt};
pub use key_manager::{KeyManager, PrivateKeyManager};
pub use wrapper::PrimitiveWrapper;
