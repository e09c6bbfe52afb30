/*!
Operation traits for hybrid encryption.

Hybrid encryption combines an asymmetric encapsulation with a symmetric
cipher: anyone holding the public key can encrypt, only the holder of the
private key can decrypt. `context_info` binds the ciphertext to caller
context; decryption with a different context fails.
*/

use crate::core::error::Result;

/// Trait for the decryption half of a hybrid encryption scheme
pub trait HybridDecrypt: Send + Sync {
    /// Decrypt `ciphertext`, verifying its binding to `context_info`
    fn decrypt(&self, ciphertext: &[u8], context_info: &[u8]) -> Result<Vec<u8>>;
}

/// Trait for the encryption half of a hybrid encryption scheme
pub trait HybridEncrypt: Send + Sync {
    /// Encrypt `plaintext`, binding the ciphertext to `context_info`
    fn encrypt(&self, plaintext: &[u8], context_info: &[u8]) -> Result<Vec<u8>>;
}
