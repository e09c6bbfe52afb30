/*!
Multi-key dispatch for hybrid decryption.

The wrapped decryptor works against a whole keyset rather than a single
key. It uses the output prefix of the ciphertext to select candidate keys
efficiently; if none of the keys under that prefix decrypt, it falls back
to trying every RAW key against the untruncated ciphertext.

Per-candidate failures are deliberately absorbed: once the whole candidate
sequence is exhausted, the caller sees a single generic decryption error
that reveals nothing about which key was tried or why it failed.
*/

use std::sync::Arc;

use crate::core::constants::NON_RAW_PREFIX_SIZE;
use crate::core::error::{Error, Result};
use crate::core::primitive::{Primitive, PrimitiveCategory};
use crate::core::primitive_set::PrimitiveSet;
use crate::core::traits::{HybridDecrypt, PrimitiveWrapper};

struct WrappedHybridDecrypt {
    primitives: Arc<PrimitiveSet>,
}

impl HybridDecrypt for WrappedHybridDecrypt {
    fn decrypt(&self, ciphertext: &[u8], context_info: &[u8]) -> Result<Vec<u8>> {
        if ciphertext.len() > NON_RAW_PREFIX_SIZE {
            let (prefix, rest) = ciphertext.split_at(NON_RAW_PREFIX_SIZE);
            for entry in self.primitives.entries_for_prefix(prefix) {
                let Some(primitive) = entry.primitive().as_hybrid_decrypt() else {
                    continue;
                };
                match primitive.decrypt(rest, context_info) {
                    Ok(plaintext) => return Ok(plaintext),
                    Err(e) => {
                        log::info!(
                            "ciphertext prefix matches key {}, but cannot decrypt: {e}",
                            entry.key_id()
                        );
                    }
                }
            }
        }
        // Try all RAW keys with the untruncated ciphertext.
        for entry in self.primitives.raw_entries() {
            let Some(primitive) = entry.primitive().as_hybrid_decrypt() else {
                continue;
            };
            if let Ok(plaintext) = primitive.decrypt(ciphertext, context_info) {
                return Ok(plaintext);
            }
        }
        // Nothing works.
        Err(Error::Decryption)
    }
}

/// Wrapper producing keyset-wide hybrid decryptors
pub struct HybridDecryptWrapper;

impl PrimitiveWrapper for HybridDecryptWrapper {
    fn primitive_category(&self) -> PrimitiveCategory {
        PrimitiveCategory::HybridDecrypt
    }

    fn wrap(&self, primitives: Arc<PrimitiveSet>) -> Result<Primitive> {
        if primitives.primitive_category() != PrimitiveCategory::HybridDecrypt {
            return Err(Error::TypeMismatch {
                expected: PrimitiveCategory::HybridDecrypt,
                actual: primitives.primitive_category(),
            });
        }
        Ok(Primitive::HybridDecrypt(Box::new(WrappedHybridDecrypt {
            primitives,
        })))
    }

    fn as_any(&self) -> &dyn std::any::Any {
        self
    }
}
