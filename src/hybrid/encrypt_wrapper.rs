/*!
Multi-key dispatch for hybrid encryption.

Unlike decryption, encryption never tries candidates: every operation is
routed deterministically to the primary entry of the keyset, and the
primary's output prefix is prepended to the ciphertext so decryptors can
find the key again.
*/

use std::sync::Arc;

use crate::core::error::{Error, Result};
use crate::core::primitive::{Primitive, PrimitiveCategory};
use crate::core::primitive_set::PrimitiveSet;
use crate::core::traits::{HybridEncrypt, PrimitiveWrapper};

struct WrappedHybridEncrypt {
    primitives: Arc<PrimitiveSet>,
}

impl HybridEncrypt for WrappedHybridEncrypt {
    fn encrypt(&self, plaintext: &[u8], context_info: &[u8]) -> Result<Vec<u8>> {
        let primary = self.primitives.primary().ok_or_else(|| {
            Error::InvalidArgument("primitive set has no primary entry".to_string())
        })?;
        let primitive = primary.primitive().as_hybrid_encrypt().ok_or_else(|| {
            Error::TypeMismatch {
                expected: PrimitiveCategory::HybridEncrypt,
                actual: primary.primitive().category(),
            }
        })?;

        let sealed = primitive.encrypt(plaintext, context_info)?;
        let mut ciphertext = Vec::with_capacity(primary.prefix().len() + sealed.len());
        ciphertext.extend_from_slice(primary.prefix());
        ciphertext.extend_from_slice(&sealed);
        Ok(ciphertext)
    }
}

/// Wrapper producing keyset-wide hybrid encryptors
pub struct HybridEncryptWrapper;

impl PrimitiveWrapper for HybridEncryptWrapper {
    fn primitive_category(&self) -> PrimitiveCategory {
        PrimitiveCategory::HybridEncrypt
    }

    fn wrap(&self, primitives: Arc<PrimitiveSet>) -> Result<Primitive> {
        if primitives.primitive_category() != PrimitiveCategory::HybridEncrypt {
            return Err(Error::TypeMismatch {
                expected: PrimitiveCategory::HybridEncrypt,
                actual: primitives.primitive_category(),
            });
        }
        Ok(Primitive::HybridEncrypt(Box::new(WrappedHybridEncrypt {
            primitives,
        })))
    }

    fn as_any(&self) -> &dyn std::any::Any {
        self
    }
}
