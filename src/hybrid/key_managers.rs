/*!
Key managers for the Kyber768 hybrid key types.

The private key manager generates key pairs and materializes decryptors;
it also carries the private-key capability, deriving public key data from
private key data. The public key manager only materializes encryptors and
refuses key generation.

Private key material is stored as `secret_key || public_key`, so the
public half is always derivable without recomputing the key pair.
*/

use std::any::Any;

use pqcrypto_kyber::kyber768;
use pqcrypto_traits::kem::{PublicKey, SecretKey};

use crate::core::constants::sizes;
use crate::core::error::{Error, Result};
use crate::core::key_data::{KeyData, KeyMaterialType, KeyTemplate};
use crate::core::primitive::{Primitive, PrimitiveCategory};
use crate::core::traits::{KeyManager, PrivateKeyManager};
use crate::hybrid::kyber::{Kyber768HybridDecrypt, Kyber768HybridEncrypt};

/// Key-type identifier of Kyber768 hybrid private keys
pub const KYBER768_HYBRID_PRIVATE_KEY_TYPE_URL: &str =
    "type.pqckeyset.org/Kyber768HybridPrivateKey";

/// Key-type identifier of Kyber768 hybrid public keys
pub const KYBER768_HYBRID_PUBLIC_KEY_TYPE_URL: &str =
    "type.pqckeyset.org/Kyber768HybridPublicKey";

const PRIVATE_KEY_VALUE_LEN: usize =
    sizes::kyber::SECRET_KEY_BYTES + sizes::kyber::PUBLIC_KEY_BYTES;

fn check_type_url(key_type: &str, type_url: &str) -> Result<()> {
    if type_url != key_type {
        return Err(Error::KeyParsing(format!(
            "key data of type {type_url} passed to the manager for {key_type}"
        )));
    }
    Ok(())
}

fn split_private_value(value: &[u8]) -> Result<(&[u8], &[u8])> {
    if value.len() != PRIVATE_KEY_VALUE_LEN {
        return Err(Error::KeyParsing(format!(
            "malformed Kyber768 hybrid private key: expected {PRIVATE_KEY_VALUE_LEN} bytes, \
             got {}",
            value.len()
        )));
    }
    Ok(value.split_at(sizes::kyber::SECRET_KEY_BYTES))
}

/// Manager for Kyber768 hybrid private keys
pub struct Kyber768HybridPrivateKeyManager;

impl KeyManager for Kyber768HybridPrivateKeyManager {
    fn key_type(&self) -> &'static str {
        KYBER768_HYBRID_PRIVATE_KEY_TYPE_URL
    }

    fn primitive_category(&self) -> PrimitiveCategory {
        PrimitiveCategory::HybridDecrypt
    }

    fn primitive(&self, key_data: &KeyData) -> Result<Primitive> {
        check_type_url(self.key_type(), &key_data.type_url)?;
        let (secret_key, _public_key) = split_private_value(&key_data.value)?;
        let decryptor = Kyber768HybridDecrypt::new(secret_key)?;
        Ok(Primitive::HybridDecrypt(Box::new(decryptor)))
    }

    fn new_key_data(&self, key_template: &KeyTemplate) -> Result<KeyData> {
        if key_template.type_url != self.key_type() {
            return Err(Error::UnsupportedParameters(format!(
                "template of type {} passed to the manager for {}",
                key_template.type_url,
                self.key_type()
            )));
        }
        if !key_template.value.is_empty() {
            return Err(Error::UnsupportedParameters(
                "Kyber768 hybrid key generation takes no parameters".to_string(),
            ));
        }

        let (public_key, secret_key) = kyber768::keypair();
        let mut value = Vec::with_capacity(PRIVATE_KEY_VALUE_LEN);
        value.extend_from_slice(secret_key.as_bytes());
        value.extend_from_slice(public_key.as_bytes());

        Ok(KeyData::new(
            self.key_type(),
            value,
            KeyMaterialType::AsymmetricPrivate,
            key_template.output_prefix_type,
        ))
    }

    fn as_private(&self) -> Option<&dyn PrivateKeyManager> {
        Some(self)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl PrivateKeyManager for Kyber768HybridPrivateKeyManager {
    fn public_key_data(&self, private_key_data: &KeyData) -> Result<KeyData> {
        check_type_url(self.key_type(), &private_key_data.type_url)?;
        let (_secret_key, public_key) = split_private_value(&private_key_data.value)?;
        Ok(KeyData::new(
            KYBER768_HYBRID_PUBLIC_KEY_TYPE_URL,
            public_key.to_vec(),
            KeyMaterialType::AsymmetricPublic,
            private_key_data.output_prefix_type,
        ))
    }
}

/// Manager for Kyber768 hybrid public keys
pub struct Kyber768HybridPublicKeyManager;

impl KeyManager for Kyber768HybridPublicKeyManager {
    fn key_type(&self) -> &'static str {
        KYBER768_HYBRID_PUBLIC_KEY_TYPE_URL
    }

    fn primitive_category(&self) -> PrimitiveCategory {
        PrimitiveCategory::HybridEncrypt
    }

    fn primitive(&self, key_data: &KeyData) -> Result<Primitive> {
        check_type_url(self.key_type(), &key_data.type_url)?;
        let encryptor = Kyber768HybridEncrypt::new(&key_data.value)?;
        Ok(Primitive::HybridEncrypt(Box::new(encryptor)))
    }

    fn new_key_data(&self, _key_template: &KeyTemplate) -> Result<KeyData> {
        Err(Error::UnsupportedParameters(
            "public key manager cannot generate keys; generate the private key instead"
                .to_string(),
        ))
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::key_data::OutputPrefixType;
    use crate::core::traits::{HybridDecrypt, HybridEncrypt};

    fn private_template() -> KeyTemplate {
        KeyTemplate::new(KYBER768_HYBRID_PRIVATE_KEY_TYPE_URL, OutputPrefixType::Standard)
    }

    #[test]
    fn test_generated_key_roundtrip() {
        let manager = Kyber768HybridPrivateKeyManager;
        let private = manager.new_key_data(&private_template()).unwrap();
        assert_eq!(private.key_material_type, KeyMaterialType::AsymmetricPrivate);

        let public = manager.public_key_data(&private).unwrap();
        assert_eq!(public.key_material_type, KeyMaterialType::AsymmetricPublic);
        assert_eq!(public.type_url, KYBER768_HYBRID_PUBLIC_KEY_TYPE_URL);

        let decryptor = manager.primitive(&private).unwrap();
        let encryptor = Kyber768HybridPublicKeyManager.primitive(&public).unwrap();

        let ciphertext = encryptor
            .as_hybrid_encrypt()
            .unwrap()
            .encrypt(b"payload", b"ctx")
            .unwrap();
        let plaintext = decryptor
            .as_hybrid_decrypt()
            .unwrap()
            .decrypt(&ciphertext, b"ctx")
            .unwrap();
        assert_eq!(plaintext, b"payload");
    }

    #[test]
    fn test_template_with_parameters_rejected() {
        let manager = Kyber768HybridPrivateKeyManager;
        let mut template = private_template();
        template.value = vec![1, 2, 3];
        assert!(matches!(
            manager.new_key_data(&template),
            Err(Error::UnsupportedParameters(_))
        ));
    }

    #[test]
    fn test_foreign_type_url_rejected() {
        let manager = Kyber768HybridPrivateKeyManager;
        let key_data = KeyData::new(
            "type.pqckeyset.org/SomethingElse",
            vec![0u8; PRIVATE_KEY_VALUE_LEN],
            KeyMaterialType::AsymmetricPrivate,
            OutputPrefixType::Standard,
        );
        assert!(matches!(
            manager.primitive(&key_data),
            Err(Error::KeyParsing(_))
        ));
    }

    #[test]
    fn test_truncated_private_key_rejected() {
        let manager = Kyber768HybridPrivateKeyManager;
        let key_data = KeyData::new(
            KYBER768_HYBRID_PRIVATE_KEY_TYPE_URL,
            vec![0u8; 32],
            KeyMaterialType::AsymmetricPrivate,
            OutputPrefixType::Standard,
        );
        assert!(matches!(
            manager.primitive(&key_data),
            Err(Error::KeyParsing(_))
        ));
    }

    #[test]
    fn test_public_manager_refuses_generation() {
        let template =
            KeyTemplate::new(KYBER768_HYBRID_PUBLIC_KEY_TYPE_URL, OutputPrefixType::Standard);
        assert!(matches!(
            Kyber768HybridPublicKeyManager.new_key_data(&template),
            Err(Error::UnsupportedParameters(_))
        ));
    }
}
