/*!
Kyber768 hybrid encryption.

The scheme combines Kyber768 key encapsulation with ChaCha20-Poly1305:
the encryptor encapsulates a shared secret against the recipient's public
key, derives a symmetric key from it with HKDF-SHA256 (the caller's
`context_info` is mixed into the derivation, binding the ciphertext to
it), and seals the plaintext under a random nonce.

Wire form of a ciphertext: `kem_ciphertext || nonce || aead_ciphertext`.
*/

use chacha20poly1305::{
    ChaCha20Poly1305, Key, Nonce,
    aead::{Aead, KeyInit},
};
use hkdf::Hkdf;
use pqcrypto_kyber::kyber768;
use pqcrypto_traits::kem::{Ciphertext, PublicKey, SecretKey, SharedSecret};
use rand::RngCore;
use sha2::Sha256;

use crate::core::constants::{HKDF_SALT, sizes};
use crate::core::error::{Error, Result};
use crate::core::traits::{HybridDecrypt, HybridEncrypt};

/// Derive the symmetric key from the KEM shared secret and context info
fn derive_key(
    shared_secret: &[u8],
    context_info: &[u8],
) -> Result<[u8; sizes::chacha::KEY_SIZE]> {
    let hkdf = Hkdf::<Sha256>::new(Some(HKDF_SALT), shared_secret);
    let mut okm = [0u8; sizes::chacha::KEY_SIZE];
    hkdf.expand(context_info, &mut okm)
        .map_err(|_e| Error::Encryption)?;
    Ok(okm)
}

/// Encryption half of the Kyber768 hybrid scheme
pub struct Kyber768HybridEncrypt {
    recipient_key: kyber768::PublicKey,
}

impl Kyber768HybridEncrypt {
    /// Create an encryptor for the recipient with the given public key
    pub fn new(public_key: &[u8]) -> Result<Self> {
        let recipient_key = kyber768::PublicKey::from_bytes(public_key)
            .map_err(|_| Error::KeyParsing("invalid Kyber768 public key".to_string()))?;
        Ok(Self { recipient_key })
    }
}

impl HybridEncrypt for Kyber768HybridEncrypt {
    fn encrypt(&self, plaintext: &[u8], context_info: &[u8]) -> Result<Vec<u8>> {
        let (shared_secret, kem_ciphertext) = kyber768::encapsulate(&self.recipient_key);
        let key = derive_key(shared_secret.as_bytes(), context_info)?;
        let cipher = ChaCha20Poly1305::new(Key::from_slice(&key));

        let mut nonce = [0u8; sizes::chacha::NONCE_SIZE];
        rand::rng().fill_bytes(&mut nonce);

        let sealed = cipher
            .encrypt(Nonce::from_slice(&nonce), plaintext)
            .map_err(|_e| Error::Encryption)?;

        let mut ciphertext =
            Vec::with_capacity(sizes::kyber::CIPHERTEXT_BYTES + nonce.len() + sealed.len());
        ciphertext.extend_from_slice(kem_ciphertext.as_bytes());
        ciphertext.extend_from_slice(&nonce);
        ciphertext.extend_from_slice(&sealed);
        Ok(ciphertext)
    }
}

/// Decryption half of the Kyber768 hybrid scheme
pub struct Kyber768HybridDecrypt {
    secret_key: kyber768::SecretKey,
}

impl Kyber768HybridDecrypt {
    /// Create a decryptor from the given secret key
    pub fn new(secret_key: &[u8]) -> Result<Self> {
        let secret_key = kyber768::SecretKey::from_bytes(secret_key)
            .map_err(|_| Error::KeyParsing("invalid Kyber768 secret key".to_string()))?;
        Ok(Self { secret_key })
    }
}

impl HybridDecrypt for Kyber768HybridDecrypt {
    fn decrypt(&self, ciphertext: &[u8], context_info: &[u8]) -> Result<Vec<u8>> {
        // kem_ct || nonce || aead_ct, where aead_ct carries at least a tag
        let min_len =
            sizes::kyber::CIPHERTEXT_BYTES + sizes::chacha::NONCE_SIZE + sizes::chacha::TAG_SIZE;
        if ciphertext.len() < min_len {
            return Err(Error::Decryption);
        }

        let (kem_ciphertext, rest) = ciphertext.split_at(sizes::kyber::CIPHERTEXT_BYTES);
        let (nonce, sealed) = rest.split_at(sizes::chacha::NONCE_SIZE);

        let kem_ciphertext =
            kyber768::Ciphertext::from_bytes(kem_ciphertext).map_err(|_| Error::Decryption)?;
        let shared_secret = kyber768::decapsulate(&kem_ciphertext, &self.secret_key);

        let key =
            derive_key(shared_secret.as_bytes(), context_info).map_err(|_| Error::Decryption)?;
        let cipher = ChaCha20Poly1305::new(Key::from_slice(&key));
        cipher
            .decrypt(Nonce::from_slice(nonce), sealed)
            .map_err(|_e| Error::Decryption)
    }
}
