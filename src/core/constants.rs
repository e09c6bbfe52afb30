/*!
Constants for the keyset layer.

This module contains the output-prefix wire constants shared with the
key-serialization layer, plus key and ciphertext sizes for the built-in
hybrid scheme.
*/

/// Length in bytes of a non-RAW output prefix (start byte + 32-bit key id)
pub const NON_RAW_PREFIX_SIZE: usize = 5;

/// Start byte of an output prefix in the standard format
pub const STANDARD_START_BYTE: u8 = 0x01;

/// Start byte of an output prefix in the legacy format
pub const LEGACY_START_BYTE: u8 = 0x00;

/// Prefix of RAW keys: the empty byte string
pub const RAW_PREFIX: &[u8] = b"";

/// Size constants for the built-in hybrid scheme
pub mod sizes {
    /// CRYSTALS-Kyber constants
    pub mod kyber {
        /// Size of Kyber768 public key in bytes
        pub const PUBLIC_KEY_BYTES: usize = 1184;

        /// Size of Kyber768 secret key in bytes
        pub const SECRET_KEY_BYTES: usize = 2400;

        /// Size of Kyber768 ciphertext in bytes
        pub const CIPHERTEXT_BYTES: usize = 1088;

        /// Size of Kyber shared secret in bytes
        pub const SHARED_SECRET_BYTES: usize = 32;
    }

    /// ChaCha20-Poly1305 constants
    pub mod chacha {
        /// Size of ChaCha20-Poly1305 authentication tag in bytes
        pub const TAG_SIZE: usize = 16;

        /// Size of ChaCha20-Poly1305 nonce in bytes
        pub const NONCE_SIZE: usize = 12;

        /// Size of ChaCha20-Poly1305 key in bytes
        pub const KEY_SIZE: usize = 32;
    }
}

/// Default salt for HKDF key derivation
pub const HKDF_SALT: &[u8] = b"PQC-Keyset-v1-Hybrid-Key-Derivation";
