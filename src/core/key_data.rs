/*!
Key data envelopes, key templates and output-prefix classification.

`KeyData` is the opaque envelope produced by key managers and consumed by
the registry: a key-type identifier, raw key material, a material
classification, and an output-prefix classification. `KeyTemplate` is the
matching request descriptor for generating new key data.
*/

use byteorder::{BigEndian, ByteOrder};

use crate::core::constants::{LEGACY_START_BYTE, NON_RAW_PREFIX_SIZE, STANDARD_START_BYTE};

/// Classification of the key material held in a [`KeyData`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde-support", derive(serde::Serialize, serde::Deserialize))]
pub enum KeyMaterialType {
    /// Secret-key material for a symmetric primitive
    Symmetric,

    /// Private half of an asymmetric key pair
    AsymmetricPrivate,

    /// Public half of an asymmetric key pair
    AsymmetricPublic,
}

/// How outputs produced with a key are tagged on the wire
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde-support", derive(serde::Serialize, serde::Deserialize))]
pub enum OutputPrefixType {
    /// Standard 5-byte prefix: `0x01` followed by the big-endian key id
    Standard,

    /// Legacy 5-byte prefix: `0x00` followed by the big-endian key id
    Legacy,

    /// No prefix; RAW keys are tried as a fallback during decryption
    Raw,
}

/// Opaque envelope holding one key
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde-support", derive(serde::Serialize, serde::Deserialize))]
pub struct KeyData {
    /// Key-type identifier naming the key format
    pub type_url: String,

    /// Raw key material, interpreted only by the matching key manager
    pub value: Vec<u8>,

    /// Material classification of the key
    pub key_material_type: KeyMaterialType,

    /// Output-prefix classification of the key
    pub output_prefix_type: OutputPrefixType,
}

impl KeyData {
    /// Create a new key data envelope
    pub fn new(
        type_url: impl Into<String>,
        value: Vec<u8>,
        key_material_type: KeyMaterialType,
        output_prefix_type: OutputPrefixType,
    ) -> Self {
        Self {
            type_url: type_url.into(),
            value,
            key_material_type,
            output_prefix_type,
        }
    }
}

/// Request descriptor for generating new key data
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde-support", derive(serde::Serialize, serde::Deserialize))]
pub struct KeyTemplate {
    /// Key-type identifier of the manager that should generate the key
    pub type_url: String,

    /// Serialized generation parameters, interpreted by the manager
    pub value: Vec<u8>,

    /// Output-prefix classification requested for the new key
    pub output_prefix_type: OutputPrefixType,
}

impl KeyTemplate {
    /// Create a parameterless template for the given key type
    pub fn new(type_url: impl Into<String>, output_prefix_type: OutputPrefixType) -> Self {
        Self {
            type_url: type_url.into(),
            value: Vec::new(),
            output_prefix_type,
        }
    }
}

/// Compute the output prefix for a key id under the given prefix type.
///
/// RAW keys have no prefix; the other classifications produce a
/// [`NON_RAW_PREFIX_SIZE`]-byte prefix of a start byte followed by the
/// big-endian key id.
pub fn output_prefix(prefix_type: OutputPrefixType, key_id: u32) -> Vec<u8> {
    let start_byte = match prefix_type {
        OutputPrefixType::Standard => STANDARD_START_BYTE,
        OutputPrefixType::Legacy => LEGACY_START_BYTE,
        OutputPrefixType::Raw => return Vec::new(),
    };

    let mut prefix = [0u8; NON_RAW_PREFIX_SIZE];
    prefix[0] = start_byte;
    BigEndian::write_u32(&mut prefix[1..], key_id);
    prefix.to_vec()
}
