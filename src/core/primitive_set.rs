/*!
A keyset materialized for one primitive category.

A `PrimitiveSet` is an ordered, queryable collection of (output prefix,
primitive, status) entries, built once when a keyset is loaded and
immutable afterwards. Wrapped primitives consult it on every operation:
decryption-style primitives look candidates up by ciphertext prefix and
fall back to the RAW entries, encryption-style primitives use the primary
entry.

Entries are stored under their output prefix; RAW entries live under the
empty prefix. Insertion order is preserved within each prefix, which fixes
the enumeration order of the dispatch loops.
*/

use std::collections::HashMap;
use std::sync::Arc;

use crate::core::constants::RAW_PREFIX;
use crate::core::error::{Error, Result};
use crate::core::key_data::{OutputPrefixType, output_prefix};
use crate::core::primitive::{Primitive, PrimitiveCategory};

/// Status of the key an entry was materialized from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde-support", derive(serde::Serialize, serde::Deserialize))]
pub enum KeyStatus {
    /// The key may be used
    Enabled,

    /// The key is kept for bookkeeping but should not be used
    Disabled,
}

/// One (prefix, primitive, status) entry of a primitive set
pub struct Entry {
    primitive: Primitive,
    key_id: u32,
    status: KeyStatus,
    prefix: Vec<u8>,
    prefix_type: OutputPrefixType,
}

impl Entry {
    /// The materialized primitive instance
    pub fn primitive(&self) -> &Primitive {
        &self.primitive
    }

    /// Identifier of the originating key, for diagnostics only
    pub fn key_id(&self) -> u32 {
        self.key_id
    }

    /// Status of the originating key
    pub fn status(&self) -> KeyStatus {
        self.status
    }

    /// Output prefix of the originating key; empty for RAW keys
    pub fn prefix(&self) -> &[u8] {
        &self.prefix
    }

    /// Output-prefix classification of the originating key
    pub fn prefix_type(&self) -> OutputPrefixType {
        self.prefix_type
    }
}

/// Ordered collection of primitives for one category
pub struct PrimitiveSet {
    category: PrimitiveCategory,
    entries: HashMap<Vec<u8>, Vec<Arc<Entry>>>,
    primary: Option<Arc<Entry>>,
}

impl PrimitiveSet {
    /// Create an empty set for the given category
    pub fn new(category: PrimitiveCategory) -> Self {
        Self {
            category,
            entries: HashMap::new(),
            primary: None,
        }
    }

    /// The primitive category of every entry in this set
    pub fn primitive_category(&self) -> PrimitiveCategory {
        self.category
    }

    /// Add a primitive materialized from the key with the given metadata.
    ///
    /// The entry's output prefix is computed from `prefix_type` and
    /// `key_id`. Fails if the primitive's category does not match the
    /// set's category.
    pub fn add_primitive(
        &mut self,
        primitive: Primitive,
        key_id: u32,
        status: KeyStatus,
        prefix_type: OutputPrefixType,
    ) -> Result<Arc<Entry>> {
        if primitive.category() != self.category {
            return Err(Error::TypeMismatch {
                expected: self.category,
                actual: primitive.category(),
            });
        }

        let prefix = output_prefix(prefix_type, key_id);
        let entry = Arc::new(Entry {
            primitive,
            key_id,
            status,
            prefix: prefix.clone(),
            prefix_type,
        });
        self.entries.entry(prefix).or_default().push(entry.clone());
        Ok(entry)
    }

    /// Mark an entry of this set as the primary entry.
    ///
    /// Encryption-style wrapped primitives route every operation to the
    /// primary. Fails if the entry was not added to this set.
    pub fn set_primary(&mut self, entry: Arc<Entry>) -> Result<()> {
        let known = self
            .entries
            .get(entry.prefix())
            .is_some_and(|bucket| bucket.iter().any(|e| Arc::ptr_eq(e, &entry)));
        if !known {
            return Err(Error::InvalidArgument(
                "primary entry does not belong to this primitive set".to_string(),
            ));
        }
        self.primary = Some(entry);
        Ok(())
    }

    /// The primary entry, if one was set
    pub fn primary(&self) -> Option<&Arc<Entry>> {
        self.primary.as_ref()
    }

    /// All entries whose output prefix equals `prefix`, in insertion order
    pub fn entries_for_prefix(&self, prefix: &[u8]) -> &[Arc<Entry>] {
        self.entries.get(prefix).map(Vec::as_slice).unwrap_or(&[])
    }

    /// All RAW entries, in insertion order
    pub fn raw_entries(&self) -> &[Arc<Entry>] {
        self.entries_for_prefix(RAW_PREFIX)
    }
}
