/*!
# PQC Keyset

A keyset abstraction layer for post-quantum hybrid cryptography.

Rather than operating on a single key, every cryptographic operation in this
library runs against a *keyset*: an ordered collection of keys for one
primitive category. A process-wide registry maps key-type identifiers to
[`KeyManager`] capabilities and primitive categories to [`PrimitiveWrapper`]
capabilities; wrapping a keyset yields a single primitive instance whose
operations select among the candidate keys automatically.

## Overview

This library provides:

- A global [`registry`](crate::core::registry) of key managers and primitive
  wrappers, with all consistency rules enforced at registration time
- Output-prefix directed key selection with RAW-key fallback for
  decryption-style primitives
- A hybrid encryption scheme built from CRYSTALS-Kyber encapsulation,
  HKDF-SHA256 and ChaCha20-Poly1305
- Key generation and public-key derivation through the same registry

## Usage

```no_run
use std::sync::Arc;
use pqc_keyset::{
    hybrid, registry,
    KeyStatus, KeyTemplate, OutputPrefixType, PrimitiveCategory, PrimitiveSet,
};

# fn main() -> pqc_keyset::Result<()> {
hybrid::register()?;

// Generate a private key and materialize it into a primitive set.
let template = KeyTemplate::new(
    hybrid::KYBER768_HYBRID_PRIVATE_KEY_TYPE_URL,
    OutputPrefixType::Standard,
);
let key_data = registry::new_key_data(&template)?;
let primitive = registry::primitive(&key_data, PrimitiveCategory::HybridDecrypt)?;

let mut primitives = PrimitiveSet::new(PrimitiveCategory::HybridDecrypt);
primitives.add_primitive(primitive, 1, KeyStatus::Enabled, OutputPrefixType::Standard)?;

// Wrap the set into a single decryptor with multi-key dispatch.
let decryptor = registry::wrap(Arc::new(primitives))?.into_hybrid_decrypt()?;
# let _ = decryptor;
# Ok(())
# }
```
*/

// Core registry, keyset and capability types
pub mod core;

// Hybrid encryption primitives and their key managers
pub mod hybrid;

// Re-export commonly used types for convenience
pub use crate::core::error::{Error, Result};
pub use crate::core::key_data::{
    KeyData, KeyMaterialType, KeyTemplate, OutputPrefixType, output_prefix,
};
pub use crate::core::primitive::{Primitive, PrimitiveCategory};
pub use crate::core::primitive_set::{Entry, KeyStatus, PrimitiveSet};
pub use crate::core::registry;
pub use crate::core::traits::{
    HybridDecrypt, HybridEncrypt, KeyManager, PrimitiveWrapper, PrivateKeyManager,
};
pub use crate::core::constants::NON_RAW_PREFIX_SIZE;
