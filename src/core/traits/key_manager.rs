/*!
Key manager capability traits.

A key manager understands exactly one key type: it can validate key data of
that type, instantiate a primitive from it, and optionally generate new
keys. Managers for asymmetric private keys additionally expose derivation
of the public counterpart through [`PrivateKeyManager`].
*/

use std::any::Any;

use crate::core::error::Result;
use crate::core::key_data::{KeyData, KeyTemplate};
use crate::core::primitive::{Primitive, PrimitiveCategory};

/// Capability object understanding one key type
pub trait KeyManager: Send + Sync {
    /// The key-type identifier this manager understands
    fn key_type(&self) -> &'static str;

    /// The primitive category this manager's keys materialize into
    fn primitive_category(&self) -> PrimitiveCategory;

    /// Whether this manager understands the given key type
    fn does_support(&self, type_url: &str) -> bool {
        type_url == self.key_type()
    }

    /// Instantiate a primitive from the given key data.
    ///
    /// Fails with [`Error::KeyParsing`](crate::Error::KeyParsing) on
    /// malformed key material.
    fn primitive(&self, key_data: &KeyData) -> Result<Primitive>;

    /// Generate new key data for the given template.
    ///
    /// Fails with
    /// [`Error::UnsupportedParameters`](crate::Error::UnsupportedParameters)
    /// if the template is invalid for this manager.
    fn new_key_data(&self, key_template: &KeyTemplate) -> Result<KeyData>;

    /// The private-key capability of this manager, if it has one
    fn as_private(&self) -> Option<&dyn PrivateKeyManager> {
        None
    }

    /// Upcast used by the registry to detect conflicting re-registrations
    fn as_any(&self) -> &dyn Any;
}

/// Additional capability of managers for asymmetric private keys
pub trait PrivateKeyManager: KeyManager {
    /// Derive the key data of the public counterpart of a private key
    fn public_key_data(&self, private_key_data: &KeyData) -> Result<KeyData>;
}
