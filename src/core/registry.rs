/*!
Global registry of key managers and primitive wrappers.

The registry maps key-type identifiers to [`KeyManager`] capabilities and
primitive categories to [`PrimitiveWrapper`] capabilities. It is
initialized at startup and later used to instantiate primitives for given
keys, and to wrap whole primitive sets into single multi-key instances.

Keeping the managers for all primitives in a single registry, rather than
one registry per primitive, allows compound primitives to be assembled
from simple ones. All consistency rules are enforced at registration
time, so a manager or wrapper that was accepted can always be invoked.

The process-wide instance behind the module-level functions is guarded by
a reader-writer lock: lookups take a shared read guard, registrations and
[`reset`] take the write guard. No operation holds the lock across I/O.
*/

use std::collections::HashMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use once_cell::sync::Lazy;

use crate::core::error::{Error, Result};
use crate::core::key_data::{KeyData, KeyMaterialType, KeyTemplate};
use crate::core::primitive::{Primitive, PrimitiveCategory};
use crate::core::primitive_set::PrimitiveSet;
use crate::core::traits::{KeyManager, PrimitiveWrapper};

struct KeyManagerEntry {
    manager: Arc<dyn KeyManager>,
    new_key_allowed: bool,
}

/// Registry of key managers and primitive wrappers.
///
/// Most callers use the process-wide instance through the module-level
/// functions; a standalone `Registry` is useful for tests that must not
/// observe global state.
pub struct Registry {
    key_managers: HashMap<String, KeyManagerEntry>,
    wrappers: HashMap<PrimitiveCategory, Arc<dyn PrimitiveWrapper>>,
}

impl Registry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self {
            key_managers: HashMap::new(),
            wrappers: HashMap::new(),
        }
    }

    /// Clear both tables
    pub fn reset(&mut self) {
        self.key_managers.clear();
        self.wrappers.clear();
    }

    fn key_manager_entry(&self, type_url: &str) -> Result<&KeyManagerEntry> {
        self.key_managers.get(type_url).ok_or_else(|| {
            Error::NotFound(format!("no manager for type {type_url} has been registered"))
        })
    }

    /// Register a key manager for its declared key type.
    ///
    /// If `new_key_allowed` is true, callers can generate new keys with
    /// this manager through [`Registry::new_key_data`]. Re-registering the
    /// same manager implementation for the same type updates the flag in
    /// place; the flag can only ever be downgraded, never restored to
    /// `true` once forbidden.
    pub fn register_key_manager(
        &mut self,
        manager: Arc<dyn KeyManager>,
        new_key_allowed: bool,
    ) -> Result<()> {
        let type_url = manager.key_type().to_string();

        if !manager.does_support(&type_url) {
            return Err(Error::Configuration(format!(
                "the manager does not support its own type {type_url}"
            )));
        }

        match self.key_managers.get_mut(&type_url) {
            Some(existing) => {
                if existing.manager.as_any().type_id() != manager.as_any().type_id()
                    || existing.manager.primitive_category() != manager.primitive_category()
                {
                    return Err(Error::Configuration(format!(
                        "a manager for type {type_url} has already been registered"
                    )));
                }
                if !existing.new_key_allowed && new_key_allowed {
                    return Err(Error::Configuration(format!(
                        "a manager for type {type_url} has already been registered \
                         with forbidden new key operation"
                    )));
                }
                // The originally registered instance stays bound; only the
                // permission flag is updated.
                existing.new_key_allowed = new_key_allowed;
            }
            None => {
                self.key_managers.insert(
                    type_url,
                    KeyManagerEntry {
                        manager,
                        new_key_allowed,
                    },
                );
            }
        }
        Ok(())
    }

    /// Look up the manager bound to the given key type
    pub fn key_manager(&self, type_url: &str) -> Result<Arc<dyn KeyManager>> {
        Ok(self.key_manager_entry(type_url)?.manager.clone())
    }

    /// Instantiate a primitive of the expected category from `key_data`.
    ///
    /// Resolves the manager for `key_data`'s type and delegates to it once
    /// the manager's declared category matches `category`.
    pub fn primitive(&self, key_data: &KeyData, category: PrimitiveCategory) -> Result<Primitive> {
        let manager = self.key_manager(&key_data.type_url)?;
        if manager.primitive_category() != category {
            return Err(Error::TypeMismatch {
                expected: category,
                actual: manager.primitive_category(),
            });
        }
        manager.primitive(key_data)
    }

    /// Generate new key data for the given template
    pub fn new_key_data(&self, key_template: &KeyTemplate) -> Result<KeyData> {
        let entry = self.key_manager_entry(&key_template.type_url)?;
        if !entry.new_key_allowed {
            return Err(Error::Permission(format!(
                "manager for type {} does not allow for creation of new keys",
                key_template.type_url
            )));
        }
        entry.manager.new_key_data(key_template)
    }

    /// Derive the public key data of an asymmetric private key
    pub fn public_key_data(&self, private_key_data: &KeyData) -> Result<KeyData> {
        if private_key_data.key_material_type != KeyMaterialType::AsymmetricPrivate {
            return Err(Error::InvalidArgument(
                "the key data does not hold an asymmetric private key".to_string(),
            ));
        }
        let manager = self.key_manager(&private_key_data.type_url)?;
        let private = manager.as_private().ok_or_else(|| {
            Error::Capability(format!(
                "manager for key type {} cannot derive public key data",
                private_key_data.type_url
            ))
        })?;
        private.public_key_data(private_key_data)
    }

    /// Register a primitive wrapper for its declared category.
    ///
    /// A freshly registered wrapper is sanity-checked by wrapping an empty
    /// primitive set of its category: registration fails unless the result
    /// is an instance of that category. This fails malformed wrappers fast,
    /// before they can ever be invoked on real key material.
    pub fn register_primitive_wrapper(&mut self, wrapper: Arc<dyn PrimitiveWrapper>) -> Result<()> {
        let category = wrapper.primitive_category();

        if let Some(existing) = self.wrappers.get(&category) {
            if existing.as_any().type_id() != wrapper.as_any().type_id() {
                return Err(Error::Configuration(format!(
                    "a wrapper for primitive category {category} has already been added"
                )));
            }
        }

        let wrapped = wrapper
            .wrap(Arc::new(PrimitiveSet::new(category)))
            .map_err(|e| {
                Error::Configuration(format!(
                    "wrapper for primitive category {category} failed on an empty set: {e}"
                ))
            })?;
        if wrapped.category() != category {
            return Err(Error::Configuration(format!(
                "wrapper for primitive category {category} generates an incompatible \
                 primitive of category {}",
                wrapped.category()
            )));
        }

        self.wrappers.insert(category, wrapper);
        Ok(())
    }

    /// Wrap a primitive set into a single primitive with multi-key dispatch
    pub fn wrap(&self, primitives: Arc<PrimitiveSet>) -> Result<Primitive> {
        let category = primitives.primitive_category();
        let wrapper = self.wrappers.get(&category).ok_or_else(|| {
            Error::NotFound(format!(
                "no primitive wrapper registered for category {category}"
            ))
        })?;
        wrapper.wrap(primitives)
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

// Process-wide registry instance
static REGISTRY: Lazy<RwLock<Registry>> = Lazy::new(|| RwLock::new(Registry::new()));

// Nothing panics while the lock is held, so poisoning can only be caused by
// a panicking test elsewhere in the process; recover the guard so the
// registry stays usable.
fn read() -> RwLockReadGuard<'static, Registry> {
    REGISTRY.read().unwrap_or_else(|e| e.into_inner())
}

fn write() -> RwLockWriteGuard<'static, Registry> {
    REGISTRY.write().unwrap_or_else(|e| e.into_inner())
}

// Public API over the process-wide instance

/// Reset the global registry.
///
/// Intended for test isolation. Not safe to call while cryptographic
/// operations relying on previously resolved managers are in flight.
pub fn reset() {
    write().reset()
}

/// Register a key manager in the global registry.
///
/// See [`Registry::register_key_manager`].
pub fn register_key_manager(manager: Arc<dyn KeyManager>, new_key_allowed: bool) -> Result<()> {
    write().register_key_manager(manager, new_key_allowed)
}

/// Look up the key manager bound to the given key type
pub fn key_manager(type_url: &str) -> Result<Arc<dyn KeyManager>> {
    read().key_manager(type_url)
}

/// Instantiate a primitive of the expected category from `key_data`
pub fn primitive(key_data: &KeyData, category: PrimitiveCategory) -> Result<Primitive> {
    read().primitive(key_data, category)
}

/// Generate new key data for the given template
pub fn new_key_data(key_template: &KeyTemplate) -> Result<KeyData> {
    read().new_key_data(key_template)
}

/// Derive the public key data of an asymmetric private key
pub fn public_key_data(private_key_data: &KeyData) -> Result<KeyData> {
    read().public_key_data(private_key_data)
}

/// Register a primitive wrapper in the global registry.
///
/// See [`Registry::register_primitive_wrapper`].
pub fn register_primitive_wrapper(wrapper: Arc<dyn PrimitiveWrapper>) -> Result<()> {
    write().register_primitive_wrapper(wrapper)
}

/// Wrap a primitive set using the wrapper registered for its category
pub fn wrap(primitives: Arc<PrimitiveSet>) -> Result<Primitive> {
    read().wrap(primitives)
}
