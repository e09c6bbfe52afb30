/*!
Primitive wrapper capability trait.

A wrapper understands one primitive category and folds a whole primitive
set into a single operational instance of that category. The instance
returned by [`PrimitiveWrapper::wrap`] carries the multi-key selection and
fallback logic for its category.
*/

use std::any::Any;
use std::sync::Arc;

use crate::core::error::Result;
use crate::core::primitive::{Primitive, PrimitiveCategory};
use crate::core::primitive_set::PrimitiveSet;

/// Capability object folding a primitive set into one primitive instance
pub trait PrimitiveWrapper: Send + Sync {
    /// The primitive category this wrapper produces
    fn primitive_category(&self) -> PrimitiveCategory;

    /// Fold `primitives` into a single instance of this wrapper's category.
    ///
    /// Must not mutate the set, and must return a fresh dispatch object on
    /// every call. The returned primitive keeps a shared reference to the
    /// set for its whole lifetime.
    fn wrap(&self, primitives: Arc<PrimitiveSet>) -> Result<Primitive>;

    /// Upcast used by the registry to detect conflicting re-registrations
    fn as_any(&self) -> &dyn Any;
}
