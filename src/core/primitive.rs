/*!
Primitive categories and boxed primitive instances.

The registry dispatches on an explicit category tag rather than on runtime
type identities: every key manager and wrapper declares the category it
serves, and the categories of a wrapped primitive and its backing set are
compared by equality.
*/

use std::fmt;

use crate::core::error::{Error, Result};
use crate::core::traits::{HybridDecrypt, HybridEncrypt};

/// Category tag identifying one family of cryptographic operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimitiveCategory {
    /// Decryption half of a hybrid encryption scheme
    HybridDecrypt,

    /// Encryption half of a hybrid encryption scheme
    HybridEncrypt,
}

impl fmt::Display for PrimitiveCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PrimitiveCategory::HybridDecrypt => write!(f, "hybrid decryption"),
            PrimitiveCategory::HybridEncrypt => write!(f, "hybrid encryption"),
        }
    }
}

/// A materialized primitive instance of one category
pub enum Primitive {
    /// A hybrid decryption instance
    HybridDecrypt(Box<dyn HybridDecrypt>),

    /// A hybrid encryption instance
    HybridEncrypt(Box<dyn HybridEncrypt>),
}

impl Primitive {
    /// The category this instance belongs to
    pub fn category(&self) -> PrimitiveCategory {
        match self {
            Primitive::HybridDecrypt(_) => PrimitiveCategory::HybridDecrypt,
            Primitive::HybridEncrypt(_) => PrimitiveCategory::HybridEncrypt,
        }
    }

    /// Borrow the hybrid decryption instance, if this is one
    pub fn as_hybrid_decrypt(&self) -> Option<&dyn HybridDecrypt> {
        match self {
            Primitive::HybridDecrypt(p) => Some(p.as_ref()),
            _ => None,
        }
    }

    /// Borrow the hybrid encryption instance, if this is one
    pub fn as_hybrid_encrypt(&self) -> Option<&dyn HybridEncrypt> {
        match self {
            Primitive::HybridEncrypt(p) => Some(p.as_ref()),
            _ => None,
        }
    }

    /// Convert into a hybrid decryption instance
    pub fn into_hybrid_decrypt(self) -> Result<Box<dyn HybridDecrypt>> {
        match self {
            Primitive::HybridDecrypt(p) => Ok(p),
            other => Err(Error::TypeMismatch {
                expected: PrimitiveCategory::HybridDecrypt,
                actual: other.category(),
            }),
        }
    }

    /// Convert into a hybrid encryption instance
    pub fn into_hybrid_encrypt(self) -> Result<Box<dyn HybridEncrypt>> {
        match self {
            Primitive::HybridEncrypt(p) => Ok(p),
            other => Err(Error::TypeMismatch {
                expected: PrimitiveCategory::HybridEncrypt,
                actual: other.category(),
            }),
        }
    }
}

impl fmt::Debug for Primitive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Primitive({})", self.category())
    }
}
