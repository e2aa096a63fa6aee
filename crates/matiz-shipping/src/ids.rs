//! Newtype IDs for type-safe identifiers.
//!
//! Using newtypes prevents accidentally mixing up different ID types,
//! e.g., passing a raw postal-code string where a zone ID is expected.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Macro to generate newtype ID structs.
macro_rules! define_id {
    ($name:ident) => {
        /// A unique identifier.
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub struct $name(String);

        impl $name {
            /// Create a new ID from a string.
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Get the ID as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consume and return the inner string.
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_string())
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

// Zone IDs are assigned by the admin tooling that authors the catalog,
// so there is no generated-ID variant here.
define_id!(ZoneId);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_creation() {
        let id = ZoneId::new("cdmx-centro");
        assert_eq!(id.as_str(), "cdmx-centro");
    }

    #[test]
    fn test_id_from_string() {
        let id: ZoneId = "norte".into();
        assert_eq!(id.as_str(), "norte");
    }

    #[test]
    fn test_id_display() {
        let id = ZoneId::new("bajio");
        assert_eq!(format!("{}", id), "bajio");
    }

    #[test]
    fn test_id_equality() {
        let id1 = ZoneId::new("same");
        let id2 = ZoneId::new("same");
        let id3 = ZoneId::new("different");

        assert_eq!(id1, id2);
        assert_ne!(id1, id3);
    }
}
