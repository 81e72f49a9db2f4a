//! Catalog error handling
//!
//! Bookmark queries and mutations cannot fail; only reading restaurant data
//! from the catalog can.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

use crate::models::RestaurantId;

/// Errors that can occur while loading a catalog
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Failed to read the catalog file
    #[error("Failed to read catalog '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Catalog content is not valid restaurant JSON
    #[error("Invalid catalog format: {0}")]
    InvalidFormat(#[from] serde_json::Error),

    /// Two entries share an identifier
    #[error("Duplicate restaurant id '{0}' in catalog")]
    DuplicateId(RestaurantId),

    /// An entry has an empty identifier
    #[error("Restaurant at position {index} has an empty id")]
    EmptyId { index: usize },
}

impl CatalogError {
    /// Get a recovery suggestion for this error
    pub fn recovery_suggestion(&self) -> Option<&'static str> {
        match self {
            CatalogError::Read { source, .. } if source.kind() == io::ErrorKind::NotFound => {
                Some("Pass an existing file with --catalog or set catalog_path in the config.")
            }
            CatalogError::InvalidFormat(_) => {
                Some("The catalog must be a JSON array of restaurants with id, name, images.poster, distance, time, rating and reviewCount.")
            }
            CatalogError::DuplicateId(_) | CatalogError::EmptyId { .. } => {
                Some("Every restaurant needs a unique, non-empty id.")
            }
            _ => None,
        }
    }
}

/// Result type for catalog operations
pub type CatalogResult<T> = Result<T, CatalogError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_not_found_has_suggestion() {
        let err = CatalogError::Read {
            path: PathBuf::from("/missing/catalog.json"),
            source: io::Error::new(io::ErrorKind::NotFound, "no such file"),
        };

        assert!(err.to_string().contains("/missing/catalog.json"));
        assert!(err.recovery_suggestion().is_some());
    }

    #[test]
    fn test_read_permission_has_no_suggestion() {
        let err = CatalogError::Read {
            path: PathBuf::from("/locked"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };
        assert!(err.recovery_suggestion().is_none());
    }

    #[test]
    fn test_duplicate_display() {
        let err = CatalogError::DuplicateId(RestaurantId::from("r1"));
        assert_eq!(err.to_string(), "Duplicate restaurant id 'r1' in catalog");
    }

    #[test]
    fn test_from_json_error() {
        let json_err = serde_json::from_str::<Vec<u8>>("not json").unwrap_err();
        let err: CatalogError = json_err.into();
        assert!(matches!(err, CatalogError::InvalidFormat(_)));
        assert!(err.to_string().starts_with("Invalid catalog format"));
    }
}
