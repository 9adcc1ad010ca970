//! Provides the error type used throughout this crate.
//!
//! Traversals themselves cannot fail; errors only arise when building a
//! tree from markup or when writing the traversal output.

use thiserror::Error;

/// The error type used throughout this crate
#[derive(Error, Debug)]
pub enum TreewalkError {
    #[error("Element <{element}> at {position} has no `{attribute}` attribute")]
    MissingAttribute {
        attribute: &'static str,
        element: String,
        position: String,
    },
    #[error("Failed to write traversal output: {0}")]
    Io(#[from] std::io::Error),
    // Errors specific to the markup backend
    #[cfg(feature = "document")]
    #[error("Error raised by `roxmltree`: {0}")]
    Markup(#[from] roxmltree::Error),
}
