//! Error types for block operations
//!
//! The core operations (detect, extract, segment, generate) never fail; these
//! errors only surface from registry lookups and session edits.

use thiserror::Error;

/// Errors that can occur while looking up templates or editing a session
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BlockError {
    /// Block type not registered
    #[error("Block type '{0}' not found")]
    BlockNotFound(String),
    /// Type name that does not belong to the closed set of block types
    #[error("Unknown block type '{0}'")]
    UnknownType(String),
    /// No component with this id in the session
    #[error("Component '{0}' not found")]
    ComponentNotFound(String),
    /// Reorder index past the end of the list
    #[error("Index {index} is out of range for {len} components")]
    IndexOutOfRange { index: usize, len: usize },
    /// Code save with nothing in it
    #[error("Fragment is empty")]
    EmptyFragment,
}
