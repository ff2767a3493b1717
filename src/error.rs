use thiserror::Error;

/// Errors that can occur when using AttrMap
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AttrError {
    /// Member-style access was attempted for a name that matches no key
    /// in either key space on the accessed instance
    #[error("no attribute accessor for `{0}`")]
    UnknownAttr(String),
    /// The requested key was not found in the map
    #[error("key not found: {0}")]
    KeyNotFound(String),
}
