//! Registry and enumeration errors.

use thiserror::Error;

/// Broad category of a [`RegistryError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A named lookup did not resolve to a state.
    NotFound,

    /// Construction input was malformed.
    InvalidInput,
}

/// Errors that can occur when building or querying a state registry.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum RegistryError {
    #[error("State '{id}' not found in registry")]
    NotFound { id: String },

    #[error("State '{name}' is shadowed by a registry operation. Use .get() or .items() instead")]
    Shadowed { name: String },

    #[error("State id must not be empty")]
    EmptyId,

    #[error("Enumeration constant at position {position} has an empty name")]
    EmptyName { position: usize },

    #[error("Enumeration constant name '{name}' is not a valid identifier")]
    InvalidName { name: String },

    #[error("Enumeration declares '{name}' more than once")]
    DuplicateName { name: String },

    #[error("Constants '{first}' and '{second}' share the scalar value {scalar}")]
    DuplicateScalar {
        scalar: String,
        first: String,
        second: String,
    },

    #[error("Mapping key '{key}' does not match state id '{id}'")]
    KeyMismatch { key: String, id: String },

    #[error("Initial state not specified. Call .initial(constant) before .build()")]
    MissingInitial,
}

impl RegistryError {
    /// Category of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::NotFound { .. } | Self::Shadowed { .. } => ErrorKind::NotFound,
            _ => ErrorKind::InvalidInput,
        }
    }
}
