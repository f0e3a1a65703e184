use thiserror::Error;

use crate::component::component_id::ComponentId;

/// Errors that can occur during component state operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ComponentError {
    /// Input was absent or not of the expected type
    #[error("Invalid argument to {operation}(): expected {expected}, found {found}")]
    InvalidArgument {
        operation: &'static str,
        expected: &'static str,
        found: &'static str,
    },

    /// Attempted to inherit from the receiving component itself
    #[error("Component {id} cannot inherit from itself")]
    SelfInherit { id: ComponentId },

    /// Inheritance would overwrite a key the receiver already holds
    #[error("Cannot inherit key '{key}': key already exists on the receiving component")]
    KeyConflict { key: String },

    /// Key exists in both the raw and inherited buckets
    #[error("State conflict on key '{key}': key exists in both raw and inherited state")]
    StateConflict { key: String },
}

impl ComponentError {
    pub(crate) fn invalid_table(operation: &'static str, found: &'static str) -> Self {
        ComponentError::InvalidArgument {
            operation,
            expected: "table",
            found,
        }
    }
}
