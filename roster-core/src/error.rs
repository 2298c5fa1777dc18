//! Typed failures of list transitions and configuration.

use thiserror::Error;

use crate::ids::UserId;
use crate::user::UserField;

/// Failures of a list-state transition. A failed transition never leaves
/// the state partially updated.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ListError {
    /// No row carries this id.
    #[error("User not found: {0}")]
    UnknownUser(UserId),

    /// An edit or save reached a row in viewing mode.
    #[error("User {0} is not being edited")]
    NotEditing(UserId),

    /// An edit targeted a field outside [`crate::UserField::EDITABLE`].
    #[error("Field '{0}' cannot be edited")]
    FieldNotEditable(UserField),

    /// Only produced under [`crate::PagePolicy::Reject`].
    #[error("Page {requested} is out of range (1..={total})")]
    PageOutOfRange {
        /// Page asked for.
        requested: usize,
        /// Pages available.
        total: usize,
    },

    /// Bulk delete with an empty selection under
    /// [`crate::EmptySelectionPolicy::Notify`].
    #[error("No rows selected. Please select rows to delete.")]
    EmptySelection,
}

/// Result of a list-state transition.
pub type ListResult<T> = std::result::Result<T, ListError>;

/// Invalid list configuration.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// A page size of 0 was requested.
    #[error("Page size must be at least 1")]
    ZeroPageSize,

    /// A policy name that does not parse.
    #[error("Unknown value '{value}' for {setting}")]
    UnknownValue {
        /// Which setting was being parsed.
        setting: &'static str,
        /// The rejected input, as given.
        value: String,
    },
}
