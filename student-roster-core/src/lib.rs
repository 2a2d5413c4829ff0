//! Student Roster Core Library
//!
//! Provides the list-mutation logic behind the Student Roster screen:
//! - Record store (ordered arena with stable keys)
//! - Selection controller (Idle / Editing state machine)
//! - List binding trait (fine-grained change notifications)
//!
//! This library is platform-independent. The presentation layer implements
//! [`ListBinding`] and feeds user intents into [`SelectionController`].

pub mod error;
pub mod services;
pub mod store;
pub mod traits;
pub mod types;

#[cfg(test)]
mod test_utils;

// Re-export common types
pub use error::{RosterError, RosterResult, ValidationIssue};
pub use services::SelectionController;
pub use store::RecordStore;
pub use traits::ListBinding;
pub use types::{
    ChangeEvent, ChangeKind, FormField, FormState, Record, RecordKey, SelectionState,
};
