//! Edit form mirror and selection state

use serde::{Deserialize, Serialize};

use super::RecordKey;

/// Input field of the edit form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FormField {
    /// Student identifier input
    #[default]
    StudentId,
    /// Name input
    Name,
}

impl FormField {
    /// The other field (two-field form)
    #[must_use]
    pub const fn toggle(self) -> Self {
        match self {
            Self::StudentId => Self::Name,
            Self::Name => Self::StudentId,
        }
    }
}

/// Mirror of the two text inputs
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormState {
    #[serde(rename = "studentId")]
    pub student_id: String,
    pub name: String,
}

impl FormState {
    /// Empty both fields
    pub fn clear(&mut self) {
        self.student_id.clear();
        self.name.clear();
    }

    /// Both fields empty
    pub fn is_empty(&self) -> bool {
        self.student_id.is_empty() && self.name.is_empty()
    }
}

/// Selection controller state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "camelCase")]
pub enum SelectionState {
    /// No record loaded into the form
    #[default]
    Idle,
    /// A record is loaded into the form for editing
    Editing { key: RecordKey },
}

impl SelectionState {
    /// Currently selected key, if any
    pub const fn key(&self) -> Option<RecordKey> {
        match self {
            Self::Idle => None,
            Self::Editing { key } => Some(*key),
        }
    }

    pub const fn is_editing(&self) -> bool {
        matches!(self, Self::Editing { .. })
    }
}
