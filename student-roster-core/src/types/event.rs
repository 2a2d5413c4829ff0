//! Change notification types

use serde::{Deserialize, Serialize};

use super::RecordKey;

/// What happened to a row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeKind {
    /// A row was inserted at `index`
    Inserted,
    /// The row at `index` changed in place
    Changed,
    /// The row previously at `index` was removed; later rows shifted up by one
    Removed,
}

/// Change event produced by every store mutation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeEvent {
    pub kind: ChangeKind,
    /// Row position at the time of the mutation
    pub index: usize,
    /// Key of the affected record
    pub key: RecordKey,
}

impl ChangeEvent {
    pub const fn inserted(index: usize, key: RecordKey) -> Self {
        Self {
            kind: ChangeKind::Inserted,
            index,
            key,
        }
    }

    pub const fn changed(index: usize, key: RecordKey) -> Self {
        Self {
            kind: ChangeKind::Changed,
            index,
            key,
        }
    }

    pub const fn removed(index: usize, key: RecordKey) -> Self {
        Self {
            kind: ChangeKind::Removed,
            index,
            key,
        }
    }
}
