//! Student record types

use serde::{Deserialize, Serialize};

/// Stable handle assigned by the store at insertion time.
///
/// Keys increase monotonically and are never reused by the same store, so a key
/// held after its record was removed simply stops resolving.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordKey(u64);

impl RecordKey {
    /// Wrap a raw key value
    #[must_use]
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Raw key value
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for RecordKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A student entry
///
/// Equality is structural: two records are equal iff both fields are equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Record {
    /// Student identifier (user supplied, uniqueness not enforced)
    #[serde(rename = "studentId")]
    pub student_id: String,
    /// Display name
    pub name: String,
}

impl Record {
    /// Create a record
    pub fn new(student_id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            student_id: student_id.into(),
            name: name.into(),
        }
    }
}

impl std::fmt::Display for Record {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.student_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_structural_equality() {
        assert_eq!(Record::new("SV01", "Alice"), Record::new("SV01", "Alice"));
        assert_ne!(Record::new("SV01", "Alice"), Record::new("SV01", "Alicia"));
        assert_ne!(Record::new("SV01", "Alice"), Record::new("SV02", "Alice"));
    }

    #[test]
    fn test_record_serialization() {
        let json = serde_json::to_value(Record::new("SV01", "Alice")).unwrap();
        assert_eq!(json["studentId"], "SV01");
        assert_eq!(json["name"], "Alice");
    }

    #[test]
    fn test_key_display() {
        assert_eq!(RecordKey::new(12).to_string(), "#12");
    }
}
