//! Selection controller
//!
//! Orchestrates add / select / update / delete intents against the record store
//! and keeps the single "currently selected record" in sync with the edit form.
//!
//! State machine:
//! - `Idle` --select--> `Editing { key }`
//! - `Editing` --update ok--> `Idle`
//! - `Editing { key }` --delete key--> `Idle`
//! - add never changes the state

use crate::error::{RosterError, RosterResult, ValidationIssue};
use crate::store::RecordStore;
use crate::traits::ListBinding;
use crate::types::{FormField, FormState, Record, RecordKey, SelectionState};

/// Selection controller
#[derive(Debug, Default)]
pub struct SelectionController {
    store: RecordStore,
    state: SelectionState,
    /// Input of the last intent (add, update, select), not a live copy of the
    /// widgets. Keystrokes between intents never reach it.
    form: FormState,
}

impl SelectionController {
    /// Create a controller over an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a record from the two form fields.
    ///
    /// Both values are trimmed; either being empty is a validation failure and
    /// leaves the store untouched. On success the form is cleared and focus goes
    /// back to the student id field. The selection state is not changed.
    pub fn add(
        &mut self,
        student_id: &str,
        name: &str,
        binding: &mut dyn ListBinding,
    ) -> RosterResult<RecordKey> {
        self.form.student_id = student_id.to_string();
        self.form.name = name.to_string();

        let student_id = student_id.trim();
        let name = name.trim();
        if student_id.is_empty() || name.is_empty() {
            return Err(Self::reject(
                RosterError::ValidationError(ValidationIssue::BothFieldsRequired),
                binding,
            ));
        }

        let (key, index) = self.store.append(Record::new(student_id, name));
        log::info!("Added student {student_id} at row {index}");
        self.flush(binding);
        self.reset_form(binding);

        Ok(key)
    }

    /// Commit a new name for the selected record.
    ///
    /// Only the name is persisted; whatever the id field holds is ignored. Returns
    /// the row index that changed.
    pub fn update(&mut self, name: &str, binding: &mut dyn ListBinding) -> RosterResult<usize> {
        self.form.name = name.to_string();

        let Some(key) = self.selected_key() else {
            return Err(Self::reject(RosterError::NoSelection, binding));
        };

        let name = name.trim();
        if name.is_empty() {
            return Err(Self::reject(
                RosterError::ValidationError(ValidationIssue::NameRequired),
                binding,
            ));
        }

        let index = self.store.rename(key, name)?;
        log::info!("Updated student {key} at row {index}");
        self.flush(binding);

        self.state = SelectionState::Idle;
        self.reset_form(binding);

        Ok(index)
    }

    /// Select the row at `index` (row click).
    pub fn select_row(&mut self, index: usize, binding: &mut dyn ListBinding) -> RosterResult<()> {
        let key = self.resolve_index(index)?;
        self.select(key, binding)
    }

    /// Select the record with `key` and load it into the form.
    pub fn select(&mut self, key: RecordKey, binding: &mut dyn ListBinding) -> RosterResult<()> {
        let Some(record) = self.store.get_by_key(key) else {
            return Err(Self::fault(RosterError::RecordNotFound(key)));
        };

        self.form.student_id.clone_from(&record.student_id);
        self.form.name.clone_from(&record.name);
        binding.populate_form(&record.student_id, &record.name);

        log::debug!("Selected student {key}");
        self.state = SelectionState::Editing { key };
        Ok(())
    }

    /// Delete the row at `index` (row delete click).
    pub fn delete_row(
        &mut self,
        index: usize,
        binding: &mut dyn ListBinding,
    ) -> RosterResult<Record> {
        let key = self.resolve_index(index)?;
        self.delete(key, binding)
    }

    /// Delete the record with `key`.
    ///
    /// A key that is already gone is a no-op. Deleting the selected record drops
    /// back to `Idle` and clears the form.
    pub fn delete(&mut self, key: RecordKey, binding: &mut dyn ListBinding) -> RosterResult<Record> {
        let (index, record) = self.store.remove(key).map_err(Self::fault)?;
        log::info!("Deleted student {} from row {index}", record.student_id);
        self.flush(binding);

        if self.state.key() == Some(key) {
            self.state = SelectionState::Idle;
            self.reset_form(binding);
        }

        Ok(record)
    }

    /// Current state
    pub fn state(&self) -> SelectionState {
        self.state
    }

    /// Key of the selected record, if it still resolves
    pub fn selected_key(&self) -> Option<RecordKey> {
        self.state
            .key()
            .filter(|key| self.store.index_of_key(*key).is_some())
    }

    /// The selected record, resolved against the store on each call
    pub fn selected(&self) -> Option<&Record> {
        self.state.key().and_then(|key| self.store.get_by_key(key))
    }

    /// Row index of the selected record
    pub fn selected_index(&self) -> Option<usize> {
        self.state.key().and_then(|key| self.store.index_of_key(key))
    }

    /// Form text as of the last intent. A rejected intent leaves its input here;
    /// a successful add or update clears it.
    pub fn form(&self) -> &FormState {
        &self.form
    }

    /// Read-only view of the store, for rendering
    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// Forward queued store events to the binding.
    fn flush(&mut self, binding: &mut dyn ListBinding) {
        for event in self.store.take_events() {
            binding.apply(&event);
        }
    }

    fn reset_form(&mut self, binding: &mut dyn ListBinding) {
        self.form.clear();
        binding.clear_form();
        binding.request_focus(FormField::StudentId);
    }

    fn resolve_index(&self, index: usize) -> RosterResult<RecordKey> {
        self.store.key_at(index).ok_or_else(|| {
            Self::fault(RosterError::IndexOutOfRange {
                index,
                len: self.store.len(),
            })
        })
    }

    /// User-facing rejection: log and surface the message.
    fn reject(err: RosterError, binding: &mut dyn ListBinding) -> RosterError {
        log::warn!("Intent rejected: {err}");
        if let Some(text) = err.user_message() {
            binding.show_message(text);
        }
        err
    }

    /// Internal consistency fault: log only, state stays as it was.
    fn fault(err: RosterError) -> RosterError {
        log::warn!("Ignoring intent: {err}");
        err
    }
}
