//! List view binding Trait

use crate::types::{ChangeEvent, ChangeKind, FormField};

/// Push interface the presentation layer implements
///
/// The controller calls these synchronously after each mutation, so the view can
/// re-render exactly the affected row instead of refreshing the whole list.
///
/// Platform implementation:
/// - TUI: `Presentation` (ratatui list + two text inputs)
pub trait ListBinding {
    /// A row was inserted at `index`
    fn notify_inserted(&mut self, index: usize);

    /// The row at `index` changed in place
    fn notify_changed(&mut self, index: usize);

    /// The row at `index` was removed
    fn notify_removed(&mut self, index: usize);

    /// Surface a validation failure to the user
    fn show_message(&mut self, text: &str);

    /// Load a selected record into the form
    ///
    /// # Arguments
    /// * `student_id` - Student identifier
    /// * `name` - Display name
    fn populate_form(&mut self, student_id: &str, name: &str);

    /// Empty both form fields
    fn clear_form(&mut self);

    /// Move input focus to `field`
    fn request_focus(&mut self, field: FormField);

    /// Dispatch a store change event to the matching `notify_*` method.
    fn apply(&mut self, event: &ChangeEvent) {
        match event.kind {
            ChangeKind::Inserted => self.notify_inserted(event.index),
            ChangeKind::Changed => self.notify_changed(event.index),
            ChangeKind::Removed => self.notify_removed(event.index),
        }
    }
}
