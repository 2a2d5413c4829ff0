//! Type definition module

mod event;
mod form;
mod record;

pub use event::{ChangeEvent, ChangeKind};
pub use form::{FormField, FormState, SelectionState};
pub use record::{Record, RecordKey};
