//! Presentation layer abstraction trait definition

mod list_binding;

pub use list_binding::ListBinding;
