//! Business logic service layer

mod selection_controller;

pub use selection_controller::SelectionController;
