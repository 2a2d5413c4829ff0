//! 面板数据状态

mod form;
mod list;

pub use form::FormInput;
pub use list::RosterListView;
