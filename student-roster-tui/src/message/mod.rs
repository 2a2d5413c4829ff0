//!
//! src/message/mod.rs
//! Message 层：事件消息定义
//!
//! 作为 Event → Update 之间的桥梁。
//! 所有的用户操作都通过 Message 来表达，Update 层根据 Message 来更新 Model。
//!
//!
//! 有模块结构：
//!     src/message/mod.rs
//!         mod app;            // 主消息 AppMessage
//!         mod form;           // 表单面板子消息
//!         mod list;           // 列表面板子消息
//!

mod app;
mod form;
mod list;

pub use app::AppMessage;
pub use form::FormMessage;
pub use list::ListMessage;
