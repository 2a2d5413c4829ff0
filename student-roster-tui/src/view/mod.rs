//!
//! src/view/mod.rs
//! View 层：UI 渲染
//!
//! 只读取 Model，不修改任何状态。
//!
//!
//! 有模块结构：
//!     src/view/mod.rs
//!         mod layout;         // 主布局：标题栏 + 表单 + 列表 + 状态栏
//!         mod components;     // 表单面板、状态栏、帮助弹窗
//!         mod pages;          // 学生列表
//!         pub mod theme;      // 主题与样式
//!

mod components;
mod layout;
mod pages;
pub mod theme;

pub use layout::render;
