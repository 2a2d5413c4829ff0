//!
//! src/event/mod.rs
//! Event 层：事件处理
//!
//! 负责将键盘输入事件转换为 Message。
//!
//!
//! 有模块结构：
//!     src/event/mod.rs
//!         mod handler;        // 事件处理器
//!         mod keymap;         // 快捷键映射
//!
//!         pub use handler::{handle_event , poll_event};
//!
//!
//!     其中有：
//!         · poll_event      事件轮询，受 ~/app.rs 调用，最长阻塞 timeout
//!         · handle_event    把原始事件翻译成 AppMessage
//!
//!
//!     按键的解释取决于当前状态：
//!         · 帮助弹窗打开时，只响应关闭与强制退出
//!         · 焦点在表单时，可打印字符写入输入框
//!         · 焦点在列表时，字符被当作快捷键（j / k / q / ?）
//!

mod handler;
mod keymap;

pub use handler::{handle_event, poll_event};
