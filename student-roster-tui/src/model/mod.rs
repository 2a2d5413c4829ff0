//!
//! src/model/mod.rs
//! Model 层：应用状态定义
//!
//! Model 层是应用状态的 “唯一真相来源”。
//! 所有状态变更都通过 Update 层来触发。
//!
//!
//! 有模块结构：
//!     src/model/mod.rs
//!         mod app;            // 主应用状态
//!         mod focus;          // 焦点状态（Form / List）
//!         mod presentation;   // 展示层适配器（实现 core 的 ListBinding）
//!         pub mod state;      // 表单输入与列表视图状态
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 数据与展示的分离
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     App {
//!         roster: SelectionController,    // core：记录 + 选中状态 + 表单镜像
//!         ui: Presentation,               // TUI：输入框文本、列表行缓存、状态栏
//!     }
//!
//!     Update 层调用 controller 的意图方法时把 &mut app.ui 作为 binding 传入：
//!
//!         app.roster.add(&id, &name, &mut app.ui)
//!             ↓
//!         controller 修改 store，并同步回调 ui.notify_inserted(index)
//!             ↓
//!         ui.list 只让该行失效，随后 sync() 只重新渲染这一行
//!

mod app;
mod focus;
mod presentation;
pub mod state;

pub use app::App;
pub use focus::FocusPanel;
pub use presentation::{Presentation, StatusLevel};
