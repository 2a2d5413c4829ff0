//!
//! app.rs
//! 应用主循环
//!
//!
//! 在应用启动时，App 初始化为：
//!
//! App {
//!     should_quit: false,
//!     roster: SelectionController { store: 空, state: Idle, form: 空 },
//!     ui: Presentation { focus: Form, form: 空, list: 空, status: None },
//!     show_help: false,
//!     config: 从配置文件加载,
//! }
//!
//!
//! 主循环大约每 100 ms 执行一次（取决于有无事件）：
//! loop {
//!     terminal.draw(|f| view::render(&app , f))       // 渲染 UI
//!     if app.should_quit { break }                    // 检查是否应该退出
//!     if let Some(event) = poll_event() {             // 轮询输入，最多等待 100ms
//!         let msg = handle_event(event , &app);           // 翻译为消息
//!         update::update(&mut app , msg)                  // 更新状态并同步列表缓存
//!     }
//! }

use std::time::Duration;

use anyhow::Result;

use crate::event;
use crate::message::AppMessage;
use crate::model::App;
use crate::update;
use crate::util::Term;
use crate::view;

/// 事件轮询超时
const POLL_TIMEOUT: Duration = Duration::from_millis(100);

/// 运行应用主循环
pub fn run(terminal: &mut Term, app: &mut App) -> Result<()> {
    loop {
        // 1. 渲染 UI
        terminal.draw(|frame| {
            view::render(app, frame);
        })?;

        // 2. 检查是否应该退出
        if app.should_quit {
            log::info!("Quit requested with {} students in the roster", app.roster.len());
            break;
        }

        // 3. 轮询事件
        if let Some(event) = event::poll_event(POLL_TIMEOUT)? {
            // 4. 处理事件，获取消息
            let msg = event::handle_event(event, app);
            if msg != AppMessage::Noop {
                log::trace!("Dispatch {msg:?}");
            }

            // 5. 更新状态
            update::update(app, msg);
        }
    }

    Ok(())
}
