//! 事件处理器

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::event::keymap::DefaultKeymap;
use crate::message::{AppMessage, FormMessage, ListMessage};
use crate::model::App;

/// 轮询事件
pub fn poll_event(timeout: Duration) -> Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// 处理事件，返回对应的消息
pub fn handle_event(event: Event, app: &App) -> AppMessage {
    match event {
        Event::Key(key_event) => handle_key_event(key_event, app),
        // 终端窗口大小改变时下一轮自动重绘
        _ => AppMessage::Noop,
    }
}

/// 处理键盘事件
fn handle_key_event(key: KeyEvent, app: &App) -> AppMessage {
    // 只处理 Press 事件，忽略 Release 和 Repeat
    // 避免 Windows 终端上按键重复
    if key.kind != KeyEventKind::Press {
        return AppMessage::Noop;
    }

    if DefaultKeymap::FORCE_QUIT.matches(&key) {
        return AppMessage::Quit;
    }

    if app.show_help {
        return handle_help_keys(key);
    }

    // 全局快捷键（无论焦点在哪里）
    if DefaultKeymap::QUIT.matches(&key) {
        return AppMessage::Quit;
    }
    if DefaultKeymap::HELP.matches(&key) {
        return AppMessage::ShowHelp;
    }
    if DefaultKeymap::LANGUAGE.matches(&key) {
        return AppMessage::ToggleLanguage;
    }
    if DefaultKeymap::THEME.matches(&key) {
        return AppMessage::ToggleTheme;
    }
    if DefaultKeymap::SWITCH_PANEL.matches(&key) {
        return AppMessage::ToggleFocus;
    }

    // 根据焦点位置处理按键
    if app.ui.focus.is_form() {
        handle_form_keys(key, app)
    } else {
        handle_list_keys(key)
    }
}

/// 帮助弹窗只响应关闭按键
fn handle_help_keys(key: KeyEvent) -> AppMessage {
    match key.code {
        KeyCode::Esc | KeyCode::Enter | KeyCode::Char('?') => AppMessage::CloseHelp,
        _ => AppMessage::Noop,
    }
}

/// 处理表单面板的按键
fn handle_form_keys(key: KeyEvent, app: &App) -> AppMessage {
    if DefaultKeymap::ACTION_ADD.matches(&key) {
        return AppMessage::Form(FormMessage::Add);
    }
    if DefaultKeymap::ACTION_UPDATE.matches(&key) {
        return AppMessage::Form(FormMessage::Update);
    }

    match key.code {
        // ↓ / ↑ / Shift+Tab: 切换输入框
        KeyCode::Down => AppMessage::Form(FormMessage::NextField),
        KeyCode::Up | KeyCode::BackTab => AppMessage::Form(FormMessage::PrevField),

        // Enter: 编辑中则更新，否则新增
        KeyCode::Enter => {
            if app.roster.state().is_editing() {
                AppMessage::Form(FormMessage::Update)
            } else {
                AppMessage::Form(FormMessage::Add)
            }
        }

        // Esc: 清空输入框
        KeyCode::Esc => AppMessage::Form(FormMessage::Clear),

        KeyCode::Backspace => AppMessage::Form(FormMessage::Backspace),

        // 字符输入（允许 Shift 输入大写字母）
        KeyCode::Char(ch)
            if key.modifiers.is_empty() || key.modifiers == KeyModifiers::SHIFT =>
        {
            AppMessage::Form(FormMessage::Input(ch))
        }

        _ => AppMessage::Noop,
    }
}

/// 处理列表面板的按键
fn handle_list_keys(key: KeyEvent) -> AppMessage {
    if DefaultKeymap::LIST_QUIT.matches(&key) {
        return AppMessage::Quit;
    }
    if DefaultKeymap::LIST_HELP.matches(&key)
        || (key.modifiers == KeyModifiers::SHIFT && key.code == KeyCode::Char('?'))
    {
        return AppMessage::ShowHelp;
    }
    if DefaultKeymap::ACTION_DELETE.matches(&key) {
        return AppMessage::List(ListMessage::Delete);
    }

    match key.code {
        // ↑ 或 k: 上一项
        KeyCode::Up | KeyCode::Char('k') => AppMessage::List(ListMessage::SelectPrevious),
        // ↓ 或 j: 下一项
        KeyCode::Down | KeyCode::Char('j') => AppMessage::List(ListMessage::SelectNext),
        // Home: 跳到第一项
        KeyCode::Home => AppMessage::List(ListMessage::SelectFirst),
        // End: 跳到最后一项
        KeyCode::End => AppMessage::List(ListMessage::SelectLast),
        // Enter: 载入表单编辑
        KeyCode::Enter => AppMessage::List(ListMessage::Open),
        // Delete: 删除当前行
        KeyCode::Delete => AppMessage::List(ListMessage::Delete),
        // Esc: 清除状态消息（表单中 Esc 用于清空输入框）
        KeyCode::Esc => AppMessage::ClearStatus,
        _ => AppMessage::Noop,
    }
}
