//! 展示层适配器
//!
//! 实现 core 的 `ListBinding`：把 controller 推送的行变更、表单填充、
//! 焦点请求和提示消息落到 TUI 的各个状态上。

use student_roster_core::{FormField, ListBinding};

use super::state::{FormInput, RosterListView};
use super::FocusPanel;
use crate::i18n::localize_core_message;

/// 状态栏消息级别
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Warning,
}

/// 状态栏消息
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub text: String,
    pub level: StatusLevel,
}

/// 展示层状态
#[derive(Debug, Default)]
pub struct Presentation {
    /// 当前焦点面板
    pub focus: FocusPanel,
    /// 表单输入
    pub form: FormInput,
    /// 学生列表
    pub list: RosterListView,
    /// 状态栏消息
    pub status: Option<StatusMessage>,
}

impl Presentation {
    pub fn new() -> Self {
        Self::default()
    }

    /// 设置普通状态消息
    pub fn set_status(&mut self, text: impl Into<String>) {
        self.status = Some(StatusMessage {
            text: text.into(),
            level: StatusLevel::Info,
        });
    }

    /// 清除状态消息
    pub fn clear_status(&mut self) {
        self.status = None;
    }
}

impl ListBinding for Presentation {
    fn notify_inserted(&mut self, index: usize) {
        self.list.on_inserted(index);
    }

    fn notify_changed(&mut self, index: usize) {
        self.list.on_changed(index);
    }

    fn notify_removed(&mut self, index: usize) {
        self.list.on_removed(index);
    }

    fn show_message(&mut self, text: &str) {
        self.status = Some(StatusMessage {
            text: localize_core_message(text),
            level: StatusLevel::Warning,
        });
    }

    fn populate_form(&mut self, student_id: &str, name: &str) {
        self.form.fill(student_id, name);
    }

    fn clear_form(&mut self) {
        self.form.clear();
    }

    fn request_focus(&mut self, field: FormField) {
        self.focus = FocusPanel::Form;
        self.form.focused = field;
    }
}
