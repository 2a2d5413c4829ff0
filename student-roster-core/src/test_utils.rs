//! 测试辅助模块
//!
//! 提供 mock 实现，记录 controller 对展示层的每一次调用。

use crate::traits::ListBinding;
use crate::types::FormField;

/// 一次 binding 调用
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BindingCall {
    Inserted(usize),
    Changed(usize),
    Removed(usize),
    ShowMessage(String),
    PopulateForm(String, String),
    ClearForm,
    Focus(FormField),
}

// ===== RecordingBinding =====

#[derive(Debug, Default)]
pub struct RecordingBinding {
    pub calls: Vec<BindingCall>,
}

impl RecordingBinding {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ListBinding for RecordingBinding {
    fn notify_inserted(&mut self, index: usize) {
        self.calls.push(BindingCall::Inserted(index));
    }

    fn notify_changed(&mut self, index: usize) {
        self.calls.push(BindingCall::Changed(index));
    }

    fn notify_removed(&mut self, index: usize) {
        self.calls.push(BindingCall::Removed(index));
    }

    fn show_message(&mut self, text: &str) {
        self.calls.push(BindingCall::ShowMessage(text.to_string()));
    }

    fn populate_form(&mut self, student_id: &str, name: &str) {
        self.calls
            .push(BindingCall::PopulateForm(student_id.to_string(), name.to_string()));
    }

    fn clear_form(&mut self) {
        self.calls.push(BindingCall::ClearForm);
    }

    fn request_focus(&mut self, field: FormField) {
        self.calls.push(BindingCall::Focus(field));
    }
}
