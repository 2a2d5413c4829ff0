//! 列表面板更新逻辑

use student_roster_core::FormField;

use crate::i18n::t;
use crate::message::ListMessage;
use crate::model::{App, FocusPanel};

/// 处理列表面板消息
pub fn update(app: &mut App, msg: ListMessage) {
    match msg {
        // ========== 列表导航 ==========
        ListMessage::SelectPrevious => app.ui.list.select_previous(),
        ListMessage::SelectNext => app.ui.list.select_next(),
        ListMessage::SelectFirst => app.ui.list.select_first(),
        ListMessage::SelectLast => app.ui.list.select_last(),

        // ========== 行操作 ==========
        ListMessage::Open => handle_open(app),
        ListMessage::Delete => handle_delete(app),
    }
}

fn handle_open(app: &mut App) {
    if app.ui.list.is_empty() {
        return;
    }

    let index = app.ui.list.selected();
    if app.roster.select_row(index, &mut app.ui).is_err() {
        return;
    }

    // 载入后直接编辑姓名
    app.ui.focus = FocusPanel::Form;
    app.ui.form.focused = FormField::Name;

    if let Some(record) = app.roster.selected() {
        let text = format!("{}: {record}", t().messages.editing);
        app.ui.set_status(text);
    }
}

fn handle_delete(app: &mut App) {
    if app.ui.list.is_empty() {
        return;
    }

    let index = app.ui.list.selected();
    if let Ok(record) = app.roster.delete_row(index, &mut app.ui) {
        let text = format!("{}: {record}", t().messages.deleted);
        app.ui.set_status(text);
    }
}
