//! 表单面板更新逻辑
//!
//! Add / Update 按钮把输入框当前的文本交给 controller；
//! 校验失败时 controller 会通过 `show_message` 写入状态栏，这里无需再处理。

use crate::i18n::t;
use crate::message::FormMessage;
use crate::model::App;

/// 处理表单面板消息
pub fn update(app: &mut App, msg: FormMessage) {
    match msg {
        FormMessage::Input(ch) => {
            app.ui.form.input(ch);
        }
        FormMessage::Backspace => {
            app.ui.form.backspace();
        }
        // 只有两个输入框，上下切换等价
        FormMessage::NextField | FormMessage::PrevField => {
            app.ui.form.next_field();
        }
        FormMessage::Clear => {
            app.ui.form.clear();
            app.ui.clear_status();
        }
        FormMessage::Add => handle_add(app),
        FormMessage::Update => handle_update(app),
    }
}

fn handle_add(app: &mut App) {
    let student_id = app.ui.form.student_id.clone();
    let name = app.ui.form.name.clone();

    if let Ok(key) = app.roster.add(&student_id, &name, &mut app.ui) {
        app.ui.list.select_last();
        if let Some(record) = app.roster.store().get_by_key(key) {
            let text = format!("{}: {record}", t().messages.added);
            app.ui.set_status(text);
        }
    }
}

fn handle_update(app: &mut App) {
    // 学号输入框即使被修改也不会提交，只有姓名生效
    let name = app.ui.form.name.clone();

    if let Ok(index) = app.roster.update(&name, &mut app.ui) {
        if let Some(record) = app.roster.store().get(index) {
            let text = format!("{}: {record}", t().messages.updated);
            app.ui.set_status(text);
        }
    }
}
