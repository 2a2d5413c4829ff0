//!
//! src/update/mod.rs
//! Update 层：状态更新逻辑
//!
//! Update 层负责处理 Message，更新 Model 状态。
//! 是唯一可以修改 Model 的地方。
//!
//!
//! 有模块结构：
//!     src/update/mod.rs
//!         mod form;               // 表单面板子消息处理
//!         mod list;               // 列表面板子消息处理
//!
//!         pub fn update(app: &mut App, msg: AppMessage) {...}
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 与 core 的交互
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     记录的增删改全部经由 `app.roster`（SelectionController）完成，
//!     并把 `&mut app.ui` 作为 binding 传入：
//!
//!         app.roster.add(&id, &name, &mut app.ui)
//!
//!     controller 会同步推送行变更、表单填充和提示消息。
//!     每条消息处理完毕后调用 `app.sync_view()`，只重新渲染失效的行。
//!
//!
//! Update 完成后，控制权返回主循环（app.rs）。
//! 下一轮循环时，View 层会读取更新后的 Model 来重新渲染。
//!

mod form;
mod list;

use crate::i18n::{set_language, t};
use crate::message::AppMessage;
use crate::model::App;
use crate::view::theme::set_theme;

/// 处理应用消息，更新状态
pub fn update(app: &mut App, msg: AppMessage) {
    match msg {
        AppMessage::Quit => {
            app.should_quit = true;
        }

        AppMessage::ToggleFocus => {
            // 帮助弹窗打开时不切换焦点
            if !app.show_help {
                app.ui.focus = app.ui.focus.toggle();
            }
        }

        AppMessage::Form(form_msg) => {
            form::update(app, form_msg);
        }

        AppMessage::List(list_msg) => {
            list::update(app, list_msg);
        }

        AppMessage::ShowHelp => {
            app.show_help = true;
        }

        AppMessage::CloseHelp => {
            app.show_help = false;
        }

        AppMessage::ToggleLanguage => {
            let language = app.config.language().next();
            set_language(language);
            app.config.language = language.code().to_string();
            persist_config(app, t().messages.language_changed);
        }

        AppMessage::ToggleTheme => {
            let theme = app.config.theme.toggle();
            set_theme(theme);
            app.config.theme = theme;
            persist_config(app, t().messages.theme_changed);
        }

        AppMessage::ClearStatus => {
            app.ui.clear_status();
        }

        AppMessage::Noop => {}
    }

    app.sync_view();
}

/// 保存配置，失败时只提示，不影响当前会话
fn persist_config(app: &mut App, success: &str) {
    match app.save_config() {
        Ok(()) => app.ui.set_status(success),
        Err(e) => {
            log::error!("Failed to save config: {e:#}");
            app.ui.set_status(t().messages.config_save_failed);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use anyhow::{bail, Result};
    use student_roster_core::{FormField, SelectionState};

    use super::*;
    use crate::backend::{AppConfig, ConfigService};
    use crate::message::{FormMessage, ListMessage};
    use crate::model::{FocusPanel, StatusLevel};
    use crate::view::theme::Theme;

    /// 内存配置服务，记录最后一次保存的配置
    #[derive(Default, Clone)]
    struct MemoryConfigService {
        saved: Rc<RefCell<Option<AppConfig>>>,
        fail: bool,
    }

    impl ConfigService for MemoryConfigService {
        fn load(&self) -> Result<AppConfig> {
            Ok(self.saved.borrow().clone().unwrap_or_default())
        }

        fn save(&self, config: &AppConfig) -> Result<()> {
            if self.fail {
                bail!("disk full");
            }
            *self.saved.borrow_mut() = Some(config.clone());
            Ok(())
        }
    }

    fn new_app() -> App {
        App::new(AppConfig::default(), Box::new(MemoryConfigService::default()))
    }

    fn type_text(app: &mut App, text: &str) {
        for ch in text.chars() {
            update(app, AppMessage::Form(FormMessage::Input(ch)));
        }
    }

    fn add_student(app: &mut App, id: &str, name: &str) {
        app.ui.form.focused = FormField::StudentId;
        type_text(app, id);
        update(app, AppMessage::Form(FormMessage::NextField));
        type_text(app, name);
        update(app, AppMessage::Form(FormMessage::Add));
    }

    fn list_names(app: &App) -> Vec<String> {
        app.ui
            .list
            .rows()
            .map(|row| row.map(|r| r.name.clone()).unwrap_or_default())
            .collect()
    }

    #[test]
    fn test_add_from_form() {
        let mut app = new_app();
        add_student(&mut app, "SV01", "Alice");

        assert_eq!(app.roster.len(), 1);
        assert_eq!(list_names(&app), vec!["Alice"]);
        // 表单清空，焦点回到学号
        assert_eq!(app.ui.form.student_id, "");
        assert_eq!(app.ui.form.name, "");
        assert_eq!(app.ui.form.focused, FormField::StudentId);
        assert_eq!(app.ui.status.as_ref().map(|s| s.level), Some(StatusLevel::Info));
    }

    #[test]
    fn test_add_blank_shows_warning() {
        let mut app = new_app();
        type_text(&mut app, "SV01");
        update(&mut app, AppMessage::Form(FormMessage::Add));

        assert!(app.roster.is_empty());
        assert!(app.ui.list.is_empty());
        assert_eq!(
            app.ui.status.as_ref().map(|s| s.level),
            Some(StatusLevel::Warning)
        );
        // 输入保持不变
        assert_eq!(app.ui.form.student_id, "SV01");
    }

    #[test]
    fn test_open_then_update() {
        let mut app = new_app();
        add_student(&mut app, "SV01", "Alice");
        add_student(&mut app, "SV02", "Bob");

        update(&mut app, AppMessage::ToggleFocus);
        update(&mut app, AppMessage::List(ListMessage::SelectFirst));
        update(&mut app, AppMessage::List(ListMessage::Open));

        assert!(app.roster.state().is_editing());
        assert_eq!(app.ui.focus, FocusPanel::Form);
        assert_eq!(app.ui.form.focused, FormField::Name);
        assert_eq!(app.ui.form.student_id, "SV01");
        assert_eq!(app.ui.form.name, "Alice");

        for _ in 0.."Alice".len() {
            update(&mut app, AppMessage::Form(FormMessage::Backspace));
        }
        type_text(&mut app, "Alicia");
        update(&mut app, AppMessage::Form(FormMessage::Update));

        assert_eq!(list_names(&app), vec!["Alicia", "Bob"]);
        assert_eq!(app.roster.state(), SelectionState::Idle);
        assert_eq!(app.ui.form.name, "");
    }

    #[test]
    fn test_update_keeps_stored_id_after_id_field_edit() {
        let mut app = new_app();
        add_student(&mut app, "SV01", "Alice");

        update(&mut app, AppMessage::ToggleFocus);
        update(&mut app, AppMessage::List(ListMessage::SelectFirst));
        update(&mut app, AppMessage::List(ListMessage::Open));
        assert_eq!(app.ui.form.focused, FormField::Name);

        // 修改学号输入框，再追加姓名
        update(&mut app, AppMessage::Form(FormMessage::PrevField));
        assert_eq!(app.ui.form.focused, FormField::StudentId);
        type_text(&mut app, "X");
        assert_eq!(app.ui.form.student_id, "SV01X");

        update(&mut app, AppMessage::Form(FormMessage::NextField));
        type_text(&mut app, "ia");
        update(&mut app, AppMessage::Form(FormMessage::Update));

        let record = app.roster.store().get(0).unwrap();
        assert_eq!(record.student_id, "SV01");
        assert_eq!(record.name, "Aliceia");
        assert_eq!(app.roster.len(), 1);
        assert_eq!(app.roster.state(), SelectionState::Idle);
    }

    #[test]
    fn test_clear_status() {
        let mut app = new_app();
        update(&mut app, AppMessage::Form(FormMessage::Add));
        assert!(app.ui.status.is_some());

        update(&mut app, AppMessage::ClearStatus);
        assert!(app.ui.status.is_none());
    }

    #[test]
    fn test_update_without_selection_warns() {
        let mut app = new_app();
        add_student(&mut app, "SV01", "Alice");

        app.ui.form.focused = FormField::Name;
        type_text(&mut app, "Zed");
        update(&mut app, AppMessage::Form(FormMessage::Update));

        assert_eq!(list_names(&app), vec!["Alice"]);
        assert_eq!(
            app.ui.status.as_ref().map(|s| s.level),
            Some(StatusLevel::Warning)
        );
    }

    #[test]
    fn test_delete_at_cursor() {
        let mut app = new_app();
        add_student(&mut app, "SV01", "Alice");
        add_student(&mut app, "SV02", "Bob");
        add_student(&mut app, "SV03", "Carol");

        update(&mut app, AppMessage::ToggleFocus);
        update(&mut app, AppMessage::List(ListMessage::SelectFirst));
        update(&mut app, AppMessage::List(ListMessage::SelectNext));
        update(&mut app, AppMessage::List(ListMessage::Delete));

        assert_eq!(list_names(&app), vec!["Alice", "Carol"]);
        assert_eq!(app.roster.len(), 2);
    }

    #[test]
    fn test_delete_edited_row_resets_form() {
        let mut app = new_app();
        add_student(&mut app, "SV01", "Alice");

        update(&mut app, AppMessage::ToggleFocus);
        update(&mut app, AppMessage::List(ListMessage::Open));
        assert!(app.roster.state().is_editing());

        update(&mut app, AppMessage::ToggleFocus);
        update(&mut app, AppMessage::List(ListMessage::Delete));

        assert!(app.ui.list.is_empty());
        assert_eq!(app.roster.state(), SelectionState::Idle);
        assert_eq!(app.ui.form.name, "");
    }

    #[test]
    fn test_list_actions_on_empty_list() {
        let mut app = new_app();
        update(&mut app, AppMessage::List(ListMessage::Open));
        update(&mut app, AppMessage::List(ListMessage::Delete));

        assert_eq!(app.roster.state(), SelectionState::Idle);
        assert!(app.ui.status.is_none());
    }

    #[test]
    fn test_help_blocks_focus_toggle() {
        let mut app = new_app();
        update(&mut app, AppMessage::ShowHelp);
        update(&mut app, AppMessage::ToggleFocus);
        assert_eq!(app.ui.focus, FocusPanel::Form);

        update(&mut app, AppMessage::CloseHelp);
        update(&mut app, AppMessage::ToggleFocus);
        assert_eq!(app.ui.focus, FocusPanel::List);
    }

    #[test]
    fn test_toggle_theme_persists() {
        let service = MemoryConfigService::default();
        let mut app = App::new(AppConfig::default(), Box::new(service.clone()));

        update(&mut app, AppMessage::ToggleTheme);

        assert_eq!(app.config.theme, Theme::Light);
        let saved = service.saved.borrow().clone();
        assert_eq!(saved.map(|c| c.theme), Some(Theme::Light));
    }

    #[test]
    fn test_save_failure_keeps_session_setting() {
        let service = MemoryConfigService {
            fail: true,
            ..Default::default()
        };
        let mut app = App::new(AppConfig::default(), Box::new(service));

        update(&mut app, AppMessage::ToggleTheme);

        assert_eq!(app.config.theme, Theme::Light);
        assert!(app.ui.status.is_some());
    }

    #[test]
    fn test_quit() {
        let mut app = new_app();
        update(&mut app, AppMessage::Quit);
        assert!(app.should_quit);
    }
}
