//! 主布局渲染

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    widgets::Paragraph,
    Frame,
};

use crate::i18n::t;
use crate::model::App;

use super::components;
use super::pages;
use super::theme::colors;

/// 表单面板高度：两个输入框各 3 行 + 边框
const FORM_HEIGHT: u16 = 8;

/// 渲染主布局
pub fn render(app: &App, frame: &mut Frame) {
    let size = frame.area();

    // 四层布局：标题栏 + 表单 + 列表 + 状态栏
    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),           // 标题栏
            Constraint::Length(FORM_HEIGHT), // 表单
            Constraint::Min(3),              // 列表
            Constraint::Length(1),           // 状态栏
        ])
        .split(size);

    render_title_bar(frame, main_layout[0]);
    components::form::render(app, frame, main_layout[1]);
    pages::roster::render(app, frame, main_layout[2]);
    components::statusbar::render(app, frame, main_layout[3]);

    // 帮助弹窗在最上层
    if app.show_help {
        components::help::render(frame);
    }
}

/// 渲染标题栏
fn render_title_bar(frame: &mut Frame, area: Rect) {
    let c = colors();
    let title = Paragraph::new(format!(
        " {} v{}",
        t().common.app_name,
        env!("CARGO_PKG_VERSION")
    ))
    .style(Style::default().bg(c.highlight).fg(c.selected_fg));
    frame.render_widget(title, area);
}
