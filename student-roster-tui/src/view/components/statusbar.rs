//! 底部状态栏组件

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::i18n::t;
use crate::model::{App, FocusPanel, StatusLevel};
use crate::view::theme::{colors, Styles};

/// 渲染状态栏
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let hints = get_hints(app);

    let mut spans = Vec::new();

    for (i, (key, desc)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
        }
        spans.push(Span::styled(*key, Styles::hint_key()));
        spans.push(Span::raw(" "));
        spans.push(Span::styled(*desc, Styles::hint_desc()));
    }

    // 状态消息显示在快捷键之后
    if let Some(ref msg) = app.ui.status {
        let color = status_color(msg.level);
        spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
        spans.push(Span::styled(msg.text.clone(), Style::default().fg(color)));
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(Styles::statusbar());
    frame.render_widget(paragraph, area);
}

/// 状态消息颜色，跟随当前主题
fn status_color(level: StatusLevel) -> Color {
    let c = colors();
    match level {
        StatusLevel::Info => c.success,
        StatusLevel::Warning => c.warning,
    }
}

/// 根据当前焦点生成快捷键提示
fn get_hints(app: &App) -> Vec<(&'static str, &'static str)> {
    let texts = t();
    let mut hints = vec![("Tab", texts.hints.switch_panel)];

    match app.ui.focus {
        FocusPanel::Form => {
            hints.push(("↑↓", texts.hints.switch_field));
            hints.push(("Enter", texts.hints.submit));
            hints.push(("Esc", texts.hints.clear));
        }
        FocusPanel::List => {
            hints.push(("↑↓", texts.hints.move_up_down));
            hints.push(("Enter", texts.hints.select));
            hints.push(("Del", texts.common.delete));
        }
    }

    hints.push(("Alt+h", texts.common.help));
    hints.push(("Alt+q", texts.common.quit));

    hints
}
