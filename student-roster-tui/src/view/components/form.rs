//! 表单面板组件：学号与姓名两个输入框

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use student_roster_core::FormField;
use unicode_width::UnicodeWidthStr;

use crate::i18n::t;
use crate::model::App;
use crate::view::theme::{colors, Styles};

/// 渲染表单面板
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let texts = t();
    let c = colors();
    let panel_focused = app.ui.focus.is_form();
    let editing = app.roster.state().is_editing();

    // 标题右侧的模式徽标
    let badge = if editing {
        Span::styled(
            format!(" [{}] ", texts.form.mode_editing),
            Style::default().fg(c.warning).add_modifier(Modifier::BOLD),
        )
    } else {
        Span::styled(
            format!(" [{}] ", texts.form.mode_new),
            Style::default().fg(c.success),
        )
    };

    let block = Block::default()
        .title(Line::from(vec![
            Span::styled(
                format!(" {} ", texts.form.title),
                Style::default().fg(c.fg).add_modifier(Modifier::BOLD),
            ),
            badge,
        ]))
        .borders(Borders::ALL)
        .border_style(Styles::border(panel_focused));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Length(3)])
        .split(inner);

    // 编辑中学号不会被提交，在标题中提示
    let id_label = if editing {
        format!(" {} {} ", texts.form.student_id, texts.form.id_not_saved)
    } else {
        format!(" {} ", texts.form.student_id)
    };

    let fields = [
        (FormField::StudentId, id_label, texts.form.student_id_hint, rows[0]),
        (
            FormField::Name,
            format!(" {} ", texts.form.name),
            texts.form.name_hint,
            rows[1],
        ),
    ];

    for (field, label, placeholder, field_area) in fields {
        let is_active = panel_focused && app.ui.form.focused == field;
        let value = app.ui.form.value(field);
        render_input(frame, field_area, &label, value, placeholder, is_active);
    }
}

/// 渲染单个输入框，聚焦时放置光标
fn render_input(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    value: &str,
    placeholder: &str,
    is_active: bool,
) {
    let c = colors();

    let block = Block::default()
        .title(label.to_string())
        .borders(Borders::ALL)
        .border_style(Styles::border(is_active));

    let content = if value.is_empty() {
        Line::from(Span::styled(placeholder.to_string(), Style::default().fg(c.muted)))
    } else {
        Line::from(Span::styled(value.to_string(), Style::default().fg(c.fg)))
    };

    let inner = block.inner(area);
    frame.render_widget(Paragraph::new(content).block(block), area);

    if is_active && inner.width > 0 {
        // 光标放在文本末尾，按显示宽度计算（支持越南语组合字符）
        let offset = u16::try_from(value.width()).unwrap_or(u16::MAX);
        let x = inner.x.saturating_add(offset).min(inner.right().saturating_sub(1));
        frame.set_cursor_position((x, inner.y));
    }
}
