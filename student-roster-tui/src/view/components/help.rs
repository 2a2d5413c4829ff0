//! 帮助弹窗

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::i18n::t;
use crate::view::theme::{colors, Styles};

/// 计算居中的弹窗区域
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}

/// 渲染帮助弹窗
pub fn render(frame: &mut Frame) {
    let texts = t();
    let actions = &texts.help.actions;
    let c = colors();

    let area = centered_rect(58, 24, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(format!(" {} ", texts.help.title))
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(c.border_focused));

    let section = |title: &'static str| {
        Line::styled(
            title,
            Style::default()
                .fg(c.highlight)
                .add_modifier(Modifier::BOLD),
        )
    };
    let row = |key: &'static str, desc: &'static str| {
        Line::from(vec![
            Span::styled(format!("  {key:<10}"), Styles::hint_key()),
            Span::styled(desc, Style::default().fg(c.fg)),
        ])
    };

    let lines = vec![
        section(texts.help.global_shortcuts),
        row("Tab", actions.switch_panel),
        row("Alt+l", actions.language),
        row("Alt+t", actions.theme),
        row("Ctrl+c", actions.quit),
        Line::from(""),
        section(texts.help.form_shortcuts),
        row("↑↓", actions.switch_field),
        row("Enter", actions.submit),
        row("Alt+a", texts.common.add),
        row("Alt+u", texts.common.update),
        row("Esc", actions.clear_form),
        Line::from(""),
        section(texts.help.list_shortcuts),
        row("↑↓/jk", actions.move_up_down),
        row("Enter", actions.select_row),
        row("Del/Alt+d", actions.delete_row),
        Line::from(""),
        Line::styled(texts.help.close_hint, Style::default().fg(c.muted)),
    ];

    let paragraph = Paragraph::new(lines).block(block);
    frame.render_widget(paragraph, area);
}
