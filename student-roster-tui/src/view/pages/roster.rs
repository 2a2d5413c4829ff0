//! 学生列表视图

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::i18n::t;
use crate::model::App;
use crate::view::theme::{colors, Styles};

/// 学号列宽度（按显示宽度对齐）
const ID_COLUMN_WIDTH: usize = 12;

/// 渲染学生列表面板
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let texts = t();
    let c = colors();

    let block = Block::default()
        .title(format!(
            " {} ({} {}) ",
            texts.list.title,
            app.ui.list.len(),
            texts.list.count_suffix
        ))
        .title_style(Style::default().fg(c.fg).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Styles::border(app.ui.focus.is_list()));

    if app.ui.list.is_empty() {
        render_empty(frame, area, block);
    } else {
        render_list(app, frame, area, block);
    }
}

/// 渲染空状态
fn render_empty(frame: &mut Frame, area: Rect, block: Block) {
    let texts = t();
    let c = colors();
    let content = vec![
        Line::from(""),
        Line::styled(format!("  {}", texts.list.empty), Style::default().fg(c.muted)),
        Line::from(""),
        Line::styled(
            format!("  {}", texts.list.empty_hint),
            Style::default().fg(c.muted),
        ),
    ];

    frame.render_widget(Paragraph::new(content).block(block), area);
}

/// 渲染学生列表
fn render_list(app: &App, frame: &mut Frame, area: Rect, block: Block) {
    let c = colors();
    let edited = app.roster.selected_index();

    let items: Vec<ListItem> = app
        .ui
        .list
        .rows()
        .enumerate()
        .map(|(i, row)| {
            // 未同步的行显示为空，下一次 sync 后补齐
            let (student_id, name) =
                row.map_or(("", ""), |r| (r.student_id.as_str(), r.name.as_str()));
            let marker = if edited == Some(i) { "✎ " } else { "  " };
            let padding = ID_COLUMN_WIDTH.saturating_sub(student_id.width());

            let name_style = if edited == Some(i) {
                Style::default().fg(c.warning)
            } else {
                Style::default().fg(c.fg)
            };

            ListItem::new(Line::from(vec![
                Span::styled(marker, Style::default().fg(c.warning)),
                Span::styled(
                    format!("{student_id}{}", " ".repeat(padding)),
                    Style::default().fg(c.muted),
                ),
                Span::styled(name.to_string(), name_style),
            ]))
        })
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(Styles::selected())
        .highlight_symbol("▶ ");

    let mut state = ListState::default();
    if app.ui.focus.is_list() {
        state.select(Some(app.ui.list.selected()));
    }

    frame.render_stateful_widget(list, area, &mut state);
}
