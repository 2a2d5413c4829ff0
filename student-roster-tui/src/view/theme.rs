//! 主题和样式定义
//!
//! 两套配色均为常量，切换主题只改变原子索引。

use ratatui::style::{Color, Modifier, Style};
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU8, Ordering};

static CURRENT_THEME: AtomicU8 = AtomicU8::new(Theme::Dark as u8);

/// 主题枚举
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum Theme {
    #[default]
    Dark = 0,
    Light = 1,
}

impl Theme {
    /// 切换到另一个主题
    #[must_use]
    pub fn toggle(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    fn palette(self) -> ThemeColors {
        match self {
            Theme::Dark => DARK,
            Theme::Light => LIGHT,
        }
    }
}

/// 设置当前主题
pub fn set_theme(theme: Theme) {
    CURRENT_THEME.store(theme as u8, Ordering::Relaxed);
}

/// 当前主题的颜色方案
pub fn colors() -> ThemeColors {
    let theme = match CURRENT_THEME.load(Ordering::Relaxed) {
        1 => Theme::Light,
        _ => Theme::Dark,
    };
    theme.palette()
}

/// 主题颜色
#[derive(Debug, Clone, Copy)]
pub struct ThemeColors {
    /// 正文
    pub fg: Color,
    /// 未聚焦面板边框
    pub border: Color,
    /// 聚焦面板边框、弹窗边框
    pub border_focused: Color,
    /// 标题栏、状态栏背景，帮助分节标题
    pub highlight: Color,
    /// 列表光标行
    pub selected_bg: Color,
    pub selected_fg: Color,
    /// 成功消息、"新建" 徽标
    pub success: Color,
    /// 警告消息、"编辑中" 徽标与被编辑行
    pub warning: Color,
    /// 占位符、学号列、空列表提示
    pub muted: Color,
}

const DARK: ThemeColors = ThemeColors {
    fg: Color::Rgb(220, 223, 228),
    border: Color::Rgb(70, 74, 82),
    border_focused: Color::Rgb(97, 175, 239),
    highlight: Color::Rgb(40, 90, 140),
    selected_bg: Color::Rgb(52, 61, 76),
    selected_fg: Color::White,
    success: Color::Rgb(152, 195, 121),
    warning: Color::Rgb(229, 192, 123),
    muted: Color::Rgb(125, 130, 140),
};

const LIGHT: ThemeColors = ThemeColors {
    fg: Color::Rgb(40, 44, 52),
    border: Color::Rgb(200, 202, 206),
    border_focused: Color::Rgb(64, 120, 242),
    highlight: Color::Rgb(64, 120, 242),
    selected_bg: Color::Rgb(214, 228, 252),
    selected_fg: Color::Black,
    success: Color::Rgb(56, 130, 60),
    warning: Color::Rgb(170, 110, 0),
    muted: Color::Rgb(120, 124, 130),
};

/// 常用样式
pub struct Styles;

impl Styles {
    /// 列表光标行
    pub fn selected() -> Style {
        let c = colors();
        Style::default()
            .bg(c.selected_bg)
            .fg(c.selected_fg)
            .add_modifier(Modifier::BOLD)
    }

    /// 状态栏底色
    pub fn statusbar() -> Style {
        Style::default().bg(colors().highlight).fg(Color::White)
    }

    /// 快捷键
    pub fn hint_key() -> Style {
        Style::default()
            .fg(colors().warning)
            .add_modifier(Modifier::BOLD)
    }

    /// 快捷键说明
    pub fn hint_desc() -> Style {
        Style::default().fg(Color::Gray)
    }

    /// 面板边框
    pub fn border(focused: bool) -> Style {
        let c = colors();
        Style::default().fg(if focused { c.border_focused } else { c.border })
    }
}
