//! 焦点状态定义

/// 焦点面板枚举
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusPanel {
    /// 上方表单面板（学号 / 姓名输入框）
    #[default]
    Form,
    /// 下方学生列表
    List,
}

impl FocusPanel {
    /// 切换到另一个面板
    pub fn toggle(self) -> Self {
        match self {
            FocusPanel::Form => FocusPanel::List,
            FocusPanel::List => FocusPanel::Form,
        }
    }

    /// 是否是表单面板
    pub fn is_form(self) -> bool {
        matches!(self, FocusPanel::Form)
    }

    /// 是否是列表面板
    pub fn is_list(self) -> bool {
        matches!(self, FocusPanel::List)
    }
}
