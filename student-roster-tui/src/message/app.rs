//! 应用主消息枚举

use super::{FormMessage, ListMessage};

/// 应用主消息
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppMessage {
    /// 退出应用
    Quit,

    /// 切换焦点面板（表单 ↔ 列表）
    ToggleFocus,

    /// 表单面板相关消息
    Form(FormMessage),

    /// 列表面板相关消息
    List(ListMessage),

    /// 显示帮助
    ShowHelp,

    /// 关闭帮助
    CloseHelp,

    /// 切换界面语言
    ToggleLanguage,

    /// 切换主题
    ToggleTheme,

    /// 清除状态消息
    ClearStatus,

    /// 无操作（用于忽略未处理的事件）
    Noop,
}
