//! 列表面板消息

/// 列表面板消息
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListMessage {
    /// 选择上一项
    SelectPrevious,
    /// 选择下一项
    SelectNext,
    /// 跳转到第一项
    SelectFirst,
    /// 跳转到最后一项
    SelectLast,
    /// 点击行：载入表单进行编辑
    Open,
    /// 点击行的删除按钮
    Delete,
}
