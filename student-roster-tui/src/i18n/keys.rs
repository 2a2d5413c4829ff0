//! 翻译键定义
//!
//! 定义所有翻译文本的结构体，提供编译期类型检查。
//!
//! ## 分类标准
//!
//! 1. **按 UI 组件位置分类**：文本归属于它出现的 UI 组件
//! 2. **跨组件复用归 `common.*`**：多处使用的通用词汇
//! 3. **键盘提示归 `hints.*`**：状态栏中的动作词
//! 4. **状态栏消息归 `messages.*`**：操作结果与校验失败提示

/// 所有翻译文本的根结构
pub struct Translations {
    /// 通用文本（跨多处复用）
    pub common: CommonTexts,
    /// 键盘提示（动作词）
    pub hints: HintTexts,
    /// 表单面板文本
    pub form: FormTexts,
    /// 列表面板文本
    pub list: ListTexts,
    /// 状态栏消息
    pub messages: MessageTexts,
    /// 帮助弹窗文本
    pub help: HelpTexts,
}

// ============================================================================
// 通用文本
// ============================================================================

/// 通用文本（跨多处复用的词汇）
pub struct CommonTexts {
    pub app_name: &'static str,
    pub add: &'static str,
    pub update: &'static str,
    pub delete: &'static str,
    pub quit: &'static str,
    pub help: &'static str,
}

// ============================================================================
// 键盘提示
// ============================================================================

/// 动作描述（用于状态栏组合提示）
pub struct HintTexts {
    pub switch_panel: &'static str,
    pub switch_field: &'static str,
    pub move_up_down: &'static str,
    pub select: &'static str,
    pub clear: &'static str,
    pub submit: &'static str,
}

// ============================================================================
// 面板文本
// ============================================================================

/// 表单面板文本
pub struct FormTexts {
    pub title: &'static str,
    pub student_id: &'static str,
    pub student_id_hint: &'static str,
    pub name: &'static str,
    pub name_hint: &'static str,
    /// 未选中记录时的模式标签
    pub mode_new: &'static str,
    /// 正在编辑时的模式标签
    pub mode_editing: &'static str,
    /// 编辑模式下学号只读提示
    pub id_not_saved: &'static str,
}

/// 列表面板文本
pub struct ListTexts {
    pub title: &'static str,
    pub empty: &'static str,
    pub empty_hint: &'static str,
    /// 数量后缀，如 "3 students"
    pub count_suffix: &'static str,
}

// ============================================================================
// 状态栏消息
// ============================================================================

/// 状态栏消息
pub struct MessageTexts {
    pub added: &'static str,
    pub updated: &'static str,
    pub deleted: &'static str,
    pub editing: &'static str,
    pub both_fields_required: &'static str,
    pub name_required: &'static str,
    pub select_to_update: &'static str,
    pub language_changed: &'static str,
    pub theme_changed: &'static str,
    pub config_save_failed: &'static str,
}

// ============================================================================
// 帮助弹窗
// ============================================================================

/// 帮助弹窗文本
pub struct HelpTexts {
    pub title: &'static str,
    pub global_shortcuts: &'static str,
    pub form_shortcuts: &'static str,
    pub list_shortcuts: &'static str,
    pub close_hint: &'static str,
    pub actions: HelpActionTexts,
}

/// 帮助弹窗中的动作说明
pub struct HelpActionTexts {
    pub switch_panel: &'static str,
    pub switch_field: &'static str,
    pub submit: &'static str,
    pub clear_form: &'static str,
    pub move_up_down: &'static str,
    pub select_row: &'static str,
    pub delete_row: &'static str,
    pub language: &'static str,
    pub theme: &'static str,
    pub quit: &'static str,
}
