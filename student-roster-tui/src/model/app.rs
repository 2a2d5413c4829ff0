//! 应用主状态结构

use student_roster_core::SelectionController;

use super::Presentation;
use crate::backend::{AppConfig, ConfigService};

/// 应用主状态
pub struct App {
    /// 是否应该退出
    pub should_quit: bool,

    /// 学生列表与选中状态（唯一的数据来源）
    pub roster: SelectionController,

    /// 展示层状态（输入框、列表缓存、状态栏）
    pub ui: Presentation,

    /// 是否显示帮助弹窗
    pub show_help: bool,

    /// 当前配置
    pub config: AppConfig,

    config_service: Box<dyn ConfigService>,
}

impl App {
    /// 创建新的应用实例
    pub fn new(config: AppConfig, config_service: Box<dyn ConfigService>) -> Self {
        Self {
            should_quit: false,
            roster: SelectionController::new(),
            ui: Presentation::new(),
            show_help: false,
            config,
            config_service,
        }
    }

    /// 持久化当前配置
    pub fn save_config(&self) -> anyhow::Result<()> {
        self.config_service.save(&self.config)
    }

    /// 把列表缓存与 store 对齐
    pub fn sync_view(&mut self) {
        self.ui.list.sync(self.roster.store());
    }
}
