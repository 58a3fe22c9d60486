//! 应用主状态结构

use std::sync::Arc;
use std::time::Instant;

use portfolio_core::types::{ElementId, PageLayout, SubmissionTicket};
use portfolio_core::{AvatarService, PageControllers, PortfolioConfig};

use super::{build_page, hero_text, viewport_for_terminal, Focus, Page};

/// 应用主状态
pub struct App {
    /// 是否应该退出
    pub should_quit: bool,

    pub config: PortfolioConfig,
    pub layout: PageLayout,

    /// 页面文档与内容块
    pub page: Page,

    /// 页面控制器
    pub controllers: PageControllers,

    /// 当前焦点
    pub focus: Focus,

    /// 鼠标悬停的内容块
    pub hovered: Option<ElementId>,

    /// 等待派发给后端的提交
    pub outbox: Vec<SubmissionTicket>,

    /// 状态栏消息
    pub status_message: Option<String>,

    /// 帧计数，驱动轨道图标动画
    pub frame: u64,
}

impl App {
    /// 按终端尺寸构建页面并初始化控制器
    pub fn new(
        config: PortfolioConfig,
        avatar: Arc<dyn AvatarService>,
        columns: u16,
        rows: u16,
        now: Instant,
    ) -> Self {
        let layout = PageLayout::default();
        let mut page = build_page(
            &layout,
            viewport_for_terminal(columns, rows),
            &config.owner_name,
        );
        let mut controllers = PageControllers::new(&layout, &config, avatar);

        controllers.init(&mut page.document);
        controllers.effects.start_typewriter(
            &mut page.document,
            &layout.hero_title,
            &hero_text(&config.owner_name),
            now,
        );
        // 内容在内存中，构建完即视为加载完成
        controllers.effects.on_load(now);

        Self {
            should_quit: false,
            config,
            layout,
            page,
            controllers,
            focus: Focus::Page,
            hovered: None,
            outbox: Vec::new(),
            status_message: None,
            frame: 0,
        }
    }

    /// 设置状态消息
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// 清除状态消息
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }
}
