//! 交互控制器层

mod contact_form;
mod effects;
mod navigation;
mod profile_image;
mod reveal;
mod validation;
mod view_activation;

pub use contact_form::{
    deliver, ContactFormController, DEFAULT_SUBMIT_LABEL, ERROR_BORDER, HIDDEN_CLASS,
    SUCCESS_LABEL,
};
pub use effects::{
    cursor_transform, parallax_transform, EffectsController, PreloaderPhase, CURSOR_CLASS,
};
pub use navigation::{
    ease_in_out_cubic, NavigationController, ScrollAnimation, SmoothScroll, MENU_OPEN_CLASS,
};
pub use profile_image::{ImageSource, ProfileImageController};
pub use reveal::{intersection_ratio, RevealWatcher, REVEALED_CLASS};
pub use validation::{is_valid_email, validate_field, MIN_MESSAGE_CHARS, MIN_NAME_CHARS};
pub use view_activation::{select_active_section, ViewActivationController, ACTIVE_CLASS};

use std::sync::Arc;
use std::time::Instant;

use crate::config::PortfolioConfig;
use crate::traits::{AvatarService, PageSurface};
use crate::types::PageLayout;

/// 页面控制器集合 - 启动时构造一次
///
/// 每个控制器持有自己的元素引用和计时器，彼此不共享状态。
/// 宿主把浏览器/终端事件分发到这里。
pub struct PageControllers {
    pub view: ViewActivationController,
    pub reveal: RevealWatcher,
    pub navigation: NavigationController,
    pub form: ContactFormController,
    pub effects: EffectsController,
    pub profile_image: ProfileImageController,
}

impl PageControllers {
    /// 创建所有控制器
    #[must_use]
    pub fn new(
        layout: &PageLayout,
        config: &PortfolioConfig,
        avatar: Arc<dyn AvatarService>,
    ) -> Self {
        Self {
            view: ViewActivationController::new(layout, config),
            reveal: RevealWatcher::new(layout, config),
            navigation: NavigationController::new(layout, config),
            form: ContactFormController::new(layout, config),
            effects: EffectsController::new(layout, config),
            profile_image: ProfileImageController::new(layout, config, avatar),
        }
    }

    /// 页面就绪：注册揭示元素、初始化效果并计算初始高亮
    pub fn init(&mut self, surface: &mut dyn PageSurface) {
        self.reveal.register(surface);
        self.effects.init(surface);
        self.navigation.on_scroll(surface);
        self.view.refresh(surface);
        self.reveal.observe(surface);
    }

    /// 滚动事件
    pub fn on_scroll(&mut self, surface: &mut dyn PageSurface, now: Instant) {
        self.navigation.on_scroll(surface);
        self.view.on_scroll(surface, now);
        self.effects.on_scroll(surface, now);
        self.reveal.observe(surface);
    }

    /// 帧/计时器节拍
    ///
    /// 推进平滑滚动；滚动位置变化时按滚动事件处理。
    /// 节流窗口内被丢弃的滚动在窗口结束后的第一拍补算一次。
    pub fn tick(&mut self, surface: &mut dyn PageSurface, now: Instant) {
        let before = surface.scroll_offset();
        self.navigation.frame(surface, now);
        if (surface.scroll_offset() - before).abs() > f64::EPSILON {
            self.on_scroll(surface, now);
        }
        self.view.flush(surface, now);

        self.form.tick(surface, now);
        self.effects.tick(surface, now);
    }
}
