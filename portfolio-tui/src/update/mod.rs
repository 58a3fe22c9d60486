//!
//! src/update/mod.rs
//! Update 层：状态更新逻辑
//!
//! 接收 Message，调用核心控制器修改 Model。
//! 控制器都是同步的，需要时间的地方都显式传入 `now`；
//! 真正的异步只有表单提交，它的 ticket 被放进 `app.outbox`，
//! 由主循环派发给 backend 层。
//!
//!
//! 有模块结构：
//!     src/update/mod.rs
//!         mod form;           // 表单输入、焦点与提交
//!         mod page;           // 滚动、导航、鼠标与窗口尺寸
//!

mod form;
mod page;

use std::time::Instant;

use crate::message::AppMessage;
use crate::model::App;

/// 处理消息
pub fn update(app: &mut App, msg: AppMessage) {
    update_at(app, msg, Instant::now());
}

/// 在给定时刻处理消息
pub fn update_at(app: &mut App, msg: AppMessage, now: Instant) {
    match msg {
        AppMessage::Quit => {
            app.should_quit = true;
        }

        AppMessage::Tick => {
            app.frame = app.frame.wrapping_add(1);
            app.controllers.tick(&mut app.page.document, now);
        }

        AppMessage::Scroll(delta) => page::scroll_by(app, delta, now),

        AppMessage::ScrollToTop => {
            app.controllers
                .navigation
                .scroll_to_top(&mut app.page.document, now);
        }

        AppMessage::NavigateTo(index) => page::navigate(app, index, now),

        AppMessage::ToggleMenu => {
            app.controllers.navigation.toggle_menu(&mut app.page.document);
        }

        AppMessage::FocusNext => {
            let next = app.focus.next();
            form::change_focus(app, next);
        }
        AppMessage::FocusPrevious => {
            let previous = app.focus.previous();
            form::change_focus(app, previous);
        }
        AppMessage::FocusPage => {
            app.controllers.navigation.close_menu(&mut app.page.document);
            form::change_focus(app, crate::model::Focus::Page);
        }

        AppMessage::Form(form_msg) => form::update(app, form_msg),

        AppMessage::PointerMoved { column, row } => page::pointer_moved(app, column, row, now),

        AppMessage::Resized { columns, rows } => page::resize(app, columns, rows, now),

        AppMessage::SubmissionFinished(outcome) => form::finish(app, outcome, now),

        AppMessage::ImageFailed => page::image_failed(app),

        AppMessage::ClearStatus => {
            app.clear_status();
        }

        AppMessage::Noop => {}
    }
}
