//! 页面滚动、导航与鼠标

use std::time::Instant;

use portfolio_core::PageSurface;

use crate::model::{viewport_for_terminal, App, COLUMN_UNITS, NAVBAR_ROWS, ROW_UNITS};

/// 用户滚动：打断平滑滚动并按滚动事件处理
pub fn scroll_by(app: &mut App, delta: f64, now: Instant) {
    app.controllers.navigation.interrupt();

    let doc = &mut app.page.document;
    let before = doc.scroll_offset();
    doc.set_scroll_offset(before + delta);
    app.controllers.on_scroll(doc, now);
}

/// 点击第 `index` 个导航链接
pub fn navigate(app: &mut App, index: usize, now: Instant) {
    let Some(link) = app
        .controllers
        .navigation
        .entries()
        .get(index)
        .map(|e| e.link.clone())
    else {
        return;
    };

    match app
        .controllers
        .navigation
        .click_link(&mut app.page.document, &link, now)
    {
        Ok(_) => app.clear_status(),
        Err(e) => {
            log::warn!("Navigation failed: {e}");
            app.set_status(e.to_string());
        }
    }
}

/// 鼠标移动：更新光标跟随与悬停目标
pub fn pointer_moved(app: &mut App, column: u16, row: u16, now: Instant) {
    let x = f64::from(column) * COLUMN_UNITS;
    let y = f64::from(row.saturating_sub(NAVBAR_ROWS)) * ROW_UNITS;
    let in_page = row >= NAVBAR_ROWS && y < app.page.document.viewport().height;

    let target = if in_page {
        app.controllers
            .effects
            .on_pointer_move(&mut app.page.document, x, y, now);
        let doc_y = app.page.document.scroll_offset() + y;
        app.page.block_at(doc_y).map(|b| b.id.clone())
    } else {
        None
    };

    if target == app.hovered {
        return;
    }
    if let Some(old) = app.hovered.take() {
        app.controllers
            .effects
            .on_pointer_leave(&mut app.page.document, &old);
    }
    if let Some(new) = &target {
        app.controllers
            .effects
            .on_pointer_enter(&mut app.page.document, new);
    }
    app.hovered = target;
}

/// 终端尺寸变化
pub fn resize(app: &mut App, columns: u16, rows: u16, now: Instant) {
    app.page
        .document
        .set_viewport(viewport_for_terminal(columns, rows));
    app.controllers.effects.on_resize(now);
    app.controllers.on_scroll(&mut app.page.document, now);
}

/// 头像加载失败
pub fn image_failed(app: &mut App) {
    match app
        .controllers
        .profile_image
        .on_error(&mut app.page.document)
    {
        Some(_) => app.set_status("Profile image failed to load, showing generated avatar"),
        None => app.set_status("Profile image unavailable"),
    }
}
