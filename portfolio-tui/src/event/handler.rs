//! 事件处理器

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEvent, MouseEventKind,
};
use portfolio_core::PageSurface;

use crate::event::keymap::DefaultKeymap;
use crate::message::{AppMessage, FormMessage};
use crate::model::{App, ROW_UNITS};

/// 滚轮与方向键每次滚动的行数
const SCROLL_STEP_ROWS: f64 = 3.0;
/// 翻页保留的重叠比例
const PAGE_RATIO: f64 = 0.9;

/// 轮询事件
pub fn poll_event(timeout: Duration) -> Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// 处理事件，返回对应的消息
pub fn handle_event(event: Event, app: &App) -> AppMessage {
    match event {
        Event::Key(key_event) => handle_key_event(key_event, app),
        Event::Mouse(mouse_event) => handle_mouse_event(mouse_event),
        Event::Resize(columns, rows) => AppMessage::Resized { columns, rows },
        _ => AppMessage::Noop,
    }
}

/// 处理键盘事件
fn handle_key_event(key: KeyEvent, app: &App) -> AppMessage {
    // 只处理 Press 事件，忽略 Release 和 Repeat
    if key.kind != KeyEventKind::Press {
        return AppMessage::Noop;
    }

    // 全局快捷键（无论焦点在哪里）
    if DefaultKeymap::FORCE_QUIT.matches(&key) {
        return AppMessage::Quit;
    }
    if DefaultKeymap::FOCUS_NEXT.matches(&key) {
        return AppMessage::FocusNext;
    }
    if DefaultKeymap::FOCUS_PREVIOUS.matches(&key) || key.code == KeyCode::BackTab {
        return AppMessage::FocusPrevious;
    }
    if DefaultKeymap::BACK.matches(&key) {
        // 页面上按 Esc 先清掉状态消息
        if app.focus.is_page() && app.status_message.is_some() {
            return AppMessage::ClearStatus;
        }
        return AppMessage::FocusPage;
    }

    if app.focus.is_page() {
        handle_page_keys(key, app)
    } else {
        handle_field_keys(key)
    }
}

/// 焦点在页面上
fn handle_page_keys(key: KeyEvent, app: &App) -> AppMessage {
    let row = SCROLL_STEP_ROWS * ROW_UNITS;
    let page = app.page.document.viewport().height * PAGE_RATIO;

    if DefaultKeymap::QUIT.matches(&key) {
        return AppMessage::Quit;
    }
    if DefaultKeymap::SCROLL_TO_TOP.matches(&key) {
        return AppMessage::ScrollToTop;
    }
    if DefaultKeymap::TOGGLE_MENU.matches(&key) {
        return AppMessage::ToggleMenu;
    }
    if DefaultKeymap::IMAGE_FAILED.matches(&key) {
        return AppMessage::ImageFailed;
    }
    if DefaultKeymap::PAGE_UP.matches(&key) {
        return AppMessage::Scroll(-page);
    }
    if DefaultKeymap::PAGE_DOWN.matches(&key) {
        return AppMessage::Scroll(page);
    }

    // ↑ 或 k: 上滚
    if DefaultKeymap::SCROLL_UP.matches(&key) || key.code == KeyCode::Char('k') {
        return AppMessage::Scroll(-row);
    }
    // ↓ 或 j: 下滚
    if DefaultKeymap::SCROLL_DOWN.matches(&key) || key.code == KeyCode::Char('j') {
        return AppMessage::Scroll(row);
    }

    match key.code {
        // 1-9: 导航链接
        KeyCode::Char(c @ '1'..='9') => c
            .to_digit(10)
            .and_then(|d| usize::try_from(d).ok())
            .filter(|&d| d <= app.controllers.navigation.entries().len())
            .map_or(AppMessage::Noop, |d| AppMessage::NavigateTo(d - 1)),

        _ => AppMessage::Noop,
    }
}

/// 焦点在表单字段上
fn handle_field_keys(key: KeyEvent) -> AppMessage {
    if DefaultKeymap::SUBMIT.matches(&key) {
        return AppMessage::Form(FormMessage::Submit);
    }
    if DefaultKeymap::BACKSPACE.matches(&key) {
        return AppMessage::Form(FormMessage::Backspace);
    }

    match key.code {
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            AppMessage::Form(FormMessage::Input(c))
        }
        _ => AppMessage::Noop,
    }
}

/// 处理鼠标事件
fn handle_mouse_event(mouse: MouseEvent) -> AppMessage {
    let step = SCROLL_STEP_ROWS * ROW_UNITS;
    match mouse.kind {
        MouseEventKind::ScrollDown => AppMessage::Scroll(step),
        MouseEventKind::ScrollUp => AppMessage::Scroll(-step),
        MouseEventKind::Moved | MouseEventKind::Drag(_) => AppMessage::PointerMoved {
            column: mouse.column,
            row: mouse.row,
        },
        _ => AppMessage::Noop,
    }
}
