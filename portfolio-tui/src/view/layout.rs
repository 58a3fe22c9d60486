//! 主布局

use ratatui::{
    layout::{Constraint, Direction, Layout},
    Frame,
};

use super::components;
use crate::model::{App, NAVBAR_ROWS, STATUS_ROWS};

/// 渲染主布局
pub fn render(app: &App, frame: &mut Frame) {
    let size = frame.area();

    // 三层布局：导航栏 + 页面 + 状态栏
    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(NAVBAR_ROWS),
            Constraint::Min(1),
            Constraint::Length(STATUS_ROWS),
        ])
        .split(size);

    let nav_area = main_layout[0];
    let page_area = main_layout[1];
    let status_area = main_layout[2];

    components::navbar::render(app, frame, nav_area);
    components::page::render(app, frame, page_area);
    components::statusbar::render(app, frame, status_area);

    // 最上层
    components::overlay::render_menu(app, frame, nav_area);
    components::overlay::render_preloader(app, frame, page_area);
}
