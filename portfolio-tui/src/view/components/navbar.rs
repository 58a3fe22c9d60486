//! 顶部导航栏

use portfolio_core::services::ACTIVE_CLASS;
use portfolio_core::PageSurface;
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::section_label;
use crate::model::App;
use crate::view::theme::{colors, Styles};

/// 渲染导航栏
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors();
    let doc = &app.page.document;
    let layout = &app.layout;

    // 滚动超过阈值后导航栏带阴影，这里用高亮边框表示
    let scrolled = doc
        .style(&layout.navbar, "box-shadow")
        .is_some_and(|shadow| shadow != "none");
    let border_style = if scrolled {
        Style::default().fg(c.border_focused)
    } else {
        Style::default().fg(c.border)
    };

    let mut spans = vec![
        Span::styled(format!(" {} ", app.config.owner_name), Styles::title()),
        Span::raw("  "),
    ];
    for (i, entry) in app.controllers.navigation.entries().iter().enumerate() {
        let label = format!(" {} {} ", i + 1, section_label(entry.target.as_str()));
        let style = if doc.has_class(&entry.link, ACTIVE_CLASS) {
            Styles::selected()
        } else {
            Style::default().fg(c.fg)
        };
        spans.push(Span::styled(label, style));
    }

    let hamburger = if app.controllers.navigation.is_menu_open(doc) {
        " ✕ "
    } else {
        " ☰ "
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title_top(Line::from(hamburger).right_aligned());

    frame.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
}
