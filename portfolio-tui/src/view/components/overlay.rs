//! 最上层：移动端菜单与预加载遮罩

use portfolio_core::PageSurface;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use unicode_width::UnicodeWidthStr;

use super::section_label;
use crate::model::App;
use crate::view::theme::{colors, Styles};

const PRELOADER_WIDTH: u16 = 30;
const PRELOADER_HEIGHT: u16 = 5;

/// 汉堡菜单展开时在导航栏下方列出所有链接
pub fn render_menu(app: &App, frame: &mut Frame, nav_area: Rect) {
    let doc = &app.page.document;
    if !app.controllers.navigation.is_menu_open(doc) {
        return;
    }

    let entries = app.controllers.navigation.entries();
    let labels: Vec<String> = entries
        .iter()
        .enumerate()
        .map(|(i, entry)| format!(" {}  {}", i + 1, section_label(entry.target.as_str())))
        .collect();

    // 边框与左右留白
    let height = u16::try_from(entries.len())
        .unwrap_or(u16::MAX)
        .saturating_add(2);
    let widest = labels.iter().map(|l| l.width()).max().unwrap_or(0) + 4;
    let screen = frame.area();
    let width = u16::try_from(widest).unwrap_or(u16::MAX).min(screen.width);
    let area = Rect::new(
        nav_area.right().saturating_sub(width),
        nav_area.bottom(),
        width,
        height.min(screen.height.saturating_sub(nav_area.bottom())),
    );

    let lines: Vec<Line> = entries
        .iter()
        .zip(labels)
        .map(|(entry, text)| {
            if app.controllers.view.active_link() == Some(&entry.link) {
                Line::styled(text, Styles::selected())
            } else {
                Line::raw(text)
            }
        })
        .collect();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors().border_focused))
        .title(" Menu ");
    frame.render_widget(Clear, area);
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

/// 预加载遮罩：淡出阶段变暗，移除后不再绘制
pub fn render_preloader(app: &App, frame: &mut Frame, page_area: Rect) {
    let doc = &app.page.document;
    let preloader = &app.layout.preloader;
    if !doc.contains(preloader) {
        return;
    }

    let c = colors();
    let fading = doc.style(preloader, "opacity").as_deref() == Some("0");
    let style = if fading {
        Style::default().fg(c.muted).add_modifier(Modifier::DIM)
    } else {
        Style::default().fg(c.accent).add_modifier(Modifier::BOLD)
    };

    let width = PRELOADER_WIDTH.min(page_area.width);
    let height = PRELOADER_HEIGHT.min(page_area.height);
    let area = Rect::new(
        page_area.x + (page_area.width - width) / 2,
        page_area.y + (page_area.height - height) / 2,
        width,
        height,
    );

    let block = Block::default().borders(Borders::ALL).border_style(style);
    let text = Paragraph::new(vec![Line::raw(""), Line::styled("Loading portfolio...", style)])
        .alignment(Alignment::Center)
        .block(block);
    frame.render_widget(Clear, area);
    frame.render_widget(text, area);
}
