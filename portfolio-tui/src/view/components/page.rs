//! 页面内容
//!
//! 按滚动位置逐行绘制内容块；视差图形与光标跟随叠加在最后。

use portfolio_core::document::Element;
use portfolio_core::services::ImageSource;
use portfolio_core::{Document, PageSurface};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::contact_form;
use crate::model::{App, Block, BlockKind, COLUMN_UNITS, ROW_UNITS};
use crate::view::theme::{colors, Styles};

const ORBIT_FRAMES: [&str; 4] = ["◐", "◓", "◑", "◒"];

/// 渲染页面
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let doc = &app.page.document;
    let scroll = doc.scroll_offset();

    for block in &app.page.blocks {
        if block.kind == BlockKind::Shape {
            continue;
        }
        let Some(element) = doc.element(&block.id) else {
            continue;
        };
        for (i, line) in block_lines(app, block, element).into_iter().enumerate() {
            #[allow(clippy::cast_precision_loss)]
            let doc_y = element.rect.top + i as f64 * ROW_UNITS;
            if let Some(y) = screen_row(area, doc_y - scroll) {
                frame.render_widget(Paragraph::new(line), Rect::new(area.x, y, area.width, 1));
            }
        }
    }

    render_shapes(app, frame, area);
    render_scroll_to_top(app, frame, area);
    render_cursor(doc, app, frame, area);
}

/// 视口内的文档偏移对应的终端行
fn screen_row(area: Rect, offset: f64) -> Option<u16> {
    let row = (offset / ROW_UNITS).floor();
    if row < 0.0 || row >= f64::from(area.height) {
        return None;
    }
    // 已检查范围
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    Some(area.y + row as u16)
}

fn screen_column(area: Rect, offset: f64) -> Option<u16> {
    let column = (offset / COLUMN_UNITS).floor();
    if column < 0.0 || column >= f64::from(area.width) {
        return None;
    }
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    Some(area.x + column as u16)
}

/// `"12.5px"` → 12.5
fn parse_px(value: &str) -> Option<f64> {
    value.trim().strip_suffix("px")?.parse().ok()
}

/// `"translateY(-12.5px)"` → -12.5
fn translate_y(transform: &str) -> f64 {
    transform
        .strip_prefix("translateY(")
        .and_then(|rest| rest.strip_suffix(')'))
        .and_then(parse_px)
        .unwrap_or(0.0)
}

fn is_unrevealed(element: &Element) -> bool {
    element
        .styles
        .get("opacity")
        .is_some_and(|opacity| opacity == "0")
}

fn block_lines(app: &App, block: &Block, element: &Element) -> Vec<Line<'static>> {
    let c = colors();
    match &block.kind {
        BlockKind::Heading => {
            let active = app.controllers.view.active_section() == Some(&block.section);
            let (marker, style) = if active {
                ("▌ ", Style::default().fg(c.highlight).add_modifier(Modifier::BOLD))
            } else {
                ("  ", Styles::title())
            };
            block
                .lines
                .iter()
                .map(|text| Line::styled(format!("{marker}{text}"), style))
                .collect()
        }

        BlockKind::Text => block
            .lines
            .iter()
            .map(|text| Line::styled(format!("  {text}"), Style::default().fg(c.fg)))
            .collect(),

        BlockKind::HeroTitle => {
            let caret = if app.controllers.effects.is_typing() {
                "█"
            } else {
                ""
            };
            vec![Line::from(vec![
                Span::styled(
                    format!("  {}", element.text),
                    Style::default().fg(c.accent).add_modifier(Modifier::BOLD),
                ),
                Span::styled(caret, Style::default().fg(c.accent)),
            ])]
        }

        BlockKind::ProfileImage => {
            let line = match app.controllers.profile_image.source() {
                ImageSource::Exhausted => {
                    Line::styled("  ◌ profile image unavailable", Style::default().fg(c.muted))
                }
                _ => Line::styled(
                    format!(
                        "  ◉ {}",
                        element.attributes.get("src").cloned().unwrap_or_default()
                    ),
                    Style::default().fg(c.fg),
                ),
            };
            vec![line]
        }

        BlockKind::OrbitIcon => {
            let paused = element
                .styles
                .get("animation-play-state")
                .is_some_and(|state| state == "paused");
            let glyph = if paused {
                "●"
            } else {
                let i = usize::try_from(app.frame / 8).unwrap_or(0) % ORBIT_FRAMES.len();
                ORBIT_FRAMES[i]
            };
            block
                .lines
                .iter()
                .map(|text| Line::styled(format!("    {glyph} {text}"), Style::default().fg(c.accent)))
                .collect()
        }

        BlockKind::Card => {
            let style = if is_unrevealed(element) {
                Styles::unrevealed()
            } else if app.hovered.as_ref() == Some(&block.id) {
                Styles::selected()
            } else {
                Style::default().fg(c.fg)
            };
            block
                .lines
                .iter()
                .map(|text| Line::styled(format!("  {text}"), style))
                .collect()
        }

        BlockKind::Field(field) => vec![contact_form::field_line(app, *field, element)],
        BlockKind::FieldError(_) => vec![contact_form::error_line(element)],
        BlockKind::SubmitButton => vec![contact_form::button_line(app, element)],
        BlockKind::Notification(kind) => vec![contact_form::notification_line(*kind, element)],

        BlockKind::Shape => Vec::new(),
    }
}

/// 视差图形：按 translateY 偏移叠加在页面右侧
fn render_shapes(app: &App, frame: &mut Frame, area: Rect) {
    let doc = &app.page.document;
    let scroll = doc.scroll_offset();
    let style = Style::default().fg(colors().highlight);

    let shapes = app
        .page
        .blocks
        .iter()
        .filter(|b| b.kind == BlockKind::Shape);
    for (index, block) in shapes.enumerate() {
        let Some(element) = doc.element(&block.id) else {
            continue;
        };
        let shift = element
            .styles
            .get("transform")
            .map_or(0.0, |t| translate_y(t));
        let Some(y) = screen_row(area, element.rect.top + shift - scroll) else {
            continue;
        };
        let offset = u16::try_from(index).unwrap_or(0).saturating_mul(5);
        let x = area.right().saturating_sub(6 + offset);
        if x < area.x {
            continue;
        }
        let glyph = block.lines.first().cloned().unwrap_or_default();
        frame.render_widget(Paragraph::new(Span::styled(glyph, style)), Rect::new(x, y, 1, 1));
    }
}

/// 回到顶部按钮，只在滚动超过阈值后可见
fn render_scroll_to_top(app: &App, frame: &mut Frame, area: Rect) {
    let doc = &app.page.document;
    let visible = doc.style(&app.layout.scroll_to_top, "visibility").as_deref() == Some("visible");
    if !visible || area.height == 0 {
        return;
    }

    let label = " ↑ Top ";
    let width = 7;
    if area.width < width {
        return;
    }
    let rect = Rect::new(area.right() - width, area.bottom() - 1, width, 1);
    frame.render_widget(Paragraph::new(Span::styled(label, Styles::selected())), rect);
}

/// 光标跟随
fn render_cursor(doc: &Document, app: &App, frame: &mut Frame, area: Rect) {
    let cursor = &app.layout.cursor;
    if !doc.contains(cursor) {
        return;
    }
    let left = doc.style(cursor, "left").as_deref().and_then(parse_px);
    let top = doc.style(cursor, "top").as_deref().and_then(parse_px);
    let (Some(left), Some(top)) = (left, top) else {
        return;
    };
    let (Some(x), Some(y)) = (screen_column(area, left), screen_row(area, top)) else {
        return;
    };

    let enlarged = doc
        .style(cursor, "transform")
        .is_some_and(|t| t.contains("scale(1.5)"));
    let glyph = if enlarged { "◉" } else { "•" };
    frame.render_widget(
        Paragraph::new(Span::styled(glyph, Style::default().fg(colors().accent))),
        Rect::new(x, y, 1, 1),
    );
}
