//! 联系表单的行渲染

use portfolio_core::document::Element;
use portfolio_core::services::{ERROR_BORDER, HIDDEN_CLASS};
use portfolio_core::types::NotificationKind;
use portfolio_core::PageSurface;
use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};

use crate::model::{App, FormField};
use crate::view::theme::{colors, Styles};

const LABEL_WIDTH: usize = 9;
const LOADER_FRAMES: [&str; 4] = ["⠋", "⠙", "⠸", "⠴"];

/// 输入框
pub fn field_line(app: &App, field: FormField, element: &Element) -> Line<'static> {
    let c = colors();
    let focused = app.focus.field() == Some(field);
    let invalid = element
        .styles
        .get("border-color")
        .is_some_and(|color| color == ERROR_BORDER);

    let label_style = if invalid {
        Style::default().fg(c.error)
    } else if focused {
        Style::default().fg(c.border_focused).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(c.muted)
    };
    let caret = if focused { "▏" } else { "" };

    Line::from(vec![
        Span::styled(format!("  {:<LABEL_WIDTH$}│ ", field.label()), label_style),
        Span::styled(element.value.clone(), Style::default().fg(c.fg)),
        Span::styled(caret, Style::default().fg(c.accent)),
    ])
}

/// 字段下方的错误提示，`display: none` 时为空行
pub fn error_line(element: &Element) -> Line<'static> {
    let shown = element
        .styles
        .get("display")
        .is_some_and(|display| display == "block");
    if !shown {
        return Line::default();
    }
    Line::styled(
        format!("  {:<LABEL_WIDTH$}  {}", "", element.text),
        Style::default().fg(colors().error),
    )
}

/// 提交按钮：标签或加载动画
pub fn button_line(app: &App, element: &Element) -> Line<'static> {
    let c = colors();
    let doc = &app.page.document;
    let layout = &app.layout;

    let text = if doc.has_class(&layout.submit_label, HIDDEN_CLASS) {
        let spin = usize::try_from(app.frame / 4).unwrap_or(0) % LOADER_FRAMES.len();
        format!("{} Sending...", LOADER_FRAMES[spin])
    } else {
        doc.text(&layout.submit_label).unwrap_or_default()
    };

    let style = if element.disabled {
        Style::default().fg(c.muted)
    } else if app.hovered.as_ref() == Some(&element.id) {
        Styles::selected()
    } else {
        Style::default()
            .fg(c.selected_fg)
            .bg(c.highlight)
            .add_modifier(Modifier::BOLD)
    };

    Line::from(vec![
        Span::raw(format!("  {:<LABEL_WIDTH$}  ", "")),
        Span::styled(format!(" {text} "), style),
    ])
}

/// 全局提示
pub fn notification_line(kind: NotificationKind, element: &Element) -> Line<'static> {
    if element.has_class(HIDDEN_CLASS) {
        return Line::default();
    }
    let c = colors();
    match kind {
        NotificationKind::Success => Line::styled(
            "  ✓ Thank you! Your message has been sent successfully.",
            Style::default().fg(c.success),
        ),
        NotificationKind::Failure => Line::styled(
            "  ✗ Sorry, something went wrong. Please try again.",
            Style::default().fg(c.error),
        ),
    }
}
