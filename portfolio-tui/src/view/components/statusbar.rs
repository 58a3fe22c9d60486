//! 状态栏

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::event::DefaultKeymap;
use crate::model::{App, Focus};
use crate::view::theme::Styles;

/// 渲染状态栏
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let hints = get_hints(app);

    let mut spans = Vec::new();
    for (i, (key, desc)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
        }
        spans.push(Span::styled(key.clone(), Styles::hint_key()));
        spans.push(Span::raw(" "));
        spans.push(Span::styled(*desc, Styles::hint_desc()));
    }

    // 状态消息显示在右侧
    if let Some(ref msg) = app.status_message {
        spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
        spans.push(Span::styled(msg.clone(), Style::default().fg(Color::Yellow)));
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(Styles::statusbar());
    frame.render_widget(paragraph, area);
}

/// 根据焦点生成快捷键提示
fn get_hints(app: &App) -> Vec<(String, &'static str)> {
    let mut hints = Vec::new();

    match app.focus {
        Focus::Page => {
            hints.push(("↑↓/jk".to_string(), "Scroll"));
            hints.push(("1-6".to_string(), "Sections"));
            hints.push((DefaultKeymap::SCROLL_TO_TOP.label(), "Top"));
            hints.push((DefaultKeymap::TOGGLE_MENU.label(), "Menu"));
            hints.push((DefaultKeymap::FOCUS_NEXT.label(), "Contact form"));
            hints.push((DefaultKeymap::QUIT.label(), "Quit"));
        }
        Focus::Field(_) => {
            hints.push((DefaultKeymap::FOCUS_NEXT.label(), "Next field"));
            hints.push((DefaultKeymap::SUBMIT.label(), "Send"));
            hints.push((DefaultKeymap::BACK.label(), "Back to page"));
        }
    }

    hints
}
