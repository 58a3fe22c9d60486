//! 配色与常用样式

use ratatui::style::{Color, Modifier, Style};

/// 获取颜色方案
pub fn colors() -> ThemeColors {
    ThemeColors::portfolio()
}

/// 主题颜色
#[derive(Debug, Clone)]
pub struct ThemeColors {
    pub fg: Color,
    pub border: Color,
    pub border_focused: Color,
    pub highlight: Color,
    pub accent: Color,
    pub selected_bg: Color,
    pub selected_fg: Color,
    pub success: Color,
    pub error: Color,
    pub muted: Color,
}

impl ThemeColors {
    /// 站点的靛蓝/紫色配色
    pub fn portfolio() -> Self {
        Self {
            fg: Color::Rgb(224, 224, 235),
            border: Color::Rgb(62, 62, 90),
            border_focused: Color::Rgb(124, 77, 255),
            highlight: Color::Rgb(124, 77, 255),
            accent: Color::Rgb(0, 229, 255),
            selected_bg: Color::Rgb(26, 35, 126),
            selected_fg: Color::White,
            success: Color::Rgb(105, 240, 174),
            error: Color::Rgb(255, 82, 82),
            muted: Color::Rgb(110, 110, 130),
        }
    }
}

/// 常用样式
pub struct Styles;

impl Styles {
    /// 标题样式
    pub fn title() -> Style {
        Style::default()
            .fg(colors().fg)
            .add_modifier(Modifier::BOLD)
    }

    /// 选中项样式
    pub fn selected() -> Style {
        let c = colors();
        Style::default()
            .bg(c.selected_bg)
            .fg(c.selected_fg)
            .add_modifier(Modifier::BOLD)
    }

    /// 尚未揭示的元素
    pub fn unrevealed() -> Style {
        Style::default()
            .fg(colors().muted)
            .add_modifier(Modifier::DIM)
    }

    /// 状态栏样式
    pub fn statusbar() -> Style {
        Style::default().bg(colors().selected_bg).fg(Color::White)
    }

    /// 快捷键提示样式
    pub fn hint_key() -> Style {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    }

    /// 快捷键描述样式
    pub fn hint_desc() -> Style {
        Style::default().fg(Color::Rgb(180, 180, 200))
    }
}
