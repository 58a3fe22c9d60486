//! 快捷键定义

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// 快捷键绑定
#[derive(Debug, Clone)]
pub struct KeyBinding {
    pub modifiers: KeyModifiers,
    pub code: KeyCode,
}

impl KeyBinding {
    pub const fn new(modifiers: KeyModifiers, code: KeyCode) -> Self {
        Self { modifiers, code }
    }

    pub const fn key(code: KeyCode) -> Self {
        Self::new(KeyModifiers::NONE, code)
    }

    pub const fn shift(code: KeyCode) -> Self {
        Self::new(KeyModifiers::SHIFT, code)
    }

    pub const fn ctrl(code: KeyCode) -> Self {
        Self::new(KeyModifiers::CONTROL, code)
    }

    /// 检查按键事件是否匹配此快捷键绑定
    pub fn matches(&self, key: &KeyEvent) -> bool {
        key.modifiers == self.modifiers && key.code == self.code
    }

    /// 状态栏里显示的按键名
    pub fn label(&self) -> String {
        let key = match self.code {
            KeyCode::Char(c) => c.to_string(),
            KeyCode::Up => "↑".to_string(),
            KeyCode::Down => "↓".to_string(),
            KeyCode::PageUp => "PgUp".to_string(),
            KeyCode::PageDown => "PgDn".to_string(),
            KeyCode::Tab => "Tab".to_string(),
            KeyCode::BackTab => "S-Tab".to_string(),
            KeyCode::Enter => "Enter".to_string(),
            KeyCode::Esc => "Esc".to_string(),
            other => format!("{other:?}"),
        };
        if self.modifiers.contains(KeyModifiers::CONTROL) {
            format!("^{key}")
        } else {
            key
        }
    }
}

/// 默认快捷键配置
pub struct DefaultKeymap;

impl DefaultKeymap {
    // 全局
    pub const QUIT: KeyBinding = KeyBinding::key(KeyCode::Char('q'));
    pub const FORCE_QUIT: KeyBinding = KeyBinding::ctrl(KeyCode::Char('c'));
    pub const BACK: KeyBinding = KeyBinding::key(KeyCode::Esc);
    pub const FOCUS_NEXT: KeyBinding = KeyBinding::key(KeyCode::Tab);
    pub const FOCUS_PREVIOUS: KeyBinding = KeyBinding::shift(KeyCode::BackTab);

    // 页面
    pub const SCROLL_UP: KeyBinding = KeyBinding::key(KeyCode::Up);
    pub const SCROLL_DOWN: KeyBinding = KeyBinding::key(KeyCode::Down);
    pub const PAGE_UP: KeyBinding = KeyBinding::key(KeyCode::PageUp);
    pub const PAGE_DOWN: KeyBinding = KeyBinding::key(KeyCode::PageDown);
    pub const SCROLL_TO_TOP: KeyBinding = KeyBinding::key(KeyCode::Char('t'));
    pub const TOGGLE_MENU: KeyBinding = KeyBinding::key(KeyCode::Char('m'));
    pub const IMAGE_FAILED: KeyBinding = KeyBinding::key(KeyCode::Char('i'));

    // 表单
    pub const SUBMIT: KeyBinding = KeyBinding::key(KeyCode::Enter);
    pub const BACKSPACE: KeyBinding = KeyBinding::key(KeyCode::Backspace);
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyEventKind, KeyEventState};

    use super::*;

    #[test]
    fn matches_requires_exact_modifiers() {
        let plain = KeyEvent {
            code: KeyCode::Char('c'),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        };
        let ctrl = KeyEvent {
            modifiers: KeyModifiers::CONTROL,
            ..plain
        };

        assert!(DefaultKeymap::FORCE_QUIT.matches(&ctrl));
        assert!(!DefaultKeymap::FORCE_QUIT.matches(&plain));
    }

    #[test]
    fn labels() {
        assert_eq!(DefaultKeymap::FORCE_QUIT.label(), "^c");
        assert_eq!(DefaultKeymap::PAGE_DOWN.label(), "PgDn");
    }
}
