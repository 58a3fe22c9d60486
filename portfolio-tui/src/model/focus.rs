//! 焦点状态定义

use super::FormField;

/// 键盘焦点
///
/// 在页面上时按键滚动页面；在表单字段上时按键输入文字。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Page,
    Field(FormField),
}

impl Focus {
    /// Tab：页面 → 姓名 → 邮箱 → 主题 → 留言 → 页面
    pub fn next(self) -> Self {
        match self {
            Focus::Page => Focus::Field(FormField::Name),
            Focus::Field(FormField::Name) => Focus::Field(FormField::Email),
            Focus::Field(FormField::Email) => Focus::Field(FormField::Subject),
            Focus::Field(FormField::Subject) => Focus::Field(FormField::Message),
            Focus::Field(FormField::Message) => Focus::Page,
        }
    }

    /// Shift+Tab
    pub fn previous(self) -> Self {
        match self {
            Focus::Page => Focus::Field(FormField::Message),
            Focus::Field(FormField::Name) => Focus::Page,
            Focus::Field(FormField::Email) => Focus::Field(FormField::Name),
            Focus::Field(FormField::Subject) => Focus::Field(FormField::Email),
            Focus::Field(FormField::Message) => Focus::Field(FormField::Subject),
        }
    }

    /// 当前聚焦的字段
    pub fn field(self) -> Option<FormField> {
        match self {
            Focus::Field(field) => Some(field),
            Focus::Page => None,
        }
    }

    pub fn is_page(self) -> bool {
        matches!(self, Focus::Page)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tab_cycle_returns_to_page() {
        let mut focus = Focus::Page;
        for _ in 0..5 {
            focus = focus.next();
        }
        assert_eq!(focus, Focus::Page);
    }

    #[test]
    fn previous_undoes_next() {
        let mut focus = Focus::Page;
        for _ in 0..5 {
            assert_eq!(focus.next().previous(), focus);
            focus = focus.next();
        }
    }
}
