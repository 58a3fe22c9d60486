//! 界面组件

pub mod contact_form;
pub mod navbar;
pub mod overlay;
pub mod page;
pub mod statusbar;

/// 区块 id 转成显示名（`skills` → `Skills`）
pub fn section_label(id: &str) -> String {
    let mut chars = id.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
