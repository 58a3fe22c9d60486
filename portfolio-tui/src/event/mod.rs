//!
//! src/event/mod.rs
//! Event 层：把终端事件翻译成 Message
//!
//!     键盘 ──┐
//!     鼠标 ──┼──▶ handle_event(event, &app) ──▶ AppMessage
//!     窗口 ──┘
//!
//! 按键含义取决于焦点：焦点在页面时滚动与导航，
//! 焦点在表单字段时字符键都是输入。
//!

mod handler;
mod keymap;

pub use handler::{handle_event, poll_event};
pub use keymap::DefaultKeymap;
