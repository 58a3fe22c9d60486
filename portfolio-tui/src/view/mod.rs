//!
//! src/view/mod.rs
//! View 层：把 Model 画到终端上
//!
//! View 层只读取 `App`，从不修改它。页面上一切可见的交互状态
//! （高亮、揭示、错误提示、按钮标签……）都来自核心控制器写入文档的
//! 类名与样式，这里只负责把这些样式翻译成终端颜色。
//!
//!
//!     ┌──────────────────────────────────────────────┐
//!     │ navbar：站点名 + 导航链接（当前区块高亮）      │  NAVBAR_ROWS
//!     ├──────────────────────────────────────────────┤
//!     │                                              │
//!     │ page：按滚动位置绘制内容块                    │
//!     │       叠加视差图形、光标跟随、回到顶部按钮     │
//!     │                                              │
//!     ├──────────────────────────────────────────────┤
//!     │ statusbar：快捷键提示 + 状态消息               │  STATUS_ROWS
//!     └──────────────────────────────────────────────┘
//!
//!     预加载遮罩与移动端菜单画在最上层。
//!

mod components;
mod layout;
mod theme;

pub use layout::render;
