//!
//! src/model/mod.rs
//! Model 层：应用状态定义
//!
//! Model 层是应用状态的 “唯一真相来源”。
//! 页面本身是一份 `portfolio_core::Document`，所有交互效果
//! （高亮、揭示、表单、视差、光标……）都由核心控制器写进这份文档，
//! View 层只负责把文档画到终端上。
//!
//!
//! 有模块结构：
//!     src/model/mod.rs
//!         mod app;            // 主应用状态
//!         mod content;        // 页面内容与文档构建
//!         mod focus;          // 焦点状态（Page / Field）
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 一、主应用状态（App）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     在 src/model/app.rs 中定义：
//!
//!         pub struct App {
//!             pub should_quit: bool,                  // 退出标志
//!             pub page: Page,                         // 文档 + 内容块
//!             pub controllers: PageControllers,       // 核心控制器
//!             pub focus: Focus,                       // 键盘焦点
//!             pub outbox: Vec<SubmissionTicket>,      // 待派发的提交
//!             pub status_message: Option<String>,     // 状态栏消息
//!             ...
//!         }
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 二、坐标换算
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     控制器使用文档单位（与网页像素同一量级），终端使用行列：
//!
//!         1 行 = ROW_UNITS (20) 个单位
//!         1 列 = COLUMN_UNITS (10) 个单位
//!
//!     因此 80 列的终端视口宽 800，超过光标断点 768，会显示光标跟随；
//!     更窄的终端则没有。
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 三、焦点管理（Focus）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     用户按 Tab
//!         ↓
//!     event/handler.rs 返回 AppMessage::FocusNext
//!         ↓
//!     update/form.rs 对离开的字段触发 blur 校验，然后切换焦点
//!         ↓
//!     view/components/page.rs 给聚焦字段画上光标
//!

mod app;
mod content;
mod focus;

pub use app::App;
pub use content::{
    build_page, hero_text, viewport_for_terminal, Block, BlockKind, FormField, Page, COLUMN_UNITS,
    NAVBAR_ROWS, ROW_UNITS, STATUS_ROWS,
};
pub use focus::Focus;
