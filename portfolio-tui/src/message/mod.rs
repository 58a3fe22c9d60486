//!
//! src/message/mod.rs
//! Message 层：事件消息定义
//!
//! 作为 Event → Update 之间的桥梁
//! 所有的用户操作和状态变更都通过 Message 来表达。
//! Update 层根据 Message 来更新 Model。
//!
//!
//! 有模块结构：
//!     src/message/mod.rs
//!         mod app;            // 主消息
//!         mod form;           // 联系表单子消息
//!
//!
//!     除了键盘和鼠标，还有两类消息不是用户产生的：
//!         - Tick：主循环每帧发送一次，推进平滑滚动和各种计时器
//!         - SubmissionFinished：后台提交任务完成后经通道送回
//!

mod app;
mod form;

pub use app::AppMessage;
pub use form::FormMessage;
