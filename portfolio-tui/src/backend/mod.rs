//!
//! src/backend/mod.rs
//! Backend 层：与核心库和外部环境打交道的服务
//!
//!     config_service.rs   读取/保存 `<config_dir>/portfolio/config.json`
//!     submission.rs       在 tokio 上执行联系表单提交，结果经通道送回主循环
//!
//! 数据流：
//!     用户在表单上按 Enter
//!         ↓
//!     Update 层调用 ContactFormController::submit，得到 SubmissionTicket
//!         ↓
//!     app.rs 把票据交给 SubmissionDispatcher（后台任务，带超时）
//!         ↓
//!     结果经 mpsc 通道回到主循环，转成 AppMessage::SubmissionFinished
//!         ↓
//!     Update 层调用 ContactFormController::complete
//!

mod config_service;
mod submission;

pub use config_service::{ConfigService, LocalConfigService};
pub use submission::{SubmissionDispatcher, SubmissionOutcome};
