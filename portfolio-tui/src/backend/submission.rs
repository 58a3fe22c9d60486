//! 联系表单异步提交
//!
//! 控制器是同步的：Update 层拿到 `SubmissionTicket` 后交给这里，
//! 在 tokio 上执行后端调用（带超时），结果通过通道送回主循环。

use std::sync::Arc;
use std::time::Duration;

use portfolio_core::services::deliver;
use portfolio_core::types::SubmissionTicket;
use portfolio_core::{ContactBackend, CoreResult};
use tokio::sync::mpsc::UnboundedSender;

/// 一次提交的结果
#[derive(Debug)]
pub struct SubmissionOutcome {
    pub ticket: SubmissionTicket,
    pub result: CoreResult<()>,
}

/// 提交调度器
#[derive(Clone)]
pub struct SubmissionDispatcher {
    backend: Arc<dyn ContactBackend>,
    timeout: Duration,
    tx: UnboundedSender<SubmissionOutcome>,
}

impl SubmissionDispatcher {
    pub fn new(
        backend: Arc<dyn ContactBackend>,
        timeout: Duration,
        tx: UnboundedSender<SubmissionOutcome>,
    ) -> Self {
        Self {
            backend,
            timeout,
            tx,
        }
    }

    /// 在后台执行提交
    pub fn dispatch(&self, ticket: SubmissionTicket) {
        let backend = Arc::clone(&self.backend);
        let timeout = self.timeout;
        let tx = self.tx.clone();

        tokio::spawn(async move {
            let result = deliver(backend.as_ref(), &ticket.submission, timeout).await;
            if tx.send(SubmissionOutcome { ticket, result }).is_err() {
                // 主循环已退出
                log::debug!("Submission outcome dropped: receiver closed");
            }
        });
    }
}
