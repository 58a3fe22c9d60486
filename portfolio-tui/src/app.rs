//! 主循环
//!
//!     ┌──▶ 1. 渲染 ──▶ 2. 派发待提交表单 ──▶ 3. 收取后台结果
//!     │                                            │
//!     └── 5. Tick ◀── 4. 轮询并处理终端事件 ◀──────┘
//!
//! 轮询超时即帧间隔，平滑滚动和各种计时器都由 Tick 推进。

use std::time::Duration;

use anyhow::Result;
use tokio::sync::mpsc::UnboundedReceiver;

use crate::backend::{SubmissionDispatcher, SubmissionOutcome};
use crate::event;
use crate::message::AppMessage;
use crate::model::App;
use crate::update;
use crate::util::Term;
use crate::view;

/// 帧间隔
const FRAME: Duration = Duration::from_millis(16);

pub fn run(
    terminal: &mut Term,
    app: &mut App,
    dispatcher: &SubmissionDispatcher,
    outcomes: &mut UnboundedReceiver<SubmissionOutcome>,
) -> Result<()> {
    loop {
        // 1. 渲染 UI
        terminal.draw(|frame| {
            view::render(app, frame);
        })?;

        // 检查是否应该退出
        if app.should_quit {
            break;
        }

        // 2. 派发新的提交
        for ticket in app.outbox.drain(..) {
            dispatcher.dispatch(ticket);
        }

        // 3. 收取已完成的提交
        while let Ok(outcome) = outcomes.try_recv() {
            update::update(app, AppMessage::SubmissionFinished(outcome));
        }

        // 4. 轮询事件
        if let Some(event) = event::poll_event(FRAME)? {
            let msg = event::handle_event(event, app);
            update::update(app, msg);
        }

        // 5. 推进计时器
        update::update(app, AppMessage::Tick);
    }

    Ok(())
}
