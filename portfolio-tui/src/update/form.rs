//! 联系表单：输入、焦点与提交

use std::time::Instant;

use portfolio_core::types::SubmissionState;
use portfolio_core::PageSurface;

use crate::backend::SubmissionOutcome;
use crate::message::FormMessage;
use crate::model::{App, Focus, FormField};

/// 处理表单消息
pub fn update(app: &mut App, msg: FormMessage) {
    match msg {
        FormMessage::Input(c) => edit(app, |value| value.push(c)),
        FormMessage::Backspace => edit(app, |value| {
            value.pop();
        }),
        FormMessage::Submit => submit(app),
    }
}

/// 切换焦点；离开的字段触发 blur 校验
pub fn change_focus(app: &mut App, next: Focus) {
    if next == app.focus {
        return;
    }
    if let Some(field) = app.focus.field().and_then(FormField::validated) {
        app.controllers
            .form
            .on_blur(&mut app.page.document, field);
    }
    app.focus = next;
}

fn edit(app: &mut App, apply: impl FnOnce(&mut String)) {
    let Some(field) = app.focus.field() else {
        return;
    };
    let id = field.element();
    let doc = &mut app.page.document;

    let mut value = doc.value(&id).unwrap_or_default();
    apply(&mut value);
    doc.set_value(&id, &value);

    if let Some(validated) = field.validated() {
        app.controllers.form.on_input(doc, validated);
    }
}

fn submit(app: &mut App) {
    match app.controllers.form.submit(&mut app.page.document) {
        Ok(ticket) => {
            log::info!("Sending contact form {}", ticket.submission.id);
            app.outbox.push(ticket);
            app.set_status("Sending message...");
        }
        Err(e) => {
            if e.is_expected() {
                log::debug!("Submit refused: {e}");
            } else {
                log::error!("Submit failed: {e}");
            }
            app.set_status(e.to_string());
        }
    }
}

/// 后台提交完成
pub fn finish(app: &mut App, outcome: SubmissionOutcome, now: Instant) {
    let SubmissionOutcome { ticket, result } = outcome;
    if !app
        .controllers
        .form
        .complete(&ticket, result, &mut app.page.document, now)
    {
        return;
    }

    match app.controllers.form.state() {
        SubmissionState::Succeeded => app.set_status("Message sent"),
        _ => app.set_status("Message could not be sent, please try again"),
    }
}
