//! Contact form validation and submission state machine
//!
//! The controller is synchronous. `submit` validates, enters `Submitting` and
//! hands back a [`SubmissionTicket`]; the host runs the backend call with
//! [`deliver`] and reports the outcome through `complete`. Delayed steps
//! (button reset, notification hide) are [`TimerSlot`]s driven by `tick`.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use crate::config::PortfolioConfig;
use crate::error::{CoreError, CoreResult, FieldError};
use crate::traits::{ContactBackend, PageSurface};
use crate::types::{
    ContactSubmission, ElementId, FieldId, FieldValidity, NotificationKind, PageLayout,
    SubmissionState, SubmissionTicket,
};
use crate::utils::TimerSlot;

use super::validation::validate_field;

pub const HIDDEN_CLASS: &str = "hidden";
pub const DEFAULT_SUBMIT_LABEL: &str = "Send Message";
pub const SUCCESS_LABEL: &str = "Message Sent!";

pub const ERROR_BORDER: &str = "#ff5252";
const RESTING_BORDER: &str = "rgba(255, 255, 255, 0.3)";

/// Run one backend call, bounded by `timeout`
///
/// A call that outlives the timeout resolves as [`CoreError::SubmissionTimeout`],
/// so every ticket eventually gets an outcome.
pub async fn deliver(
    backend: &dyn ContactBackend,
    submission: &ContactSubmission,
    timeout: Duration,
) -> CoreResult<()> {
    match tokio::time::timeout(timeout, backend.submit(submission)).await {
        Ok(result) => result,
        Err(_) => Err(CoreError::SubmissionTimeout(
            u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX),
        )),
    }
}

/// Contact form controller
pub struct ContactFormController {
    submit_button: ElementId,
    submit_label: ElementId,
    submit_loader: ElementId,
    subject_field: ElementId,
    idle_label: String,

    validity: HashMap<FieldId, FieldValidity>,
    state: SubmissionState,
    /// Bumped on every new submission; stale tickets carry an older value
    generation: u64,

    reset_timer: TimerSlot,
    notification_timer: TimerSlot,
    notification: Option<NotificationKind>,

    success_reset: Duration,
    notification_duration: Duration,
    timeout: Duration,
}

impl ContactFormController {
    #[must_use]
    pub fn new(layout: &PageLayout, config: &PortfolioConfig) -> Self {
        Self {
            submit_button: layout.submit_button.clone(),
            submit_label: layout.submit_label.clone(),
            submit_loader: layout.submit_loader.clone(),
            subject_field: layout.subject_field.clone(),
            idle_label: DEFAULT_SUBMIT_LABEL.to_string(),
            validity: FieldId::ALL
                .iter()
                .map(|f| (*f, FieldValidity::Unvalidated))
                .collect(),
            state: SubmissionState::Idle,
            generation: 0,
            reset_timer: TimerSlot::new(),
            notification_timer: TimerSlot::new(),
            notification: None,
            success_reset: config.success_reset(),
            notification_duration: config.notification(),
            timeout: config.submit_timeout(),
        }
    }

    pub fn state(&self) -> SubmissionState {
        self.state
    }

    pub fn validity(&self, field: FieldId) -> FieldValidity {
        self.validity.get(&field).copied().unwrap_or_default()
    }

    /// Notification currently on screen
    pub fn notification(&self) -> Option<NotificationKind> {
        self.notification
    }

    /// Upper bound the host must put on the backend call
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Earliest pending timer, for hosts that sleep between events
    pub fn next_deadline(&self) -> Option<Instant> {
        match (self.reset_timer.deadline(), self.notification_timer.deadline()) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }

    // === Field feedback ===

    /// Validate one field and mirror the outcome into its error display
    ///
    /// Any shown error is cleared first, so calling this repeatedly on an
    /// unchanged value always leaves the same state.
    pub fn validate_field(
        &mut self,
        surface: &mut dyn PageSurface,
        field: FieldId,
    ) -> Result<(), FieldError> {
        clear_error(surface, field);

        let raw = surface.value(&field.element()).unwrap_or_default();
        let result = validate_field(field, &raw);
        match result {
            Ok(()) => {
                self.validity.insert(field, FieldValidity::Valid);
            }
            Err(error) => {
                show_error(surface, error);
                self.validity.insert(field, FieldValidity::Invalid);
            }
        }
        result
    }

    /// Focus left the field
    pub fn on_blur(&mut self, surface: &mut dyn PageSurface, field: FieldId) {
        // 失焦时校验失败只需在页面上展示
        let _ = self.validate_field(surface, field);
    }

    /// The user typed into the field
    ///
    /// A shown error goes away as soon as the field is non-empty; full
    /// validation waits for the next blur.
    pub fn on_input(&mut self, surface: &mut dyn PageSurface, field: FieldId) {
        let raw = surface.value(&field.element()).unwrap_or_default();
        if raw.trim().is_empty() {
            return;
        }
        clear_error(surface, field);
        self.validity.insert(field, FieldValidity::Unvalidated);
    }

    /// Validate every field; returns the failures in form order
    pub fn validate_all(&mut self, surface: &mut dyn PageSurface) -> Vec<FieldError> {
        FieldId::ALL
            .iter()
            .filter_map(|f| self.validate_field(surface, *f).err())
            .collect()
    }

    // === Submission ===

    /// Submit the form
    ///
    /// Validation runs first and synchronously; nothing is sent unless all
    /// fields pass. While a submission is in flight or its success is still
    /// on display the control is not idle and this is refused.
    pub fn submit(&mut self, surface: &mut dyn PageSurface) -> CoreResult<SubmissionTicket> {
        if self.state != SubmissionState::Idle {
            log::debug!("Submit ignored while {:?}", self.state);
            return Err(CoreError::SubmissionInProgress);
        }

        let errors = self.validate_all(surface);
        if !errors.is_empty() {
            let fields = errors.iter().map(|e| e.field()).collect();
            return Err(CoreError::ValidationFailed(fields));
        }

        let read = |id: &ElementId| {
            surface
                .value(id)
                .map(|v| v.trim().to_string())
                .unwrap_or_default()
        };
        let submission = ContactSubmission::new(
            read(&FieldId::Name.element()),
            read(&FieldId::Email.element()),
            read(&self.subject_field),
            read(&FieldId::Message.element()),
        );

        if let Some(label) = surface.text(&self.submit_label).filter(|l| !l.is_empty()) {
            self.idle_label = label;
        }

        self.transition(SubmissionState::Submitting);
        self.generation += 1;
        self.reset_timer.cancel();

        surface.add_class(&self.submit_label, HIDDEN_CLASS);
        surface.remove_class(&self.submit_loader, HIDDEN_CLASS);
        surface.set_disabled(&self.submit_button, true);

        // 清除上一轮留下的提示
        if let Some(kind) = self.notification.take() {
            surface.add_class(&kind.element(), HIDDEN_CLASS);
        }
        self.notification_timer.cancel();

        log::debug!("Submission {} started", submission.id);
        Ok(SubmissionTicket {
            generation: self.generation,
            submission,
        })
    }

    /// Apply the backend outcome for `ticket`
    ///
    /// Returns `false` when the ticket is stale and nothing changed.
    pub fn complete(
        &mut self,
        ticket: &SubmissionTicket,
        result: CoreResult<()>,
        surface: &mut dyn PageSurface,
        now: Instant,
    ) -> bool {
        if ticket.generation != self.generation || self.state != SubmissionState::Submitting {
            log::debug!(
                "Stale submission outcome ignored (ticket {}, current {})",
                ticket.generation,
                self.generation
            );
            return false;
        }

        match result {
            Ok(()) => {
                log::info!("Contact form submitted: {}", ticket.submission.id);
                self.transition(SubmissionState::Succeeded);

                surface.add_class(&self.submit_loader, HIDDEN_CLASS);
                surface.remove_class(&self.submit_label, HIDDEN_CLASS);
                surface.set_text(&self.submit_label, SUCCESS_LABEL);

                for field in FieldId::ALL {
                    surface.set_value(&field.element(), "");
                    clear_error(surface, field);
                    self.validity.insert(field, FieldValidity::Unvalidated);
                }
                surface.set_value(&self.subject_field, "");

                self.reset_timer.schedule(now, self.success_reset);
                self.show_notification(surface, NotificationKind::Success, now);
            }
            Err(e) => {
                if e.is_expected() {
                    log::warn!("Contact form submission failed: {e}");
                } else {
                    log::error!("Contact form submission failed: {e}");
                }
                self.transition(SubmissionState::Idle);
                self.restore_button(surface);
                self.show_notification(surface, NotificationKind::Failure, now);
            }
        }
        true
    }

    /// Timer tick: fire due continuations
    pub fn tick(&mut self, surface: &mut dyn PageSurface, now: Instant) {
        if self.reset_timer.fire_if_due(now) && self.state == SubmissionState::Succeeded {
            self.transition(SubmissionState::Idle);
            self.restore_button(surface);
        }

        if self.notification_timer.fire_if_due(now) {
            if let Some(kind) = self.notification.take() {
                surface.add_class(&kind.element(), HIDDEN_CLASS);
            }
        }
    }

    fn transition(&mut self, next: SubmissionState) {
        debug_assert!(self.state.can_transition_to(next));
        log::debug!("Submission state: {:?} -> {:?}", self.state, next);
        self.state = next;
    }

    fn restore_button(&self, surface: &mut dyn PageSurface) {
        surface.set_text(&self.submit_label, &self.idle_label);
        surface.remove_class(&self.submit_label, HIDDEN_CLASS);
        surface.add_class(&self.submit_loader, HIDDEN_CLASS);
        surface.set_disabled(&self.submit_button, false);
    }

    fn show_notification(
        &mut self,
        surface: &mut dyn PageSurface,
        kind: NotificationKind,
        now: Instant,
    ) {
        if let Some(previous) = self.notification.replace(kind) {
            surface.add_class(&previous.element(), HIDDEN_CLASS);
        }
        surface.remove_class(&kind.element(), HIDDEN_CLASS);
        self.notification_timer
            .schedule(now, self.notification_duration);
    }
}

fn show_error(surface: &mut dyn PageSurface, error: FieldError) {
    let field = error.field();
    let error_el = field.error_element();
    surface.set_text(&error_el, &error.to_string());
    surface.set_style(&error_el, "display", "block");
    surface.set_style(&field.element(), "border-color", ERROR_BORDER);
}

fn clear_error(surface: &mut dyn PageSurface, field: FieldId) {
    let error_el = field.error_element();
    surface.set_text(&error_el, "");
    surface.set_style(&error_el, "display", "none");
    surface.set_style(&field.element(), "border-color", RESTING_BORDER);
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::test_utils::{fill_valid_form, standard_document, MockContactBackend};
    use crate::Document;

    const SEC: Duration = Duration::from_secs(1);

    fn controller() -> ContactFormController {
        ContactFormController::new(&PageLayout::default(), &PortfolioConfig::default())
    }

    fn error_text(doc: &Document, field: FieldId) -> String {
        doc.text(&field.error_element()).unwrap_or_default()
    }

    fn error_shown(doc: &Document, field: FieldId) -> bool {
        doc.style(&field.error_element(), "display").as_deref() == Some("block")
    }

    #[test]
    fn blur_shows_and_clears_errors() {
        let mut doc = standard_document();
        let mut form = controller();

        doc.set_value(&FieldId::Name.element(), "A");
        form.on_blur(&mut doc, FieldId::Name);
        assert!(error_shown(&doc, FieldId::Name));
        assert_eq!(
            error_text(&doc, FieldId::Name),
            "Name must be at least 2 characters"
        );
        assert_eq!(form.validity(FieldId::Name), FieldValidity::Invalid);

        doc.set_value(&FieldId::Name.element(), "Al");
        form.on_blur(&mut doc, FieldId::Name);
        assert!(!error_shown(&doc, FieldId::Name));
        assert_eq!(
            doc.style(&FieldId::Name.element(), "border-color").as_deref(),
            Some(RESTING_BORDER)
        );
        assert_eq!(form.validity(FieldId::Name), FieldValidity::Valid);
    }

    #[test]
    fn validation_is_idempotent() {
        let mut doc = standard_document();
        let mut form = controller();
        doc.set_value(&FieldId::Email.element(), "a@b");

        let first = form.validate_field(&mut doc, FieldId::Email);
        let snapshot = (
            error_text(&doc, FieldId::Email),
            error_shown(&doc, FieldId::Email),
        );
        let second = form.validate_field(&mut doc, FieldId::Email);

        assert_eq!(first, second);
        assert_eq!(
            snapshot,
            (
                error_text(&doc, FieldId::Email),
                error_shown(&doc, FieldId::Email)
            )
        );
    }

    #[test]
    fn typing_clears_stale_error() {
        let mut doc = standard_document();
        let mut form = controller();

        form.on_blur(&mut doc, FieldId::Message);
        assert_eq!(error_text(&doc, FieldId::Message), "Message is required");

        // 空输入不清除
        doc.set_value(&FieldId::Message.element(), "  ");
        form.on_input(&mut doc, FieldId::Message);
        assert!(error_shown(&doc, FieldId::Message));

        doc.set_value(&FieldId::Message.element(), "H");
        form.on_input(&mut doc, FieldId::Message);
        assert!(!error_shown(&doc, FieldId::Message));
        assert_eq!(form.validity(FieldId::Message), FieldValidity::Unvalidated);
    }

    #[test]
    fn invalid_form_never_enters_submitting() {
        let mut doc = standard_document();
        let mut form = controller();
        doc.set_value(&FieldId::Name.element(), "Al");

        let result = form.submit(&mut doc);

        assert!(matches!(
            result,
            Err(CoreError::ValidationFailed(ref f)) if f == &[FieldId::Email, FieldId::Message]
        ));
        assert_eq!(form.state(), SubmissionState::Idle);
        assert!(!doc.is_disabled(&ElementId::new("submitButton")));
        assert!(error_shown(&doc, FieldId::Email));
        assert!(!error_shown(&doc, FieldId::Name));
    }

    #[test]
    fn successful_submission_round_trip() {
        let mut doc = standard_document();
        let mut form = controller();
        fill_valid_form(&mut doc);
        doc.set_value(&ElementId::new("subject"), "Hi");
        let t0 = Instant::now();

        let ticket = form.submit(&mut doc).unwrap();
        assert_eq!(form.state(), SubmissionState::Submitting);
        assert!(doc.is_disabled(&ElementId::new("submitButton")));
        assert!(doc.has_class(&ElementId::new("submitText"), HIDDEN_CLASS));
        assert!(!doc.has_class(&ElementId::new("submitLoader"), HIDDEN_CLASS));
        assert_eq!(ticket.submission.name, "Al");
        assert_eq!(ticket.submission.subject, "Hi");

        let t1 = t0 + 2 * SEC;
        assert!(form.complete(&ticket, Ok(()), &mut doc, t1));
        assert_eq!(form.state(), SubmissionState::Succeeded);
        assert_eq!(doc.text(&ElementId::new("submitText")).as_deref(), Some(SUCCESS_LABEL));
        assert_eq!(form.notification(), Some(NotificationKind::Success));
        assert!(!doc.has_class(&ElementId::new("successMessage"), HIDDEN_CLASS));
        for field in FieldId::ALL {
            assert_eq!(doc.value(&field.element()).as_deref(), Some(""));
            assert!(!error_shown(&doc, field));
        }

        form.tick(&mut doc, t1 + 2 * SEC);
        assert_eq!(form.state(), SubmissionState::Succeeded);

        form.tick(&mut doc, t1 + 3 * SEC);
        assert_eq!(form.state(), SubmissionState::Idle);
        assert!(!doc.is_disabled(&ElementId::new("submitButton")));
        assert_eq!(
            doc.text(&ElementId::new("submitText")).as_deref(),
            Some(DEFAULT_SUBMIT_LABEL)
        );
        assert!(!doc.has_class(&ElementId::new("successMessage"), HIDDEN_CLASS));

        form.tick(&mut doc, t1 + 5 * SEC);
        assert!(doc.has_class(&ElementId::new("successMessage"), HIDDEN_CLASS));
        assert_eq!(form.notification(), None);
    }

    #[test]
    fn failure_restores_button_and_keeps_values() {
        let mut doc = standard_document();
        let mut form = controller();
        fill_valid_form(&mut doc);
        let t0 = Instant::now();

        let ticket = form.submit(&mut doc).unwrap();
        form.complete(
            &ticket,
            Err(CoreError::SubmissionFailed("offline".to_string())),
            &mut doc,
            t0 + SEC,
        );

        assert_eq!(form.state(), SubmissionState::Idle);
        assert!(!doc.is_disabled(&ElementId::new("submitButton")));
        assert!(!doc.has_class(&ElementId::new("submitText"), HIDDEN_CLASS));
        assert!(doc.has_class(&ElementId::new("submitLoader"), HIDDEN_CLASS));
        assert_eq!(doc.value(&FieldId::Name.element()).as_deref(), Some("Al"));
        assert_eq!(form.notification(), Some(NotificationKind::Failure));
        assert!(!doc.has_class(&ElementId::new("errorMessage"), HIDDEN_CLASS));

        // 失败后可以重试
        assert!(form.submit(&mut doc).is_ok());
    }

    #[test]
    fn double_submit_is_refused() {
        let mut doc = standard_document();
        let mut form = controller();
        fill_valid_form(&mut doc);

        let ticket = form.submit(&mut doc).unwrap();
        let second = form.submit(&mut doc);

        assert!(matches!(second, Err(CoreError::SubmissionInProgress)));
        assert_eq!(ticket.generation(), 1);
    }

    #[test]
    fn stale_ticket_is_ignored() {
        let mut doc = standard_document();
        let mut form = controller();
        fill_valid_form(&mut doc);
        let t0 = Instant::now();

        let first = form.submit(&mut doc).unwrap();
        form.complete(
            &first,
            Err(CoreError::SubmissionTimeout(10_000)),
            &mut doc,
            t0 + 10 * SEC,
        );
        let second = form.submit(&mut doc).unwrap();

        // 第一次提交的迟到结果不得影响第二次
        assert!(!form.complete(&first, Ok(()), &mut doc, t0 + 12 * SEC));
        assert_eq!(form.state(), SubmissionState::Submitting);

        assert!(form.complete(&second, Ok(()), &mut doc, t0 + 13 * SEC));
        assert_eq!(form.state(), SubmissionState::Succeeded);
    }

    #[test]
    fn next_deadline_tracks_earliest_timer() {
        let mut doc = standard_document();
        let mut form = controller();
        fill_valid_form(&mut doc);
        let t0 = Instant::now();
        assert!(form.next_deadline().is_none());

        let ticket = form.submit(&mut doc).unwrap();
        form.complete(&ticket, Ok(()), &mut doc, t0);
        assert_eq!(form.next_deadline(), Some(t0 + 3 * SEC));
    }

    #[tokio::test]
    async fn deliver_passes_submission_to_backend() {
        let mut doc = standard_document();
        let mut form = controller();
        let backend = Arc::new(MockContactBackend::new());
        fill_valid_form(&mut doc);

        let ticket = form.submit(&mut doc).unwrap();
        let result = deliver(backend.as_ref(), &ticket.submission, form.timeout()).await;

        assert!(result.is_ok());
        assert_eq!(backend.call_count(), 1);
        assert_eq!(backend.received()[0].email, "a@b.co");
    }

    #[tokio::test]
    async fn invalid_form_never_reaches_backend() {
        let mut doc = standard_document();
        let mut form = controller();
        let backend = MockContactBackend::new();
        doc.set_value(&FieldId::Email.element(), "a@b");

        if let Ok(ticket) = form.submit(&mut doc) {
            let _ = deliver(&backend, &ticket.submission, form.timeout()).await;
        }

        assert_eq!(backend.call_count(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn deliver_times_out_slow_backend() {
        let backend = crate::traits::SimulatedContactBackend::new(Duration::from_secs(30));
        let submission = ContactSubmission::new(
            "Al".to_string(),
            "a@b.co".to_string(),
            String::new(),
            "Hello there!!".to_string(),
        );

        let result = deliver(&backend, &submission, Duration::from_secs(10)).await;

        assert!(matches!(result, Err(CoreError::SubmissionTimeout(10_000))));
    }
}
