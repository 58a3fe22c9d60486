#![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]
//! Observable page behavior through the public controller API

mod common;

use std::sync::Arc;
use std::time::{Duration, Instant};

use common::{fill, page, RecordingBackend, SECTION_HEIGHT};
use portfolio_core::services::{deliver, ACTIVE_CLASS, REVEALED_CLASS};
use portfolio_core::traits::UiAvatarsService;
use portfolio_core::types::{ElementId, FieldId, PageLayout, SubmissionState};
use portfolio_core::{CoreError, PageControllers, PageSurface, PortfolioConfig};

fn controllers() -> PageControllers {
    PageControllers::new(
        &PageLayout::default(),
        &PortfolioConfig::default(),
        Arc::new(UiAvatarsService::default()),
    )
}

fn active_links(doc: &portfolio_core::Document) -> Vec<String> {
    PageLayout::default()
        .nav_entries
        .iter()
        .filter(|e| doc.has_class(&e.link, ACTIVE_CLASS))
        .map(|e| e.target.to_string())
        .collect()
}

// ===== View activation =====

#[test]
fn active_link_always_matches_active_section() {
    let mut doc = page();
    let mut page_ctl = controllers();
    page_ctl.init(&mut doc);

    let mut now = Instant::now();
    let mut offset = 0.0;
    while offset <= doc.max_scroll() {
        doc.set_scroll_offset(offset);
        now += Duration::from_millis(20);
        page_ctl.on_scroll(&mut doc, now);

        let active = page_ctl.view.active_section().map(ToString::to_string);
        let links = active_links(&doc);
        assert_eq!(links.len(), 1, "offset {offset}: {links:?}");
        assert_eq!(active.as_deref(), links.first().map(String::as_str));

        offset += 37.0;
    }
}

#[test]
fn highlight_is_idempotent() {
    let mut doc = page();
    let mut page_ctl = controllers();
    page_ctl.init(&mut doc);

    doc.set_scroll_offset(2.5 * SECTION_HEIGHT);
    page_ctl.view.refresh(&mut doc);
    let first = active_links(&doc);
    page_ctl.view.refresh(&mut doc);

    assert_eq!(active_links(&doc), first);
    assert_eq!(first, vec!["experience".to_string()]);
}

// ===== Reveal =====

#[test]
fn revealed_never_reverts() {
    let mut doc = page();
    let mut page_ctl = controllers();
    page_ctl.init(&mut doc);
    let card = ElementId::new("about-card-0");

    let mut now = Instant::now();
    for offset in [0.0, 700.0, 0.0, 3000.0, 0.0] {
        doc.set_scroll_offset(offset);
        now += Duration::from_millis(20);
        page_ctl.on_scroll(&mut doc, now);

        if offset > 0.0 {
            assert!(page_ctl.reveal.is_revealed(&card));
        }
    }

    assert!(doc.has_class(&card, REVEALED_CLASS));
    assert_eq!(doc.style(&card, "opacity").as_deref(), Some("1"));
}

// ===== Form =====

#[test]
fn validation_boundaries() {
    let mut doc = page();
    let mut page_ctl = controllers();
    let form = &mut page_ctl.form;

    for (name, ok) in [("A", false), ("Al", true)] {
        doc.set_value(&FieldId::Name.element(), name);
        assert_eq!(form.validate_field(&mut doc, FieldId::Name).is_ok(), ok);
    }
    for (message, ok) in [("123456789", false), ("1234567890", true)] {
        doc.set_value(&FieldId::Message.element(), message);
        assert_eq!(form.validate_field(&mut doc, FieldId::Message).is_ok(), ok);
    }
    for (email, ok) in [("a@b", false), ("a@b.c", true)] {
        doc.set_value(&FieldId::Email.element(), email);
        assert_eq!(form.validate_field(&mut doc, FieldId::Email).is_ok(), ok);
    }

    doc.set_value(&FieldId::Name.element(), "A");
    let _ = form.validate_field(&mut doc, FieldId::Name);
    assert_eq!(
        doc.text(&FieldId::Name.error_element()).as_deref(),
        Some("Name must be at least 2 characters")
    );
}

#[test]
fn revalidation_leaves_same_error_state() {
    let mut doc = page();
    let mut page_ctl = controllers();
    doc.set_value(&FieldId::Email.element(), "nope");

    page_ctl.form.on_blur(&mut doc, FieldId::Email);
    let first = doc.element(&FieldId::Email.error_element()).cloned();
    page_ctl.form.on_blur(&mut doc, FieldId::Email);

    assert_eq!(doc.element(&FieldId::Email.error_element()).cloned(), first);
}

#[tokio::test(start_paused = true)]
async fn valid_submission_round_trip() {
    let mut doc = page();
    let mut page_ctl = controllers();
    let backend = RecordingBackend::default();
    fill(&mut doc, "Al", "a@b.co", "Hello there!!");

    let ticket = page_ctl.form.submit(&mut doc).unwrap();
    assert_eq!(page_ctl.form.state(), SubmissionState::Submitting);

    let result = deliver(&backend, &ticket.submission, Duration::from_secs(10)).await;
    let t0 = Instant::now();
    assert!(page_ctl.form.complete(&ticket, result, &mut doc, t0));
    assert_eq!(page_ctl.form.state(), SubmissionState::Succeeded);
    for field in FieldId::ALL {
        assert_eq!(doc.value(&field.element()).as_deref(), Some(""));
    }

    page_ctl.tick(&mut doc, t0 + Duration::from_secs(3));
    assert_eq!(page_ctl.form.state(), SubmissionState::Idle);
    assert_eq!(backend.call_count(), 1);
    assert_eq!(backend.received()[0].name, "Al");
}

#[test]
fn invalid_form_never_submits() {
    let mut doc = page();
    let mut page_ctl = controllers();
    fill(&mut doc, "Al", "a@b", "Hello there!!");

    let err = page_ctl.form.submit(&mut doc).unwrap_err();

    assert!(matches!(err, CoreError::ValidationFailed(ref f) if f == &[FieldId::Email]));
    assert_eq!(page_ctl.form.state(), SubmissionState::Idle);
}

#[test]
fn double_submit_is_refused() {
    let mut doc = page();
    let mut page_ctl = controllers();
    fill(&mut doc, "Al", "a@b.co", "Hello there!!");

    page_ctl.form.submit(&mut doc).unwrap();
    let second = page_ctl.form.submit(&mut doc);

    assert!(matches!(second, Err(CoreError::SubmissionInProgress)));
}
