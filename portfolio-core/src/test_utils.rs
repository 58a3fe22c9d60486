//! Shared test fixtures
//!
//! Provides the standard page document and a recording contact backend.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use crate::document::{Document, Element};
use crate::error::{CoreError, CoreResult};
use crate::traits::ContactBackend;
use crate::types::{ContactSubmission, FieldId, Viewport};

/// Height of every section in [`standard_document`]
pub const SECTION_HEIGHT: f64 = 800.0;

pub const VIEWPORT: Viewport = Viewport::new(1280.0, 600.0);

const SECTIONS: [&str; 6] = [
    "home",
    "about",
    "experience",
    "skills",
    "certifications",
    "contact",
];

fn section_top(index: usize) -> f64 {
    // 区块数量固定为 6，转换不会丢精度
    #[allow(clippy::cast_precision_loss)]
    let i = index as f64;
    i * SECTION_HEIGHT
}

/// Build the portfolio page: six stacked sections of [`SECTION_HEIGHT`]
///
/// ```text
/// home            0   heroTitle, profileImage, shape-0..2, orbit-0..2
/// about         800   about-highlight-0..2         (highlight-item)
/// experience   1600   exp-card-0..1, timeline-0..1 (experience-card, timeline-item)
/// skills       2400   skill-0..3                   (skill-card)
/// certifications 3200 cert-0..2                    (cert-card)
/// contact      4000   form fields, submit control, notifications
/// ```
pub fn standard_document() -> Document {
    let mut doc = Document::new(VIEWPORT);

    // 固定在顶部的导航元素，高度为 0
    doc.insert(Element::new("navbar"));
    doc.insert(Element::new("hamburger"));
    doc.insert(Element::new("navMenu"));
    for section in SECTIONS {
        doc.insert(
            Element::new(format!("nav-{section}"))
                .with_class("nav-link")
                .with_attribute("href", format!("#{section}")),
        );
    }
    doc.insert(Element::new("scrollToTop"));
    doc.insert(Element::new("preloader").with_class("preloader"));

    for (i, section) in SECTIONS.iter().enumerate() {
        doc.insert(Element::new(*section).with_rect(section_top(i), SECTION_HEIGHT));
    }

    // home
    doc.insert(Element::new("heroTitle").with_rect(100.0, 60.0));
    doc.insert(
        Element::new("profileImage")
            .with_rect(200.0, 200.0)
            .with_attribute("src", "assets/profile.jpg"),
    );
    for i in 0..3 {
        doc.insert(Element::new(format!("shape-{i}")).with_class("shape"));
    }
    for i in 0..3 {
        doc.insert(
            Element::new(format!("orbit-{i}"))
                .with_class("orbit-icon")
                .with_rect(250.0, 40.0),
        );
    }

    // about
    let mut top = SECTION_HEIGHT + 100.0;
    for i in 0..3 {
        doc.insert(
            Element::new(format!("about-highlight-{i}"))
                .with_class("highlight-item")
                .with_rect(top, 120.0),
        );
        top += 150.0;
    }

    // experience
    let base = SECTION_HEIGHT * 2.0;
    for i in 0..2 {
        let offset = f64::from(i) * 300.0;
        doc.insert(
            Element::new(format!("exp-card-{i}"))
                .with_class("experience-card")
                .with_rect(base + 20.0 + offset, 200.0),
        );
        doc.insert(
            Element::new(format!("timeline-{i}"))
                .with_class("timeline-item")
                .with_rect(base + 100.0 + offset, 250.0),
        );
    }

    // skills
    let base = SECTION_HEIGHT * 3.0;
    for i in 0..4 {
        doc.insert(
            Element::new(format!("skill-{i}"))
                .with_class("skill-card")
                .with_rect(base + 100.0 + f64::from(i) * 150.0, 120.0),
        );
    }

    // certifications
    let base = SECTION_HEIGHT * 4.0;
    for i in 0..3 {
        doc.insert(
            Element::new(format!("cert-{i}"))
                .with_class("cert-card")
                .with_rect(base + 100.0 + f64::from(i) * 200.0, 150.0),
        );
    }

    // contact
    let base = SECTION_HEIGHT * 5.0;
    let mut top = base + 100.0;
    for field in FieldId::ALL {
        doc.insert(Element::new(field.element()).with_rect(top, 40.0));
        doc.insert(Element::new(field.error_element()).with_rect(top + 40.0, 20.0));
        top += 80.0;
    }
    doc.insert(Element::new("subject").with_rect(top, 40.0));
    doc.insert(
        Element::new("submitButton")
            .with_class("btn")
            .with_rect(top + 60.0, 40.0),
    );
    doc.insert(Element::new("submitText").with_text("Send Message"));
    doc.insert(Element::new("submitLoader").with_class("hidden"));
    doc.insert(Element::new("successMessage").with_class("hidden"));
    doc.insert(Element::new("errorMessage").with_class("hidden"));

    doc
}

/// Fill the contact form with values that pass validation
pub fn fill_valid_form(doc: &mut Document) {
    use crate::traits::PageSurface;

    doc.set_value(&FieldId::Name.element(), "Al");
    doc.set_value(&FieldId::Email.element(), "a@b.co");
    doc.set_value(&FieldId::Message.element(), "Hello there!!");
}

/// Contact backend that answers immediately and records every call
#[derive(Default)]
pub struct MockContactBackend {
    calls: AtomicUsize,
    fail: AtomicBool,
    received: Mutex<Vec<ContactSubmission>>,
}

impl MockContactBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_fail(&self, fail: bool) {
        self.fail.store(fail, Ordering::SeqCst);
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn received(&self) -> Vec<ContactSubmission> {
        self.received.lock().unwrap().clone()
    }
}

#[async_trait]
impl ContactBackend for MockContactBackend {
    async fn submit(&self, submission: &ContactSubmission) -> CoreResult<()> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.received.lock().unwrap().push(submission.clone());

        if self.fail.load(Ordering::SeqCst) {
            return Err(CoreError::SubmissionFailed("mock failure".to_string()));
        }
        Ok(())
    }
}
