//! 共享测试工具：标准页面与可观测的提交后端

#![allow(dead_code, clippy::unwrap_used)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use portfolio_core::document::Element;
use portfolio_core::types::{ContactSubmission, PageLayout, Viewport};
use portfolio_core::{ContactBackend, CoreResult, Document, PageSurface};

pub const SECTION_HEIGHT: f64 = 800.0;
pub const VIEWPORT: Viewport = Viewport::new(1280.0, 600.0);

/// 六个等高区块，每个区块里放几张可揭示卡片，最后是联系表单
pub fn page() -> Document {
    let layout = PageLayout::default();
    let mut doc = Document::new(VIEWPORT);

    for entry in &layout.nav_entries {
        doc.insert(
            Element::new(entry.link.clone())
                .with_class("nav-link")
                .with_attribute("href", entry.target.fragment()),
        );
    }
    for id in [
        &layout.navbar,
        &layout.hamburger,
        &layout.nav_menu,
        &layout.scroll_to_top,
        &layout.preloader,
        &layout.subject_field,
        &layout.submit_loader,
    ] {
        doc.insert(Element::new(id.clone()));
    }
    doc.insert(Element::new(layout.submit_button.clone()).with_class("btn"));
    doc.insert(Element::new(layout.submit_label.clone()).with_text("Send Message"));
    doc.add_class(&layout.submit_loader, "hidden");

    let mut top = 0.0;
    for section in &layout.sections {
        doc.insert(Element::new(section.clone()).with_rect(top, SECTION_HEIGHT));
        for j in 0..3u32 {
            doc.insert(
                Element::new(format!("{section}-card-{j}"))
                    .with_class("skill-card")
                    .with_rect(top + 200.0 + f64::from(j) * 150.0, 120.0),
            );
        }
        top += SECTION_HEIGHT;
    }

    for field in ["name", "email", "message"] {
        doc.insert(Element::new(field));
        doc.insert(Element::new(format!("{field}Error")));
    }
    for id in ["successMessage", "errorMessage"] {
        doc.insert(Element::new(id).with_class("hidden"));
    }

    doc
}

pub fn fill(doc: &mut Document, name: &str, email: &str, message: &str) {
    doc.set_value(&"name".into(), name);
    doc.set_value(&"email".into(), email);
    doc.set_value(&"message".into(), message);
}

/// 记录调用次数的后端
#[derive(Default)]
pub struct RecordingBackend {
    calls: AtomicUsize,
    received: Mutex<Vec<ContactSubmission>>,
}

impl RecordingBackend {
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn received(&self) -> Vec<ContactSubmission> {
        self.received.lock().unwrap().clone()
    }
}

#[async_trait]
impl ContactBackend for RecordingBackend {
    async fn submit(&self, submission: &ContactSubmission) -> CoreResult<()> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.received.lock().unwrap().push(submission.clone());
        Ok(())
    }
}
