//! 类型定义模块

mod element;
mod form;
mod layout;
mod section;

pub use element::{ElementId, Rect, Viewport};
pub use form::{
    ContactSubmission, FieldId, FieldValidity, NotificationKind, SubmissionState,
    SubmissionTicket,
};
pub use layout::PageLayout;
pub use section::{NavEntry, SectionMeasurement};
