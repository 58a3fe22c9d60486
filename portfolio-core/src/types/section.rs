//! 页面区块与导航项

use serde::{Deserialize, Serialize};

use super::{ElementId, Rect};

/// Measured geometry of one section, in document order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionMeasurement {
    pub id: ElementId,
    pub rect: Rect,
}

/// Navigation link paired with the section it targets
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavEntry {
    /// The link element itself
    pub link: ElementId,
    /// Section the link's `#fragment` points at
    pub target: ElementId,
}

impl NavEntry {
    #[must_use]
    pub fn new(link: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            link: ElementId::new(link),
            target: ElementId::new(target),
        }
    }
}
