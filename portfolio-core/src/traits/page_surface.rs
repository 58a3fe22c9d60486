//! DOM-like page surface Trait

use crate::types::{ElementId, Rect, Viewport};

/// Page surface Trait
///
/// Everything the controllers read from or write to the page goes through here.
///
/// Platform implementations:
/// - Terminal host: [`crate::Document`] (in-memory tree rendered by ratatui)
/// - Browser: a `web-sys` binding over the real DOM
///
/// Writes addressed to an element that does not exist are ignored; reads
/// return `None` (or an empty value).
pub trait PageSurface {
    // === Scrolling ===

    /// Current vertical scroll offset
    fn scroll_offset(&self) -> f64;

    /// Jump to a vertical scroll offset
    fn set_scroll_offset(&mut self, offset: f64);

    /// Visible window size
    fn viewport(&self) -> Viewport;

    // === Structure ===

    /// Whether the element exists
    fn contains(&self, id: &ElementId) -> bool;

    /// Document-relative geometry of an element
    fn rect(&self, id: &ElementId) -> Option<Rect>;

    /// All elements carrying `class`, in document order
    fn query_class(&self, class: &str) -> Vec<ElementId>;

    /// Create an element appended at the end of the document
    ///
    /// Returns `false` if the id is already taken.
    fn create_element(&mut self, id: &ElementId, class: &str) -> bool;

    /// Remove an element; returns whether it existed
    fn remove_element(&mut self, id: &ElementId) -> bool;

    // === Classes ===

    fn has_class(&self, id: &ElementId, class: &str) -> bool;

    fn add_class(&mut self, id: &ElementId, class: &str);

    fn remove_class(&mut self, id: &ElementId, class: &str);

    /// Toggle a class; returns whether the class is present afterwards
    fn toggle_class(&mut self, id: &ElementId, class: &str) -> bool {
        if self.has_class(id, class) {
            self.remove_class(id, class);
            false
        } else {
            self.add_class(id, class);
            true
        }
    }

    // === Inline style ===

    fn style(&self, id: &ElementId, property: &str) -> Option<String>;

    fn set_style(&mut self, id: &ElementId, property: &str, value: &str);

    // === Content and attributes ===

    fn text(&self, id: &ElementId) -> Option<String>;

    fn set_text(&mut self, id: &ElementId, text: &str);

    /// Raw value of an input element
    fn value(&self, id: &ElementId) -> Option<String>;

    fn set_value(&mut self, id: &ElementId, value: &str);

    fn attribute(&self, id: &ElementId, name: &str) -> Option<String>;

    fn set_attribute(&mut self, id: &ElementId, name: &str, value: &str);

    fn is_disabled(&self, id: &ElementId) -> bool;

    fn set_disabled(&mut self, id: &ElementId, disabled: bool);
}
