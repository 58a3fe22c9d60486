//! In-memory DOM-like document
//!
//! A flat list of elements in document order, each with classes, inline
//! styles, attributes, text, an input value and a rect. Hosts that do not own
//! a real DOM (the terminal UI, tests) build one of these and render from it.

use std::collections::{BTreeMap, BTreeSet, HashMap};

use crate::traits::PageSurface;
use crate::types::{ElementId, Rect, Viewport};

/// One element of the document
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    pub id: ElementId,
    pub classes: BTreeSet<String>,
    pub styles: BTreeMap<String, String>,
    pub attributes: BTreeMap<String, String>,
    pub text: String,
    pub value: String,
    pub disabled: bool,
    pub rect: Rect,
}

impl Element {
    #[must_use]
    pub fn new(id: impl Into<ElementId>) -> Self {
        Self {
            id: id.into(),
            classes: BTreeSet::new(),
            styles: BTreeMap::new(),
            attributes: BTreeMap::new(),
            text: String::new(),
            value: String::new(),
            disabled: false,
            rect: Rect::default(),
        }
    }

    #[must_use]
    pub fn with_class(mut self, class: &str) -> Self {
        self.classes.insert(class.to_string());
        self
    }

    #[must_use]
    pub fn with_rect(mut self, top: f64, height: f64) -> Self {
        self.rect = Rect::new(top, height);
        self
    }

    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    #[must_use]
    pub fn with_attribute(mut self, name: &str, value: impl Into<String>) -> Self {
        self.attributes.insert(name.to_string(), value.into());
        self
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.contains(class)
    }
}

/// In-memory page
#[derive(Debug, Clone, Default)]
pub struct Document {
    elements: Vec<Element>,
    index: HashMap<ElementId, usize>,
    scroll_offset: f64,
    viewport: Viewport,
}

impl Document {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            ..Self::default()
        }
    }

    /// Append an element; returns `false` (and keeps the old one) if the id is taken
    pub fn insert(&mut self, element: Element) -> bool {
        if self.index.contains_key(&element.id) {
            log::debug!("Duplicate element id ignored: {}", element.id);
            return false;
        }
        self.index.insert(element.id.clone(), self.elements.len());
        self.elements.push(element);
        true
    }

    pub fn element(&self, id: &ElementId) -> Option<&Element> {
        self.index.get(id).map(|&i| &self.elements[i])
    }

    pub fn element_mut(&mut self, id: &ElementId) -> Option<&mut Element> {
        match self.index.get(id) {
            Some(&i) => Some(&mut self.elements[i]),
            None => {
                log::debug!("Write to missing element ignored: {id}");
                None
            }
        }
    }

    /// Elements in document order
    pub fn elements(&self) -> impl Iterator<Item = &Element> {
        self.elements.iter()
    }

    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        // 视口变大后滚动位置可能越界
        self.scroll_offset = self.scroll_offset.clamp(0.0, self.max_scroll());
    }

    /// Bottom edge of the lowest element
    pub fn document_height(&self) -> f64 {
        self.elements
            .iter()
            .map(|e| e.rect.bottom())
            .fold(0.0, f64::max)
    }

    pub fn max_scroll(&self) -> f64 {
        (self.document_height() - self.viewport.height).max(0.0)
    }

    fn reindex(&mut self) {
        self.index = self
            .elements
            .iter()
            .enumerate()
            .map(|(i, e)| (e.id.clone(), i))
            .collect();
    }
}

impl PageSurface for Document {
    fn scroll_offset(&self) -> f64 {
        self.scroll_offset
    }

    fn set_scroll_offset(&mut self, offset: f64) {
        self.scroll_offset = offset.clamp(0.0, self.max_scroll());
    }

    fn viewport(&self) -> Viewport {
        self.viewport
    }

    fn contains(&self, id: &ElementId) -> bool {
        self.index.contains_key(id)
    }

    fn rect(&self, id: &ElementId) -> Option<Rect> {
        self.element(id).map(|e| e.rect)
    }

    fn query_class(&self, class: &str) -> Vec<ElementId> {
        self.elements
            .iter()
            .filter(|e| e.has_class(class))
            .map(|e| e.id.clone())
            .collect()
    }

    fn create_element(&mut self, id: &ElementId, class: &str) -> bool {
        let top = self.document_height();
        self.insert(Element::new(id.clone()).with_class(class).with_rect(top, 0.0))
    }

    fn remove_element(&mut self, id: &ElementId) -> bool {
        let Some(i) = self.index.get(id).copied() else {
            return false;
        };
        self.elements.remove(i);
        self.reindex();
        true
    }

    fn has_class(&self, id: &ElementId, class: &str) -> bool {
        self.element(id).is_some_and(|e| e.has_class(class))
    }

    fn add_class(&mut self, id: &ElementId, class: &str) {
        if let Some(e) = self.element_mut(id) {
            e.classes.insert(class.to_string());
        }
    }

    fn remove_class(&mut self, id: &ElementId, class: &str) {
        if let Some(e) = self.element_mut(id) {
            e.classes.remove(class);
        }
    }

    fn style(&self, id: &ElementId, property: &str) -> Option<String> {
        self.element(id).and_then(|e| e.styles.get(property).cloned())
    }

    fn set_style(&mut self, id: &ElementId, property: &str, value: &str) {
        if let Some(e) = self.element_mut(id) {
            e.styles.insert(property.to_string(), value.to_string());
        }
    }

    fn text(&self, id: &ElementId) -> Option<String> {
        self.element(id).map(|e| e.text.clone())
    }

    fn set_text(&mut self, id: &ElementId, text: &str) {
        if let Some(e) = self.element_mut(id) {
            e.text = text.to_string();
        }
    }

    fn value(&self, id: &ElementId) -> Option<String> {
        self.element(id).map(|e| e.value.clone())
    }

    fn set_value(&mut self, id: &ElementId, value: &str) {
        if let Some(e) = self.element_mut(id) {
            e.value = value.to_string();
        }
    }

    fn attribute(&self, id: &ElementId, name: &str) -> Option<String> {
        self.element(id).and_then(|e| e.attributes.get(name).cloned())
    }

    fn set_attribute(&mut self, id: &ElementId, name: &str, value: &str) {
        if let Some(e) = self.element_mut(id) {
            e.attributes.insert(name.to_string(), value.to_string());
        }
    }

    fn is_disabled(&self, id: &ElementId) -> bool {
        self.element(id).is_some_and(|e| e.disabled)
    }

    fn set_disabled(&mut self, id: &ElementId, disabled: bool) {
        if let Some(e) = self.element_mut(id) {
            e.disabled = disabled;
        }
    }
}
