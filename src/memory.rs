//! In-memory document for tests and non-browser hosts.

use crate::host::IconHost;

#[cfg(test)]
#[path = "memory_test.rs"]
mod memory_test;

/// Stable handle to an element in a [`MemoryDocument`].
pub type ElementId = usize;

/// An element's ordered, de-duplicated class list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryElement {
    classes: Vec<String>,
}

impl MemoryElement {
    #[must_use]
    pub fn new(classes: &[&str]) -> Self {
        let mut element = Self::default();
        for class in classes {
            element.add(class);
        }
        element
    }

    #[must_use]
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    #[must_use]
    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    fn add(&mut self, class: &str) {
        if !self.has_class(class) {
            self.classes.push(class.to_owned());
        }
    }

    fn remove(&mut self, class: &str) {
        self.classes.retain(|c| c != class);
    }
}

/// A flat element set. Removed elements leave a hole so ids stay stable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryDocument {
    slots: Vec<Option<MemoryElement>>,
}

impl MemoryDocument {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an element with the given classes and return its id.
    pub fn insert(&mut self, classes: &[&str]) -> ElementId {
        self.slots.push(Some(MemoryElement::new(classes)));
        self.slots.len() - 1
    }

    /// Remove an element, returning it if it was present.
    pub fn remove(&mut self, id: ElementId) -> Option<MemoryElement> {
        self.slots.get_mut(id).and_then(Option::take)
    }

    #[must_use]
    pub fn element(&self, id: ElementId) -> Option<&MemoryElement> {
        self.slots.get(id).and_then(Option::as_ref)
    }

    /// Live elements with their ids, in insertion order.
    pub fn elements(&self) -> impl Iterator<Item = (ElementId, &MemoryElement)> {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(id, slot)| slot.as_ref().map(|el| (id, el)))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.elements().count()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl IconHost for MemoryDocument {
    type Icon = ElementId;

    fn icons_with_class(&self, class: &str) -> Vec<ElementId> {
        self.elements()
            .filter(|(_, el)| el.has_class(class))
            .map(|(id, _)| id)
            .collect()
    }

    fn add_class(&mut self, icon: &ElementId, class: &str) {
        if let Some(Some(el)) = self.slots.get_mut(*icon) {
            el.add(class);
        }
    }

    fn remove_class(&mut self, icon: &ElementId, class: &str) {
        if let Some(Some(el)) = self.slots.get_mut(*icon) {
            el.remove(class);
        }
    }
}
