//! Presentation-root contract: the document element that carries global theme hooks.

use std::{cell::RefCell, collections::BTreeMap, rc::Rc};

/// Global presentation root (the `<html>` element in a browser).
///
/// Every method is best-effort: when no root exists (server rendering, native targets) writes
/// are dropped and reads return `None`.
pub trait PresentationRoot {
    /// Sets an attribute on the root.
    fn set_attribute(&self, name: &str, value: &str);

    /// Reads an attribute from the root.
    fn attribute(&self, name: &str) -> Option<String>;

    /// Removes every class in `remove`, then adds `add`.
    fn swap_classes(&self, remove: &[&str], add: &str);

    /// Reads a computed CSS custom property (full `--name` form).
    fn css_variable(&self, name: &str) -> Option<String>;
}

#[derive(Debug, Clone, Copy, Default)]
/// Root adapter for environments without a document.
pub struct NoopPresentationRoot;

impl PresentationRoot for NoopPresentationRoot {
    fn set_attribute(&self, _name: &str, _value: &str) {}

    fn attribute(&self, _name: &str) -> Option<String> {
        None
    }

    fn swap_classes(&self, _remove: &[&str], _add: &str) {}

    fn css_variable(&self, _name: &str) -> Option<String> {
        None
    }
}

#[derive(Debug, Default)]
struct MemoryRootState {
    attributes: BTreeMap<String, String>,
    classes: Vec<String>,
    css_variables: BTreeMap<String, String>,
}

#[derive(Debug, Clone, Default)]
/// In-memory root that records attribute and class writes.
pub struct MemoryPresentationRoot {
    inner: Rc<RefCell<MemoryRootState>>,
}

impl MemoryPresentationRoot {
    /// Current class list in insertion order.
    pub fn classes(&self) -> Vec<String> {
        self.inner.borrow().classes.clone()
    }

    /// Whether the root currently carries `class`.
    pub fn has_class(&self, class: &str) -> bool {
        self.inner.borrow().classes.iter().any(|c| c == class)
    }

    /// Seeds a CSS custom property value as if a stylesheet defined it.
    pub fn define_css_variable(&self, name: &str, value: &str) {
        self.inner
            .borrow_mut()
            .css_variables
            .insert(name.to_string(), value.to_string());
    }
}

impl PresentationRoot for MemoryPresentationRoot {
    fn set_attribute(&self, name: &str, value: &str) {
        self.inner
            .borrow_mut()
            .attributes
            .insert(name.to_string(), value.to_string());
    }

    fn attribute(&self, name: &str) -> Option<String> {
        self.inner.borrow().attributes.get(name).cloned()
    }

    fn swap_classes(&self, remove: &[&str], add: &str) {
        let mut state = self.inner.borrow_mut();
        state.classes.retain(|class| !remove.contains(&class.as_str()));
        if !state.classes.iter().any(|class| class == add) {
            state.classes.push(add.to_string());
        }
    }

    fn css_variable(&self, name: &str) -> Option<String> {
        self.inner
            .borrow()
            .css_variables
            .get(name)
            .map(|value| value.trim().to_string())
    }
}
