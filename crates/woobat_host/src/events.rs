//! Custom-event dispatch for listeners outside the component tree.

use std::{cell::RefCell, rc::Rc};

use serde_json::Value;

/// Dispatches named events carrying a JSON detail payload on the global document.
pub trait EventDispatcher {
    /// Dispatches `name` with `detail`. Returns whether an event was actually dispatched.
    fn dispatch(&self, name: &str, detail: &Value) -> bool;
}

#[derive(Debug, Clone, Copy, Default)]
/// Dispatcher for environments without a document.
pub struct NoopEventDispatcher;

impl EventDispatcher for NoopEventDispatcher {
    fn dispatch(&self, _name: &str, _detail: &Value) -> bool {
        false
    }
}

#[derive(Debug, Clone, PartialEq)]
/// One event captured by [`MemoryEventDispatcher`].
pub struct RecordedEvent {
    /// Event name.
    pub name: String,
    /// Event detail payload.
    pub detail: Value,
}

#[derive(Debug, Clone, Default)]
/// Dispatcher that records every event in order.
pub struct MemoryEventDispatcher {
    events: Rc<RefCell<Vec<RecordedEvent>>>,
}

impl MemoryEventDispatcher {
    /// Snapshot of all dispatched events.
    pub fn events(&self) -> Vec<RecordedEvent> {
        self.events.borrow().clone()
    }
}

impl EventDispatcher for MemoryEventDispatcher {
    fn dispatch(&self, name: &str, detail: &Value) -> bool {
        self.events.borrow_mut().push(RecordedEvent {
            name: name.to_string(),
            detail: detail.clone(),
        });
        true
    }
}
