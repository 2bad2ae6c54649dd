//! OS-level light/dark preference signal.

use std::{
    cell::RefCell,
    fmt,
    rc::{Rc, Weak},
};

/// Callback invoked with `true` when the system switches to a dark color scheme.
pub type ColorSchemeListener = Rc<dyn Fn(bool)>;

/// Guard for an installed color-scheme watcher. Dropping it removes the watcher.
#[must_use = "dropping the watch immediately removes the listener"]
pub struct ColorSchemeWatch {
    cancel: Option<Box<dyn FnOnce()>>,
}

impl ColorSchemeWatch {
    /// Wraps a cancellation routine.
    pub fn new(cancel: impl FnOnce() + 'static) -> Self {
        Self {
            cancel: Some(Box::new(cancel)),
        }
    }

    /// A watch that was never installed.
    pub fn inert() -> Self {
        Self { cancel: None }
    }

    /// Whether dropping this guard removes anything.
    pub fn is_active(&self) -> bool {
        self.cancel.is_some()
    }
}

impl Drop for ColorSchemeWatch {
    fn drop(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

impl fmt::Debug for ColorSchemeWatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ColorSchemeWatch")
            .field("active", &self.is_active())
            .finish()
    }
}

/// Host service exposing the `prefers-color-scheme` media signal.
pub trait ColorSchemeSource {
    /// Current preference, or `None` when the host cannot tell.
    fn prefers_dark(&self) -> Option<bool>;

    /// Installs `listener` for preference changes.
    fn watch(&self, listener: ColorSchemeListener) -> ColorSchemeWatch;
}

#[derive(Debug, Clone, Copy, Default)]
/// Source for hosts without a media-query API.
pub struct NoopColorScheme;

impl ColorSchemeSource for NoopColorScheme {
    fn prefers_dark(&self) -> Option<bool> {
        None
    }

    fn watch(&self, _listener: ColorSchemeListener) -> ColorSchemeWatch {
        ColorSchemeWatch::inert()
    }
}

#[derive(Default)]
struct ManualState {
    prefers_dark: Option<bool>,
    next_id: u64,
    listeners: Vec<(u64, ColorSchemeListener)>,
}

#[derive(Clone, Default)]
/// Color-scheme source flipped by hand, for tests and headless previews.
pub struct ManualColorScheme {
    inner: Rc<RefCell<ManualState>>,
}

impl ManualColorScheme {
    /// Creates a source reporting `prefers_dark`.
    pub fn new(prefers_dark: bool) -> Self {
        let source = Self::default();
        source.inner.borrow_mut().prefers_dark = Some(prefers_dark);
        source
    }

    /// Changes the preference and notifies watchers.
    pub fn set_prefers_dark(&self, prefers_dark: bool) {
        let listeners = {
            let mut state = self.inner.borrow_mut();
            state.prefers_dark = Some(prefers_dark);
            state
                .listeners
                .iter()
                .map(|(_, listener)| listener.clone())
                .collect::<Vec<_>>()
        };
        for listener in listeners {
            listener(prefers_dark);
        }
    }

    /// Number of installed watchers.
    pub fn watcher_count(&self) -> usize {
        self.inner.borrow().listeners.len()
    }
}

impl ColorSchemeSource for ManualColorScheme {
    fn prefers_dark(&self) -> Option<bool> {
        self.inner.borrow().prefers_dark
    }

    fn watch(&self, listener: ColorSchemeListener) -> ColorSchemeWatch {
        let id = {
            let mut state = self.inner.borrow_mut();
            let id = state.next_id;
            state.next_id += 1;
            state.listeners.push((id, listener));
            id
        };
        let weak: Weak<RefCell<ManualState>> = Rc::downgrade(&self.inner);
        ColorSchemeWatch::new(move || {
            if let Some(inner) = weak.upgrade() {
                inner
                    .borrow_mut()
                    .listeners
                    .retain(|(listener_id, _)| *listener_id != id);
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;

    #[test]
    fn manual_source_notifies_until_watch_is_dropped() {
        let source = ManualColorScheme::new(false);
        let seen = Rc::new(Cell::new(0));
        let seen_in_listener = seen.clone();
        let watch = source.watch(Rc::new(move |dark| {
            if dark {
                seen_in_listener.set(seen_in_listener.get() + 1);
            }
        }));

        source.set_prefers_dark(true);
        assert_eq!(seen.get(), 1);
        assert_eq!(source.prefers_dark(), Some(true));

        drop(watch);
        assert_eq!(source.watcher_count(), 0);
        source.set_prefers_dark(true);
        assert_eq!(seen.get(), 1);
    }

    #[test]
    fn noop_source_has_no_opinion() {
        let watch = NoopColorScheme.watch(Rc::new(|_| {}));
        assert!(!watch.is_active());
        assert_eq!(NoopColorScheme.prefers_dark(), None);
    }
}
