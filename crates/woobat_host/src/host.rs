//! Host service bundle injected into the runtime.

use std::rc::Rc;

use crate::{
    Clock, ColorSchemeSource, EventDispatcher, NoopColorScheme, NoopEventDispatcher,
    NoopPrefsStore, NoopPresentationRoot, PrefsStore, PresentationRoot, SystemClock,
};

/// Which kind of environment assembled the [`HostServices`] bundle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostEnvironment {
    /// Interactive browser document.
    Browser,
    /// No document: server rendering, native targets, tests.
    Headless,
}

impl HostEnvironment {
    /// Returns a stable string token for diagnostics.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Browser => "browser",
            Self::Headless => "headless",
        }
    }

    /// Whether DOM-dependent work (ripples, listeners) can run.
    pub const fn is_interactive(self) -> bool {
        matches!(self, Self::Browser)
    }
}

/// Environment-selected service bundle handed to the runtime.
///
/// All environment-specific adapter selection happens before this bundle crosses into
/// `woobat_runtime`, which keeps the runtime free of browser types.
#[derive(Clone)]
pub struct HostServices {
    /// Persisted preference slot.
    pub prefs: Rc<dyn PrefsStore>,
    /// Global presentation root.
    pub root: Rc<dyn PresentationRoot>,
    /// Custom event dispatcher.
    pub events: Rc<dyn EventDispatcher>,
    /// System light/dark preference.
    pub color_scheme: Rc<dyn ColorSchemeSource>,
    /// Clock driving timed transitions.
    pub clock: Rc<dyn Clock>,
    /// Environment kind.
    pub environment: HostEnvironment,
}

impl HostServices {
    /// Bundle of no-op adapters with the monotonic system clock.
    pub fn headless() -> Self {
        Self {
            prefs: Rc::new(NoopPrefsStore),
            root: Rc::new(NoopPresentationRoot),
            events: Rc::new(NoopEventDispatcher),
            color_scheme: Rc::new(NoopColorScheme),
            clock: Rc::new(SystemClock),
            environment: HostEnvironment::Headless,
        }
    }
}

impl Default for HostServices {
    fn default() -> Self {
        Self::headless()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn headless_bundle_is_not_interactive() {
        let host = HostServices::headless();
        assert_eq!(host.environment.as_str(), "headless");
        assert!(!host.environment.is_interactive());
        assert_eq!(host.prefs.load_pref("woobat-theme"), Ok(None));
        assert_eq!(host.root.attribute("data-wb-theme"), None);
    }
}
