//! Concrete adapter selection for the browser entry layer.

use std::rc::Rc;

use woobat_host::{HostEnvironment, HostServices, SystemClock};

use crate::{WebColorScheme, WebEventDispatcher, WebPrefsStore, WebPresentationRoot};

/// Whether a live `window` and `document` are reachable.
pub fn is_browser() -> bool {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::window()
            .and_then(|window| window.document())
            .is_some()
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        false
    }
}

/// Builds the browser host bundle.
///
/// Falls back to [`HostServices::headless`] when no document is reachable, so callers can use
/// this unconditionally.
pub fn build_host_services() -> HostServices {
    if !is_browser() {
        return HostServices::headless();
    }

    HostServices {
        prefs: Rc::new(WebPrefsStore),
        root: Rc::new(WebPresentationRoot),
        events: Rc::new(WebEventDispatcher),
        color_scheme: Rc::new(WebColorScheme),
        clock: Rc::new(SystemClock),
        environment: HostEnvironment::Browser,
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use serde_json::json;
    use woobat_host::{ColorSchemeSource, EventDispatcher, PrefsStore, PresentationRoot};

    use super::*;

    #[test]
    fn native_targets_get_the_headless_bundle() {
        assert!(!is_browser());
        let host = build_host_services();
        assert_eq!(host.environment, HostEnvironment::Headless);
    }

    #[test]
    fn web_adapters_are_inert_without_a_document() {
        assert_eq!(WebPrefsStore.load_pref("woobat-theme"), Ok(None));
        assert_eq!(WebPrefsStore.save_pref("woobat-theme", "\"dark\""), Ok(()));
        WebPresentationRoot.set_attribute("data-wb-theme", "dark");
        assert_eq!(WebPresentationRoot.attribute("data-wb-theme"), None);
        assert!(!WebEventDispatcher.dispatch("woobat-theme-change", &json!({ "theme": "dark" })));
        assert_eq!(WebColorScheme.prefers_dark(), None);
    }
}
