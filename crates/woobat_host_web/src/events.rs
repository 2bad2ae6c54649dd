//! `CustomEvent` dispatch on the global document.

use serde_json::Value;
use woobat_host::EventDispatcher;

#[derive(Debug, Clone, Copy, Default)]
/// Dispatches bubbling `CustomEvent`s on `document`.
pub struct WebEventDispatcher;

impl EventDispatcher for WebEventDispatcher {
    fn dispatch(&self, name: &str, detail: &Value) -> bool {
        #[cfg(target_arch = "wasm32")]
        {
            let Some(document) = web_sys::window().and_then(|window| window.document()) else {
                return false;
            };
            let Ok(detail) = js_sys::JSON::parse(&detail.to_string()) else {
                return false;
            };
            let init = web_sys::CustomEventInit::new();
            init.set_bubbles(true);
            init.set_detail(&detail);
            let Ok(event) = web_sys::CustomEvent::new_with_event_init_dict(name, &init) else {
                return false;
            };
            document.dispatch_event(&event).unwrap_or(false)
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = (name, detail);
            false
        }
    }
}
