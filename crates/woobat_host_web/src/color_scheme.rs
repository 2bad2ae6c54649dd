//! `prefers-color-scheme` media query adapter.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::{closure::Closure, JsCast};
use woobat_host::{ColorSchemeListener, ColorSchemeSource, ColorSchemeWatch};

#[cfg(target_arch = "wasm32")]
const DARK_SCHEME_QUERY: &str = "(prefers-color-scheme: dark)";

#[derive(Debug, Clone, Copy, Default)]
/// Color-scheme source backed by `window.matchMedia`.
pub struct WebColorScheme;

#[cfg(target_arch = "wasm32")]
fn dark_scheme_query() -> Option<web_sys::MediaQueryList> {
    web_sys::window()?.match_media(DARK_SCHEME_QUERY).ok().flatten()
}

impl ColorSchemeSource for WebColorScheme {
    fn prefers_dark(&self) -> Option<bool> {
        #[cfg(target_arch = "wasm32")]
        {
            dark_scheme_query().map(|query| query.matches())
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            None
        }
    }

    fn watch(&self, listener: ColorSchemeListener) -> ColorSchemeWatch {
        #[cfg(target_arch = "wasm32")]
        {
            let Some(query) = dark_scheme_query() else {
                return ColorSchemeWatch::inert();
            };
            let query_for_change = query.clone();
            let on_change = Closure::<dyn FnMut(web_sys::Event)>::wrap(Box::new(move |_| {
                listener(query_for_change.matches());
            }));
            if query
                .add_event_listener_with_callback("change", on_change.as_ref().unchecked_ref())
                .is_err()
            {
                return ColorSchemeWatch::inert();
            }
            ColorSchemeWatch::new(move || {
                let _ = query.remove_event_listener_with_callback(
                    "change",
                    on_change.as_ref().unchecked_ref(),
                );
                drop(on_change);
            })
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = listener;
            ColorSchemeWatch::inert()
        }
    }
}
