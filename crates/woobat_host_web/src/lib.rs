//! Browser (`wasm32`) implementations of the [`woobat_host`] service contracts.
//!
//! Every adapter guards on the presence of `window`/`document` and degrades to a no-op, so the
//! same bundle can be constructed during server rendering or in native test binaries. Adapters
//! are split by domain:
//! - [`prefs`]: `localStorage` theme slot
//! - [`root`]: `document.documentElement` attribute, class and CSS-variable access
//! - [`events`]: `CustomEvent` dispatch on `document`
//! - [`color_scheme`]: `matchMedia("(prefers-color-scheme: dark)")`

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod adapters;
pub mod color_scheme;
pub mod events;
pub mod prefs;
pub mod root;

pub use adapters::{build_host_services, is_browser};
pub use color_scheme::WebColorScheme;
pub use events::WebEventDispatcher;
pub use prefs::WebPrefsStore;
pub use root::WebPresentationRoot;
