//! Browser playground that renders every Woobat component.
//!
//! The playground installs the library with the browser host adapters, so theme changes are
//! persisted to `localStorage` and mirrored on `<html>` exactly as in an application.

mod showcase;

pub use showcase::PlaygroundApp;

#[cfg(all(feature = "csr", target_arch = "wasm32"))]
/// Mounts the playground into `<body>`.
pub fn mount() {
    console_error_panic_hook::set_once();
    leptos::mount_to_body(|| leptos::view! { <PlaygroundApp /> })
}
