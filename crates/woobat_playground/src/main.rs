//! Binary entrypoint for the browser-hosted component playground.

#[cfg(all(target_arch = "wasm32", feature = "csr"))]
fn main() {
    woobat_playground::mount();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    eprintln!(
        "This binary is intended for the browser/WASM workflow. Build `woobat_playground_app` for wasm32 with the `csr` feature."
    );
}
