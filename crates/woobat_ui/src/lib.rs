//! Leptos components for the Woobat UI library.
//!
//! The crate renders the headless `woobat_runtime` models: [`WoobatProvider`] installs the
//! plugin (component registry, shared theme, icon resolver) for a subtree, the components in
//! [`prelude`] read it from context, and [`use_ripple`] binds click ripples to any element.
//! Browser access is guarded behind `wasm32`, so the crate builds and tests natively.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod icon;
pub mod icon_set;
mod primitives;
mod provider;
pub mod ripple;
mod styles;

pub use icon::{icon_dimension, Icon};
pub use primitives::{Alert, Avatar, Badge, Button, Checkbox, CheckboxGroup, Chip};
pub use provider::{
    install_with_fallback, options_from_json, use_theme, use_woobat, LeptosSpawner, UseTheme,
    WoobatContext, WoobatProvider,
};
pub use ripple::{use_ripple, DomRippleSurface, RippleHandle};
pub use styles::COMPONENT_CSS;

/// Convenience imports for applications using the component set.
pub mod prelude {
    pub use crate::{
        use_ripple, use_theme, use_woobat, Alert, Avatar, Badge, Button, Checkbox, CheckboxGroup,
        Chip, Icon, WoobatProvider,
    };
    pub use woobat_runtime::appearance::{AlertKind, AlertVariant, BorderSide, ButtonVariant, ChipVariant};
    pub use woobat_runtime::{
        ColorVariant, ComponentSize, PluginOptions, RippleOptions, Rounded, ThemeMode,
    };
}
