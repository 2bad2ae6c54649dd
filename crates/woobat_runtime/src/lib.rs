//! Headless core of the Woobat component library.
//!
//! This crate owns every piece of component behavior that can be expressed without a DOM:
//!
//! - [`ripple`]: click-ripple geometry and the per-surface ripple state machine
//! - [`icons`]: icon name classification and the lazily loaded, memoizing [`IconResolver`]
//! - [`theme`]: the shared light/dark [`ThemeStore`]
//! - [`plugin`]: installation options and the prefixed [`ComponentRegistry`]
//! - [`appearance`], [`color`], [`tokens`] and [`selection`]: props-to-style derivations
//!
//! Environment access goes through the `woobat_host` contracts, so everything here runs (and is
//! tested) natively. The Leptos components in `woobat_ui` are thin views over these types.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod appearance;
pub mod color;
pub mod icons;
pub mod plugin;
pub mod ripple;
pub mod selection;
pub mod theme;
pub mod tokens;

pub use icons::{IconClass, IconHandle, IconLoadState, IconResolver, IconResolverOptions};
pub use plugin::{ComponentKind, ComponentRegistry, PluginError, PluginOptions, Woobat};
pub use ripple::{RippleEffect, RippleOptions, RippleSurface};
pub use theme::{ThemeMode, ThemeOptions, ThemeStore, ThemeSubscription};
pub use tokens::{ColorVariant, ComponentSize, Elevation, IconSize, Rounded};
