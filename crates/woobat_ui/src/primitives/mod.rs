//! Woobat components.
//!
//! Every component renders the shared `data-ui-*` attribute contract (`data-ui-primitive`,
//! `data-ui-kind`, `data-ui-variant`, ...) and carries its per-instance colors as an inline
//! style derived from `woobat_runtime::appearance`.

use leptos::ev::MouseEvent;
use leptos::*;
use woobat_runtime::appearance::InlineStyle;

use crate::Icon;

mod controls;
mod data_display;

pub use controls::{Button, Checkbox, CheckboxGroup};
pub use data_display::{Alert, Avatar, Badge, Chip};

pub(crate) fn merge_layout_class(base: &'static str, layout_class: Option<&'static str>) -> String {
    match layout_class {
        Some(layout_class) if !layout_class.is_empty() => format!("{base} {layout_class}"),
        _ => base.to_string(),
    }
}

pub(crate) fn bool_token(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}

/// Derived style with the caller's inline CSS appended last.
pub(crate) fn style_with(mut style: InlineStyle, extra: Option<&str>) -> String {
    if let Some(extra) = extra {
        style.merge_css(extra);
    }
    style.to_css()
}
