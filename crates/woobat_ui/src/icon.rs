//! Icon component.
//!
//! Names are routed through the context [`IconResolver`]: CSS-class names render as `<i>`,
//! names found in the icon set render as inline SVG, and anything else renders the configured
//! fallback glyph once the set has loaded. Without an icon set every name is treated as a CSS
//! class.

use leptos::*;
use woobat_runtime::tokens::icon_size_px;
use woobat_runtime::{IconClass, IconHandle, IconLoadState, IconResolver};

use crate::primitives::{bool_token, merge_layout_class};
use crate::provider::use_woobat;

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum IconRender {
    Glyph(IconHandle),
    CssClass(String),
    Pending,
    Empty,
}

pub(crate) fn plan_icon(resolver: &IconResolver, name: &str) -> IconRender {
    let name = name.trim();
    if name.is_empty() {
        return IconRender::Empty;
    }
    if resolver.classify(name) == IconClass::CssClass {
        return IconRender::CssClass(name.to_string());
    }
    if let Some(handle) = resolver.resolve(name) {
        return IconRender::Glyph(handle);
    }
    match resolver.state() {
        IconLoadState::Unloaded | IconLoadState::Loading => IconRender::Pending,
        IconLoadState::Unavailable => IconRender::CssClass(name.to_string()),
        IconLoadState::Loaded => resolver
            .fallback()
            .map(IconRender::Glyph)
            .unwrap_or(IconRender::Empty),
    }
}

/// Pixel size for a size token (`"xs"`..`"2xl"`) or a number with an optional `px` suffix.
pub fn icon_dimension(size: &str) -> u32 {
    let size = size.trim();
    size.strip_suffix("px")
        .unwrap_or(size)
        .trim()
        .parse::<u32>()
        .unwrap_or_else(|_| icon_size_px(size))
}

fn icon_style(color: Option<&str>, rotate: Option<i32>) -> String {
    let mut style = String::new();
    if let Some(color) = color.filter(|color| !color.is_empty()) {
        style.push_str(&format!("color: {color};"));
    }
    if let Some(degrees) = rotate.filter(|degrees| degrees % 360 != 0) {
        style.push_str(&format!("transform: rotate({degrees}deg);"));
    }
    style
}

#[component]
/// Renders an icon by name.
pub fn Icon(
    /// Icon name: set name (`arrow-left`, `ArrowLeft`) or CSS classes (`fa fa-star`).
    #[prop(into)]
    name: MaybeSignal<String>,
    /// Size token or pixel value.
    #[prop(optional, into)]
    size: Option<String>,
    #[prop(optional, into)] color: Option<String>,
    #[prop(optional, into)] spin: MaybeSignal<bool>,
    /// Rotation in degrees.
    #[prop(optional)]
    rotate: Option<i32>,
    /// Accessible label; decorative when omitted.
    #[prop(optional, into)]
    aria_label: Option<String>,
    #[prop(optional)] layout_class: Option<&'static str>,
) -> impl IntoView {
    let context = use_woobat();
    let resolver = context.icons.clone();
    let icon_state = context.icon_state;
    let size_px = icon_dimension(size.as_deref().unwrap_or("md"));
    let style = icon_style(color.as_deref(), rotate);
    let class = merge_layout_class("wb-icon", layout_class);
    let decorative = aria_label.is_none();
    let spin = Signal::derive(move || spin.get());

    move || {
        let _ = icon_state.get();
        let name = name.get();
        match plan_icon(&resolver, &name) {
            IconRender::Glyph(glyph) => view! {
                <svg
                    class=class.clone()
                    data-ui-kind="icon"
                    data-icon=glyph.name.clone()
                    data-ui-spin=move || bool_token(spin.get())
                    xmlns="http://www.w3.org/2000/svg"
                    viewBox=glyph.view_box.clone()
                    width=size_px
                    height=size_px
                    fill="none"
                    stroke="currentColor"
                    stroke-width="2"
                    stroke-linecap="round"
                    stroke-linejoin="round"
                    style=style.clone()
                    role=(!decorative).then_some("img")
                    aria-label=aria_label.clone()
                    aria-hidden=decorative.then_some("true")
                    focusable="false"
                    inner_html=glyph.body.clone()
                />
            }
            .into_view(),
            IconRender::CssClass(classes) => view! {
                <i
                    class=format!("{class} {classes}")
                    data-ui-kind="icon"
                    data-ui-spin=move || bool_token(spin.get())
                    style=format!("{style}font-size: {size_px}px;")
                    role=(!decorative).then_some("img")
                    aria-label=aria_label.clone()
                    aria-hidden=decorative.then_some("true")
                />
            }
            .into_view(),
            IconRender::Pending | IconRender::Empty => view! {
                <span
                    class=class.clone()
                    data-ui-kind="icon"
                    data-ui-state="pending"
                    style=format!("width: {size_px}px; height: {size_px}px;")
                    aria-hidden="true"
                />
            }
            .into_view(),
        }
    }
}
