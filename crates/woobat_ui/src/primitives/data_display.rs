use woobat_runtime::appearance::{
    badge_display, initials, AlertAppearance, AlertKind, AlertVariant, AvatarAppearance,
    AvatarSize, BadgeContent, BadgeDisplay, BorderSide, ChipAppearance, ChipVariant,
};
use woobat_runtime::tokens::{ColorVariant, ComponentSize, Rounded};

use super::*;

/// Icon shown by typed alerts.
pub(crate) fn alert_icon(kind: AlertKind) -> Option<&'static str> {
    match kind {
        AlertKind::Success => Some("CheckCircle"),
        AlertKind::Error => Some("XCircle"),
        AlertKind::Warning => Some("AlertTriangle"),
        AlertKind::Info => Some("Info"),
        AlertKind::Custom => None,
    }
}

#[component]
/// Inline status message with a typed icon and an optional close button.
///
/// Closing hides the alert through `visible` (an internal signal when none is passed) and
/// then calls `on_close`.
pub fn Alert(
    #[prop(optional)] kind: AlertKind,
    #[prop(optional)] variant: AlertVariant,
    /// Accent side for [`AlertVariant::Border`].
    #[prop(optional)]
    border: BorderSide,
    #[prop(optional, into)] color: Option<String>,
    #[prop(optional, into)] color_text: Option<String>,
    #[prop(optional, into)] title: Option<String>,
    /// Render the kind's default title when `title` is unset.
    #[prop(optional)]
    show_title: bool,
    #[prop(optional, into)] text: Option<String>,
    /// Icon name overriding the kind's icon.
    #[prop(optional, into)]
    icon: Option<String>,
    #[prop(optional)] hide_icon: bool,
    #[prop(optional)] closable: bool,
    #[prop(optional)] visible: Option<RwSignal<bool>>,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] on_close: Option<Callback<()>>,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    let visible = visible.unwrap_or_else(|| create_rw_signal(true));
    let render_title = title.is_some() || show_title;
    let appearance = AlertAppearance {
        kind,
        variant,
        border,
        color,
        color_text,
        title,
    };
    let icon = if hide_icon {
        None
    } else {
        icon.or_else(|| alert_icon(kind).map(str::to_string))
    };
    let heading = render_title.then(|| appearance.title());
    let style = appearance.style().to_css();
    let class = merge_layout_class("wb-alert", layout_class);
    let body = children.map(|children| children());

    let close = move |_: MouseEvent| {
        visible.set(false);
        if let Some(on_close) = on_close.as_ref() {
            on_close.call(());
        }
    };

    view! {
        <div
            class=class
            style=style
            role="alert"
            hidden=move || !visible.get()
            data-ui-primitive="true"
            data-ui-kind="alert"
            data-ui-variant=variant.token()
            data-ui-tone=kind.token()
        >
            {icon.map(|name| view! { <Icon name=name size="lg" layout_class="wb-alert__icon" /> })}
            <div class="wb-alert__body">
                {heading.map(|heading| view! { <div class="wb-alert__title">{heading}</div> })}
                {text.map(|text| view! { <div class="wb-alert__text">{text}</div> })}
                {body}
            </div>
            {closable.then(|| view! {
                <button type="button" class="wb-alert__close" aria-label="Close" on:click=close>
                    <Icon name="X" size="sm" />
                </button>
            })}
        </div>
    }
}

#[component]
/// Image, initials or icon avatar. A failed image falls back to initials, then to the icon.
pub fn Avatar(
    #[prop(optional, into)] src: Option<String>,
    #[prop(optional, into)] alt: Option<String>,
    /// Name the initials are taken from.
    #[prop(optional, into)]
    text: Option<String>,
    #[prop(default = "User".to_string(), into)] icon: String,
    /// Size token (`xs`..`xl`), pixel count or CSS length.
    #[prop(optional, into)]
    size: Option<String>,
    #[prop(optional)] color: ColorVariant,
    #[prop(optional, into)] custom_color: Option<String>,
    #[prop(optional, into)] text_color: Option<String>,
    #[prop(default = Rounded::Full)] rounded: Rounded,
    #[prop(optional)] tile: bool,
    #[prop(optional)] layout_class: Option<&'static str>,
) -> impl IntoView {
    let size = size
        .as_deref()
        .map(AvatarSize::from)
        .unwrap_or_default();
    let icon_size = match &size {
        AvatarSize::Preset(preset) => preset.icon_size().token(),
        _ => "md",
    };
    let style = AvatarAppearance {
        size,
        color,
        custom_color,
        text_color,
        rounded,
        tile,
    }
    .style()
    .to_css();
    let label = initials(text.as_deref().unwrap_or_default());
    let image_failed = create_rw_signal(false);
    let aria_label = alt.clone().or(text);

    view! {
        <div
            class=merge_layout_class("wb-avatar", layout_class)
            style=style
            role="img"
            aria-label=aria_label
            data-ui-primitive="true"
            data-ui-kind="avatar"
            data-ui-tile=bool_token(tile)
        >
            {move || match (&src, image_failed.get()) {
                (Some(src), false) => view! {
                    <img src=src.clone() alt=alt.clone() on:error=move |_| image_failed.set(true) />
                }
                .into_view(),
                _ if !label.is_empty() => view! { <span>{label.clone()}</span> }.into_view(),
                _ => view! { <Icon name=icon.clone() size=icon_size /> }.into_view(),
            }}
        </div>
    }
}

#[component]
/// Count, text or dot badge attached to its children.
pub fn Badge(
    #[prop(optional, into)] count: Option<MaybeSignal<i64>>,
    #[prop(optional, into)] text: Option<MaybeSignal<String>>,
    /// Counts above this render as `{max}+`.
    #[prop(optional)]
    max: Option<i64>,
    #[prop(optional)] show_zero: bool,
    #[prop(optional)] dot: bool,
    #[prop(default = ColorVariant::Error)] color: ColorVariant,
    #[prop(optional, into)] custom_color: Option<String>,
    /// Render next to the children instead of over their corner.
    #[prop(optional)]
    inline: bool,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    let display = Signal::derive(move || {
        let content = count
            .as_ref()
            .map(|count| BadgeContent::Count(count.get()))
            .or_else(|| text.as_ref().map(|text| BadgeContent::Text(text.get())));
        badge_display(content.as_ref(), max, show_zero, dot)
    });
    let background = custom_color.unwrap_or_else(|| color.hex().to_string());

    view! {
        <span
            class=merge_layout_class("wb-badge", layout_class)
            data-ui-primitive="true"
            data-ui-kind="badge"
            data-ui-inline=bool_token(inline)
        >
            {children.map(|children| children())}
            {move || match display.get() {
                BadgeDisplay::Hidden => ().into_view(),
                BadgeDisplay::Dot => view! {
                    <span
                        class="wb-badge__content"
                        data-ui-dot="true"
                        style=format!("background-color: {background};")
                    />
                }
                .into_view(),
                BadgeDisplay::Label(label) => view! {
                    <span
                        class="wb-badge__content"
                        data-ui-dot="false"
                        style=format!("background-color: {background};")
                    >
                        {label}
                    </span>
                }
                .into_view(),
            }}
        </span>
    }
}

#[component]
/// Compact label with an optional leading icon and close button.
pub fn Chip(
    #[prop(optional)] variant: ChipVariant,
    #[prop(optional)] size: ComponentSize,
    #[prop(optional, into)] color: Option<String>,
    #[prop(optional, into)] text_color: Option<String>,
    #[prop(optional, into)] border_color: Option<String>,
    #[prop(optional)] rounded: Option<Rounded>,
    #[prop(optional)] square: bool,
    #[prop(optional, into)] icon: Option<String>,
    #[prop(optional, into)] label: Option<String>,
    #[prop(optional)] closable: bool,
    #[prop(optional)] visible: Option<RwSignal<bool>>,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
    #[prop(optional)] on_close: Option<Callback<MouseEvent>>,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    let visible = visible.unwrap_or_else(|| create_rw_signal(true));
    let style = ChipAppearance {
        variant,
        size,
        color,
        text_color,
        border_color,
        rounded,
        square,
    }
    .style()
    .to_css();
    let icon_size = size.icon_size().token();

    view! {
        <span
            class=merge_layout_class("wb-chip", layout_class)
            style=style
            hidden=move || !visible.get()
            data-ui-primitive="true"
            data-ui-kind="chip"
            data-ui-variant=variant.token()
            data-ui-size=size.token()
            on:click=move |ev| {
                if let Some(on_click) = on_click.as_ref() {
                    on_click.call(ev);
                }
            }
        >
            {icon.map(|name| view! { <Icon name=name size=icon_size /> })}
            {label.map(|label| view! { <span class="wb-chip__label">{label}</span> })}
            {children.map(|children| children())}
            {closable.then(|| view! {
                <button
                    type="button"
                    class="wb-chip__close"
                    aria-label="Remove"
                    on:click=move |ev: MouseEvent| {
                        ev.stop_propagation();
                        visible.set(false);
                        if let Some(on_close) = on_close.as_ref() {
                            on_close.call(ev);
                        }
                    }
                >
                    <Icon name="X" size=icon_size />
                </button>
            })}
        </span>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn typed_alerts_pick_their_icon() {
        assert_eq!(alert_icon(AlertKind::Success), Some("CheckCircle"));
        assert_eq!(alert_icon(AlertKind::Error), Some("XCircle"));
        assert_eq!(alert_icon(AlertKind::Warning), Some("AlertTriangle"));
        assert_eq!(alert_icon(AlertKind::Info), Some("Info"));
        assert_eq!(alert_icon(AlertKind::Custom), None);
    }
}
