use woobat_runtime::appearance::{checkbox_color, ButtonAppearance, ButtonVariant};
use woobat_runtime::ripple::RippleOptions;
use woobat_runtime::selection::{CheckState, CheckboxModel};
use woobat_runtime::tokens::{ColorVariant, ComponentSize, Elevation, Rounded};

use super::*;
use crate::provider::use_woobat;
use crate::ripple::use_ripple;

/// Ripple tuning for buttons: quicker and lighter than the library default.
fn button_ripple_options() -> RippleOptions {
    RippleOptions {
        opacity: 0.2,
        duration_ms: 400,
        ..RippleOptions::default()
    }
}

/// Whether a button ripples when clicked. Padding-free buttons never do.
fn button_ripples(ripple: bool, no_padding: bool) -> bool {
    ripple && !no_padding
}

#[component]
/// Button with filled, tonal, outlined, text and elevated variants, icon slots, a loading
/// spinner and ripple feedback.
///
/// Unset style props take the library-wide button defaults from the plugin options.
pub fn Button(
    #[prop(optional)] variant: Option<ButtonVariant>,
    #[prop(optional)] size: Option<ComponentSize>,
    #[prop(optional)] color: Option<ColorVariant>,
    /// Any CSS color; overrides `color`.
    #[prop(optional, into)]
    custom_color: Option<String>,
    #[prop(optional, into)] text_color: Option<String>,
    #[prop(optional, into)] border_color: Option<String>,
    #[prop(optional)] rounded: Option<Rounded>,
    /// Shadow level, `0..=5`.
    #[prop(optional)]
    elevation: Option<u8>,
    /// Full-width layout.
    #[prop(optional)]
    block: Option<bool>,
    /// Leading icon name.
    #[prop(optional, into)]
    icon: Option<String>,
    /// Trailing icon name.
    #[prop(optional, into)]
    append_icon: Option<String>,
    /// Square button holding only `icon`.
    #[prop(optional)]
    icon_only: bool,
    #[prop(optional, into)] padding: Option<String>,
    #[prop(optional)] no_padding: bool,
    #[prop(optional, into)] loading: MaybeSignal<bool>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    /// Ripple on press; follows the plugin options when unset.
    #[prop(optional)]
    ripple: Option<bool>,
    #[prop(default = "button")] button_type: &'static str,
    #[prop(optional, into)] aria_label: Option<String>,
    #[prop(optional, into)] title: Option<String>,
    #[prop(optional, into)] style: Option<String>,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    let context = use_woobat();
    let defaults = context.options.component_options.button.clone();
    let ripple_enabled = ripple.unwrap_or_else(|| context.ripple_enabled());

    let size = size.unwrap_or(defaults.size);
    let appearance = ButtonAppearance {
        variant: variant.unwrap_or(defaults.variant),
        size,
        color: color.unwrap_or(defaults.color),
        custom_color,
        text_color,
        border_color,
        rounded: rounded.unwrap_or(defaults.rounded),
        elevation: elevation.map(Elevation::new).unwrap_or(defaults.elevation),
        icon_only,
        padding,
        no_padding,
    };
    let block = block.unwrap_or(defaults.block);
    let inline_style = style_with(appearance.style(), style.as_deref());
    let icon_size = size.icon_size().token();

    let default_disabled = defaults.disabled;
    let default_loading = defaults.loading;
    let disabled = Signal::derive(move || default_disabled || disabled.get());
    let loading = Signal::derive(move || default_loading || loading.get());
    let inert = Signal::derive(move || disabled.get() || loading.get());

    let ripple_on_click = button_ripples(ripple_enabled, no_padding);
    let node_ref = create_node_ref::<html::Button>();
    let ripple = use_ripple(
        node_ref,
        button_ripple_options(),
        Signal::derive(move || ripple_on_click && !inert.get()).into(),
    );

    view! {
        <button
            node_ref=node_ref
            type=button_type
            class=merge_layout_class("wb-btn", layout_class)
            style=inline_style
            aria-label=aria_label
            title=title
            aria-busy=move || bool_token(loading.get())
            disabled=move || inert.get()
            data-ui-primitive="true"
            data-ui-kind="button"
            data-ui-variant=appearance.variant.token()
            data-ui-size=size.token()
            data-ui-color=appearance.color.token()
            data-ui-block=bool_token(block)
            data-ui-icon-only=bool_token(icon_only)
            data-ui-loading=move || bool_token(loading.get())
            data-ui-disabled=move || bool_token(disabled.get())
            on:click=move |ev| {
                if inert.get_untracked() {
                    ev.prevent_default();
                    return;
                }
                if ripple_on_click {
                    ripple.on_click(&ev);
                }
                if let Some(on_click) = on_click.as_ref() {
                    on_click.call(ev);
                }
            }
        >
            {move || {
                loading
                    .get()
                    .then(|| {
                        view! {
                            <span class="wb-btn__spinner" aria-hidden="true">
                                <Icon name="Loader" size=icon_size spin=true />
                            </span>
                        }
                    })
            }}
            <span class="wb-btn__content" data-ui-hidden=move || bool_token(loading.get())>
                {icon.map(|name| view! { <Icon name=name size=icon_size /> })}
                {children.map(|children| children())}
                {append_icon.map(|name| view! { <Icon name=name size=icon_size /> })}
            </span>
        </button>
    }
}

#[derive(Clone, Copy)]
struct CheckboxGroupContext(RwSignal<Vec<String>>);

#[component]
/// Groups checkboxes over one list of selected values.
pub fn CheckboxGroup(
    /// Selected values, in selection order.
    selected: RwSignal<Vec<String>>,
    #[prop(optional, into)] aria_label: Option<String>,
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    provide_context(CheckboxGroupContext(selected));
    view! {
        <div
            class=merge_layout_class("wb-checkbox-group", layout_class)
            role="group"
            aria-label=aria_label
            data-ui-primitive="true"
            data-ui-kind="checkbox-group"
        >
            {children()}
        </div>
    }
}

fn check_state_token(state: CheckState) -> &'static str {
    match state {
        CheckState::Unchecked => "unchecked",
        CheckState::Checked => "checked",
        CheckState::Indeterminate => "indeterminate",
    }
}

fn checkbox_box_style(state: CheckState, accent: &str) -> String {
    match state {
        CheckState::Unchecked => format!("border-color: {accent}; background-color: transparent;"),
        CheckState::Checked | CheckState::Indeterminate => {
            format!("border-color: {accent}; background-color: {accent};")
        }
    }
}

#[component]
/// Checkbox bound to a flag, or to a value inside a [`CheckboxGroup`].
///
/// Inside a group with `value` set, toggling adds or removes `value` from the group's
/// selection; otherwise `checked` is flipped (an internal signal when none is passed).
pub fn Checkbox(
    #[prop(optional)] checked: Option<RwSignal<bool>>,
    /// Group member value.
    #[prop(optional, into)]
    value: Option<String>,
    #[prop(optional, into)] label: Option<String>,
    #[prop(optional, into)] indeterminate: MaybeSignal<bool>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(default = ColorVariant::Primary)] color: ColorVariant,
    #[prop(optional, into)] custom_color: Option<String>,
    #[prop(optional, into)] error: MaybeSignal<bool>,
    #[prop(optional, into)] error_message: Option<String>,
    #[prop(optional, into)] name: Option<String>,
    #[prop(optional)] layout_class: Option<&'static str>,
    /// Called with the new checked state.
    #[prop(optional)]
    on_change: Option<Callback<bool>>,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    let checked = checked.unwrap_or_else(|| create_rw_signal(false));
    let group = value
        .as_ref()
        .and_then(|_| use_context::<CheckboxGroupContext>())
        .map(|group| group.0);
    let member = value.clone();

    let model = move || match (group, member.clone()) {
        (Some(group), Some(value)) => CheckboxModel::Group {
            selected: group.get(),
            value,
        },
        _ => CheckboxModel::Flag(checked.get()),
    };
    let is_checked = {
        let model = model.clone();
        Signal::derive(move || model().is_checked())
    };
    let state = Signal::derive(move || CheckState::from_flags(is_checked.get(), indeterminate.get()));
    let has_message = error_message.is_some();
    let has_error = Signal::derive(move || error.get() || has_message);
    let accent = Signal::derive(move || checkbox_color(color, custom_color.as_deref(), has_error.get()));

    let toggle = move || {
        let current = untrack(model.clone());
        let Some(next) = current.toggle_unless_disabled(disabled.get_untracked()) else {
            return;
        };
        let now_checked = next.is_checked();
        match next {
            CheckboxModel::Group { selected, .. } => {
                if let Some(group) = group {
                    group.set(selected);
                }
            }
            _ => checked.set(now_checked),
        }
        if let Some(on_change) = on_change.as_ref() {
            on_change.call(now_checked);
        }
    };

    view! {
        <div
            class=merge_layout_class("wb-checkbox", layout_class)
            data-ui-primitive="true"
            data-ui-kind="checkbox"
            data-ui-state=move || check_state_token(state.get())
            data-ui-disabled=move || bool_token(disabled.get())
            data-ui-error=move || bool_token(has_error.get())
        >
            <label class="wb-checkbox__row">
                <input
                    class="wb-checkbox__input"
                    type="checkbox"
                    name=name
                    value=value
                    prop:checked=move || is_checked.get()
                    prop:indeterminate=move || indeterminate.get()
                    disabled=move || disabled.get()
                    aria-checked=move || state.get().aria_checked()
                    aria-invalid=move || bool_token(has_error.get())
                    on:change=move |_| toggle()
                />
                <span
                    class="wb-checkbox__box"
                    aria-hidden="true"
                    style=move || checkbox_box_style(state.get(), &accent.get())
                >
                    {move || match state.get() {
                        CheckState::Checked => view! { <Icon name="Check" size="xs" /> }.into_view(),
                        CheckState::Indeterminate => {
                            view! { <Icon name="Minus" size="xs" /> }.into_view()
                        }
                        CheckState::Unchecked => ().into_view(),
                    }}
                </span>
                {label.map(|label| view! { <span class="wb-checkbox__label">{label}</span> })}
                {children.map(|children| children())}
            </label>
            {error_message.map(|message| view! {
                <span class="wb-checkbox__error" role="alert">{message}</span>
            })}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn button_ripple_is_lighter_than_the_default() {
        let options = button_ripple_options();
        assert_eq!(options.duration_ms, 400);
        assert_eq!(options.opacity, 0.2);
        assert!(!options.centered);
    }

    #[test]
    fn padding_free_buttons_skip_the_ripple() {
        assert!(button_ripples(true, false));
        assert!(!button_ripples(true, true));
        assert!(!button_ripples(false, false));
    }

    #[test]
    fn checked_and_indeterminate_boxes_are_filled() {
        assert_eq!(
            checkbox_box_style(CheckState::Checked, "#3b82f6"),
            "border-color: #3b82f6; background-color: #3b82f6;"
        );
        assert_eq!(
            checkbox_box_style(CheckState::Unchecked, "#ef4444"),
            "border-color: #ef4444; background-color: transparent;"
        );
        assert_eq!(check_state_token(CheckState::Indeterminate), "indeterminate");
    }
}
