use leptos::*;
use woobat_host_web::build_host_services;
use woobat_runtime::appearance::{badge_display, BadgeContent, BadgeDisplay};
use woobat_runtime::ThemeOptions;
use woobat_ui::prelude::*;

const BUTTON_VARIANTS: [ButtonVariant; 5] = [
    ButtonVariant::Filled,
    ButtonVariant::Tonal,
    ButtonVariant::Outlined,
    ButtonVariant::Text,
    ButtonVariant::Elevated,
];

const ALERT_KINDS: [AlertKind; 4] = [
    AlertKind::Success,
    AlertKind::Info,
    AlertKind::Warning,
    AlertKind::Error,
];

fn theme_toggle_label(mode: ThemeMode) -> &'static str {
    match mode {
        ThemeMode::Light => "Switch to dark",
        ThemeMode::Dark => "Switch to light",
    }
}

fn variant_label(variant: ButtonVariant) -> String {
    let token = variant.token();
    let mut chars = token.chars();
    chars
        .next()
        .map(|first| first.to_uppercase().chain(chars).collect())
        .unwrap_or_default()
}

fn playground_options() -> PluginOptions {
    PluginOptions {
        theme_options: ThemeOptions {
            storage_key: "woobat-playground-theme".to_string(),
            ..ThemeOptions::default()
        },
        ..PluginOptions::default()
    }
}

#[component]
/// Playground root: installs the library and renders the component sections.
pub fn PlaygroundApp() -> impl IntoView {
    view! {
        <WoobatProvider host_services=build_host_services() options=playground_options()>
            <main class="playground">
                <ThemeBar />
                <ButtonSection />
                <AlertSection />
                <AvatarSection />
                <BadgeSection />
                <ChipSection />
                <CheckboxSection />
                <IconSection />
            </main>
        </WoobatProvider>
    }
}

#[component]
fn ThemeBar() -> impl IntoView {
    let theme = use_theme();
    let mode = theme.mode;
    let toggle = theme.clone();
    let follow = theme;

    view! {
        <header class="playground__bar">
            <h1>"Woobat UI"</h1>
            <Button
                variant=ButtonVariant::Tonal
                on_click=Callback::new(move |_| toggle.toggle_theme())
            >
                <Icon name=Signal::derive(move || {
                    if mode.get().is_dark() { "Sun".to_string() } else { "Moon".to_string() }
                }) />
                {move || theme_toggle_label(mode.get())}
            </Button>
            <Button
                variant=ButtonVariant::Text
                on_click=Callback::new(move |_| follow.set_system_theme())
            >
                "Use system theme"
            </Button>
        </header>
    }
}

#[component]
fn ButtonSection() -> impl IntoView {
    let loading = create_rw_signal(false);
    let clicks = create_rw_signal(0u32);

    view! {
        <section class="playground__section">
            <h2>"Buttons"</h2>
            <div class="playground__row">
                {BUTTON_VARIANTS
                    .into_iter()
                    .map(|variant| {
                        view! {
                            <Button
                                variant=variant
                                on_click=Callback::new(move |_| clicks.update(|count| *count += 1))
                            >
                                {variant_label(variant)}
                            </Button>
                        }
                    })
                    .collect_view()}
            </div>
            <div class="playground__row">
                {ComponentSize::ALL
                    .into_iter()
                    .map(|size| view! { <Button size=size>{size.token()}</Button> })
                    .collect_view()}
            </div>
            <div class="playground__row">
                <Button icon="arrow-left" variant=ButtonVariant::Outlined>"Back"</Button>
                <Button append_icon="arrow-right">"Next"</Button>
                <Button icon="Heart" icon_only=true aria_label="Like" rounded=Rounded::Full />
                <Button custom_color="#7c3aed">"Custom color"</Button>
                <Button disabled=true>"Disabled"</Button>
                <Button ripple=false variant=ButtonVariant::Outlined>"No ripple"</Button>
                <Button
                    loading=loading
                    on_click=Callback::new(move |_| loading.set(true))
                >
                    "Load"
                </Button>
                <Button
                    variant=ButtonVariant::Text
                    on_click=Callback::new(move |_| loading.set(false))
                >
                    "Reset"
                </Button>
            </div>
            <Button block=true elevation=2>"Block button"</Button>
            <p>{move || format!("Variant clicks: {}", clicks.get())}</p>
        </section>
    }
}

#[component]
fn AlertSection() -> impl IntoView {
    let closed = create_rw_signal(0u32);

    view! {
        <section class="playground__section">
            <h2>"Alerts"</h2>
            {ALERT_KINDS
                .into_iter()
                .map(|kind| {
                    view! {
                        <Alert
                            kind=kind
                            show_title=true
                            text="Something worth knowing happened."
                            closable=true
                            on_close=Callback::new(move |_| closed.update(|count| *count += 1))
                        />
                    }
                })
                .collect_view()}
            <Alert kind=AlertKind::Info variant=AlertVariant::Outlined text="Outlined alert." />
            <Alert
                kind=AlertKind::Warning
                variant=AlertVariant::Border
                border=BorderSide::Left
                title="Heads up"
                text="Bordered alert with a custom title."
            />
            <p>{move || format!("Dismissed: {}", closed.get())}</p>
        </section>
    }
}

#[component]
fn AvatarSection() -> impl IntoView {
    view! {
        <section class="playground__section">
            <h2>"Avatars"</h2>
            <div class="playground__row">
                <Avatar text="Ada Lovelace" />
                <Avatar text="Grace Hopper" color=ColorVariant::Success size="lg" />
                <Avatar src="/missing-avatar.png" text="Broken Image" size="48" />
                <Avatar size="xl" tile=true />
            </div>
        </section>
    }
}

#[component]
fn BadgeSection() -> impl IntoView {
    let unread = create_rw_signal(120i64);
    let summary = move || {
        match badge_display(Some(&BadgeContent::Count(unread.get())), Some(99), false, false) {
            BadgeDisplay::Label(label) => label,
            _ => "none".to_string(),
        }
    };

    view! {
        <section class="playground__section">
            <h2>"Badges"</h2>
            <div class="playground__row">
                <Badge count=unread max=99>
                    <Icon name="Bell" size="xl" />
                </Badge>
                <Badge count=0i64 show_zero=true>
                    <Icon name="Mail" size="xl" />
                </Badge>
                <Badge dot=true color=ColorVariant::Success>
                    <Avatar text="On Line" size="sm" />
                </Badge>
                <Badge text="new" inline=true color=ColorVariant::Info>"Release"</Badge>
            </div>
            <Button variant=ButtonVariant::Text on_click=Callback::new(move |_| unread.set(0))>
                {move || format!("Mark all read ({})", summary())}
            </Button>
        </section>
    }
}

#[component]
fn ChipSection() -> impl IntoView {
    view! {
        <section class="playground__section">
            <h2>"Chips"</h2>
            <div class="playground__row">
                <Chip label="Filled" />
                <Chip label="Outlined" variant=ChipVariant::Outlined color="#3b82f6" />
                <Chip label="Tonal" variant=ChipVariant::Tonal color="#10b981" icon="Check" />
                <Chip label="Removable" closable=true />
                <Chip label="Square" square=true size=ComponentSize::Sm />
            </div>
        </section>
    }
}

#[component]
fn CheckboxSection() -> impl IntoView {
    let accepted = create_rw_signal(false);
    let fruits = create_rw_signal(vec!["apple".to_string()]);
    let partial = Signal::derive(move || {
        let selected = fruits.with(Vec::len);
        selected > 0 && selected < 3
    });

    view! {
        <section class="playground__section">
            <h2>"Checkboxes"</h2>
            <Checkbox checked=accepted label="Accept terms" />
            <Checkbox
                label="Required"
                error=Signal::derive(move || !accepted.get())
                error_message="Please accept the terms."
            />
            <Checkbox label="Disabled" disabled=true />
            <Checkbox label="Some fruits" indeterminate=partial />
            <CheckboxGroup selected=fruits aria_label="Fruits">
                <Checkbox value="apple" label="Apple" />
                <Checkbox value="banana" label="Banana" color=ColorVariant::Warning />
                <Checkbox value="cherry" label="Cherry" custom_color="#be123c" />
            </CheckboxGroup>
            <p>{move || format!("Selected: {}", fruits.get().join(", "))}</p>
        </section>
    }
}

#[component]
fn IconSection() -> impl IntoView {
    view! {
        <section class="playground__section">
            <h2>"Icons"</h2>
            <div class="playground__row">
                <Icon name="home" />
                <Icon name="Star" size="lg" color="#f59e0b" />
                <Icon name="settings" size="xl" spin=true />
                <Icon name="arrow-right" size="32" rotate=90 />
                <Icon name="fa fa-star" aria_label="Font Awesome star" />
                <Icon name="not-an-icon" />
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn theme_toggle_names_the_other_mode() {
        assert_eq!(theme_toggle_label(ThemeMode::Light), "Switch to dark");
        assert_eq!(theme_toggle_label(ThemeMode::Dark), "Switch to light");
    }

    #[test]
    fn variant_labels_are_capitalized() {
        assert_eq!(variant_label(ButtonVariant::Tonal), "Tonal");
        assert_eq!(variant_label(ButtonVariant::Elevated), "Elevated");
    }

    #[test]
    fn playground_keeps_its_own_theme_key() {
        let options = playground_options();
        assert_eq!(options.theme_options.storage_key, "woobat-playground-theme");
        assert_eq!(options.prefix, "wb");
    }
}
