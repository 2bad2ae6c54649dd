//! Plugin installation into a Leptos tree.
//!
//! [`WoobatProvider`] installs the library once per application: it validates the options,
//! registers components, initializes the shared [`ThemeStore`], builds the icon resolver and
//! exposes all of it to descendants as a [`WoobatContext`].

use std::rc::Rc;

use futures::task::{LocalFutureObj, LocalSpawn, SpawnError};
use leptos::*;
use woobat_host::HostServices;
use woobat_runtime::icons::IconSetLoader;
use woobat_runtime::plugin::DEFAULT_PREFIX;
use woobat_runtime::ripple::RIPPLE_CSS;
use woobat_runtime::{
    ComponentRegistry, IconLoadState, IconResolver, IconResolverOptions, PluginError,
    PluginOptions, ThemeMode, ThemeStore, Woobat,
};

use crate::{icon_set::bundled_loader, styles::COMPONENT_CSS};

#[derive(Debug, Clone, Copy, Default)]
/// Spawns resolver background work on the Leptos executor.
pub struct LeptosSpawner;

impl LocalSpawn for LeptosSpawner {
    fn spawn_local_obj(&self, future: LocalFutureObj<'static, ()>) -> Result<(), SpawnError> {
        spawn_local(future);
        Ok(())
    }
}

#[derive(Clone)]
/// Library state shared with every component below a [`WoobatProvider`].
pub struct WoobatContext {
    /// Environment adapters the library was installed with.
    pub host: HostServices,
    /// Options in effect after validation.
    pub options: Rc<PluginOptions>,
    /// Registered component tags.
    pub registry: Rc<ComponentRegistry>,
    /// Application theme.
    pub theme: ThemeStore,
    /// Reactive mirror of the theme mode.
    pub mode: RwSignal<ThemeMode>,
    /// Icon resolver.
    pub icons: IconResolver,
    /// Reactive mirror of the icon set load state.
    pub icon_state: RwSignal<IconLoadState>,
}

impl WoobatContext {
    fn from_install(woobat: Woobat, icons: IconResolver, host: HostServices) -> Self {
        let Woobat {
            options,
            registry,
            theme,
        } = woobat;
        Self {
            host,
            mode: create_rw_signal(theme.mode()),
            icon_state: create_rw_signal(icons.state()),
            options: Rc::new(options),
            registry: Rc::new(registry),
            theme,
            icons,
        }
    }

    /// Headless context used by components rendered outside a provider.
    pub fn detached() -> Self {
        let icons = IconResolver::with_spawner(
            IconResolverOptions::default(),
            bundled_loader(),
            Rc::new(LeptosSpawner),
        );
        Self::from_install(
            Woobat {
                options: PluginOptions::default(),
                registry: ComponentRegistry::default(),
                theme: ThemeStore::default(),
            },
            icons,
            HostServices::headless(),
        )
    }

    /// Whether buttons ripple unless told otherwise.
    pub fn ripple_enabled(&self) -> bool {
        self.options.ripple && self.options.component_options.button.ripple
    }
}

/// Installs with `options`, retrying with the default prefix when the configured one is invalid.
///
/// # Errors
///
/// Propagates the error of the retry.
pub fn install_with_fallback(
    host: HostServices,
    options: PluginOptions,
) -> Result<Woobat, PluginError> {
    match Woobat::install(host.clone(), options.clone()) {
        Err(PluginError::InvalidPrefix(prefix)) => {
            logging::warn!("invalid component prefix `{prefix}`, using `{DEFAULT_PREFIX}`");
            Woobat::install(
                host,
                PluginOptions {
                    prefix: DEFAULT_PREFIX.to_string(),
                    ..options
                },
            )
        }
        result => result,
    }
}

/// Parses JSON plugin options, warning and using defaults when they are malformed.
pub fn options_from_json(raw: &str) -> PluginOptions {
    PluginOptions::from_json(raw).unwrap_or_else(|err| {
        logging::warn!("{err}; using default options");
        PluginOptions::default()
    })
}

#[component]
/// Installs the library for its children.
pub fn WoobatProvider(
    /// Environment adapters; headless when omitted, which also turns ripples off.
    #[prop(optional)]
    host_services: Option<HostServices>,
    /// Installation options.
    #[prop(optional)]
    options: Option<PluginOptions>,
    /// Installation options as JSON; ignored when `options` is given.
    #[prop(optional, into)]
    config: Option<String>,
    /// Icon resolver options.
    #[prop(optional)]
    icon_options: Option<IconResolverOptions>,
    /// Icon set loader; the bundled set when omitted.
    #[prop(optional)]
    icon_loader: Option<Rc<dyn IconSetLoader>>,
    children: Children,
) -> impl IntoView {
    let host = host_services.unwrap_or_default();
    let options = options
        .or_else(|| config.as_deref().map(options_from_json))
        .unwrap_or_default();
    let icons = IconResolver::with_spawner(
        icon_options.unwrap_or_default(),
        icon_loader.unwrap_or_else(bundled_loader),
        Rc::new(LeptosSpawner),
    );

    let context = match install_with_fallback(host.clone(), options) {
        Ok(woobat) => WoobatContext::from_install(woobat, icons, host),
        Err(err) => {
            logging::warn!("woobat install failed: {err}");
            WoobatContext::detached()
        }
    };

    let mode = context.mode;
    let subscription = context.theme.subscribe(move |next| mode.set(next));
    let theme = context.theme.clone();
    on_cleanup(move || {
        subscription.cancel();
        theme.dispose();
    });

    let icon_state = context.icon_state;
    let resolver = context.icons.clone();
    spawn_local(async move {
        resolver.load().await;
        icon_state.set(resolver.state());
    });

    provide_context(context);

    view! {
        <style data-wb-styles="true">{RIPPLE_CSS}{COMPONENT_CSS}</style>
        {children()}
    }
}

/// Returns the nearest [`WoobatContext`], or a detached headless one outside a provider.
pub fn use_woobat() -> WoobatContext {
    use_context::<WoobatContext>().unwrap_or_else(|| {
        logging::warn!("woobat component rendered outside WoobatProvider");
        WoobatContext::detached()
    })
}

#[derive(Clone)]
/// Reactive theme access for components.
pub struct UseTheme {
    /// Current mode.
    pub mode: Signal<ThemeMode>,
    store: ThemeStore,
}

impl UseTheme {
    /// Whether dark mode is active.
    pub fn is_dark(&self) -> Signal<bool> {
        let mode = self.mode;
        Signal::derive(move || mode.get().is_dark())
    }

    /// Switches to `mode`.
    pub fn set_theme(&self, mode: ThemeMode) {
        self.store.set_theme(mode);
    }

    /// Flips between light and dark.
    pub fn toggle_theme(&self) {
        self.store.toggle_theme();
    }

    /// Applies the OS preference.
    pub fn set_system_theme(&self) {
        self.store.set_system_theme();
    }

    /// Underlying store.
    pub fn store(&self) -> &ThemeStore {
        &self.store
    }
}

/// Theme hook.
pub fn use_theme() -> UseTheme {
    let context = use_woobat();
    UseTheme {
        mode: context.mode.into(),
        store: context.theme,
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use woobat_host::{MemoryPresentationRoot, PresentationRoot};

    use super::*;

    #[test]
    fn invalid_prefix_falls_back_to_default() {
        let woobat = install_with_fallback(
            HostServices::headless(),
            PluginOptions {
                prefix: "Bad Prefix".to_string(),
                ..PluginOptions::default()
            },
        )
        .expect("fallback install");
        assert_eq!(woobat.registry.prefix(), DEFAULT_PREFIX);
        assert!(woobat.registry.lookup("wb-btn").is_some());
    }

    #[test]
    fn fallback_keeps_the_rest_of_the_options() {
        let root = MemoryPresentationRoot::default();
        let host = HostServices {
            root: Rc::new(root.clone()),
            ..HostServices::headless()
        };
        let woobat = install_with_fallback(
            host,
            PluginOptions {
                prefix: "-x".to_string(),
                theme: ThemeMode::Dark,
                ..PluginOptions::default()
            },
        )
        .expect("fallback install");
        assert_eq!(woobat.options.theme, ThemeMode::Dark);
        assert_eq!(root.attribute("data-wb-theme").as_deref(), Some("dark"));
    }

    #[test]
    fn malformed_json_uses_defaults() {
        assert_eq!(options_from_json("{ not json"), PluginOptions::default());
        assert_eq!(options_from_json(r#"{"prefix":"acme"}"#).prefix, "acme");
    }
}
