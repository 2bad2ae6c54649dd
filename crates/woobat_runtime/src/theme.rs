//! Global light/dark theme state.
//!
//! One [`ThemeStore`] exists per application. `set_theme` is the only write path: it applies the
//! mode to the presentation root, persists it, dispatches [`THEME_CHANGE_EVENT`] and notifies
//! subscribers, in that order.

use std::{
    cell::{Cell, RefCell},
    fmt,
    rc::{Rc, Weak},
    str::FromStr,
};

use leptos::logging;
use serde::{Deserialize, Serialize};
use serde_json::json;
use thiserror::Error;
use woobat_host::{save_pref_with, ColorSchemeWatch, HostServices};

/// Root attribute carrying the active mode.
pub const THEME_ATTRIBUTE: &str = "data-wb-theme";
/// Custom event dispatched on every theme write.
pub const THEME_CHANGE_EVENT: &str = "woobat-theme-change";
/// Default preference key.
pub const DEFAULT_STORAGE_KEY: &str = "woobat-theme";

const THEME_CLASSES: [&str; 2] = ["wb-light", "wb-dark"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
/// Color mode.
pub enum ThemeMode {
    /// Light surfaces, dark text.
    Light,
    /// Dark surfaces, light text.
    Dark,
}

impl Default for ThemeMode {
    fn default() -> Self {
        Self::Light
    }
}

impl ThemeMode {
    /// Stable token (`light` / `dark`).
    pub const fn token(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Root class for this mode.
    pub const fn class_name(self) -> &'static str {
        match self {
            Self::Light => "wb-light",
            Self::Dark => "wb-dark",
        }
    }

    /// The other mode.
    pub const fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Whether this is [`ThemeMode::Dark`].
    pub const fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }

    /// Mode matching an OS dark-mode flag.
    pub const fn from_prefers_dark(prefers_dark: bool) -> Self {
        if prefers_dark {
            Self::Dark
        } else {
            Self::Light
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
/// Theme parsing failures.
pub enum ThemeError {
    /// Neither `light` nor `dark`.
    #[error("unknown theme mode `{0}`")]
    UnknownMode(String),
}

impl FromStr for ThemeMode {
    type Err = ThemeError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim() {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(ThemeError::UnknownMode(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
/// Theme store configuration.
pub struct ThemeOptions {
    /// Persist every write to `storage_key`.
    pub persist: bool,
    /// Preference key.
    pub storage_key: String,
    /// Track the OS color-scheme preference.
    pub follow_system: bool,
}

impl Default for ThemeOptions {
    fn default() -> Self {
        Self {
            persist: true,
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            follow_system: false,
        }
    }
}

/// Parses a stored preference: JSON (`"dark"`) or a bare token (`dark`).
pub fn parse_stored_mode(raw: &str) -> Result<ThemeMode, ThemeError> {
    serde_json::from_str::<ThemeMode>(raw).or_else(|_| raw.parse())
}

type ThemeListener = Rc<dyn Fn(ThemeMode)>;

struct ThemeInner {
    mode: Cell<ThemeMode>,
    host: RefCell<HostServices>,
    options: RefCell<ThemeOptions>,
    listeners: RefCell<Vec<(u64, ThemeListener)>>,
    next_listener_id: Cell<u64>,
    system_watch: RefCell<Option<ColorSchemeWatch>>,
}

/// Shared theme cell. Clones observe and mutate the same state.
#[derive(Clone)]
pub struct ThemeStore {
    inner: Rc<ThemeInner>,
}

impl Default for ThemeStore {
    fn default() -> Self {
        Self::new(HostServices::headless(), ThemeOptions::default())
    }
}

impl fmt::Debug for ThemeStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ThemeStore")
            .field("mode", &self.mode())
            .field("options", &*self.inner.options.borrow())
            .field("subscribers", &self.inner.listeners.borrow().len())
            .finish()
    }
}

impl ThemeStore {
    /// Creates a light-mode store without touching the host.
    pub fn new(host: HostServices, options: ThemeOptions) -> Self {
        Self {
            inner: Rc::new(ThemeInner {
                mode: Cell::new(ThemeMode::Light),
                host: RefCell::new(host),
                options: RefCell::new(options),
                listeners: RefCell::new(Vec::new()),
                next_listener_id: Cell::new(0),
                system_watch: RefCell::new(None),
            }),
        }
    }

    /// Resolves the initial mode and applies it.
    ///
    /// Precedence, lowest first: `default_mode`, the persisted preference (when `persist`), the
    /// OS preference (when `follow_system`). Initialization applies the mode to the root but
    /// neither persists nor dispatches nor notifies. When following the system a watcher is
    /// installed that routes OS changes through [`Self::set_theme`].
    pub fn init(&self, host: HostServices, options: ThemeOptions, default_mode: ThemeMode) {
        self.inner.system_watch.borrow_mut().take();
        *self.inner.host.borrow_mut() = host.clone();
        *self.inner.options.borrow_mut() = options.clone();

        let mut mode = default_mode;
        if options.persist {
            match host.prefs.load_pref(&options.storage_key) {
                Ok(Some(raw)) => match parse_stored_mode(&raw) {
                    Ok(stored) => mode = stored,
                    Err(err) => logging::warn!("ignoring stored theme preference: {err}"),
                },
                Ok(None) => {}
                Err(err) => logging::warn!("theme preference load failed: {err}"),
            }
        }
        if options.follow_system {
            if let Some(prefers_dark) = host.color_scheme.prefers_dark() {
                mode = ThemeMode::from_prefers_dark(prefers_dark);
            }
        }

        self.inner.mode.set(mode);
        self.apply_to_root(mode);

        if options.follow_system {
            let watch = self.watch_system(|_| {});
            *self.inner.system_watch.borrow_mut() = Some(watch);
        }
    }

    /// Current mode.
    pub fn mode(&self) -> ThemeMode {
        self.inner.mode.get()
    }

    /// Whether the current mode is dark.
    pub fn is_dark(&self) -> bool {
        self.mode().is_dark()
    }

    /// Whether the current mode is light.
    pub fn is_light(&self) -> bool {
        !self.is_dark()
    }

    /// Options in effect.
    pub fn options(&self) -> ThemeOptions {
        self.inner.options.borrow().clone()
    }

    /// Writes the mode: applies it, persists it, dispatches the change event and notifies
    /// subscribers. Persistence failures are logged, never returned.
    pub fn set_theme(&self, mode: ThemeMode) {
        self.inner.mode.set(mode);
        self.apply_to_root(mode);

        let host = self.host();
        let options = self.options();
        if options.persist {
            if let Err(err) = save_pref_with(host.prefs.as_ref(), &options.storage_key, &mode) {
                logging::warn!("theme preference save failed: {err}");
            }
        }
        host.events.dispatch(
            THEME_CHANGE_EVENT,
            &json!({ "theme": mode.token(), "isDark": mode.is_dark() }),
        );

        let listeners: Vec<ThemeListener> = self
            .inner
            .listeners
            .borrow()
            .iter()
            .map(|(_, listener)| Rc::clone(listener))
            .collect();
        for listener in listeners {
            listener(mode);
        }
    }

    /// Flips between light and dark.
    pub fn toggle_theme(&self) {
        self.set_theme(self.mode().toggled());
    }

    /// Applies the OS preference, defaulting to light when the host has no opinion.
    pub fn set_system_theme(&self) {
        let prefers_dark = self.host().color_scheme.prefers_dark().unwrap_or(false);
        self.set_theme(ThemeMode::from_prefers_dark(prefers_dark));
    }

    /// Watches OS color-scheme changes. `callback` always runs; the mode is only written when
    /// the store follows the system. Dropping the returned guard stops watching.
    pub fn watch_system(&self, callback: impl Fn(bool) + 'static) -> ColorSchemeWatch {
        let weak: Weak<ThemeInner> = Rc::downgrade(&self.inner);
        let host = self.host();
        host.color_scheme.watch(Rc::new(move |prefers_dark| {
            if let Some(inner) = weak.upgrade() {
                let store = ThemeStore { inner };
                if store.inner.options.borrow().follow_system {
                    store.set_theme(ThemeMode::from_prefers_dark(prefers_dark));
                }
            }
            callback(prefers_dark);
        }))
    }

    /// Registers `listener` for every subsequent write. Dropping the guard unsubscribes.
    pub fn subscribe(&self, listener: impl Fn(ThemeMode) + 'static) -> ThemeSubscription {
        let id = self.inner.next_listener_id.get();
        self.inner.next_listener_id.set(id + 1);
        self.inner
            .listeners
            .borrow_mut()
            .push((id, Rc::new(listener)));
        ThemeSubscription {
            store: Rc::downgrade(&self.inner),
            id,
        }
    }

    /// Number of live subscriptions.
    pub fn subscriber_count(&self) -> usize {
        self.inner.listeners.borrow().len()
    }

    /// Reads a theme custom property. Names without a leading `--` get the `--wb-` prefix.
    pub fn css_var(&self, name: &str) -> Option<String> {
        let full_name = if name.starts_with("--") {
            name.to_string()
        } else {
            format!("--wb-{name}")
        };
        self.host().root.css_variable(&full_name)
    }

    /// Whether an OS watcher is installed.
    pub fn is_following_system(&self) -> bool {
        self.inner.system_watch.borrow().is_some()
    }

    /// Drops every subscriber and the OS watcher.
    pub fn dispose(&self) {
        self.inner.listeners.borrow_mut().clear();
        self.inner.system_watch.borrow_mut().take();
    }

    fn host(&self) -> HostServices {
        self.inner.host.borrow().clone()
    }

    fn apply_to_root(&self, mode: ThemeMode) {
        let root = Rc::clone(&self.inner.host.borrow().root);
        root.set_attribute(THEME_ATTRIBUTE, mode.token());
        root.swap_classes(&THEME_CLASSES, mode.class_name());
    }
}

#[must_use = "dropping the subscription unsubscribes immediately"]
/// Subscription guard returned by [`ThemeStore::subscribe`].
pub struct ThemeSubscription {
    store: Weak<ThemeInner>,
    id: u64,
}

impl ThemeSubscription {
    /// Unsubscribes now.
    pub fn cancel(self) {}
}

impl Drop for ThemeSubscription {
    fn drop(&mut self) {
        if let Some(inner) = self.store.upgrade() {
            inner
                .listeners
                .borrow_mut()
                .retain(|(listener_id, _)| *listener_id != self.id);
        }
    }
}

impl fmt::Debug for ThemeSubscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ThemeSubscription")
            .field("id", &self.id)
            .finish()
    }
}
