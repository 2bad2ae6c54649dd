//! Library installation: options, prefixed component tags and the installed bundle.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use woobat_host::HostServices;

use crate::{
    appearance::ButtonVariant,
    theme::{ThemeMode, ThemeOptions, ThemeStore},
    tokens::{ColorVariant, ComponentSize, Elevation, Rounded},
};

/// Tag prefix used when none is configured.
pub const DEFAULT_PREFIX: &str = "wb";

#[derive(Debug, Error)]
/// Installation failures.
pub enum PluginError {
    /// Prefix is empty or not a valid custom-element name segment.
    #[error("invalid component prefix `{0}`: use lowercase ASCII letters, digits and inner hyphens")]
    InvalidPrefix(String),
    /// Component name not in the library.
    #[error("unknown component `{0}`")]
    UnknownComponent(String),
    /// Options JSON could not be parsed.
    #[error("invalid plugin options: {0}")]
    InvalidOptions(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
/// Library-wide button defaults.
pub struct ButtonDefaults {
    /// Fill style.
    pub variant: ButtonVariant,
    /// Size token.
    pub size: ComponentSize,
    /// Semantic color.
    pub color: ColorVariant,
    /// Full-width buttons.
    pub block: bool,
    /// Corner radius.
    pub rounded: Rounded,
    /// Shadow level.
    pub elevation: Elevation,
    /// Ripple feedback on click.
    pub ripple: bool,
    /// Start in the loading state.
    pub loading: bool,
    /// Start disabled.
    pub disabled: bool,
}

impl Default for ButtonDefaults {
    fn default() -> Self {
        Self {
            variant: ButtonVariant::default(),
            size: ComponentSize::default(),
            color: ColorVariant::default(),
            block: false,
            rounded: Rounded::default(),
            elevation: Elevation::default(),
            ripple: true,
            loading: false,
            disabled: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
/// Per-component defaults.
pub struct ComponentOptions {
    /// Button defaults.
    pub button: ButtonDefaults,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
/// Installation options.
pub struct PluginOptions {
    /// Component tag prefix.
    pub prefix: String,
    /// Initial theme when nothing is persisted.
    pub theme: ThemeMode,
    /// Theme persistence and system-following behavior.
    pub theme_options: ThemeOptions,
    /// Register every component at install time.
    pub register_all_components: bool,
    /// Global ripple switch.
    pub ripple: bool,
    /// Per-component defaults.
    pub component_options: ComponentOptions,
}

impl Default for PluginOptions {
    fn default() -> Self {
        Self {
            prefix: DEFAULT_PREFIX.to_string(),
            theme: ThemeMode::Light,
            theme_options: ThemeOptions::default(),
            register_all_components: true,
            ripple: true,
            component_options: ComponentOptions::default(),
        }
    }
}

impl PluginOptions {
    /// Parses options from JSON; missing fields take their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`PluginError::InvalidOptions`] for malformed JSON.
    pub fn from_json(raw: &str) -> Result<Self, PluginError> {
        Ok(serde_json::from_str(raw)?)
    }
}

/// Checks that `prefix` can lead a custom-element style tag.
///
/// # Errors
///
/// Returns [`PluginError::InvalidPrefix`] unless the prefix starts with a lowercase letter and
/// contains only lowercase letters, digits and hyphens, without a trailing hyphen.
pub fn validate_prefix(prefix: &str) -> Result<(), PluginError> {
    let valid = prefix.starts_with(|c: char| c.is_ascii_lowercase())
        && !prefix.ends_with('-')
        && prefix
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-');
    if valid {
        Ok(())
    } else {
        Err(PluginError::InvalidPrefix(prefix.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
/// Components shipped by the library.
pub enum ComponentKind {
    /// `btn`.
    Button,
    /// `alert`.
    Alert,
    /// `avatar`.
    Avatar,
    /// `badge`.
    Badge,
    /// `chip`.
    Chip,
    /// `checkbox`.
    Checkbox,
    /// `icon`.
    Icon,
}

impl ComponentKind {
    /// Every component, in registration order.
    pub const ALL: [Self; 7] = [
        Self::Button,
        Self::Alert,
        Self::Avatar,
        Self::Badge,
        Self::Chip,
        Self::Checkbox,
        Self::Icon,
    ];

    /// Unprefixed component name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Button => "btn",
            Self::Alert => "alert",
            Self::Avatar => "avatar",
            Self::Badge => "badge",
            Self::Chip => "chip",
            Self::Checkbox => "checkbox",
            Self::Icon => "icon",
        }
    }

    /// Parses an unprefixed component name.
    ///
    /// # Errors
    ///
    /// Returns [`PluginError::UnknownComponent`] for names outside the library.
    pub fn from_name(name: &str) -> Result<Self, PluginError> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.name() == name)
            .ok_or_else(|| PluginError::UnknownComponent(name.to_string()))
    }

    /// Tag under `prefix` (`{prefix}-{name}`).
    pub fn tag(self, prefix: &str) -> String {
        format!("{prefix}-{}", self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Components registered under a prefix, keyed by tag.
pub struct ComponentRegistry {
    prefix: String,
    tags: BTreeMap<String, ComponentKind>,
}

impl Default for ComponentRegistry {
    /// Every component under [`DEFAULT_PREFIX`].
    fn default() -> Self {
        let mut registry = Self {
            prefix: DEFAULT_PREFIX.to_string(),
            tags: BTreeMap::new(),
        };
        registry.register(&ComponentKind::ALL);
        registry
    }
}

impl ComponentRegistry {
    /// Empty registry.
    ///
    /// # Errors
    ///
    /// Returns [`PluginError::InvalidPrefix`] when `prefix` fails [`validate_prefix`].
    pub fn new(prefix: &str) -> Result<Self, PluginError> {
        validate_prefix(prefix)?;
        Ok(Self {
            prefix: prefix.to_string(),
            tags: BTreeMap::new(),
        })
    }

    /// Registry for `options`, pre-filled when `register_all_components` is set.
    ///
    /// # Errors
    ///
    /// Returns [`PluginError::InvalidPrefix`] for an invalid configured prefix.
    pub fn install(options: &PluginOptions) -> Result<Self, PluginError> {
        let mut registry = Self::new(&options.prefix)?;
        if options.register_all_components {
            registry.register(&ComponentKind::ALL);
        }
        Ok(registry)
    }

    /// Registers `kinds`. Returns the newly added tags.
    pub fn register(&mut self, kinds: &[ComponentKind]) -> Vec<String> {
        let mut added = Vec::new();
        for kind in kinds {
            let tag = kind.tag(&self.prefix);
            if self.tags.insert(tag.clone(), *kind).is_none() {
                added.push(tag);
            }
        }
        added
    }

    /// Registers components by unprefixed name.
    ///
    /// # Errors
    ///
    /// Returns [`PluginError::UnknownComponent`] for the first unknown name; nothing is
    /// registered in that case.
    pub fn register_names(&mut self, names: &[&str]) -> Result<Vec<String>, PluginError> {
        let kinds = names
            .iter()
            .map(|name| ComponentKind::from_name(name))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(self.register(&kinds))
    }

    /// Prefix in use.
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Component registered under `tag`.
    pub fn lookup(&self, tag: &str) -> Option<ComponentKind> {
        self.tags.get(tag).copied()
    }

    /// Whether `kind` is registered.
    pub fn is_registered(&self, kind: ComponentKind) -> bool {
        self.tags.values().any(|registered| *registered == kind)
    }

    /// Registered tags in sorted order.
    pub fn tags(&self) -> Vec<&str> {
        self.tags.keys().map(String::as_str).collect()
    }
}

#[derive(Debug, Clone)]
/// Result of installing the library into an application.
pub struct Woobat {
    /// Options in effect.
    pub options: PluginOptions,
    /// Registered components.
    pub registry: ComponentRegistry,
    /// Application theme.
    pub theme: ThemeStore,
}

impl Woobat {
    /// Installs the library: validates options, registers components and initializes the theme.
    ///
    /// # Errors
    ///
    /// Returns [`PluginError::InvalidPrefix`] for an invalid configured prefix. The theme is not
    /// touched in that case.
    pub fn install(host: HostServices, options: PluginOptions) -> Result<Self, PluginError> {
        let registry = ComponentRegistry::install(&options)?;
        let theme = ThemeStore::new(host.clone(), options.theme_options.clone());
        theme.init(host, options.theme_options.clone(), options.theme);
        Ok(Self {
            options,
            registry,
            theme,
        })
    }

    /// Whether buttons ripple by default.
    pub fn ripple_enabled(&self) -> bool {
        self.options.ripple && self.options.component_options.button.ripple
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use pretty_assertions::assert_eq;
    use woobat_host::{MemoryPresentationRoot, PresentationRoot};

    use super::*;

    #[test]
    fn default_install_registers_every_prefixed_tag() {
        let registry = ComponentRegistry::install(&PluginOptions::default()).expect("install");
        assert_eq!(
            registry.tags(),
            vec!["wb-alert", "wb-avatar", "wb-badge", "wb-btn", "wb-checkbox", "wb-chip", "wb-icon"]
        );
        assert_eq!(registry.lookup("wb-btn"), Some(ComponentKind::Button));
    }

    #[test]
    fn default_registry_matches_the_default_install() {
        let installed = ComponentRegistry::install(&PluginOptions::default()).expect("install");
        let fallback = ComponentRegistry::default();
        assert_eq!(fallback.prefix(), DEFAULT_PREFIX);
        assert_eq!(fallback.tags(), installed.tags());
    }

    #[test]
    fn custom_prefix_renames_tags() {
        let options = PluginOptions {
            prefix: "acme".to_string(),
            ..PluginOptions::default()
        };
        let registry = ComponentRegistry::install(&options).expect("install");
        assert_eq!(registry.lookup("acme-chip"), Some(ComponentKind::Chip));
        assert_eq!(registry.lookup("wb-chip"), None);
    }

    #[test]
    fn selective_registration() {
        let options = PluginOptions {
            register_all_components: false,
            ..PluginOptions::default()
        };
        let mut registry = ComponentRegistry::install(&options).expect("install");
        assert!(registry.tags().is_empty());
        assert_eq!(registry.register(&[ComponentKind::Button]), vec!["wb-btn".to_string()]);
        assert_eq!(registry.register(&[ComponentKind::Button]), Vec::<String>::new());
        assert!(registry.is_registered(ComponentKind::Button));
        assert!(!registry.is_registered(ComponentKind::Alert));

        assert!(matches!(
            registry.register_names(&["icon", "carousel"]),
            Err(PluginError::UnknownComponent(name)) if name == "carousel"
        ));
        assert!(!registry.is_registered(ComponentKind::Icon));
        assert_eq!(registry.register_names(&["icon"]).expect("known"), vec!["wb-icon"]);
    }

    #[test]
    fn invalid_prefixes_are_rejected() {
        for prefix in ["", "WB", "9x", "wb-", "w b", "wb_ui"] {
            assert!(
                matches!(validate_prefix(prefix), Err(PluginError::InvalidPrefix(_))),
                "{prefix:?}"
            );
        }
        assert!(validate_prefix("my-ui2").is_ok());
    }

    #[test]
    fn options_parse_from_camel_case_json() {
        let options = PluginOptions::from_json(
            r#"{
                "prefix": "ui",
                "theme": "dark",
                "registerAllComponents": false,
                "componentOptions": { "button": { "variant": "tonal", "elevation": 9 } }
            }"#,
        )
        .expect("options");
        assert_eq!(options.prefix, "ui");
        assert_eq!(options.theme, ThemeMode::Dark);
        assert!(!options.register_all_components);
        assert!(options.ripple);
        assert_eq!(options.component_options.button.variant, ButtonVariant::Tonal);
        assert_eq!(options.component_options.button.elevation, Elevation::new(5));
        assert!(options.component_options.button.ripple);

        assert!(matches!(
            PluginOptions::from_json("{ nope"),
            Err(PluginError::InvalidOptions(_))
        ));
    }

    #[test]
    fn install_applies_the_configured_theme() {
        let root = MemoryPresentationRoot::default();
        let host = HostServices {
            root: Rc::new(root.clone()),
            ..HostServices::headless()
        };
        let woobat = Woobat::install(
            host,
            PluginOptions {
                theme: ThemeMode::Dark,
                ..PluginOptions::default()
            },
        )
        .expect("install");
        assert!(woobat.theme.is_dark());
        assert_eq!(root.attribute("data-wb-theme").as_deref(), Some("dark"));
        assert!(woobat.ripple_enabled());
    }

    #[test]
    fn invalid_install_leaves_the_root_untouched() {
        let root = MemoryPresentationRoot::default();
        let host = HostServices {
            root: Rc::new(root.clone()),
            ..HostServices::headless()
        };
        let result = Woobat::install(
            host,
            PluginOptions {
                prefix: "Bad Prefix".to_string(),
                ..PluginOptions::default()
            },
        );
        assert!(matches!(result, Err(PluginError::InvalidPrefix(_))));
        assert_eq!(root.attribute("data-wb-theme"), None);
    }
}
