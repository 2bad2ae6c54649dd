//! Props-to-style derivations for the component set.
//!
//! Everything here is pure: components feed their props in and render the resulting
//! [`InlineStyle`] and class names.

use serde::{Deserialize, Serialize};

use crate::{
    color::{contrasting_text_color, with_opacity},
    tokens::{ColorVariant, ComponentSize, Elevation, Rounded},
};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// Ordered CSS declarations. Later writes to a property replace earlier ones in place.
pub struct InlineStyle {
    entries: Vec<(String, String)>,
}

impl InlineStyle {
    /// Sets `property` to `value`.
    pub fn set(&mut self, property: &str, value: impl Into<String>) -> &mut Self {
        let value = value.into();
        match self.entries.iter_mut().find(|(name, _)| name == property) {
            Some((_, existing)) => *existing = value,
            None => self.entries.push((property.to_string(), value)),
        }
        self
    }

    /// Value of `property`.
    pub fn get(&self, property: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(name, _)| name == property)
            .map(|(_, value)| value.as_str())
    }

    /// Merges `a: b; c: d` declarations over the current ones. Malformed rules are skipped.
    pub fn merge_css(&mut self, css: &str) -> &mut Self {
        for rule in css.split(';') {
            let Some((property, value)) = rule.split_once(':') else {
                continue;
            };
            let (property, value) = (property.trim(), value.trim());
            if !property.is_empty() && !value.is_empty() {
                self.set(property, value);
            }
        }
        self
    }

    /// Whether no declarations are set.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Serializes to a `style` attribute value.
    pub fn to_css(&self) -> String {
        self.entries
            .iter()
            .map(|(property, value)| format!("{property}: {value};"))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Normalizes a padding prop: `none` becomes `0`, bare numbers become pixels.
pub fn parse_padding(padding: &str) -> String {
    let padding = padding.trim();
    if padding == "none" {
        "0".to_string()
    } else if padding.parse::<f64>().is_ok() {
        format!("{padding}px")
    } else {
        padding.to_string()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
/// Button fill styles.
pub enum ButtonVariant {
    /// Solid background.
    Filled,
    /// Tinted translucent background.
    Tonal,
    /// Border only.
    Outlined,
    /// No background or border.
    Text,
    /// Solid background with a shadow.
    Elevated,
}

impl Default for ButtonVariant {
    fn default() -> Self {
        Self::Filled
    }
}

impl ButtonVariant {
    /// Stable token.
    pub const fn token(self) -> &'static str {
        match self {
            Self::Filled => "filled",
            Self::Tonal => "tonal",
            Self::Outlined => "outlined",
            Self::Text => "text",
            Self::Elevated => "elevated",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
/// Inputs to [`ButtonAppearance::style`].
pub struct ButtonAppearance {
    /// Fill style.
    pub variant: ButtonVariant,
    /// Size token.
    pub size: ComponentSize,
    /// Semantic color.
    pub color: ColorVariant,
    /// Color overriding `color`.
    pub custom_color: Option<String>,
    /// Text color override.
    pub text_color: Option<String>,
    /// Outline color override.
    pub border_color: Option<String>,
    /// Corner radius.
    pub rounded: Rounded,
    /// Shadow level.
    pub elevation: Elevation,
    /// Square icon-only button.
    pub icon_only: bool,
    /// Padding override (`none`, pixels or any CSS value).
    pub padding: Option<String>,
    /// Removes padding entirely.
    pub no_padding: bool,
}

impl ButtonAppearance {
    /// Background / accent color.
    pub fn base_color(&self) -> String {
        self.custom_color
            .clone()
            .unwrap_or_else(|| self.color.hex().to_string())
    }

    /// Foreground color. Solid variants use white on presets and a contrasting color on custom
    /// colors; the other variants draw text in the accent color.
    pub fn text_color(&self) -> String {
        if let Some(text_color) = &self.text_color {
            return text_color.clone();
        }
        match self.variant {
            ButtonVariant::Filled | ButtonVariant::Elevated => match &self.custom_color {
                Some(custom) => contrasting_text_color(custom).to_string(),
                None => "#ffffff".to_string(),
            },
            ButtonVariant::Tonal | ButtonVariant::Outlined | ButtonVariant::Text => {
                self.base_color()
            }
        }
    }

    fn padding_value(&self) -> String {
        match (&self.padding, self.no_padding, self.icon_only) {
            (_, true, _) => "0".to_string(),
            (Some(padding), _, _) => parse_padding(padding),
            (None, _, false) => self.size.config().padding.to_string(),
            (None, _, true) => "0".to_string(),
        }
    }

    /// Inline style for the button element.
    pub fn style(&self) -> InlineStyle {
        let base = self.base_color();
        let text = self.text_color();
        let metrics = self.size.config();
        let mut style = InlineStyle::default();
        style
            .set("border-radius", self.rounded.radius())
            .set("box-shadow", self.elevation.shadow())
            .set("padding", self.padding_value())
            .set("height", metrics.height);
        if self.icon_only {
            style.set("width", metrics.height);
        } else {
            style.set("font-size", metrics.font_size);
        }

        match self.variant {
            ButtonVariant::Filled => {
                style.set("background-color", base).set("color", text);
            }
            ButtonVariant::Elevated => {
                style
                    .set("background-color", base)
                    .set("color", text)
                    .set("box-shadow", Elevation::new(3).shadow());
            }
            ButtonVariant::Outlined => {
                let border = self.border_color.clone().unwrap_or_else(|| base.clone());
                style
                    .set("background-color", "transparent")
                    .set("color", text)
                    .set("border", format!("1px solid {border}"));
            }
            ButtonVariant::Text => {
                style.set("background-color", "transparent").set("color", text);
            }
            ButtonVariant::Tonal => {
                style
                    .set("background-color", with_opacity(&base, 0.12))
                    .set("color", base);
            }
        }
        style
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
/// Alert semantic kind.
pub enum AlertKind {
    /// Operation succeeded.
    Success,
    /// Operation failed.
    Error,
    /// Needs attention.
    Warning,
    /// Neutral information.
    Info,
    /// Caller-supplied color.
    Custom,
}

impl Default for AlertKind {
    fn default() -> Self {
        Self::Info
    }
}

impl AlertKind {
    /// Stable token.
    pub const fn token(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
            Self::Warning => "warning",
            Self::Info => "info",
            Self::Custom => "custom",
        }
    }

    /// Default color.
    pub const fn hex(self) -> &'static str {
        match self {
            Self::Success => "#10b981",
            Self::Error => "#ef4444",
            Self::Warning => "#f59e0b",
            Self::Info => "#3b82f6",
            Self::Custom => "#6b7280",
        }
    }

    /// Default title (`Success`, `Error`, ...).
    pub const fn title(self) -> &'static str {
        match self {
            Self::Success => "Success",
            Self::Error => "Error",
            Self::Warning => "Warning",
            Self::Info => "Info",
            Self::Custom => "Custom",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
/// Alert fill styles.
pub enum AlertVariant {
    /// Solid background.
    Color,
    /// Thin outline.
    Outlined,
    /// Thick accent border on one side over a tinted background.
    Border,
}

impl Default for AlertVariant {
    fn default() -> Self {
        Self::Color
    }
}

impl AlertVariant {
    /// Stable token for `data-ui-variant`.
    pub const fn token(self) -> &'static str {
        match self {
            Self::Color => "color",
            Self::Outlined => "outlined",
            Self::Border => "border",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
/// Side carrying the accent border of [`AlertVariant::Border`].
pub enum BorderSide {
    /// Top edge.
    Top,
    /// Right edge.
    Right,
    /// Bottom edge.
    Bottom,
    /// Left edge.
    #[default]
    Left,
}

impl BorderSide {
    /// Stable token.
    pub const fn token(self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::Right => "right",
            Self::Bottom => "bottom",
            Self::Left => "left",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
/// Inputs to alert styling.
pub struct AlertAppearance {
    /// Semantic kind.
    pub kind: AlertKind,
    /// Fill style.
    pub variant: AlertVariant,
    /// Accent border side.
    pub border: BorderSide,
    /// Color override.
    pub color: Option<String>,
    /// Text color override.
    pub color_text: Option<String>,
    /// Title override.
    pub title: Option<String>,
}

impl AlertAppearance {
    /// Accent color.
    pub fn color(&self) -> String {
        self.color
            .clone()
            .unwrap_or_else(|| self.kind.hex().to_string())
    }

    /// Text color: white on solid alerts, the accent color otherwise.
    pub fn text_color(&self) -> String {
        match (&self.color_text, self.variant) {
            (Some(color), _) => color.clone(),
            (None, AlertVariant::Color) => "#ffffff".to_string(),
            (None, _) => self.color(),
        }
    }

    /// Title text.
    pub fn title(&self) -> String {
        self.title
            .clone()
            .unwrap_or_else(|| self.kind.title().to_string())
    }

    /// Background color.
    pub fn background(&self) -> String {
        match self.variant {
            AlertVariant::Color => self.color(),
            AlertVariant::Outlined => "transparent".to_string(),
            AlertVariant::Border => with_opacity(&self.color(), 0.1),
        }
    }

    /// Border shorthand value.
    pub fn border_style(&self) -> String {
        match self.variant {
            AlertVariant::Outlined => format!("1px solid {}", self.color()),
            AlertVariant::Border => format!("3px solid {}", self.color()),
            AlertVariant::Color => "none".to_string(),
        }
    }

    /// CSS property the border applies to, `None` for solid alerts.
    pub fn border_property(&self) -> Option<String> {
        match self.variant {
            AlertVariant::Outlined => Some("border".to_string()),
            AlertVariant::Border => Some(format!("border-{}", self.border.token())),
            AlertVariant::Color => None,
        }
    }

    /// Inline style for the alert element.
    pub fn style(&self) -> InlineStyle {
        let mut style = InlineStyle::default();
        style
            .set("background-color", self.background())
            .set("color", self.text_color());
        if let Some(property) = self.border_property() {
            style.set(&property, self.border_style());
        }
        style
    }
}

/// Up to two uppercase initials: first letters of the first and last words.
pub fn initials(text: &str) -> String {
    let words: Vec<&str> = text.split_whitespace().collect();
    let first_letter = |word: &str| word.chars().next().into_iter().flat_map(char::to_uppercase);
    match words.as_slice() {
        [] => String::new(),
        [only] => first_letter(*only).collect(),
        [first, .., last] => first_letter(*first).chain(first_letter(*last)).collect(),
    }
}

#[derive(Debug, Clone, PartialEq)]
/// Avatar dimension.
pub enum AvatarSize {
    /// Size token.
    Preset(ComponentSize),
    /// Pixel size.
    Px(f64),
    /// Any CSS length.
    Css(String),
}

impl Default for AvatarSize {
    fn default() -> Self {
        Self::Preset(ComponentSize::Md)
    }
}

impl From<&str> for AvatarSize {
    fn from(raw: &str) -> Self {
        if let Some(size) = ComponentSize::from_token(raw) {
            return Self::Preset(size);
        }
        match raw.trim().parse::<f64>() {
            Ok(px) => Self::Px(px),
            Err(_) => Self::Css(raw.to_string()),
        }
    }
}

impl AvatarSize {
    /// CSS width/height.
    pub fn dimension(&self) -> String {
        match self {
            Self::Preset(size) => match size {
                ComponentSize::Xs => "1.5rem",
                ComponentSize::Sm => "2rem",
                ComponentSize::Md => "2.5rem",
                ComponentSize::Lg => "3.5rem",
                ComponentSize::Xl => "5rem",
            }
            .to_string(),
            Self::Px(px) => format!("{px}px"),
            Self::Css(css) => css.clone(),
        }
    }

    /// Initials font size: preset table, otherwise 40% of the numeric size.
    pub fn font_size(&self) -> String {
        let numeric = match self {
            Self::Preset(size) => {
                return match size {
                    ComponentSize::Xs => "0.625rem",
                    ComponentSize::Sm => "0.75rem",
                    ComponentSize::Md => "0.875rem",
                    ComponentSize::Lg => "1.25rem",
                    ComponentSize::Xl => "1.875rem",
                }
                .to_string();
            }
            Self::Px(px) => *px,
            Self::Css(css) => leading_number(css).unwrap_or(0.0),
        };
        format!("{}px", numeric * 0.4)
    }
}

fn leading_number(raw: &str) -> Option<f64> {
    let digits: String = raw
        .trim()
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect();
    digits.parse().ok()
}

/// Avatar corner radius; tiles are square and `full` is a circle.
pub fn avatar_radius(rounded: Rounded, tile: bool) -> &'static str {
    match (tile, rounded) {
        (true, _) => "0",
        (false, Rounded::Full) => "50%",
        (false, other) => other.radius(),
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
/// Inputs to avatar styling.
pub struct AvatarAppearance {
    /// Dimension.
    pub size: AvatarSize,
    /// Semantic background color.
    pub color: ColorVariant,
    /// Background override.
    pub custom_color: Option<String>,
    /// Initials color override.
    pub text_color: Option<String>,
    /// Corner radius.
    pub rounded: Rounded,
    /// Square corners regardless of `rounded`.
    pub tile: bool,
}

impl AvatarAppearance {
    /// Inline style for the avatar element.
    pub fn style(&self) -> InlineStyle {
        let dimension = self.size.dimension();
        let mut style = InlineStyle::default();
        style
            .set("width", dimension.clone())
            .set("height", dimension)
            .set("font-size", self.size.font_size())
            .set("border-radius", avatar_radius(self.rounded, self.tile))
            .set(
                "background-color",
                self.custom_color
                    .clone()
                    .unwrap_or_else(|| self.color.hex().to_string()),
            )
            .set(
                "color",
                self.text_color.clone().unwrap_or_else(|| "#ffffff".to_string()),
            );
        style
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Badge content.
pub enum BadgeContent {
    /// Count, capped by `max`.
    Count(i64),
    /// Free text.
    Text(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// What a badge renders.
pub enum BadgeDisplay {
    /// Nothing.
    Hidden,
    /// Small dot without text.
    Dot,
    /// Text label.
    Label(String),
}

/// Resolves what a badge shows. Counts above `max` render as `{max}+` and zero counts are
/// hidden unless `show_zero` is set.
pub fn badge_display(
    content: Option<&BadgeContent>,
    max: Option<i64>,
    show_zero: bool,
    dot: bool,
) -> BadgeDisplay {
    if dot {
        return BadgeDisplay::Dot;
    }
    match content {
        None => BadgeDisplay::Hidden,
        Some(BadgeContent::Count(0)) if !show_zero => BadgeDisplay::Hidden,
        Some(BadgeContent::Count(count)) => match max {
            Some(max) if *count > max => BadgeDisplay::Label(format!("{max}+")),
            _ => BadgeDisplay::Label(count.to_string()),
        },
        Some(BadgeContent::Text(text)) if text.is_empty() => BadgeDisplay::Hidden,
        Some(BadgeContent::Text(text)) => BadgeDisplay::Label(text.clone()),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
/// Chip fill styles.
pub enum ChipVariant {
    /// Solid background.
    Filled,
    /// Border only.
    Outlined,
    /// No background or border.
    Text,
    /// Tinted translucent background.
    Tonal,
}

impl Default for ChipVariant {
    fn default() -> Self {
        Self::Filled
    }
}

impl ChipVariant {
    /// Stable token for `data-ui-variant`.
    pub const fn token(self) -> &'static str {
        match self {
            Self::Filled => "filled",
            Self::Outlined => "outlined",
            Self::Text => "text",
            Self::Tonal => "tonal",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Chip box metrics.
pub struct ChipMetrics {
    /// CSS padding.
    pub padding: &'static str,
    /// CSS font size.
    pub font_size: &'static str,
    /// CSS height.
    pub height: &'static str,
    /// Gap between icon and label.
    pub gap: &'static str,
}

/// Default chip color.
pub const CHIP_DEFAULT_COLOR: &str = "#6b7280";

/// Chip metrics for a size token.
pub const fn chip_metrics(size: ComponentSize) -> ChipMetrics {
    match size {
        ComponentSize::Xs => ChipMetrics {
            padding: "0.125rem 0.375rem",
            font_size: "0.625rem",
            height: "1.25rem",
            gap: "0.25rem",
        },
        ComponentSize::Sm => ChipMetrics {
            padding: "0.25rem 0.5rem",
            font_size: "0.75rem",
            height: "1.5rem",
            gap: "0.25rem",
        },
        ComponentSize::Md => ChipMetrics {
            padding: "0.375rem 0.75rem",
            font_size: "0.875rem",
            height: "2rem",
            gap: "0.375rem",
        },
        ComponentSize::Lg => ChipMetrics {
            padding: "0.5rem 1rem",
            font_size: "1rem",
            height: "2.5rem",
            gap: "0.5rem",
        },
        ComponentSize::Xl => ChipMetrics {
            padding: "0.625rem 1.25rem",
            font_size: "1.125rem",
            height: "3rem",
            gap: "0.5rem",
        },
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
/// Inputs to chip styling.
pub struct ChipAppearance {
    /// Fill style.
    pub variant: ChipVariant,
    /// Size token.
    pub size: ComponentSize,
    /// Accent color, defaults to [`CHIP_DEFAULT_COLOR`].
    pub color: Option<String>,
    /// Text color override.
    pub text_color: Option<String>,
    /// Outline color override.
    pub border_color: Option<String>,
    /// Corner radius; `None` renders a pill.
    pub rounded: Option<Rounded>,
    /// Small square corners.
    pub square: bool,
}

impl ChipAppearance {
    /// Inline style for the chip element.
    pub fn style(&self) -> InlineStyle {
        let color = self
            .color
            .clone()
            .unwrap_or_else(|| CHIP_DEFAULT_COLOR.to_string());
        let metrics = chip_metrics(self.size);
        let radius = match (self.square, self.rounded) {
            (true, _) => Rounded::Sm.radius(),
            (false, Some(rounded)) => rounded.radius(),
            (false, None) => Rounded::Full.radius(),
        };
        let mut style = InlineStyle::default();
        style
            .set("padding", metrics.padding)
            .set("font-size", metrics.font_size)
            .set("height", metrics.height)
            .set("gap", metrics.gap)
            .set("border-radius", radius);

        let text = self.text_color.clone();
        match self.variant {
            ChipVariant::Filled => {
                let text = text.unwrap_or_else(|| contrasting_text_color(&color).to_string());
                style.set("background-color", color).set("color", text);
            }
            ChipVariant::Outlined => {
                let border = self.border_color.clone().unwrap_or_else(|| color.clone());
                style
                    .set("background-color", "transparent")
                    .set("border", format!("1px solid {border}"))
                    .set("color", text.unwrap_or(color));
            }
            ChipVariant::Text => {
                style
                    .set("background-color", "transparent")
                    .set("color", text.unwrap_or(color));
            }
            ChipVariant::Tonal => {
                style
                    .set("background-color", with_opacity(&color, 0.12))
                    .set("color", text.unwrap_or(color));
            }
        }
        style
    }
}

/// Checkbox accent color: error state wins, then the custom color, then the variant.
pub fn checkbox_color(color: ColorVariant, custom_color: Option<&str>, error: bool) -> String {
    if error {
        return ColorVariant::Error.hex().to_string();
    }
    custom_color.map_or_else(|| color.hex().to_string(), str::to_string)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn inline_style_replaces_in_place_and_merges_strings() {
        let mut style = InlineStyle::default();
        style.set("color", "red").set("padding", "0").set("color", "blue");
        style.merge_css("margin: 4px; broken; padding : 1px ;");
        assert_eq!(style.to_css(), "color: blue; padding: 1px; margin: 4px;");
        assert_eq!(style.get("margin"), Some("4px"));
    }

    #[test]
    fn padding_props_normalize() {
        assert_eq!(parse_padding("none"), "0");
        assert_eq!(parse_padding("12"), "12px");
        assert_eq!(parse_padding("1rem 2rem"), "1rem 2rem");
    }

    #[test]
    fn filled_button_uses_variant_color_and_white_text() {
        let style = ButtonAppearance::default().style();
        assert_eq!(style.get("background-color"), Some("#3b82f6"));
        assert_eq!(style.get("color"), Some("#ffffff"));
        assert_eq!(style.get("padding"), Some("0.5rem 1rem"));
        assert_eq!(style.get("height"), Some("2.5rem"));
        assert_eq!(style.get("font-size"), Some("0.875rem"));
    }

    #[test]
    fn custom_light_color_gets_dark_text() {
        let appearance = ButtonAppearance {
            custom_color: Some("#fde047".to_string()),
            ..ButtonAppearance::default()
        };
        assert_eq!(appearance.text_color(), "#000000");
    }

    #[test]
    fn variant_styles() {
        let tonal = ButtonAppearance {
            variant: ButtonVariant::Tonal,
            color: ColorVariant::Success,
            ..ButtonAppearance::default()
        }
        .style();
        assert_eq!(tonal.get("background-color"), Some("rgba(16, 185, 129, 0.12)"));
        assert_eq!(tonal.get("color"), Some("#10b981"));

        let outlined = ButtonAppearance {
            variant: ButtonVariant::Outlined,
            border_color: Some("#000".to_string()),
            ..ButtonAppearance::default()
        }
        .style();
        assert_eq!(outlined.get("border"), Some("1px solid #000"));
        assert_eq!(outlined.get("color"), Some("#3b82f6"));

        let elevated = ButtonAppearance {
            variant: ButtonVariant::Elevated,
            ..ButtonAppearance::default()
        }
        .style();
        assert_eq!(elevated.get("box-shadow"), Some(Elevation::new(3).shadow()));
    }

    #[test]
    fn icon_only_buttons_are_square_without_padding() {
        let style = ButtonAppearance {
            icon_only: true,
            size: ComponentSize::Lg,
            ..ButtonAppearance::default()
        }
        .style();
        assert_eq!(style.get("width"), Some("3rem"));
        assert_eq!(style.get("padding"), Some("0"));
        assert_eq!(style.get("font-size"), None);
    }

    #[test]
    fn alert_derivations() {
        let solid = AlertAppearance {
            kind: AlertKind::Warning,
            ..AlertAppearance::default()
        };
        assert_eq!(solid.title(), "Warning");
        assert_eq!(solid.background(), "#f59e0b");
        assert_eq!(solid.text_color(), "#ffffff");
        assert_eq!(solid.border_property(), None);

        let bordered = AlertAppearance {
            kind: AlertKind::Error,
            variant: AlertVariant::Border,
            border: BorderSide::Top,
            title: Some("Heads up".to_string()),
            ..AlertAppearance::default()
        };
        assert_eq!(bordered.title(), "Heads up");
        assert_eq!(bordered.background(), "rgba(239, 68, 68, 0.1)");
        assert_eq!(bordered.style().get("border-top"), Some("3px solid #ef4444"));
        assert_eq!(bordered.text_color(), "#ef4444");
    }

    #[test]
    fn initials_use_first_and_last_words() {
        assert_eq!(initials("ada"), "A");
        assert_eq!(initials("  grace brewster  hopper "), "GH");
        assert_eq!(initials(""), "");
        assert_eq!(initials("émile zola"), "ÉZ");
    }

    #[test]
    fn avatar_sizes_and_radius() {
        assert_eq!(AvatarSize::from("lg").dimension(), "3.5rem");
        assert_eq!(AvatarSize::from("50").dimension(), "50px");
        assert_eq!(AvatarSize::from("50").font_size(), "20px");
        assert_eq!(AvatarSize::from("3em").dimension(), "3em");
        assert_eq!(avatar_radius(Rounded::Full, false), "50%");
        assert_eq!(avatar_radius(Rounded::Full, true), "0");
        assert_eq!(avatar_radius(Rounded::Lg, false), "0.5rem");
    }

    #[test]
    fn badge_labels_cap_and_hide() {
        let many = BadgeContent::Count(120);
        assert_eq!(
            badge_display(Some(&many), Some(99), false, false),
            BadgeDisplay::Label("99+".to_string())
        );
        assert_eq!(
            badge_display(Some(&BadgeContent::Count(0)), None, false, false),
            BadgeDisplay::Hidden
        );
        assert_eq!(
            badge_display(Some(&BadgeContent::Count(0)), None, true, false),
            BadgeDisplay::Label("0".to_string())
        );
        assert_eq!(badge_display(None, None, false, true), BadgeDisplay::Dot);
        assert_eq!(
            badge_display(Some(&BadgeContent::Text("new".to_string())), Some(1), false, false),
            BadgeDisplay::Label("new".to_string())
        );
    }

    #[test]
    fn chip_defaults_to_a_neutral_pill() {
        let style = ChipAppearance::default().style();
        assert_eq!(style.get("background-color"), Some(CHIP_DEFAULT_COLOR));
        assert_eq!(style.get("border-radius"), Some("9999px"));
        assert_eq!(style.get("height"), Some("2rem"));
        assert_eq!(style.get("color"), Some("#ffffff"));
    }

    #[test]
    fn checkbox_error_color_wins() {
        assert_eq!(checkbox_color(ColorVariant::Primary, Some("#123456"), true), "#ef4444");
        assert_eq!(checkbox_color(ColorVariant::Primary, Some("#123456"), false), "#123456");
        assert_eq!(checkbox_color(ColorVariant::Success, None, false), "#10b981");
    }
}
