/// Substrings that mark a name as a CSS-class icon (Font Awesome, Material, Bootstrap, ...).
pub const DEFAULT_CSS_MARKERS: &[&str] = &[
    "fa-", "fas-", "far-", "fab-", "fal-", "icon-", "material-", "mdi-", "bi-", "bootstrap-",
    "feather-", " ", ".", "#",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// How an icon name is rendered.
pub enum IconClass {
    /// Glyph from the external icon set.
    External,
    /// Class list for an icon font.
    CssClass,
    /// Not a known glyph (yet) and not a CSS class.
    Unknown,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Recognizes CSS-class icon names by marker substring.
pub struct IconClassifier {
    markers: Vec<String>,
}

impl Default for IconClassifier {
    fn default() -> Self {
        Self::new(DEFAULT_CSS_MARKERS.iter().copied())
    }
}

impl IconClassifier {
    /// Classifier with a custom marker list. Empty markers are ignored.
    pub fn new<I, M>(markers: I) -> Self
    where
        I: IntoIterator<Item = M>,
        M: Into<String>,
    {
        Self {
            markers: markers
                .into_iter()
                .map(Into::into)
                .filter(|marker: &String| !marker.is_empty())
                .collect(),
        }
    }

    /// Configured markers.
    pub fn markers(&self) -> &[String] {
        &self.markers
    }

    /// Whether `name` contains any CSS marker.
    pub fn is_css_class(&self, name: &str) -> bool {
        self.markers.iter().any(|marker| name.contains(marker.as_str()))
    }
}

/// Converts a kebab-case icon name to the PascalCase key used by icon sets.
pub fn to_pascal_case(name: &str) -> String {
    name.split('-')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pascal_case_conversion() {
        assert_eq!(to_pascal_case("arrow-left"), "ArrowLeft");
        assert_eq!(to_pascal_case("ArrowLeft"), "ArrowLeft");
        assert_eq!(to_pascal_case("alert-circle"), "AlertCircle");
        assert_eq!(to_pascal_case("x"), "X");
        assert_eq!(to_pascal_case("a--b"), "AB");
        assert_eq!(to_pascal_case(""), "");
    }

    #[test]
    fn default_markers_catch_icon_fonts() {
        let classifier = IconClassifier::default();
        for name in ["fa-star", "fas fa-home", "mdi-account", "bi-alarm", "icon.home", "#sprite"] {
            assert!(classifier.is_css_class(name), "{name}");
        }
        assert!(!classifier.is_css_class("arrow-left"));
    }

    #[test]
    fn custom_markers_replace_the_defaults() {
        let classifier = IconClassifier::new(["ph-", ""]);
        assert_eq!(classifier.markers(), ["ph-".to_string()]);
        assert!(classifier.is_css_class("ph-house"));
        assert!(!classifier.is_css_class("fa-star"));
    }
}
