//! Design tokens: sizes, semantic colors, radii, elevation shadows and icon sizes.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
/// Shared component sizing tokens.
pub enum ComponentSize {
    /// Extra small.
    Xs,
    /// Small.
    Sm,
    /// Default.
    Md,
    /// Large.
    Lg,
    /// Extra large.
    Xl,
}

impl Default for ComponentSize {
    fn default() -> Self {
        Self::Md
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Box metrics for a [`ComponentSize`].
pub struct SizeConfig {
    /// CSS padding shorthand.
    pub padding: &'static str,
    /// CSS font size.
    pub font_size: &'static str,
    /// CSS height.
    pub height: &'static str,
}

impl ComponentSize {
    /// All sizes from smallest to largest.
    pub const ALL: [Self; 5] = [Self::Xs, Self::Sm, Self::Md, Self::Lg, Self::Xl];

    /// Stable token used in class names and `data-*` hooks.
    pub const fn token(self) -> &'static str {
        match self {
            Self::Xs => "xs",
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
            Self::Xl => "xl",
        }
    }

    /// Parses a size token.
    pub fn from_token(token: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|size| size.token() == token)
    }

    /// Padding, font size and height for generic controls.
    pub const fn config(self) -> SizeConfig {
        match self {
            Self::Xs => SizeConfig {
                padding: "0.25rem 0.5rem",
                font_size: "0.75rem",
                height: "1.75rem",
            },
            Self::Sm => SizeConfig {
                padding: "0.375rem 0.75rem",
                font_size: "0.875rem",
                height: "2rem",
            },
            Self::Md => SizeConfig {
                padding: "0.5rem 1rem",
                font_size: "0.875rem",
                height: "2.5rem",
            },
            Self::Lg => SizeConfig {
                padding: "0.625rem 1.25rem",
                font_size: "1rem",
                height: "3rem",
            },
            Self::Xl => SizeConfig {
                padding: "0.75rem 1.5rem",
                font_size: "1.125rem",
                height: "3.5rem",
            },
        }
    }

    /// Icon size token matching this component size.
    pub const fn icon_size(self) -> IconSize {
        match self {
            Self::Xs => IconSize::Xs,
            Self::Sm => IconSize::Sm,
            Self::Md => IconSize::Md,
            Self::Lg => IconSize::Lg,
            Self::Xl => IconSize::Xl,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
/// Semantic color variants.
pub enum ColorVariant {
    /// Brand color.
    Primary,
    /// Neutral color.
    Secondary,
    /// Positive outcome.
    Success,
    /// Needs attention.
    Warning,
    /// Failure.
    Error,
    /// Informational.
    Info,
}

impl Default for ColorVariant {
    fn default() -> Self {
        Self::Primary
    }
}

impl ColorVariant {
    /// Stable token used in class names and `data-*` hooks.
    pub const fn token(self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Secondary => "secondary",
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Error => "error",
            Self::Info => "info",
        }
    }

    /// Base hex color.
    pub const fn hex(self) -> &'static str {
        match self {
            Self::Primary | Self::Info => "#3b82f6",
            Self::Secondary => "#6b7280",
            Self::Success => "#10b981",
            Self::Warning => "#f59e0b",
            Self::Error => "#ef4444",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
/// Border radius tokens.
pub enum Rounded {
    /// Square corners.
    None,
    /// Small radius.
    Sm,
    /// Default radius.
    Md,
    /// Large radius.
    Lg,
    /// Extra large radius.
    Xl,
    /// Pill / circle.
    Full,
}

impl Default for Rounded {
    fn default() -> Self {
        Self::Md
    }
}

impl Rounded {
    /// Stable token used in class names.
    pub const fn token(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
            Self::Xl => "xl",
            Self::Full => "full",
        }
    }

    /// CSS border radius.
    pub const fn radius(self) -> &'static str {
        match self {
            Self::None => "0",
            Self::Sm => "0.25rem",
            Self::Md => "0.375rem",
            Self::Lg => "0.5rem",
            Self::Xl => "0.75rem",
            Self::Full => "9999px",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(from = "u8", into = "u8")]
/// Elevation level, clamped to `0..=5`.
pub struct Elevation(u8);

impl Elevation {
    /// Highest supported level.
    pub const MAX: u8 = 5;

    /// Creates an elevation, clamping out-of-range levels.
    pub const fn new(level: u8) -> Self {
        if level > Self::MAX {
            Self(Self::MAX)
        } else {
            Self(level)
        }
    }

    /// Numeric level.
    pub const fn level(self) -> u8 {
        self.0
    }

    /// CSS box shadow for this level.
    pub const fn shadow(self) -> &'static str {
        match self.0 {
            0 => "none",
            1 => "0 1px 2px 0 rgba(0, 0, 0, 0.05)",
            2 => "0 1px 3px 0 rgba(0, 0, 0, 0.1), 0 1px 2px -1px rgba(0, 0, 0, 0.1)",
            3 => "0 4px 6px -1px rgba(0, 0, 0, 0.1), 0 2px 4px -2px rgba(0, 0, 0, 0.1)",
            4 => "0 10px 15px -3px rgba(0, 0, 0, 0.1), 0 4px 6px -4px rgba(0, 0, 0, 0.1)",
            _ => "0 20px 25px -5px rgba(0, 0, 0, 0.1), 0 8px 10px -6px rgba(0, 0, 0, 0.1)",
        }
    }
}

impl From<u8> for Elevation {
    fn from(level: u8) -> Self {
        Self::new(level)
    }
}

impl From<Elevation> for u8 {
    fn from(elevation: Elevation) -> Self {
        elevation.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Icon sizing tokens.
pub enum IconSize {
    /// 12px.
    Xs,
    /// 14px.
    Sm,
    /// 16px.
    Md,
    /// 18px.
    Lg,
    /// 20px.
    Xl,
    /// 24px.
    Xxl,
}

impl Default for IconSize {
    fn default() -> Self {
        Self::Md
    }
}

impl IconSize {
    /// Pixel size used when a token is not recognized.
    pub const FALLBACK_PX: u32 = 16;

    /// Stable token.
    pub const fn token(self) -> &'static str {
        match self {
            Self::Xs => "xs",
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
            Self::Xl => "xl",
            Self::Xxl => "2xl",
        }
    }

    /// Rendered size in CSS pixels.
    pub const fn px(self) -> u32 {
        match self {
            Self::Xs => 12,
            Self::Sm => 14,
            Self::Md => 16,
            Self::Lg => 18,
            Self::Xl => 20,
            Self::Xxl => 24,
        }
    }

    /// Parses a size token (`xs`..`2xl`).
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "xs" => Some(Self::Xs),
            "sm" => Some(Self::Sm),
            "md" => Some(Self::Md),
            "lg" => Some(Self::Lg),
            "xl" => Some(Self::Xl),
            "2xl" => Some(Self::Xxl),
            _ => None,
        }
    }
}

/// Pixel size for an icon size token; unknown tokens get [`IconSize::FALLBACK_PX`].
pub fn icon_size_px(token: &str) -> u32 {
    IconSize::from_token(token).map_or(IconSize::FALLBACK_PX, IconSize::px)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn icon_size_table_and_fallback() {
        assert_eq!(icon_size_px("xs"), 12);
        assert_eq!(icon_size_px("sm"), 14);
        assert_eq!(icon_size_px("md"), 16);
        assert_eq!(icon_size_px("lg"), 18);
        assert_eq!(icon_size_px("xl"), 20);
        assert_eq!(icon_size_px("2xl"), 24);
        assert_eq!(icon_size_px("unknown-token"), 16);
        assert_eq!(icon_size_px("XL"), 16);
    }

    #[test]
    fn elevation_clamps_to_highest_level() {
        assert_eq!(Elevation::new(9).level(), 5);
        assert_eq!(Elevation::new(0).shadow(), "none");
        let parsed: Elevation = serde_json::from_str("12").expect("parse elevation");
        assert_eq!(parsed, Elevation::new(5));
    }

    #[test]
    fn size_tokens_parse_back() {
        for size in ComponentSize::ALL {
            assert_eq!(ComponentSize::from_token(size.token()), Some(size));
        }
        assert_eq!(ComponentSize::from_token("2xl"), None);
    }
}
