//! Color parsing and derivation helpers used by component appearance rules.

use thiserror::Error;

/// CSS named colors and global keywords accepted by [`is_valid_color`].
const CSS_NAMED_COLORS: &[&str] = &[
    "transparent", "currentcolor", "inherit", "initial", "unset", "black", "silver", "gray",
    "white", "maroon", "red", "purple", "fuchsia", "green", "lime", "olive", "yellow", "navy",
    "blue", "teal", "aqua", "orange", "aliceblue", "antiquewhite", "aquamarine", "azure",
    "beige", "bisque", "blanchedalmond", "blueviolet", "brown", "burlywood", "cadetblue",
    "chartreuse", "chocolate", "coral", "cornflowerblue", "cornsilk", "crimson", "cyan",
    "darkblue", "darkcyan", "darkgoldenrod", "darkgray", "darkgreen", "darkgrey", "darkkhaki",
    "darkmagenta", "darkolivegreen", "darkorange", "darkorchid", "darkred", "darksalmon",
    "darkseagreen", "darkslateblue", "darkslategray", "darkslategrey", "darkturquoise",
    "darkviolet", "deeppink", "deepskyblue", "dimgray", "dimgrey", "dodgerblue", "firebrick",
    "floralwhite", "forestgreen", "gainsboro", "ghostwhite", "gold", "goldenrod", "greenyellow",
    "grey", "honeydew", "hotpink", "indianred", "indigo", "ivory", "khaki", "lavender",
    "lavenderblush", "lawngreen", "lemonchiffon", "lightblue", "lightcoral", "lightcyan",
    "lightgoldenrodyellow", "lightgray", "lightgreen", "lightgrey", "lightpink", "lightsalmon",
    "lightseagreen", "lightskyblue", "lightslategray", "lightslategrey", "lightsteelblue",
    "lightyellow", "limegreen", "linen", "magenta", "mediumaquamarine", "mediumblue",
    "mediumorchid", "mediumpurple", "mediumseagreen", "mediumslateblue", "mediumspringgreen",
    "mediumturquoise", "mediumvioletred", "midnightblue", "mintcream", "mistyrose", "moccasin",
    "navajowhite", "oldlace", "olivedrab", "orangered", "orchid", "palegoldenrod", "palegreen",
    "paleturquoise", "palevioletred", "papayawhip", "peachpuff", "peru", "pink", "plum",
    "powderblue", "rebeccapurple", "rosybrown", "royalblue", "saddlebrown", "salmon",
    "sandybrown", "seagreen", "seashell", "sienna", "skyblue", "slateblue", "slategray",
    "slategrey", "snow", "springgreen", "steelblue", "tan", "thistle", "tomato", "turquoise",
    "violet", "wheat", "whitesmoke", "yellowgreen",
];

/// Brightness reported for colors that cannot be parsed.
const NEUTRAL_BRIGHTNESS: f64 = 128.0;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
/// Color parsing failures.
pub enum ColorError {
    /// Input is not a 3- or 6-digit hex color.
    #[error("`{0}` is not a #rgb or #rrggbb hex color")]
    InvalidHex(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// 8-bit RGB triple.
pub struct Rgb {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Rgb {
    /// Parses `#rgb`, `#rrggbb`, `rgb` or `rrggbb`.
    ///
    /// # Errors
    ///
    /// Returns [`ColorError::InvalidHex`] for anything else.
    pub fn from_hex(hex: &str) -> Result<Self, ColorError> {
        let invalid = || ColorError::InvalidHex(hex.to_string());
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }
        let expanded: String = match digits.len() {
            3 => digits.chars().flat_map(|c| [c, c]).collect(),
            6 => digits.to_string(),
            _ => return Err(invalid()),
        };
        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&expanded[range], 16).map_err(|_| invalid())
        };
        Ok(Self {
            r: channel(0..2)?,
            g: channel(2..4)?,
            b: channel(4..6)?,
        })
    }

    /// Lowercase `#rrggbb` form.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Perceived brightness (ITU-R BT.601 weights), `0.0..=255.0`.
    pub fn brightness(self) -> f64 {
        (f64::from(self.r) * 299.0 + f64::from(self.g) * 587.0 + f64::from(self.b) * 114.0)
            / 1000.0
    }

    fn scaled(self, factor: f64) -> Self {
        let scale = |channel: u8| (f64::from(channel) * factor).round().clamp(0.0, 255.0) as u8;
        Self {
            r: scale(self.r),
            g: scale(self.g),
            b: scale(self.b),
        }
    }

    /// `rgba(r, g, b, opacity)` string.
    pub fn rgba(self, opacity: f64) -> String {
        format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, opacity)
    }
}

/// Perceived brightness of a hex color; unparseable input reports the neutral midpoint.
pub fn brightness(color: &str) -> f64 {
    Rgb::from_hex(color).map_or(NEUTRAL_BRIGHTNESS, Rgb::brightness)
}

/// Whether `color` is brighter than `threshold`.
pub fn is_light_color(color: &str, threshold: f64) -> bool {
    brightness(color) > threshold
}

/// Black on light backgrounds, white on dark ones.
pub fn contrasting_text_color(background: &str) -> &'static str {
    if is_light_color(background, NEUTRAL_BRIGHTNESS) {
        "#000000"
    } else {
        "#ffffff"
    }
}

/// Scales every channel up by `percent`; unparseable input is returned unchanged.
pub fn lighten(hex: &str, percent: f64) -> String {
    Rgb::from_hex(hex).map_or_else(
        |_| hex.to_string(),
        |rgb| rgb.scaled(1.0 + percent / 100.0).to_hex(),
    )
}

/// Scales every channel down by `percent`; unparseable input is returned unchanged.
pub fn darken(hex: &str, percent: f64) -> String {
    Rgb::from_hex(hex).map_or_else(
        |_| hex.to_string(),
        |rgb| rgb.scaled(1.0 - percent / 100.0).to_hex(),
    )
}

/// Applies an alpha channel to a color.
///
/// Hex and `rgb()` colors become `rgba()`. Other valid colors (named colors, `currentColor`)
/// are mixed with transparency through `color-mix`. Anything else is returned unchanged.
pub fn with_opacity(color: &str, opacity: f64) -> String {
    let opacity = opacity.clamp(0.0, 1.0);
    if is_valid_hex(color) {
        if let Ok(rgb) = Rgb::from_hex(color) {
            return rgb.rgba(opacity);
        }
    }
    if let Some([r, g, b]) = parse_rgb_function(color) {
        return Rgb { r, g, b }.rgba(opacity);
    }
    if is_valid_color(color) {
        let percent = (opacity * 100.0).round() as u32;
        return format!("color-mix(in srgb, {color} {percent}%, transparent)");
    }
    color.to_string()
}

/// Ten-step palette (`50`..`900`) around `base`, which sits at `500`.
pub fn palette(base: &str) -> Vec<(u16, String)> {
    vec![
        (50, lighten(base, 45.0)),
        (100, lighten(base, 35.0)),
        (200, lighten(base, 25.0)),
        (300, lighten(base, 15.0)),
        (400, lighten(base, 5.0)),
        (500, base.to_string()),
        (600, darken(base, 10.0)),
        (700, darken(base, 20.0)),
        (800, darken(base, 30.0)),
        (900, darken(base, 40.0)),
    ]
}

/// `#rgb` or `#rrggbb` (leading `#` required).
pub fn is_valid_hex(color: &str) -> bool {
    color
        .strip_prefix('#')
        .is_some_and(|digits| {
            matches!(digits.len(), 3 | 6) && digits.chars().all(|c| c.is_ascii_hexdigit())
        })
}

/// Accepts hex, `rgb()`, `rgba()` and CSS named colors.
pub fn is_valid_color(color: &str) -> bool {
    if color.is_empty() {
        return false;
    }
    is_valid_hex(color)
        || parse_rgb_function(color).is_some()
        || parse_rgba_function(color).is_some()
        || CSS_NAMED_COLORS.contains(&color.to_ascii_lowercase().as_str())
}

fn function_args<'a>(color: &'a str, name: &str) -> Option<Vec<&'a str>> {
    let inner = color
        .strip_prefix(name)?
        .strip_prefix('(')?
        .strip_suffix(')')?;
    Some(inner.split(',').map(str::trim).collect())
}

fn parse_channel(raw: &str) -> Option<u8> {
    if raw.is_empty() || raw.len() > 3 || !raw.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    raw.parse::<u16>().ok().map(|value| value.min(255) as u8)
}

fn parse_rgb_function(color: &str) -> Option<[u8; 3]> {
    let args = function_args(color, "rgb")?;
    let [r, g, b] = args.as_slice() else {
        return None;
    };
    Some([parse_channel(r)?, parse_channel(g)?, parse_channel(b)?])
}

fn parse_rgba_function(color: &str) -> Option<([u8; 3], f64)> {
    let args = function_args(color, "rgba")?;
    let [r, g, b, a] = args.as_slice() else {
        return None;
    };
    let alpha_ok = *a == "0"
        || *a == "1"
        || a.strip_prefix('0')
            .unwrap_or(a)
            .strip_prefix('.')
            .is_some_and(|frac| !frac.is_empty() && frac.chars().all(|c| c.is_ascii_digit()));
    if !alpha_ok {
        return None;
    }
    Some((
        [parse_channel(r)?, parse_channel(g)?, parse_channel(b)?],
        a.parse().ok()?,
    ))
}
