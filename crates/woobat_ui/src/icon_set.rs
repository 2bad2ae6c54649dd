//! Bundled stroke icon set.
//!
//! With the `icon-set` feature the set below is compiled in and handed to the
//! [`IconResolver`](woobat_runtime::IconResolver) as its loader. Without it the loader always
//! fails, and icons fall back to CSS class rendering.

use std::rc::Rc;

use woobat_runtime::icons::IconSetLoader;
#[cfg(feature = "icon-set")]
use woobat_runtime::icons::{IconGlyph, IconSet};
#[cfg(not(feature = "icon-set"))]
use woobat_runtime::icons::MissingIconSet;

#[cfg(feature = "icon-set")]
const GLYPHS: &[(&str, &str)] = &[
    (
        "AlertCircle",
        r#"<circle cx="12" cy="12" r="10"/><line x1="12" x2="12" y1="8" y2="12"/><line x1="12" x2="12.01" y1="16" y2="16"/>"#,
    ),
    (
        "AlertTriangle",
        r#"<path d="m21.73 18-8-14a2 2 0 0 0-3.48 0l-8 14A2 2 0 0 0 4 21h16a2 2 0 0 0 1.73-3Z"/><line x1="12" x2="12" y1="9" y2="13"/><line x1="12" x2="12.01" y1="17" y2="17"/>"#,
    ),
    (
        "ArrowLeft",
        r#"<path d="m12 19-7-7 7-7"/><path d="M19 12H5"/>"#,
    ),
    (
        "ArrowRight",
        r#"<path d="M5 12h14"/><path d="m12 5 7 7-7 7"/>"#,
    ),
    (
        "Bell",
        r#"<path d="M6 8a6 6 0 0 1 12 0c0 7 3 9 3 9H3s3-2 3-9"/><path d="M10.3 21a1.94 1.94 0 0 0 3.4 0"/>"#,
    ),
    ("Check", r#"<path d="M20 6 9 17l-5-5"/>"#),
    (
        "CheckCircle",
        r#"<path d="M22 11.08V12a10 10 0 1 1-5.93-9.14"/><path d="m9 11 3 3L22 4"/>"#,
    ),
    ("ChevronDown", r#"<path d="m6 9 6 6 6-6"/>"#),
    ("ChevronRight", r#"<path d="m9 18 6-6-6-6"/>"#),
    (
        "Heart",
        r#"<path d="M19 14c1.49-1.46 3-3.21 3-5.5A5.5 5.5 0 0 0 16.5 3c-1.76 0-3 .5-4.5 2-1.5-1.5-2.74-2-4.5-2A5.5 5.5 0 0 0 2 8.5c0 2.3 1.5 4.05 3 5.5l7 7Z"/>"#,
    ),
    (
        "Home",
        r#"<path d="m3 9 9-7 9 7v11a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2z"/><polyline points="9 22 9 12 15 12 15 22"/>"#,
    ),
    (
        "Info",
        r#"<circle cx="12" cy="12" r="10"/><path d="M12 16v-4"/><path d="M12 8h.01"/>"#,
    ),
    ("Loader", r#"<path d="M21 12a9 9 0 1 1-6.219-8.56"/>"#),
    (
        "Mail",
        r#"<rect width="20" height="16" x="2" y="4" rx="2"/><path d="m22 7-8.97 5.7a1.94 1.94 0 0 1-2.06 0L2 7"/>"#,
    ),
    ("Minus", r#"<path d="M5 12h14"/>"#),
    ("Moon", r#"<path d="M12 3a6 6 0 0 0 9 9 9 9 0 1 1-9-9Z"/>"#),
    ("Plus", r#"<path d="M5 12h14"/><path d="M12 5v14"/>"#),
    (
        "Search",
        r#"<circle cx="11" cy="11" r="8"/><path d="m21 21-4.3-4.3"/>"#,
    ),
    (
        "Settings",
        r#"<path d="M12.22 2h-.44a2 2 0 0 0-2 2v.18a2 2 0 0 1-1 1.73l-.43.25a2 2 0 0 1-2 0l-.15-.08a2 2 0 0 0-2.73.73l-.22.38a2 2 0 0 0 .73 2.73l.15.1a2 2 0 0 1 1 1.72v.51a2 2 0 0 1-1 1.74l-.15.09a2 2 0 0 0-.73 2.73l.22.38a2 2 0 0 0 2.73.73l.15-.08a2 2 0 0 1 2 0l.43.25a2 2 0 0 1 1 1.73V20a2 2 0 0 0 2 2h.44a2 2 0 0 0 2-2v-.18a2 2 0 0 1 1-1.73l.43-.25a2 2 0 0 1 2 0l.15.08a2 2 0 0 0 2.73-.73l.22-.39a2 2 0 0 0-.73-2.73l-.15-.08a2 2 0 0 1-1-1.74v-.5a2 2 0 0 1 1-1.74l.15-.09a2 2 0 0 0 .73-2.73l-.22-.38a2 2 0 0 0-2.73-.73l-.15.08a2 2 0 0 1-2 0l-.43-.25a2 2 0 0 1-1-1.73V4a2 2 0 0 0-2-2z"/><circle cx="12" cy="12" r="3"/>"#,
    ),
    (
        "Star",
        r#"<polygon points="12 2 15.09 8.26 22 9.27 17 14.14 18.18 21.02 12 17.77 5.82 21.02 7 14.14 2 9.27 8.91 8.26 12 2"/>"#,
    ),
    (
        "Sun",
        r#"<circle cx="12" cy="12" r="4"/><path d="M12 2v2"/><path d="M12 20v2"/><path d="m4.93 4.93 1.41 1.41"/><path d="m17.66 17.66 1.41 1.41"/><path d="M2 12h2"/><path d="M20 12h2"/><path d="m6.34 17.66-1.41 1.41"/><path d="m19.07 4.93-1.41 1.41"/>"#,
    ),
    (
        "Trash",
        r#"<path d="M3 6h18"/><path d="M19 6v14c0 1-1 2-2 2H7c-1 0-2-1-2-2V6"/><path d="M8 6V4c0-1 1-2 2-2h4c1 0 2 1 2 2v2"/>"#,
    ),
    (
        "User",
        r#"<path d="M19 21v-2a4 4 0 0 0-4-4H9a4 4 0 0 0-4 4v2"/><circle cx="12" cy="7" r="4"/>"#,
    ),
    ("X", r#"<path d="M18 6 6 18"/><path d="m6 6 12 12"/>"#),
    (
        "XCircle",
        r#"<circle cx="12" cy="12" r="10"/><path d="m15 9-6 6"/><path d="m9 9 6 6"/>"#,
    ),
];

#[cfg(feature = "icon-set")]
/// Builds the bundled set.
pub fn bundled_icon_set() -> IconSet {
    GLYPHS
        .iter()
        .map(|(name, body)| IconGlyph::new(*name, *body))
        .collect()
}

/// Loader handed to the icon resolver by [`WoobatProvider`](crate::WoobatProvider).
pub fn bundled_loader() -> Rc<dyn IconSetLoader> {
    #[cfg(feature = "icon-set")]
    {
        use futures::future::{self, FutureExt};

        Rc::new(|| future::ready(Ok::<_, String>(bundled_icon_set())).boxed_local())
    }
    #[cfg(not(feature = "icon-set"))]
    {
        Rc::new(MissingIconSet::new(
            "woobat_ui was built without the `icon-set` feature",
        ))
    }
}

#[cfg(all(test, feature = "icon-set"))]
mod tests {
    use futures::executor::block_on;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn bundled_set_contains_the_component_icons() {
        let set = bundled_icon_set();
        for name in ["AlertCircle", "CheckCircle", "XCircle", "AlertTriangle", "Info", "X", "User"] {
            assert!(set.contains(name), "missing {name}");
        }
        assert_eq!(set.len(), GLYPHS.len());
    }

    #[test]
    fn loader_resolves_immediately() {
        let set = block_on(bundled_loader().load()).expect("bundled set");
        assert!(set.contains("Loader"));
    }
}
