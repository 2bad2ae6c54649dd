use std::{collections::HashMap, fmt, ops::Deref, rc::Rc};

use futures::future::LocalBoxFuture;

#[derive(Debug, Clone, PartialEq, Eq)]
/// One renderable SVG glyph.
pub struct IconGlyph {
    /// Canonical (PascalCase) name.
    pub name: String,
    /// SVG `viewBox`.
    pub view_box: String,
    /// Inner SVG markup drawn with `stroke="currentColor"`.
    pub body: String,
}

impl IconGlyph {
    /// Glyph on the standard 24x24 grid.
    pub fn new(name: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            view_box: "0 0 24 24".to_string(),
            body: body.into(),
        }
    }
}

#[derive(Clone, PartialEq, Eq)]
/// Shared handle to a glyph. Clones point at the same allocation.
pub struct IconHandle(Rc<IconGlyph>);

impl IconHandle {
    /// Wraps a glyph.
    pub fn new(glyph: IconGlyph) -> Self {
        Self(Rc::new(glyph))
    }

    /// Whether both handles point at the same glyph allocation.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl Deref for IconHandle {
    type Target = IconGlyph;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl fmt::Debug for IconHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IconHandle").field(&self.0.name).finish()
    }
}

#[derive(Debug, Clone, Default)]
/// Glyphs keyed by canonical name.
pub struct IconSet {
    icons: HashMap<String, IconHandle>,
}

impl IconSet {
    /// Adds a glyph under its own name, replacing any previous one.
    pub fn insert(&mut self, glyph: IconGlyph) {
        self.icons.insert(glyph.name.clone(), IconHandle::new(glyph));
    }

    /// Exact-name lookup.
    pub fn get(&self, name: &str) -> Option<&IconHandle> {
        self.icons.get(name)
    }

    /// Whether a glyph named exactly `name` exists.
    pub fn contains(&self, name: &str) -> bool {
        self.icons.contains_key(name)
    }

    /// Number of glyphs.
    pub fn len(&self) -> usize {
        self.icons.len()
    }

    /// Whether the set has no glyphs.
    pub fn is_empty(&self) -> bool {
        self.icons.is_empty()
    }

    /// Glyph names in sorted order.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.icons.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

impl FromIterator<IconGlyph> for IconSet {
    fn from_iter<T: IntoIterator<Item = IconGlyph>>(iter: T) -> Self {
        let mut set = Self::default();
        for glyph in iter {
            set.insert(glyph);
        }
        set
    }
}

/// Source of the optional external icon set.
pub trait IconSetLoader {
    /// Starts loading the set. Errors mean the set is not available in this build.
    fn load(&self) -> LocalBoxFuture<'static, Result<IconSet, String>>;
}

impl<F> IconSetLoader for F
where
    F: Fn() -> LocalBoxFuture<'static, Result<IconSet, String>>,
{
    fn load(&self) -> LocalBoxFuture<'static, Result<IconSet, String>> {
        self()
    }
}

#[derive(Debug, Clone)]
/// Loader for builds without an icon set; always fails with the given reason.
pub struct MissingIconSet {
    reason: String,
}

impl MissingIconSet {
    /// Creates a failing loader.
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

impl IconSetLoader for MissingIconSet {
    fn load(&self) -> LocalBoxFuture<'static, Result<IconSet, String>> {
        let reason = self.reason.clone();
        Box::pin(async move { Err(reason) })
    }
}
