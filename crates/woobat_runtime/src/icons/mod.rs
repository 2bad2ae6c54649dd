//! Icon name classification and the lazily loaded external icon set.

mod catalog;
mod classify;
mod resolver;

pub use catalog::{IconGlyph, IconHandle, IconSet, IconSetLoader, MissingIconSet};
pub use classify::{to_pascal_case, IconClass, IconClassifier, DEFAULT_CSS_MARKERS};
pub use resolver::{IconLoadState, IconResolver, IconResolverOptions, IconStats};
