use std::{
    cell::{Cell, RefCell},
    collections::HashMap,
    future::Future,
    rc::{Rc, Weak},
};

use futures::{
    future::{self, FutureExt, LocalBoxFuture, Shared},
    task::{LocalFutureObj, LocalSpawn},
};
use leptos::logging;
use serde::{Deserialize, Serialize};

use super::{
    catalog::{IconHandle, IconSet, IconSetLoader},
    classify::{to_pascal_case, IconClass, IconClassifier, DEFAULT_CSS_MARKERS},
};
use crate::tokens::icon_size_px;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
/// Icon resolver configuration.
pub struct IconResolverOptions {
    /// Glyph returned by [`IconResolver::fallback`].
    pub fallback_icon: Option<String>,
    /// Log a warning when the external set turns out to be unavailable.
    pub warn_on_missing: bool,
    /// Substrings marking a name as a CSS-class icon.
    pub css_markers: Vec<String>,
}

impl Default for IconResolverOptions {
    fn default() -> Self {
        Self {
            fallback_icon: Some("AlertCircle".to_string()),
            warn_on_missing: true,
            css_markers: DEFAULT_CSS_MARKERS.iter().map(|marker| marker.to_string()).collect(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Load state of the external icon set.
pub enum IconLoadState {
    /// No load attempted yet.
    Unloaded,
    /// Load in flight.
    Loading,
    /// Set available.
    Loaded,
    /// Load failed; never retried.
    Unavailable,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Resolver counters.
pub struct IconStats {
    /// `resolve` calls answered from the cache.
    pub cache_hits: u64,
    /// Lookups performed against the loaded set.
    pub set_lookups: u64,
}

type SharedLoad = Shared<LocalBoxFuture<'static, Option<Rc<IconSet>>>>;

enum LoadState {
    Unloaded,
    Loading(SharedLoad),
    Loaded(Rc<IconSet>),
    Unavailable,
}

struct ResolverInner {
    options: IconResolverOptions,
    classifier: IconClassifier,
    loader: Rc<dyn IconSetLoader>,
    spawner: Option<Rc<dyn LocalSpawn>>,
    state: RefCell<LoadState>,
    load_generation: Cell<u64>,
    cache: RefCell<HashMap<String, IconHandle>>,
    stats: Cell<IconStats>,
}

impl ResolverInner {
    /// Records a finished load. Loads started before the last [`IconResolver::reset`] are
    /// dropped without touching the state.
    fn finish_load(&self, generation: u64, result: Result<IconSet, String>) -> Option<Rc<IconSet>> {
        if generation != self.load_generation.get() {
            return None;
        }
        match result {
            Ok(set) => {
                let set = Rc::new(set);
                *self.state.borrow_mut() = LoadState::Loaded(Rc::clone(&set));
                Some(set)
            }
            Err(err) => {
                if self.options.warn_on_missing {
                    logging::warn!(
                        "Woobat UI: icon set is not available, icons are limited to CSS classes: \
                         {err}"
                    );
                }
                *self.state.borrow_mut() = LoadState::Unavailable;
                None
            }
        }
    }
}

/// Lazily loaded, memoizing icon lookup.
///
/// Clones share one load state and cache. The external set is loaded at most once: concurrent
/// callers await the same in-flight future, and a failed load leaves the resolver permanently
/// in [`IconLoadState::Unavailable`].
#[derive(Clone)]
pub struct IconResolver {
    inner: Rc<ResolverInner>,
}

impl IconResolver {
    /// Creates a resolver. Without a spawner, loads only progress while [`Self::load`] is awaited.
    pub fn new(options: IconResolverOptions, loader: Rc<dyn IconSetLoader>) -> Self {
        Self::build(options, loader, None)
    }

    /// Creates a resolver whose opportunistic loads run on `spawner`.
    pub fn with_spawner(
        options: IconResolverOptions,
        loader: Rc<dyn IconSetLoader>,
        spawner: Rc<dyn LocalSpawn>,
    ) -> Self {
        Self::build(options, loader, Some(spawner))
    }

    fn build(
        options: IconResolverOptions,
        loader: Rc<dyn IconSetLoader>,
        spawner: Option<Rc<dyn LocalSpawn>>,
    ) -> Self {
        let classifier = IconClassifier::new(options.css_markers.iter().cloned());
        Self {
            inner: Rc::new(ResolverInner {
                options,
                classifier,
                loader,
                spawner,
                state: RefCell::new(LoadState::Unloaded),
                load_generation: Cell::new(0),
                cache: RefCell::new(HashMap::new()),
                stats: Cell::new(IconStats::default()),
            }),
        }
    }

    /// Options in effect.
    pub fn options(&self) -> &IconResolverOptions {
        &self.inner.options
    }

    /// Current load state.
    pub fn state(&self) -> IconLoadState {
        match &*self.inner.state.borrow() {
            LoadState::Unloaded => IconLoadState::Unloaded,
            LoadState::Loading(_) => IconLoadState::Loading,
            LoadState::Loaded(_) => IconLoadState::Loaded,
            LoadState::Unavailable => IconLoadState::Unavailable,
        }
    }

    /// Cache and lookup counters.
    pub fn stats(&self) -> IconStats {
        self.inner.stats.get()
    }

    /// Awaits the external set, starting the load if needed. Resolves to whether it is available.
    pub fn load(&self) -> impl Future<Output = bool> + 'static {
        self.shared_load().map(|set| set.is_some())
    }

    /// Classifies `name`, starting a background load when the set has not been requested yet.
    pub fn classify(&self, name: &str) -> IconClass {
        if name.is_empty() {
            return IconClass::Unknown;
        }
        if self.inner.classifier.is_css_class(name) {
            return IconClass::CssClass;
        }
        match self.loaded_set() {
            Some(set) if lookup(&set, name).is_some() => IconClass::External,
            Some(_) => IconClass::Unknown,
            None => {
                self.kick_off();
                IconClass::Unknown
            }
        }
    }

    /// Resolves `name` to a glyph, trying its PascalCase form and then the name as given.
    ///
    /// Returns `None` while the set is loading (a background load is started if needed) or
    /// when it is unavailable. Successful lookups are cached, so repeated calls return the
    /// same handle.
    pub fn resolve(&self, name: &str) -> Option<IconHandle> {
        if name.is_empty() {
            return None;
        }
        if let Some(handle) = self.inner.cache.borrow().get(name).cloned() {
            self.bump(|stats| stats.cache_hits += 1);
            return Some(handle);
        }
        let Some(set) = self.loaded_set() else {
            self.kick_off();
            return None;
        };
        self.bump(|stats| stats.set_lookups += 1);
        let handle = lookup(&set, name)?.clone();
        self.inner
            .cache
            .borrow_mut()
            .insert(name.to_string(), handle.clone());
        Some(handle)
    }

    /// Configured fallback glyph, when the set is loaded and contains it.
    pub fn fallback(&self) -> Option<IconHandle> {
        let name = self.inner.options.fallback_icon.as_deref()?;
        let set = self.loaded_set()?;
        lookup(&set, name).cloned()
    }

    /// Pixel size for an icon size token.
    pub fn size_for(&self, token: &str) -> u32 {
        icon_size_px(token)
    }

    /// Drops memoized lookups. The load state is kept.
    pub fn clear_cache(&self) {
        self.inner.cache.borrow_mut().clear();
    }

    /// Number of memoized names.
    pub fn cached_len(&self) -> usize {
        self.inner.cache.borrow().len()
    }

    /// Returns the resolver to its initial state: unloaded, empty cache, zeroed counters.
    ///
    /// A load still in flight is abandoned; its result is ignored.
    pub fn reset(&self) {
        self.inner
            .load_generation
            .set(self.inner.load_generation.get() + 1);
        *self.inner.state.borrow_mut() = LoadState::Unloaded;
        self.clear_cache();
        self.inner.stats.set(IconStats::default());
    }

    fn bump(&self, update: impl FnOnce(&mut IconStats)) {
        let mut stats = self.inner.stats.get();
        update(&mut stats);
        self.inner.stats.set(stats);
    }

    fn loaded_set(&self) -> Option<Rc<IconSet>> {
        match &*self.inner.state.borrow() {
            LoadState::Loaded(set) => Some(Rc::clone(set)),
            _ => None,
        }
    }

    fn shared_load(&self) -> SharedLoad {
        let mut state = self.inner.state.borrow_mut();
        match &*state {
            LoadState::Loading(pending) => pending.clone(),
            LoadState::Loaded(set) => future::ready(Some(Rc::clone(set))).boxed_local().shared(),
            LoadState::Unavailable => future::ready(None).boxed_local().shared(),
            LoadState::Unloaded => {
                let pending = self.inner.loader.load();
                let generation = self.inner.load_generation.get();
                let inner: Weak<ResolverInner> = Rc::downgrade(&self.inner);
                let shared = async move {
                    let result = pending.await;
                    inner.upgrade()?.finish_load(generation, result)
                }
                .boxed_local()
                .shared();
                *state = LoadState::Loading(shared.clone());
                shared
            }
        }
    }

    fn kick_off(&self) {
        if !matches!(*self.inner.state.borrow(), LoadState::Unloaded) {
            return;
        }
        let pending = self.shared_load();
        let Some(spawner) = self.inner.spawner.as_ref() else {
            return;
        };
        let task = LocalFutureObj::new(Box::new(pending.map(drop)));
        if let Err(err) = spawner.spawn_local_obj(task) {
            logging::warn!("icon set load could not be spawned: {err}");
        }
    }
}

fn lookup<'a>(set: &'a IconSet, name: &str) -> Option<&'a IconHandle> {
    set.get(&to_pascal_case(name)).or_else(|| set.get(name))
}

#[cfg(test)]
mod tests {
    use futures::{channel::oneshot, executor::LocalPool, future::join};
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::icons::IconGlyph;

    struct CountingLoader {
        calls: Rc<Cell<usize>>,
        names: Option<Vec<&'static str>>,
    }

    impl IconSetLoader for CountingLoader {
        fn load(&self) -> LocalBoxFuture<'static, Result<IconSet, String>> {
            self.calls.set(self.calls.get() + 1);
            let result = match &self.names {
                Some(names) => Ok(names
                    .iter()
                    .map(|name| IconGlyph::new(*name, "<path d=\"M0 0\"/>"))
                    .collect()),
                None => Err("module not found".to_string()),
            };
            future::ready(result).boxed_local()
        }
    }

    fn resolver_with(names: Option<Vec<&'static str>>) -> (IconResolver, LocalPool, Rc<Cell<usize>>) {
        let calls = Rc::new(Cell::new(0));
        let pool = LocalPool::new();
        let resolver = IconResolver::with_spawner(
            IconResolverOptions {
                warn_on_missing: false,
                ..IconResolverOptions::default()
            },
            Rc::new(CountingLoader {
                calls: Rc::clone(&calls),
                names,
            }),
            Rc::new(pool.spawner()),
        );
        (resolver, pool, calls)
    }

    #[test]
    fn first_resolve_starts_the_load_and_later_calls_hit_the_cache() {
        let (resolver, mut pool, calls) = resolver_with(Some(vec!["ArrowLeft", "AlertCircle"]));
        assert_eq!(resolver.resolve("arrow-left"), None);
        assert_eq!(resolver.state(), IconLoadState::Loading);

        pool.run_until_stalled();
        assert_eq!(resolver.state(), IconLoadState::Loaded);

        let first = resolver.resolve("arrow-left").expect("resolved");
        let second = resolver.resolve("arrow-left").expect("cached");
        assert!(first.ptr_eq(&second));
        assert_eq!(first.name, "ArrowLeft");
        assert_eq!(
            resolver.stats(),
            IconStats {
                cache_hits: 1,
                set_lookups: 1
            }
        );
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn clear_cache_forces_a_fresh_lookup() {
        let (resolver, mut pool, calls) = resolver_with(Some(vec!["ArrowLeft"]));
        assert!(pool.run_until(resolver.load()));
        resolver.resolve("ArrowLeft").expect("resolved");
        resolver.clear_cache();
        assert_eq!(resolver.cached_len(), 0);
        resolver.resolve("ArrowLeft").expect("resolved again");
        assert_eq!(resolver.stats().set_lookups, 2);
        assert_eq!(resolver.state(), IconLoadState::Loaded);
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn classification_follows_markers_then_set_membership() {
        let (resolver, mut pool, _) = resolver_with(Some(vec!["ArrowLeft"]));
        assert_eq!(resolver.classify("fa-star"), IconClass::CssClass);
        assert_eq!(resolver.state(), IconLoadState::Unloaded);

        assert_eq!(resolver.classify("arrow-left"), IconClass::Unknown);
        pool.run_until_stalled();
        assert_eq!(resolver.classify("arrow-left"), IconClass::External);
        assert_eq!(resolver.classify("totally-unknown-xyz"), IconClass::Unknown);
        assert_eq!(resolver.classify(""), IconClass::Unknown);
    }

    #[test]
    fn failed_load_is_never_retried() {
        let (resolver, mut pool, calls) = resolver_with(None);
        for _ in 0..3 {
            assert_eq!(resolver.resolve("arrow-left"), None);
            pool.run_until_stalled();
        }
        assert!(!pool.run_until(resolver.load()));
        assert_eq!(resolver.state(), IconLoadState::Unavailable);
        assert_eq!(resolver.classify("arrow-left"), IconClass::Unknown);
        assert_eq!(resolver.classify("mdi-home"), IconClass::CssClass);
        assert_eq!(resolver.fallback(), None);
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn concurrent_loads_share_one_future() {
        let (tx, rx) = oneshot::channel::<IconSet>();
        let rx = RefCell::new(Some(rx));
        let calls = Rc::new(Cell::new(0));
        let counted = Rc::clone(&calls);
        let loader = move || -> LocalBoxFuture<'static, Result<IconSet, String>> {
            counted.set(counted.get() + 1);
            let rx = rx.borrow_mut().take();
            async move {
                match rx {
                    Some(rx) => rx.await.map_err(|err| err.to_string()),
                    None => Err("loader invoked twice".to_string()),
                }
            }
            .boxed_local()
        };
        let resolver = IconResolver::new(IconResolverOptions::default(), Rc::new(loader));
        let mut pool = LocalPool::new();

        let both = join(resolver.load(), resolver.clone().load());
        assert_eq!(resolver.state(), IconLoadState::Loading);
        tx.send([IconGlyph::new("AlertCircle", "")].into_iter().collect())
            .expect("receiver alive");
        assert_eq!(pool.run_until(both), (true, true));
        assert_eq!(calls.get(), 1);
        assert_eq!(resolver.fallback().map(|icon| icon.name.clone()), Some("AlertCircle".to_string()));
    }

    #[test]
    fn size_tokens_and_reset() {
        let (resolver, mut pool, calls) = resolver_with(Some(vec!["X"]));
        assert_eq!(resolver.size_for("xl"), 20);
        assert_eq!(resolver.size_for("unknown-token"), 16);

        assert!(pool.run_until(resolver.load()));
        resolver.resolve("x").expect("resolved");
        resolver.reset();
        assert_eq!(resolver.state(), IconLoadState::Unloaded);
        assert_eq!(resolver.stats(), IconStats::default());
        assert!(pool.run_until(resolver.load()));
        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn reset_abandons_an_in_flight_load() {
        let (tx, rx) = oneshot::channel::<IconSet>();
        let rx = RefCell::new(Some(rx));
        let calls = Rc::new(Cell::new(0));
        let counted = Rc::clone(&calls);
        let loader = move || -> LocalBoxFuture<'static, Result<IconSet, String>> {
            counted.set(counted.get() + 1);
            match rx.borrow_mut().take() {
                Some(rx) => async move { rx.await.map_err(|err| err.to_string()) }.boxed_local(),
                None => future::ready(Ok([IconGlyph::new("Check", "")].into_iter().collect()))
                    .boxed_local(),
            }
        };
        let resolver = IconResolver::new(IconResolverOptions::default(), Rc::new(loader));
        let mut pool = LocalPool::new();

        let stale = resolver.load();
        assert_eq!(resolver.state(), IconLoadState::Loading);
        resolver.reset();
        assert_eq!(resolver.state(), IconLoadState::Unloaded);

        tx.send([IconGlyph::new("ArrowLeft", "")].into_iter().collect())
            .expect("receiver alive");
        assert!(!pool.run_until(stale));
        assert_eq!(resolver.state(), IconLoadState::Unloaded);
        assert_eq!(calls.get(), 1);

        assert!(pool.run_until(resolver.load()));
        assert_eq!(calls.get(), 2);
        assert!(resolver.resolve("check").is_some());
        assert_eq!(resolver.resolve("arrow-left"), None);
    }

    #[test]
    fn options_deserialize_from_camel_case() {
        let options: IconResolverOptions =
            serde_json::from_str(r#"{ "fallbackIcon": "HelpCircle", "warnOnMissing": false }"#)
                .expect("options");
        assert_eq!(options.fallback_icon.as_deref(), Some("HelpCircle"));
        assert!(!options.warn_on_missing);
        assert_eq!(options.css_markers.len(), DEFAULT_CSS_MARKERS.len());
    }
}
