use std::cell::{Cell, RefCell};
use std::rc::Rc;

use futures::executor::LocalPool;
use futures::future::{self, FutureExt, LocalBoxFuture};
use woobat_host::{
    HostServices, ManualClock, MemoryEventDispatcher, MemoryPrefsStore, MemoryPresentationRoot,
    PresentationRoot,
};
use woobat_runtime::icons::{IconGlyph, IconSet, IconSetLoader};
use woobat_runtime::ripple::{RippleGeometry, RippleStyle, SurfaceSize};
use woobat_runtime::{
    IconClass, IconLoadState, IconResolver, IconResolverOptions, PluginOptions, RippleEffect,
    RippleOptions, RippleSurface, ThemeMode, Woobat,
};

fn memory_host() -> (HostServices, MemoryPrefsStore, MemoryPresentationRoot, MemoryEventDispatcher) {
    let prefs = MemoryPrefsStore::default();
    let root = MemoryPresentationRoot::default();
    let events = MemoryEventDispatcher::default();
    let host = HostServices {
        prefs: Rc::new(prefs.clone()),
        root: Rc::new(root.clone()),
        events: Rc::new(events.clone()),
        ..HostServices::headless()
    };
    (host, prefs, root, events)
}

#[test]
fn theme_survives_an_application_restart() {
    let (host, prefs, root, events) = memory_host();

    let first = Woobat::install(host.clone(), PluginOptions::default()).expect("first install");
    assert_eq!(first.theme.mode(), ThemeMode::Light);
    first.theme.toggle_theme();
    assert_eq!(prefs.raw("woobat-theme").as_deref(), Some("\"dark\""));
    assert_eq!(events.events().len(), 1);
    first.theme.dispose();
    drop(first);

    let second = Woobat::install(host, PluginOptions::default()).expect("second install");
    assert_eq!(second.theme.mode(), ThemeMode::Dark);
    assert_eq!(root.attribute("data-wb-theme").as_deref(), Some("dark"));
    assert!(root.has_class("wb-dark"));
    assert!(!root.has_class("wb-light"));
    assert_eq!(events.events().len(), 1);
}

struct FlakyLoader {
    calls: Rc<Cell<usize>>,
}

impl IconSetLoader for FlakyLoader {
    fn load(&self) -> LocalBoxFuture<'static, Result<IconSet, String>> {
        self.calls.set(self.calls.get() + 1);
        future::ready(Err("icon set not bundled".to_string())).boxed_local()
    }
}

#[test]
fn missing_icon_set_degrades_to_css_classes_after_one_attempt() {
    let calls = Rc::new(Cell::new(0));
    let mut pool = LocalPool::new();
    let resolver = IconResolver::with_spawner(
        IconResolverOptions {
            warn_on_missing: false,
            ..IconResolverOptions::default()
        },
        Rc::new(FlakyLoader {
            calls: Rc::clone(&calls),
        }),
        Rc::new(pool.spawner()),
    );
    let component_copy = resolver.clone();

    for name in ["arrow-left", "home", "arrow-left"] {
        assert_eq!(component_copy.resolve(name), None);
        pool.run_until_stalled();
    }
    assert_eq!(resolver.state(), IconLoadState::Unavailable);
    assert_eq!(resolver.classify("fas fa-star"), IconClass::CssClass);
    assert_eq!(calls.get(), 1);
}

#[test]
fn bundled_set_resolves_kebab_names_to_shared_handles() {
    let loader = || -> LocalBoxFuture<'static, Result<IconSet, String>> {
        let set: IconSet = ["ArrowLeft", "AlertCircle"]
            .into_iter()
            .map(|name| IconGlyph::new(name, "<path d=\"M12 19l-7-7 7-7\"/>"))
            .collect();
        future::ready(Ok(set)).boxed_local()
    };
    let resolver = IconResolver::new(IconResolverOptions::default(), Rc::new(loader));
    let mut pool = LocalPool::new();
    assert!(pool.run_until(resolver.load()));

    let a = resolver.resolve("arrow-left").expect("kebab");
    let b = resolver.clone().resolve("arrow-left").expect("cached");
    assert!(a.ptr_eq(&b));
    assert_eq!(resolver.classify("ArrowLeft"), IconClass::External);
    assert!(resolver.fallback().is_some());
}

#[derive(Clone, Default)]
struct CountingSurface {
    live: Rc<RefCell<Vec<u32>>>,
    next: Rc<Cell<u32>>,
}

impl RippleSurface for CountingSurface {
    type Overlay = u32;

    fn size(&self) -> Option<SurfaceSize> {
        Some(SurfaceSize::new(160.0, 48.0))
    }

    fn ensure_containment(&self) {}

    fn mount_overlay(&self, _geometry: RippleGeometry, _style: &RippleStyle) -> Option<u32> {
        let id = self.next.get() + 1;
        self.next.set(id);
        self.live.borrow_mut().push(id);
        Some(id)
    }

    fn expand_overlay(&self, _overlay: &u32, _style: &RippleStyle) {}

    fn fade_overlay(&self, _overlay: &u32, _style: &RippleStyle) {}

    fn remove_overlay(&self, overlay: u32) {
        self.live.borrow_mut().retain(|live| *live != overlay);
    }
}

#[test]
fn timer_driven_ripples_drain_completely() {
    let clock = ManualClock::starting_at(0);
    let surface = CountingSurface::default();
    let mut effect = RippleEffect::new(
        RippleOptions {
            duration_ms: 400,
            ..RippleOptions::default()
        },
        clock.clone(),
    );
    effect.attach(surface.clone());

    for offset in [0.0, 40.0, 80.0] {
        effect.trigger(Some(offset), Some(24.0)).expect("ripple");
        clock.advance(50);
    }
    assert_eq!(surface.live.borrow().len(), 3);

    let mut timers = 0;
    while let Some(wait) = effect.next_transition_in() {
        clock.advance(wait);
        effect.tick();
        timers += 1;
        assert!(timers < 32, "ripple timers never settled");
    }
    assert!(surface.live.borrow().is_empty());
    assert_eq!(effect.active_count(), 0);
}
