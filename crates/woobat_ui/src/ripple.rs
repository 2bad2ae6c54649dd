//! DOM ripple surface and the `use_ripple` hook.
//!
//! [`DomRippleSurface`] renders [`RippleEffect`] overlays as absolutely positioned `<span>`
//! children of the host element. [`use_ripple`] binds an effect to a [`NodeRef`] once the
//! element mounts, drives its timers from the host clock, and tears everything down in
//! `on_cleanup`. Components start ripples from their click handler through
//! [`RippleHandle::on_click`], so keyboard and pointer activation give the same feedback.

use std::{
    cell::{Cell, RefCell},
    rc::Rc,
};
#[cfg(target_arch = "wasm32")]
use std::time::Duration;

use leptos::html::ElementDescriptor;
use leptos::*;
use woobat_host::{Clock, HostServices};
use woobat_runtime::ripple::{
    PointerInput, RippleEffect, RippleGeometry, RippleId, RippleOptions, RippleStyle,
    RippleSurface, SurfaceSize,
};
#[cfg(target_arch = "wasm32")]
use woobat_runtime::ripple::RIPPLE_CLASS;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast;

use crate::use_woobat;

#[derive(Clone)]
/// Ripple surface backed by a mounted DOM element.
pub struct DomRippleSurface {
    element: web_sys::HtmlElement,
}

impl DomRippleSurface {
    /// Wraps a mounted element.
    pub fn new(element: web_sys::HtmlElement) -> Self {
        Self { element }
    }

    /// Host element.
    pub fn element(&self) -> &web_sys::HtmlElement {
        &self.element
    }
}

#[cfg(target_arch = "wasm32")]
fn set_styles(element: &web_sys::HtmlElement, declarations: &[(&str, String)]) {
    let style = element.style();
    for (property, value) in declarations {
        let _ = style.set_property(property, value);
    }
}

impl RippleSurface for DomRippleSurface {
    type Overlay = web_sys::HtmlElement;

    fn size(&self) -> Option<SurfaceSize> {
        #[cfg(target_arch = "wasm32")]
        {
            if !self.element.is_connected() {
                return None;
            }
            let rect = self.element.get_bounding_client_rect();
            Some(SurfaceSize::new(rect.width(), rect.height()))
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            None
        }
    }

    fn client_origin(&self) -> (f64, f64) {
        #[cfg(target_arch = "wasm32")]
        {
            let rect = self.element.get_bounding_client_rect();
            (rect.left(), rect.top())
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            (0.0, 0.0)
        }
    }

    fn ensure_containment(&self) {
        #[cfg(target_arch = "wasm32")]
        {
            let position = web_sys::window()
                .and_then(|window| window.get_computed_style(&self.element).ok().flatten())
                .and_then(|computed| computed.get_property_value("position").ok())
                .unwrap_or_default();
            let style = self.element.style();
            if position.is_empty() || position == "static" {
                let _ = style.set_property("position", "relative");
            }
            let _ = style.set_property("overflow", "hidden");
        }
    }

    fn mount_overlay(&self, geometry: RippleGeometry, style: &RippleStyle) -> Option<Self::Overlay> {
        #[cfg(target_arch = "wasm32")]
        {
            let document = self.element.owner_document()?;
            let overlay = document
                .create_element("span")
                .ok()?
                .dyn_into::<web_sys::HtmlElement>()
                .ok()?;
            overlay.set_class_name(RIPPLE_CLASS);
            let _ = overlay.set_attribute("aria-hidden", "true");
            set_styles(
                &overlay,
                &[
                    ("position", "absolute".to_string()),
                    ("left", format!("{}px", geometry.left())),
                    ("top", format!("{}px", geometry.top())),
                    ("width", format!("{}px", geometry.diameter)),
                    ("height", format!("{}px", geometry.diameter)),
                    ("border-radius", "50%".to_string()),
                    ("pointer-events", "none".to_string()),
                    ("background-color", style.color.clone()),
                    ("opacity", style.opacity.to_string()),
                    ("transform", "scale(0)".to_string()),
                    ("transition", style.transition()),
                ],
            );
            self.element.append_child(&overlay).ok()?;
            Some(overlay)
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = (geometry, style);
            None
        }
    }

    fn expand_overlay(&self, overlay: &Self::Overlay, _style: &RippleStyle) {
        #[cfg(target_arch = "wasm32")]
        set_styles(overlay, &[("transform", "scale(1)".to_string())]);
        #[cfg(not(target_arch = "wasm32"))]
        let _ = overlay;
    }

    fn fade_overlay(&self, overlay: &Self::Overlay, _style: &RippleStyle) {
        #[cfg(target_arch = "wasm32")]
        set_styles(overlay, &[("opacity", "0".to_string())]);
        #[cfg(not(target_arch = "wasm32"))]
        let _ = overlay;
    }

    fn remove_overlay(&self, overlay: Self::Overlay) {
        #[cfg(target_arch = "wasm32")]
        overlay.remove();
        #[cfg(not(target_arch = "wasm32"))]
        drop(overlay);
    }
}

/// Pointer position of a click, or `None` for keyboard activation.
///
/// Browsers report `detail == 0` for clicks synthesized from Enter or Space; those ripple from
/// the centre of the element.
pub fn click_origin(detail: i32, client_x: i32, client_y: i32) -> Option<PointerInput> {
    (detail != 0).then(|| PointerInput {
        client_x: f64::from(client_x),
        client_y: f64::from(client_y),
    })
}

/// Shared handle to the ripple effect of one mounted element.
///
/// Clones drive the same effect. Timers are chained one at a time: every new ripple restarts
/// the chain and older pending timers become no-ops.
pub struct RippleHandle<S: RippleSurface + 'static = DomRippleSurface> {
    effect: Rc<RefCell<RippleEffect<S, Rc<dyn Clock>>>>,
    generation: Rc<Cell<u64>>,
    interactive: bool,
}

impl<S: RippleSurface + 'static> Clone for RippleHandle<S> {
    fn clone(&self) -> Self {
        Self {
            effect: Rc::clone(&self.effect),
            generation: Rc::clone(&self.generation),
            interactive: self.interactive,
        }
    }
}

impl<S: RippleSurface + 'static> RippleHandle<S> {
    /// Creates an unattached handle timed by `clock`.
    pub fn new(options: RippleOptions, clock: Rc<dyn Clock>) -> Self {
        Self {
            effect: Rc::new(RefCell::new(RippleEffect::new(options, clock))),
            generation: Rc::new(Cell::new(0)),
            interactive: true,
        }
    }

    /// Creates a handle on the host clock. Non-interactive hosts never attach a surface.
    pub fn for_host(options: RippleOptions, host: &HostServices) -> Self {
        Self {
            interactive: host.environment.is_interactive(),
            ..Self::new(options, Rc::clone(&host.clock))
        }
    }

    /// Whether the handle may bind a surface.
    pub fn is_interactive(&self) -> bool {
        self.interactive
    }

    /// Binds the effect to a mounted surface.
    pub fn attach(&self, surface: S) {
        if self.interactive {
            self.effect.borrow_mut().attach(surface);
        }
    }

    /// Removes every ripple and unbinds the surface.
    pub fn detach(&self) {
        self.generation.set(self.generation.get() + 1);
        let _ = self.effect.borrow_mut().detach();
    }

    /// Starts a ripple at surface-relative coordinates; `None` uses the centre.
    pub fn trigger(&self, x: Option<f64>, y: Option<f64>) -> Option<RippleId> {
        let id = self.effect.borrow_mut().trigger(x, y);
        if id.is_some() {
            self.schedule();
        }
        id
    }

    /// Starts a ripple from viewport coordinates.
    pub fn pointer_down(&self, client_x: f64, client_y: f64) -> Option<RippleId> {
        let id = self
            .effect
            .borrow_mut()
            .pointer_down(PointerInput { client_x, client_y });
        if id.is_some() {
            self.schedule();
        }
        id
    }

    /// Starts a ripple for an activation: at the pointer when there is one, centred otherwise.
    pub fn activate(&self, origin: Option<PointerInput>) -> Option<RippleId> {
        match origin {
            Some(input) => self.pointer_down(input.client_x, input.client_y),
            None => self.trigger(None, None),
        }
    }

    /// Enables or disables the effect; disabling removes live ripples.
    pub fn set_enabled(&self, enabled: bool) {
        self.effect.borrow_mut().set_enabled(enabled);
    }

    /// Whether new ripples are accepted.
    pub fn is_enabled(&self) -> bool {
        self.effect.borrow().is_enabled()
    }

    /// Removes every live ripple.
    pub fn clear(&self) {
        self.effect.borrow_mut().clear();
    }

    /// Number of live ripples.
    pub fn active_count(&self) -> usize {
        self.effect.borrow().active_count()
    }

    fn schedule(&self) {
        if let Some((generation, wait)) = self.arm() {
            self.start_timer(generation, wait);
        }
    }

    /// Claims a new timer generation; `None` when no ripple is pending.
    fn arm(&self) -> Option<(u64, u64)> {
        let wait = self.effect.borrow().next_transition_in()?;
        let generation = self.generation.get() + 1;
        self.generation.set(generation);
        Some((generation, wait))
    }

    /// Runs one timer step. Steps from a superseded generation do nothing.
    fn step(&self, generation: u64) -> bool {
        if self.generation.get() != generation {
            return false;
        }
        self.effect.borrow_mut().tick();
        true
    }

    #[cfg(target_arch = "wasm32")]
    fn start_timer(&self, generation: u64, wait: u64) {
        let handle = self.clone();
        let step = move || {
            if handle.step(generation) {
                handle.schedule();
            }
        };
        if wait == 0 {
            request_animation_frame(step);
        } else {
            set_timeout(step, Duration::from_millis(wait));
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn start_timer(&self, _generation: u64, _wait: u64) {}
}

impl RippleHandle<DomRippleSurface> {
    /// Click listener body: ripples at the pointer, or from the centre for keyboard clicks.
    pub fn on_click(&self, ev: &web_sys::MouseEvent) -> Option<RippleId> {
        self.activate(click_origin(ev.detail(), ev.client_x(), ev.client_y()))
    }
}

/// Binds a ripple effect to `node_ref` once the element mounts.
///
/// The effect runs on the installed host clock and only attaches in interactive hosts.
/// `enabled` is tracked reactively but never re-enables an effect whose options say
/// `disabled`. The effect detaches, and every overlay is removed, when the owning reactive
/// scope is cleaned up. Callers start ripples through [`RippleHandle::on_click`] or
/// [`RippleHandle::trigger`].
pub fn use_ripple<T>(
    node_ref: NodeRef<T>,
    options: RippleOptions,
    enabled: MaybeSignal<bool>,
) -> RippleHandle
where
    T: ElementDescriptor + Clone + 'static,
{
    let host = use_woobat().host;
    let base_disabled = options.disabled;
    let handle = RippleHandle::for_host(options, &host);

    let on_mount = handle.clone();
    node_ref.on_load(move |element| {
        let element: web_sys::HtmlElement = (*element.into_any()).clone();
        on_mount.attach(DomRippleSurface::new(element));
    });

    let toggled = handle.clone();
    create_effect(move |_| toggled.set_enabled(!base_disabled && enabled.get()));

    let cleanup = handle.clone();
    on_cleanup(move || cleanup.detach());

    handle
}
