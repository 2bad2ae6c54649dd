//! Click ripple feedback.
//!
//! [`RippleEffect`] owns every live ripple on one surface and advances them against an injected
//! [`Clock`]. It never touches the DOM: a [`RippleSurface`] implementation mounts and mutates the
//! overlays, and whoever drives the effect calls [`RippleEffect::tick`] whenever
//! [`RippleEffect::next_transition_in`] says a phase change is due.

mod geometry;
mod instance;

use serde::{Deserialize, Serialize};
use woobat_host::Clock;

pub use geometry::{max_corner_distance, ripple_geometry, ripple_origin, RippleGeometry, SurfaceSize};
pub use instance::{RippleId, RipplePhase};

use instance::RippleInstance;

/// Class carried by every ripple overlay element.
pub const RIPPLE_CLASS: &str = "wb-ripple";

/// Easing shared by the expand and fade transitions.
pub const RIPPLE_EASING: &str = "cubic-bezier(0.4, 0, 0.2, 1)";

/// Default custom properties for ripple overlays, with a dimmer ripple in dark mode.
pub const RIPPLE_CSS: &str = r#"
.wb-ripple {
  --wb-ripple-color: currentColor;
  --wb-ripple-opacity: 0.3;
  --wb-ripple-duration: 600ms;
}

[data-wb-theme="dark"] .wb-ripple {
  --wb-ripple-opacity: 0.2;
}
"#;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
/// Ripple configuration.
pub struct RippleOptions {
    /// Ripple fill color.
    pub color: String,
    /// Full animation length in milliseconds.
    #[serde(rename = "duration")]
    pub duration_ms: u64,
    /// Starting opacity, `0.0..=1.0`.
    pub opacity: f64,
    /// Always start from the surface centre.
    pub centered: bool,
    /// Diameter as a percentage of the larger surface side instead of corner coverage.
    pub radius: Option<f64>,
    /// Start disabled.
    pub disabled: bool,
}

impl Default for RippleOptions {
    fn default() -> Self {
        Self {
            color: "currentColor".to_string(),
            duration_ms: 600,
            opacity: 0.3,
            centered: false,
            radius: None,
            disabled: false,
        }
    }
}

impl RippleOptions {
    /// Returns the options with opacity clamped and an empty color replaced by the default.
    pub fn normalized(mut self) -> Self {
        self.opacity = if self.opacity.is_finite() {
            self.opacity.clamp(0.0, 1.0)
        } else {
            Self::default().opacity
        };
        if self.color.trim().is_empty() {
            self.color = Self::default().color;
        }
        self
    }

    /// Visual parameters handed to the surface.
    pub fn style(&self) -> RippleStyle {
        RippleStyle {
            color: self.color.clone(),
            opacity: self.opacity,
            duration_ms: self.duration_ms,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
/// Visual parameters of a ripple overlay.
pub struct RippleStyle {
    /// Fill color.
    pub color: String,
    /// Starting opacity.
    pub opacity: f64,
    /// Transition duration in milliseconds.
    pub duration_ms: u64,
}

impl RippleStyle {
    /// CSS `transition` value animating transform and opacity.
    pub fn transition(&self) -> String {
        format!(
            "transform {ms}ms {RIPPLE_EASING}, opacity {ms}ms {RIPPLE_EASING}",
            ms = self.duration_ms
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
/// Pointer-down position in client (viewport) coordinates.
pub struct PointerInput {
    /// Viewport x.
    pub client_x: f64,
    /// Viewport y.
    pub client_y: f64,
}

/// Element a ripple effect draws into.
pub trait RippleSurface {
    /// Handle to one mounted ripple overlay.
    type Overlay;

    /// Rendered size, or `None` when the surface is not mounted.
    fn size(&self) -> Option<SurfaceSize>;

    /// Viewport position of the surface's top-left corner.
    fn client_origin(&self) -> (f64, f64) {
        (0.0, 0.0)
    }

    /// Makes the surface a positioned, clipping container.
    fn ensure_containment(&self);

    /// Mounts a scale-0 overlay. `None` means the overlay could not be created.
    fn mount_overlay(&self, geometry: RippleGeometry, style: &RippleStyle) -> Option<Self::Overlay>;

    /// Starts the scale-1 transition.
    fn expand_overlay(&self, overlay: &Self::Overlay, style: &RippleStyle);

    /// Starts the opacity-to-zero transition.
    fn fade_overlay(&self, overlay: &Self::Overlay, style: &RippleStyle);

    /// Detaches the overlay.
    fn remove_overlay(&self, overlay: Self::Overlay);
}

/// Ripple controller for one surface.
pub struct RippleEffect<S: RippleSurface, C: Clock> {
    options: RippleOptions,
    clock: C,
    surface: Option<S>,
    instances: Vec<RippleInstance<S::Overlay>>,
    enabled: bool,
    next_id: u64,
}

impl<S: RippleSurface, C: Clock> RippleEffect<S, C> {
    /// Creates an unattached effect.
    pub fn new(options: RippleOptions, clock: C) -> Self {
        let options = options.normalized();
        Self {
            enabled: !options.disabled,
            options,
            clock,
            surface: None,
            instances: Vec::new(),
            next_id: 0,
        }
    }

    /// Options in effect.
    pub fn options(&self) -> &RippleOptions {
        &self.options
    }

    /// Whether new ripples are accepted.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Whether a surface is bound.
    pub fn is_attached(&self) -> bool {
        self.surface.is_some()
    }

    /// Bound surface.
    pub fn surface(&self) -> Option<&S> {
        self.surface.as_ref()
    }

    /// Number of live ripples.
    pub fn active_count(&self) -> usize {
        self.instances.len()
    }

    /// Phase of a live ripple.
    pub fn phase_of(&self, id: RippleId) -> Option<RipplePhase> {
        self.instances
            .iter()
            .find(|instance| instance.id == id)
            .map(|instance| instance.phase)
    }

    /// Geometry of a live ripple.
    pub fn geometry_of(&self, id: RippleId) -> Option<RippleGeometry> {
        self.instances
            .iter()
            .find(|instance| instance.id == id)
            .map(|instance| instance.geometry)
    }

    /// Binds `surface`, replacing (and clearing) any previous one.
    pub fn attach(&mut self, surface: S) {
        self.detach();
        surface.ensure_containment();
        self.surface = Some(surface);
    }

    /// Clears every ripple and unbinds the surface.
    pub fn detach(&mut self) -> Option<S> {
        self.clear();
        self.surface.take()
    }

    /// Starts a ripple at surface-relative coordinates; missing coordinates use the centre.
    ///
    /// Returns `None` without side effects when disabled, unattached, or when the surface has
    /// no measurable area.
    pub fn trigger(&mut self, x: Option<f64>, y: Option<f64>) -> Option<RippleId> {
        if !self.enabled {
            return None;
        }
        let surface = self.surface.as_ref()?;
        let size = surface.size().filter(|size| !size.is_empty())?;
        surface.ensure_containment();

        let geometry = ripple_geometry(size, x, y, self.options.radius);
        let overlay = surface.mount_overlay(geometry, &self.options.style())?;

        self.next_id += 1;
        let id = RippleId(self.next_id);
        self.instances
            .push(RippleInstance::new(id, geometry, overlay, self.clock.now_ms()));
        Some(id)
    }

    /// Pointer-down entry point; converts client coordinates unless the effect is centered.
    pub fn pointer_down(&mut self, input: PointerInput) -> Option<RippleId> {
        if !self.enabled {
            return None;
        }
        if self.options.centered {
            return self.trigger(None, None);
        }
        let (left, top) = self.surface.as_ref()?.client_origin();
        self.trigger(Some(input.client_x - left), Some(input.client_y - top))
    }

    /// Enables or disables the effect. Disabling clears every live ripple.
    ///
    /// Effects built with [`RippleOptions::disabled`] stay disabled.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled && !self.options.disabled;
        if !self.enabled {
            self.clear();
        }
    }

    /// Removes every live ripple regardless of phase.
    pub fn clear(&mut self) {
        for mut instance in self.instances.drain(..) {
            if let (Some(surface), Some(overlay)) = (self.surface.as_ref(), instance.overlay.take())
            {
                surface.remove_overlay(overlay);
            }
        }
    }

    /// Advances every ripple to the phase the clock says it should be in.
    pub fn tick(&mut self) {
        let Some(surface) = self.surface.as_ref() else {
            self.instances.clear();
            return;
        };
        let now = self.clock.now_ms();
        let style = self.options.style();

        for instance in &mut self.instances {
            let Some(overlay) = instance.overlay.as_ref() else {
                instance.phase = RipplePhase::Removed;
                continue;
            };
            if !instance.expanded {
                surface.expand_overlay(overlay, &style);
                instance.expanded = true;
            }
            let target = RipplePhase::at(instance.elapsed(now), style.duration_ms);
            if target >= RipplePhase::Fading && instance.phase == RipplePhase::Growing {
                surface.fade_overlay(overlay, &style);
                instance.phase = RipplePhase::Fading;
            }
            if target == RipplePhase::Removed {
                if let Some(overlay) = instance.overlay.take() {
                    surface.remove_overlay(overlay);
                }
                instance.phase = RipplePhase::Removed;
            }
        }

        self.instances
            .retain(|instance| instance.phase != RipplePhase::Removed);
    }

    /// Milliseconds until the next phase change of any ripple, `None` when idle.
    pub fn next_transition_in(&self) -> Option<u64> {
        let now = self.clock.now_ms();
        self.instances
            .iter()
            .map(|instance| instance.next_transition_in(now, self.options.duration_ms))
            .min()
    }
}

impl<S: RippleSurface, C: Clock> Drop for RippleEffect<S, C> {
    fn drop(&mut self) {
        self.clear();
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::RefCell, rc::Rc};

    use pretty_assertions::assert_eq;
    use woobat_host::ManualClock;

    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    enum Op {
        Contain,
        Mount(u32, RippleGeometry),
        Expand(u32),
        Fade(u32),
        Remove(u32),
    }

    #[derive(Clone, Default)]
    struct FakeSurface {
        size: Option<SurfaceSize>,
        origin: (f64, f64),
        ops: Rc<RefCell<Vec<Op>>>,
        next: Rc<RefCell<u32>>,
    }

    impl FakeSurface {
        fn sized(width: f64, height: f64) -> Self {
            Self {
                size: Some(SurfaceSize::new(width, height)),
                ..Self::default()
            }
        }

        fn mounted(&self) -> usize {
            let ops = self.ops.borrow();
            let mounts = ops.iter().filter(|op| matches!(op, Op::Mount(..))).count();
            let removes = ops.iter().filter(|op| matches!(op, Op::Remove(_))).count();
            mounts - removes
        }

        fn ops(&self) -> Vec<Op> {
            self.ops.borrow().clone()
        }
    }

    impl RippleSurface for FakeSurface {
        type Overlay = u32;

        fn size(&self) -> Option<SurfaceSize> {
            self.size
        }

        fn client_origin(&self) -> (f64, f64) {
            self.origin
        }

        fn ensure_containment(&self) {
            self.ops.borrow_mut().push(Op::Contain);
        }

        fn mount_overlay(&self, geometry: RippleGeometry, _style: &RippleStyle) -> Option<u32> {
            let mut next = self.next.borrow_mut();
            *next += 1;
            self.ops.borrow_mut().push(Op::Mount(*next, geometry));
            Some(*next)
        }

        fn expand_overlay(&self, overlay: &u32, _style: &RippleStyle) {
            self.ops.borrow_mut().push(Op::Expand(*overlay));
        }

        fn fade_overlay(&self, overlay: &u32, _style: &RippleStyle) {
            self.ops.borrow_mut().push(Op::Fade(*overlay));
        }

        fn remove_overlay(&self, overlay: u32) {
            self.ops.borrow_mut().push(Op::Remove(overlay));
        }
    }

    fn attached(options: RippleOptions) -> (RippleEffect<FakeSurface, ManualClock>, FakeSurface, ManualClock) {
        let clock = ManualClock::starting_at(10_000);
        let surface = FakeSurface::sized(100.0, 40.0);
        let mut effect = RippleEffect::new(options, clock.clone());
        effect.attach(surface.clone());
        (effect, surface, clock)
    }

    #[test]
    fn lifecycle_grows_fades_and_removes() {
        let (mut effect, surface, clock) = attached(RippleOptions::default());
        let id = effect.trigger(Some(10.0), Some(10.0)).expect("ripple");
        assert_eq!(effect.phase_of(id), Some(RipplePhase::Growing));
        assert_eq!(effect.next_transition_in(), Some(0));

        effect.tick();
        assert_eq!(effect.next_transition_in(), Some(300));

        clock.advance(300);
        effect.tick();
        assert_eq!(effect.phase_of(id), Some(RipplePhase::Fading));
        assert_eq!(effect.next_transition_in(), Some(300));

        clock.advance(300);
        effect.tick();
        assert_eq!(effect.phase_of(id), None);
        assert_eq!(effect.active_count(), 0);
        assert_eq!(effect.next_transition_in(), None);

        let ops = surface.ops();
        assert_eq!(&ops[ops.len() - 3..], &[Op::Expand(1), Op::Fade(1), Op::Remove(1)]);
    }

    #[test]
    fn late_tick_jumps_straight_to_removal() {
        let (mut effect, surface, clock) = attached(RippleOptions::default());
        effect.trigger(None, None);
        clock.advance(5_000);
        effect.tick();
        assert_eq!(effect.active_count(), 0);
        assert!(surface.ops().ends_with(&[Op::Expand(1), Op::Fade(1), Op::Remove(1)]));
    }

    #[test]
    fn instances_are_independent() {
        let (mut effect, surface, clock) = attached(RippleOptions::default());
        let first = effect.trigger(None, None).expect("first");
        clock.advance(400);
        let second = effect.trigger(Some(0.0), Some(0.0)).expect("second");
        effect.tick();
        assert_eq!(effect.phase_of(first), Some(RipplePhase::Fading));
        assert_eq!(effect.phase_of(second), Some(RipplePhase::Growing));
        assert_eq!(surface.mounted(), 2);

        clock.advance(200);
        effect.tick();
        assert_eq!(effect.phase_of(first), None);
        assert_eq!(effect.phase_of(second), Some(RipplePhase::Growing));
        assert_eq!(surface.mounted(), 1);
    }

    #[test]
    fn disabled_option_mounts_nothing() {
        let (mut effect, surface, _) = attached(RippleOptions {
            disabled: true,
            ..RippleOptions::default()
        });
        assert_eq!(effect.trigger(None, None), None);
        assert_eq!(
            effect.pointer_down(PointerInput {
                client_x: 5.0,
                client_y: 5.0
            }),
            None
        );
        assert_eq!(surface.mounted(), 0);

        effect.set_enabled(true);
        assert!(!effect.is_enabled());
        assert_eq!(effect.trigger(None, None), None);
        assert_eq!(surface.mounted(), 0);
    }

    #[test]
    fn disabling_clears_live_ripples() {
        let (mut effect, surface, _) = attached(RippleOptions::default());
        effect.trigger(None, None);
        effect.trigger(Some(1.0), Some(1.0));
        effect.tick();
        effect.set_enabled(false);
        assert_eq!(effect.active_count(), 0);
        assert_eq!(surface.mounted(), 0);
        assert_eq!(effect.trigger(None, None), None);

        effect.set_enabled(true);
        assert!(effect.trigger(None, None).is_some());
    }

    #[test]
    fn unattached_or_unmeasured_surfaces_are_ignored() {
        let mut effect: RippleEffect<FakeSurface, ManualClock> =
            RippleEffect::new(RippleOptions::default(), ManualClock::default());
        assert_eq!(effect.trigger(None, None), None);

        effect.attach(FakeSurface::default());
        assert_eq!(effect.trigger(None, None), None);
        effect.tick();
        assert_eq!(effect.next_transition_in(), None);
    }

    #[test]
    fn pointer_down_uses_surface_relative_coordinates() {
        let clock = ManualClock::default();
        let surface = FakeSurface {
            origin: (200.0, 100.0),
            ..FakeSurface::sized(100.0, 40.0)
        };
        let mut effect = RippleEffect::new(RippleOptions::default(), clock);
        effect.attach(surface);
        let id = effect
            .pointer_down(PointerInput {
                client_x: 210.0,
                client_y: 120.0,
            })
            .expect("ripple");
        let geometry = effect.geometry_of(id).expect("geometry");
        assert_eq!((geometry.x, geometry.y), (10.0, 20.0));
    }

    #[test]
    fn centered_ripples_ignore_pointer_position() {
        let (mut effect, _, _) = attached(RippleOptions {
            centered: true,
            ..RippleOptions::default()
        });
        let id = effect
            .pointer_down(PointerInput {
                client_x: 3.0,
                client_y: 3.0,
            })
            .expect("ripple");
        let geometry = effect.geometry_of(id).expect("geometry");
        assert_eq!((geometry.x, geometry.y), (50.0, 20.0));
    }

    #[test]
    fn detach_removes_overlays_and_unbinds() {
        let (mut effect, surface, _) = attached(RippleOptions::default());
        effect.trigger(None, None);
        assert!(effect.detach().is_some());
        assert!(!effect.is_attached());
        assert_eq!(surface.mounted(), 0);
        assert_eq!(effect.trigger(None, None), None);
    }

    #[test]
    fn options_deserialize_with_defaults_and_clamp() {
        let options: RippleOptions =
            serde_json::from_str(r#"{ "duration": 400, "opacity": 4.0 }"#).expect("options");
        let effect: RippleEffect<FakeSurface, ManualClock> =
            RippleEffect::new(options, ManualClock::default());
        assert_eq!(effect.options().duration_ms, 400);
        assert_eq!(effect.options().opacity, 1.0);
        assert_eq!(effect.options().color, "currentColor");
        assert_eq!(
            effect.options().style().transition(),
            "transform 400ms cubic-bezier(0.4, 0, 0.2, 1), opacity 400ms cubic-bezier(0.4, 0, 0.2, 1)"
        );
    }
}
