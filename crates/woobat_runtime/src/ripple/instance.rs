use super::geometry::RippleGeometry;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
/// Identifier of one ripple within its [`super::RippleEffect`].
pub struct RippleId(pub(crate) u64);

impl RippleId {
    /// Raw sequence number.
    pub const fn get(self) -> u64 {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
/// Lifecycle phase of a ripple. Phases only move forward.
pub enum RipplePhase {
    /// Expanding from scale 0 to scale 1.
    Growing,
    /// Opacity transitioning to zero.
    Fading,
    /// Overlay detached; the instance is about to be dropped.
    Removed,
}

impl RipplePhase {
    /// Phase an instance should be in after `elapsed_ms` of a `duration_ms` animation.
    pub const fn at(elapsed_ms: u64, duration_ms: u64) -> Self {
        if elapsed_ms >= duration_ms {
            Self::Removed
        } else if elapsed_ms.saturating_mul(2) >= duration_ms {
            Self::Fading
        } else {
            Self::Growing
        }
    }
}

#[derive(Debug)]
pub(crate) struct RippleInstance<O> {
    pub(crate) id: RippleId,
    pub(crate) geometry: RippleGeometry,
    pub(crate) overlay: Option<O>,
    pub(crate) created_at_ms: u64,
    pub(crate) phase: RipplePhase,
    pub(crate) expanded: bool,
}

impl<O> RippleInstance<O> {
    pub(crate) fn new(id: RippleId, geometry: RippleGeometry, overlay: O, now_ms: u64) -> Self {
        Self {
            id,
            geometry,
            overlay: Some(overlay),
            created_at_ms: now_ms,
            phase: RipplePhase::Growing,
            expanded: false,
        }
    }

    pub(crate) fn elapsed(&self, now_ms: u64) -> u64 {
        now_ms.saturating_sub(self.created_at_ms)
    }

    /// Milliseconds until this instance changes phase, `0` when a change is already due.
    pub(crate) fn next_transition_in(&self, now_ms: u64, duration_ms: u64) -> u64 {
        if !self.expanded {
            return 0;
        }
        let elapsed = self.elapsed(now_ms);
        let boundary = match self.phase {
            RipplePhase::Growing => duration_ms.div_ceil(2),
            RipplePhase::Fading => duration_ms,
            RipplePhase::Removed => return 0,
        };
        boundary.saturating_sub(elapsed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phase_boundaries_follow_the_half_duration_split() {
        assert_eq!(RipplePhase::at(0, 600), RipplePhase::Growing);
        assert_eq!(RipplePhase::at(299, 600), RipplePhase::Growing);
        assert_eq!(RipplePhase::at(300, 600), RipplePhase::Fading);
        assert_eq!(RipplePhase::at(599, 600), RipplePhase::Fading);
        assert_eq!(RipplePhase::at(600, 600), RipplePhase::Removed);
        assert_eq!(RipplePhase::at(0, 0), RipplePhase::Removed);
    }

    #[test]
    fn odd_durations_never_report_an_early_fade() {
        let geometry = RippleGeometry {
            x: 0.0,
            y: 0.0,
            diameter: 1.0,
        };
        let mut instance = RippleInstance::new(RippleId(1), geometry, (), 100);
        assert_eq!(instance.next_transition_in(100, 401), 0);
        instance.expanded = true;
        assert_eq!(instance.next_transition_in(100, 401), 201);
        assert_eq!(RipplePhase::at(201, 401), RipplePhase::Fading);
        assert_eq!(RipplePhase::at(200, 401), RipplePhase::Growing);
    }
}
