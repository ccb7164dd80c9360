//! Animation scheduler
//!
//! Owns every active spring and advances them together once per frame.
//! Time is supplied by the caller, so the same scheduler runs under a
//! platform frame clock or a headless one.

use crate::spring::Spring;
use slotmap::{new_key_type, SlotMap};
use std::cell::RefCell;
use std::rc::Rc;

new_key_type! {
    pub struct SpringId;
}

/// Scheduler shared between the frame loop and the values it animates
pub type SharedScheduler = Rc<RefCell<AnimationScheduler>>;

/// The animation scheduler that ticks all active animations
pub struct AnimationScheduler {
    springs: SlotMap<SpringId, Spring>,
    /// Total time advanced, in seconds
    elapsed: f64,
    frame_count: u64,
}

impl AnimationScheduler {
    pub fn new() -> Self {
        Self {
            springs: SlotMap::with_key(),
            elapsed: 0.0,
            frame_count: 0,
        }
    }

    /// A new scheduler behind a shared handle
    pub fn shared() -> SharedScheduler {
        Rc::new(RefCell::new(Self::new()))
    }

    pub fn add_spring(&mut self, spring: Spring) -> SpringId {
        self.springs.insert(spring)
    }

    pub fn get_spring(&self, id: SpringId) -> Option<&Spring> {
        self.springs.get(id)
    }

    pub fn get_spring_mut(&mut self, id: SpringId) -> Option<&mut Spring> {
        self.springs.get_mut(id)
    }

    /// Run `f` against a spring if it still exists
    pub fn with_spring_mut<R>(&mut self, id: SpringId, f: impl FnOnce(&mut Spring) -> R) -> Option<R> {
        self.springs.get_mut(id).map(f)
    }

    pub fn remove_spring(&mut self, id: SpringId) -> Option<Spring> {
        self.springs.remove(id)
    }

    /// Advance every spring by `dt` seconds
    pub fn tick(&mut self, dt: f32) {
        if dt <= 0.0 || !dt.is_finite() {
            return;
        }

        self.elapsed += dt as f64;
        self.frame_count += 1;

        for (_, spring) in self.springs.iter_mut() {
            spring.step(dt);
        }

        tracing::trace!(
            frame = self.frame_count,
            active = self.active_count(),
            "animation tick"
        );
    }

    /// Check if any animations are still active
    pub fn has_active_animations(&self) -> bool {
        self.springs.iter().any(|(_, s)| !s.is_settled())
    }

    /// Number of springs that have not come to rest
    pub fn active_count(&self) -> usize {
        self.springs.iter().filter(|(_, s)| !s.is_settled()).count()
    }

    /// Iterate over all springs (immutable)
    pub fn springs_iter(&self) -> impl Iterator<Item = (SpringId, &Spring)> {
        self.springs.iter()
    }

    /// Get the number of springs in the scheduler
    pub fn spring_count(&self) -> usize {
        self.springs.len()
    }

    /// Seconds advanced through [`tick`](Self::tick)
    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }
}

impl Default for AnimationScheduler {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spring::SpringConfig;

    #[test]
    fn test_springs_at_rest_are_inactive() {
        let mut scheduler = AnimationScheduler::new();
        scheduler.add_spring(Spring::new(SpringConfig::gentle(), 0.0));
        scheduler.add_spring(Spring::new(SpringConfig::stiff(), 1.0));
        assert_eq!(scheduler.spring_count(), 2);
        assert!(!scheduler.has_active_animations());
    }

    #[test]
    fn test_tick_advances_all_springs() {
        let mut scheduler = AnimationScheduler::new();
        let a = scheduler.add_spring(Spring::new(SpringConfig::snappy(), 0.0));
        let b = scheduler.add_spring(Spring::new(SpringConfig::gentle(), 1.0));

        scheduler.with_spring_mut(a, |s| s.set_target(1.0));
        scheduler.with_spring_mut(b, |s| s.set_target(0.5));
        assert_eq!(scheduler.active_count(), 2);

        for _ in 0..240 {
            scheduler.tick(1.0 / 60.0);
        }

        assert!(!scheduler.has_active_animations());
        assert_eq!(scheduler.get_spring(a).map(Spring::value), Some(1.0));
        assert_eq!(scheduler.get_spring(b).map(Spring::value), Some(0.5));
        assert_eq!(scheduler.frame_count(), 240);
        assert!((scheduler.elapsed() - 4.0).abs() < 1e-3);
    }

    #[test]
    fn test_removed_spring_is_gone() {
        let mut scheduler = AnimationScheduler::new();
        let id = scheduler.add_spring(Spring::new(SpringConfig::gentle(), 0.0));
        assert!(scheduler.remove_spring(id).is_some());
        assert!(scheduler.get_spring(id).is_none());
        assert_eq!(scheduler.with_spring_mut(id, |s| s.set_target(1.0)), None);
    }

    #[test]
    fn test_zero_dt_does_not_count_as_frame() {
        let mut scheduler = AnimationScheduler::new();
        scheduler.tick(0.0);
        assert_eq!(scheduler.frame_count(), 0);
    }
}
