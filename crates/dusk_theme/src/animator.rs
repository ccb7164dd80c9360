//! Spring-driven theme transitions
//!
//! [`ThemeAnimator`] turns the discrete [`Theme`] into a continuous progress
//! value (0.0 = light, 1.0 = dark) and blends the palettes by it:
//!
//! - The theme lives in an explicitly owned [`State`] cell.
//! - The animator subscribes to that cell; every change retargets the
//!   progress spring. Writing the current theme again changes nothing.
//! - The spring lives in an [`AnimationScheduler`] and only moves when the
//!   frame clock ticks it, so tests can step it with fixed deltas.
//! - Colors are derived on demand from the spring's current value, so frames
//!   in mid-flight show partially blended colors.

use crate::chrome::StatusBar;
use crate::palette::Palette;
use crate::style::RenderedStyle;
use crate::theme::Theme;
use dusk_animation::{AnimationScheduler, SharedScheduler, Spring, SpringConfig, SpringId};
use dusk_core::reactive::{State, SubscriptionId};

/// Stiffness of the progress spring. Low on purpose: the transition is meant
/// to be watched.
pub const DEFAULT_STIFFNESS: f32 = 15.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnimatorConfig {
    pub spring: SpringConfig,
    /// Theme the screen opens with
    pub initial: Theme,
}

impl Default for AnimatorConfig {
    fn default() -> Self {
        Self {
            spring: SpringConfig::critically_damped(DEFAULT_STIFFNESS),
            initial: Theme::Light,
        }
    }
}

pub struct ThemeAnimator {
    theme: State<Theme>,
    scheduler: SharedScheduler,
    progress: SpringId,
    retarget: SubscriptionId,
}

impl ThemeAnimator {
    /// Animator with its own scheduler
    pub fn new(config: AnimatorConfig) -> Self {
        Self::with_scheduler(AnimationScheduler::shared(), config)
    }

    /// Animator whose progress spring is ticked by a shared scheduler
    pub fn with_scheduler(scheduler: SharedScheduler, config: AnimatorConfig) -> Self {
        let theme = State::new(config.initial);
        let progress = scheduler.borrow_mut().add_spring(Spring::new(
            config.spring,
            config.initial.target_progress(),
        ));

        let handle = scheduler.clone();
        let retarget = theme.subscribe(move |next: &Theme| {
            let target = next.target_progress();
            tracing::debug!(theme = %next, target, "retargeting theme progress");
            handle
                .borrow_mut()
                .with_spring_mut(progress, |spring| spring.set_target(target));
        });

        Self {
            theme,
            scheduler,
            progress,
            retarget,
        }
    }

    // ========== Theme ==========

    /// Switch to `next`. Returns `false` (and leaves the animation alone) if
    /// `next` is already the current theme.
    pub fn set_theme(&self, next: Theme) -> bool {
        self.theme.set(next)
    }

    /// Flip the theme, returning the new one
    pub fn toggle(&self) -> Theme {
        let next = self.theme().toggle();
        self.set_theme(next);
        next
    }

    pub fn theme(&self) -> Theme {
        self.theme.get()
    }

    /// Handle to the theme cell, for render code that reads it directly
    pub fn theme_state(&self) -> State<Theme> {
        self.theme.clone()
    }

    /// Observe theme changes. Callbacks run after the spring was retargeted.
    pub fn subscribe(&self, callback: impl FnMut(&Theme) + 'static) -> SubscriptionId {
        self.theme.subscribe(callback)
    }

    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        id != self.retarget && self.theme.unsubscribe(id)
    }

    /// Uppercase theme name; follows the discrete theme, not the animation
    pub fn label(&self) -> &'static str {
        self.theme().label()
    }

    pub fn status_bar(&self) -> StatusBar {
        StatusBar::for_theme(self.theme())
    }

    /// Position of the switch (on = dark)
    pub fn switch_value(&self) -> bool {
        self.theme().is_dark()
    }

    // ========== Progress ==========

    /// Current (possibly mid-flight) progress
    pub fn progress(&self) -> f32 {
        self.read_spring(Spring::value)
            .unwrap_or_else(|| self.theme().target_progress())
    }

    /// Where progress is heading
    pub fn target(&self) -> f32 {
        self.read_spring(Spring::target)
            .unwrap_or_else(|| self.theme().target_progress())
    }

    pub fn velocity(&self) -> f32 {
        self.read_spring(Spring::velocity).unwrap_or(0.0)
    }

    pub fn is_settled(&self) -> bool {
        self.read_spring(Spring::is_settled).unwrap_or(true)
    }

    /// Advance the scheduler by `dt` seconds. When the scheduler is shared,
    /// every spring in it moves. Returns `true` while progress is still moving.
    pub fn step(&self, dt: f32) -> bool {
        self.scheduler.borrow_mut().tick(dt);
        let settled = self.is_settled();
        tracing::trace!(progress = self.progress(), settled, "theme frame");
        !settled
    }

    pub fn scheduler(&self) -> &SharedScheduler {
        &self.scheduler
    }

    // ========== Colors ==========

    /// Colors for the current frame.
    ///
    /// Progress is clamped to `[0, 1]`, so a spring configured to overshoot
    /// never produces colors beyond the palette endpoints.
    pub fn current_colors(&self) -> RenderedStyle {
        Self::colors_at(self.progress())
    }

    /// Colors for an arbitrary progress value
    pub fn colors_at(progress: f32) -> RenderedStyle {
        let t = progress.clamp(0.0, 1.0);
        RenderedStyle::lerp(&Palette::light(), &Palette::dark(), t)
    }

    fn read_spring<R>(&self, f: impl FnOnce(&Spring) -> R) -> Option<R> {
        self.scheduler.borrow().get_spring(self.progress).map(f)
    }
}

impl Default for ThemeAnimator {
    fn default() -> Self {
        Self::new(AnimatorConfig::default())
    }
}

impl Drop for ThemeAnimator {
    fn drop(&mut self) {
        self.theme.unsubscribe(self.retarget);
        match self.scheduler.try_borrow_mut() {
            Ok(mut scheduler) => {
                scheduler.remove_spring(self.progress);
            }
            Err(_) => tracing::warn!(
                spring = ?self.progress,
                "scheduler busy while dropping theme animator; progress spring left behind"
            ),
        }
    }
}

impl std::fmt::Debug for ThemeAnimator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThemeAnimator")
            .field("theme", &self.theme())
            .field("progress", &self.progress())
            .field("target", &self.target())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRAME: f32 = 1.0 / 60.0;

    #[test]
    fn test_starts_at_rest_on_initial_theme() {
        let animator = ThemeAnimator::new(AnimatorConfig {
            initial: Theme::Dark,
            ..Default::default()
        });
        assert_eq!(animator.theme(), Theme::Dark);
        assert_eq!(animator.progress(), 1.0);
        assert!(animator.is_settled());
        assert_eq!(animator.current_colors(), RenderedStyle::from(Palette::dark()));
    }

    #[test]
    fn test_set_theme_retargets_without_moving() {
        let animator = ThemeAnimator::default();
        assert!(animator.set_theme(Theme::Dark));
        assert_eq!(animator.target(), 1.0);
        assert_eq!(animator.progress(), 0.0);
        assert!(!animator.is_settled());
    }

    #[test]
    fn test_toggle() {
        let animator = ThemeAnimator::default();
        assert_eq!(animator.toggle(), Theme::Dark);
        assert_eq!(animator.toggle(), Theme::Light);
        assert_eq!(animator.target(), 0.0);
    }

    #[test]
    fn test_step_reports_motion_until_settled() {
        let animator = ThemeAnimator::default();
        assert!(!animator.step(FRAME));

        animator.set_theme(Theme::Dark);
        let mut frames = 0;
        while animator.step(FRAME) {
            frames += 1;
            assert!(frames < 1_000, "never settled");
        }
        // a slow spring: well over a second of visible motion
        assert!(frames > 60);
        assert_eq!(animator.progress(), 1.0);
    }

    #[test]
    fn test_colors_clamp_overshoot() {
        assert_eq!(
            ThemeAnimator::colors_at(1.2),
            RenderedStyle::from(Palette::dark())
        );
        assert_eq!(
            ThemeAnimator::colors_at(-0.3),
            RenderedStyle::from(Palette::light())
        );
    }

    #[test]
    fn test_cannot_unsubscribe_retarget() {
        let animator = ThemeAnimator::default();
        let retarget = animator.retarget;
        assert!(!animator.unsubscribe(retarget));
        animator.set_theme(Theme::Dark);
        assert_eq!(animator.target(), 1.0);
    }

    #[test]
    fn test_drop_while_scheduler_borrowed_leaves_spring() {
        let scheduler = AnimationScheduler::shared();
        let animator =
            ThemeAnimator::with_scheduler(scheduler.clone(), AnimatorConfig::default());
        let progress = animator.progress;

        {
            let _busy = scheduler.borrow();
            drop(animator);
        }

        // nothing panicked; the spring is still there to be reclaimed by hand
        assert_eq!(scheduler.borrow().spring_count(), 1);
        assert!(scheduler.borrow_mut().remove_spring(progress).is_some());
    }

    #[test]
    fn test_drop_releases_spring() {
        let scheduler = AnimationScheduler::shared();
        let animator =
            ThemeAnimator::with_scheduler(scheduler.clone(), AnimatorConfig::default());
        assert_eq!(scheduler.borrow().spring_count(), 1);
        drop(animator);
        assert_eq!(scheduler.borrow().spring_count(), 0);
    }
}
