use std::time::{Duration, Instant};

use crate::transitions::{Easing, TransitionConfig};

/// A time-driven interpolation of the stack offset towards a resolved anchor.
///
/// The animation holds no clock of its own; callers pass the current
/// [`Instant`] so the same sequence of frames always produces the same
/// offsets.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SettleAnimation {
    from: f32,
    to: f32,
    start: Instant,
    duration: Duration,
    easing: Easing,
}

impl SettleAnimation {
    pub fn new(from: f32, to: f32, start: Instant, config: TransitionConfig) -> Self {
        Self {
            from,
            to,
            start,
            duration: config.duration,
            easing: config.easing,
        }
    }

    /// Offset the animation is heading to.
    pub fn target(&self) -> f32 {
        self.to
    }

    /// Offset the animation started from.
    pub fn origin(&self) -> f32 {
        self.from
    }

    /// Linear progress through the animation, in `0.0..=1.0`.
    pub fn progress(&self, now: Instant) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(self.start);
        (elapsed.as_secs_f32() / self.duration.as_secs_f32()).min(1.0)
    }

    pub fn is_finished(&self, now: Instant) -> bool {
        self.progress(now) >= 1.0
    }

    /// Interpolated offset at `now`. Returns the exact target once finished.
    pub fn value_at(&self, now: Instant) -> f32 {
        let progress = self.progress(now);
        if progress >= 1.0 {
            return self.to;
        }
        lerp(self.from, self.to, self.easing.apply(progress))
    }
}

/// Linear interpolation for offsets.
fn lerp(from: f32, to: f32, t: f32) -> f32 {
    from + (to - from) * t
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_duration_lands_immediately() {
        let start = Instant::now();
        let anim = SettleAnimation::new(-10.0, -50.0, start, TransitionConfig::instant());
        assert!(anim.is_finished(start));
        assert_eq!(anim.value_at(start), -50.0);
    }

    #[test]
    fn linear_midpoint() {
        let start = Instant::now();
        let config = TransitionConfig::new(Duration::from_millis(100), Easing::Linear);
        let anim = SettleAnimation::new(0.0, -100.0, start, config);
        let mid = anim.value_at(start + Duration::from_millis(50));
        assert!((mid + 50.0).abs() < 0.5);
    }
}
