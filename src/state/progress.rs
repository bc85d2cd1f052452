//! Progress bar animation state

use std::time::{Duration, Instant};

/// Eases the progress bar from one step's ratio to the next
#[derive(Debug, Clone)]
pub struct ProgressAnimation {
    from: f64,
    to: f64,
    started: Instant,
}

impl ProgressAnimation {
    /// Duration of one transition
    const DURATION: Duration = Duration::from_millis(300);

    /// Start settled at `ratio`
    pub fn new(ratio: f64) -> Self {
        Self {
            from: ratio,
            to: ratio,
            started: Instant::now()
                .checked_sub(Self::DURATION)
                .unwrap_or_else(Instant::now),
        }
    }

    /// Retarget the bar. The animation restarts from wherever it is now.
    pub fn set_target(&mut self, ratio: f64) {
        if (ratio - self.to).abs() < f64::EPSILON {
            return;
        }
        self.from = self.ratio();
        self.to = ratio;
        self.started = Instant::now();
    }

    pub fn is_animating(&self) -> bool {
        self.started.elapsed() < Self::DURATION
    }

    /// Current bar ratio
    pub fn ratio(&self) -> f64 {
        self.ratio_at(self.started.elapsed())
    }

    fn ratio_at(&self, elapsed: Duration) -> f64 {
        let progress = (elapsed.as_secs_f32() / Self::DURATION.as_secs_f32()).clamp(0.0, 1.0);
        // Cubic ease-out, same curve as the other UI transitions
        let eased = f64::from(simple_easing::cubic_out(progress));
        self.from + (self.to - self.from) * eased
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_settled() {
        let anim = ProgressAnimation::new(1.0 / 3.0);
        assert!(!anim.is_animating());
        assert!((anim.ratio() - 1.0 / 3.0).abs() < 1e-6);
    }

    #[test]
    fn test_ratio_endpoints() {
        let mut anim = ProgressAnimation::new(0.0);
        anim.set_target(1.0);
        assert!(anim.ratio_at(Duration::ZERO).abs() < 1e-6);
        assert!((anim.ratio_at(ProgressAnimation::DURATION) - 1.0).abs() < 1e-6);
        assert!((anim.ratio_at(Duration::from_secs(5)) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_ratio_is_monotonic_going_down() {
        let mut anim = ProgressAnimation::new(1.0);
        anim.set_target(0.0);
        let mid = anim.ratio_at(Duration::from_millis(150));
        assert!(mid < 1.0 && mid > 0.0);
        assert!(anim.ratio_at(Duration::from_millis(250)) <= mid);
    }

    #[test]
    fn test_same_target_does_not_restart() {
        let mut anim = ProgressAnimation::new(0.5);
        anim.set_target(0.5);
        assert!(!anim.is_animating());
        assert!((anim.to - 0.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_new_target_starts_animation() {
        let mut anim = ProgressAnimation::new(0.5);
        anim.set_target(1.0);
        assert!(anim.is_animating());
        assert!((anim.to - 1.0).abs() < f64::EPSILON);
    }
}
