/// Repeating timer driven by the host's frame clock.
///
/// The host owns the event loop and reports elapsed milliseconds; the timer
/// never fires on its own. Periods missed during a long frame coalesce into a
/// single fire, the way a browser interval does after a stall.
#[derive(Debug, Clone, Copy)]
pub struct PollTimer {
    period_ms: u32,
    elapsed_ms: f64,
    armed: bool,
}

impl PollTimer {
    pub fn new(period_ms: u32) -> Self {
        Self {
            period_ms: period_ms.max(1),
            elapsed_ms: 0.0,
            armed: false,
        }
    }

    pub fn period_ms(&self) -> u32 {
        self.period_ms
    }

    pub fn is_armed(&self) -> bool {
        self.armed
    }

    /// Start a fresh period. Re-arming an armed timer restarts the period.
    pub fn arm(&mut self) {
        self.armed = true;
        self.elapsed_ms = 0.0;
    }

    /// Stop firing. Returns whether the timer was armed; cancelling an idle
    /// timer is a no-op.
    pub fn cancel(&mut self) -> bool {
        let was_armed = self.armed;
        self.armed = false;
        self.elapsed_ms = 0.0;
        was_armed
    }

    /// Returns true when at least one period has elapsed since the last fire.
    /// Frame deltas are fractional; negative or non-finite deltas count as 0.
    pub fn advance(&mut self, elapsed_ms: f64) -> bool {
        if !self.armed {
            return false;
        }
        if elapsed_ms.is_finite() && elapsed_ms > 0.0 {
            self.elapsed_ms += elapsed_ms;
        }
        let period = f64::from(self.period_ms);
        if self.elapsed_ms >= period {
            self.elapsed_ms %= period;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disarmed_timer_never_fires() {
        let mut timer = PollTimer::new(100);
        assert!(!timer.advance(1_000.0));
    }

    #[test]
    fn test_fires_once_per_period() {
        let mut timer = PollTimer::new(100);
        timer.arm();
        let fires = (0..60).filter(|_| timer.advance(16.0)).count();
        // 960 ms of frames at 16 ms
        assert_eq!(fires, 9);
    }

    #[test]
    fn test_fractional_frames_accumulate() {
        let mut timer = PollTimer::new(100);
        timer.arm();
        // six 60 Hz frames cover 100.2 ms
        let fires = (0..6).filter(|_| timer.advance(16.7)).count();
        assert_eq!(fires, 1);
    }

    #[test]
    fn test_bad_deltas_are_ignored() {
        let mut timer = PollTimer::new(100);
        timer.arm();
        assert!(!timer.advance(f64::NAN));
        assert!(!timer.advance(-500.0));
        assert!(!timer.advance(f64::INFINITY));
        assert!(timer.advance(100.0));
    }

    #[test]
    fn test_long_frame_coalesces() {
        let mut timer = PollTimer::new(100);
        timer.arm();
        assert!(timer.advance(350.0));
        // remainder of 50 ms carries over
        assert!(!timer.advance(40.0));
        assert!(timer.advance(10.0));
    }

    #[test]
    fn test_cancel_is_idempotent() {
        let mut timer = PollTimer::new(100);
        timer.arm();
        assert!(timer.cancel());
        assert!(!timer.cancel());
        assert!(!timer.is_armed());
        assert!(!timer.advance(100.0));
    }

    #[test]
    fn test_rearm_restarts_period() {
        let mut timer = PollTimer::new(100);
        timer.arm();
        assert!(!timer.advance(90.0));
        timer.arm();
        assert!(!timer.advance(90.0));
        assert!(timer.advance(10.0));
    }
}
