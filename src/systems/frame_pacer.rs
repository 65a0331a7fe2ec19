//! Frame pacing
//!
//! The visualization steps once per frame rather than per elapsed second, so
//! frames are released on wall-clock deadlines at the target rate.

use std::time::{Duration, Instant};

/// Releases frames at a fixed rate
#[derive(Clone, Debug)]
pub struct FramePacer {
    frame_duration: Duration,
    next_frame: Instant,
}

impl FramePacer {
    /// Pacer whose first frame is due immediately
    pub fn new(frame_duration: Duration, now: Instant) -> Self {
        Self {
            frame_duration: frame_duration.max(Duration::from_millis(1)),
            next_frame: now,
        }
    }

    pub fn frame_duration(&self) -> Duration {
        self.frame_duration
    }

    /// Whether the next frame is due
    pub fn is_due(&self, now: Instant) -> bool {
        now >= self.next_frame
    }

    /// When the next frame is due (for `ControlFlow::WaitUntil`)
    pub fn deadline(&self) -> Instant {
        self.next_frame
    }

    /// Mark a frame as taken and schedule the next one
    ///
    /// After a stall (minimized window, debugger) the schedule restarts from
    /// `now` instead of releasing a burst of catch-up frames.
    pub fn advance(&mut self, now: Instant) {
        self.next_frame += self.frame_duration;
        if self.next_frame <= now {
            self.next_frame = now + self.frame_duration;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_frame_due_immediately() {
        let now = Instant::now();
        let pacer = FramePacer::new(Duration::from_secs(1) / 60, now);
        assert!(pacer.is_due(now));
    }

    #[test]
    fn test_sixty_fps_duration() {
        let pacer = FramePacer::new(Duration::from_secs(1) / 60, Instant::now());
        assert_eq!(pacer.frame_duration(), Duration::from_secs(1) / 60);
    }

    #[test]
    fn test_zero_duration_clamped() {
        let pacer = FramePacer::new(Duration::ZERO, Instant::now());
        assert_eq!(pacer.frame_duration(), Duration::from_millis(1));
    }

    #[test]
    fn test_advance_schedules_next_frame() {
        let start = Instant::now();
        let mut pacer = FramePacer::new(Duration::from_millis(10), start);
        pacer.advance(start);

        assert!(!pacer.is_due(start + Duration::from_millis(5)));
        assert!(pacer.is_due(start + Duration::from_millis(10)));
        assert_eq!(pacer.deadline(), start + Duration::from_millis(10));
    }

    #[test]
    fn test_stall_does_not_burst() {
        let start = Instant::now();
        let mut pacer = FramePacer::new(Duration::from_millis(10), start);
        let late = start + Duration::from_millis(500);
        pacer.advance(late);

        assert_eq!(pacer.deadline(), late + Duration::from_millis(10));
        assert!(!pacer.is_due(late));
    }
}
