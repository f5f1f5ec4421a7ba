//! Fixed-rate frame scheduling.
//!
//! The host event loop asks [`FrameLoop::poll_frame`] whether a frame is due
//! and uses [`FrameLoop::until_next`] as its poll timeout, standing in for a
//! display's repaint callback.

use std::time::{Duration, Instant};

/// Start/stop switch and pacing for the field animation.
#[derive(Debug, Clone)]
pub struct FrameLoop {
    /// Is the animation running?
    running: bool,
    /// Target time between frames.
    interval: Duration,
    /// When the last frame was handed out.
    last_frame: Option<Instant>,
}

impl FrameLoop {
    /// Create a stopped loop with the given frame interval.
    pub fn new(interval: Duration) -> Self {
        Self {
            running: false,
            interval,
            last_frame: None,
        }
    }

    /// Start producing frames; the first one is due immediately.
    pub fn run(&mut self) {
        self.running = true;
        self.last_frame = None;
    }

    /// Stop producing frames.
    pub fn stop(&mut self) {
        self.running = false;
    }

    /// Flip between running and stopped.
    pub fn toggle(&mut self) {
        if self.running {
            self.stop();
        } else {
            self.run();
        }
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Returns `true` and marks the frame as taken if one is due at `now`.
    pub fn poll_frame(&mut self, now: Instant) -> bool {
        if !self.running {
            return false;
        }
        let due = match self.last_frame {
            Some(last) => now.saturating_duration_since(last) >= self.interval,
            None => true,
        };
        if due {
            self.last_frame = Some(now);
        }
        due
    }

    /// Time left until the next frame, or `None` while stopped.
    pub fn until_next(&self, now: Instant) -> Option<Duration> {
        if !self.running {
            return None;
        }
        Some(match self.last_frame {
            Some(last) => self
                .interval
                .saturating_sub(now.saturating_duration_since(last)),
            None => Duration::ZERO,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRAME: Duration = Duration::from_millis(16);

    #[test]
    fn test_stopped_by_default() {
        let mut frames = FrameLoop::new(FRAME);
        assert!(!frames.is_running());
        assert!(!frames.poll_frame(Instant::now()));
        assert_eq!(frames.until_next(Instant::now()), None);
    }

    #[test]
    fn test_first_frame_is_immediate() {
        let mut frames = FrameLoop::new(FRAME);
        frames.run();
        let now = Instant::now();
        assert_eq!(frames.until_next(now), Some(Duration::ZERO));
        assert!(frames.poll_frame(now));
    }

    #[test]
    fn test_paces_frames() {
        let mut frames = FrameLoop::new(FRAME);
        frames.run();
        let start = Instant::now();
        assert!(frames.poll_frame(start));
        assert!(!frames.poll_frame(start + Duration::from_millis(5)));
        assert_eq!(
            frames.until_next(start + Duration::from_millis(5)),
            Some(Duration::from_millis(11))
        );
        assert!(frames.poll_frame(start + FRAME));
    }

    #[test]
    fn test_stop_and_resume() {
        let mut frames = FrameLoop::new(FRAME);
        frames.run();
        let start = Instant::now();
        assert!(frames.poll_frame(start));
        frames.toggle();
        assert!(!frames.is_running());
        assert!(!frames.poll_frame(start + FRAME));
        frames.toggle();
        assert!(frames.poll_frame(start + FRAME));
    }
}
