use std::time::{Duration, Instant};

pub const DEFAULT_FPS: u32 = 60;

/// Sleeps away whatever is left of the frame budget.
pub struct FrameLimiter {
    target: Duration,
    previous: Instant,
}

impl FrameLimiter {
    pub fn new(fps: u32) -> Self {
        Self {
            target: Duration::from_secs(1) / fps.max(1),
            previous: Instant::now(),
        }
    }

    pub fn target(&self) -> Duration {
        self.target
    }

    /// Waits if necessary to maintain frame rate and returns the time since the last call.
    pub fn wait_and_get_delta(&mut self) -> Duration {
        let mut delta = self.previous.elapsed();
        if delta < self.target {
            std::thread::sleep(self.target - delta);
            delta = self.previous.elapsed();
        }

        self.previous = Instant::now();
        delta
    }
}

/// Counts frames and reports the rate once a second.
pub struct FpsCounter {
    frames: u32,
    since: Instant,
}

impl FpsCounter {
    pub fn new(now: Instant) -> Self {
        Self {
            frames: 0,
            since: now,
        }
    }

    /// Records one frame at `now`. Returns the frames per second once a full second has passed.
    pub fn tick(&mut self, now: Instant) -> Option<u32> {
        self.frames += 1;

        let elapsed = now.saturating_duration_since(self.since);
        if elapsed < Duration::from_secs(1) {
            return None;
        }

        let fps = (self.frames as f64 / elapsed.as_secs_f64()).round() as u32;
        self.frames = 0;
        self.since = now;
        Some(fps)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn limiter_target() {
        assert_eq!(FrameLimiter::new(50).target(), Duration::from_millis(20));
        // zero would divide by zero
        assert_eq!(FrameLimiter::new(0).target(), Duration::from_secs(1));
    }

    #[test]
    fn limiter_waits_out_the_frame() {
        let mut limiter = FrameLimiter::new(100);
        let delta = limiter.wait_and_get_delta();
        assert!(delta >= Duration::from_millis(10));
    }

    #[test]
    fn fps_reported_once_a_second() {
        let start = Instant::now();
        let mut counter = FpsCounter::new(start);

        for frame in 1..60 {
            assert_eq!(counter.tick(start + Duration::from_millis(frame * 16)), None);
        }
        assert_eq!(counter.tick(start + Duration::from_secs(1)), Some(60));
        assert_eq!(counter.tick(start + Duration::from_millis(1_016)), None);
    }
}
