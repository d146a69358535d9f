//! Fixed-rate frame pacing.

use std::thread;
use std::time::{Duration, Instant};

pub struct FrameClock {
    frame: Duration,
    started: Instant,
}

impl FrameClock {
    pub fn new(frame: Duration) -> Self {
        FrameClock {
            frame,
            started: Instant::now(),
        }
    }

    /// Mark the start of a frame.
    pub fn begin(&mut self) {
        self.started = Instant::now();
    }

    /// How long to sleep after a frame that took `elapsed`.
    pub fn remaining(&self, elapsed: Duration) -> Option<Duration> {
        self.frame.checked_sub(elapsed).filter(|d| !d.is_zero())
    }

    /// Block until the frame budget started by `begin` is used up.
    pub fn wait(&self) {
        if let Some(rest) = self.remaining(self.started.elapsed()) {
            thread::sleep(rest);
        }
    }
}
