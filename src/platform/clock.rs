//! Frame clock
//!
//! Converts the host's per-frame timestamps into step deltas. The origin of
//! the timestamps is irrelevant, only differences are used.

/// Longest delta handed to the simulation (milliseconds)
pub const MAX_FRAME_DELTA_MS: f32 = 100.0;

#[derive(Debug, Clone, Default)]
pub struct FrameClock {
    last: Option<f64>,
    running: bool,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Begin accepting frames; the next frame reports zero elapsed time
    pub fn start(&mut self) {
        self.running = true;
        self.last = None;
    }

    pub fn stop(&mut self) {
        self.running = false;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Elapsed milliseconds since the previous frame
    ///
    /// First frame after `start` is 0. Backwards or non-finite timestamps give
    /// 0; long stalls (hidden tab) are capped at `MAX_FRAME_DELTA_MS`.
    pub fn tick(&mut self, timestamp: f64) -> f32 {
        let elapsed = match self.last {
            Some(last) => timestamp - last,
            None => 0.0,
        };
        if timestamp.is_finite() {
            self.last = Some(timestamp);
        }

        if !elapsed.is_finite() || elapsed < 0.0 {
            log::warn!("Discarding bad frame delta {}", elapsed);
            return 0.0;
        }
        (elapsed as f32).min(MAX_FRAME_DELTA_MS)
    }
}
