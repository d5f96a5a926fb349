//! Frame clock: turns host timestamps into simulation frame deltas

/// Tracks the previous frame timestamp and hands out clamped deltas
#[derive(Debug, Clone)]
pub struct FrameClock {
    last_ms: Option<f64>,
    max_frame_ms: f32,
}

impl FrameClock {
    /// `max_frame_ms` caps a single delta so a stalled tab does not produce
    /// one enormous frame
    pub fn new(max_frame_ms: f32) -> Self {
        Self {
            last_ms: None,
            max_frame_ms: max_frame_ms.max(0.0),
        }
    }

    /// Delta since the previous call, in ms. The first call returns 0, as
    /// does any backwards or non-finite step.
    pub fn advance(&mut self, now_ms: f64) -> f32 {
        let dt = match self.last_ms {
            Some(last) if now_ms.is_finite() && now_ms > last => (now_ms - last) as f32,
            _ => 0.0,
        };
        if now_ms.is_finite() {
            self.last_ms = Some(now_ms);
        }
        dt.min(self.max_frame_ms)
    }

    /// Forget the previous timestamp (e.g. after the page was hidden)
    pub fn reset(&mut self) {
        self.last_ms = None;
    }
}
