use std::time::Instant;

/// Decides when the snake moves, independent of the frame rate
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TickTimer {
    interval_ms: u64,
    last_ms: Option<u64>,
}

impl TickTimer {
    pub fn new(interval_ms: u64) -> Self {
        Self {
            interval_ms,
            last_ms: None,
        }
    }

    pub fn interval_ms(&self) -> u64 {
        self.interval_ms
    }

    /// True once `interval_ms` has passed since the last due tick.
    /// The first call only records the starting time.
    pub fn is_due(&mut self, now_ms: u64) -> bool {
        match self.last_ms {
            None => {
                self.last_ms = Some(now_ms);
                false
            }
            Some(last) if now_ms.saturating_sub(last) >= self.interval_ms => {
                self.last_ms = Some(now_ms);
                true
            }
            Some(_) => false,
        }
    }

    /// Forget the starting time so the next call arms the timer again
    pub fn rearm(&mut self) {
        self.last_ms = None;
    }
}

/// Monotonic milliseconds since the clock was created
#[derive(Debug, Clone, Copy)]
pub struct TickClock {
    start: Instant,
}

impl TickClock {
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
        }
    }

    pub fn now_ms(&self) -> u64 {
        self.start.elapsed().as_millis() as u64
    }
}

impl Default for TickClock {
    fn default() -> Self {
        Self::new()
    }
}
