//! Temporal smoothing primitives
//!
//! Two building blocks used by every analyzer metric:
//! - `WindowAvg`: fixed-capacity ring buffer returning the mean of its
//!   contents. Kills single-frame spikes.
//! - `Ema`: exponential moving average, unset until the first update.
//!   Longer-horizon stability.
//!
//! Metrics that need both push through a short window first, then the EMA.

/// EMA weight on the newest sample
pub const DEFAULT_EMA_ALPHA: f32 = 0.2;

/// Fixed-capacity ring buffer average. Oldest value evicted on overflow.
pub struct WindowAvg {
    buf: Vec<f32>,
    head: usize,
    len: usize,
}

impl WindowAvg {
    /// Capacity is fixed at construction; must be non-zero.
    pub fn new(capacity: usize) -> Self {
        debug_assert!(capacity > 0);
        Self {
            buf: vec![0.0; capacity],
            head: 0,
            len: 0,
        }
    }

    /// Push a sample and return the mean over the current contents.
    pub fn push(&mut self, value: f32) -> f32 {
        self.buf[self.head] = value;
        self.head = (self.head + 1) % self.buf.len();
        if self.len < self.buf.len() {
            self.len += 1;
        }
        self.mean()
    }

    /// Arithmetic mean of the stored samples, or the value just pushed when
    /// only one is present. Never called on an empty window by the analyzers.
    pub fn mean(&self) -> f32 {
        if self.len == 0 {
            return 0.0;
        }
        // Window is at most a dozen entries; summing each call avoids
        // running-sum drift.
        let sum: f32 = if self.len == self.buf.len() {
            self.buf.iter().sum()
        } else {
            self.buf[..self.len].iter().sum()
        };
        sum / self.len as f32
    }

    /// True once the window has wrapped at least once
    pub fn is_full(&self) -> bool {
        self.len == self.buf.len()
    }

    pub fn reset(&mut self) {
        self.head = 0;
        self.len = 0;
    }
}

/// Exponential moving average. `None` until the first update, then
/// `alpha * new + (1 - alpha) * prev`.
pub struct Ema {
    alpha: f32,
    value: Option<f32>,
}

impl Ema {
    pub fn new(alpha: f32) -> Self {
        Self { alpha, value: None }
    }

    pub fn update(&mut self, new: f32) -> f32 {
        let next = match self.value {
            Some(prev) => self.alpha * new + (1.0 - self.alpha) * prev,
            None => new,
        };
        self.value = Some(next);
        next
    }

    pub fn get(&self) -> Option<f32> {
        self.value
    }

    pub fn reset(&mut self) {
        self.value = None;
    }
}

impl Default for Ema {
    fn default() -> Self {
        Self::new(DEFAULT_EMA_ALPHA)
    }
}
