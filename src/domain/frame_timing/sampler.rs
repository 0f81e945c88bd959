use super::value_objects::FrameDuration;

/// Rolling window of frame durations backed by a fixed arena and a write cursor.
///
/// Once full, every push overwrites the oldest sample, so the per-frame path
/// never reallocates.
#[derive(Debug, Clone)]
pub struct FrameSampler {
    samples: Vec<FrameDuration>,
    capacity: usize,
    cursor: usize,
    len: usize,
}

impl FrameSampler {
    /// A capacity of zero is coerced to one.
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            samples: vec![FrameDuration::ZERO; capacity],
            capacity,
            cursor: 0,
            len: 0,
        }
    }

    pub fn push(&mut self, duration: FrameDuration) {
        self.samples[self.cursor] = duration;
        self.cursor = (self.cursor + 1) % self.capacity;
        if self.len < self.capacity {
            self.len += 1;
        }
    }

    /// Raw millisecond input, clamped to `max(0, ms)`.
    pub fn push_millis(&mut self, ms: f64) {
        self.push(ms.into());
    }

    /// Buffered durations, oldest first.
    pub fn snapshot_durations(&self) -> Vec<FrameDuration> {
        self.iter().collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = FrameDuration> + '_ {
        let start = (self.cursor + self.capacity - self.len) % self.capacity;
        (0..self.len).map(move |i| self.samples[(start + i) % self.capacity])
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn clear(&mut self) {
        self.cursor = 0;
        self.len = 0;
    }
}
