use super::value_objects::FrameDuration;

#[derive(Debug, Clone, Copy, PartialEq)]
enum CadenceRule {
    Elapsed { interval_ms: f64 },
    Frames { every: u32 },
}

/// Decides when accumulated frames warrant recomputing the displayed statistics.
///
/// Sorting the whole sample window is too costly to do every frame, so the
/// display is refreshed either after a fixed amount of frame time or after a
/// fixed number of frames.
#[derive(Debug, Clone)]
pub struct RefreshCadence {
    rule: CadenceRule,
    elapsed_ms: f64,
    frames: u32,
}

impl RefreshCadence {
    /// Due once at least `interval_ms` of frame time has accumulated.
    pub fn new(interval_ms: f64) -> Self {
        Self::with_rule(CadenceRule::Elapsed { interval_ms: interval_ms.max(0.0) })
    }

    /// Due every `every` frames (at least one).
    pub fn every_frames(every: u32) -> Self {
        Self::with_rule(CadenceRule::Frames { every: every.max(1) })
    }

    fn with_rule(rule: CadenceRule) -> Self {
        Self { rule, elapsed_ms: 0.0, frames: 0 }
    }

    /// Account for one frame; `true` means a refresh is due now.
    pub fn tick(&mut self, duration: FrameDuration) -> bool {
        self.elapsed_ms += duration.value();
        self.frames = self.frames.saturating_add(1);

        let due = match self.rule {
            CadenceRule::Elapsed { interval_ms } => self.elapsed_ms >= interval_ms,
            CadenceRule::Frames { every } => self.frames >= every,
        };
        if due {
            self.restart();
        }
        due
    }

    pub fn restart(&mut self) {
        self.elapsed_ms = 0.0;
        self.frames = 0;
    }

}
