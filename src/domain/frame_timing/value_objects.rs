use derive_more::Display;
use serde::Serialize;
use wasm_bindgen::prelude::*;

/// Value Object - high-resolution clock reading in milliseconds
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameTimestamp(f64);

impl FrameTimestamp {
    pub fn value(&self) -> f64 {
        self.0
    }

    pub fn from_millis(value: f64) -> Self {
        Self(value)
    }

    pub fn is_valid(&self) -> bool {
        self.0.is_finite()
    }

    /// Time elapsed since `earlier`, clamped so a regressing clock yields zero.
    pub fn duration_since(&self, earlier: FrameTimestamp) -> FrameDuration {
        FrameDuration::from_millis(self.0 - earlier.0)
    }
}

/// Value Object - non-negative frame time in milliseconds
///
/// The field is private and every constructor goes through the clamp, so a
/// negative duration cannot be built.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameDuration(f64);

impl From<f64> for FrameDuration {
    fn from(value: f64) -> Self {
        Self::from_millis(value)
    }
}

impl FrameDuration {
    pub const ZERO: FrameDuration = FrameDuration(0.0);

    /// Negative, NaN and infinite inputs all collapse to zero.
    pub fn from_millis(value: f64) -> Self {
        if value.is_finite() && value > 0.0 {
            Self(value)
        } else {
            Self::ZERO
        }
    }

    pub fn value(&self) -> f64 {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0 == 0.0
    }

    /// Frames per second this duration corresponds to, `None` when there is no data.
    pub fn as_fps(&self) -> Option<f64> {
        if self.is_zero() { None } else { Some(1000.0 / self.0) }
    }
}

/// Snapshot of the derived frame-pacing statistics, all in milliseconds.
///
/// A zeroed snapshot means "no data yet", not an infinite frame rate.
#[wasm_bindgen]
#[derive(Debug, Clone, Copy, Default, PartialEq, Display, Serialize)]
#[display(
    fmt = "avg {:.3}ms | 1% low {:.3}ms | 0.1% low {:.3}ms",
    avg_frame_time,
    one_percent_frame_time,
    tenth_percent_frame_time
)]
pub struct FrameTimes {
    pub avg_frame_time: f64,
    pub one_percent_frame_time: f64,
    pub tenth_percent_frame_time: f64,
}

impl FrameTimes {
    pub fn new(avg: FrameDuration, one_percent: FrameDuration, tenth_percent: FrameDuration) -> Self {
        Self {
            avg_frame_time: avg.value(),
            one_percent_frame_time: one_percent.value(),
            tenth_percent_frame_time: tenth_percent.value(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.avg_frame_time == 0.0
            && self.one_percent_frame_time == 0.0
            && self.tenth_percent_frame_time == 0.0
    }

    pub fn avg_fps(&self) -> Option<f64> {
        FrameDuration::from_millis(self.avg_frame_time).as_fps()
    }

    pub fn one_percent_fps(&self) -> Option<f64> {
        FrameDuration::from_millis(self.one_percent_frame_time).as_fps()
    }

    pub fn tenth_percent_fps(&self) -> Option<f64> {
        FrameDuration::from_millis(self.tenth_percent_frame_time).as_fps()
    }
}
