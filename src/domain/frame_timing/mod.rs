pub mod cadence;
pub mod profiler;
pub mod sampler;
pub mod services;
pub mod value_objects;

pub use cadence::RefreshCadence;
pub use profiler::{PercentileProfiler, ProfilerState};
pub use sampler::FrameSampler;
pub use services::{FrameStatisticsService, LowCut};
pub use value_objects::{FrameDuration, FrameTimes, FrameTimestamp};
