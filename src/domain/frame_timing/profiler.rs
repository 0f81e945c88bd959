use super::sampler::FrameSampler;
use super::services::FrameStatisticsService;
use super::value_objects::{FrameDuration, FrameTimes, FrameTimestamp};
use crate::domain::config::ProfilerConfig;
use crate::domain::errors::AppError;
use crate::domain::logging::LogComponent;
use crate::{log_info, log_warn};

/// Lifecycle of a profiler: the first tick moves it to `Running` for good.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ProfilerState {
    Uninitialized,
    Running { previous: FrameTimestamp },
}

/// Turns per-frame timestamps into frame durations and derives average,
/// 1%-low and 0.1%-low frame times on demand.
#[derive(Debug, Clone)]
pub struct PercentileProfiler {
    sampler: FrameSampler,
    state: ProfilerState,
}

impl PercentileProfiler {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            sampler: FrameSampler::new(capacity),
            state: ProfilerState::Uninitialized,
        }
    }

    pub fn from_config(config: &ProfilerConfig) -> Result<Self, AppError> {
        config.validate()?;
        Ok(Self::with_capacity(config.sample_capacity))
    }

    /// Record one rendered frame. The first call only remembers `now`.
    pub fn update(&mut self, now: f64) {
        let now = FrameTimestamp::from_millis(now);
        if !now.is_valid() {
            log_warn!(
                LogComponent::Domain("PercentileProfiler"),
                "ignoring non-finite timestamp {}",
                now.value()
            );
            return;
        }

        if let ProfilerState::Running { previous } = self.state {
            self.sampler.push(now.duration_since(previous));
        }
        self.state = ProfilerState::Running { previous: now };
    }

    /// Fresh statistics over everything currently buffered.
    pub fn current_data(&self) -> FrameTimes {
        FrameStatisticsService::compute(self.sampler.iter())
    }

    /// Start a new session: forget the previous timestamp and all samples.
    pub fn reset(&mut self) {
        log_info!(
            LogComponent::Domain("PercentileProfiler"),
            "reset after {} samples",
            self.sampler.len()
        );
        self.sampler.clear();
        self.state = ProfilerState::Uninitialized;
    }

    pub fn state(&self) -> ProfilerState {
        self.state
    }

    pub fn last_duration(&self) -> Option<FrameDuration> {
        self.sampler.iter().last()
    }

    pub fn sampler(&self) -> &FrameSampler {
        &self.sampler
    }

    pub fn sample_count(&self) -> usize {
        self.sampler.len()
    }

    pub fn capacity(&self) -> usize {
        self.sampler.capacity()
    }
}

impl Default for PercentileProfiler {
    fn default() -> Self {
        Self::with_capacity(ProfilerConfig::default().sample_capacity)
    }
}
