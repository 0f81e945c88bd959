use strum::{Display as StrumDisplay, EnumIter};

use super::value_objects::{FrameDuration, FrameTimes};
use crate::domain::logging::LogComponent;
use crate::log_debug;

/// Which slice of the slowest frames a "low" statistic averages over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, StrumDisplay)]
pub enum LowCut {
    #[strum(serialize = "1%")]
    OnePercent,
    #[strum(serialize = "0.1%")]
    TenthPercent,
}

impl LowCut {
    pub fn fraction(&self) -> f64 {
        match self {
            LowCut::OnePercent => 0.01,
            LowCut::TenthPercent => 0.001,
        }
    }

    /// Number of slowest samples to average: `max(1, round(fraction * n))`.
    pub fn take_count(&self, sample_count: usize) -> usize {
        let take = (self.fraction() * sample_count as f64).round() as usize;
        take.clamp(1, sample_count.max(1))
    }
}

/// Derives the average and low-percentile frame times from a set of samples.
pub struct FrameStatisticsService;

impl FrameStatisticsService {
    /// Copies the samples once into a scratch buffer and sorts that in place.
    pub fn compute<I>(durations: I) -> FrameTimes
    where
        I: IntoIterator<Item = FrameDuration>,
    {
        let mut sorted: Vec<f64> = durations.into_iter().map(|d| d.value()).collect();
        if sorted.is_empty() {
            return FrameTimes::default();
        }
        Self::sort_descending(&mut sorted);

        let average = Self::mean(&sorted);
        let one_percent = Self::low_average(&sorted, LowCut::OnePercent);
        let tenth_percent = Self::low_average(&sorted, LowCut::TenthPercent);

        log_debug!(
            LogComponent::Domain("FrameStatistics"),
            "samples: {}, {} take: {}, {} take: {}",
            sorted.len(),
            LowCut::OnePercent,
            LowCut::OnePercent.take_count(sorted.len()),
            LowCut::TenthPercent,
            LowCut::TenthPercent.take_count(sorted.len())
        );

        FrameTimes::new(
            FrameDuration::from_millis(average),
            FrameDuration::from_millis(one_percent),
            FrameDuration::from_millis(tenth_percent),
        )
    }

    /// Mean of the slowest `cut` share of `sorted`, which must be in descending order.
    pub fn low_average(sorted: &[f64], cut: LowCut) -> f64 {
        if sorted.is_empty() {
            return 0.0;
        }
        let take = cut.take_count(sorted.len());
        Self::mean(&sorted[..take])
    }

    fn mean(values: &[f64]) -> f64 {
        if values.is_empty() {
            return 0.0;
        }
        values.iter().sum::<f64>() / values.len() as f64
    }

    #[cfg(not(feature = "parallel"))]
    fn sort_descending(values: &mut [f64]) {
        values.sort_unstable_by(|a, b| b.total_cmp(a));
    }

    #[cfg(feature = "parallel")]
    fn sort_descending(values: &mut [f64]) {
        use rayon::slice::ParallelSliceMut;
        values.par_sort_unstable_by(|a, b| b.total_cmp(a));
    }
}
