use frame_bench_wasm::domain::frame_timing::{FrameTimes, PercentileProfiler, ProfilerState};
use quickcheck::TestResult;
use quickcheck_macros::quickcheck;

const EPS: f64 = 1e-9;

fn feed(profiler: &mut PercentileProfiler, durations: &[f64]) {
    let mut now = 1_000.0;
    profiler.update(now);
    for &d in durations {
        now += d;
        profiler.update(now);
    }
}

#[test]
fn fresh_profiler_reports_zero() {
    let profiler = PercentileProfiler::with_capacity(256);
    assert_eq!(profiler.state(), ProfilerState::Uninitialized);
    assert_eq!(profiler.current_data(), FrameTimes::default());
}

#[test]
fn first_tick_records_nothing_second_records_gap() {
    let mut profiler = PercentileProfiler::with_capacity(256);
    profiler.update(5_000.0);
    assert_eq!(profiler.sample_count(), 0);
    assert!(profiler.current_data().is_empty());

    profiler.update(5_012.0);
    assert_eq!(profiler.sample_count(), 1);
    assert_eq!(profiler.current_data().avg_frame_time, 12.0);
}

#[test]
fn clock_regression_records_zero() {
    let mut profiler = PercentileProfiler::with_capacity(8);
    profiler.update(100.0);
    profiler.update(90.0);
    assert_eq!(profiler.sample_count(), 1);
    assert_eq!(profiler.current_data().avg_frame_time, 0.0);
}

#[test]
fn uniform_frames_collapse_all_statistics() {
    let mut profiler = PercentileProfiler::with_capacity(500);
    feed(&mut profiler, &[16.0; 200]);
    let times = profiler.current_data();
    assert_eq!(times.avg_frame_time, 16.0);
    assert_eq!(times.one_percent_frame_time, 16.0);
    assert_eq!(times.tenth_percent_frame_time, 16.0);
}

#[test]
fn rare_stutter_dominates_one_percent_low() {
    let mut durations = vec![16.0; 1000];
    durations.extend([100.0; 10]);

    let mut profiler = PercentileProfiler::with_capacity(2000);
    feed(&mut profiler, &durations);
    let times = profiler.current_data();

    assert_eq!(profiler.sample_count(), 1010);
    assert!((times.avg_frame_time - 16.83).abs() < 0.01, "avg {}", times.avg_frame_time);
    assert_eq!(times.one_percent_frame_time, 100.0);
    assert_eq!(times.tenth_percent_frame_time, 100.0);
}

#[test]
fn old_stutter_ages_out_of_the_window() {
    let mut durations = vec![100.0; 5];
    durations.extend([16.0; 50]);

    let mut profiler = PercentileProfiler::with_capacity(50);
    feed(&mut profiler, &durations);
    assert_eq!(profiler.current_data().one_percent_frame_time, 16.0);
}

#[quickcheck]
fn non_decreasing_timestamps_give_non_negative_durations(steps: Vec<u16>) -> bool {
    let mut profiler = PercentileProfiler::with_capacity(64);
    let durations: Vec<f64> = steps.iter().map(|&s| s as f64 / 8.0).collect();
    feed(&mut profiler, &durations);
    profiler.sampler().iter().all(|d| d.value() >= 0.0)
}

#[quickcheck]
fn statistics_are_ordered(steps: Vec<u16>) -> TestResult {
    if steps.is_empty() {
        return TestResult::discard();
    }
    let durations: Vec<f64> = steps.iter().map(|&s| s as f64 / 4.0).collect();
    let min = durations.iter().copied().fold(f64::INFINITY, f64::min);

    let mut profiler = PercentileProfiler::with_capacity(durations.len());
    feed(&mut profiler, &durations);
    let times = profiler.current_data();

    TestResult::from_bool(
        times.tenth_percent_frame_time + EPS >= times.one_percent_frame_time
            && times.one_percent_frame_time + EPS >= times.avg_frame_time
            && times.avg_frame_time + EPS >= min,
    )
}
