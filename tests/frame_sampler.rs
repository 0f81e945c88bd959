use frame_bench_wasm::domain::frame_timing::{FrameDuration, FrameSampler};
use quickcheck_macros::quickcheck;

#[quickcheck]
fn window_keeps_most_recent_samples(capacity: u8, samples: Vec<u16>) -> bool {
    let mut sampler = FrameSampler::new(capacity as usize);
    for &ms in &samples {
        sampler.push_millis(ms as f64);
    }

    let cap = sampler.capacity();
    let expected: Vec<FrameDuration> = samples
        .iter()
        .skip(samples.len().saturating_sub(cap))
        .map(|&ms| FrameDuration::from_millis(ms as f64))
        .collect();

    sampler.len() <= cap && sampler.snapshot_durations() == expected
}

#[test]
fn full_window_after_more_than_capacity_pushes() {
    let mut sampler = FrameSampler::new(100);
    for i in 0..250 {
        sampler.push_millis(i as f64);
    }
    let durations = sampler.snapshot_durations();
    assert_eq!(durations.len(), 100);
    assert_eq!(durations.first().map(|d| d.value()), Some(150.0));
    assert_eq!(durations.last().map(|d| d.value()), Some(249.0));
}

#[test]
fn snapshot_is_stable_between_pushes() {
    let mut sampler = FrameSampler::new(4);
    sampler.push_millis(16.0);
    sampler.push_millis(17.0);
    assert_eq!(sampler.snapshot_durations(), sampler.snapshot_durations());
    assert_eq!(sampler.len(), 2);
}

#[quickcheck]
fn stored_durations_are_never_negative(raw: Vec<f64>) -> bool {
    let mut sampler = FrameSampler::new(raw.len());
    for &ms in &raw {
        sampler.push(FrameDuration::from(ms));
        sampler.push_millis(ms);
    }
    sampler.iter().all(|d| d.value() >= 0.0 && d.value().is_finite())
}

#[test]
fn negative_and_non_finite_millis_clamp_to_zero() {
    let mut sampler = FrameSampler::new(4);
    for ms in [-16.0, f64::NEG_INFINITY, f64::NAN, f64::INFINITY] {
        sampler.push(ms.into());
    }
    assert!(sampler.iter().all(|d| d.is_zero()));
}
