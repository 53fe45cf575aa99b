// Host-side tests for the scrolling ECG buffer.

use organ_core::{PathCommand, WaveformBuffer, WaveformParams};
use std::f64::consts::FRAC_PI_2;

fn quiet_params(length: usize) -> WaveformParams {
    WaveformParams {
        length,
        spike_probability: 0.0,
        ..WaveformParams::default()
    }
}

#[test]
fn initialize_fills_with_baseline_and_renders_flat_path() {
    let buf = WaveformBuffer::with_length(5, 15.0, 1);
    assert_eq!(buf.samples().collect::<Vec<_>>(), vec![15.0; 5]);
    assert_eq!(buf.render(), "M0,15L1,15L2,15L3,15L4,15");
}

#[test]
fn zero_length_is_raised_to_one_sample() {
    let buf = WaveformBuffer::with_length(0, 15.0, 1);
    assert_eq!(buf.len(), 1);
    assert_eq!(buf.render(), "M0,15");
}

#[test]
fn length_is_constant_across_ticks() {
    let mut buf = WaveformBuffer::new(WaveformParams::default(), 7);
    assert_eq!(buf.len(), 100);
    for k in 0..500 {
        buf.tick(k as f64 * 60.0);
        assert_eq!(buf.len(), 100, "length changed after {} ticks", k + 1);
    }
}

#[test]
fn tick_drops_oldest_and_appends_newest() {
    let mut buf = WaveformBuffer::with_length(5, 15.0, 3);
    let first = buf.tick(1_000.0);
    let second = buf.tick(1_060.0);
    let samples: Vec<f32> = buf.samples().collect();
    assert_eq!(samples.len(), 5);
    assert_eq!(samples[3], first);
    assert_eq!(samples[4], second);
    assert_eq!(buf.latest(), Some(second));
    assert_eq!(&samples[..3], &[15.0, 15.0, 15.0]);
}

#[test]
fn periodic_component_is_pure_function_of_time() {
    let mut a = WaveformBuffer::new(quiet_params(10), 1);
    let mut b = WaveformBuffer::new(quiet_params(10), 99);
    let t = 1_700_000_000_123.0;
    assert_eq!(a.tick(t), b.tick(t));
    assert_eq!(a.tick(t), a.periodic_sample(t));
}

#[test]
fn periodic_peak_matches_amplitude() {
    let buf = WaveformBuffer::new(quiet_params(4), 1);
    let t = FRAC_PI_2 / buf.params.frequency_per_ms;
    let v = buf.periodic_sample(t);
    assert!((v - (15.0 + 6.0)).abs() < 1e-4, "peak was {v}");
}

#[test]
fn certain_spike_offsets_downward() {
    let params = WaveformParams {
        length: 4,
        spike_probability: 1.0,
        ..WaveformParams::default()
    };
    let mut buf = WaveformBuffer::new(params, 5);
    let t = 12_345.0;
    let expected = buf.periodic_sample(t) - 10.0;
    assert!((buf.tick(t) - expected).abs() < 1e-5);
}

#[test]
fn spikes_occur_at_roughly_the_configured_rate() {
    let mut buf = WaveformBuffer::new(WaveformParams::default(), 2024);
    let ticks = 20_000;
    let mut spikes = 0;
    for k in 0..ticks {
        let t = k as f64 * 60.0;
        let clean = buf.periodic_sample(t);
        if buf.tick(t) < clean - 5.0 {
            spikes += 1;
        }
    }
    let rate = spikes as f64 / ticks as f64;
    assert!((0.045..0.075).contains(&rate), "spike rate {rate}");
}

#[test]
fn render_has_one_move_and_n_minus_one_lines() {
    let mut buf = WaveformBuffer::new(WaveformParams::default(), 11);
    for k in 0..37 {
        buf.tick(k as f64 * 60.0);
    }
    let d = buf.render();
    assert_eq!(d.matches('M').count(), 1);
    assert_eq!(d.matches('L').count(), 99);
    assert!(d.starts_with("M0,"));
}

#[test]
fn path_commands_are_in_increasing_index_order() {
    let mut buf = WaveformBuffer::new(WaveformParams::default(), 4);
    for k in 0..10 {
        buf.tick(k as f64 * 60.0);
    }
    let xs: Vec<usize> = buf
        .path_commands()
        .map(|c| match c {
            PathCommand::MoveTo { x, .. } | PathCommand::LineTo { x, .. } => x,
        })
        .collect();
    assert_eq!(xs, (0..100).collect::<Vec<_>>());
    // Restartable: a second pass yields the same sequence.
    assert_eq!(buf.path_commands().count(), 100);
    assert_eq!(buf.render(), buf.render());
}

#[test]
fn fractional_samples_render_without_padding() {
    let mut buf = WaveformBuffer::new(quiet_params(2), 1);
    let v = buf.tick(0.0);
    assert_eq!(v, 15.0);
    let mut buf = WaveformBuffer::with_length(2, 12.5, 1);
    buf.params.spike_probability = 0.0;
    buf.params.amplitude = 0.0;
    buf.tick(0.0);
    assert_eq!(buf.render(), "M0,12.5L1,12.5");
}
