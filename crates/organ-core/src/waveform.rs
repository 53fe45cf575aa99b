//! Scrolling ECG trace.
//!
//! The buffer always holds the same number of samples. Each tick drops the
//! oldest sample and appends a new one, so left-to-right order is oldest to
//! newest. Rendering produces an SVG path description that can be written into
//! a `<path d="...">` attribute in one step.

use crate::constants::*;
use rand::prelude::*;
use std::collections::VecDeque;
use std::fmt::{self, Write as _};

#[derive(Clone, Debug)]
pub struct WaveformParams {
    pub length: usize,
    pub baseline: f32,
    pub amplitude: f32,
    pub frequency_per_ms: f64,
    pub spike_probability: f64,
    pub spike_depth: f32,
}

impl Default for WaveformParams {
    fn default() -> Self {
        Self {
            length: ECG_LENGTH,
            baseline: ECG_BASELINE,
            amplitude: ECG_AMPLITUDE,
            frequency_per_ms: ECG_FREQUENCY_PER_MS,
            spike_probability: ECG_SPIKE_PROBABILITY,
            spike_depth: ECG_SPIKE_DEPTH,
        }
    }
}

/// One command of the rendered path.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PathCommand {
    MoveTo { x: usize, y: f32 },
    LineTo { x: usize, y: f32 },
}

impl fmt::Display for PathCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathCommand::MoveTo { x, y } => write!(f, "M{x},{y}"),
            PathCommand::LineTo { x, y } => write!(f, "L{x},{y}"),
        }
    }
}

pub struct WaveformBuffer {
    pub params: WaveformParams,
    samples: VecDeque<f32>,
    rng: StdRng,
}

impl WaveformBuffer {
    pub fn new(params: WaveformParams, seed: u64) -> Self {
        // A zero-length trace has nothing to scroll; keep at least one sample.
        let length = params.length.max(1);
        let samples = std::iter::repeat(params.baseline).take(length).collect();
        Self {
            params: WaveformParams { length, ..params },
            samples,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Default trace shape with a custom length and resting level.
    pub fn with_length(length: usize, baseline: f32, seed: u64) -> Self {
        Self::new(
            WaveformParams {
                length,
                baseline,
                ..WaveformParams::default()
            },
            seed,
        )
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn samples(&self) -> impl ExactSizeIterator<Item = f32> + '_ {
        self.samples.iter().copied()
    }

    pub fn latest(&self) -> Option<f32> {
        self.samples.back().copied()
    }

    /// Smooth part of the trace at a wall-clock time, without spikes.
    pub fn periodic_sample(&self, now_ms: f64) -> f32 {
        let phase = now_ms * self.params.frequency_per_ms;
        self.params.baseline + phase.sin() as f32 * self.params.amplitude
    }

    /// Advance the trace by one sample and return the value appended.
    pub fn tick(&mut self, now_ms: f64) -> f32 {
        let mut value = self.periodic_sample(now_ms);
        let p = self.params.spike_probability;
        if p > 0.0 && self.rng.gen_bool(p.min(1.0)) {
            value -= self.params.spike_depth;
        }
        self.samples.pop_front();
        self.samples.push_back(value);
        value
    }

    /// Path commands in chronological order; restartable and side-effect free.
    pub fn path_commands(&self) -> impl Iterator<Item = PathCommand> + '_ {
        self.samples.iter().enumerate().map(|(x, &y)| {
            if x == 0 {
                PathCommand::MoveTo { x, y }
            } else {
                PathCommand::LineTo { x, y }
            }
        })
    }

    pub fn render(&self) -> String {
        let mut d = String::with_capacity(self.samples.len() * 10);
        for cmd in self.path_commands() {
            let _ = write!(d, "{cmd}");
        }
        d
    }
}
