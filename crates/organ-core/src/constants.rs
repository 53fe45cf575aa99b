// Shared visual tuning constants used by the core and the web frontend.

// ECG trace
pub const ECG_LENGTH: usize = 100; // samples kept on screen
pub const ECG_BASELINE: f32 = 15.0; // resting level in path units
pub const ECG_AMPLITUDE: f32 = 6.0;
pub const ECG_FREQUENCY_PER_MS: f64 = 0.015; // radians per wall-clock millisecond
pub const ECG_SPIKE_PROBABILITY: f64 = 0.06; // chance per tick of an irregular beat
pub const ECG_SPIKE_DEPTH: f32 = 10.0; // downward offset of a spike
pub const ECG_TICK_INTERVAL_MS: i32 = 60;

// Scene animation
pub const GROUP_SPIN_PER_FRAME: f32 = 0.002; // radians about Y, every subject
pub const PULSE_AMPLITUDE: f32 = 0.06;
pub const PULSE_FREQUENCY_PER_MS: f64 = 0.008;
pub const CLUSTER_PHASE_PER_MS: f64 = 0.002;
pub const CLUSTER_BOB_STEP: f32 = 0.002; // max vertical drift per frame
pub const CLUSTER_SPIN_PER_FRAME: f32 = 0.01; // radians about X

// Cluster layout
pub const CELL_COUNT: usize = 15;
pub const RED_CELL_COUNT: usize = 13; // the rest are white cells
pub const CELL_SPREAD: [f32; 3] = [8.0, 8.0, 4.0]; // full box extent per axis
pub const CELL_MAX_ROTATION: f32 = 3.0;

// Brain surface
pub const BRAIN_NOISE_SEED: u64 = 0x0b7a_1b5e;
pub const BRAIN_NOISE_FREQUENCY: f32 = 1.2;
pub const BRAIN_NOISE_DEPTH: f32 = 0.12;
