// Page hooks and decoration timing for the web frontend.
// Element ids and selectors match the page markup; the card pulse styles
// mirror its CSS so the transition property does the easing.

// Required elements
pub const CONTAINER_ID: &str = "heart-3d";
pub const ECG_PATH_ID: &str = "ecg-path";

// Organ menu
pub const ORGAN_ITEM_SELECTOR: &str = ".organ-item";
pub const ORGAN_TAG_ATTR: &str = "data-organ";
pub const SELECTED_CLASS: &str = "selected";

// Live BPM card
pub const BPM_SELECTOR: &str = ".live-bpm";
pub const BPM_PULSE_PERIOD_MS: i32 = 1000;
pub const BPM_PULSE_HOLD_MS: i32 = 250;
pub const BPM_RAISED_STYLE: &[(&str, &str)] =
    &[("transform", "scale(1.05)"), ("transition", "0.25s")];
pub const BPM_REST_STYLE: &[(&str, &str)] = &[("transform", "scale(1)")];

// Highlighted stat card
pub const STAT_CARD_SELECTOR: &str = ".stat-card.highlight";
pub const STAT_PULSE_PERIOD_MS: i32 = 1500;
pub const STAT_PULSE_HOLD_MS: i32 = 300;
pub const STAT_RAISED_STYLE: &[(&str, &str)] = &[
    ("transform", "translateY(-3px)"),
    ("box-shadow", "0 22px 50px rgba(37, 99, 235, 0.35)"),
];
pub const STAT_REST_STYLE: &[(&str, &str)] = &[
    ("transform", "translateY(0)"),
    ("box-shadow", "0 18px 45px rgba(20, 35, 90, 0.45)"),
];

// Renderer
pub const CANVAS_STYLE: &str = "width:100%;height:100%;display:block";
pub const MAX_DRAWS: usize = 32; // objects per frame; cells are the largest set
pub const OBJECT_UNIFORM_STRIDE: u64 = 256; // WebGPU min uniform offset alignment
pub const OBJECT_UNIFORM_SIZE: u64 = 96; // mat4 + color + surface
pub const GLOBAL_UNIFORM_SIZE: u64 = 192; // mat4 + 8 vec4
