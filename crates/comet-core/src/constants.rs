// Simulation tuning constants shared by the core and the web frontend.

// Frame timing (seconds)
pub const MIN_FRAME_DT: f32 = 0.001;
pub const MAX_FRAME_DT: f32 = 0.033; // caps the jump after a backgrounded tab

// Comet path (logical px)
pub const PATH_OVERSHOOT_PX: f32 = 120.0; // head starts/ends this far off-screen
pub const DURATION_MARGIN_PX: f32 = 280.0; // added to width when timing a traversal
pub const MIN_TRAVERSAL_SEC: f32 = 0.2;
pub const BASE_Y_MIN_FRAC: f32 = 0.45; // baseY sampled within this band of the height
pub const BASE_Y_MAX_FRAC: f32 = 0.65;
pub const ARC_DIRECTION: f32 = -1.0; // negative arcs upward on screen
pub const INITIAL_HEAD_Y_FRAC: f32 = 0.5;

// Head fade
pub const FADE_DENOM_EPSILON: f32 = 0.001;

// Particle emission and motion
pub const VELOCITY_INHERIT: f32 = 0.12; // share of head velocity given to each particle
pub const VERTICAL_SKEW_PER_PX: f32 = 0.0005; // radians per px/s of head vertical speed
pub const VELOCITY_DAMPING: f32 = 0.995; // applied once per frame

// Particle style
pub const TINT_BASE: u8 = 160;
pub const TINT_SPAN: f32 = 80.0;
pub const PARTICLE_ALPHA_SCALE: f32 = 0.55;

// Parameter editing
pub const RANGE_PAIR_GAP: f32 = 0.01; // min/max pairs keep at least this gap on edit

// Surface
pub const MAX_DEVICE_PIXEL_RATIO: f64 = 2.0;
