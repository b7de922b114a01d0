// Motion tuning constants shared by every component of the engine.
//
// All per-frame rates are expressed against a 60 Hz reference frame; `tick(dt)`
// rescales them for the actual frame time.

// Frame timing
pub const REFERENCE_FPS: f32 = 60.0;
pub const FRAME_MS: f32 = 1000.0 / REFERENCE_FPS;
pub const MAX_FRAME_DT_SEC: f32 = 0.1; // clamp after tab switches / long stalls

// Damped followers (fraction of remaining distance per reference frame)
pub const DOT_SMOOTHING: f32 = 0.15; // small filled cursor, snappy
pub const RING_SMOOTHING: f32 = 0.04; // large outline cursor, trailing
pub const HOVER_SMOOTHING: f32 = 0.2; // size blend on hover enter/leave

// Cursor sizing (CSS px)
pub const DOT_REST_SIZE: f32 = 16.0;
pub const DOT_HOVER_SIZE: f32 = 48.0;
pub const RING_REST_SIZE: f32 = 40.0;
pub const RING_HOVER_SIZE: f32 = 64.0;

// Inertia
pub const VELOCITY_BLEND_RATIO: f32 = 0.2; // v = v*(1-r) + new_v*r
pub const INERTIA_DAMPING: f32 = 0.92; // per reference frame, in [0.85, 0.98)
pub const VELOCITY_EPSILON: f32 = 1e-4; // below this the tracker is settled
pub const GRAB_DAMPING: f32 = 0.5; // velocity kept when a new drag starts
pub const MIN_SAMPLE_INTERVAL_MS: f32 = 4.0; // floor for coalesced events
pub const MAX_SPEED_PX_PER_FRAME: f32 = 120.0;

// Scroll sampling
pub const SCROLL_VELOCITY_SCALE: f32 = 0.35; // px/ms -> px per reference frame seed scale

// Logo rotation (radians)
pub const DRAG_SENSITIVITY: f32 = 0.01; // rad per px of drag
pub const SCROLL_SENSITIVITY: f32 = 0.002; // rad per px of scroll seed
pub const SCROLL_ROLL_FACTOR: f32 = 0.25; // share of scroll spin applied to roll
pub const IDLE_SPIN_PER_FRAME: f32 = 0.002; // default yaw auto-rotation
pub const RECENTER_SMOOTHING: f32 = 0.03; // pitch/roll ease back to rest when idle

// Magnetic buttons (fractions of element width unless noted)
pub const MAGNET_MIN_DISTANCE: f32 = 0.1; // activation radius while inactive
pub const MAGNET_MAX_DISTANCE: f32 = 0.5; // release radius while active
pub const MAGNET_MIN_DAMPENING: f32 = 0.2;
pub const MAGNET_PULL: f32 = 0.6;
pub const MAGNET_MAX_MOVE: f32 = 0.15;
pub const MAGNET_ROTATION_DEG_PER_PX: f32 = 0.03;
pub const MAGNET_ATTRACT_SMOOTHING: f32 = 0.15;
pub const MAGNET_RELEASE_SMOOTHING: f32 = 0.08;
pub const MAGNET_FILL_SMOOTHING: f32 = 0.12; // background fill slide in/out
pub const MAGNET_FILL_HIDDEN_SCALE: f32 = 0.8; // fill scale while faded out
pub const MAGNET_FILL_EDGE_PCT: f32 = 100.0; // start/exit offset, % of the box

// Loading screen
pub const LOADER_STEP_PER_FRAME: f32 = 0.5; // raw progress units per reference frame
pub const LOADER_TARGET: f32 = 100.0;
pub const LOADER_HOLD_MS: f32 = 500.0; // pause at 100 before sliding away
pub const LOADER_PAUSE_CHANCE: f64 = 0.01; // per reference frame
pub const LOADER_PAUSE_MIN_MS: f32 = 120.0;
pub const LOADER_PAUSE_MAX_MS: f32 = 450.0;
