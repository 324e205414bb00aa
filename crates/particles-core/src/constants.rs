// Shared simulation tuning constants. `SimConfig::default()` is built from
// these; front-ends override individual fields rather than the constants.

// Particle set
pub const PARTICLE_COUNT: usize = 5000;
pub const SPAWN_FRACTION: [f32; 3] = [0.9, 0.95, 0.8]; // rest volume as a fraction of the containment bounds

// Viewport (camera looking down -z from CAMERA_Z)
pub const CAMERA_Z: f32 = 8.0;
pub const FOV_Y_DEGREES: f32 = 60.0;
pub const DEFAULT_ASPECT: f32 = 16.0 / 9.0;
pub const DEPTH_BOUND: f32 = 5.0; // |z| limit for boundary containment

// Integration
pub const MAX_DELTA_SEC: f32 = 1.0 / 30.0; // frame-time spikes are clamped to this
pub const DISTANCE_EPSILON: f32 = 0.1; // added to distances before dividing
pub const BOUNCE: f32 = 0.5; // fraction of velocity kept (and reversed) on wall contact

// Homing
pub const HOMING_GAIN: f32 = 0.5;

// Free interaction
pub const PINCH_GAIN: f32 = 15.0; // "black hole" pull, independent of distance
pub const PINCH_JITTER: f32 = 0.5; // full width of the per-frame random kick
pub const FOLLOW_GAIN: f32 = 2.0;
pub const FOLLOW_RADIUS: f32 = 4.0; // open hands ignore particles farther than this
pub const SWIRL_GAIN: f32 = 0.5; // tangential component around an open hand

// Shape and line lock
pub const SHAPE_GAIN: f32 = 8.0;
pub const LOCK_EPSILON: f32 = 0.05; // below this distance a particle snaps onto its target
pub const LINE_GAIN: f32 = 10.0;
pub const LINE_JITTER: f32 = 0.1;

// Explosion
pub const EXPLOSION_GAIN: f32 = 30.0;
pub const SHOCKWAVE_DECAY_PER_SEC: f32 = 0.8; // linear, energy 1.0 lasts 1.25s
pub const EXPLODE_ON_PINCH_RELEASE: bool = false; // single-hand pinch release also sends a shockwave

// Friction (velocity multiplier per frame)
pub const FREE_FRICTION: f32 = 0.96;
pub const PINCH_FRICTION: f32 = 0.90;
pub const SHAPE_FRICTION: f32 = 0.85;
pub const LINE_FRICTION: f32 = 0.82;

// Colour blend rate per frame (lerp factor toward the target hue)
pub const CALM_COLOR_RATE: f32 = 0.02;
pub const FOLLOW_COLOR_RATE: f32 = 0.05;
pub const PINCH_COLOR_RATE: f32 = 0.1;
pub const SHAPE_COLOR_RATE: f32 = 0.08;
pub const LINE_COLOR_RATE: f32 = 0.15;
pub const EXPLOSION_COLOR_RATE: f32 = 0.2;

// Palette
pub const CALM_COLOR: [f32; 3] = [0.0, 1.0, 1.0]; // #00ffff
pub const FOLLOW_COLOR: [f32; 3] = [0.35, 0.55, 1.0];
pub const PINCH_COLOR: [f32; 3] = [1.0, 0.0, 0.333]; // #ff0055
pub const SHAPE_COLOR: [f32; 3] = [1.0, 0.8, 0.2];
pub const LINE_COLOR: [f32; 3] = [1.0, 0.4, 1.0];
pub const EXPLOSION_COLOR: [f32; 3] = [1.0, 1.0, 1.0];

// Gestures
pub const DEBOUNCE_FRAMES: u32 = 15; // ~0.25s at 60fps
pub const EXPLODE_GESTURE: u8 = 0; // fist
pub const CLEAR_GESTURE_MIN: u8 = 5; // open hand and above
pub const TEXT_GESTURE_ONE: &str = "HELLO";
pub const TEXT_GESTURE_THREE: &str = "I LOVE YOU";

// Heart curve
pub const HEART_SCALE: f32 = 0.18;
pub const HEART_JITTER: f32 = 0.15;
pub const HEART_THICKNESS: f32 = 0.6;

// Text raster
pub const TEXT_CANVAS_WIDTH: usize = 512;
pub const TEXT_CANVAS_HEIGHT: usize = 256;
pub const TEXT_CELL_PX: usize = 10; // largest font pixel size before shrinking
pub const TEXT_MAX_LINE_CHARS: usize = 8;
pub const TEXT_SAMPLE_STEP: usize = 2;
pub const TEXT_BRIGHTNESS_THRESHOLD: u8 = 128;
pub const TEXT_PIXEL_SCALE: f32 = 0.02; // scene units per bitmap pixel
pub const TEXT_DEPTH: f32 = 0.4;

// Landmark derivation
pub const PINCH_THRESHOLD: f32 = 0.1; // normalised thumb-index distance
pub const MIN_HAND_CONFIDENCE: f32 = 0.5;

// Presentation
// rad/s about +y. Hand targets are mapped in screen space and are not
// counter-rotated, so any non-zero rate drifts the cloud away from the hands.
pub const SPIN_RATE: f32 = 0.0;
