//! Simulation configuration.
//!
//! Every tunable knob lives here, grouped by concern, with defaults taken
//! from `constants.rs`. Fields are public; call [`SimConfig::validate`] (or
//! build a `Simulation`, which does) after changing them.

use glam::Vec3;

use crate::constants::*;
use crate::error::ConfigError;
use crate::mode::GestureConfig;
use crate::shapes::ShapeParams;
use crate::viewport::Viewport;

#[derive(Clone, Debug, PartialEq)]
pub struct ForceGains {
    pub homing: f32,
    pub pinch: f32,
    pub pinch_jitter: f32,
    pub follow: f32,
    pub follow_radius: f32,
    pub swirl: f32,
    pub shape: f32,
    pub lock_epsilon: f32,
    pub line: f32,
    pub line_jitter: f32,
    pub explosion: f32,
}

impl Default for ForceGains {
    fn default() -> Self {
        Self {
            homing: HOMING_GAIN,
            pinch: PINCH_GAIN,
            pinch_jitter: PINCH_JITTER,
            follow: FOLLOW_GAIN,
            follow_radius: FOLLOW_RADIUS,
            swirl: SWIRL_GAIN,
            shape: SHAPE_GAIN,
            lock_epsilon: LOCK_EPSILON,
            line: LINE_GAIN,
            line_jitter: LINE_JITTER,
            explosion: EXPLOSION_GAIN,
        }
    }
}

/// Per-frame velocity multipliers, all strictly inside `(0, 1)`.
#[derive(Clone, Debug, PartialEq)]
pub struct Friction {
    pub free: f32,
    pub pinch: f32,
    pub shape: f32,
    pub line: f32,
}

impl Default for Friction {
    fn default() -> Self {
        Self {
            free: FREE_FRICTION,
            pinch: PINCH_FRICTION,
            shape: SHAPE_FRICTION,
            line: LINE_FRICTION,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Palette {
    pub calm: Vec3,
    pub follow: Vec3,
    pub pinch: Vec3,
    pub shape: Vec3,
    pub line: Vec3,
    pub explosion: Vec3,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            calm: Vec3::from(CALM_COLOR),
            follow: Vec3::from(FOLLOW_COLOR),
            pinch: Vec3::from(PINCH_COLOR),
            shape: Vec3::from(SHAPE_COLOR),
            line: Vec3::from(LINE_COLOR),
            explosion: Vec3::from(EXPLOSION_COLOR),
        }
    }
}

/// Lerp factors toward each palette entry, per frame.
#[derive(Clone, Debug, PartialEq)]
pub struct BlendRates {
    pub calm: f32,
    pub follow: f32,
    pub pinch: f32,
    pub shape: f32,
    pub line: f32,
    pub explosion: f32,
}

impl Default for BlendRates {
    fn default() -> Self {
        Self {
            calm: CALM_COLOR_RATE,
            follow: FOLLOW_COLOR_RATE,
            pinch: PINCH_COLOR_RATE,
            shape: SHAPE_COLOR_RATE,
            line: LINE_COLOR_RATE,
            explosion: EXPLOSION_COLOR_RATE,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct SimConfig {
    pub count: usize,
    /// Rest volume as a fraction of [`Viewport::bounds`], per axis, in `(0, 1]`.
    pub spawn_fraction: Vec3,
    /// `Some` makes spawning, jitter and shape sampling reproducible.
    pub seed: Option<u64>,
    pub viewport: Viewport,
    /// Upper clamp for the frame delta, in seconds.
    pub max_delta: f32,
    pub distance_epsilon: f32,
    pub bounce: f32,
    pub forces: ForceGains,
    pub friction: Friction,
    pub palette: Palette,
    pub blend: BlendRates,
    pub gestures: GestureConfig,
    pub shapes: ShapeParams,
    /// Scene rotation about +y, rad/s.
    pub spin_rate: f32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            count: PARTICLE_COUNT,
            spawn_fraction: Vec3::from(SPAWN_FRACTION),
            seed: None,
            viewport: Viewport::default(),
            max_delta: MAX_DELTA_SEC,
            distance_epsilon: DISTANCE_EPSILON,
            bounce: BOUNCE,
            forces: ForceGains::default(),
            friction: Friction::default(),
            palette: Palette::default(),
            blend: BlendRates::default(),
            gestures: GestureConfig::default(),
            shapes: ShapeParams::default(),
            spin_rate: SPIN_RATE,
        }
    }
}

fn unit_open(name: &'static str, value: f32) -> Result<(), ConfigError> {
    if value > 0.0 && value < 1.0 {
        Ok(())
    } else {
        Err(ConfigError::Friction { name, value })
    }
}

fn unit_closed(name: &'static str, value: f32) -> Result<(), ConfigError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::BlendRate { name, value })
    }
}

fn color(name: &'static str, value: Vec3) -> Result<(), ConfigError> {
    if value.cmpge(Vec3::ZERO).all() && value.cmple(Vec3::ONE).all() {
        Ok(())
    } else {
        Err(ConfigError::Color {
            name,
            value: value.to_array(),
        })
    }
}

fn non_negative(name: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::Negative { name, value })
    }
}

fn positive(name: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NotPositive { name, value })
    }
}

fn positive_view(name: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::Viewport { name, value })
    }
}

impl SimConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.count == 0 {
            return Err(ConfigError::EmptyParticleSet);
        }

        let v = &self.viewport;
        positive_view("camera_distance", v.camera_distance)?;
        positive_view("fovy_radians", v.fovy_radians)?;
        positive_view("aspect", v.aspect)?;
        positive_view("depth_bound", v.depth_bound)?;

        let s = self.spawn_fraction;
        if !(s.cmpgt(Vec3::ZERO).all() && s.cmple(Vec3::ONE).all()) {
            return Err(ConfigError::SpawnFraction {
                value: s.to_array(),
            });
        }

        unit_open("bounce", self.bounce)?;
        let f = &self.friction;
        unit_open("friction.free", f.free)?;
        unit_open("friction.pinch", f.pinch)?;
        unit_open("friction.shape", f.shape)?;
        unit_open("friction.line", f.line)?;

        let b = &self.blend;
        unit_closed("blend.calm", b.calm)?;
        unit_closed("blend.follow", b.follow)?;
        unit_closed("blend.pinch", b.pinch)?;
        unit_closed("blend.shape", b.shape)?;
        unit_closed("blend.line", b.line)?;
        unit_closed("blend.explosion", b.explosion)?;

        let p = &self.palette;
        color("palette.calm", p.calm)?;
        color("palette.follow", p.follow)?;
        color("palette.pinch", p.pinch)?;
        color("palette.shape", p.shape)?;
        color("palette.line", p.line)?;
        color("palette.explosion", p.explosion)?;

        let g = &self.forces;
        for (name, value) in [
            ("forces.homing", g.homing),
            ("forces.pinch", g.pinch),
            ("forces.pinch_jitter", g.pinch_jitter),
            ("forces.follow", g.follow),
            ("forces.follow_radius", g.follow_radius),
            ("forces.swirl", g.swirl),
            ("forces.shape", g.shape),
            ("forces.lock_epsilon", g.lock_epsilon),
            ("forces.line", g.line),
            ("forces.line_jitter", g.line_jitter),
            ("forces.explosion", g.explosion),
            ("max_delta", self.max_delta),
            ("distance_epsilon", self.distance_epsilon),
            ("spin_rate", self.spin_rate),
        ] {
            non_negative(name, value)?;
        }
        // zero decay would leave the shockwave on forever
        positive(
            "gestures.shockwave_decay_per_sec",
            self.gestures.shockwave_decay_per_sec,
        )?;
        // A zero epsilon would let a particle sitting on a hand divide by zero.
        if self.distance_epsilon == 0.0 {
            return Err(ConfigError::ZeroEpsilon);
        }

        let t = &self.shapes.text;
        if t.canvas_width == 0 || t.canvas_height == 0 || t.sample_step == 0 {
            return Err(ConfigError::TextCanvas);
        }
        Ok(())
    }
}
