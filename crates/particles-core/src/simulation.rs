//! Per-frame particle step.
//!
//! Each call to [`Simulation::update`] advances the gesture machine, picks
//! one force path for the whole frame (dual line, shape, free interaction or
//! homing), then walks every particle once: accumulate forces, add the
//! explosion overlay, damp, integrate with explicit Euler, contain, and blend
//! the colour toward the path's hue.
//!
//! Velocities are in scene units per frame and forces are scaled by the
//! (clamped) frame delta; there is no sub-stepping.

use std::f32::consts::TAU;

use glam::Vec3;
use log::{debug, info};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use smallvec::SmallVec;

use crate::config::SimConfig;
use crate::error::ConfigError;
use crate::hand::{HandFrame, MAX_HANDS};
use crate::mode::{Mode, ModeChange, ModeState};
use crate::particles::ParticleSet;
use crate::shapes::{self, ShapeTarget};
use crate::viewport::Viewport;

/// Target point for particle `index` on the segment `a → b`.
///
/// Particles are spread by index, not by where they currently are, so the
/// line is evenly populated whatever the hands' distance.
#[inline]
pub fn dual_line_target(a: Vec3, b: Vec3, index: usize, count: usize) -> Vec3 {
    a + (b - a) * (index as f32 / count.max(1) as f32)
}

/// Clamps a raw frame delta into `[0, max]`.
#[inline]
pub fn clamp_delta(delta: f32, max: f32) -> f32 {
    if delta.is_finite() {
        delta.clamp(0.0, max)
    } else {
        0.0
    }
}

/// Clamps `p` into `[-bounds, bounds]`; on contact the matching velocity
/// component is reversed and scaled by `bounce`.
#[inline]
pub fn contain(p: &mut Vec3, v: &mut Vec3, bounds: Vec3, bounce: f32) {
    for axis in 0..3 {
        let limit = bounds[axis];
        if p[axis] > limit {
            p[axis] = limit;
            v[axis] = -v[axis] * bounce;
        } else if p[axis] < -limit {
            p[axis] = -limit;
            v[axis] = -v[axis] * bounce;
        }
    }
}

#[inline]
fn random_offset(rng: &mut StdRng, width: f32) -> Vec3 {
    Vec3::new(
        rng.gen::<f32>() - 0.5,
        rng.gen::<f32>() - 0.5,
        rng.gen::<f32>() - 0.5,
    ) * width
}

/// Force path chosen once per frame.
#[derive(Clone, Copy)]
enum Behavior {
    Line { a: Vec3, b: Vec3 },
    Shape,
    Free,
    Homing,
}

pub struct Simulation {
    config: SimConfig,
    particles: ParticleSet,
    mode: ModeState,
    target: Option<ShapeTarget>,
    rng: StdRng,
    spin: f32,
}

impl Simulation {
    pub fn new(config: SimConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let particles = ParticleSet::new(
            config.count,
            config.spawn_fraction * config.viewport.bounds(),
            config.palette.calm,
            &mut rng,
        );
        let mode = ModeState::new(config.gestures.clone());
        info!(
            "simulation ready: {} particles, bounds {:?}",
            config.count,
            config.viewport.bounds()
        );
        Ok(Self {
            config,
            particles,
            mode,
            target: None,
            rng,
            spin: 0.0,
        })
    }

    pub fn particles(&self) -> &ParticleSet {
        &self.particles
    }

    pub fn particles_mut(&mut self) -> &mut ParticleSet {
        &mut self.particles
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    pub fn mode(&self) -> Mode {
        self.mode.mode()
    }

    pub fn mode_state(&self) -> &ModeState {
        &self.mode
    }

    pub fn shape_target(&self) -> Option<&ShapeTarget> {
        self.target.as_ref()
    }

    /// Scene rotation about +y, radians in `[0, 2π)`.
    pub fn spin(&self) -> f32 {
        self.spin
    }

    pub fn viewport(&self) -> &Viewport {
        &self.config.viewport
    }

    /// Follows a window resize; bounds and hand mapping change with it, and
    /// rest positions are stretched so they stay inside the new bounds.
    pub fn resize(&mut self, width: u32, height: u32) {
        let old = self.config.viewport.bounds();
        self.config.viewport.set_aspect_from_size(width, height);
        let new = self.config.viewport.bounds();
        if new != old {
            self.particles.rescale_rest(new / old);
            debug!("viewport resized, bounds {new:?}");
        }
    }

    /// Advances every particle by one frame.
    pub fn update(&mut self, hands: &HandFrame, delta: f32) {
        let dt = clamp_delta(delta, self.config.max_delta);

        match self.mode.step(hands, dt) {
            ModeChange::Activated(spec) => {
                self.target = Some(shapes::generate(
                    &spec,
                    self.particles.count(),
                    &self.config.shapes,
                    &mut self.rng,
                ));
            }
            ModeChange::Cleared => self.target = None,
            ModeChange::Unchanged => {}
        }

        let viewport = self.config.viewport;
        let scene_hands: SmallVec<[(Vec3, bool); MAX_HANDS]> = hands
            .hands()
            .iter()
            .map(|h| (h.to_scene(&viewport), h.is_pinching))
            .collect();

        let behavior = match (self.mode.mode(), &self.target) {
            (Mode::DualLine, _) if scene_hands.len() == 2 => Behavior::Line {
                a: scene_hands[0].0,
                b: scene_hands[1].0,
            },
            (Mode::Shape { .. }, Some(_)) => Behavior::Shape,
            _ if !scene_hands.is_empty() => Behavior::Free,
            _ => Behavior::Homing,
        };

        self.step_particles(behavior, &scene_hands, dt);

        self.spin = (self.spin + self.config.spin_rate * dt).rem_euclid(TAU);
        self.particles.mark_dirty();
    }

    fn step_particles(&mut self, behavior: Behavior, hands: &[(Vec3, bool)], dt: f32) {
        let cfg = &self.config;
        let forces = &cfg.forces;
        let palette = &cfg.palette;
        let blend = &cfg.blend;
        let eps = cfg.distance_epsilon;
        let bounds = cfg.viewport.bounds();
        let energy = self.mode.shockwave_energy();
        let any_pinch = hands.iter().any(|(_, pinching)| *pinching);
        let rng = &mut self.rng;
        let targets = self.target.as_ref().map(|t| t.points.as_slice());

        let count = self.particles.count();
        let ParticleSet {
            position,
            original_position,
            velocity,
            color,
            ..
        } = &mut self.particles;

        for i in 0..count {
            let p = position[i];
            let mut v = velocity[i];
            let mut locked_at = None;

            let (mut hue, mut rate, friction) = match behavior {
                Behavior::Line { a, b } => {
                    let mut target = dual_line_target(a, b, i, count);
                    if forces.line_jitter > 0.0 {
                        target += random_offset(rng, forces.line_jitter);
                    }
                    v += (target - p) * forces.line * dt;
                    (palette.line, blend.line, cfg.friction.line)
                }
                Behavior::Shape => {
                    let target = targets.map_or(p, |t| t[i]);
                    let d = target - p;
                    if d.length() < forces.lock_epsilon {
                        locked_at = Some(target);
                    } else {
                        v += d * forces.shape * dt;
                    }
                    (palette.shape, blend.shape, cfg.friction.shape)
                }
                Behavior::Free => {
                    let mut pinched = false;
                    let mut influenced = false;
                    for &(hand, pinching) in hands {
                        let d = hand - p;
                        let dist = d.length() + eps;
                        if pinching {
                            v += d / dist * forces.pinch * dt;
                            if forces.pinch_jitter > 0.0 {
                                v += random_offset(rng, forces.pinch_jitter);
                            }
                            pinched = true;
                        } else if dist < forces.follow_radius {
                            v += d / dist * forces.follow * dt;
                            v += Vec3::new(-d.y, d.x, 0.0) * forces.swirl * dt;
                            influenced = true;
                        }
                    }
                    let friction = if any_pinch {
                        cfg.friction.pinch
                    } else {
                        cfg.friction.free
                    };
                    if pinched {
                        (palette.pinch, blend.pinch, friction)
                    } else if influenced {
                        (palette.follow, blend.follow, friction)
                    } else {
                        (palette.calm, blend.calm, friction)
                    }
                }
                Behavior::Homing => {
                    v += (original_position[i] - p) * forces.homing * dt;
                    (palette.calm, blend.calm, cfg.friction.free)
                }
            };

            if energy > 0.0 {
                v += p / (p.length() + eps) * forces.explosion * energy * dt;
                hue = palette.explosion;
                rate = blend.explosion;
            }

            let mut next = match locked_at {
                Some(target) => {
                    v = Vec3::ZERO;
                    target
                }
                None => {
                    v *= friction;
                    p + v
                }
            };
            contain(&mut next, &mut v, bounds, cfg.bounce);

            position[i] = next;
            velocity[i] = v;
            color[i] = color[i].lerp(hue, rate).clamp(Vec3::ZERO, Vec3::ONE);
        }
    }
}
