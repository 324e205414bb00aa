use std::f32::consts::TAU;

use glam::{Vec2, Vec3};
use rand::Rng;

use crate::constants::{HEART_JITTER, HEART_SCALE, HEART_THICKNESS};

#[derive(Clone, Debug, PartialEq)]
pub struct HeartParams {
    /// Scene units per curve unit. The raw curve spans roughly 32 × 29.
    pub scale: f32,
    /// Full width of the in-plane random offset, in curve units.
    pub jitter: f32,
    /// Full depth of the random z offset, in scene units.
    pub thickness: f32,
    pub offset: Vec3,
}

impl Default for HeartParams {
    fn default() -> Self {
        Self {
            scale: HEART_SCALE,
            jitter: HEART_JITTER,
            thickness: HEART_THICKNESS,
            // the curve sits low; lift it so the shape is visually centred
            offset: Vec3::new(0.0, 0.5, 0.0),
        }
    }
}

/// Classic heart curve, `t` over one period `[0, 2π)`.
#[inline]
pub fn heart_curve(t: f32) -> Vec2 {
    let s = t.sin();
    Vec2::new(
        16.0 * s * s * s,
        13.0 * t.cos() - 5.0 * (2.0 * t).cos() - 2.0 * (3.0 * t).cos() - (4.0 * t).cos(),
    )
}

pub fn heart_points<R: Rng + ?Sized>(count: usize, params: &HeartParams, rng: &mut R) -> Vec<Vec3> {
    (0..count)
        .map(|_| {
            let t = rng.gen::<f32>() * TAU;
            let c = heart_curve(t);
            let jx = (rng.gen::<f32>() - 0.5) * params.jitter;
            let jy = (rng.gen::<f32>() - 0.5) * params.jitter;
            let z = (rng.gen::<f32>() - 0.5) * params.thickness;
            Vec3::new((c.x + jx) * params.scale, (c.y + jy) * params.scale, z) + params.offset
        })
        .collect()
}
