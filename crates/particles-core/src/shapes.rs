//! Shape targets: one scene-space point per particle.
//!
//! Targets are generated once when a shape becomes active and cached by the
//! simulation until the active shape changes. Generators are pure apart
//! from the random source passed in, so tests can seed them.

pub mod font;
pub mod heart;
pub mod text;

use glam::Vec3;
use log::debug;
use rand::Rng;

pub use heart::{heart_curve, heart_points, HeartParams};
pub use text::{layout_lines, rasterize, text_points, TextParams};

/// What a gesture can ask the particles to form.
#[derive(Clone, Debug, PartialEq)]
pub enum ShapeSpec {
    Heart,
    Text(String),
}

impl ShapeSpec {
    /// Stable token compared by the transition guard.
    pub fn name(&self) -> String {
        match self {
            ShapeSpec::Heart => "heart".to_string(),
            ShapeSpec::Text(s) => format!("text:{s}"),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ShapeParams {
    pub heart: HeartParams,
    pub text: TextParams,
}

/// Generated target cloud, aligned 1:1 with particle indices.
#[derive(Clone, Debug)]
pub struct ShapeTarget {
    pub name: String,
    pub points: Vec<Vec3>,
}

pub fn generate<R: Rng + ?Sized>(
    spec: &ShapeSpec,
    count: usize,
    params: &ShapeParams,
    rng: &mut R,
) -> ShapeTarget {
    let points = match spec {
        ShapeSpec::Heart => heart_points(count, &params.heart, rng),
        ShapeSpec::Text(s) => text_points(s, count, &params.text, rng),
    };
    debug!("generated {} target points for {}", points.len(), spec.name());
    ShapeTarget {
        name: spec.name(),
        points,
    }
}
