use thiserror::Error;

/// Rejected simulation configuration.
///
/// The per-frame step itself never fails; everything that could make it
/// diverge or produce out-of-range colours is caught here, once, when the
/// simulation is built.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    #[error("particle count must be positive")]
    EmptyParticleSet,
    #[error("{name} must be in (0, 1), got {value}")]
    Friction { name: &'static str, value: f32 },
    #[error("{name} must be in [0, 1], got {value}")]
    BlendRate { name: &'static str, value: f32 },
    #[error("{name} channels must be in [0, 1], got {value:?}")]
    Color { name: &'static str, value: [f32; 3] },
    #[error("{name} must be finite and non-negative, got {value}")]
    Negative { name: &'static str, value: f32 },
    #[error("{name} must be finite and positive, got {value}")]
    NotPositive { name: &'static str, value: f32 },
    #[error("spawn_fraction must be in (0, 1] on every axis, got {value:?}")]
    SpawnFraction { value: [f32; 3] },
    #[error("viewport {name} must be finite and positive, got {value}")]
    Viewport { name: &'static str, value: f32 },
    #[error("distance_epsilon must be positive")]
    ZeroEpsilon,
    #[error("text raster needs a non-empty canvas and sample step")]
    TextCanvas,
}
