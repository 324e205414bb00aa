//! Simulation core for the hand-gesture particle swarm.
//!
//! Front-ends feed a [`HandFrame`] and the frame delta into
//! [`Simulation::update`] once per display refresh, then upload
//! [`ParticleSet::positions_flat`] and [`ParticleSet::colors_flat`] when the
//! set reports itself dirty. Nothing in this crate touches a window, a GPU or
//! a camera.

pub mod config;
pub mod constants;
pub mod error;
pub mod hand;
pub mod landmarks;
pub mod mode;
pub mod particles;
pub mod shapes;
pub mod simulation;
pub mod snapshot;
pub mod viewport;

pub use config::*;
pub use error::ConfigError;
pub use hand::{HandFrame, HandState, MAX_HANDS};
pub use mode::{GestureAction, GestureBindings, GestureConfig, GestureDebouncer, Mode, ModeState};
pub use particles::ParticleSet;
pub use shapes::{ShapeParams, ShapeSpec, ShapeTarget};
pub use simulation::Simulation;
pub use snapshot::HandSnapshot;
pub use viewport::Viewport;
