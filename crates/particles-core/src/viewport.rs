//! Camera and viewable-region types shared with the front-ends.
//!
//! The simulation never talks to a GPU, but it needs to know how much of the
//! `z = 0` plane the camera sees: that region is where hands are mapped to
//! and where particles are contained. The native viewer builds its matrices
//! from the same description so both agree on what "the screen edge" is.

use glam::{Mat4, Vec3};

use crate::constants::{CAMERA_Z, DEFAULT_ASPECT, DEPTH_BOUND, FOV_Y_DEGREES};

/// Perspective camera on the +z axis looking at the origin.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub camera_distance: f32,
    pub fovy_radians: f32,
    pub aspect: f32,
    /// Containment limit along z; x and y limits follow the visible region.
    pub depth_bound: f32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            camera_distance: CAMERA_Z,
            fovy_radians: FOV_Y_DEGREES.to_radians(),
            aspect: DEFAULT_ASPECT,
            depth_bound: DEPTH_BOUND,
        }
    }
}

impl Viewport {
    /// Half of the visible height at `z = 0`.
    pub fn half_height(&self) -> f32 {
        (self.fovy_radians * 0.5).tan() * self.camera_distance
    }

    /// Half of the visible width at `z = 0`.
    pub fn half_width(&self) -> f32 {
        self.half_height() * self.aspect
    }

    /// Symmetric per-axis containment bound.
    pub fn bounds(&self) -> Vec3 {
        Vec3::new(self.half_width(), self.half_height(), self.depth_bound)
    }

    /// Maps a normalised `[-1, 1]` screen position onto the `z = 0` plane.
    #[inline]
    pub fn to_scene(&self, x: f32, y: f32) -> Vec3 {
        Vec3::new(x * self.half_width(), y * self.half_height(), 0.0)
    }

    pub fn set_aspect_from_size(&mut self, width: u32, height: u32) {
        if width > 0 && height > 0 {
            self.aspect = width as f32 / height as f32;
        }
    }

    /// Clip-space projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, 0.1, 100.0)
    }

    /// World-to-view matrix.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(Vec3::new(0.0, 0.0, self.camera_distance), Vec3::ZERO, Vec3::Y)
    }
}
