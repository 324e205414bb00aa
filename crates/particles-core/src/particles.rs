use glam::Vec3;
use rand::Rng;

/// Structure-of-arrays particle storage.
///
/// All four arrays are allocated once with `count` entries and index `i`
/// always refers to the same particle. Nothing here reallocates or reorders.
pub struct ParticleSet {
    count: usize,
    pub position: Vec<Vec3>,
    pub original_position: Vec<Vec3>,
    pub velocity: Vec<Vec3>,
    pub color: Vec<Vec3>,
    dirty: bool,
}

impl ParticleSet {
    /// Scatters `count` particles uniformly inside `[-extent, extent]` per
    /// axis, at rest, all coloured `color`.
    pub fn new<R: Rng + ?Sized>(count: usize, extent: Vec3, color: Vec3, rng: &mut R) -> Self {
        let original_position: Vec<Vec3> = (0..count)
            .map(|_| {
                Vec3::new(
                    (rng.gen::<f32>() - 0.5) * 2.0 * extent.x,
                    (rng.gen::<f32>() - 0.5) * 2.0 * extent.y,
                    (rng.gen::<f32>() - 0.5) * 2.0 * extent.z,
                )
            })
            .collect();
        Self {
            count,
            position: original_position.clone(),
            original_position,
            velocity: vec![Vec3::ZERO; count],
            color: vec![color; count],
            dirty: true,
        }
    }

    #[inline]
    pub fn count(&self) -> usize {
        self.count
    }

    /// `count * 3` floats, xyz per particle.
    pub fn positions_flat(&self) -> &[f32] {
        bytemuck::cast_slice(&self.position)
    }

    /// `count * 3` floats, rgb per particle in `[0, 1]`.
    pub fn colors_flat(&self) -> &[f32] {
        bytemuck::cast_slice(&self.color)
    }

    /// Scales every rest position per axis. Current positions are left for
    /// homing to pull along.
    pub fn rescale_rest(&mut self, factor: Vec3) {
        for o in &mut self.original_position {
            *o *= factor;
        }
    }

    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Returns whether the buffers changed since the last call and clears the flag.
    pub fn take_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }
}
