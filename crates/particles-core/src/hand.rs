//! Per-frame hand input consumed by the simulation.

use glam::Vec3;
use smallvec::SmallVec;

use crate::viewport::Viewport;

/// Most hands a frame carries; extra detections are dropped.
pub const MAX_HANDS: usize = 2;

/// One tracked hand, already normalised by the input provider.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct HandState {
    /// Fingertip position in `[-1, 1]`, mirrored so +x is screen right.
    pub x: f32,
    /// Fingertip position in `[-1, 1]`, +y is screen up.
    pub y: f32,
    pub is_pinching: bool,
    /// Extended finger count (0 = fist .. 5 = open hand), `None` when the
    /// provider has no reliable reading.
    pub gesture: Option<u8>,
}

impl HandState {
    pub fn new(x: f32, y: f32, is_pinching: bool, gesture: Option<u8>) -> Self {
        Self {
            x,
            y,
            is_pinching,
            gesture,
        }
    }

    #[inline]
    pub fn to_scene(&self, viewport: &Viewport) -> Vec3 {
        viewport.to_scene(self.x, self.y)
    }
}

/// Zero to two hands observed in one frame. Order follows the provider and
/// is not guaranteed to be stable across frames.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct HandFrame {
    hands: SmallVec<[HandState; MAX_HANDS]>,
}

impl HandFrame {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn from_hands(hands: impl IntoIterator<Item = HandState>) -> Self {
        Self {
            hands: hands.into_iter().take(MAX_HANDS).collect(),
        }
    }

    pub fn hands(&self) -> &[HandState] {
        &self.hands
    }

    pub fn len(&self) -> usize {
        self.hands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hands.is_empty()
    }

    pub fn any_pinching(&self) -> bool {
        self.hands.iter().any(|h| h.is_pinching)
    }

    /// Both of exactly two hands are pinching.
    pub fn is_dual_pinch(&self) -> bool {
        self.hands.len() == 2 && self.hands.iter().all(|h| h.is_pinching)
    }

    /// Highest finger count reported by any hand in the frame.
    pub fn dominant_gesture(&self) -> Option<u8> {
        self.hands.iter().filter_map(|h| h.gesture).max()
    }
}
