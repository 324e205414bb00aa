//! Derivation of a [`HandState`] from 21-point hand landmarks.
//!
//! Landmark detectors report points in normalised image coordinates
//! (`[0, 1]`, y pointing down). This module turns one detected hand into the
//! fingertip position, pinch flag and finger count the simulation consumes,
//! so a camera front-end only has to forward raw detections.

use crate::constants::{MIN_HAND_CONFIDENCE, PINCH_THRESHOLD};
use crate::hand::{HandFrame, HandState};

pub const WRIST: usize = 0;
pub const THUMB_IP: usize = 3;
pub const THUMB_TIP: usize = 4;
pub const INDEX_PIP: usize = 6;
pub const INDEX_TIP: usize = 8;
pub const MIDDLE_PIP: usize = 10;
pub const MIDDLE_TIP: usize = 12;
pub const RING_PIP: usize = 14;
pub const RING_TIP: usize = 16;
pub const PINKY_MCP: usize = 17;
pub const PINKY_PIP: usize = 18;
pub const PINKY_TIP: usize = 20;

pub const LANDMARK_COUNT: usize = 21;

/// (tip, pip) pairs for the four long fingers.
const FINGERS: [(usize, usize); 4] = [
    (INDEX_TIP, INDEX_PIP),
    (MIDDLE_TIP, MIDDLE_PIP),
    (RING_TIP, RING_PIP),
    (PINKY_TIP, PINKY_PIP),
];

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Landmark {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Landmark {
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    #[inline]
    fn dist_2d(&self, other: &Landmark) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// One detected hand.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HandLandmarks {
    pub points: [Landmark; LANDMARK_COUNT],
    /// Detector confidence in `[0, 1]`.
    pub confidence: f32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TrackerConfig {
    pub pinch_threshold: f32,
    pub min_confidence: f32,
    /// Flip x so a selfie camera behaves like a mirror.
    pub mirror_x: bool,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            pinch_threshold: PINCH_THRESHOLD,
            min_confidence: MIN_HAND_CONFIDENCE,
            mirror_x: true,
        }
    }
}

impl HandLandmarks {
    pub fn is_pinching(&self, cfg: &TrackerConfig) -> bool {
        self.points[THUMB_TIP].dist_2d(&self.points[INDEX_TIP]) < cfg.pinch_threshold
    }

    /// Number of extended fingers, thumb included.
    pub fn extended_fingers(&self) -> u8 {
        let p = &self.points;
        let wrist = &p[WRIST];
        let mut count = FINGERS
            .iter()
            .filter(|(tip, pip)| p[*tip].dist_2d(wrist) > p[*pip].dist_2d(wrist))
            .count() as u8;
        // The thumb folds across the palm, so measure against the pinky base.
        if p[THUMB_TIP].dist_2d(&p[PINKY_MCP]) > p[THUMB_IP].dist_2d(&p[PINKY_MCP]) {
            count += 1;
        }
        count
    }

    pub fn to_hand_state(&self, cfg: &TrackerConfig) -> HandState {
        let tip = &self.points[INDEX_TIP];
        let x = if cfg.mirror_x {
            (0.5 - tip.x) * 2.0
        } else {
            (tip.x - 0.5) * 2.0
        };
        let y = (0.5 - tip.y) * 2.0;
        let gesture = (self.confidence >= cfg.min_confidence).then(|| self.extended_fingers());
        HandState::new(
            x.clamp(-1.0, 1.0),
            y.clamp(-1.0, 1.0),
            self.is_pinching(cfg),
            gesture,
        )
    }
}

/// Converts every detection of a camera frame into simulation input.
pub fn hand_frame_from_landmarks(detections: &[HandLandmarks], cfg: &TrackerConfig) -> HandFrame {
    HandFrame::from_hands(detections.iter().map(|d| d.to_hand_state(cfg)))
}
