//! Gesture-driven mode selection.
//!
//! Three inputs feed the machine every frame: the dominant finger count
//! (debounced), the pinch flags (edge-detected for the release trigger) and
//! the two-hand pinch (applied immediately, no debounce). The resolved
//! [`Mode`] tells the simulation which force path to run.

use log::info;

use crate::constants::{
    CLEAR_GESTURE_MIN, DEBOUNCE_FRAMES, EXPLODE_GESTURE, EXPLODE_ON_PINCH_RELEASE,
    SHOCKWAVE_DECAY_PER_SEC,
    TEXT_GESTURE_ONE, TEXT_GESTURE_THREE,
};
use crate::hand::HandFrame;
use crate::shapes::ShapeSpec;

/// What the particles are doing this frame, in force-selection priority.
#[derive(Clone, Debug, PartialEq)]
pub enum Mode {
    Free,
    Shape { name: String },
    DualLine,
    Exploding { energy: f32 },
}

impl Mode {
    pub fn label(&self) -> &str {
        match self {
            Mode::Free => "free",
            Mode::Shape { name } => name,
            Mode::DualLine => "dual line",
            Mode::Exploding { .. } => "exploding",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum GestureAction {
    /// Trigger the shockwave and drop any shape.
    Explode,
    Activate(ShapeSpec),
    Clear,
}

/// Finger count → action table.
#[derive(Clone, Debug, PartialEq)]
pub struct GestureBindings {
    pub explode: u8,
    pub shapes: Vec<(u8, ShapeSpec)>,
    /// Any count at or above this clears back to free mode.
    pub clear_at_or_above: u8,
}

impl Default for GestureBindings {
    fn default() -> Self {
        Self {
            explode: EXPLODE_GESTURE,
            shapes: vec![
                (1, ShapeSpec::Text(TEXT_GESTURE_ONE.to_string())),
                (2, ShapeSpec::Heart),
                (3, ShapeSpec::Text(TEXT_GESTURE_THREE.to_string())),
            ],
            clear_at_or_above: CLEAR_GESTURE_MIN,
        }
    }
}

impl GestureBindings {
    pub fn action_for(&self, code: u8) -> Option<GestureAction> {
        if code == self.explode {
            return Some(GestureAction::Explode);
        }
        if let Some((_, spec)) = self.shapes.iter().find(|(c, _)| *c == code) {
            return Some(GestureAction::Activate(spec.clone()));
        }
        (code >= self.clear_at_or_above).then_some(GestureAction::Clear)
    }
}

/// Confirms a gesture once it has been stable for more than `threshold`
/// consecutive frames. Each stable run confirms at most once.
#[derive(Clone, Debug)]
pub struct GestureDebouncer {
    threshold: u32,
    last: Option<u8>,
    hold_frames: u32,
    fired: bool,
}

impl GestureDebouncer {
    pub fn new(threshold: u32) -> Self {
        Self {
            threshold,
            last: None,
            hold_frames: 0,
            fired: false,
        }
    }

    /// Feeds one frame's dominant gesture; returns it on the frame it is
    /// confirmed. A confirmed "no reading" yields nothing.
    pub fn observe(&mut self, code: Option<u8>) -> Option<u8> {
        if code != self.last {
            self.last = code;
            self.hold_frames = 0;
            self.fired = false;
            return None;
        }
        self.hold_frames = self.hold_frames.saturating_add(1);
        if !self.fired && self.hold_frames > self.threshold {
            self.fired = true;
            return code;
        }
        None
    }

    pub fn hold_frames(&self) -> u32 {
        self.hold_frames
    }

    pub fn last(&self) -> Option<u8> {
        self.last
    }
}

/// Residual explosion energy, decaying linearly to zero.
#[derive(Clone, Copy, Debug)]
pub struct Shockwave {
    energy: f32,
    decay_per_sec: f32,
}

impl Shockwave {
    pub fn new(decay_per_sec: f32) -> Self {
        Self {
            energy: 0.0,
            decay_per_sec,
        }
    }

    pub fn trigger(&mut self) {
        self.energy = 1.0;
    }

    pub fn decay(&mut self, delta: f32) {
        self.energy = (self.energy - self.decay_per_sec * delta).max(0.0);
    }

    #[inline]
    pub fn energy(&self) -> f32 {
        self.energy
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.energy > 0.0
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct GestureConfig {
    pub debounce_frames: u32,
    pub bindings: GestureBindings,
    pub shockwave_decay_per_sec: f32,
    /// Releasing a single-hand pinch sends a shockwave without touching the
    /// active shape. Releases that end a two-hand line never do.
    pub explode_on_pinch_release: bool,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            debounce_frames: DEBOUNCE_FRAMES,
            bindings: GestureBindings::default(),
            shockwave_decay_per_sec: SHOCKWAVE_DECAY_PER_SEC,
            explode_on_pinch_release: EXPLODE_ON_PINCH_RELEASE,
        }
    }
}

/// Result of one [`ModeState::step`] as far as the shape cache is concerned.
#[derive(Clone, Debug, PartialEq)]
pub enum ModeChange {
    Unchanged,
    Activated(ShapeSpec),
    Cleared,
}

pub struct ModeState {
    bindings: GestureBindings,
    debouncer: GestureDebouncer,
    shockwave: Shockwave,
    explode_on_pinch_release: bool,
    shape: Option<ShapeSpec>,
    dual_line: bool,
    was_pinching: bool,
    /// The current pinch run included a two-hand line.
    line_pinch: bool,
}

impl ModeState {
    pub fn new(cfg: GestureConfig) -> Self {
        Self {
            bindings: cfg.bindings,
            debouncer: GestureDebouncer::new(cfg.debounce_frames),
            shockwave: Shockwave::new(cfg.shockwave_decay_per_sec),
            explode_on_pinch_release: cfg.explode_on_pinch_release,
            shape: None,
            dual_line: false,
            was_pinching: false,
            line_pinch: false,
        }
    }

    /// Advances the machine by one frame.
    pub fn step(&mut self, frame: &HandFrame, delta: f32) -> ModeChange {
        let before = self.shape.as_ref().map(ShapeSpec::name);
        self.shockwave.decay(delta);

        if let Some(code) = self.debouncer.observe(frame.dominant_gesture()) {
            if let Some(action) = self.bindings.action_for(code) {
                self.apply(action);
            }
        }

        // Losing a hand mid-pinch is not a release: empty frames reset the edge.
        let pinching = frame.any_pinching();
        let dual = frame.is_dual_pinch();
        if self.explode_on_pinch_release
            && self.was_pinching
            && !pinching
            && !frame.is_empty()
            && !self.line_pinch
        {
            info!("pinch released: shockwave");
            self.shockwave.trigger();
        }
        self.was_pinching = pinching;
        if dual {
            self.line_pinch = true;
        } else if !pinching {
            self.line_pinch = false;
        }

        if dual && !self.dual_line {
            info!("mode: dual line");
        }
        self.dual_line = dual;
        if dual {
            self.shape = None;
        }

        match (before, &self.shape) {
            (Some(a), Some(spec)) if a == spec.name() => ModeChange::Unchanged,
            (_, Some(spec)) => ModeChange::Activated(spec.clone()),
            (Some(_), None) => ModeChange::Cleared,
            (None, None) => ModeChange::Unchanged,
        }
    }

    fn apply(&mut self, action: GestureAction) {
        match action {
            GestureAction::Explode => {
                info!("mode: explode");
                self.shockwave.trigger();
                self.shape = None;
            }
            GestureAction::Activate(spec) => {
                if self.shape.as_ref().map(ShapeSpec::name) == Some(spec.name()) {
                    return;
                }
                info!("mode: shape {}", spec.name());
                self.shape = Some(spec);
            }
            GestureAction::Clear => {
                if self.shape.take().is_some() {
                    info!("mode: free");
                }
            }
        }
    }

    pub fn mode(&self) -> Mode {
        if self.dual_line {
            Mode::DualLine
        } else if self.shockwave.is_active() {
            Mode::Exploding {
                energy: self.shockwave.energy(),
            }
        } else if let Some(spec) = &self.shape {
            Mode::Shape { name: spec.name() }
        } else {
            Mode::Free
        }
    }

    pub fn active_shape(&self) -> Option<&ShapeSpec> {
        self.shape.as_ref()
    }

    pub fn shockwave_energy(&self) -> f32 {
        self.shockwave.energy()
    }

    pub fn hold_frames(&self) -> u32 {
        self.debouncer.hold_frames()
    }

    pub fn is_dual_line(&self) -> bool {
        self.dual_line
    }
}
