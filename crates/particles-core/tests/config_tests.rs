// Sanity checks on default tuning and configuration validation.

use glam::Vec3;
use particles_core::constants::*;
use particles_core::{ConfigError, ParticleSet, SimConfig, Simulation};
use rand::prelude::*;

#[test]
fn defaults_are_valid() {
    assert_eq!(SimConfig::default().validate(), Ok(()));
}

#[test]
fn friction_ordering_matches_mode_tightness() {
    // tighter modes damp harder
    assert!(FREE_FRICTION > PINCH_FRICTION);
    assert!(PINCH_FRICTION > SHAPE_FRICTION);
    assert!(SHAPE_FRICTION > LINE_FRICTION);
    assert!(LINE_FRICTION > 0.0 && FREE_FRICTION < 1.0);
}

#[test]
fn timing_constants_are_reasonable() {
    assert!(DEBOUNCE_FRAMES >= 10 && DEBOUNCE_FRAMES <= 30);
    assert!(MAX_DELTA_SEC <= 1.0 / 30.0 + f32::EPSILON);
    assert!(SHOCKWAVE_DECAY_PER_SEC > 0.0);
    assert!(CLEAR_GESTURE_MIN > EXPLODE_GESTURE);
}

#[test]
fn spawn_volume_is_a_fraction_of_the_bounds() {
    let fraction = Vec3::from(SPAWN_FRACTION);
    assert!(fraction.cmpgt(Vec3::ZERO).all() && fraction.cmple(Vec3::ONE).all());

    let mut cfg = SimConfig::default();
    cfg.spawn_fraction = Vec3::new(1.2, 0.5, 0.5);
    assert!(matches!(cfg.validate(), Err(ConfigError::SpawnFraction { .. })));
    cfg.spawn_fraction = Vec3::new(0.5, 0.0, 0.5);
    assert!(matches!(cfg.validate(), Err(ConfigError::SpawnFraction { .. })));
}

#[test]
fn rest_positions_start_inside_the_bounds() {
    let sim = Simulation::new(SimConfig {
        count: 500,
        seed: Some(6),
        ..SimConfig::default()
    })
    .expect("valid");
    let bounds = sim.viewport().bounds();
    for o in &sim.particles().original_position {
        assert!(o.abs().cmple(bounds).all(), "{o:?} vs {bounds:?}");
    }
}

#[test]
fn shockwave_must_decay() {
    let mut cfg = SimConfig::default();
    cfg.gestures.shockwave_decay_per_sec = 0.0;
    assert_eq!(
        cfg.validate(),
        Err(ConfigError::NotPositive {
            name: "gestures.shockwave_decay_per_sec",
            value: 0.0
        })
    );
    cfg.gestures.shockwave_decay_per_sec = f32::INFINITY;
    assert!(cfg.validate().is_err());
}

#[test]
fn scene_does_not_spin_by_default() {
    // hand targets are screen-aligned, so a spinning cloud would drift off them
    assert_eq!(SPIN_RATE, 0.0);
    assert_eq!(SimConfig::default().spin_rate, 0.0);
}

#[test]
fn rejects_empty_particle_set() {
    let cfg = SimConfig {
        count: 0,
        ..SimConfig::default()
    };
    assert_eq!(cfg.validate(), Err(ConfigError::EmptyParticleSet));
    assert!(Simulation::new(cfg).is_err());
}

#[test]
fn rejects_friction_outside_open_unit_interval() {
    for value in [0.0, 1.0, 1.2, -0.1] {
        let mut cfg = SimConfig::default();
        cfg.friction.shape = value;
        assert_eq!(
            cfg.validate(),
            Err(ConfigError::Friction {
                name: "friction.shape",
                value
            })
        );
    }
}

#[test]
fn rejects_bad_blend_rates_and_colours() {
    let mut cfg = SimConfig::default();
    cfg.blend.pinch = 1.5;
    assert!(matches!(cfg.validate(), Err(ConfigError::BlendRate { .. })));

    let mut cfg = SimConfig::default();
    cfg.palette.line = Vec3::new(1.2, 0.0, 0.0);
    assert!(matches!(
        cfg.validate(),
        Err(ConfigError::Color {
            name: "palette.line",
            ..
        })
    ));
}

#[test]
fn rejects_negative_gains_and_degenerate_viewport() {
    let mut cfg = SimConfig::default();
    cfg.forces.pinch = -1.0;
    assert!(matches!(cfg.validate(), Err(ConfigError::Negative { .. })));

    let mut cfg = SimConfig::default();
    cfg.viewport.aspect = 0.0;
    assert!(matches!(cfg.validate(), Err(ConfigError::Viewport { .. })));

    let mut cfg = SimConfig::default();
    cfg.distance_epsilon = 0.0;
    assert_eq!(cfg.validate(), Err(ConfigError::ZeroEpsilon));

    let mut cfg = SimConfig::default();
    cfg.shapes.text.sample_step = 0;
    assert_eq!(cfg.validate(), Err(ConfigError::TextCanvas));
}

#[test]
fn errors_name_the_offending_field() {
    let err = ConfigError::Friction {
        name: "friction.free",
        value: 1.0,
    };
    assert_eq!(err.to_string(), "friction.free must be in (0, 1), got 1");
}

#[test]
fn particle_set_layout() {
    let mut rng = StdRng::seed_from_u64(1);
    let extent = Vec3::new(2.0, 1.0, 0.5);
    let set = ParticleSet::new(100, extent, Vec3::new(0.0, 1.0, 1.0), &mut rng);
    assert_eq!(set.count(), 100);
    assert_eq!(set.positions_flat().len(), 300);
    assert_eq!(set.colors_flat().len(), 300);
    assert_eq!(&set.positions_flat()[0..3], &set.position[0].to_array());
    assert_eq!(set.position, set.original_position);
    assert!(set.velocity.iter().all(|v| *v == Vec3::ZERO));
    for p in &set.position {
        assert!(p.abs().cmple(extent).all());
    }
    assert!(set.is_dirty());
}

#[test]
fn seeded_simulations_are_reproducible() {
    let cfg = SimConfig {
        count: 64,
        seed: Some(42),
        ..SimConfig::default()
    };
    let a = Simulation::new(cfg.clone()).expect("valid");
    let b = Simulation::new(cfg).expect("valid");
    assert_eq!(a.particles().position, b.particles().position);
}
