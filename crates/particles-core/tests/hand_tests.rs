// Host-side tests for hand input: frames, landmark derivation and the
// cross-thread snapshot.

use std::sync::Arc;
use std::thread;

use particles_core::landmarks::{
    hand_frame_from_landmarks, HandLandmarks, Landmark, TrackerConfig, INDEX_PIP, INDEX_TIP,
    LANDMARK_COUNT, MIDDLE_PIP, MIDDLE_TIP, PINKY_MCP, PINKY_PIP, PINKY_TIP, RING_PIP, RING_TIP,
    THUMB_IP, THUMB_TIP, WRIST,
};
use particles_core::{HandFrame, HandSnapshot, HandState, Viewport, MAX_HANDS};

fn hand(gesture: Option<u8>, pinching: bool) -> HandState {
    HandState::new(0.0, 0.0, pinching, gesture)
}

/// Upright hand in image space (y down): wrist at the bottom, long fingers
/// pointing up. `fingers_open` extends the four long fingers, `thumb_open`
/// the thumb.
fn make_landmarks(fingers_open: bool, thumb_open: bool, confidence: f32) -> HandLandmarks {
    let mut points = [Landmark::default(); LANDMARK_COUNT];
    points[WRIST] = Landmark::new(0.5, 0.9, 0.0);
    points[PINKY_MCP] = Landmark::new(0.6, 0.7, 0.0);

    let tip_y = if fingers_open { 0.4 } else { 0.75 };
    for (i, (tip, pip)) in [
        (INDEX_TIP, INDEX_PIP),
        (MIDDLE_TIP, MIDDLE_PIP),
        (RING_TIP, RING_PIP),
        (PINKY_TIP, PINKY_PIP),
    ]
    .into_iter()
    .enumerate()
    {
        let x = 0.4 + i as f32 * 0.05;
        points[pip] = Landmark::new(x, 0.6, 0.0);
        points[tip] = Landmark::new(x, tip_y, 0.0);
    }

    if thumb_open {
        points[THUMB_IP] = Landmark::new(0.35, 0.7, 0.0);
        points[THUMB_TIP] = Landmark::new(0.25, 0.65, 0.0);
    } else {
        points[THUMB_IP] = Landmark::new(0.4, 0.72, 0.0);
        points[THUMB_TIP] = Landmark::new(0.5, 0.7, 0.0);
    }
    HandLandmarks { points, confidence }
}

#[test]
fn dominant_gesture_is_the_highest_count() {
    let frame = HandFrame::from_hands([hand(Some(1), false), hand(Some(3), false)]);
    assert_eq!(frame.dominant_gesture(), Some(3));

    let frame = HandFrame::from_hands([hand(None, false), hand(Some(2), false)]);
    assert_eq!(frame.dominant_gesture(), Some(2));

    let frame = HandFrame::from_hands([hand(None, false)]);
    assert_eq!(frame.dominant_gesture(), None);
    assert_eq!(HandFrame::empty().dominant_gesture(), None);
}

#[test]
fn frames_hold_at_most_two_hands() {
    let frame = HandFrame::from_hands((0..5).map(|i| hand(Some(i), false)));
    assert_eq!(frame.len(), MAX_HANDS);
    assert_eq!(frame.hands()[1].gesture, Some(1));
}

#[test]
fn dual_pinch_needs_both_hands_pinching() {
    assert!(HandFrame::from_hands([hand(None, true), hand(None, true)]).is_dual_pinch());
    assert!(!HandFrame::from_hands([hand(None, true), hand(None, false)]).is_dual_pinch());
    assert!(!HandFrame::from_hands([hand(None, true)]).is_dual_pinch());
    assert!(HandFrame::from_hands([hand(None, false), hand(None, true)]).any_pinching());
    assert!(!HandFrame::empty().any_pinching());
}

#[test]
fn hand_maps_onto_visible_plane() {
    let vp = Viewport::default();
    let corner = HandState::new(1.0, -1.0, false, None).to_scene(&vp);
    assert!((corner.x - vp.half_width()).abs() < 1e-5);
    assert!((corner.y + vp.half_height()).abs() < 1e-5);
    assert_eq!(corner.z, 0.0);
    // 60° fov at distance 8
    assert!((vp.half_height() - 8.0 * (30f32).to_radians().tan()).abs() < 1e-5);
}

#[test]
fn counts_extended_fingers() {
    assert_eq!(make_landmarks(true, true, 1.0).extended_fingers(), 5);
    assert_eq!(make_landmarks(true, false, 1.0).extended_fingers(), 4);
    assert_eq!(make_landmarks(false, true, 1.0).extended_fingers(), 1);
    assert_eq!(make_landmarks(false, false, 1.0).extended_fingers(), 0);
}

#[test]
fn pinch_is_thumb_to_index_distance() {
    let cfg = TrackerConfig::default();
    let mut lm = make_landmarks(true, true, 1.0);
    assert!(!lm.is_pinching(&cfg));
    lm.points[THUMB_TIP] = Landmark::new(0.42, 0.42, 0.0);
    assert!(lm.is_pinching(&cfg));
}

#[test]
fn fingertip_is_mirrored_and_normalised() {
    let lm = make_landmarks(true, true, 1.0);
    let mirrored = lm.to_hand_state(&TrackerConfig::default());
    // index tip sits at (0.4, 0.4) in image space
    assert!((mirrored.x - 0.2).abs() < 1e-6);
    assert!((mirrored.y - 0.2).abs() < 1e-6);
    assert_eq!(mirrored.gesture, Some(5));

    let plain = lm.to_hand_state(&TrackerConfig {
        mirror_x: false,
        ..TrackerConfig::default()
    });
    assert!((plain.x + 0.2).abs() < 1e-6);
}

#[test]
fn low_confidence_hides_gesture_but_keeps_position() {
    let lm = make_landmarks(false, false, 0.2);
    let state = lm.to_hand_state(&TrackerConfig::default());
    assert_eq!(state.gesture, None);
    assert!(state.x != 0.0);

    let frame = hand_frame_from_landmarks(
        &[lm, make_landmarks(true, true, 0.9), lm],
        &TrackerConfig::default(),
    );
    assert_eq!(frame.len(), 2);
    assert_eq!(frame.dominant_gesture(), Some(5));
}

#[test]
fn snapshot_starts_empty() {
    let snap = HandSnapshot::new();
    assert!(snap.latest().is_empty());
}

#[test]
fn snapshot_readers_see_whole_frames() {
    let snap = HandSnapshot::new();
    let writer = {
        let snap = snap.clone();
        thread::spawn(move || {
            for i in 1..=500 {
                let v = i as f32 / 500.0;
                snap.publish(HandFrame::from_hands([
                    HandState::new(v, v, false, None),
                    HandState::new(-v, -v, true, None),
                ]));
            }
        })
    };

    for _ in 0..500 {
        let frame = snap.latest();
        if let [a, b] = frame.hands() {
            assert_eq!(a.x, a.y);
            assert_eq!(b.x, -a.x);
        } else {
            assert!(frame.is_empty());
        }
    }
    writer.join().expect("writer thread");

    let last = snap.latest();
    assert_eq!(last.hands()[0].x, 1.0);
    // readers hold their own reference; a newer publish does not touch it
    snap.publish(HandFrame::empty());
    assert_eq!(last.len(), 2);
    assert_eq!(Arc::strong_count(&last), 1);
}
