// Comet traversal, arc, fade and cooldown behaviour.

use comet_core::constants::{BASE_Y_MAX_FRAC, BASE_Y_MIN_FRAC, PATH_OVERSHOOT_PX};
use comet_core::{
    head_alpha, path_position, traversal_duration, Comet, CometPhase, Params, Viewport,
};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn viewport() -> Viewport {
    Viewport::new(1000.0, 800.0, 1.0)
}

#[test]
fn duration_matches_width_and_speed() {
    // (1000 + 280) / 500
    assert!((traversal_duration(1000.0, 500.0) - 2.56).abs() < 1e-5);
    // Tiny viewports still take a minimum amount of time
    assert!((traversal_duration(0.0, 10_000.0) - 0.2).abs() < 1e-6);
}

#[test]
fn path_starts_and_ends_off_screen() {
    let vp = viewport();
    let start = path_position(0.0, 400.0, -1.0, 0.26, &vp);
    let end = path_position(1.0, 400.0, -1.0, 0.26, &vp);
    assert_eq!(start.x, -120.0);
    assert_eq!(end.x, 1120.0);
    // sin(0) and sin(pi) leave the head on its base line
    assert!((start.y - 400.0).abs() < 1e-3);
    assert!((end.y - 400.0).abs() < 1e-2);
}

#[test]
fn path_peaks_at_midpoint_in_arc_direction() {
    let vp = viewport();
    let mid = path_position(0.5, 400.0, -1.0, 0.25, &vp);
    // 400 - 0.25 * 800
    assert!((mid.y - 200.0).abs() < 1e-3);
    assert!((mid.x - 500.0).abs() < 1e-3);
}

#[test]
fn head_alpha_is_opaque_before_fade_start() {
    for i in 0..40 {
        let t = i as f32 / 100.0;
        assert_eq!(head_alpha(t, 0.4), 1.0);
    }
}

#[test]
fn head_alpha_decreases_to_zero_after_fade_start() {
    let mut prev = head_alpha(0.4, 0.4);
    assert_eq!(prev, 1.0);
    for i in 41..=100 {
        let t = i as f32 / 100.0;
        let a = head_alpha(t, 0.4);
        assert!(a < prev, "t={t} a={a} prev={prev}");
        prev = a;
    }
    assert!(head_alpha(1.0, 0.4).abs() < 1e-6);
}

#[test]
fn head_alpha_survives_fade_start_of_one() {
    assert_eq!(head_alpha(0.5, 1.0), 1.0);
    let a = head_alpha(1.0, 1.0);
    assert!(a.is_finite());
    assert!((0.0..=1.0).contains(&a));
}

#[test]
fn spawned_comet_starts_traveling_with_sampled_base_line() {
    let mut rng = StdRng::seed_from_u64(7);
    let params = Params::default();
    let vp = viewport();
    for _ in 0..50 {
        let comet = Comet::spawn(&params, &vp, &mut rng);
        assert_eq!(comet.phase(), CometPhase::Traveling);
        assert_eq!(comet.progress(), 0.0);
        assert_eq!(comet.cooldown(), params.respawn_delay);
        assert!(comet.base_y() >= vp.height * BASE_Y_MIN_FRAC);
        assert!(comet.base_y() <= vp.height * BASE_Y_MAX_FRAC);
    }
}

#[test]
fn progress_strictly_increases_and_position_never_overshoots() {
    let mut rng = StdRng::seed_from_u64(1);
    let params = Params::default();
    let vp = viewport();
    let mut comet = Comet::spawn(&params, &vp, &mut rng);
    let mut last = comet.progress();
    let mut frames = 0;
    while comet.phase() == CometPhase::Traveling {
        // Large steps make the final frame overshoot progress 1
        let head = comet.advance(0.033 * 7.0, &params, &vp).expect("traveling yields a head");
        assert!(comet.progress() > last);
        last = comet.progress();
        assert!(head.pos.x <= vp.width + PATH_OVERSHOOT_PX + 1e-3);
        frames += 1;
    }
    assert!(frames > 1);
    assert!(comet.progress() >= 1.0);
}

#[test]
fn first_pose_reports_previous_position_from_spawn() {
    let mut rng = StdRng::seed_from_u64(3);
    let params = Params::default();
    let vp = viewport();
    let mut comet = Comet::spawn(&params, &vp, &mut rng);
    let first = comet.advance(0.016, &params, &vp).expect("head");
    assert_eq!(first.prev.x, -PATH_OVERSHOOT_PX);
    assert_eq!(first.prev.y, vp.height * 0.5);
    let second = comet.advance(0.016, &params, &vp).expect("head");
    assert_eq!(second.prev, first.pos);
    assert!(second.velocity(0.016).x > 0.0);
}

#[test]
fn cooldown_counts_down_until_expired() {
    let mut rng = StdRng::seed_from_u64(5);
    let params = Params {
        head_speed: 10_000.0,
        respawn_delay: 0.1,
        ..Params::default()
    };
    let vp = Viewport::new(10.0, 100.0, 1.0);
    let mut comet = Comet::spawn(&params, &vp, &mut rng);
    assert!((comet.duration() - 0.2).abs() < 1e-6);
    while comet.phase() == CometPhase::Traveling {
        assert!(comet.advance(0.03, &params, &vp).is_some());
    }
    assert!(!comet.expired());

    let mut cooling_frames = 0;
    while !comet.expired() {
        assert!(comet.advance(0.03, &params, &vp).is_none());
        cooling_frames += 1;
    }
    assert_eq!(cooling_frames, 4);
}

#[test]
fn retime_changes_duration_mid_flight() {
    let mut rng = StdRng::seed_from_u64(9);
    let params = Params::default();
    let vp = viewport();
    let mut comet = Comet::spawn(&params, &vp, &mut rng);
    comet.advance(0.5, &params, &vp);
    let before = comet.progress();
    comet.retime(500.0, 1000.0);
    assert!((comet.duration() - 2.56).abs() < 1e-5);
    assert_eq!(comet.progress(), before);
}
