// Whole-frame simulation: lazy spawn, respawn cycle, live speed edits.

use comet_core::{CometPhase, ParamKey, Params, Simulation, Viewport};

fn viewport() -> Viewport {
    Viewport::new(1000.0, 700.0, 1.0)
}

#[test]
fn first_step_spawns_a_comet_and_emits() {
    let mut sim = Simulation::new(Params::default(), 42);
    assert!(sim.comet().is_none());
    let head = sim.step(0.016, &viewport());
    assert!(head.is_some());
    assert_eq!(sim.comet().map(|c| c.phase()), Some(CometPhase::Traveling));
    // 140/s * 0.016s = 2.24 particles
    assert_eq!(sim.particles().len(), 2);
}

#[test]
fn full_cycle_travels_cools_and_respawns() {
    let params = Params {
        respawn_delay: 0.2,
        ..Params::default()
    };
    let mut sim = Simulation::new(params, 7);
    let vp = viewport();
    let dt = 0.033;

    let mut traveling_frames = 0;
    while sim.step(dt, &vp).is_some() {
        traveling_frames += 1;
        assert!(traveling_frames < 1000);
    }
    // (1000 + 280) / 520 s at 33 ms per frame
    assert!((70..=80).contains(&traveling_frames), "{traveling_frames}");
    assert_eq!(sim.comet().map(|c| c.phase()), Some(CometPhase::CoolingDown));

    // No heads or new particles while cooling down
    let mut cooling_frames = 1;
    loop {
        let before = sim.particles().len();
        let was_cooling = sim.comet().map(|c| c.phase()) == Some(CometPhase::CoolingDown);
        let head = sim.step(dt, &vp);
        assert!(head.is_none());
        assert!(sim.particles().len() <= before);
        if was_cooling && sim.comet().map(|c| c.phase()) == Some(CometPhase::Traveling) {
            break;
        }
        cooling_frames += 1;
        assert!(cooling_frames < 100);
    }
    assert!(sim.comet().map(|c| c.progress()) == Some(0.0));

    // The replacement comet travels again on the following frame
    assert!(sim.step(dt, &vp).is_some());
}

#[test]
fn head_speed_edit_retimes_the_live_comet() {
    let mut sim = Simulation::new(Params::default(), 3);
    let vp = viewport();
    sim.step(0.016, &vp);
    let stored = sim.apply_edit(ParamKey::HeadSpeed, 500.0, vp.width);
    assert_eq!(stored, 500.0);
    let duration = sim.comet().map(|c| c.duration()).unwrap_or_default();
    assert!((duration - 2.56).abs() < 1e-5);
}

#[test]
fn edits_before_the_first_frame_are_stored() {
    let mut sim = Simulation::new(Params::default(), 3);
    assert_eq!(sim.apply_edit(ParamKey::HeadSpeed, 300.0, 1000.0), 300.0);
    assert!(sim.comet().is_none());
    sim.step(0.016, &viewport());
    let duration = sim.comet().map(|c| c.duration()).unwrap_or_default();
    assert!((duration - 1280.0 / 300.0).abs() < 1e-4);
}

#[test]
fn same_seed_gives_same_frames() {
    let vp = viewport();
    let mut a = Simulation::new(Params::default(), 99);
    let mut b = Simulation::new(Params::default(), 99);
    for _ in 0..200 {
        assert_eq!(a.step(0.016, &vp), b.step(0.016, &vp));
    }
    assert_eq!(a.particles(), b.particles());
}
