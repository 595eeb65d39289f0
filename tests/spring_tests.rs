// Host-side tests for the progress spring.

use folio_web::core::constants::MAX_FRAME_DT_SEC;
use folio_web::core::Spring;

const FRAME: f32 = 1.0 / 60.0;

fn ticks_to_converge(target: f32, tol: f32, limit: usize) -> Option<usize> {
    let mut s = Spring::default();
    s.set_target(target);
    (1..=limit).find(|_| (s.step(FRAME) - target).abs() < tol)
}

#[test]
fn converges_to_fixed_target_within_bounded_ticks() {
    for target in [1.0, 0.5, 0.25] {
        let n = ticks_to_converge(target, 1e-3, 240);
        assert!(n.is_some(), "did not converge to {target}");
        assert!(n.unwrap() <= 150, "took {} ticks for {target}", n.unwrap());
    }
}

#[test]
fn convergence_is_deterministic() {
    assert_eq!(
        ticks_to_converge(1.0, 1e-3, 240),
        ticks_to_converge(1.0, 1e-3, 240)
    );
}

#[test]
fn eventually_rests_exactly_on_target() {
    let mut s = Spring::default();
    s.set_target(0.8);
    for _ in 0..2000 {
        s.step(FRAME);
    }
    assert!(s.is_settled());
    assert_eq!(s.position(), 0.8);
    assert_eq!(s.velocity(), 0.0);
}

#[test]
fn frame_drops_never_diverge() {
    let mut s = Spring::default();
    for i in 0..600 {
        // target flips every few frames while every frame is a long stall
        s.set_target(if (i / 5) % 2 == 0 { 1.0 } else { 0.0 });
        let p = s.step(0.5);
        assert!((-0.5..=1.5).contains(&p), "diverged to {p} at step {i}");
        assert!(p.is_finite());
    }
}

#[test]
fn capped_steps_match_max_dt_steps() {
    let mut stalled = Spring::default();
    let mut capped = Spring::default();
    stalled.set_target(1.0);
    capped.set_target(1.0);
    for _ in 0..20 {
        stalled.step(2.0);
        capped.step(MAX_FRAME_DT_SEC);
    }
    assert_eq!(stalled.position(), capped.position());
}

#[test]
fn variable_frame_times_still_converge() {
    let mut s = Spring::default();
    s.set_target(1.0);
    let pattern = [FRAME, FRAME * 0.5, FRAME * 3.0, 0.1, FRAME];
    for i in 0..400 {
        s.step(pattern[i % pattern.len()]);
    }
    assert!((s.position() - 1.0).abs() < 1e-3);
}

#[test]
fn retargeting_mid_flight_moves_toward_new_target() {
    let mut s = Spring::default();
    s.set_target(1.0);
    for _ in 0..20 {
        s.step(FRAME);
    }
    let mid = s.position();
    s.set_target(0.0);
    for _ in 0..240 {
        s.step(FRAME);
    }
    assert!(mid > 0.3);
    assert!(s.position().abs() < 1e-3);
}
