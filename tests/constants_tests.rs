// Host-side tests for tuning constants and their relationships.
// The browser wiring is wasm-only; the portable core is tested directly.

use folio_web::core::constants::*;
use folio_web::core::ControllerConfig;

#[test]
#[allow(clippy::assertions_on_constants)]
fn spring_constants_are_positive() {
    assert!(SPRING_STIFFNESS > 0.0);
    assert!(SPRING_DAMPING > 0.0);
    assert!(MAX_FRAME_DT_SEC > 0.0 && MAX_FRAME_DT_SEC <= 0.1);
    assert!(SPRING_REST_DELTA > 0.0 && SPRING_REST_DELTA < 1e-3);
    assert!(SPRING_REST_SPEED > 0.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn progress_spring_does_not_ring() {
    // damping ratio c / (2 * sqrt(k)) >= 1 means no overshoot
    let zeta = SPRING_DAMPING / (2.0 * SPRING_STIFFNESS.sqrt());
    assert!(zeta >= 1.0, "zeta={zeta}");
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn reveal_and_entrance_timings_are_sane() {
    assert!(REVEAL_MARGIN_PX <= 0.0, "reveal should fire once a section is inside the viewport");
    assert!(STAGGER_STEP_MS < ENTRANCE_DURATION_MS);
    assert!(ENTRANCE_OFFSET_PX > 0.0);
    assert!(LOADER_DURATION_MS > 0);
}

#[test]
fn blob_depths_are_ordered() {
    assert!(BLOB_DEPTHS.windows(2).all(|w| w[0] < w[1]));
    assert!(BLOB_DEPTHS.iter().all(|d| *d > 0.0 && *d <= 1.0));
    assert_eq!(ControllerConfig::default().blob_depths, BLOB_DEPTHS.to_vec());
}
