//! Integration tests for the decorative animations.

use std::f32::consts::{PI, TAU};
use std::time::Duration;

use folio::core::motion::{FoldIndicator, Orbit, ease_out, entrance};

const EPS: f32 = 1e-4;

fn ms(millis: u64) -> Duration {
    Duration::from_millis(millis)
}

#[test]
fn test_ease_out_bounds() {
    assert_eq!(ease_out(0.0), 0.0);
    assert_eq!(ease_out(1.0), 1.0);
    assert_eq!(ease_out(-3.0), 0.0);
    assert_eq!(ease_out(7.0), 1.0);
    assert!(ease_out(0.5) > 0.5);
}

#[test]
fn test_fold_indicator_waits_for_delay() {
    let fold = FoldIndicator::default();
    assert_eq!(fold.offset(ms(0)), 0.0);
    assert_eq!(fold.offset(ms(999)), 0.0);
    assert_eq!(fold.opacity(ms(500)), 0.0);
}

#[test]
fn test_fold_indicator_bobs() {
    let fold = FoldIndicator::default();

    // 1. Down at mid-period, back at the start of the next one
    assert!(fold.offset(ms(1_000)).abs() < EPS);
    assert!((fold.offset(ms(2_000)) - 10.0).abs() < EPS);
    assert!(fold.offset(ms(3_000)).abs() < EPS);

    // 2. Periodic
    for t in [1_250, 1_700, 2_400] {
        assert!((fold.offset(ms(t)) - fold.offset(ms(t + 2_000))).abs() < EPS);
    }

    // 3. Never past the amplitude
    for t in (0..6_000).step_by(37) {
        let offset = fold.offset(ms(t));
        assert!((0.0..=10.0 + EPS).contains(&offset), "{t}ms: {offset}");
    }
}

#[test]
fn test_fold_indicator_fades_in() {
    let fold = FoldIndicator::default();
    assert!((fold.opacity(ms(2_000)) - 0.5).abs() < EPS);
    assert_eq!(fold.opacity(ms(3_000)), 1.0);
    assert_eq!(fold.opacity(ms(60_000)), 1.0);
}

#[test]
fn test_orbit_angle() {
    let orbit = Orbit::default();
    assert_eq!(orbit.angle(ms(0)), 0.0);
    assert!((orbit.angle(ms(10_000)) - PI).abs() < EPS);
    assert!((orbit.angle(ms(5_000)) - TAU / 4.0).abs() < EPS);
    assert!(orbit.angle(ms(20_000)).abs() < EPS);

    let stopped = Orbit { revolution: Duration::ZERO };
    assert_eq!(stopped.angle(ms(1_234)), 0.0);
}

#[test]
fn test_entrance() {
    assert_eq!(entrance(ms(100), ms(200), ms(500)), 0.0);
    assert_eq!(entrance(ms(200), ms(200), ms(0)), 1.0);
    assert_eq!(entrance(ms(700), ms(200), ms(500)), 1.0);

    let mid = entrance(ms(450), ms(200), ms(500));
    assert!(mid > 0.5 && mid < 1.0, "{mid}");
}
