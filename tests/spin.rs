//! Integration tests for the single-winner spin and the in-flight guard.

use team_roulette_web::{
    complete_spin, normalize_degrees, resolve_target_angle, spin_wheel, RouletteError,
    RouletteSession,
};

fn session_with(names: &[&str]) -> RouletteSession {
    let mut s = RouletteSession::new();
    for name in names {
        s.add_participant(name).unwrap();
    }
    s
}

#[test]
fn spin_rejects_empty_pool() {
    let mut s = RouletteSession::new();
    assert_eq!(spin_wheel(&mut s), Err(RouletteError::EmptyPool));
}

#[test]
fn spin_rejects_single_candidate() {
    let mut s = session_with(&["Solo"]);
    assert_eq!(spin_wheel(&mut s), Err(RouletteError::InsufficientCandidates));
}

#[test]
fn spin_picks_a_pool_member_and_matching_angle() {
    let mut s = session_with(&["A", "B", "C", "D"]);
    let outcome = spin_wheel(&mut s).unwrap();
    assert!(outcome.index < 4);
    assert_eq!(outcome.winner, s.pool.entries()[outcome.index]);
    let expected = resolve_target_angle(outcome.index, 4, s.extra_rotations).unwrap();
    assert_eq!(outcome.target_angle, expected);
    assert_eq!(s.last_spin.as_ref().unwrap(), &outcome);
}

#[test]
fn spin_does_not_consume_the_pool() {
    let mut s = session_with(&["A", "B", "C"]);
    spin_wheel(&mut s).unwrap();
    complete_spin(&mut s);
    spin_wheel(&mut s).unwrap();
    assert_eq!(s.pool.len(), 3);
}

#[test]
fn second_spin_is_rejected_while_animation_in_flight() {
    let mut s = session_with(&["A", "B"]);
    let first = spin_wheel(&mut s).unwrap();
    assert!(s.spin_in_flight);
    assert_eq!(spin_wheel(&mut s), Err(RouletteError::DrawInFlight));
    // The committed outcome is untouched by the rejected call.
    assert_eq!(s.last_spin.as_ref().unwrap(), &first);

    complete_spin(&mut s);
    assert!(!s.spin_in_flight);
    spin_wheel(&mut s).unwrap();
}

#[test]
fn complete_spin_is_idempotent() {
    let mut s = session_with(&["A", "B"]);
    spin_wheel(&mut s).unwrap();
    complete_spin(&mut s);
    complete_spin(&mut s);
    assert!(!s.spin_in_flight);
}

#[test]
fn spin_target_uses_configured_extra_rotations() {
    let mut s = session_with(&["A", "B", "C", "D"]);
    s.set_extra_rotations(2);
    let outcome = spin_wheel(&mut s).unwrap();
    assert!(outcome.target_angle >= 2.0 * 360.0);
    assert!(outcome.target_angle < 3.0 * 360.0);
    let settled = normalize_degrees(outcome.target_angle);
    let expected = resolve_target_angle(outcome.index, 4, 0).unwrap();
    assert!((settled - expected).abs() < 1e-9);
}
