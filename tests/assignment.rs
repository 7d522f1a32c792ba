//! Integration tests for the team assignment run: sequential draws, the
//! quick partition mode, and the exhaustiveness invariant.

use std::collections::BTreeSet;
use team_roulette_web::{
    complete_draw, draw_next_member, partition_teams, reset_assignment, start_assignment,
    RouletteError, RouletteSession, RunPhase,
};

fn session_with(names: &[&str]) -> RouletteSession {
    let mut s = RouletteSession::new();
    for name in names {
        s.add_participant(name).unwrap();
    }
    s
}

/// Drive draws (completing each animation) until the run reports Complete.
fn drive_to_completion(s: &mut RouletteSession) {
    loop {
        if s.run.as_ref().unwrap().phase == RunPhase::Complete {
            return;
        }
        draw_next_member(s).unwrap();
        complete_draw(s);
    }
}

fn assigned_names(s: &RouletteSession) -> Vec<String> {
    let run = s.run.as_ref().unwrap();
    let mut all: Vec<String> = run.completed_teams.iter().flatten().cloned().collect();
    all.extend(run.current_team.iter().cloned());
    all.extend(run.leftover.iter().cloned());
    all.extend(run.remaining.iter().cloned());
    all
}

#[test]
fn start_requires_enough_participants() {
    let mut s = session_with(&["A"]);
    assert_eq!(
        start_assignment(&mut s, 2),
        Err(RouletteError::InsufficientPlayers { required: 2 })
    );
    assert!(s.run.is_none());
}

#[test]
fn start_rejects_zero_capacity() {
    let mut s = session_with(&["A", "B"]);
    assert_eq!(
        start_assignment(&mut s, 0),
        Err(RouletteError::InsufficientPlayers { required: 1 })
    );
}

#[test]
fn insufficient_players_message_states_the_minimum() {
    let err = RouletteError::InsufficientPlayers { required: 4 };
    assert!(err.to_string().contains("at least 4"));
}

#[test]
fn start_shuffles_a_snapshot_and_leaves_the_pool_alone() {
    let mut s = session_with(&["A", "B", "C", "D", "E"]);
    start_assignment(&mut s, 2).unwrap();
    let run = s.run.as_ref().unwrap();
    assert_eq!(run.remaining.len(), 5);
    assert_eq!(run.phase, RunPhase::Drawing);
    assert_eq!(run.wheel.segment_count, 5);
    // Same members, order possibly different; the live pool keeps its order.
    let snapshot: BTreeSet<_> = run.remaining.iter().cloned().collect();
    let original: BTreeSet<_> = s.pool.entries().iter().cloned().collect();
    assert_eq!(snapshot, original);
    assert_eq!(s.pool.entries(), ["A", "B", "C", "D", "E"]);
}

#[test]
fn five_players_capacity_two_gives_two_teams_and_one_waiting() {
    let mut s = session_with(&["A", "B", "C", "D", "E"]);
    start_assignment(&mut s, 2).unwrap();
    drive_to_completion(&mut s);

    let run = s.run.as_ref().unwrap();
    assert_eq!(run.phase, RunPhase::Complete);
    assert_eq!(run.completed_teams.len(), 2);
    for team in &run.completed_teams {
        assert_eq!(team.len(), 2);
    }
    assert_eq!(run.leftover.len(), 1);
    assert!(run.current_team.is_empty());
    assert!(run.remaining.is_empty());

    // Exhaustiveness: every original participant assigned exactly once.
    let mut all = assigned_names(&s);
    all.sort();
    assert_eq!(all, ["A", "B", "C", "D", "E"]);
}

#[test]
fn even_division_leaves_no_waiting_group() {
    let mut s = session_with(&["A", "B", "C", "D"]);
    start_assignment(&mut s, 2).unwrap();
    drive_to_completion(&mut s);

    let run = s.run.as_ref().unwrap();
    assert_eq!(run.completed_teams.len(), 2);
    assert!(run.leftover.is_empty());
}

#[test]
fn invariant_holds_after_every_single_draw() {
    let mut s = session_with(&["A", "B", "C", "D", "E", "F", "G"]);
    start_assignment(&mut s, 3).unwrap();
    let expected: BTreeSet<String> =
        s.pool.entries().iter().cloned().collect();

    while s.run.as_ref().unwrap().phase == RunPhase::Drawing {
        draw_next_member(&mut s).unwrap();
        complete_draw(&mut s);
        let all = assigned_names(&s);
        let unique: BTreeSet<String> = all.iter().cloned().collect();
        assert_eq!(unique.len(), all.len(), "a participant was assigned twice");
        assert_eq!(unique, expected, "participants lost or invented");
    }
}

#[test]
fn draw_is_rejected_while_animation_in_flight() {
    let mut s = session_with(&["A", "B", "C", "D"]);
    start_assignment(&mut s, 2).unwrap();
    draw_next_member(&mut s).unwrap();
    let remaining_after_first = s.run.as_ref().unwrap().remaining.clone();

    assert_eq!(draw_next_member(&mut s), Err(RouletteError::DrawInFlight));
    assert_eq!(s.run.as_ref().unwrap().remaining, remaining_after_first);

    complete_draw(&mut s);
    draw_next_member(&mut s).unwrap();
}

#[test]
fn draw_without_a_run_is_rejected() {
    let mut s = session_with(&["A", "B"]);
    assert_eq!(draw_next_member(&mut s), Err(RouletteError::NoActiveRun));
}

#[test]
fn draw_after_completion_is_rejected() {
    let mut s = session_with(&["A", "B"]);
    start_assignment(&mut s, 2).unwrap();
    drive_to_completion(&mut s);
    assert_eq!(draw_next_member(&mut s), Err(RouletteError::NoActiveRun));
}

#[test]
fn draw_outcome_angle_matches_pre_draw_wheel() {
    let mut s = session_with(&["A", "B", "C"]);
    start_assignment(&mut s, 3).unwrap();
    let outcome = draw_next_member(&mut s).unwrap();
    // Three segments on the wheel the page is animating: 120 degrees each.
    let center = outcome.index as f64 * 120.0 + 60.0;
    let expected = (270.0 - center).rem_euclid(360.0) + f64::from(s.extra_rotations) * 360.0;
    assert!((outcome.target_angle - expected).abs() < 1e-9);
    // The run's cached wheel already reflects the shrunk pool.
    assert_eq!(s.run.as_ref().unwrap().wheel.segment_count, 2);
}

#[test]
fn reset_drops_the_run_and_keeps_the_pool() {
    let mut s = session_with(&["A", "B", "C", "D"]);
    start_assignment(&mut s, 2).unwrap();
    draw_next_member(&mut s).unwrap();
    reset_assignment(&mut s);
    assert!(s.run.is_none());
    assert!(!s.spin_in_flight);
    assert_eq!(s.pool.len(), 4);
}

#[test]
fn partition_builds_complete_run_in_one_shot() {
    let mut s = session_with(&["A", "B", "C", "D", "E", "F", "G"]);
    partition_teams(&mut s, 3).unwrap();

    let run = s.run.as_ref().unwrap();
    assert_eq!(run.phase, RunPhase::Complete);
    assert_eq!(run.completed_teams.len(), 2);
    for team in &run.completed_teams {
        assert_eq!(team.len(), 3);
    }
    assert_eq!(run.leftover.len(), 1);
    assert!(run.remaining.is_empty());
    assert!(!s.spin_in_flight);

    let mut all = assigned_names(&s);
    all.sort();
    assert_eq!(all, ["A", "B", "C", "D", "E", "F", "G"]);
}

#[test]
fn partition_requires_enough_participants() {
    let mut s = session_with(&["A", "B"]);
    assert_eq!(
        partition_teams(&mut s, 3),
        Err(RouletteError::InsufficientPlayers { required: 3 })
    );
}

#[test]
fn restart_with_new_capacity_replaces_the_run() {
    let mut s = session_with(&["A", "B", "C", "D", "E", "F"]);
    start_assignment(&mut s, 2).unwrap();
    draw_next_member(&mut s).unwrap();
    complete_draw(&mut s);

    start_assignment(&mut s, 3).unwrap();
    let run = s.run.as_ref().unwrap();
    assert_eq!(run.capacity, 3);
    assert_eq!(run.remaining.len(), 6);
    assert!(run.completed_teams.is_empty());
    assert!(run.current_team.is_empty());
}
