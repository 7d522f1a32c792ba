//! Team assignment: sequential consuming draws against a shrinking shuffled
//! snapshot, plus the one-shot shuffle-and-chunk quick mode.

use crate::logic::draw::{draw_single_index, shuffled};
use crate::logic::wheel::resolve_target_angle;
use crate::models::{
    AssignmentRun, DrawOutcome, RouletteError, RouletteSession, RunPhase, WheelLayout,
};

/// Start a team assignment run: shuffle a snapshot of the pool into the
/// run's remaining list. The live pool is untouched for the whole run.
/// Requires at least `capacity` participants.
pub fn start_assignment(
    session: &mut RouletteSession,
    capacity: usize,
) -> Result<(), RouletteError> {
    if session.spin_in_flight {
        return Err(RouletteError::DrawInFlight);
    }
    if capacity < 1 {
        return Err(RouletteError::InsufficientPlayers { required: 1 });
    }
    if session.pool.len() < capacity {
        return Err(RouletteError::InsufficientPlayers { required: capacity });
    }
    let mut rng = rand::thread_rng();
    let remaining = shuffled(&mut rng, session.pool.snapshot());
    let wheel = WheelLayout::for_labels(&remaining);
    session.run = Some(AssignmentRun {
        capacity,
        remaining,
        current_team: Vec::new(),
        completed_teams: Vec::new(),
        leftover: Vec::new(),
        phase: RunPhase::Drawing,
        last_draw: None,
        wheel,
    });
    Ok(())
}

/// Draw the next member: one uniform pick from the remaining pool, removed
/// and appended to the team being filled. The target angle is resolved
/// against the wheel as it stood before the removal, since that is the wheel
/// the page is animating. Exactly one logical mutation per accepted call;
/// further draws are rejected until the animation completes.
pub fn draw_next_member(session: &mut RouletteSession) -> Result<DrawOutcome, RouletteError> {
    if session.spin_in_flight {
        return Err(RouletteError::DrawInFlight);
    }
    let extra_rotations = session.extra_rotations;
    let run = session.run.as_mut().ok_or(RouletteError::NoActiveRun)?;
    if run.phase != RunPhase::Drawing {
        return Err(RouletteError::NoActiveRun);
    }
    // Unreachable through normal transitions; the run flips to Complete on
    // exhaustion before another draw can be accepted.
    if run.remaining.is_empty() {
        return Err(RouletteError::EmptyPool);
    }

    let mut rng = rand::thread_rng();
    let index = draw_single_index(&mut rng, run.remaining.len())?;
    let target_angle = resolve_target_angle(index, run.remaining.len(), extra_rotations)?;
    let identifier = run.remaining.remove(index);

    run.current_team.push(identifier.clone());
    if run.current_team.len() == run.capacity {
        run.completed_teams.push(std::mem::take(&mut run.current_team));
    }
    if run.remaining.is_empty() {
        if !run.current_team.is_empty() {
            run.leftover = std::mem::take(&mut run.current_team);
        }
        run.phase = RunPhase::Complete;
    }
    run.wheel = WheelLayout::for_labels(&run.remaining);

    let outcome = DrawOutcome {
        index,
        identifier,
        target_angle,
    };
    run.last_draw = Some(outcome.clone());
    session.spin_in_flight = true;
    Ok(outcome)
}

/// Animation-completion signal for a team draw: release the in-flight guard.
/// Idempotent; the membership change was committed at draw time.
pub fn complete_draw(session: &mut RouletteSession) {
    session.spin_in_flight = false;
}

/// Quick mode: one shuffle, then contiguous chunks of `capacity`. Produces a
/// run already complete with the remainder in `leftover`. No per-pick
/// animation, so the in-flight guard is never raised. The two partition
/// strategies are never mixed within one run.
pub fn partition_teams(
    session: &mut RouletteSession,
    capacity: usize,
) -> Result<(), RouletteError> {
    if session.spin_in_flight {
        return Err(RouletteError::DrawInFlight);
    }
    if capacity < 1 {
        return Err(RouletteError::InsufficientPlayers { required: 1 });
    }
    if session.pool.len() < capacity {
        return Err(RouletteError::InsufficientPlayers { required: capacity });
    }
    let mut rng = rand::thread_rng();
    let drawn = shuffled(&mut rng, session.pool.snapshot());
    let completed_teams: Vec<Vec<String>> = drawn
        .chunks_exact(capacity)
        .map(|chunk| chunk.to_vec())
        .collect();
    let leftover = drawn[completed_teams.len() * capacity..].to_vec();
    session.run = Some(AssignmentRun {
        capacity,
        remaining: Vec::new(),
        current_team: Vec::new(),
        completed_teams,
        leftover,
        phase: RunPhase::Complete,
        last_draw: None,
        wheel: WheelLayout::default(),
    });
    Ok(())
}

/// Drop the run state in any phase. The underlying pool is untouched.
pub fn reset_assignment(session: &mut RouletteSession) {
    session.run = None;
    session.spin_in_flight = false;
}
