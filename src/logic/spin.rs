//! Single-winner spin: non-consuming draw plus target angle resolution.

use crate::logic::draw::draw_single_index;
use crate::logic::wheel::resolve_target_angle;
use crate::models::{RouletteError, RouletteSession, SpinOutcome};

/// Spin the wheel for a single winner. The pool is not consumed, so repeat
/// spins over the same list are allowed once the animation completes.
///
/// Policy: a pool of exactly one candidate is rejected as not meaningful
/// (the sole entry would always win).
pub fn spin_wheel(session: &mut RouletteSession) -> Result<SpinOutcome, RouletteError> {
    if session.spin_in_flight {
        return Err(RouletteError::DrawInFlight);
    }
    let n = session.pool.len();
    if n == 0 {
        return Err(RouletteError::EmptyPool);
    }
    if n < 2 {
        return Err(RouletteError::InsufficientCandidates);
    }
    let mut rng = rand::thread_rng();
    let index = draw_single_index(&mut rng, n)?;
    let target_angle = resolve_target_angle(index, n, session.extra_rotations)?;
    let outcome = SpinOutcome {
        index,
        winner: session.pool.entries()[index].clone(),
        target_angle,
    };
    session.last_spin = Some(outcome.clone());
    session.spin_in_flight = true;
    Ok(outcome)
}

/// Animation-completion signal from the page: release the in-flight guard.
/// Idempotent; the winner was committed at spin time.
pub fn complete_spin(session: &mut RouletteSession) {
    session.spin_in_flight = false;
}
