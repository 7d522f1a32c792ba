//! Roulette team randomizer web app: library with models and selection logic.

pub mod logic;
pub mod models;

pub use logic::{
    complete_draw, complete_spin, draw_next_member, draw_single_index, normalize_degrees,
    partition_teams, reset_assignment, resolve_target_angle, shuffled, spin_wheel,
    start_assignment,
};
pub use models::{
    AssignmentRun, DrawOutcome, Pool, RouletteError, RouletteSession, RunPhase, SessionId,
    SpinOutcome, WheelLayout, WheelSegment, DEFAULT_EXTRA_ROTATIONS, POINTER_DEGREES,
};
