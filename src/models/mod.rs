//! Data structures for the roulette randomizer: pool, wheel geometry, session.

mod pool;
mod session;
mod wheel;

pub use pool::Pool;
pub use session::{
    AssignmentRun, DrawOutcome, RouletteError, RouletteSession, RunPhase, SessionId, SpinOutcome,
};
pub use wheel::{WheelLayout, WheelSegment, DEFAULT_EXTRA_ROTATIONS, POINTER_DEGREES};
