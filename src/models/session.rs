//! RouletteSession: root aggregate owning the pool, wheel geometry and run state.

use crate::models::pool::Pool;
use crate::models::wheel::{WheelLayout, DEFAULT_EXTRA_ROTATIONS};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Errors that can occur during pool, spin, or assignment operations.
#[derive(Clone, Debug, PartialEq)]
pub enum RouletteError {
    /// Identifier is empty after trimming surrounding whitespace.
    EmptyIdentifier,
    /// Identifier already present in the pool (exact match).
    DuplicateIdentifier,
    /// Participant index outside the pool bounds.
    IndexOutOfRange { index: usize, len: usize },
    /// A draw was requested against an empty pool.
    EmptyPool,
    /// Wheel geometry requested for zero segments.
    InvalidSegmentCount,
    /// Not enough participants to form teams of the requested capacity.
    InsufficientPlayers { required: usize },
    /// A single-winner spin needs at least two candidates.
    InsufficientCandidates,
    /// A spin or draw animation is still in flight.
    DrawInFlight,
    /// No assignment run is accepting draws.
    NoActiveRun,
}

impl std::fmt::Display for RouletteError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RouletteError::EmptyIdentifier => write!(f, "Participant name cannot be empty"),
            RouletteError::DuplicateIdentifier => write!(f, "That name is already on the list"),
            RouletteError::IndexOutOfRange { index, len } => {
                write!(f, "No participant at position {} (list has {})", index, len)
            }
            RouletteError::EmptyPool => write!(f, "Add participants to the list first"),
            RouletteError::InvalidSegmentCount => {
                write!(f, "The wheel needs at least one segment")
            }
            RouletteError::InsufficientPlayers { required } => {
                write!(f, "Need at least {} participants to form teams", required)
            }
            RouletteError::InsufficientCandidates => {
                write!(f, "Need at least 2 participants for a meaningful spin")
            }
            RouletteError::DrawInFlight => write!(f, "The wheel is still spinning"),
            RouletteError::NoActiveRun => write!(f, "No team draw in progress"),
        }
    }
}

/// Unique identifier for a session.
pub type SessionId = Uuid;

/// Result of a committed single-winner spin. The pool is not consumed, so
/// the same pool can be spun again once the animation completes.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SpinOutcome {
    pub index: usize,
    pub winner: String,
    /// Absolute rotation (degrees) that parks the winner under the pointer.
    pub target_angle: f64,
}

/// Result of one consuming team-mode draw against the run's remaining pool.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DrawOutcome {
    /// Index into the remaining pool as it was when the draw happened.
    pub index: usize,
    pub identifier: String,
    pub target_angle: f64,
}

/// Phase of a team assignment run.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RunPhase {
    /// Accepting draws against the remaining pool.
    Drawing,
    /// Remaining pool exhausted; teams and leftover are final.
    Complete,
}

/// A team assignment run over a shuffled snapshot of the pool.
///
/// Invariant: completed teams + current team + leftover + remaining always
/// hold exactly the participant set captured at run start.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AssignmentRun {
    /// Players per team; fixed for the whole run.
    pub capacity: usize,
    /// Shuffled snapshot still awaiting assignment. The live pool is untouched.
    pub remaining: Vec<String>,
    /// Team currently being filled.
    pub current_team: Vec<String>,
    pub completed_teams: Vec<Vec<String>>,
    /// Partial final team when capacity does not divide the pool evenly.
    /// Always surfaced to the caller, never discarded or padded.
    pub leftover: Vec<String>,
    pub phase: RunPhase,
    /// Most recent consuming draw (drives the page animation).
    pub last_draw: Option<DrawOutcome>,
    /// Geometry of the shrinking wheel drawn for the remaining pool.
    pub wheel: WheelLayout,
}

/// Full session state: participant pool, wheel geometry, spin and run state.
/// Single owner of all mutable state; handlers pass it by reference.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RouletteSession {
    pub id: SessionId,
    pub created_at: DateTime<Utc>,
    pub pool: Pool,
    /// Cached geometry for the full pool; rebuilt on every pool mutation.
    pub wheel: WheelLayout,
    /// Extra full rotations applied to spin targets.
    pub extra_rotations: u32,
    /// At most one spin/draw animation may be in flight at a time. Draws
    /// arriving while set are rejected, never silently applied twice.
    pub spin_in_flight: bool,
    /// Last committed single-winner spin, if any.
    pub last_spin: Option<SpinOutcome>,
    /// Active or finished team assignment run; `None` when idle.
    pub run: Option<AssignmentRun>,
}

impl Default for RouletteSession {
    fn default() -> Self {
        Self::new()
    }
}

impl RouletteSession {
    /// Create an empty session with the default spin drama.
    pub fn new() -> Self {
        Self::with_extra_rotations(DEFAULT_EXTRA_ROTATIONS)
    }

    pub fn with_extra_rotations(extra_rotations: u32) -> Self {
        Self {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            pool: Pool::new(),
            wheel: WheelLayout::default(),
            extra_rotations,
            spin_in_flight: false,
            last_spin: None,
            run: None,
        }
    }

    /// Add a participant. Any in-progress run is aborted and the cached
    /// wheel geometry rebuilt.
    pub fn add_participant(&mut self, name: &str) -> Result<(), RouletteError> {
        self.pool.add(name)?;
        self.invalidate_after_pool_change();
        Ok(())
    }

    /// Remove the participant at `index`. Same invalidation as add.
    pub fn remove_participant(&mut self, index: usize) -> Result<String, RouletteError> {
        let removed = self.pool.remove_at(index)?;
        self.invalidate_after_pool_change();
        Ok(removed)
    }

    /// Clear the participant list. Same invalidation as add.
    pub fn clear_participants(&mut self) {
        self.pool.clear();
        self.invalidate_after_pool_change();
    }

    /// Bulk-add participants from CSV text (one name per field, headerless).
    /// Blank and duplicate records are skipped and counted, not errors.
    /// Returns (added, skipped).
    pub fn import_participants(&mut self, csv_text: &str) -> (usize, usize) {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(csv_text.as_bytes());
        let mut added = 0usize;
        let mut skipped = 0usize;
        for record in reader.records() {
            let record = match record {
                Ok(r) => r,
                Err(_) => {
                    skipped += 1;
                    continue;
                }
            };
            for field in record.iter() {
                match self.pool.add(field) {
                    Ok(()) => added += 1,
                    Err(_) => skipped += 1,
                }
            }
        }
        if added > 0 {
            self.invalidate_after_pool_change();
        }
        (added, skipped)
    }

    /// Set the number of extra full rotations for future spins.
    pub fn set_extra_rotations(&mut self, extra_rotations: u32) {
        self.extra_rotations = extra_rotations;
    }

    /// Pool mutations abort the run, drop the last spin result, release the
    /// in-flight guard and rebuild the cached wheel geometry.
    fn invalidate_after_pool_change(&mut self) {
        self.run = None;
        self.last_spin = None;
        self.spin_in_flight = false;
        self.wheel = WheelLayout::for_labels(self.pool.entries());
    }
}
