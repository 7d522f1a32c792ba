//! Selection logic: draw engine, angle resolution, spin and team assignment.

mod assignment;
mod draw;
mod spin;
mod wheel;

pub use assignment::{
    complete_draw, draw_next_member, partition_teams, reset_assignment, start_assignment,
};
pub use draw::{draw_single_index, shuffled};
pub use spin::{complete_spin, spin_wheel};
pub use wheel::{normalize_degrees, resolve_target_angle};
