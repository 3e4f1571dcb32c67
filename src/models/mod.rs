//! Rota domain models.
//!
//! Core data types for the day grid: the discretized timeline, typed
//! task blocks, the employee roster, and the board that owns every
//! block for the session.
//!
//! # Units
//! All positions and widths are row indices into the fixed 15-minute
//! grid (see [`timeline`]). Wall-clock values appear only at the
//! conversion boundary.

mod board;
mod employee;
mod task;
pub mod timeline;

pub use board::Board;
pub use employee::Employee;
pub use task::{Task, TaskKind};
pub use timeline::TOTAL_ROWS;
