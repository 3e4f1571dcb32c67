//! Day-grid staff rota engine.
//!
//! Assigns typed work blocks ("tasks") to employees along a shared,
//! discretized daily timeline and keeps every employee's line internally
//! consistent on each insert or edit: colliding blocks are trimmed,
//! split, or dropped, and contiguous same-kind blocks are compacted into
//! one. Presentation (grid rendering, dialogs, keyboard handling) lives
//! in the host, which drives the engine and re-reads the board.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Task`, `TaskKind`, `Employee`, `Board`,
//!   and the `timeline` row/wall-clock conversions
//! - **`engine`**: Board mutation — overlap resolution, adjacent-block
//!   compaction, the placement façade, coverage metrics
//! - **`validation`**: Structural integrity checks over a whole board
//! - **`error`**: The recoverable error taxonomy
//!
//! # Architecture
//!
//! The host session owns a single [`models::Board`]. All mutation is
//! synchronous and runs to completion before control returns; there is
//! no partial state observable between calls. One engine call at a time
//! is the only discipline a concurrent host needs.
//!
//! ```
//! use rota_grid::engine::place_task;
//! use rota_grid::models::{Board, Employee, TaskKind, TOTAL_ROWS};
//!
//! let mut board = Board::new();
//! board.add_employee(Employee::new("mara", 0, TOTAL_ROWS).with_name("Mara"));
//!
//! let placed = place_task(&mut board, "mara", 3, TaskKind::Gallery)?;
//! assert_eq!(placed.time_label(), "10:15-10:30");
//! # Ok::<(), rota_grid::error::EngineError>(())
//! ```

pub mod engine;
pub mod error;
pub mod models;
pub mod validation;
