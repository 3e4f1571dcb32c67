//! The placement façade.
//!
//! The public mutation path hosts drive: place a one-slot block on the
//! grid, or move an existing block to a new range. Both compose the
//! resolver and the compactor, so the board always settles in the same
//! terminal phase: no overlaps, adjacent eligible blocks unified.
//!
//! Every precondition is checked before the first mutation; a call that
//! fails returns with the board exactly as it was.

use crate::error::EngineError;
use crate::models::{Board, Task, TaskKind, TOTAL_ROWS};

use super::compactor::merge_adjacent;
use super::resolver::resolve_overlaps;

/// Places a one-slot block of `kind` at `row` on `employee_id`'s line.
///
/// Resolves `[row, row + 1)` against the employee's existing blocks,
/// inserts the new block with the kind's canonical label, then compacts
/// the line unless the kind is tour-like (bookings stay separate).
///
/// Returns the block covering the placed row after compaction: the new
/// block itself, or the merged block that absorbed it. Either way the
/// returned id is live and suitable as the host's selection handle.
///
/// # Errors
/// [`EngineError::InvalidRange`] if `row >= TOTAL_ROWS`;
/// [`EngineError::EmployeeNotFound`] if `employee_id` is not rostered.
/// Neither mutates the board.
pub fn place_task(
    board: &mut Board,
    employee_id: &str,
    row: u32,
    kind: TaskKind,
) -> Result<Task, EngineError> {
    if row >= TOTAL_ROWS {
        return Err(EngineError::InvalidRange {
            start: row,
            end: row + 1,
        });
    }
    if board.employee(employee_id).is_none() {
        return Err(EngineError::EmployeeNotFound(employee_id.to_string()));
    }

    let (start, end) = (row, row + 1);
    resolve_overlaps(board, employee_id, start, end, None)?;
    let id = board.insert_task(employee_id, kind, kind.label(), start, end);
    log::debug!("placed task {id} ({}) at row {row} for '{employee_id}'", kind.label());

    if !kind.is_tour_like() {
        merge_adjacent(board, employee_id);
    }

    surviving_block(board, employee_id, row, id)
}

/// Moves an existing block to the row range `[start, end)`.
///
/// The drag/edit path: the moved block is exempt from its own collision,
/// every other block on the line is resolved against the new range, and
/// the line is compacted afterwards unless the block is tour-like.
///
/// Returns the block covering `start` after compaction (the moved block,
/// or the merged block that absorbed it).
///
/// # Errors
/// [`EngineError::InvalidRange`] for a range off the grid or with
/// `start >= end`; [`EngineError::TaskNotFound`] for an unknown id.
/// Neither mutates the board.
pub fn move_task(
    board: &mut Board,
    task_id: u64,
    start: u32,
    end: u32,
) -> Result<Task, EngineError> {
    if start >= end || end > TOTAL_ROWS {
        return Err(EngineError::InvalidRange { start, end });
    }
    let (employee_id, kind) = match board.task(task_id) {
        Some(task) => (task.employee_id.clone(), task.kind),
        None => return Err(EngineError::TaskNotFound(task_id)),
    };

    resolve_overlaps(board, &employee_id, start, end, Some(task_id))?;
    board.set_task_range(task_id, start, end)?;
    log::debug!("moved task {task_id} to [{start}, {end}) for '{employee_id}'");

    if !kind.is_tour_like() {
        merge_adjacent(board, &employee_id);
    }

    surviving_block(board, &employee_id, start, task_id)
}

/// The block covering `row` after an insert-then-compact pass.
///
/// Exactly one block covers the row at this point; `fallback_id` only
/// feeds the error if that ever stops holding.
fn surviving_block(
    board: &Board,
    employee_id: &str,
    row: u32,
    fallback_id: u64,
) -> Result<Task, EngineError> {
    board
        .tasks_by_employee(employee_id)
        .iter()
        .find(|t| t.contains_row(row))
        .cloned()
        .ok_or(EngineError::TaskNotFound(fallback_id))
}
