//! Overlap resolution.
//!
//! Rewrites one employee's line so that no stored task overlaps an
//! incoming `[start, end)` row range. Each stored task is classified
//! against the range independently of the others:
//!
//! | Relation to `[start, end)` | Outcome |
//! |----------------------------|---------|
//! | Disjoint                   | Retained unchanged |
//! | Fully covered              | Dropped |
//! | Overlaps on the left only  | Tail trimmed (`end = start`) |
//! | Overlaps on the right only | Head trimmed (`start = end`) |
//! | Straddles both sides       | Split into two blocks around the range |
//!
//! The pass is idempotent: against an already-resolved line it changes
//! nothing.

use crate::error::EngineError;
use crate::models::{Board, TOTAL_ROWS};

/// Rewrites `employee_id`'s tasks so none overlaps `[start, end)`.
///
/// `except` exempts one task from its own collision — the task currently
/// being dragged or edited. Other employees' lines are never touched; an
/// employee id with no line is a no-op. Fails with
/// [`EngineError::InvalidRange`] (and no mutation) unless
/// `start < end && end <= TOTAL_ROWS`.
///
/// Split blocks keep the original kind and label. The earlier piece keeps
/// the original task id; the later piece is minted a fresh one, since two
/// live tasks can never share an id.
pub fn resolve_overlaps(
    board: &mut Board,
    employee_id: &str,
    start: u32,
    end: u32,
    except: Option<u64>,
) -> Result<(), EngineError> {
    if start >= end || end > TOTAL_ROWS {
        return Err(EngineError::InvalidRange { start, end });
    }

    let Some(line) = board.take_line(employee_id) else {
        return Ok(());
    };

    let mut resolved = Vec::with_capacity(line.len() + 1);
    for task in line {
        if except == Some(task.id) || task.end <= start || task.start >= end {
            resolved.push(task);
        } else if task.start >= start && task.end <= end {
            log::trace!(
                "task {} [{}, {}) fully covered by [{start}, {end}): dropped",
                task.id,
                task.start,
                task.end
            );
        } else if task.start < start && task.end <= end {
            // Tail collides: cut it off at the new range's start.
            let mut kept = task;
            kept.end = start;
            resolved.push(kept);
        } else if task.start >= start {
            // Head collides: cut it off at the new range's end.
            let mut kept = task;
            kept.start = end;
            resolved.push(kept);
        } else {
            // Straddles the range: split into a piece on each side.
            let mut left = task.clone();
            left.end = start;
            let mut right = task;
            right.id = board.mint_task_id();
            right.start = end;
            log::trace!(
                "task {} straddles [{start}, {end}): split into [{}, {}) and {} [{}, {})",
                left.id,
                left.start,
                left.end,
                right.id,
                right.start,
                right.end
            );
            resolved.push(left);
            resolved.push(right);
        }
    }

    board.put_line(employee_id, resolved);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Employee, TaskKind};

    fn board_with(line: &[(TaskKind, u32, u32)]) -> Board {
        let mut board = Board::new();
        board.add_employee(Employee::new("e1", 0, TOTAL_ROWS));
        board.add_employee(Employee::new("e2", 0, TOTAL_ROWS));
        for &(kind, start, end) in line {
            board.insert_task("e1", kind, kind.label(), start, end);
        }
        board
    }

    fn ranges(board: &Board, employee_id: &str) -> Vec<(u32, u32)> {
        board
            .tasks_by_employee(employee_id)
            .iter()
            .map(|t| (t.start, t.end))
            .collect()
    }

    #[test]
    fn test_disjoint_retained() {
        let mut board = board_with(&[(TaskKind::Gallery, 0, 2), (TaskKind::Break, 5, 6)]);
        resolve_overlaps(&mut board, "e1", 2, 5, None).unwrap();
        assert_eq!(ranges(&board, "e1"), vec![(0, 2), (5, 6)]);
    }

    #[test]
    fn test_fully_covered_dropped() {
        let mut board = board_with(&[(TaskKind::Gallery, 2, 3)]);
        resolve_overlaps(&mut board, "e1", 2, 3, None).unwrap();
        assert!(ranges(&board, "e1").is_empty());
    }

    #[test]
    fn test_left_overlap_trims_tail() {
        let mut board = board_with(&[(TaskKind::Gallery, 1, 4)]);
        resolve_overlaps(&mut board, "e1", 3, 5, None).unwrap();
        assert_eq!(ranges(&board, "e1"), vec![(1, 3)]);
    }

    #[test]
    fn test_right_overlap_trims_head() {
        let mut board = board_with(&[(TaskKind::Gallery, 3, 5)]);
        resolve_overlaps(&mut board, "e1", 1, 4, None).unwrap();
        assert_eq!(ranges(&board, "e1"), vec![(4, 5)]);
    }

    #[test]
    fn test_straddle_splits_in_two() {
        let mut board = board_with(&[(TaskKind::Gallery, 0, 6)]);
        let original_id = board.tasks_by_employee("e1")[0].id;
        resolve_overlaps(&mut board, "e1", 2, 3, None).unwrap();

        let line = board.tasks_by_employee("e1").to_vec();
        assert_eq!(ranges(&board, "e1"), vec![(0, 2), (3, 6)]);
        // Both pieces keep the kind and label; the earlier one keeps the id
        assert_eq!(line[0].id, original_id);
        assert_ne!(line[1].id, original_id);
        assert!(line.iter().all(|t| t.kind == TaskKind::Gallery));
        assert!(line.iter().all(|t| t.label == "Gallery"));
    }

    #[test]
    fn test_except_exempts_edited_task() {
        let mut board = board_with(&[(TaskKind::Tour, 2, 4)]);
        let id = board.tasks_by_employee("e1")[0].id;
        resolve_overlaps(&mut board, "e1", 2, 4, Some(id)).unwrap();
        assert_eq!(ranges(&board, "e1"), vec![(2, 4)]);
    }

    #[test]
    fn test_other_employees_untouched() {
        let mut board = board_with(&[(TaskKind::Gallery, 0, 4)]);
        board.insert_task("e2", TaskKind::Gallery, "Gallery", 0, 4);
        resolve_overlaps(&mut board, "e1", 0, 4, None).unwrap();
        assert!(ranges(&board, "e1").is_empty());
        assert_eq!(ranges(&board, "e2"), vec![(0, 4)]);
    }

    #[test]
    fn test_unknown_employee_is_noop() {
        let mut board = board_with(&[]);
        resolve_overlaps(&mut board, "ghost", 0, 4, None).unwrap();
        assert_eq!(board.task_count(), 0);
    }

    #[test]
    fn test_invalid_range_rejected_without_mutation() {
        let mut board = board_with(&[(TaskKind::Gallery, 0, 4)]);
        assert_eq!(
            resolve_overlaps(&mut board, "e1", 3, 3, None),
            Err(EngineError::InvalidRange { start: 3, end: 3 })
        );
        assert_eq!(
            resolve_overlaps(&mut board, "e1", 0, TOTAL_ROWS + 1, None),
            Err(EngineError::InvalidRange {
                start: 0,
                end: TOTAL_ROWS + 1
            })
        );
        assert_eq!(ranges(&board, "e1"), vec![(0, 4)]);
    }

    #[test]
    fn test_idempotent() {
        let mut board = board_with(&[
            (TaskKind::Gallery, 0, 6),
            (TaskKind::Break, 7, 9),
            (TaskKind::Tidy, 10, 12),
        ]);
        resolve_overlaps(&mut board, "e1", 2, 8, None).unwrap();
        let once = ranges(&board, "e1");
        resolve_overlaps(&mut board, "e1", 2, 8, None).unwrap();
        assert_eq!(ranges(&board, "e1"), once);
    }
}
