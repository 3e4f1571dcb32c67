//! Structural integrity checks for a whole board.
//!
//! The engine maintains its invariants per call; this module checks a
//! complete board in one sweep, for hosts loading a snapshot or for
//! test harnesses asserting the terminal state. Detects:
//! - Duplicate employee ids on the roster
//! - Duplicate task ids
//! - Empty or out-of-bounds task ranges, and empty or out-of-bounds shifts
//! - Overlapping tasks within one employee's line
//! - Tasks referencing an employee absent from the roster (orphans)

use std::collections::HashSet;

use crate::models::{Board, TOTAL_ROWS};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two roster entries share the same id.
    DuplicateEmployeeId,
    /// Two tasks share the same id.
    DuplicateTaskId,
    /// A task range or shift with `start >= end`.
    EmptyRange,
    /// A task range or shift extending past the day grid.
    OutOfBounds,
    /// Two tasks on one employee's line overlap.
    OverlappingTasks,
    /// A task owned by an employee id that is not on the roster.
    OrphanTask,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a board's structure.
///
/// Checks:
/// 1. No duplicate employee ids
/// 2. No duplicate task ids
/// 3. Every task range and shift satisfies `start < end <= TOTAL_ROWS`
/// 4. No two tasks on one line overlap
/// 5. Every task's employee id is on the roster
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_board(board: &Board) -> ValidationResult {
    let mut errors = Vec::new();

    let mut employee_ids = HashSet::new();
    for employee in board.employees() {
        if !employee_ids.insert(employee.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateEmployeeId,
                format!("Duplicate employee id: {}", employee.id),
            ));
        }
        if employee.shift_start >= employee.shift_end {
            errors.push(ValidationError::new(
                ValidationErrorKind::EmptyRange,
                format!(
                    "Employee '{}' has an empty shift [{}, {})",
                    employee.id, employee.shift_start, employee.shift_end
                ),
            ));
        } else if employee.shift_end > TOTAL_ROWS {
            errors.push(ValidationError::new(
                ValidationErrorKind::OutOfBounds,
                format!(
                    "Employee '{}' shift ends at row {} past the day grid",
                    employee.id, employee.shift_end
                ),
            ));
        }
    }

    let mut task_ids = HashSet::new();
    for task in board.all_tasks() {
        if !task_ids.insert(task.id) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateTaskId,
                format!("Duplicate task id: {}", task.id),
            ));
        }
        if task.start >= task.end {
            errors.push(ValidationError::new(
                ValidationErrorKind::EmptyRange,
                format!(
                    "Task {} has an empty range [{}, {})",
                    task.id, task.start, task.end
                ),
            ));
        } else if task.end > TOTAL_ROWS {
            errors.push(ValidationError::new(
                ValidationErrorKind::OutOfBounds,
                format!("Task {} ends at row {} past the day grid", task.id, task.end),
            ));
        }
        if !employee_ids.contains(task.employee_id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::OrphanTask,
                format!(
                    "Task {} belongs to unrostered employee '{}'",
                    task.id, task.employee_id
                ),
            ));
        }
    }

    for (employee_id, line) in board.task_lines() {
        let mut sorted: Vec<(u32, u32, u64)> = line.iter().map(|t| (t.start, t.end, t.id)).collect();
        sorted.sort();
        for pair in sorted.windows(2) {
            let (_, first_end, first_id) = pair[0];
            let (second_start, _, second_id) = pair[1];
            if second_start < first_end {
                errors.push(ValidationError::new(
                    ValidationErrorKind::OverlappingTasks,
                    format!(
                        "Tasks {first_id} and {second_id} overlap on '{employee_id}'"
                    ),
                ));
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
