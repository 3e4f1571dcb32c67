//! Day-quality metrics.
//!
//! Read-only indicators computed from a board in one pass, for hosts
//! that show a summary strip next to the grid.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Busy slots | Rows covered by any task, per employee |
//! | Slots by kind | Total rows covered, per task kind |
//! | Front desk gaps | Rows where nobody is on the desk |
//! | Idle slots | In-shift rows with no task, per employee |

use std::collections::HashMap;

use crate::models::{Board, TaskKind, TOTAL_ROWS};

/// Coverage indicators for one board.
///
/// All values are in rows (15-minute slots).
#[derive(Debug, Clone)]
pub struct DayCoverage {
    /// Rows covered by any task, per employee id.
    pub busy_slots_by_employee: HashMap<String, u32>,
    /// Total rows covered per task kind, across all employees.
    pub slots_by_kind: HashMap<TaskKind, u32>,
    /// Rows of the day with no front-desk block on any line, ascending.
    pub uncovered_front_desk_rows: Vec<u32>,
    /// In-shift rows with no task, per rostered employee id.
    pub idle_slots_by_employee: HashMap<String, u32>,
}

impl DayCoverage {
    /// Computes coverage from a board.
    pub fn calculate(board: &Board) -> Self {
        let mut busy_slots_by_employee: HashMap<String, u32> = HashMap::new();
        let mut slots_by_kind: HashMap<TaskKind, u32> = HashMap::new();
        let mut front_desk_rows = [false; TOTAL_ROWS as usize];

        for (employee_id, line) in board.task_lines() {
            let busy: u32 = line.iter().map(|t| t.duration_rows()).sum();
            busy_slots_by_employee.insert(employee_id.to_string(), busy);

            for task in line {
                *slots_by_kind.entry(task.kind).or_insert(0) += task.duration_rows();
                if task.kind == TaskKind::FrontDesk {
                    for row in task.start..task.end.min(TOTAL_ROWS) {
                        front_desk_rows[row as usize] = true;
                    }
                }
            }
        }

        let uncovered_front_desk_rows = (0..TOTAL_ROWS)
            .filter(|&row| !front_desk_rows[row as usize])
            .collect();

        let mut idle_slots_by_employee = HashMap::new();
        for employee in board.employees() {
            let idle = (employee.shift_start..employee.shift_end)
                .filter(|&row| {
                    !board
                        .tasks_by_employee(&employee.id)
                        .iter()
                        .any(|t| t.contains_row(row))
                })
                .count() as u32;
            idle_slots_by_employee.insert(employee.id.clone(), idle);
        }

        Self {
            busy_slots_by_employee,
            slots_by_kind,
            uncovered_front_desk_rows,
            idle_slots_by_employee,
        }
    }

    /// Whether every row of the day has someone on the front desk.
    pub fn is_front_desk_covered(&self) -> bool {
        self.uncovered_front_desk_rows.is_empty()
    }
}
