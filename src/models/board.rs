//! The board: owned store of all task blocks.
//!
//! The board maps each employee id to a start-sorted collection of
//! non-overlapping tasks, and owns the roster plus the task id counter.
//! It exposes read accessors and direct deletion; interval-rewriting
//! mutation goes through the `engine` module.
//!
//! # Ownership
//! The host session owns a single `Board`. Tasks are created only by the
//! placement façade, rewritten only by the resolver and compactor, and
//! destroyed either by the resolver (full-coverage drop) or by
//! [`Board::remove_task`]. The store does not require an employee to be
//! on the roster in order to hold tasks under that id; only placement
//! checks the roster.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::error::EngineError;
use super::{Employee, Task, TaskKind};

/// Owned store of employees and their task blocks.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Board {
    employees: Vec<Employee>,
    tasks: HashMap<String, Vec<Task>>,
    next_task_id: u64,
}

impl Board {
    /// Creates an empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an employee to the roster.
    ///
    /// Roster order is display order. Id uniqueness is the caller's
    /// responsibility; `validation::validate_board` reports duplicates.
    pub fn add_employee(&mut self, employee: Employee) {
        self.employees.push(employee);
    }

    /// Renames an employee.
    pub fn rename_employee(
        &mut self,
        employee_id: &str,
        name: impl Into<String>,
    ) -> Result<(), EngineError> {
        match self.employees.iter_mut().find(|e| e.id == employee_id) {
            Some(employee) => {
                employee.name = name.into();
                Ok(())
            }
            None => Err(EngineError::EmployeeNotFound(employee_id.to_string())),
        }
    }

    /// Removes an employee from the roster, dropping all their tasks.
    pub fn remove_employee(&mut self, employee_id: &str) -> Result<Employee, EngineError> {
        match self.employees.iter().position(|e| e.id == employee_id) {
            Some(index) => {
                let dropped = self.tasks.remove(employee_id).map(|t| t.len()).unwrap_or(0);
                log::debug!("removing employee '{employee_id}' and {dropped} task(s)");
                Ok(self.employees.remove(index))
            }
            None => Err(EngineError::EmployeeNotFound(employee_id.to_string())),
        }
    }

    /// The roster, in display order.
    pub fn employees(&self) -> &[Employee] {
        &self.employees
    }

    /// Looks up an employee by id.
    pub fn employee(&self, employee_id: &str) -> Option<&Employee> {
        self.employees.iter().find(|e| e.id == employee_id)
    }

    /// An employee's tasks, sorted by start row.
    ///
    /// Empty for employees with no tasks (or not on the board at all).
    pub fn tasks_by_employee(&self, employee_id: &str) -> &[Task] {
        self.tasks
            .get(employee_id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Looks up a task by id.
    pub fn task(&self, task_id: u64) -> Option<&Task> {
        self.tasks.values().flatten().find(|t| t.id == task_id)
    }

    /// Iterates all tasks on the board, grouped by employee.
    pub fn all_tasks(&self) -> impl Iterator<Item = &Task> {
        self.tasks.values().flatten()
    }

    /// Iterates `(employee_id, tasks)` pairs for every non-empty line.
    pub fn task_lines(&self) -> impl Iterator<Item = (&str, &[Task])> {
        self.tasks.iter().map(|(id, tasks)| (id.as_str(), tasks.as_slice()))
    }

    /// Total number of tasks on the board.
    pub fn task_count(&self) -> usize {
        self.tasks.values().map(Vec::len).sum()
    }

    /// Removes a task by id (direct deletion, e.g. keyboard delete).
    pub fn remove_task(&mut self, task_id: u64) -> Result<Task, EngineError> {
        let owner = self.tasks.iter().find_map(|(employee_id, tasks)| {
            tasks
                .iter()
                .any(|t| t.id == task_id)
                .then(|| employee_id.clone())
        });
        let owner = owner.ok_or(EngineError::TaskNotFound(task_id))?;

        let line = self.tasks.get_mut(&owner).ok_or(EngineError::TaskNotFound(task_id))?;
        let index = line
            .iter()
            .position(|t| t.id == task_id)
            .ok_or(EngineError::TaskNotFound(task_id))?;
        let removed = line.remove(index);
        if line.is_empty() {
            self.tasks.remove(&owner);
        }
        log::debug!(
            "removed task {task_id} [{}, {}) from '{}'",
            removed.start,
            removed.end,
            removed.employee_id
        );
        Ok(removed)
    }

    /// Mints the next task id.
    pub(crate) fn mint_task_id(&mut self) -> u64 {
        self.next_task_id += 1;
        self.next_task_id
    }

    /// Creates and stores a new task, keeping the line sorted by start.
    /// Returns the new task's id.
    pub(crate) fn insert_task(
        &mut self,
        employee_id: &str,
        kind: TaskKind,
        label: impl Into<String>,
        start: u32,
        end: u32,
    ) -> u64 {
        let id = self.mint_task_id();
        let task = Task::new(id, employee_id, kind, label, start, end);
        let line = self.tasks.entry(employee_id.to_string()).or_default();
        let index = line.partition_point(|t| t.start < task.start);
        line.insert(index, task);
        id
    }

    /// Rewrites a task's row range, re-sorting its line.
    pub(crate) fn set_task_range(
        &mut self,
        task_id: u64,
        start: u32,
        end: u32,
    ) -> Result<(), EngineError> {
        for tasks in self.tasks.values_mut() {
            if let Some(task) = tasks.iter_mut().find(|t| t.id == task_id) {
                task.start = start;
                task.end = end;
                tasks.sort_by_key(|t| t.start);
                return Ok(());
            }
        }
        Err(EngineError::TaskNotFound(task_id))
    }

    /// Detaches an employee's line for rewriting. Pair with [`Board::put_line`].
    pub(crate) fn take_line(&mut self, employee_id: &str) -> Option<Vec<Task>> {
        self.tasks.remove(employee_id)
    }

    /// Reattaches a rewritten line, sorted by start. Empty lines are not kept.
    pub(crate) fn put_line(&mut self, employee_id: &str, mut tasks: Vec<Task>) {
        if tasks.is_empty() {
            return;
        }
        tasks.sort_by_key(|t| t.start);
        self.tasks.insert(employee_id.to_string(), tasks);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with_roster() -> Board {
        let mut board = Board::new();
        board.add_employee(Employee::new("e1", 0, 26).with_name("Mara"));
        board.add_employee(Employee::new("e2", 2, 20).with_name("Yusuf"));
        board
    }

    #[test]
    fn test_roster_management() {
        let mut board = board_with_roster();
        assert_eq!(board.employees().len(), 2);
        assert_eq!(board.employee("e2").unwrap().name, "Yusuf");

        board.rename_employee("e2", "Yusuf K").unwrap();
        assert_eq!(board.employee("e2").unwrap().name, "Yusuf K");

        assert_eq!(
            board.rename_employee("e9", "Nobody"),
            Err(EngineError::EmployeeNotFound("e9".into()))
        );
    }

    #[test]
    fn test_remove_employee_drops_tasks() {
        let mut board = board_with_roster();
        board.insert_task("e1", TaskKind::Gallery, "Gallery", 0, 2);
        board.insert_task("e2", TaskKind::Break, "Break", 4, 5);

        let removed = board.remove_employee("e1").unwrap();
        assert_eq!(removed.name, "Mara");
        assert!(board.tasks_by_employee("e1").is_empty());
        assert_eq!(board.task_count(), 1);
    }

    #[test]
    fn test_insert_keeps_line_sorted() {
        let mut board = board_with_roster();
        board.insert_task("e1", TaskKind::Gallery, "Gallery", 6, 8);
        board.insert_task("e1", TaskKind::Break, "Break", 2, 3);
        board.insert_task("e1", TaskKind::Prep, "Prep", 4, 5);

        let starts: Vec<u32> = board.tasks_by_employee("e1").iter().map(|t| t.start).collect();
        assert_eq!(starts, vec![2, 4, 6]);
    }

    #[test]
    fn test_task_ids_are_unique_and_monotonic() {
        let mut board = board_with_roster();
        let a = board.insert_task("e1", TaskKind::Gallery, "Gallery", 0, 1);
        let b = board.insert_task("e2", TaskKind::Gallery, "Gallery", 0, 1);
        assert!(b > a);
    }

    #[test]
    fn test_remove_task() {
        let mut board = board_with_roster();
        let id = board.insert_task("e1", TaskKind::Tidy, "Tidy", 24, 26);
        let removed = board.remove_task(id).unwrap();
        assert_eq!(removed.kind, TaskKind::Tidy);
        assert_eq!(board.task_count(), 0);
        assert_eq!(board.remove_task(id), Err(EngineError::TaskNotFound(id)));
    }

    #[test]
    fn test_store_holds_tasks_for_unrostered_employee() {
        let mut board = Board::new();
        board.insert_task("ghost", TaskKind::Gallery, "Gallery", 0, 2);
        assert_eq!(board.tasks_by_employee("ghost").len(), 1);
        assert!(board.employee("ghost").is_none());
    }

    #[test]
    fn test_board_snapshot_round_trip() {
        let mut board = board_with_roster();
        board.insert_task("e1", TaskKind::Tour, "Tour", 4, 6);

        let json = serde_json::to_string(&board).unwrap();
        let back: Board = serde_json::from_str(&json).unwrap();
        assert_eq!(back.employees().len(), 2);
        assert_eq!(back.task_count(), 1);
        // The id counter survives a snapshot, so new ids stay unique
        let mut back = back;
        let next = back.insert_task("e2", TaskKind::Break, "Break", 8, 9);
        assert!(back.all_tasks().filter(|t| t.id == next).count() == 1);
        assert!(next > back.tasks_by_employee("e1")[0].id);
    }
}
