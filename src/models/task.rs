//! Task model and kind taxonomy.
//!
//! A task is one typed block of work on the day grid: a half-open row
//! range assigned to one employee. Tasks are minted by the placement
//! façade and rewritten only by the engine (resolver and compactor), so
//! within one employee's collection no two tasks ever overlap once an
//! engine call has returned.

use serde::{Deserialize, Serialize};

use super::timeline;

/// The kind of work a task block represents.
///
/// Serialized with kebab-case tags (`front-desk`, `school-program`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TaskKind {
    /// Staffing the entrance desk.
    FrontDesk,
    /// Invigilating the gallery floor.
    Gallery,
    /// Off the floor.
    Break,
    /// Setup and materials preparation.
    Prep,
    /// A booked public tour.
    Tour,
    /// End-of-day reset.
    Tidy,
    /// Setup ahead of a school visit.
    SchoolPre,
    /// A booked school program.
    SchoolProgram,
}

impl TaskKind {
    /// All kinds, in display order.
    pub const ALL: [TaskKind; 8] = [
        TaskKind::FrontDesk,
        TaskKind::Gallery,
        TaskKind::Break,
        TaskKind::Prep,
        TaskKind::Tour,
        TaskKind::Tidy,
        TaskKind::SchoolPre,
        TaskKind::SchoolProgram,
    ];

    /// Whether this kind is a booked, individually addressable block.
    ///
    /// Tour-like blocks are exempt from adjacent merging: each booking
    /// stays its own task so it can be edited or deleted on its own.
    #[inline]
    pub fn is_tour_like(&self) -> bool {
        matches!(self, TaskKind::Tour | TaskKind::SchoolProgram)
    }

    /// Canonical display label for a freshly placed block of this kind.
    pub fn label(&self) -> &'static str {
        match self {
            TaskKind::FrontDesk => "Front desk",
            TaskKind::Gallery => "Gallery",
            TaskKind::Break => "Break",
            TaskKind::Prep => "Prep",
            TaskKind::Tour => "Tour",
            TaskKind::Tidy => "Tidy",
            TaskKind::SchoolPre => "School pre",
            TaskKind::SchoolProgram => "School program",
        }
    }
}

/// A typed work block on the day grid.
///
/// Occupies the half-open row range `[start, end)` on one employee's
/// line. `start < end` always holds; zero-width tasks are never produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Store-minted identifier, unique across the board.
    pub id: u64,
    /// Owning employee (foreign key into the host's roster).
    pub employee_id: String,
    /// Kind of work.
    pub kind: TaskKind,
    /// Display label. Starts as the kind's canonical label; hosts may rename.
    pub label: String,
    /// First occupied row (inclusive).
    pub start: u32,
    /// End row (exclusive).
    pub end: u32,
}

impl Task {
    /// Creates a task. Ids come from the board's counter, so construction
    /// is internal; hosts receive tasks from the placement façade.
    pub(crate) fn new(
        id: u64,
        employee_id: impl Into<String>,
        kind: TaskKind,
        label: impl Into<String>,
        start: u32,
        end: u32,
    ) -> Self {
        Self {
            id,
            employee_id: employee_id.into(),
            kind,
            label: label.into(),
            start,
            end,
        }
    }

    /// Width of the block in rows.
    #[inline]
    pub fn duration_rows(&self) -> u32 {
        self.end - self.start
    }

    /// Whether the block occupies the given row.
    #[inline]
    pub fn contains_row(&self, row: u32) -> bool {
        row >= self.start && row < self.end
    }

    /// Whether the block overlaps the half-open row range `[start, end)`.
    #[inline]
    pub fn overlaps_range(&self, start: u32, end: u32) -> bool {
        self.start < end && start < self.end
    }

    /// Wall-clock rendering of the block's range, e.g. `"9:30-10:15"`.
    pub fn time_label(&self) -> String {
        timeline::row_range_label(self.start, self.end)
    }
}
