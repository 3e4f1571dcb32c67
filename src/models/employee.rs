//! Employee model.
//!
//! Employees are the rows of the rota grid. The engine stores tasks
//! keyed by employee id and exposes shift bounds for the host; it does
//! not itself clamp tasks to the shift.

use serde::{Deserialize, Serialize};

use super::timeline;

/// A rostered employee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    /// Unique employee identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// First row of the working shift (inclusive).
    pub shift_start: u32,
    /// End row of the working shift (exclusive).
    pub shift_end: u32,
}

impl Employee {
    /// Creates a new employee with the given shift bounds.
    pub fn new(id: impl Into<String>, shift_start: u32, shift_end: u32) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            shift_start,
            shift_end,
        }
    }

    /// Sets the display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Whether the given row falls inside the working shift.
    #[inline]
    pub fn covers_row(&self, row: u32) -> bool {
        row >= self.shift_start && row < self.shift_end
    }

    /// Shift width in rows.
    #[inline]
    pub fn shift_rows(&self) -> u32 {
        self.shift_end.saturating_sub(self.shift_start)
    }

    /// Wall-clock rendering of the shift, e.g. `"9:30-16:00"`.
    pub fn shift_label(&self) -> String {
        timeline::row_range_label(self.shift_start, self.shift_end)
    }
}
