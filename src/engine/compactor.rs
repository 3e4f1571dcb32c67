//! Adjacent-block compaction.
//!
//! After placement, contiguous blocks of the same kind and label on one
//! employee's line collapse into a single block, so painting row after
//! row of "Gallery" reads back as one span.
//!
//! Tour-like kinds are the exception: a tour or school program is a
//! booking, and two back-to-back bookings must remain separately
//! editable and deletable. They never merge, identical label or not.

use crate::models::{Board, Task};

/// Merges contiguous same-kind, same-label blocks on `employee_id`'s line.
///
/// Walks the line in start order keeping a last-kept block; a block is
/// absorbed into it (extending `end`) iff kind and label match, the
/// blocks touch (`last.end == task.start`), and the kind is not
/// tour-like. Idempotent; start order is preserved; other employees'
/// lines are untouched.
pub fn merge_adjacent(board: &mut Board, employee_id: &str) {
    let Some(mut line) = board.take_line(employee_id) else {
        return;
    };
    line.sort_by_key(|t| t.start);

    let mut kept: Vec<Task> = Vec::with_capacity(line.len());
    for task in line {
        if let Some(last) = kept.last_mut() {
            if last.kind == task.kind
                && last.label == task.label
                && last.end == task.start
                && !last.kind.is_tour_like()
            {
                log::debug!(
                    "merging task {} into {}: '{}' now spans [{}, {})",
                    task.id,
                    last.id,
                    last.label,
                    last.start,
                    task.end
                );
                last.end = task.end;
                continue;
            }
        }
        kept.push(task);
    }

    board.put_line(employee_id, kept);
}
