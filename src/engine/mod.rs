//! Mutation algorithms and derived metrics over a [`Board`].
//!
//! The engine is the only code that rewrites task ranges. Hosts drive it
//! through the placement façade; the resolver and compactor are exposed
//! for advanced callers that manage ranges themselves (a drag gesture
//! passes the dragged task's id as the resolver's exception).
//!
//! # Control Flow
//!
//! ```text
//! host → place_task / move_task → resolve_overlaps → merge_adjacent → host re-reads
//! ```
//!
//! Every call runs to completion synchronously; the board is never
//! observable mid-rewrite.
//!
//! [`Board`]: crate::models::Board

mod compactor;
mod coverage;
mod placement;
mod resolver;

pub use compactor::merge_adjacent;
pub use coverage::DayCoverage;
pub use placement::{move_task, place_task};
pub use resolver::resolve_overlaps;
