//! Domain model for the board/column/task ownership tree.
//!
//! # Responsibility
//! - Define canonical data records used by core business logic.
//! - Keep field constraints explicit in a validation layer, not implicit in
//!   storage descriptors.
//!
//! # Invariants
//! - Every domain object is identified by a stable `Uuid`.
//! - A board's owner is set once at creation and never changes.
//! - A column's board reference is set once at creation and never changes.
//! - A task's column reference is the only mutable relation in the tree.

pub mod board;
pub mod column;
pub mod task;

use std::time::{SystemTime, UNIX_EPOCH};

/// Current wall clock as Unix epoch milliseconds.
///
/// Falls back to 0 if the clock reads before the epoch; callers that need
/// monotonic timestamps bump explicitly (see `Task::touch`).
pub(crate) fn now_epoch_ms() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_millis() as i64)
        .unwrap_or(0)
}
