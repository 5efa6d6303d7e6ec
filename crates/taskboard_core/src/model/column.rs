//! Column domain model.
//!
//! # Responsibility
//! - Define the ordered sub-container of a board.
//!
//! # Invariants
//! - `board_uuid` is assigned at creation; columns never migrate boards.
//! - `position` is advisory sibling order, non-negative, no uniqueness.

use crate::model::board::BoardId;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier for a column.
pub type ColumnId = Uuid;

/// Validation failures for column records.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnValidationError {
    /// Title is empty or whitespace-only.
    BlankTitle,
    /// Position is negative.
    NegativePosition(i64),
}

impl Display for ColumnValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BlankTitle => write!(f, "column title must not be blank"),
            Self::NegativePosition(position) => {
                write!(f, "column position must be non-negative, got {position}")
            }
        }
    }
}

impl Error for ColumnValidationError {}

/// Ordered sub-container of a board, holds tasks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    /// Stable column id.
    pub uuid: ColumnId,
    /// User-facing column title, non-blank.
    pub title: String,
    /// Serialized as `board` to match external schema naming.
    #[serde(rename = "board")]
    pub board_uuid: BoardId,
    /// Advisory order among sibling columns. Duplicates are allowed.
    pub position: i64,
}

impl Column {
    /// Creates a new column attached to `board`.
    ///
    /// The title is trimmed before storage; a blank title or a negative
    /// position is rejected.
    pub fn new(
        board: BoardId,
        title: impl Into<String>,
        position: i64,
    ) -> Result<Self, ColumnValidationError> {
        let title = normalize_title(title.into())?;
        if position < 0 {
            return Err(ColumnValidationError::NegativePosition(position));
        }
        Ok(Self {
            uuid: Uuid::new_v4(),
            title,
            board_uuid: board,
            position,
        })
    }
}

fn normalize_title(title: String) -> Result<String, ColumnValidationError> {
    let trimmed = title.trim();
    if trimmed.is_empty() {
        return Err(ColumnValidationError::BlankTitle);
    }
    Ok(trimmed.to_string())
}
