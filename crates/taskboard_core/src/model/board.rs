//! Board domain model.
//!
//! # Responsibility
//! - Define the root container of one ownership tree.
//!
//! # Invariants
//! - `owner_uuid` is assigned at creation and immutable thereafter.
//! - `name` is non-blank after trimming.

use crate::auth::UserId;
use crate::model::now_epoch_ms;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier for a board.
pub type BoardId = Uuid;

/// Validation failures for board records.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardValidationError {
    /// Name is empty or whitespace-only.
    BlankName,
}

impl Display for BoardValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BlankName => write!(f, "board name must not be blank"),
        }
    }
}

impl Error for BoardValidationError {}

/// Root container of one ownership tree.
///
/// Everything beneath a board (columns, tasks) is authorized by walking back
/// up to `owner_uuid`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    /// Stable board id.
    pub uuid: BoardId,
    /// User-facing board name, non-blank.
    pub name: String,
    /// Serialized as `owner` to match external schema naming.
    #[serde(rename = "owner")]
    pub owner_uuid: UserId,
    /// Epoch ms creation timestamp.
    pub created_at: i64,
}

impl Board {
    /// Creates a new board owned by `owner`.
    ///
    /// The name is trimmed before storage; a blank name is rejected.
    pub fn new(owner: UserId, name: impl Into<String>) -> Result<Self, BoardValidationError> {
        let name = normalize_name(name.into())?;
        Ok(Self {
            uuid: Uuid::new_v4(),
            name,
            owner_uuid: owner,
            created_at: now_epoch_ms(),
        })
    }
}

fn normalize_name(name: String) -> Result<String, BoardValidationError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(BoardValidationError::BlankName);
    }
    Ok(trimmed.to_string())
}
