//! Drag-and-drop payloads.

use std::fmt::{self, Display};

use crate::error::BoardError;

/// Card id carried by a drag event.
///
/// Browsers hand the id over as free text; surrounding whitespace is
/// dropped and an empty payload is rejected before it reaches a board.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DragPayload(String);

impl DragPayload {
    pub fn parse(raw: &str) -> Result<Self, BoardError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(BoardError::EmptyPayload);
        }
        Ok(Self(trimmed.to_owned()))
    }

    pub fn card_id(&self) -> &str {
        &self.0
    }

    pub fn into_card_id(self) -> String {
        self.0
    }
}

impl Display for DragPayload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
