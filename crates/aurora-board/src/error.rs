//! Board errors.

/// Errors that can occur when applying a move to a board.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    #[error("card '{card_id}' not found on board '{board}'")]
    CardNotFound { board: &'static str, card_id: String },

    #[error("drag payload is empty")]
    EmptyPayload,
}
