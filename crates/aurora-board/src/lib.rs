//! # aurora-board: Kanban boards
//!
//! Leads, tasks and purchase requests are shown as Kanban boards. Dragging a
//! card into another column is a pure state transition:
//! `apply_move(&board, &move) -> (board, transition)`.
//!
//! ## Key Principles
//!
//! - **No IO**: boards never persist anything
//! - **No permission checks**: callers gate moves on
//!   [`Stage::required_permission`] before applying them
//! - **Order preserving**: a move changes one card's stage and nothing else
//!
//! ## Example
//!
//! ```
//! use aurora_board::{apply_move, Board, BoardCard, DragPayload, LeadStage, Move};
//!
//! let board = Board::new(vec![
//!     BoardCard::new("l1", "Construtora Horizonte", LeadStage::New),
//!     BoardCard::new("l2", "Grupo Vale Verde", LeadStage::Proposal),
//! ]);
//!
//! let payload = DragPayload::parse(" l1 ").unwrap();
//! let (board, transition) =
//!     apply_move(&board, &Move::new(payload.card_id(), LeadStage::Qualified)).unwrap();
//!
//! assert_eq!(transition.from, LeadStage::New);
//! assert_eq!(board.get("l1").unwrap().stage, LeadStage::Qualified);
//! ```

mod board;
mod card;
mod error;
mod payload;
mod stage;

pub use board::{apply_move, Board, Move, Transition};
pub use card::{BoardCard, Card};
pub use error::BoardError;
pub use payload::DragPayload;
pub use stage::{LeadStage, PurchaseStatus, Stage, TaskStatus};
