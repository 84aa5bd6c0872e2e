//! Board state and the move reducer.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::card::Card;
use crate::error::BoardError;
use crate::stage::Stage;

/// Ordered list of cards on one board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Board<C> {
    cards: Vec<C>,
}

impl<C: Card> Board<C> {
    pub fn new(cards: Vec<C>) -> Self {
        Self { cards }
    }

    pub fn cards(&self) -> &[C] {
        &self.cards
    }

    pub fn get(&self, card_id: &str) -> Option<&C> {
        self.cards.iter().find(|c| c.card_id() == card_id)
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Groups cards by stage, in column order.
    ///
    /// Every stage gets a column, even when empty. Cards keep their relative
    /// order inside a column.
    pub fn columns(&self) -> Vec<(C::Stage, Vec<&C>)> {
        <C::Stage as Stage>::ALL
            .iter()
            .map(|stage| {
                let cards: Vec<&C> = self.cards.iter().filter(|c| c.stage() == *stage).collect();
                (*stage, cards)
            })
            .collect()
    }
}

impl<C: Card> FromIterator<C> for Board<C> {
    fn from_iter<I: IntoIterator<Item = C>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<C> Default for Board<C> {
    fn default() -> Self {
        Self { cards: Vec::new() }
    }
}

/// Request to drop a card into a column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Move<S> {
    pub card_id: String,
    pub target: S,
}

impl<S: Stage> Move<S> {
    pub fn new(card_id: impl Into<String>, target: S) -> Self {
        Self {
            card_id: card_id.into(),
            target,
        }
    }
}

/// What a successful move did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition<S> {
    pub card_id: String,
    pub from: S,
    pub to: S,
}

impl<S: Stage> Transition<S> {
    /// False when the card was dropped back into its own column.
    pub fn changed(&self) -> bool {
        self.from != self.to
    }
}

/// Applies a move and returns the new board.
///
/// Pure: the input board is borrowed and left as it was. Only the matching
/// card's stage differs in the result; order and every other card are kept.
pub fn apply_move<C: Card>(
    board: &Board<C>,
    mv: &Move<C::Stage>,
) -> Result<(Board<C>, Transition<C::Stage>), BoardError> {
    let position = board
        .cards
        .iter()
        .position(|c| c.card_id() == mv.card_id)
        .ok_or_else(|| BoardError::CardNotFound {
            board: <C::Stage as Stage>::BOARD,
            card_id: mv.card_id.clone(),
        })?;

    let mut cards = board.cards.clone();
    let from = cards[position].stage();
    cards[position].set_stage(mv.target);

    debug!(
        board = <C::Stage as Stage>::BOARD,
        card_id = %mv.card_id,
        from = %from,
        to = %mv.target,
        "Card moved"
    );

    Ok((
        Board { cards },
        Transition {
            card_id: mv.card_id.clone(),
            from,
            to: mv.target,
        },
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::BoardCard;
    use crate::stage::{LeadStage, PurchaseStatus, TaskStatus};
    use proptest::prelude::*;

    fn leads() -> Board<BoardCard<LeadStage>> {
        Board::new(vec![
            BoardCard::new("l1", "Construtora Horizonte", LeadStage::New),
            BoardCard::new("l2", "Grupo Vale Verde", LeadStage::Proposal),
        ])
    }

    #[test]
    fn test_move_changes_only_target_card() {
        let board = leads();
        let (next, transition) = apply_move(&board, &Move::new("l1", LeadStage::Qualified)).unwrap();

        assert_eq!(next.get("l1").unwrap().stage, LeadStage::Qualified);
        assert_eq!(next.get("l2").unwrap().stage, LeadStage::Proposal);
        assert_eq!(transition.from, LeadStage::New);
        assert_eq!(transition.to, LeadStage::Qualified);
        assert!(transition.changed());
    }

    #[test]
    fn test_move_leaves_input_untouched() {
        let board = leads();
        let _ = apply_move(&board, &Move::new("l1", LeadStage::Won)).unwrap();
        assert_eq!(board, leads());
    }

    #[test]
    fn test_move_unknown_card() {
        let board = leads();
        let err = apply_move(&board, &Move::new("l9", LeadStage::Won)).unwrap_err();
        assert_eq!(
            err,
            BoardError::CardNotFound {
                board: "leads",
                card_id: "l9".to_owned(),
            }
        );
    }

    #[test]
    fn test_move_into_same_column_is_not_a_change() {
        let board = leads();
        let (next, transition) = apply_move(&board, &Move::new("l2", LeadStage::Proposal)).unwrap();
        assert!(!transition.changed());
        assert_eq!(next, board);
    }

    #[test]
    fn test_columns_cover_every_stage() {
        let board: Board<BoardCard<TaskStatus>> = [
            BoardCard::new("t1", "Visita técnica", TaskStatus::Review),
            BoardCard::new("t2", "Orçamento", TaskStatus::Todo),
            BoardCard::new("t3", "Relatório", TaskStatus::Review),
        ]
        .into_iter()
        .collect();

        let columns = board.columns();
        assert_eq!(columns.len(), TaskStatus::ALL.len());

        let review: Vec<&str> = columns
            .iter()
            .find(|(stage, _)| *stage == TaskStatus::Review)
            .map(|(_, cards)| cards.iter().map(|c| c.id.as_str()).collect())
            .unwrap();
        assert_eq!(review, vec!["t1", "t3"]);

        let done = columns.iter().find(|(s, _)| *s == TaskStatus::Done).unwrap();
        assert!(done.1.is_empty());
    }

    #[test]
    fn test_board_serializes_as_list() {
        let board = Board::new(vec![BoardCard::new("SC-1", "Cimento", PurchaseStatus::Quoting)]);
        let json = serde_json::to_value(&board).unwrap();
        assert_eq!(json[0]["stage"], "em_cotacao");
    }

    fn arb_stage() -> impl Strategy<Value = PurchaseStatus> {
        prop::sample::select(PurchaseStatus::ALL.to_vec())
    }

    fn arb_board() -> impl Strategy<Value = Board<BoardCard<PurchaseStatus>>> {
        prop::collection::vec(arb_stage(), 1..20).prop_map(|stages| {
            stages
                .into_iter()
                .enumerate()
                .map(|(i, stage)| BoardCard::new(format!("SC-{i}"), format!("item {i}"), stage))
                .collect::<Board<_>>()
        })
    }

    proptest! {
        #[test]
        fn move_only_touches_matching_card(
            board in arb_board(),
            pick in any::<prop::sample::Index>(),
            target in arb_stage(),
        ) {
            let id = board.cards()[pick.index(board.len())].id.clone();
            let (next, transition) = apply_move(&board, &Move::new(id.clone(), target)).unwrap();

            prop_assert_eq!(next.len(), board.len());
            prop_assert_eq!(transition.to, target);
            for (old, new) in board.cards().iter().zip(next.cards()) {
                prop_assert_eq!(&old.id, &new.id);
                prop_assert_eq!(&old.title, &new.title);
                if old.id == id {
                    prop_assert_eq!(new.stage, target);
                    prop_assert_eq!(transition.from, old.stage);
                } else {
                    prop_assert_eq!(new.stage, old.stage);
                }
            }
        }

        #[test]
        fn unknown_id_never_changes_board(board in arb_board(), target in arb_stage()) {
            let before = board.clone();
            let result = apply_move(&board, &Move::new("missing", target));
            prop_assert!(
                matches!(result, Err(BoardError::CardNotFound { .. })),
                "expected CardNotFound"
            );
            prop_assert_eq!(board, before);
        }
    }
}
