//! Cards that live on a board.

use serde::{Deserialize, Serialize};

use crate::stage::Stage;

/// Anything a board can hold.
///
/// Implemented by the domain records (leads, tasks, purchase requests) so a
/// board never needs to know their other fields.
pub trait Card: Clone {
    type Stage: Stage;

    fn card_id(&self) -> &str;

    fn stage(&self) -> Self::Stage;

    fn set_stage(&mut self, stage: Self::Stage);
}

/// Minimal card: an id, a title and a stage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardCard<S> {
    pub id: String,
    pub title: String,
    pub stage: S,
}

impl<S: Stage> BoardCard<S> {
    pub fn new(id: impl Into<String>, title: impl Into<String>, stage: S) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            stage,
        }
    }
}

impl<S: Stage> Card for BoardCard<S> {
    type Stage = S;

    fn card_id(&self) -> &str {
        &self.id
    }

    fn stage(&self) -> S {
        self.stage
    }

    fn set_stage(&mut self, stage: S) {
        self.stage = stage;
    }
}
