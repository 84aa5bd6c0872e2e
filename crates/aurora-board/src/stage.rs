#![allow(clippy::match_same_arms)]
//! Board columns.
//!
//! Each board has a closed set of stages; a card sits in exactly one.

use std::fmt::{Debug, Display};
use std::hash::Hash;

use aurora_rbac::Permission;
use serde::{Deserialize, Serialize};

/// A column of a Kanban board.
pub trait Stage: Copy + Eq + Hash + Debug + Display + 'static {
    /// Every stage, in the order the board renders its columns.
    const ALL: &'static [Self];

    /// Board name used in logs and errors.
    const BOARD: &'static str;

    /// Returns the identifier used in serialized data.
    fn as_str(&self) -> &'static str;

    /// Returns the pt-BR column title.
    fn label(&self) -> &'static str;

    /// Permission needed to drop a card into this stage.
    fn required_permission(self) -> Permission;
}

macro_rules! impl_display_via_as_str {
    ($ty:ty) => {
        impl Display for $ty {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

// ============================================================================
// Lead pipeline
// ============================================================================

/// Stage of a lead in the sales pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LeadStage {
    #[serde(rename = "novo")]
    New,
    #[serde(rename = "contatado")]
    Contacted,
    #[serde(rename = "qualificado")]
    Qualified,
    #[serde(rename = "proposta")]
    Proposal,
    #[serde(rename = "negociacao")]
    Negotiation,
    #[serde(rename = "ganho")]
    Won,
    #[serde(rename = "perdido")]
    Lost,
}

impl Stage for LeadStage {
    const ALL: &'static [Self] = &[
        LeadStage::New,
        LeadStage::Contacted,
        LeadStage::Qualified,
        LeadStage::Proposal,
        LeadStage::Negotiation,
        LeadStage::Won,
        LeadStage::Lost,
    ];
    const BOARD: &'static str = "leads";

    fn as_str(&self) -> &'static str {
        match self {
            LeadStage::New => "novo",
            LeadStage::Contacted => "contatado",
            LeadStage::Qualified => "qualificado",
            LeadStage::Proposal => "proposta",
            LeadStage::Negotiation => "negociacao",
            LeadStage::Won => "ganho",
            LeadStage::Lost => "perdido",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            LeadStage::New => "Novo",
            LeadStage::Contacted => "Contatado",
            LeadStage::Qualified => "Qualificado",
            LeadStage::Proposal => "Proposta",
            LeadStage::Negotiation => "Negociação",
            LeadStage::Won => "Ganho",
            LeadStage::Lost => "Perdido",
        }
    }

    fn required_permission(self) -> Permission {
        Permission::ManageLeads
    }
}

impl_display_via_as_str!(LeadStage);

// ============================================================================
// Task board
// ============================================================================

/// Status of a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TaskStatus {
    #[serde(rename = "a_fazer")]
    Todo,
    #[serde(rename = "em_andamento")]
    InProgress,
    #[serde(rename = "revisao")]
    Review,
    #[serde(rename = "concluida")]
    Done,
}

impl Stage for TaskStatus {
    const ALL: &'static [Self] = &[
        TaskStatus::Todo,
        TaskStatus::InProgress,
        TaskStatus::Review,
        TaskStatus::Done,
    ];
    const BOARD: &'static str = "tasks";

    fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::Todo => "a_fazer",
            TaskStatus::InProgress => "em_andamento",
            TaskStatus::Review => "revisao",
            TaskStatus::Done => "concluida",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            TaskStatus::Todo => "A Fazer",
            TaskStatus::InProgress => "Em Andamento",
            TaskStatus::Review => "Revisão",
            TaskStatus::Done => "Concluída",
        }
    }

    fn required_permission(self) -> Permission {
        Permission::ManageTasks
    }
}

impl_display_via_as_str!(TaskStatus);

// ============================================================================
// Purchase-request board
// ============================================================================

/// Status of a purchase request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PurchaseStatus {
    #[serde(rename = "pendente")]
    Pending,
    #[serde(rename = "em_cotacao")]
    Quoting,
    #[serde(rename = "aprovada")]
    Approved,
    #[serde(rename = "rejeitada")]
    Rejected,
    #[serde(rename = "comprada")]
    Purchased,
}

impl Stage for PurchaseStatus {
    const ALL: &'static [Self] = &[
        PurchaseStatus::Pending,
        PurchaseStatus::Quoting,
        PurchaseStatus::Approved,
        PurchaseStatus::Rejected,
        PurchaseStatus::Purchased,
    ];
    const BOARD: &'static str = "purchase_requests";

    fn as_str(&self) -> &'static str {
        match self {
            PurchaseStatus::Pending => "pendente",
            PurchaseStatus::Quoting => "em_cotacao",
            PurchaseStatus::Approved => "aprovada",
            PurchaseStatus::Rejected => "rejeitada",
            PurchaseStatus::Purchased => "comprada",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            PurchaseStatus::Pending => "Pendente",
            PurchaseStatus::Quoting => "Em Cotação",
            PurchaseStatus::Approved => "Aprovada",
            PurchaseStatus::Rejected => "Rejeitada",
            PurchaseStatus::Purchased => "Comprada",
        }
    }

    /// Approval decisions need the approver permission; every other move
    /// only needs the right to create requests.
    fn required_permission(self) -> Permission {
        match self {
            PurchaseStatus::Approved | PurchaseStatus::Rejected => {
                Permission::ApprovePurchaseRequests
            }
            PurchaseStatus::Pending | PurchaseStatus::Quoting | PurchaseStatus::Purchased => {
                Permission::CreatePurchaseRequests
            }
        }
    }
}

impl_display_via_as_str!(PurchaseStatus);

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    fn serialized<S: Serialize>(stage: S) -> String {
        serde_json::to_string(&stage).unwrap()
    }

    #[test]
    fn test_serialized_names_match_identifiers() {
        for stage in TaskStatus::ALL {
            assert_eq!(serialized(*stage), format!("\"{}\"", stage.as_str()));
        }
        for stage in PurchaseStatus::ALL {
            assert_eq!(serialized(*stage), format!("\"{}\"", stage.as_str()));
        }
        assert_eq!(serialized(LeadStage::Negotiation), "\"negociacao\"");
    }

    fn column_titles<S: Stage>() -> Vec<&'static str> {
        S::ALL.iter().map(Stage::label).collect()
    }

    #[test]
    fn test_column_titles_in_board_order() {
        assert_eq!(
            column_titles::<LeadStage>(),
            ["Novo", "Contatado", "Qualificado", "Proposta", "Negociação", "Ganho", "Perdido"]
        );
        assert_eq!(
            column_titles::<TaskStatus>(),
            ["A Fazer", "Em Andamento", "Revisão", "Concluída"]
        );
        assert_eq!(
            column_titles::<PurchaseStatus>(),
            ["Pendente", "Em Cotação", "Aprovada", "Rejeitada", "Comprada"]
        );
    }

    #[test_case(PurchaseStatus::Approved, Permission::ApprovePurchaseRequests)]
    #[test_case(PurchaseStatus::Rejected, Permission::ApprovePurchaseRequests)]
    #[test_case(PurchaseStatus::Quoting, Permission::CreatePurchaseRequests)]
    #[test_case(PurchaseStatus::Purchased, Permission::CreatePurchaseRequests)]
    fn test_purchase_permissions(stage: PurchaseStatus, expected: Permission) {
        assert_eq!(stage.required_permission(), expected);
    }

    #[test]
    fn test_stage_identifiers_are_unique_per_board() {
        fn unique<S: Stage>() -> bool {
            let mut names: Vec<&str> = S::ALL.iter().map(Stage::as_str).collect();
            names.sort_unstable();
            names.dedup();
            names.len() == S::ALL.len()
        }

        assert!(unique::<LeadStage>());
        assert!(unique::<TaskStatus>());
        assert!(unique::<PurchaseStatus>());
    }
}
