//! # Aurora
//!
//! Access-control core of the Aurora CRM Brasil dashboard.
//!
//! Every screen asks the same question before it renders a button, a column
//! or a financial figure: may the current user do this? Aurora answers it
//! from a small, fixed role model and keeps the little shared state the
//! dashboard needs around it.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                         Aurora                           │
//! │  ┌─────────┐   ┌────────────┐   ┌───────────────────┐    │
//! │  │ Session │ → │ Evaluator  │ → │ Boards / Notify   │    │
//! │  │ (user)  │   │ (role map) │   │ (gated actions)   │    │
//! │  └─────────┘   └────────────┘   └───────────────────┘    │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! # Quick Start
//!
//! ```
//! use aurora::{Aurora, AuroraConfig, LeadStage, Board, BoardCard, Role};
//!
//! let mut app = Aurora::from_config(&AuroraConfig::default())?;
//! assert!(app.can("view_financials"));
//!
//! // Simulate another role from the profile menu.
//! app.session_mut().update_role(Role::Vendas);
//! assert!(!app.can("view_financials"));
//!
//! let leads = Board::new(vec![BoardCard::new("l1", "Construtora Horizonte", LeadStage::New)]);
//! let (leads, _) = app.move_card(&leads, "l1", LeadStage::Contacted)?;
//! assert_eq!(leads.get("l1").map(|c| c.stage), Some(LeadStage::Contacted));
//! # Ok::<(), aurora::AuroraError>(())
//! ```
//!
//! # Modules
//!
//! - **Context**: [`Aurora`] - session, evaluator and notifications together
//! - **Access control**: [`Role`], [`Permission`], [`PermissionEvaluator`]
//! - **State**: [`Session`], [`NotificationStore`], Kanban [`Board`]s

mod context;
mod error;

// Context
pub use context::Aurora;
pub use error::{AuroraError, Result};

// Re-export core types
pub use aurora_types::{EntityKind, EntityRef, NotificationId, UserId};

// Re-export access control
pub use aurora_rbac::{
    EnforcementError, Permission, PermissionEvaluator, PermissionSet, Role, RolePermissionMap,
};

// Re-export session and notifications
pub use aurora_notify::{NewNotification, Notification, NotificationKind, NotificationStore};
pub use aurora_session::{Session, User};

// Re-export boards
pub use aurora_board::{
    Board, BoardCard, BoardError, Card, DragPayload, LeadStage, PurchaseStatus, Stage, TaskStatus,
    Transition,
};

// Re-export configuration
pub use aurora_config::{AuroraConfig, ConfigError, ConfigLoader};
