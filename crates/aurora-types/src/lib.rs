//! # aurora-types: Core types for `Aurora`
//!
//! This crate contains identifiers shared across the `Aurora` crates:
//! - Entity IDs ([`UserId`], [`NotificationId`])
//! - Source-entity references ([`EntityKind`], [`EntityRef`])

use std::fmt::{Debug, Display};

use serde::{Deserialize, Serialize};

// ============================================================================
// Entity IDs - All Copy (cheap 8-byte values)
// ============================================================================

/// Unique identifier for a dashboard user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct UserId(u64);

impl UserId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }
}

impl Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for UserId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl From<UserId> for u64 {
    fn from(id: UserId) -> Self {
        id.0
    }
}

/// Identifier of a notification record.
///
/// Assigned by the notification store in strictly increasing order, so a
/// larger id always means a more recently added record.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
pub struct NotificationId(u64);

impl NotificationId {
    /// The id handed out to the first record of an empty store.
    pub const FIRST: NotificationId = NotificationId(1);

    pub fn new(id: u64) -> Self {
        Self(id)
    }

    /// Returns the id that follows this one.
    ///
    /// The id space ends at `u64::MAX`, which no in-memory store can reach.
    /// Ids at the ceiling do not advance.
    pub fn next(self) -> Self {
        Self(self.0.saturating_add(1))
    }

    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl Display for NotificationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for NotificationId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl From<NotificationId> for u64 {
    fn from(id: NotificationId) -> Self {
        id.0
    }
}

// ============================================================================
// Entity references
// ============================================================================

/// Kind of business record a notification can point back to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    Lead,
    Client,
    Project,
    Budget,
    PurchaseRequest,
    Supplier,
    Task,
    Team,
}

impl EntityKind {
    /// Returns the wire identifier of this kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityKind::Lead => "lead",
            EntityKind::Client => "client",
            EntityKind::Project => "project",
            EntityKind::Budget => "budget",
            EntityKind::PurchaseRequest => "purchase_request",
            EntityKind::Supplier => "supplier",
            EntityKind::Task => "task",
            EntityKind::Team => "team",
        }
    }
}

impl Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Structured pointer from a notification to the record that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EntityRef {
    pub kind: EntityKind,
    pub id: String,
}

impl EntityRef {
    pub fn new(kind: EntityKind, id: impl Into<String>) -> Self {
        Self {
            kind,
            id: id.into(),
        }
    }
}

impl Display for EntityRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.kind, self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use test_case::test_case;

    #[test]
    fn notification_id_next_is_strictly_greater() {
        let id = NotificationId::FIRST;
        assert!(id.next() > id);
        assert_eq!(id.next().as_u64(), 2);
    }

    #[test]
    fn notification_id_next_reaches_the_ceiling() {
        let last = NotificationId::new(u64::MAX - 1).next();
        assert_eq!(last.as_u64(), u64::MAX);
        assert!(last > NotificationId::new(u64::MAX - 1));
    }

    #[test_case(EntityKind::Lead, "lead")]
    #[test_case(EntityKind::PurchaseRequest, "purchase_request")]
    #[test_case(EntityKind::Task, "task")]
    fn entity_kind_serializes_as_snake_case(kind: EntityKind, expected: &str) {
        let json = serde_json::to_string(&kind).unwrap();
        assert_eq!(json, format!("\"{expected}\""));
        assert_eq!(kind.as_str(), expected);
    }

    #[test]
    fn entity_ref_display() {
        let reference = EntityRef::new(EntityKind::PurchaseRequest, "SC-0042");
        assert_eq!(reference.to_string(), "purchase_request/SC-0042");
    }

    proptest! {
        #[test]
        fn notification_id_next_preserves_ordering(a in 0u64..u64::MAX - 1, b in 0u64..u64::MAX - 1) {
            let (a, b) = (NotificationId::new(a), NotificationId::new(b));
            prop_assert_eq!(a < b, a.next() < b.next());
            prop_assert!(a.next() > a);
        }
    }
}
