//! Notification records.

use aurora_types::{EntityRef, NotificationId, UserId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Severity of a notification, used to pick its icon and colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    #[default]
    Info,
    Success,
    Warning,
    Error,
}

/// A notification before the store has accepted it.
///
/// The store assigns the id, the creation timestamp and the read flag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewNotification {
    pub title: String,
    pub message: String,
    pub kind: NotificationKind,
    pub recipients: Vec<UserId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference: Option<EntityRef>,
}

impl NewNotification {
    pub fn new(
        title: impl Into<String>,
        message: impl Into<String>,
        kind: NotificationKind,
        recipients: Vec<UserId>,
    ) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            kind,
            recipients,
            reference: None,
        }
    }

    /// Points the notification back at the record that produced it.
    pub fn with_reference(mut self, reference: EntityRef) -> Self {
        self.reference = Some(reference);
        self
    }
}

/// A stored notification.
///
/// `read` is a single flag per record, shared by every recipient.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub id: NotificationId,
    pub title: String,
    pub message: String,
    pub kind: NotificationKind,
    pub created_at: DateTime<Utc>,
    pub read: bool,
    pub recipients: Vec<UserId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference: Option<EntityRef>,
}

impl Notification {
    pub(crate) fn from_new(new: NewNotification, id: NotificationId, at: DateTime<Utc>) -> Self {
        let NewNotification {
            title,
            message,
            kind,
            recipients,
            reference,
        } = new;

        Self {
            id,
            title,
            message,
            kind,
            created_at: at,
            read: false,
            recipients,
            reference,
        }
    }

    /// Returns whether `user` is one of the recipients.
    pub fn is_addressed_to(&self, user: UserId) -> bool {
        self.recipients.contains(&user)
    }
}
