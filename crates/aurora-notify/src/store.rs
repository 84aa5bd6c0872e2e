//! Append-only, newest-first notification log.

use std::collections::VecDeque;

use aurora_types::NotificationId;
use chrono::{DateTime, Utc};
use tracing::{debug, info};

use crate::notification::{NewNotification, Notification};

/// In-memory notification store.
///
/// Records are never removed. The only mutation after insertion is
/// [`NotificationStore::mark_read`]. Filtering by recipient is left to
/// consumers (see [`Notification::is_addressed_to`]).
#[derive(Debug, Clone)]
pub struct NotificationStore {
    /// Newest first.
    records: VecDeque<Notification>,
    next_id: NotificationId,
}

impl NotificationStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self {
            records: VecDeque::new(),
            next_id: NotificationId::FIRST,
        }
    }

    /// Adds a notification stamped with the current time.
    pub fn add(&mut self, notification: NewNotification) -> NotificationId {
        self.add_at(notification, Utc::now())
    }

    /// Adds a notification with an explicit creation time.
    ///
    /// The record is unread and becomes the first element of [`Self::list`].
    pub fn add_at(&mut self, notification: NewNotification, at: DateTime<Utc>) -> NotificationId {
        let id = self.next_id;
        self.next_id = id.next();

        let record = Notification::from_new(notification, id, at);
        info!(
            notification_id = %id,
            kind = ?record.kind,
            recipients = record.recipients.len(),
            "Notification added"
        );
        self.records.push_front(record);

        id
    }

    /// Marks a notification as read.
    ///
    /// Returns whether a record with that id exists. Unknown ids leave the
    /// store unchanged; marking twice is harmless.
    pub fn mark_read(&mut self, id: NotificationId) -> bool {
        match self.records.iter_mut().find(|n| n.id == id) {
            Some(record) => {
                record.read = true;
                true
            }
            None => {
                debug!(notification_id = %id, "mark_read ignored: unknown notification");
                false
            }
        }
    }

    /// Returns all notifications, newest first.
    pub fn list(&self) -> impl Iterator<Item = &Notification> {
        self.records.iter()
    }

    pub fn get(&self, id: NotificationId) -> Option<&Notification> {
        self.records.iter().find(|n| n.id == id)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Number of records whose read flag is still false.
    pub fn unread_count(&self) -> usize {
        self.records.iter().filter(|n| !n.read).count()
    }
}

impl Default for NotificationStore {
    fn default() -> Self {
        Self::new()
    }
}
