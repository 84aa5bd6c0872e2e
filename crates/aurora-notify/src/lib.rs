//! # aurora-notify: in-app notifications
//!
//! Business actions (submitting a purchase request, approving a budget, ...)
//! drop a [`NewNotification`] into the [`NotificationStore`]. The store
//! stamps it with an id and a creation time and keeps it, unread, at the top
//! of the list.
//!
//! ```
//! use aurora_notify::{NewNotification, NotificationKind, NotificationStore};
//! use aurora_types::UserId;
//!
//! let mut store = NotificationStore::new();
//! let id = store.add(NewNotification::new(
//!     "X",
//!     "Y",
//!     NotificationKind::Info,
//!     vec![UserId::new(1)],
//! ));
//!
//! store.mark_read(id);
//! assert!(store.get(id).is_some_and(|n| n.read));
//! ```

mod notification;
mod store;

pub use notification::{NewNotification, Notification, NotificationKind};
pub use store::NotificationStore;
