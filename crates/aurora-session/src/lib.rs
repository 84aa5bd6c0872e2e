//! # aurora-session: who is using the dashboard
//!
//! A [`Session`] holds the current [`User`] and derives the current role
//! from it. It is a plain owned value: the application creates one at
//! bootstrap (usually with the demo user logged in) and passes it around
//! explicitly.
//!
//! ```
//! use aurora_rbac::Role;
//! use aurora_session::{Session, User};
//!
//! let mut session = Session::with_user(User::demo());
//! assert_eq!(session.current_role(), Some(Role::Admin));
//!
//! // "Simulate role" keeps the user, swaps the role.
//! session.update_role(Role::Cliente);
//! assert_eq!(session.current_role(), Some(Role::Cliente));
//!
//! session.logout();
//! assert_eq!(session.current_role(), None);
//! ```

mod session;
mod user;

pub use session::Session;
pub use user::User;
