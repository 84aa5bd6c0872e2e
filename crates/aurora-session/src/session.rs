//! Session/identity holder.
//!
//! Holds at most one current user. The current role is derived from that
//! user, so it is `None` exactly when nobody is logged in. There is no
//! credential check: `login` trusts its caller.

use aurora_rbac::Role;
use tracing::{debug, info};

use crate::user::User;

/// The single active session of the dashboard.
///
/// Owned by the application context and passed by reference to whatever
/// needs the current role.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    current_user: Option<User>,
}

impl Session {
    /// Creates a session with nobody logged in.
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// Creates a session with the given user already logged in.
    pub fn with_user(user: User) -> Self {
        Self {
            current_user: Some(user),
        }
    }

    /// Replaces the current user.
    pub fn login(&mut self, user: User) {
        info!(user_id = %user.id, role = %user.role, "User logged in");
        self.current_user = Some(user);
    }

    /// Clears the current user (and therefore the current role).
    pub fn logout(&mut self) {
        if let Some(user) = self.current_user.take() {
            info!(user_id = %user.id, "User logged out");
        }
    }

    /// Replaces the role of the current user, leaving every other attribute
    /// untouched. Used by the "simulate role" action.
    ///
    /// Returns `false` (and changes nothing) when nobody is logged in.
    pub fn update_role(&mut self, role: Role) -> bool {
        match self.current_user.as_mut() {
            Some(user) => {
                info!(user_id = %user.id, from = %user.role, to = %role, "Role updated");
                user.role = role;
                true
            }
            None => {
                debug!(%role, "Role update ignored: no current user");
                false
            }
        }
    }

    pub fn current_user(&self) -> Option<&User> {
        self.current_user.as_ref()
    }

    /// Returns the role of the current user, if any.
    pub fn current_role(&self) -> Option<Role> {
        self.current_user.as_ref().map(|user| user.role)
    }

    pub fn is_authenticated(&self) -> bool {
        self.current_user.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aurora_types::UserId;
    use proptest::prelude::*;

    fn operador() -> User {
        User::new(UserId::new(5), "Diego Lima", "diego@aurora.com.br", Role::Operador)
            .with_department("Obras")
    }

    #[test]
    fn test_anonymous_session_has_no_role() {
        let session = Session::anonymous();
        assert!(!session.is_authenticated());
        assert_eq!(session.current_role(), None);
        assert!(session.current_user().is_none());
    }

    #[test]
    fn test_login_derives_role() {
        let mut session = Session::anonymous();
        session.login(operador());

        assert!(session.is_authenticated());
        assert_eq!(session.current_role(), Some(Role::Operador));
        assert_eq!(session.current_user(), Some(&operador()));
    }

    #[test]
    fn test_login_replaces_previous_user() {
        let mut session = Session::with_user(User::demo());
        session.login(operador());
        assert_eq!(session.current_user().map(|u| u.id), Some(UserId::new(5)));
    }

    #[test]
    fn test_logout_clears_user_and_role() {
        let mut session = Session::with_user(operador());
        session.logout();

        assert!(!session.is_authenticated());
        assert_eq!(session.current_role(), None);

        // Logging out twice is harmless.
        session.logout();
        assert_eq!(session, Session::anonymous());
    }

    #[test]
    fn test_update_role_without_user_is_noop() {
        let mut session = Session::anonymous();
        assert!(!session.update_role(Role::Gestor));
        assert_eq!(session, Session::anonymous());
    }

    proptest! {
        #[test]
        fn update_role_changes_only_the_role(index in 0usize..Role::COUNT) {
            let role = Role::ALL[index];
            let mut session = Session::with_user(operador());

            prop_assert!(session.update_role(role));
            prop_assert_eq!(session.current_role(), Some(role));

            let user = session.current_user().unwrap();
            let original = operador();
            prop_assert_eq!(user.id, original.id);
            prop_assert_eq!(&user.name, &original.name);
            prop_assert_eq!(&user.email, &original.email);
            prop_assert_eq!(&user.department, &original.department);
        }
    }
}
