//! Dashboard user model.

use aurora_rbac::Role;
use aurora_types::UserId;
use serde::{Deserialize, Serialize};

/// A dashboard user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// User ID (unique across users)
    pub id: UserId,
    /// Display name
    pub name: String,
    /// Login e-mail
    pub email: String,
    /// Role currently assigned to the user
    pub role: Role,
    /// (optional) Department shown in the profile menu
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
}

impl User {
    /// Creates a new user.
    pub fn new(id: UserId, name: impl Into<String>, email: impl Into<String>, role: Role) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
            role,
            department: None,
        }
    }

    /// Sets the department.
    pub fn with_department(mut self, department: impl Into<String>) -> Self {
        self.department = Some(department.into());
        self
    }

    /// The user bootstrapped into the demo session when nothing is configured.
    pub fn demo() -> Self {
        User::new(
            UserId::new(1),
            "Carlos Silva",
            "carlos.silva@aurora.com.br",
            Role::Admin,
        )
        .with_department("Diretoria")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_new() {
        let user = User::new(UserId::new(7), "Ana Souza", "ana@aurora.com.br", Role::Vendas);
        assert_eq!(user.id, UserId::new(7));
        assert_eq!(user.name, "Ana Souza");
        assert_eq!(user.email, "ana@aurora.com.br");
        assert_eq!(user.role, Role::Vendas);
        assert!(user.department.is_none());
    }

    #[test]
    fn user_json_omits_missing_department() {
        let user = User::new(UserId::new(2), "Bruno", "bruno@aurora.com.br", Role::Rh);
        let json = serde_json::to_value(&user).unwrap();
        assert_eq!(json["role"], "rh");
        assert!(json.get("department").is_none());
    }

    #[test]
    fn demo_user_is_admin() {
        let user = User::demo();
        assert_eq!(user.role, Role::Admin);
        assert_eq!(user.department.as_deref(), Some("Diretoria"));
    }
}
