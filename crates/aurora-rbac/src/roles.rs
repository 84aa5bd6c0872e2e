#![allow(clippy::match_same_arms)]
//! Role definitions for RBAC.
//!
//! Defines the 8 roles of the dashboard. The set is closed: every role
//! must have an entry in [`crate::policy::builtin_permissions`], which is
//! an exhaustive `match`.

use std::fmt::Display;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error returned when a role identifier is not one of the 8 known roles.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown role: {0:?}")]
pub struct ParseRoleError(pub String);

/// Role in the access control system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// System administrator.
    ///
    /// **Permissions:**
    /// - Every permission, including ones not in the catalog yet
    Admin,

    /// Business manager.
    ///
    /// **Permissions:**
    /// - Financials, budgets and purchasing (including approvals)
    /// - Team allocation, leads, clients, projects, suppliers, tasks
    /// - Reports and exports
    Gestor,

    /// Operations supervisor.
    ///
    /// **Permissions:**
    /// - Purchase requests (no values, no approvals)
    /// - Team allocation, projects, tasks, reports
    Supervisor,

    /// Human resources.
    ///
    /// **Permissions:**
    /// - Team allocation and user accounts
    /// - Reports
    Rh,

    /// Field operator.
    ///
    /// **Permissions:**
    /// - View and submit purchase requests
    /// - Projects (read) and tasks
    Operador,

    /// External client with portal access.
    ///
    /// **Permissions:**
    /// - Read-only budgets and projects
    Cliente,

    /// Sales team.
    ///
    /// **Permissions:**
    /// - Leads, clients, budget values
    /// - Team allocation (read) and reports
    Vendas,

    /// Purchasing agent.
    ///
    /// **Permissions:**
    /// - Purchase requests including quoted values
    /// - Suppliers and financials
    Comprador,
}

impl Role {
    /// Number of roles.
    pub const COUNT: usize = 8;

    /// Every role, in declaration order.
    pub const ALL: [Role; Role::COUNT] = [
        Role::Admin,
        Role::Gestor,
        Role::Supervisor,
        Role::Rh,
        Role::Operador,
        Role::Cliente,
        Role::Vendas,
        Role::Comprador,
    ];

    /// Returns the identifier used in configuration and serialized data.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Gestor => "gestor",
            Role::Supervisor => "supervisor",
            Role::Rh => "rh",
            Role::Operador => "operador",
            Role::Cliente => "cliente",
            Role::Vendas => "vendas",
            Role::Comprador => "comprador",
        }
    }

    /// Returns the pt-BR label shown in the dashboard.
    pub fn label(&self) -> &'static str {
        match self {
            Role::Admin => "Administrador",
            Role::Gestor => "Gestor",
            Role::Supervisor => "Supervisor",
            Role::Rh => "Recursos Humanos",
            Role::Operador => "Operador",
            Role::Cliente => "Cliente",
            Role::Vendas => "Vendas",
            Role::Comprador => "Comprador",
        }
    }

    /// Position of this role in [`Role::ALL`].
    pub(crate) fn index(self) -> usize {
        match self {
            Role::Admin => 0,
            Role::Gestor => 1,
            Role::Supervisor => 2,
            Role::Rh => 3,
            Role::Operador => 4,
            Role::Cliente => 5,
            Role::Vendas => 6,
            Role::Comprador => 7,
        }
    }

    /// Returns whether this role bypasses the permission map entirely.
    pub fn is_admin(&self) -> bool {
        matches!(self, Role::Admin)
    }
}

impl Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = ParseRoleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Role::ALL
            .iter()
            .find(|role| role.as_str() == s)
            .copied()
            .ok_or_else(|| ParseRoleError(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test]
    fn test_index_matches_position_in_all() {
        for (position, role) in Role::ALL.iter().enumerate() {
            assert_eq!(role.index(), position, "{role} is out of place");
        }
    }

    #[test_case("admin", Role::Admin)]
    #[test_case("gestor", Role::Gestor)]
    #[test_case("rh", Role::Rh)]
    #[test_case("comprador", Role::Comprador)]
    fn test_parse_known_role(raw: &str, expected: Role) {
        assert_eq!(raw.parse::<Role>(), Ok(expected));
    }

    #[test_case("Admin"; "identifiers are case sensitive")]
    #[test_case(""; "empty")]
    #[test_case("financeiro"; "not a role")]
    fn test_parse_unknown_role(raw: &str) {
        assert_eq!(raw.parse::<Role>(), Err(ParseRoleError(raw.to_string())));
    }

    #[test]
    fn test_serde_uses_lowercase_identifier() {
        let json = serde_json::to_string(&Role::Operador).unwrap();
        assert_eq!(json, "\"operador\"");

        let role: Role = serde_json::from_str("\"vendas\"").unwrap();
        assert_eq!(role, Role::Vendas);
    }

    #[test]
    fn test_only_admin_is_admin() {
        let admins: Vec<Role> = Role::ALL.into_iter().filter(Role::is_admin).collect();
        assert_eq!(admins, vec![Role::Admin]);
    }
}
