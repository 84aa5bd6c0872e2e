//! Role→permission mapping.
//!
//! [`RolePermissionMap`] is total over [`Role`]: it stores one
//! [`PermissionSet`] per role in a fixed-size array indexed by the role, so
//! there is no way to ask for a role that has no entry.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::permissions::{ParsePermissionError, Permission, PermissionSet};
use crate::roles::{ParseRoleError, Role};

/// Error raised while building a map from named (configuration) overrides.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PolicyError {
    #[error(transparent)]
    UnknownRole(#[from] ParseRoleError),

    #[error("{source} (granted to role {role})")]
    UnknownPermission {
        role: Role,
        source: ParsePermissionError,
    },
}

/// Returns the built-in permission set of a role.
///
/// Adding a variant to [`Role`] does not compile until it is mapped here.
pub fn builtin_permissions(role: Role) -> PermissionSet {
    use Permission::{
        ApprovePurchaseRequests, ChangeBudgetStatus, CreatePurchaseRequests, EditBudgetValues,
        EditPurchaseValues, EditTeamAllocation, ExportReports, ManageClients, ManageLeads,
        ManageProjects, ManageSuppliers, ManageTasks, ManageUsers, ViewBudgets, ViewFinancials,
        ViewProjects, ViewPurchaseRequests, ViewReports, ViewTeamAllocation,
    };

    match role {
        Role::Admin => PermissionSet::wildcard(),
        Role::Gestor => PermissionSet::new(vec![
            ViewFinancials,
            ViewBudgets,
            EditBudgetValues,
            ChangeBudgetStatus,
            ViewPurchaseRequests,
            CreatePurchaseRequests,
            EditPurchaseValues,
            ApprovePurchaseRequests,
            ViewTeamAllocation,
            EditTeamAllocation,
            ManageLeads,
            ManageClients,
            ViewProjects,
            ManageProjects,
            ManageSuppliers,
            ManageTasks,
            ViewReports,
            ExportReports,
        ]),
        Role::Supervisor => PermissionSet::new(vec![
            ViewBudgets,
            ViewPurchaseRequests,
            CreatePurchaseRequests,
            ViewTeamAllocation,
            EditTeamAllocation,
            ViewProjects,
            ManageProjects,
            ManageTasks,
            ViewReports,
        ]),
        Role::Rh => PermissionSet::new(vec![
            ViewTeamAllocation,
            EditTeamAllocation,
            ManageUsers,
            ViewReports,
        ]),
        Role::Operador => PermissionSet::new(vec![
            ViewPurchaseRequests,
            CreatePurchaseRequests,
            ViewProjects,
            ManageTasks,
        ]),
        Role::Cliente => PermissionSet::new(vec![ViewBudgets, ViewProjects]),
        Role::Vendas => PermissionSet::new(vec![
            ViewBudgets,
            EditBudgetValues,
            ViewTeamAllocation,
            ManageLeads,
            ManageClients,
            ViewProjects,
            ViewReports,
        ]),
        Role::Comprador => PermissionSet::new(vec![
            ViewFinancials,
            ViewPurchaseRequests,
            CreatePurchaseRequests,
            EditPurchaseValues,
            ManageSuppliers,
        ]),
    }
}

/// Total mapping from every [`Role`] to the permissions it holds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RolePermissionMap {
    sets: [PermissionSet; Role::COUNT],
}

impl RolePermissionMap {
    /// Creates the map with every role holding its built-in set.
    pub fn builtin() -> Self {
        Self {
            sets: Role::ALL.map(builtin_permissions),
        }
    }

    /// Returns the permission set of a role.
    pub fn permissions_for(&self, role: Role) -> &PermissionSet {
        &self.sets[role.index()]
    }

    /// Replaces the permission set of a role.
    pub fn with_override(mut self, role: Role, permissions: PermissionSet) -> Self {
        self.sets[role.index()] = permissions;
        self
    }

    /// Applies overrides given as identifiers, e.g. from a config file.
    ///
    /// Each listed role's set replaces the current one; roles not listed
    /// keep their set. Fails on the first unknown role or permission name.
    pub fn with_named_overrides<'a, I, P>(mut self, overrides: I) -> Result<Self, PolicyError>
    where
        I: IntoIterator<Item = (&'a str, P)>,
        P: IntoIterator<Item = &'a str>,
    {
        for (role_name, permission_names) in overrides {
            let role: Role = role_name.parse()?;
            let set = permission_names
                .into_iter()
                .map(|name| {
                    name.parse::<Permission>()
                        .map_err(|source| PolicyError::UnknownPermission { role, source })
                })
                .collect::<Result<PermissionSet, _>>()?;
            self = self.with_override(role, set);
        }
        Ok(self)
    }

    /// Iterates over every `(role, set)` pair in [`Role::ALL`] order.
    pub fn iter(&self) -> impl Iterator<Item = (Role, &PermissionSet)> {
        Role::ALL.into_iter().zip(self.sets.iter())
    }
}

impl Default for RolePermissionMap {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test]
    fn test_builtin_map_is_total() {
        let map = RolePermissionMap::builtin();
        assert_eq!(map.iter().count(), Role::COUNT);
        for (role, set) in map.iter() {
            assert_eq!(set, &builtin_permissions(role));
        }
    }

    #[test]
    fn test_admin_holds_the_sentinel() {
        let map = RolePermissionMap::builtin();
        assert!(map.permissions_for(Role::Admin).is_wildcard());
    }

    #[test]
    fn test_only_admin_holds_the_sentinel_by_default() {
        let map = RolePermissionMap::builtin();
        let wildcard_roles: Vec<Role> = map
            .iter()
            .filter(|(_, set)| set.is_wildcard())
            .map(|(role, _)| role)
            .collect();
        assert_eq!(wildcard_roles, vec![Role::Admin]);
    }

    #[test_case(Role::Operador, Permission::ViewPurchaseRequests, true)]
    #[test_case(Role::Operador, Permission::EditPurchaseValues, false)]
    #[test_case(Role::Vendas, Permission::ViewTeamAllocation, true)]
    #[test_case(Role::Vendas, Permission::EditTeamAllocation, false)]
    #[test_case(Role::Gestor, Permission::ApprovePurchaseRequests, true)]
    #[test_case(Role::Supervisor, Permission::ApprovePurchaseRequests, false)]
    #[test_case(Role::Comprador, Permission::EditPurchaseValues, true)]
    #[test_case(Role::Cliente, Permission::ViewFinancials, false)]
    #[test_case(Role::Rh, Permission::ManageUsers, true)]
    fn test_builtin_membership(role: Role, permission: Permission, expected: bool) {
        let map = RolePermissionMap::builtin();
        assert_eq!(map.permissions_for(role).contains(permission), expected);
    }

    #[test]
    fn test_override_replaces_one_role_only() {
        let map = RolePermissionMap::builtin()
            .with_override(Role::Cliente, PermissionSet::from(vec![Permission::ViewReports]));

        let cliente = map.permissions_for(Role::Cliente);
        assert!(cliente.contains(Permission::ViewReports));
        assert!(!cliente.contains(Permission::ViewProjects));

        assert_eq!(
            map.permissions_for(Role::Vendas),
            &builtin_permissions(Role::Vendas)
        );
    }

    #[test]
    fn test_named_overrides() {
        let map = RolePermissionMap::builtin()
            .with_named_overrides([("supervisor", vec!["all"]), ("rh", vec!["view_reports"])])
            .unwrap();

        assert!(map.permissions_for(Role::Supervisor).is_wildcard());
        assert_eq!(map.permissions_for(Role::Rh).len(), 1);
    }

    #[test]
    fn test_named_overrides_reject_unknown_role() {
        let err = RolePermissionMap::builtin()
            .with_named_overrides([("financeiro", vec!["view_reports"])])
            .unwrap_err();

        assert_eq!(
            err,
            PolicyError::UnknownRole(ParseRoleError("financeiro".to_string()))
        );
    }

    #[test]
    fn test_named_overrides_reject_unknown_permission() {
        let err = RolePermissionMap::builtin()
            .with_named_overrides([("vendas", vec!["view_reports", "delete_everything"])])
            .unwrap_err();

        match err {
            PolicyError::UnknownPermission { role, source } => {
                assert_eq!(role, Role::Vendas);
                assert_eq!(source.0, "delete_everything");
            }
            PolicyError::UnknownRole(_) => panic!("Expected UnknownPermission error"),
        }
    }
}
