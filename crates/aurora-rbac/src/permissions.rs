#![allow(clippy::match_same_arms)]
//! Permission types for access control.
//!
//! Defines the catalog of permissions that can be granted to a role, plus
//! the [`Permission::All`] sentinel.

use std::fmt::Display;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error returned when a permission identifier is not in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown permission: {0:?}")]
pub struct ParsePermissionError(pub String);

/// Permission that can be granted to a role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Permission {
    /// Sentinel granting every permission.
    All,

    /// See monetary totals and margins.
    ViewFinancials,
    /// Open the budgets page.
    ViewBudgets,
    /// Change line values on a budget.
    EditBudgetValues,
    /// Move a budget between statuses.
    ChangeBudgetStatus,

    /// List purchase requests.
    ViewPurchaseRequests,
    /// Submit a purchase request.
    CreatePurchaseRequests,
    /// Change the quoted values of a purchase.
    EditPurchaseValues,
    /// Approve or reject purchase requests.
    ///
    /// **Impact:** commits company money; restricted to Gestor.
    ApprovePurchaseRequests,

    /// See team allocation.
    ViewTeamAllocation,
    /// Change team allocation.
    EditTeamAllocation,

    /// Work the sales pipeline board.
    ManageLeads,
    /// Create and edit client records.
    ManageClients,
    /// List projects and their progress.
    ViewProjects,
    /// Create projects and change their schedule.
    ManageProjects,
    /// Maintain the supplier registry.
    ManageSuppliers,
    /// Move tasks across the task board.
    ManageTasks,

    /// Open reports.
    ViewReports,
    /// Export report data to spreadsheets.
    ExportReports,

    /// Manage user accounts.
    ManageUsers,
    /// Change application settings.
    ManageSettings,
}

impl Permission {
    /// Every grantable permission, excluding the [`Permission::All`] sentinel.
    pub const CATALOG: [Permission; 20] = [
        Permission::ViewFinancials,
        Permission::ViewBudgets,
        Permission::EditBudgetValues,
        Permission::ChangeBudgetStatus,
        Permission::ViewPurchaseRequests,
        Permission::CreatePurchaseRequests,
        Permission::EditPurchaseValues,
        Permission::ApprovePurchaseRequests,
        Permission::ViewTeamAllocation,
        Permission::EditTeamAllocation,
        Permission::ManageLeads,
        Permission::ManageClients,
        Permission::ViewProjects,
        Permission::ManageProjects,
        Permission::ManageSuppliers,
        Permission::ManageTasks,
        Permission::ViewReports,
        Permission::ExportReports,
        Permission::ManageUsers,
        Permission::ManageSettings,
    ];

    /// Returns the identifier used in configuration and UI checks.
    pub fn as_str(&self) -> &'static str {
        match self {
            Permission::All => "all",
            Permission::ViewFinancials => "view_financials",
            Permission::ViewBudgets => "view_budgets",
            Permission::EditBudgetValues => "edit_budget_values",
            Permission::ChangeBudgetStatus => "change_budget_status",
            Permission::ViewPurchaseRequests => "view_purchase_requests",
            Permission::CreatePurchaseRequests => "create_purchase_requests",
            Permission::EditPurchaseValues => "edit_purchase_values",
            Permission::ApprovePurchaseRequests => "approve_purchase_requests",
            Permission::ViewTeamAllocation => "view_team_allocation",
            Permission::EditTeamAllocation => "edit_team_allocation",
            Permission::ManageLeads => "manage_leads",
            Permission::ManageClients => "manage_clients",
            Permission::ViewProjects => "view_projects",
            Permission::ManageProjects => "manage_projects",
            Permission::ManageSuppliers => "manage_suppliers",
            Permission::ManageTasks => "manage_tasks",
            Permission::ViewReports => "view_reports",
            Permission::ExportReports => "export_reports",
            Permission::ManageUsers => "manage_users",
            Permission::ManageSettings => "manage_settings",
        }
    }

    /// Returns whether this is the [`Permission::All`] sentinel.
    pub fn is_wildcard(&self) -> bool {
        matches!(self, Permission::All)
    }
}

impl Display for Permission {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Permission {
    type Err = ParsePermissionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == Permission::All.as_str() {
            return Ok(Permission::All);
        }

        Permission::CATALOG
            .iter()
            .find(|permission| permission.as_str() == s)
            .copied()
            .ok_or_else(|| ParsePermissionError(s.to_string()))
    }
}

/// Set of permissions granted to a role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PermissionSet {
    permissions: Vec<Permission>,
}

impl PermissionSet {
    /// Creates a new permission set. Duplicates are dropped.
    pub fn new(permissions: Vec<Permission>) -> Self {
        permissions.into_iter().collect()
    }

    /// Creates an empty permission set.
    pub fn empty() -> Self {
        Self {
            permissions: Vec::new(),
        }
    }

    /// Creates a set holding only the [`Permission::All`] sentinel.
    pub fn wildcard() -> Self {
        Self {
            permissions: vec![Permission::All],
        }
    }

    /// Returns whether this set literally contains the given permission.
    pub fn contains(&self, permission: Permission) -> bool {
        self.permissions.contains(&permission)
    }

    /// Returns whether this set contains the [`Permission::All`] sentinel.
    pub fn is_wildcard(&self) -> bool {
        self.contains(Permission::All)
    }

    /// Adds a permission to the set.
    pub fn grant(&mut self, permission: Permission) {
        if !self.permissions.contains(&permission) {
            self.permissions.push(permission);
        }
    }

    /// Removes a permission from the set.
    pub fn revoke(&mut self, permission: Permission) {
        self.permissions.retain(|p| *p != permission);
    }

    /// Returns all permissions in the set, in grant order.
    pub fn iter(&self) -> impl Iterator<Item = &Permission> {
        self.permissions.iter()
    }

    pub fn len(&self) -> usize {
        self.permissions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.permissions.is_empty()
    }
}

impl Default for PermissionSet {
    fn default() -> Self {
        Self::empty()
    }
}

impl From<Vec<Permission>> for PermissionSet {
    fn from(permissions: Vec<Permission>) -> Self {
        Self::new(permissions)
    }
}

impl FromIterator<Permission> for PermissionSet {
    fn from_iter<I: IntoIterator<Item = Permission>>(iter: I) -> Self {
        let mut set = Self::empty();
        for permission in iter {
            set.grant(permission);
        }
        set
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_identifiers_parse_back() {
        for permission in Permission::CATALOG {
            assert_eq!(permission.as_str().parse::<Permission>(), Ok(permission));
        }
        assert_eq!("all".parse::<Permission>(), Ok(Permission::All));
    }

    #[test]
    fn test_catalog_excludes_sentinel() {
        assert!(!Permission::CATALOG.iter().any(Permission::is_wildcard));
    }

    #[test]
    fn test_unknown_identifier_is_rejected() {
        let err = "some_future_permission".parse::<Permission>().unwrap_err();
        assert_eq!(err, ParsePermissionError("some_future_permission".to_string()));
        assert!("VIEW_FINANCIALS".parse::<Permission>().is_err());
    }

    #[test]
    fn test_permission_set_operations() {
        let mut set = PermissionSet::empty();
        assert!(!set.contains(Permission::ViewReports));

        set.grant(Permission::ViewReports);
        assert!(set.contains(Permission::ViewReports));

        set.grant(Permission::ViewReports); // Duplicate grant is no-op
        assert_eq!(set.len(), 1);

        set.grant(Permission::ManageTasks);
        assert!(set.contains(Permission::ManageTasks));
        assert_eq!(set.len(), 2);

        set.revoke(Permission::ViewReports);
        assert!(!set.contains(Permission::ViewReports));
        assert!(set.contains(Permission::ManageTasks));
    }

    #[test]
    fn test_wildcard_set_contains_only_the_sentinel() {
        let set = PermissionSet::wildcard();
        assert!(set.is_wildcard());
        assert!(!set.contains(Permission::ViewFinancials));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_permission_set_from_vec_drops_duplicates() {
        let set = PermissionSet::from(vec![
            Permission::ManageLeads,
            Permission::ManageClients,
            Permission::ManageLeads,
        ]);

        assert_eq!(set.len(), 2);
        assert!(set.contains(Permission::ManageLeads));
        assert!(set.contains(Permission::ManageClients));
        assert!(!set.contains(Permission::ManageTasks));
    }
}
