//! Permission evaluation.
//!
//! [`PermissionEvaluator::evaluate`] is the check presentation code runs on
//! every render; it is pure and never fails. [`PermissionEvaluator::require`]
//! wraps the same decision in a `Result` for business actions.

use thiserror::Error;
use tracing::{debug, trace, warn};

use crate::permissions::Permission;
use crate::policy::RolePermissionMap;
use crate::roles::Role;

/// Error type for permission enforcement.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EnforcementError {
    /// No user is logged in.
    #[error("Access denied: no active session (requires {permission})")]
    NoSession { permission: String },

    /// The active role lacks the permission.
    #[error("Access denied: role {role} lacks {permission}")]
    PermissionDenied { role: Role, permission: String },
}

/// Result type for enforcement operations.
pub type Result<T> = std::result::Result<T, EnforcementError>;

/// Decides whether a role may perform an action gated by a permission.
///
/// Evaluation order:
/// 1. No role → denied
/// 2. [`Role::Admin`] → granted, for any identifier
/// 3. Role set contains [`Permission::All`] → granted
/// 4. Otherwise granted iff the identifier is literally in the role's set
#[derive(Debug, Clone)]
pub struct PermissionEvaluator {
    map: RolePermissionMap,

    /// Whether `require` logs its decisions.
    audit_enabled: bool,
}

impl PermissionEvaluator {
    /// Creates an evaluator over the given map.
    pub fn new(map: RolePermissionMap) -> Self {
        Self {
            map,
            audit_enabled: true,
        }
    }

    /// Disables decision logging in [`PermissionEvaluator::require`].
    pub fn without_audit(mut self) -> Self {
        self.audit_enabled = false;
        self
    }

    /// Evaluates a permission identifier for the given role.
    ///
    /// Identifiers outside the catalog are only granted to [`Role::Admin`].
    pub fn evaluate(&self, role: Option<Role>, permission: &str) -> bool {
        let Some(role) = role else {
            trace!(permission, "no session; denied");
            return false;
        };

        if role.is_admin() {
            return true;
        }

        let set = self.map.permissions_for(role);
        if set.is_wildcard() {
            return true;
        }

        let granted = permission
            .parse::<Permission>()
            .is_ok_and(|permission| set.contains(permission));

        trace!(%role, permission, granted, "permission evaluated");
        granted
    }

    /// Evaluates a typed permission for the given role.
    pub fn evaluate_permission(&self, role: Option<Role>, permission: Permission) -> bool {
        self.evaluate(role, permission.as_str())
    }

    /// Evaluates a permission for a role given by name.
    ///
    /// A name that is not a known role holds no permissions.
    pub fn evaluate_named(&self, role_name: Option<&str>, permission: &str) -> bool {
        match role_name.map(str::parse::<Role>) {
            None => self.evaluate(None, permission),
            Some(Ok(role)) => self.evaluate(Some(role), permission),
            Some(Err(err)) => {
                trace!(%err, permission, "unrecognized role; denied");
                false
            }
        }
    }

    /// Enforces a permission for a business action.
    ///
    /// Returns `Ok(())` if granted, `Err` otherwise.
    pub fn require(&self, role: Option<Role>, permission: &str) -> Result<()> {
        let allowed = self.evaluate(role, permission);

        if self.audit_enabled {
            match role {
                Some(role) if allowed => debug!(%role, permission, "Permission granted"),
                Some(role) => warn!(%role, permission, "Permission denied"),
                None => warn!(permission, "Permission denied: no session"),
            }
        }

        match role {
            _ if allowed => Ok(()),
            Some(role) => Err(EnforcementError::PermissionDenied {
                role,
                permission: permission.to_string(),
            }),
            None => Err(EnforcementError::NoSession {
                permission: permission.to_string(),
            }),
        }
    }

    /// Returns the effective permissions of a role.
    ///
    /// Admin and wildcard roles yield the whole catalog.
    pub fn granted(&self, role: Role) -> Vec<Permission> {
        let set = self.map.permissions_for(role);
        if role.is_admin() || set.is_wildcard() {
            return Permission::CATALOG.to_vec();
        }
        set.iter().copied().collect()
    }

    /// Returns the underlying map.
    pub fn map(&self) -> &RolePermissionMap {
        &self.map
    }
}

impl Default for PermissionEvaluator {
    fn default() -> Self {
        Self::new(RolePermissionMap::builtin())
    }
}
