//! # aurora-rbac: Role-Based Access Control
//!
//! Decides what each dashboard role may see and do:
//! - **Role registry** (8 roles, closed enumeration)
//! - **Permission catalog** (20 permissions plus the `all` sentinel)
//! - **Role→permission map** (total over roles, overridable from config)
//! - **Evaluator** consulted before rendering protected UI
//!
//! ## Roles
//!
//! | Role       | Financials | Purchasing          | Team alloc. | Leads/Clients | Reports |
//! |------------|------------|---------------------|-------------|---------------|---------|
//! | admin      | ✓          | ✓ (incl. approve)   | ✓           | ✓             | ✓       |
//! | gestor     | ✓          | ✓ (incl. approve)   | ✓           | ✓             | ✓       |
//! | supervisor | ✗          | view / create       | ✓           | ✗             | ✓       |
//! | rh         | ✗          | ✗                   | ✓           | ✗             | ✓       |
//! | operador   | ✗          | view / create       | ✗           | ✗             | ✗       |
//! | cliente    | ✗          | ✗                   | ✗           | ✗             | ✗       |
//! | vendas     | ✗          | ✗                   | view        | ✓             | ✓       |
//! | comprador  | ✓          | ✓ (no approve)      | ✗           | ✗             | ✗       |
//!
//! ## Examples
//!
//! ```
//! use aurora_rbac::{PermissionEvaluator, Role};
//!
//! let evaluator = PermissionEvaluator::default();
//!
//! assert!(evaluator.evaluate(Some(Role::Operador), "view_purchase_requests"));
//! assert!(!evaluator.evaluate(Some(Role::Operador), "edit_purchase_values"));
//! assert!(evaluator.evaluate(Some(Role::Admin), "some_future_permission"));
//! assert!(!evaluator.evaluate(None, "view_financials"));
//! ```
//!
//! ### Overrides
//!
//! ```
//! use aurora_rbac::{PermissionEvaluator, RolePermissionMap, Role};
//!
//! let map = RolePermissionMap::builtin()
//!     .with_named_overrides([("cliente", vec!["view_projects", "view_reports"])])?;
//! let evaluator = PermissionEvaluator::new(map);
//!
//! assert!(evaluator.evaluate(Some(Role::Cliente), "view_reports"));
//! assert!(!evaluator.evaluate(Some(Role::Cliente), "view_budgets"));
//! # Ok::<(), aurora_rbac::PolicyError>(())
//! ```

pub mod enforcement;
pub mod permissions;
pub mod policy;
pub mod roles;

// Re-export commonly used types
pub use enforcement::{EnforcementError, PermissionEvaluator};
pub use permissions::{ParsePermissionError, Permission, PermissionSet};
pub use policy::{PolicyError, RolePermissionMap, builtin_permissions};
pub use roles::{ParseRoleError, Role};
