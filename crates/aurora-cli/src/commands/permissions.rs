//! `aurora permissions <role>`: effective permissions of one role.

use anyhow::{Result, anyhow};
use aurora::{Permission, PermissionEvaluator, Role};
use aurora_config::AuroraConfig;

use crate::style::{print_header, print_hint};

pub fn run(config: &AuroraConfig, role: &str) -> Result<()> {
    let role: Role = role
        .parse()
        .map_err(|e| anyhow!("{e} (valid roles: {})", role_names()))?;
    let evaluator = PermissionEvaluator::new(config.permission_map()?);

    print_header(&format!("{} ({})", role.label(), role));
    for permission in Permission::CATALOG
        .into_iter()
        .filter(|p| evaluator.evaluate_permission(Some(role), *p))
    {
        println!("  {permission}");
    }

    if role.is_admin() {
        println!();
        print_hint("admin is granted every identifier, including ones not listed here");
    }

    Ok(())
}

fn role_names() -> String {
    Role::ALL
        .iter()
        .map(Role::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}
