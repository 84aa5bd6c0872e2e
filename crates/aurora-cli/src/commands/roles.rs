//! `aurora roles`: the role catalog with effective permission counts.

use anyhow::Result;
use aurora::{Permission, PermissionEvaluator, Role};
use aurora_config::AuroraConfig;

use crate::style::print_list_table;

pub fn run(config: &AuroraConfig) -> Result<()> {
    let evaluator = PermissionEvaluator::new(config.permission_map()?);

    let rows: Vec<Vec<String>> = Role::ALL
        .iter()
        .map(|role| {
            let granted = evaluator.granted(*role).len();
            let scope = if granted == Permission::CATALOG.len() {
                "todas".to_string()
            } else {
                granted.to_string()
            };
            vec![role.as_str().to_string(), role.label().to_string(), scope]
        })
        .collect();

    print_list_table(&["Role", "Label", "Permissions"], &rows, "role");
    Ok(())
}
