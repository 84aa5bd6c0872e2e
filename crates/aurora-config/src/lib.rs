//! Configuration management for Aurora
//!
//! Provides hierarchical configuration loading from multiple sources:
//! 1. CLI arguments (highest precedence)
//! 2. Environment variables (AURORA_* prefix, `__` between section and key)
//! 3. aurora.local.toml (gitignored, local overrides)
//! 4. aurora.toml (git-tracked, project config)
//! 5. ~/.config/aurora/config.toml (user defaults)
//! 6. Built-in defaults (lowest precedence)

use aurora_rbac::{Role, RolePermissionMap};
use aurora_types::UserId;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

mod error;
mod loader;

pub use error::ConfigError;
pub use loader::ConfigLoader;

/// Log levels accepted by `logging.level`.
pub const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Main Aurora configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AuroraConfig {
    pub app: AppConfig,
    pub session: SessionConfig,
    pub permissions: PermissionsConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub name: String,
    pub locale: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            name: "Aurora CRM Brasil".to_string(),
            locale: "pt-BR".to_string(),
        }
    }
}

/// Who is logged in when the dashboard boots.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    pub auto_login: bool,
    pub demo_user: DemoUserConfig,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            auto_login: true,
            demo_user: DemoUserConfig::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoUserConfig {
    pub id: u64,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub department: Option<String>,
}

impl DemoUserConfig {
    pub fn user_id(&self) -> UserId {
        UserId::new(self.id)
    }
}

impl Default for DemoUserConfig {
    fn default() -> Self {
        Self {
            id: 1,
            name: "Carlos Silva".to_string(),
            email: "carlos.silva@aurora.com.br".to_string(),
            role: Role::Admin,
            department: Some("Diretoria".to_string()),
        }
    }
}

/// Role permission overrides.
///
/// Keys are role names, values are permission identifiers. A listed role's
/// set replaces its built-in one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PermissionsConfig {
    pub overrides: BTreeMap<String, Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub ansi: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            ansi: true,
        }
    }
}

impl AuroraConfig {
    /// Builds the role permission map: built-in sets plus overrides.
    pub fn permission_map(&self) -> Result<RolePermissionMap, ConfigError> {
        let overrides = self
            .permissions
            .overrides
            .iter()
            .map(|(role, perms)| (role.as_str(), perms.iter().map(String::as_str)));

        Ok(RolePermissionMap::builtin().with_named_overrides(overrides)?)
    }

    /// Checks everything that deserialization alone cannot.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.permission_map()?;

        let level = self.logging.level.to_ascii_lowercase();
        if !LOG_LEVELS.contains(&level.as_str()) {
            return Err(ConfigError::ValidationError(format!(
                "logging.level must be one of {}, got '{}'",
                LOG_LEVELS.join(", "),
                self.logging.level
            )));
        }

        if self.session.auto_login && self.session.demo_user.name.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "session.demo_user.name is required when auto_login is enabled".to_string(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aurora_rbac::{Permission, PolicyError};

    #[test]
    fn test_default_config() {
        let config = AuroraConfig::default();
        assert_eq!(config.app.name, "Aurora CRM Brasil");
        assert_eq!(config.app.locale, "pt-BR");
        assert!(config.session.auto_login);
        assert_eq!(config.session.demo_user.name, "Carlos Silva");
        assert_eq!(config.session.demo_user.role, Role::Admin);
        assert_eq!(config.session.demo_user.user_id(), UserId::new(1));
        assert!(config.permissions.overrides.is_empty());
        assert_eq!(config.logging.level, "info");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_permission_map_applies_overrides() {
        let mut config = AuroraConfig::default();
        config.permissions.overrides.insert(
            "cliente".to_string(),
            vec!["view_projects".to_string(), "view_reports".to_string()],
        );

        let map = config.permission_map().unwrap();
        let cliente = map.permissions_for(Role::Cliente);
        assert!(cliente.contains(Permission::ViewReports));
        assert!(!cliente.contains(Permission::ViewBudgets));
        assert_eq!(
            map.permissions_for(Role::Vendas),
            RolePermissionMap::builtin().permissions_for(Role::Vendas)
        );
    }

    #[test]
    fn test_unknown_override_role_is_rejected() {
        let mut config = AuroraConfig::default();
        config
            .permissions
            .overrides
            .insert("estagiario".to_string(), vec!["view_projects".to_string()]);

        let err = config.validate().unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidOverride(PolicyError::UnknownRole(_))
        ));
    }

    #[test]
    fn test_unknown_override_permission_is_rejected() {
        let mut config = AuroraConfig::default();
        config
            .permissions
            .overrides
            .insert("vendas".to_string(), vec!["fly_drones".to_string()]);

        let err = config.validate().unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidOverride(PolicyError::UnknownPermission { role: Role::Vendas, .. })
        ));
    }

    #[test]
    fn test_invalid_log_level() {
        let mut config = AuroraConfig::default();
        config.logging.level = "loud".to_string();
        assert!(matches!(
            config.validate(),
            Err(ConfigError::ValidationError(_))
        ));

        config.logging.level = "DEBUG".to_string();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_toml_round_trip_keeps_role_names() {
        let text = toml::to_string(&AuroraConfig::default()).unwrap();
        assert!(text.contains("role = \"admin\""));
        let parsed: AuroraConfig = toml::from_str(&text).unwrap();
        assert_eq!(parsed, AuroraConfig::default());
    }
}
