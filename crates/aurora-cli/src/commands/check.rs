//! `aurora check <permission>`: evaluate one permission.

use anyhow::Result;
use aurora::Aurora;
use aurora_config::AuroraConfig;

use crate::style::colors::SemanticStyle;

/// Who the permission is evaluated for.
pub enum Subject<'a> {
    /// The session the configuration boots into.
    Configured,
    /// A role given by name; unknown names hold nothing.
    Role(&'a str),
    /// Nobody logged in.
    Anonymous,
}

/// Prints `granted` or `denied` and returns the decision.
pub fn run(config: &AuroraConfig, permission: &str, subject: &Subject<'_>) -> Result<bool> {
    let app = Aurora::from_config(config)?;

    let granted = match subject {
        Subject::Configured => app.can(permission),
        Subject::Role(name) => app.evaluator().evaluate_named(Some(*name), permission),
        Subject::Anonymous => app.evaluator().evaluate(None, permission),
    };

    if granted {
        println!("{}", "granted".success());
    } else {
        println!("{}", "denied".error());
    }

    Ok(granted)
}
