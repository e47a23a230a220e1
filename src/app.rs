use crate::adapters::storage::LocalStorage;
use crate::config::toml_config::TomlConfig;
use crate::config::CliConfig;
use crate::core::engine::RewriteEngine;
use crate::core::rewriter::Rewriter;
use crate::domain::model::RewriteReport;
use crate::utils::error::{Result, RewriteError};
use crate::utils::validation::Validate;
use crate::SUCCESS_MESSAGE;
use std::io::Write;

/// One CLI run: load rules, rewrite the target, then write the success line
/// to `out`. The line is written whether or not anything matched.
pub fn run<W: Write>(cli: &CliConfig, out: &mut W) -> Result<RewriteReport> {
    let toml = match &cli.config {
        Some(path) => {
            tracing::info!("📁 Loading rewrite rules from: {}", path.display());
            let config = TomlConfig::from_file(path).map_err(|e| RewriteError::ConfigError {
                message: format!("failed to load '{}': {}", path.display(), e),
            })?;
            config.validate()?;
            Some(config)
        }
        None => None,
    };

    let rules = toml.as_ref().map(TomlConfig::rules).unwrap_or_default();
    let target = cli.resolve_target(toml.as_ref());

    let engine = RewriteEngine::new(LocalStorage::new(), Rewriter::new(rules)?);
    let report = engine.run(&target)?;
    tracing::debug!("Rewrite report: {:?}", report);

    writeln!(out, "{}", SUCCESS_MESSAGE)?;
    Ok(report)
}
