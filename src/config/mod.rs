pub mod toml_config;

use std::path::PathBuf;

#[cfg(feature = "cli")]
use clap::Parser;

/// `frontend/src/app/xk9m2v7p/page.tsx`, joined with the platform separator.
pub fn default_target_path() -> PathBuf {
    ["frontend", "src", "app", "xk9m2v7p", "page.tsx"]
        .iter()
        .collect()
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "api-url-rewriter")]
#[command(about = "Points relative /api/ fetch calls of a frontend page at a configurable base URL")]
pub struct CliConfig {
    /// Source file to rewrite in place
    #[arg(short, long)]
    pub file: Option<PathBuf>,

    /// TOML file overriding the rewrite rules
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// `--file` wins over the TOML `[target].path`, which wins over the default.
    pub fn resolve_target(&self, toml: Option<&toml_config::TomlConfig>) -> PathBuf {
        self.file
            .clone()
            .or_else(|| toml.and_then(|t| t.target_path()))
            .unwrap_or_else(default_target_path)
    }
}
