pub mod adapters;
#[cfg(feature = "cli")]
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

/// Printed once a run has written the target file back.
pub const SUCCESS_MESSAGE: &str = "✅ API URLs yangilandi!";

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::adapters::storage::LocalStorage;
pub use crate::config::toml_config::TomlConfig;
pub use crate::core::{
    engine::{rewrite, RewriteEngine},
    rewriter::Rewriter,
};
pub use crate::domain::model::{RewriteReport, RewriteRules};
pub use crate::utils::error::{Result, RewriteError};
