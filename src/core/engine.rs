use crate::adapters::storage::LocalStorage;
use crate::core::rewriter::Rewriter;
use crate::core::{RewriteReport, RewriteRules, Storage};
use crate::utils::error::Result;
use std::path::Path;

pub struct RewriteEngine<S: Storage> {
    storage: S,
    rewriter: Rewriter,
}

impl<S: Storage> RewriteEngine<S> {
    pub fn new(storage: S, rewriter: Rewriter) -> Self {
        Self { storage, rewriter }
    }

    /// Reads `path`, applies every rewrite, and writes the result back in
    /// place. The file is written even when nothing matched.
    pub fn run(&self, path: &Path) -> Result<RewriteReport> {
        tracing::info!("Rewriting API calls in {}", path.display());

        let content = self.storage.read_text(path)?;
        tracing::debug!("Read {} bytes", content.len());

        let (rewritten, report) = self.rewriter.apply(&content);
        tracing::debug!(
            "Constant inserted: {}, quoted calls: {}, template calls: {}",
            report.constant_inserted,
            report.quoted_calls,
            report.template_calls
        );

        if report.constant_inserted == 0 {
            tracing::debug!(
                "Anchor block not found, {} declaration not inserted",
                self.rewriter.rules().constant_name
            );
        }

        self.storage.write_text(path, &rewritten)?;

        if report.changed {
            tracing::info!(
                "Applied {} rewrite(s) to {}",
                report.total_rewrites(),
                path.display()
            );
        } else {
            tracing::info!("No matching patterns in {}", path.display());
        }

        Ok(report)
    }
}

/// Rewrites `path` with the built-in rules.
pub fn rewrite(path: &Path) -> Result<RewriteReport> {
    let rewriter = Rewriter::new(RewriteRules::default())?;
    RewriteEngine::new(LocalStorage::new(), rewriter).run(path)
}
