pub mod engine;
pub mod rewriter;

pub use crate::domain::model::{RewriteReport, RewriteRules};
pub use crate::domain::ports::Storage;
pub use crate::utils::error::Result;
