use crate::utils::error::Result;
use std::path::Path;

pub trait Storage {
    fn read_text(&self, path: &Path) -> Result<String>;
    fn write_text(&self, path: &Path, text: &str) -> Result<()>;
}
