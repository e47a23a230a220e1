use crate::domain::ports::Storage;
use crate::utils::error::Result;
use std::fs;
use std::path::Path;

/// Reads and writes files in place, relative to the working directory.
///
/// Text is read with universal newlines: `\r\n` and lone `\r` come back as
/// `\n`, and the file is written back with `\n` line endings.
#[derive(Debug, Clone, Default)]
pub struct LocalStorage;

impl LocalStorage {
    pub fn new() -> Self {
        Self
    }
}

pub fn normalize_newlines(text: &str) -> String {
    if !text.contains('\r') {
        return text.to_string();
    }
    text.replace("\r\n", "\n").replace('\r', "\n")
}

impl Storage for LocalStorage {
    fn read_text(&self, path: &Path) -> Result<String> {
        // Fails with InvalidData on non UTF-8 input.
        let text = fs::read_to_string(path)?;
        Ok(normalize_newlines(&text))
    }

    fn write_text(&self, path: &Path, text: &str) -> Result<()> {
        fs::write(path, text)?;
        Ok(())
    }
}
