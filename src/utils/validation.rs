use crate::utils::error::{Result, RewriteError};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

fn invalid(field_name: &str, value: &str, reason: impl Into<String>) -> RewriteError {
    RewriteError::InvalidConfigValueError {
        field: field_name.to_string(),
        value: value.to_string(),
        reason: reason.into(),
    }
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(invalid(field_name, path, "Path cannot be empty"));
    }

    if path.contains('\0') {
        return Err(invalid(field_name, path, "Path contains null bytes"));
    }

    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(invalid(
            field_name,
            value,
            "Value cannot be empty or whitespace-only",
        ));
    }
    Ok(())
}

/// JavaScript identifier, ASCII subset: `[A-Za-z_$][A-Za-z0-9_$]*`.
pub fn validate_js_identifier(field_name: &str, value: &str) -> Result<()> {
    let mut chars = value.chars();
    let valid = match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' || c == '$' => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
        }
        _ => false,
    };

    if !valid {
        return Err(invalid(
            field_name,
            value,
            "Must be a JavaScript identifier (letters, digits, '_' or '$', not starting with a digit)",
        ));
    }
    Ok(())
}

pub fn validate_env_var_name(field_name: &str, value: &str) -> Result<()> {
    let mut chars = value.chars();
    let valid = match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        _ => false,
    };

    if !valid {
        return Err(invalid(
            field_name,
            value,
            "Must be an environment variable name ([A-Za-z_][A-Za-z0-9_]*)",
        ));
    }
    Ok(())
}

/// The value is emitted inside a single-quoted JS string literal without escaping.
pub fn validate_single_quoted_literal(field_name: &str, value: &str) -> Result<()> {
    if let Some(c) = value.chars().find(|c| matches!(c, '\'' | '\\' | '\n' | '\r')) {
        return Err(invalid(
            field_name,
            value,
            format!("Character {:?} is not allowed in a single-quoted literal", c),
        ));
    }
    Ok(())
}

pub fn validate_url_prefix(field_name: &str, value: &str) -> Result<()> {
    if !value.starts_with('/') {
        return Err(invalid(field_name, value, "Prefix must start with '/'"));
    }
    Ok(())
}
