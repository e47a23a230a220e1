use crate::domain::model::{
    RewriteRules, DEFAULT_API_PREFIX, DEFAULT_CONSTANT_NAME, DEFAULT_ENV_VAR,
    DEFAULT_FUNCTION_DECL, DEFAULT_TYPE_ALIAS,
};
use crate::utils::error::{Result, RewriteError};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TomlConfig {
    pub target: TargetConfig,
    pub constant: ConstantConfig,
    pub anchor: AnchorConfig,
    pub fetch: FetchConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TargetConfig {
    pub path: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ConstantConfig {
    pub name: String,
    pub env_var: String,
    pub fallback: String,
}

impl Default for ConstantConfig {
    fn default() -> Self {
        Self {
            name: DEFAULT_CONSTANT_NAME.to_string(),
            env_var: DEFAULT_ENV_VAR.to_string(),
            fallback: String::new(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AnchorConfig {
    pub type_alias: String,
    pub function_decl: String,
}

impl Default for AnchorConfig {
    fn default() -> Self {
        Self {
            type_alias: DEFAULT_TYPE_ALIAS.to_string(),
            function_decl: DEFAULT_FUNCTION_DECL.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FetchConfig {
    pub api_prefix: String,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            api_prefix: DEFAULT_API_PREFIX.to_string(),
        }
    }
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| RewriteError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    pub fn validate_config(&self) -> Result<()> {
        if let Some(path) = &self.target.path {
            validation::validate_path("target.path", path)?;
        }

        validation::validate_js_identifier("constant.name", &self.constant.name)?;
        validation::validate_env_var_name("constant.env_var", &self.constant.env_var)?;
        validation::validate_single_quoted_literal("constant.fallback", &self.constant.fallback)?;

        validation::validate_non_empty_string("anchor.type_alias", &self.anchor.type_alias)?;
        validation::validate_non_empty_string("anchor.function_decl", &self.anchor.function_decl)?;

        validation::validate_non_empty_string("fetch.api_prefix", &self.fetch.api_prefix)?;
        validation::validate_url_prefix("fetch.api_prefix", &self.fetch.api_prefix)?;

        Ok(())
    }

    pub fn target_path(&self) -> Option<PathBuf> {
        self.target.path.as_ref().map(PathBuf::from)
    }

    pub fn rules(&self) -> RewriteRules {
        RewriteRules {
            constant_name: self.constant.name.clone(),
            env_var: self.constant.env_var.clone(),
            fallback: self.constant.fallback.clone(),
            api_prefix: self.fetch.api_prefix.clone(),
            type_alias: self.anchor.type_alias.clone(),
            function_decl: self.anchor.function_decl.clone(),
        }
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_empty_config_uses_builtin_rules() {
        let config = TomlConfig::from_toml_str("").unwrap();

        assert!(config.target_path().is_none());
        assert_eq!(config.rules(), RewriteRules::default());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_full_config() {
        let toml_content = r#"
[target]
path = "web/src/app/admin/page.tsx"

[constant]
name = "BASE_URL"
env_var = "VITE_BASE_URL"
fallback = "http://localhost:4000"

[anchor]
type_alias = "type Tab = 'a' | 'b';"
function_decl = "export default function AdminPage() {"

[fetch]
api_prefix = "/v2/"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        let rules = config.rules();

        assert_eq!(config.target_path(), Some(PathBuf::from("web/src/app/admin/page.tsx")));
        assert_eq!(rules.constant_name, "BASE_URL");
        assert_eq!(rules.api_prefix, "/v2/");
        assert_eq!(
            rules.constant_declaration(),
            "const BASE_URL = process.env.VITE_BASE_URL || 'http://localhost:4000';"
        );
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_section_keeps_other_defaults() {
        let config = TomlConfig::from_toml_str("[constant]\nfallback = \"/backend\"\n").unwrap();
        let rules = config.rules();

        assert_eq!(rules.constant_name, DEFAULT_CONSTANT_NAME);
        assert_eq!(rules.env_var, DEFAULT_ENV_VAR);
        assert_eq!(rules.fallback, "/backend");
    }

    #[test]
    fn test_config_validation() {
        let config = TomlConfig::from_toml_str("[constant]\nname = \"api-url\"\n").unwrap();
        let err = config.validate().unwrap_err();
        assert!(matches!(
            err,
            RewriteError::InvalidConfigValueError { ref field, .. } if field == "constant.name"
        ));

        let config = TomlConfig::from_toml_str("[fetch]\napi_prefix = \"api/\"\n").unwrap();
        assert!(config.validate().is_err());

        let config = TomlConfig::from_toml_str("[constant]\nfallback = \"it's\"\n").unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_toml_is_config_error() {
        let err = TomlConfig::from_toml_str("[constant\nname = 1").unwrap_err();
        assert!(matches!(err, RewriteError::ConfigError { .. }));
    }

    #[test]
    fn test_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[constant]\nname = \"API_BASE\"").unwrap();

        let config = TomlConfig::from_file(file.path()).unwrap();
        assert_eq!(config.constant.name, "API_BASE");
    }
}
