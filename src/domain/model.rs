/// The admin page's tab union, as it appears right above the page component.
pub const DEFAULT_TYPE_ALIAS: &str = "type TabType = 'dashboard' | 'students' | 'staff' | 'portfolios' | 'categories' | 'webhooks' | 'ai' | 'announcements' | 'notifications' | 'settings' | 'system';";
pub const DEFAULT_FUNCTION_DECL: &str = "export default function SuperAdminPage() {";
pub const DEFAULT_CONSTANT_NAME: &str = "API_URL";
pub const DEFAULT_ENV_VAR: &str = "NEXT_PUBLIC_API_URL";
pub const DEFAULT_API_PREFIX: &str = "/api/";

/// What to insert and which fetch calls to rewrite.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RewriteRules {
    pub constant_name: String,
    pub env_var: String,
    pub fallback: String,
    pub api_prefix: String,
    pub type_alias: String,
    pub function_decl: String,
}

impl Default for RewriteRules {
    fn default() -> Self {
        Self {
            constant_name: DEFAULT_CONSTANT_NAME.to_string(),
            env_var: DEFAULT_ENV_VAR.to_string(),
            fallback: String::new(),
            api_prefix: DEFAULT_API_PREFIX.to_string(),
            type_alias: DEFAULT_TYPE_ALIAS.to_string(),
            function_decl: DEFAULT_FUNCTION_DECL.to_string(),
        }
    }
}

impl RewriteRules {
    /// `const API_URL = process.env.NEXT_PUBLIC_API_URL || '';`
    pub fn constant_declaration(&self) -> String {
        format!(
            "const {} = process.env.{} || '{}';",
            self.constant_name, self.env_var, self.fallback
        )
    }

    pub fn anchor_block(&self) -> String {
        format!("{}\n\n{}", self.type_alias, self.function_decl)
    }

    pub fn patched_anchor_block(&self) -> String {
        format!(
            "{}\n\n{}\n\n{}",
            self.type_alias,
            self.constant_declaration(),
            self.function_decl
        )
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RewriteReport {
    /// Anchor blocks that received the constant declaration.
    pub constant_inserted: usize,
    /// `fetch('/api/...')` calls rewritten.
    pub quoted_calls: usize,
    /// `` fetch(`/api/...`) `` calls rewritten.
    pub template_calls: usize,
    pub changed: bool,
}

impl RewriteReport {
    pub fn total_rewrites(&self) -> usize {
        self.constant_inserted + self.quoted_calls + self.template_calls
    }
}
