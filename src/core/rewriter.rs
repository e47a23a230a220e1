use crate::domain::model::{RewriteReport, RewriteRules};
use crate::utils::error::Result;
use regex::{Captures, Regex};

/// Text transformations applied to one source file.
///
/// All three steps are literal or regex substitutions; no attempt is made to
/// understand the surrounding TypeScript.
#[derive(Debug, Clone)]
pub struct Rewriter {
    rules: RewriteRules,
    quoted_call: Regex,
    template_call: Regex,
}

impl Rewriter {
    pub fn new(rules: RewriteRules) -> Result<Self> {
        let prefix = regex::escape(&rules.api_prefix);
        let quoted_call = Regex::new(&format!(r"fetch\('({}[^']+)'", prefix))?;
        let template_call = Regex::new(&format!(r"fetch\(`({}[^`]+)`", prefix))?;

        Ok(Self {
            rules,
            quoted_call,
            template_call,
        })
    }

    pub fn rules(&self) -> &RewriteRules {
        &self.rules
    }

    /// Inserts the base-URL constant between the type alias and the page
    /// component. A missing anchor (already patched, or edited) is a no-op.
    pub fn insert_constant(&self, content: &str) -> (String, usize) {
        let anchor = self.rules.anchor_block();
        let count = content.matches(anchor.as_str()).count();
        if count == 0 {
            return (content.to_string(), 0);
        }
        (
            content.replace(anchor.as_str(), &self.rules.patched_anchor_block()),
            count,
        )
    }

    /// `fetch('/api/x'` -> `` fetch(`${API_URL}/api/x` ``
    pub fn rewrite_quoted_calls(&self, content: &str) -> (String, usize) {
        self.interpolate(&self.quoted_call, content)
    }

    /// `` fetch(`/api/x` `` -> `` fetch(`${API_URL}/api/x` ``
    ///
    /// Calls that already start with an interpolation never match, since the
    /// template has to open directly on the prefix.
    pub fn rewrite_template_calls(&self, content: &str) -> (String, usize) {
        self.interpolate(&self.template_call, content)
    }

    fn interpolate(&self, pattern: &Regex, content: &str) -> (String, usize) {
        let name = &self.rules.constant_name;
        let mut count = 0;
        let rewritten = pattern.replace_all(content, |caps: &Captures| {
            count += 1;
            format!("fetch(`${{{}}}{}`", name, &caps[1])
        });
        (rewritten.into_owned(), count)
    }

    pub fn apply(&self, content: &str) -> (String, RewriteReport) {
        let (text, constant_inserted) = self.insert_constant(content);
        let (text, quoted_calls) = self.rewrite_quoted_calls(&text);
        let (text, template_calls) = self.rewrite_template_calls(&text);

        let report = RewriteReport {
            constant_inserted,
            quoted_calls,
            template_calls,
            changed: text != content,
        };
        (text, report)
    }
}
