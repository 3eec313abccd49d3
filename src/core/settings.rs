use anyhow::{Context, Result};
use regex::Regex;

pub const DEFAULT_SEPARATOR: &str = ":";

pub const DEFAULT_CLASS_REGEX: &str = "^class(Name)?$";

pub const DEFAULT_CALLEES: &[&str] = &["classnames", "clsx", "ctl", "cva", "tv"];

/// Run-scoped rule settings.
///
/// Built once per run from the merged configuration and shared read-only
/// by every file traversal.
#[derive(Debug, Clone)]
pub struct RuleSettings {
    /// Divides variant prefixes from the utility (`md:-top-[1px]`).
    pub separator: String,
    /// Function names whose call arguments are scanned.
    pub callees: Vec<String>,
    /// Tag names whose tagged template bodies are scanned.
    pub tags: Vec<String>,
    /// Attribute names recognized as class carriers.
    pub class_regex: Regex,
    pub skip_class_attribute: bool,
}

impl RuleSettings {
    pub fn new(
        separator: impl Into<String>,
        callees: Vec<String>,
        tags: Vec<String>,
        class_regex: &str,
        skip_class_attribute: bool,
    ) -> Result<Self> {
        let class_regex = Regex::new(class_regex)
            .with_context(|| format!("Invalid regex in 'classRegex': \"{}\"", class_regex))?;
        Ok(Self {
            separator: separator.into(),
            callees,
            tags,
            class_regex,
            skip_class_attribute,
        })
    }

    pub fn is_class_attribute(&self, name: &str) -> bool {
        !self.skip_class_attribute && self.class_regex.is_match(name)
    }

    pub fn is_callee(&self, name: &str) -> bool {
        self.callees.iter().any(|callee| callee == name)
    }

    pub fn is_tag(&self, name: &str) -> bool {
        self.tags.iter().any(|tag| tag == name)
    }
}

impl Default for RuleSettings {
    fn default() -> Self {
        Self {
            separator: DEFAULT_SEPARATOR.to_string(),
            callees: DEFAULT_CALLEES.iter().map(|s| s.to_string()).collect(),
            tags: Vec::new(),
            class_regex: Regex::new(DEFAULT_CLASS_REGEX).unwrap(),
            skip_class_attribute: false,
        }
    }
}
