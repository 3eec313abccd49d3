use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::config::{Config, TailwindConfigSource};
use crate::issues::{Issue, NegativeArbitraryValueIssue, ParseErrorIssue, Report};

// ============================================================
// Params
// ============================================================

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GetConfigParams {
    /// Absolute path to the project root
    pub project_root_path: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ScanParams {
    /// Absolute path to the project root
    pub project_root_path: String,
    /// Maximum items to return (default 20, max 100)
    pub limit: Option<u32>,
    /// Number of items to skip
    pub offset: Option<u32>,
}

// ============================================================
// Config Types (get_config)
// ============================================================

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ConfigDto {
    /// True if config was loaded from a file, false if using defaults
    pub from_file: bool,
    pub config: ConfigValues,
    /// Separator after resolving the `config` key
    pub resolved_separator: String,
}

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ConfigValues {
    pub includes: Vec<String>,
    pub ignores: Vec<String>,
    pub ignore_test_files: bool,
    pub callees: Vec<String>,
    pub tags: Vec<String>,
    pub class_regex: String,
    pub skip_class_attribute: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config: Option<TailwindConfigSource>,
}

impl From<Config> for ConfigValues {
    fn from(c: Config) -> Self {
        Self {
            includes: c.includes,
            ignores: c.ignores,
            ignore_test_files: c.ignore_test_files,
            callees: c.callees,
            tags: c.tags,
            class_regex: c.class_regex,
            skip_class_attribute: c.skip_class_attribute,
            config: c.config,
        }
    }
}

// ============================================================
// Scan Types (scan)
// ============================================================

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ScanResult {
    pub total_count: usize,
    pub total_file_count: usize,
    pub source_files_checked: usize,
    pub items: Vec<NegativeArbitraryItem>,
    pub parse_errors: Vec<ParseErrorItem>,
    pub pagination: Pagination,
}

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct NegativeArbitraryItem {
    pub file_path: String,
    pub line: usize,
    pub col: usize,
    pub classname: String,
    pub message: String,
    /// e.g. "`className` attribute"
    pub site: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
    pub source_line: String,
}

impl From<&NegativeArbitraryValueIssue> for NegativeArbitraryItem {
    fn from(issue: &NegativeArbitraryValueIssue) -> Self {
        Self {
            file_path: issue.context.file_path().to_string(),
            line: issue.context.line(),
            col: issue.context.col(),
            classname: issue.classname.clone(),
            message: issue.message(),
            site: issue.site.to_string(),
            suggestion: issue.suggestion.clone(),
            source_line: issue.context.source_line.clone(),
        }
    }
}

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ParseErrorItem {
    pub file_path: String,
    pub error: String,
}

impl From<&ParseErrorIssue> for ParseErrorItem {
    fn from(issue: &ParseErrorIssue) -> Self {
        Self {
            file_path: issue.file_path.clone(),
            error: issue.error.clone(),
        }
    }
}

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub offset: usize,
    pub limit: usize,
    pub has_more: bool,
}

impl ScanResult {
    /// Build one page from sorted issues.
    pub fn paginate(issues: &[Issue], source_files_checked: usize, offset: usize, limit: usize) -> Self {
        let mut files = std::collections::BTreeSet::new();
        let mut all_items = Vec::new();
        let mut parse_errors = Vec::new();

        for issue in issues {
            match issue {
                Issue::NegativeArbitraryValue(issue) => {
                    files.insert(issue.context.file_path());
                    all_items.push(NegativeArbitraryItem::from(issue));
                }
                Issue::ParseError(issue) => parse_errors.push(ParseErrorItem::from(issue)),
            }
        }

        let total_count = all_items.len();
        let items: Vec<NegativeArbitraryItem> =
            all_items.into_iter().skip(offset).take(limit).collect();
        let has_more = offset + items.len() < total_count;

        Self {
            total_count,
            total_file_count: files.len(),
            source_files_checked,
            items,
            parse_errors,
            pagination: Pagination {
                offset,
                limit,
                has_more,
            },
        }
    }
}
