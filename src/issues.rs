//! Issue types produced by a check run.
//!
//! Each issue carries everything the reporter (CLI or MCP) needs to render it.

use enum_dispatch::enum_dispatch;

use crate::core::SourceContext;
use crate::core::classnames::class_suffix;
use crate::core::extract::SiteKind;

// ============================================================
// Rule
// ============================================================

/// Rule identifier, also used by suppression directives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Rule {
    NegativeArbitraryValue,
    ParseError,
}

impl std::fmt::Display for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Rule::NegativeArbitraryValue => write!(f, "negative-arbitrary-value"),
            Rule::ParseError => write!(f, "parse-error"),
        }
    }
}

// ============================================================
// Issue Types
// ============================================================

/// A class name combining a negative prefix with an arbitrary value,
/// e.g. `-top-[1px]` instead of `top-[-1px]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NegativeArbitraryValueIssue {
    pub context: SourceContext,
    pub classname: String,
    /// The attribute, call or tagged template the class name was found in.
    pub site: SiteKind,
    /// Equivalent class with the dash inside the brackets.
    pub suggestion: Option<String>,
}

impl NegativeArbitraryValueIssue {
    pub fn rule() -> Rule {
        Rule::NegativeArbitraryValue
    }
}

/// File could not be read or parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseErrorIssue {
    pub file_path: String,
    pub error: String,
}

impl ParseErrorIssue {
    pub fn rule() -> Rule {
        Rule::ParseError
    }
}

#[enum_dispatch(Report)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Issue {
    NegativeArbitraryValue(NegativeArbitraryValueIssue),
    ParseError(ParseErrorIssue),
}

impl Issue {
    pub fn rule(&self) -> Rule {
        self.report_rule()
    }

    /// File path, line and column; file-level issues sort first in their file.
    pub fn sort_key(&self) -> (&str, usize, usize) {
        match self.location() {
            ReportLocation::Source(ctx) => (ctx.file_path(), ctx.line(), ctx.col()),
            ReportLocation::File { path } => (path, 0, 0),
        }
    }
}

/// Stable sort by location. Issues at the same position keep their
/// discovery order, so class names of one site stay in source order.
pub fn sort_issues(issues: &mut [Issue]) {
    issues.sort_by(|a, b| a.sort_key().cmp(&b.sort_key()));
}

// ============================================================
// Report Trait
// ============================================================

pub enum ReportLocation<'a> {
    /// Source position with the line shown under the header.
    Source(&'a SourceContext),
    /// File-level only.
    File { path: &'a str },
}

#[enum_dispatch]
pub trait Report {
    fn location(&self) -> ReportLocation<'_>;

    /// Primary message shown in the header.
    fn message(&self) -> String;

    fn report_rule(&self) -> Rule;

    /// Optional hint for fixing the issue.
    fn hint(&self) -> Option<String> {
        None
    }

    /// Optional details for the "= note:" line.
    fn details(&self) -> Option<String> {
        None
    }
}

impl Report for NegativeArbitraryValueIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Source(&self.context)
    }

    fn message(&self) -> String {
        format!(
            "Arbitrary value classname '{}' should not start with a dash (-)",
            self.classname
        )
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn hint(&self) -> Option<String> {
        self.suggestion
            .as_ref()
            .map(|fixed| format!("use '{}' instead", fixed))
    }

    fn details(&self) -> Option<String> {
        Some(format!("in {}", self.site))
    }
}

impl Report for ParseErrorIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::File {
            path: &self.file_path,
        }
    }

    fn message(&self) -> String {
        self.error.clone()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }
}

/// Move the dash into the brackets: `md:-top-[1px]` -> `md:top-[-1px]`.
pub fn suggested_classname(classname: &str, separator: &str) -> Option<String> {
    let suffix = class_suffix(classname, separator);
    let variants = &classname[..classname.len() - suffix.len()];
    let utility = suffix.strip_prefix('-')?;
    let (property, value) = utility.rsplit_once("-[")?;
    Some(format!("{}{}-[-{}", variants, property, value))
}
