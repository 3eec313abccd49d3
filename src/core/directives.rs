//! Inline suppression comments.
//!
//! - `twcheck-disable-next-line` - suppress diagnostics on the next line
//! - `twcheck-disable` / `twcheck-enable` - suppress a range of lines
//!
//! Each directive may name rules: `twcheck-disable-next-line negative-arbitrary-value`.
//! Without rule names it applies to every rule; with names it applies only
//! when this checker's rule is among them.

use std::collections::HashSet;

use swc_common::SourceMap;

use crate::core::parsers::ExtractedComments;
use crate::issues::Rule;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirectiveKind {
    Disable,
    Enable,
    DisableNextLine,
}

/// Parsed twcheck directive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Directive {
    pub kind: DirectiveKind,
    /// Whether the directive targets the negative arbitrary value rule.
    pub applies: bool,
}

impl Directive {
    /// Parse a directive from comment text. `None` if it is not a twcheck directive.
    pub fn parse(text: &str) -> Option<Self> {
        let text = text.trim();

        // Longer prefix first.
        let (kind, rest) = if let Some(rest) = text.strip_prefix("twcheck-disable-next-line") {
            (DirectiveKind::DisableNextLine, rest)
        } else if let Some(rest) = text.strip_prefix("twcheck-disable") {
            (DirectiveKind::Disable, rest)
        } else if let Some(rest) = text.strip_prefix("twcheck-enable") {
            (DirectiveKind::Enable, rest)
        } else {
            return None;
        };

        // `twcheck-disabled` is not a directive.
        if !rest.is_empty() && !rest.starts_with(char::is_whitespace) {
            return None;
        }

        Some(Self {
            kind,
            applies: Self::names_rule(rest),
        })
    }

    fn names_rule(rest: &str) -> bool {
        let rule = Rule::NegativeArbitraryValue.to_string();
        let mut names = rest.split_whitespace().peekable();
        names.peek().is_none() || names.any(|name| name.eq_ignore_ascii_case(&rule))
    }
}

/// Inclusive line range; `end == usize::MAX` when never re-enabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct DisabledRange {
    start: usize,
    end: usize,
}

/// Suppressed lines of one file.
#[derive(Debug, Default)]
pub struct Suppressions {
    disabled_lines: HashSet<usize>,
    disabled_ranges: Vec<DisabledRange>,
}

impl Suppressions {
    pub fn is_suppressed(&self, line: usize) -> bool {
        self.disabled_lines.contains(&line)
            || self
                .disabled_ranges
                .iter()
                .any(|r| line >= r.start && line <= r.end)
    }

    pub fn from_comments(comments: &ExtractedComments, source_map: &SourceMap) -> Self {
        let mut directives: Vec<(usize, Directive)> = comments
            .iter()
            .filter_map(|cmt| {
                let directive = Directive::parse(&cmt.text)?;
                let line = source_map.lookup_char_pos(cmt.span.lo).line;
                Some((line, directive))
            })
            .filter(|(_, directive)| directive.applies)
            .collect();
        directives.sort_by_key(|(line, _)| *line);

        let mut suppressions = Self::default();
        let mut open_range: Option<usize> = None;

        for (line, directive) in directives {
            match directive.kind {
                DirectiveKind::Disable => {
                    // Nested disables keep the first start.
                    open_range.get_or_insert(line);
                }
                DirectiveKind::Enable => {
                    if let Some(start) = open_range.take() {
                        suppressions.disabled_ranges.push(DisabledRange {
                            start,
                            end: line.saturating_sub(1),
                        });
                    }
                }
                DirectiveKind::DisableNextLine => {
                    suppressions.disabled_lines.insert(line + 1);
                }
            }
        }

        if let Some(start) = open_range {
            suppressions.disabled_ranges.push(DisabledRange {
                start,
                end: usize::MAX,
            });
        }

        suppressions
    }
}
