//! Negative arbitrary value detection rule.
//!
//! Runs the class name visitor over every parsed file and turns its
//! diagnostics into issues, dropping those on suppressed lines.

use std::collections::HashMap;

use rayon::prelude::*;

use crate::{
    core::{
        CheckContext, RuleSettings, SourceContext, SourceLocation,
        directives::Suppressions,
        extract::{ClassNameVisitor, Diagnostic},
        parsers::ParsedSource,
    },
    issues::{NegativeArbitraryValueIssue, suggested_classname},
};

pub fn check_negative_arbitrary_issues(ctx: &CheckContext) -> Vec<NegativeArbitraryValueIssue> {
    check_negative_arbitrary(ctx.parsed_files(), &ctx.settings)
}

/// Check all files in parallel. Per-file issue order is preserved.
pub fn check_negative_arbitrary(
    parsed_files: &HashMap<String, ParsedSource>,
    settings: &RuleSettings,
) -> Vec<NegativeArbitraryValueIssue> {
    parsed_files
        .par_iter()
        .flat_map_iter(|(file_path, parsed)| check_file(file_path, parsed, settings))
        .collect()
}

pub fn check_file(
    file_path: &str,
    parsed: &ParsedSource,
    settings: &RuleSettings,
) -> Vec<NegativeArbitraryValueIssue> {
    let suppressions = Suppressions::from_comments(&parsed.comments, &parsed.source_map);

    ClassNameVisitor::new(settings)
        .check(&parsed.module)
        .into_iter()
        .filter_map(|diagnostic| {
            let context = source_context(file_path, parsed, &diagnostic);
            if suppressions.is_suppressed(context.line()) {
                return None;
            }
            Some(NegativeArbitraryValueIssue {
                context,
                suggestion: suggested_classname(&diagnostic.classname, &settings.separator),
                classname: diagnostic.classname,
                site: diagnostic.kind,
            })
        })
        .collect()
}

fn source_context(file_path: &str, parsed: &ParsedSource, diagnostic: &Diagnostic) -> SourceContext {
    let loc = parsed.source_map.lookup_char_pos(diagnostic.span.lo);
    let source_line = loc
        .file
        .get_line(loc.line - 1)
        .map(|cow| cow.to_string())
        .unwrap_or_default();
    SourceContext::new(
        SourceLocation::new(file_path, loc.line, loc.col_display + 1),
        source_line,
    )
}
