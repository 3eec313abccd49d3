use super::{CommandResult, CommandSummary};
use crate::issues::{Issue, sort_issues};

pub fn finish(
    summary: CommandSummary,
    mut issues: Vec<Issue>,
    source_files_checked: usize,
) -> CommandResult {
    sort_issues(&mut issues);

    let parse_error_count = issues
        .iter()
        .filter(|i| matches!(i, Issue::ParseError(_)))
        .count();

    CommandResult {
        summary,
        error_count: issues.len(),
        issues,
        parse_error_count,
        source_files_checked,
    }
}
