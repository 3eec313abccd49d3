use anyhow::Result;

use super::{CommandResult, CommandSummary, helper::finish};
use crate::{
    cli::args::CheckCommand, core::CheckContext, issues::Issue,
    rules::check_negative_arbitrary_issues,
};

pub fn check(cmd: CheckCommand) -> Result<CommandResult> {
    let ctx = CheckContext::new(&cmd.common, &cmd.rules)?;
    Ok(run_checks(&ctx))
}

/// Run every rule against an initialized context.
pub fn run_checks(ctx: &CheckContext) -> CommandResult {
    let mut issues: Vec<Issue> = check_negative_arbitrary_issues(ctx)
        .into_iter()
        .map(Issue::NegativeArbitraryValue)
        .collect();

    issues.extend(
        ctx.parsed_files_errors()
            .iter()
            .cloned()
            .map(Issue::ParseError),
    );

    finish(CommandSummary::Check, issues, ctx.files.len())
}
