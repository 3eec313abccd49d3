use crate::issues::Issue;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandSummary {
    Check,
    Init(InitSummary),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InitSummary {
    /// False when a config file already existed.
    pub created: bool,
}

/// Result of running a twcheck command.
pub struct CommandResult {
    pub summary: CommandSummary,
    /// Every issue is an error, parse failures included.
    pub error_count: usize,
    /// Sorted by file, line and column.
    pub issues: Vec<Issue>,
    /// Number of files that failed to read or parse.
    pub parse_error_count: usize,
    pub source_files_checked: usize,
}
