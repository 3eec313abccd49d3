use std::{
    cell::OnceCell,
    collections::{BTreeSet, HashMap},
    path::{Path, PathBuf},
    sync::Arc,
};

use anyhow::{Context as _, Result, anyhow};
use colored::Colorize;
use rayon::prelude::*;
use swc_common::SourceMap;

use crate::{
    cli::args::{CommonArgs, RuleArgs},
    config::{CONFIG_FILE_NAME, Config, load_config, validate_separator},
    core::{
        file_scanner::scan_files,
        parsers::{ParsedSource, parse_source},
        settings::RuleSettings,
    },
    issues::ParseErrorIssue,
};

/// Run-scoped state for one check.
///
/// Configuration priority (highest to lowest):
/// 1. CLI arguments (`--callee`, `--separator`, ...)
/// 2. `.twcheckrc.json`
/// 3. Built-in defaults
///
/// Source files are parsed lazily on first access to `parsed_files()`.
pub struct CheckContext {
    /// Configuration as loaded from file or defaults, before CLI overrides.
    pub config: Config,

    /// Project root directory, relative paths in the config resolve against it.
    pub root_dir: PathBuf,

    /// All source files to check.
    pub files: BTreeSet<String>,

    /// Merged rule settings shared by every file traversal.
    pub settings: RuleSettings,

    pub verbose: bool,

    parsed_files: OnceCell<HashMap<String, ParsedSource>>,

    parsed_files_errors: OnceCell<Vec<ParseErrorIssue>>,
}

impl CheckContext {
    /// Load config, apply CLI overrides and scan the source tree.
    ///
    /// # Errors
    ///
    /// Returns error if the config file is invalid, the class attribute regex
    /// does not compile or the Tailwind config named by `config` cannot be read.
    pub fn new(common_args: &CommonArgs, rule_args: &RuleArgs) -> Result<Self> {
        let verbose = common_args.verbose;

        let root_dir = common_args
            .source_root
            .clone()
            .unwrap_or_else(|| PathBuf::from("."));
        let path = root_dir
            .to_str()
            .with_context(|| anyhow!("Invalid path: {:?}", root_dir))?;

        let config_result = load_config(Path::new(path))?;
        if verbose && !config_result.from_file {
            eprintln!(
                "{} No {} found, using default configuration",
                "note:".bold(),
                CONFIG_FILE_NAME
            );
        }
        let config = config_result.config;

        let settings = build_settings(&config, &root_dir, rule_args)?;

        let scan_result = scan_files(
            path,
            &config.includes,
            &config.ignores,
            config.ignore_test_files,
            verbose,
        );
        if scan_result.skipped_count > 0 {
            eprintln!(
                "{} {} path(s) skipped due to access errors{}",
                "warning:".bold().yellow(),
                scan_result.skipped_count,
                if verbose { "" } else { " (use -v for details)" }
            );
        }

        Ok(Self {
            config,
            root_dir,
            files: scan_result.files,
            settings,
            verbose,
            parsed_files: OnceCell::new(),
            parsed_files_errors: OnceCell::new(),
        })
    }

    /// Parsed AST for every readable, parseable source file.
    ///
    /// Files are read and parsed in parallel, each with its own `SourceMap`.
    pub fn parsed_files(&self) -> &HashMap<String, ParsedSource> {
        self.parsed_files.get_or_init(|| {
            let parse_results: Vec<_> = self
                .files
                .par_iter()
                .map(|file_path| {
                    let result = std::fs::read_to_string(file_path)
                        .map_err(|e| anyhow!("Failed to read file: {}", e))
                        .and_then(|code| {
                            parse_source(code, file_path, Arc::new(SourceMap::default()))
                        });
                    (file_path.clone(), result)
                })
                .collect();

            let mut parsed = HashMap::new();
            let mut errors = Vec::new();

            for (file_path, result) in parse_results {
                match result {
                    Ok(p) => {
                        parsed.insert(file_path, p);
                    }
                    Err(e) => {
                        if self.verbose {
                            eprintln!("{} {} - {}", "warning:".bold().yellow(), file_path, e);
                        }
                        errors.push(ParseErrorIssue {
                            file_path,
                            error: e.to_string(),
                        });
                    }
                }
            }

            let _ = self.parsed_files_errors.set(errors);
            parsed
        })
    }

    /// Files that failed to read or parse. Populated by `parsed_files()`.
    pub fn parsed_files_errors(&self) -> &Vec<ParseErrorIssue> {
        self.parsed_files();
        self.parsed_files_errors.get_or_init(Vec::new)
    }
}

/// Merge CLI rule options over the loaded config.
///
/// Repeated `--callee` / `--tag` flags replace the configured lists,
/// `--separator` replaces whatever the `config` key resolves to.
pub fn build_settings(config: &Config, root_dir: &Path, rule_args: &RuleArgs) -> Result<RuleSettings> {
    let separator = match &rule_args.separator {
        Some(separator) => {
            validate_separator(separator)?;
            separator.clone()
        }
        None => config.resolve_separator(root_dir)?,
    };

    let callees = if rule_args.callees.is_empty() {
        config.callees.clone()
    } else {
        rule_args.callees.clone()
    };

    let tags = if rule_args.tags.is_empty() {
        config.tags.clone()
    } else {
        rule_args.tags.clone()
    };

    RuleSettings::new(
        separator,
        callees,
        tags,
        &config.class_regex,
        config.skip_class_attribute || rule_args.skip_class_attribute,
    )
}
