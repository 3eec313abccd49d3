use std::{
    collections::BTreeSet,
    path::{Path, PathBuf},
};

use colored::Colorize;
use glob::{Pattern, glob};
use walkdir::WalkDir;

use crate::config::TEST_FILE_PATTERNS;

const SOURCE_EXTENSIONS: &[&str] = &["tsx", "ts", "jsx", "js", "mjs", "cjs", "mts", "cts"];

/// Patterns without `*` or `?` are literal paths, so `app/[slug]` needs no escaping.
fn is_glob_pattern(pattern: &str) -> bool {
    pattern.contains('*') || pattern.contains('?')
}

/// Files found under the source root, in path order.
pub struct ScanResult {
    pub files: BTreeSet<String>,
    pub skipped_count: usize,
}

/// Ignore rules split by kind: literal paths prune whole subtrees,
/// glob patterns are matched against each file path.
struct IgnoreSet {
    paths: Vec<PathBuf>,
    patterns: Vec<Pattern>,
}

impl IgnoreSet {
    fn new(base_dir: &str, ignores: &[String], ignore_test_files: bool, verbose: bool) -> Self {
        let mut paths = Vec::new();
        let mut patterns = Vec::new();

        for p in ignores {
            if !is_glob_pattern(p) {
                paths.push(Path::new(base_dir).join(p));
                continue;
            }
            match Pattern::new(p) {
                Ok(pattern) => patterns.push(pattern),
                Err(e) if verbose => eprintln!(
                    "{} Invalid ignore pattern '{}': {}",
                    "warning:".bold().yellow(),
                    p,
                    e
                ),
                Err(_) => {}
            }
        }

        if ignore_test_files {
            patterns.extend(TEST_FILE_PATTERNS.iter().filter_map(|p| Pattern::new(p).ok()));
        }

        Self { paths, patterns }
    }

    fn prunes(&self, path: &Path) -> bool {
        self.paths.iter().any(|ignored| path.starts_with(ignored))
    }

    fn matches(&self, path: &str) -> bool {
        self.patterns.iter().any(|p| p.matches(path))
    }
}

/// Directories to walk: the base directory, or each include resolved against it.
fn scan_roots(base_dir: &str, includes: &[String], verbose: bool) -> Vec<PathBuf> {
    if includes.is_empty() {
        return vec![PathBuf::from(base_dir)];
    }

    let mut roots = Vec::new();
    for inc in includes {
        let path = Path::new(base_dir).join(inc);
        if !is_glob_pattern(inc) {
            if path.exists() {
                roots.push(path);
            } else if verbose {
                eprintln!(
                    "{} Include path does not exist: {}",
                    "warning:".bold().yellow(),
                    path.display()
                );
            }
            continue;
        }
        match glob(&path.to_string_lossy()) {
            Ok(entries) => roots.extend(entries.flatten().filter(|entry| entry.is_dir())),
            Err(e) if verbose => eprintln!(
                "{} Invalid glob pattern '{}': {}",
                "warning:".bold().yellow(),
                inc,
                e
            ),
            Err(_) => {}
        }
    }
    roots
}

pub fn scan_files(
    base_dir: &str,
    includes: &[String],
    ignores: &[String],
    ignore_test_files: bool,
    verbose: bool,
) -> ScanResult {
    let ignore_set = IgnoreSet::new(base_dir, ignores, ignore_test_files, verbose);
    let mut files = BTreeSet::new();
    let mut skipped_count = 0;

    for root in scan_roots(base_dir, includes, verbose) {
        let walker = WalkDir::new(root)
            .into_iter()
            .filter_entry(|entry| !ignore_set.prunes(entry.path()));

        for entry in walker {
            let entry = match entry {
                Ok(e) => e,
                Err(e) => {
                    skipped_count += 1;
                    if verbose {
                        eprintln!("{} Cannot access path: {}", "warning:".bold().yellow(), e);
                    }
                    continue;
                }
            };
            let path = entry.path();
            if !entry.file_type().is_file() || !is_source_file(path) {
                continue;
            }
            let path_str = path.to_string_lossy();
            if !ignore_set.matches(&path_str) {
                files.insert(path_str.into_owned());
            }
        }
    }

    ScanResult {
        files,
        skipped_count,
    }
}

/// JS/TS sources, excluding `.d.ts` declaration files.
fn is_source_file(path: &Path) -> bool {
    let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
        return false;
    };
    if name.ends_with(".d.ts") || name.ends_with(".d.mts") || name.ends_with(".d.cts") {
        return false;
    }
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| SOURCE_EXTENSIONS.contains(&ext))
}
