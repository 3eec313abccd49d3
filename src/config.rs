use std::{
    fs,
    path::{Path, PathBuf},
    sync::LazyLock,
};

use anyhow::{Context, Result, bail};
use glob::Pattern;
use regex::Regex;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::core::settings::{DEFAULT_CALLEES, DEFAULT_CLASS_REGEX, DEFAULT_SEPARATOR};

pub const CONFIG_FILE_NAME: &str = ".twcheckrc.json";

pub const TEST_FILE_PATTERNS: &[&str] = &[
    "**/*.test.tsx",
    "**/*.test.ts",
    "**/*.test.jsx",
    "**/*.test.js",
    "**/*.spec.tsx",
    "**/*.spec.ts",
    "**/*.spec.jsx",
    "**/*.spec.js",
    "**/__tests__/**",
];

/// `separator: ':'` in a JS/TS Tailwind config.
static SEPARATOR_PROPERTY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"\bseparator\s*:\s*['"`]([^'"`]+)['"`]"#).unwrap());

/// Where the Tailwind separator comes from.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
#[serde(untagged)]
pub enum TailwindConfigSource {
    /// Path to a Tailwind config file, relative to the source root.
    Path(String),
    /// Inline settings.
    Inline {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        separator: Option<String>,
    },
}

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default)]
    pub includes: Vec<String>,
    #[serde(default = "default_ignores")]
    pub ignores: Vec<String>,
    #[serde(default = "default_ignore_test_files")]
    pub ignore_test_files: bool,
    #[serde(default = "default_callees")]
    pub callees: Vec<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default = "default_class_regex")]
    pub class_regex: String,
    #[serde(default)]
    pub skip_class_attribute: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub config: Option<TailwindConfigSource>,
}

fn default_ignores() -> Vec<String> {
    ["**/node_modules/**", "**/dist/**", "**/build/**", "**/.next/**"]
        .map(String::from)
        .to_vec()
}

fn default_ignore_test_files() -> bool {
    false
}

fn default_callees() -> Vec<String> {
    DEFAULT_CALLEES.iter().map(|s| s.to_string()).collect()
}

fn default_class_regex() -> String {
    DEFAULT_CLASS_REGEX.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            includes: Vec::new(),
            ignores: default_ignores(),
            ignore_test_files: default_ignore_test_files(),
            callees: default_callees(),
            tags: Vec::new(),
            class_regex: default_class_regex(),
            skip_class_attribute: false,
            config: None,
        }
    }
}

impl Config {
    /// Validate glob patterns, the class attribute regex and an inline separator.
    pub fn validate(&self) -> Result<()> {
        for pattern in &self.ignores {
            Pattern::new(pattern)
                .with_context(|| format!("Invalid glob pattern in 'ignores': \"{}\"", pattern))?;
        }

        for pattern in &self.includes {
            if pattern.contains('*') || pattern.contains('?') {
                Pattern::new(pattern).with_context(|| {
                    format!("Invalid glob pattern in 'includes': \"{}\"", pattern)
                })?;
            }
        }

        Regex::new(&self.class_regex)
            .with_context(|| format!("Invalid regex in 'classRegex': \"{}\"", self.class_regex))?;

        if let Some(TailwindConfigSource::Inline {
            separator: Some(separator),
        }) = &self.config
        {
            validate_separator(separator)?;
        }

        Ok(())
    }

    /// Resolve the variant separator. Paths are relative to `root_dir`.
    pub fn resolve_separator(&self, root_dir: &Path) -> Result<String> {
        match &self.config {
            None => Ok(DEFAULT_SEPARATOR.to_string()),
            Some(TailwindConfigSource::Inline { separator }) => Ok(separator
                .clone()
                .unwrap_or_else(|| DEFAULT_SEPARATOR.to_string())),
            Some(TailwindConfigSource::Path(path)) => {
                let path = root_dir.join(path);
                let separator = read_separator(&path)?;
                validate_separator(&separator)?;
                Ok(separator)
            }
        }
    }
}

pub fn validate_separator(separator: &str) -> Result<()> {
    if separator.is_empty() {
        bail!("Separator must not be empty");
    }
    Ok(())
}

/// Read the separator from a Tailwind config file; `:` when it sets none.
fn read_separator(path: &Path) -> Result<String> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read Tailwind config: {}", path.display()))?;

    if path.extension().and_then(|e| e.to_str()) == Some("json") {
        let value: serde_json::Value = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse Tailwind config: {}", path.display()))?;
        return Ok(value
            .get("separator")
            .and_then(|s| s.as_str())
            .unwrap_or(DEFAULT_SEPARATOR)
            .to_string());
    }

    Ok(SEPARATOR_PROPERTY
        .captures(&content)
        .and_then(|caps| caps.get(1))
        .map_or(DEFAULT_SEPARATOR, |m| m.as_str())
        .to_string())
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

/// Walk up from `start_dir` until the config file, a `.git` directory or the root.
pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

pub struct ConfigLoadResult {
    pub config: Config,
    /// False when no config file was found and defaults are in use.
    pub from_file: bool,
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    let Some(path) = find_config_file(start_dir) else {
        return Ok(ConfigLoadResult {
            config: Config::default(),
            from_file: false,
        });
    };

    let content = fs::read_to_string(&path)
        .with_context(|| format!("Failed to read config file: {:?}", path))?;
    let config: Config = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {:?}", path))?;
    config.validate()?;

    Ok(ConfigLoadResult {
        config,
        from_file: true,
    })
}
