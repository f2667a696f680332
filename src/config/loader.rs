//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{ExportError, ExportResult};

use super::types::{Config, CONFIG_FILE_NAME};

/// Runtime version reported when none is configured or detectable
pub const UNKNOWN_RUNTIME_VERSION: &str = "unknown";

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

impl std::fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown config key '{}' in {}", self.key, self.file.display())?;
        if let Some(line) = self.line {
            write!(f, ":{}", line)?;
        }
        if let Some(suggestion) = &self.suggestion {
            write!(f, " (did you mean '{}'?)", suggestion)?;
        }
        Ok(())
    }
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> ExportResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path).map_err(|e| ExportError::io(path, e))?;
    parse_with_warnings(&content, path)
}

/// Parse configuration text; `path` is only used for messages
pub fn parse_with_warnings(content: &str, path: &Path) -> ExportResult<(Config, Vec<ConfigWarning>)> {
    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| ExportError::Config {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Load `<project_root>/modkit.toml` (or defaults), then apply env overrides
pub fn load_or_default(project_root: &Path) -> ExportResult<(Config, Vec<ConfigWarning>)> {
    let path = project_root.join(CONFIG_FILE_NAME);
    let (config, warnings) = if path.is_file() {
        load_with_warnings(&path)?
    } else {
        (Config::default(), Vec::new())
    };
    Ok((with_env_overrides(config), warnings))
}

/// Apply environment variable overrides (MODKIT_* prefix)
pub fn with_env_overrides(config: Config) -> Config {
    apply_overrides(config, |key| std::env::var(key).ok())
}

/// Apply overrides from an arbitrary variable lookup
pub fn apply_overrides<F>(mut config: Config, lookup: F) -> Config
where
    F: Fn(&str) -> Option<String>,
{
    // MODKIT_PRODUCT_NAME
    if let Some(name) = lookup("MODKIT_PRODUCT_NAME").filter(|v| !v.trim().is_empty()) {
        config.product.name = Some(name);
    }

    // MODKIT_RUNTIME_VERSION
    if let Some(version) = lookup("MODKIT_RUNTIME_VERSION").filter(|v| !v.trim().is_empty()) {
        config.product.runtime_version = Some(version);
    }

    // MODKIT_PACKAGE_EXTENSION
    if let Some(ext) = lookup("MODKIT_PACKAGE_EXTENSION").filter(|v| !v.trim().is_empty()) {
        config.package.extension = ext;
    }

    config
}

/// Product name: configured value, else the project directory name
pub fn resolve_product_name(config: &Config, project_root: &Path) -> String {
    config
        .product
        .name
        .clone()
        .or_else(|| {
            project_root
                .canonicalize()
                .ok()
                .as_deref()
                .unwrap_or(project_root)
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
        })
        .unwrap_or_else(|| "Game".to_string())
}

/// Runtime version: configured value, else the editor version recorded in
/// `<settings_dir>/ProjectVersion.txt`, else [`UNKNOWN_RUNTIME_VERSION`].
pub fn resolve_runtime_version(config: &Config, project_root: &Path) -> String {
    if let Some(version) = &config.product.runtime_version {
        return version.clone();
    }

    let version_file = project_root
        .join(&config.paths.settings_dir)
        .join("ProjectVersion.txt");
    fs::read_to_string(version_file)
        .ok()
        .and_then(|content| parse_project_version(&content))
        .unwrap_or_else(|| UNKNOWN_RUNTIME_VERSION.to_string())
}

fn parse_project_version(content: &str) -> Option<String> {
    content.lines().find_map(|line| {
        line.trim()
            .strip_prefix("m_EditorVersion:")
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
    })
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    for (i, line) in content.lines().enumerate() {
        if line.contains(needle) {
            return Some(i + 1);
        }
    }
    None
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "product",
        "name",
        "runtime_version",
        "paths",
        "modtool_dir",
        "settings_dir",
        "staging_dir",
        "package",
        "extension",
        "compression",
        "assemblies",
        "search_roots",
        "include",
        "exclude",
        "plugin",
        "path",
        "flag_key",
        "manifest",
        "extra",
    ];

    let mut best: Option<(&str, usize)> = None;
    for candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = if ac == bc { 0 } else { 1 };
            curr[j + 1] =
                std::cmp::min(std::cmp::min(prev[j + 1] + 1, curr[j] + 1), prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
