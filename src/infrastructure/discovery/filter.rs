//! API assembly predicate based on file-name globs
//!
//! Patterns use gitignore glob syntax and are matched against the file name
//! only. A file is an API assembly when it matches an include pattern and no
//! exclude pattern.

use std::path::{Path, PathBuf};

use ignore::gitignore::{Gitignore, GitignoreBuilder};

use crate::domain::ports::AssemblyFilter;

/// Include patterns used when none are configured
pub const DEFAULT_INCLUDE: &[&str] = &["*.dll"];

/// Exclude patterns used when none are configured: the tool's own runtime,
/// engine and framework assemblies, editor-only assemblies
pub const DEFAULT_EXCLUDE: &[&str] = &[
    "ModTool.*",
    "Mono.Cecil*",
    "UnityEngine*",
    "UnityEditor*",
    "Unity.*",
    "*.Editor.dll",
    "System*",
    "Microsoft.*",
    "mscorlib.dll",
    "netstandard.dll",
];

/// Invalid glob pattern
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternError {
    pub pattern: String,
    pub message: String,
}

impl std::fmt::Display for PatternError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "invalid pattern '{}': {}", self.pattern, self.message)
    }
}

impl std::error::Error for PatternError {}

/// Glob-based [`AssemblyFilter`]
#[derive(Debug)]
pub struct GlobAssemblyFilter {
    include: Gitignore,
    exclude: Gitignore,
}

impl GlobAssemblyFilter {
    pub fn new<S: AsRef<str>>(include: &[S], exclude: &[S]) -> Result<Self, PatternError> {
        Ok(Self {
            include: build_matcher(include)?,
            exclude: build_matcher(exclude)?,
        })
    }

    /// Filter built from [`DEFAULT_INCLUDE`] and [`DEFAULT_EXCLUDE`]
    pub fn standard() -> Result<Self, PatternError> {
        Self::new(DEFAULT_INCLUDE, DEFAULT_EXCLUDE)
    }
}

impl AssemblyFilter for GlobAssemblyFilter {
    fn is_api_assembly(&self, path: &Path) -> bool {
        let Some(name) = path.file_name() else {
            return false;
        };
        let name = Path::new(name);
        self.include.matched(name, false).is_ignore() && !self.exclude.matched(name, false).is_ignore()
    }
}

fn build_matcher<S: AsRef<str>>(patterns: &[S]) -> Result<Gitignore, PatternError> {
    let mut builder = GitignoreBuilder::new("");
    for pattern in patterns {
        let pattern = pattern.as_ref();
        builder
            .add_line(None::<PathBuf>, pattern)
            .map_err(|e| PatternError {
                pattern: pattern.to_string(),
                message: e.to_string(),
            })?;
    }
    builder.build().map_err(|e| PatternError {
        pattern: patterns
            .iter()
            .map(|p| p.as_ref())
            .collect::<Vec<_>>()
            .join(", "),
        message: e.to_string(),
    })
}
