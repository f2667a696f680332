//! Configuration type definitions

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::entities::{Manifest, ManifestEntry};
use crate::error::ExportResult;
use crate::infrastructure::discovery::{DEFAULT_EXCLUDE, DEFAULT_INCLUDE};
use crate::infrastructure::plugin::DEFAULT_FLAG_KEY;

use super::loader::{self, ConfigWarning};

/// File name of the project configuration
pub const CONFIG_FILE_NAME: &str = "modkit.toml";

/// Product information injected into the bundled settings
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ProductConfig {
    /// Product name (defaults to the project directory name)
    #[serde(default)]
    pub name: Option<String>,

    /// Target runtime version (defaults to ProjectSettings/ProjectVersion.txt)
    #[serde(default)]
    pub runtime_version: Option<String>,
}

/// Project layout
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PathsConfig {
    #[serde(default = "default_modtool_dir")]
    pub modtool_dir: PathBuf,

    #[serde(default = "default_settings_dir")]
    pub settings_dir: PathBuf,

    /// Where discovered assemblies are staged (defaults to `modtool_dir`)
    #[serde(default)]
    pub staging_dir: Option<PathBuf>,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            modtool_dir: default_modtool_dir(),
            settings_dir: default_settings_dir(),
            staging_dir: None,
        }
    }
}

fn default_modtool_dir() -> PathBuf {
    PathBuf::from("Assets").join("ModTool")
}

fn default_settings_dir() -> PathBuf {
    PathBuf::from("ProjectSettings")
}

/// Output package options
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PackageConfig {
    #[serde(default = "default_extension")]
    pub extension: String,

    /// Gzip level, 0-9
    #[serde(default = "default_compression")]
    pub compression: u32,
}

impl Default for PackageConfig {
    fn default() -> Self {
        Self {
            extension: default_extension(),
            compression: default_compression(),
        }
    }
}

fn default_extension() -> String {
    "unitypackage".to_string()
}

fn default_compression() -> u32 {
    6
}

/// Assembly discovery options
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AssembliesConfig {
    /// Scanned in order, relative to the project root
    #[serde(default = "default_search_roots")]
    pub search_roots: Vec<PathBuf>,

    #[serde(default = "default_include")]
    pub include: Vec<String>,

    #[serde(default = "default_exclude")]
    pub exclude: Vec<String>,
}

impl Default for AssembliesConfig {
    fn default() -> Self {
        Self {
            search_roots: default_search_roots(),
            include: default_include(),
            exclude: default_exclude(),
        }
    }
}

fn default_search_roots() -> Vec<PathBuf> {
    vec![PathBuf::from("Assets"), PathBuf::from("Library")]
}

fn default_include() -> Vec<String> {
    DEFAULT_INCLUDE.iter().map(|s| s.to_string()).collect()
}

fn default_exclude() -> Vec<String> {
    DEFAULT_EXCLUDE.iter().map(|s| s.to_string()).collect()
}

/// Exporter plugin whose editor flag is toggled during a run
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PluginConfig {
    /// Plugin path (defaults to `<modtool_dir>/Editor/ModTool.Exporting.Editor.dll`)
    #[serde(default)]
    pub path: Option<PathBuf>,

    #[serde(default = "default_flag_key")]
    pub flag_key: String,
}

impl Default for PluginConfig {
    fn default() -> Self {
        Self {
            path: None,
            flag_key: default_flag_key(),
        }
    }
}

fn default_flag_key() -> String {
    DEFAULT_FLAG_KEY.to_string()
}

/// Extra manifest entries
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ManifestConfig {
    #[serde(default)]
    pub extra: Vec<PathBuf>,
}

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Config {
    #[serde(default)]
    pub product: ProductConfig,

    #[serde(default)]
    pub paths: PathsConfig,

    #[serde(default)]
    pub package: PackageConfig,

    #[serde(default)]
    pub assemblies: AssembliesConfig,

    #[serde(default)]
    pub plugin: PluginConfig,

    #[serde(default)]
    pub manifest: ManifestConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> ExportResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> ExportResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Load `<project_root>/modkit.toml` if present, then apply env overrides
    pub fn load_or_default(project_root: &Path) -> ExportResult<(Self, Vec<ConfigWarning>)> {
        loader::load_or_default(project_root)
    }

    /// Apply environment variable overrides (MODKIT_* prefix)
    pub fn with_env_overrides(self) -> Self {
        loader::with_env_overrides(self)
    }

    /// Staging directory, relative to the project root
    pub fn staging_dir(&self) -> PathBuf {
        self.paths
            .staging_dir
            .clone()
            .unwrap_or_else(|| self.paths.modtool_dir.clone())
    }

    /// Exporter plugin path, relative to the project root
    pub fn plugin_path(&self) -> PathBuf {
        self.plugin.path.clone().unwrap_or_else(|| {
            self.paths
                .modtool_dir
                .join("Editor")
                .join("ModTool.Exporting.Editor.dll")
        })
    }

    /// Bundled mod tool settings file, relative to the project root
    pub fn settings_file(&self) -> PathBuf {
        self.paths.modtool_dir.join("ModToolSettings.toml")
    }

    /// The fixed manifest: settings, shared runtime files, project settings,
    /// then any configured extras.
    pub fn build_manifest(&self) -> Manifest {
        let modtool = &self.paths.modtool_dir;
        let settings = &self.paths.settings_dir;
        let editor = modtool.join("Editor");
        let cecil = modtool.join("Mono.Cecil");

        let mut manifest = Manifest::new();
        manifest.push(ManifestEntry::settings(self.settings_file()));
        manifest.push(ManifestEntry::settings(modtool.join("CodeSettings.toml")));
        manifest.push(ManifestEntry::shared_runtime(self.plugin_path()));
        manifest.push(ManifestEntry::shared_runtime(
            editor.join("ModTool.Shared.Editor.dll"),
        ));
        for name in [
            "ModTool.Shared.dll",
            "ModTool.Shared.xml",
            "ModTool.Interface.dll",
            "ModTool.Interface.xml",
        ] {
            manifest.push(ManifestEntry::shared_runtime(modtool.join(name)));
        }
        manifest.push(ManifestEntry::shared_runtime(cecil.join("Mono.Cecil.dll")));
        manifest.push(ManifestEntry::shared_runtime(cecil.join("LICENSE.txt")));
        for name in [
            "InputManager.asset",
            "TagManager.asset",
            "Physics2DSettings.asset",
            "DynamicsManager.asset",
        ] {
            manifest.push(ManifestEntry::settings(settings.join(name)));
        }
        manifest.extend(
            self.manifest
                .extra
                .iter()
                .map(|p| ManifestEntry::shared_runtime(p.clone())),
        );
        manifest
    }

    /// `<product name> Mod Tools.<extension>`
    pub fn package_file_name(&self, product_name: &str) -> String {
        format!(
            "{} Mod Tools.{}",
            product_name,
            self.package.extension.trim_start_matches('.')
        )
    }
}
