//! Export options

use std::path::{Component, Path, PathBuf};

use crate::config::Config;
use crate::domain::entities::Manifest;
use crate::error::{ExportError, ExportResult};

/// Everything one export run needs, resolved up front.
///
/// Relative paths are relative to `project_root`.
#[derive(Debug, Clone)]
pub struct ExportOptions {
    pub project_root: PathBuf,
    /// Directory the package is written to
    pub output_dir: PathBuf,
    pub product_name: String,
    pub runtime_version: String,
    /// Fixed entries, always packaged
    pub manifest: Manifest,
    /// Scanned in order for API assemblies
    pub search_roots: Vec<PathBuf>,
    pub staging_dir: PathBuf,
    /// Plugin whose editor flag is enabled for the duration of the run
    pub plugin_path: PathBuf,
    /// Bundled settings refreshed before packaging (None = leave alone)
    pub settings_file: Option<PathBuf>,
    pub package_file_name: String,
}

impl ExportOptions {
    /// Resolve options from configuration
    pub fn from_config(
        config: &Config,
        project_root: &Path,
        output_dir: &Path,
        product_name: &str,
        runtime_version: &str,
    ) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            output_dir: output_dir.to_path_buf(),
            product_name: product_name.to_string(),
            runtime_version: runtime_version.to_string(),
            manifest: config.build_manifest(),
            search_roots: config.assemblies.search_roots.clone(),
            staging_dir: config.staging_dir(),
            plugin_path: config.plugin_path(),
            settings_file: Some(config.settings_file()),
            package_file_name: config.package_file_name(product_name),
        }
    }

    /// Absolute form of a project-relative path
    pub fn resolve(&self, path: &Path) -> PathBuf {
        self.project_root.join(path)
    }

    /// Full path of the package to write
    pub fn package_path(&self) -> PathBuf {
        self.output_dir.join(&self.package_file_name)
    }

    /// Check that the package lands directly inside `output_dir`.
    ///
    /// The file name is built from the product name, which may come from
    /// the command line.
    pub fn validate(&self) -> ExportResult<()> {
        let name = &self.package_file_name;
        let mut components = Path::new(name).components();
        let plain = !name.contains(|c: char| c == '/' || c == '\\')
            && matches!(
                (components.next(), components.next()),
                (Some(Component::Normal(_)), None)
            );
        if plain {
            Ok(())
        } else {
            Err(ExportError::InvalidPackageName { name: name.clone() })
        }
    }

    /// Set the settings file (None = do not refresh settings)
    pub fn with_settings_file(mut self, path: Option<PathBuf>) -> Self {
        self.settings_file = path;
        self
    }
}
