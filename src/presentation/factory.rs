//! Use Case Factory
//!
//! Creates use cases with infrastructure dependencies wired up.
//! This is the dependency injection point for the application.

use std::path::Path;

use crate::application::{ExportOptions, ExportUseCase};
use crate::config::{resolve_product_name, resolve_runtime_version, Config, CONFIG_FILE_NAME};
use crate::error::{ExportError, ExportResult};
use crate::infrastructure::{
    DirectoryDiscoverer, GlobAssemblyFilter, LocalStager, MetaPluginToggle, TarGzArchiveWriter,
    TomlSettingsStore,
};

/// Type alias for the concrete ExportUseCase with all dependencies
pub type ConcreteExportUseCase = ExportUseCase<
    LocalStager,
    TarGzArchiveWriter,
    DirectoryDiscoverer<GlobAssemblyFilter>,
    MetaPluginToggle<LocalStager>,
    TomlSettingsStore,
>;

/// Create an export use case for a project.
///
/// Fails only when the configured include/exclude patterns are invalid.
pub fn create_export_use_case(
    config: &Config,
    project_root: &Path,
) -> ExportResult<ConcreteExportUseCase> {
    let filter = GlobAssemblyFilter::new(&config.assemblies.include, &config.assemblies.exclude)
        .map_err(|e| ExportError::Config {
            file: project_root.join(CONFIG_FILE_NAME),
            message: e.to_string(),
        })?;

    let discoverer =
        DirectoryDiscoverer::new(filter).skipping(project_root.join(config.staging_dir()));
    let archive = TarGzArchiveWriter::new().with_compression(config.package.compression);
    let plugin = MetaPluginToggle::new(LocalStager::new()).with_key(config.plugin.flag_key.clone());

    Ok(ExportUseCase::new(
        LocalStager::new(),
        archive,
        discoverer,
        plugin,
        TomlSettingsStore::new(),
    ))
}

/// Build export options, letting explicit values win over configuration
pub fn export_options(
    config: &Config,
    project_root: &Path,
    output_dir: &Path,
    product_name: Option<String>,
    runtime_version: Option<String>,
) -> ExportOptions {
    let product_name =
        product_name.unwrap_or_else(|| resolve_product_name(config, project_root));
    let runtime_version =
        runtime_version.unwrap_or_else(|| resolve_runtime_version(config, project_root));

    ExportOptions::from_config(
        config,
        project_root,
        output_dir,
        &product_name,
        &runtime_version,
    )
}
