//! Export Use Case
//!
//! Orchestrates one export run:
//! refresh settings -> enable plugin -> discover -> stage -> archive ->
//! cleanup -> restore plugin.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::domain::entities::{
    meta_path, update_settings, Manifest, ManifestEntry, StagedAssembly,
};
use crate::domain::ports::{
    ArchiveError, ArchiveWriter, AssemblyDiscoverer, FileStager, FsError, PackageEntry,
    PluginError, PluginToggle, SettingsStore,
};
use crate::domain::services::{default_descriptor, rewrite_identifier};
use crate::domain::value_objects::{AssetIdentifier, EntryCategory};
use crate::error::{ExportError, ExportResult};

use super::guard::PluginGuard;
use super::options::ExportOptions;
use super::result::{CleanupFailure, CleanupReport, ExportOutcome, ExportPlan, PlannedAssembly};

/// Export use case - builds the Mod Tools package
pub struct ExportUseCase<FS, AW, AD, PT, SS>
where
    FS: FileStager,
    AW: ArchiveWriter,
    AD: AssemblyDiscoverer,
    PT: PluginToggle,
    SS: SettingsStore,
{
    fs: FS,
    archive: AW,
    discoverer: AD,
    plugin: PT,
    settings: SS,
}

impl<FS, AW, AD, PT, SS> ExportUseCase<FS, AW, AD, PT, SS>
where
    FS: FileStager,
    AW: ArchiveWriter,
    AD: AssemblyDiscoverer,
    PT: PluginToggle,
    SS: SettingsStore,
{
    /// Create a new export use case
    pub fn new(fs: FS, archive: AW, discoverer: AD, plugin: PT, settings: SS) -> Self {
        Self {
            fs,
            archive,
            discoverer,
            plugin,
            settings,
        }
    }

    /// Run a full export.
    ///
    /// The plugin flag is restored and staged files are removed on every
    /// path out of this function, including errors.
    pub fn execute(&self, options: &ExportOptions) -> ExportResult<ExportOutcome> {
        info!(
            product = %options.product_name,
            runtime_version = %options.runtime_version,
            "creating exporter package"
        );
        options.validate()?;

        let settings_changed = self.refresh_settings(options)?;

        let plugin_path = options.resolve(&options.plugin_path);
        let guard = PluginGuard::acquire(&self.plugin, &plugin_path)
            .map_err(|e| plugin_error(&plugin_path, e))?;

        let mut staged = Vec::new();
        let archived = self.discover_stage_archive(options, &mut staged);
        let cleanup = self.cleanup_staged(&staged);
        let entries = archived?;

        guard
            .restore()
            .map_err(|e| plugin_error(&plugin_path, e))?;

        let package_path = options.package_path();
        info!(
            package = %package_path.display(),
            entries = entries.len(),
            staged = staged.len(),
            "exporter package created"
        );

        Ok(ExportOutcome {
            package_path,
            entries,
            staged,
            settings_changed,
            cleanup,
        })
    }

    /// Describe what [`execute`](Self::execute) would package without
    /// staging, archiving or toggling anything
    pub fn plan(&self, options: &ExportOptions) -> ExportResult<ExportPlan> {
        options.validate()?;
        let staging_dir = options.resolve(&options.staging_dir);
        let assemblies = self
            .discover_assemblies(&resolve_all(options, &options.search_roots))?
            .into_iter()
            .map(|source| {
                let staged = staged_destination(&source, &staging_dir);
                PlannedAssembly {
                    identifier: AssetIdentifier::derive(&staged).to_string(),
                    source,
                    staged,
                }
            })
            .collect();

        Ok(ExportPlan {
            package_path: options.package_path(),
            entries: self.fixed_entries(options).entries().to_vec(),
            assemblies,
        })
    }

    /// Scan each root in order and concatenate the results.
    ///
    /// No deduplication across roots.
    pub fn discover_assemblies(&self, search_roots: &[PathBuf]) -> ExportResult<Vec<PathBuf>> {
        let mut assemblies = Vec::new();
        for root in search_roots {
            let found = self.discoverer.discover(root)?;
            debug!(root = %root.display(), count = found.len(), "scanned search root");
            assemblies.extend(found);
        }
        Ok(assemblies)
    }

    /// Copy an assembly (and its side-car, if any) into `destination_dir`,
    /// overwriting existing files. A fresh side-car is created when the
    /// source has none.
    ///
    /// On failure nothing is left at the staged paths.
    pub fn stage_assembly(
        &self,
        source: &Path,
        destination_dir: &Path,
    ) -> ExportResult<StagedAssembly> {
        let staged_path = staged_destination(source, destination_dir);
        if let Err(e) = self.fs.copy(source, &staged_path) {
            self.remove_quietly(&staged_path);
            return Err(e.into());
        }

        let staged = StagedAssembly::new(source, &staged_path);
        let source_meta = meta_path(source);
        let side_car = if self.fs.exists(&source_meta) {
            self.fs.copy(&source_meta, &staged.meta_path())
        } else {
            self.fs
                .write(&staged.meta_path(), &default_descriptor(staged.identifier()))
        };

        if let Err(e) = side_car {
            self.remove_quietly(&staged.meta_path());
            self.remove_quietly(&staged_path);
            return Err(e.into());
        }

        debug!(
            source = %source.display(),
            staged = %staged_path.display(),
            "staged assembly"
        );
        Ok(staged)
    }

    /// Write the staged assembly's identifier into its side-car,
    /// leaving every other line unchanged
    pub fn tag_identifier(&self, staged: &StagedAssembly) -> ExportResult<()> {
        let meta = staged.meta_path();
        let content = self.fs.read(&meta)?;
        let updated = rewrite_identifier(&content, staged.identifier());
        if updated != content {
            self.fs.write(&meta, &updated)?;
        }
        debug!(meta = %meta.display(), identifier = %staged.identifier(), "tagged identifier");
        Ok(())
    }

    /// Bundle exactly `paths` into `output`.
    ///
    /// Relative paths are resolved against `root` and stored under that
    /// relative name. Every input is checked before the archive is started,
    /// so a missing input never produces or replaces an archive.
    pub fn build_package(&self, root: &Path, paths: &[PathBuf], output: &Path) -> ExportResult<()> {
        let entries: Vec<PackageEntry> = paths
            .iter()
            .map(|p| PackageEntry::relative_to(root, p))
            .collect();

        if let Some((path, _)) = paths
            .iter()
            .zip(&entries)
            .find(|(_, entry)| !self.fs.exists(&entry.source))
        {
            return Err(ExportError::MissingInput { path: path.clone() });
        }

        self.archive
            .write_archive(&entries, output)
            .map_err(|e| match e {
                ArchiveError::Io(source) => ExportError::io(output, source),
                ArchiveError::Entry { .. } => ExportError::ArchiveFailure {
                    path: output.to_path_buf(),
                    message: e.to_string(),
                },
            })
    }

    /// Remove staged files and their side-cars.
    ///
    /// Failures are logged and collected; they never stop the remaining removals.
    pub fn cleanup_staged(&self, staged: &[StagedAssembly]) -> CleanupReport {
        let mut report = CleanupReport::default();
        for assembly in staged {
            for path in [assembly.staged_path().to_path_buf(), assembly.meta_path()] {
                match self.fs.remove(&path) {
                    Ok(()) => report.removed.push(path),
                    Err(FsError::NotFound(_)) => {
                        debug!(path = %path.display(), "staged file already gone");
                    }
                    Err(e) => {
                        warn!(path = %path.display(), error = %e, "failed to remove staged file");
                        report.failures.push(CleanupFailure {
                            path,
                            message: e.to_string(),
                        });
                    }
                }
            }
        }
        report
    }

    /// Inject product name and runtime version into the bundled settings.
    ///
    /// Returns whether the settings file was rewritten.
    pub fn refresh_settings(&self, options: &ExportOptions) -> ExportResult<bool> {
        let Some(file) = &options.settings_file else {
            return Ok(false);
        };
        let path = options.resolve(file);
        let settings_err = |e: crate::domain::ports::SettingsError| ExportError::Settings {
            path: path.clone(),
            message: e.to_string(),
        };

        let current = self.settings.load(&path).map_err(settings_err)?;
        let update = update_settings(&current, &options.product_name, &options.runtime_version);
        if update.changed {
            self.settings
                .save(&path, &update.settings)
                .map_err(settings_err)?;
            info!(settings = %path.display(), "updated mod tool settings");
        }
        Ok(update.changed)
    }

    fn discover_stage_archive(
        &self,
        options: &ExportOptions,
        staged: &mut Vec<StagedAssembly>,
    ) -> ExportResult<Vec<ManifestEntry>> {
        let assemblies = self.discover_assemblies(&resolve_all(options, &options.search_roots))?;
        info!(count = assemblies.len(), "discovered API assemblies");

        let staging_dir = options.resolve(&options.staging_dir);
        for source in &assemblies {
            staged.push(self.stage_assembly(source, &staging_dir)?);
        }
        for assembly in staged.iter() {
            self.tag_identifier(assembly)?;
        }

        let manifest = package_manifest(self.fixed_entries(options), staged);
        let paths = manifest.paths();
        self.build_package(&options.project_root, &paths, &options.package_path())?;
        Ok(manifest.entries().to_vec())
    }

    /// Fixed manifest with each entry followed by its side-car, when the
    /// side-car exists and is not listed itself
    fn fixed_entries(&self, options: &ExportOptions) -> Manifest {
        let listed: HashSet<&Path> = options.manifest.iter().map(|e| e.path()).collect();
        let mut manifest = Manifest::new();
        for entry in options.manifest.iter() {
            manifest.push(entry.clone());
            let side_car = meta_path(entry.path());
            if !listed.contains(side_car.as_path()) && self.fs.exists(&options.resolve(&side_car)) {
                manifest.push(ManifestEntry::new(side_car, EntryCategory::Metadata));
            }
        }
        manifest
    }

    fn remove_quietly(&self, path: &Path) {
        match self.fs.remove(path) {
            Ok(()) | Err(FsError::NotFound(_)) => {}
            Err(e) => {
                warn!(path = %path.display(), error = %e, "failed to remove partially staged file");
            }
        }
    }
}

/// Fixed entries followed by each staged assembly and its side-car
fn package_manifest(fixed: Manifest, staged: &[StagedAssembly]) -> Manifest {
    let mut manifest = fixed;
    for assembly in staged {
        manifest.push(ManifestEntry::new(
            assembly.staged_path(),
            EntryCategory::ApiAssembly,
        ));
        manifest.push(ManifestEntry::new(
            assembly.meta_path(),
            EntryCategory::Metadata,
        ));
    }
    manifest
}

fn staged_destination(source: &Path, destination_dir: &Path) -> PathBuf {
    match source.file_name() {
        Some(name) => destination_dir.join(name),
        None => destination_dir.join(source),
    }
}

fn resolve_all(options: &ExportOptions, paths: &[PathBuf]) -> Vec<PathBuf> {
    paths.iter().map(|p| options.resolve(p)).collect()
}

fn plugin_error(path: &Path, err: PluginError) -> ExportError {
    ExportError::Plugin {
        path: path.to_path_buf(),
        message: err.to_string(),
    }
}
