//! Test fixtures - a fake game project laid out the way the exporter expects.

use std::fs;
use std::path::{Path, PathBuf};

use modkit::Config;

/// Side-car of the exporter plugin, editor flag off
pub const PLUGIN_META: &str = "fileFormatVersion: 2\n\
guid: 5f2d0c7a1b3e4f6a8c9d0e1f2a3b4c5d\n\
PluginImporter:\n\
  compatibleWithEditor: 0\n\
  isPreloaded: 0\n";

/// Side-car of an API assembly that already has one
pub const API_META: &str = "fileFormatVersion: 2\n\
guid: 00000000000000000000000000000000\n\
PluginImporter:\n\
  isExplicitlyReferenced: 1\n";

pub const PROJECT_VERSION: &str = "m_EditorVersion: 2019.4.1f1\nm_EditorVersionWithRevision: 2019.4.1f1 (abc)\n";

/// Builder for a fake game project
pub struct UnityProject {
    root: PathBuf,
    config: Config,
    skip_manifest: Vec<PathBuf>,
    assemblies: Vec<(PathBuf, Option<String>)>,
    config_toml: Option<String>,
    project_version: bool,
    plugin_meta: bool,
}

impl UnityProject {
    pub fn new(root: &Path) -> Self {
        Self {
            root: root.to_path_buf(),
            config: Config::default(),
            skip_manifest: Vec::new(),
            assemblies: Vec::new(),
            config_toml: None,
            project_version: true,
            plugin_meta: true,
        }
    }

    /// Leave one manifest file out of the project
    pub fn without_manifest_file(mut self, path: &str) -> Self {
        self.skip_manifest.push(PathBuf::from(path));
        self
    }

    /// Add an assembly, optionally with its own side-car
    pub fn with_assembly(mut self, path: &str, meta: Option<&str>) -> Self {
        self.assemblies
            .push((PathBuf::from(path), meta.map(str::to_string)));
        self
    }

    pub fn with_config(mut self, toml: &str) -> Self {
        self.config_toml = Some(toml.to_string());
        self
    }

    pub fn without_project_version(mut self) -> Self {
        self.project_version = false;
        self
    }

    /// Ship the exporter plugin without a descriptor
    pub fn without_plugin_meta(mut self) -> Self {
        self.plugin_meta = false;
        self
    }

    /// Write everything to disk
    pub fn build(self) -> PathBuf {
        for entry in self.config.build_manifest().iter() {
            if self.skip_manifest.iter().any(|p| p == entry.path()) {
                continue;
            }
            let content = format!("# contents of {}\n", entry.path().display());
            write(&self.root.join(entry.path()), &content);
        }
        if self.plugin_meta {
            write(
                &modkit::domain::entities::meta_path(&self.root.join(self.config.plugin_path())),
                PLUGIN_META,
            );
        }

        for (path, meta) in &self.assemblies {
            let full = self.root.join(path);
            write(&full, &format!("assembly {}\n", path.display()));
            if let Some(meta) = meta {
                write(&modkit::domain::entities::meta_path(&full), meta);
            }
        }

        if self.project_version {
            write(
                &self.root.join("ProjectSettings/ProjectVersion.txt"),
                PROJECT_VERSION,
            );
        }
        if let Some(toml) = &self.config_toml {
            write(&self.root.join("modkit.toml"), toml);
        }
        self.root
    }
}

pub fn write(path: &Path, content: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}

/// A project with one API assembly in Assets (with side-car) and one in
/// Library (without), plus engine assemblies that must be ignored
pub fn standard_project(root: &Path) -> PathBuf {
    UnityProject::new(root)
        .with_assembly("Assets/Plugins/Game.Api.dll", Some(API_META))
        .with_assembly("Library/ScriptAssemblies/Assembly-CSharp.dll", None)
        .with_assembly("Library/ScriptAssemblies/UnityEngine.CoreModule.dll", None)
        .with_assembly("Library/ScriptAssemblies/Assembly-CSharp.Editor.dll", None)
        .build()
}

/// Path of the exporter plugin's descriptor with default config
pub const PLUGIN_META_PATH: &str = "Assets/ModTool/Editor/ModTool.Exporting.Editor.dll.meta";

/// Entry names expected for [`standard_project`] with default config:
/// the fixed manifest with the plugin descriptor after the plugin, then
/// the staged assemblies
pub fn standard_entries() -> Vec<String> {
    let plugin = Config::default().plugin_path();
    let mut names = Vec::new();
    for path in Config::default().build_manifest().paths() {
        names.push(path.to_string_lossy().replace('\\', "/"));
        if path == plugin {
            names.push(PLUGIN_META_PATH.to_string());
        }
    }
    names.extend(
        [
            "Assets/ModTool/Game.Api.dll",
            "Assets/ModTool/Game.Api.dll.meta",
            "Assets/ModTool/Assembly-CSharp.dll",
            "Assets/ModTool/Assembly-CSharp.dll.meta",
        ]
        .map(String::from),
    );
    names
}
