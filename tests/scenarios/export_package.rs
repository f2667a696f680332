//! Scenario: Export Mod Tools
//!
//! Journey: a game developer packages the modding API for release.
//!
//! Steps:
//! 1. Project has the mod tool runtime, project settings and API assemblies
//! 2. Runs an export
//! 3. Ships the resulting package
//!
//! Success Criteria:
//! - Package holds the fixed manifest followed by the staged assemblies
//! - Staged copies are gone and the plugin flag is back where it was
//! - Re-running produces the same bytes

use std::fs;
use std::path::{Path, PathBuf};

use modkit::config::CONFIG_FILE_NAME;
use modkit::domain::services::read_identifier;
use modkit::infrastructure::archive::list_entries;
use modkit::presentation::factory::{create_export_use_case, export_options};
use modkit::{AssetIdentifier, Config, ExportOutcome};

use crate::common::*;
use crate::read_package;

fn export(root: &Path, out: &Path) -> ExportOutcome {
    let (config, _) = Config::load_or_default(root).unwrap();
    let use_case = create_export_use_case(&config, root).unwrap();
    let options = export_options(
        &config,
        root,
        out,
        Some("Space Game".to_string()),
        None,
    );
    use_case.execute(&options).unwrap()
}

fn dirs() -> (tempfile::TempDir, tempfile::TempDir, PathBuf, PathBuf) {
    let project = tempfile::tempdir().unwrap();
    let out = tempfile::tempdir().unwrap();
    let root = project.path().canonicalize().unwrap();
    let out_path = out.path().canonicalize().unwrap();
    (project, out, root, out_path)
}

/// SCENARIO: full export of a standard project
#[test]
fn scenario_export_standard_project() {
    let (_project, _out, root, out) = dirs();
    standard_project(&root);

    let outcome = export(&root, &out);

    // Package named after the product, in the output directory
    let package = out.join("Space Game Mod Tools.unitypackage");
    assert_eq!(outcome.package_path, package);
    assert!(package.is_file());

    // Fixed manifest first, then staged assemblies with their side-cars
    assert_eq!(list_entries(&package).unwrap(), standard_entries());
    assert_eq!(outcome.entry_count(), standard_entries().len());
    assert_eq!(outcome.staged.len(), 2);

    // Staged copies removed, sources untouched
    assert!(!root.join("Assets/ModTool/Game.Api.dll").exists());
    assert!(!root.join("Assets/ModTool/Game.Api.dll.meta").exists());
    assert!(!root.join("Assets/ModTool/Assembly-CSharp.dll").exists());
    assert!(!root.join("Assets/ModTool/Assembly-CSharp.dll.meta").exists());
    assert_eq!(
        fs::read_to_string(root.join("Assets/Plugins/Game.Api.dll.meta")).unwrap(),
        API_META
    );
    assert!(outcome.cleanup.is_clean());

    // Plugin flag restored byte for byte
    assert_eq!(
        fs::read_to_string(root.join("Assets/ModTool/Editor/ModTool.Exporting.Editor.dll.meta"))
            .unwrap(),
        PLUGIN_META
    );
}

/// SCENARIO: staged side-cars carry derived identifiers
#[test]
fn scenario_staged_side_cars_are_tagged() {
    let (_project, _out, root, out) = dirs();
    standard_project(&root);

    let outcome = export(&root, &out);
    let entries = read_package(&outcome.package_path);
    let content = |name: &str| {
        entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, c)| c.clone())
            .unwrap_or_else(|| panic!("{} missing from package", name))
    };

    // Existing side-car: identifier replaced, everything else kept
    let api_meta = content("Assets/ModTool/Game.Api.dll.meta");
    let expected_id = AssetIdentifier::from_name("game.api");
    assert_eq!(read_identifier(&api_meta), Some(expected_id.clone()));
    assert_eq!(
        api_meta,
        API_META.replace("00000000000000000000000000000000", expected_id.as_str())
    );

    // No side-car at the source: a minimal one is created
    let csharp_meta = content("Assets/ModTool/Assembly-CSharp.dll.meta");
    assert_eq!(
        csharp_meta,
        format!(
            "fileFormatVersion: 2\nguid: {}\n",
            AssetIdentifier::from_name("assembly-csharp")
        )
    );
    assert_eq!(
        content("Assets/ModTool/Assembly-CSharp.dll"),
        "assembly Library/ScriptAssemblies/Assembly-CSharp.dll\n"
    );
}

/// SCENARIO: settings refreshed from product name and project version
#[test]
fn scenario_settings_refreshed_before_packaging() {
    let (_project, _out, root, out) = dirs();
    standard_project(&root);
    write(
        &root.join("Assets/ModTool/ModToolSettings.toml"),
        "product_name = \"Old Name\"\nlog_level = \"warning\"\n",
    );

    let outcome = export(&root, &out);
    assert!(outcome.settings_changed);

    let on_disk = fs::read_to_string(root.join("Assets/ModTool/ModToolSettings.toml")).unwrap();
    let settings: modkit::ModToolSettings = toml::from_str(&on_disk).unwrap();
    assert_eq!(settings.product_name, "Space Game");
    assert_eq!(settings.runtime_version, "2019.4.1f1");
    assert_eq!(settings.extra["log_level"].as_str(), Some("warning"));

    let packaged = read_package(&outcome.package_path)
        .into_iter()
        .find(|(n, _)| n == "Assets/ModTool/ModToolSettings.toml")
        .unwrap()
        .1;
    assert_eq!(packaged, on_disk);

    // Second run: nothing to change
    let again = export(&root, &out);
    assert!(!again.settings_changed);
}

/// SCENARIO: re-exporting replaces the package with identical bytes
#[test]
fn scenario_reexport_is_reproducible() {
    let (_project, _out, root, out) = dirs();
    standard_project(&root);

    let first = export(&root, &out);
    let first_bytes = fs::read(&first.package_path).unwrap();
    let second = export(&root, &out);
    let second_bytes = fs::read(&second.package_path).unwrap();

    assert_eq!(first_bytes, second_bytes);
    let leftovers: Vec<_> = fs::read_dir(&out)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    assert_eq!(leftovers, vec!["Space Game Mod Tools.unitypackage".to_string()]);
}

/// SCENARIO: project config adds entries and changes the extension
#[test]
fn scenario_project_config_is_honoured() {
    let (_project, _out, root, out) = dirs();
    UnityProject::new(&root)
        .with_assembly("Library/ScriptAssemblies/Assembly-CSharp.dll", None)
        .with_config(
            r#"
[package]
extension = "tgz"

[assemblies]
search_roots = ["Library"]

[manifest]
extra = ["Assets/ModTool/README.txt"]
"#,
        )
        .build();
    write(&root.join("Assets/ModTool/README.txt"), "read me\n");
    assert!(root.join(CONFIG_FILE_NAME).is_file());

    let outcome = export(&root, &out);

    assert_eq!(
        outcome.package_path,
        out.join("Space Game Mod Tools.tgz")
    );
    let names = list_entries(&outcome.package_path).unwrap();
    let readme = names
        .iter()
        .position(|n| n == "Assets/ModTool/README.txt")
        .unwrap();
    let staged = names
        .iter()
        .position(|n| n == "Assets/ModTool/Assembly-CSharp.dll")
        .unwrap();
    assert!(readme < staged);
    // Fixed manifest, plugin descriptor, extra entry, one staged assembly
    assert_eq!(names.len(), 14 + 1 + 1 + 2);
}

/// SCENARIO: a plugin already enabled stays enabled
#[test]
fn scenario_enabled_plugin_left_enabled() {
    let (_project, _out, root, out) = dirs();
    standard_project(&root);
    let meta = root.join("Assets/ModTool/Editor/ModTool.Exporting.Editor.dll.meta");
    let enabled = PLUGIN_META.replace("compatibleWithEditor: 0", "compatibleWithEditor: 1");
    write(&meta, &enabled);

    export(&root, &out);

    assert_eq!(fs::read_to_string(&meta).unwrap(), enabled);
}

/// SCENARIO: the shipped plugin is enabled for the editor, the project copy is not
#[test]
fn scenario_packaged_plugin_descriptor_is_enabled() {
    let (_project, _out, root, out) = dirs();
    standard_project(&root);

    let outcome = export(&root, &out);

    let packaged = read_package(&outcome.package_path)
        .into_iter()
        .find(|(n, _)| n == PLUGIN_META_PATH)
        .map(|(_, c)| c)
        .expect("plugin descriptor packaged");
    assert!(packaged.contains("compatibleWithEditor: 1"));
    assert_eq!(
        packaged,
        PLUGIN_META.replace("compatibleWithEditor: 0", "compatibleWithEditor: 1")
    );

    let on_disk = fs::read_to_string(root.join(PLUGIN_META_PATH)).unwrap();
    assert!(on_disk.contains("compatibleWithEditor: 0"));
    assert_eq!(on_disk, PLUGIN_META);
}

/// SCENARIO: a plugin shipped without a descriptor gets none left behind
#[test]
fn scenario_plugin_without_descriptor() {
    let (_project, _out, root, out) = dirs();
    UnityProject::new(&root)
        .with_assembly("Library/ScriptAssemblies/Assembly-CSharp.dll", None)
        .without_plugin_meta()
        .build();

    let outcome = export(&root, &out);

    let packaged = read_package(&outcome.package_path)
        .into_iter()
        .find(|(n, _)| n == PLUGIN_META_PATH)
        .map(|(_, c)| c);
    assert_eq!(packaged.as_deref(), Some("compatibleWithEditor: 1\n"));
    assert!(!root.join(PLUGIN_META_PATH).exists());
}
