//! Scenario: Failed Export
//!
//! Journey: an export fails halfway; the project must look untouched.
//!
//! Success Criteria:
//! - The error names the missing input
//! - No package is created and an existing one is not replaced
//! - Staged copies are removed and the plugin flag is restored
//! - A product name never places the package outside the output directory

use std::fs;
use std::path::{Path, PathBuf};

use modkit::presentation::factory::{create_export_use_case, export_options};
use modkit::{Config, ExportError, ExportResult};

use crate::common::*;

fn try_export(root: &Path, out: &Path) -> ExportResult<modkit::ExportOutcome> {
    let config = Config::default();
    let use_case = create_export_use_case(&config, root).unwrap();
    let options = export_options(&config, root, out, Some("Game".to_string()), None);
    use_case.execute(&options)
}

fn assert_project_restored(root: &Path) {
    assert!(!root.join("Assets/ModTool/Game.Api.dll").exists());
    assert!(!root.join("Assets/ModTool/Game.Api.dll.meta").exists());
    assert!(!root.join("Assets/ModTool/Assembly-CSharp.dll").exists());
    assert_eq!(
        fs::read_to_string(root.join("Assets/ModTool/Editor/ModTool.Exporting.Editor.dll.meta"))
            .unwrap(),
        PLUGIN_META
    );
}

/// SCENARIO: a manifest file is missing
#[test]
fn scenario_missing_manifest_file() {
    let project = tempfile::tempdir().unwrap();
    let out = tempfile::tempdir().unwrap();
    let root = project.path().canonicalize().unwrap();
    UnityProject::new(&root)
        .without_manifest_file("Assets/ModTool/ModTool.Interface.xml")
        .with_assembly("Assets/Plugins/Game.Api.dll", Some(API_META))
        .with_assembly("Library/ScriptAssemblies/Assembly-CSharp.dll", None)
        .build();

    let err = try_export(&root, out.path()).unwrap_err();

    match &err {
        ExportError::MissingInput { path } => {
            assert_eq!(path, &PathBuf::from("Assets/ModTool/ModTool.Interface.xml"))
        }
        other => panic!("expected MissingInput, got {:?}", other),
    }
    assert!(err.is_missing_input());
    assert!(!out.path().join("Game Mod Tools.unitypackage").exists());
    assert_project_restored(&root);
}

/// SCENARIO: a failed export leaves the previous package in place
#[test]
fn scenario_previous_package_survives_failure() {
    let project = tempfile::tempdir().unwrap();
    let out = tempfile::tempdir().unwrap();
    let root = project.path().canonicalize().unwrap();
    UnityProject::new(&root)
        .without_manifest_file("ProjectSettings/TagManager.asset")
        .with_assembly("Assets/Plugins/Game.Api.dll", None)
        .build();
    let previous = out.path().join("Game Mod Tools.unitypackage");
    write(&previous, "previous release");

    assert!(try_export(&root, out.path()).is_err());

    assert_eq!(fs::read_to_string(&previous).unwrap(), "previous release");
    let names: Vec<_> = fs::read_dir(out.path())
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    assert_eq!(names, vec!["Game Mod Tools.unitypackage".to_string()]);
    assert_project_restored(&root);
}

/// SCENARIO: the exporter plugin itself is missing
#[test]
fn scenario_missing_plugin() {
    let project = tempfile::tempdir().unwrap();
    let out = tempfile::tempdir().unwrap();
    let root = project.path().canonicalize().unwrap();
    standard_project(&root);
    fs::remove_file(root.join("Assets/ModTool/Editor/ModTool.Exporting.Editor.dll")).unwrap();

    let err = try_export(&root, out.path()).unwrap_err();

    assert!(matches!(err, ExportError::Plugin { .. }));
    assert!(!root.join("Assets/ModTool/Game.Api.dll").exists());
    assert!(!out.path().join("Game Mod Tools.unitypackage").exists());
}

/// SCENARIO: a product name that would leave the output directory
#[test]
fn scenario_product_name_escaping_output_dir() {
    let project = tempfile::tempdir().unwrap();
    let parent = tempfile::tempdir().unwrap();
    let root = project.path().canonicalize().unwrap();
    let out = parent.path().canonicalize().unwrap().join("out");
    fs::create_dir(&out).unwrap();
    standard_project(&root);

    let config = Config::default();
    let use_case = create_export_use_case(&config, &root).unwrap();
    let options = export_options(&config, &root, &out, Some("../Escape".to_string()), None);
    let err = use_case.execute(&options).unwrap_err();

    assert!(matches!(err, ExportError::InvalidPackageName { .. }));
    assert!(!parent.path().join("Escape Mod Tools.unitypackage").exists());
    assert_eq!(fs::read_dir(&out).unwrap().count(), 0);
    assert_project_restored(&root);
}
