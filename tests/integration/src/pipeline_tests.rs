//! Full pipeline: descriptor on disk -> loader -> resolver -> release assets.
//!
//! Uses the real filesystem probe against a temporary base directory.

use pretty_assertions::assert_eq;
use release_core::{DisabledReason, ErrorCategory, Resolver, release_assets};
use release_fs::NormalizedPath;
use release_model::{ArchiveFormat, PackagerKind, Phase, load_model};
use release_test_utils::TestWorkspace;

const DESCRIPTOR: &str = r#"
[project]
name = "app"
version = "2.3.0"
description = "Sample application"

[project.extra_properties]
vendor = "Acme"

[release]
kind = "gitlab"
owner = "acme"
name = "app"

[packagers.archive]
active = "always"
formats = ["zip"]

[packagers.snap]
active = "release"
base = "core22"
grade = "stable"
confinement = "strict"
exported_login = "secrets/snap.login"

[[packagers.snap.plugs]]
name = "home"
attributes = { read = "all" }

[packagers.brew]
active = "always"
formula_name = "{{distributionName}}-cli"

[[packagers.brew.dependencies]]
name = "openjdk"
version = "17"

[distributions.app]
type = "java-binary"

[[distributions.app.artifacts]]
path = "build/app-2.3.0.tar.gz"

[[distributions.app.artifacts]]
path = "build/app-2.3.0.zip"
extra_properties = { skipBrew = true }

[distributions.app.snap]
template_directory = "packaging/snap"

[[distributions.app.snap.plugs]]
name = "home"
attributes = { write = "own" }

[[distributions.app.snap.architectures]]
build_on = ["amd64"]

[[distributions.app.snap.architectures]]
run_on = ["arm64"]

[[distributions.app.brew.dependencies]]
name = "openjdk"
version = "21"

[distributions.app.archive]
formats = ["tar.gz"]

[distributions.docs]
type = "java-binary"
active = "snapshot"

[[distributions.docs.artifacts]]
path = "build/docs.zip"
"#;

fn setup() -> TestWorkspace {
    let workspace = TestWorkspace::new();
    workspace.write_descriptor(DESCRIPTOR);
    workspace.create_dir("packaging/snap");
    workspace.write_file("secrets/snap.login", "token");
    workspace
}

#[test]
fn descriptor_resolves_end_to_end() {
    let workspace = setup();
    let basedir = NormalizedPath::new(workspace.root());
    let model = load_model(&NormalizedPath::new(workspace.descriptor())).unwrap();

    let resolution = Resolver::new()
        .basedir(basedir.clone())
        .model(&model)
        .timestamp("2024-06-01T12:00:00Z")
        .resolve()
        .unwrap();

    let messages: Vec<_> = resolution.errors.messages().collect();
    assert_eq!(
        messages,
        vec!["distribution.app.snap.architectures[1].build_on must not be empty"]
    );
    assert_eq!(resolution.phase, Phase::Release);

    let snap = resolution.outcome("app", PackagerKind::Snap).unwrap();
    assert!(snap.is_enabled());
    let effective = snap.effective.as_ref().unwrap().as_snap().unwrap();
    assert_eq!(effective.plugs.len(), 1);
    assert_eq!(effective.plugs[0].attributes.len(), 2);
    assert_eq!(
        snap.resolved.get("downloadUrl:app-2.3.0.tar.gz").map(String::as_str),
        Some("https://gitlab.com/acme/app/-/releases/v2.3.0/downloads/app-2.3.0.tar.gz")
    );

    let brew = resolution.outcome("app", PackagerKind::Brew).unwrap();
    assert_eq!(brew.candidates.len(), 1);
    let dependencies = &brew.effective.as_ref().unwrap().as_brew().unwrap().dependencies;
    assert_eq!(dependencies.len(), 1);
    assert_eq!(dependencies[0].version.as_deref(), Some("21"));

    let archive = resolution.outcome("app", PackagerKind::Archive).unwrap();
    let formats = &archive.effective.as_ref().unwrap().as_archive().unwrap().formats;
    assert_eq!(formats, &vec![ArchiveFormat::TarGz, ArchiveFormat::Zip]);
    assert_eq!(
        archive.resolved.get("archiveName").map(String::as_str),
        Some("app-2.3.0")
    );

    let docs = resolution.distribution("docs").unwrap();
    assert!(!docs.enabled);

    let assets = release_assets(&basedir, &resolution).unwrap();
    let owners: Vec<_> = assets.iter().map(|a| a.distribution.as_str()).collect();
    assert_eq!(owners, vec!["app", "app", "docs"]);
    assert!(assets[0].path.starts_with(basedir.as_str()));
}

#[test]
fn missing_paths_surface_as_configuration_errors() {
    let workspace = TestWorkspace::new();
    workspace.write_descriptor(DESCRIPTOR);
    let model = load_model(&NormalizedPath::new(workspace.descriptor())).unwrap();

    let resolution = Resolver::new()
        .basedir(NormalizedPath::new(workspace.root()))
        .model(&model)
        .resolve()
        .unwrap();

    let messages: Vec<_> = resolution.errors.messages().collect();
    assert_eq!(messages.len(), 3);
    assert!(messages[0].starts_with("distribution.app.snap.template_directory"));
    assert!(messages[0].ends_with("packaging/snap does not exist"));
    assert!(messages[1].starts_with("distribution.app.snap.exported_login"));
    assert_eq!(resolution.errors.count(ErrorCategory::Configuration), 3);
}

#[test]
fn snapshot_overlay_changes_phase_and_activation() {
    let workspace = setup();
    workspace.write_local_overlay("[project]\nversion = \"2.4.0-SNAPSHOT\"\n");
    let model = load_model(&NormalizedPath::new(workspace.descriptor())).unwrap();

    let resolution = Resolver::new()
        .basedir(NormalizedPath::new(workspace.root()))
        .model(&model)
        .parallel(true)
        .resolve()
        .unwrap();

    assert_eq!(resolution.phase, Phase::Snapshot);
    assert!(resolution.is_success());
    assert_eq!(
        resolution
            .outcome("app", PackagerKind::Snap)
            .unwrap()
            .disabled_reason(),
        Some(DisabledReason::Inactive)
    );
    let docs = resolution.distribution("docs").unwrap();
    assert!(docs.enabled);
    assert!(docs.packager(PackagerKind::Archive).unwrap().is_enabled());
}

#[test]
fn resolution_serializes_for_reporting() {
    let workspace = setup();
    let model = load_model(&NormalizedPath::new(workspace.descriptor())).unwrap();
    let resolution = Resolver::new()
        .basedir(NormalizedPath::new(workspace.root()))
        .model(&model)
        .timestamp("fixed")
        .resolve()
        .unwrap();

    let json = serde_json::to_value(&resolution).unwrap();
    assert_eq!(json["phase"], "release");
    assert_eq!(json["errors"].as_array().unwrap().len(), 1);
    assert_eq!(json["distributions"][0]["name"], "app");
    assert_eq!(json["distributions"][0]["packagers"][0]["kind"], "archive");
}
