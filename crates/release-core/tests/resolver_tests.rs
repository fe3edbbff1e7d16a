//! End-to-end resolution scenarios over in-memory models.

use std::sync::atomic::{AtomicUsize, Ordering};

use pretty_assertions::assert_eq;
use release_core::{
    Capability, DisabledReason, Error, ErrorCategory, PackagerState, Props, ReleaseTarget,
    Resolution, Resolver, Stage, release_assets,
};
use release_fs::{NormalizedPath, PathProbe};
use release_model::{
    Active, Architecture, Artifact, BrewPackager, Distribution, DistributionType, Model,
    NativeImagePackager, PackagerKind, Release, ReleaseKind, SnapPackager, Upx,
};
use release_test_utils::model::{archive_defaults, distribution, snap_defaults};
use release_test_utils::{FailingProbe, MemoryProbe, ModelBuilder};

const BASEDIR: &str = "/work";

fn resolve_with(model: &Model, probe: &dyn PathProbe) -> Resolution {
    Resolver::new()
        .basedir(NormalizedPath::new(BASEDIR))
        .model(model)
        .probe(probe)
        .timestamp("2024-01-01T00:00:00Z")
        .resolve()
        .unwrap()
}

fn resolve(model: &Model) -> Resolution {
    resolve_with(model, &MemoryProbe::new())
}

fn messages(resolution: &Resolution) -> Vec<String> {
    resolution.errors.messages().map(str::to_string).collect()
}

#[test]
fn shared_defaults_fill_missing_snap_fields() {
    let model = ModelBuilder::new("1.0.0")
        .snap(snap_defaults())
        .distribution(distribution("app", &["build/app-1.0.0.tar.gz"]))
        .build();

    let resolution = resolve(&model);

    assert_eq!(messages(&resolution), Vec::<String>::new());
    let outcome = resolution.outcome("app", PackagerKind::Snap).unwrap();
    assert_eq!(outcome.state, PackagerState::Enabled);
    assert_eq!(outcome.stage, Stage::FieldValidated);

    let snap = outcome.effective.as_ref().unwrap().as_snap().unwrap();
    assert_eq!(snap.base.as_deref(), Some("core22"));
    assert_eq!(snap.grade.as_deref(), Some("stable"));
    assert_eq!(snap.package_name.as_deref(), Some("app"));
    assert!(snap.common.enabled);
    assert_eq!(
        snap.common.template_directory.as_deref(),
        Some("src/distributions/app/snap")
    );
    assert_eq!(snap.common.commit_author.name.as_deref(), Some("releasebot"));
    assert_eq!(
        outcome.resolved.get("downloadUrl:app-1.0.0.tar.gz").map(String::as_str),
        Some("https://github.com/acme/app/releases/download/v1.0.0/app-1.0.0.tar.gz")
    );
}

#[test]
fn two_candidates_for_single_cardinality_packager() {
    let model = ModelBuilder::new("1.0.0")
        .snap(snap_defaults())
        .distribution(distribution(
            "app",
            &["build/app-1.0.0.tar.gz", "build/app-extra-1.0.0.tar"],
        ))
        .build();

    let resolution = resolve(&model);

    assert_eq!(resolution.errors.len(), 1);
    assert!(messages(&resolution)[0].starts_with(
        "distribution.app.snap expects exactly one candidate artifact but found 2"
    ));
    let outcome = resolution.outcome("app", PackagerKind::Snap).unwrap();
    assert_eq!(
        outcome.state,
        PackagerState::disabled(DisabledReason::Ambiguous { count: 2 })
    );
    assert_eq!(outcome.stage, Stage::CandidatesSelected);
    assert!(outcome.effective.is_none());
}

#[test]
fn architectures_without_build_on_are_reported_per_entry() {
    let local = SnapPackager {
        architectures: vec![
            Architecture::new(&[], &["amd64"]),
            Architecture::new(&["amd64"], &[]),
            Architecture::new(&["  "], &["arm64"]),
        ],
        ..Default::default()
    };
    let mut app = distribution("app", &["build/app-1.0.0.tar.gz"]);
    app.snap = Some(local);
    let model = ModelBuilder::new("1.0.0")
        .snap(snap_defaults())
        .distribution(app)
        .build();

    let resolution = resolve(&model);

    assert_eq!(
        messages(&resolution),
        vec![
            "distribution.app.snap.architectures[0].build_on must not be empty",
            "distribution.app.snap.architectures[2].build_on must not be empty",
        ]
    );
    assert!(resolution.outcome("app", PackagerKind::Snap).unwrap().is_enabled());
}

#[test]
fn zero_candidates_disable_silently() {
    let model = ModelBuilder::new("1.0.0")
        .snap(snap_defaults())
        .distribution(distribution("app", &["build/app-1.0.0.zip"]))
        .build();

    let resolution = resolve(&model);

    assert!(resolution.is_success());
    let outcome = resolution.outcome("app", PackagerKind::Snap).unwrap();
    assert_eq!(outcome.disabled_reason(), Some(DisabledReason::NoCandidates));
}

#[test]
fn skip_flag_excludes_artifact() {
    let app = Distribution::new("app", DistributionType::JavaBinary).with_artifact(
        Artifact::new("build/app-1.0.0.tar.gz").with_extra_property("skipSnap", true),
    );
    let model = ModelBuilder::new("1.0.0")
        .snap(snap_defaults())
        .distribution(app)
        .build();

    let resolution = resolve(&model);

    assert_eq!(
        resolution
            .outcome("app", PackagerKind::Snap)
            .unwrap()
            .disabled_reason(),
        Some(DisabledReason::NoCandidates)
    );
}

#[test]
fn unset_mode_on_both_sides_is_inactive() {
    let model = ModelBuilder::new("1.0.0")
        .distribution(distribution("app", &["build/app-1.0.0.tar.gz"]))
        .build();

    let resolution = resolve(&model);

    for kind in PackagerKind::ALL {
        let outcome = resolution.outcome("app", kind).unwrap();
        assert_eq!(outcome.disabled_reason(), Some(DisabledReason::Inactive));
        assert_eq!(outcome.stage, Stage::ActivationChecked);
    }
}

#[test]
fn lifecycle_mode_follows_project_phase() {
    let mut snap = snap_defaults();
    snap.common.active = Some(Active::Release);
    let model = ModelBuilder::new("1.0.0-SNAPSHOT")
        .snap(snap)
        .distribution(distribution("app", &["build/app.tar.gz"]))
        .build();

    let resolution = resolve(&model);

    assert_eq!(resolution.phase, release_model::Phase::Snapshot);
    assert_eq!(
        resolution
            .outcome("app", PackagerKind::Snap)
            .unwrap()
            .disabled_reason(),
        Some(DisabledReason::Inactive)
    );
}

#[test]
fn release_capability_is_required() {
    let model = ModelBuilder::new("1.0.0")
        .release(Release {
            kind: ReleaseKind::Generic,
            ..Default::default()
        })
        .snap(snap_defaults())
        .archive(archive_defaults())
        .distribution(distribution("app", &["build/app-1.0.0.tar.gz"]))
        .build();

    let resolution = resolve(&model);

    assert!(resolution.is_success());
    let snap = resolution.outcome("app", PackagerKind::Snap).unwrap();
    assert_eq!(
        snap.disabled_reason(),
        Some(DisabledReason::Unsupported {
            capability: Capability::ReleaseOperations
        })
    );
    assert_eq!(snap.stage, Stage::Merged);

    let archive = resolution.outcome("app", PackagerKind::Archive).unwrap();
    assert!(archive.is_enabled());
    assert!(archive.effective.as_ref().unwrap().common().download_url.is_none());
}

#[test]
fn inactive_distribution_disables_every_packager() {
    let mut app = distribution("app", &["build/app-1.0.0.tar.gz"]);
    app.active = Some(Active::Never);
    let model = ModelBuilder::new("1.0.0")
        .snap(snap_defaults())
        .distribution(app)
        .build();

    let resolution = resolve(&model);

    let resolved = resolution.distribution("app").unwrap();
    assert!(!resolved.enabled);
    assert!(resolved.packagers.iter().all(|p| {
        p.disabled_reason() == Some(DisabledReason::DistributionInactive) && p.stage == Stage::Pending
    }));
}

#[test]
fn required_fields_are_all_reported_without_disabling() {
    let local = SnapPackager {
        grade: Some("beta".into()),
        remote_build: Some(false),
        ..Default::default()
    };
    let mut shared = snap_defaults();
    shared.base = None;
    shared.confinement = None;
    let mut app = distribution("app", &["build/app-1.0.0.tar.gz"]);
    app.snap = Some(local);
    let model = ModelBuilder::new("1.0.0")
        .snap(shared)
        .distribution(app)
        .build();

    let resolution = resolve(&model);

    assert_eq!(
        messages(&resolution),
        vec![
            "distribution.app.snap.base must not be blank",
            "distribution.app.snap.grade must be one of stable, devel but was 'beta'",
            "distribution.app.snap.confinement must not be blank",
            "distribution.app.snap.exported_login must not be blank",
        ]
    );
    assert!(resolution.outcome("app", PackagerKind::Snap).unwrap().is_enabled());
}

#[test]
fn exported_login_must_exist() {
    let mut shared = snap_defaults();
    shared.remote_build = Some(false);
    shared.exported_login = Some("secrets/login.json".into());
    let model = ModelBuilder::new("1.0.0")
        .snap(shared)
        .distribution(distribution("app", &["build/app-1.0.0.tar.gz"]))
        .build();

    let missing = resolve(&model);
    assert_eq!(
        messages(&missing),
        vec!["distribution.app.snap.exported_login /work/secrets/login.json does not exist"]
    );

    let present = resolve_with(&model, &MemoryProbe::new().with_path("/work/secrets/login.json"));
    assert!(present.is_success());

    let failing = resolve_with(&model, &FailingProbe);
    assert_eq!(failing.errors.len(), 1);
    assert!(messages(&failing)[0].contains("could not be checked"));
}

#[test]
fn explicit_template_directory_is_checked() {
    let mut shared = snap_defaults();
    shared.common.template_directory = Some("templates/snap".into());
    let model = ModelBuilder::new("1.0.0")
        .snap(shared)
        .distribution(distribution("app", &["build/app-1.0.0.tar.gz"]))
        .build();

    let resolution = resolve(&model);
    assert_eq!(
        messages(&resolution),
        vec!["distribution.app.snap.template_directory /work/templates/snap does not exist"]
    );

    let resolution = resolve_with(&model, &MemoryProbe::new().with_path("/work/templates/snap"));
    assert!(resolution.is_success());
}

#[test]
fn native_image_errors_use_assembly_category() {
    let shared = NativeImagePackager {
        upx: Upx {
            active: Some(Active::Always),
            ..Default::default()
        },
        ..Default::default()
    };
    let mut tool = Distribution::new("tool", DistributionType::NativeImage)
        .with_artifact(Artifact::new("build/tool-1.0.0.jar"));
    tool.native_image = Some(NativeImagePackager {
        args: vec!["  --no-fallback ".into(), "   ".into()],
        ..Default::default()
    });
    let model = ModelBuilder::new("1.0.0")
        .packagers(|p| {
            p.native_image = shared;
            p.native_image.common.active = Some(Active::Always);
        })
        .distribution(tool)
        .build();

    let resolution = resolve(&model);

    assert_eq!(
        messages(&resolution),
        vec![
            "distribution.tool.native_image.graal.path must not be blank",
            "distribution.tool.native_image.upx.version must not be blank",
            "distribution.tool.native_image.artifacts build/tool-1.0.0.jar must declare a platform for a native-image distribution",
        ]
    );
    assert_eq!(resolution.errors.count(ErrorCategory::Assembly), 3);

    let outcome = resolution.outcome("tool", PackagerKind::NativeImage).unwrap();
    let native = outcome.effective.as_ref().unwrap().as_native_image().unwrap();
    assert_eq!(native.args, vec!["--no-fallback"]);
    assert_eq!(native.archive_format, Some(release_model::ArchiveFormat::Zip));
    assert!(native.upx.enabled);
    assert_eq!(
        outcome.resolved.get("imageName").map(String::as_str),
        Some("tool-1.0.0")
    );
}

#[test]
fn graal_jdks_replace_graal_path() {
    let mut native = NativeImagePackager {
        graal_jdks: vec![
            Artifact::new("/opt/graal-osx").with_platform("osx-aarch_64"),
            Artifact::new("/opt/graal-linux").with_platform("linux-x86_64"),
            Artifact::new("/opt/graal-linux").with_platform("linux-x86_64"),
        ],
        ..Default::default()
    };
    native.common.active = Some(Active::Always);
    let mut tool = Distribution::new("tool", DistributionType::SingleJar)
        .with_artifact(Artifact::new("build/tool.jar"));
    tool.native_image = Some(native);
    let model = ModelBuilder::new("1.0.0").distribution(tool).build();

    let resolution = resolve(&model);

    assert!(resolution.is_success(), "{:?}", messages(&resolution));
    let outcome = resolution.outcome("tool", PackagerKind::NativeImage).unwrap();
    let jdks: Vec<_> = outcome
        .effective
        .as_ref()
        .unwrap()
        .as_native_image()
        .unwrap()
        .graal_jdks
        .iter()
        .map(|a| a.path.as_str())
        .collect();
    assert_eq!(jdks, vec!["/opt/graal-linux", "/opt/graal-osx"]);
}

#[test]
fn brew_multi_platform_accepts_several_candidates() {
    let mut brew = BrewPackager {
        multi_platform: Some(true),
        ..Default::default()
    };
    brew.common.active = Some(Active::Always);
    let my_app = Distribution::new("my-app", DistributionType::JavaBinary)
        .with_artifact(Artifact::new("build/my-app-osx.zip").with_platform("osx-x86_64"))
        .with_artifact(Artifact::new("build/my-app-linux.zip").with_platform("linux-x86_64"))
        .with_artifact(Artifact::new("build/my-app.zip"))
        .with_artifact(Artifact::new("build/my-app-windows.zip").with_platform("windows-x86_64"));
    let model = ModelBuilder::new("1.0.0")
        .packagers(|p| p.brew = brew)
        .distribution(my_app)
        .build();

    let resolution = resolve(&model);

    assert_eq!(
        messages(&resolution),
        vec!["distribution.my-app.brew.multi_platform requires a platform on artifact build/my-app.zip"]
    );
    let outcome = resolution.outcome("my-app", PackagerKind::Brew).unwrap();
    assert_eq!(outcome.candidates.len(), 3);
    assert_eq!(
        outcome.resolved.get("formulaName").map(String::as_str),
        Some("MyApp")
    );
}

#[test]
fn archive_attaches_platform_to_name() {
    let mut archive = archive_defaults();
    archive.attach_platform = Some(true);
    let app = Distribution::new("app", DistributionType::Binary)
        .with_artifact(Artifact::new("build/app-linux").with_platform("linux-x86_64"))
        .with_artifact(Artifact::new("build/app-osx").with_platform("osx-x86_64"));
    let model = ModelBuilder::new("2.1.0")
        .archive(archive)
        .distribution(app)
        .build();

    let resolution = resolve(&model);

    assert!(resolution.is_success(), "{:?}", messages(&resolution));
    let outcome = resolution.outcome("app", PackagerKind::Archive).unwrap();
    assert_eq!(
        outcome.resolved.get("archiveName").map(String::as_str),
        Some("app-2.1.0")
    );
    assert_eq!(
        outcome.resolved.get("archiveName:app-linux").map(String::as_str),
        Some("app-2.1.0-linux-x86_64")
    );
}

#[test]
fn errors_from_every_distribution_are_kept_in_order() {
    let mut shared = snap_defaults();
    shared.base = None;
    let model = ModelBuilder::new("1.0.0")
        .snap(shared)
        .distribution(distribution("beta", &["beta.tar.gz"]))
        .distribution(distribution("alpha", &["alpha.tar.gz"]))
        .build();

    let resolution = resolve(&model);

    assert_eq!(
        messages(&resolution),
        vec![
            "distribution.alpha.snap.base must not be blank",
            "distribution.beta.snap.base must not be blank",
        ]
    );
}

#[test]
fn parallel_sweep_matches_sequential() {
    let mut shared = snap_defaults();
    shared.grade = None;
    let model = ModelBuilder::new("1.0.0")
        .snap(shared)
        .archive(archive_defaults())
        .distribution(distribution("a", &["a.tar.gz"]))
        .distribution(distribution("b", &["b.tar.gz", "b2.tar.gz"]))
        .distribution(distribution("c", &["c.zip"]))
        .distribution(distribution("d", &["d.tar"]))
        .build();
    let probe = MemoryProbe::new();

    let build = |parallel| {
        Resolver::new()
            .basedir(NormalizedPath::new(BASEDIR))
            .model(&model)
            .probe(&probe)
            .timestamp("fixed")
            .parallel(parallel)
            .resolve()
            .unwrap()
    };

    let sequential = build(false);
    let parallel = build(true);
    assert!(!sequential.errors.is_empty());
    assert_eq!(sequential, parallel);
}

#[test]
fn shared_defaults_are_never_mutated() {
    let model = ModelBuilder::new("1.0.0")
        .snap(snap_defaults())
        .distribution(distribution("app", &["app.tar.gz"]))
        .build();
    let before = model.clone();

    let _ = resolve(&model);

    assert_eq!(model, before);
}

#[test]
fn missing_collaborators_are_preconditions() {
    let model = ModelBuilder::new("1.0.0").build();

    let err = Resolver::new().model(&model).resolve().unwrap_err();
    assert!(matches!(err, Error::Precondition { ref what } if what == "base directory"));

    let err = Resolver::new()
        .basedir(NormalizedPath::new(BASEDIR))
        .resolve()
        .unwrap_err();
    assert!(matches!(err, Error::Precondition { ref what } if what == "release model"));
}

#[test]
fn project_and_release_are_validated_first() {
    let model = ModelBuilder::new("")
        .project(|p| p.snapshot.pattern = Some("(".into()))
        .release(Release::new(ReleaseKind::Gitea, "acme", ""))
        .build();

    let resolution = resolve(&model);
    let messages = messages(&resolution);

    assert_eq!(messages.len(), 4);
    assert_eq!(messages[0], "project.version must not be blank");
    assert_eq!(messages[1], "release.gitea.name must not be blank");
    assert_eq!(messages[2], "release.gitea.host must not be blank");
    assert!(messages[3].starts_with("project.snapshot.pattern is not a valid regular expression"));
}

#[test]
fn into_result_reports_every_error() {
    let mut shared = snap_defaults();
    shared.base = None;
    let model = ModelBuilder::new("1.0.0")
        .snap(shared)
        .distribution(distribution("a", &["a.tar.gz"]))
        .distribution(distribution("b", &["b.tar.gz"]))
        .build();

    match resolve(&model).into_result() {
        Err(Error::Validation { count, errors }) => {
            assert_eq!(count, 2);
            assert_eq!(errors.len(), 2);
        }
        other => panic!("expected validation error, got {other:?}"),
    }
}

#[test]
fn release_assets_cover_every_distribution() {
    let mut inactive = distribution("off", &["off.zip"]);
    inactive.active = Some(Active::Never);
    let model = ModelBuilder::new("1.0.0")
        .distribution(distribution("app", &["build/app.zip", "/abs/app.tar.gz", "build/app.zip"]))
        .distribution(inactive)
        .build();
    let resolution = resolve(&model);
    let basedir = NormalizedPath::new(BASEDIR);

    let assets = release_assets(&basedir, &resolution).unwrap();
    let paths: Vec<_> = assets.iter().map(|a| a.path.as_str()).collect();
    assert_eq!(
        paths,
        vec!["/abs/app.tar.gz", "/work/build/app.zip", "/work/off.zip"]
    );
    assert!(!resolution.distribution("off").unwrap().enabled);
    assert_eq!(assets[2].distribution, "off");

    let empty = resolve(&ModelBuilder::new("1.0.0").build());
    assert!(matches!(
        release_assets(&basedir, &empty),
        Err(Error::Precondition { .. })
    ));
}

/// Release target that uploads assets but cannot publish release notes.
#[derive(Default)]
struct NotesOffTarget {
    notes_queries: AtomicUsize,
}

impl ReleaseTarget for NotesOffTarget {
    fn supports_release_operations(&self) -> bool {
        true
    }

    fn supports_release_notes(&self) -> bool {
        self.notes_queries.fetch_add(1, Ordering::SeqCst);
        false
    }

    fn download_url_format(&self) -> Option<&str> {
        Some("https://downloads.example.com/{{artifactFileName}}")
    }

    fn contribute_props(&self, props: &mut Props) {
        props.insert("releaseNotesUrl", "https://notes.example.com/app");
    }
}

#[test]
fn release_notes_url_follows_target_notes_support() {
    let model = ModelBuilder::new("1.0.0")
        .snap(snap_defaults())
        .distribution(distribution("app", &["build/app-1.0.0.tar.gz"]))
        .build();

    let target = NotesOffTarget::default();
    let resolution = Resolver::new()
        .basedir(NormalizedPath::new(BASEDIR))
        .model(&model)
        .probe(&MemoryProbe::new())
        .target(&target)
        .resolve()
        .unwrap();

    assert!(resolution.is_success());
    let snap = resolution.outcome("app", PackagerKind::Snap).unwrap();
    assert!(snap.is_enabled());
    assert!(!snap.resolved.contains_key("releaseNotesUrl"));
    assert_eq!(
        snap.resolved.get("downloadUrl:app-1.0.0.tar.gz").map(String::as_str),
        Some("https://downloads.example.com/app-1.0.0.tar.gz")
    );
    assert!(target.notes_queries.load(Ordering::SeqCst) > 0);

    let default_target = resolve(&model);
    let snap = default_target.outcome("app", PackagerKind::Snap).unwrap();
    assert_eq!(
        snap.resolved.get("releaseNotesUrl").map(String::as_str),
        Some("https://github.com/acme/app/releases/tag/v1.0.0")
    );
}
