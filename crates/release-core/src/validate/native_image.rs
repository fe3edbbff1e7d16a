//! GraalVM native-image rules

use std::collections::BTreeMap;

use release_fs::NormalizedPath;
use release_model::{ArchiveFormat, Artifact, NativeImagePackager};

use super::context::PackagerContext;
use super::rules::PackagerRules;
use crate::activation::Activatable;
use crate::errors::ErrorCategory;
use crate::merge::is_blank;

const DEFAULT_IMAGE_NAME: &str = "{{distributionName}}-{{projectVersion}}";

impl PackagerRules for NativeImagePackager {
    const CATEGORY: ErrorCategory = ErrorCategory::Assembly;

    fn accepts(&self, artifact: &Artifact) -> bool {
        artifact.archive_extension().as_deref() == Some(".jar")
    }

    fn validate(&mut self, ctx: &mut PackagerContext<'_>) {
        if is_blank(&self.image_name) {
            self.image_name = Some(DEFAULT_IMAGE_NAME.to_string());
        }
        let image_name = ctx.resolve(self.image_name.as_deref().unwrap_or(DEFAULT_IMAGE_NAME));
        ctx.record("imageName", image_name.clone());

        if let Some(transform) = self
            .image_name_transform
            .as_deref()
            .filter(|t| !t.trim().is_empty())
        {
            let mut props = ctx.props.clone();
            props.insert("imageName", image_name);
            let resolved = crate::template::render(transform, &props);
            ctx.record("imageNameTransform", resolved);
        }

        self.archive_format.get_or_insert(ArchiveFormat::Zip);

        let mut jdks: BTreeMap<NormalizedPath, Artifact> = BTreeMap::new();
        for jdk in self.graal_jdks.drain(..) {
            jdks.entry(jdk.normalized_path()).or_insert(jdk);
        }
        self.graal_jdks = jdks.into_values().collect();
        for jdk in &self.graal_jdks {
            if jdk.platform().is_none() {
                ctx.invalid(
                    "graal_jdks",
                    format!("entry {} must declare a platform", jdk.path),
                );
            }
        }

        if self.graal_jdks.is_empty()
            && self.graal.as_ref().is_none_or(|g| g.path.trim().is_empty())
        {
            ctx.invalid("graal.path", "must not be blank");
        }

        self.args = self
            .args
            .iter()
            .map(|arg| arg.trim().to_string())
            .filter(|arg| !arg.is_empty())
            .collect();

        if self.upx.resolve_enabled(ctx.phase) {
            ctx.require("upx.version", &self.upx.version);
        }
    }
}
