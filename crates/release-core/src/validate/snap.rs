//! Snapcraft rules

use release_model::{Artifact, Os, SnapPackager};

use super::context::PackagerContext;
use super::rules::PackagerRules;
use super::target::Capability;
use crate::merge::is_blank;

const GRADES: &[&str] = &["stable", "devel"];
const CONFINEMENTS: &[&str] = &["strict", "classic", "devmode"];

impl PackagerRules for SnapPackager {
    const CAPABILITY: Option<Capability> = Some(Capability::ReleaseOperations);

    fn accepts(&self, artifact: &Artifact) -> bool {
        matches!(artifact.archive_extension().as_deref(), Some(".tar.gz" | ".tar"))
            && (artifact.platform().is_none() || artifact.os() == Some(Os::Linux))
    }

    fn validate(&mut self, ctx: &mut PackagerContext<'_>) {
        if is_blank(&self.package_name) {
            self.package_name = Some(ctx.distribution.name.clone());
        }
        if let Some(name) = self.package_name.as_deref() {
            let resolved = ctx.resolve(name);
            ctx.record("packageName", resolved);
        }

        ctx.require("base", &self.base);
        ctx.require_one_of("grade", &self.grade, GRADES);
        ctx.require_one_of("confinement", &self.confinement, CONFINEMENTS);

        if !self.is_remote_build() && ctx.require("exported_login", &self.exported_login) {
            if let Some(login) = self.exported_login.as_deref() {
                ctx.check_exists("exported_login", login);
            }
        }

        for (index, architecture) in self.architectures.iter().enumerate() {
            if !architecture.has_build_on() {
                ctx.invalid(
                    &format!("architectures[{index}].build_on"),
                    "must not be empty",
                );
            }
        }
    }
}
