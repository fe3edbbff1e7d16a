//! Archive rules

use release_model::{ArchivePackager, Artifact};

use super::context::PackagerContext;
use super::rules::PackagerRules;
use crate::merge::is_blank;
use crate::selector::Cardinality;

const DEFAULT_ARCHIVE_NAME: &str = "{{distributionName}}-{{projectVersion}}";

impl PackagerRules for ArchivePackager {
    fn cardinality(&self) -> Cardinality {
        Cardinality::AtLeastOne
    }

    fn accepts(&self, _artifact: &Artifact) -> bool {
        true
    }

    fn validate(&mut self, ctx: &mut PackagerContext<'_>) {
        if is_blank(&self.archive_name) {
            self.archive_name = Some(DEFAULT_ARCHIVE_NAME.to_string());
        }
        let name = ctx.resolve(self.archive_name.as_deref().unwrap_or(DEFAULT_ARCHIVE_NAME));
        ctx.record("archiveName", name.clone());

        if self.formats.is_empty() {
            ctx.invalid("formats", "must not be empty");
        }

        if self.is_attach_platform() {
            let platformed: Vec<(String, String)> = ctx
                .candidates
                .iter()
                .filter_map(|a| a.platform().map(|p| (a.file_name(), format!("{name}-{p}"))))
                .collect();
            for (file_name, archive_name) in platformed {
                ctx.record(format!("archiveName:{file_name}"), archive_name);
            }
        }
    }
}
