//! Homebrew rules

use release_model::{Artifact, BrewPackager, Os};

use super::context::PackagerContext;
use super::rules::PackagerRules;
use super::target::Capability;
use crate::merge::is_blank;
use crate::selector::Cardinality;

const DEFAULT_FORMULA_NAME: &str = "{{distributionName}}";

impl PackagerRules for BrewPackager {
    const CAPABILITY: Option<Capability> = Some(Capability::ReleaseOperations);

    fn cardinality(&self) -> Cardinality {
        if self.is_multi_platform() {
            Cardinality::AtLeastOne
        } else {
            Cardinality::ExactlyOne
        }
    }

    fn accepts(&self, artifact: &Artifact) -> bool {
        matches!(artifact.archive_extension().as_deref(), Some(".zip" | ".tar.gz"))
            && (artifact.platform().is_none()
                || matches!(artifact.os(), Some(Os::Osx | Os::Linux)))
    }

    fn validate(&mut self, ctx: &mut PackagerContext<'_>) {
        let template = if is_blank(&self.formula_name) {
            DEFAULT_FORMULA_NAME.to_string()
        } else {
            self.formula_name.clone().unwrap_or_default()
        };
        let formula = class_name(&ctx.resolve(&template));
        ctx.record("formulaName", formula.clone());
        self.formula_name = Some(formula);

        for (index, dependency) in self.dependencies.iter().enumerate() {
            if dependency.name.trim().is_empty() {
                ctx.invalid(&format!("dependencies[{index}].name"), "must not be blank");
            }
        }

        if self.is_multi_platform() {
            let missing: Vec<String> = ctx
                .candidates
                .iter()
                .filter(|a| a.platform().is_none())
                .map(|a| a.path.clone())
                .collect();
            for path in missing {
                ctx.invalid(
                    "multi_platform",
                    format!("requires a platform on artifact {path}"),
                );
            }
        }
    }
}

/// Ruby class name for a formula: `my-app` becomes `MyApp`.
pub fn class_name(name: &str) -> String {
    name.split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|part| !part.is_empty())
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect()
}
