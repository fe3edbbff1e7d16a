//! Property bags used for template resolution
//!
//! A bag is assembled in layers, each later layer winning on key collision:
//!
//! ```text
//! project  ->  release target  ->  distribution  ->  packager
//! ```

use std::collections::BTreeMap;

use release_model::{Distribution, ExtraProperties, Project};
use serde::Serialize;
use serde_json::Value;

use crate::template;

/// Flat string-keyed mapping of template properties.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Props {
    values: BTreeMap<String, Value>,
}

impl Props {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.values.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    /// The value for `key` rendered as text.
    pub fn get_text(&self, key: &str) -> Option<String> {
        self.values.get(key).map(template::stringify)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Overlay `extras` onto this bag; the extras win.
    pub fn overlay(&mut self, extras: &ExtraProperties) {
        for (key, value) in extras {
            self.values.insert(key.clone(), value.clone());
        }
    }

    /// A copy of this bag with `extras` overlaid.
    pub fn with_overlay(&self, extras: &ExtraProperties) -> Props {
        let mut props = self.clone();
        props.overlay(extras);
        props
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.values.iter()
    }
}

/// Properties describing the project.
pub fn project_props(project: &Project, snapshot: bool, timestamp: &str) -> Props {
    let mut props = Props::new();
    props.insert("projectName", project.name.clone());
    props.insert("projectVersion", project.version.clone());
    if let Ok(version) = semver::Version::parse(project.version.trim()) {
        props.insert("projectVersionMajor", version.major.to_string());
        props.insert("projectVersionMinor", version.minor.to_string());
        props.insert("projectVersionPatch", version.patch.to_string());
    }
    props.insert("projectSnapshot", snapshot);
    if let Some(description) = project.description.as_deref().filter(|d| !d.trim().is_empty()) {
        props.insert("projectDescription", description.to_string());
    }
    props.insert("timestamp", timestamp.to_string());
    for (key, value) in &project.extra_properties {
        props.insert(format!("project{}", capitalize(key)), value.clone());
    }
    props
}

/// Properties describing a distribution, layered on top of `base`.
pub fn distribution_props(base: &Props, distribution: &Distribution) -> Props {
    let mut props = base.clone();
    props.insert("distributionName", distribution.name.clone());
    props.insert(
        "distributionType",
        distribution.distribution_type.as_str().to_string(),
    );
    props.insert(
        "distributionExecutable",
        distribution.executable_name().to_string(),
    );
    props.overlay(&distribution.extra_properties);
    props
}

fn capitalize(key: &str) -> String {
    let mut chars = key.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
