//! Snapcraft packager: plugs, slots and architectures

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::PackagerCommon;

/// Snapcraft packager configuration.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SnapPackager {
    #[serde(flatten)]
    pub common: PackagerCommon,

    /// Snap name; falls back to the distribution name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub package_name: Option<String>,

    /// Base snap, e.g. `core22`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base: Option<String>,

    /// `stable` or `devel`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grade: Option<String>,

    /// `strict`, `classic` or `devmode`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confinement: Option<String>,

    /// Build on the snap store builders instead of locally
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remote_build: Option<bool>,

    /// Exported snapcraft login, required for local builds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exported_login: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub local_plugs: Vec<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub local_slots: Vec<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub plugs: Vec<Plug>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub slots: Vec<Slot>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub architectures: Vec<Architecture>,
}

impl SnapPackager {
    /// Remote builds need no exported login.
    pub fn is_remote_build(&self) -> bool {
        self.remote_build.unwrap_or(false)
    }
}

/// A snap plug; identity is the name.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Plug {
    pub name: String,
    #[serde(default)]
    pub attributes: BTreeMap<String, String>,
}

impl Plug {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: BTreeMap::new(),
        }
    }

    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }
}

/// A snap slot; identity is the name.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Slot {
    pub name: String,
    #[serde(default)]
    pub attributes: BTreeMap<String, String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub reads: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub writes: Vec<String>,
}

impl Slot {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }
}

/// Target platforms of a snap build and the platforms it is built on.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Architecture {
    #[serde(default)]
    pub build_on: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub run_on: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ignore_error: Option<bool>,
}

impl Architecture {
    pub fn new(build_on: &[&str], run_on: &[&str]) -> Self {
        Self {
            build_on: build_on.iter().map(|s| s.to_string()).collect(),
            run_on: run_on.iter().map(|s| s.to_string()).collect(),
            ignore_error: None,
        }
    }

    pub fn has_build_on(&self) -> bool {
        self.build_on.iter().any(|b| !b.trim().is_empty())
    }
}
