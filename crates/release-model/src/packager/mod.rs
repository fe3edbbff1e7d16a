//! Packager configurations
//!
//! Every packager type embeds [`PackagerCommon`] by value (flattened in the
//! descriptor) and adds its own fields. Each type exists twice in a model:
//! once as the project-wide default under `[packagers.<type>]` and once per
//! distribution under `[distributions.<name>.<type>]`.

mod archive;
mod brew;
mod native_image;
mod snap;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::distribution::Distribution;
use crate::error::Error;
use crate::{Active, ExtraProperties};

pub use archive::{ArchiveFormat, ArchivePackager};
pub use brew::{BrewDependency, BrewPackager};
pub use native_image::{NativeImagePackager, Upx};
pub use snap::{Architecture, Plug, Slot, SnapPackager};

/// The packager types the resolver knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PackagerKind {
    Snap,
    Brew,
    NativeImage,
    Archive,
}

impl PackagerKind {
    /// All packager types in validation order.
    pub const ALL: [PackagerKind; 4] = [
        PackagerKind::Archive,
        PackagerKind::NativeImage,
        PackagerKind::Brew,
        PackagerKind::Snap,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PackagerKind::Snap => "snap",
            PackagerKind::Brew => "brew",
            PackagerKind::NativeImage => "native-image",
            PackagerKind::Archive => "archive",
        }
    }

    /// Name of the field holding this packager in a descriptor.
    pub fn field_name(&self) -> &'static str {
        match self {
            PackagerKind::NativeImage => "native_image",
            other => other.as_str(),
        }
    }

    /// Artifact extra property that excludes an artifact from this packager.
    pub fn skip_flag(&self) -> &'static str {
        match self {
            PackagerKind::Snap => "skipSnap",
            PackagerKind::Brew => "skipBrew",
            PackagerKind::NativeImage => "skipNativeImage",
            PackagerKind::Archive => "skipArchive",
        }
    }
}

impl fmt::Display for PackagerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PackagerKind {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().replace('_', "-").as_str() {
            "snap" => Ok(PackagerKind::Snap),
            "brew" | "homebrew" => Ok(PackagerKind::Brew),
            "native-image" | "nativeimage" => Ok(PackagerKind::NativeImage),
            "archive" => Ok(PackagerKind::Archive),
            _ => Err(Error::InvalidPackagerKind {
                value: s.to_string(),
            }),
        }
    }
}

/// Author recorded on commits a packager pushes (taps, buckets, snap repos).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CommitAuthor {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

/// Fields shared by every packager type.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PackagerCommon {
    /// Activation mode; `None` until written or inherited
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active: Option<Active>,

    /// Resolved from `active` and the project phase; never persisted
    #[serde(skip)]
    pub enabled: bool,

    /// Directory holding packager templates, relative to the base directory
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template_directory: Option<String>,

    /// Download URL template for candidate artifacts
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub download_url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub continue_on_error: Option<bool>,

    #[serde(default)]
    pub commit_author: CommitAuthor,

    #[serde(default, skip_serializing_if = "ExtraProperties::is_empty")]
    pub extra_properties: ExtraProperties,
}

/// Access to the common fields and the two places a packager lives in a model.
pub trait Packager: Clone + Default + fmt::Debug + Send + Sync {
    const KIND: PackagerKind;

    fn common(&self) -> &PackagerCommon;

    fn common_mut(&mut self) -> &mut PackagerCommon;

    /// The distribution-local configuration, if the distribution declares one.
    fn local(distribution: &Distribution) -> Option<&Self>;

    /// The project-wide default.
    fn shared(defaults: &Packagers) -> &Self;
}

/// Project-wide packager defaults (`[packagers]`).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Packagers {
    #[serde(default)]
    pub snap: SnapPackager,
    #[serde(default)]
    pub brew: BrewPackager,
    #[serde(default, alias = "nativeImage")]
    pub native_image: NativeImagePackager,
    #[serde(default)]
    pub archive: ArchivePackager,
}

macro_rules! impl_packager {
    ($ty:ty, $kind:expr, $field:ident) => {
        impl Packager for $ty {
            const KIND: PackagerKind = $kind;

            fn common(&self) -> &PackagerCommon {
                &self.common
            }

            fn common_mut(&mut self) -> &mut PackagerCommon {
                &mut self.common
            }

            fn local(distribution: &Distribution) -> Option<&Self> {
                distribution.$field.as_ref()
            }

            fn shared(defaults: &Packagers) -> &Self {
                &defaults.$field
            }
        }
    };
}

impl_packager!(SnapPackager, PackagerKind::Snap, snap);
impl_packager!(BrewPackager, PackagerKind::Brew, brew);
impl_packager!(NativeImagePackager, PackagerKind::NativeImage, native_image);
impl_packager!(ArchivePackager, PackagerKind::Archive, archive);
