//! Override merging
//!
//! A distribution-local packager configuration is merged with the shared
//! default of the same type. The local value is mutated in place; the shared
//! value is only read.
//!
//! Field rules:
//!
//! - scalars: local wins when set (blank text counts as unset)
//! - sets and accumulated lists: shared entries not already present are
//!   appended after the local ones
//! - keyed collections: shared entries always survive, enriched by the local
//!   entry with the same key; local-only entries are kept; output is ordered
//!   by key
//!
//! Every rule is idempotent: merging the same shared value twice changes
//! nothing the second time.

use std::collections::BTreeMap;

use release_model::packager::{
    ArchivePackager, Architecture, BrewDependency, BrewPackager, CommitAuthor,
    NativeImagePackager, PackagerCommon, Plug, Slot, SnapPackager, Upx,
};
use release_model::{Artifact, ExtraProperties};

/// Merge a shared default into `self`.
pub trait Merge {
    fn merge_from(&mut self, shared: &Self);
}

/// Whether an optional text value counts as unset.
pub fn is_blank(value: &Option<String>) -> bool {
    value.as_deref().is_none_or(|v| v.trim().is_empty())
}

/// Text scalar: keep local unless blank.
pub fn merge_text(local: &mut Option<String>, shared: &Option<String>) {
    if is_blank(local) {
        *local = shared.clone();
    }
}

/// Non-text scalar: keep local unless unset.
pub fn merge_option<T: Clone>(local: &mut Option<T>, shared: &Option<T>) {
    if local.is_none() {
        *local = shared.clone();
    }
}

/// Set union and list accumulation: local order first, then missing shared entries.
pub fn append_unique<T: PartialEq + Clone>(local: &mut Vec<T>, shared: &[T]) {
    for item in shared {
        if !local.contains(item) {
            local.push(item.clone());
        }
    }
}

/// Entry of a keyed collection.
pub trait Keyed: Clone {
    fn key(&self) -> &str;

    /// Fold `local` into this (shared) entry, `local` winning on conflict.
    fn enrich(&mut self, local: &Self);
}

/// Keyed-collection merge, ordered by key.
pub fn merge_keyed<T: Keyed>(local: &mut Vec<T>, shared: &[T]) {
    let mut merged: BTreeMap<String, T> = shared
        .iter()
        .map(|entry| (entry.key().to_string(), entry.clone()))
        .collect();

    for entry in local.drain(..) {
        match merged.get_mut(entry.key()) {
            Some(existing) => existing.enrich(&entry),
            None => {
                merged.insert(entry.key().to_string(), entry);
            }
        }
    }

    local.extend(merged.into_values());
}

/// Extra properties: shared keys are added where local has none.
pub fn merge_properties(local: &mut ExtraProperties, shared: &ExtraProperties) {
    for (key, value) in shared {
        local.entry(key.clone()).or_insert_with(|| value.clone());
    }
}

impl Keyed for Plug {
    fn key(&self) -> &str {
        &self.name
    }

    fn enrich(&mut self, local: &Self) {
        self.attributes
            .extend(local.attributes.iter().map(|(k, v)| (k.clone(), v.clone())));
    }
}

impl Keyed for Slot {
    fn key(&self) -> &str {
        &self.name
    }

    fn enrich(&mut self, local: &Self) {
        self.attributes
            .extend(local.attributes.iter().map(|(k, v)| (k.clone(), v.clone())));

        let mut reads = local.reads.clone();
        append_unique(&mut reads, &self.reads);
        self.reads = reads;

        let mut writes = local.writes.clone();
        append_unique(&mut writes, &self.writes);
        self.writes = writes;
    }
}

impl Keyed for BrewDependency {
    fn key(&self) -> &str {
        &self.name
    }

    fn enrich(&mut self, local: &Self) {
        if !is_blank(&local.version) {
            self.version = local.version.clone();
        }
    }
}

impl Merge for CommitAuthor {
    fn merge_from(&mut self, shared: &Self) {
        merge_text(&mut self.name, &shared.name);
        merge_text(&mut self.email, &shared.email);
    }
}

impl Merge for PackagerCommon {
    fn merge_from(&mut self, shared: &Self) {
        merge_option(&mut self.active, &shared.active);
        merge_text(&mut self.template_directory, &shared.template_directory);
        merge_text(&mut self.download_url, &shared.download_url);
        merge_option(&mut self.continue_on_error, &shared.continue_on_error);
        self.commit_author.merge_from(&shared.commit_author);
        merge_properties(&mut self.extra_properties, &shared.extra_properties);
    }
}

impl Merge for SnapPackager {
    fn merge_from(&mut self, shared: &Self) {
        self.common.merge_from(&shared.common);
        merge_text(&mut self.package_name, &shared.package_name);
        merge_text(&mut self.base, &shared.base);
        merge_text(&mut self.grade, &shared.grade);
        merge_text(&mut self.confinement, &shared.confinement);
        merge_option(&mut self.remote_build, &shared.remote_build);
        merge_text(&mut self.exported_login, &shared.exported_login);
        append_unique(&mut self.local_plugs, &shared.local_plugs);
        append_unique(&mut self.local_slots, &shared.local_slots);
        merge_keyed(&mut self.plugs, &shared.plugs);
        merge_keyed(&mut self.slots, &shared.slots);
        append_unique::<Architecture>(&mut self.architectures, &shared.architectures);
    }
}

impl Merge for BrewPackager {
    fn merge_from(&mut self, shared: &Self) {
        self.common.merge_from(&shared.common);
        merge_text(&mut self.formula_name, &shared.formula_name);
        merge_option(&mut self.multi_platform, &shared.multi_platform);
        merge_keyed(&mut self.dependencies, &shared.dependencies);
        append_unique(&mut self.livecheck, &shared.livecheck);
    }
}

impl Merge for Upx {
    fn merge_from(&mut self, shared: &Self) {
        merge_option(&mut self.active, &shared.active);
        merge_text(&mut self.version, &shared.version);
        append_unique(&mut self.args, &shared.args);
    }
}

impl Merge for NativeImagePackager {
    fn merge_from(&mut self, shared: &Self) {
        self.common.merge_from(&shared.common);
        merge_text(&mut self.image_name, &shared.image_name);
        merge_text(&mut self.image_name_transform, &shared.image_name_transform);
        merge_option(&mut self.archive_format, &shared.archive_format);
        if self.graal.as_ref().is_none_or(|g| g.path.trim().is_empty()) {
            self.graal = shared.graal.clone();
        }
        append_unique::<Artifact>(&mut self.graal_jdks, &shared.graal_jdks);
        append_unique(&mut self.args, &shared.args);
        self.upx.merge_from(&shared.upx);
    }
}

impl Merge for ArchivePackager {
    fn merge_from(&mut self, shared: &Self) {
        self.common.merge_from(&shared.common);
        merge_text(&mut self.archive_name, &shared.archive_name);
        append_unique(&mut self.formats, &shared.formats);
        merge_option(&mut self.attach_platform, &shared.attach_platform);
    }
}
