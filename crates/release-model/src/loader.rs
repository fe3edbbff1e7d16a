//! TOML loader for release descriptors
//!
//! A descriptor is read from `release.toml`. When a `release.local.toml`
//! sits next to it, the local file is deep-merged on top before the model
//! is built, so developers can override the shared configuration without
//! touching it:
//!
//! ```text
//! release.toml        shared, committed
//! release.local.toml  optional, per machine
//! ```

use release_fs::NormalizedPath;
use release_fs::io::{MAX_DESCRIPTOR_BYTES, read_text_bounded};
use toml::Value;

use crate::{Error, Model, Result};

/// File name of the local overlay.
pub const LOCAL_OVERLAY: &str = "release.local.toml";

/// Parse a descriptor from TOML text.
pub fn parse_model(content: &str) -> Result<Model> {
    let value: Value = toml::from_str(content).map_err(|e| Error::InvalidDescriptor {
        path: "<inline>".into(),
        message: e.message().to_string(),
    })?;
    build_model(value, "<inline>")
}

/// Load a descriptor file plus its optional local overlay.
pub fn load_model(path: &NormalizedPath) -> Result<Model> {
    if !path.is_file() {
        return Err(Error::DescriptorNotFound {
            path: path.to_native(),
        });
    }

    let mut value = read_value(path)?;

    if let Some(overlay) = path.parent().map(|dir| dir.join(LOCAL_OVERLAY)) {
        if overlay.is_file() {
            tracing::debug!(path = %overlay, "Merging local descriptor overlay");
            let local = read_value(&overlay)?;
            deep_merge(&mut value, &local);
        }
    }

    build_model(value, path.as_str())
}

fn read_value(path: &NormalizedPath) -> Result<Value> {
    let content = read_text_bounded(path, MAX_DESCRIPTOR_BYTES)?;
    toml::from_str(&content).map_err(|e| Error::InvalidDescriptor {
        path: path.to_native(),
        message: e.message().to_string(),
    })
}

fn build_model(value: Value, origin: &str) -> Result<Model> {
    let mut model: Model = value.try_into().map_err(|e: toml::de::Error| Error::InvalidDescriptor {
        path: origin.into(),
        message: e.message().to_string(),
    })?;
    model.assign_names();
    tracing::debug!(
        distributions = model.distributions.len(),
        "Loaded release descriptor"
    );
    Ok(model)
}

/// Deep merge two TOML values.
///
/// Tables merge recursively with `other` taking precedence; anything else,
/// arrays included, is replaced by `other`.
fn deep_merge(base: &mut Value, other: &Value) {
    match (base, other) {
        (Value::Table(base_table), Value::Table(other_table)) => {
            for (key, other_val) in other_table {
                if let Some(base_val) = base_table.get_mut(key) {
                    deep_merge(base_val, other_val);
                } else {
                    base_table.insert(key.clone(), other_val.clone());
                }
            }
        }
        (base, other) => {
            *base = other.clone();
        }
    }
}
