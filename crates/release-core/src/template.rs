//! Placeholder substitution
//!
//! Templates use `{{name}}` markers. A marker whose name is not in the
//! property bag stays in the output untouched so a half-resolved value is
//! visible rather than silently empty.

use std::sync::LazyLock;

use regex::{Captures, Regex};
use serde_json::Value;

use crate::Props;

static PLACEHOLDER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\{\{\s*([A-Za-z0-9_.:\-]+)\s*\}\}").expect("placeholder pattern is valid")
});

/// Resolve an optional template. Absent input stays absent.
pub fn resolve_template(template: Option<&str>, props: &Props) -> Option<String> {
    template.map(|t| render(t, props))
}

/// Substitute every known placeholder in `template`.
pub fn render(template: &str, props: &Props) -> String {
    PLACEHOLDER
        .replace_all(template, |caps: &Captures<'_>| match props.get(&caps[1]) {
            Some(value) => stringify(value),
            None => caps[0].to_string(),
        })
        .into_owned()
}

/// Text form of a property value.
pub fn stringify(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        other => other.to_string(),
    }
}
