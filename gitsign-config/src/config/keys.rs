//! Mapping of git config keys onto [`Config`] fields.
//!
//! Keys are matched case-insensitively through a table built once per
//! process from [`Field::git_key`]. Unrecognized keys are ignored.

use crate::config::parser::RawConfig;
use crate::config::schema::{Config, Field};
use std::collections::HashMap;
use std::sync::LazyLock;

static KEY_TABLE: LazyLock<HashMap<String, Field>> = LazyLock::new(|| {
    Field::ALL
        .iter()
        .map(|&field| (field.git_key().to_lowercase(), field))
        .collect()
});

/// Look up the field a git config key controls.
///
/// # Examples
///
/// ```
/// use gitsign_config::config::{classify_key, Field};
///
/// assert_eq!(classify_key("GitSign.RekorMode"), Some(Field::RekorMode));
/// assert_eq!(classify_key("core.editor"), None);
/// ```
#[must_use]
pub fn classify_key(key: &str) -> Option<Field> {
    // Full Unicode lowercasing: U+212A KELVIN SIGN folds to `k`
    KEY_TABLE.get(&key.to_lowercase()).copied()
}

/// Apply recognized git config entries onto `config`.
///
/// Entries are applied in [`RawConfig`] iteration order. Returns the
/// `(key, field)` pairs that were applied, in application order.
pub fn apply_git_options(config: &mut Config, raw: &RawConfig) -> Vec<(String, Field)> {
    let mut applied = Vec::new();
    for (key, value) in raw.iter() {
        match classify_key(key) {
            Some(field) => {
                log::debug!("git config {key} -> {field}");
                config.set(field, value);
                applied.push((key.to_string(), field));
            }
            None => log::trace!("ignoring git config key {key}"),
        }
    }
    applied
}
