//! Nested-object flattening with dotted (underscore-joined) key paths.
//!
//! `flatten` descends unconditionally; `filtered_flatten` checks each joined
//! path against an allow-list and only then descends. The asymmetry is
//! deliberate: once a path matches the allow-list, its whole subtree is kept
//! (flattened without further filtering), while a non-matching path is dropped
//! without descending — nested keys under it never get a chance to match.

use serde_json::{Map, Value};

/// Key path separator.
pub const SEP: &str = "_";

/// Recursively flatten `obj` into a single-level map, joining ancestor keys
/// with `sep`. Arrays and scalars are leaves. A flat object comes back with
/// its keys unchanged.
pub fn flatten(obj: &Map<String, Value>, parent_key: &str, sep: &str) -> Map<String, Value> {
    let mut out = Map::new();
    for (key, value) in obj {
        let path = join_key(parent_key, key, sep);
        match value {
            Value::Object(inner) => out.extend(flatten(inner, &path, sep)),
            _ => {
                out.insert(path, value.clone());
            }
        }
    }
    out
}

/// Flatten `obj`, retaining only paths that exactly match `keys_to_keep`.
/// A retained path whose value is an object is fully flattened from there on
/// with no further filtering.
pub fn filtered_flatten(
    obj: &Map<String, Value>,
    keys_to_keep: &[&str],
    parent_key: &str,
    sep: &str,
) -> Map<String, Value> {
    let mut out = Map::new();
    for (key, value) in obj {
        let path = join_key(parent_key, key, sep);
        if !keys_to_keep.contains(&path.as_str()) {
            continue;
        }
        match value {
            Value::Object(inner) => out.extend(flatten(inner, &path, sep)),
            _ => {
                out.insert(path, value.clone());
            }
        }
    }
    out
}

fn join_key(parent: &str, key: &str, sep: &str) -> String {
    if parent.is_empty() {
        key.to_string()
    } else {
        format!("{parent}{sep}{key}")
    }
}
