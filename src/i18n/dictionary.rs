// SPDX-License-Identifier: MPL-2.0
//! Nested locale dictionaries with dotted-key lookup.

use crate::error::Result;
use serde_json::{Map, Value};

/// Translated text for one language.
///
/// The JSON shape is a tree of objects whose leaves are strings. Keys are
/// addressed with dotted paths such as `experience.durations.trucker`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LocaleDictionary {
    root: Map<String, Value>,
}

impl LocaleDictionary {
    pub fn new(root: Map<String, Value>) -> Self {
        Self { root }
    }

    /// Parses a dictionary from JSON bytes. A top-level value that is not an
    /// object yields an empty dictionary.
    pub fn from_json(bytes: &[u8]) -> Result<Self> {
        match serde_json::from_slice::<Value>(bytes)? {
            Value::Object(root) => Ok(Self { root }),
            _ => Ok(Self::default()),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_empty()
    }

    /// Resolves a dotted key one segment at a time.
    ///
    /// Any missing segment, or a path that ends on something other than a
    /// string, resolves to `None`.
    pub fn lookup(&self, key: &str) -> Option<&str> {
        let mut segments = key.split('.');
        let mut current = self.root.get(segments.next()?)?;
        for segment in segments {
            current = current.as_object()?.get(segment)?;
        }
        current.as_str()
    }

    /// Dotted keys of every string leaf, in map order.
    pub fn keys(&self) -> Vec<String> {
        fn collect(prefix: &str, map: &Map<String, Value>, out: &mut Vec<String>) {
            for (segment, value) in map {
                let key = if prefix.is_empty() {
                    segment.clone()
                } else {
                    format!("{prefix}.{segment}")
                };
                match value {
                    Value::String(_) => out.push(key),
                    Value::Object(child) => collect(&key, child, out),
                    _ => {}
                }
            }
        }
        let mut keys = Vec::new();
        collect("", &self.root, &mut keys);
        keys
    }

    /// Number of string leaves in the tree.
    pub fn len(&self) -> usize {
        fn count(value: &Value) -> usize {
            match value {
                Value::String(_) => 1,
                Value::Object(map) => map.values().map(count).sum(),
                _ => 0,
            }
        }
        self.root.values().map(count).sum()
    }
}
