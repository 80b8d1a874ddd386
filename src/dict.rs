//! Flat `key=value,key=value` option strings.
//!
//! Repeated keys accumulate: the first occurrence stores a single value, the
//! second turns it into a list, later ones append. Keys iterate in the order
//! they first appeared.

use indexmap::map::Entry;
use indexmap::IndexMap;

use crate::report::{Report, Warnings};

/// Separator used when the caller has no preference.
pub const DEFAULT_SEPARATOR: &str = ",";

/// A value for one key: single until the key repeats.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DictValue {
    Single(String),
    Multiple(Vec<String>),
}

impl DictValue {
    /// The value if the key appeared exactly once.
    pub fn as_single(&self) -> Option<&str> {
        match self {
            DictValue::Single(v) => Some(v),
            DictValue::Multiple(_) => None,
        }
    }

    /// Every value for the key, in input order.
    pub fn values(&self) -> &[String] {
        match self {
            DictValue::Single(v) => std::slice::from_ref(v),
            DictValue::Multiple(vs) => vs,
        }
    }

    fn push(&mut self, value: String) {
        match self {
            DictValue::Multiple(values) => values.push(value),
            DictValue::Single(first) => {
                let first = std::mem::take(first);
                *self = DictValue::Multiple(vec![first, value]);
            }
        }
    }
}

pub type SimpleDict = IndexMap<String, DictValue>;

/// A dictionary entry that was skipped.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DictWarning {
    #[error("failed to parse dictionary option '{entry}' in '{input}': missing '='")]
    MissingEquals { input: String, entry: String },
    #[error("cannot split dictionary option '{0}' on an empty separator")]
    EmptySeparator(String),
}

/// Parses `s` into an ordered dictionary, skipping malformed entries.
pub fn parse_simple_dict(s: &str, sep: &str) -> SimpleDict {
    parse_simple_dict_report(s, sep).into_value()
}

/// Like [`parse_simple_dict`], also returning the skipped entries.
pub fn parse_simple_dict_report(s: &str, sep: &str) -> Report<SimpleDict, DictWarning> {
    let mut warnings = Warnings::new();
    let mut dict = SimpleDict::new();
    if sep.is_empty() {
        warnings.push(DictWarning::EmptySeparator(s.to_string()));
        return warnings.finish(dict);
    }

    for entry in s.split(sep).filter(|e| !e.is_empty()) {
        let Some((key, value)) = entry.split_once('=') else {
            warnings.push(DictWarning::MissingEquals {
                input: s.to_string(),
                entry: entry.to_string(),
            });
            continue;
        };
        match dict.entry(key.to_string()) {
            Entry::Occupied(mut e) => e.get_mut().push(value.to_string()),
            Entry::Vacant(e) => {
                e.insert(DictValue::Single(value.to_string()));
            }
        }
    }
    warnings.finish(dict)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
