//! Explicit service selection.
//!
//! The set of selected services is the only mutable state of a dashboard
//! session. It is owned by the presentation layer and passed by reference
//! into every aggregation call; nothing in the core reads it implicitly.

use super::record::CoverageData;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// A set of service names. Names that are not keys of the record mapping
/// are allowed and simply match nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ServiceSubset {
    names: BTreeSet<String>,
}

impl ServiceSubset {
    /// Selects nothing.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Selects every service in `records`.
    pub fn all(records: &CoverageData) -> Self {
        records.keys().cloned().collect()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn insert(&mut self, name: impl Into<String>) -> bool {
        self.names.insert(name.into())
    }

    pub fn remove(&mut self, name: &str) -> bool {
        self.names.remove(name)
    }

    /// Flip membership of `name`; returns whether it is selected afterwards.
    pub fn toggle(&mut self, name: &str) -> bool {
        if self.names.remove(name) {
            false
        } else {
            self.names.insert(name.to_string());
            true
        }
    }

    pub fn select_all(&mut self, records: &CoverageData) {
        self.names.extend(records.keys().cloned());
    }

    pub fn clear(&mut self) {
        self.names.clear();
    }

    /// Number of selected names that are keys of `records`.
    pub fn selected_in(&self, records: &CoverageData) -> usize {
        records.keys().filter(|k| self.contains(k.as_str())).count()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<S> for ServiceSubset {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            names: iter.into_iter().map(Into::into).collect(),
        }
    }
}

/// Records participating in an aggregation, in mapping order.
///
/// `None` selects every record; unknown names in `subset` are ignored.
pub fn filter_records<'a>(
    records: &'a CoverageData,
    subset: Option<&'a ServiceSubset>,
) -> impl Iterator<Item = (&'a String, &'a super::CoverageRecord)> + 'a {
    records
        .iter()
        .filter(move |(name, _)| subset.is_none_or(|s| s.contains(name.as_str())))
}
