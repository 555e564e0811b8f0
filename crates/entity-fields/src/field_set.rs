//! Deterministic, sorted sets of field names

use std::collections::BTreeSet;

/// An ordered, duplicate-free set of field names, kept in ascending
/// lexicographic order.
///
/// The sorted order makes comparison output stable across runs regardless
/// of the order names were supplied in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldSet {
    names: BTreeSet<String>,
}

impl FieldSet {
    /// Build a field set from explicitly enumerated names.
    ///
    /// Names are sorted and deduplicated; supply order does not matter.
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
        }
    }

    /// Remove the given names from the set.
    ///
    /// Removing a name that is not present is a no-op.
    pub fn without<'a, I>(mut self, excluded: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        for name in excluded {
            self.names.remove(name);
        }
        self
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

    /// Iterate the names in ascending lexicographic order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<S> for FieldSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::from_names(iter)
    }
}
