//! Metadata attached to controller actions, looked up by [`ActionSignature`].

use std::collections::{BTreeMap, btree_map};

use serde::{Serialize, Serializer};

use crate::{ActionSignature, SignatureError};

/// Table associating a value with each registered [`ActionSignature`].
///
/// Keys follow the equality of [`ActionSignature`], so names are matched case-insensitively and
/// the order of parameter types is irrelevant. Iteration is ordered by signature.
#[derive(Clone, Debug)]
pub struct ActionTable<V> {
    entries: BTreeMap<ActionSignature, V>,
}

impl<V> ActionTable<V> {
    pub fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// Register `value` against the signature, returning the value it replaced. The stored
    /// signature is always the most recently inserted one.
    pub fn insert(&mut self, signature: ActionSignature, value: V) -> Option<V> {
        let previous = self.entries.remove(&signature);

        if previous.is_some() {
            tracing::debug!(%signature, "replacing existing action table entry");
        }

        self.entries.insert(signature, value);

        previous
    }

    /// Register `value` against the signature, and return the table to allow chaining.
    pub fn with(mut self, signature: ActionSignature, value: V) -> Self {
        self.insert(signature, value);
        self
    }

    pub fn get(&self, signature: &ActionSignature) -> Option<&V> {
        self.entries.get(signature)
    }

    /// Parse `signature` (see [`ActionSignature::parse`]) and look it up.
    pub fn get_str(&self, signature: &str) -> Result<Option<&V>, SignatureError> {
        Ok(self.get(&ActionSignature::parse(signature)?))
    }

    pub fn contains(&self, signature: &ActionSignature) -> bool {
        self.entries.contains_key(signature)
    }

    pub fn remove(&mut self, signature: &ActionSignature) -> Option<V> {
        self.entries.remove(signature)
    }

    /// All entries that `query` is compatible with (see [`ActionSignature::is_compatible_with`]),
    /// in table order.
    pub fn compatible<'a, 'q>(
        &'a self,
        query: &'q ActionSignature,
    ) -> impl Iterator<Item = (&'a ActionSignature, &'a V)> + use<'a, 'q, V> {
        self.entries
            .iter()
            .filter(move |(signature, _)| query.is_compatible_with(*signature))
    }

    /// Find the entry serving `query`. An exact match is preferred, otherwise the first
    /// compatible entry is used.
    pub fn resolve(&self, query: &ActionSignature) -> Option<(&ActionSignature, &V)> {
        if let Some(entry) = self.entries.get_key_value(query) {
            return Some(entry);
        }

        let entry = self.compatible(query).next();

        if let Some((signature, _)) = entry {
            tracing::trace!(%query, %signature, "resolved action by compatibility");
        }

        entry
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> btree_map::Iter<'_, ActionSignature, V> {
        self.entries.iter()
    }
}

impl<V> Default for ActionTable<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> FromIterator<(ActionSignature, V)> for ActionTable<V> {
    fn from_iter<T: IntoIterator<Item = (ActionSignature, V)>>(iter: T) -> Self {
        let mut table = Self::new();
        table.extend(iter);
        table
    }
}

impl<V> Extend<(ActionSignature, V)> for ActionTable<V> {
    fn extend<T: IntoIterator<Item = (ActionSignature, V)>>(&mut self, iter: T) {
        for (signature, value) in iter {
            self.insert(signature, value);
        }
    }
}

impl<V> IntoIterator for ActionTable<V> {
    type Item = (ActionSignature, V);
    type IntoIter = btree_map::IntoIter<ActionSignature, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a, V> IntoIterator for &'a ActionTable<V> {
    type Item = (&'a ActionSignature, &'a V);
    type IntoIter = btree_map::Iter<'a, ActionSignature, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[derive(Serialize)]
struct Entry<'a, V> {
    signature: &'a ActionSignature,
    value: &'a V,
}

/// Serialised as a sequence of `{ signature, value }` entries, since signatures can't be used
/// as map keys in most formats.
impl<V: Serialize> Serialize for ActionTable<V> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(
            self.entries
                .iter()
                .map(|(signature, value)| Entry { signature, value }),
        )
    }
}
