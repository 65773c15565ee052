// Copyright 2026 - Nym Technologies SA <contact@nymtech.net>
// SPDX-License-Identifier: Apache-2.0

use cosmwasm_std::{Order, StdError, StdResult, Storage};
use cw_storage_plus::{Bound, KeyDeserialize, Map, Prefixer, PrimaryKey};
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Key of an entry stored in an [`OrderedRegistry`].
///
/// Entries are grouped into scopes (for example all wind farms of a single customer),
/// each scope having its own id counter and its own insertion order.
pub(crate) trait RegistryKey: Copy {
    type Scope: Copy;

    fn scope(&self) -> Self::Scope;

    fn id(&self) -> u64;

    fn from_parts(scope: Self::Scope, id: u64) -> Self;
}

impl RegistryKey for u64 {
    type Scope = u8;

    fn scope(&self) -> Self::Scope {
        GLOBAL_SCOPE
    }

    fn id(&self) -> u64 {
        *self
    }

    fn from_parts(_: Self::Scope, id: u64) -> Self {
        id
    }
}

impl RegistryKey for (u64, u64) {
    type Scope = u64;

    fn scope(&self) -> Self::Scope {
        self.0
    }

    fn id(&self) -> u64 {
        self.1
    }

    fn from_parts(scope: Self::Scope, id: u64) -> Self {
        (scope, id)
    }
}

impl RegistryKey for (u64, u64, u64) {
    type Scope = (u64, u64);

    fn scope(&self) -> Self::Scope {
        (self.0, self.1)
    }

    fn id(&self) -> u64 {
        self.2
    }

    fn from_parts(scope: Self::Scope, id: u64) -> Self {
        (scope.0, scope.1, id)
    }
}

/// Scope shared by every entry of a registry with plain `u64` keys.
pub(crate) const GLOBAL_SCOPE: u8 = 0;

fn increment(value: u64) -> StdResult<u64> {
    value
        .checked_add(1)
        .ok_or_else(|| StdError::generic_err("registry counter overflow"))
}

/// Keyed collection that additionally remembers the insertion order of its live keys.
///
/// Removing an entry also removes its slot from the insertion order, so the index of every
/// entry inserted after it shifts down by one. Sequence numbers and auto-allocated ids are never
/// handed out twice within a scope, and an id that was ever claimed is never auto-allocated.
pub(crate) struct OrderedRegistry<K: RegistryKey, T> {
    entries: Map<K, T>,

    /// Latest insertion sequence number of every key ever inserted.
    /// Kept on removal so the id stays claimed.
    positions: Map<K, u64>,

    /// Live keys sorted by their insertion sequence number within the scope.
    order: Map<(K::Scope, u64), K>,

    /// Next insertion sequence number of the scope.
    sequences: Map<K::Scope, u64>,

    /// Next candidate id for auto-allocation within the scope.
    id_counters: Map<K::Scope, u64>,

    first_id: u64,
}

impl<K: RegistryKey, T> OrderedRegistry<K, T> {
    pub(crate) const fn new(
        entries_namespace: &'static str,
        positions_namespace: &'static str,
        order_namespace: &'static str,
        sequences_namespace: &'static str,
        id_counters_namespace: &'static str,
        first_id: u64,
    ) -> Self {
        OrderedRegistry {
            entries: Map::new(entries_namespace),
            positions: Map::new(positions_namespace),
            order: Map::new(order_namespace),
            sequences: Map::new(sequences_namespace),
            id_counters: Map::new(id_counters_namespace),
            first_id,
        }
    }
}

impl<K, T> OrderedRegistry<K, T>
where
    K: RegistryKey + for<'a> PrimaryKey<'a> + Serialize + DeserializeOwned,
    K::Scope: for<'a> PrimaryKey<'a> + for<'a> Prefixer<'a> + KeyDeserialize,
    T: Serialize + DeserializeOwned,
{
    pub(crate) fn has(&self, store: &dyn Storage, key: K) -> bool {
        self.entries.has(store, key)
    }

    pub(crate) fn may_load(&self, store: &dyn Storage, key: K) -> StdResult<Option<T>> {
        self.entries.may_load(store, key)
    }

    /// Reserves the next free id within the scope, skipping any ids that have been
    /// explicitly claimed in the meantime, including ones removed since.
    pub(crate) fn allocate_key(&self, store: &mut dyn Storage, scope: K::Scope) -> StdResult<K> {
        let mut id = self
            .id_counters
            .may_load(store, scope)?
            .unwrap_or(self.first_id);

        while self.positions.has(store, K::from_parts(scope, id)) {
            id = increment(id)?;
        }

        self.id_counters.save(store, scope, &increment(id)?)?;
        Ok(K::from_parts(scope, id))
    }

    /// Inserts the entry and appends its key to the insertion order of its scope.
    /// The caller must ensure the key is not already present.
    pub(crate) fn insert(&self, store: &mut dyn Storage, key: K, entry: &T) -> StdResult<()> {
        let scope = key.scope();
        let sequence = self.sequences.may_load(store, scope)?.unwrap_or_default();
        self.sequences.save(store, scope, &increment(sequence)?)?;

        self.entries.save(store, key, entry)?;
        self.positions.save(store, key, &sequence)?;
        self.order.save(store, (scope, sequence), &key)
    }

    /// Removes the entry alongside its slot in the insertion order.
    pub(crate) fn remove(&self, store: &mut dyn Storage, key: K) -> StdResult<Option<T>> {
        let Some(entry) = self.entries.may_load(store, key)? else {
            return Ok(None);
        };
        let sequence = self.positions.load(store, key)?;

        self.entries.remove(store, key);
        self.order.remove(store, (key.scope(), sequence));

        Ok(Some(entry))
    }

    /// Returns the key at the given position of the insertion order of the scope.
    pub(crate) fn key_at(
        &self,
        store: &dyn Storage,
        scope: K::Scope,
        index: u32,
    ) -> StdResult<Option<K>> {
        self.order
            .prefix(scope)
            .range(store, None, None, Order::Ascending)
            .nth(index as usize)
            .transpose()
            .map(|maybe_entry| maybe_entry.map(|(_, key)| key))
    }

    pub(crate) fn is_scope_empty(&self, store: &dyn Storage, scope: K::Scope) -> bool {
        self.order
            .prefix(scope)
            .keys_raw(store, None, None, Order::Ascending)
            .next()
            .is_none()
    }

    #[cfg(test)]
    pub(crate) fn len(&self, store: &dyn Storage, scope: K::Scope) -> usize {
        self.order
            .prefix(scope)
            .keys_raw(store, None, None, Order::Ascending)
            .count()
    }

    /// Returns up to `limit` entries of the scope in their insertion order,
    /// starting after the provided key. A removed key resumes after its former slot.
    pub(crate) fn ordered_entries(
        &self,
        store: &dyn Storage,
        scope: K::Scope,
        start_after: Option<K>,
        limit: usize,
    ) -> StdResult<Vec<T>> {
        let start = start_after
            .map(|key| self.positions.load(store, key))
            .transpose()?
            .map(Bound::exclusive);

        self.order
            .prefix(scope)
            .range(store, start, None, Order::Ascending)
            .take(limit)
            .map(|res| res.and_then(|(_, key)| self.entries.load(store, key)))
            .collect()
    }
}
