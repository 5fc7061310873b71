//! In-memory relation store.

use std::sync::Arc;

use rustc_hash::FxHashMap;
use rustfst::fst_impls::VectorFst;
use rustfst::semirings::TropicalWeight;

use super::{ArchiveError, RelationStore, WeightedRelation};

/// A relation store held entirely in memory.
///
/// Useful for embedders that build relations programmatically and for tests
/// that do not want to touch the filesystem. Inserts happen before the store
/// is handed to a cascade; resolution is read-only.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    relations: FxHashMap<String, WeightedRelation>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `relation` under `name`, replacing any previous entry.
    pub fn insert<N: Into<String>>(&mut self, name: N, relation: VectorFst<TropicalWeight>) {
        self.relations.insert(name.into(), Arc::new(relation));
    }

    /// Stores an already-shared relation under `name`.
    pub fn insert_shared<N: Into<String>>(&mut self, name: N, relation: WeightedRelation) {
        self.relations.insert(name.into(), relation);
    }

    /// Whether the store holds a relation under `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.relations.contains_key(name)
    }

    /// Number of stored relations.
    pub fn len(&self) -> usize {
        self.relations.len()
    }

    /// Whether the store is empty.
    pub fn is_empty(&self) -> bool {
        self.relations.is_empty()
    }
}

impl RelationStore for MemoryStore {
    fn resolve(&self, name: &str) -> Result<Option<WeightedRelation>, ArchiveError> {
        Ok(self.relations.get(name).cloned())
    }
}
