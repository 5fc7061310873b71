//! Read-only stores of named weighted relations.
//!
//! A cascade never builds rules itself; it resolves them by name from a
//! [`RelationStore`]. Two backends are provided:
//!
//! - [`FstArchive`] - a directory of rustfst-serialized relations, one
//!   `<name>.fst` file per rule
//! - [`MemoryStore`] - an in-memory map, for embedders that construct
//!   relations programmatically and for tests
//!
//! Stores are immutable once opened, so any number of cascades (or threads)
//! may resolve from the same store concurrently; [`RelationStore`] is also
//! implemented for `Arc<S>` to make that sharing explicit.

use std::io;
use std::path::PathBuf;
use std::sync::Arc;

use rustfst::fst_impls::VectorFst;
use rustfst::semirings::TropicalWeight;
use thiserror::Error;

mod far;
mod memory;

pub use far::FstArchive;
pub use memory::MemoryStore;

/// An immutable weighted finite-state relation, shared between the store
/// that owns it and the cascades that borrow it.
pub type WeightedRelation = Arc<VectorFst<TropicalWeight>>;

/// Errors raised while opening an archive or loading a relation from it.
#[derive(Debug, Error)]
pub enum ArchiveError {
    /// The archive path is missing, unreadable, or not a directory.
    #[error("cannot open archive at {path}")]
    Open {
        /// The path that failed to open.
        path: PathBuf,
        /// The underlying I/O failure.
        #[source]
        source: io::Error,
    },

    /// A relation file exists but could not be parsed.
    #[error("cannot load relation `{name}` from archive")]
    Load {
        /// Name of the relation that failed to load.
        name: String,
        /// The underlying deserialization failure.
        #[source]
        source: anyhow::Error,
    },
}

/// Capability interface for resolving named weighted relations.
///
/// `resolve` returns `Ok(None)` when the store holds no relation under
/// `name`; the cascade turns that into
/// [`RewriteError::RuleNotFound`](crate::error::RewriteError::RuleNotFound).
/// Errors are reserved for stores that exist but cannot be read.
pub trait RelationStore {
    /// Looks up the relation stored under `name`.
    fn resolve(&self, name: &str) -> Result<Option<WeightedRelation>, ArchiveError>;
}

impl<S: RelationStore + ?Sized> RelationStore for Arc<S> {
    fn resolve(&self, name: &str) -> Result<Option<WeightedRelation>, ArchiveError> {
        (**self).resolve(name)
    }
}
