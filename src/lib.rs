//! # rewrite-cascade
//!
//! Ordered weighted rewrite-rule cascades over finite-state lattices.
//!
//! A cascade applies a fixed sequence of weighted string-rewrite relations
//! (finite-state transducers over the Tropical semiring) to an input,
//! producing the set (or best subset) of candidate outputs. Typical uses
//! are text normalization, phonological and morphological rewriting, and
//! transliteration, where rules must compose in a fixed order and outputs
//! are ranked by weight.
//!
//! Rules are *consumed*, not authored, here: a [`RelationStore`] resolves
//! already-built relations by name, and the cascade composes them. The
//! automaton machinery itself (composition, determinization, shortest-path
//! search) comes from [`rustfst`].
//!
//! ## Example
//!
//! ```rust,ignore
//! use rewrite_cascade::prelude::*;
//!
//! let mut cascade = RuleCascade::from_archive("rules/")?;
//! cascade.set_rules(["digits_to_words", "lowercase"])?;
//!
//! // All candidate outputs, best-weight outputs, or a guaranteed-unique top.
//! let all = cascade.rewrites("5")?;
//! let best = cascade.optimal_rewrites("5")?;
//! let one = cascade.one_top_rewrite("5")?; // errs if the best is tied
//! ```
//!
//! [`RelationStore`]: archive::RelationStore

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod archive;
pub mod cascade;
pub mod error;
pub mod lattice;
pub mod token;

/// Common imports for convenient usage.
pub mod prelude {
    pub use crate::archive::{
        ArchiveError, FstArchive, MemoryStore, RelationStore, WeightedRelation,
    };
    pub use crate::cascade::{RewriteConfig, RuleCascade, DEFAULT_STATE_MULTIPLIER};
    pub use crate::error::{Result, RewriteError};
    pub use crate::lattice::{Lattice, RewriteInput};
    pub use crate::token::TokenScheme;
}
