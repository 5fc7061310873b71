//! Lattice construction and extraction.
//!
//! A *lattice* is the weighted acceptor left after composing an input with
//! every rule in a cascade, in order. Building one and reading strings out
//! of it are kept separate:
//!
//! - [`rewrite_lattice`] composes an input through an ordered rule list
//! - the extraction functions ([`strings`], [`nshortest`], [`top_string`],
//!   [`one_top_string`], [`to_dfa`], [`intersects`]) each implement one of
//!   the result policies, as pure functions over a built lattice
//!
//! All functions operate on the Tropical semiring, where lower weights are
//! better and path weight is the sum of arc weights.

mod build;
mod extract;
mod prune;

pub use build::{rewrite_lattice, RewriteInput};
pub use extract::{
    intersects, nshortest, one_top_string, ranked_strings, strings, to_dfa, top_string,
};

use rustfst::fst_impls::VectorFst;
use rustfst::semirings::TropicalWeight;

/// The weighted acceptor produced by composing an input through a cascade.
pub type Lattice = VectorFst<TropicalWeight>;
