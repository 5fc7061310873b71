//! Extraction policies over a built lattice.
//!
//! Each policy is a pure function: existence testing, full enumeration,
//! bounded top-N, unique-top with tie detection, and optimal-weight
//! enumeration. Policies that transform the lattice (determinization,
//! n-shortest pruning) return a new automaton and leave the input untouched.

use std::cmp::Ordering;

use rustfst::algorithms::compose::{compose_with_config, ComposeConfig, ComposeFilterEnum};
use rustfst::algorithms::determinize::determinize;
use rustfst::algorithms::{shortest_path, shortest_path_with_config, ShortestPathConfig};
use rustfst::prelude::*;
use tracing::warn;

use super::prune::prune_to_optimal;
use super::Lattice;
use crate::error::{Result, RewriteError};
use crate::token::TokenScheme;

// Fixed headroom granted before the multiplier kicks in.
const STATE_HEADROOM: usize = 256;

/// Whether `target` shares at least one string with the lattice.
///
/// The two acceptors are composed under the sequence filter, which sidesteps
/// the epsilon-path ambiguity of naive intersection; the language is
/// non-empty iff the connected result still has a start state.
pub fn intersects(lattice: &Lattice, target: &Lattice) -> Result<bool> {
    let mut config = ComposeConfig::default();
    config.compose_filter = ComposeFilterEnum::SequenceFilter;
    config.connect = true;
    let composed: Lattice =
        compose_with_config::<TropicalWeight, Lattice, Lattice, _, _, Lattice>(lattice, target, config)?;
    Ok(composed.start().is_some())
}

/// Determinizes a lattice, optionally restricted to optimal-weight paths.
///
/// With `optimal_only`, the lattice is first pruned to the states and arcs
/// that lie on some minimal-weight accepting path, so the resulting DFA
/// holds exactly the strings tied at the best weight. Without it, every
/// distinct output string survives with its best weight.
///
/// Determinization can blow up: if the result exceeds
/// `256 + state_multiplier * lattice.num_states()` states, a warning is
/// emitted. The full result is still returned; the bound is a degradation
/// signal, not a truncation.
pub fn to_dfa(lattice: &Lattice, optimal_only: bool, state_multiplier: usize) -> Result<Lattice> {
    let source = if optimal_only {
        prune_to_optimal(lattice)?
    } else {
        lattice.clone()
    };
    let dfa: Lattice = determinize(&source)?;
    let threshold = STATE_HEADROOM + state_multiplier * lattice.num_states();
    if dfa.num_states() > threshold {
        warn!(
            states = dfa.num_states(),
            threshold, "determinized lattice exceeded the state threshold; consider a higher state multiplier"
        );
    }
    Ok(dfa)
}

/// Decodes every accepted path of an acyclic lattice.
///
/// Enumeration order is the path iterator's; callers needing weight order
/// should go through [`ranked_strings`].
pub fn strings(lattice: &Lattice, scheme: &TokenScheme) -> Result<Vec<String>> {
    lattice
        .paths_iter()
        .map(|path| scheme.decode(&path.olabels))
        .collect()
}

/// Decodes every accepted path, sorted by non-decreasing path weight.
///
/// The sort is stable, so equal-weight strings keep their enumeration order
/// across runs.
pub fn ranked_strings(lattice: &Lattice, scheme: &TokenScheme) -> Result<Vec<String>> {
    let mut pairs = lattice
        .paths_iter()
        .map(|path| Ok((*path.weight.value(), scheme.decode(&path.olabels)?)))
        .collect::<Result<Vec<(f32, String)>>>()?;
    pairs.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(Ordering::Equal));
    Ok(pairs.into_iter().map(|(_, string)| string).collect())
}

/// Prunes a lattice to its `n` lowest-weight paths over unique strings.
pub fn nshortest(lattice: &Lattice, n: usize) -> Result<Lattice> {
    let mut config = ShortestPathConfig::default();
    config.nshortest = n;
    config.unique = true;
    Ok(shortest_path_with_config(lattice, config)?)
}

/// Decodes the single best path, ignoring ties.
pub fn top_string(lattice: &Lattice, scheme: &TokenScheme) -> Result<String> {
    let best: Lattice = shortest_path(lattice)?;
    match best.paths_iter().next() {
        Some(path) => scheme.decode(&path.olabels),
        None => Err(RewriteError::EmptyLattice),
    }
}

/// Decodes the unique best string of an optimal-only DFA.
///
/// Fails with [`RewriteError::Ambiguous`] when a second optimal path
/// exists; picking one arbitrarily would hide a genuine tie from callers.
pub fn one_top_string(dfa: &Lattice, scheme: &TokenScheme) -> Result<String> {
    let mut paths = dfa.paths_iter();
    let first = match paths.next() {
        Some(path) => scheme.decode(&path.olabels)?,
        None => return Err(RewriteError::EmptyLattice),
    };
    if let Some(second) = paths.next() {
        return Err(RewriteError::Ambiguous {
            first,
            second: scheme.decode(&second.olabels)?,
        });
    }
    Ok(first)
}
