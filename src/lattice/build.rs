//! Composing an input through an ordered rule list.

use rustfst::algorithms::compose::compose;
use rustfst::algorithms::rm_epsilon::rm_epsilon;
use rustfst::algorithms::{project, ProjectType};
use rustfst::fst_traits::CoreFst;
use rustfst::prelude::*;

use super::Lattice;
use crate::archive::WeightedRelation;
use crate::error::{Result, RewriteError};
use crate::token::TokenScheme;

/// Input to a rewrite operation: raw text or a pre-built automaton.
///
/// Raw text is converted to a linear acceptor under the operation's token
/// scheme, once, at the public-API boundary. A pre-built automaton is used
/// as-is, which lets callers rewrite a whole set of inputs (or a weighted
/// distribution over inputs) in one call.
#[derive(Debug, Clone)]
pub enum RewriteInput {
    /// A string to be encoded under the operation's input token scheme.
    Text(String),
    /// An already-built acceptor over the first rule's input alphabet.
    Automaton(Lattice),
}

impl RewriteInput {
    pub(crate) fn into_acceptor(self, scheme: &TokenScheme) -> Result<Lattice> {
        match self {
            RewriteInput::Text(text) => scheme.acceptor(&text),
            RewriteInput::Automaton(fst) => Ok(fst),
        }
    }
}

impl From<&str> for RewriteInput {
    fn from(text: &str) -> Self {
        RewriteInput::Text(text.to_string())
    }
}

impl From<String> for RewriteInput {
    fn from(text: String) -> Self {
        RewriteInput::Text(text)
    }
}

impl From<Lattice> for RewriteInput {
    fn from(fst: Lattice) -> Self {
        RewriteInput::Automaton(fst)
    }
}

/// Applies an ordered rule list to an input, producing the output lattice.
///
/// Each step composes the current lattice with the next rule, projects the
/// result onto its output side, and removes epsilons, so the value passed to
/// step `i + 1` is always an epsilon-free acceptor over rule `i`'s output
/// alphabet. The returned lattice holds every candidate rewrite with its
/// combined weight.
///
/// # Errors
///
/// - [`RewriteError::EmptyRuleList`] if `rules` is empty; checked before any
///   composition
/// - [`RewriteError::ComposeFailure`] naming the rule position whose
///   composition produced an empty automaton (an input outside the rule's
///   domain)
pub fn rewrite_lattice(
    input: RewriteInput,
    rules: &[WeightedRelation],
    scheme: &TokenScheme,
) -> Result<Lattice> {
    if rules.is_empty() {
        return Err(RewriteError::EmptyRuleList);
    }
    let mut lattice = input.into_acceptor(scheme)?;
    for (index, rule) in rules.iter().enumerate() {
        lattice = apply_rule(&lattice, rule.as_ref(), index)?;
    }
    Ok(lattice)
}

fn apply_rule(lattice: &Lattice, rule: &Lattice, index: usize) -> Result<Lattice> {
    let mut next: Lattice = compose::<TropicalWeight, Lattice, Lattice, Lattice, _, _>(lattice, rule)?;
    project(&mut next, ProjectType::ProjectOutput);
    rm_epsilon(&mut next)?;
    if next.start().is_none() {
        return Err(RewriteError::ComposeFailure { rule: index });
    }
    Ok(next)
}
