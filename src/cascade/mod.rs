//! Ordered application of named rewrite rules.
//!
//! A [`RuleCascade`] owns a handle to a [`RelationStore`] and an ordered
//! list of resolved rules. Configuration (`set_rules`) and rewriting are the
//! only two phases: rewrites borrow the cascade immutably, so the borrow
//! checker enforces that nobody reconfigures a cascade mid-rewrite.
//!
//! Every rewrite operation builds the same lattice and then diverges only in
//! how strings are extracted from it; see [`crate::lattice`] for the
//! policies.

use std::path::Path;

use rustfst::algorithms::tr_sort;
use rustfst::prelude::*;

use crate::archive::{FstArchive, RelationStore, WeightedRelation};
use crate::error::{Result, RewriteError};
use crate::lattice::{self, Lattice, RewriteInput};
use crate::token::TokenScheme;

/// Default cap multiplier for determinization blow-up.
pub const DEFAULT_STATE_MULTIPLIER: usize = 4;

/// Per-operation knobs shared by the `_with_config` rewrite variants.
///
/// The defaults (byte tokens on both sides, state multiplier of 4) match the
/// plain operation methods.
#[derive(Debug, Clone)]
pub struct RewriteConfig {
    /// Scheme used to encode text inputs into acceptors.
    pub input_scheme: TokenScheme,
    /// Scheme used to decode output labels into strings, and to encode the
    /// candidate output of [`RuleCascade::matches`].
    pub output_scheme: TokenScheme,
    /// Multiplier for the determinization state threshold; a determinized
    /// lattice larger than `256 + multiplier * lattice_states` triggers a
    /// degradation warning.
    pub state_multiplier: usize,
}

impl Default for RewriteConfig {
    fn default() -> Self {
        Self {
            input_scheme: TokenScheme::Byte,
            output_scheme: TokenScheme::Byte,
            state_multiplier: DEFAULT_STATE_MULTIPLIER,
        }
    }
}

/// A series of weighted rewrite rules applied in order to a string.
///
/// Rules are resolved by name from the store, arc-sorted on input label once
/// at resolution time, and composed in list order on every rewrite call.
///
/// # Example
///
/// ```rust,ignore
/// use rewrite_cascade::prelude::*;
///
/// let mut cascade = RuleCascade::from_archive("rules/")?;
/// cascade.set_rules(["digits_to_words", "lowercase"])?;
///
/// assert!(cascade.matches("5", "five")?);
/// let best = cascade.top_rewrite("5")?;
/// let all = cascade.rewrites("5")?;
/// ```
#[derive(Debug, Clone)]
pub struct RuleCascade<S: RelationStore = FstArchive> {
    store: S,
    rules: Vec<WeightedRelation>,
}

impl RuleCascade<FstArchive> {
    /// Opens the archive at `path` and wraps it in an unconfigured cascade.
    ///
    /// Fails with [`ArchiveError::Open`](crate::archive::ArchiveError::Open)
    /// when the path is invalid or unreadable. Call
    /// [`set_rules`](Self::set_rules) before rewriting.
    pub fn from_archive<P: AsRef<Path>>(path: P) -> Result<Self> {
        Ok(Self::new(FstArchive::open(path)?))
    }
}

impl<S: RelationStore> RuleCascade<S> {
    /// Wraps an already-open store in an unconfigured cascade.
    pub fn new(store: S) -> Self {
        Self {
            store,
            rules: Vec::new(),
        }
    }

    /// The store this cascade resolves rules from.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Number of currently configured rules.
    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }

    /// Resolves `names` in order and replaces the active rule list.
    ///
    /// Each resolved relation is arc-sorted on input label here, once, so
    /// rewrite calls compose without re-sorting. The replacement is atomic:
    /// names resolve into a fresh list that is swapped in only when every
    /// name succeeds, so a failed call leaves the previous configuration
    /// intact.
    ///
    /// # Errors
    ///
    /// [`RewriteError::RuleNotFound`] naming the first unresolved rule, or
    /// [`RewriteError::Archive`] if the store itself fails.
    pub fn set_rules<I, N>(&mut self, names: I) -> Result<()>
    where
        I: IntoIterator<Item = N>,
        N: AsRef<str>,
    {
        let mut resolved = Vec::new();
        for name in names {
            let name = name.as_ref();
            match self.store.resolve(name)? {
                Some(relation) => {
                    let mut sorted = (*relation).clone();
                    tr_sort(&mut sorted, ILabelCompare {});
                    resolved.push(WeightedRelation::new(sorted));
                }
                None => return Err(RewriteError::RuleNotFound(name.to_string())),
            }
        }
        self.rules = resolved;
        Ok(())
    }

    /// Whether the cascade maps `input` to `output`.
    ///
    /// True iff `output` is among the strings of `input`'s rewrite lattice.
    pub fn matches<I, O>(&self, input: I, output: O) -> Result<bool>
    where
        I: Into<RewriteInput>,
        O: Into<RewriteInput>,
    {
        self.matches_with_config(input, output, &RewriteConfig::default())
    }

    /// [`matches`](Self::matches) with explicit token schemes.
    pub fn matches_with_config<I, O>(
        &self,
        input: I,
        output: O,
        config: &RewriteConfig,
    ) -> Result<bool>
    where
        I: Into<RewriteInput>,
        O: Into<RewriteInput>,
    {
        let lattice = self.lattice(input.into(), config)?;
        let target = output.into().into_acceptor(&config.output_scheme)?;
        lattice::intersects(&lattice, &target)
    }

    /// All rewrites of `input`, one entry per distinct output string.
    pub fn rewrites<I: Into<RewriteInput>>(&self, input: I) -> Result<Vec<String>> {
        self.rewrites_with_config(input, &RewriteConfig::default())
    }

    /// [`rewrites`](Self::rewrites) with explicit schemes and state bound.
    pub fn rewrites_with_config<I: Into<RewriteInput>>(
        &self,
        input: I,
        config: &RewriteConfig,
    ) -> Result<Vec<String>> {
        let lattice = self.lattice(input.into(), config)?;
        let dfa = lattice::to_dfa(&lattice, false, config.state_multiplier)?;
        lattice::strings(&dfa, &config.output_scheme)
    }

    /// The `n` best rewrites of `input`, in non-decreasing weight order.
    pub fn top_rewrites<I: Into<RewriteInput>>(&self, input: I, n: usize) -> Result<Vec<String>> {
        self.top_rewrites_with_config(input, n, &RewriteConfig::default())
    }

    /// [`top_rewrites`](Self::top_rewrites) with explicit token schemes.
    pub fn top_rewrites_with_config<I: Into<RewriteInput>>(
        &self,
        input: I,
        n: usize,
        config: &RewriteConfig,
    ) -> Result<Vec<String>> {
        let lattice = self.lattice(input.into(), config)?;
        let pruned = lattice::nshortest(&lattice, n)?;
        lattice::ranked_strings(&pruned, &config.output_scheme)
    }

    /// One best rewrite of `input`, resolving ties arbitrarily.
    pub fn top_rewrite<I: Into<RewriteInput>>(&self, input: I) -> Result<String> {
        self.top_rewrite_with_config(input, &RewriteConfig::default())
    }

    /// [`top_rewrite`](Self::top_rewrite) with explicit token schemes.
    pub fn top_rewrite_with_config<I: Into<RewriteInput>>(
        &self,
        input: I,
        config: &RewriteConfig,
    ) -> Result<String> {
        let lattice = self.lattice(input.into(), config)?;
        lattice::top_string(&lattice, &config.output_scheme)
    }

    /// The best rewrite of `input`, unless there is a tie.
    ///
    /// Fails with [`RewriteError::Ambiguous`] when two or more distinct
    /// strings share the minimal weight.
    pub fn one_top_rewrite<I: Into<RewriteInput>>(&self, input: I) -> Result<String> {
        self.one_top_rewrite_with_config(input, &RewriteConfig::default())
    }

    /// [`one_top_rewrite`](Self::one_top_rewrite) with explicit schemes and
    /// state bound.
    pub fn one_top_rewrite_with_config<I: Into<RewriteInput>>(
        &self,
        input: I,
        config: &RewriteConfig,
    ) -> Result<String> {
        let lattice = self.lattice(input.into(), config)?;
        let dfa = lattice::to_dfa(&lattice, true, config.state_multiplier)?;
        lattice::one_top_string(&dfa, &config.output_scheme)
    }

    /// Every rewrite of `input` tied at the minimal weight.
    pub fn optimal_rewrites<I: Into<RewriteInput>>(&self, input: I) -> Result<Vec<String>> {
        self.optimal_rewrites_with_config(input, &RewriteConfig::default())
    }

    /// [`optimal_rewrites`](Self::optimal_rewrites) with explicit schemes
    /// and state bound.
    pub fn optimal_rewrites_with_config<I: Into<RewriteInput>>(
        &self,
        input: I,
        config: &RewriteConfig,
    ) -> Result<Vec<String>> {
        let lattice = self.lattice(input.into(), config)?;
        let dfa = lattice::to_dfa(&lattice, true, config.state_multiplier)?;
        lattice::strings(&dfa, &config.output_scheme)
    }

    fn lattice(&self, input: RewriteInput, config: &RewriteConfig) -> Result<Lattice> {
        if self.rules.is_empty() {
            return Err(RewriteError::NoRules);
        }
        lattice::rewrite_lattice(input, &self.rules, &config.input_scheme)
    }
}
