//! Error types for rewrite operations.

use rustfst::Label;
use thiserror::Error;

use crate::archive::ArchiveError;

/// Errors that can occur while configuring a cascade or rewriting a string.
#[derive(Debug, Error)]
pub enum RewriteError {
    /// A rule name requested via `set_rules` has no relation in the store.
    #[error("cannot find rule: {0}")]
    RuleNotFound(String),

    /// A rewrite operation was invoked before any rules were configured.
    #[error("no rules requested")]
    NoRules,

    /// The lattice builder was handed an empty rule list.
    #[error("empty rule list")]
    EmptyRuleList,

    /// Composing the lattice with a rule produced an empty automaton.
    ///
    /// `rule` is the zero-based position of the rule in the active list.
    #[error("composition failure at rule {rule}")]
    ComposeFailure {
        /// Position of the rule that rejected the intermediate lattice.
        rule: usize,
    },

    /// A unique-result operation found more than one best-weight output.
    #[error("multiple top rewrites found: {first} and {second}")]
    Ambiguous {
        /// The first optimal output encountered.
        first: String,
        /// A second, distinct optimal output.
        second: String,
    },

    /// The lattice has no accepting path to extract.
    #[error("lattice has no accepting path")]
    EmptyLattice,

    /// A whitespace-separated token was not found in the symbol table.
    #[error("token `{token}` is not in the symbol table")]
    UnknownToken {
        /// The offending token.
        token: String,
    },

    /// An output label could not be mapped back to the token scheme.
    #[error("label {label} cannot be decoded")]
    Decode {
        /// The label with no representation under the scheme.
        label: Label,
    },

    /// Byte-scheme output labels did not form valid UTF-8.
    #[error("decoded bytes are not valid UTF-8")]
    DecodeUtf8(#[source] std::string::FromUtf8Error),

    /// The relation archive failed to open or load a relation.
    #[error(transparent)]
    Archive(#[from] ArchiveError),

    /// An underlying automaton algorithm failed.
    #[error(transparent)]
    Fst(#[from] anyhow::Error),
}

/// A specialized `Result` type for rewrite operations.
pub type Result<T> = std::result::Result<T, RewriteError>;
