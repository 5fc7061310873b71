//! Token schemes for string/automaton conversion.
//!
//! A [`TokenScheme`] decides how a string becomes a linear acceptor on the
//! way into a cascade and how an output label sequence becomes a string on
//! the way out. The two directions round-trip: any string a scheme can
//! encode decodes back to itself (for [`TokenScheme::Symbols`], modulo
//! whitespace normalization to single spaces).

use std::sync::Arc;

use rustfst::fst_impls::VectorFst;
use rustfst::semirings::{Semiring, TropicalWeight};
use rustfst::utils::acceptor;
use rustfst::{Label, SymbolTable, EPS_LABEL};
use smallvec::SmallVec;

use crate::error::{Result, RewriteError};

/// How strings map to automaton labels and back.
#[derive(Debug, Clone, Default)]
pub enum TokenScheme {
    /// One label per byte. The default, and the cheapest scheme for
    /// byte-oriented rule alphabets.
    #[default]
    Byte,
    /// One label per Unicode scalar value.
    Utf8,
    /// Whitespace-separated tokens looked up in a symbol table. Decoded
    /// symbols are joined with a single space.
    Symbols(Arc<SymbolTable>),
}

impl TokenScheme {
    /// Encodes `text` into a label sequence under this scheme.
    ///
    /// Fails with [`RewriteError::UnknownToken`] when a symbol-table scheme
    /// meets a token the table does not contain.
    pub fn encode(&self, text: &str) -> Result<SmallVec<[Label; 32]>> {
        match self {
            TokenScheme::Byte => Ok(text.bytes().map(|b| b as Label).collect()),
            TokenScheme::Utf8 => Ok(text.chars().map(|c| c as u32 as Label).collect()),
            TokenScheme::Symbols(table) => {
                let mut labels = SmallVec::new();
                for token in text.split_whitespace() {
                    match table.get_label(token) {
                        Some(label) => labels.push(label),
                        None => {
                            return Err(RewriteError::UnknownToken {
                                token: token.to_string(),
                            })
                        }
                    }
                }
                Ok(labels)
            }
        }
    }

    /// Builds a linear unweighted acceptor for `text`.
    pub fn acceptor(&self, text: &str) -> Result<VectorFst<TropicalWeight>> {
        let labels = self.encode(text)?;
        Ok(acceptor(&labels, TropicalWeight::one()))
    }

    /// Decodes an output label sequence back into a string.
    ///
    /// Epsilon labels are skipped. Fails with [`RewriteError::Decode`] when
    /// a label has no representation under this scheme.
    pub fn decode(&self, labels: &[Label]) -> Result<String> {
        let labels = labels.iter().copied().filter(|&l| l != EPS_LABEL);
        match self {
            TokenScheme::Byte => {
                let bytes = labels
                    .map(|l| u8::try_from(l).map_err(|_| RewriteError::Decode { label: l }))
                    .collect::<Result<Vec<u8>>>()?;
                String::from_utf8(bytes).map_err(RewriteError::DecodeUtf8)
            }
            TokenScheme::Utf8 => labels
                .map(|l| {
                    u32::try_from(l)
                        .ok()
                        .and_then(char::from_u32)
                        .ok_or(RewriteError::Decode { label: l })
                })
                .collect(),
            TokenScheme::Symbols(table) => {
                let symbols = labels
                    .map(|l| {
                        table
                            .get_symbol(l)
                            .ok_or(RewriteError::Decode { label: l })
                    })
                    .collect::<Result<Vec<&str>>>()?;
                Ok(symbols.join(" "))
            }
        }
    }
}
