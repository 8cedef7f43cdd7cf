//! Error type for alphabet construction, lookup and character blocks.

use crate::model::state_element::StateAttribute;
use thiserror::Error;

// =#========================================================================#=
// ALPHABET ERROR
// =#========================================================================#=
/// Errors raised while building alphabets, looking up states or filling
/// character blocks.
///
/// Note that probing with
/// [match_state](crate::model::AlphabetSet::match_state) for an unknown
/// combination of states is not an error but returns `Ok(None)`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AlphabetError {
    /// A state with the same identifier already exists in the alphabet.
    #[error("Duplicate state id '{id}' in alphabet '{alphabet}'")]
    DuplicateKey { alphabet: String, id: String },

    /// Two fundamental states share a symbol or token
    /// (only under [SymbolPolicy::Enforce](crate::model::SymbolPolicy::Enforce)).
    #[error("Fundamental states '{first}' and '{second}' share the {attribute} '{value}'")]
    DuplicateSymbol {
        attribute: StateAttribute,
        value: String,
        first: String,
        second: String,
    },

    /// No state has the requested attribute value.
    #[error("No state with {attribute} '{value}'")]
    NotFound {
        attribute: StateAttribute,
        value: String,
    },

    /// Malformed query, foreign state or inconsistent input.
    #[error("Invalid argument - {0}")]
    InvalidArgument(String),

    /// The member-state graph contains a cycle through the named state.
    #[error("State '{id}' (transitively) contains itself as member")]
    CyclicMembers { id: String },
}

impl AlphabetError {
    /// Convenience constructor for [NotFound](Self::NotFound)
    pub fn not_found(attribute: StateAttribute, value: &str) -> Self {
        AlphabetError::NotFound {
            attribute,
            value: value.to_string(),
        }
    }

    /// Convenience constructor for [InvalidArgument](Self::InvalidArgument)
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        AlphabetError::InvalidArgument(msg.into())
    }
}
