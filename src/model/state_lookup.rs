//! Exact state lookup shared by alphabet builder and frozen alphabet.
//!
//! This module provides:
//! - [StateQuery]: selector of the values to look up (by ids, symbols or tokens)
//! - [StateLookup]: trait with exact single and batch lookup on top of a state arena

use crate::model::alphabet_error::AlphabetError;
use crate::model::state_element::{StateAttribute, StateElement, StateIndex};
use tracing::trace;

// =#========================================================================#=
// STATE QUERY
// =#========================================================================#=
/// Values to look states up by, for exactly one [StateAttribute].
///
/// Each selector is an ordered sequence of values. For symbols and tokens, a
/// single string can also be given whose individual characters are the values
/// (see [with_symbol_chars](Self::with_symbol_chars)).
///
/// Setting no selector or more than one is a caller mistake, reported as
/// [AlphabetError::InvalidArgument] once the query is used.
///
/// # Example
/// ```
/// use nexstate::model::StateQuery;
///
/// let by_symbols = StateQuery::by_symbols(["A", "C"]);
/// let by_chars = StateQuery::new().with_symbol_chars("AC");
/// assert_eq!(by_symbols, by_chars);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StateQuery {
    ids: Option<Vec<String>>,
    symbols: Option<Vec<String>>,
    tokens: Option<Vec<String>>,
}

fn collect_values<I, S>(values: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    values.into_iter().map(Into::into).collect()
}

fn collect_chars(text: &str) -> Vec<String> {
    text.chars().map(String::from).collect()
}

impl StateQuery {
    /// Creates an empty query; set exactly one selector before using it.
    pub fn new() -> Self {
        Self::default()
    }

    /// Shorthand for a query selecting by ids.
    pub fn by_ids<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new().with_ids(ids)
    }

    /// Shorthand for a query selecting by symbols.
    pub fn by_symbols<I, S>(symbols: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new().with_symbols(symbols)
    }

    /// Shorthand for a query selecting by tokens.
    pub fn by_tokens<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new().with_tokens(tokens)
    }

    pub fn with_ids<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.ids = Some(collect_values(ids));
        self
    }

    pub fn with_symbols<I, S>(mut self, symbols: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.symbols = Some(collect_values(symbols));
        self
    }

    pub fn with_tokens<I, S>(mut self, tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tokens = Some(collect_values(tokens));
        self
    }

    /// Selects by symbols, taking each character of `text` as one symbol.
    pub fn with_symbol_chars(mut self, text: &str) -> Self {
        self.symbols = Some(collect_chars(text));
        self
    }

    /// Selects by tokens, taking each character of `text` as one token.
    pub fn with_token_chars(mut self, text: &str) -> Self {
        self.tokens = Some(collect_chars(text));
        self
    }

    /// Returns the single selected attribute together with its values.
    ///
    /// # Errors
    /// [AlphabetError::InvalidArgument] if none or more than one selector is set.
    pub fn selector(&self) -> Result<(StateAttribute, &[String]), AlphabetError> {
        let selectors = [
            (StateAttribute::Id, &self.ids),
            (StateAttribute::Symbol, &self.symbols),
            (StateAttribute::Token, &self.tokens),
        ];

        let mut chosen = selectors
            .into_iter()
            .filter_map(|(attribute, values)| values.as_deref().map(|v| (attribute, v)));

        match (chosen.next(), chosen.next()) {
            (Some(selected), None) => Ok(selected),
            (None, _) => Err(AlphabetError::invalid_argument(
                "query needs one of ids, symbols or tokens",
            )),
            (Some(_), Some(_)) => Err(AlphabetError::invalid_argument(
                "query must select by only one of ids, symbols or tokens",
            )),
        }
    }
}

// =#========================================================================#=
// STATE LOOKUP (Trait)
// =#========================================================================#=
/// Exact lookup of states by id, symbol or token.
///
/// Implemented by [AlphabetBuilder](crate::model::AlphabetBuilder), so
/// composite states can resolve their members while the alphabet is built,
/// and by the frozen [AlphabetSet](crate::model::AlphabetSet).
///
/// Attribute equality is exact: no case folding, no partial match.
pub trait StateLookup {
    /// All states in insertion order; position equals [StateIndex].
    fn states(&self) -> &[StateElement];

    /// Returns the index of the state with the given identifier, if any.
    fn index_of_id(&self, id: &str) -> Option<StateIndex>;

    /// Returns the state whose `attribute` equals `value`.
    ///
    /// Ids are found via map; symbols and tokens by linear scan, returning the
    /// first match in insertion order.
    ///
    /// # Errors
    /// [AlphabetError::NotFound] if no state matches.
    fn get_state(
        &self,
        attribute: StateAttribute,
        value: &str,
    ) -> Result<&StateElement, AlphabetError> {
        let found = match attribute {
            StateAttribute::Id => self.index_of_id(value).map(|index| &self.states()[index]),
            StateAttribute::Symbol | StateAttribute::Token => self
                .states()
                .iter()
                .find(|state| state.attribute(attribute) == Some(value)),
        };

        found.ok_or_else(|| {
            trace!(%attribute, value, "state lookup failed");
            AlphabetError::not_found(attribute, value)
        })
    }

    /// Looks up each value of the query in order, keeping duplicates and positions.
    ///
    /// # Errors
    /// * [AlphabetError::InvalidArgument] if the query has none or several selectors
    /// * [AlphabetError::NotFound] for the first value without match;
    ///   no partial result is returned
    fn get_states(&self, query: &StateQuery) -> Result<Vec<&StateElement>, AlphabetError> {
        let (attribute, values) = query.selector()?;
        values
            .iter()
            .map(|value| self.get_state(attribute, value))
            .collect()
    }

    /// Same as [get_states](Self::get_states), but returns the state indices,
    /// as needed for member lists of composite states.
    fn get_state_indices(&self, query: &StateQuery) -> Result<Vec<StateIndex>, AlphabetError> {
        Ok(self
            .get_states(query)?
            .into_iter()
            .map(StateElement::index)
            .collect())
    }
}
