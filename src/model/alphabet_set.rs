//! Frozen, read-only character-state alphabet.
//!
//! Provides [AlphabetSet], holding the states of one character type in an
//! arena, and the three tiers of lookup on it:
//! 1. exact lookup of one state by id, symbol or token ([StateLookup::get_state])
//! 2. ordered batch lookup ([StateLookup::get_states])
//! 3. matching by set of fundamental states ([AlphabetSet::match_state])

use crate::model::alphabet_builder::AlphabetBuilder;
use crate::model::alphabet_error::AlphabetError;
use crate::model::entity::Entity;
use crate::model::state_element::{AlphabetKey, StateAttribute, StateElement, StateIndex, StateRef};
use crate::model::state_lookup::{StateLookup, StateQuery};
use std::collections::{BTreeSet, HashMap};
use std::fmt;

// =#========================================================================#=
// ALPHABET SET
// =#========================================================================#=
/// The set of legal states for one character type (e.g. all DNA states).
///
/// States are stored in insertion order and referenced by [StateIndex]; member
/// relations of composite states are indices into the same arena. An
/// [AlphabetSet] can only be obtained from [AlphabetBuilder::build], which
/// guarantees the member graph is acyclic, so it is immutable and can be
/// shared freely (e.g. via [Arc](std::sync::Arc)) between readers.
///
/// The fundamental states of each state are resolved once during the build.
///
/// # Example
/// ```
/// use nexstate::alphabets;
/// use nexstate::model::StateQuery;
///
/// let dna = alphabets::dna()?;
/// let n = dna.match_state(&StateQuery::new().with_symbol_chars("ACGT"))?;
/// assert_eq!(n.and_then(|state| state.symbol()), Some("N"));
/// # Ok::<(), nexstate::AlphabetError>(())
/// ```
#[derive(Debug, Clone)]
pub struct AlphabetSet {
    entity: Entity,
    key: AlphabetKey,
    /// States of this alphabet (arena pattern)
    states: Vec<StateElement>,
    /// Map from state id to its index
    id_map: HashMap<String, StateIndex>,
    /// Fundamental states per state, parallel to `states`
    fundamentals: Vec<BTreeSet<StateIndex>>,
}

// ============================================================================
// New, Getters / Accessors, etc. (pub)
// ============================================================================
impl AlphabetSet {
    pub(crate) fn from_parts(
        entity: Entity,
        key: AlphabetKey,
        states: Vec<StateElement>,
        id_map: HashMap<String, StateIndex>,
        fundamentals: Vec<BTreeSet<StateIndex>>,
    ) -> Self {
        AlphabetSet {
            entity,
            key,
            states,
            id_map,
            fundamentals,
        }
    }

    /// Creates an [AlphabetBuilder] for a new alphabet.
    pub fn builder(id: impl Into<String>) -> AlphabetBuilder {
        AlphabetBuilder::new(id)
    }

    pub fn id(&self) -> &str {
        self.entity.id()
    }

    pub fn label(&self) -> Option<&str> {
        self.entity.label()
    }

    pub fn entity(&self) -> &Entity {
        &self.entity
    }

    /// Returns the process-unique key carried by all states of this alphabet.
    pub fn key(&self) -> AlphabetKey {
        self.key
    }

    /// Returns the number of states.
    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// Iterates over all states in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, StateElement> {
        self.states.iter()
    }

    /// Returns the state at `index`, if present.
    pub fn state(&self, index: StateIndex) -> Option<&StateElement> {
        self.states.get(index)
    }

    /// Returns the handle of the state at `index`, if present.
    pub fn state_ref(&self, index: StateIndex) -> Option<StateRef> {
        self.state(index).map(StateElement::state_ref)
    }

    /// Returns the state a [StateRef] points to, if it belongs to this alphabet.
    pub fn resolve(&self, state_ref: StateRef) -> Option<&StateElement> {
        if state_ref.alphabet == self.key {
            self.state(state_ref.index)
        } else {
            None
        }
    }

    /// Returns whether the [StateRef] denotes a state of this alphabet.
    pub fn contains(&self, state_ref: StateRef) -> bool {
        self.resolve(state_ref).is_some()
    }

    /// Returns whether the state at `index` resolves to itself only.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds.
    pub fn is_fundamental(&self, index: StateIndex) -> bool {
        self.states[index].is_fundamental()
    }
}

// ============================================================================
// Fundamental states (pub)
// ============================================================================
impl AlphabetSet {
    /// Returns the indices of all fundamental states transitively reachable
    /// from the state at `index` through its members.
    ///
    /// A state without members resolves to the singleton set of itself.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds.
    pub fn fundamental_states(&self, index: StateIndex) -> &BTreeSet<StateIndex> {
        &self.fundamentals[index]
    }

    /// Returns the ids of the fundamental states of the state at `index`.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds.
    pub fn fundamental_ids(&self, index: StateIndex) -> BTreeSet<&str> {
        self.fundamental_values(index, StateAttribute::Id)
    }

    /// Returns the non-empty symbols of the fundamental states of the state at `index`.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds.
    pub fn fundamental_symbols(&self, index: StateIndex) -> BTreeSet<&str> {
        self.fundamental_values(index, StateAttribute::Symbol)
    }

    /// Returns the non-empty tokens of the fundamental states of the state at `index`.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds.
    pub fn fundamental_tokens(&self, index: StateIndex) -> BTreeSet<&str> {
        self.fundamental_values(index, StateAttribute::Token)
    }

    /// Projects the fundamental states to one attribute, dropping absent and empty values.
    fn fundamental_values(&self, index: StateIndex, attribute: StateAttribute) -> BTreeSet<&str> {
        self.fundamentals[index]
            .iter()
            .filter_map(|&fundamental| self.states[fundamental].attribute(attribute))
            .filter(|value| !value.is_empty())
            .collect()
    }
}

// ============================================================================
// Matching and resolving (pub)
// ============================================================================
impl AlphabetSet {
    /// Finds the first state whose set of fundamental ids/symbols/tokens is
    /// *exactly* the set of values in `query`.
    ///
    /// Matching is set equality, not subset or superset: in the DNA alphabet,
    /// symbols "ACG" match "V" but never "N".
    /// Duplicate query values collapse; an empty value set matches nothing.
    ///
    /// # Returns
    /// * `Ok(Some(state))` - first match in insertion order
    /// * `Ok(None)` - no state represents exactly this set
    ///
    /// # Errors
    /// [AlphabetError::InvalidArgument] if the query has none or several selectors.
    pub fn match_state(&self, query: &StateQuery) -> Result<Option<&StateElement>, AlphabetError> {
        let (attribute, values) = query.selector()?;
        let requested: BTreeSet<&str> = values.iter().map(String::as_str).collect();
        if requested.is_empty() {
            return Ok(None);
        }

        Ok(self
            .states
            .iter()
            .find(|state| self.fundamental_values(state.index(), attribute) == requested))
    }

    /// Resolves raw symbol text to the one state representing it.
    ///
    /// A single character is looked up as exact symbol; longer text is taken
    /// as set of fundamental symbols (e.g. "AG" resolves to "R" in DNA).
    ///
    /// # Errors
    /// * [AlphabetError::NotFound] if no state represents `text`
    /// * [AlphabetError::InvalidArgument] if `text` is empty
    pub fn resolve_symbols(&self, text: &str) -> Result<&StateElement, AlphabetError> {
        let mut chars = text.chars();
        match (chars.next(), chars.next()) {
            (None, _) => Err(AlphabetError::invalid_argument("cannot resolve empty symbol text")),
            (Some(_), None) => self.get_state(StateAttribute::Symbol, text),
            (Some(_), Some(_)) => self
                .match_state(&StateQuery::new().with_symbol_chars(text))?
                .ok_or_else(|| AlphabetError::not_found(StateAttribute::Symbol, text)),
        }
    }

    /// Resolves each character of `sequence` as one exact symbol, e.g. a
    /// row of a character matrix such as "ACGTN-".
    ///
    /// # Errors
    /// [AlphabetError::NotFound] for the first unknown symbol.
    pub fn resolve_symbol_sequence(&self, sequence: &str) -> Result<Vec<StateRef>, AlphabetError> {
        let mut buf = [0u8; 4];
        sequence
            .chars()
            .map(|c| {
                self.get_state(StateAttribute::Symbol, c.encode_utf8(&mut buf))
                    .map(StateElement::state_ref)
            })
            .collect()
    }
}

impl StateLookup for AlphabetSet {
    fn states(&self) -> &[StateElement] {
        &self.states
    }

    fn index_of_id(&self, id: &str) -> Option<StateIndex> {
        self.id_map.get(id).copied()
    }
}

impl std::ops::Index<StateIndex> for AlphabetSet {
    type Output = StateElement;

    fn index(&self, index: StateIndex) -> &Self::Output {
        &self.states[index]
    }
}

impl<'a> IntoIterator for &'a AlphabetSet {
    type Item = &'a StateElement;
    type IntoIter = std::slice::Iter<'a, StateElement>;

    fn into_iter(self) -> Self::IntoIter {
        self.states.iter()
    }
}

impl fmt::Display for AlphabetSet {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "AlphabetSet {} ({} states):", self.entity, self.states.len())?;
        for state in &self.states {
            write!(f, "  [{}] {} '{}'", state.index(), state.id(), state)?;
            if !state.is_fundamental() {
                let symbols: Vec<&str> = self.fundamental_symbols(state.index()).into_iter().collect();
                write!(f, " -> {{{}}}", symbols.join(","))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens_alphabet() -> AlphabetSet {
        let mut builder = AlphabetSet::builder("morph");
        builder
            .add(StateElement::single("s0").with_token("red"))
            .unwrap();
        builder
            .add(StateElement::single("s1").with_token("blue"))
            .unwrap();
        builder.add(StateElement::single("s2")).unwrap();
        builder
            .add(StateElement::polymorphic("s01", vec![0, 1]).with_token("purple"))
            .unwrap();
        builder
            .add(StateElement::ambiguous("all", vec![0, 1, 2]))
            .unwrap();
        builder.build().unwrap()
    }

    #[test]
    fn test_fundamental_tokens_drop_absent() {
        let alphabet = tokens_alphabet();
        assert_eq!(alphabet.fundamental_tokens(4), BTreeSet::from(["blue", "red"]));
        assert_eq!(alphabet.fundamental_ids(4), BTreeSet::from(["s0", "s1", "s2"]));
        assert!(alphabet.fundamental_tokens(2).is_empty());
    }

    #[test]
    fn test_match_state_by_tokens() {
        let alphabet = tokens_alphabet();
        let purple = alphabet
            .match_state(&StateQuery::by_tokens(["blue", "red"]))
            .unwrap()
            .unwrap();
        assert_eq!(purple.id(), "s01");
    }

    #[test]
    fn test_match_state_empty_query_matches_nothing() {
        let alphabet = tokens_alphabet();
        let none = alphabet
            .match_state(&StateQuery::by_tokens(Vec::<String>::new()))
            .unwrap();
        assert!(none.is_none());
    }

    #[test]
    fn test_resolve_foreign_ref() {
        let alphabet = tokens_alphabet();
        let other = tokens_alphabet();
        let foreign = other.state_ref(0).unwrap();
        assert!(!alphabet.contains(foreign));
        assert!(other.contains(foreign));
    }

    #[test]
    fn test_fundamental_values_drop_empty_strings() {
        let mut builder = AlphabetSet::builder("blank");
        builder
            .add(StateElement::single("a").with_symbol("A").with_token(""))
            .unwrap();
        builder
            .add(StateElement::single("b").with_symbol("").with_token("bee"))
            .unwrap();
        builder
            .add(StateElement::ambiguous("c", vec![0, 1]).with_symbol("C"))
            .unwrap();
        let alphabet = builder.build().unwrap();

        assert_eq!(alphabet.fundamental_symbols(2), BTreeSet::from(["A"]));
        assert_eq!(alphabet.fundamental_tokens(2), BTreeSet::from(["bee"]));
        assert!(alphabet.fundamental_tokens(0).is_empty());

        // "b" has only an empty symbol, so "A" alone is represented by "a"
        let a = alphabet
            .match_state(&StateQuery::by_symbols(["A"]))
            .unwrap()
            .unwrap();
        assert_eq!(a.id(), "a");
        let none = alphabet.match_state(&StateQuery::by_symbols([""])).unwrap();
        assert!(none.is_none());
    }

    #[test]
    #[should_panic]
    fn test_fundamental_states_out_of_bounds() {
        let alphabet = tokens_alphabet();
        alphabet.fundamental_states(alphabet.len());
    }
}
