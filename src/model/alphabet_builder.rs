//! Mutable building phase of an [AlphabetSet].
//!
//! States get added fundamentals first, then composites whose members are
//! resolved against the states already present (see [StateLookup]). Forward
//! references can be filled in afterward with
//! [set_members](AlphabetBuilder::set_members). Calling
//! [build](AlphabetBuilder::build) validates the member graph and freezes the
//! alphabet.

use crate::model::alphabet_error::AlphabetError;
use crate::model::alphabet_set::AlphabetSet;
use crate::model::entity::Entity;
use crate::model::state_element::{
    AlphabetKey, StateAttribute, StateElement, StateIndex, StateKind,
};
use crate::model::state_lookup::{StateLookup, StateQuery};
use std::collections::{BTreeSet, HashMap};
use tracing::{debug, warn};

// =#========================================================================#=
// SYMBOL POLICY
// =#========================================================================#=
/// How [build](AlphabetBuilder::build) treats fundamental states sharing a
/// symbol or token.
///
/// Symbols of composite states are independent of their members and never checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SymbolPolicy {
    /// Accept silently
    Ignore,
    /// Accept, but log a warning (default)
    #[default]
    Warn,
    /// Reject with [AlphabetError::DuplicateSymbol]
    Enforce,
}

// =#========================================================================#=
// ALPHABET BUILDER
// =#========================================================================#=
/// Builder collecting the states of an alphabet before it gets frozen into an
/// [AlphabetSet].
///
/// # Example
/// ```
/// use nexstate::model::{AlphabetBuilder, StateElement, StateQuery};
///
/// let mut builder = AlphabetBuilder::new("binary").with_label("Presence/absence");
/// builder.add(StateElement::single("absent").with_symbol("0"))?;
/// builder.add(StateElement::single("present").with_symbol("1"))?;
/// builder.add_ambiguous("unknown", "?", &StateQuery::by_symbols(["0", "1"]))?;
///
/// let alphabet = builder.build()?;
/// assert_eq!(alphabet.len(), 3);
/// # Ok::<(), nexstate::AlphabetError>(())
/// ```
#[derive(Debug)]
pub struct AlphabetBuilder {
    entity: Entity,
    key: AlphabetKey,
    states: Vec<StateElement>,
    id_map: HashMap<String, StateIndex>,
    symbol_policy: SymbolPolicy,
}

impl AlphabetBuilder {
    /// Creates an empty builder for an alphabet with the given identifier.
    pub fn new(id: impl Into<String>) -> Self {
        AlphabetBuilder {
            entity: Entity::new(id),
            key: AlphabetKey::next(),
            states: Vec::new(),
            id_map: HashMap::new(),
            symbol_policy: SymbolPolicy::default(),
        }
    }

    /// Attaches a label to the alphabet.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.entity.set_label(label);
        self
    }

    /// Sets how duplicate symbols/tokens of fundamental states are treated.
    pub fn with_symbol_policy(mut self, policy: SymbolPolicy) -> Self {
        self.symbol_policy = policy;
        self
    }

    /// Returns the key the built alphabet (and all its states) will carry.
    pub fn key(&self) -> AlphabetKey {
        self.key
    }

    /// Returns the number of states added so far.
    pub fn len(&self) -> usize {
        self.states.len()
    }

    /// Returns whether no state has been added yet.
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// Adds a state, assigning it the next index, which gets returned.
    ///
    /// # Arguments
    /// * `state` - The state to add; its members must already be present
    ///
    /// # Errors
    /// * [AlphabetError::DuplicateKey] if a state with the same id exists
    /// * [AlphabetError::InvalidArgument] if a member index is not (yet) present
    ///
    /// On error, the builder is left unchanged.
    pub fn add(&mut self, mut state: StateElement) -> Result<StateIndex, AlphabetError> {
        if self.id_map.contains_key(state.id()) {
            return Err(AlphabetError::DuplicateKey {
                alphabet: self.entity.id().to_string(),
                id: state.id().to_string(),
            });
        }
        self.check_members_present(state.id(), state.members())?;

        let index = self.states.len();
        state.bind(self.key, index);
        self.id_map.insert(state.id().to_string(), index);
        self.states.push(state);

        Ok(index)
    }

    /// Adds an ambiguous state whose members are resolved by `members`
    /// against the states already present. The symbol doubles as id.
    ///
    /// # Errors
    /// Same as [add](Self::add), plus lookup errors of
    /// [get_state_indices](StateLookup::get_state_indices).
    pub fn add_ambiguous(
        &mut self,
        id: &str,
        symbol: &str,
        members: &StateQuery,
    ) -> Result<StateIndex, AlphabetError> {
        let members = self.get_state_indices(members)?;
        self.add(StateElement::ambiguous(id, members).with_symbol(symbol))
    }

    /// Adds a polymorphic state whose members are resolved by `members`.
    ///
    /// # Errors
    /// Same as [add_ambiguous](Self::add_ambiguous).
    pub fn add_polymorphic(
        &mut self,
        id: &str,
        symbol: &str,
        members: &StateQuery,
    ) -> Result<StateIndex, AlphabetError> {
        let members = self.get_state_indices(members)?;
        self.add(StateElement::polymorphic(id, members).with_symbol(symbol))
    }

    /// Sets the members of an already added composite state.
    ///
    /// Allows forward references: a composite can be added with no members and
    /// completed once its members exist. Cycles are only detected by
    /// [build](Self::build).
    ///
    /// # Errors
    /// [AlphabetError::InvalidArgument] if `state` is out of range or a
    /// fundamental state, or if a member index is out of range.
    pub fn set_members(
        &mut self,
        state: StateIndex,
        members: Vec<StateIndex>,
    ) -> Result<(), AlphabetError> {
        let Some(element) = self.states.get(state) else {
            return Err(AlphabetError::invalid_argument(format!(
                "no state with index {state}"
            )));
        };
        if element.kind() == StateKind::Single {
            return Err(AlphabetError::invalid_argument(format!(
                "fundamental state '{}' cannot have members",
                element.id()
            )));
        }
        self.check_members_present(element.id(), &members)?;

        self.states[state].set_members(members);
        Ok(())
    }

    /// Validates the states and freezes them into an [AlphabetSet].
    ///
    /// Checks that
    /// - composite states have at least one member,
    /// - the member graph is acyclic,
    /// - fundamental symbols/tokens are unique, according to the [SymbolPolicy].
    ///
    /// The fundamental states of every state are resolved once here.
    ///
    /// # Errors
    /// * [AlphabetError::InvalidArgument] for a composite without members
    /// * [AlphabetError::CyclicMembers] for a cycle in the member graph
    /// * [AlphabetError::DuplicateSymbol] under [SymbolPolicy::Enforce]
    pub fn build(self) -> Result<AlphabetSet, AlphabetError> {
        if let Some(empty) = self
            .states
            .iter()
            .find(|state| state.kind().is_composite() && state.members().is_empty())
        {
            return Err(AlphabetError::invalid_argument(format!(
                "composite state '{}' has no member states",
                empty.id()
            )));
        }

        let fundamentals = resolve_fundamentals(&self.states)?;
        self.check_symbol_policy(StateAttribute::Symbol)?;
        self.check_symbol_policy(StateAttribute::Token)?;

        debug!(
            alphabet = self.entity.id(),
            num_states = self.states.len(),
            "alphabet built"
        );

        Ok(AlphabetSet::from_parts(
            self.entity,
            self.key,
            self.states,
            self.id_map,
            fundamentals,
        ))
    }

    fn check_members_present(&self, id: &str, members: &[StateIndex]) -> Result<(), AlphabetError> {
        match members.iter().find(|&&member| member >= self.states.len()) {
            Some(member) => Err(AlphabetError::invalid_argument(format!(
                "member index {member} of state '{id}' is not present in alphabet '{}'",
                self.entity.id()
            ))),
            None => Ok(()),
        }
    }

    fn check_symbol_policy(&self, attribute: StateAttribute) -> Result<(), AlphabetError> {
        if self.symbol_policy == SymbolPolicy::Ignore {
            return Ok(());
        }

        let mut seen: HashMap<&str, &StateElement> = HashMap::new();
        for state in self.states.iter().filter(|s| s.kind() == StateKind::Single) {
            let Some(value) = state.attribute(attribute).filter(|v| !v.is_empty()) else {
                continue;
            };
            if let Some(first) = seen.insert(value, state) {
                if self.symbol_policy == SymbolPolicy::Enforce {
                    return Err(AlphabetError::DuplicateSymbol {
                        attribute,
                        value: value.to_string(),
                        first: first.id().to_string(),
                        second: state.id().to_string(),
                    });
                }
                warn!(
                    alphabet = self.entity.id(),
                    %attribute,
                    value,
                    first = first.id(),
                    second = state.id(),
                    "fundamental states share a value"
                );
            }
        }

        Ok(())
    }
}

impl StateLookup for AlphabetBuilder {
    fn states(&self) -> &[StateElement] {
        &self.states
    }

    fn index_of_id(&self, id: &str) -> Option<StateIndex> {
        self.id_map.get(id).copied()
    }
}

// ============================================================================
// Fundamental state resolution (private)
// ============================================================================
/// Resolves the fundamental states of every state, failing on a cycle.
fn resolve_fundamentals(
    states: &[StateElement],
) -> Result<Vec<BTreeSet<StateIndex>>, AlphabetError> {
    let mut memo: Vec<Option<BTreeSet<StateIndex>>> = vec![None; states.len()];
    let mut on_path = vec![false; states.len()];

    for index in 0..states.len() {
        resolve_state(states, index, &mut memo, &mut on_path)?;
    }

    Ok(memo.into_iter().map(Option::unwrap_or_default).collect())
}

/// Depth-first resolution of one state; `on_path` marks the current recursion stack.
fn resolve_state(
    states: &[StateElement],
    index: StateIndex,
    memo: &mut [Option<BTreeSet<StateIndex>>],
    on_path: &mut [bool],
) -> Result<(), AlphabetError> {
    if memo[index].is_some() {
        return Ok(());
    }
    if on_path[index] {
        return Err(AlphabetError::CyclicMembers {
            id: states[index].id().to_string(),
        });
    }

    let state = &states[index];
    let fundamentals = if state.is_fundamental() {
        BTreeSet::from([index])
    } else {
        on_path[index] = true;
        let mut fundamentals = BTreeSet::new();
        for &member in state.members() {
            resolve_state(states, member, memo, on_path)?;
            if let Some(member_fundamentals) = &memo[member] {
                fundamentals.extend(member_fundamentals.iter().copied());
            }
        }
        on_path[index] = false;
        fundamentals
    };

    memo[index] = Some(fundamentals);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn binary_builder() -> AlphabetBuilder {
        let mut builder = AlphabetBuilder::new("binary");
        builder.add(StateElement::single("absent").with_symbol("0")).unwrap();
        builder.add(StateElement::single("present").with_symbol("1")).unwrap();
        builder
    }

    #[test]
    fn test_add_assigns_consecutive_indices() {
        let mut builder = binary_builder();
        let index = builder
            .add_ambiguous("unknown", "?", &StateQuery::by_ids(["absent", "present"]))
            .unwrap();
        assert_eq!(index, 2);
        assert_eq!(builder.states()[index].members(), &[0, 1]);
        assert_eq!(builder.states()[index].alphabet(), builder.key());
    }

    #[test]
    fn test_add_rejects_missing_member() {
        let mut builder = binary_builder();
        let result = builder.add(StateElement::ambiguous("unknown", vec![0, 7]));
        assert!(matches!(result, Err(AlphabetError::InvalidArgument(_))));
        assert_eq!(builder.len(), 2);
    }

    #[test]
    fn test_set_members_rejects_fundamental() {
        let mut builder = binary_builder();
        let result = builder.set_members(0, vec![1]);
        assert!(matches!(result, Err(AlphabetError::InvalidArgument(_))));
    }

    #[test]
    fn test_build_rejects_composite_without_members() {
        let mut builder = binary_builder();
        builder.add(StateElement::ambiguous("unknown", vec![])).unwrap();
        assert!(matches!(
            builder.build(),
            Err(AlphabetError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_resolve_fundamentals_nested() {
        let mut builder = binary_builder();
        let pair = builder
            .add(StateElement::ambiguous("pair", vec![0, 1]))
            .unwrap();
        let outer = builder
            .add(StateElement::polymorphic("outer", vec![pair, 0]))
            .unwrap();

        let fundamentals = resolve_fundamentals(builder.states()).unwrap();
        assert_eq!(fundamentals[0], BTreeSet::from([0]));
        assert_eq!(fundamentals[outer], BTreeSet::from([0, 1]));
    }
}
