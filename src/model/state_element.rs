//! Character-state definitions.
//!
//! Provides:
//! * [StateElement] - a single state of an alphabet, either fundamental or
//!   composite (ambiguous/polymorphic) with member states
//! * [StateKind] - the kind tag of a state
//! * [StateAttribute] - the attributes states can be looked up by
//! * [StateIndex], [AlphabetKey] and [StateRef] - how states are referenced

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// Index of a state in its alphabet (arena).
pub type StateIndex = usize;

/// *Before insertion only*, index of a state not yet added to an alphabet.
const NO_INDEX_SET: StateIndex = usize::MAX;

/// Source of process-unique alphabet keys; 0 is reserved for unbound states.
static NEXT_ALPHABET_KEY: AtomicU64 = AtomicU64::new(1);

// =#========================================================================#=
// ALPHABET KEY
// =#========================================================================#=
/// Process-unique key of an alphabet, assigned when its builder is created.
///
/// Lets a [StateRef] name the alphabet it belongs to without holding a
/// reference to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AlphabetKey(u64);

impl AlphabetKey {
    /// Key of states that have not been added to any alphabet.
    pub const UNBOUND: AlphabetKey = AlphabetKey(0);

    pub(crate) fn next() -> Self {
        AlphabetKey(NEXT_ALPHABET_KEY.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for AlphabetKey {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

// =#========================================================================#=
// STATE REF
// =#========================================================================#=
/// Reference-comparable handle of a state: its alphabet key plus its index.
///
/// Two [StateRef]s are equal exactly when they denote the same state object
/// of the same alphabet. Character block rows store these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StateRef {
    /// Key of the owning alphabet
    pub alphabet: AlphabetKey,
    /// Index of the state within the owning alphabet
    pub index: StateIndex,
}

impl fmt::Display for StateRef {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}:{}", self.alphabet, self.index)
    }
}

// =#========================================================================#=
// STATE KIND / ATTRIBUTE
// =#========================================================================#=
/// Kind tag of a [StateElement].
///
/// Ambiguous ("any one of") and polymorphic ("all of") states resolve to
/// fundamental states the same way; the tag only carries the meaning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StateKind {
    /// Fundamental, unambiguous state without members
    Single,
    /// Could be any one of its member states
    Ambiguous,
    /// Is jointly all of its member states
    Polymorphic,
}

impl StateKind {
    /// Returns `true` for [Ambiguous](Self::Ambiguous) and
    /// [Polymorphic](Self::Polymorphic).
    pub fn is_composite(&self) -> bool {
        !matches!(self, StateKind::Single)
    }
}

/// Attribute of a [StateElement] that lookups match against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StateAttribute {
    Id,
    Symbol,
    Token,
}

impl fmt::Display for StateAttribute {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            StateAttribute::Id => write!(f, "id"),
            StateAttribute::Symbol => write!(f, "symbol"),
            StateAttribute::Token => write!(f, "token"),
        }
    }
}

// =#========================================================================#=
// STATE ELEMENT
// =#========================================================================#=
/// A single character-state definition.
///
/// # Invariants
/// - `id` is unique within the owning alphabet (enforced on insertion)
/// - A [StateKind::Single] state has no members and is its own only fundamental state
/// - Composite states have at least one member (checked when the alphabet is built)
/// - Members are indices into the same alphabet; the member graph is acyclic
///   (checked when the alphabet is built)
/// - `index` and `alphabet` are assigned on insertion into an
///   [AlphabetBuilder](crate::model::AlphabetBuilder)
///
/// Fundamental states, ids, symbols and tokens are resolved through the owning
/// [AlphabetSet](crate::model::AlphabetSet), which holds the arena.
#[derive(Debug, Clone, PartialEq)]
pub struct StateElement {
    index: StateIndex,
    alphabet: AlphabetKey,
    id: String,
    label: Option<String>,
    symbol: Option<String>,
    token: Option<String>,
    kind: StateKind,
    members: Vec<StateIndex>,
}

impl StateElement {
    fn new(id: String, kind: StateKind, members: Vec<StateIndex>) -> Self {
        StateElement {
            index: NO_INDEX_SET,
            alphabet: AlphabetKey::UNBOUND,
            id,
            label: None,
            symbol: None,
            token: None,
            kind,
            members,
        }
    }

    /// Creates a new fundamental state.
    ///
    /// # Arguments
    /// * `id` - Identifier, unique within the alphabet it will be added to
    pub fn single(id: impl Into<String>) -> Self {
        Self::new(id.into(), StateKind::Single, Vec::new())
    }

    /// Creates a new ambiguous state.
    ///
    /// # Arguments
    /// * `id` - Identifier, unique within the alphabet it will be added to
    /// * `members` - Indices of member states; may be left empty and set later via
    ///   [AlphabetBuilder::set_members](crate::model::AlphabetBuilder::set_members)
    pub fn ambiguous(id: impl Into<String>, members: Vec<StateIndex>) -> Self {
        Self::new(id.into(), StateKind::Ambiguous, members)
    }

    /// Creates a new polymorphic state.
    ///
    /// # Arguments
    /// * `id` - Identifier, unique within the alphabet it will be added to
    /// * `members` - Indices of member states; may be left empty and set later
    pub fn polymorphic(id: impl Into<String>, members: Vec<StateIndex>) -> Self {
        Self::new(id.into(), StateKind::Polymorphic, members)
    }

    /// Attaches a symbol (e.g. "A", "N", "?").
    pub fn with_symbol(mut self, symbol: impl Into<String>) -> Self {
        self.symbol = Some(symbol.into());
        self
    }

    /// Attaches a token (alternate rendering).
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Attaches a label.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Returns the index of this state in its alphabet.
    pub fn index(&self) -> StateIndex {
        self.index
    }

    /// Returns the key of the owning alphabet.
    pub fn alphabet(&self) -> AlphabetKey {
        self.alphabet
    }

    /// Returns the reference-comparable handle of this state.
    pub fn state_ref(&self) -> StateRef {
        StateRef {
            alphabet: self.alphabet,
            index: self.index,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    pub fn symbol(&self) -> Option<&str> {
        self.symbol.as_deref()
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn kind(&self) -> StateKind {
        self.kind
    }

    /// Returns the indices of the direct member states (empty for fundamental states).
    pub fn members(&self) -> &[StateIndex] {
        &self.members
    }

    /// Returns `true` if this state has no members, i.e. it resolves to itself.
    pub fn is_fundamental(&self) -> bool {
        self.members.is_empty()
    }

    /// Returns the value of the given attribute, if set.
    pub fn attribute(&self, attribute: StateAttribute) -> Option<&str> {
        match attribute {
            StateAttribute::Id => Some(&self.id),
            StateAttribute::Symbol => self.symbol(),
            StateAttribute::Token => self.token(),
        }
    }

    pub(crate) fn bind(&mut self, alphabet: AlphabetKey, index: StateIndex) {
        self.alphabet = alphabet;
        self.index = index;
    }

    pub(crate) fn set_members(&mut self, members: Vec<StateIndex>) {
        self.members = members;
    }
}

impl fmt::Display for StateElement {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match &self.symbol {
            Some(symbol) => write!(f, "{}", symbol),
            None => write!(f, "{}", self.id),
        }
    }
}
