//! Data model for discrete character-state alphabets and character matrices.
//!
//! # Alphabet representation
//! An [AlphabetSet] stores the [StateElement]s of one character type using
//! the arena pattern; states are referenced by [StateIndex]. A state is either
//! fundamental ([StateKind::Single]) or composite
//! ([StateKind::Ambiguous]/[StateKind::Polymorphic]) with member states given
//! as indices into the same arena.
//!
//! | Type | Role |
//! |------|------|
//! | [AlphabetBuilder] | Mutable phase: add states, resolve members, [build](AlphabetBuilder::build) |
//! | [AlphabetSet] | Frozen alphabet: lookup, fundamental states, matching |
//! | [StateRef] | Copyable handle of a state (alphabet key + index) |
//!
//! # Lookup
//! 1. [StateLookup::get_state]: exact lookup by id, symbol or token
//! 2. [StateLookup::get_states]: ordered batch lookup per [StateQuery]
//! 3. [AlphabetSet::match_state]: state whose fundamental set equals the query
//!
//! The first two fail with [AlphabetError::NotFound], the third returns `None`.
//!
//! # Character matrices
//! A [CharacterBlock] links a [TaxaBlock] to rows of [StateRef]s, checked
//! against its registered alphabets and [CharacterColumn]s.

pub mod alphabet_builder;
pub mod alphabet_error;
pub mod alphabet_set;
pub mod character_block;
pub mod entity;
pub mod state_element;
pub mod state_lookup;
pub mod taxa_block;

// Alphabets
pub use alphabet_builder::AlphabetBuilder;
pub use alphabet_builder::SymbolPolicy;
pub use alphabet_error::AlphabetError;
pub use alphabet_set::AlphabetSet;
// States
pub use state_element::AlphabetKey;
pub use state_element::StateAttribute;
pub use state_element::StateElement;
pub use state_element::StateIndex;
pub use state_element::StateKind;
pub use state_element::StateRef;
pub use state_lookup::StateLookup;
pub use state_lookup::StateQuery;
// Matrices
pub use character_block::CharacterBlock;
pub use character_block::CharacterColumn;
pub use character_block::ColumnIndex;
pub use entity::Entity;
pub use taxa_block::TaxaBlock;
pub use taxa_block::TaxonIndex;
