//! Nexstate is a library for the discrete character-state alphabets of
//! phylogenetic character matrices (Nexus, NeXML).
//!
//! Core functionality provided:
//! - Alphabets: states are fundamental (e.g. a nucleotide) or composite,
//!   i.e. ambiguous ("any of", e.g. `N`) or polymorphic ("all of"),
//!   built through [AlphabetBuilder] and frozen into [AlphabetSet].
//! - Lookup: exact by id, symbol or token, ordered in batches, or by the set
//!   of fundamental states a composite resolves to. So raw input like `"AG"`
//!   resolves to the one canonical state `R`.
//! - Standard alphabets: DNA, RNA and protein with IUPAC ambiguity codes,
//!   plus binary infinite sites, see [alphabets].
//! - Character blocks: rows of states per taxon, validated against the
//!   registered alphabets, see [CharacterBlock](crate::model::CharacterBlock).
//! - States are stored using the arena pattern, so no direct references
//!   between states are held, only [StateIndex](crate::model::StateIndex)
//!   values; rows hold [StateRef](crate::model::StateRef) handles.
//!
//! Limitations:
//! - No parsing or writing of any file format
//! - Only discrete characters
//!
//! # Usage patterns
//! 1. Use a standard alphabet via [dna_alphabet] and friends.
//! 2. Build your own with [AlphabetBuilder], e.g. for morphological characters.
//!
//! ## Example Standard Alphabet
//! ```
//! use nexstate::dna_alphabet;
//! use nexstate::model::{StateAttribute, StateLookup, StateQuery};
//!
//! let dna = dna_alphabet()?;
//! let r = dna.match_state(&StateQuery::new().with_symbol_chars("AG"))?.unwrap();
//! assert_eq!(r.symbol(), Some("R"));
//!
//! let n = dna.get_state(StateAttribute::Symbol, "N")?;
//! assert_eq!(dna.fundamental_symbols(n.index()).len(), 4);
//! # Ok::<(), nexstate::AlphabetError>(())
//! ```
//!
//! ## Example Custom Alphabet
//! ```
//! use nexstate::model::{AlphabetBuilder, StateElement, StateQuery, SymbolPolicy};
//!
//! let mut builder = AlphabetBuilder::new("wings")
//!     .with_symbol_policy(SymbolPolicy::Enforce);
//! builder.add(StateElement::single("none").with_symbol("0").with_token("wingless"))?;
//! builder.add(StateElement::single("short").with_symbol("1"))?;
//! builder.add(StateElement::single("long").with_symbol("2"))?;
//! builder.add_polymorphic("dimorphic", "P", &StateQuery::by_ids(["short", "long"]))?;
//! let wings = builder.build()?;
//!
//! let dimorphic = wings.resolve_symbols("12")?;
//! assert_eq!(dimorphic.id(), "dimorphic");
//! # Ok::<(), nexstate::AlphabetError>(())
//! ```

pub mod alphabets;
pub mod model;

pub use crate::model::AlphabetBuilder;
pub use crate::model::AlphabetError;
pub use crate::model::AlphabetSet;

use crate::alphabets::StandardAlphabet;

// ============================================================================
// Quick Alphabet API
// ============================================================================
/// Builds the standard DNA alphabet (17 states).
///
/// See [`alphabets::dna`] for full documentation.
pub fn dna_alphabet() -> Result<AlphabetSet, AlphabetError> {
    alphabets::dna()
}

/// Builds the standard RNA alphabet (17 states).
///
/// See [`alphabets::rna`] for full documentation.
pub fn rna_alphabet() -> Result<AlphabetSet, AlphabetError> {
    alphabets::rna()
}

/// Builds the standard protein alphabet (27 states).
///
/// See [`alphabets::protein`] for full documentation.
pub fn protein_alphabet() -> Result<AlphabetSet, AlphabetError> {
    alphabets::protein()
}

/// Builds the standard alphabet for a NEXUS `DATATYPE` name
/// ("DNA", "Nucleotide", "RNA", "Protein", "InfSites"; case-insensitive).
///
/// # Errors
/// [AlphabetError::InvalidArgument] for any other name.
pub fn alphabet_for_datatype(name: &str) -> Result<AlphabetSet, AlphabetError> {
    StandardAlphabet::from_name(name)
        .ok_or_else(|| AlphabetError::invalid_argument(format!("unknown datatype '{name}'")))?
        .build()
}
