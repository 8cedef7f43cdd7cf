//! Standard character-state alphabets.
//!
//! Each alphabet is a fixed construction recipe over [AlphabetBuilder]:
//! fundamental states first, then composite states whose members are looked
//! up by symbol among the fundamentals already added.
//!
//! | Alphabet | Fundamental states | Composite states |
//! |----------|--------------------|------------------|
//! | [dna] | `A C G T -` | `? N M R W S Y K V H D B` |
//! | [rna] | `A C G U -` | `? N M R W S Y K V H D B` |
//! | [protein] | 20 amino acids, `*`, `-` | `B Z J X ?` |
//! | [infinite_sites] | `0 1` | none |
//!
//! In all of them `?` (missing) covers every fundamental state including the
//! gap, while `N` (nucleotides) and `X` (amino acids) exclude gap and stop.
//!
//! Rows over the nucleotide alphabets can be summarized as [BaseFrequencies].
//!
//! # Example
//! ```
//! use nexstate::alphabets;
//!
//! let dna = alphabets::dna()?;
//! assert_eq!(dna.len(), 17);
//! assert_eq!(dna.resolve_symbols("AG")?.symbol(), Some("R"));
//! # Ok::<(), nexstate::AlphabetError>(())
//! ```

mod defs;
mod frequencies;

pub use self::frequencies::BaseFrequencies;

use self::defs::{
    AMINO_ACID_AMBIGUITIES, AMINO_ACIDS, DNA_BASES, GAP, INFINITE_SITES, NUCLEOTIDE_AMBIGUITIES,
    RNA_BASES, STOP,
};
use crate::model::{AlphabetBuilder, AlphabetError, AlphabetSet, StateElement, StateQuery, SymbolPolicy};

// =#========================================================================#=
// STANDARD ALPHABET
// =#========================================================================#=
/// The standard alphabets this crate can build.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StandardAlphabet {
    Dna,
    Rna,
    Protein,
    /// Binary characters under the infinite-sites model
    InfiniteSites,
}

impl StandardAlphabet {
    /// Parse a NEXUS `DATATYPE` name (case-insensitive) into a [StandardAlphabet].
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "dna" | "nucleotide" => Some(StandardAlphabet::Dna),
            "rna" => Some(StandardAlphabet::Rna),
            "protein" => Some(StandardAlphabet::Protein),
            "infinitesites" | "infsites" => Some(StandardAlphabet::InfiniteSites),
            _ => None,
        }
    }

    /// Returns the id the built alphabet carries.
    pub fn id(&self) -> &'static str {
        match self {
            StandardAlphabet::Dna => "DNA",
            StandardAlphabet::Rna => "RNA",
            StandardAlphabet::Protein => "Protein",
            StandardAlphabet::InfiniteSites => "InfiniteSites",
        }
    }

    /// Builds a fresh instance of this alphabet.
    ///
    /// # Errors
    /// None expected for the fixed recipes; errors of the underlying
    /// [AlphabetBuilder] are passed on.
    pub fn build(self) -> Result<AlphabetSet, AlphabetError> {
        match self {
            StandardAlphabet::Dna => nucleotides(self.id(), "Deoxyribonucleotides", DNA_BASES),
            StandardAlphabet::Rna => nucleotides(self.id(), "Ribonucleotides", RNA_BASES),
            StandardAlphabet::Protein => amino_acids(self.id()),
            StandardAlphabet::InfiniteSites => infinite_sites_recipe(self.id()),
        }
    }
}

// ============================================================================
// QUICK API (public)
// ============================================================================
/// Builds the DNA alphabet: bases `A C G T`, gap `-`, missing `?` and the
/// eleven IUPAC ambiguity codes (17 states).
pub fn dna() -> Result<AlphabetSet, AlphabetError> {
    StandardAlphabet::Dna.build()
}

/// Builds the RNA alphabet; same as [dna] with `U` in place of `T`.
pub fn rna() -> Result<AlphabetSet, AlphabetError> {
    StandardAlphabet::Rna.build()
}

/// Builds the protein alphabet: 20 amino acids, stop `*`, gap `-`,
/// `B`, `Z`, `J`, any amino acid `X` and missing `?` (27 states).
pub fn protein() -> Result<AlphabetSet, AlphabetError> {
    StandardAlphabet::Protein.build()
}

/// Builds the infinite-sites alphabet: ancestral `0` and derived `1`.
pub fn infinite_sites() -> Result<AlphabetSet, AlphabetError> {
    StandardAlphabet::InfiniteSites.build()
}

// ============================================================================
// Recipes (private)
// ============================================================================
fn nucleotides(id: &str, label: &str, bases: [&str; 4]) -> Result<AlphabetSet, AlphabetError> {
    let mut builder = AlphabetBuilder::new(id)
        .with_label(label)
        .with_symbol_policy(SymbolPolicy::Enforce);

    for base in bases {
        builder.add(StateElement::single(base).with_symbol(base))?;
    }
    builder.add(StateElement::single(GAP.0).with_symbol(GAP.1))?;

    let fourth_base = bases[3];
    for &(code_id, symbol, members) in NUCLEOTIDE_AMBIGUITIES {
        let members = members.replace('T', fourth_base);
        builder.add_ambiguous(code_id, symbol, &StateQuery::new().with_symbol_chars(&members))?;
    }

    builder.build()
}

fn amino_acids(id: &str) -> Result<AlphabetSet, AlphabetError> {
    let mut builder = AlphabetBuilder::new(id)
        .with_label("Amino acids")
        .with_symbol_policy(SymbolPolicy::Enforce);

    let mut buf = [0u8; 4];
    for code in AMINO_ACIDS.chars() {
        let code = code.encode_utf8(&mut buf);
        builder.add(StateElement::single(&*code).with_symbol(&*code))?;
    }
    builder.add(StateElement::single(STOP.0).with_symbol(STOP.1))?;
    builder.add(StateElement::single(GAP.0).with_symbol(GAP.1))?;

    for &(code_id, symbol, members) in AMINO_ACID_AMBIGUITIES {
        builder.add_ambiguous(code_id, symbol, &StateQuery::new().with_symbol_chars(members))?;
    }
    builder.add_ambiguous("X", "X", &StateQuery::new().with_symbol_chars(AMINO_ACIDS))?;

    let everything = format!("{AMINO_ACIDS}{}{}", STOP.1, GAP.1);
    builder.add_ambiguous("MISSING", "?", &StateQuery::new().with_symbol_chars(&everything))?;

    builder.build()
}

fn infinite_sites_recipe(id: &str) -> Result<AlphabetSet, AlphabetError> {
    let mut builder = AlphabetBuilder::new(id)
        .with_label("Infinite sites")
        .with_symbol_policy(SymbolPolicy::Enforce);

    for (state_id, symbol) in INFINITE_SITES {
        builder.add(StateElement::single(state_id).with_symbol(symbol))?;
    }

    builder.build()
}
