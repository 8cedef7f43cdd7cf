//! Construction tables of the standard alphabets.
//!
//! Composite entries are `(id, symbol, member symbols)`; every member symbol
//! denotes a fundamental state added before.

/// Id and symbol of the gap state shared by all standard alphabets
pub(crate) const GAP: (&str, &str) = ("GAP", "-");

/// Nucleotide bases in order; the fourth base is T for DNA and U for RNA.
pub(crate) const DNA_BASES: [&str; 4] = ["A", "C", "G", "T"];

pub(crate) const RNA_BASES: [&str; 4] = ["A", "C", "G", "U"];

/// IUPAC nucleotide ambiguity codes, members written with the DNA base T.
///
/// Missing data "?" includes the gap, "N" only the four bases.
pub(crate) const NUCLEOTIDE_AMBIGUITIES: &[(&str, &str, &str)] = &[
    ("MISSING", "?", "ACGT-"),
    ("N", "N", "ACGT"),
    ("M", "M", "AC"),
    ("R", "R", "AG"),
    ("W", "W", "AT"),
    ("S", "S", "CG"),
    ("Y", "Y", "CT"),
    ("K", "K", "GT"),
    ("V", "V", "ACG"),
    ("H", "H", "ACT"),
    ("D", "D", "AGT"),
    ("B", "B", "CGT"),
];

/// Ancestral and derived state of an infinite-sites character, as `(id, symbol)`
pub(crate) const INFINITE_SITES: [(&str, &str); 2] = [("ANCESTRAL", "0"), ("DERIVED", "1")];

/// The 20 standard amino acids (one-letter codes).
pub(crate) const AMINO_ACIDS: &str = "ARNDCQEGHILKMFPSTWYV";

/// Stop codon state
pub(crate) const STOP: (&str, &str) = ("STOP", "*");

/// IUPAC amino acid ambiguity codes; `X` and `?` members are added separately.
pub(crate) const AMINO_ACID_AMBIGUITIES: &[(&str, &str, &str)] = &[
    ("B", "B", "DN"),
    ("Z", "Z", "EQ"),
    ("J", "J", "IL"),
];
