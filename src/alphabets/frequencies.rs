//! Nucleotide base frequencies of a sequence of states.

use super::defs::GAP;
use crate::model::{AlphabetError, AlphabetSet, StateElement};
use std::fmt;

// =#========================================================================#=
// BASE FREQUENCIES
// =#========================================================================#=
/// Relative frequencies of the four nucleotide bases.
///
/// The fourth base is T for DNA and U for RNA; both are counted as `t`.
/// Defaults to the uniform distribution (0.25 each).
///
/// # Example
/// ```
/// use nexstate::alphabets::{self, BaseFrequencies};
///
/// let dna = alphabets::dna()?;
/// let freqs = BaseFrequencies::of_sequence(&dna, "AAGC-T", true)?;
/// assert!((freqs.a() - 0.4).abs() < 1e-10);
/// assert!((freqs.r() - 0.6).abs() < 1e-10);
/// # Ok::<(), nexstate::AlphabetError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BaseFrequencies {
    /// Frequencies of A, C, G and T/U, in this order
    freqs: [f64; 4],
}

impl Default for BaseFrequencies {
    fn default() -> Self {
        BaseFrequencies { freqs: [0.25; 4] }
    }
}

impl BaseFrequencies {
    pub fn new(a: f64, c: f64, g: f64, t: f64) -> Self {
        BaseFrequencies {
            freqs: [a, c, g, t],
        }
    }

    /// Counts the bases among `states`.
    ///
    /// Only fundamental bases are counted per base. Ambiguous and polymorphic
    /// states count towards the total but towards no base. Gaps count towards
    /// the total unless `ignore_gaps` is set.
    ///
    /// # Errors
    /// [AlphabetError::InvalidArgument] if
    /// - a fundamental state is neither a nucleotide base nor the gap,
    /// - nothing is left to count (empty input, or only gaps with `ignore_gaps`).
    pub fn count<'a, I>(states: I, ignore_gaps: bool) -> Result<Self, AlphabetError>
    where
        I: IntoIterator<Item = &'a StateElement>,
    {
        let mut counts = [0usize; 4];
        let mut total = 0usize;

        for state in states {
            if !state.is_fundamental() {
                total += 1;
                continue;
            }
            match state.id() {
                "A" => counts[0] += 1,
                "C" => counts[1] += 1,
                "G" => counts[2] += 1,
                "T" | "U" => counts[3] += 1,
                id if id == GAP.0 => {
                    if !ignore_gaps {
                        total += 1;
                    }
                    continue;
                }
                id => {
                    return Err(AlphabetError::invalid_argument(format!(
                        "state '{id}' is not a nucleotide base"
                    )));
                }
            }
            total += 1;
        }

        if total == 0 {
            return Err(AlphabetError::invalid_argument("no states to count base frequencies of"));
        }

        let total = total as f64;
        Ok(BaseFrequencies {
            freqs: counts.map(|count| count as f64 / total),
        })
    }

    /// Resolves `sequence` symbol by symbol in `alphabet` and counts its bases.
    ///
    /// # Errors
    /// [AlphabetError::NotFound] for an unknown symbol, otherwise as [count](Self::count).
    pub fn of_sequence(
        alphabet: &AlphabetSet,
        sequence: &str,
        ignore_gaps: bool,
    ) -> Result<Self, AlphabetError> {
        let states = alphabet.resolve_symbol_sequence(sequence)?;
        Self::count(
            states.into_iter().filter_map(|state| alphabet.resolve(state)),
            ignore_gaps,
        )
    }

    pub fn a(&self) -> f64 {
        self.freqs[0]
    }

    pub fn c(&self) -> f64 {
        self.freqs[1]
    }

    pub fn g(&self) -> f64 {
        self.freqs[2]
    }

    /// Frequency of T (DNA) or U (RNA).
    pub fn t(&self) -> f64 {
        self.freqs[3]
    }

    /// Frequency of the purines (A, G).
    pub fn r(&self) -> f64 {
        self.a() + self.g()
    }

    /// Frequency of the pyrimidines (C, T/U).
    pub fn y(&self) -> f64 {
        self.c() + self.t()
    }

    /// Returns the frequencies of A, C, G and T/U.
    pub fn as_array(&self) -> [f64; 4] {
        self.freqs
    }
}

impl fmt::Display for BaseFrequencies {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "A={:.4} C={:.4} G={:.4} T={:.4}",
            self.a(),
            self.c(),
            self.g(),
            self.t()
        )
    }
}
