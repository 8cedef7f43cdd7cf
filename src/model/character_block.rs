//! Character matrix linking taxa to rows of character states.
//!
//! Provides [CharacterColumn], assigning an alphabet to a column, and
//! [CharacterBlock], mapping taxa of a [TaxaBlock] to rows of [StateRef]s.

use crate::alphabets::BaseFrequencies;
use crate::model::alphabet_error::AlphabetError;
use crate::model::alphabet_set::AlphabetSet;
use crate::model::entity::Entity;
use crate::model::state_element::{AlphabetKey, StateElement, StateRef};
use crate::model::taxa_block::{TaxaBlock, TaxonIndex};
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::debug;

/// Index of a column in a [CharacterBlock].
pub type ColumnIndex = usize;

// =#========================================================================#=
// CHARACTER COLUMN
// =#========================================================================#=
/// A column of a character matrix, governed by one alphabet.
///
/// Refers to its alphabet by [AlphabetKey] only; the alphabet itself is owned
/// by the [CharacterBlock] it gets registered with.
#[derive(Debug, Clone, PartialEq)]
pub struct CharacterColumn {
    entity: Entity,
    alphabet: AlphabetKey,
}

impl CharacterColumn {
    /// Creates a new column whose legal states are those of `alphabet`.
    pub fn new(id: impl Into<String>, alphabet: &AlphabetSet) -> Self {
        CharacterColumn {
            entity: Entity::new(id),
            alphabet: alphabet.key(),
        }
    }

    /// Attaches a label to this column.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.entity.set_label(label);
        self
    }

    pub fn id(&self) -> &str {
        self.entity.id()
    }

    pub fn label(&self) -> Option<&str> {
        self.entity.label()
    }

    /// Returns the key of the alphabet governing this column.
    pub fn alphabet(&self) -> AlphabetKey {
        self.alphabet
    }
}

// =#========================================================================#=
// CHARACTER BLOCK
// =#========================================================================#=
/// A character matrix: per taxon one row of states.
///
/// # Structure
/// - Registered alphabets are shared read-only ([Arc]); rows only store
///   [StateRef]s into them.
/// - Columns are optional. Without columns, a row can have any length; with
///   columns, a row has one state per column, taken from that column's alphabet.
/// - Rows are keyed by [TaxonIndex] of the linked [TaxaBlock].
///
/// # Invariants
/// - Every state in a row belongs to one of the registered alphabets
///   (enforced by [set_row](Self::set_row))
/// - Every column's alphabet is registered (enforced by [add_column](Self::add_column))
///
/// Row mutation requires `&mut self`; concurrent population needs external
/// synchronization.
///
/// # Example
/// ```
/// use nexstate::alphabets;
/// use nexstate::model::{CharacterBlock, TaxaBlock};
/// use std::sync::Arc;
///
/// let taxa = Arc::new(TaxaBlock::from_labels("taxa", ["Kea", "Kaka"]));
/// let dna = Arc::new(alphabets::dna()?);
///
/// let mut block = CharacterBlock::new("chars", taxa);
/// block.add_alphabet_set(dna.clone());
/// block.set_row(0, dna.resolve_symbol_sequence("ACGTN")?)?;
///
/// assert_eq!(block.row_symbols(0).as_deref(), Some("ACGTN"));
/// # Ok::<(), nexstate::AlphabetError>(())
/// ```
#[derive(Debug, Clone)]
pub struct CharacterBlock {
    entity: Entity,
    taxa: Arc<TaxaBlock>,
    alphabets: Vec<Arc<AlphabetSet>>,
    columns: Vec<CharacterColumn>,
    rows: BTreeMap<TaxonIndex, Vec<StateRef>>,
}

impl CharacterBlock {
    /// Creates an empty block linked to `taxa`.
    pub fn new(id: impl Into<String>, taxa: Arc<TaxaBlock>) -> Self {
        CharacterBlock {
            entity: Entity::new(id),
            taxa,
            alphabets: Vec::new(),
            columns: Vec::new(),
            rows: BTreeMap::new(),
        }
    }

    /// Attaches a label to this block.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.entity.set_label(label);
        self
    }

    pub fn id(&self) -> &str {
        self.entity.id()
    }

    pub fn label(&self) -> Option<&str> {
        self.entity.label()
    }

    /// Returns the linked taxa.
    pub fn taxa(&self) -> &TaxaBlock {
        &self.taxa
    }

    /// Registers an alphabet, returning its key; registering it again has no effect.
    pub fn add_alphabet_set(&mut self, alphabet: Arc<AlphabetSet>) -> AlphabetKey {
        let key = alphabet.key();
        if self.alphabet(key).is_none() {
            debug!(block = self.id(), alphabet = alphabet.id(), "alphabet registered");
            self.alphabets.push(alphabet);
        }
        key
    }

    /// Appends a column, returning its index.
    ///
    /// # Errors
    /// [AlphabetError::InvalidArgument] if the column's alphabet is not registered.
    pub fn add_column(&mut self, column: CharacterColumn) -> Result<ColumnIndex, AlphabetError> {
        if self.alphabet(column.alphabet()).is_none() {
            return Err(AlphabetError::invalid_argument(format!(
                "alphabet of column '{}' is not registered with block '{}'",
                column.id(),
                self.id()
            )));
        }
        self.columns.push(column);
        Ok(self.columns.len() - 1)
    }

    /// Sets (or replaces) the row of a taxon.
    ///
    /// # Arguments
    /// * `taxon` - Index of the taxon in the linked [TaxaBlock]
    /// * `states` - One state per column (any number if no columns are defined)
    ///
    /// # Errors
    /// [AlphabetError::InvalidArgument] if
    /// - `taxon` is not part of the linked taxa,
    /// - a state belongs to none of the registered alphabets,
    /// - columns are defined and the row length or a state's alphabet does not fit.
    ///
    /// On error, the block is left unchanged.
    pub fn set_row(&mut self, taxon: TaxonIndex, states: Vec<StateRef>) -> Result<(), AlphabetError> {
        self.check_row(taxon, &states)?;

        debug!(block = self.id(), taxon, num_states = states.len(), "row set");
        self.rows.insert(taxon, states);
        Ok(())
    }

    /// Appends states to the row of a taxon, starting a new row if none is set.
    ///
    /// The extended row is validated like in [set_row](Self::set_row); with
    /// columns defined, it has to fill all of them.
    ///
    /// # Errors
    /// Same as [set_row](Self::set_row). On error, the row is left unchanged.
    pub fn extend_row(&mut self, taxon: TaxonIndex, states: &[StateRef]) -> Result<(), AlphabetError> {
        let mut row = self.rows.get(&taxon).cloned().unwrap_or_default();
        row.extend_from_slice(states);
        self.check_row(taxon, &row)?;

        debug!(block = self.id(), taxon, num_added = states.len(), "row extended");
        self.rows.insert(taxon, row);
        Ok(())
    }

    fn check_row(&self, taxon: TaxonIndex, states: &[StateRef]) -> Result<(), AlphabetError> {
        if !self.taxa.contains(taxon) {
            return Err(AlphabetError::invalid_argument(format!(
                "taxon {taxon} is not part of taxa '{}'",
                self.taxa.id()
            )));
        }

        if let Some(foreign) = states.iter().find(|&&state| self.state(state).is_none()) {
            return Err(AlphabetError::invalid_argument(format!(
                "state {foreign} belongs to no alphabet of block '{}'",
                self.id()
            )));
        }

        if !self.columns.is_empty() {
            if states.len() != self.columns.len() {
                return Err(AlphabetError::invalid_argument(format!(
                    "row of taxon {taxon} has {} states, but block has {} columns",
                    states.len(),
                    self.columns.len()
                )));
            }
            let mismatch = states
                .iter()
                .zip(&self.columns)
                .position(|(state, column)| state.alphabet != column.alphabet());
            if let Some(column) = mismatch {
                return Err(AlphabetError::invalid_argument(format!(
                    "state {} is not legal in column '{}'",
                    states[column],
                    self.columns[column].id()
                )));
            }
        }

        Ok(())
    }

    /// Returns the row of a taxon, if set.
    pub fn get_row(&self, taxon: TaxonIndex) -> Option<&[StateRef]> {
        self.rows.get(&taxon).map(Vec::as_slice)
    }

    /// Iterates over all set rows, ordered by taxon index.
    pub fn rows(&self) -> impl Iterator<Item = (TaxonIndex, &[StateRef])> {
        self.rows.iter().map(|(&taxon, row)| (taxon, row.as_slice()))
    }

    /// Renders the row of a taxon as text, one symbol (or id if no symbol) per state.
    pub fn row_symbols(&self, taxon: TaxonIndex) -> Option<String> {
        let row = self.get_row(taxon)?;
        row.iter()
            .map(|&state| self.state(state).map(StateElement::to_string))
            .collect()
    }

    /// Counts the nucleotide base frequencies of the row of a taxon.
    ///
    /// # Errors
    /// [AlphabetError::InvalidArgument] if the taxon has no row, or as
    /// [BaseFrequencies::count].
    pub fn base_frequencies(
        &self,
        taxon: TaxonIndex,
        ignore_gaps: bool,
    ) -> Result<BaseFrequencies, AlphabetError> {
        let row = self.get_row(taxon).ok_or_else(|| {
            AlphabetError::invalid_argument(format!(
                "taxon {taxon} has no row in block '{}'",
                self.id()
            ))
        })?;
        BaseFrequencies::count(row.iter().filter_map(|&state| self.state(state)), ignore_gaps)
    }

    /// Returns the registered alphabet with the given key.
    pub fn alphabet(&self, key: AlphabetKey) -> Option<&AlphabetSet> {
        self.alphabets
            .iter()
            .find(|alphabet| alphabet.key() == key)
            .map(Arc::as_ref)
    }

    /// Returns the state a [StateRef] points to, if it belongs to a registered alphabet.
    pub fn state(&self, state: StateRef) -> Option<&StateElement> {
        self.alphabet(state.alphabet)?.resolve(state)
    }

    /// Returns the registered alphabets in registration order.
    pub fn alphabets(&self) -> &[Arc<AlphabetSet>] {
        &self.alphabets
    }

    pub fn columns(&self) -> &[CharacterColumn] {
        &self.columns
    }

    pub fn num_columns(&self) -> usize {
        self.columns.len()
    }

    /// Returns the number of taxa with a row set.
    pub fn num_rows(&self) -> usize {
        self.rows.len()
    }
}
