//! Taxa collection that character blocks are linked to.
//!
//! - `TaxaBlock`: Joined storage and lookup for taxon labels, as given by a
//!   TAXA block.

use crate::model::entity::Entity;
use std::collections::HashMap;
use std::fmt;

/// Index of a taxon in a [TaxaBlock].
pub type TaxonIndex = usize;

// =#========================================================================#=
// TAXA BLOCK
// =#========================================================================#=
/// Maps taxon labels to compact indices.
///
/// Rows of a [CharacterBlock](crate::model::CharacterBlock) are keyed by
/// [TaxonIndex]. Labels are deduplicated automatically - inserting the same
/// label twice returns the same index.
///
/// # Example
/// ```
/// use nexstate::model::TaxaBlock;
///
/// let mut taxa = TaxaBlock::new("taxa1");
///
/// let idx_kea = taxa.get_or_insert("Nestor notabilis");     // idx_kea = 0
/// let idx_kaka = taxa.get_or_insert("Nestor meridionalis"); // idx_kaka = 1
/// let idx_kea2 = taxa.get_or_insert("Nestor notabilis");    // idx_kea2 = 0
///
/// assert_eq!(idx_kea, idx_kea2);
/// assert_eq!(taxa.get_label(idx_kaka), Some("Nestor meridionalis"));
/// ```
#[derive(Debug, Clone)]
pub struct TaxaBlock {
    entity: Entity,
    /// List of unique labels
    labels: Vec<String>,
    /// Map from label to its index
    map: HashMap<String, TaxonIndex>,
}

impl TaxaBlock {
    /// Creates a new empty taxa block.
    pub fn new(id: impl Into<String>) -> Self {
        TaxaBlock {
            entity: Entity::new(id),
            labels: Vec::new(),
            map: HashMap::new(),
        }
    }

    /// Creates a taxa block holding the given labels, deduplicated, in order.
    pub fn from_labels<I, S>(id: impl Into<String>, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut taxa = Self::new(id);
        for label in labels {
            taxa.get_or_insert(label.as_ref());
        }
        taxa
    }

    pub fn id(&self) -> &str {
        self.entity.id()
    }

    pub fn entity(&self) -> &Entity {
        &self.entity
    }

    /// Gets the index for a label, inserting it if it doesn't exist.
    ///
    /// # Arguments
    /// * `label` - The taxon label to look up or insert
    ///
    /// # Returns
    /// The index associated with this label
    pub fn get_or_insert(&mut self, label: &str) -> TaxonIndex {
        if let Some(&index) = self.map.get(label) {
            index
        } else {
            let index = self.labels.len();
            self.labels.push(label.to_string());
            self.map.insert(label.to_string(), index);
            index
        }
    }

    /// Retrieves the index for a given label, `None` if unknown.
    pub fn get_index(&self, label: &str) -> Option<TaxonIndex> {
        self.map.get(label).copied()
    }

    /// Retrieves the label for a given index, `None` if out of range.
    pub fn get_label(&self, index: TaxonIndex) -> Option<&str> {
        self.labels.get(index).map(String::as_str)
    }

    /// Checks whether the index denotes a taxon of this block.
    pub fn contains(&self, index: TaxonIndex) -> bool {
        index < self.labels.len()
    }

    /// Checks if a label exists in this block.
    pub fn contains_label(&self, label: &str) -> bool {
        self.map.contains_key(label)
    }

    /// Returns the number of taxa.
    pub fn num_taxa(&self) -> usize {
        self.labels.len()
    }

    /// Returns the labels in index order.
    pub fn labels(&self) -> &[String] {
        &self.labels
    }
}

impl fmt::Display for TaxaBlock {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "TaxaBlock {} ({} taxa):", self.entity, self.labels.len())?;
        for (index, label) in self.labels.iter().enumerate() {
            writeln!(f, "  [{}] {}", index, label)?;
        }
        Ok(())
    }
}

impl std::ops::Index<TaxonIndex> for TaxaBlock {
    type Output = str;

    fn index(&self, index: TaxonIndex) -> &Self::Output {
        &self.labels[index]
    }
}
