//! Identified entity shared by alphabets, blocks, columns and taxa.

use std::fmt;

// =#========================================================================#=
// ENTITY
// =#========================================================================#=
/// An identifier together with an optional human-readable label.
///
/// Identity is the `id`; the label is display-only and not part of equality.
#[derive(Debug, Clone, Eq)]
pub struct Entity {
    id: String,
    label: Option<String>,
}

impl Entity {
    /// Creates a new entity without label.
    pub fn new(id: impl Into<String>) -> Self {
        Entity {
            id: id.into(),
            label: None,
        }
    }

    /// Attaches a label to this entity.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Returns the identifier.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the label, if any.
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// Sets (or replaces) the label.
    pub fn set_label(&mut self, label: impl Into<String>) {
        self.label = Some(label.into());
    }
}

impl PartialEq for Entity {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl std::hash::Hash for Entity {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match &self.label {
            Some(label) => write!(f, "{} ({})", label, self.id),
            None => write!(f, "{}", self.id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equality_ignores_label() {
        let a = Entity::new("dna").with_label("Nucleotides");
        let b = Entity::new("dna");
        assert_eq!(a, b);
        assert_ne!(a, Entity::new("rna"));
    }

    #[test]
    fn test_display() {
        assert_eq!(Entity::new("t1").to_string(), "t1");
        assert_eq!(
            Entity::new("t1").with_label("Kea").to_string(),
            "Kea (t1)"
        );
    }
}
