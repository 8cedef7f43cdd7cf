use nexstate::model::TaxaBlock;

#[test]
fn test_get_or_insert_new_label() {
    let mut taxa = TaxaBlock::new("taxa");
    let index_wrybill = taxa.get_or_insert("Anarhynchus frontalis");
    assert_eq!(index_wrybill, 0);
    assert!(taxa.contains_label("Anarhynchus frontalis"));
    assert!(taxa.contains(index_wrybill));
}

#[test]
fn test_get_or_insert_returns_same_index_for_duplicate() {
    let mut taxa = TaxaBlock::new("taxa");
    let index_kakapo = taxa.get_or_insert("Strigops habroptilus");
    let index_kea = taxa.get_or_insert("Nestor notabilis");
    let index_kaka = taxa.get_or_insert("Nestor meridionalis");
    let index_popoka = taxa.get_or_insert("Strigops habroptilus");

    assert_eq!(index_kakapo, index_popoka);
    assert_ne!(index_kakapo, index_kea);
    assert_ne!(index_kakapo, index_kaka);
    assert_eq!(taxa.num_taxa(), 3);
}

#[test]
fn test_from_labels_deduplicates() {
    let taxa = TaxaBlock::from_labels(
        "rails",
        ["Porphyrio hochstetteri", "Gallirallus australis", "Porphyrio hochstetteri"],
    );
    assert_eq!(taxa.num_taxa(), 2);
    assert_eq!(&taxa[1], "Gallirallus australis");
    assert_eq!(taxa.get_index("Gallirallus australis"), Some(1));
}

#[test]
fn test_get_label_returns_none_for_invalid_index() {
    let taxa = TaxaBlock::new("taxa");
    assert_eq!(taxa.get_label(0), None);
    assert!(!taxa.contains(0));
}
