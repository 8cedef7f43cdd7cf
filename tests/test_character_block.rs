use nexstate::alphabets;
use nexstate::model::{
    AlphabetBuilder, AlphabetError, AlphabetSet, CharacterBlock, CharacterColumn, StateElement,
    StateQuery, TaxaBlock,
};
use std::sync::Arc;

fn shorebirds() -> Arc<TaxaBlock> {
    Arc::new(TaxaBlock::from_labels(
        "shorebirds",
        [
            "Anarhynchus frontalis",
            "Himantopus novaezelandiae",
            "Haematopus unicolor",
        ],
    ))
}

fn binary() -> Arc<AlphabetSet> {
    let mut builder = AlphabetBuilder::new("binary");
    builder.add(StateElement::single("absent").with_symbol("0")).unwrap();
    builder.add(StateElement::single("present").with_symbol("1")).unwrap();
    builder
        .add_ambiguous("unknown", "?", &StateQuery::by_symbols(["0", "1"]))
        .unwrap();
    Arc::new(builder.build().unwrap())
}

// ============= Rows Without Columns =============
#[test]
fn test_set_and_get_row() {
    let dna = Arc::new(alphabets::dna().unwrap());
    let mut block = CharacterBlock::new("chars", shorebirds()).with_label("rbcL");
    block.add_alphabet_set(dna.clone());

    let wrybill = block.taxa().get_index("Anarhynchus frontalis").unwrap();
    let row = dna.resolve_symbol_sequence("ACGTRY-?").unwrap();
    block.set_row(wrybill, row.clone()).unwrap();

    assert_eq!(block.get_row(wrybill), Some(row.as_slice()));
    assert_eq!(block.row_symbols(wrybill).as_deref(), Some("ACGTRY-?"));
    assert_eq!(block.num_rows(), 1);
    assert_eq!(block.get_row(1), None);
    assert_eq!(block.label(), Some("rbcL"));
}

#[test]
fn test_set_row_rejects_foreign_state() {
    let dna = Arc::new(alphabets::dna().unwrap());
    let other_dna = alphabets::dna().unwrap();
    let mut block = CharacterBlock::new("chars", shorebirds());
    block.add_alphabet_set(dna.clone());

    // Same symbols, but states of an alphabet not registered with the block
    let foreign = other_dna.resolve_symbol_sequence("ACGT").unwrap();
    let result = block.set_row(0, foreign);
    assert!(matches!(result, Err(AlphabetError::InvalidArgument(_))));
    assert_eq!(block.num_rows(), 0);
}

#[test]
fn test_set_row_rejects_unknown_taxon() {
    let dna = Arc::new(alphabets::dna().unwrap());
    let mut block = CharacterBlock::new("chars", shorebirds());
    block.add_alphabet_set(dna.clone());

    let row = dna.resolve_symbol_sequence("AC").unwrap();
    assert!(matches!(
        block.set_row(3, row),
        Err(AlphabetError::InvalidArgument(_))
    ));
}

#[test]
fn test_set_row_replaces_previous() {
    let dna = Arc::new(alphabets::dna().unwrap());
    let mut block = CharacterBlock::new("chars", shorebirds());
    block.add_alphabet_set(dna.clone());

    block.set_row(2, dna.resolve_symbol_sequence("AAAA").unwrap()).unwrap();
    block.set_row(2, dna.resolve_symbol_sequence("CC").unwrap()).unwrap();
    assert_eq!(block.row_symbols(2).as_deref(), Some("CC"));
    assert_eq!(block.num_rows(), 1);
}

#[test]
fn test_register_alphabet_twice() {
    let dna = Arc::new(alphabets::dna().unwrap());
    let mut block = CharacterBlock::new("chars", shorebirds());
    let first = block.add_alphabet_set(dna.clone());
    let second = block.add_alphabet_set(dna.clone());
    assert_eq!(first, second);
    assert_eq!(block.alphabets().len(), 1);
    assert_eq!(block.alphabet(first).map(|a| a.id()), Some("DNA"));
}

#[test]
fn test_extend_row_appends() {
    let dna = Arc::new(alphabets::dna().unwrap());
    let mut block = CharacterBlock::new("chars", shorebirds());
    block.add_alphabet_set(dna.clone());

    // Extending a taxon without row starts one
    block.extend_row(1, &dna.resolve_symbol_sequence("AC").unwrap()).unwrap();
    block.extend_row(1, &dna.resolve_symbol_sequence("GT-").unwrap()).unwrap();
    assert_eq!(block.row_symbols(1).as_deref(), Some("ACGT-"));
    assert_eq!(block.num_rows(), 1);
}

#[test]
fn test_extend_row_rejects_foreign_state_and_keeps_row() {
    let dna = Arc::new(alphabets::dna().unwrap());
    let binary = binary();
    let mut block = CharacterBlock::new("chars", shorebirds());
    block.add_alphabet_set(dna.clone());

    block.set_row(0, dna.resolve_symbol_sequence("AC").unwrap()).unwrap();
    let present = binary.resolve_symbols("1").unwrap().state_ref();
    let result = block.extend_row(0, &[present]);
    assert!(matches!(result, Err(AlphabetError::InvalidArgument(_))));
    assert_eq!(block.row_symbols(0).as_deref(), Some("AC"));

    assert!(matches!(
        block.extend_row(5, &dna.resolve_symbol_sequence("A").unwrap()),
        Err(AlphabetError::InvalidArgument(_))
    ));
}

// ============= Base Frequencies =============
#[test]
fn test_base_frequencies_of_row() {
    let dna = Arc::new(alphabets::dna().unwrap());
    let mut block = CharacterBlock::new("chars", shorebirds());
    block.add_alphabet_set(dna.clone());
    block.set_row(0, dna.resolve_symbol_sequence("AAGCT-NN").unwrap()).unwrap();

    let with_gaps = block.base_frequencies(0, false).unwrap();
    assert!((with_gaps.a() - 0.25).abs() < 1e-10);
    assert!((with_gaps.r() - 0.375).abs() < 1e-10);
    assert!((with_gaps.y() - 0.25).abs() < 1e-10);

    let without_gaps = block.base_frequencies(0, true).unwrap();
    assert!((without_gaps.a() - 2.0 / 7.0).abs() < 1e-10);
    assert!((without_gaps.t() - 1.0 / 7.0).abs() < 1e-10);
}

#[test]
fn test_base_frequencies_require_nucleotide_row() {
    let dna = Arc::new(alphabets::dna().unwrap());
    let binary = binary();
    let mut block = CharacterBlock::new("chars", shorebirds());
    block.add_alphabet_set(dna.clone());
    block.add_alphabet_set(binary.clone());

    // No row set
    assert!(matches!(
        block.base_frequencies(0, false),
        Err(AlphabetError::InvalidArgument(_))
    ));

    let present = binary.resolve_symbols("1").unwrap().state_ref();
    block.set_row(1, vec![present]).unwrap();
    assert!(matches!(
        block.base_frequencies(1, false),
        Err(AlphabetError::InvalidArgument(_))
    ));
}

// ============= Rows With Columns =============
#[test]
fn test_mixed_columns() {
    let dna = Arc::new(alphabets::dna().unwrap());
    let binary = binary();
    let mut block = CharacterBlock::new("mixed", shorebirds());
    block.add_alphabet_set(dna.clone());
    block.add_alphabet_set(binary.clone());

    assert_eq!(block.add_column(CharacterColumn::new("site1", &dna)).unwrap(), 0);
    assert_eq!(
        block
            .add_column(CharacterColumn::new("bill", &binary).with_label("curved bill"))
            .unwrap(),
        1
    );
    assert_eq!(block.num_columns(), 2);
    assert_eq!(block.columns()[1].label(), Some("curved bill"));

    let n = dna.resolve_symbols("N").unwrap().state_ref();
    let present = binary.resolve_symbols("1").unwrap().state_ref();
    block.set_row(0, vec![n, present]).unwrap();
    assert_eq!(block.row_symbols(0).as_deref(), Some("N1"));

    // Wrong order: each state must come from its column's alphabet
    let swapped = block.set_row(1, vec![present, n]);
    assert!(matches!(swapped, Err(AlphabetError::InvalidArgument(_))));

    // Wrong length
    let short = block.set_row(1, vec![n]);
    assert!(matches!(short, Err(AlphabetError::InvalidArgument(_))));

    let rows: Vec<usize> = block.rows().map(|(taxon, _)| taxon).collect();
    assert_eq!(rows, [0]);

    // Extending a complete row overflows the columns
    let overflow = block.extend_row(0, &[n]);
    assert!(matches!(overflow, Err(AlphabetError::InvalidArgument(_))));
    assert_eq!(block.get_row(0).map(<[_]>::len), Some(2));
}

#[test]
fn test_add_column_requires_registered_alphabet() {
    let dna = alphabets::dna().unwrap();
    let mut block = CharacterBlock::new("chars", shorebirds());
    let result = block.add_column(CharacterColumn::new("site1", &dna));
    assert!(matches!(result, Err(AlphabetError::InvalidArgument(_))));
}

#[test]
fn test_state_lookup_through_block() {
    let binary = binary();
    let mut block = CharacterBlock::new("chars", shorebirds());
    block.add_alphabet_set(binary.clone());

    let unknown = binary.resolve_symbols("01").unwrap().state_ref();
    assert_eq!(block.state(unknown).map(|s| s.id()), Some("unknown"));
}
