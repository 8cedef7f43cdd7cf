use nexstate::alphabets;
use nexstate::model::{AlphabetSet, StateKind, StateQuery};
use proptest::prelude::*;
use std::collections::BTreeSet;
use std::sync::OnceLock;

fn dna() -> &'static AlphabetSet {
    static DNA: OnceLock<AlphabetSet> = OnceLock::new();
    DNA.get_or_init(|| alphabets::dna().expect("DNA alphabet builds"))
}

proptest! {
    // Every non-empty subset of the bases is represented by exactly one state.
    #[test]
    fn base_subsets_match_their_code(mask in 1u8..16) {
        let dna = dna();
        let text: String = "ACGT"
            .chars()
            .enumerate()
            .filter(|(i, _)| mask & (1 << i) != 0)
            .map(|(_, c)| c)
            .collect();

        let state = dna
            .match_state(&StateQuery::new().with_symbol_chars(&text))
            .unwrap()
            .expect("every base subset has a code");
        let expected: BTreeSet<String> = text.chars().map(String::from).collect();
        let actual: BTreeSet<String> = dna
            .fundamental_symbols(state.index())
            .into_iter()
            .map(str::to_string)
            .collect();
        prop_assert_eq!(actual, expected);
    }

    // Match order and repetitions of the query do not matter.
    #[test]
    fn match_ignores_order_and_repetition(symbols in proptest::collection::vec("[ACGT-]", 1..12)) {
        let dna = dna();
        let mut reversed = symbols.clone();
        reversed.reverse();

        let forward = dna.match_state(&StateQuery::by_symbols(symbols.clone())).unwrap();
        let backward = dna.match_state(&StateQuery::by_symbols(reversed)).unwrap();
        prop_assert_eq!(forward.map(|s| s.index()), backward.map(|s| s.index()));
    }

    // Fundamental ids/symbols are projections of the fundamental states.
    #[test]
    fn projections_agree_with_fundamentals(index in 0usize..17) {
        let dna = dna();
        let fundamentals = dna.fundamental_states(index);
        prop_assert!(fundamentals.iter().all(|&f| dna[f].kind() == StateKind::Single));

        let ids: BTreeSet<&str> = fundamentals.iter().map(|&f| dna[f].id()).collect();
        prop_assert_eq!(dna.fundamental_ids(index), ids);
        prop_assert_eq!(dna.fundamental_symbols(index).len(), fundamentals.len());
    }
}
