use crate::test_utils::{calc_grammar, pair_grammar};
use crate::{Grammar, GrammarError, Label, NonterminalId};

#[test]
fn roundtrip() {
    let grammar = calc_grammar();

    let binary = grammar.to_binary();
    let decoded = Grammar::from_binary(&binary).unwrap();

    assert_eq!(decoded, grammar);
}

#[test]
fn acceleration_is_rebuilt_on_load() {
    let grammar = pair_grammar();

    let decoded = Grammar::from_binary(&grammar.to_binary()).unwrap();

    assert!(decoded.is_accelerated());
    let pair = decoded.dfa_by_name("pair").unwrap();
    assert!(pair.state(2).is_accept_only());
    assert_eq!(pair.first().iter().collect::<Vec<_>>(), [2]);
}

#[test]
fn truncated_input() {
    let binary = calc_grammar().to_binary();

    let err = Grammar::from_binary(&binary[..binary.len() / 2]).unwrap_err();

    assert!(matches!(err, GrammarError::Binary(_)));
}

#[test]
fn decoded_tables_are_validated() {
    let invalid = Grammar {
        dfas: vec![],
        labels: vec![Label::empty()],
        start: NonterminalId::from_index(0),
        accelerated: false,
    };

    let err = Grammar::from_binary(&invalid.to_binary()).unwrap_err();

    assert!(matches!(err, GrammarError::Empty));
}
