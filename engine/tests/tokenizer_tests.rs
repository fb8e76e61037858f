use engine::tokenizer::tokenize;

#[test]
fn it_lowercases_and_splits_on_punctuation() {
    let toks = tokenize("Red-Wallet!! (leather, black)");
    assert_eq!(toks, vec!["red", "wallet", "leather", "black"]);
}

#[test]
fn it_filters_stopwords() {
    let toks = tokenize("The quick brown fox and the lazy dog");
    assert!(!toks.contains(&"the".to_string()));
    assert!(!toks.contains(&"and".to_string()));
    assert!(toks.contains(&"quick".to_string()));
    assert!(toks.contains(&"dog".to_string()));
}

#[test]
fn it_applies_nfkc_before_matching() {
    // fullwidth forms fold to their ASCII equivalents
    let toks = tokenize("ＷＡＬＬＥＴ ４２");
    assert_eq!(toks, vec!["wallet", "42"]);
}

#[test]
fn it_handles_empty_and_symbol_only_input() {
    assert!(tokenize("").is_empty());
    assert!(tokenize("!!! --- ???").is_empty());
}

#[test]
fn it_preserves_left_to_right_order() {
    let toks = tokenize("keys found near the park");
    assert_eq!(toks, vec!["keys", "found", "near", "park"]);
}
