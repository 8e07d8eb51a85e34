use super::*;
use markov_ir::literal;
use pretty_assertions::assert_eq;

fn values(tokens: &[SharedToken]) -> Vec<String> {
    tokens.iter().map(|t| t.value().into_owned()).collect()
}

fn words(list: &[&'static str]) -> impl Tokenizer {
    let mut rest: Vec<&'static str> = list.iter().rev().copied().collect();
    from_fn(move || Ok(rest.pop().map(|w| literal(w))))
}

#[test]
fn from_fn_yields_until_none() {
    let mut tokenizer = words(&["a", "b"]);
    let mut seen = Vec::new();
    while let Ok(Some(token)) = tokenizer.next_token() {
        seen.push(token);
    }
    assert_eq!(values(&seen), vec!["a", "b"]);
    assert!(matches!(tokenizer.next_token(), Ok(None)));
}

#[test]
fn tokens_iterator_collects() {
    let collected: Result<Vec<_>, _> = words(&["x", " ", "y"]).tokens().collect();
    let Ok(collected) = collected else {
        panic!("unexpected error");
    };
    assert_eq!(values(&collected), vec!["x", " ", "y"]);
}

#[test]
fn tokens_iterator_stops_after_error() {
    let mut calls = 0;
    let failing = from_fn(move || {
        calls += 1;
        match calls {
            1 => Ok(Some(literal("ok"))),
            2 => Err(LexError::Other("boom".into())),
            _ => Ok(Some(literal("after"))),
        }
    });
    let mut tokens = failing.tokens();
    assert!(matches!(tokens.next(), Some(Ok(_))));
    assert!(matches!(tokens.next(), Some(Err(LexError::Other(_)))));
    assert!(tokens.next().is_none());
    assert!(tokens.next().is_none());
}

#[test]
fn tokens_iterator_stops_after_end() {
    let mut tokens = words(&["only"]).tokens();
    assert!(tokens.next().is_some());
    assert!(tokens.next().is_none());
    assert!(tokens.next().is_none());
}

#[test]
fn mut_ref_and_box_are_tokenizers() {
    let mut inner = words(&["a", "b", "c"]);
    {
        let by_ref = &mut inner;
        assert!(matches!(by_ref.next_token(), Ok(Some(_))));
    }
    let mut boxed: Box<dyn Tokenizer> = Box::new(inner);
    let rest: Vec<_> = (&mut boxed).tokens().filter_map(Result::ok).collect();
    assert_eq!(values(&rest), vec!["b", "c"]);
}

#[test]
fn debug_hides_closure() {
    assert_eq!(format!("{:?}", from_fn(|| Ok(None))), "TokenizerFn");
}
