use std::borrow::Cow;
use std::collections::VecDeque;

use super::*;
use markov_ir::{literal, END, END_KIND};
use pretty_assertions::assert_eq;

use crate::{from_fn, TokenizerExt};

/// Token with a fixed value that differs from its identifier.
#[derive(Debug)]
struct Tagged {
    tag: &'static str,
    value: &'static str,
}

impl Token for Tagged {
    fn kind(&self) -> &str {
        "t"
    }

    fn identifier(&self) -> &str {
        self.tag
    }

    fn value(&self) -> Cow<'_, str> {
        Cow::Borrowed(self.value)
    }
}

fn scripted(items: Vec<Result<SharedToken, LexError>>) -> impl Tokenizer {
    let mut items: VecDeque<_> = items.into();
    from_fn(move || items.pop_front().transpose())
}

fn render(tokens: &[SharedToken]) -> Vec<String> {
    tokens
        .iter()
        .map(|t| {
            if t.kind() == END_KIND {
                "END".to_string()
            } else {
                t.value().into_owned()
            }
        })
        .collect()
}

fn run(items: Vec<Result<SharedToken, LexError>>) -> Vec<String> {
    let collected: Result<Vec<_>, _> = Terminated::new(scripted(items)).tokens().collect();
    match collected {
        Ok(tokens) => render(&tokens),
        Err(e) => panic!("unexpected error: {e}"),
    }
}

#[test]
fn passes_other_tokens_through() {
    assert_eq!(
        run(vec![Ok(literal("a")), Ok(literal(" ")), Ok(literal("b"))]),
        vec!["a", " ", "b"]
    );
}

#[test]
fn single_newline_becomes_end() {
    assert_eq!(
        run(vec![Ok(literal("a")), Ok(literal("\n"))]),
        vec!["a", "END"]
    );
}

#[test]
fn newline_run_becomes_one_end_per_newline() {
    assert_eq!(
        run(vec![
            Ok(literal("foo")),
            Ok(literal("\n\n\n")),
            Ok(literal("bar")),
        ]),
        vec!["foo", "END", "END", "END", "bar"]
    );
}

#[test]
fn end_tokens_equal_the_constant() {
    let mut tokenizer = Terminated::new(scripted(vec![Ok(literal("\n\n"))]));
    for _ in 0..2 {
        let Ok(Some(token)) = tokenizer.next_token() else {
            panic!("expected END");
        };
        assert!(markov_ir::tokens_equal(&*token, &END));
    }
    assert!(matches!(tokenizer.next_token(), Ok(None)));
}

#[test]
fn other_whitespace_is_not_a_terminator() {
    assert_eq!(
        run(vec![Ok(literal("\r")), Ok(literal("\u{2028}")), Ok(literal("\t"))]),
        vec!["\r", "\u{2028}", "\t"]
    );
}

#[test]
fn only_leading_newline_counts() {
    assert_eq!(run(vec![Ok(literal(" \n"))]), vec![" \n"]);
}

#[test]
fn empty_value_passes_through() {
    assert_eq!(run(vec![Ok(literal(""))]), vec![""]);
}

#[test]
fn custom_token_with_newline_value() {
    let tagged: SharedToken = Rc::new(Tagged {
        tag: "para",
        value: "\n\n",
    });
    assert_eq!(run(vec![Ok(tagged)]), vec!["END", "END"]);
}

#[test]
fn custom_token_is_not_rewritten_by_identifier() {
    let tagged: SharedToken = Rc::new(Tagged {
        tag: "\n",
        value: "word",
    });
    assert_eq!(run(vec![Ok(tagged)]), vec!["word"]);
}

#[test]
fn pending_ends_come_before_an_error() {
    let mut tokenizer = Terminated::new(scripted(vec![
        Ok(literal("\n\n")),
        Err(LexError::Other("boom".into())),
    ]));
    assert!(matches!(tokenizer.next_token(), Ok(Some(_))));
    assert!(matches!(tokenizer.next_token(), Ok(Some(_))));
    assert!(matches!(tokenizer.next_token(), Err(LexError::Other(_))));
}

#[test]
fn errors_pass_through() {
    let mut tokenizer = Terminated::new(scripted(vec![Err(LexError::Other("x".into()))]));
    assert!(matches!(tokenizer.next_token(), Err(LexError::Other(_))));
}

#[test]
fn inner_is_reachable() {
    let mut tokenizer = Terminated::new(crate::LiteralTokenizer::new(&b"ab\n"[..]));
    assert!(matches!(tokenizer.next_token(), Ok(Some(_))));
    assert_eq!(tokenizer.get_ref().offset(), 2);
    assert!(matches!(tokenizer.next_token(), Ok(Some(_))));
    assert_eq!(tokenizer.into_inner().offset(), 3);
}
