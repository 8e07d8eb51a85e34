use super::*;
use pretty_assertions::assert_eq;

/// A token whose value differs from its identifier.
#[derive(Debug)]
struct Tagged {
    tag: &'static str,
    rendered: String,
}

impl Token for Tagged {
    fn kind(&self) -> &str {
        "pos"
    }

    fn identifier(&self) -> &str {
        self.tag
    }

    fn value(&self) -> Cow<'_, str> {
        Cow::Owned(self.rendered.to_uppercase())
    }
}

fn samples() -> Vec<(&'static str, SharedToken)> {
    vec![
        ("foo", literal("foo")),
        ("bar", literal("bar")),
        ("whitespace", literal(" ")),
        ("newline", literal("\n")),
        (
            "custom",
            StaticToken::new("custom", "token using a custom type").into_shared(),
        ),
        ("start", start()),
        ("end", end()),
    ]
}

// === Accessors ===

#[test]
fn literal_kind() {
    for text in ["foo", "bar", " ", "\n"] {
        assert_eq!(literal(text).kind(), LITERAL_KIND);
    }
}

#[test]
fn custom_kind() {
    let token = StaticToken::new("custom", "token using a custom type");
    assert_eq!(token.kind(), "custom");
}

#[test]
fn identifier_and_value_are_the_text() {
    for text in ["foo", "bar", " ", "\n", "token using a custom type"] {
        let token = StaticToken::new("custom", text);
        assert_eq!(token.identifier(), text);
        assert_eq!(token.value(), text);
        let token = literal(text);
        assert_eq!(token.identifier(), text);
        assert_eq!(token.value(), text);
    }
}

#[test]
fn accessors_are_stable() {
    let token = literal("foo");
    assert_eq!(token.kind(), token.kind());
    assert_eq!(token.identifier(), token.identifier());
    assert_eq!(token.value(), token.value());
}

#[test]
fn sentinels_use_reserved_kinds() {
    assert_eq!(START.kind(), START_KIND);
    assert_eq!(END.kind(), END_KIND);
    assert_ne!(START_KIND, LITERAL_KIND);
    assert_ne!(END_KIND, LITERAL_KIND);
    assert_ne!(START_KIND, END_KIND);
    assert_eq!(START.value(), START.identifier());
    assert_eq!(END.value(), END.identifier());
}

// === Equality ===

#[test]
fn tokens_equal_matrix() {
    let left = samples();
    let right = samples();
    for (i, (name_a, a)) in left.iter().enumerate() {
        for (j, (name_b, b)) in right.iter().enumerate() {
            assert_eq!(
                tokens_equal(a, b),
                i == j,
                "tokens_equal({name_a}, {name_b})"
            );
            assert_eq!(a == b, i == j, "{name_a} == {name_b}");
        }
    }
}

#[test]
fn same_text_different_kind_is_not_equal() {
    let a = StaticToken::new("x1", "same");
    let b = StaticToken::new("x2", "same");
    assert!(!tokens_equal(&a, &b));
    assert!(!tokens_equal(&START, &END));
}

#[test]
fn value_is_ignored() {
    let a = Tagged {
        tag: "NN",
        rendered: "dog".into(),
    };
    let b = Tagged {
        tag: "NN",
        rendered: "cat".into(),
    };
    assert_ne!(a.value(), b.value());
    assert!(tokens_equal(&a, &b));

    let c = StaticToken::new("pos", "NN");
    assert!(tokens_equal(&a, &c));
    assert!(tokens_equal(&c, &a));
}

#[test]
fn shared_tokens_compare_through_dyn() {
    let a: SharedToken = Rc::new(Tagged {
        tag: "VB",
        rendered: "run".into(),
    });
    let b = StaticToken::new("pos", "VB").into_shared();
    assert!(a == b);
    assert!(a != literal("VB"));
}

#[test]
fn hash_agrees_with_equality() {
    use std::collections::HashSet;

    let mut set: HashSet<SharedToken> = HashSet::new();
    set.insert(literal("foo"));
    set.insert(literal("foo"));
    set.insert(StaticToken::new("pos", "foo").into_shared());
    set.insert(start());
    set.insert(start());
    assert_eq!(set.len(), 3);
    assert!(set.contains(&literal("foo")));
}

// === Contract checks ===

#[test]
fn try_new_accepts_valid_fields() {
    assert_eq!(
        StaticToken::try_new("custom", "ok"),
        Ok(StaticToken::new("custom", "ok"))
    );
}

#[test]
fn try_new_rejects_empty_kind() {
    assert_eq!(StaticToken::try_new("", "x"), Err(TokenError::EmptyKind));
}

#[test]
fn try_new_rejects_nul() {
    assert_eq!(
        StaticToken::try_new("a\0b", "x"),
        Err(TokenError::NulInKind { offset: 1 })
    );
    assert_eq!(
        StaticToken::try_new("l", "ab\0"),
        Err(TokenError::NulInIdentifier { offset: 2 })
    );
}

#[test]
fn check_token_on_custom_type() {
    let token = Tagged {
        tag: "N\0N",
        rendered: String::new(),
    };
    assert_eq!(
        check_token(&token),
        Err(TokenError::NulInIdentifier { offset: 1 })
    );
    assert_eq!(check_token(&START), Ok(()));
}

#[test]
fn token_error_messages() {
    assert_eq!(
        TokenError::NulInKind { offset: 3 }.to_string(),
        "token kind contains a NUL byte at offset 3"
    );
    assert_eq!(TokenError::EmptyKind.to_string(), "token kind must not be empty");
}

// === Debug ===

#[test]
fn debug_format() {
    assert_eq!(format!("{:?}", StaticToken::literal("foo")), "l\"foo\"");
    assert_eq!(format!("{START:?}"), "START");
    assert_eq!(format!("{END:?}"), "END");
}
