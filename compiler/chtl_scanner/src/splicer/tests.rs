use super::*;
use crate::assemble::resolve_placeholders;
use pretty_assertions::assert_eq;

/// Helper: splice `body` with a fresh map, returning the output, the map,
/// and any errors.
fn splice(body: &str) -> (String, PlaceholderMap, Vec<ScanError>) {
    let mut placeholders = PlaceholderMap::new();
    let mut errors = Vec::new();
    let out = splice_script_body(body, 0, &mut placeholders, &mut errors);
    (out, placeholders, errors)
}

/// Helper: assert the placeholder round-trip invariant for one body.
fn assert_round_trip(body: &str) {
    let (out, placeholders, _) = splice(body);
    let restored = resolve_placeholders(&out, &placeholders);
    assert_eq!(restored.as_deref(), Ok(body), "round-trip failed for {body:?}");
}

// === The canonical example ===

#[test]
fn selector_and_arrow_are_kept_verbatim() {
    let (out, placeholders, errors) = splice(" const a = 1; {{box}}->show(); ");
    assert_eq!(
        out,
        "__CHTL_JS_PLACEHOLDER_0__{{box}}->__CHTL_JS_PLACEHOLDER_1__"
    );
    assert_eq!(
        placeholders.resolve("__CHTL_JS_PLACEHOLDER_0__"),
        Some(" const a = 1; ")
    );
    assert_eq!(
        placeholders.resolve("__CHTL_JS_PLACEHOLDER_1__"),
        Some("show(); ")
    );
    assert_eq!(placeholders.len(), 2);
    assert!(errors.is_empty());
}

// === Zero-lexeme bodies ===

#[test]
fn plain_js_body_becomes_one_placeholder() {
    let body = " const x = 1; f(x); ";
    let (out, placeholders, _) = splice(body);
    assert_eq!(out, "__CHTL_JS_PLACEHOLDER_0__");
    assert_eq!(placeholders.resolve(&out), Some(body));
}

#[test]
fn empty_body_still_yields_one_placeholder() {
    let (out, placeholders, _) = splice("");
    assert_eq!(out, "__CHTL_JS_PLACEHOLDER_0__");
    assert_eq!(placeholders.resolve(&out), Some(""));
}

// === Lexeme-only bodies ===

#[test]
fn selector_only_body_has_no_placeholders() {
    let (out, placeholders, _) = splice("{{box}}");
    assert_eq!(out, "{{box}}");
    assert!(placeholders.is_empty());
}

#[test]
fn arrow_splits_surrounding_plain_runs() {
    let (out, placeholders, _) = splice("a->b");
    assert_eq!(
        out,
        "__CHTL_JS_PLACEHOLDER_0__->__CHTL_JS_PLACEHOLDER_1__"
    );
    assert_eq!(placeholders.resolve("__CHTL_JS_PLACEHOLDER_0__"), Some("a"));
    assert_eq!(placeholders.resolve("__CHTL_JS_PLACEHOLDER_1__"), Some("b"));
}

// === Reserved identifiers ===

#[test]
fn reserved_word_with_block_is_kept_verbatim() {
    let (out, placeholders, errors) = splice("Listen { click: handler } done();");
    assert_eq!(
        out,
        "Listen { click: handler }__CHTL_JS_PLACEHOLDER_0__"
    );
    assert_eq!(
        placeholders.resolve("__CHTL_JS_PLACEHOLDER_0__"),
        Some(" done();")
    );
    assert!(errors.is_empty());
}

#[test]
fn reserved_word_with_argument_list() {
    let (out, _, errors) = splice("Animate({ target: box })");
    assert_eq!(out, "Animate({ target: box })");
    assert!(errors.is_empty());
}

#[test]
fn whitespace_between_word_and_block_is_kept() {
    let (out, _, _) = splice("Router  {\n  path: '/'\n}");
    assert_eq!(out, "Router  {\n  path: '/'\n}");
}

#[test]
fn reserved_word_without_block_is_plain_js() {
    let body = "let Listen = 5;";
    let (out, placeholders, _) = splice(body);
    assert_eq!(out, "__CHTL_JS_PLACEHOLDER_0__");
    assert_eq!(placeholders.resolve(&out), Some(body));
}

#[test]
fn lowercase_variant_is_not_reserved() {
    let (out, _, _) = splice("listen { x }");
    assert_eq!(out, "__CHTL_JS_PLACEHOLDER_0__");
}

#[test]
fn reserved_word_as_identifier_suffix_never_fires() {
    let (out, _, _) = splice("unListen { x }");
    assert_eq!(out, "__CHTL_JS_PLACEHOLDER_0__");
}

#[test]
fn all_reserved_words_fire_with_blocks() {
    for word in [
        "Listen",
        "Animate",
        "Delegate",
        "Router",
        "vir",
        "util",
        "iNeverAway",
        "fileloader",
    ] {
        let body = format!("{word} {{ x }}");
        let (out, _, _) = splice(&body);
        assert_eq!(out, body, "{word} block should be verbatim");
    }
}

// === String and comment immunity ===

#[test]
fn arrow_inside_string_stays_plain() {
    let body = r#"let s = "a->b";"#;
    let (out, _, _) = splice(body);
    assert_eq!(out, "__CHTL_JS_PLACEHOLDER_0__");
}

#[test]
fn selector_inside_string_stays_plain() {
    let body = r#"let s = "{{box}}";"#;
    let (out, _, _) = splice(body);
    assert_eq!(out, "__CHTL_JS_PLACEHOLDER_0__");
}

#[test]
fn reserved_word_inside_template_literal_stays_plain() {
    let body = "let s = `Listen { }`;";
    let (out, _, _) = splice(body);
    assert_eq!(out, "__CHTL_JS_PLACEHOLDER_0__");
}

#[test]
fn arrow_inside_line_comment_stays_plain() {
    let body = "// a->b\nf();";
    let (out, _, _) = splice(body);
    assert_eq!(out, "__CHTL_JS_PLACEHOLDER_0__");
}

#[test]
fn selector_inside_block_comment_stays_plain() {
    let body = "/* {{box}} */ f();";
    let (out, _, _) = splice(body);
    assert_eq!(out, "__CHTL_JS_PLACEHOLDER_0__");
}

// === Nesting ===

#[test]
fn selector_in_plain_object_literal() {
    let body = " animate { target: {{box}}, x: 1 } ";
    let (out, placeholders, _) = splice(body);
    assert_eq!(
        out,
        "__CHTL_JS_PLACEHOLDER_0__{{box}}__CHTL_JS_PLACEHOLDER_1__"
    );
    assert_eq!(
        placeholders.resolve("__CHTL_JS_PLACEHOLDER_0__"),
        Some(" animate { target: ")
    );
    assert_eq!(
        placeholders.resolve("__CHTL_JS_PLACEHOLDER_1__"),
        Some(", x: 1 } ")
    );
}

#[test]
fn selector_with_quoted_braces() {
    let body = r#"{{input[type="}}"]}}"#;
    let (out, _, errors) = splice(body);
    assert_eq!(out, body);
    assert!(errors.is_empty());
}

#[test]
fn reserved_block_with_nested_selector() {
    let body = "Listen { click: () => {{box}}->hide() }";
    let (out, _, errors) = splice(body);
    // The whole Listen block is one verbatim lexeme; the selector and
    // arrow inside it stay inside it.
    assert_eq!(out, body);
    assert!(errors.is_empty());
}

// === Unterminated constructs ===

#[test]
fn unterminated_selector_is_reported_and_recovered() {
    let (out, placeholders, errors) = splice("{{box");
    assert_eq!(out, "{{box");
    assert!(placeholders.is_empty());
    assert_eq!(errors.len(), 1);
    assert_eq!(
        errors[0].kind,
        ScanErrorKind::UnterminatedBlock { delim: '}' }
    );
    assert_eq!(errors[0].context, ScanContext::InSelector);
    assert_eq!(errors[0].span, Span::new(0, 2));
}

#[test]
fn unterminated_keyword_block_is_reported() {
    let (out, _, errors) = splice("Listen { x");
    assert_eq!(out, "Listen { x");
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].context, ScanContext::InScriptBlock);
}

#[test]
fn unterminated_string_is_reported() {
    let (_, _, errors) = splice("let s = \"oops");
    assert_eq!(errors.len(), 1);
    assert_eq!(
        errors[0].kind,
        ScanErrorKind::UnterminatedString { quote: '"' }
    );
}

#[test]
fn error_spans_are_offset_by_base() {
    let mut placeholders = PlaceholderMap::new();
    let mut errors = Vec::new();
    splice_script_body("{{box", 100, &mut placeholders, &mut errors);
    assert_eq!(errors[0].span, Span::new(100, 102));
}

// === Numbering ===

#[test]
fn numbering_continues_across_bodies_sharing_a_map() {
    let mut placeholders = PlaceholderMap::new();
    let mut errors = Vec::new();
    let first = splice_script_body("a();", 0, &mut placeholders, &mut errors);
    let second = splice_script_body("b();", 0, &mut placeholders, &mut errors);
    assert_eq!(first, "__CHTL_JS_PLACEHOLDER_0__");
    assert_eq!(second, "__CHTL_JS_PLACEHOLDER_1__");
}

// === Round-trip invariant ===

#[test]
fn round_trip_on_representative_bodies() {
    for body in [
        "",
        " const a = 1; {{box}}->show(); ",
        "a->b->c",
        "Listen { click: f } {{#id}}->toggle();",
        "let s = \"{{not a selector}}\"; // ->\n",
        "{{box",
        "Listen { x",
        "vir(x, y) + util { z }",
        "-",
        "{",
        "}}",
    ] {
        assert_round_trip(body);
    }
}

mod proptest_round_trip {
    use super::*;
    use proptest::prelude::*;

    /// Pieces that stress the splicer: lexemes, near-lexemes, strings,
    /// comments, and plain code.
    const PIECES: &[&str] = &[
        "{{box}}",
        "{{.cls[n=\"}}\"]}}",
        "->",
        "- >",
        "Listen { a: 1 }",
        "Animate(x)",
        "Listen",
        "listen { }",
        "\"a->b{{c}}\"",
        "'}'",
        "`Listen {`",
        "// {{c}} ->\n",
        "/* -> */",
        "const x = 1;",
        "{ k: v }",
        "\n",
        "{{a",
        "\"open",
    ];

    fn body_piece() -> impl Strategy<Value = String> {
        prop_oneof![
            4 => proptest::sample::select(PIECES).prop_map(|s| s.to_string()),
            1 => "[a-z0-9 ;().={}>-]{0,12}",
        ]
    }

    proptest! {
        #[test]
        fn resolving_placeholders_reconstructs_any_body(
            pieces in proptest::collection::vec(body_piece(), 0..12)
        ) {
            let body = pieces.concat();
            let mut placeholders = PlaceholderMap::new();
            let mut errors = Vec::new();
            let out = splice_script_body(&body, 0, &mut placeholders, &mut errors);
            let restored = resolve_placeholders(&out, &placeholders);
            prop_assert_eq!(restored.as_deref(), Ok(body.as_str()));
        }

        #[test]
        fn splicing_is_deterministic(
            pieces in proptest::collection::vec(body_piece(), 0..8)
        ) {
            let body = pieces.concat();
            let mut map_a = PlaceholderMap::new();
            let mut map_b = PlaceholderMap::new();
            let mut errs_a = Vec::new();
            let mut errs_b = Vec::new();
            let out_a = splice_script_body(&body, 0, &mut map_a, &mut errs_a);
            let out_b = splice_script_body(&body, 0, &mut map_b, &mut errs_b);
            prop_assert_eq!(out_a, out_b);
            prop_assert_eq!(map_a, map_b);
            prop_assert_eq!(errs_a, errs_b);
        }
    }
}
