//! Integration tests for named character reference lookup.

use bramble_html::tokenizer::named_character_references::{
    LONGEST_ENTITY_NAME, longest_match, lookup_entity,
};

#[test]
fn test_lookup_common_entities() {
    assert_eq!(lookup_entity("amp;"), Some("&"));
    assert_eq!(lookup_entity("lt;"), Some("<"));
    assert_eq!(lookup_entity("gt;"), Some(">"));
    assert_eq!(lookup_entity("quot;"), Some("\""));
    assert_eq!(lookup_entity("nbsp;"), Some("\u{00A0}"));
}

#[test]
fn test_lookup_legacy_entities() {
    // Legacy entities without semicolon
    assert_eq!(lookup_entity("amp"), Some("&"));
    assert_eq!(lookup_entity("copy"), Some("\u{00A9}"));
    assert_eq!(lookup_entity("not"), Some("\u{00AC}"));
    // Newer entities have no legacy form
    assert_eq!(lookup_entity("hellip"), None);
}

#[test]
fn test_lookup_multi_code_point_entities() {
    assert_eq!(lookup_entity("NotEqualTilde;"), Some("\u{2242}\u{0338}"));
    assert_eq!(lookup_entity("fjlig;"), Some("fj"));
}

#[test]
fn test_lookup_is_case_sensitive() {
    assert_eq!(lookup_entity("AMP;"), Some("&"));
    assert_eq!(lookup_entity("Amp;"), None);
}

#[test]
fn test_lookup_unknown_entity() {
    assert_eq!(lookup_entity("notarealentity;"), None);
    assert_eq!(lookup_entity(""), None);
}

#[test]
fn test_longest_match_prefers_longest_name() {
    assert_eq!(longest_match("notin;"), Some(("notin;", "\u{2209}")));
    assert_eq!(longest_match("notit;"), Some(("not", "\u{00AC}")));
    assert_eq!(longest_match("ampersand"), Some(("amp", "&")));
}

#[test]
fn test_longest_match_without_any_prefix() {
    assert_eq!(longest_match("xyz;"), None);
    assert_eq!(longest_match(""), None);
}

#[test]
fn test_longest_entity_name_bound() {
    assert_eq!(
        "CounterClockwiseContourIntegral;".len(),
        LONGEST_ENTITY_NAME
    );
    assert!(lookup_entity("CounterClockwiseContourIntegral;").is_some());
}
