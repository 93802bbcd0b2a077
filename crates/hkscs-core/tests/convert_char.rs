//! Single-character conversion against the shipped revision data

use hkscs_core::{Converter, Error};

fn converter() -> Converter {
    Converter::new().unwrap()
}

#[test]
fn remaps_1999_alternate() {
    let c = converter();
    assert_eq!(c.convert_char("\u{ECD1}").unwrap(), "嘅");
    assert_eq!(c.convert_char("\u{E7D4}").unwrap(), "啱");
    assert_eq!(c.convert_char("\u{E0B2}").unwrap(), "噏");
}

#[test]
fn remaps_via_two_hops() {
    // EC77 (GCCS) -> 4CA4 (HKSCS-1999) -> 9FD0 (HKSCS-2016)
    let c = converter();
    assert_eq!(c.convert_char("\u{EC77}").unwrap(), "\u{9FD0}");
    // E5A0 (GCCS) -> 3DB7 -> 9FB4 (HKSCS-2004)
    assert_eq!(c.convert_char("\u{E5A0}").unwrap(), "\u{9FB4}");
}

#[test]
fn remaps_2016_literal_character() {
    // The HKSCS-2016 source stores targets as literal characters
    let c = converter();
    assert_eq!(c.convert_char("\u{4CA4}").unwrap(), "\u{9FD0}");
    assert_eq!(c.convert_char("\u{3588}").unwrap(), "\u{9FD1}");
}

#[test]
fn composed_diacritic_sequences() {
    let c = converter();
    assert_eq!(c.convert_char("\u{F325}").unwrap(), "\u{CA}\u{304}");
    assert_eq!(c.convert_char("\u{F327}").unwrap(), "\u{CA}\u{30C}");
    assert_eq!(c.convert_char("\u{F344}").unwrap(), "\u{EA}\u{304}");
    assert_eq!(c.convert_char("\u{F346}").unwrap(), "\u{EA}\u{30C}");
}

#[test]
fn iso_tables_remap_both_editions() {
    let c = converter();
    // 1993-edition and 2000-edition codepoints both reach the 2001 target
    assert_eq!(c.convert_char("\u{EB40}").unwrap(), "\u{27D73}");
    assert_eq!(c.convert_char("\u{3CDE}").unwrap(), "\u{27D73}");
    // Row with an empty 1993 cell still maps the 2000 codepoint
    assert_eq!(c.convert_char("\u{43F2}").unwrap(), "\u{26A2D}");
}

#[test]
fn supplementary_plane_targets() {
    let c = converter();
    assert_eq!(c.convert_char("\u{F7D8}").unwrap(), "\u{2420E}");
    assert_eq!(c.convert_char("\u{E3A6}").unwrap(), "\u{2A3ED}");
}

#[test]
fn self_map_rows_resolve_to_input() {
    let c = converter();
    // 55AE -> 55AE and 26B29 -> 26B29 are discarded during construction
    assert_eq!(c.convert_char("\u{55AE}").unwrap(), "\u{55AE}");
    assert_eq!(c.convert_char("\u{26B29}").unwrap(), "\u{26B29}");
}

#[test]
fn malformed_table_values_fail_soft() {
    let c = converter();
    // Non-hex target "(reserved)"
    assert_eq!(c.convert_char("\u{E042}").unwrap(), "\u{E042}");
    // Composed sequence with a non-hex element
    assert_eq!(c.convert_char("\u{F348}").unwrap(), "\u{F348}");
    // Hex target in the surrogate range
    assert_eq!(c.convert_char("\u{E043}").unwrap(), "\u{E043}");
}

#[test]
fn unmapped_characters_unchanged() {
    let c = converter();
    for input in ["a", "1", "亂", "❓", "'", "අ", "Ê"] {
        assert_eq!(c.convert_char(input).unwrap(), input);
    }
}

#[test]
fn rejects_empty_input() {
    let err = converter().convert_char("").unwrap_err();
    assert!(matches!(err, Error::InvalidArity { count: 0 }));
}

#[test]
fn rejects_multiple_codepoints() {
    let err = converter().convert_char("Hi!").unwrap_err();
    assert!(matches!(err, Error::InvalidArity { count: 3 }));
}

#[test]
fn rejects_multicodepoint_emoji() {
    let err = converter().convert_char("👋🏿").unwrap_err();
    assert!(matches!(err, Error::InvalidArity { count: 2 }));
}
