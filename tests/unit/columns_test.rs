//! Column resolution tests

use sprint_health::core::models::{AliasTable, Field};
use sprint_health::core::services::{resolve_columns, split_line};
use test_case::test_case;

use crate::common::{ENGLISH_HEADER, SPANISH_HEADER};

#[test_case(Field::Type, 0 ; "type")]
#[test_case(Field::Key, 1 ; "key")]
#[test_case(Field::Summary, 3 ; "summary")]
#[test_case(Field::Assignee, 4 ; "assignee")]
#[test_case(Field::Reporter, 5 ; "reporter")]
#[test_case(Field::Priority, 6 ; "priority")]
#[test_case(Field::Status, 7 ; "status")]
#[test_case(Field::Resolution, 8 ; "resolution")]
#[test_case(Field::Created, 9 ; "created")]
#[test_case(Field::Updated, 10 ; "updated")]
#[test_case(Field::EstimateSeconds, 11 ; "estimate")]
#[test_case(Field::WorkedSeconds, 12 ; "worked")]
fn test_spanish_header(field: Field, expected: usize) {
    let columns = resolve_columns(&split_line(SPANISH_HEADER), &AliasTable::new());
    assert_eq!(columns.index(field), Some(expected));
}

#[test_case(Field::Type, 0 ; "type")]
#[test_case(Field::Key, 1 ; "key")]
#[test_case(Field::Summary, 2 ; "summary")]
#[test_case(Field::Status, 6 ; "status")]
#[test_case(Field::Resolution, 7 ; "resolution")]
#[test_case(Field::EstimateSeconds, 10 ; "estimate")]
#[test_case(Field::WorkedSeconds, 11 ; "worked")]
fn test_english_header(field: Field, expected: usize) {
    let columns = resolve_columns(&split_line(ENGLISH_HEADER), &AliasTable::new());
    assert_eq!(columns.index(field), Some(expected));
}

#[test]
fn test_full_headers_resolve_every_field() {
    for header in [SPANISH_HEADER, ENGLISH_HEADER] {
        let columns = resolve_columns(&split_line(header), &AliasTable::new());
        assert!(columns.missing().is_empty(), "{header}: {:?}", columns.missing());
    }
}

#[test]
fn test_alias_order_beats_header_order() {
    // "Type" comes first in the header, but the Spanish alias is tried first
    let header = split_line("Type,Tipo de Incidencia");
    let columns = resolve_columns(&header, &AliasTable::new());

    assert_eq!(columns.index(Field::Type), Some(1));
    assert_eq!(columns.column(Field::Type).map(|c| c.header.as_str()), Some("Tipo de Incidencia"));
}

#[test]
fn test_first_matching_cell_wins_within_an_alias() {
    let header = split_line("Parent Key,Key");
    let columns = resolve_columns(&header, &AliasTable::new());
    assert_eq!(columns.index(Field::Key), Some(0));
}

#[test]
fn test_short_header_matches_longer_alias() {
    // "time" is contained in both "Time Estimate" and "Time Spent"
    let header = split_line("Key,Time");
    let columns = resolve_columns(&header, &AliasTable::new());

    assert_eq!(columns.index(Field::EstimateSeconds), Some(1));
    assert_eq!(columns.index(Field::WorkedSeconds), Some(1));
}

#[test]
fn test_blank_header_cells_are_skipped() {
    let header = split_line(",Key,,Summary");
    let columns = resolve_columns(&header, &AliasTable::new());

    assert_eq!(columns.index(Field::Key), Some(1));
    assert_eq!(columns.index(Field::Summary), Some(3));
    assert!(!columns.is_resolved(Field::Status));
}

#[test]
fn test_extra_aliases_are_tried_after_defaults() {
    let aliases = AliasTable::new().with_alias(Field::Key, "Clé");
    let header = split_line("Clé,Résumé");
    let columns = resolve_columns(&header, &aliases);

    assert_eq!(columns.index(Field::Key), Some(0));
    assert!(!columns.is_resolved(Field::Summary));
}

#[test]
fn test_blank_extra_alias_is_ignored() {
    let aliases = AliasTable::new().with_alias(Field::Key, "   ");
    assert_eq!(aliases.aliases(Field::Key).count(), Field::Key.default_aliases().len());
}

#[test]
fn test_unknown_header_leaves_fields_unresolved() {
    let columns = resolve_columns(&split_line("Foo,Bar"), &AliasTable::new());

    assert_eq!(columns.missing().len(), Field::COUNT);
    let row = split_line("1,2");
    assert_eq!(columns.get(&row, Field::Key), "");
}

#[test]
fn test_get_on_short_row_is_empty() {
    let columns = resolve_columns(&split_line(ENGLISH_HEADER), &AliasTable::new());
    let row = split_line("Bug,API-1");

    assert_eq!(columns.get(&row, Field::Key), "API-1");
    assert_eq!(columns.get(&row, Field::WorkedSeconds), "");
}

#[test_case("key", Field::Key ; "plain")]
#[test_case("estimateSeconds", Field::EstimateSeconds ; "camel case")]
#[test_case("estimate_seconds", Field::EstimateSeconds ; "snake case")]
#[test_case("WORKED_SECONDS", Field::WorkedSeconds ; "upper case")]
fn test_field_from_str(input: &str, expected: Field) {
    assert_eq!(input.parse::<Field>().unwrap(), expected);
}

#[test]
fn test_field_from_str_rejects_unknown() {
    let err = "sprint".parse::<Field>().unwrap_err();
    assert!(err.contains("sprint"));
}
