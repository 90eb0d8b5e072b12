use super::*;

#[test]
fn evidence_label_joins_table_and_id() {
    let item = EvidenceItem {
        source_table: "game_details".to_owned(),
        record_id: 22_300_412,
        details: Some("Los Angeles Lakers 115 vs Boston Celtics 126".to_owned()),
        date: Some("2023-12-25".to_owned()),
    };
    assert_eq!(evidence_label(&item), "game_details #22300412");
}

#[test]
fn evidence_label_ignores_optional_fields() {
    let item = EvidenceItem { source_table: "games".to_owned(), record_id: 42, details: None, date: None };
    assert_eq!(evidence_label(&item), "games #42");
}
