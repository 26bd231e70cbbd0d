use kindred_core::{Character, Error, parse_characters};

#[test]
fn display_name_keeps_short_names_intact() {
    let c = Character {
        name: "Talon Vexley".to_string(),
        ..Default::default()
    };
    assert_eq!(c.display_name(16), "Talon Vexley");
}

#[test]
fn display_name_shortens_long_names_to_first_name_and_initial() {
    let c = Character {
        name: "Maximilian Ravenscroft the Unbowed".to_string(),
        ..Default::default()
    };
    assert_eq!(c.display_name(16), "Maximilian U.");
}

#[test]
fn display_name_with_a_single_long_word_keeps_just_that_word() {
    let c = Character {
        name: "Aaaaaaaaaaaaaaaaaaaaaargh".to_string(),
        ..Default::default()
    };
    assert_eq!(c.display_name(16), "Aaaaaaaaaaaaaaaaaaaaaargh");
}

#[test]
fn parse_characters_reads_a_json_array_with_missing_fields() {
    let json = r#"[
        {"id": "r", "name": "Root"},
        {"id": "c", "name": "Child", "parent_1": "r", "main_house": "Ravens",
         "birth_year": 312, "aliases": ["the Quiet"]}
    ]"#;
    let records = parse_characters(json).unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[1].parent_1.as_deref(), Some("r"));
    assert_eq!(records[1].aliases, vec!["the Quiet".to_string()]);
    assert!(records[0].parent_1.is_none());
}

#[test]
fn parse_characters_reports_malformed_json() {
    match parse_characters("not json") {
        Err(Error::InvalidInput { .. }) => {}
        other => panic!("expected InvalidInput, got {other:?}"),
    }
}
