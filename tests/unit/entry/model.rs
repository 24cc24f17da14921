use super::*;

const ENTRY_JSON: &str = r#"{
    "type": "8x2",
    "definition": 41628,
    "avScore1": 0.61,
    "avScore2": 0.83,
    "avScore3": 0.95,
    "avScore4": 0.99,
    "avImage1": "00",
    "avImage2": "1",
    "avImage3": "ff",
    "avImage4": "deadbeef"
}"#;

fn entry() -> MixEntry {
    MixEntry::from_reader(ENTRY_JSON.as_bytes()).unwrap()
}

#[test]
fn parses_camel_case_record() {
    let e = entry();
    assert_eq!(e.mix_type, "8x2");
    assert_eq!(e.definition, 41628);
    assert_eq!(e.avalanche_scores(), [0.61, 0.83, 0.95, 0.99]);
    assert_eq!(e.avalanche_image_refs(), ["00", "1", "ff", "deadbeef"]);
}

#[test]
fn descriptions_come_from_definition() {
    let e = entry();
    assert_eq!(e.terse_description().unwrap(), "XOR 1 ADD 2 XOR 3 ADD 4");
    assert_eq!(e.code_description().unwrap().lines().count(), 4);
}

#[test]
fn image_paths_use_config_prefix() {
    let e = entry();
    let paths = e.image_paths(&ArxConfig::default()).unwrap();
    assert_eq!(
        paths,
        [
            "/images/000/00.png",
            "/images/1FB/1.png",
            "/images/0F1/ff.png",
            "/images/ACD/deadbeef.png",
        ]
    );
}

#[test]
fn negative_wire_definition_keeps_bit_pattern() {
    let mut e = entry();
    e.mix_type = "64x4".to_string();
    e.definition = -9_165_955_468_733_951_554;
    assert_eq!(e.packed_definition(), 0x80cb_fc10_8310_51be);
    let desc = e.descriptor().unwrap();
    assert_eq!(desc.pack(), 0x00cb_fc10_8310_51be);
}

#[test]
fn unknown_type_surfaces_from_every_accessor() {
    let mut e = entry();
    e.mix_type = "8x9".to_string();
    assert!(matches!(e.descriptor(), Err(ArxError::UnknownType(_))));
    assert!(e.terse_description().is_err());
    assert!(e.summary(&ArxConfig::default()).is_err());
}

#[test]
fn bad_image_ref_fails_summary() {
    let mut e = entry();
    e.av_image3 = "not-hex".to_string();
    let err = e.summary(&ArxConfig::default()).unwrap_err();
    assert!(matches!(err, ArxError::InvalidHexFormat(_)));
}

#[test]
fn summary_serializes_for_ui() {
    let s = entry().summary(&ArxConfig::default()).unwrap();
    assert_eq!(s.mix_type, MixType::Mix8x2);
    let v = serde_json::to_value(&s).unwrap();
    assert_eq!(v["type"], "8x2");
    assert_eq!(v["definition"], 41628);
    assert_eq!(v["terse"], "XOR 1 ADD 2 XOR 3 ADD 4");
    assert_eq!(v["image_paths"][1], "/images/1FB/1.png");
    assert_eq!(v["operations"].as_array().unwrap().len(), 4);
}

#[test]
fn parse_entries_accepts_one_or_many() {
    let one = parse_entries(ENTRY_JSON.as_bytes()).unwrap();
    assert_eq!(one.len(), 1);

    let many = format!("[{ENTRY_JSON}, {ENTRY_JSON}]");
    let many = parse_entries(many.as_bytes()).unwrap();
    assert_eq!(many.len(), 2);
    assert_eq!(many[0], many[1]);

    let err = parse_entries(r#"{"type": "8x2"}"#.as_bytes()).unwrap_err();
    assert!(matches!(err, ArxError::Serde(_)));
}
