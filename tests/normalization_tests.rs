use indexmap::IndexMap;
use mood_chart::MoodError;
use mood_chart::api::{
    EmotionPalette, RawEmotionRecord, normalize_intensity_map, normalize_json, normalize_records,
    sanitize_intensity,
};
use mood_chart::core::{EmotionEntry, HexColor};

#[test]
fn empty_records_yield_no_data_placeholder() {
    let entries = normalize_records(&[], &EmotionPalette::default());
    assert_eq!(entries, vec![EmotionEntry::no_data()]);
    assert!(entries[0].is_no_data());
}

#[test]
fn records_keep_input_order_and_explicit_colors() {
    let records = vec![
        RawEmotionRecord::new("Calm", 40.0).with_color("#87ceeb"),
        RawEmotionRecord::new("Joy", 80.0).with_color("FFD700"),
    ];
    let entries = normalize_records(&records, &EmotionPalette::default());

    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].label(), "Calm");
    assert_eq!(entries[0].color().to_string(), "#87CEEB");
    assert_eq!(entries[1].label(), "Joy");
    assert_eq!(entries[1].intensity(), 80);
}

#[test]
fn records_without_label_or_intensity_are_dropped() {
    let records = vec![
        RawEmotionRecord {
            emotion: Some("   ".to_owned()),
            intensity: Some(20.0),
            color: None,
        },
        RawEmotionRecord {
            emotion: Some("Fear".to_owned()),
            intensity: None,
            color: None,
        },
        RawEmotionRecord::new("Sadness", 35.0),
    ];
    let entries = normalize_records(&records, &EmotionPalette::default());

    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].label(), "Sadness");
}

#[test]
fn intensities_are_clamped_rounded_and_nan_safe() {
    assert_eq!(sanitize_intensity(f64::NAN), 0);
    assert_eq!(sanitize_intensity(f64::INFINITY), 0);
    assert_eq!(sanitize_intensity(-12.0), 0);
    assert_eq!(sanitize_intensity(140.0), 100);
    assert_eq!(sanitize_intensity(42.5), 43);
    assert_eq!(sanitize_intensity(42.49), 42);
}

#[test]
fn missing_or_invalid_colors_fall_back_to_palette() {
    let palette = EmotionPalette::default();
    let records = vec![
        RawEmotionRecord::new("joy", 60.0),
        RawEmotionRecord::new("Curiosity", 30.0).with_color("not-a-color"),
    ];
    let entries = normalize_records(&records, &palette);

    assert_eq!(entries[0].color(), palette.color_for("Joy"));
    assert_eq!(entries[1].color(), HexColor::NEUTRAL);
}

#[test]
fn custom_palette_overrides_lookup() {
    let palette = EmotionPalette::empty(HexColor::rgb(0, 0, 0))
        .with_color("Hope", HexColor::rgb(0x10, 0x20, 0x30));
    let entries = normalize_records(
        &[
            RawEmotionRecord::new("HOPE", 50.0),
            RawEmotionRecord::new("Joy", 50.0),
        ],
        &palette,
    );

    assert_eq!(entries[0].color().to_string(), "#102030");
    assert_eq!(entries[1].color().to_string(), "#000000");
}

#[test]
fn intensity_map_keeps_insertion_order() {
    let mut intensities = IndexMap::new();
    intensities.insert("Sadness".to_owned(), 20.0);
    intensities.insert("Anger".to_owned(), 70.0);
    intensities.insert("Joy".to_owned(), 10.0);

    let entries = normalize_intensity_map(&intensities, &EmotionPalette::default());
    let labels: Vec<&str> = entries.iter().map(EmotionEntry::label).collect();
    assert_eq!(labels, vec!["Sadness", "Anger", "Joy"]);
}

#[test]
fn json_record_array_is_normalized() {
    let json = r##"[
        {"emotion": "Joy", "intensity": 80, "color": "#FFD700"},
        {"label": "Calm", "intensity": "40", "color": "#87CEEB"},
        {"name": "Anxiety", "intensity": "12.6%"}
    ]"##;
    let entries = normalize_json(json, &EmotionPalette::default()).expect("json");

    let summary: Vec<(&str, u8)> = entries
        .iter()
        .map(|entry| (entry.label(), entry.intensity()))
        .collect();
    assert_eq!(summary, vec![("Joy", 80), ("Calm", 40), ("Anxiety", 13)]);
}

#[test]
fn json_object_map_keeps_document_order() {
    let json = r#"{"surprise": 15, "anger": 55, "calm": 30}"#;
    let entries = normalize_json(json, &EmotionPalette::default()).expect("json");

    let labels: Vec<&str> = entries.iter().map(EmotionEntry::label).collect();
    assert_eq!(labels, vec!["surprise", "anger", "calm"]);
}

#[test]
fn json_envelope_and_null_forms_are_accepted() {
    let palette = EmotionPalette::default();

    let envelope = r#"{"message": "ok", "emotions": {"joy": 90}, "emotion_id": "e-1"}"#;
    let entries = normalize_json(envelope, &palette).expect("envelope");
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].intensity(), 90);

    for input in ["", "null", "{\"emotions\": null}", "[]", "{}"] {
        let entries = normalize_json(input, &palette).expect("placeholder input");
        assert_eq!(entries, vec![EmotionEntry::no_data()], "input: {input:?}");
    }
}

#[test]
fn malformed_json_is_an_error() {
    for input in ["[{", "\"joy\"", "42", "{\"joy\": [1, 2]}"] {
        let err = normalize_json(input, &EmotionPalette::default()).expect_err("malformed");
        assert!(matches!(err, MoodError::InvalidData(_)), "input: {input:?}");
    }
}

#[test]
fn emotion_entry_rejects_invalid_fields() {
    assert!(matches!(
        EmotionEntry::new("", 10, HexColor::NEUTRAL),
        Err(MoodError::InvalidEmotion(_))
    ));
    assert!(matches!(
        EmotionEntry::new("Joy", 101, HexColor::NEUTRAL),
        Err(MoodError::InvalidEmotion(_))
    ));
}

#[test]
fn hex_color_parses_supported_forms_only() {
    assert_eq!(HexColor::parse("#ffd700").expect("long"), HexColor::rgb(0xFF, 0xD7, 0x00));
    assert_eq!(HexColor::parse("#abc").expect("short"), HexColor::rgb(0xAA, 0xBB, 0xCC));
    for input in ["#12345", "#GGGGGG", "#FFD70080", "", "#"] {
        assert!(
            matches!(HexColor::parse(input), Err(MoodError::InvalidColor(_))),
            "input: {input:?}"
        );
    }
}

#[test]
fn emotion_entry_deserialization_is_validated() {
    let valid: EmotionEntry =
        serde_json::from_str(r##"{"label": "Joy", "intensity": 80, "color": "#FFD700"}"##)
            .expect("valid entry");
    assert_eq!(valid.color().to_string(), "#FFD700");

    let invalid = serde_json::from_str::<EmotionEntry>(
        r##"{"label": "Joy", "intensity": 120, "color": "#FFD700"}"##,
    );
    assert!(invalid.is_err());
}
