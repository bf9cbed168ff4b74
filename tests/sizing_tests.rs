use approx::assert_relative_eq;
use mood_chart::core::{EmotionEntry, HexColor, SizingConfig, all_circle_metrics, circle_metrics};

fn entry(label: &str, intensity: u8) -> EmotionEntry {
    EmotionEntry::new(label, intensity, HexColor::NEUTRAL).expect("valid entry")
}

#[test]
fn joy_and_calm_sizes_follow_intensity_and_co_occurrence() {
    let entries = vec![entry("Joy", 80), entry("Calm", 40)];
    let sizes = all_circle_metrics(&entries, &SizingConfig::default());

    // 148 * 1.42 exceeds the cap
    assert_relative_eq!(sizes[0].circle_diameter, 200.0);
    assert_relative_eq!(sizes[1].circle_diameter, 124.0 * 1.54, epsilon = 1e-9);
    assert!(sizes[0].circle_diameter > sizes[1].circle_diameter);

    assert_relative_eq!(sizes[0].glow_diameter, 200.0 * 2.7, epsilon = 1e-9);
    assert_relative_eq!(sizes[1].glow_diameter, 124.0 * 1.54 * 2.5, epsilon = 1e-9);

    assert_relative_eq!(sizes[0].percent_font_scale, 2.0);
    assert_relative_eq!(sizes[0].label_font_scale, 200.0 / 120.0);
}

#[test]
fn single_zero_intensity_emotion_uses_minimum_base_size() {
    let sizes = all_circle_metrics(&[entry("Neutral", 0)], &SizingConfig::default());
    let metrics = sizes[0];

    // base 100 grown by the single-emotion crowding term of 0.15
    assert_relative_eq!(metrics.circle_diameter, 115.0, epsilon = 1e-9);
    assert_relative_eq!(metrics.glow_diameter, 115.0 * 0.6, epsilon = 1e-9);
    assert_relative_eq!(metrics.percent_font_scale, 1.15, epsilon = 1e-9);
    assert_relative_eq!(metrics.label_font_scale, 115.0 / 120.0, epsilon = 1e-9);
}

#[test]
fn single_emotion_has_no_co_occurrence_growth() {
    let config = SizingConfig::default();
    let metrics = circle_metrics(&[entry("Joy", 100)], 0, &config);

    assert_relative_eq!(metrics.circle_diameter, 160.0 * 1.15, epsilon = 1e-9);
    // 0.1 + 0.5 + 1.5
    assert_relative_eq!(metrics.glow_diameter, 160.0 * 1.15 * 2.1, epsilon = 1e-9);
}

#[test]
fn crowding_terms_saturate() {
    let entries: Vec<EmotionEntry> = (0..10).map(|i| entry(&format!("e{i}"), 0)).collect();
    let metrics = circle_metrics(&entries, 0, &SizingConfig::default());

    assert_relative_eq!(metrics.circle_diameter, 150.0, epsilon = 1e-9);
    assert_relative_eq!(metrics.glow_diameter, 150.0 * 2.1, epsilon = 1e-9);
}

#[test]
fn glow_multiplier_is_capped() {
    let config = SizingConfig {
        glow: mood_chart::core::GlowConfig {
            intensity_weight: 10.0,
            ..Default::default()
        },
        ..SizingConfig::default()
    };
    let entries = vec![entry("a", 100), entry("b", 100), entry("c", 100)];
    let metrics = circle_metrics(&entries, 0, &config);

    assert_relative_eq!(metrics.circle_diameter, 200.0);
    assert_relative_eq!(metrics.glow_diameter, 200.0 * 6.5, epsilon = 1e-9);
}

#[test]
fn font_scales_respect_minimums() {
    let config = SizingConfig {
        min_circle_px: 10.0,
        max_circle_px: 20.0,
        circle_cap_px: 30.0,
        ..SizingConfig::default()
    };
    let metrics = circle_metrics(&[entry("Tiny", 0)], 0, &config);

    assert_relative_eq!(metrics.percent_font_scale, 0.4);
    assert_relative_eq!(metrics.label_font_scale, 0.3);
}

#[test]
fn out_of_range_index_gets_minimum_sizing_without_panicking() {
    let metrics = circle_metrics(&[], 3, &SizingConfig::default());
    assert!(metrics.circle_diameter >= 100.0);
    assert!(metrics.glow_diameter.is_finite());
}

#[test]
fn extreme_glow_terms_keep_glow_finite() {
    let config = SizingConfig {
        glow: mood_chart::core::GlowConfig {
            multiplier_cap: f64::MAX,
            intensity_weight: f64::MAX,
            ..mood_chart::core::GlowConfig::default()
        },
        ..SizingConfig::default()
    };
    let sizes = all_circle_metrics(&[entry("Joy", 100), entry("Calm", 10)], &config);

    for metrics in sizes {
        assert!(metrics.circle_diameter.is_finite());
        assert!(metrics.glow_diameter.is_finite());
        assert!(metrics.glow_diameter >= metrics.circle_diameter * 0.1);
    }
}
