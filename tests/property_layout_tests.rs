use approx::assert_abs_diff_eq;
use mood_chart::api::{MoodLayoutConfig, build_layout, neutral_background};
use mood_chart::core::{
    EllipseLayout, EmotionEntry, HexColor, SizingConfig, all_circle_metrics, emotion_positions,
    slot_angle,
};
use mood_chart::render::{AlphaEncoding, StopPaint};
use proptest::prelude::*;

fn entries_from(specs: &[(u8, [u8; 3])]) -> Vec<EmotionEntry> {
    specs
        .iter()
        .enumerate()
        .map(|(idx, (intensity, [r, g, b]))| {
            EmotionEntry::new(format!("emotion-{idx}"), *intensity, HexColor::rgb(*r, *g, *b))
                .expect("valid entry")
        })
        .collect()
}

fn emotion_specs(max_len: usize) -> impl Strategy<Value = Vec<(u8, [u8; 3])>> {
    prop::collection::vec((0u8..=100, any::<[u8; 3]>()), 0..max_len)
}

proptest! {
    #[test]
    fn positions_are_counted_and_clamped(count in 0usize..64) {
        let positions = emotion_positions(count, EllipseLayout::default());
        prop_assert_eq!(positions.len(), count);
        for point in &positions {
            prop_assert!((10.0..=90.0).contains(&point.x));
            prop_assert!((10.0..=90.0).contains(&point.y));
        }
        if count == 1 {
            prop_assert_eq!((positions[0].x, positions[0].y), (50.0, 50.0));
        }
    }

    #[test]
    fn positions_lie_on_the_default_ellipse(count in 2usize..48) {
        let ellipse = EllipseLayout::default();
        for (idx, point) in emotion_positions(count, ellipse).iter().enumerate() {
            let angle = slot_angle(idx, count);
            let cos = (point.x - ellipse.center_x) / ellipse.radius_x;
            let sin = (point.y - ellipse.center_y) / ellipse.radius_y;
            assert_abs_diff_eq!(cos, angle.cos(), epsilon = 1e-9);
            assert_abs_diff_eq!(sin, angle.sin(), epsilon = 1e-9);
            assert_abs_diff_eq!(cos.hypot(sin), 1.0, epsilon = 1e-9);
        }
    }

    #[test]
    fn sizes_stay_within_bounds(specs in emotion_specs(24)) {
        let entries = entries_from(&specs);
        let sizes = all_circle_metrics(&entries, &SizingConfig::default());
        prop_assert_eq!(sizes.len(), entries.len());
        for metrics in sizes {
            prop_assert!((100.0..=200.0).contains(&metrics.circle_diameter));
            prop_assert!(metrics.glow_diameter >= metrics.circle_diameter * 0.1 - 1e-9);
            prop_assert!(metrics.glow_diameter <= metrics.circle_diameter * 6.5 + 1e-9);
            prop_assert!(metrics.percent_font_scale >= 0.4);
            prop_assert!(metrics.label_font_scale >= 0.3);
        }
    }

    #[test]
    fn stronger_emotion_never_gets_a_smaller_circle(specs in emotion_specs(12)) {
        prop_assume!(specs.len() >= 2);
        let entries = entries_from(&specs);
        let sizes = all_circle_metrics(&entries, &SizingConfig::default());
        for (a, b) in (0..entries.len()).flat_map(|a| (0..entries.len()).map(move |b| (a, b))) {
            if entries[a].intensity() > entries[b].intensity() {
                prop_assert!(sizes[a].circle_diameter >= sizes[b].circle_diameter);
            }
        }
    }

    #[test]
    fn no_data_background_ignores_intensities(
        intensity in 0u8..=100,
        specs in emotion_specs(6),
    ) {
        let config = MoodLayoutConfig::default();
        let mut entries = vec![
            EmotionEntry::new("No Data", intensity, HexColor::rgb(1, 2, 3)).expect("placeholder"),
        ];
        entries.extend(entries_from(&specs));

        let layout = build_layout(&entries, &config);
        prop_assert_eq!(&layout.background, &neutral_background(&config.gradient));
        prop_assert_eq!(
            layout.background.to_css(AlphaEncoding::DecimalDigits),
            "linear-gradient(135deg, #9CA3AF 0%, #6B7280 100%)"
        );
    }

    #[test]
    fn first_of_tied_maxima_is_dominant(
        specs in emotion_specs(10),
        peak in 1u8..=100,
        first_slot in 0usize..10,
        gap in 1usize..10,
    ) {
        let mut specs: Vec<(u8, [u8; 3])> = specs
            .into_iter()
            .map(|(intensity, color)| (intensity.min(peak - 1), color))
            .collect();
        let first = first_slot.min(specs.len());
        specs.insert(first, (peak, [0xFF, 0x00, 0x00]));
        let second = (first + gap).min(specs.len());
        specs.insert(second, (peak, [0x00, 0x00, 0xFF]));

        let entries = entries_from(&specs);
        let layout = build_layout(&entries, &MoodLayoutConfig::default());
        prop_assert_eq!(layout.dominant, Some(first));

        let base_stop = layout.background.layers[0].stops()[0];
        let base_is_first_peak_color = matches!(
            base_stop.paint,
            StopPaint::Tinted { color, .. } if color == HexColor::rgb(0xFF, 0x00, 0x00)
        );
        prop_assert!(base_is_first_peak_color);
    }

    #[test]
    fn multi_emotion_background_has_base_plus_one_layer_each(specs in emotion_specs(16)) {
        prop_assume!(specs.len() >= 2);
        let entries = entries_from(&specs);
        let layout = build_layout(&entries, &MoodLayoutConfig::default());
        prop_assert_eq!(layout.background.layers.len(), entries.len() + 1);
        prop_assert!(layout.background.validate().is_ok());
    }
}
