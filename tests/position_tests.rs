use approx::assert_abs_diff_eq;
use mood_chart::core::{EllipseLayout, PercentPoint, emotion_positions, slot_angle};

#[test]
fn no_emotions_yield_no_positions() {
    assert!(emotion_positions(0, EllipseLayout::default()).is_empty());
}

#[test]
fn single_emotion_sits_at_center() {
    let positions = emotion_positions(1, EllipseLayout::default());
    assert_eq!(positions, vec![PercentPoint::new(50.0, 50.0)]);
}

#[test]
fn two_emotions_sit_at_top_and_bottom() {
    let positions = emotion_positions(2, EllipseLayout::default());
    assert_eq!(positions.len(), 2);

    assert_abs_diff_eq!(positions[0].x, 50.0, epsilon = 1e-9);
    assert_abs_diff_eq!(positions[0].y, 15.0, epsilon = 1e-9);
    assert_abs_diff_eq!(positions[1].x, 50.0, epsilon = 1e-9);
    assert_abs_diff_eq!(positions[1].y, 85.0, epsilon = 1e-9);
}

#[test]
fn three_emotions_proceed_clockwise_from_top() {
    let positions = emotion_positions(3, EllipseLayout::default());
    let offset = 40.0 * (std::f64::consts::PI / 6.0).cos();

    assert_abs_diff_eq!(positions[0].x, 50.0, epsilon = 1e-9);
    assert_abs_diff_eq!(positions[0].y, 15.0, epsilon = 1e-9);
    assert_abs_diff_eq!(positions[1].x, 50.0 + offset, epsilon = 1e-9);
    assert_abs_diff_eq!(positions[1].y, 67.5, epsilon = 1e-9);
    assert_abs_diff_eq!(positions[2].x, 50.0 - offset, epsilon = 1e-9);
    assert_abs_diff_eq!(positions[2].y, 67.5, epsilon = 1e-9);
}

#[test]
fn positions_reconstruct_to_slot_angles_on_the_ellipse() {
    let layout = EllipseLayout::default();
    for count in 2..=12 {
        let positions = emotion_positions(count, layout);
        for (index, point) in positions.iter().enumerate() {
            let dx = (point.x - layout.center_x) / layout.radius_x;
            let dy = (point.y - layout.center_y) / layout.radius_y;
            assert_abs_diff_eq!(dx * dx + dy * dy, 1.0, epsilon = 1e-9);

            let expected = slot_angle(index, count);
            let actual = dy.atan2(dx);
            let delta = (actual - expected).rem_euclid(std::f64::consts::TAU);
            assert!(delta < 1e-9 || (std::f64::consts::TAU - delta) < 1e-9);
        }
    }
}

#[test]
fn wide_ellipse_positions_are_clamped_into_bounds() {
    let layout = EllipseLayout {
        radius_x: 60.0,
        radius_y: 60.0,
        ..EllipseLayout::default()
    };
    let positions = emotion_positions(4, layout);

    assert_abs_diff_eq!(positions[0].y, 10.0, epsilon = 1e-9);
    assert_abs_diff_eq!(positions[1].x, 90.0, epsilon = 1e-9);
    assert_abs_diff_eq!(positions[2].y, 90.0, epsilon = 1e-9);
    assert_abs_diff_eq!(positions[3].x, 10.0, epsilon = 1e-9);
    for point in positions {
        assert!((10.0..=90.0).contains(&point.x));
        assert!((10.0..=90.0).contains(&point.y));
    }
}

#[test]
fn positions_are_deterministic() {
    let layout = EllipseLayout::default();
    assert_eq!(emotion_positions(7, layout), emotion_positions(7, layout));
}
