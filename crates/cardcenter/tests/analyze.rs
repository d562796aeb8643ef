mod common;

use cardcenter::{
    map_grade, ratio_label, AnalyzeConfig, Analyzer, CenteringError, DetectionError, Rect, Side,
    Stage,
};
use common::{card_image, encode_png};
use image::{GrayImage, Luma};

const CARD: [i32; 4] = [30, 40, 240, 330];

fn assert_near(actual: Rect, expected: Rect, tol: i32) {
    assert!(
        (actual.x - expected.x).abs() <= tol
            && (actual.y - expected.y).abs() <= tol
            && (actual.right() - expected.right()).abs() <= tol
            && (actual.bottom() - expected.bottom()).abs() <= tol,
        "expected {expected:?} +-{tol}, got {actual:?}"
    );
}

#[test]
fn analyzes_encoded_front_and_back() {
    let front = card_image(300, 420, CARD, [60, 70, 180, 270]);
    let back = card_image(300, 420, CARD, [50, 90, 200, 250]);

    let result = Analyzer::new()
        .analyze_bytes(&encode_png(&front), &encode_png(&back))
        .expect("analysis succeeds");

    for side in [&result.front, &result.back] {
        assert_near(side.outer_border, Rect::from(CARD), 2);
        assert!(side.outer_border.contains(&side.artwork_rectangle));
        assert_eq!(side.psa_centering_ratio, side.limiting_ratio());
        assert_eq!(
            side.limiting_ratio(),
            side.horizontal_ratio().min(side.vertical_ratio())
        );
    }

    let s = &result.summary;
    assert!((4..=10).contains(&s.centering_grade));
    assert_eq!(
        s.centering_grade,
        map_grade(s.front_centering_ratio, s.back_centering_ratio)
    );
    assert_eq!(s.front_ratio_string, ratio_label(s.front_centering_ratio));
    assert_eq!(s.back_ratio_value, s.back_centering_ratio / 100.0);
}

fn assert_close(actual: f64, expected: f64, tol: f64, what: &str) {
    assert!(
        (actual - expected).abs() <= tol,
        "{what}: expected {expected} +-{tol}, got {actual}"
    );
}

#[test]
fn measured_borders_follow_rendered_geometry() {
    // Card [30, 40, 240, 330]: 30/30 left/right and 30/45 top/bottom borders.
    let front = card_image(300, 420, CARD, [60, 70, 180, 255]);
    // Back: 20/40 left/right and 30/30 top/bottom.
    let back = card_image(300, 420, CARD, [50, 70, 180, 270]);

    let result = Analyzer::new()
        .analyze_bytes(&encode_png(&front), &encode_png(&back))
        .expect("analysis succeeds");

    let f = &result.front;
    assert_close(f.borders.left, 30.0, 3.0, "front left");
    assert_close(f.borders.right, 30.0, 3.0, "front right");
    assert_close(f.borders.top, 30.0, 3.0, "front top");
    assert_close(f.borders.bottom, 45.0, 3.0, "front bottom");
    assert_close(f.horizontal_ratio(), 50.0, 3.0, "front horizontal");
    assert_close(f.vertical_ratio(), 40.0, 3.0, "front vertical");
    assert_close(f.limiting_ratio(), 40.0, 3.0, "front limiting");

    let b = &result.back;
    assert_close(b.borders.left, 20.0, 3.0, "back left");
    assert_close(b.borders.right, 40.0, 3.0, "back right");
    assert_close(b.horizontal_ratio(), 100.0 / 3.0, 3.0, "back horizontal");
    assert_close(b.vertical_ratio(), 50.0, 3.0, "back vertical");
    assert_close(b.limiting_ratio(), 100.0 / 3.0, 3.0, "back limiting");
}

#[test]
fn sequential_and_parallel_agree() {
    let front = card_image(300, 420, CARD, [70, 80, 160, 250]);
    let back = card_image(300, 420, CARD, [45, 60, 210, 290]);

    let parallel = Analyzer::new().analyze_gray(&front, &back).unwrap();
    let sequential = Analyzer::with_config(AnalyzeConfig {
        parallel_sides: false,
        ..AnalyzeConfig::default()
    })
    .analyze_gray(&front, &back)
    .unwrap();
    assert_eq!(parallel, sequential);
}

#[test]
fn blank_back_fails_without_partial_result() {
    let front = card_image(300, 420, CARD, [60, 70, 180, 270]);
    let blank = GrayImage::from_pixel(300, 420, Luma([128]));

    let err = Analyzer::new().analyze_gray(&front, &blank).unwrap_err();
    match err {
        CenteringError::Detection { side, stage, source } => {
            assert_eq!(side, Side::Back);
            assert_eq!(stage, Stage::OuterBorder);
            assert_eq!(source, DetectionError::NoOuterBorder);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn undecodable_front_is_an_image_error() {
    let back = encode_png(&card_image(300, 420, CARD, [60, 70, 180, 270]));
    let err = Analyzer::new().analyze_bytes(&[0u8; 16], &back).unwrap_err();
    assert!(matches!(err, CenteringError::ImageDecode { side: Side::Front, .. }));
}

#[test]
fn result_serializes_with_downstream_field_names() {
    let img = card_image(300, 420, CARD, [60, 70, 180, 270]);
    let result = Analyzer::new().analyze_gray(&img, &img).unwrap();
    let json = serde_json::to_value(&result).unwrap();

    for side in ["front", "back"] {
        for key in ["outer_border", "artwork_rectangle", "borders", "ratios"] {
            assert!(json[side].get(key).is_some(), "{side}.{key} missing");
        }
        assert_eq!(json[side]["outer_border"].as_array().map(Vec::len), Some(4));
    }
    assert_eq!(
        json["summary"]["centeringGrade"],
        serde_json::json!(result.grade())
    );
    assert_eq!(
        json["summary"]["frontRatioString"],
        serde_json::json!(result.front_ratio_label())
    );
}
