mod common;
use common::card_config;
use rheatmap::core::colors::{color_for, color_for_count};
use rheatmap::core::generators::{OPEN_UPPER_BOUND, even_segments, gradient_thresholds};
use rheatmap::models::threshold::Threshold;
use rheatmap::utils::colors::Rgb;

fn thresholds() -> Vec<Threshold> {
    vec![
        Threshold::new(1, Some(4), "#a7f3d0"),
        Threshold::new(5, Some(10), "#eab308"),
        Threshold::new(11, Some(20), "#ef4444"),
    ]
}

#[test]
fn test_zero_always_maps_to_none() {
    let mut t = thresholds();
    t.insert(0, Threshold::new(0, None, "#000000"));
    assert_eq!(color_for(0, &t, "none", "oor"), "none");
}

#[test]
fn test_count_inside_single_range() {
    let t = thresholds();
    assert_eq!(color_for(1, &t, "none", "oor"), "#a7f3d0");
    assert_eq!(color_for(4, &t, "none", "oor"), "#a7f3d0");
    assert_eq!(color_for(5, &t, "none", "oor"), "#eab308");
    assert_eq!(color_for(20, &t, "none", "oor"), "#ef4444");
}

#[test]
fn test_unmatched_positive_count_is_out_of_range() {
    let t = thresholds();
    assert_eq!(color_for(21, &t, "none", "oor"), "oor");
    assert_eq!(color_for(3, &[], "none", "oor"), "oor");
}

#[test]
fn test_first_declared_overlapping_threshold_wins() {
    let t = vec![
        Threshold::new(1, Some(10), "first"),
        Threshold::new(5, None, "second"),
    ];
    assert_eq!(color_for(7, &t, "none", "oor"), "first");
    assert_eq!(color_for(11, &t, "none", "oor"), "second");
}

#[test]
fn test_color_for_count_uses_card_settings() {
    let cfg = card_config(
        r##"
color_none: "#111111"
color_out_of_range: "#222222"
thresholds:
  - { from: 2, color: "#333333" }
"##,
    );
    assert_eq!(color_for_count(0, &cfg), "#111111");
    assert_eq!(color_for_count(1, &cfg), "#222222");
    assert_eq!(color_for_count(500, &cfg), "#333333");
}

#[test]
fn test_even_segments() {
    let froms: Vec<String> = even_segments(4).into_iter().map(|s| s.from).collect();
    assert_eq!(froms, vec!["00:00", "06:00", "12:00", "18:00"]);

    let seven: Vec<String> = even_segments(7).into_iter().map(|s| s.from).collect();
    assert_eq!(seven[1], "03:26");
    assert_eq!(seven.len(), 7);

    assert_eq!(even_segments(0).len(), 4);
    assert!(even_segments(3).iter().all(|s| s.label.is_empty()));
}

#[test]
fn test_gradient_thresholds_default_shape() {
    let t = gradient_thresholds(5, 1, 50, "#00ff00", "#ff0000").unwrap();

    let ranges: Vec<(u32, Option<u32>)> = t.iter().map(|t| (t.from, t.to)).collect();
    assert_eq!(
        ranges,
        vec![
            (1, Some(12)),
            (13, Some(25)),
            (26, Some(37)),
            (38, Some(49)),
            (50, Some(OPEN_UPPER_BOUND)),
        ]
    );
    assert_eq!(t[0].color, "#00ff00");
    assert_eq!(t[1].color, "#40bf00");
    assert_eq!(t[2].color, "#808000");
    assert_eq!(t[4].color, "#ff0000");
}

#[test]
fn test_gradient_single_step_uses_first_color() {
    let t = gradient_thresholds(1, 3, 9, "#0000ff", "#ffffff").unwrap();
    assert_eq!(t.len(), 1);
    assert_eq!(t[0].from, 3);
    assert_eq!(t[0].to, Some(OPEN_UPPER_BOUND));
    assert_eq!(t[0].color, "#0000ff");
}

#[test]
fn test_gradient_rejects_bad_color() {
    assert!(gradient_thresholds(3, 1, 10, "green", "#ff0000").is_err());
}

#[test]
fn test_hex_parsing() {
    assert_eq!(Rgb::from_hex("#fa0"), Some(Rgb(0xff, 0xaa, 0x00)));
    assert_eq!(Rgb::from_hex("a7f3d0"), Some(Rgb(0xa7, 0xf3, 0xd0)));
    assert_eq!(Rgb::from_hex("var(--success-color)"), None);
    assert_eq!(Rgb(1, 2, 255).to_hex(), "#0102ff");
}

#[test]
fn test_zero_upper_bound_never_matches_positive_counts() {
    let cfg = card_config(
        r##"
thresholds:
  - { from: 0, to: 0, color: "#111111" }
  - { from: 1, to: 3, color: "#222222" }
"##,
    );
    assert_eq!(color_for_count(2, &cfg), "#222222");
    assert_eq!(color_for_count(4, &cfg), cfg.color_out_of_range);
}
