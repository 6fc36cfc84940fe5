mod common;
use common::card_config;
use rheatmap::core::normalize::{
    CardConfig, DEFAULT_ACTIVE_STATES, MAX_DAYS_TO_SHOW, normalize, stub_config,
};
use rheatmap::core::scheduler::RefreshMode;
use rheatmap::models::entity::TrackedEntity;
use rheatmap::utils::time::MINUTES_PER_DAY;

/// Every minute of the day must fall in exactly one segment.
fn assert_partitions_day(cfg: &CardConfig) {
    for minute in 0..MINUTES_PER_DAY {
        let hits = cfg.segments.iter().filter(|s| s.contains(minute)).count();
        assert_eq!(hits, 1, "minute {minute} covered {hits} times");
    }
    let total: u32 = cfg.segments.iter().map(|s| s.length_minutes()).sum();
    assert_eq!(total, MINUTES_PER_DAY);
}

#[test]
fn test_empty_config_uses_defaults() {
    let cfg = normalize(&serde_yaml::Value::Null);

    assert!(cfg.entities.is_empty());
    assert_eq!(cfg.segments.len(), 6);
    assert_eq!(cfg.active_states, DEFAULT_ACTIVE_STATES.to_vec());
    assert_eq!(cfg.days_to_show, 7);
    assert_eq!(cfg.refresh_mode, RefreshMode::Live);
    assert_eq!(cfg.refresh_interval, 1);
    assert!(cfg.shift_overnight);
    assert!(cfg.show_footnote);
    assert!(!cfg.combine_entities);
    assert_eq!(cfg.color_none, "#e5e7eb");
    assert_eq!(cfg.color_out_of_range, "#9ca3af");
    assert_eq!(cfg.icon, "mdi:view-grid");
    assert_eq!(cfg.indicator_width, 36);
    assert_eq!(cfg.time_label_width, 85);
    assert!(cfg.thresholds.is_empty());
    assert_partitions_day(&cfg);
}

#[test]
fn test_default_segment_labels() {
    let cfg = normalize(&serde_yaml::Value::Null);
    let labels: Vec<&str> = cfg
        .segments
        .iter()
        .map(|s| s.display_label.as_str())
        .collect();

    assert_eq!(
        labels,
        vec![
            "12am - 3:59am",
            "4am - 7:59am",
            "8am - 11:59am",
            "12pm - 3:59pm",
            "4pm - 7:59pm",
            "8pm - 11:59pm",
        ]
    );
}

#[test]
fn test_entities_accept_strings_and_maps() {
    let cfg = card_config(
        r#"
entities:
  - light.kitchen
  - entity: binary_sensor.door
    name: Front door
  - entity: "  "
  - entity: switch.fan
    name: ""
"#,
    );

    assert_eq!(
        cfg.entities,
        vec![
            TrackedEntity::new("light.kitchen"),
            TrackedEntity::named("binary_sensor.door", "Front door"),
            TrackedEntity::new("switch.fan"),
        ]
    );
    assert_eq!(cfg.configured_name("binary_sensor.door"), Some("Front door"));
    assert_eq!(cfg.configured_name("switch.fan"), None);
}

#[test]
fn test_active_states_string_form() {
    let cfg = card_config(r#"active_states: " on ,open,, detected ""#);
    assert_eq!(cfg.active_states, vec!["on", "open", "detected"]);
    assert!(cfg.is_active("detected"));
    assert!(!cfg.is_active("off"));
}

#[test]
fn test_active_states_empty_falls_back() {
    let cfg = card_config("active_states: []");
    assert_eq!(cfg.active_states, DEFAULT_ACTIVE_STATES.to_vec());
}

#[test]
fn test_segments_sorted_and_closed() {
    let cfg = card_config(
        r#"
segments:
  - { from: "18:00", label: Evening }
  - { from: "06:00", label: Morning }
  - { from: "12:00" }
"#,
    );

    let starts: Vec<u32> = cfg.segments.iter().map(|s| s.start_mins).collect();
    let ends: Vec<u32> = cfg.segments.iter().map(|s| s.end_mins).collect();
    assert_eq!(starts, vec![360, 720, 1080]);
    assert_eq!(ends, vec![719, 1079, 359]);

    // ids follow declaration order, not sorted order
    assert_eq!(cfg.segments[0].id, "seg_1");
    assert_eq!(cfg.segments[2].id, "seg_0");
    assert_eq!(cfg.segments[0].display_label, "Morning");
    assert_eq!(cfg.segments[1].display_label, "12pm - 5:59pm");
    assert!(cfg.segments[2].wraps());
    assert_partitions_day(&cfg);
}

#[test]
fn test_time_blocks_alias_and_custom_ids() {
    let cfg = card_config(
        r#"
time_blocks:
  - { from: "00:00", _id: night }
  - { from: "12:00", _id: day }
"#,
    );
    assert_eq!(cfg.segments[0].id, "night");
    assert_eq!(cfg.segments[1].id, "day");
    assert_partitions_day(&cfg);
}

#[test]
fn test_single_segment_covers_whole_day() {
    let cfg = card_config(r#"segments: [{ from: "06:30" }]"#);
    assert_eq!(cfg.segments.len(), 1);
    assert_eq!(cfg.segments[0].end_mins, 389);
    assert_partitions_day(&cfg);
}

#[test]
fn test_duplicate_and_invalid_starts_still_partition() {
    let cfg = card_config(
        r#"
segments:
  - { from: "08:00", label: first }
  - { from: "08:00", label: second }
  - { from: "bogus" }
  - { from: "21:45" }
"#,
    );

    // "bogus" falls back to midnight; the duplicate 08:00 is collapsed
    assert_eq!(cfg.segments.len(), 3);
    assert_eq!(cfg.segments[0].start_mins, 0);
    assert_eq!(cfg.segments[1].display_label, "first");
    assert_partitions_day(&cfg);
}

#[test]
fn test_partition_for_many_layouts() {
    let layouts = [
        "segments: [{from: '00:00'}, {from: '06:00'}, {from: '12:00'}, {from: '18:00'}]",
        "segments: [{from: '22:00'}, {from: '02:00'}]",
        "segments: [{from: '23:59'}]",
        "segments: [{from: '7:05'}, {from: '13:17'}, {from: '1:01'}, {from: '20:00'}, {from: '0:30'}]",
    ];
    for yaml in layouts {
        assert_partitions_day(&card_config(yaml));
    }
}

#[test]
fn test_wrong_types_fall_back() {
    let cfg = card_config(
        r#"
days_to_show: lots
refresh_interval: 0
refresh_mode: sometimes
show_total: maybe
indicator_width: "48"
combine_entities: "true"
"#,
    );

    assert_eq!(cfg.days_to_show, 7);
    assert_eq!(cfg.refresh_interval, 1);
    assert_eq!(cfg.refresh_mode, RefreshMode::Live);
    assert!(cfg.show_total);
    assert_eq!(cfg.indicator_width, 48);
    assert!(cfg.combine_entities);
}

#[test]
fn test_thresholds_defaults() {
    let cfg = card_config(
        r##"
color_out_of_range: "#123456"
thresholds:
  - { to: 3, color: "#00ff00" }
  - { from: 4 }
  - not-a-threshold
"##,
    );

    assert_eq!(cfg.thresholds.len(), 2);
    assert_eq!(cfg.thresholds[0].from, 0);
    assert_eq!(cfg.thresholds[0].to, Some(3));
    assert_eq!(cfg.thresholds[1].to, None);
    assert_eq!(cfg.thresholds[1].color, "#123456");
}

#[test]
fn test_explicit_zero_upper_bound_is_kept() {
    let cfg = card_config("thresholds:\n  - { from: 0, to: 0, color: \"#111111\" }\n");
    assert_eq!(cfg.thresholds[0].to, Some(0));
}

#[test]
fn test_oversized_days_to_show_is_capped() {
    let cfg = card_config("days_to_show: 300000000\n");
    assert_eq!(cfg.days_to_show, MAX_DAYS_TO_SHOW);

    assert_eq!(card_config("days_to_show: 3650\n").days_to_show, 3650);
    assert_eq!(card_config("days_to_show: 0\n").days_to_show, 1);
}

#[test]
fn test_static_mode_and_targets() {
    let cfg = card_config("refresh_mode: static\ntarget_domain: light\n");
    assert_eq!(cfg.refresh_mode, RefreshMode::Static);
    assert!(cfg.has_targets());
    assert!(!normalize(&serde_yaml::Value::Null).has_targets());
}

#[test]
fn test_stub_config_normalizes_cleanly() {
    let cfg = normalize(&stub_config());

    assert!(cfg.entities.is_empty());
    assert_eq!(cfg.thresholds.len(), 3);
    assert_eq!(cfg.thresholds[2].to, Some(9999));
    assert_eq!(cfg.active_states, DEFAULT_ACTIVE_STATES.to_vec());
    assert_partitions_day(&cfg);
}
