use crate::cli::analyze::{render_json, render_pretty};
use crate::pipeline::Pipeline;
use crate::test_support::record_at;
use pretty_assertions::assert_eq;
use serde_json::Value;

fn lines() -> Vec<String> {
    vec![
        record_at("10.0.0.1", 0, "/home").to_string(),
        record_at("10.0.0.1", 90, "/cart").to_string(),
        record_at("10.0.0.2", 0, "/home").to_string(),
        "broken".to_string(),
    ]
}

#[test]
fn pretty_output_has_every_section_in_order() {
    // Arrange
    let report = Pipeline::default().run(lines()).unwrap();
    let mut out = Vec::new();

    // Act
    render_pretty(&report, 20, &mut out).unwrap();

    // Assert
    let text = String::from_utf8(out).unwrap();
    let positions: Vec<usize> = [
        "Prepared Logs",
        "Sessionized Logs",
        "Average Session Time",
        "Unique URL Visit per Session",
        "Most Engaged Users",
    ]
    .iter()
    .map(|title| text.find(title).unwrap())
    .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]));
    assert!(text.contains("90.000000s"));
    assert!(text.contains("1 malformed line(s) skipped"));
}

#[test]
fn pretty_output_is_truncated_to_top() {
    // Arrange
    let report = Pipeline::default().run(lines()).unwrap();
    let mut out = Vec::new();

    // Act
    render_pretty(&report, 1, &mut out).unwrap();

    // Assert
    let text = String::from_utf8(out).unwrap();
    assert!(text.contains("(first 1 of 3)"));
    assert!(!text.contains("/cart"));
}

#[test]
fn json_output_is_one_document() {
    // Arrange
    let report = Pipeline::default().run(lines()).unwrap();
    let mut out = Vec::new();

    // Act
    render_json(&report, &mut out).unwrap();

    // Assert
    let json: Value = serde_json::from_slice(&out).unwrap();
    assert_eq!(json["stats"]["parsed"], 3);
    assert_eq!(json["average_session_duration"], 90.0);
    assert_eq!(json["sessionized"].as_array().unwrap().len(), 3);
    assert_eq!(json["sessionized"][1]["url"], "/cart");
    assert_eq!(json["sessionized"][1]["time_interval_seconds"], 90.0);
    assert_eq!(json["most_engaged_clients"][0]["client_ip"], "10.0.0.1");
    assert_eq!(json["rejected"][0]["line"], 4);
    assert_eq!(json["rejected"][0]["text"], "broken");
}
