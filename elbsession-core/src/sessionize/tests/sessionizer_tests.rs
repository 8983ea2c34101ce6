use crate::record::LogRecord;
use crate::sessionize::{SessionAnnotatedRecord, Sessionizer};
use crate::test_support::{base_time, record_at, record_at_micros};
use chrono::TimeDelta;
use pretty_assertions::assert_eq;
use std::time::Duration;

// ---------------------------
// Helpers
// ---------------------------

fn sessionizer(threshold_seconds: u64) -> Sessionizer {
    Sessionizer::new(Duration::from_secs(threshold_seconds))
}

fn seqs(annotated: &[SessionAnnotatedRecord], client: &str) -> Vec<u32> {
    annotated
        .iter()
        .filter(|r| r.client_ip() == client)
        .map(|r| r.session_seq)
        .collect()
}

fn urls(annotated: &[SessionAnnotatedRecord]) -> Vec<&str> {
    annotated.iter().map(|r| r.record.request_url()).collect()
}

// ---------------------------
// Gap semantics
// ---------------------------

#[test]
fn gaps_within_threshold_stay_in_one_session() {
    // Arrange
    let records = vec![
        record_at("A", 0, "/a"),
        record_at("A", 500, "/b"),
        record_at("A", 1200, "/c"),
    ];

    // Act
    let annotated = sessionizer(900).sessionize(records);

    // Assert
    assert_eq!(seqs(&annotated, "A"), vec![1, 1, 1]);
}

#[test]
fn gap_above_threshold_starts_new_session() {
    // Arrange
    let records = vec![
        record_at("A", 0, "/a"),
        record_at("A", 500, "/b"),
        record_at("A", 1500, "/c"),
    ];

    // Act
    let annotated = sessionizer(900).sessionize(records);

    // Assert
    assert_eq!(seqs(&annotated, "A"), vec![1, 1, 2]);
    assert_eq!(
        annotated.iter().map(|r| r.is_session_start).collect::<Vec<_>>(),
        vec![true, false, true]
    );
}

#[test]
fn gap_of_exactly_threshold_is_not_a_new_session() {
    // Arrange
    let records = vec![record_at("A", 0, "/a"), record_at("A", 900, "/b")];

    // Act
    let annotated = sessionizer(900).sessionize(records);

    // Assert
    assert_eq!(seqs(&annotated, "A"), vec![1, 1]);
}

#[test]
fn gap_one_microsecond_over_threshold_is_a_new_session() {
    // Arrange
    let records = vec![
        record_at_micros("A", 0, "/a"),
        record_at_micros("A", 900_000_001, "/b"),
    ];

    // Act
    let annotated = sessionizer(900).sessionize(records);

    // Assert
    assert_eq!(seqs(&annotated, "A"), vec![1, 2]);
}

#[test]
fn annotates_previous_timestamp_and_interval() {
    // Arrange
    let records = vec![
        record_at_micros("A", 1_500_000, "/b"),
        record_at_micros("A", 0, "/a"),
    ];

    // Act
    let annotated = sessionizer(900).sessionize(records);

    // Assert
    assert_eq!(annotated[0].prev_timestamp, None);
    assert_eq!(annotated[0].time_interval, None);
    assert_eq!(annotated[0].time_interval_seconds(), None);
    assert_eq!(annotated[1].prev_timestamp, Some(base_time()));
    assert_eq!(
        annotated[1].time_interval,
        Some(TimeDelta::microseconds(1_500_000))
    );
    assert_eq!(annotated[1].time_interval_seconds(), Some(1.5));
}

#[test]
fn custom_threshold_is_honoured() {
    // Arrange
    let records = vec![
        record_at("A", 0, "/a"),
        record_at("A", 60, "/b"),
        record_at("A", 121, "/c"),
    ];

    // Act
    let annotated = sessionizer(60).sessionize(records);

    // Assert
    assert_eq!(seqs(&annotated, "A"), vec![1, 1, 2]);
}

// ---------------------------
// Ordering
// ---------------------------

#[test]
fn orders_by_timestamp_within_client() {
    // Arrange
    let records = vec![
        record_at("A", 3000, "/late"),
        record_at("A", 0, "/early"),
        record_at("A", 100, "/middle"),
    ];

    // Act
    let annotated = sessionizer(900).sessionize(records);

    // Assert
    assert_eq!(urls(&annotated), vec!["/early", "/middle", "/late"]);
    assert_eq!(seqs(&annotated, "A"), vec![1, 1, 2]);
}

#[test]
fn equal_timestamps_keep_arrival_order() {
    // Arrange
    let records = vec![
        record_at("A", 10, "/first"),
        record_at("A", 10, "/second"),
        record_at("A", 10, "/third"),
    ];

    // Act
    let annotated = sessionizer(900).sessionize(records);

    // Assert
    assert_eq!(urls(&annotated), vec!["/first", "/second", "/third"]);
    assert_eq!(annotated[1].time_interval, Some(TimeDelta::zero()));
    assert_eq!(seqs(&annotated, "A"), vec![1, 1, 1]);
}

#[test]
fn groups_clients_in_ascending_ip_order() {
    // Arrange
    let records = vec![
        record_at("10.0.0.2", 0, "/x"),
        record_at("10.0.0.1", 5, "/y"),
        record_at("10.0.0.2", 1000, "/z"),
    ];

    // Act
    let annotated = sessionizer(900).sessionize(records);

    // Assert
    let clients: Vec<_> = annotated.iter().map(|r| r.client_ip()).collect();
    assert_eq!(clients, vec!["10.0.0.1", "10.0.0.2", "10.0.0.2"]);
    assert_eq!(seqs(&annotated, "10.0.0.1"), vec![1]);
    assert_eq!(seqs(&annotated, "10.0.0.2"), vec![1, 2]);
}

#[test]
fn clients_do_not_share_previous_timestamps() {
    // Arrange
    let records = vec![record_at("A", 0, "/a"), record_at("B", 10, "/b")];

    // Act
    let annotated = sessionizer(900).sessionize(records);

    // Assert
    assert!(annotated.iter().all(|r| r.prev_timestamp.is_none()));
    assert!(annotated.iter().all(|r| r.session_seq == 1));
}

// ---------------------------
// Invariants
// ---------------------------

#[test]
fn session_numbers_are_contiguous_from_one() {
    // Arrange
    let offsets = [0, 1000, 1500, 5000, 5001, 9000, 20000];
    let records: Vec<LogRecord> = offsets
        .iter()
        .map(|offset| record_at("A", *offset, "/"))
        .collect();

    // Act
    let annotated = sessionizer(900).sessionize(records);

    // Assert
    let seqs = seqs(&annotated, "A");
    assert_eq!(seqs, vec![1, 2, 2, 3, 3, 4, 5]);
    let mut expected_next = 1;
    for seq in seqs {
        assert!(seq == expected_next || seq + 1 == expected_next);
        if seq == expected_next {
            expected_next += 1;
        }
    }
}

#[test]
fn re_sessionizing_stripped_output_is_idempotent() {
    // Arrange
    let records = vec![
        record_at("B", 4000, "/4"),
        record_at("A", 0, "/0"),
        record_at("A", 2000, "/2"),
        record_at("B", 0, "/0"),
        record_at("A", 2100, "/21"),
    ];
    let first = sessionizer(900).sessionize(records);

    // Act
    let stripped: Vec<LogRecord> = first
        .clone()
        .into_iter()
        .map(SessionAnnotatedRecord::into_record)
        .collect();
    let second = sessionizer(900).sessionize(stripped);

    // Assert
    assert_eq!(first, second);
}

#[test]
fn single_record_client_forms_one_session() {
    // Act
    let annotated = sessionizer(900).sessionize(vec![record_at("solo", 0, "/")]);

    // Assert
    assert_eq!(annotated.len(), 1);
    assert!(annotated[0].is_session_start);
    assert_eq!(annotated[0].session_seq, 1);
    assert_eq!(annotated[0].interval_micros(), 0);
}

#[test]
fn later_session_start_keeps_its_opening_gap() {
    // Act
    let annotated = sessionizer(900).sessionize(vec![
        record_at("A", 0, "/"),
        record_at("A", 1000, "/"),
    ]);

    // Assert
    assert!(annotated[1].is_session_start);
    assert_eq!(annotated[1].session_seq, 2);
    assert_eq!(annotated[1].interval_micros(), 1_000_000_000);
}

#[test]
fn empty_input_yields_nothing() {
    assert!(sessionizer(900).sessionize(Vec::new()).is_empty());
}

#[test]
fn parallel_run_matches_sequential_run() {
    // Arrange
    let records: Vec<LogRecord> = (0..40)
        .map(|i| record_at(&format!("10.0.0.{}", i % 7), (i * 337) % 5000, "/p"))
        .collect();

    // Act
    let sequential = sessionizer(900).sessionize(records.clone());
    let parallel = sessionizer(900).with_workers(3).sessionize(records);

    // Assert
    assert_eq!(sequential, parallel);
}

#[test]
fn default_threshold_is_fifteen_minutes() {
    assert_eq!(Sessionizer::default().threshold(), Duration::from_secs(900));
}
