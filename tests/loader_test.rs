//! Loader semantics through a scripted record source

mod common;

use std::time::Duration;

use common::mock_data::{FakeSource, mock_company, mock_project};
use portal::remote::{FetchFailure, LoadedRecords, load_records};

#[tokio::test]
async fn test_both_lists_load() {
    let source = FakeSource::new(
        Ok(vec![mock_company("c1", "Acme Corp")]),
        Ok(vec![mock_project("p1", "Warehouse"), mock_project("p2", "Depot")]),
    );

    let loaded = load_records(&source).await;
    assert_eq!(loaded.companies.len(), 1);
    assert_eq!(loaded.projects.len(), 2);
    assert_eq!(source.call_count(), 2);
}

#[tokio::test]
async fn test_both_rejected_gives_empty_lists() {
    let source = FakeSource::new(Err(FetchFailure::Rejected), Err(FetchFailure::Rejected));
    assert_eq!(load_records(&source).await, LoadedRecords::default());
}

#[tokio::test]
async fn test_status_failure_empties_only_its_list() {
    let source = FakeSource::new(
        Err(FetchFailure::Status(503)),
        Ok(vec![mock_project("p1", "Warehouse")]),
    );

    let loaded = load_records(&source).await;
    assert!(loaded.companies.is_empty());
    assert_eq!(loaded.projects.len(), 1);
}

#[tokio::test]
async fn test_transport_failure_empties_both_lists() {
    let source = FakeSource::new(
        Ok(vec![mock_company("c1", "Acme Corp")]),
        Err(FetchFailure::Transport("connection refused".to_string())),
    );
    assert_eq!(load_records(&source).await, LoadedRecords::default());

    let source = FakeSource::new(
        Err(FetchFailure::Malformed("expected value".to_string())),
        Ok(vec![mock_project("p1", "Warehouse")]),
    );
    assert_eq!(load_records(&source).await, LoadedRecords::default());
}

#[tokio::test(start_paused = true)]
async fn test_fetches_run_concurrently() {
    let source = FakeSource::new(Ok(vec![]), Ok(vec![])).with_latency(Duration::from_secs(5));

    let started = tokio::time::Instant::now();
    load_records(&source).await;

    // Sequential fetches would take ten seconds of virtual time
    assert!(started.elapsed() < Duration::from_secs(6));
    assert_eq!(source.call_count(), 2);
}
