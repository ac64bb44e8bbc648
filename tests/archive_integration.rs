//! Archive integration tests
//!
//! End-to-end tests exercising the full EventLogService lifecycle over the
//! JSON file archive. Covers insert outcomes, bounded reads, lookups,
//! persistence across reopen, and concurrent batches.

use a3s_eventlog::{
    ArchiveStore, EventLogError, EventLogService, EventPayload, FileArchiveStore, InsertResult,
};
use serde_json::{json, Value};
use std::sync::Arc;

fn system_record(event_id: &str, location: &str) -> Value {
    json!({
        "type": "system",
        "timestamp": "2006-01-13T00:00:00Z",
        "event_id": event_id,
        "event": {"system_id": "id_123", "location": location, "operation": "read"},
    })
}

fn user_record(event_id: &str) -> Value {
    json!({
        "type": "user",
        "timestamp": "2006-01-13T00:00:00Z",
        "event_id": event_id,
        "event": {"username": "my_user", "email": "my_user@email.com", "operation": "read/write"},
    })
}

async fn file_service(dir: &tempfile::TempDir) -> EventLogService {
    let store = FileArchiveStore::open(dir.path().join("archive.json"))
        .await
        .unwrap();
    EventLogService::new(Arc::new(store))
}

// ─── Insert Outcomes ─────────────────────────────────────────────

#[tokio::test]
async fn test_insert_valid_system_event() {
    let dir = tempfile::tempdir().unwrap();
    let service = file_service(&dir).await;

    let results = service
        .insert_logs(vec![system_record("s_123", "europe")])
        .await
        .unwrap();
    assert_eq!(results, vec![InsertResult::accepted("s_123")]);
}

#[tokio::test]
async fn test_insert_invalid_location() {
    let dir = tempfile::tempdir().unwrap();
    let service = file_service(&dir).await;

    let results = service
        .insert_logs(vec![system_record("s_123", "jetix")])
        .await
        .unwrap();
    assert_eq!(
        results,
        vec![InsertResult::rejected("s_123", "invalid_location")]
    );
    assert!(service.return_logs(1000).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_insert_valid_and_invalid_events() {
    let dir = tempfile::tempdir().unwrap();
    let service = file_service(&dir).await;

    let results = service
        .insert_logs(vec![user_record("u_123"), system_record("s_123", "jetix")])
        .await
        .unwrap();

    assert_eq!(
        serde_json::to_value(&results).unwrap(),
        json!([
            {"error": "", "event_id": "u_123", "success": true},
            {"error": "invalid_location", "event_id": "s_123", "success": false},
        ])
    );

    let stored = service.return_logs(10).await.unwrap();
    assert_eq!(stored.len(), 1);
    assert!(matches!(stored[0].event, EventPayload::User(_)));
}

#[tokio::test]
async fn test_future_timestamp_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let service = file_service(&dir).await;

    let mut record = user_record("u_future");
    record["timestamp"] = json!("2999-12-31T23:59:59Z");

    let results = service.insert_logs(vec![record]).await.unwrap();
    assert_eq!(
        results,
        vec![InsertResult::rejected("u_future", "invalid_timestamp")]
    );
}

#[tokio::test]
async fn test_oversized_batch_leaves_archive_untouched() {
    let dir = tempfile::tempdir().unwrap();
    let service = file_service(&dir).await;

    let batch: Vec<Value> = (0..1001)
        .map(|i| system_record(&format!("s_{}", i), "us"))
        .collect();
    let err = service.insert_logs(batch).await.unwrap_err();

    assert!(matches!(
        err,
        EventLogError::BatchTooLarge {
            size: 1001,
            max: 1000
        }
    ));
    assert_eq!(service.store().count().await.unwrap(), 0);
}

// ─── Reads ───────────────────────────────────────────────────────

#[tokio::test]
async fn test_list_more_than_stored_returns_all() {
    let dir = tempfile::tempdir().unwrap();
    let service = file_service(&dir).await;

    let batch: Vec<Value> = (0..25)
        .map(|i| system_record(&format!("s_{:03}", i), "europe"))
        .collect();
    service.insert_logs(batch).await.unwrap();

    let events = service.return_logs(1000).await.unwrap();
    assert_eq!(events.len(), 25);
    assert_eq!(events[0].event_id, "s_000");
    assert_eq!(events[24].event_id, "s_024");

    let first_ten = service.return_logs(10).await.unwrap();
    assert_eq!(first_ten.as_slice(), &events[..10]);
}

#[tokio::test]
async fn test_reads_are_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    let service = file_service(&dir).await;
    service
        .insert_logs(vec![user_record("u_1"), system_record("s_1", "us")])
        .await
        .unwrap();

    let first = service.return_logs(5).await.unwrap();
    let second = service.return_logs(5).await.unwrap();
    assert_eq!(first, second);
}

#[tokio::test]
async fn test_insert_then_get_returns_equal_record() {
    let dir = tempfile::tempdir().unwrap();
    let service = file_service(&dir).await;

    let record = user_record("u_123");
    service.insert_logs(vec![record.clone()]).await.unwrap();

    let stored = service.return_log("u_123").await.unwrap();
    assert_eq!(serde_json::to_value(&stored).unwrap(), record);
}

#[tokio::test]
async fn test_get_missing_id_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let service = file_service(&dir).await;

    let err = service.return_log("missing_id").await.unwrap_err();
    assert!(matches!(err, EventLogError::NotFound(ref id) if id == "missing_id"));
}

#[tokio::test]
async fn test_duplicate_ids_kept_first_returned() {
    let dir = tempfile::tempdir().unwrap();
    let service = file_service(&dir).await;

    let results = service
        .insert_logs(vec![system_record("dup", "europe"), system_record("dup", "us")])
        .await
        .unwrap();
    assert!(results.iter().all(|r| r.success));

    assert_eq!(service.return_logs(10).await.unwrap().len(), 2);
    let found = service.return_log("dup").await.unwrap();
    match found.event {
        EventPayload::System(s) => assert_eq!(s.location.as_str(), "europe"),
        EventPayload::User(_) => panic!("expected system event"),
    }
}

// ─── Persistence ─────────────────────────────────────────────────

#[tokio::test]
async fn test_archive_survives_reopen() {
    let dir = tempfile::tempdir().unwrap();
    {
        let service = file_service(&dir).await;
        service
            .insert_logs(vec![user_record("u_1"), system_record("s_1", "us")])
            .await
            .unwrap();
    }

    let reopened = file_service(&dir).await;
    let ids: Vec<_> = reopened
        .return_logs(10)
        .await
        .unwrap()
        .into_iter()
        .map(|e| e.event_id)
        .collect();
    assert_eq!(ids, vec!["u_1", "s_1"]);
}

#[tokio::test]
async fn test_deleted_archive_is_store_unavailable() {
    let dir = tempfile::tempdir().unwrap();
    let service = file_service(&dir).await;
    std::fs::remove_file(dir.path().join("archive.json")).unwrap();

    assert!(matches!(
        service.return_logs(10).await.unwrap_err(),
        EventLogError::StoreUnavailable(_)
    ));
    assert!(matches!(
        service.return_log("u_1").await.unwrap_err(),
        EventLogError::StoreUnavailable(_)
    ));
    assert!(matches!(
        service.insert_logs(vec![user_record("u_1")]).await.unwrap_err(),
        EventLogError::StoreUnavailable(_)
    ));
}

// ─── Concurrency ─────────────────────────────────────────────────

#[tokio::test]
async fn test_concurrent_batches_lose_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let service = Arc::new(file_service(&dir).await);

    let mut handles = Vec::new();
    for worker in 0..8 {
        let service = service.clone();
        handles.push(tokio::spawn(async move {
            let batch: Vec<Value> = (0..10)
                .map(|i| system_record(&format!("w{}_{}", worker, i), "us"))
                .collect();
            service.insert_logs(batch).await.unwrap()
        }));
    }
    for handle in handles {
        assert_eq!(handle.await.unwrap().len(), 10);
    }

    assert_eq!(service.return_logs(1000).await.unwrap().len(), 80);
}
