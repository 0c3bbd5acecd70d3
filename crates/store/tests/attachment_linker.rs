//! Tests for the attachment linker: validation, sanitization, and the
//! append-only attachment list.

use assert_matches::assert_matches;
use chrono::NaiveDate;
use planner_core::error::CoreError;
use planner_store::attachments::AttachmentLinker;
use planner_store::files::{DiskFileStore, FileStore, MemoryFileStore};
use planner_store::memory::MemoryMilestoneStore;
use planner_store::models::milestone::CreateMilestone;
use planner_store::repositories::MilestoneRepo;

async fn store_with_one_milestone() -> (MemoryMilestoneStore, String) {
    let store = MemoryMilestoneStore::new();
    let input = CreateMilestone {
        title: "Alpha".into(),
        start_date: NaiveDate::from_ymd_opt(2025, 6, 1),
        ..Default::default()
    };
    let id = MilestoneRepo::create(&store, &input).await.unwrap();
    (store, id.to_string())
}

#[tokio::test]
async fn attach_appends_exactly_one_entry_preserving_order() {
    let (store, id) = store_with_one_milestone().await;
    let files = MemoryFileStore::new();

    AttachmentLinker::attach(&store, &files, &id, "spec.pdf", b"one")
        .await
        .unwrap();
    let second = AttachmentLinker::attach(&store, &files, &id, "notes.txt", b"two")
        .await
        .unwrap();

    assert_eq!(second.filename, "notes.txt");
    assert_eq!(second.url, "/uploads/notes.txt");

    let all = MilestoneRepo::list(&store, None).await.unwrap();
    let attachments = &all[0].doc.attachments;
    assert_eq!(attachments.len(), 2);
    assert_eq!(attachments[0].filename, "spec.pdf");
    assert_eq!(attachments[1].filename, "notes.txt");

    assert_eq!(files.get("spec.pdf").await.unwrap(), b"one");
}

#[tokio::test]
async fn attach_sanitizes_traversal_filenames() {
    let (store, id) = store_with_one_milestone().await;
    let files = MemoryFileStore::new();

    let attachment = AttachmentLinker::attach(&store, &files, &id, "../../etc/passwd", b"data")
        .await
        .unwrap();
    assert_eq!(attachment.filename, "passwd");
    assert_eq!(attachment.url, "/uploads/passwd");
    assert!(files.get("passwd").await.is_some());
    assert!(files.get("../../etc/passwd").await.is_none());
}

#[tokio::test]
async fn attach_rejects_empty_file_and_unusable_names() {
    let (store, id) = store_with_one_milestone().await;
    let files = MemoryFileStore::new();

    let err = AttachmentLinker::attach(&store, &files, &id, "spec.pdf", b"")
        .await
        .unwrap_err();
    assert_matches!(err, CoreError::Validation(_));

    let err = AttachmentLinker::attach(&store, &files, &id, "..", b"data")
        .await
        .unwrap_err();
    assert_matches!(err, CoreError::Validation(_));

    let all = MilestoneRepo::list(&store, None).await.unwrap();
    assert!(all[0].doc.attachments.is_empty());
}

#[tokio::test]
async fn attach_rejects_malformed_milestone_id() {
    let store = MemoryMilestoneStore::new();
    let files = MemoryFileStore::new();

    let err = AttachmentLinker::attach(&store, &files, "not-an-id", "spec.pdf", b"data")
        .await
        .unwrap_err();
    assert_matches!(err, CoreError::InvalidId(_));
}

#[tokio::test]
async fn disk_file_store_writes_under_root() {
    let dir = tempfile::tempdir().unwrap();
    let files = DiskFileStore::new(dir.path());

    files.save("report.pdf", b"bytes").await.unwrap();

    let on_disk = std::fs::read(dir.path().join("report.pdf")).unwrap();
    assert_eq!(on_disk, b"bytes");
}

#[tokio::test]
async fn same_name_uploads_overwrite() {
    let dir = tempfile::tempdir().unwrap();
    let files = DiskFileStore::new(dir.path());

    files.save("report.pdf", b"first").await.unwrap();
    files.save("report.pdf", b"second").await.unwrap();

    let on_disk = std::fs::read(dir.path().join("report.pdf")).unwrap();
    assert_eq!(on_disk, b"second");
}
