#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, TimeZone, Utc};
    use sheettask::db::blobs::{SqliteBlobStore, TASKS_KEY};
    use sheettask::db::db::Db;
    use sheettask::db::memory::MemoryBlobStore;
    use sheettask::db::BlobStore;
    use sheettask::libs::store::{decode, encode, TaskStore};
    use sheettask::libs::task::{Priority, Recurrence, Status, TaskDraft};
    use std::path::PathBuf;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct StoreTestContext {
        _temp_dir: TempDir,
        db_path: PathBuf,
    }

    impl TestContext for StoreTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            let db_path = temp_dir.path().join("sheettask.db");
            StoreTestContext {
                _temp_dir: temp_dir,
                db_path,
            }
        }
    }

    impl StoreTestContext {
        fn blobs(&self) -> SqliteBlobStore {
            SqliteBlobStore::with_db(Db::open(&self.db_path).unwrap(), TASKS_KEY).unwrap()
        }
    }

    #[test]
    fn test_load_empty_backend() {
        let store = TaskStore::open(MemoryBlobStore::new());
        assert!(store.tasks().is_empty());
    }

    #[test]
    fn test_load_corrupt_blob_fails_soft() {
        let store = TaskStore::open(MemoryBlobStore::with_blob("{not json"));
        assert!(store.tasks().is_empty());

        let store = TaskStore::open(MemoryBlobStore::with_blob(r#"[{"id": 1}]"#));
        assert!(store.tasks().is_empty());
    }

    #[test]
    fn test_commit_writes_through() {
        let mut store = TaskStore::open(MemoryBlobStore::new());
        let task = store.create(TaskDraft::new("Renew passport"), Utc::now()).unwrap();

        let backend = store.into_backend();
        let stored = decode(&backend.get().unwrap().unwrap()).unwrap();
        assert_eq!(stored, vec![task]);
    }

    #[test]
    fn test_serialization_round_trip() {
        let mut store = TaskStore::open(MemoryBlobStore::new());
        let mut draft = TaskDraft::new("Pay rent");
        draft.recurrence = Recurrence::Monthly;
        draft.priority = Priority::High;
        draft.category = "Bills".to_string();
        draft.description = "Quote \"ref 42\", line\nbreak".to_string();
        draft.due_date = NaiveDate::from_ymd_opt(2024, 1, 31).unwrap();
        let rent = store.create(draft, Utc::now()).unwrap();
        store.create(TaskDraft::new("Call mom"), Utc::now()).unwrap();
        store.set_status(&rent.id, Status::Done, Utc::now()).unwrap();

        let blob = encode(store.tasks()).unwrap();
        assert_eq!(decode(&blob).unwrap(), store.tasks());
    }

    #[test]
    fn test_reads_stored_format() {
        let blob = r#"[
            {
                "id": "3f0e6a8c-8c1d-4f7e-9b57-1f0a2c3d4e5f",
                "title": "Car insurance",
                "description": "",
                "dueDate": "2024-06-01",
                "recurrence": "yearly",
                "status": "in-progress",
                "priority": "low",
                "category": "Bills",
                "lastCompletedDate": "2023-06-02T08:00:00.000Z",
                "createdAt": "2023-05-20T10:30:00.000Z"
            },
            {
                "id": "a1",
                "title": "Buy milk",
                "description": "2%",
                "dueDate": "2024-02-10",
                "recurrence": "one-time",
                "status": "todo",
                "priority": "medium",
                "category": "General",
                "createdAt": "2024-02-09T18:00:00Z"
            }
        ]"#;

        let store = TaskStore::open(MemoryBlobStore::with_blob(blob));
        let tasks = store.tasks();
        assert_eq!(tasks.len(), 2);
        assert_eq!(tasks[0].recurrence, Recurrence::Yearly);
        assert_eq!(tasks[0].status, Status::InProgress);
        assert_eq!(tasks[0].priority, Priority::Low);
        assert_eq!(tasks[0].last_completed_date, Some(Utc.with_ymd_and_hms(2023, 6, 2, 8, 0, 0).unwrap()));
        assert_eq!(tasks[1].recurrence, Recurrence::None);
        assert_eq!(tasks[1].last_completed_date, None);
        assert_eq!(tasks[1].due_date, NaiveDate::from_ymd_opt(2024, 2, 10).unwrap());
    }

    #[test]
    fn test_writes_stored_format() {
        let mut store = TaskStore::open(MemoryBlobStore::new());
        let mut draft = TaskDraft::new("Pay rent");
        draft.recurrence = Recurrence::None;
        draft.status = Status::InProgress;
        draft.due_date = NaiveDate::from_ymd_opt(2024, 1, 31).unwrap();
        store.create(draft, Utc::now()).unwrap();

        let value: serde_json::Value = serde_json::from_str(&encode(store.tasks()).unwrap()).unwrap();
        let task = &value[0];
        assert_eq!(task["dueDate"], "2024-01-31");
        assert_eq!(task["recurrence"], "one-time");
        assert_eq!(task["status"], "in-progress");
        assert_eq!(task["priority"], "medium");
        assert!(task.get("lastCompletedDate").is_none());
        assert!(task.get("createdAt").is_some());
    }

    #[test]
    fn test_store_operations() {
        let mut store = TaskStore::open(MemoryBlobStore::new());
        let first = store.create(TaskDraft::new("First"), Utc::now()).unwrap();
        let second = store.create(TaskDraft::new("Second"), Utc::now()).unwrap();
        assert_eq!(store.tasks()[0].id, second.id);

        let mut edited = first.clone();
        edited.title = "First (edited)".to_string();
        store.update(&edited).unwrap();
        assert_eq!(store.find(&first.id).unwrap().title, "First (edited)");

        let cycled = store.cycle_status(&first.id, Utc::now()).unwrap().unwrap();
        assert_eq!(cycled.status, Status::InProgress);
        assert_eq!(store.stats().in_progress, 1);

        store.delete(&second.id).unwrap();
        store.delete(&second.id).unwrap();
        assert_eq!(store.tasks().len(), 1);
        assert!(store.find(&second.id).is_err());
        assert!(store.set_status(&second.id, Status::Done, Utc::now()).unwrap().is_none());
    }

    #[test]
    fn test_create_validation_leaves_store_untouched() {
        let mut store = TaskStore::open(MemoryBlobStore::new());
        assert!(store.create(TaskDraft::new(""), Utc::now()).is_err());
        assert!(store.tasks().is_empty());
        assert!(store.into_backend().get().unwrap().is_none());
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_sqlite_persists_between_opens(ctx: &mut StoreTestContext) {
        let created = {
            let mut store = TaskStore::open(ctx.blobs());
            store.create(TaskDraft::new("Renew passport"), Utc::now()).unwrap()
        };

        let store = TaskStore::open(ctx.blobs());
        assert_eq!(store.tasks(), &[created]);
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_sqlite_blob_slot(ctx: &mut StoreTestContext) {
        let mut blobs = ctx.blobs();
        assert_eq!(blobs.get().unwrap(), None);

        blobs.set("[]").unwrap();
        blobs.set("[1]").unwrap();
        assert_eq!(blobs.get().unwrap().as_deref(), Some("[1]"));

        blobs.clear().unwrap();
        assert_eq!(blobs.get().unwrap(), None);
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_sqlite_corrupt_blob_fails_soft(ctx: &mut StoreTestContext) {
        ctx.blobs().set("garbage").unwrap();
        let store = TaskStore::open(ctx.blobs());
        assert!(store.tasks().is_empty());
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_clear_removes_everything(ctx: &mut StoreTestContext) {
        let mut store = TaskStore::open(ctx.blobs());
        store.create(TaskDraft::new("One"), Utc::now()).unwrap();
        store.clear().unwrap();
        assert!(store.tasks().is_empty());

        let reopened = TaskStore::open(ctx.blobs());
        assert!(reopened.tasks().is_empty());
        assert_eq!(ctx.blobs().get().unwrap(), None);
    }
}
