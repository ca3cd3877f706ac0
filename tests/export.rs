#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, TimeZone, Utc};
    use sheettask::libs::export::{to_csv, to_json, ExportFormat, Exporter, CSV_HEADERS};
    use sheettask::libs::store::decode;
    use sheettask::libs::task::{Priority, Recurrence, Status, Task};
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct ExportTestContext {
        temp_dir: TempDir,
    }

    impl TestContext for ExportTestContext {
        fn setup() -> Self {
            ExportTestContext {
                temp_dir: tempfile::tempdir().unwrap(),
            }
        }
    }

    fn task(id: &str, title: &str, description: &str) -> Task {
        Task {
            id: id.to_string(),
            title: title.to_string(),
            description: description.to_string(),
            due_date: NaiveDate::from_ymd_opt(2024, 2, 1).unwrap(),
            recurrence: Recurrence::None,
            status: Status::Todo,
            priority: Priority::Medium,
            category: "General".to_string(),
            last_completed_date: None,
            created_at: Utc.with_ymd_and_hms(2024, 1, 2, 9, 15, 0).unwrap(),
        }
    }

    #[test]
    fn test_csv_header_row() {
        let csv = to_csv(&[]).unwrap();
        let lines: Vec<_> = csv.lines().collect();
        assert_eq!(lines, vec!["ID,Title,Description,Due Date,Recurrence,Priority,Status,Category,Created At"]);
        assert_eq!(CSV_HEADERS.len(), 9);
    }

    #[test]
    fn test_csv_quotes_embedded_commas() {
        let csv = to_csv(&[task("a1", "Buy milk, eggs", "")]).unwrap();
        let lines: Vec<_> = csv.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(
            lines[1],
            "a1,\"Buy milk, eggs\",,2024-02-01,one-time,medium,todo,General,2024-01-02T09:15:00.000Z"
        );
    }

    #[test]
    fn test_csv_doubles_embedded_quotes() {
        let csv = to_csv(&[task("a1", "Call", "Say \"hi\"")]).unwrap();
        assert!(csv.contains("\"Say \"\"hi\"\"\""));
    }

    #[test]
    fn test_csv_row_per_task_in_order() {
        let mut rent = task("b2", "Pay rent", "Landlord");
        rent.recurrence = Recurrence::Monthly;
        rent.status = Status::InProgress;
        rent.priority = Priority::High;
        rent.category = "Bills".to_string();

        let csv = to_csv(&[task("a1", "First", ""), rent]).unwrap();
        let lines: Vec<_> = csv.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[1].starts_with("a1,First,"));
        assert_eq!(
            lines[2],
            "b2,Pay rent,Landlord,2024-02-01,monthly,high,in-progress,Bills,2024-01-02T09:15:00.000Z"
        );
    }

    #[test]
    fn test_json_matches_stored_format() {
        let tasks = vec![task("a1", "Buy milk, eggs", "2%")];
        let json = to_json(&tasks).unwrap();
        assert_eq!(decode(&json).unwrap(), tasks);
        assert!(json.contains("\"dueDate\": \"2024-02-01\""));
    }

    #[test]
    fn test_default_file_name() {
        let exporter = Exporter::new(ExportFormat::Csv, None);
        let name = exporter.output_path().to_string_lossy().to_string();
        assert!(name.starts_with("sheettask_ai_export_"));
        assert!(name.ends_with(".csv"));
        assert_eq!(name.len(), "sheettask_ai_export_2024-01-01.csv".len());

        let exporter = Exporter::new(ExportFormat::Json, None);
        assert!(exporter.output_path().to_string_lossy().ends_with(".json"));
        assert_eq!(exporter.format(), ExportFormat::Json);
    }

    #[test_context(ExportTestContext)]
    #[test]
    fn test_export_writes_file(ctx: &mut ExportTestContext) {
        let path: PathBuf = ctx.temp_dir.path().join("tasks.csv");
        let exporter = Exporter::new(ExportFormat::Csv, Some(path.clone()));
        let tasks = vec![task("a1", "Buy milk, eggs", "")];

        exporter.export(&tasks).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(content, to_csv(&tasks).unwrap());
    }

    #[test_context(ExportTestContext)]
    #[test]
    fn test_export_empty_collection(ctx: &mut ExportTestContext) {
        let path = ctx.temp_dir.path().join("tasks.json");
        Exporter::new(ExportFormat::Json, Some(path.clone())).export(&[]).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert!(decode(&content).unwrap().is_empty());
    }
}
