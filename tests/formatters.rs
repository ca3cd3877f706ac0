#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, TimeZone, Utc};
    use sheettask::libs::formatter::{format_days, format_due};
    use sheettask::libs::task::{Priority, Recurrence, Status, Task};

    fn task(due_date: NaiveDate, status: Status) -> Task {
        Task {
            id: "a1".to_string(),
            title: "Pay rent".to_string(),
            description: String::new(),
            due_date,
            recurrence: Recurrence::Monthly,
            status,
            priority: Priority::Medium,
            category: "Bills".to_string(),
            last_completed_date: None,
            created_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
        }
    }

    #[test]
    fn test_format_days() {
        assert_eq!(format_days(0), "today");
        assert_eq!(format_days(1), "tomorrow");
        assert_eq!(format_days(12), "in 12 days");
        assert_eq!(format_days(-1), "1 day overdue");
        assert_eq!(format_days(-4), "4 days overdue");
    }

    #[test]
    fn test_format_due() {
        let today = NaiveDate::from_ymd_opt(2024, 2, 10).unwrap();
        let due = NaiveDate::from_ymd_opt(2024, 2, 8).unwrap();

        assert_eq!(format_due(&task(due, Status::Todo), today), "2024-02-08 (2 days overdue)");
        assert_eq!(format_due(&task(today, Status::InProgress), today), "2024-02-10 (today)");
        assert_eq!(format_due(&task(due, Status::Done), today), "2024-02-08");
    }
}
