#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, TimeZone, Utc};
    use sheettask::api::gemini::{analysis_prompt, parse_steps, subtasks_prompt, task_summary, Gemini, GenerateResponse};
    use sheettask::api::{Advisor, CONNECTION_FAILED, NO_INSIGHTS};
    use sheettask::libs::advisory::AdvisoryPanel;
    use sheettask::libs::config::AiConfig;
    use sheettask::libs::task::{Priority, Recurrence, Status, Task};
    use std::time::Duration;

    /// Answers with the task count, sleeping longer for larger collections.
    struct CountingAdvisor;

    impl Advisor for CountingAdvisor {
        async fn analyze_tasks(&self, tasks: &[Task]) -> String {
            tokio::time::sleep(Duration::from_millis(20 * tasks.len() as u64)).await;
            format!("{} tasks", tasks.len())
        }

        async fn suggest_subtasks(&self, _title: &str, _description: &str) -> Vec<String> {
            Vec::new()
        }
    }

    fn task(title: &str) -> Task {
        Task {
            id: title.to_lowercase(),
            title: title.to_string(),
            description: String::new(),
            due_date: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            recurrence: Recurrence::Monthly,
            status: Status::Todo,
            priority: Priority::High,
            category: "Bills".to_string(),
            last_completed_date: None,
            created_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
        }
    }

    fn offline(api_key: Option<&str>) -> Gemini {
        let config = AiConfig {
            api_url: "http://127.0.0.1:9".to_string(),
            ..AiConfig::default()
        };
        Gemini::new(&config, api_key.map(str::to_string))
    }

    #[test]
    fn test_stale_result_is_dropped() {
        let panel = AdvisoryPanel::new();
        let first = panel.begin();
        let second = panel.begin();

        assert!(!panel.is_latest(first));
        assert!(panel.complete(second, "new".to_string()));
        assert!(!panel.complete(first, "old".to_string()));
        assert_eq!(panel.text().as_deref(), Some("new"));
    }

    #[test]
    fn test_result_applies_once() {
        let panel = AdvisoryPanel::new();
        assert_eq!(panel.text(), None);

        let ticket = panel.begin();
        assert!(panel.complete(ticket, "done".to_string()));
        assert!(!panel.complete(ticket, "again".to_string()));
        assert_eq!(panel.text().as_deref(), Some("done"));
    }

    #[tokio::test]
    async fn test_overlapping_refreshes_keep_latest() {
        let panel = AdvisoryPanel::new();
        let slow = vec![task("Rent"), task("Insurance"), task("Taxes")];
        let fast = vec![task("Rent")];

        let (slow_applied, fast_applied) =
            tokio::join!(panel.refresh(&CountingAdvisor, &slow), panel.refresh(&CountingAdvisor, &fast));

        assert!(!slow_applied);
        assert!(fast_applied);
        assert_eq!(panel.text().as_deref(), Some("1 tasks"));
    }

    #[tokio::test]
    async fn test_missing_key_falls_back() {
        let gemini = offline(None);
        assert!(!gemini.has_api_key());
        assert_eq!(gemini.analyze_tasks(&[task("Rent")]).await, CONNECTION_FAILED);
        assert!(gemini.suggest_subtasks("Renew passport", "").await.is_empty());
    }

    #[tokio::test]
    async fn test_unreachable_service_falls_back() {
        let gemini = offline(Some("test-key"));
        assert!(gemini.has_api_key());
        assert_eq!(gemini.analyze_tasks(&[]).await, CONNECTION_FAILED);
        assert!(gemini.suggest_subtasks("Renew passport", "Expires in May").await.is_empty());
    }

    #[test]
    fn test_response_text() {
        let body = r#"{"candidates":[{"content":{"parts":[{"text":"Pay "},{"text":"rent first."}]}}]}"#;
        let response: GenerateResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.text().as_deref(), Some("Pay rent first."));

        let empty: GenerateResponse = serde_json::from_str(r#"{"candidates":[]}"#).unwrap();
        assert_eq!(empty.text(), None);

        let blank: GenerateResponse = serde_json::from_str(r#"{"candidates":[{"content":{"parts":[{"text":"  "}]}}]}"#).unwrap();
        assert_eq!(blank.text(), None);

        let no_content: GenerateResponse = serde_json::from_str(r#"{"candidates":[{}]}"#).unwrap();
        assert_eq!(no_content.text(), None);
        assert_ne!(NO_INSIGHTS, CONNECTION_FAILED);
    }

    #[test]
    fn test_parse_steps() {
        let text = r#"{"steps": ["Find old passport", " Take photo ", "", "Fill form", "Book appointment"]}"#;
        assert_eq!(
            parse_steps(text, 5).unwrap(),
            vec!["Find old passport", "Take photo", "Fill form", "Book appointment"]
        );
        assert_eq!(parse_steps(text, 2).unwrap(), vec!["Find old passport", "Take photo"]);
        assert!(parse_steps("not json", 5).is_err());
        assert!(parse_steps(r#"{"items": []}"#, 5).is_err());
    }

    #[test]
    fn test_prompts() {
        let tasks = vec![task("Rent")];
        assert_eq!(task_summary(&tasks), "- Rent (monthly, Priority: high, Due: 2024-03-01)");
        assert!(analysis_prompt(&tasks).ends_with("Task List:\n- Rent (monthly, Priority: high, Due: 2024-03-01)"));
        assert_eq!(
            subtasks_prompt("Renew passport", "Expires in May", 5),
            "Break down the task \"Renew passport\" (Expires in May) into exactly 5 specific, manageable sub-steps."
        );
    }
}
