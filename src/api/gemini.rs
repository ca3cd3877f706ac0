use super::{Advisor, CONNECTION_FAILED, NO_INSIGHTS};
use crate::libs::config::AiConfig;
use crate::libs::task::Task;
use anyhow::Result;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::time::Duration;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);
const API_KEY_HEADER: &str = "x-goog-api-key";

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
struct GenerateRequest<'a> {
    contents: Vec<Content<'a>>,
    generation_config: Value,
}

#[derive(Serialize, Debug)]
struct Content<'a> {
    parts: Vec<RequestPart<'a>>,
}

#[derive(Serialize, Debug)]
struct RequestPart<'a> {
    text: &'a str,
}

#[derive(Deserialize, Debug, Default)]
pub struct GenerateResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

#[derive(Deserialize, Debug)]
pub struct Candidate {
    pub content: Option<CandidateContent>,
}

#[derive(Deserialize, Debug)]
pub struct CandidateContent {
    #[serde(default)]
    pub parts: Vec<CandidatePart>,
}

#[derive(Deserialize, Debug)]
pub struct CandidatePart {
    pub text: Option<String>,
}

#[derive(Deserialize, Debug)]
struct SubtaskSteps {
    steps: Vec<String>,
}

impl GenerateResponse {
    /// Concatenated text of the first candidate.
    pub fn text(&self) -> Option<String> {
        let content = self.candidates.first()?.content.as_ref()?;
        let text: String = content.parts.iter().filter_map(|p| p.text.as_deref()).collect();
        if text.trim().is_empty() {
            None
        } else {
            Some(text)
        }
    }
}

/// Gemini client for the Generative Language REST API.
#[derive(Debug, Clone)]
pub struct Gemini {
    client: Client,
    config: AiConfig,
    api_key: Option<String>,
}

/// One line per task: `- <title> (<recurrence>, Priority: <priority>, Due: <date>)`.
pub fn task_summary(tasks: &[Task]) -> String {
    tasks
        .iter()
        .map(|t| format!("- {} ({}, Priority: {}, Due: {})", t.title, t.recurrence, t.priority, t.due_date))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn analysis_prompt(tasks: &[Task]) -> String {
    format!(
        "You are an elite productivity consultant.\n\
         Analyze the following task list and provide 3 actionable insights:\n\
         1. Potential scheduling conflicts.\n\
         2. Suggestions for breaking down complex tasks.\n\
         3. A priority recommendation for today.\n\
         \n\
         Task List:\n{}",
        task_summary(tasks)
    )
}

pub fn subtasks_prompt(title: &str, description: &str, count: usize) -> String {
    format!(
        "Break down the task \"{}\" ({}) into exactly {} specific, manageable sub-steps.",
        title, description, count
    )
}

/// Extracts the step list from a structured subtask response.
pub fn parse_steps(text: &str, limit: usize) -> Result<Vec<String>> {
    let parsed: SubtaskSteps = serde_json::from_str(text.trim())?;
    Ok(parsed
        .steps
        .into_iter()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .take(limit)
        .collect())
}

impl Gemini {
    pub fn new(config: &AiConfig, api_key: Option<String>) -> Self {
        let client = Client::builder().timeout(REQUEST_TIMEOUT).build().unwrap_or_default();
        Self {
            client,
            config: config.clone(),
            api_key,
        }
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.config.api_url.trim_end_matches('/'),
            self.config.model
        )
    }

    /// Sends one prompt and returns the generated text, if any.
    async fn generate(&self, prompt: &str, generation_config: Value) -> Result<Option<String>> {
        let api_key = match &self.api_key {
            Some(key) => key,
            None => anyhow::bail!("Gemini API key is not configured"),
        };

        let request = GenerateRequest {
            contents: vec![Content {
                parts: vec![RequestPart { text: prompt }],
            }],
            generation_config,
        };

        let res = self
            .client
            .post(self.endpoint())
            .header(API_KEY_HEADER, api_key)
            .json(&request)
            .send()
            .await?;

        if !res.status().is_success() {
            anyhow::bail!("Gemini request failed with status {}", res.status())
        }

        let body = res.json::<GenerateResponse>().await?;
        Ok(body.text())
    }
}

impl Advisor for Gemini {
    async fn analyze_tasks(&self, tasks: &[Task]) -> String {
        let prompt = analysis_prompt(tasks);
        match self.generate(&prompt, json!({ "temperature": self.config.temperature })).await {
            Ok(Some(text)) => text,
            Ok(None) => NO_INSIGHTS.to_string(),
            Err(e) => {
                tracing::warn!(error = %e, "task analysis failed");
                CONNECTION_FAILED.to_string()
            }
        }
    }

    async fn suggest_subtasks(&self, title: &str, description: &str) -> Vec<String> {
        let count = self.config.subtask_count;
        let prompt = subtasks_prompt(title, description, count);
        let generation_config = json!({
            "responseMimeType": "application/json",
            "responseSchema": {
                "type": "OBJECT",
                "properties": {
                    "steps": { "type": "ARRAY", "items": { "type": "STRING" } }
                },
                "required": ["steps"]
            }
        });

        let text = match self.generate(&prompt, generation_config).await {
            Ok(Some(text)) => text,
            Ok(None) => return Vec::new(),
            Err(e) => {
                tracing::warn!(error = %e, "subtask generation failed");
                return Vec::new();
            }
        };

        parse_steps(&text, count).unwrap_or_else(|e| {
            tracing::warn!(error = %e, "subtask response is malformed");
            Vec::new()
        })
    }
}
