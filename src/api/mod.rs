//! External AI advisory service.
//!
//! The tracker consumes a text-generation service through the [`Advisor`]
//! trait. Implementations never fail: network, credential and parsing
//! problems are logged and mapped to documented fallback values, so the task
//! collection is never blocked by the advisor.
//!
//! ## Fallbacks
//!
//! | Call               | On empty response     | On error                 |
//! |--------------------|-----------------------|--------------------------|
//! | `analyze_tasks`    | [`NO_INSIGHTS`]       | [`CONNECTION_FAILED`]    |
//! | `suggest_subtasks` | empty list            | empty list               |
//!
//! ## Usage
//!
//! ```rust,no_run
//! use sheettask::api::{gemini::Gemini, Advisor};
//! use sheettask::libs::config::AiConfig;
//!
//! # async fn run() {
//! let gemini = Gemini::new(&AiConfig::default(), None);
//! let steps = gemini.suggest_subtasks("Renew passport", "").await;
//! for step in steps {
//!     println!("- {}", step);
//! }
//! # }
//! ```

use crate::libs::secret::Secret;
use crate::libs::task::Task;

pub mod gemini;

pub use gemini::Gemini;

/// Returned by `analyze_tasks` when the service answered without text.
pub const NO_INSIGHTS: &str = "I couldn't generate insights at this moment.";

/// Returned by `analyze_tasks` when the service could not be reached.
pub const CONNECTION_FAILED: &str = "Unable to connect to Gemini AI. Check your API configuration.";

/// Environment variables consulted for the API key, in order.
pub const API_KEY_VARS: [&str; 2] = ["GEMINI_API_KEY", "API_KEY"];

/// Advisory text generation over the task collection.
#[allow(async_fn_in_trait)]
pub trait Advisor {
    /// Free-form advice about the collection, or a fallback message.
    async fn analyze_tasks(&self, tasks: &[Task]) -> String;

    /// Short next steps for one task, or an empty list.
    async fn suggest_subtasks(&self, title: &str, description: &str) -> Vec<String>;
}

/// Finds the API key in the environment or the encrypted secret file.
pub fn resolve_api_key() -> Option<String> {
    API_KEY_VARS
        .iter()
        .filter_map(|name| std::env::var(name).ok())
        .map(|key| key.trim().to_string())
        .find(|key| !key.is_empty())
        .or_else(|| Secret::api_key().get())
}
