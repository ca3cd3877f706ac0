//! Configuration management for sheettask.
//!
//! Settings live in `config.json` inside the per-OS application data
//! directory. Every section is optional; a missing file or section means
//! built-in defaults.
//!
//! ## Sections
//!
//! - **ai**: Gemini endpoint, model, sampling temperature and how many
//!   subtasks to ask for
//! - **tasks**: defaults applied to newly created tasks
//!
//! ## Usage Examples
//!
//! ```rust,no_run
//! use sheettask::libs::config::Config;
//!
//! let config = Config::read()?;
//! let ai = config.ai.clone().unwrap_or_default();
//! println!("Model: {}", ai.model);
//!
//! let updated = Config::init()?;
//! updated.save()?;
//! # Ok::<(), anyhow::Error>(())
//! ```

use super::data_storage::DataStorage;
use super::task::{Priority, DEFAULT_CATEGORY};
use crate::libs::messages::Message;
use crate::msg_print;
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input, MultiSelect, Select};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};

pub const CONFIG_FILE_NAME: &str = "config.json";

pub const DEFAULT_API_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_MODEL: &str = "gemini-3-pro-preview";
pub const DEFAULT_TEMPERATURE: f32 = 0.7;
pub const DEFAULT_SUBTASK_COUNT: usize = 5;

/// Represents a configurable section offered by the setup wizard.
#[derive(Debug, Clone)]
pub struct ConfigModule {
    pub key: String,
    pub name: String,
}

/// AI advisory service settings.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct AiConfig {
    /// Base URL of the Generative Language REST API.
    pub api_url: String,
    /// Model used for both analysis and subtask suggestions.
    pub model: String,
    /// Sampling temperature for the analysis prompt.
    pub temperature: f32,
    /// Number of subtasks requested and the upper bound returned.
    pub subtask_count: usize,
}

/// Defaults applied to new tasks when the command line leaves a field out.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct TaskDefaults {
    pub category: String,
    pub priority: Priority,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct Config {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ai: Option<AiConfig>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub tasks: Option<TaskDefaults>,
}

impl Default for AiConfig {
    fn default() -> Self {
        AiConfig {
            api_url: DEFAULT_API_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            temperature: DEFAULT_TEMPERATURE,
            subtask_count: DEFAULT_SUBTASK_COUNT,
        }
    }
}

impl Default for TaskDefaults {
    fn default() -> Self {
        TaskDefaults {
            category: DEFAULT_CATEGORY.to_string(),
            priority: Priority::Medium,
        }
    }
}

impl Config {
    /// Loads the configuration file, or defaults when there is none.
    pub fn read() -> Result<Config> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        if !config_file_path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(config_file_path)?;
        let config: Config = serde_json::from_str(&config_str)?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        let config_file = File::create(config_file_path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// Interactive setup wizard seeded with the current values.
    pub fn init() -> Result<Self> {
        let mut config = Self::read().unwrap_or_default();

        let modules = vec![
            ConfigModule {
                key: "ai".to_string(),
                name: "AI advisor".to_string(),
            },
            ConfigModule {
                key: "tasks".to_string(),
                name: "Task defaults".to_string(),
            },
        ];

        let selected = MultiSelect::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptSelectModules.to_string())
            .items(&modules.iter().map(|module| &module.name).collect::<Vec<_>>())
            .interact()?;

        for &selection in &selected {
            match modules[selection].key.as_str() {
                "ai" => {
                    let default = config.ai.clone().unwrap_or_default();
                    msg_print!(Message::ConfigModuleAi);
                    config.ai = Some(AiConfig {
                        api_url: Input::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptAiApiUrl.to_string())
                            .default(default.api_url)
                            .interact_text()?,
                        model: Input::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptAiModel.to_string())
                            .default(default.model)
                            .interact_text()?,
                        temperature: Input::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptAiTemperature.to_string())
                            .default(default.temperature)
                            .interact_text()?,
                        subtask_count: Input::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptAiSubtaskCount.to_string())
                            .default(default.subtask_count)
                            .interact_text()?,
                    });
                }
                "tasks" => {
                    let default = config.tasks.clone().unwrap_or_default();
                    msg_print!(Message::ConfigModuleTasks);
                    let priorities = [Priority::Low, Priority::Medium, Priority::High];
                    let current = priorities.iter().position(|p| *p == default.priority).unwrap_or(1);
                    config.tasks = Some(TaskDefaults {
                        category: Input::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptDefaultCategory.to_string())
                            .default(default.category)
                            .interact_text()?,
                        priority: priorities[Select::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptDefaultPriority.to_string())
                            .items(&priorities)
                            .default(current)
                            .interact()?],
                    });
                }
                _ => {}
            }
        }

        Ok(config)
    }
}
