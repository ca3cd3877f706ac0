use super::open_store;
use crate::{
    api::{resolve_api_key, Gemini},
    libs::{advisory::AdvisoryPanel, config::Config, messages::Message},
    msg_info, msg_print, msg_warning,
};
use anyhow::Result;

/// Builds the Gemini advisor from configuration and the stored API key.
pub fn advisor(config: &Config) -> Gemini {
    let api_key = resolve_api_key();
    if api_key.is_none() {
        msg_warning!(Message::ApiKeyMissing);
    }
    Gemini::new(&config.ai.clone().unwrap_or_default(), api_key)
}

pub async fn cmd() -> Result<()> {
    let config = Config::read()?;
    let store = open_store()?;

    if store.tasks().is_empty() {
        msg_info!(Message::AdvisorNoTasks);
        return Ok(());
    }

    let gemini = advisor(&config);
    let panel = AdvisoryPanel::new();

    msg_info!(Message::AdvisorAnalyzing(store.tasks().len()));
    panel.refresh(&gemini, store.tasks()).await;

    msg_print!(Message::AdvisorHeader, true);
    if let Some(text) = panel.text() {
        msg_print!(text);
    }
    msg_print!(Message::AdvisorReviewNote, true);
    Ok(())
}
