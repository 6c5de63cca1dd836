//! Standalone suggestion preview (`triage suggest`).

use serde_json::json;

use crate::api::{HttpApi, SupportApi};
use crate::commands::{CommandOutput, colored_priority};
use crate::config::Config;
use crate::error::Result;

pub async fn cmd_suggest(title: &str, description: &str, output_json: bool) -> Result<()> {
    let config = Config::load()?;
    let api = HttpApi::from_config(&config);

    let suggestion = api.suggest(title, description).await?;

    CommandOutput::new(json!({
        "category": suggestion.category,
        "tags": suggestion.tags,
        "priority": suggestion.priority.to_string(),
        "suggested_response": suggestion.suggested_response,
    }))
    .with_text(format!(
        "category: {}\ntags: {}\npriority: {}\nresponse: {}",
        suggestion.category,
        suggestion.tags.join(", "),
        colored_priority(suggestion.priority),
        suggestion.suggested_response,
    ))
    .print(output_json)
}
