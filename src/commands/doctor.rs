//! Backend health check (`triage doctor`).

use owo_colors::OwoColorize;
use serde_json::json;

use crate::api::{HttpApi, SupportApi};
use crate::commands::CommandOutput;
use crate::config::Config;
use crate::error::Result;

pub async fn cmd_doctor(output_json: bool) -> Result<()> {
    let config = Config::load()?;
    let api = HttpApi::from_config(&config);

    match api.health().await {
        Ok(body) => {
            let message = body
                .get("message")
                .and_then(|m| m.as_str())
                .unwrap_or("ok")
                .to_string();

            CommandOutput::new(json!({
                "reachable": true,
                "url": api.base_url(),
                "response": body,
            }))
            .with_text(format!(
                "{} {}\n  {}",
                "✓".green(),
                api.base_url().cyan(),
                message.dimmed()
            ))
            .print(output_json)
        }
        Err(e) => {
            CommandOutput::new(json!({
                "reachable": false,
                "url": api.base_url(),
                "error": e.to_string(),
            }))
            .with_text(format!(
                "{} {}\n  {}",
                "✗".red(),
                api.base_url().cyan(),
                e.to_string().dimmed()
            ))
            .print(output_json)?;
            Err(e)
        }
    }
}
