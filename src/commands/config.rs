//! Configuration commands (`triage config`).

use serde_json::json;

use crate::commands::CommandOutput;
use crate::config::Config;
use crate::error::Result;

pub fn cmd_config_show(output_json: bool) -> Result<()> {
    let config = Config::load()?;
    let path = Config::path()?;

    CommandOutput::new(json!({
        "path": path.display().to_string(),
        "api": { "url": config.api.url },
    }))
    .with_text(format!(
        "# {}\n{}",
        path.display(),
        serde_yaml_ng::to_string(&config)?.trim_end()
    ))
    .print(output_json)
}

pub fn cmd_config_get(key: &str, output_json: bool) -> Result<()> {
    let config = Config::load()?;
    let value = config.get(key)?;

    CommandOutput::new(json!({ "key": key, "value": value }))
        .with_text(value)
        .print(output_json)
}

pub fn cmd_config_set(key: &str, value: &str, output_json: bool) -> Result<()> {
    let mut config = Config::load()?;
    config.set(key, value)?;
    config.save()?;

    CommandOutput::new(json!({ "key": key, "value": config.get(key)? }))
        .with_text(format!("Set {} = {}", key, config.get(key)?))
        .print(output_json)
}
