use crate::config::{OutputFormat, Settings};
use crate::core::CheckOutcome;
use crate::utils::error::Result;

pub fn render(outcomes: &[CheckOutcome], settings: &Settings) -> Result<String> {
    match settings.format {
        OutputFormat::Text => Ok(render_text(outcomes)),
        OutputFormat::Json if settings.pretty => Ok(serde_json::to_string_pretty(outcomes)?),
        OutputFormat::Json => Ok(serde_json::to_string(outcomes)?),
    }
}

fn render_text(outcomes: &[CheckOutcome]) -> String {
    outcomes
        .iter()
        .map(|outcome| {
            let kind = outcome.kind.map(|k| k.label()).unwrap_or("unknown");
            let status = if outcome.valid { "valid" } else { "invalid" };
            format!("{}\t{}\t{}", outcome.input, kind, status)
        })
        .collect::<Vec<_>>()
        .join("\n")
}
