use serde::{Deserialize, Serialize};
use std::io::Write;

use crate::error::Result;
use crate::models::InfoMessage;

pub mod json;
pub mod text;

/// Output format for workout summaries
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Fixed-template text line
    #[default]
    Text,
    /// One JSON object per line
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Unsupported output format: {}", s)),
        }
    }
}

/// Render a summary in the requested format, without a trailing newline
pub fn render(info: &InfoMessage, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(info.get_message()),
        OutputFormat::Json => json::render_summary(info),
    }
}

/// Write a summary as one newline-terminated line
pub fn write_summary<W: Write>(writer: &mut W, info: &InfoMessage, format: OutputFormat) -> Result<()> {
    let line = render(info, format)?;
    writeln!(writer, "{}", line)?;
    Ok(())
}
