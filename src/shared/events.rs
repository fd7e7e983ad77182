use serde::{Serialize, Deserialize};
use ts_rs::TS;
use super::settings::AppSettings;
use super::types::RenderedTranslation;

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(tag = "event", content = "payload")] // Tagged enum for easier frontend parsing
#[ts(export, export_to = "frontend/types/events.ts")] // Separate file for events
pub enum AppEvent {
    /// Replace the result region with plain text (status/prompt/failure).
    #[serde(rename = "result://text")]
    ResultText(String),

    /// Replace the result region with a successful translation.
    #[serde(rename = "result://rendered")]
    ResultRendered(RenderedTranslation),

    #[serde(rename = "settings://updated")]
    SettingsUpdated(AppSettings),
}
