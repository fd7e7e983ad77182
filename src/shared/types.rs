use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// One entry of the language catalog. Identity is `code` (ISO 639-1).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "frontend/types/bindings.ts")]
pub struct LanguageEntry {
    pub code: String,
    pub name: String,
}

/// Catalog payload, mirrors the shape of the bundled `languages.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "frontend/types/bindings.ts")]
pub struct LanguageList {
    pub languages: Vec<LanguageEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "frontend/types/bindings.ts")]
pub struct TranslateRequest {
    pub text: String,
    pub source_lang: String,
    pub dest_lang: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "frontend/types/bindings.ts")]
pub struct TranslateResponse {
    pub translated_text: String,
    /// Wall-clock seconds spent in the translation call.
    pub time_taken: f64,
    pub detected_source_lang: Option<String>,
}

/// A successful render pushed to the result region.
///
/// Carries the raw translation alongside the display markup so the frontend
/// can copy/swap the translated text itself, not the labeled string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "frontend/types/bindings.ts")]
pub struct RenderedTranslation {
    pub markup: String,
    pub translation: TranslateResponse,
    /// Ordinal of this render since startup ("Translations: N").
    pub completed: u64,
}

/// What a single form submission amounted to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "frontend/types/bindings.ts")]
pub enum SubmitOutcome {
    /// Capability called, result rendered.
    Completed,
    /// Capability called, failure rendered.
    Failed,
    /// Trimmed text was empty; prompt rendered, no call made.
    EmptyInput,
    /// A submission was already outstanding; this one was dropped.
    InFlight,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "frontend/types/bindings.ts")]
pub struct TextStats {
    pub characters: usize,
    pub words: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "frontend/types/bindings.ts")]
pub struct LogRequest {
    pub level: String,
    pub message: String,
}
