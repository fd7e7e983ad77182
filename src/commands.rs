use tauri::{AppHandle, State};
use tauri_plugin_clipboard_manager::ClipboardExt;

use crate::core::catalog;
use crate::core::form::{ResultSink, TranslateForm};
use crate::core::stats;
use crate::core::translator::GoogleTranslator;
use crate::shared::emit::emit_event;
use crate::shared::error::{AppError, AppResult};
use crate::shared::events::AppEvent;
use crate::shared::settings::AppSettings;
use crate::shared::types::*;

/// Result sink backed by the webview: every write is pushed to the result
/// region as a replace-content event.
pub struct EventSink {
    app: AppHandle,
}

impl EventSink {
    pub fn new(app: AppHandle) -> Self {
        Self { app }
    }
}

impl ResultSink for EventSink {
    fn set_text(&self, content: &str) {
        emit_event(&self.app, AppEvent::ResultText(content.to_string()));
    }

    fn render_translation(&self, rendered: &RenderedTranslation) {
        emit_event(&self.app, AppEvent::ResultRendered(rendered.clone()));
    }
}

/// The one form instance, managed in app state.
pub type AppForm = TranslateForm<GoogleTranslator, EventSink>;

#[tauri::command]
pub async fn get_languages() -> AppResult<LanguageList> {
    catalog::load_catalog()
}

#[tauri::command]
pub async fn submit_translation(
    form: State<'_, AppForm>,
    request: TranslateRequest,
) -> AppResult<SubmitOutcome> {
    let outcome = form
        .submit(&request.text, &request.source_lang, &request.dest_lang)
        .await;
    println!(
        "[Submit] {} -> {}: {:?} ({} completed)",
        request.source_lang,
        request.dest_lang,
        outcome,
        form.completed_count()
    );
    Ok(outcome)
}

#[tauri::command]
pub async fn get_settings() -> AppResult<AppSettings> {
    AppSettings::load().await
}

#[tauri::command]
pub async fn save_settings(app: AppHandle, settings: AppSettings) -> AppResult<()> {
    settings.save(&app).await
}

#[tauri::command]
pub fn analyse_text(text: String) -> TextStats {
    stats::analyse(&text)
}

#[tauri::command]
pub fn copy_to_clipboard(app: AppHandle, text: String) -> AppResult<()> {
    app.clipboard()
        .write_text(text)
        .map_err(|e| AppError::Clipboard(e.to_string()))
}

#[tauri::command]
pub fn log_message(request: LogRequest) {
    match request.level.as_str() {
        "error" => eprintln!("[Frontend] ERROR: {}", request.message),
        "warn" => eprintln!("[Frontend] WARN: {}", request.message),
        _ => println!("[Frontend] {}", request.message),
    }
}
