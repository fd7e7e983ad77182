use tauri::{AppHandle, Emitter};
use super::events::AppEvent;

/// Emit an application event to all windows
///
/// The AppEvent enum encapsulates both the event name (via serde rename)
/// and the payload; this dispatcher maps each variant to its wire name.
pub fn emit_event(app: &AppHandle, event: AppEvent) {
    match &event {
        AppEvent::ResultText(content) => {
            if let Err(e) = app.emit("result://text", content) {
                eprintln!("Failed to emit result text: {}", e);
            }
        }

        AppEvent::ResultRendered(rendered) => {
            if let Err(e) = app.emit("result://rendered", rendered) {
                eprintln!("Failed to emit rendered result: {}", e);
            }
        }

        AppEvent::SettingsUpdated(settings) => {
            if let Err(e) = app.emit("settings://updated", settings) {
                eprintln!("Failed to emit settings update: {}", e);
            }
        }
    }
}
