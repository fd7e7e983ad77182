use serde::{Deserialize, Serialize};
use ts_rs::TS;
use tokio::fs;
use std::path::PathBuf;
use directories::ProjectDirs;
use tauri::AppHandle;
use crate::shared::error::{AppError, AppResult};
use crate::shared::events::AppEvent;
use crate::shared::emit::emit_event;

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "frontend/types/settings.ts")]
pub struct AppSettings {
    pub preferences: UserPreferences,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "frontend/types/settings.ts")]
pub struct UserPreferences {
    pub default_source_lang: String,
    pub default_dest_lang: String,
    pub auto_translate: bool,
    pub auto_translate_delay_ms: u64,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            preferences: UserPreferences {
                default_source_lang: "en".to_string(),
                default_dest_lang: "zh".to_string(),
                auto_translate: true,
                auto_translate_delay_ms: 1000,
            },
        }
    }
}

impl AppSettings {
    pub fn get_settings_path() -> AppResult<PathBuf> {
        ProjectDirs::from("com", "antigravity", "translator-desk")
            .map(|dirs| dirs.config_dir().join("settings.json"))
            .ok_or_else(|| AppError::System("Failed to determine config directory".to_string()))
    }

    pub async fn load() -> AppResult<Self> {
        let path = Self::get_settings_path()?;

        if !path.exists() {
            let settings = Self::default();
            settings.save_to_disk().await?;
            return Ok(settings);
        }

        let content = fs::read_to_string(&path)
            .await
            .map_err(|e| AppError::Io(format!("Failed to read settings file: {}", e)))?;

        serde_json::from_str(&content)
            .map_err(|e| AppError::Validation(format!("Failed to parse settings: {}", e)))
    }

    /// Internal helper to save to disk without emission
    async fn save_to_disk(&self) -> AppResult<()> {
        let path = Self::get_settings_path()?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| AppError::Io(format!("Failed to create config directory: {}", e)))?;
        }

        let content = serde_json::to_string_pretty(self)?;

        fs::write(&path, content)
            .await
            .map_err(|e| AppError::Io(format!("Failed to write settings file: {}", e)))
    }

    /// Save settings to disk and emit update event
    pub async fn save(&self, app: &AppHandle) -> AppResult<()> {
        self.save_to_disk().await?;

        emit_event(app, AppEvent::SettingsUpdated(self.clone()));

        Ok(())
    }
}
