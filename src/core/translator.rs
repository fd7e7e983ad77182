//! Google Translate capability
//!
//! Uses the unofficial Google Translate API endpoint (free tier).
//! For production, consider using the official Google Cloud Translation API.

use std::time::Instant;

use async_trait::async_trait;
use reqwest::Client;

use crate::shared::error::{AppError, AppResult};
use crate::shared::types::TranslateResponse;

use super::form::TranslateCapability;

pub struct GoogleTranslator {
    http: Client,
}

impl GoogleTranslator {
    pub fn new() -> AppResult<Self> {
        let http = Client::builder()
            .user_agent("translator-desk/0.1")
            .build()
            .map_err(|e| AppError::Network(e.to_string()))?;
        Ok(Self { http })
    }
}

#[async_trait]
impl TranslateCapability for GoogleTranslator {
    async fn translate(
        &self,
        text: &str,
        source_lang: &str,
        dest_lang: &str,
    ) -> AppResult<TranslateResponse> {
        let started = Instant::now();

        // Public translate_a/single endpoint, no API key required
        let url = format!(
            "https://translate.googleapis.com/translate_a/single?client=gtx&sl={}&tl={}&dt=t&q={}",
            source_lang,
            dest_lang,
            urlencoding::encode(text)
        );

        let response = self
            .http
            .get(&url)
            .header("User-Agent", "Mozilla/5.0")
            .send()
            .await?;

        if !response.status().is_success() {
            eprintln!("[Translator] API returned error: {}", response.status());
            return Err(AppError::Network(format!(
                "Translation API error: {}",
                response.status()
            )));
        }

        let json = response
            .json::<serde_json::Value>()
            .await
            .map_err(|e| AppError::Unknown(format!("Failed to parse translation API response: {}", e)))?;

        let (translated_text, detected_source_lang) = parse_translation(&json)
            .ok_or_else(|| AppError::Unknown("Translation API returned no translation".to_string()))?;

        Ok(TranslateResponse {
            translated_text,
            time_taken: started.elapsed().as_secs_f64(),
            detected_source_lang,
        })
    }
}

/// Parse the Google Translate response format.
///
/// The payload is an array: `[[[translated, original, ...], ...], null, source_lang]`.
/// Sentence segments are concatenated in order.
fn parse_translation(json: &serde_json::Value) -> Option<(String, Option<String>)> {
    let mut translated = String::new();

    if let Some(segments) = json.get(0).and_then(|v| v.as_array()) {
        for segment in segments {
            if let Some(text) = segment.get(0).and_then(|v| v.as_str()) {
                translated.push_str(text);
            }
        }
    }

    if translated.is_empty() {
        return None;
    }

    let detected = json.get(2).and_then(|v| v.as_str()).map(|s| s.to_string());
    Some((translated, detected))
}
