//! Translation form controller
//!
//! The submit control flow lives here, behind two seams: the translation
//! capability (the external call) and the result sink (the display region).
//! Both are injected, so every path is testable without a live webview.
//!
//! Per submission: trim, reject empty input, write the in-progress status,
//! issue exactly one capability call, render the result or the failure.
//! The status write always happens before the call is issued.

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

use async_trait::async_trait;

use crate::shared::error::AppResult;
use crate::shared::types::{RenderedTranslation, SubmitOutcome, TranslateResponse};

/// Rendered when the trimmed input is empty; no call is made.
pub const EMPTY_PROMPT: &str = "Please enter text to translate.";
/// Rendered synchronously before the capability call is issued.
pub const STATUS_TRANSLATING: &str = "Translating...";

/// The external translation capability. Opaque: engine, transport and model
/// choice are entirely behind this seam.
#[async_trait]
pub trait TranslateCapability: Send + Sync {
    async fn translate(
        &self,
        text: &str,
        source_lang: &str,
        dest_lang: &str,
    ) -> AppResult<TranslateResponse>;
}

/// The result display region. Each write replaces the previous content.
pub trait ResultSink: Send + Sync {
    /// Replace content with plain text (prompt, status, failure).
    fn set_text(&self, content: &str);
    /// Replace content with a successful translation.
    fn render_translation(&self, rendered: &RenderedTranslation);
}

pub struct TranslateForm<C, S> {
    capability: C,
    sink: S,
    in_flight: AtomicBool,
    completed: AtomicU64,
}

impl<C: TranslateCapability, S: ResultSink> TranslateForm<C, S> {
    pub fn new(capability: C, sink: S) -> Self {
        Self {
            capability,
            sink,
            in_flight: AtomicBool::new(false),
            completed: AtomicU64::new(0),
        }
    }

    /// Handle one form submission.
    ///
    /// A submission that arrives while another is outstanding is dropped
    /// without touching the sink; the pending status stays up.
    pub async fn submit(&self, text: &str, source_lang: &str, dest_lang: &str) -> SubmitOutcome {
        let text = text.trim();
        if text.is_empty() {
            self.sink.set_text(EMPTY_PROMPT);
            return SubmitOutcome::EmptyInput;
        }

        if self.in_flight.swap(true, Ordering::SeqCst) {
            println!("[Form] Submission dropped: a request is already in flight");
            return SubmitOutcome::InFlight;
        }

        self.sink.set_text(STATUS_TRANSLATING);

        let outcome = match self.capability.translate(text, source_lang, dest_lang).await {
            Ok(response) => {
                let completed = self.completed.fetch_add(1, Ordering::SeqCst) + 1;
                self.sink.render_translation(&RenderedTranslation {
                    markup: render_result(&response),
                    translation: response,
                    completed,
                });
                SubmitOutcome::Completed
            }
            Err(e) => {
                eprintln!("[Form] Translation failed: {}", e);
                self.sink.set_text(&format!("Translation failed: {}", e));
                SubmitOutcome::Failed
            }
        };

        self.in_flight.store(false, Ordering::SeqCst);
        outcome
    }

    /// Number of submissions that rendered a translation.
    pub fn completed_count(&self) -> u64 {
        self.completed.load(Ordering::SeqCst)
    }
}

/// Two-line bold-labeled result markup; values interpolated verbatim.
pub fn render_result(response: &TranslateResponse) -> String {
    format!(
        "<strong>Translated Text:</strong> {}<br><strong>Time Taken:</strong> {} seconds",
        response.translated_text, response.time_taken
    )
}
