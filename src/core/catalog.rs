//! Language catalog
//!
//! The catalog is a static JSON document bundled into the binary. List order
//! is authoritative: the frontend projects it 1:1 into both language
//! selectors, no deduplication, no sorting.

use isolang::Language;

use crate::shared::error::{AppError, AppResult};
use crate::shared::types::{LanguageEntry, LanguageList};

static CATALOG_JSON: &str = include_str!("../../assets/languages.json");

/// Load and validate the bundled language catalog.
pub fn load_catalog() -> AppResult<LanguageList> {
    parse_catalog(CATALOG_JSON)
}

/// Parse a catalog document, rejecting malformed or unknown entries.
pub fn parse_catalog(raw: &str) -> AppResult<LanguageList> {
    let list: LanguageList = serde_json::from_str(raw)
        .map_err(|e| AppError::Validation(format!("Malformed language catalog: {}", e)))?;

    if list.languages.is_empty() {
        return Err(AppError::Validation("Language catalog is empty".to_string()));
    }

    for entry in &list.languages {
        validate_entry(entry)?;
    }

    Ok(list)
}

fn validate_entry(entry: &LanguageEntry) -> AppResult<()> {
    if entry.name.trim().is_empty() {
        return Err(AppError::Validation(format!(
            "Language entry '{}' has an empty name",
            entry.code
        )));
    }
    if Language::from_639_1(&entry.code).is_none() {
        return Err(AppError::Validation(format!(
            "Unknown language code: {}",
            entry.code
        )));
    }
    Ok(())
}
