use crate::translation::{Translator, TRANSLATION_FAILED};
use crate::utils::{LabelerError, Result, TranslationConfig};
use reqwest::blocking::Client;
use serde::Deserialize;
use std::time::Duration;
use tracing::warn;

pub struct TranslationClient {
    client: Client,
    endpoint: String,
    api_key: String,
    target_lang: String,
}

#[derive(Debug, Deserialize)]
struct TranslateResponse {
    data: TranslateData,
}

#[derive(Debug, Deserialize)]
struct TranslateData {
    translations: Vec<Translation>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Translation {
    translated_text: String,
}

impl TranslationClient {
    pub fn new(config: &TranslationConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()?;

        if config.api_key.is_empty() {
            warn!("Translation enabled without an API key, requests will likely be rejected");
        }

        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
            api_key: config.api_key.clone(),
            target_lang: config.target_lang.clone(),
        })
    }

    pub fn translate_text(&self, text: &str, target: &str) -> Result<String> {
        let params = [
            ("q", text),
            ("target", target),
            ("format", "text"),
            ("key", self.api_key.as_str()),
        ];

        let response = self.client.post(&self.endpoint).form(&params).send()?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().unwrap_or_default();
            return Err(LabelerError::TranslationError(format!(
                "API returned {}: {}",
                status, body
            )));
        }

        let body = response.text()?;
        parse_translation_response(&body)
    }
}

impl Translator for TranslationClient {
    fn translate(&self, text: &str) -> String {
        match self.translate_text(text, &self.target_lang) {
            Ok(translated) => translated,
            Err(e) => {
                warn!(error = %e, "Translation failed");
                TRANSLATION_FAILED.to_string()
            }
        }
    }
}

pub fn parse_translation_response(body: &str) -> Result<String> {
    let response: TranslateResponse = serde_json::from_str(body)?;
    response
        .data
        .translations
        .into_iter()
        .next()
        .map(|t| t.translated_text)
        .ok_or_else(|| LabelerError::TranslationError("No translations in response".to_string()))
}
