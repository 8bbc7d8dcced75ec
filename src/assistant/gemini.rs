//! Gemini `generateContent` client

use std::time::Duration;

use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};

use super::prompt::build_prompt;
use super::{Assistant, EMPTY_ANSWER_MESSAGE, MISSING_KEY_MESSAGE, REQUEST_FAILED_MESSAGE};
use crate::config::AssistantSettings;
use crate::error::{FinanceError, FinanceResult};
use crate::models::Transaction;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateRequest<'a> {
    contents: Vec<Content<'a>>,
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    role: &'static str,
    parts: Vec<RequestPart<'a>>,
}

#[derive(Debug, Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    temperature: f32,
    top_k: u32,
    top_p: f32,
}

#[derive(Debug, Default, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    text: Option<String>,
}

impl GenerateResponse {
    /// Concatenated text of the first candidate
    fn text(&self) -> Option<String> {
        let content = self.candidates.first()?.content.as_ref()?;
        let text: String = content
            .parts
            .iter()
            .filter_map(|p| p.text.as_deref())
            .collect();
        if text.trim().is_empty() {
            None
        } else {
            Some(text)
        }
    }
}

/// Assistant backed by the Gemini generation API
pub struct GeminiAssistant {
    client: Client,
    settings: AssistantSettings,
    api_key: Option<String>,
}

impl GeminiAssistant {
    /// Create an assistant with the key read from the configured variable
    pub fn from_settings(settings: &AssistantSettings) -> Self {
        Self::new(settings.clone(), settings.api_key())
    }

    pub fn new(settings: AssistantSettings, api_key: Option<String>) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(settings.timeout_secs))
            .build()
            .unwrap_or_default();

        Self {
            client,
            settings,
            api_key: api_key.filter(|k| !k.trim().is_empty()),
        }
    }

    pub fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    fn url(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.settings.endpoint.trim_end_matches('/'),
            self.settings.model
        )
    }

    fn generate(&self, api_key: &str, prompt: &str) -> FinanceResult<Option<String>> {
        let request = GenerateRequest {
            contents: vec![Content {
                role: "user",
                parts: vec![RequestPart { text: prompt }],
            }],
            generation_config: GenerationConfig {
                temperature: self.settings.temperature,
                top_k: self.settings.top_k,
                top_p: self.settings.top_p,
            },
        };

        let response = self
            .client
            .post(self.url())
            .query(&[("key", api_key)])
            .json(&request)
            .send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(FinanceError::Assistant(format!(
                "generateContent returned {}",
                status
            )));
        }

        let body: GenerateResponse = response.json()?;
        Ok(body.text())
    }
}

impl Assistant for GeminiAssistant {
    fn ask(&self, transactions: &[Transaction], query: &str) -> String {
        let Some(api_key) = self.api_key.as_deref() else {
            tracing::warn!(env = %self.settings.api_key_env, "assistant API key not set");
            return MISSING_KEY_MESSAGE.to_string();
        };

        let prompt = build_prompt(transactions, query);
        tracing::debug!(
            model = %self.settings.model,
            transactions = transactions.len(),
            "querying assistant"
        );

        match self.generate(api_key, &prompt) {
            Ok(Some(text)) => text,
            Ok(None) => EMPTY_ANSWER_MESSAGE.to_string(),
            Err(e) => {
                tracing::error!(error = %e, "assistant request failed");
                REQUEST_FAILED_MESSAGE.to_string()
            }
        }
    }
}
