//! Generative-language collaborator (Gemini `generateContent`).
//!
//! Chat and exercise-suggestion routes delegate here. Every call pins the
//! response to `application/json` with an explicit `responseSchema`, so the
//! assistant text is required to parse as JSON before it is returned to the
//! web client verbatim.

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{json, Value};

use super::ClientError;

const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";
const DEFAULT_MODEL: &str = "gemini-2.0-flash";

/// Sampling parameters for one generation call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SamplingOptions {
    pub temperature: f64,
    pub top_p: f64,
    pub top_k: u32,
    pub max_output_tokens: u32,
}

/// Object-safe seam over the generative-language collaborator.
#[async_trait]
pub trait GenerativeModel: Send + Sync {
    /// Generates a structured reply for `prompt`, constrained by `schema`.
    ///
    /// The returned value is the parsed JSON payload, passed to the caller
    /// without further interpretation.
    async fn generate_json(
        &self,
        prompt: &str,
        sampling: &SamplingOptions,
        schema: Value,
    ) -> Result<Value, ClientError>;
}

/// Production client for the Gemini REST API.
pub struct GeminiClient {
    api_key: String,
    model: String,
    http: reqwest::Client,
}

impl GeminiClient {
    pub fn new(api_key: String) -> Self {
        GeminiClient {
            api_key,
            model: DEFAULT_MODEL.to_string(),
            http: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl GenerativeModel for GeminiClient {
    async fn generate_json(
        &self,
        prompt: &str,
        sampling: &SamplingOptions,
        schema: Value,
    ) -> Result<Value, ClientError> {
        let endpoint = format!(
            "{}/{}:generateContent?key={}",
            GEMINI_API_BASE, self.model, self.api_key
        );

        let response = self
            .http
            .post(&endpoint)
            .json(&build_request_body(prompt, sampling, schema))
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(ClientError::Upstream(format!(
                "generation request failed ({}): {}",
                status, body
            )));
        }

        let parsed: GenerateContentResponse = serde_json::from_str(&body)
            .map_err(|err| ClientError::Parse(err.to_string()))?;
        let text = parsed
            .candidates
            .into_iter()
            .next()
            .and_then(|candidate| candidate.content.parts.into_iter().next())
            .and_then(|part| part.text)
            .ok_or_else(|| ClientError::Parse("response carried no candidate text".to_string()))?;

        serde_json::from_str(&text).map_err(|err| {
            ClientError::Parse(format!("candidate text is not valid JSON: {}", err))
        })
    }
}

fn build_request_body(prompt: &str, sampling: &SamplingOptions, schema: Value) -> Value {
    json!({
        "contents": [{ "parts": [{ "text": prompt }] }],
        "generationConfig": {
            "temperature": sampling.temperature,
            "topP": sampling.top_p,
            "topK": sampling.top_k,
            "maxOutputTokens": sampling.max_output_tokens,
            "responseMimeType": "application/json",
            "responseSchema": schema,
        },
    })
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Content,
}

#[derive(Debug, Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Deserialize)]
struct Part {
    text: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_body_carries_sampling_and_schema() {
        let sampling = SamplingOptions {
            temperature: 0.7,
            top_p: 0.95,
            top_k: 40,
            max_output_tokens: 1024,
        };
        let body = build_request_body("hello", &sampling, json!({ "type": "object" }));

        let config = &body["generationConfig"];
        assert_eq!(config["temperature"], json!(0.7));
        assert_eq!(config["topP"], json!(0.95));
        assert_eq!(config["topK"], json!(40));
        assert_eq!(config["maxOutputTokens"], json!(1024));
        assert_eq!(config["responseMimeType"], json!("application/json"));
        assert_eq!(config["responseSchema"]["type"], json!("object"));
        assert_eq!(body["contents"][0]["parts"][0]["text"], json!("hello"));
    }

    #[test]
    fn candidate_text_parses() {
        let raw = json!({
            "candidates": [{
                "content": { "parts": [{ "text": "{\"message\":\"hi\"}" }] }
            }]
        });
        let parsed: GenerateContentResponse = serde_json::from_value(raw).unwrap();
        let text = parsed.candidates[0].content.parts[0].text.as_deref().unwrap();
        let value: Value = serde_json::from_str(text).unwrap();
        assert_eq!(value["message"], json!("hi"));
    }
}
