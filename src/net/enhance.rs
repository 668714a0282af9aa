// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Text-enhancement service client.
//!
//! A minimal blocking client for an OpenAI-compatible chat-completions
//! endpoint, used to polish the wording of a single poster element. The
//! application runs it on a worker thread; exactly one request is in
//! flight at a time, with no retries and no cancellation.

use serde::{Deserialize, Serialize};
use thiserror::Error;

const DEFAULT_ENDPOINT: &str = "https://api.openai.com/v1/chat/completions";
const DEFAULT_MODEL: &str = "gpt-4o-mini";

const SYSTEM_PROMPT: &str = "أنت مساعد تحرير لملصقات إعلانات المحاضرات. \
حسّن صياغة النص التالي بالعربية الفصحى مع الحفاظ على معناه وإيجازه، \
وأعد النص المحسّن فقط دون أي شرح.";

/// Errors that can occur when talking to the enhancement service.
#[derive(Debug, Error)]
pub enum EnhanceError {
    /// HTTP layer failed (connection, TLS, non-success status).
    #[error("enhancement request failed: {0}")]
    Http(#[from] reqwest::Error),
    /// The response did not match the expected structure.
    #[error("unexpected enhancement response: {0}")]
    UnexpectedResponse(String),
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: String,
}

/// Blocking client for the text-enhancement endpoint.
pub struct EnhanceClient {
    http: reqwest::blocking::Client,
    endpoint: String,
    api_key: Option<String>,
    model: String,
}

impl EnhanceClient {
    /// Build a client from `LAWHA_ENHANCE_URL`, `LAWHA_ENHANCE_KEY` and
    /// `LAWHA_ENHANCE_MODEL`, with defaults for everything but the key.
    pub fn from_env() -> Result<Self, EnhanceError> {
        let endpoint =
            std::env::var("LAWHA_ENHANCE_URL").unwrap_or_else(|_| DEFAULT_ENDPOINT.to_string());
        let api_key = std::env::var("LAWHA_ENHANCE_KEY").ok();
        let model =
            std::env::var("LAWHA_ENHANCE_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());

        let http = reqwest::blocking::Client::builder()
            .user_agent("lawha")
            .build()?;

        Ok(Self {
            http,
            endpoint,
            api_key,
            model,
        })
    }

    /// Ask the service for an improved wording of `text`.
    pub fn enhance(&self, text: &str) -> Result<String, EnhanceError> {
        let body = build_request(&self.model, text);

        let mut request = self.http.post(&self.endpoint).json(&body);
        if let Some(key) = &self.api_key {
            request = request.bearer_auth(key);
        }

        let response: ChatResponse = request.send()?.error_for_status()?.json()?;
        extract_reply(response)
    }
}

fn build_request<'a>(model: &'a str, text: &'a str) -> ChatRequest<'a> {
    ChatRequest {
        model,
        messages: vec![
            ChatMessage {
                role: "system",
                content: SYSTEM_PROMPT,
            },
            ChatMessage {
                role: "user",
                content: text,
            },
        ],
    }
}

fn extract_reply(response: ChatResponse) -> Result<String, EnhanceError> {
    let reply = response
        .choices
        .into_iter()
        .next()
        .ok_or_else(|| EnhanceError::UnexpectedResponse("no choices returned".to_string()))?
        .message
        .content;

    let trimmed = reply.trim();
    if trimmed.is_empty() {
        return Err(EnhanceError::UnexpectedResponse(
            "empty enhancement".to_string(),
        ));
    }
    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_body_has_system_and_user_messages() {
        let body = build_request("gpt-4o-mini", "محاضرة عن الفقه");
        let json = serde_json::to_value(&body).expect("serialize failed");

        assert_eq!(json["model"], "gpt-4o-mini");
        let messages = json["messages"].as_array().expect("messages not an array");
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0]["role"], "system");
        assert_eq!(messages[1]["role"], "user");
        assert_eq!(messages[1]["content"], "محاضرة عن الفقه");
    }

    #[test]
    fn reply_is_extracted_and_trimmed() {
        let response: ChatResponse = serde_json::from_value(serde_json::json!({
            "choices": [
                {"message": {"role": "assistant", "content": "  محاضرة بعنوان: أحكام البيوع\n"}}
            ]
        }))
        .expect("deserialize failed");

        let reply = extract_reply(response).expect("extract failed");
        assert_eq!(reply, "محاضرة بعنوان: أحكام البيوع");
    }

    #[test]
    fn missing_choices_is_an_error() {
        let response: ChatResponse =
            serde_json::from_value(serde_json::json!({"choices": []})).expect("deserialize failed");
        assert!(matches!(
            extract_reply(response),
            Err(EnhanceError::UnexpectedResponse(_))
        ));
    }

    #[test]
    fn whitespace_only_reply_is_an_error() {
        let response: ChatResponse = serde_json::from_value(serde_json::json!({
            "choices": [{"message": {"role": "assistant", "content": "   \n"}}]
        }))
        .expect("deserialize failed");
        assert!(extract_reply(response).is_err());
    }
}
