use async_trait::async_trait;
use log::debug;
use reqwest::{ Client as HttpClient, header::{ HeaderMap, HeaderValue, CONTENT_TYPE } };
use serde::{ Deserialize, Serialize };
use std::time::Duration;
use thiserror::Error;

#[derive(Serialize, Debug)]
struct ChatRequest<'a> {
    message: &'a str,
}

/// Wire shape of the chat endpoint's answer. The endpoint also echoes a
/// `history` field, which this client ignores; the local store is
/// authoritative.
#[derive(Deserialize, Debug)]
struct ChatResponse {
    reply: Option<String>,
    error: Option<String>,
}

/// Outcome of one successful round trip to the chat endpoint.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BackendReply {
    Reply(String),
    /// The endpoint answered but signalled an application-level error.
    AppError(String),
}

#[derive(Error, Debug)]
pub enum BackendError {
    #[error("chat request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("chat reply carried neither a reply nor an error")]
    MalformedReply,
}

#[async_trait]
pub trait ChatBackend: Send + Sync {
    async fn send_message(&self, message: &str) -> Result<BackendReply, BackendError>;
}

pub struct HttpChatBackend {
    http: HttpClient,
    url: String,
}

impl HttpChatBackend {
    pub fn new(url: String, timeout: Duration) -> Result<Self, BackendError> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        let http = HttpClient::builder()
            .default_headers(headers)
            .timeout(timeout)
            .build()?;

        Ok(Self { http, url })
    }
}

#[async_trait]
impl ChatBackend for HttpChatBackend {
    async fn send_message(&self, message: &str) -> Result<BackendReply, BackendError> {
        debug!("POST {} ({} chars)", self.url, message.chars().count());
        let payload = ChatRequest { message };
        let resp = self.http
            .post(&self.url)
            .json(&payload)
            .send().await?
            .error_for_status()?
            .json::<ChatResponse>().await?;

        resolve_reply(resp)
    }
}

fn resolve_reply(resp: ChatResponse) -> Result<BackendReply, BackendError> {
    // The error field takes precedence when both are present.
    if let Some(error) = resp.error {
        return Ok(BackendReply::AppError(error));
    }
    match resp.reply {
        Some(reply) => Ok(BackendReply::Reply(reply)),
        None => Err(BackendError::MalformedReply),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode(json: &str) -> Result<BackendReply, BackendError> {
        let resp: ChatResponse = serde_json::from_str(json).expect("test payload parses");
        resolve_reply(resp)
    }

    #[test]
    fn reply_payload_decodes() {
        let got = decode(r#"{"reply": "Gravity is a force."}"#).unwrap();
        assert_eq!(got, BackendReply::Reply("Gravity is a force.".to_string()));
    }

    #[test]
    fn error_payload_decodes() {
        let got = decode(r#"{"error": "No message provided"}"#).unwrap();
        assert_eq!(got, BackendReply::AppError("No message provided".to_string()));
    }

    #[test]
    fn error_field_wins_over_reply() {
        let got = decode(r#"{"reply": "ignored", "error": "quota exceeded"}"#).unwrap();
        assert_eq!(got, BackendReply::AppError("quota exceeded".to_string()));
    }

    #[test]
    fn extra_history_field_is_ignored() {
        let got = decode(r#"{"reply": "hi", "history": [{"role": "user", "content": "hi"}]}"#).unwrap();
        assert_eq!(got, BackendReply::Reply("hi".to_string()));
    }

    #[test]
    fn payload_without_either_field_is_malformed() {
        assert!(matches!(decode("{}"), Err(BackendError::MalformedReply)));
    }
}
