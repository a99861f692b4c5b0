//! HTTP proxy that turns breakdown requests into generative-text prompts
//!
//! `habitual serve` → listens for `POST /api/generate-breakdown` and relays
//! `{subtasks: [...]}` built from the provider's reply.

use crate::error::{HabitError, Result};
use crate::infrastructure::remote::BreakdownRequest;
use anyhow::Context;
use log::{error, info, warn};
use reqwest::blocking::Client;
use serde_json::{json, Value};
use std::io::Read;
use std::net::SocketAddr;
use std::time::Duration;
use thiserror::Error;
use tiny_http::{Header, Method, Request, Response, Server};

pub const DEFAULT_PORT: u16 = 3001;
pub const DEFAULT_PROVIDER_URL: &str =
    "https://generativelanguage.googleapis.com/v1beta2/models/text-bison-001:generateText";
pub const BREAKDOWN_ROUTE: &str = "/api/generate-breakdown";

const PORT_ENV: &str = "PORT";
const API_KEY_ENV: &str = "GEMINI_API_KEY";
const PROVIDER_URL_ENV: &str = "HABITUAL_PROVIDER_URL";
const PROVIDER_TIMEOUT: Duration = Duration::from_secs(30);

/// Errors from the upstream text provider
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("provider returned status {status}")]
    Status { status: u16, body: String },

    #[error("provider request failed: {0}")]
    Transport(String),
}

/// A generative text backend
pub trait TextProvider: Send {
    /// Send a prompt and return the raw JSON reply
    fn complete(&self, prompt: &str) -> std::result::Result<Value, ProviderError>;
}

/// Google Generative Language `generateText` provider
pub struct GenerativeLanguageProvider {
    url: String,
    api_key: String,
    http: Client,
}

impl GenerativeLanguageProvider {
    pub fn new(url: impl Into<String>, api_key: impl Into<String>) -> Result<Self> {
        let http = Client::builder().timeout(PROVIDER_TIMEOUT).build()?;

        Ok(GenerativeLanguageProvider {
            url: url.into(),
            api_key: api_key.into(),
            http,
        })
    }
}

impl TextProvider for GenerativeLanguageProvider {
    fn complete(&self, prompt: &str) -> std::result::Result<Value, ProviderError> {
        let body = json!({
            "prompt": { "text": prompt },
            "temperature": 0.2,
            "maxOutputTokens": 500,
        });

        let response = self
            .http
            .post(&self.url)
            .query(&[("key", &self.api_key)])
            .json(&body)
            .send()
            .map_err(|e| ProviderError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(ProviderError::Status {
                status: status.as_u16(),
                body,
            });
        }

        response
            .json::<Value>()
            .map_err(|e| ProviderError::Transport(e.to_string()))
    }
}

/// Proxy settings, normally read from the environment
#[derive(Debug, Clone)]
pub struct ProxySettings {
    pub port: u16,
    pub api_key: Option<String>,
    pub provider_url: String,
}

impl ProxySettings {
    /// PORT, GEMINI_API_KEY and HABITUAL_PROVIDER_URL; `port` overrides PORT
    pub fn from_env(port: Option<u16>) -> Self {
        let port = port
            .or_else(|| std::env::var(PORT_ENV).ok().and_then(|p| p.parse().ok()))
            .unwrap_or(DEFAULT_PORT);
        let api_key = std::env::var(API_KEY_ENV).ok().filter(|k| !k.is_empty());
        let provider_url =
            std::env::var(PROVIDER_URL_ENV).unwrap_or_else(|_| DEFAULT_PROVIDER_URL.to_string());

        ProxySettings {
            port,
            api_key,
            provider_url,
        }
    }

    /// Provider for these settings, None without an API key
    pub fn provider(&self) -> Result<Option<Box<dyn TextProvider>>> {
        match &self.api_key {
            Some(key) => {
                let provider: Box<dyn TextProvider> = Box::new(GenerativeLanguageProvider::new(
                    self.provider_url.clone(),
                    key.clone(),
                )?);
                Ok(Some(provider))
            }
            None => Ok(None),
        }
    }
}

/// Status code and JSON body for one proxied request
#[derive(Debug, Clone, PartialEq)]
pub struct ProxyReply {
    pub status: u16,
    pub body: Value,
}

impl ProxyReply {
    fn error(status: u16, message: &str) -> Self {
        ProxyReply {
            status,
            body: json!({ "error": message }),
        }
    }
}

pub fn build_prompt(request: &BreakdownRequest) -> String {
    format!(
        "Break down this habit into short, actionable timed steps. Habit: \"{}\". Mood: \"{}\". Preferred time: \"{}\". Return the steps as a JSON array of strings where each string is like \"5 minutes: do X\".",
        request.habit,
        request.mood.as_deref().filter(|m| !m.is_empty()).unwrap_or("neutral"),
        request.time.as_deref().filter(|t| !t.is_empty()).unwrap_or("any"),
    )
}

/// Pull generated text out of the provider reply.
///
/// Looks at the first candidate's `output`, then its `content` (string, or
/// array of parts joined by spaces). Only without candidates is a top-level
/// `output` considered.
pub fn extract_text(data: &Value) -> Option<String> {
    let text = match data.get("candidates").and_then(Value::as_array) {
        Some(candidates) if !candidates.is_empty() => {
            let candidate = &candidates[0];
            if let Some(output) = candidate.get("output").and_then(Value::as_str) {
                Some(output.to_string())
            } else {
                match candidate.get("content") {
                    Some(Value::String(content)) => Some(content.clone()),
                    Some(Value::Array(parts)) => Some(
                        parts
                            .iter()
                            .map(|part| match part.get("text").and_then(Value::as_str) {
                                Some(text) if !text.is_empty() => text.to_string(),
                                _ => match part.as_str() {
                                    Some(s) => s.to_string(),
                                    None => part.to_string(),
                                },
                            })
                            .collect::<Vec<_>>()
                            .join(" "),
                    ),
                    _ => None,
                }
            }
        }
        _ => data
            .get("output")
            .and_then(Value::as_str)
            .map(str::to_string),
    };

    text.filter(|t| !t.is_empty())
}

/// Turn generated text into steps: a JSON string array when the text looks
/// like one, otherwise its non-empty trimmed lines.
pub fn parse_steps(text: &str) -> Vec<String> {
    let trimmed = text.trim();
    if trimmed.starts_with('[') {
        if let Ok(steps) = serde_json::from_str::<Vec<String>>(trimmed) {
            return steps;
        }
    }

    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Text form of a request field. Absent, null, false, zero and empty
/// values count as missing; other scalars are rendered as text.
fn field_text(body: &Value, key: &str) -> Option<String> {
    match body.get(key)? {
        Value::Null | Value::Bool(false) => None,
        Value::String(s) if s.is_empty() => None,
        Value::String(s) => Some(s.clone()),
        Value::Number(n) if n.as_f64() == Some(0.0) => None,
        other => Some(other.to_string()),
    }
}

/// Read a request body leniently: only the habit is required
pub fn parse_request(body: &str) -> Option<BreakdownRequest> {
    let value: Value = serde_json::from_str(body).ok()?;
    let habit = field_text(&value, "habit")?;

    Some(BreakdownRequest {
        habit,
        mood: field_text(&value, "mood"),
        time: field_text(&value, "time"),
    })
}

/// Handle one breakdown request body
pub fn handle_generate(body: &str, provider: Option<&dyn TextProvider>) -> ProxyReply {
    let Some(request) = parse_request(body) else {
        return ProxyReply::error(400, "missing habit");
    };

    let Some(provider) = provider else {
        return ProxyReply::error(400, "no API key configured on server");
    };

    let data = match provider.complete(&build_prompt(&request)) {
        Ok(data) => data,
        Err(ProviderError::Status { status, body }) => {
            error!("AI request failed: {} {}", status, body);
            return ProxyReply {
                status: 502,
                body: json!({ "error": "AI provider error", "details": body }),
            };
        }
        Err(e) => {
            error!("{}", e);
            return ProxyReply::error(500, "server error");
        }
    };

    let Some(text) = extract_text(&data) else {
        return ProxyReply::error(502, "no text from AI");
    };

    ProxyReply {
        status: 200,
        body: json!({ "subtasks": parse_steps(&text) }),
    }
}

fn json_header() -> anyhow::Result<Header> {
    Header::from_bytes(&b"Content-Type"[..], &b"application/json"[..])
        .map_err(|_| anyhow::anyhow!("invalid content-type header"))
}

/// The proxy's listening socket and provider
pub struct ProxyServer {
    server: Server,
    provider: Option<Box<dyn TextProvider>>,
}

impl ProxyServer {
    pub fn bind(addr: &str, provider: Option<Box<dyn TextProvider>>) -> Result<Self> {
        let server = Server::http(addr).map_err(|e| HabitError::Server(e.to_string()))?;
        Ok(ProxyServer { server, provider })
    }

    pub fn local_addr(&self) -> Option<SocketAddr> {
        self.server.server_addr().to_ip()
    }

    /// Serve requests until the listener shuts down
    pub fn run(self) {
        if self.provider.is_none() {
            warn!("{} not set; AI calls will fail until configured", API_KEY_ENV);
        }

        for request in self.server.incoming_requests() {
            if let Err(e) = self.handle_request(request) {
                error!("request failed: {:#}", e);
            }
        }
    }

    fn handle_request(&self, mut request: Request) -> anyhow::Result<()> {
        let url = request.url().to_string();
        let path = url.split('?').next().unwrap_or("/");
        let method = request.method().clone();

        match (&method, path) {
            (&Method::Post, BREAKDOWN_ROUTE) => {
                let mut body = String::new();
                let reply = match request.as_reader().read_to_string(&mut body) {
                    Ok(_) => handle_generate(&body, self.provider.as_deref()),
                    Err(e) => {
                        warn!("failed to read request body: {}", e);
                        ProxyReply::error(400, "missing habit")
                    }
                };
                info!("{} {} -> {}", method, path, reply.status);

                let json = serde_json::to_string(&reply.body).context("serializing reply")?;
                let response = Response::from_string(json)
                    .with_status_code(reply.status)
                    .with_header(json_header()?);
                request.respond(response).context("writing response")
            }
            _ => {
                let response = Response::from_string("Not found").with_status_code(404);
                request.respond(response).context("writing 404")
            }
        }
    }
}

/// Bind on all interfaces at the configured port and serve forever
pub fn serve(settings: &ProxySettings) -> Result<()> {
    let addr = format!("0.0.0.0:{}", settings.port);
    let server = ProxyServer::bind(&addr, settings.provider()?)?;

    eprintln!("AI proxy server listening on {}", settings.port);
    server.run();
    Ok(())
}
