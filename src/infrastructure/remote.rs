//! Client for a remote breakdown endpoint

use crate::error::{HabitError, Result};
use log::debug;
use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Body sent to the breakdown endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreakdownRequest {
    pub habit: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mood: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
}

impl BreakdownRequest {
    pub fn new(habit: &str, mood: Option<&str>, time: Option<&str>) -> Self {
        BreakdownRequest {
            habit: habit.to_string(),
            mood: mood.map(str::to_string),
            time: time.map(str::to_string),
        }
    }
}

#[derive(Debug, Deserialize)]
struct BreakdownResponse {
    subtasks: Vec<String>,
}

/// Anything that can produce a breakdown for a request
pub trait BreakdownSource {
    /// Fetch steps. Errors and empty results are both failures.
    fn fetch(&self, request: &BreakdownRequest) -> Result<Vec<String>>;
}

/// HTTP client for `POST {habit, mood?, time?}` -> `{subtasks: [...]}`
pub struct RemoteBreakdownClient {
    endpoint: String,
    http: Client,
}

impl RemoteBreakdownClient {
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self> {
        let http = Client::builder().timeout(timeout).build()?;

        Ok(RemoteBreakdownClient {
            endpoint: endpoint.into(),
            http,
        })
    }
}

impl BreakdownSource for RemoteBreakdownClient {
    fn fetch(&self, request: &BreakdownRequest) -> Result<Vec<String>> {
        debug!("requesting breakdown for '{}' from {}", request.habit, self.endpoint);

        let response = self.http.post(&self.endpoint).json(request).send()?;
        let status = response.status();
        if !status.is_success() {
            return Err(HabitError::Remote(format!(
                "endpoint returned status {}",
                status.as_u16()
            )));
        }

        let body: BreakdownResponse = response.json()?;
        if body.subtasks.is_empty() {
            return Err(HabitError::Remote("endpoint returned no subtasks".to_string()));
        }

        Ok(body.subtasks)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Read;
    use std::thread;
    use tiny_http::{Response, Server};

    /// Serve a single canned response and hand back the request body
    fn one_shot_server(status: u16, body: &'static str) -> (String, thread::JoinHandle<String>) {
        let server = Server::http("127.0.0.1:0").unwrap();
        let addr = server.server_addr().to_ip().unwrap();
        let handle = thread::spawn(move || {
            let mut request = server.recv().unwrap();
            let mut received = String::new();
            request.as_reader().read_to_string(&mut received).unwrap();
            request
                .respond(Response::from_string(body).with_status_code(status))
                .unwrap();
            received
        });
        (format!("http://{}/api/generate-breakdown", addr), handle)
    }

    #[test]
    fn test_request_omits_missing_fields() {
        let request = BreakdownRequest::new("Read", None, Some("07:00"));
        assert_eq!(
            serde_json::to_string(&request).unwrap(),
            r#"{"habit":"Read","time":"07:00"}"#
        );
    }

    #[test]
    fn test_fetch_success() {
        let (url, handle) = one_shot_server(200, r#"{"subtasks":["a","b"]}"#);
        let client = RemoteBreakdownClient::new(url, Duration::from_secs(5)).unwrap();

        let steps = client
            .fetch(&BreakdownRequest::new("Read", Some("tired"), None))
            .unwrap();
        assert_eq!(steps, vec!["a", "b"]);

        let sent: BreakdownRequest = serde_json::from_str(&handle.join().unwrap()).unwrap();
        assert_eq!(sent.habit, "Read");
        assert_eq!(sent.mood.as_deref(), Some("tired"));
        assert_eq!(sent.time, None);
    }

    #[test]
    fn test_fetch_error_status() {
        let (url, handle) = one_shot_server(502, r#"{"error":"AI provider error"}"#);
        let client = RemoteBreakdownClient::new(url, Duration::from_secs(5)).unwrap();

        let err = client
            .fetch(&BreakdownRequest::new("Read", None, None))
            .unwrap_err();
        assert!(err.to_string().contains("502"));
        handle.join().unwrap();
    }

    #[test]
    fn test_fetch_empty_subtasks() {
        let (url, handle) = one_shot_server(200, r#"{"subtasks":[]}"#);
        let client = RemoteBreakdownClient::new(url, Duration::from_secs(5)).unwrap();

        assert!(client
            .fetch(&BreakdownRequest::new("Read", None, None))
            .is_err());
        handle.join().unwrap();
    }

    #[test]
    fn test_fetch_wrong_shape() {
        let (url, handle) = one_shot_server(200, r#"["a","b"]"#);
        let client = RemoteBreakdownClient::new(url, Duration::from_secs(5)).unwrap();

        assert!(client
            .fetch(&BreakdownRequest::new("Read", None, None))
            .is_err());
        handle.join().unwrap();
    }
}
