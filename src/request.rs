use crate::types::{DispatchId, RequestSpec, ResponseState};
use reqwest::header::CONTENT_TYPE;
use std::error::Error as StdError;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// Content type the payload is labelled with when the user gives none
pub const DEFAULT_BODY_CONTENT_TYPE: &str = "text/plain; charset=utf-8";

/// Result of one dispatch, tagged so the UI can tell fresh results from stale ones
#[derive(Debug, Clone, PartialEq)]
pub struct DispatchOutcome {
    pub id: DispatchId,
    pub state: ResponseState,
}

/// Runs requests off the UI loop and hands results back over a channel
///
/// The UI loop owns the receiving end and drains it between frames, so the
/// response store is only ever written from that loop.
#[derive(Debug, Clone)]
pub struct Dispatcher {
    client: reqwest::Client,
    outcomes: mpsc::UnboundedSender<DispatchOutcome>,
}

impl Dispatcher {
    pub fn new(client: reqwest::Client) -> (Self, mpsc::UnboundedReceiver<DispatchOutcome>) {
        let (outcomes, receiver) = mpsc::unbounded_channel();
        (Self { client, outcomes }, receiver)
    }

    /// Spawn a background task for `spec`. Nothing prevents overlapping calls.
    pub fn dispatch(&self, id: DispatchId, spec: RequestSpec) -> JoinHandle<()> {
        let client = self.client.clone();
        let outcomes = self.outcomes.clone();

        tracing::info!(id, method = %spec.method, url = %spec.url, "dispatching request");

        tokio::spawn(async move {
            let state = dispatch(&client, &spec).await;
            tracing::debug!(id, bytes = state.raw_text.len(), "dispatch finished");

            if outcomes.send(DispatchOutcome { id, state }).is_err() {
                tracing::debug!(id, "outcome receiver dropped, discarding response");
            }
        })
    }
}

/// Send one request and turn whatever happens into response text
///
/// The HTTP status is not inspected: a 404 or 500 body is shown like any other.
/// Transport and construction failures become "Error: <message>".
pub async fn dispatch(client: &reqwest::Client, spec: &RequestSpec) -> ResponseState {
    match send(client, spec).await {
        Ok(body) => ResponseState::new(body),
        Err(e) => {
            let message = error_chain(&e);
            tracing::warn!("request failed: {message}");
            ResponseState::error(message)
        }
    }
}

async fn send(client: &reqwest::Client, spec: &RequestSpec) -> Result<String, reqwest::Error> {
    let response = build_request(client, spec).send().await?;
    tracing::debug!(status = response.status().as_u16(), "response received");
    response.text().await
}

/// Build the request exactly as typed
///
/// Neither the URL nor header names are validated here; reqwest defers such
/// errors to `send`, where they surface as the response text.
pub fn build_request(client: &reqwest::Client, spec: &RequestSpec) -> reqwest::RequestBuilder {
    let mut builder = client.request(spec.method.to_reqwest(), spec.url.as_str());

    let headers = parse_headers(&spec.headers);
    let has_content_type = headers
        .iter()
        .any(|(name, _)| name.eq_ignore_ascii_case(CONTENT_TYPE.as_str()));

    for (name, value) in headers {
        builder = builder.header(name, value);
    }

    if let Some(payload) = spec.payload() {
        if !has_content_type {
            builder = builder.header(CONTENT_TYPE, DEFAULT_BODY_CONTENT_TYPE);
        }
        builder = builder.body(payload.to_string());
    }

    builder
}

/// Parse "Name: Value" lines
///
/// Lines may be separated by `\r\n`, `\r` or `\n`. A line is kept only when it
/// holds exactly one colon and both sides are non-empty after trimming;
/// anything else is skipped without complaint.
pub fn parse_headers(text: &str) -> Vec<(String, String)> {
    text.split("\r\n")
        .flat_map(|chunk| chunk.split(['\r', '\n']))
        .filter_map(|line| {
            let parts: Vec<&str> = line.split(':').collect();
            if parts.len() != 2 {
                return None;
            }

            let name = parts[0].trim();
            let value = parts[1].trim();
            if name.is_empty() || value.is_empty() {
                return None;
            }

            Some((name.to_string(), value.to_string()))
        })
        .collect()
}

/// reqwest's top-level message is terse ("builder error"); append the causes
fn error_chain(error: &reqwest::Error) -> String {
    let mut message = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}
