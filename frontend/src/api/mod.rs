//! HTTP client for the text-to-SQL backend.
//!
//! Three operations against a configured base URL:
//! - `GET {base}/schema/` — raw schema text for the sidebar.
//! - `POST {base}/ask/` — translate and execute one question.
//! - `GET {base}/evaluate/` — run the gold-set evaluation batch.
//!
//! Every failure — a network-layer error or a non-2xx status — is reduced to
//! one displayable message: the body's `error` field when the backend sent
//! one, else a generic fallback. A 2xx ask body that itself carries `error`
//! is *not* a failure here; the component classifies it as a soft warning.

use gloo_net::http::{Request, Response};
use serde::Deserialize;

use common::model::ask::AskResult;
use common::model::evaluation::EvaluationResult;
use common::requests::AskRequest;
use common::schema::SchemaResponse;

use crate::config::ApiConfig;

/// Fallback message when a failure carries no usable `error` field.
pub const FETCH_FAILED: &str = "Failed to fetch";

/// Error body shape for 4xx/5xx responses.
#[derive(Deserialize)]
struct ErrorBody {
    #[serde(default)]
    error: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct QueryClient {
    base_url: String,
}

impl QueryClient {
    pub fn new(config: &ApiConfig) -> Self {
        QueryClient {
            base_url: config.base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Fetches the raw schema text. Idempotent; callers may re-send it on
    /// demand (the sidebar's reload), nothing retries automatically.
    pub async fn fetch_schema(&self) -> Result<String, String> {
        let response = Request::get(&format!("{}/schema/", self.base_url))
            .send()
            .await;
        match response {
            Ok(response) if response.ok() => response
                .json::<SchemaResponse>()
                .await
                .map(|body| body.schema)
                .map_err(|_| FETCH_FAILED.to_string()),
            Ok(response) => Err(error_message(response).await),
            Err(_) => Err(FETCH_FAILED.to_string()),
        }
    }

    /// Sends one question. The request type's constructor already refused
    /// empty questions, so everything arriving here goes on the wire.
    pub async fn ask(&self, request: &AskRequest) -> Result<AskResult, String> {
        let response = Request::post(&format!("{}/ask/", self.base_url))
            .json(request)
            .map_err(|_| FETCH_FAILED.to_string())?
            .send()
            .await;
        match response {
            Ok(response) if response.ok() => response
                .json::<AskResult>()
                .await
                .map_err(|_| FETCH_FAILED.to_string()),
            Ok(response) => Err(error_message(response).await),
            Err(_) => Err(FETCH_FAILED.to_string()),
        }
    }

    /// Triggers the gold-set comparison run. May take a while; the caller
    /// keeps its slot pending until the response lands.
    pub async fn run_evaluation(&self) -> Result<EvaluationResult, String> {
        let response = Request::get(&format!("{}/evaluate/", self.base_url))
            .send()
            .await;
        match response {
            Ok(response) if response.ok() => response
                .json::<EvaluationResult>()
                .await
                .map_err(|_| FETCH_FAILED.to_string()),
            Ok(response) => Err(error_message(response).await),
            Err(_) => Err(FETCH_FAILED.to_string()),
        }
    }
}

/// Extracts the backend's `error` field from a failed response, falling back
/// to the generic message when the body is not the expected shape.
async fn error_message(response: Response) -> String {
    match response.json::<ErrorBody>().await {
        Ok(body) if !body.error.is_empty() => body.error,
        _ => FETCH_FAILED.to_string(),
    }
}
