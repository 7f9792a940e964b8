//! API Lambda handler - thin router in front of the analysis pipeline.
//!
//! This module handles:
//! - CORS preflight (`OPTIONS`)
//! - Article analysis (`POST` with a JSON `{ title, description }` body)
//! - Converting any request failure into the neutral fallback response

use super::{helpers, parsing};
use crate::core::analysis::analyze;
use crate::core::config::AppConfig;
use crate::core::models::{AnalysisFailure, AnalysisResponse};
use crate::errors::BrieflyError;
use lambda_runtime::{Error, LambdaEvent};
use serde_json::Value;
use tracing::{error, info, warn};
use uuid::Uuid;

pub use self::function_handler as handler;

/// Lambda handler for the API entrypoint.
///
/// # Errors
///
/// Fails only when the configuration can't be loaded; request problems are
/// reported in the response body instead.
#[tracing::instrument(level = "info", skip(event))]
pub async fn function_handler(event: LambdaEvent<Value>) -> Result<Value, Error> {
    let config = AppConfig::from_env().map_err(|e| {
        error!("Config error: {}", e);
        Error::from(BrieflyError::ConfigError(e))
    })?;

    Ok(handle_request(&config, &event.payload))
}

/// Route one proxy event and build its response.
#[must_use]
pub fn handle_request(config: &AppConfig, payload: &Value) -> Value {
    let correlation_id = Uuid::new_v4().to_string();
    let method = parsing::get_method(payload).unwrap_or_default();
    info!(correlation_id = %correlation_id, method = %method, "API Lambda received request");

    match method.as_str() {
        "OPTIONS" => helpers::preflight(&config.cors_allow_origin),
        "POST" => {
            let response = handle_analyze(config, payload, &correlation_id);
            helpers::analysis_response(&response, &config.cors_allow_origin)
        }
        other => {
            warn!(correlation_id = %correlation_id, method = %other, "Unsupported method");
            helpers::err_response(405, "Method not allowed")
        }
    }
}

fn handle_analyze(config: &AppConfig, payload: &Value, correlation_id: &str) -> AnalysisResponse {
    if let Some(content_type) = payload
        .get("headers")
        .and_then(|h| parsing::get_header_value(h, "Content-Type"))
        && !content_type.contains("json")
    {
        warn!(correlation_id = %correlation_id, content_type = %content_type, "Unexpected content type");
    }

    let body = match parsing::extract_body(payload) {
        Ok(b) => b,
        Err(e) => {
            error!(correlation_id = %correlation_id, "Request body error: {}", e);
            return AnalysisResponse::Failure(AnalysisFailure::new(e.to_string(), None));
        }
    };

    #[cfg(feature = "debug-logs")]
    info!(correlation_id = %correlation_id, body = %body, "Request body");
    #[cfg(not(feature = "debug-logs"))]
    info!(
        correlation_id = %correlation_id,
        body_bytes = body.len(),
        "Request body: [... content masked, enable debug-logs feature to view ...]"
    );

    match parsing::parse_article(&body) {
        Ok(article) => AnalysisResponse::Success(analyze(&article, config)),
        Err(e) => {
            error!(correlation_id = %correlation_id, "Failed to parse article: {}", e);
            let title = parsing::peek_title(&body);
            AnalysisResponse::Failure(AnalysisFailure::new(e.to_string(), title.as_deref()))
        }
    }
}
