//! Response builders for Lambda proxy integrations.
//!
//! Every builder returns the `{ statusCode, headers, body }` shape that API
//! Gateway and Lambda function URLs expect, with `body` already serialized.

use serde::Serialize;
use serde_json::{Value, json};
use tracing::error;

use crate::core::models::AnalysisResponse;

/// Methods advertised in the preflight response.
pub const ALLOWED_METHODS: &str = "POST, OPTIONS";

/// Request headers advertised in the preflight response.
pub const ALLOWED_HEADERS: &str = "Content-Type";

fn json_body<T: Serialize>(body: &T) -> String {
    serde_json::to_string(body).unwrap_or_else(|e| {
        error!("Failed to serialize response body: {}", e);
        json!({ "error": "Failed to serialize response" }).to_string()
    })
}

/// Returns a 200 response for a CORS preflight request.
#[must_use]
pub fn preflight(allow_origin: &str) -> Value {
    json!({
        "statusCode": 200,
        "headers": {
            "Access-Control-Allow-Origin": allow_origin,
            "Access-Control-Allow-Methods": ALLOWED_METHODS,
            "Access-Control-Allow-Headers": ALLOWED_HEADERS,
        },
        "body": ""
    })
}

/// Returns the response for an analysis result.
///
/// Successes are 200 with the CORS origin header; failures are 500 and carry
/// only the content type.
#[must_use]
pub fn analysis_response(response: &AnalysisResponse, allow_origin: &str) -> Value {
    match response {
        AnalysisResponse::Success(_) => json!({
            "statusCode": 200,
            "headers": {
                "Content-Type": "application/json",
                "Access-Control-Allow-Origin": allow_origin,
            },
            "body": json_body(response)
        }),
        AnalysisResponse::Failure(_) => json!({
            "statusCode": 500,
            "headers": { "Content-Type": "application/json" },
            "body": json_body(response)
        }),
    }
}

/// Returns an error response with the given status code and message.
#[must_use]
pub fn err_response(status_code: u16, message: &str) -> Value {
    json!({
        "statusCode": status_code,
        "headers": { "Content-Type": "application/json" },
        "body": json!({ "error": message }).to_string()
    })
}
