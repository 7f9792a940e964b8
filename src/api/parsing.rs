use base64::{Engine as _, engine::general_purpose};
use serde_json::Value;

use crate::core::models::ArticleInput;
use crate::errors::BrieflyError;

pub fn v_path<'a>(root: &'a Value, path: &[&str]) -> Option<&'a Value> {
    let mut cur = root;
    for key in path {
        cur = cur.get(*key)?;
    }
    Some(cur)
}

pub fn v_str<'a>(root: &'a Value, path: &[&str]) -> Option<&'a str> {
    v_path(root, path).and_then(|v| v.as_str())
}

/// HTTP method of a proxy event, uppercased.
///
/// Reads `requestContext.http.method` (HTTP API and function URLs) and falls
/// back to `httpMethod` (REST API).
pub fn get_method(payload: &Value) -> Option<String> {
    v_str(payload, &["requestContext", "http", "method"])
        .or_else(|| v_str(payload, &["httpMethod"]))
        .map(str::to_ascii_uppercase)
}

pub fn get_header_value<'a>(headers: &'a Value, name: &str) -> Option<&'a str> {
    if let Some(v) = headers.get(name).and_then(|s| s.as_str()) {
        return Some(v);
    }
    headers.as_object().and_then(|map| {
        map.iter().find_map(|(k, v)| {
            if k.eq_ignore_ascii_case(name) {
                v.as_str()
            } else {
                None
            }
        })
    })
}

/// Raw request body, base64-decoded when the event says so.
pub fn extract_body(payload: &Value) -> Result<String, BrieflyError> {
    let body = match payload.get("body") {
        None | Some(Value::Null) => {
            return Err(BrieflyError::ParseError("Missing body".to_string()));
        }
        Some(Value::String(s)) => s,
        Some(_) => {
            return Err(BrieflyError::ParseError(
                "Invalid body format".to_string(),
            ));
        }
    };

    let is_base64 = payload
        .get("isBase64Encoded")
        .and_then(Value::as_bool)
        .unwrap_or(false);

    if is_base64 {
        let bytes = general_purpose::STANDARD.decode(body)?;
        Ok(String::from_utf8(bytes)?)
    } else {
        Ok(body.clone())
    }
}

/// Best-effort title lookup, used to fill in failure responses.
pub fn peek_title(body: &str) -> Option<String> {
    serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|v| v.get("title").and_then(Value::as_str).map(ToString::to_string))
}

/// Parse the JSON body into an article.
pub fn parse_article(body: &str) -> Result<ArticleInput, BrieflyError> {
    let value: Value = serde_json::from_str(body)?;
    if !value.is_object() {
        return Err(BrieflyError::InvalidPayload(
            "expected a JSON object".to_string(),
        ));
    }
    Ok(serde_json::from_value(value)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn reads_method_from_either_event_version() {
        let v2 = json!({ "requestContext": { "http": { "method": "post" } } });
        assert_eq!(get_method(&v2).as_deref(), Some("POST"));

        let v1 = json!({ "httpMethod": "OPTIONS" });
        assert_eq!(get_method(&v1).as_deref(), Some("OPTIONS"));

        assert_eq!(get_method(&json!({})), None);
    }

    #[test]
    fn header_lookup_is_case_insensitive() {
        let headers = json!({ "content-type": "application/json" });
        assert_eq!(
            get_header_value(&headers, "Content-Type"),
            Some("application/json")
        );
        assert_eq!(get_header_value(&headers, "Origin"), None);
    }

    #[test]
    fn decodes_base64_bodies() {
        let payload = json!({
            "body": general_purpose::STANDARD.encode(r#"{"title":"Hi"}"#),
            "isBase64Encoded": true
        });
        assert_eq!(extract_body(&payload).expect("body"), r#"{"title":"Hi"}"#);
    }

    #[test]
    fn rejects_missing_and_bad_bodies() {
        assert!(matches!(
            extract_body(&json!({})),
            Err(BrieflyError::ParseError(_))
        ));
        assert!(matches!(
            extract_body(&json!({ "body": null })),
            Err(BrieflyError::ParseError(_))
        ));
        assert!(matches!(
            extract_body(&json!({ "body": 12 })),
            Err(BrieflyError::ParseError(_))
        ));
        assert!(matches!(
            extract_body(&json!({ "body": "%%%", "isBase64Encoded": true })),
            Err(BrieflyError::ParseError(_))
        ));
    }

    #[test]
    fn parses_articles_with_optional_fields() {
        let a = parse_article(r#"{"title":"T","description":null}"#).expect("article");
        assert_eq!(a.title(), "T");
        assert_eq!(a.description(), "");

        let a = parse_article("{}").expect("article");
        assert_eq!(a, ArticleInput::default());
    }

    #[test]
    fn rejects_malformed_articles() {
        assert!(matches!(
            parse_article("not json"),
            Err(BrieflyError::ParseError(_))
        ));
        assert!(matches!(
            parse_article("[1, 2]"),
            Err(BrieflyError::InvalidPayload(_))
        ));
        assert!(matches!(
            parse_article(r#"{"title": 5}"#),
            Err(BrieflyError::InvalidPayload(_))
        ));
    }

    #[test]
    fn peeks_title_when_present() {
        assert_eq!(peek_title(r#"{"title":"Hello","description":7}"#).as_deref(), Some("Hello"));
        assert_eq!(peek_title("garbage"), None);
    }
}
