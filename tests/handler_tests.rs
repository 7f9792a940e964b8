use base64::{Engine as _, engine::general_purpose};
use briefly::api::handle_request;
use briefly::core::config::AppConfig;
use briefly::text::split_sentences;
use serde_json::{Value, json};

const NEGATIVE_NEWS: &str = "Factory output collapsed in March as the energy crisis deepened. \
    Thousands of workers face layoff notices after three plants announced closures. \
    The union warned of protest action if the government fails to respond. \
    Economists fear the slump could push the region into recession by summer. \
    Export orders fell to their lowest level in a decade. \
    Ministers are expected to meet business leaders on Friday.";

fn post(body: &str) -> Value {
    json!({
        "requestContext": { "http": { "method": "POST" } },
        "headers": { "content-type": "application/json" },
        "body": body,
        "isBase64Encoded": false
    })
}

fn body_of(response: &Value) -> Value {
    serde_json::from_str(response["body"].as_str().expect("string body")).expect("json body")
}

#[test]
fn test_short_positive_article() {
    let request = json!({
        "title": "Company reports record growth and strong earnings",
        "description": "Analysts praised the outstanding results amid a challenging market."
    });
    let response = handle_request(&AppConfig::default(), &post(&request.to_string()));

    assert_eq!(response["statusCode"], 200);
    assert_eq!(response["headers"]["Access-Control-Allow-Origin"], "*");

    let body = body_of(&response);
    assert_eq!(body["sentiment"], "positive");
    assert!(body["score"].as_f64().expect("numeric score") > 0.15);
    assert_eq!(
        body["summary"],
        "Company reports record growth and strong earnings. \
         Analysts praised the outstanding results amid a challenging market."
    );
}

#[test]
fn test_long_negative_article() {
    let request = json!({
        "title": "Regional economy reels",
        "description": NEGATIVE_NEWS
    });
    let response = handle_request(&AppConfig::default(), &post(&request.to_string()));
    assert_eq!(response["statusCode"], 200);

    let body = body_of(&response);
    assert_eq!(body["sentiment"], "negative");

    let summary = body["summary"].as_str().expect("summary string");
    let source = split_sentences(&format!("Regional economy reels. {NEGATIVE_NEWS}"));
    assert_eq!(source.len(), 7);
    let picked = split_sentences(summary);
    assert!((2..=3).contains(&picked.len()));

    let positions: Vec<usize> = picked
        .iter()
        .map(|p| source.iter().position(|s| s == p).expect("sentence from source"))
        .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]));
    assert!(body["read_time_sec"].as_u64().expect("read time") >= 15);
}

#[test]
fn test_title_only_article() {
    let response = handle_request(
        &AppConfig::default(),
        &post(r#"{"title": "Stocks surge to record high"}"#),
    );
    let body = body_of(&response);
    assert_eq!(body["summary"], "Stocks surge to record high");
    assert_eq!(body["sentiment"], "positive");
}

#[test]
fn test_base64_encoded_body() {
    let raw = r#"{"title": "Flood damage worsens", "description": ""}"#;
    let event = json!({
        "httpMethod": "POST",
        "body": general_purpose::STANDARD.encode(raw),
        "isBase64Encoded": true
    });
    let body = body_of(&handle_request(&AppConfig::default(), &event));
    assert_eq!(body["summary"], "Flood damage worsens");
    assert_eq!(body["sentiment"], "negative");
}

#[test]
fn test_invalid_json_returns_fallback() {
    let response = handle_request(&AppConfig::default(), &post("{oops"));
    assert_eq!(response["statusCode"], 500);

    let body = body_of(&response);
    assert_eq!(body["summary"], "Summary unavailable.");
    assert_eq!(body["sentiment"], "neutral");
    assert_eq!(body["score"], 0.0);
    assert!(body["error"].as_str().is_some_and(|e| !e.is_empty()));
}

#[test]
fn test_missing_body_returns_fallback() {
    let event = json!({ "httpMethod": "POST" });
    let response = handle_request(&AppConfig::default(), &event);
    assert_eq!(response["statusCode"], 500);
    assert_eq!(body_of(&response)["summary"], "Summary unavailable.");
}

#[test]
fn test_preflight() {
    let config = AppConfig {
        cors_allow_origin: "https://briefly.example".to_string(),
        ..AppConfig::default()
    };
    let event = json!({ "requestContext": { "http": { "method": "OPTIONS" } } });
    let response = handle_request(&config, &event);

    assert_eq!(response["statusCode"], 200);
    let headers = &response["headers"];
    assert_eq!(headers["Access-Control-Allow-Origin"], "https://briefly.example");
    assert!(
        headers["Access-Control-Allow-Methods"]
            .as_str()
            .is_some_and(|m| m.contains("POST"))
    );
    assert_eq!(headers["Access-Control-Allow-Headers"], "Content-Type");
}
