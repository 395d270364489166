#![allow(dead_code)]

use std::time::Duration;

use planshot_domain::{ImageFormat, ImageUpload};
use planshot_infra::HttpClient;
use wiremock::{Request, ResponseTemplate};

pub const GENERATE_PATH: &str = "/v1beta/models/gemini-flash-latest:generateContent";
pub const INSERT_PATH: &str = "/calendars/primary/events";

/// HTTP client with a short timeout for tests.
pub fn test_http_client() -> HttpClient {
    HttpClient::builder().timeout(Duration::from_secs(5)).without_proxy().build().expect("http client")
}

/// JPEG-tagged upload; the mock servers never decode it.
pub fn plan_image() -> ImageUpload {
    ImageUpload::new("plan.jpg", ImageFormat::Jpeg, vec![0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x10])
        .expect("image")
}

/// `generateContent` success body whose only candidate says `text`.
pub fn gemini_reply(text: &str) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(serde_json::json!({
        "candidates": [{
            "content": { "role": "model", "parts": [{ "text": text }] },
            "finishReason": "STOP",
            "index": 0
        }],
        "modelVersion": "gemini-flash-latest"
    }))
}

/// Calendar insert response echoing the summary into the event id.
pub fn created_event(request: &Request) -> ResponseTemplate {
    let body: serde_json::Value = serde_json::from_slice(&request.body).unwrap_or_default();
    let summary = body["summary"].as_str().unwrap_or("event").to_lowercase().replace(' ', "-");
    ResponseTemplate::new(200).set_body_json(serde_json::json!({
        "kind": "calendar#event",
        "id": format!("evt-{summary}"),
        "htmlLink": format!("https://www.google.com/calendar/event?eid={summary}")
    }))
}

/// Summaries of every calendar insert the server received, in order.
pub fn inserted_summaries(requests: &[Request]) -> Vec<String> {
    requests
        .iter()
        .filter(|r| r.url.path().ends_with("/events"))
        .map(|r| {
            let body: serde_json::Value = serde_json::from_slice(&r.body).expect("json body");
            body["summary"].as_str().unwrap_or_default().to_string()
        })
        .collect()
}
