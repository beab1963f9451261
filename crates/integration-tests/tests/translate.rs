mod harness;

use harness::config::ConfigBuilder;
use harness::server::TestServer;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn completion(text: &str) -> serde_json::Value {
    serde_json::json!({
        "choices": [ { "message": { "role": "assistant", "content": text } } ]
    })
}

#[tokio::test]
async fn translate_returns_persona_rewrite() {
    let generation = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion(
            "She absolutely stuck that back handspring series, cleanest in the rotation!",
        )))
        .expect(1)
        .mount(&generation)
        .await;

    let server = TestServer::start(ConfigBuilder::new().with_generation(&generation.uri()).build())
        .await
        .unwrap();

    let resp = server
        .client()
        .post(server.url("/translate"))
        .json(&serde_json::json!({
            "transcription": "she did the flippy thing twice and landed it",
            "sport": "gymnastics"
        }))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), 200);
    let body: serde_json::Value = resp.json().await.unwrap();
    assert!(body["translation"].as_str().unwrap().contains("back handspring"));

    // The provider call carries the sport persona and the raw recap
    let requests = generation.received_requests().await.unwrap();
    let request: serde_json::Value = serde_json::from_slice(&requests[0].body).unwrap();
    let system = request["messages"][0]["content"].as_str().unwrap();
    let user = request["messages"][1]["content"].as_str().unwrap();
    assert!(system.contains("gymnastics"));
    assert!(user.contains("flippy thing"));
}

#[tokio::test]
async fn empty_transcription_is_rejected_without_provider_call() {
    let generation = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion("unused")))
        .expect(0)
        .mount(&generation)
        .await;

    let server = TestServer::start(ConfigBuilder::new().with_generation(&generation.uri()).build())
        .await
        .unwrap();

    let resp = server
        .client()
        .post(server.url("/translate"))
        .json(&serde_json::json!({ "transcription": "   ", "sport": "soccer" }))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), 400);
}
