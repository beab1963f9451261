mod harness;

use harness::config::ConfigBuilder;
use harness::server::TestServer;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn upload_returns_transcription() {
    let stt = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/audio/transcriptions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "text": "She hit her tumbling pass clean and placed third on beam"
        })))
        .expect(1)
        .mount(&stt)
        .await;

    let server = TestServer::start(ConfigBuilder::new().with_stt(&stt.uri()).build())
        .await
        .unwrap();

    let form = reqwest::multipart::Form::new().part(
        "file",
        reqwest::multipart::Part::bytes(vec![0u8; 64])
            .file_name("recap.wav")
            .mime_str("audio/wav")
            .unwrap(),
    );

    let resp = server
        .client()
        .post(server.url("/upload"))
        .multipart(form)
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), 200);
    let body: serde_json::Value = resp.json().await.unwrap();
    assert!(body["transcription"].as_str().unwrap().contains("tumbling pass"));
}

#[tokio::test]
async fn upload_without_file_is_rejected() {
    let server = TestServer::start(ConfigBuilder::new().build()).await.unwrap();

    let form = reqwest::multipart::Form::new().text("note", "no file here");

    let resp = server
        .client()
        .post(server.url("/upload"))
        .multipart(form)
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), 400);
    let body: serde_json::Value = resp.json().await.unwrap();
    assert!(body["error"].as_str().unwrap().contains("file"));
}
