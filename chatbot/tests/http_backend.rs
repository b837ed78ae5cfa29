use chatbot_core::{BackendError, ChatbotBackend, ClientConfig, HttpBackend, SelectedFile};
use httpmock::Method::{GET, POST};
use httpmock::MockServer;
use serde_json::json;

fn backend_for(server: &MockServer) -> HttpBackend {
    HttpBackend::new(ClientConfig::new(&server.base_url()).unwrap())
}

fn doc_pdf() -> SelectedFile {
    SelectedFile::new("doc.pdf", b"%PDF-1.4 test".to_vec())
}

#[tokio::test]
async fn upload_sends_multipart_file_field() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/upload")
                .body_contains("name=\"file\"")
                .body_contains("filename=\"doc.pdf\"")
                .body_contains("%PDF-1.4 test");
            then.status(200)
                .json_body(json!({ "message": "File uploaded and vectorized successfully!" }));
        })
        .await;

    let receipt = backend_for(&server).upload(doc_pdf()).await.unwrap();

    mock.assert_async().await;
    assert_eq!(receipt.message, "File uploaded and vectorized successfully!");
}

#[tokio::test]
async fn upload_error_field_becomes_server_error() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/upload");
            then.status(400)
                .json_body(json!({ "error": "PDF contains no readable text." }));
        })
        .await;

    let err = backend_for(&server).upload(doc_pdf()).await.unwrap_err();

    match err {
        BackendError::Server { status, message } => {
            assert_eq!(status, 400);
            assert_eq!(message, "PDF contains no readable text.");
        }
        other => panic!("expected server error, got {:?}", other),
    }
}

#[tokio::test]
async fn ask_posts_question_json() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/ask")
                .json_body(json!({ "question": "What is the total?" }));
            then.status(200).json_body(json!({ "answer": "$42" }));
        })
        .await;

    let answer = backend_for(&server).ask("What is the total?").await.unwrap();

    mock.assert_async().await;
    assert_eq!(answer.text, "$42");
}

#[tokio::test]
async fn error_field_on_success_status_is_still_an_error() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/ask");
            then.status(200).json_body(json!({ "error": "No question provided" }));
        })
        .await;

    let err = backend_for(&server).ask("anything").await.unwrap_err();

    assert_eq!(err.server_detail(), Some("No question provided"));
}

#[tokio::test]
async fn non_json_failure_reports_status() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/ask");
            then.status(502).body("Bad Gateway");
        })
        .await;

    let err = backend_for(&server).ask("anything").await.unwrap_err();

    match err {
        BackendError::Server { status, message } => {
            assert_eq!(status, 502);
            assert!(message.contains("502"), "message was {:?}", message);
        }
        other => panic!("expected server error, got {:?}", other),
    }
}

#[tokio::test]
async fn success_without_answer_is_malformed() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/ask");
            then.status(200).json_body(json!({ "message": "hello" }));
        })
        .await;

    let err = backend_for(&server).ask("anything").await.unwrap_err();

    assert!(matches!(err, BackendError::Malformed(_)));
}

#[tokio::test]
async fn health_returns_banner() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/");
            then.status(200)
                .json_body(json!({ "message": "AI PDF Chatbot backend is live 🚀" }));
        })
        .await;

    let banner = backend_for(&server).health().await.unwrap();

    assert_eq!(banner, "AI PDF Chatbot backend is live 🚀");
}

#[tokio::test]
async fn unreachable_server_is_transport_error() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let origin = format!("http://{}", listener.local_addr().unwrap());
    drop(listener);

    let backend = HttpBackend::new(ClientConfig::new(&origin).unwrap());
    let err = backend.ask("anything").await.unwrap_err();

    assert!(matches!(err, BackendError::Transport(_)));
    assert!(err.server_detail().is_none());
}
