//! End-to-end HTTP tests against a live listener.

mod common;

use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;

use common::fixtures::{GOOD_SYNOPSIS, SAMPLE_ARTICLE, UNRELATED_SYNOPSIS, tfidf_scorer};
use synoscore::constants::SYNOSCORE_STATUS_HEADER;
use synoscore::gateway::{HandlerState, create_router_with_state};
use synoscore::scoring::{ScoringConfig, SynopsisScorer};
use synoscore::segment::RuleSplitter;
use synoscore::similarity::mock::FailingOracle;

const TEST_ACCESS_TOKEN: &str = "sk-synoscore-e2e-token";

struct TestServer {
    addr: SocketAddr,
    shutdown_tx: Option<oneshot::Sender<()>>,
    _server_handle: JoinHandle<()>,
}

impl TestServer {
    fn url(&self) -> String {
        format!("http://{}", self.addr)
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

/// Spawns the gateway on an ephemeral port around the given engine.
async fn spawn_test_server(scorer: SynopsisScorer, access_token: Option<String>) -> TestServer {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind test listener");
    let addr = listener.local_addr().expect("listener address");

    let state = HandlerState::new(
        Arc::new(scorer),
        Arc::new(RuleSplitter::new()),
        access_token,
    );
    let app = create_router_with_state(state);

    let (shutdown_tx, shutdown_rx) = oneshot::channel();
    let server_handle = tokio::spawn(async move {
        axum::serve(listener, app)
            .with_graceful_shutdown(async {
                let _ = shutdown_rx.await;
            })
            .await
            .unwrap();
    });

    TestServer {
        addr,
        shutdown_tx: Some(shutdown_tx),
        _server_handle: server_handle,
    }
}

fn failing_scorer() -> SynopsisScorer {
    SynopsisScorer::new(
        Arc::new(FailingOracle::default()),
        Arc::new(RuleSplitter::new()),
        ScoringConfig::default(),
    )
    .expect("scoring config is valid")
}

fn score_body(article: &str, synopsis: &str) -> serde_json::Value {
    serde_json::json!({ "article": article, "synopsis": synopsis })
}

fn status_header(response: &reqwest::Response) -> Option<String> {
    response
        .headers()
        .get(SYNOSCORE_STATUS_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(str::to_string)
}

#[tokio::test]
async fn test_health_endpoint_over_http() {
    let server = spawn_test_server(tfidf_scorer(ScoringConfig::default()), None).await;
    let client = reqwest::Client::new();

    let response = client
        .get(format!("{}/healthz", server.url()))
        .send()
        .await
        .expect("health request succeeds");

    assert_eq!(response.status(), reqwest::StatusCode::OK);
    assert_eq!(status_header(&response).as_deref(), Some("healthy"));

    let body: serde_json::Value = response.json().await.expect("health body is json");
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn test_ready_endpoint_reports_oracle_mode() {
    let server = spawn_test_server(tfidf_scorer(ScoringConfig::default()), None).await;
    let client = reqwest::Client::new();

    let response = client
        .get(format!("{}/ready", server.url()))
        .send()
        .await
        .expect("ready request succeeds");

    assert_eq!(response.status(), reqwest::StatusCode::OK);

    let body: serde_json::Value = response.json().await.expect("ready body is json");
    assert_eq!(body["status"], "ok");
    assert_eq!(body["components"]["oracle"], "ready");
    assert_eq!(body["components"]["oracle_mode"], "tfidf");
}

#[tokio::test]
async fn test_score_endpoint_over_http() {
    let server = spawn_test_server(tfidf_scorer(ScoringConfig::default()), None).await;
    let client = reqwest::Client::new();

    let response = client
        .post(format!("{}/v1/score", server.url()))
        .json(&score_body(SAMPLE_ARTICLE, GOOD_SYNOPSIS))
        .send()
        .await
        .expect("score request succeeds");

    assert_eq!(response.status(), reqwest::StatusCode::OK);
    assert_eq!(status_header(&response).as_deref(), Some("scored"));

    let body: serde_json::Value = response.json().await.expect("score body is json");
    let final_score = body["final_score"].as_f64().expect("final_score present");
    assert!((0.0..=100.0).contains(&final_score));
    assert_eq!(body["oracle"], "tfidf");
    assert!(!body["evaluation_id"].as_str().unwrap().is_empty());
}

#[tokio::test]
async fn test_unrelated_synopsis_scores_lower_over_http() {
    let server = spawn_test_server(tfidf_scorer(ScoringConfig::default()), None).await;
    let client = reqwest::Client::new();

    let related: serde_json::Value = client
        .post(format!("{}/v1/score", server.url()))
        .json(&score_body(SAMPLE_ARTICLE, GOOD_SYNOPSIS))
        .send()
        .await
        .expect("related request succeeds")
        .json()
        .await
        .expect("related body is json");

    let unrelated: serde_json::Value = client
        .post(format!("{}/v1/score", server.url()))
        .json(&score_body(SAMPLE_ARTICLE, UNRELATED_SYNOPSIS))
        .send()
        .await
        .expect("unrelated request succeeds")
        .json()
        .await
        .expect("unrelated body is json");

    assert!(
        related["final_score"].as_f64().unwrap() > unrelated["final_score"].as_f64().unwrap()
    );
}

#[tokio::test]
async fn test_score_endpoint_enforces_bearer_token() {
    let server = spawn_test_server(
        tfidf_scorer(ScoringConfig::default()),
        Some(TEST_ACCESS_TOKEN.to_string()),
    )
    .await;
    let client = reqwest::Client::new();
    let url = format!("{}/v1/score", server.url());

    let missing = client
        .post(&url)
        .json(&score_body(SAMPLE_ARTICLE, GOOD_SYNOPSIS))
        .send()
        .await
        .expect("unauthenticated request completes");
    assert_eq!(missing.status(), reqwest::StatusCode::UNAUTHORIZED);

    let wrong = client
        .post(&url)
        .bearer_auth("sk-wrong-token")
        .json(&score_body(SAMPLE_ARTICLE, GOOD_SYNOPSIS))
        .send()
        .await
        .expect("wrongly authenticated request completes");
    assert_eq!(wrong.status(), reqwest::StatusCode::UNAUTHORIZED);

    let authorized = client
        .post(&url)
        .bearer_auth(TEST_ACCESS_TOKEN)
        .json(&score_body(SAMPLE_ARTICLE, GOOD_SYNOPSIS))
        .send()
        .await
        .expect("authenticated request completes");
    assert_eq!(authorized.status(), reqwest::StatusCode::OK);
}

#[tokio::test]
async fn test_blank_synopsis_rejected_over_http() {
    let server = spawn_test_server(tfidf_scorer(ScoringConfig::default()), None).await;
    let client = reqwest::Client::new();

    let response = client
        .post(format!("{}/v1/score", server.url()))
        .json(&score_body(SAMPLE_ARTICLE, "   "))
        .send()
        .await
        .expect("request completes");

    assert_eq!(response.status(), reqwest::StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(status_header(&response).as_deref(), Some("invalid_input"));

    let body: serde_json::Value = response.json().await.expect("error body is json");
    assert_eq!(body["code"], 422);
}

#[tokio::test]
async fn test_oracle_failure_surfaces_as_server_error() {
    let server = spawn_test_server(failing_scorer(), None).await;
    let client = reqwest::Client::new();

    let response = client
        .post(format!("{}/v1/score", server.url()))
        .json(&score_body(SAMPLE_ARTICLE, GOOD_SYNOPSIS))
        .send()
        .await
        .expect("request completes");

    assert_eq!(
        response.status(),
        reqwest::StatusCode::INTERNAL_SERVER_ERROR
    );
    assert_eq!(status_header(&response).as_deref(), Some("oracle_error"));
}
