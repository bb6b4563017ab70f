use std::sync::Arc;
use serde_json::{json, Value};
use tracked_changes::structs::config::tracking_config::TrackingConfig;
use tracked_changes::ui::review_server::routes;
use tracked_changes::ui::session_manager::SessionManager;
use warp::http::StatusCode;

fn manager() -> Arc<SessionManager> {
    Arc::new(SessionManager::new(TrackingConfig::for_user(Some("u-9"), "Reviewer").enabled(true)))
}

fn body(response: &warp::http::Response<warp::hyper::body::Bytes>) -> Value {
    serde_json::from_slice(response.body()).unwrap()
}

async fn create<F>(api: &F, text: &str) -> String
where
    F: warp::Filter + 'static,
    F::Extract: warp::Reply + Send,
{
    let response = warp::test::request()
        .method("POST")
        .path("/api/manuscripts")
        .json(&json!({ "document": text }))
        .reply(api)
        .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body(&response)["data"]["id"].as_str().unwrap().to_string()
}

#[tokio::test]
async fn full_review_round_trip() {
    let api = routes(manager());
    let id = create(&api, "the cat sat").await;

    let response = warp::test::request()
        .method("POST")
        .path(&format!("/api/manuscripts/{}/transactions", id))
        .json(&json!({ "steps": [{ "type": "replace", "from": 4, "to": 7, "text": "dog" }], "base_version": 0 }))
        .reply(&api)
        .await;
    assert_eq!(response.status(), StatusCode::OK);
    let created = body(&response);
    let change_id = created["data"][0]["id"].as_str().unwrap().to_string();
    assert_eq!(created["data"][0]["kind"], "replace");
    assert_eq!(created["data"][0]["author_name"], "Reviewer");

    let response = warp::test::request()
        .path(&format!("/api/manuscripts/{}/changes", id))
        .reply(&api)
        .await;
    assert_eq!(body(&response)["data"].as_array().unwrap().len(), 1);

    let response = warp::test::request()
        .method("PUT")
        .path(&format!("/api/manuscripts/{}/changes/{}", id, change_id))
        .json(&json!({ "status": "REJECTED" }))
        .reply(&api)
        .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body(&response)["data"], true);

    let response = warp::test::request()
        .path(&format!("/api/manuscripts/{}", id))
        .reply(&api)
        .await;
    let snapshot = body(&response);
    assert_eq!(snapshot["data"]["text"], "the cat sat");
    assert!(snapshot["data"]["pending"].as_array().unwrap().is_empty());

    let response = warp::test::request()
        .path(&format!("/api/manuscripts/{}/events", id))
        .reply(&api)
        .await;
    let events: Vec<String> = body(&response)["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|event| event["event"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(events, vec!["change_created", "change_rejected"]);
}

#[tokio::test]
async fn pending_status_is_an_invalid_transition() {
    let api = routes(manager());
    let id = create(&api, "abc").await;

    let response = warp::test::request()
        .method("POST")
        .path(&format!("/api/manuscripts/{}/transactions", id))
        .json(&json!({ "steps": [{ "type": "replace", "from": 3, "to": 3, "text": "d" }] }))
        .reply(&api)
        .await;
    let change_id = body(&response)["data"][0]["id"].as_str().unwrap().to_string();

    let response = warp::test::request()
        .method("PUT")
        .path(&format!("/api/manuscripts/{}/changes/{}", id, change_id))
        .json(&json!({ "status": "PENDING" }))
        .reply(&api)
        .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body(&response)["success"], false);
}

#[tokio::test]
async fn tracking_toggle_and_bulk_accept() {
    let api = routes(manager());
    let id = create(&api, "abc").await;

    for text in ["x", "y"] {
        warp::test::request()
            .method("POST")
            .path(&format!("/api/manuscripts/{}/transactions", id))
            .json(&json!({ "steps": [{ "type": "replace", "from": 0, "to": 0, "text": text }] }))
            .reply(&api)
            .await;
    }

    let response = warp::test::request()
        .method("POST")
        .path(&format!("/api/manuscripts/{}/tracking", id))
        .json(&json!({}))
        .reply(&api)
        .await;
    assert_eq!(body(&response)["data"], false);

    let response = warp::test::request()
        .method("POST")
        .path(&format!("/api/manuscripts/{}/activate", id))
        .json(&json!({ "position": 0 }))
        .reply(&api)
        .await;
    assert_eq!(body(&response)["data"]["content"], "y");

    let response = warp::test::request()
        .method("POST")
        .path(&format!("/api/manuscripts/{}/changes/accept-all", id))
        .reply(&api)
        .await;
    assert_eq!(body(&response)["data"], 2);

    let response = warp::test::request()
        .method("POST")
        .path(&format!("/api/manuscripts/{}/changes/reject-all", id))
        .reply(&api)
        .await;
    assert_eq!(body(&response)["data"], 0);

    let response = warp::test::request()
        .path(&format!("/api/manuscripts/{}", id))
        .reply(&api)
        .await;
    assert_eq!(body(&response)["data"]["text"], "yxabc");
    assert_eq!(body(&response)["data"]["tracking"], false);
}

#[tokio::test]
async fn errors_map_to_statuses() {
    let api = routes(manager());

    let response = warp::test::request().path("/api/manuscripts/nope").reply(&api).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let id = create(&api, "abc").await;
    let response = warp::test::request()
        .method("POST")
        .path(&format!("/api/manuscripts/{}/transactions", id))
        .json(&json!({ "steps": [{ "type": "replace", "from": 2, "to": 9, "text": "" }] }))
        .reply(&api)
        .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = warp::test::request()
        .method("POST")
        .path(&format!("/api/manuscripts/{}/transactions", id))
        .json(&json!({ "steps": [], "base_version": 4 }))
        .reply(&api)
        .await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn events_drain_and_closed_sessions_are_gone() {
    let manager = manager();
    let api = routes(Arc::clone(&manager));
    let id = create(&api, "abc").await;

    for _ in 0..50 {
        warp::test::request()
            .method("POST")
            .path(&format!("/api/manuscripts/{}/transactions", id))
            .json(&json!({ "steps": [{ "type": "replace", "from": 0, "to": 0, "text": "x" }] }))
            .reply(&api)
            .await;

        let response = warp::test::request()
            .path(&format!("/api/manuscripts/{}/events", id))
            .reply(&api)
            .await;
        assert_eq!(body(&response)["data"].as_array().unwrap().len(), 1);
    }

    let response = warp::test::request()
        .path(&format!("/api/manuscripts/{}/events", id))
        .reply(&api)
        .await;
    assert!(body(&response)["data"].as_array().unwrap().is_empty());

    let response = warp::test::request()
        .method("DELETE")
        .path(&format!("/api/manuscripts/{}", id))
        .reply(&api)
        .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body(&response)["data"]["pending"].as_array().unwrap().len(), 50);
    assert_eq!(manager.session_count(), 0);

    let response = warp::test::request()
        .method("DELETE")
        .path(&format!("/api/manuscripts/{}", id))
        .reply(&api)
        .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = warp::test::request().path(&format!("/api/manuscripts/{}", id)).reply(&api).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
