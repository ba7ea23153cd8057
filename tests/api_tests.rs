
use std::collections::HashSet;

use reqwest::StatusCode;
use serde_json::{json, Value};
use test_utils::*;

#[actix_rt::test]
async fn home_reports_seeded_counts() {
    let app = TestApp::spawn().await;

    let body = app.get_json("/").await;

    assert_eq!(body["status"], "Ok");
    assert_eq!(body["projects"], 8);
    assert_eq!(body["experiences"], 4);
}

#[actix_rt::test]
async fn health_check_returns_200() {
    let app = TestApp::spawn().await;

    let response = app.get("/health").await;

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["records"]["projects"], 8);
}

#[actix_rt::test]
async fn health_reports_counts_of_its_own_store() {
    let seeded = TestApp::spawn().await;
    let seeded_health = seeded.get_json("/health").await;

    let mut config = test_config();
    config.seed_demo_data = false;
    let empty = TestApp::spawn_with(config).await;
    let empty_health = empty.get_json("/health").await;

    assert_eq!(seeded_health["records"]["projects"], 8);
    assert_eq!(empty_health["records"]["projects"], 0);
    assert_eq!(empty_health["records"]["experiences"], 0);
}

#[actix_rt::test]
async fn health_counts_are_not_stale_within_cache_window() {
    let app = TestApp::spawn().await;
    let before = app.get_json("/health").await;

    let created = app.submit_contact(&json!(valid_contact())).await;
    assert_eq!(created.status(), StatusCode::CREATED);

    let after = app.get_json("/health").await;
    assert_eq!(before["records"]["contact_submissions"], 0);
    assert_eq!(after["records"]["contact_submissions"], 1);
}

#[actix_rt::test]
async fn experiences_endpoint_lists_seeded_timeline() {
    let app = TestApp::spawn().await;

    let body = app.get_json("/api/experiences").await;
    let experiences = body.as_array().expect("expected a JSON array");

    assert_eq!(experiences.len(), 4);
    assert_eq!(experiences[0]["title"], "Senior AI Engineer");
    assert_eq!(experiences[0]["startDate"], "2022");
    assert!(experiences[0]["endDate"].is_null());
    assert_eq!(experiences[0]["type"], "work");
    assert_eq!(experiences[3]["type"], "education");
}

#[actix_rt::test]
async fn experiences_can_be_filtered_by_type() {
    let app = TestApp::spawn().await;

    let work = app.get_json("/api/experiences/type/work").await;
    let education = app.get_json("/api/experiences/type/education").await;
    let unknown = app.get_json("/api/experiences/type/hobby").await;

    assert_eq!(work.as_array().unwrap().len(), 3);
    assert_eq!(education.as_array().unwrap().len(), 1);
    assert!(unknown.as_array().unwrap().is_empty());
}

#[actix_rt::test]
async fn category_endpoint_returns_only_matching_projects() {
    let app = TestApp::spawn().await;

    let ai = app.get_json("/api/projects/category/ai").await;
    let web = app.get_json("/api/projects/category/web").await;

    let ai = ai.as_array().unwrap();
    let web = web.as_array().unwrap();
    assert_eq!(ai.len(), 5);
    assert_eq!(web.len(), 3);
    assert!(ai.iter().all(|p| p["category"] == "ai"));
    assert!(web.iter().all(|p| p["category"] == "web"));
}

#[actix_rt::test]
async fn category_union_matches_full_project_list() {
    let app = TestApp::spawn().await;

    let all = app.get_json("/api/projects").await;
    let ai = app.get_json("/api/projects/category/ai").await;
    let web = app.get_json("/api/projects/category/web").await;

    let ids = |v: &Value| -> HashSet<String> {
        v.as_array()
            .unwrap()
            .iter()
            .map(|p| p["id"].as_str().unwrap().to_string())
            .collect()
    };

    let union: HashSet<String> = ids(&ai).union(&ids(&web)).cloned().collect();
    assert_eq!(union, ids(&all));
}

#[actix_rt::test]
async fn unknown_category_returns_empty_list() {
    let app = TestApp::spawn().await;

    let response = app.get("/api/projects/category/mobile").await;

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body, json!([]));
}

#[actix_rt::test]
async fn featured_endpoint_returns_featured_projects() {
    let app = TestApp::spawn().await;

    let featured = app.get_json("/api/projects/featured").await;
    let featured = featured.as_array().unwrap();

    assert_eq!(featured.len(), 5);
    assert!(featured.iter().all(|p| p["featured"] == true));
}

#[actix_rt::test]
async fn project_lookup_by_id() {
    let app = TestApp::spawn().await;
    let all = app.get_json("/api/projects").await;
    let first = &all.as_array().unwrap()[0];
    let id = first["id"].as_str().unwrap();

    let found = app.get_json(&format!("/api/projects/{}", id)).await;
    assert_eq!(found["title"], first["title"]);
    assert_eq!(found["githubUrl"], first["githubUrl"]);

    let missing = app.get(&format!("/api/projects/{}", uuid::Uuid::new_v4())).await;
    assert_eq!(missing.status(), StatusCode::NOT_FOUND);

    let malformed = app.get("/api/projects/not-a-uuid").await;
    assert_eq!(malformed.status(), StatusCode::BAD_REQUEST);
}

#[actix_rt::test]
async fn trailing_slash_is_normalized() {
    let app = TestApp::spawn().await;

    let response = app.get("/api/experiences/").await;

    assert_eq!(response.status(), StatusCode::OK);
}

#[actix_rt::test]
async fn contact_submission_returns_stored_record() {
    let app = TestApp::spawn().await;
    let before = chrono::Utc::now();

    let response = app.submit_contact(&json!(valid_contact())).await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["name"], "A");
    assert_eq!(body["email"], "a@b.com");
    assert_eq!(body["subject"], "S");
    assert_eq!(body["message"], "M");
    assert!(uuid::Uuid::parse_str(body["id"].as_str().unwrap()).is_ok());

    let created_at: chrono::DateTime<chrono::Utc> =
        body["createdAt"].as_str().unwrap().parse().unwrap();
    assert!(created_at >= before);

    assert_eq!(app.state.store.contact_submissions.len(), 1);
}

#[actix_rt::test]
async fn contact_submission_without_email_is_rejected() {
    let app = TestApp::spawn().await;
    let before = app.state.store.contact_submissions.len();

    let response = app
        .submit_contact(&json!({"name": "A", "subject": "S", "message": "M"}))
        .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = response.json().await.unwrap();
    assert!(body["error"].as_str().unwrap().contains("email"));
    assert_eq!(app.state.store.contact_submissions.len(), before);
}

#[actix_rt::test]
async fn contact_submission_with_invalid_fields_reports_details() {
    let app = TestApp::spawn().await;

    let response = app
        .submit_contact(&json!({"name": "", "email": "nope", "subject": "S", "message": "M"}))
        .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["error"], "Validation failed");

    let fields: Vec<&str> = body["details"]
        .as_array()
        .unwrap()
        .iter()
        .map(|d| d["field"].as_str().unwrap())
        .collect();
    assert_eq!(fields, vec!["email", "name"]);
    assert!(app.state.store.contact_submissions.is_empty());
}

#[actix_rt::test]
async fn whitespace_only_contact_fields_are_rejected() {
    let app = TestApp::spawn().await;

    let response = app
        .submit_contact(&json!({"name": "   ", "email": "a@b.com", "subject": "\t", "message": "M"}))
        .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = response.json().await.unwrap();
    let fields: Vec<&str> = body["details"]
        .as_array()
        .unwrap()
        .iter()
        .map(|d| d["field"].as_str().unwrap())
        .collect();
    assert_eq!(fields, vec!["name", "subject"]);
    assert!(app.state.store.contact_submissions.is_empty());
}

#[actix_rt::test]
async fn malformed_json_is_a_client_error() {
    let app = TestApp::spawn().await;

    let response = app
        .client
        .post(app.url("/api/contact"))
        .header("content-type", "application/json")
        .body("{\"name\": ")
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(app.state.store.contact_submissions.is_empty());
}

#[actix_rt::test]
async fn contact_submissions_are_rate_limited_per_email() {
    let mut config = test_config();
    config.contact_limit_per_hour = 2;
    let app = TestApp::spawn_with(config).await;

    let first = app.submit_contact(&json!(valid_contact())).await;
    let second = app
        .submit_contact(&json!({"name": "A", "email": "A@B.com", "subject": "S", "message": "M"}))
        .await;
    let third = app.submit_contact(&json!(valid_contact())).await;

    assert_eq!(first.status(), StatusCode::CREATED);
    assert_eq!(second.status(), StatusCode::CREATED);
    assert_eq!(third.status(), StatusCode::TOO_MANY_REQUESTS);
    assert_eq!(app.state.store.contact_submissions.len(), 2);

    let other = app
        .submit_contact(&json!({"name": "C", "email": "c@d.com", "subject": "S", "message": "M"}))
        .await;
    assert_eq!(other.status(), StatusCode::CREATED);
}

#[actix_rt::test]
async fn unseeded_app_starts_empty() {
    let mut config = test_config();
    config.seed_demo_data = false;
    let app = TestApp::spawn_with(config).await;

    let projects = app.get_json("/api/projects").await;
    let experiences = app.get_json("/api/experiences").await;

    assert_eq!(projects, json!([]));
    assert_eq!(experiences, json!([]));
}
