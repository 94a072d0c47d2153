//! End-to-end tests driving the router without a socket.

use axum::body::Body;
use axum::http::{header, HeaderMap, Request, StatusCode};
use bl_web::{create_app, AppState};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

async fn send(request: Request<Body>) -> (StatusCode, HeaderMap, String) {
    let app = create_app(AppState::default());
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, headers, String::from_utf8(bytes.to_vec()).unwrap())
}

async fn get(uri: &str) -> (StatusCode, HeaderMap, String) {
    send(Request::builder().uri(uri).body(Body::empty()).unwrap()).await
}

async fn post_form(uri: &str, body: &str) -> (StatusCode, String) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .unwrap();
    let (status, _, body) = send(request).await;
    (status, body)
}

fn location(headers: &HeaderMap) -> &str {
    headers
        .get(header::LOCATION)
        .and_then(|v| v.to_str().ok())
        .unwrap()
}

#[tokio::test]
async fn test_home_lists_featured_articles() {
    let (status, _, body) = get("/").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Featured Articles"));
    assert!(body.contains(r#"action="/search""#));
    assert_eq!(body.matches("View Full Analysis").count(), 4);
}

#[tokio::test]
async fn test_search_redirects_with_encoded_query() {
    let (status, headers, _) = get("/search?q=AI%20%26%20jobs%3F").await;
    assert_eq!(status, StatusCode::SEE_OTHER);
    let target = location(&headers).to_string();
    assert_eq!(target, "/results?q=AI+%26+jobs%3F");

    let (status, _, body) = get(&target).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Viewpoints on: \"AI &amp; jobs?\""));
    assert!(body.contains("US Senate Debates New AI &amp; jobs? Legislation"));
}

#[tokio::test]
async fn test_blank_search_returns_home() {
    let (status, headers, _) = get("/search?q=%20%20").await;
    assert_eq!(status, StatusCode::SEE_OTHER);
    assert_eq!(location(&headers), "/");

    let (_, headers, _) = get("/search").await;
    assert_eq!(location(&headers), "/");
}

#[tokio::test]
async fn test_results_all_filters_keep_everything() {
    let (_, _, body) = get("/results?q=trade&country=all&bias=all&language=all").await;
    assert!(body.contains("Analyzing 6 articles from 6 countries"));
    assert!(!body.contains("No articles found"));
}

#[tokio::test]
async fn test_results_bias_filter() {
    let (_, _, body) = get("/results?q=trade&bias=left").await;
    assert!(body.contains("Analyzing 2 articles from 2 countries"));
    assert_eq!(body.matches("badge bias-left badge-sm").count(), 2);
    assert!(!body.contains("badge bias-right badge-sm"));
    assert!(!body.contains("badge bias-centre badge-sm"));
    assert!(body.contains(r#"<option value="left" selected>Left</option>"#));
}

#[tokio::test]
async fn test_results_empty_state() {
    let (status, _, body) = get("/results?q=trade&country=FR").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Analyzing 0 articles from 0 countries"));
    assert!(body.contains("No articles found"));
}

#[tokio::test]
async fn test_categories_defaults_to_politics() {
    let (status, _, body) = get("/categories").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Politics News"));
    assert!(body.contains("6 articles found"));
    assert!(!body.contains("Active filters:"));
}

#[tokio::test]
async fn test_categories_text_filter() {
    let (_, _, body) = get("/categories?category=health&q=federal").await;
    assert!(body.contains("Health News"));
    assert!(body.contains("2 articles found"));
    assert!(body.contains("Search: &quot;federal&quot;"));
    assert!(body.contains(r#"href="/categories?category=health""#));
}

#[tokio::test]
async fn test_categories_no_match() {
    let (_, _, body) = get("/categories?country=japan").await;
    assert!(body.contains("0 articles found"));
    assert!(body.contains("No articles found"));
}

#[tokio::test]
async fn test_article_detail_pages() {
    let (status, _, body) = get("/article/1").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("By Sarah Martinez"));
    assert!(body.contains("Emotional Sentiment"));

    let (status, _, body) = get("/article/12?q=Housing").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("UK Parliament Reviews Housing Policy Impact"));
}

#[tokio::test]
async fn test_unknown_article_and_route_are_404() {
    let (status, _, body) = get("/article/999").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body.contains("Not Found"));

    let (status, _, _) = get("/nowhere").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_static_pages() {
    let (status, _, body) = get("/about").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Meet Our Team"));

    let (status, _, body) = get("/contact").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Send us a message"));
    assert!(!body.contains("Message sent!"));
}

#[tokio::test]
async fn test_contact_submission_is_acknowledged() {
    let (status, body) = post_form(
        "/contact",
        "name=Ada&email=ada%40example.com&feedback_type=bug&message=Hello+there",
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Message sent!"));
    assert!(body.contains("We&#39;ll get back to you soon."));
    assert!(!body.contains(r#"value="Ada""#));
}

#[tokio::test]
async fn test_contact_submission_requires_fields() {
    let (status, body) = post_form("/contact", "name=&email=nope&message=").await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body.contains("Name is required"));
    assert!(body.contains("Enter a valid email address"));
    assert!(body.contains("Message is required"));
    assert!(body.contains(r#"value="nope""#));
    assert!(!body.contains("Message sent!"));
}

#[tokio::test]
async fn test_api_filters_articles() {
    let (status, _, body) = get("/api/articles?bias=Left").await;
    assert_eq!(status, StatusCode::OK);
    let records: Vec<Value> = serde_json::from_str(&body).unwrap();
    assert_eq!(records.len(), 2);
    assert!(records.iter().all(|r| r["bias"] == "Left"));

    let (_, _, body) = get("/api/articles").await;
    let records: Vec<Value> = serde_json::from_str(&body).unwrap();
    assert_eq!(records.len(), 6);
}

#[tokio::test]
async fn test_api_article_detail() {
    let (status, _, body) = get("/api/articles/1").await;
    assert_eq!(status, StatusCode::OK);
    let detail: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(detail["author"], "Sarah Martinez");
    assert_eq!(detail["source"], "Washington Post");
    assert_eq!(detail["published"], "2024-01-15");

    let (status, _, body) = get("/api/articles/999").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    let problem: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(problem["status"], 404);
}

#[tokio::test]
async fn test_api_perspectives() {
    let (_, _, body) = get("/api/perspectives?q=energy&language=german").await;
    let records: Vec<Value> = serde_json::from_str(&body).unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0]["title"], "German Technical Assessment of energy");
}
