use fbwall::{FacebookWall, FeedSource, GraphClient, WallError, WallOptions};
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn options_for(server: &MockServer) -> WallOptions {
    WallOptions::default().with_graph_url(server.uri())
}

fn feed_body() -> serde_json::Value {
    json!({
        "data": [
            {
                "id": "42_1001",
                "from": { "id": "42", "name": "The Band" },
                "message": "Tour dates are out: www.band.example/tour",
                "type": "status",
                "created_time": "2014-03-01T18:30:00+0000",
                "likes": {
                    "data": [{ "id": "7", "name": "Bob" }],
                    "summary": { "total_count": 3 }
                }
            },
            {
                "id": "42_1002",
                "from": { "id": "99", "name": "A Fan" },
                "message": "Great show!",
                "type": "status",
                "created_time": "2014-03-01T19:00:00+0000"
            },
            {
                "id": "42_1003",
                "from": { "id": "42", "name": "The Band" },
                "type": "photo",
                "picture": "https://fbcdn.example/x_s.jpg"
            }
        ],
        "paging": { "next": "https://graph.facebook.com/42/feed?until=1" }
    })
}

#[tokio::test]
async fn test_fetches_feed_with_query() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/42/feed"))
        .and(query_param("access_token", "secret"))
        .and(query_param("limit", "15"))
        .respond_with(ResponseTemplate::new(200).set_body_json(feed_body()))
        .expect(1)
        .mount(&server)
        .await;

    let feed = GraphClient::new()
        .fetch_feed("42", "secret", &options_for(&server))
        .await
        .unwrap();

    assert_eq!(feed.data.len(), 3);
    assert!(feed.paging.and_then(|p| p.next).is_some());
}

#[tokio::test]
async fn test_renders_own_posts_only() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/42/feed"))
        .respond_with(ResponseTemplate::new(200).set_body_json(feed_body()))
        .mount(&server)
        .await;

    let wall = FacebookWall::new("42", "secret").with_options(options_for(&server));
    let html = wall.render().await.unwrap();

    assert_eq!(html.matches(r#"<section class="fb-post news-entry">"#).count(), 1);
    assert!(html.contains(r#"<a href="http://www.band.example/tour" target="_blank""#));
    assert!(html.contains(r#"href="https://www.facebook.com/42/posts/1001""#));
    assert!(html.contains("<span>Posted on 03/01/2014 - 18:30</span>"));
    assert!(!html.contains("Great show!"));
}

#[tokio::test]
async fn test_api_error_message_is_surfaced() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "error": {
                "message": "Error validating access token",
                "type": "OAuthException",
                "code": 190
            }
        })))
        .mount(&server)
        .await;

    let wall = FacebookWall::new("42", "expired").with_options(options_for(&server));
    let err = wall.render().await.unwrap_err();

    match err {
        WallError::Api { status, message } => {
            assert_eq!(status, 400);
            assert_eq!(message, "Error validating access token");
        }
        other => panic!("Expected Api error, got {other:?}"),
    }

    let html = wall.render_or_error().await;
    assert!(html.contains("Error validating access token"));
    assert!(!html.contains("fb-post"));
}

#[tokio::test]
async fn test_empty_body_aborts_render() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string(""))
        .mount(&server)
        .await;

    let wall = FacebookWall::new("42", "secret").with_options(options_for(&server));
    assert!(matches!(
        wall.render().await,
        Err(WallError::EmptyResponse)
    ));
}

#[tokio::test]
async fn test_malformed_body_aborts_render() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{\"posts\": []}"))
        .mount(&server)
        .await;

    let wall = FacebookWall::new("42", "secret").with_options(options_for(&server));
    assert!(matches!(
        wall.render().await,
        Err(WallError::MalformedResponse(_))
    ));
}

#[tokio::test]
async fn test_raw_dump_returns_payload() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(feed_body()))
        .mount(&server)
        .await;

    let wall = FacebookWall::new("42", "secret").with_options(options_for(&server));
    let dump = wall.raw_dump().await.unwrap();

    assert!(dump.starts_with("<pre>{"));
    assert!(dump.contains("Great show!"));
}

#[tokio::test]
async fn test_non_json_error_body_is_used_as_message() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503).set_body_string("Service Unavailable"))
        .mount(&server)
        .await;

    let err = GraphClient::new()
        .fetch_feed("42", "secret", &options_for(&server))
        .await
        .unwrap_err();

    match err {
        WallError::Api { status, message } => {
            assert_eq!(status, 503);
            assert_eq!(message, "Service Unavailable");
        }
        other => panic!("Expected Api error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_error_object_with_ok_status_is_api_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "error": {
                "message": "Unsupported get request",
                "type": "GraphMethodException",
                "code": 100
            }
        })))
        .mount(&server)
        .await;

    let err = GraphClient::new()
        .fetch_feed("42", "secret", &options_for(&server))
        .await
        .unwrap_err();

    match err {
        WallError::Api { status, message } => {
            assert_eq!(status, 200);
            assert_eq!(message, "Unsupported get request");
        }
        other => panic!("Expected Api error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_empty_feed_renders_nothing() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "data": [] })))
        .mount(&server)
        .await;

    let wall = FacebookWall::new("42", "secret").with_options(options_for(&server));
    let html = wall.render().await.unwrap();

    assert_eq!(html, "");
}
