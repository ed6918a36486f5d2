//! Wall Routes - rendered widget and companion script

use axum::{
    extract::{Query, State},
    http::{header, StatusCode},
    response::{Html, IntoResponse},
    routing::get,
    Router,
};
use fbwall::render::{html::escape, render_error};
use fbwall::{embed_page, FacebookWall, FeedSource, WALL_SCRIPT};
use serde::Deserialize;
use std::sync::Arc;

use crate::AppState;

/// Per-request overrides
#[derive(Debug, Default, Deserialize)]
pub struct WallQuery {
    pub lang: Option<String>,
    pub limit: Option<u32>,
}

type WallResponse = Result<Html<String>, (StatusCode, Html<String>)>;

fn build_wall(
    state: &AppState,
    query: &WallQuery,
) -> Result<FacebookWall<Arc<dyn FeedSource>>, (StatusCode, Html<String>)> {
    let mut options = state.options.clone();
    if let Some(limit) = query.limit {
        options.num_posts = limit.clamp(1, 100);
    }

    let mut wall = FacebookWall::from_source(
        state.page_id.clone(),
        state.access_token.clone(),
        state.source.clone(),
    )
    .with_options(options);

    if let Some(lang) = query.lang.as_deref() {
        if !wall.set_language(lang) {
            return Err((
                StatusCode::BAD_REQUEST,
                Html(format!("Unsupported language: {}", escape(lang))),
            ));
        }
    }

    Ok(wall)
}

async fn render(state: &AppState, query: &WallQuery) -> WallResponse {
    let wall = build_wall(state, query)?;

    wall.render().await.map(Html).map_err(|e| {
        tracing::warn!(error = %e, "Failed to render wall");
        let status = if e.is_configuration() {
            StatusCode::INTERNAL_SERVER_ERROR
        } else {
            StatusCode::BAD_GATEWAY
        };
        (status, Html(render_error(&e, wall.options().lang)))
    })
}

/// Rendered posts as an HTML fragment
pub async fn get_wall(State(state): State<AppState>, Query(query): Query<WallQuery>) -> WallResponse {
    render(&state, &query).await
}

/// Rendered posts inside `#fb-wall`, followed by the toggle script
pub async fn get_wall_embed(
    State(state): State<AppState>,
    Query(query): Query<WallQuery>,
) -> WallResponse {
    render(&state, &query)
        .await
        .map(|Html(html)| Html(embed_page(&html)))
}

/// The toggle script
pub async fn get_script() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "application/javascript; charset=utf-8")],
        WALL_SCRIPT,
    )
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/wall", get(get_wall))
        .route("/wall/embed", get(get_wall_embed))
        .route("/wall.js", get(get_script))
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use axum::body::{to_bytes, Body};
    use axum::http::Request;
    use fbwall::{FeedResponse, Post, Profile, WallError, WallOptions};
    use serde_json::Value;
    use tower::ServiceExt;

    struct StubFeed;

    #[async_trait]
    impl FeedSource for StubFeed {
        async fn fetch_feed(
            &self,
            page_id: &str,
            _access_token: &str,
            options: &WallOptions,
        ) -> Result<FeedResponse, WallError> {
            if page_id == "down" {
                return Err(WallError::EmptyResponse);
            }
            let posts = (0..options.num_posts)
                .map(|i| Post {
                    id: format!("{page_id}_{i}"),
                    message: Some(format!("post {i}")),
                    from: Some(Profile::new(page_id, "Page")),
                    ..Default::default()
                })
                .collect();
            Ok(FeedResponse {
                data: posts,
                paging: None,
            })
        }

        async fn fetch_raw(
            &self,
            _page_id: &str,
            _access_token: &str,
            _options: &WallOptions,
        ) -> Result<Value, WallError> {
            Ok(Value::Null)
        }
    }

    fn state(page_id: Option<&str>) -> AppState {
        AppState {
            source: Arc::new(StubFeed),
            page_id: page_id.map(String::from),
            access_token: Some("token".to_string()),
            options: WallOptions::default(),
        }
    }

    async fn get(state: AppState, uri: &str) -> (StatusCode, String) {
        let response = crate::app(state)
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, String::from_utf8(body.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn test_wall_fragment_with_limit() {
        let (status, body) = get(state(Some("42")), "/wall?limit=2").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.matches("<section class=\"fb-post").count(), 2);
    }

    #[tokio::test]
    async fn test_wall_embed_includes_script() {
        let (status, body) = get(state(Some("42")), "/wall/embed?lang=de").await;

        assert_eq!(status, StatusCode::OK);
        assert!(body.starts_with(r#"<div id="fb-wall">"#));
        assert!(body.contains("<script>"));
        assert!(body.contains("Veröffentlicht am"));
    }

    #[tokio::test]
    async fn test_unsupported_language() {
        let (status, _) = get(state(Some("42")), "/wall?lang=fr").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_missing_page_id() {
        let (status, body) = get(state(None), "/wall").await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(body.contains("fb-wall-error"));
        assert!(body.contains("No Facebook page id configured"));
    }

    #[tokio::test]
    async fn test_upstream_failure() {
        let (status, body) = get(state(Some("down")), "/wall").await;

        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert!(body.contains("empty response"));
    }

    #[tokio::test]
    async fn test_script_route() {
        let response = crate::app(state(Some("42")))
            .oneshot(Request::builder().uri("/wall.js").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            "application/javascript; charset=utf-8"
        );
    }

    #[tokio::test]
    async fn test_health() {
        let (status, body) = get(state(Some("42")), "/health").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("\"page_configured\":true"));
    }
}
