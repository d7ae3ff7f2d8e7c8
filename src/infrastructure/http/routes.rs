//! HTTP Routes
//!
//! API Endpoints:
//! - /api/ping                                  GET     健康检查
//! - /api/novels                                GET     列出所有小说
//! - /api/novels                                POST    创建小说
//! - /api/novels/:id                            GET     获取小说详情
//! - /api/novels/:id                            PUT     更新小说
//! - /api/novels/:id                            DELETE  删除小说
//! - /api/novels/:id/chapters                   POST    追加章节
//! - /api/novels/:id/chapters/:chapter_id       PUT     更新章节
//! - /api/novels/:id/chapters/:chapter_id       DELETE  删除章节
//! - /api/characters[?novelId=]                 GET     列出角色（可按小说过滤）
//! - /api/characters                            POST    创建角色
//! - /api/characters/:id                        GET     获取角色详情
//! - /api/characters/:id                        PUT     更新角色
//! - /api/characters/:id                        DELETE  删除角色

use axum::{
    routing::{get, post, put},
    Router,
};
use std::sync::Arc;

use super::handlers;
use super::state::AppState;

/// 创建所有路由
pub fn create_routes() -> Router<Arc<AppState>> {
    Router::new()
        .nest("/api", api_routes())
        .fallback(handlers::route_not_found)
}

/// API 路由
fn api_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/ping", get(handlers::ping))
        .nest("/novels", novel_routes())
        .nest("/characters", character_routes())
}

/// Novel 路由（含章节）
fn novel_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(handlers::list_novels).post(handlers::create_novel))
        .route(
            "/:id",
            get(handlers::get_novel)
                .put(handlers::update_novel)
                .delete(handlers::delete_novel),
        )
        .route("/:id/chapters", post(handlers::add_chapter))
        .route(
            "/:id/chapters/:chapter_id",
            put(handlers::update_chapter).delete(handlers::delete_chapter),
        )
}

/// Character 路由
fn character_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/",
            get(handlers::list_characters).post(handlers::create_character),
        )
        .route(
            "/:id",
            get(handlers::get_character)
                .put(handlers::update_character)
                .delete(handlers::delete_character),
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::http::server::{build_router, DEFAULT_BODY_LIMIT};
    use crate::infrastructure::persistence::json::{JsonCharacterRepository, JsonNovelRepository};
    use axum::{
        body::{to_bytes, Body},
        http::{header, Method, Request, StatusCode},
    };
    use serde_json::{json, Value};
    use tempfile::{tempdir, TempDir};
    use tower::util::ServiceExt;

    struct TestApp {
        router: Router,
        dir: TempDir,
    }

    impl TestApp {
        fn new() -> Self {
            Self::with_body_limit(DEFAULT_BODY_LIMIT)
        }

        fn with_body_limit(body_limit_bytes: usize) -> Self {
            let dir = tempdir().unwrap();
            let state = AppState::new(
                Arc::new(JsonNovelRepository::new(dir.path())),
                Arc::new(JsonCharacterRepository::new(dir.path())),
            );
            Self {
                router: build_router(Arc::new(state), body_limit_bytes),
                dir,
            }
        }

        async fn call(&self, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
            let builder = Request::builder().method(method).uri(uri);
            let request = match body {
                Some(body) => builder
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
                None => builder.body(Body::empty()).unwrap(),
            };

            let response = self.router.clone().oneshot(request).await.unwrap();
            let status = response.status();
            let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
            let value = if bytes.is_empty() {
                Value::Null
            } else {
                serde_json::from_slice(&bytes).unwrap()
            };
            (status, value)
        }

        /// 原样发送请求体，返回状态码、Content-Type 和 JSON 响应
        async fn send_raw(
            &self,
            uri: &str,
            content_type: Option<&str>,
            body: &'static str,
        ) -> (StatusCode, String, Value) {
            let mut builder = Request::builder().method(Method::POST).uri(uri);
            if let Some(content_type) = content_type {
                builder = builder.header(header::CONTENT_TYPE, content_type);
            }
            let response = self
                .router
                .clone()
                .oneshot(builder.body(Body::from(body)).unwrap())
                .await
                .unwrap();

            let status = response.status();
            let content_type = response
                .headers()
                .get(header::CONTENT_TYPE)
                .and_then(|v| v.to_str().ok())
                .unwrap_or_default()
                .to_string();
            let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
            (status, content_type, serde_json::from_slice(&bytes).unwrap())
        }
    }

    #[tokio::test]
    async fn test_ping() {
        let app = TestApp::new();
        let (status, body) = app.call(Method::GET, "/api/ping", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
    }

    #[tokio::test]
    async fn test_novel_crud() {
        let app = TestApp::new();

        let (status, body) = app.call(Method::GET, "/api/novels", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!([]));

        let (status, novel) = app
            .call(Method::POST, "/api/novels", Some(json!({ "title": "Sagas", "genre": "epic" })))
            .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(novel["title"], "Sagas");
        assert_eq!(novel["wordCount"], 0);
        assert_eq!(novel["status"], "draft");
        let id = novel["id"].as_str().unwrap().to_string();

        let (status, fetched) = app.call(Method::GET, &format!("/api/novels/{}", id), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(fetched, novel);

        let (status, updated) = app
            .call(
                Method::PUT,
                &format!("/api/novels/{}", id),
                Some(json!({ "status": "in_progress", "wordCount": 500 })),
            )
            .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(updated["status"], "in_progress");
        assert_eq!(updated["genre"], "epic");
        assert_eq!(updated["wordCount"], 0);
        assert!(updated["updatedAt"].is_string());

        let (status, body) = app.call(Method::DELETE, &format!("/api/novels/{}", id), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], "Novel deleted successfully");

        let (status, body) = app.call(Method::DELETE, &format!("/api/novels/{}", id), None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "Novel not found");
    }

    #[tokio::test]
    async fn test_missing_novel_returns_404() {
        let app = TestApp::new();

        let (status, body) = app.call(Method::GET, "/api/novels/not-a-real-id", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "Novel not found");

        let (status, body) = app
            .call(Method::PUT, "/api/novels/nope", Some(json!({ "title": "x" })))
            .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "Novel not found");

        let (status, body) = app
            .call(Method::POST, "/api/novels/nope/chapters", Some(json!({})))
            .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "Novel not found");
    }

    #[tokio::test]
    async fn test_chapter_flow() {
        let app = TestApp::new();
        let (_, novel) = app
            .call(Method::POST, "/api/novels", Some(json!({ "title": "Sagas" })))
            .await;
        let id = novel["id"].as_str().unwrap().to_string();
        let chapters_uri = format!("/api/novels/{}/chapters", id);

        let (status, novel) = app
            .call(Method::POST, &chapters_uri, Some(json!({ "content": "one two three" })))
            .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(novel["wordCount"], 3);
        assert_eq!(novel["chapters"][0]["title"], "Chapter 1");
        let first = novel["chapters"][0]["id"].as_str().unwrap().to_string();

        let (_, novel) = app
            .call(Method::POST, &chapters_uri, Some(json!({ "content": "four five" })))
            .await;
        assert_eq!(novel["wordCount"], 5);
        let second = novel["chapters"][1]["id"].as_str().unwrap().to_string();

        let (status, novel) = app
            .call(
                Method::PUT,
                &format!("{}/{}", chapters_uri, second),
                Some(json!({ "content": "hello world again" })),
            )
            .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(novel["chapters"][1]["wordCount"], 3);
        assert_eq!(novel["chapters"][0]["wordCount"], 3);
        assert_eq!(novel["wordCount"], 6);

        let (status, body) = app
            .call(Method::PUT, &format!("{}/missing", chapters_uri), Some(json!({})))
            .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "Novel or chapter not found");

        let (status, novel) = app
            .call(Method::DELETE, &format!("{}/{}", chapters_uri, first), None)
            .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(novel["wordCount"], 3);
        assert_eq!(novel["chapters"].as_array().unwrap().len(), 1);
        assert_eq!(novel["chapters"][0]["title"], "Chapter 2");

        let (status, body) = app
            .call(Method::DELETE, &format!("{}/{}", chapters_uri, first), None)
            .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "Novel or chapter not found");
    }

    #[tokio::test]
    async fn test_character_crud_and_filter() {
        let app = TestApp::new();

        let (status, a) = app
            .call(
                Method::POST,
                "/api/characters",
                Some(json!({ "name": "Ayla", "role": "protagonist", "novelId": "n1" })),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(a["role"], "protagonist");
        assert_eq!(a["novelId"], "n1");

        let (_, b) = app.call(Method::POST, "/api/characters", Some(json!({}))).await;
        assert_eq!(b["name"], "Unnamed Character");
        assert_eq!(b["role"], "supporting");
        assert!(b["novelId"].is_null());

        let (status, all) = app.call(Method::GET, "/api/characters", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(all.as_array().unwrap().len(), 2);

        let (_, filtered) = app.call(Method::GET, "/api/characters?novelId=n1", None).await;
        assert_eq!(filtered, json!([a.clone()]));

        let (_, unfiltered) = app.call(Method::GET, "/api/characters?novelId=", None).await;
        assert_eq!(unfiltered.as_array().unwrap().len(), 2);

        let a_uri = format!("/api/characters/{}", a["id"].as_str().unwrap());
        let (status, updated) = app
            .call(Method::PUT, &a_uri, Some(json!({ "novelId": null, "appearance": "tall" })))
            .await;
        assert_eq!(status, StatusCode::OK);
        assert!(updated["novelId"].is_null());
        assert_eq!(updated["appearance"], "tall");
        assert_eq!(updated["name"], "Ayla");

        let (_, filtered) = app.call(Method::GET, "/api/characters?novelId=n1", None).await;
        assert_eq!(filtered, json!([]));

        let (status, body) = app.call(Method::DELETE, &a_uri, None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], "Character deleted successfully");

        let (status, body) = app.call(Method::GET, &a_uri, None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "Character not found");
    }

    #[tokio::test]
    async fn test_unknown_route() {
        let app = TestApp::new();
        let (status, body) = app.call(Method::GET, "/api/unknown", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "Route not found");
    }

    #[tokio::test]
    async fn test_malformed_body_returns_json_error() {
        let app = TestApp::new();

        let (status, content_type, body) = app
            .send_raw("/api/novels", Some("application/json"), "{ not json")
            .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(content_type.starts_with("application/json"));
        assert!(body["error"].as_str().unwrap().starts_with("Failed to parse"));

        let (status, _, body) = app
            .send_raw("/api/novels", Some("application/json"), r#"{"title":42}"#)
            .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].is_string());

        let (status, content_type, body) = app
            .send_raw("/api/characters", Some("text/plain"), r#"{"name":"A"}"#)
            .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(content_type.starts_with("application/json"));
        assert!(body["error"].is_string());

        let (_, list) = app.call(Method::GET, "/api/novels", None).await;
        assert_eq!(list, json!([]));
    }

    #[tokio::test]
    async fn test_empty_body_creates_with_defaults() {
        let app = TestApp::new();

        let (status, _, novel) = app.send_raw("/api/novels", None, "").await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(novel["title"], "Untitled Novel");

        let id = novel["id"].as_str().unwrap().to_string();
        let (status, _, novel) = app
            .send_raw(&format!("/api/novels/{}/chapters", id), None, "")
            .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(novel["chapters"][0]["title"], "Chapter 1");
    }

    #[tokio::test]
    async fn test_blank_role_defaults_to_supporting() {
        let app = TestApp::new();
        let (status, character) = app
            .call(
                Method::POST,
                "/api/characters",
                Some(json!({ "name": "A", "role": "" })),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(character["role"], "supporting");
    }

    #[tokio::test]
    async fn test_stored_null_title_does_not_drop_other_novels() {
        let app = TestApp::new();
        let path = app.dir.path().join("novels.json");
        std::fs::write(
            &path,
            json!([
                { "id": "a", "title": "Keep me", "createdAt": "2024-01-01T00:00:00Z" },
                { "id": "b", "title": null, "createdAt": "2024-01-01T00:00:00Z" }
            ])
            .to_string(),
        )
        .unwrap();

        let (status, list) = app.call(Method::GET, "/api/novels", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(list.as_array().unwrap().len(), 2);

        let (status, _) = app
            .call(Method::POST, "/api/novels", Some(json!({ "title": "new" })))
            .await;
        assert_eq!(status, StatusCode::CREATED);

        let (_, list) = app.call(Method::GET, "/api/novels", None).await;
        let ids: Vec<&str> = list
            .as_array()
            .unwrap()
            .iter()
            .map(|n| n["id"].as_str().unwrap())
            .collect();
        assert_eq!(ids.len(), 3);
        assert_eq!(&ids[..2], &["a", "b"]);
    }

    #[tokio::test]
    async fn test_oversized_body_is_rejected() {
        let app = TestApp::with_body_limit(16);
        let (status, content_type, body) = app
            .send_raw(
                "/api/novels",
                Some("application/json"),
                r#"{"title":"far too long for the limit"}"#,
            )
            .await;
        assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
        assert!(content_type.starts_with("application/json"));
        assert!(body["error"].is_string());
    }
}
