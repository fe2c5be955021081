//! HTTP router - `/cafe` lookups and the health probe

use axum::{
    extract::{RawQuery, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::query::CafeQuery;
use crate::AppState;

/// Create the router serving `/cafe` and `/health`
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/cafe", get(list_cafes))
        .with_state(state)
}

/// Health check endpoint
async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, "OK")
}

/// Handle `GET /cafe`
async fn list_cafes(State(state): State<Arc<AppState>>, RawQuery(raw): RawQuery) -> Response {
    let request_id = Uuid::new_v4().to_string();
    let query = CafeQuery::from_query_string(raw.as_deref());

    tracing::debug!(
        request_id = %request_id,
        city = ?query.city,
        count = ?query.count,
        search = %query.search,
        "Incoming cafe request"
    );

    match query.resolve(&state.catalog) {
        Ok(cafes) => {
            tracing::debug!(request_id = %request_id, found = cafes.len(), "Cafe request served");
            (StatusCode::OK, cafes.join(",")).into_response()
        }
        Err(e) => {
            tracing::debug!(request_id = %request_id, "Rejected cafe request: {}", e);
            e.into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CityCatalog;
    use axum::body::Body;
    use axum::http::{header, Method, Request};
    use tower::ServiceExt;

    fn app() -> Router {
        let state = AppState::new(CityCatalog::builtin());
        create_router(Arc::new(state))
    }

    async fn get_uri(uri: &str) -> (StatusCode, String) {
        let response = app()
            .oneshot(Request::get(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();

        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
            .await
            .unwrap();
        (status, String::from_utf8(body.to_vec()).unwrap())
    }

    fn split(body: &str) -> Vec<&str> {
        if body.is_empty() {
            Vec::new()
        } else {
            body.split(',').collect()
        }
    }

    // Cyrillic search terms go through the URL percent-encoded.
    fn search_uri(city: &str, search: &str) -> String {
        let query: String = url::form_urlencoded::Serializer::new(String::new())
            .append_pair("city", city)
            .append_pair("search", search)
            .finish();
        format!("/cafe?{}", query)
    }

    #[tokio::test]
    async fn test_cafe_negative() {
        let cases = [
            ("/cafe", "unknown city"),
            ("/cafe?city=omsk", "unknown city"),
            ("/cafe?city=omsk&count=na", "unknown city"),
            ("/cafe?city=tula&count=na", "incorrect count"),
            ("/cafe?city=tula&count=-1", "incorrect count"),
        ];

        for (uri, message) in cases {
            let (status, body) = get_uri(uri).await;
            assert_eq!(status, StatusCode::BAD_REQUEST, "{}", uri);
            assert_eq!(body.trim(), message, "{}", uri);
        }
    }

    #[tokio::test]
    async fn test_cafe_when_ok() {
        let uris = [
            "/cafe?count=2&city=moscow".to_string(),
            "/cafe?city=tula".to_string(),
            search_uri("moscow", "ложка"),
        ];

        for uri in uris {
            let (status, _) = get_uri(&uri).await;
            assert_eq!(status, StatusCode::OK, "{}", uri);
        }
    }

    #[tokio::test]
    async fn test_cafe_count() {
        let total = CityCatalog::builtin().cafes("moscow").unwrap().len();

        for (count, want) in [(0, 0), (1, 1), (2, 2), (100, total)] {
            let (status, body) = get_uri(&format!("/cafe?count={}&city=moscow", count)).await;
            assert_eq!(status, StatusCode::OK);
            assert_eq!(split(&body).len(), want, "count={}", count);
        }
    }

    #[tokio::test]
    async fn test_cafe_search() {
        for (search, want) in [("фасоль", 0), ("кофе", 2), ("вилка", 1)] {
            let (status, body) = get_uri(&search_uri("moscow", search)).await;
            assert_eq!(status, StatusCode::OK);

            let cafes = split(&body);
            assert_eq!(cafes.len(), want, "search={}", search);
            for cafe in cafes {
                assert!(
                    cafe.to_lowercase().contains(&search.to_lowercase()),
                    "search={}: unexpected cafe {}",
                    search,
                    cafe
                );
            }
        }
    }

    #[tokio::test]
    async fn test_cafe_body_format() {
        let (status, body) = get_uri("/cafe?city=tula").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "Тульский пряник,Самовар,Левша");
    }

    #[tokio::test]
    async fn test_cafe_content_type() {
        let response = app()
            .oneshot(Request::get("/cafe?city=tula&count=0").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let content_type = response.headers().get(header::CONTENT_TYPE).unwrap();
        assert!(content_type.to_str().unwrap().starts_with("text/plain"));
    }

    #[tokio::test]
    async fn test_cafe_rejects_post() {
        let response = app()
            .oneshot(
                Request::builder()
                    .method(Method::POST)
                    .uri("/cafe?city=tula")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    }

    #[tokio::test]
    async fn test_health_check() {
        let (status, body) = get_uri("/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "OK");
    }
}
