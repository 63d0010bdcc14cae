//! Request extractors whose rejections answer with the shared error envelope
//! instead of axum's plain-text bodies.

use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::extract::{FromRequest, FromRequestParts};
use axum::http::StatusCode;

use crate::presentation::http::error::ApiError;

#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct AppJson<T>(pub T);

#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(ApiError))]
pub struct AppQuery<T>(pub T);

#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(ApiError))]
pub struct AppPath<T>(pub T);

/// Client mistakes become 400; axum's own status is kept for anything else
/// (a missing content type, an oversized body, a routing bug).
fn client_status(status: StatusCode) -> StatusCode {
    if status == StatusCode::UNPROCESSABLE_ENTITY {
        StatusCode::BAD_REQUEST
    } else {
        status
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        tracing::debug!(error = %rejection, "json_rejected");
        ApiError::new(client_status(rejection.status()), rejection.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        tracing::debug!(error = %rejection, "query_rejected");
        ApiError::new(client_status(rejection.status()), rejection.body_text())
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        tracing::debug!(error = %rejection, "path_rejected");
        ApiError::new(client_status(rejection.status()), rejection.body_text())
    }
}

#[cfg(test)]
mod tests {
    use axum::body::{Body, to_bytes};
    use axum::http::{Request, header};
    use axum::response::IntoResponse;
    use serde::Deserialize;
    use serde_json::Value;

    use super::*;
    use crate::domain::diary::Mood;

    #[derive(Debug, Deserialize)]
    struct MoodBody {
        mood: Mood,
    }

    #[derive(Debug, Deserialize)]
    struct DaysParam {
        days: i64,
    }

    async fn envelope(err: ApiError) -> (StatusCode, Value) {
        let resp = err.into_response();
        let status = resp.status();
        let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    fn json_request(body: &'static str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body))
            .unwrap()
    }

    #[tokio::test]
    async fn malformed_and_mistyped_bodies_use_the_error_envelope() {
        for body in ["{not json", r#"{"mood":"ECSTATIC"}"#] {
            let err = AppJson::<MoodBody>::from_request(json_request(body), &())
                .await
                .unwrap_err();
            let (status, json) = envelope(err).await;
            assert_eq!(status, StatusCode::BAD_REQUEST, "body {body}");
            assert_eq!(json["success"], Value::Bool(false));
            assert!(json["message"].as_str().is_some_and(|m| !m.is_empty()));
        }

        let AppJson(body) =
            AppJson::<MoodBody>::from_request(json_request(r#"{"mood":"CALM"}"#), &())
                .await
                .unwrap();
        assert_eq!(body.mood, Mood::Calm);
    }

    #[tokio::test]
    async fn bad_query_values_use_the_error_envelope() {
        let (mut parts, _) = Request::builder()
            .uri("/history?days=abc")
            .body(())
            .unwrap()
            .into_parts();
        let err = AppQuery::<DaysParam>::from_request_parts(&mut parts, &())
            .await
            .unwrap_err();
        let (status, json) = envelope(err).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["success"], Value::Bool(false));

        let (mut parts, _) = Request::builder()
            .uri("/history?days=7")
            .body(())
            .unwrap()
            .into_parts();
        let AppQuery(q) = AppQuery::<DaysParam>::from_request_parts(&mut parts, &())
            .await
            .unwrap();
        assert_eq!(q.days, 7);
    }
}
