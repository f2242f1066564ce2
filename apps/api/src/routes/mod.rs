pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::session::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/submit", post(handlers::handle_submit))
        .route("/result/:token", get(handlers::handle_result))
        .with_state(state)
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    use super::*;
    use crate::config::Config;
    use crate::session::store::{EvictionPolicy, InMemorySessionStore};

    fn test_state() -> AppState {
        let config = Config {
            port: 0,
            rust_log: "debug".to_string(),
            session_ttl_secs: None,
            session_max_entries: None,
            session_sweep_secs: 60,
            rng_seed: Some(99),
        };
        let sessions = Arc::new(InMemorySessionStore::new(EvictionPolicy::unbounded()));
        AppState::new(config, sessions)
    }

    async fn body_json(body: Body) -> serde_json::Value {
        let bytes = body.collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn submit_request(body: &str) -> Request<Body> {
        Request::post("/submit")
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn location(resp: &axum::response::Response) -> String {
        resp.headers()
            .get(header::LOCATION)
            .and_then(|v| v.to_str().ok())
            .unwrap()
            .to_string()
    }

    // ── GET /health ──────────────────────────────────────────────────────

    #[tokio::test]
    async fn test_health_returns_ok() {
        let resp = build_router(test_state())
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        let json = body_json(resp.into_body()).await;
        assert_eq!(json["status"], "ok");
        assert_eq!(json["stored_results"], 0);
    }

    // ── POST /submit → GET /result/:token ────────────────────────────────

    #[tokio::test]
    async fn test_submit_redirects_and_result_renders() {
        let app = build_router(test_state());

        let resp = app
            .clone()
            .oneshot(submit_request(
                "salary_expect=550000&age=32&nationality=CN&mbti_type=entj\
                 &bachelor_uni=X&master_uni=&major=Arts+%26+Design",
            ))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::SEE_OTHER);
        let target = location(&resp);
        assert!(target.starts_with("/result/"), "location {target}");

        let resp = app
            .oneshot(Request::get(target.as_str()).body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);

        let json = body_json(resp.into_body()).await;
        assert_eq!(json["mbti_icon_id"], "MBTI_ENTJ");
        assert_eq!(json["major_svg_id"], "MAJOR_ARTS");
        assert_eq!(json["halo_uni_id"], "NONE_HALO");
        assert_eq!(json["unit_gbp_id"], "UNIT_GBP1");
        assert_eq!(json["fixed_frame_id"], "FRAME_FIXED");
        assert_eq!(json["layout_id"], "LAYOUT_B_01");
        assert_eq!(json["salary_text"], "550000");
        assert_eq!(json["age_text"], "32");
        assert_eq!(json["nationality_text"], "CN");
    }

    #[tokio::test]
    async fn test_submit_with_missing_fields_succeeds() {
        let resp = build_router(test_state())
            .oneshot(submit_request(""))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    }

    #[tokio::test]
    async fn test_malformed_salary_is_400() {
        let state = test_state();
        let resp = build_router(state.clone())
            .oneshot(submit_request("salary_expect=abc&age=30"))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let json = body_json(resp.into_body()).await;
        assert_eq!(json["error"]["code"], "VALIDATION_ERROR");
        assert_eq!(state.sessions.count().await, 0);
    }

    #[tokio::test]
    async fn test_wide_and_separated_numbers_round_trip() {
        let app = build_router(test_state());
        let resp = app
            .clone()
            .oneshot(submit_request("salary_expect=99999999999999999999&age=1_000"))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::SEE_OTHER);

        let target = location(&resp);
        let resp = app
            .oneshot(Request::get(target.as_str()).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let json = body_json(resp.into_body()).await;
        assert_eq!(json["salary_text"], "99999999999999999999");
        assert_eq!(json["age_text"], "1000");
    }

    #[tokio::test]
    async fn test_malformed_age_is_400() {
        let resp = build_router(test_state())
            .oneshot(submit_request("salary_expect=100&age=3.5"))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_unknown_token_is_404() {
        let uri = format!("/result/{}", uuid::Uuid::new_v4());
        let resp = build_router(test_state())
            .oneshot(Request::get(uri.as_str()).body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let json = body_json(resp.into_body()).await;
        assert_eq!(json["error"]["code"], "NOT_FOUND");
        assert!(json.get("core_element_id").is_none());
    }

    #[tokio::test]
    async fn test_garbage_token_is_404() {
        let resp = build_router(test_state())
            .oneshot(Request::get("/result/not-a-token").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_graduate_submission_uses_graduate_layout() {
        let app = build_router(test_state());
        for _ in 0..20 {
            let resp = app
                .clone()
                .oneshot(submit_request("master_uni=Oxford&mbti_type=INFP&major=Law"))
                .await
                .unwrap();
            let target = location(&resp);
            let resp = app
                .clone()
                .oneshot(Request::get(target.as_str()).body(Body::empty()).unwrap())
                .await
                .unwrap();
            let json = body_json(resp.into_body()).await;
            let layout = json["layout_id"].as_str().unwrap();
            assert!(layout.starts_with("LAYOUT_M_"), "layout {layout}");
            let halo = json["halo_uni_id"].as_str().unwrap();
            assert!(halo == "MASTER_1" || halo == "MASTER_2", "halo {halo}");
        }
    }
}
