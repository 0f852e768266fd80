use std::time::Duration;

use axum::{
    Router,
    http::StatusCode,
    routing::{get, post},
};
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

use crate::{
    handlers::{
        api::{footer, send_email},
        health::livez,
        pages::{
            about, case_studies, case_study, contact, deck, deck_section, index, not_found,
            resume, stylesheet,
        },
    },
    state::AppState,
};

/// Create the application router with all routes and middleware.
pub fn create_app(state: AppState) -> Router {
    let api_routes = Router::new()
        .route("/footer", get(footer))
        .route("/send-email", post(send_email));

    Router::new()
        .route("/", get(index))
        .route("/about", get(about))
        .route("/resume", get(resume))
        .route("/case-studies", get(case_studies))
        .route("/case-study/{slug}", get(case_study))
        .route("/invite/casestudies/{slug}", get(deck))
        .route("/invite/casestudies/{slug}/{*rest}", get(deck_section))
        .route("/contact", get(contact))
        .route("/style.css", get(stylesheet))
        .route("/livez", get(livez))
        .nest("/api", api_routes)
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(10),
        ))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SiteConfig;
    use crate::content::ContentStore;
    use crate::email::{DeliveryError, Mailer, OutgoingEmail};
    use crate::test_helpers::*;
    use crate::types::FooterContent;
    use async_trait::async_trait;
    use axum::{
        body::Body,
        http::{Request, Response, header},
    };
    use http_body_util::BodyExt;
    use std::sync::{Arc, Mutex};
    use tempfile::TempDir;
    use tower::ServiceExt;

    /// Records delivered messages; rejects any message addressed to a
    /// recipient in `fail_to`.
    #[derive(Default)]
    struct MockMailer {
        sent: Mutex<Vec<OutgoingEmail>>,
        fail_to: Vec<String>,
    }

    impl MockMailer {
        fn failing_for(recipient: &str) -> Self {
            Self {
                fail_to: vec![recipient.to_string()],
                ..Default::default()
            }
        }
    }

    #[async_trait]
    impl Mailer for MockMailer {
        async fn send(&self, email: &OutgoingEmail) -> Result<(), DeliveryError> {
            if email.to.iter().any(|to| self.fail_to.contains(to)) {
                return Err(DeliveryError::Rejected {
                    status: 500,
                    message: "provider down".into(),
                });
            }
            self.sent.lock().unwrap().push(email.clone());
            Ok(())
        }
    }

    fn fixture_state() -> (TempDir, AppState) {
        let tmp = setup_fixtures();
        let state = AppState::new(ContentStore::new(tmp.path()), SiteConfig::default());
        (tmp, state)
    }

    async fn get_path(app: Router, uri: &str) -> Response<Body> {
        app.oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap()
    }

    async fn post_json(app: Router, uri: &str, body: &str) -> Response<Body> {
        app.oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap()
    }

    async fn body_string(response: Response<Body>) -> String {
        let body = response.into_body().collect().await.unwrap().to_bytes();
        String::from_utf8(body.to_vec()).unwrap()
    }

    async fn body_json(response: Response<Body>) -> serde_json::Value {
        let body = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&body).unwrap()
    }

    const VALID_REQUEST: &str = r#"{
        "name": "Ada",
        "email": "ada@example.com",
        "message": "Hello there",
        "isRecruiter": true,
        "caseStudySlug": "zalando-contextual"
    }"#;

    // =========================================================================
    // Pages
    // =========================================================================

    #[tokio::test]
    async fn test_index_page() {
        let (tmp, state) = fixture_state();
        let expected: crate::types::HomeContent = read_fixture(tmp.path(), "pages/home.json");

        let response = get_path(create_app(state), "/").await;

        assert_eq!(response.status(), StatusCode::OK);
        let html = body_string(response).await;
        assert!(html.contains(&expected.hero.title));
        assert!(html.contains(NAV_TAG));
        assert!(html.contains(FOOTER_TAG));
        assert!(html.contains("<main>"));
    }

    #[tokio::test]
    async fn test_about_page_omits_footer() {
        let (_tmp, state) = fixture_state();
        let html = body_string(get_path(create_app(state), "/about").await).await;
        assert!(html.contains(NAV_TAG));
        assert!(!html.contains(FOOTER_TAG));
    }

    #[tokio::test]
    async fn test_presentation_deep_link_has_no_chrome() {
        let (_tmp, state) = fixture_state();
        let response = get_path(
            create_app(state),
            "/invite/casestudies/fintech-onboarding/slide/3",
        )
        .await;

        assert_eq!(response.status(), StatusCode::OK);
        let html = body_string(response).await;
        assert!(!html.contains(NAV_TAG));
        assert!(!html.contains(FOOTER_TAG));
        assert!(!html.contains("<main>"));
    }

    #[tokio::test]
    async fn test_case_study_page() {
        let (_tmp, state) = fixture_state();
        let response = get_path(create_app(state), "/case-study/health-booking").await;
        assert_eq!(response.status(), StatusCode::OK);
        assert!(body_string(response).await.contains("Doctolib"));
    }

    #[tokio::test]
    async fn test_unknown_case_study_is_404() {
        let (_tmp, state) = fixture_state();
        let response = get_path(create_app(state), "/case-study/secret-project").await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert!(body_string(response).await.contains("Page not found"));
    }

    #[tokio::test]
    async fn test_unknown_deck_is_404_page() {
        let (_tmp, state) = fixture_state();
        let response = get_path(create_app(state), "/invite/casestudies/secret-project/2").await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let html = body_string(response).await;
        assert!(html.contains("/invite/casestudies/secret-project/2"));
        assert!(!html.contains(NAV_TAG));
    }

    #[tokio::test]
    async fn test_unknown_route_is_404() {
        let (_tmp, state) = fixture_state();
        let response = get_path(create_app(state), "/nowhere").await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_pages_render_without_artifacts() {
        let tmp = TempDir::new().unwrap();
        let state = AppState::new(ContentStore::new(tmp.path()), SiteConfig::default());
        let app = create_app(state);
        for uri in ["/", "/about", "/resume", "/case-studies", "/contact"] {
            let response = get_path(app.clone(), uri).await;
            assert_eq!(response.status(), StatusCode::OK, "{uri}");
        }
    }

    #[tokio::test]
    async fn test_stylesheet_content_type() {
        let (_tmp, state) = fixture_state();
        let response = get_path(create_app(state), "/style.css").await;
        assert_eq!(response.status(), StatusCode::OK);
        let content_type = response.headers()[header::CONTENT_TYPE].to_str().unwrap();
        assert!(content_type.starts_with("text/css"));
    }

    #[tokio::test]
    async fn test_livez() {
        let (_tmp, state) = fixture_state();
        let response = get_path(create_app(state), "/livez").await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    // =========================================================================
    // Footer API
    // =========================================================================

    #[tokio::test]
    async fn test_footer_returns_artifact() {
        let (tmp, state) = fixture_state();
        let response = get_path(create_app(state), "/api/footer").await;

        assert_eq!(response.status(), StatusCode::OK);
        let footer: FooterContent = serde_json::from_value(body_json(response).await).unwrap();
        assert_eq!(
            footer,
            read_fixture::<FooterContent>(tmp.path(), "components/footer.json")
        );
    }

    #[tokio::test]
    async fn test_footer_missing_is_404() {
        let (tmp, state) = fixture_state();
        remove_artifact(tmp.path(), "components/footer.json");

        let response = get_path(create_app(state), "/api/footer").await;

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let json = body_json(response).await;
        assert!(json["error"].is_string());
    }

    // =========================================================================
    // Email API
    // =========================================================================

    #[tokio::test]
    async fn test_send_email_success() {
        let (_tmp, state) = fixture_state();
        let mailer = Arc::new(MockMailer::default());
        let app = create_app(state.with_mailer(mailer.clone()));

        let response = post_json(app, "/api/send-email", VALID_REQUEST).await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await, serde_json::json!({ "success": true }));
        let sent = mailer.sent.lock().unwrap();
        assert_eq!(sent.len(), 2);
        assert_eq!(sent[0].to, vec!["ada@example.com".to_string()]);
    }

    #[tokio::test]
    async fn test_send_email_message_at_limit_succeeds() {
        let (_tmp, state) = fixture_state();
        let mailer = Arc::new(MockMailer::default());
        let app = create_app(state.with_mailer(mailer.clone()));

        let body = serde_json::json!({
            "name": "Ada",
            "email": "ada@example.com",
            "message": "x".repeat(160),
            "caseStudySlug": "general",
        });
        let response = post_json(app, "/api/send-email", &body.to_string()).await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await, serde_json::json!({ "success": true }));
        assert_eq!(mailer.sent.lock().unwrap()[0].to, vec!["ada@example.com".to_string()]);
    }

    #[tokio::test]
    async fn test_send_email_owner_alert_failure_still_succeeds() {
        let (_tmp, state) = fixture_state();
        let owner = state.config.email.owner_address.clone();
        let mailer = Arc::new(MockMailer::failing_for(&owner));
        let app = create_app(state.with_mailer(mailer.clone()));

        let response = post_json(app, "/api/send-email", VALID_REQUEST).await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await, serde_json::json!({ "success": true }));
        let sent = mailer.sent.lock().unwrap();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].to, vec!["ada@example.com".to_string()]);
    }

    #[tokio::test]
    async fn test_send_email_missing_field_is_400() {
        let (_tmp, state) = fixture_state();
        let mailer = Arc::new(MockMailer::default());
        let app = create_app(state.with_mailer(mailer.clone()));

        let body = r#"{"name": "Ada", "email": "ada@example.com", "caseStudySlug": "general"}"#;
        let response = post_json(app, "/api/send-email", body).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(body_json(response).await["error"].is_string());
        assert!(mailer.sent.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_send_email_long_message_is_400() {
        let (_tmp, state) = fixture_state();
        let mailer = Arc::new(MockMailer::default());
        let app = create_app(state.with_mailer(mailer.clone()));

        let body = serde_json::json!({
            "name": "Ada",
            "email": "ada@example.com",
            "message": "x".repeat(161),
            "caseStudySlug": "general",
        });
        let response = post_json(app, "/api/send-email", &body.to_string()).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(mailer.sent.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_send_email_malformed_json_is_400() {
        let (_tmp, state) = fixture_state();
        let app = create_app(state.with_mailer(Arc::new(MockMailer::default())));
        let response = post_json(app, "/api/send-email", "{ nope").await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_send_email_without_mailer_is_500() {
        let (_tmp, state) = fixture_state();
        let response = post_json(create_app(state), "/api/send-email", VALID_REQUEST).await;
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(body_json(response).await["error"].is_string());
    }

    #[tokio::test]
    async fn test_send_email_delivery_failure_is_500() {
        let (_tmp, state) = fixture_state();
        let mailer = Arc::new(MockMailer::failing_for("ada@example.com"));
        let response = post_json(
            create_app(state.with_mailer(mailer)),
            "/api/send-email",
            VALID_REQUEST,
        )
        .await;
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
