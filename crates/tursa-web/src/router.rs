//! Axum router: maps all URL paths to handlers, under the configured base path.

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::{
    services::ServeDir,
    trace::TraceLayer,
    compression::CompressionLayer,
};
use std::sync::Arc;
use tursa_ui::Route;
use crate::state::{AppState, SharedState};
use crate::handlers::{
    portfolio::portfolio_page,
    about::about_page,
    contact::{contact_page, contact_submit, api_contact},
    fallback::fallback,
};

/// Build and return the full Axum router.
pub fn build_router(state: AppState) -> Router {
    let shared: SharedState = Arc::new(state);
    let base = shared.base.clone();

    let mut router = Router::new()
        // Pages
        .route(&base.href(Route::Home),    get(portfolio_page))
        .route(&base.href(Route::About),   get(about_page))
        .route(&base.href(Route::Contact), get(contact_page).post(contact_submit))

        // Fetch-based contact submission; any other method is just an unknown page
        .route(
            &format!("{}/api/contact", base.as_str()),
            post(api_contact).fallback(fallback),
        )

        // Static files
        .nest_service(&base.assets_mount(), ServeDir::new(&shared.assets_dir));

    // `/CompanyPortfolio` without the trailing slash is the home page too
    if !base.is_root() {
        router = router.route(base.as_str(), get(portfolio_page));
    }

    router
        .fallback(fallback)
        // Middleware
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(shared)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contact::tests::FakeEndpoint;
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use axum::response::Response;
    use tower::ServiceExt;
    use tursa_config::Config;

    fn app_with(endpoint: FakeEndpoint) -> (Router, Arc<FakeEndpoint>) {
        let endpoint = Arc::new(endpoint);
        let state = AppState::new(&Config::default(), endpoint.clone()).unwrap();
        (build_router(state), endpoint)
    }

    fn app() -> Router {
        app_with(FakeEndpoint::ok()).0
    }

    async fn get_path(app: Router, uri: &str) -> Response {
        app.oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap()
    }

    /// Response body with `/` and `&` un-escaped (the template engine writes
    /// them as `&#x2f;` and `&amp;`).
    async fn body_text(resp: Response) -> String {
        let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        String::from_utf8(bytes.to_vec())
            .unwrap()
            .replace("&#x2f;", "/")
            .replace("&amp;", "&")
    }

    fn location(resp: &Response) -> &str {
        resp.headers().get(header::LOCATION).unwrap().to_str().unwrap()
    }

    fn form_post(uri: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn json_post(uri: &str, body: serde_json::Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    // ── Routing ──

    #[tokio::test]
    async fn test_unknown_paths_redirect_home() {
        for uri in ["/", "/nope", "/CompanyPortfolio/projects", "/CompanyPortfolio/about/team"] {
            let resp = get_path(app(), uri).await;
            assert!(resp.status().is_redirection(), "{uri} -> {}", resp.status());
            assert_eq!(location(&resp), "/CompanyPortfolio/", "{uri}");
        }
    }

    #[tokio::test]
    async fn test_trailing_slash_redirects_to_page() {
        let resp = get_path(app(), "/CompanyPortfolio/about/").await;
        assert!(resp.status().is_redirection());
        assert_eq!(location(&resp), "/CompanyPortfolio/about");
    }

    #[tokio::test]
    async fn test_pages_render_inside_chrome() {
        for (uri, marker) in [
            ("/CompanyPortfolio/", "Featured Projects"),
            ("/CompanyPortfolio", "Featured Projects"),
            ("/CompanyPortfolio/about", "How we work"),
            ("/CompanyPortfolio/contact", "Get in touch"),
        ] {
            let resp = get_path(app(), uri).await;
            assert_eq!(resp.status(), StatusCode::OK, "{uri}");
            let html = body_text(resp).await;
            assert!(html.contains(marker), "{uri} missing {marker}");
            assert!(html.contains(r#"class="nav""#));
            assert!(html.contains("site-footer"));
        }
    }

    #[tokio::test]
    async fn test_current_page_link_is_active() {
        let html = body_text(get_path(app(), "/CompanyPortfolio/about").await).await;
        assert!(html.contains(r#"<a href="/CompanyPortfolio/about" class="active" aria-current="page">About</a>"#));
        assert!(html.contains(r#"<a href="/CompanyPortfolio/contact">Contact</a>"#));
    }

    #[tokio::test]
    async fn test_menu_toggle() {
        let closed = body_text(get_path(app(), "/CompanyPortfolio/contact").await).await;
        assert!(closed.contains(r#"<div class="menu" id="site-menu">"#));
        assert!(closed.contains("/CompanyPortfolio/contact?menu=open"));
        assert!(closed.contains(r#"aria-expanded="false""#));
        assert!(!closed.contains(r#"aria-expanded="False""#));

        let open = body_text(get_path(app(), "/CompanyPortfolio/contact?menu=open").await).await;
        assert!(open.contains(r#"<div class="menu open" id="site-menu">"#));
        assert!(open.contains(r#"aria-expanded="true""#));
        assert!(!open.contains(r#"aria-expanded="True""#));
    }

    #[tokio::test]
    async fn test_assets_are_served() {
        let resp = get_path(app(), "/CompanyPortfolio/assets/css/site.css").await;
        assert_eq!(resp.status(), StatusCode::OK);

        let missing = get_path(app(), "/CompanyPortfolio/assets/img/missing.png").await;
        assert_eq!(missing.status(), StatusCode::NOT_FOUND);
    }

    // ── Portfolio / disclosure ──

    #[tokio::test]
    async fn test_featured_not_repeated_in_grid() {
        let html = body_text(get_path(app(), "/CompanyPortfolio/").await).await;
        assert!(html.contains(r#"class="featured" id="tile-gridkeys""#));
        assert!(!html.contains(r#"class="tile" id="tile-gridkeys""#));
        assert!(html.contains(r#"class="tile" id="tile-petpal""#));
        assert!(html.contains(r#"class="tile" id="tile-tuition-app""#));
    }

    #[tokio::test]
    async fn test_missing_cover_renders_placeholder_not_img() {
        let html = body_text(get_path(app(), "/CompanyPortfolio/").await).await;
        assert!(html.contains(r#"<div class="placeholder">PetPal</div>"#));
        assert!(!html.contains(r#"alt="PetPal""#));
        assert!(html.contains(r#"<img src="/CompanyPortfolio/assets/img/gridkeys.svg" alt="GridKeys""#));
    }

    #[tokio::test]
    async fn test_no_overlay_by_default() {
        let html = body_text(get_path(app(), "/CompanyPortfolio/").await).await;
        assert!(!html.contains("data-overlay"));
        assert!(!html.contains("modal-open"));
    }

    #[tokio::test]
    async fn test_project_query_opens_overlay() {
        let html = body_text(get_path(app(), "/CompanyPortfolio/?project=smart-cart").await).await;
        assert!(html.contains("data-overlay"));
        assert!(html.contains(r#"<body class="modal-open">"#));
        assert!(html.contains("RSSI trilateration"));
        assert!(html.contains("autofocus"));
        // Rendered into the overlay root, outside <main>
        let main_end = html.find("</main>").unwrap();
        assert!(html.find("data-overlay").unwrap() > main_end);
    }

    #[tokio::test]
    async fn test_unknown_project_renders_no_overlay() {
        let resp = get_path(app(), "/CompanyPortfolio/?project=does-not-exist").await;
        assert_eq!(resp.status(), StatusCode::OK);
        let html = body_text(resp).await;
        assert!(!html.contains("data-overlay"));
    }

    #[tokio::test]
    async fn test_open_tile_button_reads_hide_details() {
        let html = body_text(get_path(app(), "/CompanyPortfolio/?project=petpal").await).await;
        assert!(html.contains("Hide details"));
        assert_eq!(html.matches("Hide details").count(), 1);
    }

    #[tokio::test]
    async fn test_overlay_dismiss_targets() {
        let html = body_text(get_path(app(), "/CompanyPortfolio/?project=smart-cart").await).await;
        assert!(html.contains(
            r#"class="overlay-backdrop" href="/CompanyPortfolio/?project=smart-cart&click=backdrop#tile-smart-cart""#
        ));
        assert!(html.contains(
            r#"class="overlay-close" href="/CompanyPortfolio/?project=smart-cart&click=close#tile-smart-cart""#
        ));
        assert!(html.contains(
            r#"data-key-href="/CompanyPortfolio/?project=smart-cart&key=Escape#tile-smart-cart""#
        ));

        // The dialog body holds no link besides its close control.
        let content = &html[html.find(r#"class="overlay-content""#).unwrap()..html.find("<script").unwrap()];
        assert_eq!(content.matches("<a ").count(), 1);
        assert!(content.contains(r#"class="overlay-close""#));
    }

    #[tokio::test]
    async fn test_dismissal_closes_and_returns_focus_to_tile() {
        for event in ["key=Escape", "click=backdrop", "click=close"] {
            let uri = format!("/CompanyPortfolio/?project=medi-bridge&{event}");
            let html = body_text(get_path(app(), &uri).await).await;
            assert!(!html.contains("data-overlay"), "{event}");
            assert!(!html.contains("modal-open"), "{event}");
            assert!(html.contains(r#"data-return-focus="medi-bridge""#), "{event}");
        }
    }

    #[tokio::test]
    async fn test_non_dismissing_events_keep_overlay_open() {
        for event in ["key=Enter", "click=content", "click=elsewhere"] {
            let uri = format!("/CompanyPortfolio/?project=medi-bridge&{event}");
            let html = body_text(get_path(app(), &uri).await).await;
            assert!(html.contains("data-overlay"), "{event}");
            assert!(html.contains(r#"<body class="modal-open">"#), "{event}");
            assert!(!html.contains("data-return-focus"), "{event}");
        }
    }

    #[tokio::test]
    async fn test_tile_button_toggles() {
        let html = body_text(get_path(app(), "/CompanyPortfolio/").await).await;
        assert!(html.contains(r#"href="/CompanyPortfolio/?toggle=petpal#tile-petpal" aria-expanded="false""#));

        let opened = body_text(get_path(app(), "/CompanyPortfolio/?toggle=petpal").await).await;
        assert!(opened.contains("data-overlay"));
        assert!(opened.contains(
            r#"href="/CompanyPortfolio/?project=petpal&toggle=petpal#tile-petpal" aria-expanded="true""#
        ));

        let closed = body_text(get_path(app(), "/CompanyPortfolio/?project=petpal&toggle=petpal").await).await;
        assert!(!closed.contains("data-overlay"));
        assert!(closed.contains(r#"data-return-focus="petpal""#));
    }

    #[tokio::test]
    async fn test_featured_case_study_opens_overlay() {
        let html = body_text(get_path(app(), "/CompanyPortfolio/?toggle=gridkeys").await).await;
        assert!(html.contains("data-overlay"));
        assert!(html.contains("Hide case study"));
    }

    // ── Contact ──

    #[tokio::test]
    async fn test_contact_page_starts_idle() {
        let html = body_text(get_path(app(), "/CompanyPortfolio/contact").await).await;
        assert!(html.contains(r#"name="form_id""#));
        assert!(html.contains(r#"data-status="idle""#));
        assert!(!html.contains("disabled"));
    }

    #[tokio::test]
    async fn test_contact_success_clears_fields() {
        let (app, endpoint) = app_with(FakeEndpoint::ok());
        let resp = app
            .oneshot(form_post(
                "/CompanyPortfolio/contact",
                "name=Jane+Doe&email=jane%40example.com&message=Build+us+a+keyboard",
            ))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        let html = body_text(resp).await;

        assert!(html.contains(r#"data-status="success""#));
        assert!(html.contains("Your message has been sent"));
        assert!(!html.contains("Jane Doe"));
        assert!(!html.contains("Build us a keyboard"));
        assert_eq!(endpoint.calls.lock().unwrap()[0].email, "jane@example.com");
    }

    #[tokio::test]
    async fn test_contact_failure_keeps_fields() {
        let (app, _) = app_with(FakeEndpoint::failing());
        let html = body_text(
            app.oneshot(form_post(
                "/CompanyPortfolio/contact",
                "name=Jane+Doe&email=jane%40example.com&message=Build+us+a+keyboard",
            ))
            .await
            .unwrap(),
        )
        .await;

        assert!(html.contains(r#"data-status="error""#));
        assert!(html.contains("Please try again"));
        assert!(html.contains(r#"value="Jane Doe""#));
        assert!(html.contains("Build us a keyboard"));
    }

    #[tokio::test]
    async fn test_contact_missing_field_is_reported() {
        let (app, endpoint) = app_with(FakeEndpoint::ok());
        let resp = app
            .oneshot(form_post("/CompanyPortfolio/contact", "name=Jane&email=&message=Hi"))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert!(body_text(resp).await.contains("Email is required"));
        assert_eq!(endpoint.call_count(), 0);
    }

    /// App plus a handle on its in-flight set, for holding a form instance busy.
    fn app_with_in_flight() -> (Router, crate::contact::InFlightForms, Arc<FakeEndpoint>) {
        let endpoint = Arc::new(FakeEndpoint::ok());
        let state = AppState::new(&Config::default(), endpoint.clone()).unwrap();
        let in_flight = state.contact.in_flight().clone();
        (build_router(state), in_flight, endpoint)
    }

    const BUSY_FORM: &str = "6f1c2a8e-4b7d-4e0a-9c3f-2d5b8a1e7c90";

    #[tokio::test]
    async fn test_contact_conflict_leaves_form_usable() {
        let (app, in_flight, endpoint) = app_with_in_flight();
        let _busy = in_flight.claim(uuid::Uuid::parse_str(BUSY_FORM).unwrap()).unwrap();

        let resp = app
            .oneshot(form_post(
                "/CompanyPortfolio/contact",
                &format!("form_id={BUSY_FORM}&name=Jane+Doe&email=jane%40example.com&message=Hi"),
            ))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::CONFLICT);
        let html = body_text(resp).await;

        assert!(html.contains(r#"data-status="idle""#));
        assert!(!html.contains("disabled"));
        assert!(html.contains("This message is already being sent"));
        assert!(html.contains(r#"value="Jane Doe""#));
        assert_eq!(endpoint.call_count(), 0);
    }

    #[tokio::test]
    async fn test_api_contact_conflict_reply() {
        let (app, in_flight, endpoint) = app_with_in_flight();
        let _busy = in_flight.claim(uuid::Uuid::parse_str(BUSY_FORM).unwrap()).unwrap();

        let resp = app
            .oneshot(json_post(
                "/CompanyPortfolio/api/contact",
                serde_json::json!({
                    "form_id": BUSY_FORM,
                    "name": "Jane",
                    "email": "jane@example.com",
                    "message": "Hi"
                }),
            ))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::CONFLICT);
        let reply: serde_json::Value = serde_json::from_str(&body_text(resp).await).unwrap();
        assert_eq!(reply["status"], "idle");
        assert_eq!(reply["message"], "This message is already being sent");
        assert_eq!(reply["form_id"], BUSY_FORM);
        assert_eq!(endpoint.call_count(), 0);
    }

    #[tokio::test]
    async fn test_api_path_redirects_home_on_get() {
        let resp = get_path(app(), "/CompanyPortfolio/api/contact").await;
        assert!(resp.status().is_redirection());
        assert_eq!(location(&resp), "/CompanyPortfolio/");
    }

    #[tokio::test]
    async fn test_api_contact_success() {
        let (app, _) = app_with(FakeEndpoint::ok());
        let resp = app
            .oneshot(json_post(
                "/CompanyPortfolio/api/contact",
                serde_json::json!({"name": "Jane", "email": "jane@example.com", "message": "Hi"}),
            ))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        let reply: serde_json::Value = serde_json::from_str(&body_text(resp).await).unwrap();
        assert_eq!(reply["status"], "success");
    }

    #[tokio::test]
    async fn test_api_contact_failure() {
        let (app, _) = app_with(FakeEndpoint::failing());
        let resp = app
            .oneshot(json_post(
                "/CompanyPortfolio/api/contact",
                serde_json::json!({"name": "Jane", "email": "jane@example.com", "message": "Hi"}),
            ))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);
        let reply: serde_json::Value = serde_json::from_str(&body_text(resp).await).unwrap();
        assert_eq!(reply["status"], "error");
    }

    #[tokio::test]
    async fn test_root_base_path() {
        let mut config = Config::default();
        config.site.base_path = "/".into();
        let state = AppState::new(&config, Arc::new(FakeEndpoint::ok())).unwrap();
        let app = build_router(state);

        let resp = get_path(app.clone(), "/about").await;
        assert_eq!(resp.status(), StatusCode::OK);

        let resp = get_path(app, "/CompanyPortfolio/").await;
        assert_eq!(location(&resp), "/");
    }
}
