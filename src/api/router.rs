//! API router.
//!
//! Returns a composable `Router` with every route under `/api/`.
//!
//! Middleware stack (outermost → innermost):
//! 1. Identity resolver → 2. Audit logger

use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;

use crate::api::endpoints;
use crate::api::middleware;
use crate::api::types::ApiContext;
use crate::core_state::CoreState;

/// Build the API router.
///
/// Middleware uses `Extension<ApiContext>` (injected as the outermost layer).
/// Endpoint handlers use `State<ApiContext>` (provided via `with_state`).
/// Routes that need a signed-in user reject anonymous callers in the
/// workflow they call, not in middleware.
pub fn api_router(core: Arc<CoreState>) -> Router {
    let ctx = ApiContext::new(core);

    // NOTE: Path params use `:param` syntax (matchit 0.7 / axum 0.7).
    let routes = Router::new()
        .route("/health", get(endpoints::health::check))
        .route("/register", post(endpoints::accounts::register))
        .route("/login", post(endpoints::accounts::login))
        .route("/logout", post(endpoints::accounts::logout))
        .route("/professionals", get(endpoints::directory::professionals))
        .route(
            "/professionals/:id/approve",
            post(endpoints::directory::approve),
        )
        .route("/facilities", get(endpoints::directory::facilities))
        .route(
            "/appointments",
            get(endpoints::appointments::list).post(endpoints::appointments::book),
        )
        .route("/assessments", post(endpoints::assessments::record))
        .route("/prescriptions", get(endpoints::prescriptions::list))
        .route("/education", get(endpoints::education::list))
        .route("/education/nphil", get(endpoints::education::nphil))
        .route("/admin", get(endpoints::admin::overview))
        .route("/chat", post(endpoints::chat::send))
        .route("/translate", post(endpoints::chat::translate))
        .route("/languages", get(endpoints::chat::languages))
        .route("/language/:language", post(endpoints::chat::set_language))
        .with_state(ctx.clone())
        // Innermost first, outermost last:
        .layer(axum::middleware::from_fn(middleware::audit::log_access))
        .layer(axum::middleware::from_fn(middleware::auth::resolve_identity))
        // Extension must be outermost so middleware can extract ApiContext
        .layer(axum::Extension(ctx));

    Router::new().nest("/api", routes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use std::sync::{mpsc, Mutex as StdMutex};
    use std::time::Duration;
    use tokio::sync::oneshot;

    use crate::core_state::tests::test_state;
    use crate::crypto::{CredentialVerifier, Pbkdf2Verifier};
    use crate::db::sqlite::open_memory_database;
    use crate::db::count_entities;
    use crate::education::NphilSource;
    use crate::models::EntityKind;

    async fn call(
        core: &Arc<CoreState>,
        method: &str,
        uri: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(t) = token {
            builder = builder.header("Authorization", format!("Bearer {t}"));
        }
        let req = match body {
            Some(json) => builder
                .header("Content-Type", "application/json")
                .body(Body::from(json.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = api_router(core.clone()).oneshot(req).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), 1 << 20).await.unwrap();
        let json = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::Null)
        };
        (status, json)
    }

    async fn register(core: &Arc<CoreState>, body: Value) -> Value {
        let (status, json) = call(core, "POST", "/api/register", None, Some(body)).await;
        assert_eq!(status, StatusCode::CREATED, "{json}");
        json
    }

    async fn login(core: &Arc<CoreState>, email: &str) -> String {
        let (status, json) = call(
            core,
            "POST",
            "/api/login",
            None,
            Some(json!({ "email": email, "password": "pw-1234" })),
        )
        .await;
        assert_eq!(status, StatusCode::OK, "{json}");
        json["token"].as_str().unwrap().to_string()
    }

    fn patient(email: &str) -> Value {
        json!({ "name": "Musu Kollie", "email": email, "password": "pw-1234", "role": "patient" })
    }

    fn professional(email: &str, specialty: &str) -> Value {
        json!({
            "name": "Dr. Amara",
            "email": email,
            "password": "pw-1234",
            "user_type": "professional",
            "specialty": specialty,
            "county": "Bong"
        })
    }

    #[tokio::test]
    async fn health_is_public() {
        let core = Arc::new(test_state());
        let (status, json) = call(&core, "GET", "/api/health", None, None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["status"], "ok");
    }

    #[tokio::test]
    async fn register_hides_password_hash() {
        let core = Arc::new(test_state());
        let user = register(&core, patient("musu@x.lr")).await;
        assert_eq!(user["is_approved"], true);
        assert!(user.get("password_hash").is_none());
    }

    #[tokio::test]
    async fn duplicate_email_is_conflict() {
        let core = Arc::new(test_state());
        register(&core, patient("same@x.lr")).await;
        let (status, json) = call(&core, "POST", "/api/register", None, Some(patient("same@x.lr"))).await;
        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(json["error"]["code"], "CONFLICT");
    }

    #[tokio::test]
    async fn unknown_role_is_bad_request() {
        let core = Arc::new(test_state());
        let mut body = patient("x@x.lr");
        body["role"] = json!("admin");
        let (status, json) = call(&core, "POST", "/api/register", None, Some(body)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["error"]["code"], "BAD_REQUEST");
    }

    #[tokio::test]
    async fn missing_role_is_bad_request() {
        let core = Arc::new(test_state());
        let mut body = patient("x@x.lr");
        body.as_object_mut().unwrap().remove("role");
        let (status, json) = call(&core, "POST", "/api/register", None, Some(body)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["error"]["code"], "BAD_REQUEST");
        assert!(json["error"]["message"].as_str().unwrap().contains("role"));
    }

    #[tokio::test]
    async fn unparsable_body_is_bad_request() {
        let core = Arc::new(test_state());
        let req = Request::builder()
            .method("POST")
            .uri("/api/login")
            .header("Content-Type", "application/json")
            .body(Body::from("{not json"))
            .unwrap();
        let response = api_router(core).oneshot(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let bytes = to_bytes(response.into_body(), 1 << 20).await.unwrap();
        let json: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(json["error"]["code"], "BAD_REQUEST");
    }

    #[tokio::test]
    async fn string_professional_id_is_bad_request() {
        let core = Arc::new(test_state());
        register(&core, patient("musu@x.lr")).await;
        let token = login(&core, "musu@x.lr").await;

        let booking = json!({
            "professional_id": "7",
            "appointment_date": "2025-07-01T09:30:00",
            "appointment_type": "virtual"
        });
        let (status, json) = call(&core, "POST", "/api/appointments", Some(&token), Some(booking)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["error"]["code"], "BAD_REQUEST");
        let conn = core.db().unwrap();
        assert_eq!(count_entities(&conn, EntityKind::Appointment).unwrap(), 0);
    }

    #[tokio::test]
    async fn non_numeric_approve_id_is_bad_request() {
        let core = Arc::new(test_state());
        let (status, json) = call(&core, "POST", "/api/professionals/abc/approve", None, None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["error"]["code"], "BAD_REQUEST");
    }

    /// Hashes only once released, so a registration can be held mid-hash.
    struct GatedVerifier {
        inner: Pbkdf2Verifier,
        started: StdMutex<Option<oneshot::Sender<()>>>,
        release: StdMutex<mpsc::Receiver<()>>,
    }

    impl CredentialVerifier for GatedVerifier {
        fn hash(&self, password: &str) -> String {
            if let Some(tx) = self.started.lock().unwrap().take() {
                let _ = tx.send(());
            }
            let _ = self.release.lock().unwrap().recv();
            self.inner.hash(password)
        }

        fn verify(&self, password: &str, stored: &str) -> bool {
            self.inner.verify(password, stored)
        }
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn directory_reads_proceed_while_registration_hashes() {
        let (started_tx, started_rx) = oneshot::channel();
        let (release_tx, release_rx) = mpsc::channel();
        let verifier = GatedVerifier {
            inner: Pbkdf2Verifier::new(1_000),
            started: StdMutex::new(Some(started_tx)),
            release: StdMutex::new(release_rx),
        };
        let core = Arc::new(CoreState::new(
            open_memory_database().unwrap(),
            Arc::new(verifier),
            NphilSource::new("http://127.0.0.1:9/").unwrap(),
            Duration::from_secs(60),
        ));

        let registering = {
            let core = core.clone();
            tokio::spawn(async move {
                call(&core, "POST", "/api/register", None, Some(patient("musu@x.lr"))).await
            })
        };
        started_rx.await.unwrap();

        let (status, _) = tokio::time::timeout(
            Duration::from_secs(5),
            call(&core, "GET", "/api/facilities", None, None),
        )
        .await
        .expect("facility listing blocked behind password hashing");
        assert_eq!(status, StatusCode::OK);

        release_tx.send(()).unwrap();
        let (status, json) = registering.await.unwrap();
        assert_eq!(status, StatusCode::CREATED, "{json}");
    }

    #[tokio::test]
    async fn wrong_password_is_rejected() {
        let core = Arc::new(test_state());
        register(&core, patient("musu@x.lr")).await;
        let (status, json) = call(
            &core,
            "POST",
            "/api/login",
            None,
            Some(json!({ "email": "musu@x.lr", "password": "nope" })),
        )
        .await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(json["error"]["code"], "INVALID_CREDENTIALS");
    }

    #[tokio::test]
    async fn approval_gates_directory_and_booking() {
        let core = Arc::new(test_state());
        register(&core, patient("musu@x.lr")).await;
        let prof = register(&core, professional("amara@x.lr", "Pediatrics")).await;
        let prof_id = prof["id"].as_i64().unwrap();
        assert_eq!(prof["is_approved"], false);
        let token = login(&core, "musu@x.lr").await;

        let (_, listing) = call(&core, "GET", "/api/professionals?specialty=pediatrics", None, None).await;
        assert_eq!(listing["professionals"].as_array().unwrap().len(), 0);
        assert_eq!(listing["counties"].as_array().unwrap().len(), 15);

        let booking = json!({
            "professional_id": prof_id,
            "appointment_date": "2025-07-01T09:30:00",
            "appointment_type": "virtual"
        });
        let (status, _) = call(&core, "POST", "/api/appointments", Some(&token), Some(booking.clone())).await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let uri = format!("/api/professionals/{prof_id}/approve");
        let (status, json) = call(&core, "POST", &uri, None, None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["approved"], true);

        let (_, listing) = call(&core, "GET", "/api/professionals?specialty=pediatrics", None, None).await;
        assert_eq!(listing["professionals"][0]["name"], "Dr. Amara");
        assert_eq!(listing["specializations"], json!(["Pediatrics"]));

        let (status, appt) = call(&core, "POST", "/api/appointments", Some(&token), Some(booking)).await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(appt["status"], "scheduled");
        assert_eq!(appt["appointment_type"], "virtual");

        let (_, mine) = call(&core, "GET", "/api/appointments", Some(&token), None).await;
        assert_eq!(mine["appointments"].as_array().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn approving_unknown_id_reports_false() {
        let core = Arc::new(test_state());
        let (status, json) = call(&core, "POST", "/api/professionals/999/approve", None, None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["approved"], false);
    }

    #[tokio::test]
    async fn protected_routes_require_token() {
        let core = Arc::new(test_state());
        for (method, uri) in [
            ("GET", "/api/appointments"),
            ("GET", "/api/prescriptions"),
            ("GET", "/api/admin"),
            ("POST", "/api/logout"),
            ("POST", "/api/language/kpelle"),
        ] {
            let (status, json) = call(&core, method, uri, Some("bogus-token"), None).await;
            assert_eq!(status, StatusCode::UNAUTHORIZED, "{method} {uri}");
            assert_eq!(json["error"]["code"], "AUTH_REQUIRED");
        }

        let (status, _) = call(&core, "POST", "/api/assessments", None, Some(json!({ "mood_score": 4 }))).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn assessment_and_admin_overview() {
        let core = Arc::new(test_state());
        register(&core, patient("musu@x.lr")).await;
        register(&core, professional("amara@x.lr", "Psychiatry")).await;
        let token = login(&core, "musu@x.lr").await;

        let (status, saved) = call(
            &core,
            "POST",
            "/api/assessments",
            Some(&token),
            Some(json!({ "mood_score": 4, "anxiety_level": 7, "depression_indicators": ["fatigue"] })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(saved["depression_indicators"], json!(["fatigue"]));

        let (status, overview) = call(&core, "GET", "/api/admin", Some(&token), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(overview["total_users"], 2);
        assert_eq!(overview["pending_professionals"].as_array().unwrap().len(), 1);

        let (_, prescriptions) = call(&core, "GET", "/api/prescriptions", Some(&token), None).await;
        assert_eq!(prescriptions["prescriptions"], json!([]));
    }

    #[tokio::test]
    async fn facilities_and_education_after_seed() {
        let core = Arc::new(test_state());
        crate::seed::seed_baseline(&core.db().unwrap(), &[]).unwrap();

        let (_, json) = call(&core, "GET", "/api/facilities?service=surg&county=Montserrado", None, None).await;
        assert_eq!(json["facilities"][0]["name"], "JFK Medical Center");
        assert_eq!(json["facility_types"], json!(["hospital"]));

        let (_, json) = call(&core, "GET", "/api/education?category=malaria", None, None).await;
        assert_eq!(json["articles"][0]["title"], "Malaria Prevention in Liberia");

        let (_, json) = call(&core, "GET", "/api/education?language=Kpelle", None, None).await;
        assert_eq!(json["articles"], json!([]));
    }

    #[tokio::test]
    async fn chat_follows_session_language() {
        let core = Arc::new(test_state());
        register(&core, patient("musu@x.lr")).await;
        let token = login(&core, "musu@x.lr").await;
        let msg = json!({ "message": "Hello there" });

        let (_, anon) = call(&core, "POST", "/api/chat", None, Some(msg.clone())).await;
        assert_eq!(anon["language"], "english");

        let (status, _) = call(&core, "POST", "/api/language/klingon", Some(&token), None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        let (status, _) = call(&core, "POST", "/api/language/kpelle", Some(&token), None).await;
        assert_eq!(status, StatusCode::OK);

        let (_, reply) = call(&core, "POST", "/api/chat", Some(&token), Some(msg)).await;
        assert_eq!(reply["language"], "kpelle");
        assert_eq!(reply["response"], crate::chatbot::reply("hello", "kpelle"));

        let (_, langs) = call(&core, "GET", "/api/languages", Some(&token), None).await;
        assert_eq!(langs["current"], "kpelle");
        assert_eq!(langs["languages"].as_array().unwrap().len(), 20);
        assert_eq!(langs["strings"]["doctor"], "Dokita");
    }

    #[tokio::test]
    async fn translate_basic_phrase() {
        let core = Arc::new(test_state());
        let (_, json) = call(
            &core,
            "POST",
            "/api/translate",
            None,
            Some(json!({ "text": "Thank you", "language": "liberian_english" })),
        )
        .await;
        assert_eq!(json["translated"], "Thank you o");
        assert_eq!(json["original"], "Thank you");
    }

    #[tokio::test]
    async fn logout_revokes_token() {
        let core = Arc::new(test_state());
        register(&core, patient("musu@x.lr")).await;
        let token = login(&core, "musu@x.lr").await;

        let (status, _) = call(&core, "POST", "/api/logout", Some(&token), None).await;
        assert_eq!(status, StatusCode::NO_CONTENT);
        let (status, _) = call(&core, "GET", "/api/appointments", Some(&token), None).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn responses_carry_request_id() {
        let core = Arc::new(test_state());
        let req = Request::builder().uri("/api/health").body(Body::empty()).unwrap();
        let response = api_router(core).oneshot(req).await.unwrap();
        assert!(response.headers().contains_key(middleware::audit::REQUEST_ID_HEADER));
    }
}
