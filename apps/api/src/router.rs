use std::sync::Arc;

use axum::{routing::get, Router};
use chrono::NaiveDate;

use appointment_cell::{appointment_routes, AppointmentService};
use auth_cell::{auth_routes, AuthService};
use dashboard_cell::{dashboard_routes, DashboardService};
use doctor_cell::{doctor_routes, DoctorService};
use document_cell::{document_routes, DocumentCatalog};
use patient_cell::{create_patient_router, PatientService};
use shared_config::AppConfig;
use shared_database::SessionStore;

/// One service per cell. All protected routers check tokens against the
/// session store owned by `auth`.
pub struct AppState {
    pub auth: Arc<AuthService>,
    pub patients: Arc<PatientService>,
    pub doctors: Arc<DoctorService>,
    pub appointments: Arc<AppointmentService>,
    pub dashboard: Arc<DashboardService>,
    pub documents: Arc<DocumentCatalog>,
}

impl AppState {
    /// Demo registry, roster and a schedule placed on `today`.
    pub fn demo(config: &AppConfig, today: NaiveDate) -> Self {
        let auth = Arc::new(AuthService::from_config(config));
        let patients = Arc::new(PatientService::with_demo_registry());
        let doctors = Arc::new(DoctorService::with_demo_roster());
        let appointments = Arc::new(AppointmentService::with_demo_schedule(doctors.clone(), today));
        let dashboard = Arc::new(DashboardService::new(
            patients.clone(),
            doctors.clone(),
            appointments.clone(),
        ));

        Self {
            auth,
            patients,
            doctors,
            appointments,
            dashboard,
            documents: Arc::new(DocumentCatalog::standard()),
        }
    }

    fn sessions(&self) -> Arc<dyn SessionStore> {
        self.auth.sessions()
    }
}

pub fn create_router(state: AppState) -> Router {
    let sessions = state.sessions();

    Router::new()
        .route("/", get(|| async { "Clinic MIS API is running!" }))
        .nest("/auth", auth_routes(state.auth))
        .nest("/patients", create_patient_router(state.patients, sessions.clone()))
        .nest("/doctors", doctor_routes(state.doctors, sessions.clone()))
        .nest("/appointments", appointment_routes(state.appointments, sessions.clone()))
        .nest("/dashboard", dashboard_routes(state.dashboard, sessions.clone()))
        .nest("/documents", document_routes(state.documents, sessions))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use shared_utils::test_utils::{TestConfig, TestSessions};

    fn app() -> Router {
        let config = TestConfig::default().to_app_config();
        let day = NaiveDate::from_ymd_opt(2024, 9, 18).unwrap();
        create_router(AppState::demo(&config, day))
    }

    async fn body_json(response: axum::response::Response) -> Value {
        let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&body).unwrap()
    }

    async fn login(app: &Router) -> String {
        let request = Request::builder()
            .method("POST")
            .uri("/auth/login")
            .header("Content-Type", "application/json")
            .body(Body::from(
                json!({"email": "admin@clinic.ru", "password": "password"}).to_string(),
            ))
            .unwrap();
        let response = app.clone().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        body_json(response).await["token"].as_str().unwrap().to_string()
    }

    fn authed(uri: &str, token: &str) -> Request<Body> {
        Request::builder()
            .uri(uri)
            .header("Authorization", TestSessions::bearer(token))
            .body(Body::empty())
            .unwrap()
    }

    #[tokio::test]
    async fn root_is_public() {
        let response = app()
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn protected_routes_reject_anonymous_requests() {
        let app = app();

        for uri in ["/patients", "/doctors", "/appointments", "/dashboard", "/documents"] {
            let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
            let response = app.clone().oneshot(request).await.unwrap();
            assert_eq!(response.status(), StatusCode::UNAUTHORIZED, "{uri}");
        }
    }

    #[tokio::test]
    async fn login_token_opens_every_cell() {
        let app = app();
        let token = login(&app).await;

        let response = app.clone().oneshot(authed("/dashboard?date=2024-09-18", &token)).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let dashboard = body_json(response).await;
        assert_eq!(dashboard["total_patients"], 5);
        assert_eq!(dashboard["appointments_today"]["total"], 6);

        let response = app.clone().oneshot(authed("/doctors", &token)).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await["doctors"].as_array().unwrap().len(), 8);

        let response = app.clone().oneshot(authed("/appointments/schedule", &token)).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let response = app.oneshot(authed("/documents", &token)).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await["templates"].as_array().unwrap().len(), 5);
    }

    #[tokio::test]
    async fn dashboard_quick_actions_point_at_live_routes() {
        let app = app();
        let token = login(&app).await;

        for action in dashboard_cell::services::QUICK_ACTIONS.iter().filter(|a| a.method == "GET") {
            let response = app.clone().oneshot(authed(action.route, &token)).await.unwrap();
            assert_eq!(response.status(), StatusCode::OK, "{}", action.route);
        }
    }

    #[tokio::test]
    async fn logout_invalidates_token_across_cells() {
        let app = app();
        let token = login(&app).await;

        let request = Request::builder()
            .method("POST")
            .uri("/auth/logout")
            .header("Authorization", TestSessions::bearer(&token))
            .body(Body::empty())
            .unwrap();
        let response = app.clone().oneshot(request).await.unwrap();
        assert!(response.status().is_success());

        let response = app.oneshot(authed("/patients", &token)).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }
}
