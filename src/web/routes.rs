// src/web/routes.rs
use crate::{
    state::AppState,
    web::{auth_handlers, certificate_handlers, internship_handlers, project_handlers},
};
use axum::{
    routing::{delete, get, post},
    Router,
};

pub const LIVENESS_MESSAGE: &str = "Server is running ✅";

pub fn create_router(app_state: AppState) -> Router {
    // --- Rotas da API (todas JSON) ---
    let api_routes = Router::new()
        .route("/login", post(auth_handlers::handle_login))
        .route(
            "/certificates",
            get(certificate_handlers::handle_list_certificates)
                .post(certificate_handlers::handle_create_certificate),
        )
        .route("/certificates/{id}", delete(certificate_handlers::handle_delete_certificate))
        .route(
            "/projects",
            get(project_handlers::handle_list_projects).post(project_handlers::handle_create_project),
        )
        .route("/projects/{id}", delete(project_handlers::handle_delete_project))
        .route(
            "/internships",
            get(internship_handlers::handle_list_internships)
                .post(internship_handlers::handle_create_internship),
        )
        .route("/internships/{id}", delete(internship_handlers::handle_delete_internship));

    // --- Router Final ---
    Router::new()
        .route("/", get(|| async { LIVENESS_MESSAGE }))
        .nest("/api", api_routes)
        .with_state(app_state)
}
