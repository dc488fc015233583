use axum::{
    Router,
    http::{HeaderValue, Method, header},
    middleware,
    response::Response,
};
use tower_http::cors::CorsLayer;
use tower_sessions::{Expiry, MemoryStore, SessionManagerLayer, cookie::time::Duration};
use waduk_core::not_found_envelope;

use crate::logging::logging_middleware;
use crate::middleware::error_details::expose_error_details;
use crate::middleware::jwt::jwt_auth;
use crate::middleware::role::{require_admin, require_petugas};
use crate::middleware::session::require_login;
use crate::modules::pages::router::init_pages_router;
use crate::state::AppState;

/// Route groups supplied by the application, each mounted behind its guards.
///
/// - `api`: nested under `/api`, protected by the token guard
/// - `public`: no guard
/// - `member`: any logged-in user
/// - `petugas`: logged-in users with role 2
/// - `admin`: logged-in users with role 1
#[derive(Default)]
pub struct AppRoutes {
    pub api: Option<Router<AppState>>,
    pub public: Option<Router<AppState>>,
    pub member: Option<Router<AppState>>,
    pub petugas: Option<Router<AppState>>,
    pub admin: Option<Router<AppState>>,
}

impl AppRoutes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn api(mut self, routes: Router<AppState>) -> Self {
        self.api = Some(routes);
        self
    }

    pub fn public(mut self, routes: Router<AppState>) -> Self {
        self.public = Some(routes);
        self
    }

    pub fn member(mut self, routes: Router<AppState>) -> Self {
        self.member = Some(routes);
        self
    }

    pub fn petugas(mut self, routes: Router<AppState>) -> Self {
        self.petugas = Some(routes);
        self
    }

    pub fn admin(mut self, routes: Router<AppState>) -> Self {
        self.admin = Some(routes);
        self
    }
}

pub fn init_router(state: AppState, routes: AppRoutes) -> Router {
    let mut app = Router::new().merge(init_pages_router());

    if let Some(api) = routes.api {
        app = app.nest("/api", api);
    }
    if let Some(public) = routes.public {
        app = app.merge(public);
    }
    if let Some(member) = routes.member {
        app = app.merge(member.route_layer(middleware::from_fn_with_state(
            state.clone(),
            require_login,
        )));
    }
    if let Some(petugas) = routes.petugas {
        app = app.merge(
            petugas
                .route_layer(middleware::from_fn(require_petugas))
                .route_layer(middleware::from_fn_with_state(state.clone(), require_login)),
        );
    }
    if let Some(admin) = routes.admin {
        app = app.merge(
            admin
                .route_layer(middleware::from_fn(require_admin))
                .route_layer(middleware::from_fn_with_state(state.clone(), require_login)),
        );
    }

    app.fallback(not_found)
        .with_state(state.clone())
        .layer(middleware::from_fn_with_state(state.clone(), jwt_auth))
        .layer(session_layer(&state))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            expose_error_details,
        ))
        .layer(cors_layer(&state))
        .layer(middleware::from_fn_with_state(state, logging_middleware))
}

fn cors_layer(state: &AppState) -> CorsLayer {
    let allowed_origins: Vec<HeaderValue> = state
        .settings
        .cors
        .allowed_origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    CorsLayer::new()
        .allow_origin(allowed_origins)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE, header::ACCEPT])
        .allow_credentials(true)
}

fn session_layer(state: &AppState) -> SessionManagerLayer<MemoryStore> {
    let config = &state.settings.session;
    SessionManagerLayer::new(state.sessions.clone())
        .with_name(config.cookie_name.clone())
        .with_secure(config.secure_cookie)
        .with_expiry(Expiry::OnInactivity(Duration::seconds(config.lifetime)))
}

async fn not_found() -> Response {
    not_found_envelope()
}
