//! Role guards for the operator (petugas) and admin areas.
//!
//! Both expect [`require_login`](crate::middleware::session::require_login)
//! to have run first and read the [`CurrentUser`] it stored. A request
//! without one, or whose user has another role, is redirected to
//! `/forbidden`.
//!
//! ```rust,ignore
//! let petugas = Router::new()
//!     .route("/petugas/laporan", get(laporan))
//!     .route_layer(middleware::from_fn(require_petugas))
//!     .route_layer(middleware::from_fn_with_state(state.clone(), require_login));
//! ```

use axum::{extract::Request, middleware::Next, response::Response};
use waduk_models::{CurrentUser, Role};

use crate::middleware::{FORBIDDEN_PATH, redirect_found};

pub async fn require_petugas(req: Request, next: Next) -> Response {
    require_role(req, next, Role::Petugas).await
}

pub async fn require_admin(req: Request, next: Next) -> Response {
    require_role(req, next, Role::Admin).await
}

/// True when a user is present and holds exactly `role`.
pub fn check_role(user: Option<&CurrentUser>, role: Role) -> bool {
    user.is_some_and(|CurrentUser(user)| user.has_role(role))
}

async fn require_role(req: Request, next: Next, role: Role) -> Response {
    let user = req.extensions().get::<CurrentUser>();
    if !check_role(user, role) {
        tracing::warn!(
            security.event = "role_denied",
            required = role.code(),
            user.id = ?user.map(|u| u.0.id),
            user.role = ?user.map(|u| u.0.role),
            "Access denied"
        );
        return redirect_found(FORBIDDEN_PATH);
    }

    next.run(req).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use waduk_models::User;

    fn current(role: i32) -> CurrentUser {
        CurrentUser(User {
            id: 1,
            username: "tester".to_string(),
            role,
            waduk_id: None,
        })
    }

    #[test]
    fn test_check_role_matches() {
        assert!(check_role(Some(&current(2)), Role::Petugas));
        assert!(check_role(Some(&current(1)), Role::Admin));
    }

    #[test]
    fn test_check_role_mismatch() {
        assert!(!check_role(Some(&current(1)), Role::Petugas));
        assert!(!check_role(Some(&current(2)), Role::Admin));
        assert!(!check_role(Some(&current(5)), Role::Admin));
    }

    #[test]
    fn test_check_role_without_user() {
        assert!(!check_role(None, Role::Petugas));
        assert!(!check_role(None, Role::Admin));
    }
}
