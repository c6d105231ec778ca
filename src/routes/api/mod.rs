pub mod jobs;
pub mod preferences;
pub mod session;

use axum::Router;
use axum::middleware;
use axum::routing::{get, patch, post, put};

use crate::AppState;
use crate::auth::require_session;

pub fn router(state: AppState) -> Router {
    let sessions = state.sessions.clone();

    let protected = Router::new()
        // Catalog
        .route("/jobs", get(jobs::list))
        .route("/jobs/{id}", get(jobs::get))
        // Preferences
        .route("/preferences", get(preferences::get))
        .route("/preferences/filters", patch(preferences::set_filters))
        .route(
            "/preferences/filters/reset",
            post(preferences::reset_filters),
        )
        .route("/preferences/view-mode", put(preferences::set_view_mode))
        .route("/preferences/sort", put(preferences::set_sort_by))
        // Saved jobs
        .route("/saved", get(preferences::saved))
        .route(
            "/saved/{id}",
            get(preferences::is_saved)
                .put(preferences::save)
                .delete(preferences::unsave),
        )
        .layer(middleware::from_fn_with_state(
            sessions.clone(),
            require_session,
        ))
        .with_state(state);

    // Sign-in must stay reachable without a session.
    let open = Router::new()
        .route("/session", post(session::sign_in).delete(session::sign_out))
        .with_state(sessions);

    Router::new().nest("/api/v1", protected.merge(open))
}
