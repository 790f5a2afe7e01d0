/**
 * API Route Handlers
 *
 * Routes for the group and note operations. Every route here sits behind
 * the auth middleware.
 *
 * # Routes
 *
 * - `GET /api/{user_id}` - Group summaries
 * - `GET /api/{user_id}/notes` - Notes per group
 * - `POST /api` - Create a group
 * - `PATCH /api/{user_id}/{group_id}` - Append a note
 * - `POST /api/{user_id}/{group_id}` - Append a note (same handler)
 * - `DELETE /api/{user_id}/{group_id}` - Delete a group
 */

use axum::{
    middleware::from_fn_with_state,
    routing::{get, post},
    Router,
};

use crate::backend::middleware::auth_middleware;
use crate::backend::notes::handlers::{append_note, create_group, delete_group, list_groups, list_notes};
use crate::backend::server::state::AppState;

/// Configure API routes
///
/// The middleware is attached with `route_layer`, so only requests that
/// match one of these routes are checked; unknown paths still fall through
/// to the 404 handler without a token.
pub fn configure_api_routes(router: Router<AppState>, app_state: AppState) -> Router<AppState> {
    let api = Router::new()
        .route("/api", post(create_group))
        .route("/api/{user_id}", get(list_groups))
        .route("/api/{user_id}/notes", get(list_notes))
        .route(
            "/api/{user_id}/{group_id}",
            post(append_note).patch(append_note).delete(delete_group),
        )
        .route_layer(from_fn_with_state(app_state, auth_middleware));

    router.merge(api)
}
