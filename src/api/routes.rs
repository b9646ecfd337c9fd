//! Route configuration.

use axum::Router;
use axum::routing::{get, post};

use super::handlers;
use super::state::AppState;
use super::static_assets;
use crate::db::Database;

/// Build routes with generic database type.
///
/// This macro reduces boilerplate when registering handlers that are generic
/// over the Database trait. It applies the turbofish operator automatically.
macro_rules! routes {
    ($D:ty => {
        $($method:ident $path:literal => $($handler:ident)::+),* $(,)?
    }) => {{
        let router = Router::new();
        $(
            let router = router.route($path, $method($($handler)::+::<$D>));
        )*
        router
    }};
}

/// Create the router for the intake pages, health check and static assets.
pub fn create_router<D: Database + 'static>(state: AppState<D>) -> Router {
    // System routes (non-generic)
    let system_routes = Router::new()
        .route("/health", get(handlers::health))
        .route("/static/{*path}", get(static_assets::serve_static));

    // Intake routes (generic over Database)
    let intake_routes = routes!(D => {
        get "/" => handlers::intake_form,
        post "/submit" => handlers::submit_intake,
    });

    system_routes.merge(intake_routes).with_state(state)
}
