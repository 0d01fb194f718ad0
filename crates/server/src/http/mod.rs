use axum::Router;
use tower_http::trace::TraceLayer;

use crate::{AppState, routes};

#[cfg(feature = "embed-frontend")]
mod frontend;

pub fn router(state: AppState, serve_frontend: bool) -> Router {
    let app = Router::new()
        .merge(routes::logs::router())
        .merge(routes::techs::router());

    mount_frontend(app, serve_frontend)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(feature = "embed-frontend")]
fn mount_frontend(app: Router<AppState>, serve_frontend: bool) -> Router<AppState> {
    use axum::routing::get;

    if !serve_frontend {
        return app;
    }
    app.route("/", get(frontend::serve_frontend_root))
        .route("/{*path}", get(frontend::serve_frontend))
}

#[cfg(not(feature = "embed-frontend"))]
fn mount_frontend(app: Router<AppState>, serve_frontend: bool) -> Router<AppState> {
    if serve_frontend {
        tracing::warn!("Static asset serving requested but this build does not embed the frontend");
    }
    app
}
