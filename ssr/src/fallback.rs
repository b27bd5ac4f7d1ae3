use axum::{
    body::Body,
    extract::State,
    http::{Request, Response, StatusCode, Uri},
    response::{IntoResponse, Response as AxumResponse},
};
use state::server::AppState;
use tower::ServiceExt;
use tower_http::services::ServeDir;

use crate::app::shell;

/// Serves files from the site root, rendering the app (and its 404 route)
/// for anything that isn't one.
pub async fn file_and_error_handler(
    uri: Uri,
    State(state): State<AppState>,
    req: Request<Body>,
) -> AxumResponse {
    let root = state.leptos_options.site_root.clone();
    match get_static_file(uri, &root).await {
        Ok(res) if res.status() == StatusCode::OK => res.into_response(),
        Ok(_) => {
            let handler = leptos_axum::render_app_to_stream(move || {
                shell(state.leptos_options.clone())
            });
            handler(req).await.into_response()
        }
        Err(e) => e.into_response(),
    }
}

async fn get_static_file(uri: Uri, root: &str) -> Result<Response<Body>, (StatusCode, String)> {
    let req = Request::builder()
        .uri(uri)
        .body(Body::empty())
        .map_err(|err| (StatusCode::BAD_REQUEST, err.to_string()))?;
    ServeDir::new(root)
        .oneshot(req)
        .await
        .map(IntoResponse::into_response)
        .map_err(|err| {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Something went wrong: {err}"),
            )
        })
}
