//! Embedded stylesheet and other static assets.
//!
//! In release mode assets are embedded into the binary at compile time.
//! In debug mode rust-embed reads them from `static/` at runtime.

use axum::{
    extract::Path,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use rust_embed::RustEmbed;

#[derive(RustEmbed)]
#[folder = "static/"]
#[include = "*.css"]
#[include = "*.ico"]
#[include = "*.png"]
#[include = "*.svg"]
struct StaticAssets;

/// Serve an embedded asset by path, or 404 if it does not exist.
pub async fn serve_static(Path(path): Path<String>) -> Response {
    match StaticAssets::get(&path) {
        Some(content) => {
            let mime = mime_guess::from_path(&path).first_or_octet_stream();
            (
                [
                    (header::CONTENT_TYPE, mime.to_string()),
                    (header::CACHE_CONTROL, "public, max-age=3600".to_string()),
                ],
                content.data,
            )
                .into_response()
        }
        None => StatusCode::NOT_FOUND.into_response(),
    }
}
