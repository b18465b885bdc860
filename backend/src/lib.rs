pub mod config;
pub mod error;

use axum::http::{header, HeaderValue, Response};
use axum::routing::get;
use axum::Router;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::services::fs::ServeFileSystemResponseBody;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

pub use config::HostConfig;
pub use error::HostError;

pub const APK_ROUTE: &str = "/downloads/daanveer.apk";
pub const APK_MIME: &str = "application/vnd.android.package-archive";
pub const APK_DISPOSITION: &str = "attachment; filename=\"daanveer.apk\"";

async fn health_check() -> &'static str {
    "OK"
}

/// Only a successful APK response is relabelled; a 404 stays a plain 404.
fn mark_apk_download<B>(mut response: Response<B>) -> Response<B> {
    if response.status().is_success() {
        let headers = response.headers_mut();
        headers.insert(header::CONTENT_TYPE, HeaderValue::from_static(APK_MIME));
        headers.insert(
            header::CONTENT_DISPOSITION,
            HeaderValue::from_static(APK_DISPOSITION),
        );
    }
    response
}

pub fn build_router(config: &HostConfig) -> Router {
    let apk = ServiceBuilder::new()
        .map_response(mark_apk_download::<ServeFileSystemResponseBody>)
        .service(ServeFile::new(&config.apk_path));

    // Client-side routes like /privacy get the SPA shell with a 200.
    let site = ServeDir::new(&config.dist_dir).fallback(ServeFile::new(config.index_path()));

    Router::new()
        .route("/health", get(health_check))
        .route_service(APK_ROUTE, apk)
        .fallback_service(site)
        .layer(SetResponseHeaderLayer::if_not_present(
            header::X_CONTENT_TYPE_OPTIONS,
            HeaderValue::from_static("nosniff"),
        ))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}

pub async fn serve(config: HostConfig) -> Result<(), HostError> {
    config.validate()?;
    let app = build_router(&config);

    let listener = TcpListener::bind(config.addr)
        .await
        .map_err(|source| HostError::Bind { addr: config.addr, source })?;

    tracing::info!(
        dist = %config.dist_dir.display(),
        apk = %config.apk_path.display(),
        "Starting server on {}",
        config.addr
    );
    axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(HostError::Serve)
}
