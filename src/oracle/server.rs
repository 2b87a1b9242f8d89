//! HTTP front end of the decode oracle
//!
//! `GET /<hex-script>` returns the oracle JSON for that script. Every request
//! gets a `200 OK` JSON body; malformed input is reported in the body, never as
//! a transport error.

use super::{respond_to_hex, OracleResponse};
use axum::extract::rejection::PathRejection;
use axum::extract::Path;
use axum::http::Uri;
use axum::routing::get;
use axum::{Json, Router};
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tracing::{debug, info};

/// Failure kind for requests that do not name a single script
pub const BAD_REQUEST_KIND: &str = "BadRequest";

/// Build the oracle router
pub fn router() -> Router {
    Router::new()
        .route("/", get(decode_empty).fallback(unsupported))
        .route("/{script}", get(decode_script).fallback(unsupported))
        .fallback(unsupported)
}

async fn decode_empty() -> Json<OracleResponse> {
    debug!("GET /");
    Json(respond_to_hex(""))
}

async fn decode_script(script: Result<Path<String>, PathRejection>) -> Json<OracleResponse> {
    match script {
        Ok(Path(script)) => {
            debug!("GET /{}", script);
            Json(respond_to_hex(&script))
        }
        Err(rejection) => Json(OracleResponse::failure(
            BAD_REQUEST_KIND,
            format!("Unreadable script path: {}", rejection.body_text()),
        )),
    }
}

async fn unsupported(uri: Uri) -> Json<OracleResponse> {
    debug!("Unsupported oracle request: {}", uri.path());
    Json(OracleResponse::failure(
        BAD_REQUEST_KIND,
        "Expected GET /<hex-encoded-script>",
    ))
}

/// Bind and serve the oracle until Ctrl-C
pub async fn serve(bind: SocketAddr) -> std::io::Result<()> {
    let listener = TcpListener::bind(bind).await?;
    info!("SLP decode oracle listening on http://{}", listener.local_addr()?);

    axum::serve(listener, router())
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("SLP decode oracle stopped");
    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_err() {
        // Without a signal handler, run until the process is killed
        std::future::pending::<()>().await;
    }
}
