//! Request logging middleware.

use axum::{extract::Request, middleware::Next, response::Response};
use std::time::Instant;
use tracing::{debug, warn};

/// Log every request with its outcome and latency.
pub async fn logging_middleware(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_owned();
    let start = Instant::now();

    let response = next.run(request).await;

    let status = response.status();
    let latency = start.elapsed();

    if status.is_server_error() {
        warn!(%method, path, %status, ?latency, "Request failed");
    } else {
        debug!(%method, path, %status, ?latency, "Request handled");
    }

    response
}
