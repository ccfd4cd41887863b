use axum::body::{to_bytes, Body};
use axum::http::Request;
use axum::middleware::Next;
use axum::response::Response;
use chrono::{FixedOffset, Utc};
use contracts::shared::price::group_thousands;

/// Maceió, UTC-3
const LOCAL_OFFSET_SECONDS: i32 = -3 * 3600;

fn local_time() -> String {
    let now = Utc::now();
    match FixedOffset::east_opt(LOCAL_OFFSET_SECONDS) {
        Some(offset) => now.with_timezone(&offset).format("%H:%M:%S").to_string(),
        None => now.format("%H:%M:%S").to_string(),
    }
}

/// Простой middleware для логирования запросов: время, длительность,
/// реальный размер тела, статус, метод, путь
pub async fn request_logger(req: Request<Body>, next: Next) -> Response {
    let start = std::time::Instant::now();
    let method = req.method().clone();
    let uri = req.uri().clone();

    let response = next.run(req).await;

    let (parts, body) = response.into_parts();

    let bytes = match to_bytes(body, usize::MAX).await {
        Ok(b) => b,
        Err(e) => {
            tracing::warn!("failed to buffer response body for {}: {}", uri.path(), e);
            println!(
                "\x1b[33m{}\x1b[0m | {:>5}ms | {:>12} | {} {:>6} {}",
                local_time(),
                start.elapsed().as_millis(),
                "error",
                parts.status.as_u16(),
                method,
                uri.path()
            );
            return Response::from_parts(parts, Body::default());
        }
    };

    // голубой для 200, коричневый для остальных
    let color_code = if parts.status.is_success() { "36" } else { "33" };

    println!(
        "\x1b[{}m{}\x1b[0m | {:>5}ms | {:>12} | {} {:>6} {}",
        color_code,
        local_time(),
        start.elapsed().as_millis(),
        group_thousands(bytes.len() as u64),
        parts.status.as_u16(),
        method,
        uri.path()
    );

    Response::from_parts(parts, Body::from(bytes))
}
