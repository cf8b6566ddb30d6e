use axum::body::{to_bytes, Body};
use axum::http::Request;
use axum::middleware::Next;
use axum::response::Response;
use chrono::Local;

/// Thousands separated with dots: `1234567` -> `1.234.567`.
pub fn format_number(n: usize) -> String {
    let s = n.to_string();
    let mut result = String::new();
    for (i, ch) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push('.');
        }
        result.push(ch);
    }
    result.chars().rev().collect()
}

/// Cyan for 200, yellow for everything else.
fn status_color(status: u16) -> &'static str {
    if status == 200 {
        "36"
    } else {
        "33"
    }
}

/// Prints one colored line per request: time, duration, body size, status,
/// method and path.
pub async fn request_logger(req: Request<Body>, next: Next) -> Response {
    let start = std::time::Instant::now();
    let method = req.method().clone();
    let uri = req.uri().clone();

    let response = next.run(req).await;
    let (parts, body) = response.into_parts();
    let status = parts.status.as_u16();

    // Read the body to report the real size
    let (size, body) = match to_bytes(body, usize::MAX).await {
        Ok(bytes) => (format_number(bytes.len()), Body::from(bytes)),
        Err(e) => {
            tracing::warn!("Failed to read response body for {}: {}", uri.path(), e);
            ("error".to_string(), Body::default())
        }
    };

    println!(
        "\x1b[{}m{}\x1b[0m | {:>5}ms | {:>12} | {} {:>6} {}",
        status_color(status),
        Local::now().format("%H:%M:%S"),
        start.elapsed().as_millis(),
        size,
        status,
        method,
        uri.path()
    );

    Response::from_parts(parts, body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(0), "0");
        assert_eq!(format_number(999), "999");
        assert_eq!(format_number(1000), "1.000");
        assert_eq!(format_number(1234567), "1.234.567");
    }

    #[test]
    fn test_status_color() {
        assert_eq!(status_color(200), "36");
        assert_eq!(status_color(404), "33");
    }
}
