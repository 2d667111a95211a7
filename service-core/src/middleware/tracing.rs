use axum::http::{HeaderMap, HeaderValue};
use axum::{extract::Request, middleware::Next, response::Response};
use uuid::Uuid;

pub const REQUEST_ID_HEADER: &str = "x-request-id";

fn incoming_request_id(headers: &HeaderMap) -> Option<HeaderValue> {
    headers
        .get(REQUEST_ID_HEADER)
        .filter(|v| !v.is_empty() && v.to_str().is_ok())
        .cloned()
}

/// Keeps the caller's `x-request-id` or mints a UUID, so handlers, the trace
/// span and the response all see the same id.
pub async fn request_id_middleware(mut req: Request, next: Next) -> Response {
    let request_id = match incoming_request_id(req.headers()) {
        Some(id) => id,
        None => match HeaderValue::from_str(&Uuid::new_v4().to_string()) {
            Ok(id) => id,
            Err(_) => return next.run(req).await,
        },
    };

    req.headers_mut()
        .insert(REQUEST_ID_HEADER, request_id.clone());

    let mut response = next.run(req).await;
    response.headers_mut().insert(REQUEST_ID_HEADER, request_id);
    response
}
