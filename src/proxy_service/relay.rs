use std::convert::Infallible;

use actix_web::body::{self, BodyStream, SizedStream};
use actix_web::http::header::{HeaderMap, CONNECTION, CONTENT_LENGTH};
use actix_web::http::{Method, StatusCode};
use actix_web::{HttpResponse, HttpResponseBuilder, ResponseError};
use bytes::Bytes;
use futures_util::stream;
use hyper::body::HttpBody;
use hyper::{Body, Response};

use crate::error::ProxyError;
use crate::proxy_service::HopByHop;

/// Turns the upstream answer into the caller's response. `cors_headers` go
/// first, upstream headers of the same name follow them.
///
/// `Content-Length` is written by the server from the body size, so for
/// answers without a body (HEAD, 304) the upstream's announced length is
/// carried over explicitly.
pub fn relay_response(method: &Method, upstream: Response<Body>, cors_headers: HeaderMap) -> HttpResponse {
  let (parts, upstream_body) = upstream.into_parts();

  let mut response = HttpResponse::build(parts.status);
  append_all(&mut response, cors_headers);

  let hop_by_hop = HopByHop::from_connection(parts.headers.get_all(CONNECTION));

  for (name, value) in &parts.headers {
    if *name != CONTENT_LENGTH && !hop_by_hop.contains(name) {
      response.append_header((name.clone(), value.clone()));
    }
  }

  if *method == Method::HEAD {
    return match announced_length(&parts.headers) {
      Some(size) => response.body(SizedStream::new(size, stream::empty::<Result<Bytes, Infallible>>())),
      None => response.body(body::None::new()),
    };
  }

  if parts.status == StatusCode::NOT_MODIFIED {
    if let Some(length) = parts.headers.get(CONTENT_LENGTH) {
      response.append_header((CONTENT_LENGTH, length.clone()));
    }
    return response.body(body::None::new());
  }

  if parts.status.is_informational() || parts.status == StatusCode::NO_CONTENT {
    return response.body(body::None::new());
  }

  match HttpBody::size_hint(&upstream_body).exact() {
    Some(size) => response.body(SizedStream::new(size, upstream_body)),
    None => response.body(BodyStream::new(upstream_body)),
  }
}

/// Error answer that still carries the origin echo.
pub fn failure_response(error: &ProxyError, cors_headers: HeaderMap) -> HttpResponse {
  let mut response = error.error_response();
  let headers = response.headers_mut();

  for (name, value) in cors_headers.into_iter() {
    headers.append(name, value);
  }

  response
}

#[inline]
fn announced_length(headers: &http::HeaderMap) -> Option<u64> {
  headers
    .get(CONTENT_LENGTH)
    .and_then(|value| value.to_str().ok())
    .and_then(|value| value.trim().parse::<u64>().ok())
}

#[inline]
fn append_all(response: &mut HttpResponseBuilder, headers: HeaderMap) {
  for (name, value) in headers.into_iter() {
    response.append_header((name, value));
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use actix_web::body::{BodySize, MessageBody};
  use actix_web::http::header::{HeaderValue, ACCESS_CONTROL_ALLOW_ORIGIN};

  fn upstream(status: StatusCode, content_length: &'static str, body: &'static str) -> Response<Body> {
    Response::builder()
      .status(status)
      .header(CONTENT_LENGTH, content_length)
      .header("x-upstream", "1")
      .body(Body::from(body))
      .unwrap()
  }

  #[test]
  fn head_keeps_the_announced_length() {
    let response = relay_response(
      &Method::HEAD,
      upstream(StatusCode::OK, "2", ""),
      HeaderMap::new(),
    );

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.body().size(), BodySize::Sized(2));
    assert_eq!(response.headers().get("x-upstream").unwrap(), "1");
  }

  #[test]
  fn not_modified_keeps_the_announced_length() {
    let response = relay_response(
      &Method::GET,
      upstream(StatusCode::NOT_MODIFIED, "42", ""),
      HeaderMap::new(),
    );

    assert_eq!(response.body().size(), BodySize::None);
    assert_eq!(response.headers().get(CONTENT_LENGTH).unwrap(), "42");
  }

  #[test]
  fn sized_body_is_relayed_with_its_length() {
    let response = relay_response(
      &Method::GET,
      upstream(StatusCode::OK, "5", "hello"),
      HeaderMap::new(),
    );

    assert_eq!(response.body().size(), BodySize::Sized(5));
    assert!(response.headers().get(CONTENT_LENGTH).is_none());
  }

  #[test]
  fn failure_keeps_origin_echo() {
    let mut cors_headers = HeaderMap::new();
    cors_headers.append(ACCESS_CONTROL_ALLOW_ORIGIN, HeaderValue::from_static("http://a"));
    let error = ProxyError::from(http::Uri::builder().scheme("not a scheme").build().unwrap_err());

    let response = failure_response(&error, cors_headers);

    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    assert_eq!(
      response.headers().get(ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
      "http://a"
    );
  }
}
