//! CORS handshake rules: preflight detection, origin echo and the
//! synthesized "allow everything" preflight answer.
//!
//! Every rule copies header values one by one, so a caller that sends two
//! `Origin` lines gets two `Access-Control-Allow-Origin` lines back, in the
//! same order.

use actix_web::http::header::{
  HeaderMap, HeaderName, ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS,
  ACCESS_CONTROL_ALLOW_ORIGIN, ACCESS_CONTROL_REQUEST_HEADERS, ACCESS_CONTROL_REQUEST_METHOD,
  ORIGIN,
};
use actix_web::http::Method;
use actix_web::HttpResponse;

/// A preflight is an `OPTIONS` request carrying `Access-Control-Request-Method`.
pub fn is_preflight(method: &Method, headers: &HeaderMap) -> bool {
  method == Method::OPTIONS && headers.contains_key(ACCESS_CONTROL_REQUEST_METHOD)
}

/// Copies each inbound `Origin` into `Access-Control-Allow-Origin`.
pub fn echo_origin(request: &HeaderMap, response: &mut HeaderMap) {
  copy_values(request, &ORIGIN, response, ACCESS_CONTROL_ALLOW_ORIGIN);
}

/// Grants whatever methods and headers the preflight asked for.
pub fn allow_preflight(request: &HeaderMap, response: &mut HeaderMap) {
  copy_values(
    request,
    &ACCESS_CONTROL_REQUEST_METHOD,
    response,
    ACCESS_CONTROL_ALLOW_METHODS,
  );
  copy_values(
    request,
    &ACCESS_CONTROL_REQUEST_HEADERS,
    response,
    ACCESS_CONTROL_ALLOW_HEADERS,
  );
}

/// Terminal `204 No Content` answer for a preflight.
pub fn preflight_response(headers: HeaderMap) -> HttpResponse {
  let mut response = HttpResponse::NoContent();

  for (name, value) in headers.into_iter() {
    response.append_header((name, value));
  }

  response.finish()
}

#[inline]
fn copy_values(from: &HeaderMap, from_name: &HeaderName, to: &mut HeaderMap, to_name: HeaderName) {
  for value in from.get_all(from_name) {
    to.append(to_name.clone(), value.clone());
  }
}
