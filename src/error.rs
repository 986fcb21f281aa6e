use actix_web::error::PayloadError;
use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use thiserror::Error;

/// Rejected `host:port` command line value.
#[derive(Debug, Error)]
pub enum AddressError {
  #[error("'{0}' is not of the form host:port")]
  MissingPort(String),
  #[error("'{0}' does not contain a valid port")]
  InvalidPort(String),
  #[error("'{0}' does not name a host")]
  MissingHost(String),
  #[error("'{0}' must not carry user info")]
  UserInfo(String),
  #[error("'{0}' is not a valid host: {1}")]
  InvalidHost(String, http::uri::InvalidUri),
}

/// Failure while forwarding a single request upstream.
#[derive(Debug, Error)]
pub enum ProxyError {
  #[error("reading request body failed: {0}")]
  Payload(#[from] PayloadError),
  #[error("invalid upstream request: {0}")]
  Request(#[from] http::Error),
  #[error("upstream request failed: {0}")]
  Upstream(#[from] hyper::Error),
}

impl ResponseError for ProxyError {
  fn status_code(&self) -> StatusCode {
    match self {
      ProxyError::Payload(_) => StatusCode::BAD_REQUEST,
      ProxyError::Request(_) | ProxyError::Upstream(_) => StatusCode::BAD_GATEWAY,
    }
  }

  fn error_response(&self) -> HttpResponse {
    HttpResponse::new(self.status_code())
  }
}
