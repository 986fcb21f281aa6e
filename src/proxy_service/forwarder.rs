use actix_web::dev::Payload;
use actix_web::http::header::HeaderMap;
use actix_web::{HttpRequest, HttpResponse};
use bytes::{Bytes, BytesMut};
use futures_core::Stream;
use futures_util::StreamExt;
use hyper::{Body, Response};
use log::{debug, error};

use crate::error::ProxyError;
use crate::http_client::UpstreamClient;
use crate::proxy_service::director::Director;
use crate::proxy_service::relay;

/// Reverse proxy to the single upstream. Owns the pooled client and the
/// director; the only part of the proxy that ever talks to the upstream.
pub struct Forwarder {
  http_client: UpstreamClient,
  director: Director,
}

impl Forwarder {
  pub fn new(http_client: UpstreamClient, director: Director) -> Self {
    Self {
      http_client,
      director,
    }
  }

  pub async fn forward(&self, http: &HttpRequest, payload: Payload, cors_headers: HeaderMap) -> HttpResponse {
    match self.round_trip(http, payload).await {
      Ok(upstream) => {
        debug!("Upstream answered {} {} with {}", http.method(), http.path(), upstream.status());
        relay::relay_response(http.method(), upstream, cors_headers)
      }
      Err(err) => {
        error!("Proxy request to {} failed: {}", self.director.upstream(), err);
        relay::failure_response(&err, cors_headers)
      }
    }
  }

  async fn round_trip(&self, http: &HttpRequest, payload: Payload) -> Result<Response<Body>, ProxyError> {
    let body = read_payload(payload).await?;
    let request = self.director.direct(http, body)?;

    Ok(self.http_client.request(request).await?)
  }
}

async fn read_payload(mut payload: Payload) -> Result<Bytes, ProxyError> {
  let (size, _) = payload.size_hint();
  let mut body_buffer = BytesMut::with_capacity(size);

  while let Some(chunk) = payload.next().await {
    body_buffer.extend_from_slice(&chunk?);
  }

  Ok(body_buffer.freeze())
}
