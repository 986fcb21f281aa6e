use std::sync::Arc;

use actix_web::dev::{self, Service, ServiceRequest, ServiceResponse};
use actix_web::http::header::HeaderMap;
use futures_core::future::LocalBoxFuture;
use log::debug;

use crate::cors;
use crate::proxy_service::forwarder::Forwarder;

/// Entry point for every inbound request. Preflights are answered here;
/// anything else goes through the forwarder.
pub struct NoCorsService {
  pub(super) forwarder: Arc<Forwarder>,
}

impl Service<ServiceRequest> for NoCorsService {
  type Response = ServiceResponse;
  type Error = actix_web::Error;
  type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

  dev::always_ready!();

  fn call(&self, req: ServiceRequest) -> Self::Future {
    let (http_request, payload) = req.into_parts();

    let mut cors_headers = HeaderMap::new();
    cors::echo_origin(http_request.headers(), &mut cors_headers);

    if cors::is_preflight(http_request.method(), http_request.headers()) {
      debug!("Answering preflight for {}", http_request.path());
      cors::allow_preflight(http_request.headers(), &mut cors_headers);
      let response = cors::preflight_response(cors_headers);

      return Box::pin(async move { Ok(ServiceResponse::new(http_request, response)) });
    }

    let forwarder = self.forwarder.clone();

    Box::pin(async move {
      let response = forwarder.forward(&http_request, payload, cors_headers).await;
      Ok(ServiceResponse::new(http_request, response))
    })
  }
}
