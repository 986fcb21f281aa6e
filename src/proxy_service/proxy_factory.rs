use std::sync::Arc;

use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use futures_core::future::LocalBoxFuture;

use crate::proxy_service::forwarder::Forwarder;
use crate::proxy_service::no_cors_service::NoCorsService;

pub struct NoCorsServiceFactory {
  pub forwarder: Arc<Forwarder>,
}

impl ServiceFactory<ServiceRequest> for NoCorsServiceFactory {
  type Response = ServiceResponse;
  type Error = actix_web::Error;
  type Config = ();
  type Service = NoCorsService;
  type InitError = ();
  type Future = LocalBoxFuture<'static, Result<Self::Service, Self::InitError>>;

  fn new_service(&self, _: Self::Config) -> Self::Future {
    let service = NoCorsService {
      forwarder: self.forwarder.clone(),
    };

    Box::pin(async move { Ok(service) })
  }
}

impl NoCorsServiceFactory {
  pub fn create(forwarder: Arc<Forwarder>) -> Self {
    Self { forwarder }
  }
}
