use actix_web::http::header::{HeaderMap as SourceHeaders, CONNECTION, USER_AGENT};
use actix_web::HttpRequest;
use bytes::Bytes;
use http::header::{HeaderMap, HeaderValue};
use http::uri::PathAndQuery;
use http::{Request, Uri};
use hyper::Body;

use crate::error::ProxyError;
use crate::proxy_service::HopByHop;
use crate::upstream::UpstreamTarget;

/// Points an inbound request at the upstream. Method, path, query and
/// end-to-end headers travel unchanged; only scheme and authority are
/// replaced.
pub struct Director {
  upstream: UpstreamTarget,
}

impl Director {
  pub fn new(upstream: UpstreamTarget) -> Self {
    Self { upstream }
  }

  pub fn upstream(&self) -> &UpstreamTarget {
    &self.upstream
  }

  pub fn direct(&self, source_request: &HttpRequest, body: Bytes) -> Result<Request<Body>, ProxyError> {
    let mut request = Request::builder()
      .method(source_request.method().clone())
      .uri(self.upstream_uri(source_request)?)
      .body(Body::from(body))?;

    *request.headers_mut() = Self::upstream_headers(source_request.headers());

    Ok(request)
  }

  fn upstream_uri(&self, source_request: &HttpRequest) -> Result<Uri, ProxyError> {
    let path_and_query = source_request
      .uri()
      .path_and_query()
      .cloned()
      .unwrap_or_else(|| PathAndQuery::from_static("/"));

    let uri = Uri::builder()
      .scheme(UpstreamTarget::SCHEME)
      .authority(self.upstream.authority().clone())
      .path_and_query(path_and_query)
      .build()?;

    Ok(uri)
  }

  fn upstream_headers(source_headers: &SourceHeaders) -> HeaderMap {
    let hop_by_hop = HopByHop::from_connection(source_headers.get_all(CONNECTION));
    let mut headers = HeaderMap::with_capacity(source_headers.len());

    for (name, value) in source_headers.iter() {
      if !hop_by_hop.contains(name) {
        headers.append(name.clone(), value.clone());
      }
    }

    // Keeps the client from sending a user agent of its own.
    if !headers.contains_key(USER_AGENT) {
      headers.insert(USER_AGENT, HeaderValue::from_static(""));
    }

    headers
  }
}
