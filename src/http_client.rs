use std::time::Duration;

use hyper::client::HttpConnector;
use hyper::{Body, Client};

pub type UpstreamClient = Client<HttpConnector, Body>;

pub struct HttpClientConfig {
  pub connect_timeout: Duration,
  pub pool_idle_timeout: Duration,
}

impl Default for HttpClientConfig {
  fn default() -> Self {
    HttpClientConfig {
      connect_timeout: Duration::from_secs(30),
      pool_idle_timeout: Duration::from_secs(90),
    }
  }
}

impl HttpClientConfig {
  /// Plaintext client for upstream traffic. It sends the request URI as
  /// given, never follows redirects, never reads proxy settings from the
  /// environment and adds no headers besides `Host` when one is missing.
  pub fn to_client(self) -> UpstreamClient {
    let HttpClientConfig {
      connect_timeout,
      pool_idle_timeout,
    } = self;

    let mut connector = HttpConnector::new();
    connector.enforce_http(true);
    connector.set_connect_timeout(Some(connect_timeout));

    Client::builder()
      .pool_idle_timeout(pool_idle_timeout)
      .build(connector)
  }
}
