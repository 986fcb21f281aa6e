use http::header::{
  HeaderName, HeaderValue, CONNECTION, PROXY_AUTHENTICATE, PROXY_AUTHORIZATION, TE, TRAILER,
  TRANSFER_ENCODING, UPGRADE,
};

pub mod director;
pub mod forwarder;
pub mod no_cors_service;
pub mod proxy_factory;
pub mod relay;

const KEEP_ALIVE: HeaderName = HeaderName::from_static("keep-alive");
const PROXY_CONNECTION: HeaderName = HeaderName::from_static("proxy-connection");

/// Connection-scoped headers a proxy must not pass along, including any
/// extra names the message lists in its own `Connection` header.
pub struct HopByHop {
  listed: Vec<HeaderName>,
}

impl HopByHop {
  const FIXED: [HeaderName; 9] = [
    CONNECTION,
    PROXY_CONNECTION,
    KEEP_ALIVE,
    PROXY_AUTHENTICATE,
    PROXY_AUTHORIZATION,
    TE,
    TRAILER,
    TRANSFER_ENCODING,
    UPGRADE,
  ];

  pub fn from_connection<'a, I>(connection: I) -> Self
  where
    I: IntoIterator<Item = &'a HeaderValue>,
  {
    let listed = connection
      .into_iter()
      .filter_map(|value| value.to_str().ok())
      .flat_map(|value| value.split(','))
      .map(str::trim)
      .filter(|token| !token.is_empty())
      .flat_map(|token| HeaderName::try_from(token).ok())
      .collect();

    HopByHop { listed }
  }

  pub fn contains(&self, name: &HeaderName) -> bool {
    Self::FIXED.contains(name) || self.listed.contains(name)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn fixed_names_are_always_hop_by_hop() {
    let hop_by_hop = HopByHop::from_connection(std::iter::empty());
    assert!(hop_by_hop.contains(&TRANSFER_ENCODING));
    assert!(hop_by_hop.contains(&HeaderName::from_static("keep-alive")));
    assert!(!hop_by_hop.contains(&http::header::ORIGIN));
  }

  #[test]
  fn names_listed_in_connection_are_hop_by_hop() {
    let values = [
      HeaderValue::from_static("keep-alive, X-Session"),
      HeaderValue::from_static(" x-trace ,"),
    ];
    let hop_by_hop = HopByHop::from_connection(values.iter());

    assert!(hop_by_hop.contains(&HeaderName::from_static("x-session")));
    assert!(hop_by_hop.contains(&HeaderName::from_static("x-trace")));
    assert!(!hop_by_hop.contains(&HeaderName::from_static("x-other")));
  }
}
