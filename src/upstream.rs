use std::fmt::{Display, Formatter};
use std::str::FromStr;

use http::uri::Authority;

use crate::error::AddressError;

/// Single backend every forwarded request is sent to. Always reached over
/// plaintext HTTP.
#[derive(PartialEq, Debug, Clone)]
pub struct UpstreamTarget {
  authority: Authority,
}

/// Address the proxy listens on. An empty host binds every interface.
#[derive(PartialEq, Eq, Debug, Clone)]
pub struct ListenAddress {
  host: Box<str>,
  port: u16,
}

impl UpstreamTarget {
  pub const SCHEME: &'static str = "http";

  pub fn authority(&self) -> &Authority {
    &self.authority
  }
}

impl ListenAddress {
  const ANY_HOST: &'static str = "0.0.0.0";

  pub fn host(&self) -> &str {
    if self.host.is_empty() {
      Self::ANY_HOST
    } else {
      &self.host
    }
  }

  pub fn port(&self) -> u16 {
    self.port
  }
}

#[inline]
fn split_host_port(value: &str) -> Result<(&str, u16), AddressError> {
  let (host, port) = value
    .rsplit_once(':')
    .ok_or_else(|| AddressError::MissingPort(value.to_string()))?;

  let port = port
    .parse::<u16>()
    .map_err(|_| AddressError::InvalidPort(value.to_string()))?;

  Ok((host, port))
}

impl FromStr for UpstreamTarget {
  type Err = AddressError;

  fn from_str(value: &str) -> Result<Self, Self::Err> {
    let (host, _) = split_host_port(value)?;
    if value.contains('@') {
      return Err(AddressError::UserInfo(value.to_string()));
    }
    if host.is_empty() {
      return Err(AddressError::MissingHost(value.to_string()));
    }

    let authority =
      Authority::from_str(value).map_err(|err| AddressError::InvalidHost(value.to_string(), err))?;

    Ok(UpstreamTarget { authority })
  }
}

impl FromStr for ListenAddress {
  type Err = AddressError;

  fn from_str(value: &str) -> Result<Self, Self::Err> {
    let (host, port) = split_host_port(value)?;
    let host = host
      .strip_prefix('[')
      .and_then(|h| h.strip_suffix(']'))
      .unwrap_or(host);

    Ok(ListenAddress {
      host: Box::from(host),
      port,
    })
  }
}

impl Display for UpstreamTarget {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    write!(f, "{}://{}", Self::SCHEME, self.authority)
  }
}

impl Display for ListenAddress {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    if self.host().contains(':') {
      write!(f, "[{}]:{}", self.host(), self.port)
    } else {
      write!(f, "{}:{}", self.host(), self.port)
    }
  }
}
