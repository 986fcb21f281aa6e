use clap::Parser;

use crate::upstream::{ListenAddress, UpstreamTarget};

pub const USAGE: &str =
  "usage: nocors <listen_address> <dest_host> (example: nocors localhost:8080 localhost:9090)";

/// Reverse proxy answering every CORS preflight with an "allow" response.
#[derive(Parser, Debug)]
#[command(name = "nocors", disable_help_flag = true, disable_version_flag = true)]
pub struct Args {
  /// host:port to accept browser traffic on
  pub listen_address: ListenAddress,
  /// host:port of the upstream server
  pub dest_host: UpstreamTarget,
}

impl Args {
  /// Parses process arguments. Anything but two valid `host:port` values
  /// yields `None`.
  pub fn from_env() -> Option<Args> {
    Args::try_parse().ok()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn accepts_listen_and_destination() {
    let args = Args::try_parse_from(["nocors", "localhost:8080", "localhost:9090"]).unwrap();
    assert_eq!(args.listen_address.host(), "localhost");
    assert_eq!(args.listen_address.port(), 8080);
    assert_eq!(args.dest_host.authority().as_str(), "localhost:9090");
  }

  #[test]
  fn rejects_missing_arguments() {
    assert!(Args::try_parse_from(["nocors"]).is_err());
    assert!(Args::try_parse_from(["nocors", "localhost:8080"]).is_err());
  }

  #[test]
  fn rejects_extra_arguments() {
    assert!(Args::try_parse_from(["nocors", "localhost:8080", "localhost:9090", "x"]).is_err());
  }

  #[test]
  fn rejects_flags() {
    assert!(Args::try_parse_from(["nocors", "--help"]).is_err());
    assert!(Args::try_parse_from(["nocors", "-V", "localhost:8080", "localhost:9090"]).is_err());
  }

  #[test]
  fn rejects_malformed_addresses() {
    assert!(Args::try_parse_from(["nocors", "localhost", "localhost:9090"]).is_err());
    assert!(Args::try_parse_from(["nocors", "localhost:8080", "localhost"]).is_err());
  }
}
