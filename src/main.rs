mod args;
mod cors;
mod error;
mod http_client;
mod proxy_service;
mod std_logger;
mod upstream;

use std::io::{Error, ErrorKind, Result};
use std::process;
use std::sync::Arc;

use actix_web::middleware::Logger;
use actix_web::{App, HttpServer};
use log::{info, LevelFilter};

use args::{Args, USAGE};
use http_client::HttpClientConfig;
use proxy_service::director::Director;
use proxy_service::forwarder::Forwarder;
use proxy_service::proxy_factory::NoCorsServiceFactory;
use std_logger::StdLogger;

#[actix_web::main]
async fn main() {
  let Some(args) = Args::from_env() else {
    eprintln!("{}", USAGE);
    process::exit(1);
  };

  if let Err(err) = serve(args).await {
    eprintln!("server finished, error: {}", err);
    process::exit(1);
  }
}

async fn serve(args: Args) -> Result<()> {
  let Args {
    listen_address,
    dest_host,
  } = args;

  StdLogger::init(LevelFilter::Info).map_err(|err| Error::new(ErrorKind::Other, err))?;

  let http_client = HttpClientConfig::default().to_client();

  info!("Forwarding {} to {}", listen_address, dest_host);
  let forwarder = Arc::new(Forwarder::new(http_client, Director::new(dest_host)));

  HttpServer::new(move || {
    App::new()
      .wrap(Logger::new("%a \"%r\" %s %b %Dms"))
      .default_service(NoCorsServiceFactory::create(forwarder.clone()))
  })
  .bind((listen_address.host(), listen_address.port()))
  .map_err(|err| Error::new(err.kind(), format!("cannot listen on {}: {}", listen_address, err)))?
  .run()
  .await
}
