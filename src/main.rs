use actix_cors::Cors;
use actix_web::http::header;
use actix_web::middleware::DefaultHeaders;
use actix_web::{web, App, HttpServer};
use clap::Parser;
use fetch_proxy::http_client::HttpClientConfig;
use fetch_proxy::proxy_handler::{routes, AppState};
use fetch_proxy::settings::ProxySettings;
use fetch_proxy::std_logger;
use log::{info, LevelFilter};
use std::fs;
use std::io::{ErrorKind, Result};

#[derive(Parser, Debug)]
#[command(name = "fetch_proxy", about = "Pass-through URL proxy with optional API key injection")]
struct CliArgs {
  /// Bind address for the HTTP server.
  #[arg(long, default_value = "0.0.0.0")]
  bind: String,

  /// Listen port.
  #[arg(long, default_value_t = 8080)]
  port: u16,

  /// Actix worker count.
  #[arg(long, default_value_t = 4)]
  workers: usize,

  /// Optional YAML settings file (api_key, referer, key_hosts).
  #[arg(long)]
  settings: Option<String>,

  #[arg(long, default_value = "info")]
  log_level: LevelFilter,
}

#[actix_web::main]
async fn main() -> Result<()> {
  let args = CliArgs::parse();
  std_logger::init(args.log_level);

  let settings = match &args.settings {
    Some(path) => {
      let settings_fd = fs::File::open(path)?;
      ProxySettings::load_from_file(&settings_fd)?
    }
    None => ProxySettings::default(),
  };
  let settings = settings.apply_env();

  let http_client = HttpClientConfig {
    referer: settings.referer.clone(),
  }
  .to_client()
  .map_err(|error| std::io::Error::new(ErrorKind::Other, error))?;

  let state = web::Data::new(AppState {
    settings,
    http_client,
  });

  info!("Listening on {}:{}", args.bind, args.port);

  HttpServer::new(move || {
    App::new()
      .app_data(state.clone())
      .wrap(DefaultHeaders::new().add((header::ACCESS_CONTROL_ALLOW_ORIGIN, "*")))
      .wrap(
        Cors::default()
          .allow_any_origin()
          .allow_any_header()
          .allowed_methods(vec!["GET"])
          .send_wildcard(),
      )
      .configure(routes)
  })
  .workers(args.workers)
  .bind((args.bind, args.port))?
  .run()
  .await
}
