use crate::key_policy;
use crate::proxy_error::ProxyError;
use crate::settings::ProxySettings;
use actix_web::web::Query;
use actix_web::{web, HttpRequest, HttpResponse};
use bytes::Bytes;
use log::{error, info};
use reqwest::header::CONTENT_TYPE;
use reqwest::Client;
use std::collections::HashMap;

const URL_PARAM: &str = "url";

/// Read-only per-process state shared across workers.
pub struct AppState {
  pub settings: ProxySettings,
  pub http_client: Client,
}

pub fn routes(cfg: &mut web::ServiceConfig) {
  cfg.route("/proxy", web::get().to(proxy));
}

/// `GET /proxy?url=<percent-encoded target>` — decode, validate, rewrite,
/// fetch once, relay status, content type and body verbatim.
pub async fn proxy(
  req: HttpRequest,
  state: web::Data<AppState>,
) -> Result<HttpResponse, ProxyError> {
  let query_map = Query::<HashMap<String, String>>::from_query(req.query_string())
    .map(|query| query.0)
    .unwrap_or_default();

  let target = match query_map.get(URL_PARAM) {
    Some(value) if !value.is_empty() => value.as_str(),
    _ => return Err(ProxyError::MissingUrl),
  };

  let outbound_url = key_policy::rewrite_target(&state.settings, target);
  info!("Fetching URL: {}", target);

  let upstream = state
    .http_client
    .get(outbound_url.as_ref())
    .send()
    .await
    .map_err(|err| fetch_error(target, err))?;

  let status = upstream.status();
  let content_type = upstream.headers().get(CONTENT_TYPE).cloned();

  let body: Bytes = upstream
    .bytes()
    .await
    .map_err(|err| fetch_error(target, err))?;

  let mut response = HttpResponse::build(status);

  if let Some(content_type_value) = content_type {
    response.insert_header((CONTENT_TYPE, content_type_value));
  }

  Ok(response.body(body))
}

fn fetch_error(target: &str, err: reqwest::Error) -> ProxyError {
  error!("Error fetching URL '{}': {}", target, err);
  ProxyError::UpstreamFetch(err)
}
