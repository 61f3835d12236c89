use actix_web::http::StatusCode;
use actix_web::ResponseError;
use std::fmt::{Display, Formatter};

/// Everything that can terminate a proxy request. Both variants are final
/// for the request; nothing is retried.
#[derive(Debug)]
pub enum ProxyError {
  MissingUrl,
  UpstreamFetch(reqwest::Error),
}

impl Display for ProxyError {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    match self {
      ProxyError::MissingUrl => f.write_str("Missing URL parameter"),
      ProxyError::UpstreamFetch(err) => write!(f, "Error fetching resource: {err}"),
    }
  }
}

impl ResponseError for ProxyError {
  fn status_code(&self) -> StatusCode {
    match self {
      ProxyError::MissingUrl => StatusCode::BAD_REQUEST,
      ProxyError::UpstreamFetch(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn missing_url_maps_to_bad_request() {
    let err = ProxyError::MissingUrl;

    assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(err.to_string(), "Missing URL parameter");
  }
}
