use reqwest::header::{HeaderMap, HeaderValue, REFERER};
use reqwest::redirect::Policy;
use reqwest::Client;

/// Builds the shared outbound client. The static Referer, when configured,
/// rides on every request as a client default header.
pub struct HttpClientConfig {
  pub referer: Option<String>,
}

impl HttpClientConfig {
  pub fn to_client(self) -> Result<Client, reqwest::Error> {
    let HttpClientConfig { referer } = self;
    let mut client_builder = reqwest::ClientBuilder::new();

    if let Some(referer_value) = referer {
      if let Ok(header_value) = HeaderValue::from_str(&referer_value) {
        let mut headers = HeaderMap::new();
        headers.insert(REFERER, header_value);
        client_builder = client_builder.default_headers(headers);
      }
    }

    let client = client_builder.redirect(Policy::limited(5)).build()?;

    Ok(client)
  }
}
