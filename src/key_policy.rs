use crate::settings::ProxySettings;
use reqwest::Url;
use std::borrow::Cow;

const KEY_PARAM: &str = "key";

/// Appends the configured API key as a query parameter when the target host
/// is one of the configured key hosts. Every other input passes through
/// untouched, without a parse round-trip that could re-encode it.
pub fn rewrite_target<'a>(settings: &ProxySettings, target: &'a str) -> Cow<'a, str> {
  let api_key = match &settings.api_key {
    Some(key) => key,
    None => return Cow::Borrowed(target),
  };

  let mut parsed = match Url::parse(target) {
    Ok(url) => url,
    Err(_) => return Cow::Borrowed(target),
  };

  let host_matches = parsed
    .host_str()
    .map(|host| {
      settings
        .key_hosts
        .iter()
        .any(|known| known.eq_ignore_ascii_case(host))
    })
    .unwrap_or(false);

  if !host_matches {
    return Cow::Borrowed(target);
  }

  parsed.query_pairs_mut().append_pair(KEY_PARAM, api_key);
  Cow::Owned(String::from(parsed))
}
