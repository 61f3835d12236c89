use serde::{Deserialize, Serialize};
use std::env;
use std::fs::File;
use std::io::ErrorKind;

const DEFAULT_KEY_HOST: &str = "drive.google.com";

/// Process-wide proxy settings, loaded once at startup and immutable afterwards.
#[derive(Serialize, Deserialize, PartialEq, Debug, Clone)]
pub struct ProxySettings {
  pub api_key: Option<String>,
  pub referer: Option<String>,
  #[serde(default = "default_key_hosts")]
  pub key_hosts: Vec<String>,
}

fn default_key_hosts() -> Vec<String> {
  vec![String::from(DEFAULT_KEY_HOST)]
}

impl Default for ProxySettings {
  fn default() -> Self {
    ProxySettings {
      api_key: None,
      referer: None,
      key_hosts: default_key_hosts(),
    }
  }
}

impl ProxySettings {
  pub fn load_from_file(file: &File) -> Result<ProxySettings, std::io::Error> {
    let settings: ProxySettings =
      serde_yaml::from_reader(file).map_err(|err| std::io::Error::new(ErrorKind::Other, err))?;

    Ok(settings)
  }

  /// Environment variables win over file values.
  pub fn apply_env(mut self) -> Self {
    if let Ok(api_key) = env::var("PROXY_API_KEY") {
      self.api_key = Some(api_key);
    }

    if let Ok(referer) = env::var("PROXY_REFERER") {
      self.referer = Some(referer);
    }

    self
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn parses_full_settings_yaml() {
    let yaml = "api_key: K123\nreferer: https://app.example.net\nkey_hosts:\n  - drive.google.com\n  - docs.google.com\n";
    let settings: ProxySettings = serde_yaml::from_str(yaml).unwrap();

    assert_eq!(settings.api_key.as_deref(), Some("K123"));
    assert_eq!(settings.referer.as_deref(), Some("https://app.example.net"));
    assert_eq!(settings.key_hosts, vec!["drive.google.com", "docs.google.com"]);
  }

  #[test]
  fn missing_key_hosts_falls_back_to_default() {
    let settings: ProxySettings = serde_yaml::from_str("api_key: K123\n").unwrap();

    assert_eq!(settings.key_hosts, vec![DEFAULT_KEY_HOST]);
    assert_eq!(settings.referer, None);
  }

  #[test]
  fn empty_document_yields_defaults() {
    let settings: ProxySettings = serde_yaml::from_str("{}").unwrap();

    assert_eq!(settings, ProxySettings::default());
  }
}
