/* src/cli/core/src/config/tests/parsing.rs */

use std::time::Duration;

use busbar_engine::{Indexing, LocalePrefix, SiteEnv};

use super::*;

#[test]
fn parse_empty_config() {
  let config: BusbarConfig = toml::from_str("").unwrap();
  assert!(config.site.url.is_none());
  assert_eq!(config.site.locale_prefix, LocalePrefix::Never);
  assert!(config.site.indexing.is_none());
  assert_eq!(config.server.port, 3000);
  assert_eq!(config.server.host, "0.0.0.0");
  assert_eq!(config.cms.url, "http://localhost:1337");
  assert_eq!(config.wordpress.api_base, "http://localhost:8080/wp-json/wp/v2");
  assert!(!config.log.json);
  assert_eq!(config.log.filter, "info");
  assert!(config.validate().is_ok());
}

#[test]
fn parse_full_config() {
  let toml_str = r#"
[site]
url = "https://www.yhflexiblebusbar.com"
locale_prefix = "always"
indexing = "block"

[server]
host = "127.0.0.1"
port = 8080
upstream_timeout_secs = 3

[cms]
url = "https://cms.example.com"
token = "abc"

[wordpress]
api_base = "https://wp.example.com/wp-json/wp/v2"

[log]
json = true
filter = "busbar=debug"
"#;
  let config: BusbarConfig = toml::from_str(toml_str).unwrap();
  assert_eq!(config.listen_addr(), "127.0.0.1:8080");
  assert_eq!(config.site.locale_prefix, LocalePrefix::Always);
  assert_eq!(config.indexing(&SiteEnv::default()), Indexing::Block);
  assert!(config.log.json);

  let content = config.content_config();
  assert_eq!(content.cms_url, "https://cms.example.com");
  assert_eq!(content.cms_token.as_deref(), Some("abc"));
  assert_eq!(content.wordpress_api, "https://wp.example.com/wp-json/wp/v2");
  assert_eq!(content.timeout, Duration::from_secs(3));
}

#[test]
fn env_overrides_file_values() {
  let mut config: BusbarConfig = toml::from_str("[cms]\nurl = \"http://file\"\n").unwrap();
  config
    .apply_env(|name| match name {
      "STRAPI_BASE_URL" => Some("http://env-cms".into()),
      "STRAPI_API_TOKEN" => Some("tok".into()),
      "WORDPRESS_API_INTERNAL" => Some("".into()),
      "PORT" => Some("4100".into()),
      _ => None,
    })
    .unwrap();
  assert_eq!(config.cms.url, "http://env-cms");
  assert_eq!(config.cms.token.as_deref(), Some("tok"));
  assert_eq!(config.wordpress.api_base, "http://localhost:8080/wp-json/wp/v2");
  assert_eq!(config.server.port, 4100);
}

#[test]
fn bad_port_env_is_an_error() {
  let mut config = BusbarConfig::default();
  let err = config.apply_env(|name| (name == "PORT").then(|| "http".to_string())).unwrap_err();
  assert!(err.to_string().contains("PORT"));
}

#[test]
fn site_url_from_file_when_env_unset() {
  let config: BusbarConfig =
    toml::from_str("[site]\nurl = \"https://staging.example.com/\"\n").unwrap();
  let urls = config.site_urls(SiteEnv::default()).unwrap();
  assert_eq!(urls.origin(), "https://staging.example.com");

  let env =
    SiteEnv { public_site_url: Some("https://env.example.com".into()), ..SiteEnv::default() };
  assert_eq!(config.site_urls(env).unwrap().origin(), "https://env.example.com");

  let empty = SiteEnv {
    public_site_url: Some(String::new()),
    deployment_url: Some("preview.vercel.app".into()),
    ..SiteEnv::default()
  };
  assert_eq!(config.site_urls(empty).unwrap().origin(), "https://staging.example.com");
}

#[test]
fn indexing_follows_environment_unless_configured() {
  let config = BusbarConfig::default();
  assert_eq!(config.indexing(&SiteEnv::default()), Indexing::Allow);
  let preview = SiteEnv { preview: true, ..SiteEnv::default() };
  assert_eq!(config.indexing(&preview), Indexing::Block);

  let config: BusbarConfig = toml::from_str("[site]\nindexing = \"allow\"\n").unwrap();
  assert_eq!(config.indexing(&preview), Indexing::Allow);
}

#[test]
fn empty_token_is_unset() {
  let config: BusbarConfig = toml::from_str("[cms]\ntoken = \"\"\n").unwrap();
  assert!(config.content_config().cms_token.is_none());
}
