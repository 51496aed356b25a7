/* src/cli/core/src/config/tests/validation.rs */

use std::io::Write;

use super::*;

#[test]
fn rejects_unknown_locale_prefix() {
  let err = toml::from_str::<BusbarConfig>("[site]\nlocale_prefix = \"sometimes\"\n").unwrap_err();
  assert!(err.to_string().contains("unknown variant"));
}

#[test]
fn rejects_empty_upstreams() {
  let config: BusbarConfig = toml::from_str("[cms]\nurl = \" \"\n").unwrap();
  assert!(config.validate().unwrap_err().to_string().contains("cms.url"));

  let config: BusbarConfig = toml::from_str("[wordpress]\napi_base = \"\"\n").unwrap();
  assert!(config.validate().unwrap_err().to_string().contains("wordpress.api_base"));
}

#[test]
fn rejects_zero_timeout() {
  let config: BusbarConfig = toml::from_str("[server]\nupstream_timeout_secs = 0\n").unwrap();
  assert!(config.validate().is_err());
}

#[test]
fn find_config_walks_upward() {
  let tmp = tempfile::tempdir().unwrap();
  let nested = tmp.path().join("apps/site/src");
  std::fs::create_dir_all(&nested).unwrap();
  let mut f = std::fs::File::create(tmp.path().join(CONFIG_FILE)).unwrap();
  writeln!(f, "[server]\nport = 9000").unwrap();

  let found = find_busbar_config(&nested).unwrap();
  assert_eq!(found, tmp.path().canonicalize().unwrap().join(CONFIG_FILE));
  assert_eq!(load_busbar_config(&found).unwrap().server.port, 9000);
}

#[test]
fn load_reports_invalid_file() {
  let tmp = tempfile::tempdir().unwrap();
  let path = tmp.path().join(CONFIG_FILE);
  std::fs::write(&path, "[site]\nlocale_prefix = \"maybe\"\n").unwrap();
  let err = load_busbar_config(&path).unwrap_err();
  assert!(format!("{err:#}").contains("unknown variant"));

  std::fs::write(&path, "[server\n").unwrap();
  assert!(load_busbar_config(&path).unwrap_err().to_string().contains("failed to parse"));
}
