/* src/cli/core/src/serve.rs */

use std::path::Path;

use anyhow::{Result, anyhow};
use busbar_engine::SiteEnv;
use busbar_server::SiteServer;
use busbar_server_axum::IntoAxumRouter;

use crate::config::BusbarConfig;
use crate::ui;

pub async fn run_serve(config: &BusbarConfig, config_path: Option<&Path>) -> Result<()> {
  let env = SiteEnv::from_env();
  let indexing = config.indexing(&env);
  let urls = config.site_urls(env)?;
  let content = config.content_config();
  let addr = config.listen_addr();

  ui::banner("serve");
  match config_path {
    Some(p) => ui::ok(&format!("config {}", p.display())),
    None => ui::warn("no busbar.toml found, using defaults"),
  }
  ui::field("origin", urls.origin());
  ui::field("cms", &content.cms_url);
  ui::field("wordpress", &content.wordpress_api);
  ui::field("indexing", indexing.as_str());
  ui::arrow(&format!("listening on http://{addr}"));
  ui::blank();

  tracing::info!(
    origin = urls.origin(),
    cms = %content.cms_url,
    wordpress = %content.wordpress_api,
    token = content.cms_token.is_some(),
    indexing = indexing.as_str(),
    "starting site backend"
  );

  SiteServer::new()
    .site_urls(urls)
    .content(content)
    .indexing(indexing)
    .serve(&addr)
    .await
    .map_err(|e| anyhow!("{e}"))
}
