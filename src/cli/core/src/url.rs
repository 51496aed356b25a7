/* src/cli/core/src/url.rs */

use anyhow::{Context, Result, bail};
use busbar_engine::{Locale, RouteParams, SiteUrls};

use crate::ui;

/// Parse repeated `key=value` arguments into route params.
pub fn parse_params(raw: &[String]) -> Result<RouteParams> {
  let mut params = RouteParams::new();
  for pair in raw {
    let (key, value) =
      pair.split_once('=').with_context(|| format!("param \"{pair}\" is not key=value"))?;
    if key.is_empty() {
      bail!("param \"{pair}\" has an empty key");
    }
    params.insert(key, value);
  }
  Ok(params)
}

pub fn run_url(urls: &SiteUrls, route: &str, locale: &str, raw_params: &[String]) -> Result<()> {
  if urls.table().get(route).is_none() {
    let known: Vec<_> = urls.table().keys().collect();
    bail!("unknown route \"{route}\" (known: {})", known.join(", "));
  }
  let locale: Locale = locale.parse()?;
  let params = parse_params(raw_params)?;

  let path = urls.localized_path(route, locale, Some(&params));
  ui::banner("url");
  ui::field("path", &path);
  ui::field("url", &urls.localized_url(route, locale, Some(&params)));
  ui::field("canonical", &urls.canonical_url(&path, locale));
  ui::blank();
  ui::detail("hreflang alternates:");
  for (tag, href) in urls.route_alternates(route, Some(&params)).iter() {
    ui::field(tag, href);
  }
  ui::blank();
  Ok(())
}
