/* src/server/engine/rust/src/lib.rs */

pub mod encode;
pub mod locale;
pub mod metadata;
pub mod origin;
pub mod path;
pub mod robots;
pub mod routes;
pub mod sitemap;
pub mod urls;

// Public API re-exports
pub use locale::{Locale, UnknownLocale, pick};
pub use metadata::{PageContent, PageMetadata, SITE_NAME, layout_alternates, strip_html};
pub use origin::{SiteEnv, get_site_url, normalize_origin, resolve_site_url};
pub use path::{
  RouteMatch, get_localized_path, localized_path, match_path, normalize_path, page_key_from_path,
  translate_path,
};
pub use robots::{Indexing, RobotsPolicy};
pub use routes::{RouteDef, RouteParams, RouteTable, TableReport, path_report, validate_table};
pub use sitemap::{
  ChangeFrequency, SITEMAP_PATH, SitemapEntry, SitemapPage, build_sitemap, render_sitemap_xml,
  site_pages,
};
pub use urls::{
  HreflangAlternates, LocalePrefix, SiteUrls, X_DEFAULT, build_localized_url,
  generate_canonical_url, generate_hreflang_alternates_for_metadata,
};
