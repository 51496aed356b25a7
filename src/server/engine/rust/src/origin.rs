/* src/server/engine/rust/src/origin.rs */

/// Production origin used when nothing else resolves.
pub const FALLBACK_ORIGIN: &str = "https://www.yhflexiblebusbar.com";
pub const DEV_ORIGIN: &str = "http://localhost:3000";

/// Inputs of the origin-resolution policy, usually read from the process environment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SiteEnv {
  /// `NEXT_PUBLIC_SITE_URL`
  pub public_site_url: Option<String>,
  /// `VERCEL_URL`, host only on the platform (e.g. `my-app.vercel.app`)
  pub deployment_url: Option<String>,
  /// `NODE_ENV == "development"`
  pub development: bool,
  /// `VERCEL_ENV == "preview"`
  pub preview: bool,
}

impl SiteEnv {
  pub fn from_env() -> Self {
    Self {
      public_site_url: std::env::var("NEXT_PUBLIC_SITE_URL").ok(),
      deployment_url: std::env::var("VERCEL_URL").ok(),
      development: std::env::var("NODE_ENV").is_ok_and(|v| v.trim() == "development"),
      preview: std::env::var("VERCEL_ENV").is_ok_and(|v| v.trim() == "preview"),
    }
  }
}

/// Resolve the site origin: explicit site URL, then deployment URL (https
/// assumed), then the localhost default in development, then production.
pub fn resolve_site_url(env: &SiteEnv) -> String {
  if let Some(explicit) = non_empty(env.public_site_url.as_deref()) {
    return normalize_origin(explicit);
  }
  if let Some(deployment) = non_empty(env.deployment_url.as_deref()) {
    return normalize_origin(deployment);
  }
  if env.development {
    return DEV_ORIGIN.to_string();
  }
  FALLBACK_ORIGIN.to_string()
}

/// Origin resolved from the current process environment.
pub fn get_site_url() -> String {
  resolve_site_url(&SiteEnv::from_env())
}

fn non_empty(value: Option<&str>) -> Option<&str> {
  value.map(str::trim).filter(|v| !v.is_empty())
}

/// Reduce any URL-ish input to `scheme://host[:port]`.
///
/// Scheme-less input is assumed to be https. Path, query, fragment and
/// userinfo are dropped, scheme and host are lowercased and default ports
/// removed. Anything without a usable host yields [`FALLBACK_ORIGIN`].
pub fn normalize_origin(input: &str) -> String {
  let input = input.trim();
  let (scheme, rest) = match input.split_once("://") {
    Some((s, r)) => (s.to_ascii_lowercase(), r),
    None => ("https".to_string(), input),
  };
  if scheme != "http" && scheme != "https" {
    return FALLBACK_ORIGIN.to_string();
  }

  let authority = rest.split(['/', '?', '#']).next().unwrap_or("");
  let authority = authority.rsplit_once('@').map_or(authority, |(_, host)| host);
  let (host, port) = match authority.rsplit_once(':') {
    Some((h, p)) => (h, Some(p)),
    None => (authority, None),
  };

  let host = host.to_ascii_lowercase();
  let valid_host = !host.is_empty()
    && host
      .chars()
      .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '.' | '_'));
  if !valid_host {
    return FALLBACK_ORIGIN.to_string();
  }

  let port = match port {
    None | Some("") => None,
    Some(p) => match p.parse::<u16>() {
      Ok(n) if (scheme == "https" && n == 443) || (scheme == "http" && n == 80) => None,
      Ok(n) => Some(n),
      Err(_) => return FALLBACK_ORIGIN.to_string(),
    },
  };

  match port {
    Some(n) => format!("{scheme}://{host}:{n}"),
    None => format!("{scheme}://{host}"),
  }
}

/// Join an origin and a path with exactly one slash between them, collapsing
/// duplicate slashes everywhere except in the `://` separator.
pub fn join_url(origin: &str, path: &str) -> String {
  collapse_slashes(&format!("{}/{}", origin.trim_end_matches('/'), path.trim_start_matches('/')))
}

pub fn collapse_slashes(url: &str) -> String {
  let (head, tail) = match url.find("://") {
    Some(idx) => url.split_at(idx + 3),
    None => ("", url),
  };
  let mut out = String::with_capacity(url.len());
  out.push_str(head);
  for ch in tail.chars() {
    if ch == '/' && out.ends_with('/') && out.len() > head.len() {
      continue;
    }
    out.push(ch);
  }
  out
}
