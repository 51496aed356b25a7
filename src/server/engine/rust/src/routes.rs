/* src/server/engine/rust/src/routes.rs */

use std::collections::BTreeSet;

use crate::locale::{Locale, pick};

/// One logical page and its path template per locale.
/// Templates use `{name}` placeholders for dynamic segments.
#[derive(Debug, Clone, Copy)]
pub struct RouteDef {
  pub key: &'static str,
  pub templates: &'static [(Locale, &'static str)],
}

impl RouteDef {
  /// Template for `locale`, falling back to the default locale.
  pub fn template(&self, locale: Locale) -> Option<&'static str> {
    pick(self.templates, locale).copied()
  }
}

const ROUTES: &[RouteDef] = &[
  RouteDef { key: "home", templates: &[(Locale::En, "/"), (Locale::Es, "/")] },
  RouteDef { key: "about", templates: &[(Locale::En, "/about"), (Locale::Es, "/acerca-de")] },
  RouteDef { key: "products", templates: &[(Locale::En, "/products"), (Locale::Es, "/productos")] },
  RouteDef {
    key: "products-category",
    templates: &[
      (Locale::En, "/products/category/{category}"),
      (Locale::Es, "/productos/categoria/{category}"),
    ],
  },
  RouteDef {
    key: "products-detail",
    templates: &[(Locale::En, "/products/{id}"), (Locale::Es, "/productos/{id}")],
  },
  RouteDef {
    key: "solutions",
    templates: &[(Locale::En, "/solutions"), (Locale::Es, "/soluciones")],
  },
  RouteDef {
    key: "solutions-detail",
    templates: &[(Locale::En, "/solutions/{id}"), (Locale::Es, "/soluciones/{id}")],
  },
  RouteDef { key: "services", templates: &[(Locale::En, "/services"), (Locale::Es, "/servicios")] },
  RouteDef { key: "projects", templates: &[(Locale::En, "/projects"), (Locale::Es, "/proyectos")] },
  RouteDef {
    key: "projects-detail",
    templates: &[(Locale::En, "/projects/{id}"), (Locale::Es, "/proyectos/{id}")],
  },
  RouteDef { key: "contact", templates: &[(Locale::En, "/contact"), (Locale::Es, "/contacto")] },
  RouteDef { key: "partners", templates: &[(Locale::En, "/partners"), (Locale::Es, "/socios")] },
  RouteDef { key: "articles", templates: &[(Locale::En, "/articles"), (Locale::Es, "/articulos")] },
  RouteDef {
    key: "articles-detail",
    templates: &[(Locale::En, "/articles/{slug}"), (Locale::Es, "/articulos/{slug}")],
  },
  RouteDef {
    key: "articles-hub",
    templates: &[(Locale::En, "/articles/hub"), (Locale::Es, "/articulos/temas")],
  },
  RouteDef {
    key: "articles-hub-detail",
    templates: &[(Locale::En, "/articles/hub/{slug}"), (Locale::Es, "/articulos/temas/{slug}")],
  },
];

/// Ordered placeholder -> value mapping substituted into a template.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteParams(Vec<(String, String)>);

impl RouteParams {
  pub fn new() -> Self {
    Self(Vec::new())
  }

  /// Builder-style insert; a repeated name overwrites the earlier value in place.
  pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
    self.insert(name, value);
    self
  }

  pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
    let name = name.into();
    let value = value.into();
    match self.0.iter_mut().find(|(n, _)| *n == name) {
      Some(entry) => entry.1 = value,
      None => self.0.push((name, value)),
    }
  }

  pub fn get(&self, name: &str) -> Option<&str> {
    self.0.iter().find(|(n, _)| n == name).map(|(_, v)| v.as_str())
  }

  pub fn contains(&self, name: &str) -> bool {
    self.get(name).is_some()
  }

  pub fn is_empty(&self) -> bool {
    self.0.is_empty()
  }

  pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
    self.0.iter().map(|(n, v)| (n.as_str(), v.as_str()))
  }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for RouteParams {
  fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
    let mut params = Self::new();
    for (k, v) in iter {
      params.insert(k, v);
    }
    params
  }
}

/// Read-only route table. The site uses [`RouteTable::builtin`]; other tables
/// exist for validation tooling and tests.
#[derive(Debug, Clone, Copy)]
pub struct RouteTable {
  routes: &'static [RouteDef],
}

impl RouteTable {
  pub const fn new(routes: &'static [RouteDef]) -> Self {
    Self { routes }
  }

  pub const fn builtin() -> Self {
    Self::new(ROUTES)
  }

  pub fn get(&self, key: &str) -> Option<&'static RouteDef> {
    self.routes.iter().find(|r| r.key == key)
  }

  pub fn routes(&self) -> &'static [RouteDef] {
    self.routes
  }

  pub fn keys(&self) -> impl Iterator<Item = &'static str> {
    self.routes.iter().map(|r| r.key)
  }
}

impl Default for RouteTable {
  fn default() -> Self {
    Self::builtin()
  }
}

/// Placeholder names in template order, e.g. `/a/{x}/b/{y}` -> `["x", "y"]`.
pub fn placeholders(template: &str) -> Vec<&str> {
  let mut names = Vec::new();
  let mut rest = template;
  while let Some(start) = rest.find('{') {
    let after = &rest[start + 1..];
    let Some(end) = after.find('}') else { break };
    names.push(&after[..end]);
    rest = &after[end + 1..];
  }
  names
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct TableReport {
  pub errors: Vec<String>,
  pub warnings: Vec<String>,
  pub route_count: usize,
  pub template_count: usize,
}

impl TableReport {
  pub fn is_valid(&self) -> bool {
    self.errors.is_empty()
  }
}

/// Check that every route covers every locale with a consistent placeholder set.
/// Identical templates across locales are reported as warnings only.
pub fn validate_table(table: &RouteTable) -> TableReport {
  let mut report = TableReport { route_count: table.routes().len(), ..Default::default() };
  let mut seen_keys = BTreeSet::new();

  for route in table.routes() {
    if !seen_keys.insert(route.key) {
      report.errors.push(format!("Duplicate route key: {}", route.key));
    }
    report.template_count += route.templates.len();

    for locale in Locale::ALL {
      if !route.templates.iter().any(|(l, _)| *l == locale) {
        report.errors.push(format!("Missing {locale} path for page: {}", route.key));
      }
    }

    for (locale, template) in route.templates {
      if !template.starts_with('/') {
        report.errors.push(format!("{} ({locale}) must start with '/': {template}", route.key));
      }
    }

    let mut placeholder_sets = route.templates.iter().map(|(l, t)| {
      let mut names = placeholders(t);
      names.sort_unstable();
      (*l, names)
    });
    if let Some((first_locale, first)) = placeholder_sets.next() {
      for (locale, names) in placeholder_sets {
        if names != first {
          report.errors.push(format!(
            "Placeholder mismatch for page {}: {first_locale} has {first:?}, {locale} has {names:?}",
            route.key
          ));
        }
      }
    }

    let mut distinct = BTreeSet::new();
    let duplicates: Vec<&str> =
      route.templates.iter().map(|(_, t)| *t).filter(|t| !distinct.insert(*t)).collect();
    if !duplicates.is_empty() {
      report
        .warnings
        .push(format!("Duplicate paths found for page {}: {}", route.key, duplicates.join(", ")));
    }
  }

  report
}

/// Markdown report of the route table, as printed by `busbar paths`.
pub fn path_report(table: &RouteTable) -> String {
  let report = validate_table(table);
  let locales: Vec<&str> = Locale::ALL.iter().map(|l| l.as_str()).collect();

  let mut out = String::new();
  out.push_str("# Localized path report\n\n");
  out.push_str("## Overview\n");
  out.push_str(&format!("- Pages: {}\n", report.route_count));
  out.push_str(&format!("- Paths: {}\n", report.template_count));
  out.push_str(&format!("- Locales: {}\n\n", locales.join(", ")));
  out.push_str("## Validation\n");
  out.push_str(&format!("- Valid: {}\n", if report.is_valid() { "yes" } else { "no" }));
  out.push_str(&format!("- Errors: {}\n", report.errors.len()));
  out.push_str(&format!("- Warnings: {}\n", report.warnings.len()));

  if !report.errors.is_empty() {
    out.push_str("\n## Errors\n");
    for e in &report.errors {
      out.push_str(&format!("- {e}\n"));
    }
  }
  if !report.warnings.is_empty() {
    out.push_str("\n## Warnings\n");
    for w in &report.warnings {
      out.push_str(&format!("- {w}\n"));
    }
  }

  out.push_str("\n## Paths\n");
  for route in table.routes() {
    out.push_str(&format!("\n### {}\n", route.key));
    for (locale, template) in route.templates {
      out.push_str(&format!("- {locale}: {template}\n"));
    }
  }
  out
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn builtin_table_is_valid() {
    let report = validate_table(&RouteTable::builtin());
    assert!(report.is_valid(), "{:?}", report.errors);
    // home is "/" in both locales
    assert_eq!(report.warnings, vec!["Duplicate paths found for page home: /".to_string()]);
  }

  #[test]
  fn every_route_has_every_locale() {
    for route in RouteTable::builtin().routes() {
      for locale in Locale::ALL {
        assert!(route.templates.iter().any(|(l, _)| *l == locale), "{} {locale}", route.key);
      }
    }
  }

  #[test]
  fn missing_locale_is_an_error() {
    static BROKEN: &[RouteDef] = &[RouteDef { key: "faq", templates: &[(Locale::En, "/faq")] }];
    let report = validate_table(&RouteTable::new(BROKEN));
    assert_eq!(report.errors, vec!["Missing es path for page: faq".to_string()]);
  }

  #[test]
  fn placeholder_mismatch_is_an_error() {
    static BROKEN: &[RouteDef] = &[RouteDef {
      key: "news-detail",
      templates: &[(Locale::En, "/news/{id}"), (Locale::Es, "/noticias/{slug}")],
    }];
    let report = validate_table(&RouteTable::new(BROKEN));
    assert_eq!(report.errors.len(), 1);
    assert!(report.errors[0].starts_with("Placeholder mismatch for page news-detail"));
  }

  #[test]
  fn template_fallback_to_default_locale() {
    static PARTIAL: &[RouteDef] =
      &[RouteDef { key: "careers", templates: &[(Locale::En, "/careers")] }];
    let table = RouteTable::new(PARTIAL);
    assert_eq!(table.get("careers").and_then(|r| r.template(Locale::Es)), Some("/careers"));
  }

  #[test]
  fn placeholders_in_order() {
    assert_eq!(placeholders("/a/{x}/b/{y}"), vec!["x", "y"]);
    assert!(placeholders("/about").is_empty());
    assert!(placeholders("/broken/{x").is_empty());
  }

  #[test]
  fn params_overwrite_in_place() {
    let params = RouteParams::new().with("slug", "a").with("id", "1").with("slug", "b");
    let pairs: Vec<_> = params.iter().collect();
    assert_eq!(pairs, vec![("slug", "b"), ("id", "1")]);
  }

  #[test]
  fn report_lists_every_route() {
    let report = path_report(&RouteTable::builtin());
    assert!(report.contains("- Valid: yes"));
    assert!(report.contains("### articles-hub-detail"));
    assert!(report.contains("- es: /articulos/temas/{slug}"));
  }
}
