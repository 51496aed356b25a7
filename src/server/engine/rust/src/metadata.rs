/* src/server/engine/rust/src/metadata.rs */

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::locale::{Locale, pick};
use crate::routes::RouteParams;
use crate::urls::{HreflangAlternates, SiteUrls};

pub const SITE_NAME: &str = "Yanghua";
pub const MAX_TITLE_CHARS: usize = 60;
pub const MAX_DESCRIPTION_CHARS: usize = 160;

const DEFAULT_TITLE: &[(Locale, &str)] = &[
  (Locale::En, "Yanghua Cable - Professional Cable Solutions"),
  (Locale::Es, "Yanghua Cable - Soluciones Profesionales de Cable"),
];

const DEFAULT_DESCRIPTION: &[(Locale, &str)] = &[
  (
    Locale::En,
    "Leading manufacturer of high-quality cables and electrical solutions for industrial and commercial applications.",
  ),
  (
    Locale::Es,
    "Fabricante líder de cables de alta calidad y soluciones eléctricas para aplicaciones industriales y comerciales.",
  ),
];

struct SectionCopy {
  key: &'static str,
  titles: &'static [(Locale, &'static str)],
  descriptions: &'static [(Locale, &'static str)],
}

const SECTIONS: &[SectionCopy] = &[
  SectionCopy {
    key: "products",
    titles: &[
      (Locale::En, "Flexible Copper Busbar Products | Yanghua"),
      (Locale::Es, "Productos de Barra Colectora de Cobre Flexible | Yanghua"),
    ],
    descriptions: &[
      (
        Locale::En,
        "Explore Yanghua's flexible busbar portfolio: 200-6300A, up to 3kV, XLPE/PVC insulation, high protection level for industrial and outdoor environments.",
      ),
      (
        Locale::Es,
        "Descubra el portafolio de barras colectoras flexibles de Yanghua: 200-6300A, hasta 3kV, aislamiento XLPE/PVC y alta protección para aplicaciones industriales y exteriores.",
      ),
    ],
  },
  SectionCopy {
    key: "solutions",
    titles: &[
      (Locale::En, "Flexible Busbar Solutions for Data Centers, EV & Industry | Yanghua"),
      (
        Locale::Es,
        "Soluciones de Barras Colectoras para Centros de Datos, EV e Industria | Yanghua",
      ),
    ],
    descriptions: &[
      (
        Locale::En,
        "Reliable flexible busbar solutions for demanding applications: data centers, EV power modules, and industrial automation with high safety and low loss.",
      ),
      (
        Locale::Es,
        "Soluciones fiables de barras colectoras flexibles para aplicaciones exigentes: centros de datos, módulos EV y automatización industrial con alta seguridad y baja pérdida.",
      ),
    ],
  },
  SectionCopy {
    key: "articles",
    titles: &[
      (Locale::En, "Flexible Busbar Blog & Resources | Design, Comparisons & FAQs | Yanghua"),
      (
        Locale::Es,
        "Blog y Recursos de Barras Colectoras Flexibles | Diseño, Comparativas y FAQs | Yanghua",
      ),
    ],
    descriptions: &[
      (
        Locale::En,
        "Technical articles and resources on flexible busbar design, materials, standards, installation, and comparisons with traditional solutions.",
      ),
      (
        Locale::Es,
        "Artículos y recursos técnicos sobre diseño de barras colectoras flexibles, materiales, normas, instalación y comparativas con soluciones tradicionales.",
      ),
    ],
  },
];

static TAG_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]*>").expect("valid regex"));
static SPACE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").expect("valid regex"));

/// Remove HTML tags and collapse whitespace.
pub fn strip_html(html: &str) -> String {
  let text = TAG_RE.replace_all(html, "");
  SPACE_RE.replace_all(&text, " ").trim().to_string()
}

/// Cut to at most `max` chars on a char boundary.
pub fn truncate_chars(text: &str, max: usize) -> String {
  match text.char_indices().nth(max) {
    Some((idx, _)) => text[..idx].trim_end().to_string(),
    None => text.to_string(),
  }
}

/// Page-provided copy; absent fields fall back to section or site defaults.
#[derive(Debug, Default, Clone, Copy)]
pub struct PageContent<'a> {
  pub title: Option<&'a str>,
  pub description: Option<&'a str>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageMetadata {
  pub title: String,
  pub description: String,
  pub locale: Locale,
  pub path: String,
  pub canonical: String,
  pub alternates: HreflangAlternates,
}

impl PageMetadata {
  /// Metadata owned by the leaf page of `route_key`. Never fails: missing
  /// copy degrades to defaults, missing params to empty segments.
  pub fn for_route(
    urls: &SiteUrls,
    route_key: &str,
    locale: Locale,
    params: Option<&RouteParams>,
    content: PageContent<'_>,
  ) -> Self {
    let path = urls.localized_path(route_key, locale, params);
    let canonical = urls.canonical_url(&path, locale);
    let alternates = urls.route_alternates(route_key, params);
    let section = SECTIONS.iter().find(|s| s.key == route_key);

    let title = match content.title.map(str::trim).filter(|t| !t.is_empty()) {
      Some(t) => truncate_chars(&format!("{t} | {SITE_NAME}"), MAX_TITLE_CHARS),
      None => section
        .and_then(|s| pick(s.titles, locale))
        .or_else(|| pick(DEFAULT_TITLE, locale))
        .map(|s| s.to_string())
        .unwrap_or_default(),
    };

    let description = match content.description.map(strip_html).filter(|d| !d.is_empty()) {
      Some(d) => truncate_chars(&d, MAX_DESCRIPTION_CHARS),
      None => section
        .and_then(|s| pick(s.descriptions, locale))
        .or_else(|| pick(DEFAULT_DESCRIPTION, locale))
        .map(|s| s.to_string())
        .unwrap_or_default(),
    };

    Self { title, description, locale, path, canonical, alternates }
  }
}

/// Hreflang alternates emitted by a section layout.
///
/// A layout wrapping a dynamic detail route (`id` or `name` param present)
/// returns an empty set; the detail page owns its canonical and alternates.
pub fn layout_alternates(
  urls: &SiteUrls,
  route_key: &str,
  params: Option<&RouteParams>,
) -> HreflangAlternates {
  if params.is_some_and(|p| p.contains("id") || p.contains("name")) {
    return HreflangAlternates::empty();
  }
  urls.route_alternates(route_key, None)
}

#[cfg(test)]
mod tests;
