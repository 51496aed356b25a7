/* src/server/engine/rust/src/locale.rs */

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Supported site languages. `En` is the default content language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
  En,
  Es,
}

impl Locale {
  pub const ALL: [Locale; 2] = [Locale::En, Locale::Es];
  pub const DEFAULT: Locale = Locale::En;

  pub fn as_str(self) -> &'static str {
    match self {
      Self::En => "en",
      Self::Es => "es",
    }
  }

  /// Parse a locale tag, degrading to the default locale for anything unknown.
  /// Region subtags are ignored (`es-MX` -> `es`).
  pub fn parse_or_default(tag: Option<&str>) -> Locale {
    tag.and_then(|t| t.parse().ok()).unwrap_or(Self::DEFAULT)
  }
}

impl Default for Locale {
  fn default() -> Self {
    Self::DEFAULT
  }
}

impl fmt::Display for Locale {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownLocale(pub String);

impl fmt::Display for UnknownLocale {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "unsupported locale \"{}\"", self.0)
  }
}

impl std::error::Error for UnknownLocale {}

impl FromStr for Locale {
  type Err = UnknownLocale;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    let tag = s.trim();
    let primary = tag.split(['-', '_']).next().unwrap_or("").to_ascii_lowercase();
    match primary.as_str() {
      "en" => Ok(Self::En),
      "es" => Ok(Self::Es),
      _ => Err(UnknownLocale(tag.to_string())),
    }
  }
}

/// Single locale fallback policy for every locale-keyed table:
/// requested locale, then the default locale, then nothing.
pub fn pick<T>(table: &[(Locale, T)], locale: Locale) -> Option<&T> {
  table
    .iter()
    .find(|(l, _)| *l == locale)
    .or_else(|| table.iter().find(|(l, _)| *l == Locale::DEFAULT))
    .map(|(_, v)| v)
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn parses_known_tags() {
    assert_eq!("en".parse::<Locale>(), Ok(Locale::En));
    assert_eq!("ES".parse::<Locale>(), Ok(Locale::Es));
    assert_eq!("es-MX".parse::<Locale>(), Ok(Locale::Es));
    assert_eq!("en_GB".parse::<Locale>(), Ok(Locale::En));
  }

  #[test]
  fn rejects_unknown_tag() {
    assert_eq!("fr".parse::<Locale>(), Err(UnknownLocale("fr".into())));
  }

  #[test]
  fn unknown_degrades_to_default() {
    assert_eq!(Locale::parse_or_default(Some("zh")), Locale::En);
    assert_eq!(Locale::parse_or_default(None), Locale::En);
    assert_eq!(Locale::parse_or_default(Some("es")), Locale::Es);
  }

  #[test]
  fn pick_prefers_requested_locale() {
    let table = [(Locale::En, "Home"), (Locale::Es, "Inicio")];
    assert_eq!(pick(&table, Locale::Es), Some(&"Inicio"));
  }

  #[test]
  fn pick_falls_back_to_default() {
    let table = [(Locale::En, "Home")];
    assert_eq!(pick(&table, Locale::Es), Some(&"Home"));
  }

  #[test]
  fn pick_without_default_entry() {
    let table = [(Locale::Es, "Inicio")];
    assert_eq!(pick(&table, Locale::En), None);
  }

  #[test]
  fn serializes_lowercase() {
    assert_eq!(serde_json::to_value(Locale::Es).unwrap(), serde_json::json!("es"));
  }
}
