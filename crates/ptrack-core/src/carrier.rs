//! Carrier alias resolution.
//!
//! Integrations name the same carrier as `CJ`, `cj_logistics`, `CJ 대한통운`
//! and so on. [`CarrierResolver`] maps all of those to one canonical display
//! name and lets anything it does not know through unchanged.
//!
//! Lookup is two-staged: first a folded key (upper-cased, whitespace,
//! underscores and hyphens removed), then the trimmed input verbatim. The
//! second stage catches table keys that folding would never produce, such
//! as Korean names containing spaces.

use regex::Regex;
use std::collections::HashMap;
use std::sync::OnceLock;

/// Built-in aliases. Keys are either folded codes or exact display names.
pub static BUILTIN_ALIASES: phf::Map<&'static str, &'static str> = phf::phf_map! {
    "CJ" => "CJ대한통운",
    "CJLOGISTICS" => "CJ대한통운",
    "CJ_LOGISTICS" => "CJ대한통운",
    "CJ대한통운" => "CJ대한통운",
    "LOTTE" => "롯데택배",
    "LOTTEGLOBAL" => "롯데택배",
    "롯데" => "롯데택배",
    "롯데택배" => "롯데택배",
    "HANJIN" => "한진택배",
    "한진" => "한진택배",
    "한진택배" => "한진택배",
    "KOREAPOST" => "우체국택배",
    "EPOST" => "우체국택배",
    "KOREA POST" => "우체국택배",
    "우체국" => "우체국택배",
    "우체국택배" => "우체국택배",
    "LOGEN" => "로젠택배",
    "로젠" => "로젠택배",
    "로젠택배" => "로젠택배",
};

fn separator_re() -> &'static Regex {
    static SEPARATOR_RE: OnceLock<Regex> = OnceLock::new();
    SEPARATOR_RE.get_or_init(|| Regex::new(r"[\s_-]+").expect("valid separator regex"))
}

/// Folded lookup key: upper-case with separator runs removed.
pub fn fold_key(raw: &str) -> String {
    separator_re()
        .replace_all(&raw.to_uppercase(), "")
        .into_owned()
}

/// Resolves raw carrier identifiers to canonical display names.
#[derive(Debug, Clone)]
pub struct CarrierResolver {
    builtin: &'static phf::Map<&'static str, &'static str>,
    extra: HashMap<String, String>,
}

impl Default for CarrierResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl CarrierResolver {
    /// Resolver over the built-in alias table only.
    pub fn new() -> Self {
        Self {
            builtin: &BUILTIN_ALIASES,
            extra: HashMap::new(),
        }
    }

    /// Resolver with additional aliases that take precedence over the
    /// built-in ones. Extra keys are stored both folded and verbatim so they
    /// follow the same two-stage lookup.
    pub fn with_aliases<I, K, V>(aliases: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut extra = HashMap::new();
        for (key, name) in aliases {
            let key = key.as_ref().trim();
            if key.is_empty() {
                continue;
            }
            let name = name.into();
            extra.insert(fold_key(key), name.clone());
            extra.insert(key.to_string(), name);
        }
        Self {
            builtin: &BUILTIN_ALIASES,
            extra,
        }
    }

    /// Canonical name for `raw`, or `raw` trimmed when unknown. Blank input
    /// yields `None`.
    pub fn resolve(&self, raw: &str) -> Option<String> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return None;
        }
        let key = fold_key(trimmed);
        let hit = self
            .lookup(&key)
            .or_else(|| self.lookup(trimmed))
            .unwrap_or(trimmed);
        Some(hit.to_string())
    }

    fn lookup(&self, key: &str) -> Option<&str> {
        self.extra
            .get(key)
            .map(String::as_str)
            .or_else(|| self.builtin.get(key).copied())
    }
}

/// Resolve with the built-in table only.
pub fn canonical_carrier_name(raw: &str) -> Option<String> {
    static DEFAULT: OnceLock<CarrierResolver> = OnceLock::new();
    DEFAULT.get_or_init(CarrierResolver::new).resolve(raw)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
