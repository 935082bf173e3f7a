//! Domestic carrier catalogue.
//!
//! A fixed list of carriers with the internal short code the storefront
//! stores, a display label and search aliases. This is the selection list
//! for outbound tracking requests; inbound payloads go through
//! [`CarrierResolver`](crate::CarrierResolver) instead.

use serde::Serialize;

/// One selectable carrier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CarrierInfo {
    /// Internal fixed code (upper-case short code).
    pub code: &'static str,
    pub label: &'static str,
    /// Lower-case search aliases (Korean, English, abbreviations).
    pub aliases: &'static [&'static str],
}

const fn carrier(
    code: &'static str,
    label: &'static str,
    aliases: &'static [&'static str],
) -> CarrierInfo {
    CarrierInfo { code, label, aliases }
}

pub static CARRIERS: &[CarrierInfo] = &[
    carrier("CJ", "CJ대한통운", &["cj", "cj대한통운", "cj logistics", "대한통운"]),
    carrier("LOTTE", "롯데택배", &["lotte", "롯데", "롯데글로벌로지스"]),
    carrier("HANJIN", "한진택배", &["hanjin", "한진"]),
    carrier("LOGEN", "로젠택배", &["logen", "로젠"]),
    carrier("EPOST", "우체국택배", &["epost", "우체국", "koreapost", "post"]),
    carrier("KD", "경동택배", &["kd", "경동"]),
    carrier("DAESIN", "대신택배", &["daesin", "대신"]),
    carrier("ILYANG", "일양로지스", &["ilyang", "일양"]),
    carrier("CHUNIL", "천일택배", &["chunil", "천일"]),
    carrier("HAPDONG", "합동택배", &["hapdong", "합동"]),
    carrier("GEONYOUNG", "건영택배", &["geonyoung", "건영"]),
    carrier("SEONGWON", "성원글로벌카고", &["seongwon", "성원글로벌"]),
    carrier("SLX", "SLX택배", &["slx"]),
    carrier("CVSNET", "CU편의점택배(CVSnet)", &["cvsnet", "cu편의점", "cu"]),
    carrier("GSPOST", "GS Postbox 택배", &["gspostbox", "gs25", "gs편의점"]),
    carrier("YONGMA", "용마로지스", &["yongma", "용마"]),
];

/// The catalogue sorted by label, for selection lists.
pub fn carrier_options() -> Vec<CarrierInfo> {
    let mut options = CARRIERS.to_vec();
    options.sort_by(|a, b| a.label.cmp(b.label));
    options
}

/// Display label for an exact code; unknown codes are echoed back.
pub fn carrier_label(code: &str) -> &str {
    CARRIERS
        .iter()
        .find(|c| c.code == code)
        .map(|c| c.label)
        .unwrap_or(code)
}

/// Find a carrier by code, label or alias, ignoring case and surrounding
/// whitespace. Matching is exact otherwise.
pub fn find_carrier(input: &str) -> Option<&'static CarrierInfo> {
    let q = input.trim().to_lowercase();
    if q.is_empty() {
        return None;
    }
    CARRIERS.iter().find(|c| {
        c.code.to_lowercase() == q
            || c.label.to_lowercase() == q
            || c.aliases.iter().any(|a| a.to_lowercase() == q)
    })
}

/// Strip a tracking number down to ASCII letters, digits and hyphens.
pub fn normalize_tracking_no(raw: &str) -> String {
    raw.chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '-')
        .collect()
}

/// Outbound body for a tracking lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackingRequest {
    pub carrier: String,
    pub tracking_no: String,
}

impl TrackingRequest {
    /// The tracking number is sanitised with [`normalize_tracking_no`]. An
    /// empty carrier code is kept as-is for the server to reject.
    pub fn new(carrier_code: impl Into<String>, tracking_no: &str) -> Self {
        Self {
            carrier: carrier_code.into(),
            tracking_no: normalize_tracking_no(tracking_no),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
