//! Progress levels.
//!
//! Levels are plain integers on the wire. [`ProgressLevel`] gives the five
//! conventional stages a name and a display label; [`infer_level`] guesses
//! a stage from carrier event text when the source has no numeric level.
//! Level 5 is "delivered", the same level the normalizer assigns to
//! synthesized delivery events and delivered flags.

use crate::types::{DEFAULT_LEVEL, DELIVERED_LABEL, DELIVERED_LEVEL};

/// The conventional delivery stages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ProgressLevel {
    Preparing = 1,
    PickedUp = 2,
    InTransit = 3,
    OutForDelivery = 4,
    Delivered = 5,
}

impl ProgressLevel {
    pub const ALL: [ProgressLevel; 5] = [
        ProgressLevel::Preparing,
        ProgressLevel::PickedUp,
        ProgressLevel::InTransit,
        ProgressLevel::OutForDelivery,
        ProgressLevel::Delivered,
    ];

    /// Stage for a wire level. Levels outside 1..=5 have no stage.
    pub fn from_level(level: i64) -> Option<Self> {
        Self::ALL.into_iter().find(|stage| stage.as_level() == level)
    }

    pub fn as_level(self) -> i64 {
        self as i64
    }

    /// Korean display label.
    pub fn label(self) -> &'static str {
        match self {
            ProgressLevel::Preparing => "배송준비중",
            ProgressLevel::PickedUp => "집화완료",
            ProgressLevel::InTransit => "배송중",
            ProgressLevel::OutForDelivery => "배송출발",
            ProgressLevel::Delivered => DELIVERED_LABEL,
        }
    }
}

impl std::fmt::Display for ProgressLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

const _: () = assert!(ProgressLevel::Delivered as i64 == DELIVERED_LEVEL);
const _: () = assert!(ProgressLevel::InTransit as i64 == DEFAULT_LEVEL);

// First matching group wins, so "접수완료" is a pickup, not a preparation,
// and "터미널도착" is still in transit.
const KEYWORDS: &[(ProgressLevel, &[&str])] = &[
    (
        ProgressLevel::Delivered,
        &["배송완료", "배달완료", "전달완료", "수취완료"],
    ),
    (
        ProgressLevel::OutForDelivery,
        &["배송출발", "배달출발", "배달배정", "배달준비"],
    ),
    (
        ProgressLevel::PickedUp,
        &["집화완료", "접수완료", "픽업", "접수"],
    ),
    (
        ProgressLevel::Preparing,
        &["상품준비", "출고준비", "인수대기"],
    ),
    (
        ProgressLevel::InTransit,
        &[
            "배송중", "이동중", "간선상차", "간선하차", "허브상차", "허브하차", "환적",
            "터미널상차", "터미널도착", "지점도착", "허브도착", "물류센터도착", "집화처리",
        ],
    ),
];

/// Guess a level from free-form event text. Whitespace is ignored;
/// unrecognised text is "in transit".
pub fn infer_level(text: &str) -> i64 {
    let folded: String = text.chars().filter(|c| !c.is_whitespace()).collect();
    KEYWORDS
        .iter()
        .find(|(_, words)| words.iter().any(|w| folded.contains(w)))
        .map(|(stage, _)| stage.as_level())
        .unwrap_or(DEFAULT_LEVEL)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::delivered("배송 완료", 5)]
    #[case::handed_over("고객 전달완료", 5)]
    #[case::out("배달출발", 4)]
    #[case::branch("서울 지점 도착", 3)]
    #[case::hub_unload("간선하차", 3)]
    #[case::receipt_done("접수완료", 2)]
    #[case::pickup("집화완료", 2)]
    #[case::preparing("상품준비중", 1)]
    #[case::transfer("환적", 3)]
    #[case::unknown("Arrived", 3)]
    #[case::empty("", 3)]
    fn keyword_inference(#[case] text: &str, #[case] expected: i64) {
        assert_eq!(infer_level(text), expected);
    }

    #[test]
    fn delivered_label_infers_delivered_level() {
        assert_eq!(infer_level(DELIVERED_LABEL), DELIVERED_LEVEL);
        assert_eq!(
            ProgressLevel::from_level(DELIVERED_LEVEL).map(ProgressLevel::label),
            Some(DELIVERED_LABEL)
        );
    }

    #[test]
    fn labels_round_trip_through_levels() {
        for stage in ProgressLevel::ALL {
            assert_eq!(ProgressLevel::from_level(stage.as_level()), Some(stage));
        }
        assert_eq!(ProgressLevel::from_level(0), None);
        assert_eq!(ProgressLevel::from_level(6), None);
        assert_eq!(ProgressLevel::from_level(3).unwrap().label(), "배송중");
    }
}
