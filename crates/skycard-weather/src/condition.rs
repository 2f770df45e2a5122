use serde::{Deserialize, Serialize};

const SUN_KEYWORDS: &[&str] = &["güneş", "sun"];
const RAIN_KEYWORDS: &[&str] = &["yağmur", "rain"];
const SNOW_KEYWORDS: &[&str] = &["kar", "snow"];

/// Condition categories derived from a free-text description
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ConditionCategory {
    Sunny,
    Rainy,
    Snowy,
    #[default]
    Default,
}

impl ConditionCategory {
    pub const ALL: [ConditionCategory; 4] = [
        ConditionCategory::Sunny,
        ConditionCategory::Rainy,
        ConditionCategory::Snowy,
        ConditionCategory::Default,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Sunny => "sunny",
            Self::Rainy => "rainy",
            Self::Snowy => "snowy",
            Self::Default => "default",
        }
    }
}

/// Classify a weather description.
///
/// Keyword groups are checked sun, then rain, then snow; the first group
/// with a substring match wins, so "sunny with rain" is `Sunny`. Anything
/// without a match, including the empty string, is `Default`.
pub fn classify(description: &str) -> ConditionCategory {
    let text = description.to_lowercase();

    if contains_any(&text, SUN_KEYWORDS) {
        ConditionCategory::Sunny
    } else if contains_any(&text, RAIN_KEYWORDS) {
        ConditionCategory::Rainy
    } else if contains_any(&text, SNOW_KEYWORDS) {
        ConditionCategory::Snowy
    } else {
        ConditionCategory::Default
    }
}

fn contains_any(text: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|k| text.contains(*k))
}
