//! Wire types for a fetched starter list.
//!
//! The upstream service is loose about number typing: start numbers,
//! competition numbers, and judge positions arrive as integers or strings
//! depending on the endpoint. [`NumberOrText`] absorbs that at the
//! deserialization boundary so the engine never re-guesses.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Errors that can occur while loading a starter list record.
///
/// Structural malformation is the one hard failure the engine surfaces;
/// everything downstream degrades instead of erroring.
#[derive(Debug, thiserror::Error)]
pub enum RecordError {
    #[error("invalid starter list JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// A value the service delivers as either a number or free text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NumberOrText {
    Number(i64),
    Text(String),
}

impl NumberOrText {
    /// The value as an integer, if the whole text parses as one.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Self::Number(n) => Some(*n),
            Self::Text(s) => s.trim().parse().ok(),
        }
    }

    /// The leading digit run as an integer (`"14start"` → 14).
    pub fn leading_int(&self) -> Option<i64> {
        match self {
            Self::Number(n) => Some(*n),
            Self::Text(s) => {
                let trimmed = s.trim_start_matches(|c: char| !c.is_ascii_digit());
                let digits: String = trimmed.chars().take_while(char::is_ascii_digit).collect();
                digits.parse().ok()
            }
        }
    }

    /// The raw join key, used where the service correlates by value
    /// regardless of its wire type.
    pub fn key(&self) -> String {
        match self {
            Self::Number(n) => n.to_string(),
            Self::Text(s) => s.trim().to_string(),
        }
    }
}

impl fmt::Display for NumberOrText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

/// One fetched starter list, the engine's sole input.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StarterListRecord {
    pub show: Show,
    pub competition: Competition,
    pub starters: Vec<StarterEntry>,
    pub breaks: Vec<BreakEntry>,
    pub dressage_tests: Vec<DressageTest>,
    pub round_number: Option<u32>,

    // Presentation parameters, opaque to the engine and passed through.
    pub spacing_top_cm: Option<f64>,
    pub spacing_bottom_cm: Option<f64>,
    pub logo_max_width_cm: Option<f64>,
}

impl StarterListRecord {
    /// Deserialize a record from JSON.
    ///
    /// This is the structural-validity gate: a record that does not parse
    /// here cannot produce a meaningful partial document.
    pub fn from_json(json: &str) -> Result<Self, RecordError> {
        Ok(serde_json::from_str(json)?)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Show {
    pub title: String,
    pub number: Option<NumberOrText>,
    pub start: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Competition {
    pub number: Option<NumberOrText>,
    pub title: String,
    pub subtitle: String,
    pub information_text: String,
    pub location: String,
    pub start: Option<String>,
    pub division_number: Option<NumberOrText>,
    pub divisions: Vec<Division>,
    pub judges: Vec<JudgeEntry>,
    pub judging_rule: String,
}

/// A per-division start-time override.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Division {
    pub number: Option<i64>,
    pub start: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StarterEntry {
    /// Display key and break-join key.
    pub start_number: Option<NumberOrText>,
    pub start_time: Option<String>,
    /// `None` or ≤0 means ungrouped. Where present and >0, values are
    /// non-decreasing across the sequence: groups are contiguous blocks.
    pub group_number: Option<i64>,
    pub withdrawn: bool,
    pub hors_concours: bool,
    pub athlete: Athlete,
    pub horses: Vec<Horse>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Athlete {
    pub name: String,
    pub club: String,
    pub nation: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Horse {
    /// Head number ("Kopfnummer").
    pub cno: Option<NumberOrText>,
    pub name: String,
    pub studbook: String,
    /// Birth year; arrives as number or string.
    pub breeding_season: Option<NumberOrText>,
    pub color: String,
    pub sex: String,
    pub sire: String,
    pub dam_sire: String,
    pub owner: String,
    pub breeder: String,
}

/// A scheduled gap in the running order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BreakEntry {
    /// `None` means unanchored. 0 is a real value: "before the first
    /// starter". The two must never be conflated.
    pub after_number_in_competition: Option<NumberOrText>,
    pub total_seconds: i64,
    pub information_text: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct JudgeEntry {
    /// Integer arena-letter code (0–11) or a literal like `WARM_UP_AREA`.
    pub position: Option<NumberOrText>,
    pub name: String,
}

/// An auxiliary test definition; pairs judge positions with a task name.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DressageTest {
    pub name: String,
    pub judge_positions: Vec<NumberOrText>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn number_or_text_parses_both_wire_forms() {
        let n: NumberOrText = serde_json::from_str("7").unwrap();
        assert_eq!(n.as_int(), Some(7));
        let t: NumberOrText = serde_json::from_str("\"7\"").unwrap();
        assert_eq!(t.as_int(), Some(7));
        assert_eq!(n.key(), t.key());
    }

    #[test]
    fn leading_int_extracts_digit_run() {
        assert_eq!(NumberOrText::Text("14start".into()).leading_int(), Some(14));
        assert_eq!(NumberOrText::Text("Abt. 5a".into()).leading_int(), Some(5));
        assert_eq!(NumberOrText::Text("none".into()).leading_int(), None);
        assert_eq!(NumberOrText::Number(9).leading_int(), Some(9));
    }

    #[test]
    fn record_deserializes_with_camel_case_keys() {
        let json = r#"{
            "show": {"title": "Turnier", "number": 123},
            "competition": {
                "number": "14start",
                "title": "Dressurprüfung Kl. A",
                "judgingRule": "402.C",
                "divisions": [{"number": 1, "start": "2025-09-06T08:00:00"}]
            },
            "starters": [{
                "startNumber": "12",
                "groupNumber": 1,
                "horsConcours": true,
                "athlete": {"name": "A. Rider", "nation": "GER"},
                "horses": [{"name": "Fidelio", "breedingSeason": "2014"}]
            }],
            "breaks": [{"afterNumberInCompetition": 0, "totalSeconds": 600}]
        }"#;
        let record = StarterListRecord::from_json(json).unwrap();
        assert_eq!(record.competition.number.unwrap().leading_int(), Some(14));
        assert!(record.starters[0].hors_concours);
        assert_eq!(
            record.breaks[0].after_number_in_competition.as_ref().unwrap().as_int(),
            Some(0)
        );
    }

    #[test]
    fn malformed_record_is_a_hard_failure() {
        assert!(StarterListRecord::from_json("{\"starters\": 3}").is_err());
    }
}
